use std::sync::Arc;

use config::ClientConfig;
use models::ObjectRef;

use crate::capability::CapabilityProber;
use crate::context::ResolutionContext;
use crate::error::CatalogResult;
use crate::resolver::NameResolver;
use crate::schemas::Schemas;
use crate::service::{CatalogService, RemoteCatalogService};

pub mod capability;
pub mod client;
pub mod command;
pub mod context;
pub mod error;
pub mod resolver;
pub mod schemas;
pub mod service;
pub mod service_mock;

pub type CatalogServiceRef = Arc<dyn CatalogService>;

/// Client entry point, bound to one project on one endpoint.
#[derive(Debug)]
pub struct CatalogClient {
    config: ClientConfig,
    service: CatalogServiceRef,
    resolver: NameResolver,
}

impl CatalogClient {
    pub fn new(config: ClientConfig) -> Self {
        let service: CatalogServiceRef = Arc::new(RemoteCatalogService::new(config.endpoint.as_str()));
        Self::with_service(config, service)
    }

    /// Build on an alternative transport (tests, instrumentation).
    pub fn with_service(config: ClientConfig, service: CatalogServiceRef) -> Self {
        let prober = Arc::new(CapabilityProber::new(service.clone()));
        let resolver = NameResolver::new(config.project.clone(), prober);

        Self {
            config,
            service,
            resolver,
        }
    }

    pub fn project(&self) -> &str {
        &self.config.project
    }

    pub fn default_schema(&self) -> Option<&str> {
        self.config.schema.as_deref()
    }

    /// The schema directory for this client's project.
    pub fn schemas(&self) -> Schemas {
        Schemas::new(self.config.project.clone(), self.service.clone())
    }

    /// Resolve an object-addressing name. `schema` is the optional per-call
    /// override accepted by table/resource/function lookups; it maps to the
    /// explicit schema of the resolution context for this call only.
    pub async fn resolve_object(
        &self,
        raw: &str,
        schema: Option<&str>,
    ) -> CatalogResult<ObjectRef> {
        let ctx = ResolutionContext::build(&self.config, schema);
        self.resolver.resolve(raw, &ctx).await
    }
}
