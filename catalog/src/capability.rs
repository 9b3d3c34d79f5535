use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::OnceCell;
use tracing::debug;

use crate::error::CatalogResult;
use crate::service::CatalogService;

/// Caches whether the tenant has the schema syntax capability, keyed by
/// project. Entries are created on first use and never invalidated for the
/// life of the process; tenant capability is not expected to change within a
/// running process.
#[derive(Debug)]
pub struct CapabilityProber {
    service: Arc<dyn CatalogService>,
    cache: Mutex<HashMap<String, Arc<OnceCell<bool>>>>,
}

impl CapabilityProber {
    pub fn new(service: Arc<dyn CatalogService>) -> Self {
        Self {
            service,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// At most one probe is in flight per project; concurrent callers for the
    /// same uncached project wait for its result, and the result is written
    /// exactly once. Transport errors propagate unchanged and leave the entry
    /// unpopulated.
    pub async fn has_schema_syntax(&self, project: &str) -> CatalogResult<bool> {
        let cell = {
            let mut cache = self.cache.lock();
            cache.entry(project.to_string()).or_default().clone()
        };

        let enabled = cell
            .get_or_try_init(|| async {
                debug!("probing schema syntax capability, project: {}", project);
                self.service.schema_syntax(project).await
            })
            .await?;

        Ok(*enabled)
    }
}
