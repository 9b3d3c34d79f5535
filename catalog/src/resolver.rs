use std::sync::Arc;

use models::{ObjectRef, QualifiedName, DEFAULT_SCHEMA};
use tracing::debug;

use crate::capability::CapabilityProber;
use crate::context::ResolutionContext;
use crate::error::{CatalogError, CatalogResult};

/// Decides the `(project, schema, object)` triple for a raw identifier.
///
/// Resolution is a pure function of the name and the context, except for one
/// cached capability probe when a two-part name is otherwise ambiguous.
#[derive(Debug, Clone)]
pub struct NameResolver {
    project: String,
    prober: Arc<CapabilityProber>,
}

impl NameResolver {
    pub fn new(project: impl Into<String>, prober: Arc<CapabilityProber>) -> Self {
        Self {
            project: project.into(),
            prober,
        }
    }

    pub async fn resolve(&self, raw: &str, ctx: &ResolutionContext) -> CatalogResult<ObjectRef> {
        match QualifiedName::parse(raw)? {
            // Explicit cross-project reference, taken as-is.
            QualifiedName::Full {
                project,
                schema,
                object,
            } => Ok(ObjectRef {
                project,
                schema,
                object,
            }),

            QualifiedName::Bare { object } => {
                let schema = ctx
                    .explicit_schema
                    .clone()
                    .or_else(|| ctx.session_default_schema.clone())
                    .unwrap_or_else(|| DEFAULT_SCHEMA.to_string());

                Ok(ObjectRef::new(self.project.clone(), schema, object))
            }

            QualifiedName::Partial { first, object } => {
                self.resolve_partial(raw, first, object, ctx).await
            }
        }
    }

    async fn resolve_partial(
        &self,
        raw: &str,
        first: String,
        object: String,
        ctx: &ResolutionContext,
    ) -> CatalogResult<ObjectRef> {
        if let Some(schema) = &ctx.explicit_schema {
            // With an explicit schema the two-part form is always relative to
            // the current project; a foreign prefix is inconsistent.
            if first != self.project {
                return Err(CatalogError::AmbiguousIdentifier {
                    name: raw.to_string(),
                    project: self.project.clone(),
                });
            }

            return Ok(ObjectRef::new(self.project.clone(), schema.clone(), object));
        }

        if !ctx.schema_support {
            // Legacy projects address objects directly.
            return Ok(ObjectRef::new(first, DEFAULT_SCHEMA, object));
        }

        if ctx.enable_schema || ctx.always_enable_schema {
            return Ok(ObjectRef::new(self.project.clone(), first, object));
        }

        if self.prober.has_schema_syntax(&self.project).await? {
            Ok(ObjectRef::new(self.project.clone(), first, object))
        } else {
            debug!("tenant has no schema syntax, '{}' taken as project.object", raw);
            Ok(ObjectRef::new(first, DEFAULT_SCHEMA, object))
        }
    }
}
