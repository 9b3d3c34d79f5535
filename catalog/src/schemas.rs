use std::sync::Arc;

use futures::stream::{self, BoxStream, StreamExt, TryStreamExt};
use models::Schema;

use crate::error::{CatalogError, CatalogResult};
use crate::service::CatalogService;

/// Schema directory scoped to a single project.
///
/// All operations go straight to the remote service; errors are surfaced
/// verbatim and never retried here.
#[derive(Debug, Clone)]
pub struct Schemas {
    project: String,
    service: Arc<dyn CatalogService>,
}

impl Schemas {
    pub fn new(project: String, service: Arc<dyn CatalogService>) -> Self {
        Self { project, service }
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    /// Never errors for a missing schema; returns `false`.
    pub async fn exists(&self, name: &str) -> CatalogResult<bool> {
        Ok(self.service.get_schema(&self.project, name).await?.is_some())
    }

    pub async fn create(&self, name: &str, comment: Option<&str>) -> CatalogResult<Schema> {
        self.service
            .create_schema(&self.project, name, comment.map(str::to_string))
            .await
    }

    pub async fn delete(&self, name: &str) -> CatalogResult<()> {
        self.service.drop_schema(&self.project, name).await
    }

    pub async fn get(&self, name: &str) -> CatalogResult<Schema> {
        self.service
            .get_schema(&self.project, name)
            .await?
            .ok_or_else(|| CatalogError::SchemaNotFound {
                schema: name.to_string(),
            })
    }

    /// Lazy enumeration of the project's schemas, in remote order. Each call
    /// starts a fresh enumeration; pages are fetched as the stream is polled.
    pub fn list(&self) -> BoxStream<'static, CatalogResult<Schema>> {
        let state = (self.service.clone(), self.project.clone(), None, false);

        stream::try_unfold(state, |(service, project, marker, done)| async move {
            if done {
                return Ok::<_, CatalogError>(None);
            }

            let page = service.list_schemas(&project, marker).await?;
            let done = page.next_marker.is_none();
            let next = page.next_marker.clone();

            Ok(Some((page.items, (service, project, next, done))))
        })
        .map_ok(|items| stream::iter(items.into_iter().map(Ok)))
        .try_flatten()
        .boxed()
    }
}
