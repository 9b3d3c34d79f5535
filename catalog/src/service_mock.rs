use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use models::Schema;
use parking_lot::RwLock;

use crate::command::SchemaPage;
use crate::error::{CatalogError, CatalogResult};
use crate::service::CatalogService;

pub const MOCK_OWNER: &str = "mock_owner";

/// In-memory catalog service for tests. Counts capability probes and page
/// fetches so callers can assert on remote traffic.
#[derive(Debug)]
pub struct MockCatalogService {
    schema_syntax: bool,
    page_size: usize,
    schemas: RwLock<Vec<Schema>>,
    non_empty: RwLock<HashSet<String>>,
    probe_count: AtomicUsize,
    probe_failures: AtomicUsize,
    page_calls: AtomicUsize,
}

impl MockCatalogService {
    pub fn new(schema_syntax: bool) -> Self {
        Self {
            schema_syntax,
            page_size: 2,
            schemas: RwLock::new(vec![]),
            non_empty: RwLock::new(HashSet::new()),
            probe_count: AtomicUsize::new(0),
            probe_failures: AtomicUsize::new(0),
            page_calls: AtomicUsize::new(0),
        }
    }

    /// Makes the next `count` capability probes fail with a transport-style
    /// error, the way a flaky remote service would.
    pub fn fail_probes(&self, count: usize) {
        self.probe_failures.store(count, Ordering::SeqCst);
    }

    pub fn probe_count(&self) -> usize {
        self.probe_count.load(Ordering::SeqCst)
    }

    pub fn page_calls(&self) -> usize {
        self.page_calls.load(Ordering::SeqCst)
    }

    /// Makes a later `drop_schema` for `name` fail as non-empty, the way the
    /// remote service rejects deleting a schema that still holds objects.
    pub fn mark_non_empty(&self, name: &str) {
        self.non_empty.write().insert(name.to_string());
    }
}

#[async_trait]
impl CatalogService for MockCatalogService {
    async fn schema_syntax(&self, _project: &str) -> CatalogResult<bool> {
        self.probe_count.fetch_add(1, Ordering::SeqCst);

        if self
            .probe_failures
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
        {
            return Err(CatalogError::CommonError {
                msg: "capability probe failed".to_string(),
            });
        }

        Ok(self.schema_syntax)
    }

    async fn get_schema(&self, _project: &str, name: &str) -> CatalogResult<Option<Schema>> {
        Ok(self
            .schemas
            .read()
            .iter()
            .find(|s| s.name() == name)
            .cloned())
    }

    async fn create_schema(
        &self,
        _project: &str,
        name: &str,
        comment: Option<String>,
    ) -> CatalogResult<Schema> {
        let mut schemas = self.schemas.write();
        if schemas.iter().any(|s| s.name() == name) {
            return Err(CatalogError::SchemaAlreadyExists {
                schema: name.to_string(),
            });
        }

        let schema = Schema::new(name.to_string(), MOCK_OWNER.to_string(), comment, Utc::now());
        schemas.push(schema.clone());

        Ok(schema)
    }

    async fn drop_schema(&self, _project: &str, name: &str) -> CatalogResult<()> {
        if self.non_empty.read().contains(name) {
            return Err(CatalogError::SchemaNotEmpty {
                schema: name.to_string(),
            });
        }

        let mut schemas = self.schemas.write();
        match schemas.iter().position(|s| s.name() == name) {
            Some(index) => {
                schemas.remove(index);
                Ok(())
            }
            None => Err(CatalogError::SchemaNotFound {
                schema: name.to_string(),
            }),
        }
    }

    async fn list_schemas(
        &self,
        _project: &str,
        marker: Option<String>,
    ) -> CatalogResult<SchemaPage> {
        self.page_calls.fetch_add(1, Ordering::SeqCst);

        let start: usize = match marker {
            Some(m) => m.parse().map_err(|_| CatalogError::CommonError {
                msg: format!("bad marker: {}", m),
            })?,
            None => 0,
        };

        let schemas = self.schemas.read();
        let end = (start + self.page_size).min(schemas.len());
        let items = schemas[start..end].to_vec();
        let next_marker = if end < schemas.len() {
            Some(end.to_string())
        } else {
            None
        };

        Ok(SchemaPage { items, next_marker })
    }
}
