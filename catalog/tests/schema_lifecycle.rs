use std::sync::Arc;

use catalog::error::CatalogError;
use catalog::service_mock::MockCatalogService;
use catalog::CatalogClient;
use config::ClientConfig;
use futures::TryStreamExt;
use models::ObjectRef;
use serial_test::serial;

fn client(schema_syntax: bool) -> (Arc<MockCatalogService>, CatalogClient) {
    let mock = Arc::new(MockCatalogService::new(schema_syntax));
    let config = ClientConfig::new("p1", "http://127.0.0.1:8902");
    (mock.clone(), CatalogClient::with_service(config, mock))
}

#[tokio::test]
async fn test_create_exists_delete_roundtrip() {
    let (_mock, client) = client(true);
    let schemas = client.schemas();

    assert!(!schemas.exists("sales").await.unwrap());

    let created = schemas.create("sales", Some("quarterly data")).await.unwrap();
    assert_eq!(created.name(), "sales");
    assert_eq!(created.comment(), Some("quarterly data"));
    assert!(schemas.exists("sales").await.unwrap());

    let fetched = schemas.get("sales").await.unwrap();
    assert_eq!(fetched, created);

    schemas.delete("sales").await.unwrap();
    assert!(!schemas.exists("sales").await.unwrap());

    let err = schemas.delete("sales").await.unwrap_err();
    assert!(matches!(err, CatalogError::SchemaNotFound { .. }));
}

#[tokio::test]
async fn test_create_duplicate_leaves_original_untouched() {
    let (_mock, client) = client(true);
    let schemas = client.schemas();

    let original = schemas.create("sales", None).await.unwrap();

    let err = schemas.create("sales", Some("other")).await.unwrap_err();
    assert!(matches!(err, CatalogError::SchemaAlreadyExists { .. }));

    let fetched = schemas.get("sales").await.unwrap();
    assert_eq!(fetched.owner(), original.owner());
    assert_eq!(fetched.create_time(), original.create_time());
    assert_eq!(fetched.comment(), None);
}

#[tokio::test]
async fn test_delete_non_empty_is_rejected() {
    let (mock, client) = client(true);
    let schemas = client.schemas();

    schemas.create("busy", None).await.unwrap();
    mock.mark_non_empty("busy");

    let err = schemas.delete("busy").await.unwrap_err();
    assert!(matches!(err, CatalogError::SchemaNotEmpty { .. }));
    assert!(schemas.exists("busy").await.unwrap());
}

#[tokio::test]
async fn test_list_returns_remote_order() {
    let (_mock, client) = client(true);
    let schemas = client.schemas();

    for name in ["zeta", "alpha", "mid"] {
        schemas.create(name, None).await.unwrap();
    }

    let names: Vec<String> = schemas
        .list()
        .map_ok(|s| s.name().to_string())
        .try_collect()
        .await
        .unwrap();
    assert_eq!(names, ["zeta", "alpha", "mid"]);
}

// Global flags are process-wide, so tests touching them are serialized and
// restore the defaults before returning.

#[tokio::test]
#[serial]
async fn test_resolution_through_entry_point() {
    let (mock, client) = client(true);
    config::set_enable_schema(false);
    config::set_always_enable_schema(false);

    // Tenant capability decides; exactly one probe, then cache hits.
    let r = client.resolve_object("myschema.mytable", None).await.unwrap();
    assert_eq!(r, ObjectRef::new("p1", "myschema", "mytable"));
    assert_eq!(mock.probe_count(), 1);

    let r = client.resolve_object("myschema.mytable", None).await.unwrap();
    assert_eq!(r, ObjectRef::new("p1", "myschema", "mytable"));
    assert_eq!(mock.probe_count(), 1);

    // Per-call override beats everything and is probe-free.
    let r = client.resolve_object("t", Some("s9")).await.unwrap();
    assert_eq!(r, ObjectRef::new("p1", "s9", "t"));
    assert_eq!(mock.probe_count(), 1);
}

#[tokio::test]
#[serial]
async fn test_global_enable_schema_short_circuits() {
    let (mock, client) = client(false);
    config::set_enable_schema(true);

    let r = client.resolve_object("s.t", None).await.unwrap();
    assert_eq!(r, ObjectRef::new("p1", "s", "t"));
    assert_eq!(mock.probe_count(), 0);

    config::set_enable_schema(false);
}

#[tokio::test]
#[serial]
async fn test_session_default_schema_applies_to_bare_names() {
    let mock = Arc::new(MockCatalogService::new(true));
    let config = ClientConfig::new("p1", "http://127.0.0.1:8902").with_schema("sess");
    let client = CatalogClient::with_service(config, mock.clone());

    let r = client.resolve_object("t", None).await.unwrap();
    assert_eq!(r, ObjectRef::new("p1", "sess", "t"));
    assert_eq!(mock.probe_count(), 0);
}

#[tokio::test]
#[serial]
async fn test_legacy_project_ignores_flags() {
    let mock = Arc::new(MockCatalogService::new(true));
    let config = ClientConfig::new("p1", "http://127.0.0.1:8902").with_schema_support(false);
    let client = CatalogClient::with_service(config, mock.clone());

    config::set_enable_schema(true);
    config::set_always_enable_schema(true);

    let r = client.resolve_object("x.t", None).await.unwrap();
    assert_eq!(r, ObjectRef::new("x", models::DEFAULT_SCHEMA, "t"));
    assert_eq!(mock.probe_count(), 0);

    config::set_enable_schema(false);
    config::set_always_enable_schema(false);
}
