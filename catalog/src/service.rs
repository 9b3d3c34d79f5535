use std::fmt::Debug;

use async_trait::async_trait;
use models::Schema;
use tracing::{debug, info};

use crate::client::CatalogHttpClient;
use crate::command::{
    CommonResp, ReadCommand, SchemaPage, WriteCommand, CATALOG_REQUEST_SCHEMA_EXIST,
    CATALOG_REQUEST_SCHEMA_NOT_EMPTY, CATALOG_REQUEST_SCHEMA_NOT_FOUND, CATALOG_REQUEST_SUCCESS,
};
use crate::error::{CatalogError, CatalogResult};

/// The transport collaborator: authenticated remote calls for the schema
/// directory and the tenant capability probe. Retry and timeout policy live
/// behind this seam, never in front of it.
#[async_trait]
pub trait CatalogService: Send + Sync + Debug {
    /// Whether the tenant owning `project` has the schema syntax capability.
    async fn schema_syntax(&self, project: &str) -> CatalogResult<bool>;

    async fn get_schema(&self, project: &str, name: &str) -> CatalogResult<Option<Schema>>;

    async fn create_schema(
        &self,
        project: &str,
        name: &str,
        comment: Option<String>,
    ) -> CatalogResult<Schema>;

    async fn drop_schema(&self, project: &str, name: &str) -> CatalogResult<()>;

    /// One page of the schema listing, in the order returned by the remote
    /// service. Pass the previous page's `next_marker` to continue.
    async fn list_schemas(
        &self,
        project: &str,
        marker: Option<String>,
    ) -> CatalogResult<SchemaPage>;
}

#[derive(Debug)]
pub struct RemoteCatalogService {
    client: CatalogHttpClient,
}

impl RemoteCatalogService {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: CatalogHttpClient::new(endpoint),
        }
    }
}

#[async_trait]
impl CatalogService for RemoteCatalogService {
    async fn schema_syntax(&self, project: &str) -> CatalogResult<bool> {
        let req = ReadCommand::SchemaSyntax(project.to_string());

        match self.client.read::<CommonResp<bool>>(&req).await? {
            CommonResp::Ok(enabled) => Ok(enabled),
            CommonResp::Err(status) => Err(CatalogError::CommonError { msg: status.msg }),
        }
    }

    async fn get_schema(&self, project: &str, name: &str) -> CatalogResult<Option<Schema>> {
        let req = ReadCommand::Schema(project.to_string(), name.to_string());

        match self
            .client
            .read::<CommonResp<Option<Schema>>>(&req)
            .await?
        {
            CommonResp::Ok(schema) => Ok(schema),
            CommonResp::Err(status) => {
                if status.code == CATALOG_REQUEST_SCHEMA_NOT_FOUND {
                    Ok(None)
                } else {
                    Err(CatalogError::CommonError { msg: status.msg })
                }
            }
        }
    }

    async fn create_schema(
        &self,
        project: &str,
        name: &str,
        comment: Option<String>,
    ) -> CatalogResult<Schema> {
        let req = WriteCommand::CreateSchema(project.to_string(), name.to_string(), comment);

        debug!("create schema: {:?}", req);

        match self.client.write::<CommonResp<Schema>>(&req).await? {
            CommonResp::Ok(schema) => Ok(schema),
            CommonResp::Err(status) => {
                if status.code == CATALOG_REQUEST_SCHEMA_EXIST {
                    Err(CatalogError::SchemaAlreadyExists {
                        schema: name.to_string(),
                    })
                } else {
                    Err(CatalogError::CommonError { msg: status.msg })
                }
            }
        }
    }

    async fn drop_schema(&self, project: &str, name: &str) -> CatalogResult<()> {
        let req = WriteCommand::DropSchema(project.to_string(), name.to_string());

        let rsp = self
            .client
            .write::<crate::command::StatusResponse>(&req)
            .await?;
        info!("drop schema: {:?}; {:?}", req, rsp);

        if rsp.code == CATALOG_REQUEST_SUCCESS {
            Ok(())
        } else if rsp.code == CATALOG_REQUEST_SCHEMA_NOT_FOUND {
            Err(CatalogError::SchemaNotFound {
                schema: name.to_string(),
            })
        } else if rsp.code == CATALOG_REQUEST_SCHEMA_NOT_EMPTY {
            Err(CatalogError::SchemaNotEmpty {
                schema: name.to_string(),
            })
        } else {
            Err(CatalogError::CommonError {
                msg: rsp.to_string(),
            })
        }
    }

    async fn list_schemas(
        &self,
        project: &str,
        marker: Option<String>,
    ) -> CatalogResult<SchemaPage> {
        let req = ReadCommand::Schemas(project.to_string(), marker);

        match self.client.read::<CommonResp<SchemaPage>>(&req).await? {
            CommonResp::Ok(page) => Ok(page),
            CommonResp::Err(status) => Err(CatalogError::CommonError { msg: status.msg }),
        }
    }
}
