use models::Schema;
use serde::{Deserialize, Serialize};

/******************* write command *************************/
#[derive(Serialize, Deserialize, Debug, Clone)]
pub enum WriteCommand {
    // project, schema name, comment
    CreateSchema(String, String, Option<String>),

    // project, schema name
    DropSchema(String, String),
}

/******************* read command *************************/
#[derive(Serialize, Deserialize, Debug, Clone)]
pub enum ReadCommand {
    // project, schema name
    Schema(String, String),

    // project, pagination marker
    Schemas(String, Option<String>),

    // project
    SchemaSyntax(String),
}

/******************* response  *************************/
pub const CATALOG_REQUEST_SUCCESS: i32 = 0;
pub const CATALOG_REQUEST_SCHEMA_EXIST: i32 = 1;
pub const CATALOG_REQUEST_SCHEMA_NOT_FOUND: i32 = 2;
pub const CATALOG_REQUEST_SCHEMA_NOT_EMPTY: i32 = 3;

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct StatusResponse {
    pub code: i32,
    pub msg: String,
}

impl std::fmt::Display for StatusResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = serde_json::to_string(self).unwrap_or_default();
        f.write_str(&text)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub enum CommonResp<T> {
    Ok(T),
    Err(StatusResponse),
}

/// One page of the remote schema listing. `next_marker` is `None` on the
/// final page.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct SchemaPage {
    pub items: Vec<Schema>,
    pub next_marker: Option<String>,
}
