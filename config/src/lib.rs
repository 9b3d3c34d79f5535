use std::env;

use serde::{Deserialize, Serialize};

pub use crate::options::{
    always_enable_schema, enable_schema, set_always_enable_schema, set_enable_schema,
    OptionsSnapshot,
};

mod options;

pub const ENV_ENDPOINT: &str = "WAREHOUSE_ENDPOINT";
pub const ENV_PROJECT: &str = "WAREHOUSE_PROJECT";
pub const ENV_SCHEMA: &str = "WAREHOUSE_SCHEMA";

/// Entry-point construction parameters for a warehouse client.
///
/// `schema`, when set, becomes the session default schema consulted by
/// qualified-name resolution for otherwise unqualified object names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub project: String,
    pub endpoint: String,
    #[serde(default)]
    pub schema: Option<String>,
    /// Whether schema support is enabled for the project. Projects created
    /// before schema support keep addressing objects directly.
    #[serde(default = "ClientConfig::default_schema_support")]
    pub schema_support: bool,
}

impl ClientConfig {
    pub fn new(project: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            endpoint: endpoint.into(),
            schema: None,
            schema_support: true,
        }
    }

    /// Create a client config read from the environment.
    pub fn from_env() -> Self {
        Self {
            project: env::var(ENV_PROJECT).unwrap_or_default(),
            endpoint: env::var(ENV_ENDPOINT).unwrap_or_default(),
            schema: env::var(ENV_SCHEMA).ok(),
            schema_support: true,
        }
    }

    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    pub fn with_schema_support(mut self, schema_support: bool) -> Self {
        self.schema_support = schema_support;
        self
    }

    fn default_schema_support() -> bool {
        true
    }
}
