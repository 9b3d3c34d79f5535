use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Implicit schema holding objects created before or without schema support.
pub const DEFAULT_SCHEMA: &str = "DEFAULT";

/// Descriptor of a schema namespace nested under a project.
///
/// Schema names are unique within a project; `owner` and the creation time
/// are assigned by the remote service on create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    name: String,
    owner: String,
    comment: Option<String>,
    create_time: DateTime<Utc>,
}

impl Schema {
    pub fn new(
        name: String,
        owner: String,
        comment: Option<String>,
        create_time: DateTime<Utc>,
    ) -> Self {
        Self {
            name,
            owner,
            comment,
            create_time,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn create_time(&self) -> DateTime<Utc> {
        self.create_time
    }
}
