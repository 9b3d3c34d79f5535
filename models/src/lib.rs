mod name;
mod schema;

pub use name::{NameError, ObjectRef, QualifiedName};
pub use schema::{Schema, DEFAULT_SCHEMA};
