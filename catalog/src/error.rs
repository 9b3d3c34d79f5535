use models::NameError;
use snafu::Snafu;

use crate::client::RequestError;

pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Snafu, Debug)]
#[snafu(visibility(pub))]
pub enum CatalogError {
    #[snafu(display("Invalid identifier: {}", name))]
    InvalidIdentifier { name: String },

    #[snafu(display(
        "Ambiguous identifier '{}': explicit schema set but prefix is not project {}",
        name,
        project
    ))]
    AmbiguousIdentifier { name: String, project: String },

    #[snafu(display("The schema {} not found", schema))]
    SchemaNotFound { schema: String },

    #[snafu(display("The schema {} already exists", schema))]
    SchemaAlreadyExists { schema: String },

    #[snafu(display("The schema {} is not empty", schema))]
    SchemaNotEmpty { schema: String },

    #[snafu(display("Request catalog service error: {}", source))]
    Transport { source: RequestError },

    #[snafu(display("Error: {}", msg))]
    CommonError { msg: String },
}

impl From<NameError> for CatalogError {
    fn from(err: NameError) -> Self {
        match err {
            NameError::InvalidIdentifier { name } => CatalogError::InvalidIdentifier { name },
        }
    }
}

impl From<RequestError> for CatalogError {
    fn from(source: RequestError) -> Self {
        CatalogError::Transport { source }
    }
}
