use std::collections::HashMap;
use async_trait::async_trait;
use crate::books::dto::BookDraft;
use crate::core::library::CatalogError;

#[derive(Debug)]
pub enum CommandError {
    Validation {
        errors: HashMap<String, String>,
        values: BookDraft,
    },
    NotFound {
        message: String,
    },
    Storage {
        message: String,
        recoverable: bool,
    },
    Serialization {
        message: String,
    },
}

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<CatalogError> for CommandError {
    fn from(other: CatalogError) -> Self {
        let recoverable = other.recoverable();
        match other {
            CatalogError::Validation { errors, values } => {
                CommandError::Validation { errors, values }
            }
            CatalogError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            CatalogError::Corruption { message } => {
                CommandError::Storage { message, recoverable }
            }
            CatalogError::WriteFailure { message } => {
                CommandError::Storage { message, recoverable }
            }
        }
    }
}
