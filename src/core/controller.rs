use axum::http::StatusCode;
use serde_json::json;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;

#[derive(Debug, Clone)]
pub(crate) struct AppState {
    pub(crate) config: Configuration,
}

impl AppState {
    pub fn new(config: Configuration) -> AppState {
        AppState {
            config,
        }
    }
}

pub(crate) type ServerError = (StatusCode, String);

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    ServerError::from(CommandError::Serialization { message: format!("{}", err) })
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::Validation { errors, values } => {
                (StatusCode::BAD_REQUEST, json!({"errors": errors, "values": values}).to_string())
            }
            CommandError::NotFound { ref message } => {
                (StatusCode::NOT_FOUND, json!({"message": message}).to_string())
            }
            CommandError::Storage { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{:?}", err))
            }
            CommandError::Serialization { .. } => {
                (StatusCode::BAD_REQUEST, format!("{:?}", err))
            }
        }
    }
}
