use blogdesk::config::LoadError;
use blogdesk::infra::{api::ApiError, error::InfraError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to load configuration: {0}")]
    Config(#[from] LoadError),
    #[error(transparent)]
    Infra(#[from] InfraError),
    #[error("api error: {0}")]
    Api(#[from] ApiError),
    #[error("failed to read confirmation: {0}")]
    Prompt(#[source] std::io::Error),
    #[error("post {0} not found")]
    NotFound(i64),
    #[error("failed to load post {id}: {reason}")]
    PostLoad { id: i64, reason: String },
    #[error("failed to delete post {0}")]
    DeleteFailed(i64),
    #[error("post was not saved")]
    Rejected,
}
