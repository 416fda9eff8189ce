use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid command: {reason}")]
    InvalidCommand { reason: String },

    #[error("Unsupported planner variant: {variant}")]
    UnsupportedPlanner { variant: String },

    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    #[error("Roadmap node not found: {id}")]
    NodeNotFound { id: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Infrastructure error: {0}")]
    InfrastructureError(String),
}

#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Planning service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Configuration error: {0}")]
    Configuration(#[from] anyhow::Error),
}

pub type DomainResult<T> = Result<T, DomainError>;
pub type ApplicationResult<T> = Result<T, ApplicationError>;
