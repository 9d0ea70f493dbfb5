use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid route: {0}")]
    InvalidRoute(String),

    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    #[error("Unknown node: {0}")]
    UnknownNode(String),
}
