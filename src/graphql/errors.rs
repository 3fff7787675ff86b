//! Errors surfaced to GraphQL clients
//!
//! Each variant maps to a machine-readable `extensions.code`.

use async_graphql::{Error, ErrorExtensions};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// An explicit id lookup missed
    #[error("{entity} not found.")]
    NotFound {
        entity: &'static str,
        argument: &'static str,
    },

    /// A backing service needed by the field is not configured
    #[error("{0}")]
    Unavailable(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Lookup miss on the `id` argument
    pub fn not_found(entity: &'static str) -> Self {
        Self::NotFound {
            entity,
            argument: "id",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Unavailable(_) => "SERVICE_UNAVAILABLE",
            Self::Internal(_) => "INTERNAL_SERVER_ERROR",
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

impl ErrorExtensions for ApiError {
    fn extend(&self) -> Error {
        Error::new(self.to_string()).extend_with(|_, e| {
            e.set("code", self.code());
            if let Self::NotFound { argument, .. } = self {
                e.set("argumentName", *argument);
            }
        })
    }
}
