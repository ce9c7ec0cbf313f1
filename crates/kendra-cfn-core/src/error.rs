//! Handler error classification returned to CloudFormation

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error codes understood by the CloudFormation host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandlerErrorCode {
    NotUpdatable,
    InvalidRequest,
    AccessDenied,
    InvalidCredentials,
    AlreadyExists,
    NotFound,
    ResourceConflict,
    Throttling,
    ServiceLimitExceeded,
    NotStabilized,
    GeneralServiceException,
    ServiceInternalError,
    NetworkFailure,
    InternalFailure,
}

impl HandlerErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotUpdatable => "NotUpdatable",
            Self::InvalidRequest => "InvalidRequest",
            Self::AccessDenied => "AccessDenied",
            Self::InvalidCredentials => "InvalidCredentials",
            Self::AlreadyExists => "AlreadyExists",
            Self::NotFound => "NotFound",
            Self::ResourceConflict => "ResourceConflict",
            Self::Throttling => "Throttling",
            Self::ServiceLimitExceeded => "ServiceLimitExceeded",
            Self::NotStabilized => "NotStabilized",
            Self::GeneralServiceException => "GeneralServiceException",
            Self::ServiceInternalError => "ServiceInternalError",
            Self::NetworkFailure => "NetworkFailure",
            Self::InternalFailure => "InternalFailure",
        }
    }

    /// Whether the host may reasonably retry the whole operation later
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Throttling
                | Self::ServiceInternalError
                | Self::NetworkFailure
                | Self::GeneralServiceException
        )
    }
}

impl std::fmt::Display for HandlerErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Terminal failure of a handler invocation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandlerError {
    #[error("Resource of type '{type_name}' with identifier '{identifier}' was not found.")]
    NotFound {
        type_name: String,
        identifier: String,
    },

    #[error("Resource of type '{type_name}' with identifier '{identifier}' already exists.")]
    AlreadyExists {
        type_name: String,
        identifier: String,
    },

    #[error("Resource of type '{type_name}' with identifier '{identifier}' is not updatable with parameters provided: {property} cannot be changed.")]
    NotUpdatable {
        type_name: String,
        identifier: String,
        property: String,
    },

    #[error("Resource of type '{type_name}' with identifier '{identifier}' did not stabilize: {reason}")]
    NotStabilized {
        type_name: String,
        identifier: String,
        reason: String,
    },

    #[error("Invalid request provided: {0}")]
    InvalidRequest(String),

    #[error("Access denied: {0}")]
    AccessDenied(String),

    #[error("Unable to resolve credentials: {0}")]
    InvalidCredentials(String),

    #[error("Resource conflict: {0}")]
    ResourceConflict(String),

    #[error("Rate exceeded: {0}")]
    Throttling(String),

    #[error("Service limit exceeded: {0}")]
    ServiceLimitExceeded(String),

    #[error("Error occurred during operation: {0}")]
    GeneralService(String),

    #[error("Internal error reported by the service: {0}")]
    ServiceInternal(String),

    #[error("Network failure: {0}")]
    NetworkFailure(String),

    #[error("Internal failure: {0}")]
    InternalFailure(String),
}

impl HandlerError {
    pub fn not_found(type_name: &str, identifier: impl Into<String>) -> Self {
        Self::NotFound {
            type_name: type_name.to_string(),
            identifier: identifier.into(),
        }
    }

    pub fn already_exists(type_name: &str, identifier: impl Into<String>) -> Self {
        Self::AlreadyExists {
            type_name: type_name.to_string(),
            identifier: identifier.into(),
        }
    }

    pub fn not_updatable(
        type_name: &str,
        identifier: impl Into<String>,
        property: impl Into<String>,
    ) -> Self {
        Self::NotUpdatable {
            type_name: type_name.to_string(),
            identifier: identifier.into(),
            property: property.into(),
        }
    }

    pub fn not_stabilized(
        type_name: &str,
        identifier: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::NotStabilized {
            type_name: type_name.to_string(),
            identifier: identifier.into(),
            reason: reason.into(),
        }
    }

    /// Error code reported to the host
    pub fn code(&self) -> HandlerErrorCode {
        match self {
            Self::NotFound { .. } => HandlerErrorCode::NotFound,
            Self::AlreadyExists { .. } => HandlerErrorCode::AlreadyExists,
            Self::NotUpdatable { .. } => HandlerErrorCode::NotUpdatable,
            Self::NotStabilized { .. } => HandlerErrorCode::NotStabilized,
            Self::InvalidRequest(_) => HandlerErrorCode::InvalidRequest,
            Self::AccessDenied(_) => HandlerErrorCode::AccessDenied,
            Self::InvalidCredentials(_) => HandlerErrorCode::InvalidCredentials,
            Self::ResourceConflict(_) => HandlerErrorCode::ResourceConflict,
            Self::Throttling(_) => HandlerErrorCode::Throttling,
            Self::ServiceLimitExceeded(_) => HandlerErrorCode::ServiceLimitExceeded,
            Self::GeneralService(_) => HandlerErrorCode::GeneralServiceException,
            Self::ServiceInternal(_) => HandlerErrorCode::ServiceInternalError,
            Self::NetworkFailure(_) => HandlerErrorCode::NetworkFailure,
            Self::InternalFailure(_) => HandlerErrorCode::InternalFailure,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
