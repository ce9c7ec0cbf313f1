//! Errors raised by a [`KendraApi`](crate::KendraApi) call and their
//! classification into the handler taxonomy.

use kendra_cfn_core::HandlerError;
use thiserror::Error;

/// Service exception names the handlers distinguish
pub mod codes {
    pub const VALIDATION: &str = "ValidationException";
    pub const CONFLICT: &str = "ConflictException";
    pub const FEATURED_RESULTS_CONFLICT: &str = "FeaturedResultsConflictException";
    pub const RESOURCE_NOT_FOUND: &str = "ResourceNotFoundException";
    pub const ACCESS_DENIED: &str = "AccessDeniedException";
    pub const THROTTLING: &str = "ThrottlingException";
    pub const SERVICE_QUOTA_EXCEEDED: &str = "ServiceQuotaExceededException";
    pub const INTERNAL_SERVER: &str = "InternalServerException";
}

/// Failure of a single remote call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The service answered with an exception
    #[error("{code}: {message}")]
    Service { code: String, message: String },

    /// The request never produced a response (DNS, TLS, timeout, ...)
    #[error("Request to Kendra failed: {0}")]
    Transport(String),

    /// No usable credentials, or signing failed
    #[error("Unable to sign request: {0}")]
    Credentials(String),

    /// A body could not be encoded or decoded
    #[error("Malformed Kendra payload: {0}")]
    Serialization(String),

    /// The client could not be built (no region, bad endpoint)
    #[error("Invalid Kendra client configuration: {0}")]
    Configuration(String),
}

impl ApiError {
    pub fn service(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Service {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::service(codes::RESOURCE_NOT_FOUND, message)
    }

    /// Service exception name, if the service produced one
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Service { code, .. } => Some(code),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.code() == Some(codes::RESOURCE_NOT_FOUND)
    }

    /// Map onto the handler taxonomy.
    ///
    /// `type_name` and `identifier` name the resource in not-found messages.
    pub fn into_handler_error(self, type_name: &str, identifier: &str) -> HandlerError {
        let message = self.to_string();
        match self {
            Self::Service { code, .. } => match code.as_str() {
                codes::VALIDATION => HandlerError::InvalidRequest(message),
                codes::CONFLICT | codes::FEATURED_RESULTS_CONFLICT => {
                    HandlerError::ResourceConflict(message)
                }
                codes::RESOURCE_NOT_FOUND => HandlerError::not_found(type_name, identifier),
                codes::ACCESS_DENIED => HandlerError::AccessDenied(message),
                codes::THROTTLING => HandlerError::Throttling(message),
                codes::SERVICE_QUOTA_EXCEEDED => HandlerError::ServiceLimitExceeded(message),
                codes::INTERNAL_SERVER => HandlerError::ServiceInternal(message),
                _ => HandlerError::GeneralService(message),
            },
            Self::Transport(_) => HandlerError::NetworkFailure(message),
            Self::Credentials(_) => HandlerError::InvalidCredentials(message),
            Self::Serialization(_) => HandlerError::GeneralService(message),
            Self::Configuration(_) => HandlerError::InternalFailure(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kendra_cfn_core::HandlerErrorCode;

    fn classify(err: ApiError) -> HandlerErrorCode {
        err.into_handler_error("AWS::Kendra::Index", "idx").code()
    }

    #[test]
    fn test_service_exceptions_map_one_to_one() {
        let cases = [
            (codes::VALIDATION, HandlerErrorCode::InvalidRequest),
            (codes::CONFLICT, HandlerErrorCode::ResourceConflict),
            (codes::FEATURED_RESULTS_CONFLICT, HandlerErrorCode::ResourceConflict),
            (codes::RESOURCE_NOT_FOUND, HandlerErrorCode::NotFound),
            (codes::ACCESS_DENIED, HandlerErrorCode::AccessDenied),
            (codes::THROTTLING, HandlerErrorCode::Throttling),
            (codes::SERVICE_QUOTA_EXCEEDED, HandlerErrorCode::ServiceLimitExceeded),
            (codes::INTERNAL_SERVER, HandlerErrorCode::ServiceInternalError),
            ("ResourceUnavailableException", HandlerErrorCode::GeneralServiceException),
        ];
        for (code, expected) in cases {
            assert_eq!(classify(ApiError::service(code, "boom")), expected, "{code}");
        }
    }

    #[test]
    fn test_client_side_failures() {
        assert_eq!(
            classify(ApiError::Transport("connection reset".into())),
            HandlerErrorCode::NetworkFailure
        );
        assert_eq!(
            classify(ApiError::Credentials("expired".into())),
            HandlerErrorCode::InvalidCredentials
        );
        assert_eq!(
            classify(ApiError::Serialization("eof".into())),
            HandlerErrorCode::GeneralServiceException
        );
        assert_eq!(
            classify(ApiError::Configuration("no region".into())),
            HandlerErrorCode::InternalFailure
        );
    }

    #[test]
    fn test_not_found_names_the_resource() {
        let err = ApiError::not_found("Index idx does not exist")
            .into_handler_error("AWS::Kendra::Index", "idx");
        assert_eq!(err, HandlerError::not_found("AWS::Kendra::Index", "idx"));
        assert!(ApiError::not_found("gone").is_not_found());
        assert!(!ApiError::Transport("x".into()).is_not_found());
    }
}
