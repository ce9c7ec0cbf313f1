//! Failures while translating between resource models and wire shapes

use kendra_cfn_api::UnknownVariant;
use kendra_cfn_core::HandlerError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    #[error(transparent)]
    UnknownVariant(#[from] UnknownVariant),

    #[error("'{value}' is not an RFC 3339 timestamp")]
    InvalidTimestamp { value: String },

    #[error("{0} is required")]
    MissingField(&'static str),
}

impl From<TranslateError> for HandlerError {
    fn from(err: TranslateError) -> Self {
        HandlerError::InvalidRequest(err.to_string())
    }
}

/// Take a required identifier off a model
pub(crate) fn required<'a>(
    value: Option<&'a String>,
    field: &'static str,
) -> Result<&'a str, TranslateError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value.as_str()),
        _ => Err(TranslateError::MissingField(field)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kendra_cfn_core::HandlerErrorCode;

    #[test]
    fn test_translate_errors_are_invalid_requests() {
        let err: HandlerError = TranslateError::MissingField("Name").into();
        assert_eq!(err.code(), HandlerErrorCode::InvalidRequest);
        assert!(err.to_string().contains("Name is required"));
    }

    #[test]
    fn test_required_rejects_empty() {
        let id = String::from("ds1");
        assert_eq!(required(Some(&id), "Id"), Ok("ds1"));
        assert_eq!(
            required(Some(&String::new()), "Id"),
            Err(TranslateError::MissingField("Id"))
        );
        assert_eq!(required(None, "Id"), Err(TranslateError::MissingField("Id")));
    }
}
