// Progress events returned to the CloudFormation host
//
// Field names follow the host protocol (camelCase); optional fields are
// omitted rather than serialized as null.

use crate::context::CallbackContext;
use crate::error::{HandlerError, HandlerErrorCode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationStatus {
    InProgress,
    Success,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressEvent<M> {
    pub status: OperationStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_model: Option<M>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_models: Option<Vec<M>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_context: Option<CallbackContext>,

    #[serde(default)]
    pub callback_delay_seconds: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<HandlerErrorCode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<M> ProgressEvent<M> {
    fn empty(status: OperationStatus) -> Self {
        Self {
            status,
            resource_model: None,
            resource_models: None,
            next_token: None,
            callback_context: None,
            callback_delay_seconds: 0,
            error_code: None,
            message: None,
        }
    }

    /// Terminal success carrying the canonical model
    pub fn success(model: M) -> Self {
        Self {
            resource_model: Some(model),
            ..Self::empty(OperationStatus::Success)
        }
    }

    /// Terminal success with no model (deletes)
    pub fn deleted() -> Self {
        Self::empty(OperationStatus::Success)
    }

    /// Page of list results; the token is passed through untouched
    pub fn list(models: Vec<M>, next_token: Option<String>) -> Self {
        Self {
            resource_models: Some(models),
            next_token,
            ..Self::empty(OperationStatus::Success)
        }
    }

    /// Ask the host to re-invoke after `delay_seconds` with `context`
    pub fn in_progress(model: M, context: CallbackContext, delay_seconds: u32) -> Self {
        Self {
            resource_model: Some(model),
            callback_context: Some(context),
            callback_delay_seconds: delay_seconds,
            ..Self::empty(OperationStatus::InProgress)
        }
    }

    /// Terminal failure
    pub fn failed(error: &HandlerError) -> Self {
        Self {
            error_code: Some(error.code()),
            message: Some(error.to_string()),
            ..Self::empty(OperationStatus::Failed)
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == OperationStatus::Success
    }

    pub fn is_in_progress(&self) -> bool {
        self.status == OperationStatus::InProgress
    }

    pub fn is_failed(&self) -> bool {
        self.status == OperationStatus::Failed
    }

    /// Convert the model type, keeping everything else; the first failed
    /// conversion is returned
    pub fn try_map_model<N, E>(
        self,
        f: impl Fn(M) -> Result<N, E>,
    ) -> Result<ProgressEvent<N>, E> {
        Ok(ProgressEvent {
            status: self.status,
            resource_model: self.resource_model.map(&f).transpose()?,
            resource_models: self
                .resource_models
                .map(|models| models.into_iter().map(&f).collect::<Result<Vec<_>, _>>())
                .transpose()?,
            next_token: self.next_token,
            callback_context: self.callback_context,
            callback_delay_seconds: self.callback_delay_seconds,
            error_code: self.error_code,
            message: self.message,
        })
    }
}

impl<M> From<Result<ProgressEvent<M>, HandlerError>> for ProgressEvent<M> {
    fn from(result: Result<ProgressEvent<M>, HandlerError>) -> Self {
        match result {
            Ok(event) => event,
            Err(error) => ProgressEvent::failed(&error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Stage;
    use serde_json::json;

    #[test]
    fn test_success_serialization_omits_empty_fields() {
        let event = ProgressEvent::success(json!({"Id": "ds1"}));
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["status"], "SUCCESS");
        assert_eq!(value["resourceModel"]["Id"], "ds1");
        assert!(value.get("errorCode").is_none());
        assert!(value.get("callbackContext").is_none());
        assert_eq!(value["callbackDelaySeconds"], 0);
    }

    #[test]
    fn test_in_progress_carries_context_and_delay() {
        let ctx = CallbackContext {
            stage: Some(Stage::AwaitingCreate),
            stabilization: None,
        };
        let event = ProgressEvent::in_progress(json!({}), ctx, 60);
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["status"], "IN_PROGRESS");
        assert_eq!(value["callbackDelaySeconds"], 60);
        assert_eq!(value["callbackContext"]["stage"], "AWAITING_CREATE");
    }

    #[test]
    fn test_failed_from_error() {
        let err = HandlerError::not_found("AWS::Kendra::Faq", "faq1");
        let event: ProgressEvent<()> = Err(err).into();
        assert!(event.is_failed());
        assert_eq!(event.error_code, Some(HandlerErrorCode::NotFound));
        assert!(event.message.unwrap().contains("faq1"));
    }

    #[test]
    fn test_list_passes_token_through() {
        let event = ProgressEvent::list(vec![1, 2], Some("opaque".to_string()));
        assert_eq!(event.resource_models, Some(vec![1, 2]));
        assert_eq!(event.next_token.as_deref(), Some("opaque"));
        let mapped = event
            .try_map_model(|n| Ok::<_, String>(n * 10))
            .unwrap();
        assert_eq!(mapped.resource_models, Some(vec![10, 20]));
        assert_eq!(mapped.next_token.as_deref(), Some("opaque"));
    }

    #[test]
    fn test_try_map_model_stops_on_first_error() {
        let event = ProgressEvent::list(vec![1, 2, 3], None);
        let err = event
            .try_map_model(|n| if n == 2 { Err(format!("bad {n}")) } else { Ok(n) })
            .unwrap_err();
        assert_eq!(err, "bad 2");
    }
}
