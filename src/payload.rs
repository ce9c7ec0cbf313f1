// CloudFormation host payload
//
// The host invokes the function with one JSON document per action. Only the
// fields the handlers need are decoded; everything else is ignored.

use kendra_cfn_api::CallerCredentials;
use kendra_cfn_core::{
    partition_for_region, Action, CallbackContext, HandlerError, ResourceHandlerRequest,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostRequest {
    pub aws_account_id: String,
    #[serde(default)]
    pub aws_partition: Option<String>,
    pub region: String,
    pub action: Action,
    pub resource_type: String,
    /// Idempotency token the host assigns to the operation
    #[serde(default)]
    pub bearer_token: Option<String>,
    #[serde(default)]
    pub next_token: Option<String>,
    #[serde(default)]
    pub request_data: RequestData,
    #[serde(default)]
    pub callback_context: Option<CallbackContext>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RequestData {
    pub caller_credentials: Option<HostCredentials>,
    pub logical_resource_id: Option<String>,
    pub resource_properties: Option<serde_json::Value>,
    pub previous_resource_properties: Option<serde_json::Value>,
    pub stack_tags: Option<BTreeMap<String, String>>,
    pub previous_stack_tags: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostCredentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    #[serde(default)]
    pub session_token: Option<String>,
}

impl From<HostCredentials> for CallerCredentials {
    fn from(credentials: HostCredentials) -> Self {
        CallerCredentials {
            access_key_id: credentials.access_key_id,
            secret_access_key: credentials.secret_access_key,
            session_token: credentials.session_token,
        }
    }
}

impl HostRequest {
    /// Callback context handed back by the host, or a fresh one
    pub fn callback(&self) -> CallbackContext {
        self.callback_context.clone().unwrap_or_default()
    }

    pub fn credentials(&self) -> Option<CallerCredentials> {
        self.request_data
            .caller_credentials
            .clone()
            .map(CallerCredentials::from)
    }

    /// Decode the models into the handler's resource model
    pub fn to_handler_request<M: DeserializeOwned>(
        &self,
    ) -> Result<ResourceHandlerRequest<M>, HandlerError> {
        let data = &self.request_data;
        let partition = self
            .aws_partition
            .clone()
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| partition_for_region(&self.region).to_string());

        Ok(ResourceHandlerRequest {
            aws_account_id: self.aws_account_id.clone(),
            aws_partition: partition,
            region: self.region.clone(),
            desired_resource_state: decode_model(data.resource_properties.as_ref(), "desired")?,
            previous_resource_state: decode_model(
                data.previous_resource_properties.as_ref(),
                "previous",
            )?,
            desired_resource_tags: data.stack_tags.clone().unwrap_or_default(),
            previous_resource_tags: data.previous_stack_tags.clone().unwrap_or_default(),
            logical_resource_identifier: data.logical_resource_id.clone(),
            client_request_token: self.bearer_token.clone(),
            next_token: self.next_token.clone(),
        })
    }
}

fn decode_model<M: DeserializeOwned>(
    value: Option<&serde_json::Value>,
    which: &str,
) -> Result<Option<M>, HandlerError> {
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(value) => serde_json::from_value(value.clone()).map(Some).map_err(|e| {
            HandlerError::InvalidRequest(format!("{which} resource properties: {e}"))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kendra_cfn_core::Stage;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    #[serde(rename_all = "PascalCase")]
    struct Model {
        name: String,
    }

    fn payload() -> serde_json::Value {
        json!({
            "awsAccountId": "123456789012",
            "bearerToken": "token-1",
            "region": "cn-north-1",
            "action": "UPDATE",
            "resourceType": "AWS::Kendra::Index",
            "requestData": {
                "callerCredentials": {
                    "accessKeyId": "AKID",
                    "secretAccessKey": "SECRET",
                    "sessionToken": "SESSION"
                },
                "logicalResourceId": "SearchIndex",
                "resourceProperties": { "Name": "new" },
                "previousResourceProperties": { "Name": "old" },
                "stackTags": { "stage": "prod" }
            },
            "callbackContext": { "stage": "AWAITING_UPDATE" }
        })
    }

    #[test]
    fn test_decode_host_request() {
        let host: HostRequest = serde_json::from_value(payload()).unwrap();
        assert_eq!(host.action, Action::Update);
        assert!(host.callback().resuming(Stage::AwaitingUpdate));
        assert_eq!(
            host.credentials().map(|c| c.access_key_id),
            Some("AKID".to_string())
        );

        let request: ResourceHandlerRequest<Model> = host.to_handler_request().unwrap();
        assert_eq!(request.aws_partition, "aws-cn");
        assert_eq!(request.client_request_token.as_deref(), Some("token-1"));
        assert_eq!(
            request.desired_resource_state,
            Some(Model {
                name: "new".to_string()
            })
        );
        assert_eq!(
            request.previous_resource_state,
            Some(Model {
                name: "old".to_string()
            })
        );
        assert_eq!(
            request.desired_resource_tags.get("stage").map(String::as_str),
            Some("prod")
        );
        assert_eq!(
            request.logical_resource_identifier.as_deref(),
            Some("SearchIndex")
        );
    }

    #[test]
    fn test_missing_callback_context_is_empty() {
        let mut value = payload();
        value.as_object_mut().unwrap().remove("callbackContext");
        let host: HostRequest = serde_json::from_value(value).unwrap();
        assert!(host.callback().is_empty());
    }

    #[test]
    fn test_explicit_partition_wins() {
        let mut value = payload();
        value["awsPartition"] = json!("aws");
        let host: HostRequest = serde_json::from_value(value).unwrap();
        let request: ResourceHandlerRequest<Model> = host.to_handler_request().unwrap();
        assert_eq!(request.aws_partition, "aws");
    }

    #[test]
    fn test_malformed_properties_are_invalid_request() {
        let mut value = payload();
        value["requestData"]["resourceProperties"] = json!({ "Name": 42 });
        let host: HostRequest = serde_json::from_value(value).unwrap();
        let err = host.to_handler_request::<Model>().unwrap_err();
        assert_eq!(err.code(), kendra_cfn_core::HandlerErrorCode::InvalidRequest);
    }
}
