// Handler request as seen by a resource handler
//
// The Lambda entry point decodes the host payload into this shape; handlers
// never see credentials or the raw wire envelope.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    Create,
    Read,
    Update,
    Delete,
    List,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Create => "CREATE",
            Action::Read => "READ",
            Action::Update => "UPDATE",
            Action::Delete => "DELETE",
            Action::List => "LIST",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResourceHandlerRequest<M> {
    pub aws_account_id: String,
    pub aws_partition: String,
    pub region: String,
    pub desired_resource_state: Option<M>,
    pub previous_resource_state: Option<M>,
    /// Stack-level and system tags the host wants applied
    pub desired_resource_tags: BTreeMap<String, String>,
    pub previous_resource_tags: BTreeMap<String, String>,
    pub logical_resource_identifier: Option<String>,
    pub client_request_token: Option<String>,
    pub next_token: Option<String>,
}

impl<M> ResourceHandlerRequest<M> {
    pub fn new(aws_account_id: impl Into<String>, region: impl Into<String>) -> Self {
        let region = region.into();
        Self {
            aws_account_id: aws_account_id.into(),
            aws_partition: crate::arn::partition_for_region(&region).to_string(),
            region,
            desired_resource_state: None,
            previous_resource_state: None,
            desired_resource_tags: BTreeMap::new(),
            previous_resource_tags: BTreeMap::new(),
            logical_resource_identifier: None,
            client_request_token: None,
            next_token: None,
        }
    }

    pub fn with_desired(mut self, model: M) -> Self {
        self.desired_resource_state = Some(model);
        self
    }

    pub fn with_previous(mut self, model: M) -> Self {
        self.previous_resource_state = Some(model);
        self
    }

    pub fn with_next_token(mut self, token: impl Into<String>) -> Self {
        self.next_token = Some(token.into());
        self
    }

    pub fn with_desired_tags(mut self, tags: BTreeMap<String, String>) -> Self {
        self.desired_resource_tags = tags;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_derives_partition() {
        let req: ResourceHandlerRequest<()> = ResourceHandlerRequest::new("123", "cn-north-1");
        assert_eq!(req.aws_partition, "aws-cn");
        assert!(req.desired_resource_state.is_none());
    }

    #[test]
    fn test_action_wire_names() {
        assert_eq!(serde_json::to_string(&Action::Create).unwrap(), "\"CREATE\"");
        let action: Action = serde_json::from_str("\"LIST\"").unwrap();
        assert_eq!(action, Action::List);
    }
}
