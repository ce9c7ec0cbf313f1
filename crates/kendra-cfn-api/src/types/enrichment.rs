//! Custom document enrichment applied while a data source ingests documents.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

kendra_enum! {
    ConditionOperator {
        GreaterThan => "GreaterThan",
        GreaterThanOrEquals => "GreaterThanOrEquals",
        LessThan => "LessThan",
        LessThanOrEquals => "LessThanOrEquals",
        Equals => "Equals",
        NotEquals => "NotEquals",
        Contains => "Contains",
        NotContains => "NotContains",
        Exists => "Exists",
        NotExists => "NotExists",
        BeginsWith => "BeginsWith",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CustomDocumentEnrichmentConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_configurations: Option<Vec<InlineCustomDocumentEnrichmentConfiguration>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_extraction_hook_configuration: Option<HookConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_extraction_hook_configuration: Option<HookConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct InlineCustomDocumentEnrichmentConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<DocumentAttributeCondition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<DocumentAttributeTarget>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_content_deletion: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DocumentAttributeCondition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition_document_attribute_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator: Option<ConditionOperator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition_on_value: Option<DocumentAttributeValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DocumentAttributeTarget {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_document_attribute_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_document_attribute_value_deletion: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_document_attribute_value: Option<DocumentAttributeValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct HookConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invocation_condition: Option<DocumentAttributeCondition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lambda_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_bucket: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DocumentAttributeValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub string_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub string_list_value: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_value: Option<i64>,
    #[serde(
        with = "crate::timestamp::epoch_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_value: Option<DateTime<Utc>>,
}
