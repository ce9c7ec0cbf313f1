//! Index settings.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

kendra_enum! {
    IndexEdition {
        DeveloperEdition => "DEVELOPER_EDITION",
        EnterpriseEdition => "ENTERPRISE_EDITION",
        GenAiEnterpriseEdition => "GEN_AI_ENTERPRISE_EDITION",
    }
}

kendra_enum! {
    IndexStatus {
        Creating => "CREATING",
        Active => "ACTIVE",
        Deleting => "DELETING",
        Failed => "FAILED",
        Updating => "UPDATING",
        SystemUpdating => "SYSTEM_UPDATING",
    }
}

kendra_enum! {
    UserContextPolicy {
        AttributeFilter => "ATTRIBUTE_FILTER",
        UserToken => "USER_TOKEN",
    }
}

kendra_enum! {
    KeyLocation {
        Url => "URL",
        SecretManager => "SECRET_MANAGER",
    }
}

kendra_enum! {
    DocumentAttributeValueType {
        StringValue => "STRING_VALUE",
        StringListValue => "STRING_LIST_VALUE",
        LongValue => "LONG_VALUE",
        DateValue => "DATE_VALUE",
    }
}

kendra_enum! {
    Order {
        Ascending => "ASCENDING",
        Descending => "DESCENDING",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ServerSideEncryptionConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CapacityUnitsConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_capacity_units: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_capacity_units: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UserTokenConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jwt_token_type_configuration: Option<JwtTokenTypeConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_token_type_configuration: Option<JsonTokenTypeConfiguration>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct JwtTokenTypeConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_location: Option<KeyLocation>,
    #[serde(rename = "URL", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_manager_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name_attribute_field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_attribute_field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claim_regex: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct JsonTokenTypeConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name_attribute_field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_attribute_field: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DocumentMetadataConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<DocumentAttributeValueType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relevance: Option<Relevance>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<Search>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Relevance {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freshness: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub importance: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank_order: Option<Order>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_importance_map: Option<BTreeMap<String, i32>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Search {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facetable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub searchable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub displayable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sortable: Option<bool>,
}
