//! `AWS::Kendra::Index` resource model.

use kendra_cfn_core::Tag;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ResourceModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// `DEVELOPER_EDITION` or `ENTERPRISE_EDITION`; fixed at create
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_side_encryption_configuration: Option<ServerSideEncryptionConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_metadata_configurations: Option<Vec<DocumentMetadataConfiguration>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity_units: Option<CapacityUnitsConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_context_policy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_token_configurations: Option<Vec<UserTokenConfiguration>>,
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
    pub key_location: Option<String>,
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
    pub r#type: Option<String>,
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
    pub rank_order: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_importance_items: Option<Vec<ValueImportanceItem>>,
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

/// One entry of a relevance value-importance map
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ValueImportanceItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_template_properties_deserialize() {
        let model: ResourceModel = serde_json::from_value(json!({
            "Name": "search",
            "Edition": "DEVELOPER_EDITION",
            "RoleArn": "arn:aws:iam::111122223333:role/kendra",
            "CapacityUnits": {"StorageCapacityUnits": 1, "QueryCapacityUnits": 2},
            "UserTokenConfigurations": [
                {"JwtTokenTypeConfiguration": {"KeyLocation": "URL", "URL": "https://idp/keys"}}
            ],
            "DocumentMetadataConfigurations": [{
                "Name": "_category",
                "Type": "STRING_VALUE",
                "Relevance": {"ValueImportanceItems": [{"Key": "faq", "Value": 8}]}
            }]
        }))
        .unwrap();

        assert_eq!(model.edition.as_deref(), Some("DEVELOPER_EDITION"));
        let jwt = model.user_token_configurations.as_ref().unwrap()[0]
            .jwt_token_type_configuration
            .as_ref()
            .unwrap();
        assert_eq!(jwt.url.as_deref(), Some("https://idp/keys"));
        let relevance = model.document_metadata_configurations.as_ref().unwrap()[0]
            .relevance
            .as_ref()
            .unwrap();
        assert_eq!(
            relevance.value_importance_items,
            Some(vec![ValueImportanceItem {
                key: Some("faq".into()),
                value: Some(8),
            }])
        );
    }

    #[test]
    fn test_unset_properties_are_omitted() {
        let model = ResourceModel {
            id: Some("index-1".into()),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&model).unwrap(), json!({"Id": "index-1"}));
    }
}
