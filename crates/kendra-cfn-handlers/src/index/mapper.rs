//! Field mappers for index properties.

use std::collections::BTreeMap;

use super::model;
use crate::error::TranslateError;
use crate::mapper::{list_to_model, list_to_remote};
use kendra_cfn_api::types as wire;

pub fn encryption_to_remote(
    model: Option<&model::ServerSideEncryptionConfiguration>,
) -> Result<Option<wire::ServerSideEncryptionConfiguration>, TranslateError> {
    model.map(server_side_encryption_configuration_to_remote).transpose()
}

pub fn encryption_to_model(
    remote: Option<&wire::ServerSideEncryptionConfiguration>,
) -> Option<model::ServerSideEncryptionConfiguration> {
    remote.map(server_side_encryption_configuration_to_model)
}

pub fn capacity_units_to_remote(
    model: Option<&model::CapacityUnitsConfiguration>,
) -> Result<Option<wire::CapacityUnitsConfiguration>, TranslateError> {
    model.map(capacity_units_configuration_to_remote).transpose()
}

pub fn capacity_units_to_model(
    remote: Option<&wire::CapacityUnitsConfiguration>,
) -> Option<model::CapacityUnitsConfiguration> {
    remote.map(capacity_units_configuration_to_model)
}

pub fn user_tokens_to_remote(
    model: Option<&[model::UserTokenConfiguration]>,
) -> Result<Option<Vec<wire::UserTokenConfiguration>>, TranslateError> {
    list_to_remote(model, user_token_configuration_to_remote)
}

pub fn user_tokens_to_model(
    remote: Option<&[wire::UserTokenConfiguration]>,
) -> Option<Vec<model::UserTokenConfiguration>> {
    list_to_model(remote, user_token_configuration_to_model)
}

pub fn document_metadata_to_remote(
    model: Option<&[model::DocumentMetadataConfiguration]>,
) -> Result<Option<Vec<wire::DocumentMetadataConfiguration>>, TranslateError> {
    list_to_remote(model, document_metadata_configuration_to_remote)
}

pub fn document_metadata_to_model(
    remote: Option<&[wire::DocumentMetadataConfiguration]>,
) -> Option<Vec<model::DocumentMetadataConfiguration>> {
    list_to_model(remote, document_metadata_configuration_to_model)
}

/// Entries missing a key or a value have nothing to say and are dropped
fn value_importance_to_remote(
    items: Option<&[model::ValueImportanceItem]>,
) -> Option<BTreeMap<String, i32>> {
    items.map(|items| {
        items
            .iter()
            .filter_map(|item| Some((item.key.clone()?, item.value?)))
            .collect()
    })
}

/// Sorted by key, so reads are stable whatever order the service uses
fn value_importance_to_model(
    remote: Option<&BTreeMap<String, i32>>,
) -> Option<Vec<model::ValueImportanceItem>> {
    match remote {
        Some(map) if !map.is_empty() => Some(
            map.iter()
                .map(|(key, value)| model::ValueImportanceItem {
                    key: Some(key.clone()),
                    value: Some(*value),
                })
                .collect(),
        ),
        _ => None,
    }
}

fn server_side_encryption_configuration_to_remote(
    model: &model::ServerSideEncryptionConfiguration,
) -> Result<wire::ServerSideEncryptionConfiguration, TranslateError> {
    Ok(wire::ServerSideEncryptionConfiguration {
        kms_key_id: model.kms_key_id.clone(),
    })
}

fn server_side_encryption_configuration_to_model(
    remote: &wire::ServerSideEncryptionConfiguration,
) -> model::ServerSideEncryptionConfiguration {
    model::ServerSideEncryptionConfiguration {
        kms_key_id: remote.kms_key_id.clone(),
    }
}

fn capacity_units_configuration_to_remote(
    model: &model::CapacityUnitsConfiguration,
) -> Result<wire::CapacityUnitsConfiguration, TranslateError> {
    Ok(wire::CapacityUnitsConfiguration {
        storage_capacity_units: model.storage_capacity_units,
        query_capacity_units: model.query_capacity_units,
    })
}

fn capacity_units_configuration_to_model(
    remote: &wire::CapacityUnitsConfiguration,
) -> model::CapacityUnitsConfiguration {
    model::CapacityUnitsConfiguration {
        storage_capacity_units: remote.storage_capacity_units,
        query_capacity_units: remote.query_capacity_units,
    }
}

fn user_token_configuration_to_remote(
    model: &model::UserTokenConfiguration,
) -> Result<wire::UserTokenConfiguration, TranslateError> {
    Ok(wire::UserTokenConfiguration {
        jwt_token_type_configuration: model
            .jwt_token_type_configuration
            .as_ref()
            .map(jwt_token_type_configuration_to_remote)
            .transpose()?,
        json_token_type_configuration: model
            .json_token_type_configuration
            .as_ref()
            .map(json_token_type_configuration_to_remote)
            .transpose()?,
    })
}

fn user_token_configuration_to_model(
    remote: &wire::UserTokenConfiguration,
) -> model::UserTokenConfiguration {
    model::UserTokenConfiguration {
        jwt_token_type_configuration: remote
            .jwt_token_type_configuration
            .as_ref()
            .map(jwt_token_type_configuration_to_model),
        json_token_type_configuration: remote
            .json_token_type_configuration
            .as_ref()
            .map(json_token_type_configuration_to_model),
    }
}

fn jwt_token_type_configuration_to_remote(
    model: &model::JwtTokenTypeConfiguration,
) -> Result<wire::JwtTokenTypeConfiguration, TranslateError> {
    Ok(wire::JwtTokenTypeConfiguration {
        key_location: model
            .key_location
            .as_deref()
            .map(str::parse::<wire::KeyLocation>)
            .transpose()?,
        url: model.url.clone(),
        secret_manager_arn: model.secret_manager_arn.clone(),
        user_name_attribute_field: model.user_name_attribute_field.clone(),
        group_attribute_field: model.group_attribute_field.clone(),
        issuer: model.issuer.clone(),
        claim_regex: model.claim_regex.clone(),
    })
}

fn jwt_token_type_configuration_to_model(
    remote: &wire::JwtTokenTypeConfiguration,
) -> model::JwtTokenTypeConfiguration {
    model::JwtTokenTypeConfiguration {
        key_location: remote.key_location.map(|value| value.as_str().to_string()),
        url: remote.url.clone(),
        secret_manager_arn: remote.secret_manager_arn.clone(),
        user_name_attribute_field: remote.user_name_attribute_field.clone(),
        group_attribute_field: remote.group_attribute_field.clone(),
        issuer: remote.issuer.clone(),
        claim_regex: remote.claim_regex.clone(),
    }
}

fn json_token_type_configuration_to_remote(
    model: &model::JsonTokenTypeConfiguration,
) -> Result<wire::JsonTokenTypeConfiguration, TranslateError> {
    Ok(wire::JsonTokenTypeConfiguration {
        user_name_attribute_field: model.user_name_attribute_field.clone(),
        group_attribute_field: model.group_attribute_field.clone(),
    })
}

fn json_token_type_configuration_to_model(
    remote: &wire::JsonTokenTypeConfiguration,
) -> model::JsonTokenTypeConfiguration {
    model::JsonTokenTypeConfiguration {
        user_name_attribute_field: remote.user_name_attribute_field.clone(),
        group_attribute_field: remote.group_attribute_field.clone(),
    }
}

fn document_metadata_configuration_to_remote(
    model: &model::DocumentMetadataConfiguration,
) -> Result<wire::DocumentMetadataConfiguration, TranslateError> {
    Ok(wire::DocumentMetadataConfiguration {
        name: model.name.clone(),
        r#type: model
            .r#type
            .as_deref()
            .map(str::parse::<wire::DocumentAttributeValueType>)
            .transpose()?,
        relevance: model.relevance.as_ref().map(relevance_to_remote).transpose()?,
        search: model.search.as_ref().map(search_to_remote).transpose()?,
    })
}

fn document_metadata_configuration_to_model(
    remote: &wire::DocumentMetadataConfiguration,
) -> model::DocumentMetadataConfiguration {
    model::DocumentMetadataConfiguration {
        name: remote.name.clone(),
        r#type: remote.r#type.map(|value| value.as_str().to_string()),
        relevance: remote.relevance.as_ref().map(relevance_to_model),
        search: remote.search.as_ref().map(search_to_model),
    }
}

fn relevance_to_remote(model: &model::Relevance) -> Result<wire::Relevance, TranslateError> {
    Ok(wire::Relevance {
        freshness: model.freshness,
        importance: model.importance,
        duration: model.duration.clone(),
        rank_order: model.rank_order.as_deref().map(str::parse::<wire::Order>).transpose()?,
        value_importance_map: value_importance_to_remote(model.value_importance_items.as_deref()),
    })
}

fn relevance_to_model(remote: &wire::Relevance) -> model::Relevance {
    model::Relevance {
        freshness: remote.freshness,
        importance: remote.importance,
        duration: remote.duration.clone(),
        rank_order: remote.rank_order.map(|value| value.as_str().to_string()),
        value_importance_items: value_importance_to_model(remote.value_importance_map.as_ref()),
    }
}

fn search_to_remote(model: &model::Search) -> Result<wire::Search, TranslateError> {
    Ok(wire::Search {
        facetable: model.facetable,
        searchable: model.searchable,
        displayable: model.displayable,
        sortable: model.sortable,
    })
}

fn search_to_model(remote: &wire::Search) -> model::Search {
    model::Search {
        facetable: remote.facetable,
        searchable: remote.searchable,
        displayable: remote.displayable,
        sortable: remote.sortable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata() -> model::DocumentMetadataConfiguration {
        model::DocumentMetadataConfiguration {
            name: Some("_category".into()),
            r#type: Some("STRING_VALUE".into()),
            relevance: Some(model::Relevance {
                importance: Some(4),
                rank_order: Some("ASCENDING".into()),
                value_importance_items: Some(vec![
                    model::ValueImportanceItem {
                        key: Some("b".into()),
                        value: Some(2),
                    },
                    model::ValueImportanceItem {
                        key: Some("a".into()),
                        value: Some(9),
                    },
                ]),
                ..Default::default()
            }),
            search: Some(model::Search {
                facetable: Some(true),
                ..Default::default()
            }),
        }
    }

    #[test]
    fn test_document_metadata_to_remote() {
        let remote = document_metadata_to_remote(Some(&[metadata()][..])).unwrap().unwrap();
        assert_eq!(remote[0].r#type, Some(wire::DocumentAttributeValueType::StringValue));
        let relevance = remote[0].relevance.as_ref().unwrap();
        assert_eq!(relevance.rank_order, Some(wire::Order::Ascending));
        assert_eq!(
            relevance.value_importance_map,
            Some(BTreeMap::from([("a".to_string(), 9), ("b".to_string(), 2)]))
        );
    }

    #[test]
    fn test_value_importance_comes_back_sorted() {
        let remote = document_metadata_to_remote(Some(&[metadata()][..])).unwrap().unwrap();
        let back = document_metadata_to_model(Some(remote.as_slice())).unwrap();
        let items = back[0]
            .relevance
            .as_ref()
            .unwrap()
            .value_importance_items
            .clone()
            .unwrap();
        let keys: Vec<_> = items.iter().filter_map(|i| i.key.as_deref()).collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn test_empty_value_importance_map_collapses() {
        let remote = wire::Relevance {
            value_importance_map: Some(BTreeMap::new()),
            ..Default::default()
        };
        assert_eq!(relevance_to_model(&remote).value_importance_items, None);
    }

    #[test]
    fn test_user_tokens() {
        let model = vec![model::UserTokenConfiguration {
            jwt_token_type_configuration: Some(model::JwtTokenTypeConfiguration {
                key_location: Some("SECRET_MANAGER".into()),
                secret_manager_arn: Some("arn:aws:secretsmanager:us-east-1:1:secret:jwt".into()),
                ..Default::default()
            }),
            json_token_type_configuration: None,
        }];
        let remote = user_tokens_to_remote(Some(model.as_slice())).unwrap().unwrap();
        assert_eq!(
            remote[0].jwt_token_type_configuration.as_ref().unwrap().key_location,
            Some(wire::KeyLocation::SecretManager)
        );
        assert_eq!(user_tokens_to_model(Some(remote.as_slice())), Some(model));

        let no_remote: &[wire::UserTokenConfiguration] = &[];
        assert_eq!(user_tokens_to_model(Some(no_remote)), None);
        let no_model: &[model::UserTokenConfiguration] = &[];
        assert_eq!(user_tokens_to_remote(Some(no_model)).unwrap(), Some(Vec::new()));
    }

    #[test]
    fn test_bad_key_location_is_rejected() {
        let model = vec![model::UserTokenConfiguration {
            jwt_token_type_configuration: Some(model::JwtTokenTypeConfiguration {
                key_location: Some("DISK".into()),
                ..Default::default()
            }),
            json_token_type_configuration: None,
        }];
        assert!(user_tokens_to_remote(Some(model.as_slice())).is_err());
    }
}
