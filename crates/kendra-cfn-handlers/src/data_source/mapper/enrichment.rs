//! Custom document enrichment

use crate::data_source::model;
use crate::error::TranslateError;
use crate::mapper::{format_date, list_to_model, list_to_remote, parse_date, strings_to_model};
use kendra_cfn_api::types as wire;

pub fn to_remote(
    model: Option<&model::CustomDocumentEnrichmentConfiguration>,
) -> Result<Option<wire::CustomDocumentEnrichmentConfiguration>, TranslateError> {
    model.map(enrichment_configuration_to_remote).transpose()
}

pub fn to_model(
    remote: Option<&wire::CustomDocumentEnrichmentConfiguration>,
) -> Option<model::CustomDocumentEnrichmentConfiguration> {
    remote.map(enrichment_configuration_to_model)
}

fn enrichment_configuration_to_remote(
    model: &model::CustomDocumentEnrichmentConfiguration,
) -> Result<wire::CustomDocumentEnrichmentConfiguration, TranslateError> {
    Ok(wire::CustomDocumentEnrichmentConfiguration {
        inline_configurations: list_to_remote(
            model.inline_configurations.as_deref(),
            inline_configuration_to_remote,
        )?,
        pre_extraction_hook_configuration: model
            .pre_extraction_hook_configuration
            .as_ref()
            .map(hook_configuration_to_remote)
            .transpose()?,
        post_extraction_hook_configuration: model
            .post_extraction_hook_configuration
            .as_ref()
            .map(hook_configuration_to_remote)
            .transpose()?,
        role_arn: model.role_arn.clone(),
    })
}

fn enrichment_configuration_to_model(
    remote: &wire::CustomDocumentEnrichmentConfiguration,
) -> model::CustomDocumentEnrichmentConfiguration {
    model::CustomDocumentEnrichmentConfiguration {
        inline_configurations: list_to_model(
            remote.inline_configurations.as_deref(),
            inline_configuration_to_model,
        ),
        pre_extraction_hook_configuration: remote
            .pre_extraction_hook_configuration
            .as_ref()
            .map(hook_configuration_to_model),
        post_extraction_hook_configuration: remote
            .post_extraction_hook_configuration
            .as_ref()
            .map(hook_configuration_to_model),
        role_arn: remote.role_arn.clone(),
    }
}

fn inline_configuration_to_remote(
    model: &model::InlineCustomDocumentEnrichmentConfiguration,
) -> Result<wire::InlineCustomDocumentEnrichmentConfiguration, TranslateError> {
    Ok(wire::InlineCustomDocumentEnrichmentConfiguration {
        condition: model
            .condition
            .as_ref()
            .map(document_attribute_condition_to_remote)
            .transpose()?,
        target: model.target.as_ref().map(document_attribute_target_to_remote).transpose()?,
        document_content_deletion: model.document_content_deletion,
    })
}

fn inline_configuration_to_model(
    remote: &wire::InlineCustomDocumentEnrichmentConfiguration,
) -> model::InlineCustomDocumentEnrichmentConfiguration {
    model::InlineCustomDocumentEnrichmentConfiguration {
        condition: remote.condition.as_ref().map(document_attribute_condition_to_model),
        target: remote.target.as_ref().map(document_attribute_target_to_model),
        document_content_deletion: remote.document_content_deletion,
    }
}

fn document_attribute_condition_to_remote(
    model: &model::DocumentAttributeCondition,
) -> Result<wire::DocumentAttributeCondition, TranslateError> {
    Ok(wire::DocumentAttributeCondition {
        condition_document_attribute_key: model.condition_document_attribute_key.clone(),
        operator: model.operator.as_deref().map(str::parse::<wire::ConditionOperator>).transpose()?,
        condition_on_value: model
            .condition_on_value
            .as_ref()
            .map(document_attribute_value_to_remote)
            .transpose()?,
    })
}

fn document_attribute_condition_to_model(
    remote: &wire::DocumentAttributeCondition,
) -> model::DocumentAttributeCondition {
    model::DocumentAttributeCondition {
        condition_document_attribute_key: remote.condition_document_attribute_key.clone(),
        operator: remote.operator.map(|value| value.as_str().to_string()),
        condition_on_value: remote
            .condition_on_value
            .as_ref()
            .map(document_attribute_value_to_model),
    }
}

fn document_attribute_target_to_remote(
    model: &model::DocumentAttributeTarget,
) -> Result<wire::DocumentAttributeTarget, TranslateError> {
    Ok(wire::DocumentAttributeTarget {
        target_document_attribute_key: model.target_document_attribute_key.clone(),
        target_document_attribute_value_deletion: model.target_document_attribute_value_deletion,
        target_document_attribute_value: model
            .target_document_attribute_value
            .as_ref()
            .map(document_attribute_value_to_remote)
            .transpose()?,
    })
}

fn document_attribute_target_to_model(
    remote: &wire::DocumentAttributeTarget,
) -> model::DocumentAttributeTarget {
    model::DocumentAttributeTarget {
        target_document_attribute_key: remote.target_document_attribute_key.clone(),
        target_document_attribute_value_deletion: remote.target_document_attribute_value_deletion,
        target_document_attribute_value: remote
            .target_document_attribute_value
            .as_ref()
            .map(document_attribute_value_to_model),
    }
}

fn hook_configuration_to_remote(
    model: &model::HookConfiguration,
) -> Result<wire::HookConfiguration, TranslateError> {
    Ok(wire::HookConfiguration {
        invocation_condition: model
            .invocation_condition
            .as_ref()
            .map(document_attribute_condition_to_remote)
            .transpose()?,
        lambda_arn: model.lambda_arn.clone(),
        s3_bucket: model.s3_bucket.clone(),
    })
}

fn hook_configuration_to_model(remote: &wire::HookConfiguration) -> model::HookConfiguration {
    model::HookConfiguration {
        invocation_condition: remote
            .invocation_condition
            .as_ref()
            .map(document_attribute_condition_to_model),
        lambda_arn: remote.lambda_arn.clone(),
        s3_bucket: remote.s3_bucket.clone(),
    }
}

fn document_attribute_value_to_remote(
    model: &model::DocumentAttributeValue,
) -> Result<wire::DocumentAttributeValue, TranslateError> {
    Ok(wire::DocumentAttributeValue {
        string_value: model.string_value.clone(),
        string_list_value: model.string_list_value.clone(),
        long_value: model.long_value,
        date_value: model.date_value.as_deref().map(parse_date).transpose()?,
    })
}

fn document_attribute_value_to_model(
    remote: &wire::DocumentAttributeValue,
) -> model::DocumentAttributeValue {
    model::DocumentAttributeValue {
        string_value: remote.string_value.clone(),
        string_list_value: strings_to_model(remote.string_list_value.as_deref()),
        long_value: remote.long_value,
        date_value: remote.date_value.map(format_date),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn condition() -> model::DocumentAttributeCondition {
        model::DocumentAttributeCondition {
            condition_document_attribute_key: Some("_source_uri".into()),
            operator: Some("BeginsWith".into()),
            condition_on_value: Some(model::DocumentAttributeValue {
                string_value: Some("https://intranet/".into()),
                ..Default::default()
            }),
        }
    }

    fn populated() -> model::CustomDocumentEnrichmentConfiguration {
        model::CustomDocumentEnrichmentConfiguration {
            inline_configurations: Some(vec![model::InlineCustomDocumentEnrichmentConfiguration {
                condition: Some(condition()),
                target: Some(model::DocumentAttributeTarget {
                    target_document_attribute_key: Some("_category".into()),
                    target_document_attribute_value_deletion: Some(false),
                    target_document_attribute_value: Some(model::DocumentAttributeValue {
                        string_list_value: Some(vec!["internal".into(), "wiki".into()]),
                        long_value: Some(7),
                        date_value: Some("2024-03-01T12:00:00Z".into()),
                        ..Default::default()
                    }),
                }),
                document_content_deletion: Some(false),
            }]),
            pre_extraction_hook_configuration: Some(model::HookConfiguration {
                invocation_condition: Some(condition()),
                lambda_arn: Some("arn:aws:lambda:us-east-1:111122223333:function:pre".into()),
                s3_bucket: Some("enrichment".into()),
            }),
            post_extraction_hook_configuration: Some(model::HookConfiguration {
                invocation_condition: None,
                lambda_arn: Some("arn:aws:lambda:us-east-1:111122223333:function:post".into()),
                s3_bucket: Some("enrichment".into()),
            }),
            role_arn: Some("arn:aws:iam::111122223333:role/enrichment".into()),
        }
    }

    #[test]
    fn test_round_trip() {
        let model = populated();
        let remote = to_remote(Some(&model)).unwrap().unwrap();
        let inline = &remote.inline_configurations.as_ref().unwrap()[0];
        let value = inline
            .target
            .as_ref()
            .and_then(|target| target.target_document_attribute_value.as_ref())
            .unwrap();
        assert_eq!(
            value.date_value,
            Some(Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap())
        );
        assert_eq!(
            inline.condition.as_ref().unwrap().operator,
            Some(wire::ConditionOperator::BeginsWith)
        );
        assert_eq!(to_model(Some(&remote)), Some(model));
    }

    #[test]
    fn test_bad_date_is_rejected() {
        let model = model::CustomDocumentEnrichmentConfiguration {
            inline_configurations: Some(vec![model::InlineCustomDocumentEnrichmentConfiguration {
                condition: Some(model::DocumentAttributeCondition {
                    condition_on_value: Some(model::DocumentAttributeValue {
                        date_value: Some("March 1st".into()),
                        ..Default::default()
                    }),
                    ..Default::default()
                }),
                ..Default::default()
            }]),
            ..Default::default()
        };
        assert_eq!(
            to_remote(Some(&model)).unwrap_err(),
            TranslateError::InvalidTimestamp {
                value: "March 1st".into()
            }
        );
    }

    #[test]
    fn test_empty_lists_sent_as_is() {
        let model = model::CustomDocumentEnrichmentConfiguration {
            inline_configurations: Some(vec![model::InlineCustomDocumentEnrichmentConfiguration {
                target: Some(model::DocumentAttributeTarget {
                    target_document_attribute_value: Some(model::DocumentAttributeValue {
                        string_list_value: Some(Vec::new()),
                        ..Default::default()
                    }),
                    ..Default::default()
                }),
                ..Default::default()
            }]),
            ..Default::default()
        };
        let remote = to_remote(Some(&model)).unwrap().unwrap();
        let value = remote.inline_configurations.unwrap()[0]
            .target
            .clone()
            .and_then(|target| target.target_document_attribute_value)
            .unwrap();
        assert_eq!(value.string_list_value, Some(Vec::new()));

        let model = model::CustomDocumentEnrichmentConfiguration {
            inline_configurations: Some(Vec::new()),
            ..Default::default()
        };
        let remote = to_remote(Some(&model)).unwrap().unwrap();
        assert_eq!(remote.inline_configurations, Some(Vec::new()));
    }

    #[test]
    fn test_empty_lists_collapse_on_read() {
        let empty_value = wire::DocumentAttributeValue {
            string_list_value: Some(Vec::new()),
            ..Default::default()
        };
        let remote = wire::CustomDocumentEnrichmentConfiguration {
            inline_configurations: Some(vec![wire::InlineCustomDocumentEnrichmentConfiguration {
                condition: Some(wire::DocumentAttributeCondition {
                    condition_on_value: Some(empty_value.clone()),
                    ..Default::default()
                }),
                target: Some(wire::DocumentAttributeTarget {
                    target_document_attribute_value: Some(empty_value.clone()),
                    ..Default::default()
                }),
                document_content_deletion: None,
            }]),
            pre_extraction_hook_configuration: Some(wire::HookConfiguration {
                invocation_condition: Some(wire::DocumentAttributeCondition {
                    condition_on_value: Some(empty_value),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        };
        let model = to_model(Some(&remote)).unwrap();
        let inline = &model.inline_configurations.as_ref().unwrap()[0];
        let condition_value = inline
            .condition
            .as_ref()
            .and_then(|c| c.condition_on_value.as_ref())
            .unwrap();
        assert_eq!(condition_value.string_list_value, None);
        let target_value = inline
            .target
            .as_ref()
            .and_then(|t| t.target_document_attribute_value.as_ref())
            .unwrap();
        assert_eq!(target_value.string_list_value, None);
        let hook_value = model
            .pre_extraction_hook_configuration
            .as_ref()
            .and_then(|h| h.invocation_condition.as_ref())
            .and_then(|c| c.condition_on_value.as_ref())
            .unwrap();
        assert_eq!(hook_value, &model::DocumentAttributeValue::default());

        let remote = wire::CustomDocumentEnrichmentConfiguration {
            inline_configurations: Some(Vec::new()),
            ..Default::default()
        };
        assert_eq!(to_model(Some(&remote)).unwrap().inline_configurations, None);
    }
}
