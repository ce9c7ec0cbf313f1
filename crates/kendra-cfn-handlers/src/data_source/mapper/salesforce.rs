//! Salesforce connector

use crate::data_source::model;
use crate::error::TranslateError;
use crate::mapper::{self, list_to_model, list_to_remote, strings_to_model};
use kendra_cfn_api::types as wire;

pub fn to_remote(
    model: Option<&model::SalesforceConfiguration>,
) -> Result<Option<wire::SalesforceConfiguration>, TranslateError> {
    model.map(salesforce_configuration_to_remote).transpose()
}

pub fn to_model(
    remote: Option<&wire::SalesforceConfiguration>,
) -> Option<model::SalesforceConfiguration> {
    remote.map(salesforce_configuration_to_model)
}

fn salesforce_configuration_to_remote(
    model: &model::SalesforceConfiguration,
) -> Result<wire::SalesforceConfiguration, TranslateError> {
    Ok(wire::SalesforceConfiguration {
        server_url: model.server_url.clone(),
        secret_arn: model.secret_arn.clone(),
        standard_object_configurations: list_to_remote(
            model.standard_object_configurations.as_deref(),
            salesforce_standard_object_configuration_to_remote,
        )?,
        knowledge_article_configuration: model
            .knowledge_article_configuration
            .as_ref()
            .map(salesforce_knowledge_article_configuration_to_remote)
            .transpose()?,
        chatter_feed_configuration: model
            .chatter_feed_configuration
            .as_ref()
            .map(salesforce_chatter_feed_configuration_to_remote)
            .transpose()?,
        crawl_attachments: model.crawl_attachments,
        standard_object_attachment_configuration: model
            .standard_object_attachment_configuration
            .as_ref()
            .map(salesforce_standard_object_attachment_configuration_to_remote)
            .transpose()?,
        include_attachment_file_patterns: model.include_attachment_file_patterns.clone(),
        exclude_attachment_file_patterns: model.exclude_attachment_file_patterns.clone(),
    })
}

fn salesforce_configuration_to_model(
    remote: &wire::SalesforceConfiguration,
) -> model::SalesforceConfiguration {
    model::SalesforceConfiguration {
        server_url: remote.server_url.clone(),
        secret_arn: remote.secret_arn.clone(),
        standard_object_configurations: list_to_model(
            remote.standard_object_configurations.as_deref(),
            salesforce_standard_object_configuration_to_model,
        ),
        knowledge_article_configuration: remote
            .knowledge_article_configuration
            .as_ref()
            .map(salesforce_knowledge_article_configuration_to_model),
        chatter_feed_configuration: remote
            .chatter_feed_configuration
            .as_ref()
            .map(salesforce_chatter_feed_configuration_to_model),
        crawl_attachments: remote.crawl_attachments,
        standard_object_attachment_configuration: remote
            .standard_object_attachment_configuration
            .as_ref()
            .map(salesforce_standard_object_attachment_configuration_to_model),
        include_attachment_file_patterns: strings_to_model(
            remote.include_attachment_file_patterns.as_deref(),
        ),
        exclude_attachment_file_patterns: strings_to_model(
            remote.exclude_attachment_file_patterns.as_deref(),
        ),
    }
}

fn salesforce_standard_object_configuration_to_remote(
    model: &model::SalesforceStandardObjectConfiguration,
) -> Result<wire::SalesforceStandardObjectConfiguration, TranslateError> {
    Ok(wire::SalesforceStandardObjectConfiguration {
        name: model
            .name
            .as_deref()
            .map(str::parse::<wire::SalesforceStandardObjectName>)
            .transpose()?,
        document_data_field_name: model.document_data_field_name.clone(),
        document_title_field_name: model.document_title_field_name.clone(),
        field_mappings: list_to_remote(
            model.field_mappings.as_deref(),
            mapper::field_mapping_to_remote,
        )?,
    })
}

fn salesforce_standard_object_configuration_to_model(
    remote: &wire::SalesforceStandardObjectConfiguration,
) -> model::SalesforceStandardObjectConfiguration {
    model::SalesforceStandardObjectConfiguration {
        name: remote.name.map(|value| value.as_str().to_string()),
        document_data_field_name: remote.document_data_field_name.clone(),
        document_title_field_name: remote.document_title_field_name.clone(),
        field_mappings: list_to_model(
            remote.field_mappings.as_deref(),
            mapper::field_mapping_to_model,
        ),
    }
}

fn salesforce_knowledge_article_configuration_to_remote(
    model: &model::SalesforceKnowledgeArticleConfiguration,
) -> Result<wire::SalesforceKnowledgeArticleConfiguration, TranslateError> {
    Ok(wire::SalesforceKnowledgeArticleConfiguration {
        included_states: list_to_remote(
            model.included_states.as_deref(),
            |value| value.parse::<wire::SalesforceKnowledgeArticleState>(),
        )?,
        standard_knowledge_article_type_configuration: model
            .standard_knowledge_article_type_configuration
            .as_ref()
            .map(salesforce_standard_knowledge_article_type_configuration_to_remote)
            .transpose()?,
        custom_knowledge_article_type_configurations: list_to_remote(
            model.custom_knowledge_article_type_configurations.as_deref(),
            salesforce_custom_knowledge_article_type_configuration_to_remote,
        )?,
    })
}

fn salesforce_knowledge_article_configuration_to_model(
    remote: &wire::SalesforceKnowledgeArticleConfiguration,
) -> model::SalesforceKnowledgeArticleConfiguration {
    model::SalesforceKnowledgeArticleConfiguration {
        included_states: list_to_model(
            remote.included_states.as_deref(),
            |value| value.as_str().to_string(),
        ),
        standard_knowledge_article_type_configuration: remote
            .standard_knowledge_article_type_configuration
            .as_ref()
            .map(salesforce_standard_knowledge_article_type_configuration_to_model),
        custom_knowledge_article_type_configurations: list_to_model(
            remote.custom_knowledge_article_type_configurations.as_deref(),
            salesforce_custom_knowledge_article_type_configuration_to_model,
        ),
    }
}

fn salesforce_standard_knowledge_article_type_configuration_to_remote(
    model: &model::SalesforceStandardKnowledgeArticleTypeConfiguration,
) -> Result<wire::SalesforceStandardKnowledgeArticleTypeConfiguration, TranslateError> {
    Ok(wire::SalesforceStandardKnowledgeArticleTypeConfiguration {
        document_data_field_name: model.document_data_field_name.clone(),
        document_title_field_name: model.document_title_field_name.clone(),
        field_mappings: list_to_remote(
            model.field_mappings.as_deref(),
            mapper::field_mapping_to_remote,
        )?,
    })
}

fn salesforce_standard_knowledge_article_type_configuration_to_model(
    remote: &wire::SalesforceStandardKnowledgeArticleTypeConfiguration,
) -> model::SalesforceStandardKnowledgeArticleTypeConfiguration {
    model::SalesforceStandardKnowledgeArticleTypeConfiguration {
        document_data_field_name: remote.document_data_field_name.clone(),
        document_title_field_name: remote.document_title_field_name.clone(),
        field_mappings: list_to_model(
            remote.field_mappings.as_deref(),
            mapper::field_mapping_to_model,
        ),
    }
}

fn salesforce_custom_knowledge_article_type_configuration_to_remote(
    model: &model::SalesforceCustomKnowledgeArticleTypeConfiguration,
) -> Result<wire::SalesforceCustomKnowledgeArticleTypeConfiguration, TranslateError> {
    Ok(wire::SalesforceCustomKnowledgeArticleTypeConfiguration {
        name: model.name.clone(),
        document_data_field_name: model.document_data_field_name.clone(),
        document_title_field_name: model.document_title_field_name.clone(),
        field_mappings: list_to_remote(
            model.field_mappings.as_deref(),
            mapper::field_mapping_to_remote,
        )?,
    })
}

fn salesforce_custom_knowledge_article_type_configuration_to_model(
    remote: &wire::SalesforceCustomKnowledgeArticleTypeConfiguration,
) -> model::SalesforceCustomKnowledgeArticleTypeConfiguration {
    model::SalesforceCustomKnowledgeArticleTypeConfiguration {
        name: remote.name.clone(),
        document_data_field_name: remote.document_data_field_name.clone(),
        document_title_field_name: remote.document_title_field_name.clone(),
        field_mappings: list_to_model(
            remote.field_mappings.as_deref(),
            mapper::field_mapping_to_model,
        ),
    }
}

fn salesforce_chatter_feed_configuration_to_remote(
    model: &model::SalesforceChatterFeedConfiguration,
) -> Result<wire::SalesforceChatterFeedConfiguration, TranslateError> {
    Ok(wire::SalesforceChatterFeedConfiguration {
        document_data_field_name: model.document_data_field_name.clone(),
        document_title_field_name: model.document_title_field_name.clone(),
        field_mappings: list_to_remote(
            model.field_mappings.as_deref(),
            mapper::field_mapping_to_remote,
        )?,
        include_filter_types: list_to_remote(
            model.include_filter_types.as_deref(),
            |value| value.parse::<wire::SalesforceChatterFeedIncludeFilterType>(),
        )?,
    })
}

fn salesforce_chatter_feed_configuration_to_model(
    remote: &wire::SalesforceChatterFeedConfiguration,
) -> model::SalesforceChatterFeedConfiguration {
    model::SalesforceChatterFeedConfiguration {
        document_data_field_name: remote.document_data_field_name.clone(),
        document_title_field_name: remote.document_title_field_name.clone(),
        field_mappings: list_to_model(
            remote.field_mappings.as_deref(),
            mapper::field_mapping_to_model,
        ),
        include_filter_types: list_to_model(
            remote.include_filter_types.as_deref(),
            |value| value.as_str().to_string(),
        ),
    }
}

fn salesforce_standard_object_attachment_configuration_to_remote(
    model: &model::SalesforceStandardObjectAttachmentConfiguration,
) -> Result<wire::SalesforceStandardObjectAttachmentConfiguration, TranslateError> {
    Ok(wire::SalesforceStandardObjectAttachmentConfiguration {
        document_title_field_name: model.document_title_field_name.clone(),
        field_mappings: list_to_remote(
            model.field_mappings.as_deref(),
            mapper::field_mapping_to_remote,
        )?,
    })
}

fn salesforce_standard_object_attachment_configuration_to_model(
    remote: &wire::SalesforceStandardObjectAttachmentConfiguration,
) -> model::SalesforceStandardObjectAttachmentConfiguration {
    model::SalesforceStandardObjectAttachmentConfiguration {
        document_title_field_name: remote.document_title_field_name.clone(),
        field_mappings: list_to_model(
            remote.field_mappings.as_deref(),
            mapper::field_mapping_to_model,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(from: &str, to: &str) -> model::DataSourceToIndexFieldMapping {
        model::DataSourceToIndexFieldMapping {
            data_source_field_name: Some(from.into()),
            date_field_format: None,
            index_field_name: Some(to.into()),
        }
    }

    fn populated() -> model::SalesforceConfiguration {
        model::SalesforceConfiguration {
            server_url: Some("https://example.my.salesforce.com".into()),
            secret_arn: Some("arn:aws:secretsmanager:us-east-1:111122223333:secret:sf".into()),
            standard_object_configurations: Some(vec![model::SalesforceStandardObjectConfiguration {
                name: Some("ACCOUNT".into()),
                document_data_field_name: Some("Description".into()),
                document_title_field_name: Some("Name".into()),
                field_mappings: Some(vec![mapping("Industry", "industry")]),
            }]),
            knowledge_article_configuration: Some(model::SalesforceKnowledgeArticleConfiguration {
                included_states: Some(vec!["PUBLISHED".into(), "DRAFT".into()]),
                standard_knowledge_article_type_configuration: Some(
                    model::SalesforceStandardKnowledgeArticleTypeConfiguration {
                        document_data_field_name: Some("Summary".into()),
                        document_title_field_name: Some("Title".into()),
                        field_mappings: Some(vec![mapping("ArticleNumber", "article")]),
                    },
                ),
                custom_knowledge_article_type_configurations: Some(vec![
                    model::SalesforceCustomKnowledgeArticleTypeConfiguration {
                        name: Some("FAQ__kav".into()),
                        document_data_field_name: Some("Answer__c".into()),
                        document_title_field_name: Some("Question__c".into()),
                        field_mappings: Some(vec![mapping("Category__c", "category")]),
                    },
                ]),
            }),
            chatter_feed_configuration: Some(model::SalesforceChatterFeedConfiguration {
                document_data_field_name: Some("Body".into()),
                document_title_field_name: Some("Title".into()),
                field_mappings: Some(vec![mapping("CreatedById", "author")]),
                include_filter_types: Some(vec!["ACTIVE_USER".into()]),
            }),
            crawl_attachments: Some(true),
            standard_object_attachment_configuration: Some(
                model::SalesforceStandardObjectAttachmentConfiguration {
                    document_title_field_name: Some("Name".into()),
                    field_mappings: Some(vec![mapping("ContentType", "mime")]),
                },
            ),
            include_attachment_file_patterns: Some(vec!["*.pdf".into()]),
            exclude_attachment_file_patterns: Some(vec!["*.zip".into()]),
        }
    }

    #[test]
    fn test_round_trip() {
        let model = populated();
        let remote = to_remote(Some(&model)).unwrap().unwrap();
        let articles = remote.knowledge_article_configuration.as_ref().unwrap();
        assert_eq!(
            articles.included_states,
            Some(vec![
                wire::SalesforceKnowledgeArticleState::Published,
                wire::SalesforceKnowledgeArticleState::Draft,
            ])
        );
        assert_eq!(to_model(Some(&remote)), Some(model));
    }

    #[test]
    fn test_unknown_object_name_is_rejected() {
        let model = model::SalesforceConfiguration {
            standard_object_configurations: Some(vec![model::SalesforceStandardObjectConfiguration {
                name: Some("ACCOUNTS".into()),
                ..Default::default()
            }]),
            ..Default::default()
        };
        assert!(matches!(
            to_remote(Some(&model)).unwrap_err(),
            TranslateError::UnknownVariant(_)
        ));
    }

    #[test]
    fn test_empty_lists_sent_as_is() {
        let model = model::SalesforceConfiguration {
            standard_object_configurations: Some(Vec::new()),
            knowledge_article_configuration: Some(model::SalesforceKnowledgeArticleConfiguration {
                included_states: Some(Vec::new()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let remote = to_remote(Some(&model)).unwrap().unwrap();
        assert_eq!(remote.standard_object_configurations, Some(Vec::new()));
        assert_eq!(
            remote.knowledge_article_configuration.unwrap().included_states,
            Some(Vec::new())
        );
    }

    #[test]
    fn test_empty_lists_collapse_on_read() {
        let remote = wire::SalesforceConfiguration {
            standard_object_configurations: Some(Vec::new()),
            knowledge_article_configuration: Some(wire::SalesforceKnowledgeArticleConfiguration {
                included_states: Some(Vec::new()),
                standard_knowledge_article_type_configuration: Some(
                    wire::SalesforceStandardKnowledgeArticleTypeConfiguration {
                        field_mappings: Some(Vec::new()),
                        ..Default::default()
                    },
                ),
                custom_knowledge_article_type_configurations: Some(vec![
                    wire::SalesforceCustomKnowledgeArticleTypeConfiguration {
                        name: Some("FAQ__kav".into()),
                        field_mappings: Some(Vec::new()),
                        ..Default::default()
                    },
                ]),
            }),
            chatter_feed_configuration: Some(wire::SalesforceChatterFeedConfiguration {
                field_mappings: Some(Vec::new()),
                include_filter_types: Some(Vec::new()),
                ..Default::default()
            }),
            standard_object_attachment_configuration: Some(
                wire::SalesforceStandardObjectAttachmentConfiguration {
                    field_mappings: Some(Vec::new()),
                    ..Default::default()
                },
            ),
            include_attachment_file_patterns: Some(Vec::new()),
            exclude_attachment_file_patterns: Some(Vec::new()),
            ..Default::default()
        };
        let model = to_model(Some(&remote)).unwrap();
        assert_eq!(model.standard_object_configurations, None);
        assert_eq!(model.include_attachment_file_patterns, None);
        assert_eq!(model.exclude_attachment_file_patterns, None);

        let articles = model.knowledge_article_configuration.unwrap();
        assert_eq!(articles.included_states, None);
        assert_eq!(
            articles.standard_knowledge_article_type_configuration,
            Some(model::SalesforceStandardKnowledgeArticleTypeConfiguration::default())
        );
        let custom = articles.custom_knowledge_article_type_configurations.unwrap();
        assert_eq!(custom[0].field_mappings, None);

        let chatter = model.chatter_feed_configuration.unwrap();
        assert_eq!(chatter.field_mappings, None);
        assert_eq!(chatter.include_filter_types, None);
        assert_eq!(
            model.standard_object_attachment_configuration.unwrap().field_mappings,
            None
        );
    }
}
