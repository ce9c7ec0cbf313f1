//! ServiceNow connector

use crate::data_source::model;
use crate::error::TranslateError;
use crate::mapper::{self, list_to_model, list_to_remote, strings_to_model};
use kendra_cfn_api::types as wire;

pub fn to_remote(
    model: Option<&model::ServiceNowConfiguration>,
) -> Result<Option<wire::ServiceNowConfiguration>, TranslateError> {
    model.map(service_now_configuration_to_remote).transpose()
}

pub fn to_model(
    remote: Option<&wire::ServiceNowConfiguration>,
) -> Option<model::ServiceNowConfiguration> {
    remote.map(service_now_configuration_to_model)
}

fn service_now_configuration_to_remote(
    model: &model::ServiceNowConfiguration,
) -> Result<wire::ServiceNowConfiguration, TranslateError> {
    Ok(wire::ServiceNowConfiguration {
        host_url: model.host_url.clone(),
        secret_arn: model.secret_arn.clone(),
        service_now_build_version: model
            .service_now_build_version
            .as_deref()
            .map(str::parse::<wire::ServiceNowBuildVersionType>)
            .transpose()?,
        knowledge_article_configuration: model
            .knowledge_article_configuration
            .as_ref()
            .map(service_now_knowledge_article_configuration_to_remote)
            .transpose()?,
        service_catalog_configuration: model
            .service_catalog_configuration
            .as_ref()
            .map(service_now_service_catalog_configuration_to_remote)
            .transpose()?,
        authentication_type: model
            .authentication_type
            .as_deref()
            .map(str::parse::<wire::ServiceNowAuthenticationType>)
            .transpose()?,
    })
}

fn service_now_configuration_to_model(
    remote: &wire::ServiceNowConfiguration,
) -> model::ServiceNowConfiguration {
    model::ServiceNowConfiguration {
        host_url: remote.host_url.clone(),
        secret_arn: remote.secret_arn.clone(),
        service_now_build_version: remote
            .service_now_build_version
            .map(|value| value.as_str().to_string()),
        knowledge_article_configuration: remote
            .knowledge_article_configuration
            .as_ref()
            .map(service_now_knowledge_article_configuration_to_model),
        service_catalog_configuration: remote
            .service_catalog_configuration
            .as_ref()
            .map(service_now_service_catalog_configuration_to_model),
        authentication_type: remote.authentication_type.map(|value| value.as_str().to_string()),
    }
}

fn service_now_knowledge_article_configuration_to_remote(
    model: &model::ServiceNowKnowledgeArticleConfiguration,
) -> Result<wire::ServiceNowKnowledgeArticleConfiguration, TranslateError> {
    Ok(wire::ServiceNowKnowledgeArticleConfiguration {
        crawl_attachments: model.crawl_attachments,
        include_attachment_file_patterns: model.include_attachment_file_patterns.clone(),
        exclude_attachment_file_patterns: model.exclude_attachment_file_patterns.clone(),
        document_data_field_name: model.document_data_field_name.clone(),
        document_title_field_name: model.document_title_field_name.clone(),
        field_mappings: list_to_remote(
            model.field_mappings.as_deref(),
            mapper::field_mapping_to_remote,
        )?,
        filter_query: model.filter_query.clone(),
    })
}

fn service_now_knowledge_article_configuration_to_model(
    remote: &wire::ServiceNowKnowledgeArticleConfiguration,
) -> model::ServiceNowKnowledgeArticleConfiguration {
    model::ServiceNowKnowledgeArticleConfiguration {
        crawl_attachments: remote.crawl_attachments,
        include_attachment_file_patterns: strings_to_model(
            remote.include_attachment_file_patterns.as_deref(),
        ),
        exclude_attachment_file_patterns: strings_to_model(
            remote.exclude_attachment_file_patterns.as_deref(),
        ),
        document_data_field_name: remote.document_data_field_name.clone(),
        document_title_field_name: remote.document_title_field_name.clone(),
        field_mappings: list_to_model(
            remote.field_mappings.as_deref(),
            mapper::field_mapping_to_model,
        ),
        filter_query: remote.filter_query.clone(),
    }
}

fn service_now_service_catalog_configuration_to_remote(
    model: &model::ServiceNowServiceCatalogConfiguration,
) -> Result<wire::ServiceNowServiceCatalogConfiguration, TranslateError> {
    Ok(wire::ServiceNowServiceCatalogConfiguration {
        crawl_attachments: model.crawl_attachments,
        include_attachment_file_patterns: model.include_attachment_file_patterns.clone(),
        exclude_attachment_file_patterns: model.exclude_attachment_file_patterns.clone(),
        document_data_field_name: model.document_data_field_name.clone(),
        document_title_field_name: model.document_title_field_name.clone(),
        field_mappings: list_to_remote(
            model.field_mappings.as_deref(),
            mapper::field_mapping_to_remote,
        )?,
    })
}

fn service_now_service_catalog_configuration_to_model(
    remote: &wire::ServiceNowServiceCatalogConfiguration,
) -> model::ServiceNowServiceCatalogConfiguration {
    model::ServiceNowServiceCatalogConfiguration {
        crawl_attachments: remote.crawl_attachments,
        include_attachment_file_patterns: strings_to_model(
            remote.include_attachment_file_patterns.as_deref(),
        ),
        exclude_attachment_file_patterns: strings_to_model(
            remote.exclude_attachment_file_patterns.as_deref(),
        ),
        document_data_field_name: remote.document_data_field_name.clone(),
        document_title_field_name: remote.document_title_field_name.clone(),
        field_mappings: list_to_model(
            remote.field_mappings.as_deref(),
            mapper::field_mapping_to_model,
        ),
    }
}
