//! Confluence connector

use crate::data_source::model;
use crate::error::TranslateError;
use crate::mapper::{self, list_to_model, list_to_remote, strings_to_model};
use kendra_cfn_api::types as wire;

pub fn to_remote(
    model: Option<&model::ConfluenceConfiguration>,
) -> Result<Option<wire::ConfluenceConfiguration>, TranslateError> {
    model.map(confluence_configuration_to_remote).transpose()
}

pub fn to_model(
    remote: Option<&wire::ConfluenceConfiguration>,
) -> Option<model::ConfluenceConfiguration> {
    remote.map(confluence_configuration_to_model)
}

fn confluence_configuration_to_remote(
    model: &model::ConfluenceConfiguration,
) -> Result<wire::ConfluenceConfiguration, TranslateError> {
    Ok(wire::ConfluenceConfiguration {
        server_url: model.server_url.clone(),
        secret_arn: model.secret_arn.clone(),
        version: model.version.as_deref().map(str::parse::<wire::ConfluenceVersion>).transpose()?,
        space_configuration: model
            .space_configuration
            .as_ref()
            .map(confluence_space_configuration_to_remote)
            .transpose()?,
        page_configuration: model
            .page_configuration
            .as_ref()
            .map(confluence_page_configuration_to_remote)
            .transpose()?,
        blog_configuration: model
            .blog_configuration
            .as_ref()
            .map(confluence_blog_configuration_to_remote)
            .transpose()?,
        attachment_configuration: model
            .attachment_configuration
            .as_ref()
            .map(confluence_attachment_configuration_to_remote)
            .transpose()?,
        vpc_configuration: model
            .vpc_configuration
            .as_ref()
            .map(mapper::vpc_configuration_to_remote)
            .transpose()?,
        inclusion_patterns: model.inclusion_patterns.clone(),
        exclusion_patterns: model.exclusion_patterns.clone(),
        proxy_configuration: model
            .proxy_configuration
            .as_ref()
            .map(mapper::proxy_configuration_to_remote)
            .transpose()?,
        authentication_type: model
            .authentication_type
            .as_deref()
            .map(str::parse::<wire::ConfluenceAuthenticationType>)
            .transpose()?,
    })
}

fn confluence_configuration_to_model(
    remote: &wire::ConfluenceConfiguration,
) -> model::ConfluenceConfiguration {
    model::ConfluenceConfiguration {
        server_url: remote.server_url.clone(),
        secret_arn: remote.secret_arn.clone(),
        version: remote.version.map(|value| value.as_str().to_string()),
        space_configuration: remote
            .space_configuration
            .as_ref()
            .map(confluence_space_configuration_to_model),
        page_configuration: remote
            .page_configuration
            .as_ref()
            .map(confluence_page_configuration_to_model),
        blog_configuration: remote
            .blog_configuration
            .as_ref()
            .map(confluence_blog_configuration_to_model),
        attachment_configuration: remote
            .attachment_configuration
            .as_ref()
            .map(confluence_attachment_configuration_to_model),
        vpc_configuration: remote
            .vpc_configuration
            .as_ref()
            .map(mapper::vpc_configuration_to_model),
        inclusion_patterns: strings_to_model(remote.inclusion_patterns.as_deref()),
        exclusion_patterns: strings_to_model(remote.exclusion_patterns.as_deref()),
        proxy_configuration: remote
            .proxy_configuration
            .as_ref()
            .map(mapper::proxy_configuration_to_model),
        authentication_type: remote.authentication_type.map(|value| value.as_str().to_string()),
    }
}

fn confluence_space_configuration_to_remote(
    model: &model::ConfluenceSpaceConfiguration,
) -> Result<wire::ConfluenceSpaceConfiguration, TranslateError> {
    Ok(wire::ConfluenceSpaceConfiguration {
        crawl_personal_spaces: model.crawl_personal_spaces,
        crawl_archived_spaces: model.crawl_archived_spaces,
        include_spaces: model.include_spaces.clone(),
        exclude_spaces: model.exclude_spaces.clone(),
        space_field_mappings: list_to_remote(
            model.space_field_mappings.as_deref(),
            confluence_space_to_index_field_mapping_to_remote,
        )?,
    })
}

fn confluence_space_configuration_to_model(
    remote: &wire::ConfluenceSpaceConfiguration,
) -> model::ConfluenceSpaceConfiguration {
    model::ConfluenceSpaceConfiguration {
        crawl_personal_spaces: remote.crawl_personal_spaces,
        crawl_archived_spaces: remote.crawl_archived_spaces,
        include_spaces: strings_to_model(remote.include_spaces.as_deref()),
        exclude_spaces: strings_to_model(remote.exclude_spaces.as_deref()),
        space_field_mappings: list_to_model(
            remote.space_field_mappings.as_deref(),
            confluence_space_to_index_field_mapping_to_model,
        ),
    }
}

fn confluence_space_to_index_field_mapping_to_remote(
    model: &model::ConfluenceSpaceToIndexFieldMapping,
) -> Result<wire::ConfluenceSpaceToIndexFieldMapping, TranslateError> {
    Ok(wire::ConfluenceSpaceToIndexFieldMapping {
        data_source_field_name: model
            .data_source_field_name
            .as_deref()
            .map(str::parse::<wire::ConfluenceSpaceFieldName>)
            .transpose()?,
        date_field_format: model.date_field_format.clone(),
        index_field_name: model.index_field_name.clone(),
    })
}

fn confluence_space_to_index_field_mapping_to_model(
    remote: &wire::ConfluenceSpaceToIndexFieldMapping,
) -> model::ConfluenceSpaceToIndexFieldMapping {
    model::ConfluenceSpaceToIndexFieldMapping {
        data_source_field_name: remote
            .data_source_field_name
            .map(|value| value.as_str().to_string()),
        date_field_format: remote.date_field_format.clone(),
        index_field_name: remote.index_field_name.clone(),
    }
}

fn confluence_page_configuration_to_remote(
    model: &model::ConfluencePageConfiguration,
) -> Result<wire::ConfluencePageConfiguration, TranslateError> {
    Ok(wire::ConfluencePageConfiguration {
        page_field_mappings: list_to_remote(
            model.page_field_mappings.as_deref(),
            confluence_page_to_index_field_mapping_to_remote,
        )?,
    })
}

fn confluence_page_configuration_to_model(
    remote: &wire::ConfluencePageConfiguration,
) -> model::ConfluencePageConfiguration {
    model::ConfluencePageConfiguration {
        page_field_mappings: list_to_model(
            remote.page_field_mappings.as_deref(),
            confluence_page_to_index_field_mapping_to_model,
        ),
    }
}

fn confluence_page_to_index_field_mapping_to_remote(
    model: &model::ConfluencePageToIndexFieldMapping,
) -> Result<wire::ConfluencePageToIndexFieldMapping, TranslateError> {
    Ok(wire::ConfluencePageToIndexFieldMapping {
        data_source_field_name: model
            .data_source_field_name
            .as_deref()
            .map(str::parse::<wire::ConfluencePageFieldName>)
            .transpose()?,
        date_field_format: model.date_field_format.clone(),
        index_field_name: model.index_field_name.clone(),
    })
}

fn confluence_page_to_index_field_mapping_to_model(
    remote: &wire::ConfluencePageToIndexFieldMapping,
) -> model::ConfluencePageToIndexFieldMapping {
    model::ConfluencePageToIndexFieldMapping {
        data_source_field_name: remote
            .data_source_field_name
            .map(|value| value.as_str().to_string()),
        date_field_format: remote.date_field_format.clone(),
        index_field_name: remote.index_field_name.clone(),
    }
}

fn confluence_blog_configuration_to_remote(
    model: &model::ConfluenceBlogConfiguration,
) -> Result<wire::ConfluenceBlogConfiguration, TranslateError> {
    Ok(wire::ConfluenceBlogConfiguration {
        blog_field_mappings: list_to_remote(
            model.blog_field_mappings.as_deref(),
            confluence_blog_to_index_field_mapping_to_remote,
        )?,
    })
}

fn confluence_blog_configuration_to_model(
    remote: &wire::ConfluenceBlogConfiguration,
) -> model::ConfluenceBlogConfiguration {
    model::ConfluenceBlogConfiguration {
        blog_field_mappings: list_to_model(
            remote.blog_field_mappings.as_deref(),
            confluence_blog_to_index_field_mapping_to_model,
        ),
    }
}

fn confluence_blog_to_index_field_mapping_to_remote(
    model: &model::ConfluenceBlogToIndexFieldMapping,
) -> Result<wire::ConfluenceBlogToIndexFieldMapping, TranslateError> {
    Ok(wire::ConfluenceBlogToIndexFieldMapping {
        data_source_field_name: model
            .data_source_field_name
            .as_deref()
            .map(str::parse::<wire::ConfluenceBlogFieldName>)
            .transpose()?,
        date_field_format: model.date_field_format.clone(),
        index_field_name: model.index_field_name.clone(),
    })
}

fn confluence_blog_to_index_field_mapping_to_model(
    remote: &wire::ConfluenceBlogToIndexFieldMapping,
) -> model::ConfluenceBlogToIndexFieldMapping {
    model::ConfluenceBlogToIndexFieldMapping {
        data_source_field_name: remote
            .data_source_field_name
            .map(|value| value.as_str().to_string()),
        date_field_format: remote.date_field_format.clone(),
        index_field_name: remote.index_field_name.clone(),
    }
}

fn confluence_attachment_configuration_to_remote(
    model: &model::ConfluenceAttachmentConfiguration,
) -> Result<wire::ConfluenceAttachmentConfiguration, TranslateError> {
    Ok(wire::ConfluenceAttachmentConfiguration {
        crawl_attachments: model.crawl_attachments,
        attachment_field_mappings: list_to_remote(
            model.attachment_field_mappings.as_deref(),
            confluence_attachment_to_index_field_mapping_to_remote,
        )?,
    })
}

fn confluence_attachment_configuration_to_model(
    remote: &wire::ConfluenceAttachmentConfiguration,
) -> model::ConfluenceAttachmentConfiguration {
    model::ConfluenceAttachmentConfiguration {
        crawl_attachments: remote.crawl_attachments,
        attachment_field_mappings: list_to_model(
            remote.attachment_field_mappings.as_deref(),
            confluence_attachment_to_index_field_mapping_to_model,
        ),
    }
}

fn confluence_attachment_to_index_field_mapping_to_remote(
    model: &model::ConfluenceAttachmentToIndexFieldMapping,
) -> Result<wire::ConfluenceAttachmentToIndexFieldMapping, TranslateError> {
    Ok(wire::ConfluenceAttachmentToIndexFieldMapping {
        data_source_field_name: model
            .data_source_field_name
            .as_deref()
            .map(str::parse::<wire::ConfluenceAttachmentFieldName>)
            .transpose()?,
        date_field_format: model.date_field_format.clone(),
        index_field_name: model.index_field_name.clone(),
    })
}

fn confluence_attachment_to_index_field_mapping_to_model(
    remote: &wire::ConfluenceAttachmentToIndexFieldMapping,
) -> model::ConfluenceAttachmentToIndexFieldMapping {
    model::ConfluenceAttachmentToIndexFieldMapping {
        data_source_field_name: remote
            .data_source_field_name
            .map(|value| value.as_str().to_string()),
        date_field_format: remote.date_field_format.clone(),
        index_field_name: remote.index_field_name.clone(),
    }
}
