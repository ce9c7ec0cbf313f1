//! S3 bucket connector

use crate::data_source::model;
use crate::error::TranslateError;
use crate::mapper::strings_to_model;
use kendra_cfn_api::types as wire;

pub fn to_remote(
    model: Option<&model::S3DataSourceConfiguration>,
) -> Result<Option<wire::S3DataSourceConfiguration>, TranslateError> {
    model.map(s3_configuration_to_remote).transpose()
}

pub fn to_model(
    remote: Option<&wire::S3DataSourceConfiguration>,
) -> Option<model::S3DataSourceConfiguration> {
    remote.map(s3_configuration_to_model)
}

fn s3_configuration_to_remote(
    model: &model::S3DataSourceConfiguration,
) -> Result<wire::S3DataSourceConfiguration, TranslateError> {
    Ok(wire::S3DataSourceConfiguration {
        bucket_name: model.bucket_name.clone(),
        inclusion_prefixes: model.inclusion_prefixes.clone(),
        inclusion_patterns: model.inclusion_patterns.clone(),
        exclusion_patterns: model.exclusion_patterns.clone(),
        documents_metadata_configuration: model
            .documents_metadata_configuration
            .as_ref()
            .map(documents_metadata_configuration_to_remote)
            .transpose()?,
        access_control_list_configuration: model
            .access_control_list_configuration
            .as_ref()
            .map(access_control_list_configuration_to_remote)
            .transpose()?,
    })
}

fn s3_configuration_to_model(
    remote: &wire::S3DataSourceConfiguration,
) -> model::S3DataSourceConfiguration {
    model::S3DataSourceConfiguration {
        bucket_name: remote.bucket_name.clone(),
        inclusion_prefixes: strings_to_model(remote.inclusion_prefixes.as_deref()),
        inclusion_patterns: strings_to_model(remote.inclusion_patterns.as_deref()),
        exclusion_patterns: strings_to_model(remote.exclusion_patterns.as_deref()),
        documents_metadata_configuration: remote
            .documents_metadata_configuration
            .as_ref()
            .map(documents_metadata_configuration_to_model),
        access_control_list_configuration: remote
            .access_control_list_configuration
            .as_ref()
            .map(access_control_list_configuration_to_model),
    }
}

fn documents_metadata_configuration_to_remote(
    model: &model::DocumentsMetadataConfiguration,
) -> Result<wire::DocumentsMetadataConfiguration, TranslateError> {
    Ok(wire::DocumentsMetadataConfiguration {
        s3_prefix: model.s3_prefix.clone(),
    })
}

fn documents_metadata_configuration_to_model(
    remote: &wire::DocumentsMetadataConfiguration,
) -> model::DocumentsMetadataConfiguration {
    model::DocumentsMetadataConfiguration {
        s3_prefix: remote.s3_prefix.clone(),
    }
}

fn access_control_list_configuration_to_remote(
    model: &model::AccessControlListConfiguration,
) -> Result<wire::AccessControlListConfiguration, TranslateError> {
    Ok(wire::AccessControlListConfiguration {
        key_path: model.key_path.clone(),
    })
}

fn access_control_list_configuration_to_model(
    remote: &wire::AccessControlListConfiguration,
) -> model::AccessControlListConfiguration {
    model::AccessControlListConfiguration {
        key_path: remote.key_path.clone(),
    }
}
