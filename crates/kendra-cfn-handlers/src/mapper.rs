//! Building blocks shared by every field mapper.
//!
//! Lists keep their shape going to the service; coming back, an empty list
//! becomes `None` so a read matches a template that never set the property.

use crate::error::TranslateError;
use crate::model;
use chrono::{DateTime, SecondsFormat, Utc};
use kendra_cfn_api::types as wire;

/// Map a model list element-wise, keeping `None` and empty lists as they are
pub(crate) fn list_to_remote<T, U, E>(
    items: Option<&[T]>,
    f: impl FnMut(&T) -> Result<U, E>,
) -> Result<Option<Vec<U>>, TranslateError>
where
    TranslateError: From<E>,
{
    items
        .map(|items| items.iter().map(f).collect::<Result<Vec<_>, E>>())
        .transpose()
        .map_err(TranslateError::from)
}

/// Map a wire list element-wise, collapsing an empty list to `None`
pub(crate) fn list_to_model<T, U>(
    items: Option<&[T]>,
    f: impl FnMut(&T) -> U,
) -> Option<Vec<U>> {
    match items {
        Some(items) if !items.is_empty() => Some(items.iter().map(f).collect()),
        _ => None,
    }
}

pub(crate) fn strings_to_model(items: Option<&[String]>) -> Option<Vec<String>> {
    list_to_model(items, String::clone)
}

pub(crate) fn parse_date(value: &str) -> Result<DateTime<Utc>, TranslateError> {
    DateTime::parse_from_rfc3339(value)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|_| TranslateError::InvalidTimestamp {
            value: value.to_string(),
        })
}

pub(crate) fn format_date(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Optional string for an update call: absent means "clear", sent as ""
pub(crate) fn or_empty(value: Option<&String>) -> Option<String> {
    Some(value.cloned().unwrap_or_default())
}

pub(crate) fn field_mapping_to_remote(
    model: &model::DataSourceToIndexFieldMapping,
) -> Result<wire::DataSourceToIndexFieldMapping, TranslateError> {
    Ok(wire::DataSourceToIndexFieldMapping {
        data_source_field_name: model.data_source_field_name.clone(),
        date_field_format: model.date_field_format.clone(),
        index_field_name: model.index_field_name.clone(),
    })
}

pub(crate) fn field_mapping_to_model(
    remote: &wire::DataSourceToIndexFieldMapping,
) -> model::DataSourceToIndexFieldMapping {
    model::DataSourceToIndexFieldMapping {
        data_source_field_name: remote.data_source_field_name.clone(),
        date_field_format: remote.date_field_format.clone(),
        index_field_name: remote.index_field_name.clone(),
    }
}

pub(crate) fn vpc_configuration_to_remote(
    model: &model::DataSourceVpcConfiguration,
) -> Result<wire::DataSourceVpcConfiguration, TranslateError> {
    Ok(wire::DataSourceVpcConfiguration {
        subnet_ids: model.subnet_ids.clone(),
        security_group_ids: model.security_group_ids.clone(),
    })
}

pub(crate) fn vpc_configuration_to_model(
    remote: &wire::DataSourceVpcConfiguration,
) -> model::DataSourceVpcConfiguration {
    model::DataSourceVpcConfiguration {
        subnet_ids: strings_to_model(remote.subnet_ids.as_deref()),
        security_group_ids: strings_to_model(remote.security_group_ids.as_deref()),
    }
}

pub(crate) fn s3_path_to_remote(model: &model::S3Path) -> Result<wire::S3Path, TranslateError> {
    Ok(wire::S3Path {
        bucket: model.bucket.clone(),
        key: model.key.clone(),
    })
}

pub(crate) fn s3_path_to_model(remote: &wire::S3Path) -> model::S3Path {
    model::S3Path {
        bucket: remote.bucket.clone(),
        key: remote.key.clone(),
    }
}

pub(crate) fn proxy_configuration_to_remote(
    model: &model::ProxyConfiguration,
) -> Result<wire::ProxyConfiguration, TranslateError> {
    Ok(wire::ProxyConfiguration {
        host: model.host.clone(),
        port: model.port,
        credentials: model.credentials.clone(),
    })
}

pub(crate) fn proxy_configuration_to_model(
    remote: &wire::ProxyConfiguration,
) -> model::ProxyConfiguration {
    model::ProxyConfiguration {
        host: remote.host.clone(),
        port: remote.port,
        credentials: remote.credentials.clone(),
    }
}
