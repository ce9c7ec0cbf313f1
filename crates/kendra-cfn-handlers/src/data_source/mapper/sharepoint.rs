//! SharePoint connector

use crate::data_source::model;
use crate::error::TranslateError;
use crate::mapper::{self, list_to_model, list_to_remote, strings_to_model};
use kendra_cfn_api::types as wire;

pub fn to_remote(
    model: Option<&model::SharePointConfiguration>,
) -> Result<Option<wire::SharePointConfiguration>, TranslateError> {
    model.map(share_point_configuration_to_remote).transpose()
}

pub fn to_model(
    remote: Option<&wire::SharePointConfiguration>,
) -> Option<model::SharePointConfiguration> {
    remote.map(share_point_configuration_to_model)
}

fn share_point_configuration_to_remote(
    model: &model::SharePointConfiguration,
) -> Result<wire::SharePointConfiguration, TranslateError> {
    Ok(wire::SharePointConfiguration {
        share_point_version: model
            .share_point_version
            .as_deref()
            .map(str::parse::<wire::SharePointVersion>)
            .transpose()?,
        urls: model.urls.clone(),
        secret_arn: model.secret_arn.clone(),
        crawl_attachments: model.crawl_attachments,
        use_change_log: model.use_change_log,
        inclusion_patterns: model.inclusion_patterns.clone(),
        exclusion_patterns: model.exclusion_patterns.clone(),
        vpc_configuration: model
            .vpc_configuration
            .as_ref()
            .map(mapper::vpc_configuration_to_remote)
            .transpose()?,
        field_mappings: list_to_remote(
            model.field_mappings.as_deref(),
            mapper::field_mapping_to_remote,
        )?,
        document_title_field_name: model.document_title_field_name.clone(),
        disable_local_groups: model.disable_local_groups,
        ssl_certificate_s3_path: model
            .ssl_certificate_s3_path
            .as_ref()
            .map(mapper::s3_path_to_remote)
            .transpose()?,
        authentication_type: model
            .authentication_type
            .as_deref()
            .map(str::parse::<wire::SharePointOnlineAuthenticationType>)
            .transpose()?,
        proxy_configuration: model
            .proxy_configuration
            .as_ref()
            .map(mapper::proxy_configuration_to_remote)
            .transpose()?,
    })
}

fn share_point_configuration_to_model(
    remote: &wire::SharePointConfiguration,
) -> model::SharePointConfiguration {
    model::SharePointConfiguration {
        share_point_version: remote.share_point_version.map(|value| value.as_str().to_string()),
        urls: strings_to_model(remote.urls.as_deref()),
        secret_arn: remote.secret_arn.clone(),
        crawl_attachments: remote.crawl_attachments,
        use_change_log: remote.use_change_log,
        inclusion_patterns: strings_to_model(remote.inclusion_patterns.as_deref()),
        exclusion_patterns: strings_to_model(remote.exclusion_patterns.as_deref()),
        vpc_configuration: remote
            .vpc_configuration
            .as_ref()
            .map(mapper::vpc_configuration_to_model),
        field_mappings: list_to_model(
            remote.field_mappings.as_deref(),
            mapper::field_mapping_to_model,
        ),
        document_title_field_name: remote.document_title_field_name.clone(),
        disable_local_groups: remote.disable_local_groups,
        ssl_certificate_s3_path: remote
            .ssl_certificate_s3_path
            .as_ref()
            .map(mapper::s3_path_to_model),
        authentication_type: remote.authentication_type.map(|value| value.as_str().to_string()),
        proxy_configuration: remote
            .proxy_configuration
            .as_ref()
            .map(mapper::proxy_configuration_to_model),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn populated() -> model::SharePointConfiguration {
        model::SharePointConfiguration {
            share_point_version: Some("SHAREPOINT_ONLINE".into()),
            urls: Some(vec!["https://contoso.sharepoint.com/sites/docs".into()]),
            secret_arn: Some("arn:aws:secretsmanager:us-east-1:111122223333:secret:sp".into()),
            crawl_attachments: Some(true),
            use_change_log: Some(false),
            inclusion_patterns: Some(vec!["*.docx".into()]),
            exclusion_patterns: Some(vec!["*/Archive/*".into()]),
            vpc_configuration: Some(model::DataSourceVpcConfiguration {
                subnet_ids: Some(vec!["subnet-1".into(), "subnet-2".into()]),
                security_group_ids: Some(vec!["sg-1".into()]),
            }),
            field_mappings: Some(vec![model::DataSourceToIndexFieldMapping {
                data_source_field_name: Some("Created".into()),
                date_field_format: Some("yyyy-MM-dd'T'HH:mm:ss'Z'".into()),
                index_field_name: Some("_created_at".into()),
            }]),
            document_title_field_name: Some("Title".into()),
            disable_local_groups: Some(true),
            ssl_certificate_s3_path: Some(model::S3Path {
                bucket: Some("certs".into()),
                key: Some("sharepoint.pem".into()),
            }),
            authentication_type: Some("OAUTH2".into()),
            proxy_configuration: Some(model::ProxyConfiguration {
                host: Some("proxy.internal".into()),
                port: Some(3128),
                credentials: Some("arn:aws:secretsmanager:us-east-1:111122223333:secret:proxy".into()),
            }),
        }
    }

    #[test]
    fn test_round_trip() {
        let model = populated();
        let remote = to_remote(Some(&model)).unwrap().unwrap();
        assert_eq!(remote.share_point_version, Some(wire::SharePointVersion::SharepointOnline));
        assert_eq!(
            remote.authentication_type,
            Some(wire::SharePointOnlineAuthenticationType::Oauth2)
        );
        assert_eq!(to_model(Some(&remote)), Some(model));
    }

    #[test]
    fn test_empty_lists_sent_as_is() {
        let model = model::SharePointConfiguration {
            urls: Some(Vec::new()),
            field_mappings: Some(Vec::new()),
            vpc_configuration: Some(model::DataSourceVpcConfiguration {
                subnet_ids: Some(Vec::new()),
                security_group_ids: None,
            }),
            ..Default::default()
        };
        let remote = to_remote(Some(&model)).unwrap().unwrap();
        assert_eq!(remote.urls, Some(Vec::new()));
        assert_eq!(remote.field_mappings, Some(Vec::new()));
        assert_eq!(remote.vpc_configuration.unwrap().subnet_ids, Some(Vec::new()));
    }

    #[test]
    fn test_empty_lists_collapse_on_read() {
        let remote = wire::SharePointConfiguration {
            urls: Some(Vec::new()),
            inclusion_patterns: Some(Vec::new()),
            exclusion_patterns: Some(Vec::new()),
            field_mappings: Some(Vec::new()),
            vpc_configuration: Some(wire::DataSourceVpcConfiguration {
                subnet_ids: Some(Vec::new()),
                security_group_ids: Some(Vec::new()),
            }),
            ..Default::default()
        };
        let model = to_model(Some(&remote)).unwrap();
        assert_eq!(model.urls, None);
        assert_eq!(model.inclusion_patterns, None);
        assert_eq!(model.exclusion_patterns, None);
        assert_eq!(model.field_mappings, None);
        assert_eq!(
            model.vpc_configuration,
            Some(model::DataSourceVpcConfiguration::default())
        );
    }
}
