//! OneDrive connector

use crate::data_source::model;
use crate::error::TranslateError;
use crate::mapper::{self, list_to_model, list_to_remote, strings_to_model};
use kendra_cfn_api::types as wire;

pub fn to_remote(
    model: Option<&model::OneDriveConfiguration>,
) -> Result<Option<wire::OneDriveConfiguration>, TranslateError> {
    model.map(one_drive_configuration_to_remote).transpose()
}

pub fn to_model(
    remote: Option<&wire::OneDriveConfiguration>,
) -> Option<model::OneDriveConfiguration> {
    remote.map(one_drive_configuration_to_model)
}

fn one_drive_configuration_to_remote(
    model: &model::OneDriveConfiguration,
) -> Result<wire::OneDriveConfiguration, TranslateError> {
    Ok(wire::OneDriveConfiguration {
        tenant_domain: model.tenant_domain.clone(),
        secret_arn: model.secret_arn.clone(),
        one_drive_users: model.one_drive_users.as_ref().map(one_drive_users_to_remote).transpose()?,
        inclusion_patterns: model.inclusion_patterns.clone(),
        exclusion_patterns: model.exclusion_patterns.clone(),
        field_mappings: list_to_remote(
            model.field_mappings.as_deref(),
            mapper::field_mapping_to_remote,
        )?,
        disable_local_groups: model.disable_local_groups,
    })
}

fn one_drive_configuration_to_model(
    remote: &wire::OneDriveConfiguration,
) -> model::OneDriveConfiguration {
    model::OneDriveConfiguration {
        tenant_domain: remote.tenant_domain.clone(),
        secret_arn: remote.secret_arn.clone(),
        one_drive_users: remote.one_drive_users.as_ref().map(one_drive_users_to_model),
        inclusion_patterns: strings_to_model(remote.inclusion_patterns.as_deref()),
        exclusion_patterns: strings_to_model(remote.exclusion_patterns.as_deref()),
        field_mappings: list_to_model(
            remote.field_mappings.as_deref(),
            mapper::field_mapping_to_model,
        ),
        disable_local_groups: remote.disable_local_groups,
    }
}

fn one_drive_users_to_remote(
    model: &model::OneDriveUsers,
) -> Result<wire::OneDriveUsers, TranslateError> {
    Ok(wire::OneDriveUsers {
        one_drive_user_list: model.one_drive_user_list.clone(),
        one_drive_user_s3_path: model
            .one_drive_user_s3_path
            .as_ref()
            .map(mapper::s3_path_to_remote)
            .transpose()?,
    })
}

fn one_drive_users_to_model(remote: &wire::OneDriveUsers) -> model::OneDriveUsers {
    model::OneDriveUsers {
        one_drive_user_list: strings_to_model(remote.one_drive_user_list.as_deref()),
        one_drive_user_s3_path: remote
            .one_drive_user_s3_path
            .as_ref()
            .map(mapper::s3_path_to_model),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn populated() -> model::OneDriveConfiguration {
        model::OneDriveConfiguration {
            tenant_domain: Some("contoso.onmicrosoft.com".into()),
            secret_arn: Some("arn:aws:secretsmanager:us-east-1:111122223333:secret:od".into()),
            one_drive_users: Some(model::OneDriveUsers {
                one_drive_user_list: Some(vec!["alice@contoso.com".into()]),
                one_drive_user_s3_path: Some(model::S3Path {
                    bucket: Some("users".into()),
                    key: Some("onedrive.txt".into()),
                }),
            }),
            inclusion_patterns: Some(vec!["*.xlsx".into()]),
            exclusion_patterns: Some(vec!["*/Private/*".into()]),
            field_mappings: Some(vec![model::DataSourceToIndexFieldMapping {
                data_source_field_name: Some("lastModifiedDateTime".into()),
                date_field_format: Some("yyyy-MM-dd'T'HH:mm:ss'Z'".into()),
                index_field_name: Some("_last_updated_at".into()),
            }]),
            disable_local_groups: Some(false),
        }
    }

    #[test]
    fn test_round_trip() {
        let model = populated();
        let remote = to_remote(Some(&model)).unwrap();
        assert_eq!(to_model(remote.as_ref()), Some(model));
    }

    #[test]
    fn test_empty_lists_sent_as_is() {
        let model = model::OneDriveConfiguration {
            one_drive_users: Some(model::OneDriveUsers {
                one_drive_user_list: Some(Vec::new()),
                one_drive_user_s3_path: None,
            }),
            inclusion_patterns: Some(Vec::new()),
            ..Default::default()
        };
        let remote = to_remote(Some(&model)).unwrap().unwrap();
        assert_eq!(remote.inclusion_patterns, Some(Vec::new()));
        assert_eq!(
            remote.one_drive_users.unwrap().one_drive_user_list,
            Some(Vec::new())
        );
    }

    #[test]
    fn test_empty_lists_collapse_on_read() {
        let remote = wire::OneDriveConfiguration {
            one_drive_users: Some(wire::OneDriveUsers {
                one_drive_user_list: Some(Vec::new()),
                one_drive_user_s3_path: None,
            }),
            inclusion_patterns: Some(Vec::new()),
            exclusion_patterns: Some(Vec::new()),
            field_mappings: Some(Vec::new()),
            ..Default::default()
        };
        let model = to_model(Some(&remote)).unwrap();
        assert_eq!(model.inclusion_patterns, None);
        assert_eq!(model.exclusion_patterns, None);
        assert_eq!(model.field_mappings, None);
        assert_eq!(model.one_drive_users, Some(model::OneDriveUsers::default()));
    }
}
