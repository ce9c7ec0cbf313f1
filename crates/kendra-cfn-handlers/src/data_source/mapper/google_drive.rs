//! Google Drive connector

use crate::data_source::model;
use crate::error::TranslateError;
use crate::mapper::{self, list_to_model, list_to_remote, strings_to_model};
use kendra_cfn_api::types as wire;

pub fn to_remote(
    model: Option<&model::GoogleDriveConfiguration>,
) -> Result<Option<wire::GoogleDriveConfiguration>, TranslateError> {
    model.map(google_drive_configuration_to_remote).transpose()
}

pub fn to_model(
    remote: Option<&wire::GoogleDriveConfiguration>,
) -> Option<model::GoogleDriveConfiguration> {
    remote.map(google_drive_configuration_to_model)
}

fn google_drive_configuration_to_remote(
    model: &model::GoogleDriveConfiguration,
) -> Result<wire::GoogleDriveConfiguration, TranslateError> {
    Ok(wire::GoogleDriveConfiguration {
        secret_arn: model.secret_arn.clone(),
        inclusion_patterns: model.inclusion_patterns.clone(),
        exclusion_patterns: model.exclusion_patterns.clone(),
        field_mappings: list_to_remote(
            model.field_mappings.as_deref(),
            mapper::field_mapping_to_remote,
        )?,
        exclude_mime_types: model.exclude_mime_types.clone(),
        exclude_user_accounts: model.exclude_user_accounts.clone(),
        exclude_shared_drives: model.exclude_shared_drives.clone(),
    })
}

fn google_drive_configuration_to_model(
    remote: &wire::GoogleDriveConfiguration,
) -> model::GoogleDriveConfiguration {
    model::GoogleDriveConfiguration {
        secret_arn: remote.secret_arn.clone(),
        inclusion_patterns: strings_to_model(remote.inclusion_patterns.as_deref()),
        exclusion_patterns: strings_to_model(remote.exclusion_patterns.as_deref()),
        field_mappings: list_to_model(
            remote.field_mappings.as_deref(),
            mapper::field_mapping_to_model,
        ),
        exclude_mime_types: strings_to_model(remote.exclude_mime_types.as_deref()),
        exclude_user_accounts: strings_to_model(remote.exclude_user_accounts.as_deref()),
        exclude_shared_drives: strings_to_model(remote.exclude_shared_drives.as_deref()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn populated() -> model::GoogleDriveConfiguration {
        model::GoogleDriveConfiguration {
            secret_arn: Some("arn:aws:secretsmanager:us-east-1:111122223333:secret:gd".into()),
            inclusion_patterns: Some(vec!["*.gdoc".into()]),
            exclusion_patterns: Some(vec!["*/Trash/*".into()]),
            field_mappings: Some(vec![model::DataSourceToIndexFieldMapping {
                data_source_field_name: Some("modifiedTime".into()),
                date_field_format: None,
                index_field_name: Some("_last_updated_at".into()),
            }]),
            exclude_mime_types: Some(vec!["video/mp4".into()]),
            exclude_user_accounts: Some(vec!["bot@example.com".into()]),
            exclude_shared_drives: Some(vec!["0AHk".into(), "0BQz".into()]),
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
        let model = model::GoogleDriveConfiguration {
            exclude_mime_types: Some(Vec::new()),
            field_mappings: Some(Vec::new()),
            ..Default::default()
        };
        let remote = to_remote(Some(&model)).unwrap().unwrap();
        assert_eq!(remote.exclude_mime_types, Some(Vec::new()));
        assert_eq!(remote.field_mappings, Some(Vec::new()));
        assert_eq!(remote.exclude_user_accounts, None);
    }

    #[test]
    fn test_empty_lists_collapse_on_read() {
        let remote = wire::GoogleDriveConfiguration {
            secret_arn: Some("arn".into()),
            inclusion_patterns: Some(Vec::new()),
            exclusion_patterns: Some(Vec::new()),
            field_mappings: Some(Vec::new()),
            exclude_mime_types: Some(Vec::new()),
            exclude_user_accounts: Some(Vec::new()),
            exclude_shared_drives: Some(Vec::new()),
        };
        let expected = model::GoogleDriveConfiguration {
            secret_arn: Some("arn".into()),
            ..Default::default()
        };
        assert_eq!(to_model(Some(&remote)), Some(expected));
    }
}
