//! Relational database connector

use crate::data_source::model;
use crate::error::TranslateError;
use crate::mapper::{self, list_to_model, list_to_remote, strings_to_model};
use kendra_cfn_api::types as wire;

pub fn to_remote(
    model: Option<&model::DatabaseConfiguration>,
) -> Result<Option<wire::DatabaseConfiguration>, TranslateError> {
    model.map(database_configuration_to_remote).transpose()
}

pub fn to_model(
    remote: Option<&wire::DatabaseConfiguration>,
) -> Option<model::DatabaseConfiguration> {
    remote.map(database_configuration_to_model)
}

fn database_configuration_to_remote(
    model: &model::DatabaseConfiguration,
) -> Result<wire::DatabaseConfiguration, TranslateError> {
    Ok(wire::DatabaseConfiguration {
        database_engine_type: model
            .database_engine_type
            .as_deref()
            .map(str::parse::<wire::DatabaseEngineType>)
            .transpose()?,
        connection_configuration: model
            .connection_configuration
            .as_ref()
            .map(connection_configuration_to_remote)
            .transpose()?,
        vpc_configuration: model
            .vpc_configuration
            .as_ref()
            .map(mapper::vpc_configuration_to_remote)
            .transpose()?,
        column_configuration: model
            .column_configuration
            .as_ref()
            .map(column_configuration_to_remote)
            .transpose()?,
        acl_configuration: model
            .acl_configuration
            .as_ref()
            .map(acl_configuration_to_remote)
            .transpose()?,
        sql_configuration: model
            .sql_configuration
            .as_ref()
            .map(sql_configuration_to_remote)
            .transpose()?,
    })
}

fn database_configuration_to_model(
    remote: &wire::DatabaseConfiguration,
) -> model::DatabaseConfiguration {
    model::DatabaseConfiguration {
        database_engine_type: remote.database_engine_type.map(|value| value.as_str().to_string()),
        connection_configuration: remote
            .connection_configuration
            .as_ref()
            .map(connection_configuration_to_model),
        vpc_configuration: remote
            .vpc_configuration
            .as_ref()
            .map(mapper::vpc_configuration_to_model),
        column_configuration: remote
            .column_configuration
            .as_ref()
            .map(column_configuration_to_model),
        acl_configuration: remote.acl_configuration.as_ref().map(acl_configuration_to_model),
        sql_configuration: remote.sql_configuration.as_ref().map(sql_configuration_to_model),
    }
}

fn connection_configuration_to_remote(
    model: &model::ConnectionConfiguration,
) -> Result<wire::ConnectionConfiguration, TranslateError> {
    Ok(wire::ConnectionConfiguration {
        database_host: model.database_host.clone(),
        database_port: model.database_port,
        database_name: model.database_name.clone(),
        table_name: model.table_name.clone(),
        secret_arn: model.secret_arn.clone(),
    })
}

fn connection_configuration_to_model(
    remote: &wire::ConnectionConfiguration,
) -> model::ConnectionConfiguration {
    model::ConnectionConfiguration {
        database_host: remote.database_host.clone(),
        database_port: remote.database_port,
        database_name: remote.database_name.clone(),
        table_name: remote.table_name.clone(),
        secret_arn: remote.secret_arn.clone(),
    }
}

fn column_configuration_to_remote(
    model: &model::ColumnConfiguration,
) -> Result<wire::ColumnConfiguration, TranslateError> {
    Ok(wire::ColumnConfiguration {
        document_id_column_name: model.document_id_column_name.clone(),
        document_data_column_name: model.document_data_column_name.clone(),
        document_title_column_name: model.document_title_column_name.clone(),
        field_mappings: list_to_remote(
            model.field_mappings.as_deref(),
            mapper::field_mapping_to_remote,
        )?,
        change_detecting_columns: model.change_detecting_columns.clone(),
    })
}

fn column_configuration_to_model(remote: &wire::ColumnConfiguration) -> model::ColumnConfiguration {
    model::ColumnConfiguration {
        document_id_column_name: remote.document_id_column_name.clone(),
        document_data_column_name: remote.document_data_column_name.clone(),
        document_title_column_name: remote.document_title_column_name.clone(),
        field_mappings: list_to_model(
            remote.field_mappings.as_deref(),
            mapper::field_mapping_to_model,
        ),
        change_detecting_columns: strings_to_model(remote.change_detecting_columns.as_deref()),
    }
}

fn acl_configuration_to_remote(
    model: &model::AclConfiguration,
) -> Result<wire::AclConfiguration, TranslateError> {
    Ok(wire::AclConfiguration {
        allowed_groups_column_name: model.allowed_groups_column_name.clone(),
    })
}

fn acl_configuration_to_model(remote: &wire::AclConfiguration) -> model::AclConfiguration {
    model::AclConfiguration {
        allowed_groups_column_name: remote.allowed_groups_column_name.clone(),
    }
}

fn sql_configuration_to_remote(
    model: &model::SqlConfiguration,
) -> Result<wire::SqlConfiguration, TranslateError> {
    Ok(wire::SqlConfiguration {
        query_identifiers_enclosing_option: model
            .query_identifiers_enclosing_option
            .as_deref()
            .map(str::parse::<wire::QueryIdentifiersEnclosingOption>)
            .transpose()?,
    })
}

fn sql_configuration_to_model(remote: &wire::SqlConfiguration) -> model::SqlConfiguration {
    model::SqlConfiguration {
        query_identifiers_enclosing_option: remote
            .query_identifiers_enclosing_option
            .map(|value| value.as_str().to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn populated() -> model::DatabaseConfiguration {
        model::DatabaseConfiguration {
            database_engine_type: Some("RDS_POSTGRESQL".into()),
            connection_configuration: Some(model::ConnectionConfiguration {
                database_host: Some("db.internal".into()),
                database_port: Some(5432),
                database_name: Some("kb".into()),
                table_name: Some("articles".into()),
                secret_arn: Some("arn:aws:secretsmanager:us-east-1:111122223333:secret:db".into()),
            }),
            vpc_configuration: Some(model::DataSourceVpcConfiguration {
                subnet_ids: Some(vec!["subnet-1".into()]),
                security_group_ids: Some(vec!["sg-1".into()]),
            }),
            column_configuration: Some(model::ColumnConfiguration {
                document_id_column_name: Some("id".into()),
                document_data_column_name: Some("body".into()),
                document_title_column_name: Some("title".into()),
                field_mappings: Some(vec![model::DataSourceToIndexFieldMapping {
                    data_source_field_name: Some("updated_at".into()),
                    date_field_format: Some("yyyy-MM-dd".into()),
                    index_field_name: Some("_last_updated_at".into()),
                }]),
                change_detecting_columns: Some(vec!["updated_at".into(), "version".into()]),
            }),
            acl_configuration: Some(model::AclConfiguration {
                allowed_groups_column_name: Some("groups".into()),
            }),
            sql_configuration: Some(model::SqlConfiguration {
                query_identifiers_enclosing_option: Some("DOUBLE_QUOTES".into()),
            }),
        }
    }

    #[test]
    fn test_round_trip() {
        let model = populated();
        let remote = to_remote(Some(&model)).unwrap().unwrap();
        assert_eq!(
            remote.database_engine_type,
            Some(wire::DatabaseEngineType::RdsPostgresql)
        );
        assert_eq!(to_model(Some(&remote)), Some(model));
    }

    #[test]
    fn test_empty_lists_sent_as_is() {
        let model = model::DatabaseConfiguration {
            column_configuration: Some(model::ColumnConfiguration {
                change_detecting_columns: Some(Vec::new()),
                field_mappings: Some(Vec::new()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let remote = to_remote(Some(&model)).unwrap().unwrap();
        let columns = remote.column_configuration.unwrap();
        assert_eq!(columns.change_detecting_columns, Some(Vec::new()));
        assert_eq!(columns.field_mappings, Some(Vec::new()));
    }

    #[test]
    fn test_empty_lists_collapse_on_read() {
        let remote = wire::DatabaseConfiguration {
            vpc_configuration: Some(wire::DataSourceVpcConfiguration {
                subnet_ids: Some(Vec::new()),
                security_group_ids: Some(Vec::new()),
            }),
            column_configuration: Some(wire::ColumnConfiguration {
                document_id_column_name: Some("id".into()),
                field_mappings: Some(Vec::new()),
                change_detecting_columns: Some(Vec::new()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let model = to_model(Some(&remote)).unwrap();
        assert_eq!(
            model.vpc_configuration,
            Some(model::DataSourceVpcConfiguration::default())
        );
        let columns = model.column_configuration.unwrap();
        assert_eq!(columns.document_id_column_name.as_deref(), Some("id"));
        assert_eq!(columns.field_mappings, None);
        assert_eq!(columns.change_detecting_columns, None);
    }
}
