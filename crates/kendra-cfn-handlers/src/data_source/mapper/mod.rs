//! Field mappers between the data source model and the wire configuration.
//!
//! The model keeps one optional member per connector next to a free-form
//! `Type` string; the wire side is a sum type. `Type` picks which member is
//! sent, and an unrecognised `Type` sends no configuration at all.

pub mod confluence;
pub mod database;
pub mod enrichment;
pub mod google_drive;
pub mod one_drive;
pub mod s3;
pub mod salesforce;
pub mod service_now;
pub mod sharepoint;
pub mod web_crawler;

use super::model::DataSourceConfiguration;
use crate::error::TranslateError;
use kendra_cfn_api::types::{self as wire, DataSourceType};

/// Wire configuration for the connector named by `data_source_type`.
///
/// Returns `Ok(None)` when there is no configuration, when `data_source_type`
/// names no connector, or when the member selected by it is unset.
pub fn to_remote_configuration(
    configuration: Option<&DataSourceConfiguration>,
    data_source_type: &str,
) -> Result<Option<wire::DataSourceConfiguration>, TranslateError> {
    let Some(configuration) = configuration else {
        return Ok(None);
    };
    let Ok(data_source_type) = data_source_type.parse::<DataSourceType>() else {
        return Ok(None);
    };

    let remote = match data_source_type {
        DataSourceType::S3 => s3::to_remote(configuration.s3_configuration.as_ref())?
            .map(wire::DataSourceConfiguration::S3),
        DataSourceType::SharePoint => {
            sharepoint::to_remote(configuration.share_point_configuration.as_ref())?
                .map(wire::DataSourceConfiguration::SharePoint)
        }
        DataSourceType::Salesforce => {
            salesforce::to_remote(configuration.salesforce_configuration.as_ref())?
                .map(wire::DataSourceConfiguration::Salesforce)
        }
        DataSourceType::ServiceNow => {
            service_now::to_remote(configuration.service_now_configuration.as_ref())?
                .map(wire::DataSourceConfiguration::ServiceNow)
        }
        DataSourceType::Database => {
            database::to_remote(configuration.database_configuration.as_ref())?
                .map(wire::DataSourceConfiguration::Database)
        }
        DataSourceType::Confluence => {
            confluence::to_remote(configuration.confluence_configuration.as_ref())?
                .map(wire::DataSourceConfiguration::Confluence)
        }
        DataSourceType::GoogleDrive => {
            google_drive::to_remote(configuration.google_drive_configuration.as_ref())?
                .map(wire::DataSourceConfiguration::GoogleDrive)
        }
        DataSourceType::WebCrawler => {
            web_crawler::to_remote(configuration.web_crawler_configuration.as_ref())?
                .map(wire::DataSourceConfiguration::WebCrawler)
        }
        DataSourceType::OneDrive => {
            one_drive::to_remote(configuration.one_drive_configuration.as_ref())?
                .map(wire::DataSourceConfiguration::OneDrive)
        }
        _ => None,
    };
    Ok(remote)
}

/// Model configuration with exactly the member matching the wire variant set
pub fn to_model_configuration(
    remote: Option<&wire::DataSourceConfiguration>,
) -> Option<DataSourceConfiguration> {
    let mut configuration = DataSourceConfiguration::default();
    match remote? {
        wire::DataSourceConfiguration::S3(c) => {
            configuration.s3_configuration = s3::to_model(Some(c));
        }
        wire::DataSourceConfiguration::SharePoint(c) => {
            configuration.share_point_configuration = sharepoint::to_model(Some(c));
        }
        wire::DataSourceConfiguration::Salesforce(c) => {
            configuration.salesforce_configuration = salesforce::to_model(Some(c));
        }
        wire::DataSourceConfiguration::ServiceNow(c) => {
            configuration.service_now_configuration = service_now::to_model(Some(c));
        }
        wire::DataSourceConfiguration::Database(c) => {
            configuration.database_configuration = database::to_model(Some(c));
        }
        wire::DataSourceConfiguration::Confluence(c) => {
            configuration.confluence_configuration = confluence::to_model(Some(c));
        }
        wire::DataSourceConfiguration::GoogleDrive(c) => {
            configuration.google_drive_configuration = google_drive::to_model(Some(c));
        }
        wire::DataSourceConfiguration::WebCrawler(c) => {
            configuration.web_crawler_configuration = web_crawler::to_model(Some(c));
        }
        wire::DataSourceConfiguration::OneDrive(c) => {
            configuration.one_drive_configuration = one_drive::to_model(Some(c));
        }
        wire::DataSourceConfiguration::Unsupported(_) => return None,
    }
    Some(configuration)
}
