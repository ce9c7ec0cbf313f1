//! `AWS::Kendra::DataSource` resource model.
//!
//! Property names follow the resource schema. Remote enumerations are kept
//! as plain strings here and parsed when a request is built.

use kendra_cfn_core::Tag;
use serde::{Deserialize, Serialize};

pub use crate::model::{
    DataSourceToIndexFieldMapping, DataSourceVpcConfiguration, ProxyConfiguration, S3Path,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ResourceModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_id: Option<String>,
    /// Connector discriminator (`S3`, `SHAREPOINT`, ...)
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source_configuration: Option<DataSourceConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_document_enrichment_configuration: Option<CustomDocumentEnrichmentConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}

/// One member per connector; the one that matters is selected by `Type`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DataSourceConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_configuration: Option<S3DataSourceConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share_point_configuration: Option<SharePointConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salesforce_configuration: Option<SalesforceConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_now_configuration: Option<ServiceNowConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_configuration: Option<DatabaseConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confluence_configuration: Option<ConfluenceConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_drive_configuration: Option<GoogleDriveConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_crawler_configuration: Option<WebCrawlerConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub one_drive_configuration: Option<OneDriveConfiguration>,
}

// S3 bucket connector

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct S3DataSourceConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inclusion_prefixes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inclusion_patterns: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusion_patterns: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documents_metadata_configuration: Option<DocumentsMetadataConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_control_list_configuration: Option<AccessControlListConfiguration>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DocumentsMetadataConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_prefix: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AccessControlListConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_path: Option<String>,
}

// SharePoint connector

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SharePointConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share_point_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urls: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crawl_attachments: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_change_log: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inclusion_patterns: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusion_patterns: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_configuration: Option<DataSourceVpcConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_mappings: Option<Vec<DataSourceToIndexFieldMapping>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_title_field_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_local_groups: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_certificate_s3_path: Option<S3Path>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_configuration: Option<ProxyConfiguration>,
}

// Salesforce connector

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SalesforceConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard_object_configurations: Option<Vec<SalesforceStandardObjectConfiguration>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub knowledge_article_configuration: Option<SalesforceKnowledgeArticleConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chatter_feed_configuration: Option<SalesforceChatterFeedConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crawl_attachments: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard_object_attachment_configuration: Option<SalesforceStandardObjectAttachmentConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_attachment_file_patterns: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_attachment_file_patterns: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SalesforceStandardObjectConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_data_field_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_title_field_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_mappings: Option<Vec<DataSourceToIndexFieldMapping>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SalesforceKnowledgeArticleConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub included_states: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard_knowledge_article_type_configuration: Option<SalesforceStandardKnowledgeArticleTypeConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_knowledge_article_type_configurations: Option<Vec<SalesforceCustomKnowledgeArticleTypeConfiguration>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SalesforceStandardKnowledgeArticleTypeConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_data_field_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_title_field_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_mappings: Option<Vec<DataSourceToIndexFieldMapping>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SalesforceCustomKnowledgeArticleTypeConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_data_field_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_title_field_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_mappings: Option<Vec<DataSourceToIndexFieldMapping>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SalesforceChatterFeedConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_data_field_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_title_field_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_mappings: Option<Vec<DataSourceToIndexFieldMapping>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_filter_types: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SalesforceStandardObjectAttachmentConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_title_field_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_mappings: Option<Vec<DataSourceToIndexFieldMapping>>,
}

// ServiceNow connector

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ServiceNowConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_now_build_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub knowledge_article_configuration: Option<ServiceNowKnowledgeArticleConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_catalog_configuration: Option<ServiceNowServiceCatalogConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ServiceNowKnowledgeArticleConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crawl_attachments: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_attachment_file_patterns: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_attachment_file_patterns: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_data_field_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_title_field_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_mappings: Option<Vec<DataSourceToIndexFieldMapping>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_query: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ServiceNowServiceCatalogConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crawl_attachments: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_attachment_file_patterns: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_attachment_file_patterns: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_data_field_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_title_field_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_mappings: Option<Vec<DataSourceToIndexFieldMapping>>,
}

// Relational database connector

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DatabaseConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_engine_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_configuration: Option<ConnectionConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_configuration: Option<DataSourceVpcConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_configuration: Option<ColumnConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acl_configuration: Option<AclConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sql_configuration: Option<SqlConfiguration>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ConnectionConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_port: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_arn: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ColumnConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_id_column_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_data_column_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_title_column_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_mappings: Option<Vec<DataSourceToIndexFieldMapping>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_detecting_columns: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AclConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_groups_column_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SqlConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_identifiers_enclosing_option: Option<String>,
}

// Confluence connector

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ConfluenceConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space_configuration: Option<ConfluenceSpaceConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_configuration: Option<ConfluencePageConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blog_configuration: Option<ConfluenceBlogConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment_configuration: Option<ConfluenceAttachmentConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_configuration: Option<DataSourceVpcConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inclusion_patterns: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusion_patterns: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_configuration: Option<ProxyConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ConfluenceSpaceConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crawl_personal_spaces: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crawl_archived_spaces: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_spaces: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_spaces: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space_field_mappings: Option<Vec<ConfluenceSpaceToIndexFieldMapping>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ConfluenceSpaceToIndexFieldMapping {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source_field_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_field_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_field_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ConfluencePageConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_field_mappings: Option<Vec<ConfluencePageToIndexFieldMapping>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ConfluencePageToIndexFieldMapping {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source_field_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_field_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_field_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ConfluenceBlogConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blog_field_mappings: Option<Vec<ConfluenceBlogToIndexFieldMapping>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ConfluenceBlogToIndexFieldMapping {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source_field_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_field_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_field_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ConfluenceAttachmentConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crawl_attachments: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment_field_mappings: Option<Vec<ConfluenceAttachmentToIndexFieldMapping>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ConfluenceAttachmentToIndexFieldMapping {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source_field_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_field_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_field_name: Option<String>,
}

// Google Drive connector

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GoogleDriveConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inclusion_patterns: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusion_patterns: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_mappings: Option<Vec<DataSourceToIndexFieldMapping>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_mime_types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_user_accounts: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_shared_drives: Option<Vec<String>>,
}

// Web crawler connector

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct WebCrawlerConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urls: Option<WebCrawlerUrls>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crawl_depth: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_links_per_page: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_content_size_per_page_in_mega_bytes: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_urls_per_minute_crawl_rate: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_inclusion_patterns: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_exclusion_patterns: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_configuration: Option<ProxyConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication_configuration: Option<WebCrawlerAuthenticationConfiguration>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct WebCrawlerUrls {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed_url_configuration: Option<WebCrawlerSeedUrlConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_maps_configuration: Option<WebCrawlerSiteMapsConfiguration>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct WebCrawlerSeedUrlConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed_urls: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_crawler_mode: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct WebCrawlerSiteMapsConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_maps: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct WebCrawlerAuthenticationConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub basic_authentication: Option<Vec<WebCrawlerBasicAuthentication>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct WebCrawlerBasicAuthentication {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials: Option<String>,
}

// OneDrive connector

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct OneDriveConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub one_drive_users: Option<OneDriveUsers>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inclusion_patterns: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusion_patterns: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_mappings: Option<Vec<DataSourceToIndexFieldMapping>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_local_groups: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct OneDriveUsers {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub one_drive_user_list: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub one_drive_user_s3_path: Option<S3Path>,
}

// Custom document enrichment

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CustomDocumentEnrichmentConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_configurations: Option<Vec<InlineCustomDocumentEnrichmentConfiguration>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_extraction_hook_configuration: Option<HookConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_extraction_hook_configuration: Option<HookConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct InlineCustomDocumentEnrichmentConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<DocumentAttributeCondition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<DocumentAttributeTarget>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_content_deletion: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DocumentAttributeCondition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition_document_attribute_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition_on_value: Option<DocumentAttributeValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DocumentAttributeTarget {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_document_attribute_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_document_attribute_value_deletion: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_document_attribute_value: Option<DocumentAttributeValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct HookConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invocation_condition: Option<DocumentAttributeCondition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lambda_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_bucket: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DocumentAttributeValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub string_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub string_list_value: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_value: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_value: Option<String>,
}
