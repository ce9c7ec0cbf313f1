//! Data source connector configurations.
//!
//! The service models a data source configuration as a structure with one
//! optional member per connector, of which exactly one is set. Here that is
//! a sum type; serde's external tagging produces the same JSON object.

use super::common::{
    DataSourceToIndexFieldMapping, DataSourceVpcConfiguration, ProxyConfiguration, S3Path,
};
use serde::{Deserialize, Serialize};

kendra_enum! {
    DataSourceType {
        S3 => "S3",
        SharePoint => "SHAREPOINT",
        Database => "DATABASE",
        Salesforce => "SALESFORCE",
        OneDrive => "ONEDRIVE",
        ServiceNow => "SERVICENOW",
        Custom => "CUSTOM",
        Confluence => "CONFLUENCE",
        GoogleDrive => "GOOGLEDRIVE",
        WebCrawler => "WEBCRAWLER",
        WorkDocs => "WORKDOCS",
        Fsx => "FSX",
        Slack => "SLACK",
        Box => "BOX",
        Quip => "QUIP",
        Jira => "JIRA",
        Github => "GITHUB",
        Alfresco => "ALFRESCO",
        Template => "TEMPLATE",
    }
}

kendra_enum! {
    DataSourceStatus {
        Creating => "CREATING",
        Deleting => "DELETING",
        Failed => "FAILED",
        Updating => "UPDATING",
        Active => "ACTIVE",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DataSourceConfiguration {
    #[serde(rename = "S3Configuration")]
    S3(S3DataSourceConfiguration),
    #[serde(rename = "SharePointConfiguration")]
    SharePoint(SharePointConfiguration),
    #[serde(rename = "SalesforceConfiguration")]
    Salesforce(SalesforceConfiguration),
    #[serde(rename = "ServiceNowConfiguration")]
    ServiceNow(ServiceNowConfiguration),
    #[serde(rename = "DatabaseConfiguration")]
    Database(DatabaseConfiguration),
    #[serde(rename = "ConfluenceConfiguration")]
    Confluence(ConfluenceConfiguration),
    #[serde(rename = "GoogleDriveConfiguration")]
    GoogleDrive(GoogleDriveConfiguration),
    #[serde(rename = "WebCrawlerConfiguration")]
    WebCrawler(WebCrawlerConfiguration),
    #[serde(rename = "OneDriveConfiguration")]
    OneDrive(OneDriveConfiguration),
    /// A connector this crate does not model (template based, WorkDocs, ...)
    #[serde(untagged)]
    Unsupported(serde_json::Value),
}

impl DataSourceConfiguration {
    /// Data source type that goes with this configuration
    pub fn data_source_type(&self) -> Option<DataSourceType> {
        match self {
            Self::S3(_) => Some(DataSourceType::S3),
            Self::SharePoint(_) => Some(DataSourceType::SharePoint),
            Self::Salesforce(_) => Some(DataSourceType::Salesforce),
            Self::ServiceNow(_) => Some(DataSourceType::ServiceNow),
            Self::Database(_) => Some(DataSourceType::Database),
            Self::Confluence(_) => Some(DataSourceType::Confluence),
            Self::GoogleDrive(_) => Some(DataSourceType::GoogleDrive),
            Self::WebCrawler(_) => Some(DataSourceType::WebCrawler),
            Self::OneDrive(_) => Some(DataSourceType::OneDrive),
            Self::Unsupported(_) => None,
        }
    }
}

kendra_enum! {
    SharePointVersion {
        Sharepoint2013 => "SHAREPOINT_2013",
        Sharepoint2016 => "SHAREPOINT_2016",
        SharepointOnline => "SHAREPOINT_ONLINE",
        Sharepoint2019 => "SHAREPOINT_2019",
    }
}

kendra_enum! {
    SharePointOnlineAuthenticationType {
        HttpBasic => "HTTP_BASIC",
        Oauth2 => "OAUTH2",
    }
}

kendra_enum! {
    SalesforceStandardObjectName {
        Account => "ACCOUNT",
        Campaign => "CAMPAIGN",
        Case => "CASE",
        Contact => "CONTACT",
        Contract => "CONTRACT",
        Document => "DOCUMENT",
        Group => "GROUP",
        Idea => "IDEA",
        Lead => "LEAD",
        Opportunity => "OPPORTUNITY",
        Partner => "PARTNER",
        Pricebook => "PRICEBOOK",
        Product => "PRODUCT",
        Profile => "PROFILE",
        Solution => "SOLUTION",
        Task => "TASK",
        User => "USER",
    }
}

kendra_enum! {
    SalesforceKnowledgeArticleState {
        Draft => "DRAFT",
        Published => "PUBLISHED",
        Archived => "ARCHIVED",
    }
}

kendra_enum! {
    SalesforceChatterFeedIncludeFilterType {
        ActiveUser => "ACTIVE_USER",
        StandardUser => "STANDARD_USER",
    }
}

kendra_enum! {
    ServiceNowBuildVersionType {
        London => "LONDON",
        Others => "OTHERS",
    }
}

kendra_enum! {
    ServiceNowAuthenticationType {
        HttpBasic => "HTTP_BASIC",
        Oauth2 => "OAUTH2",
    }
}

kendra_enum! {
    DatabaseEngineType {
        RdsAuroraMysql => "RDS_AURORA_MYSQL",
        RdsAuroraPostgresql => "RDS_AURORA_POSTGRESQL",
        RdsMysql => "RDS_MYSQL",
        RdsPostgresql => "RDS_POSTGRESQL",
    }
}

kendra_enum! {
    QueryIdentifiersEnclosingOption {
        DoubleQuotes => "DOUBLE_QUOTES",
        None => "NONE",
    }
}

kendra_enum! {
    ConfluenceVersion {
        Cloud => "CLOUD",
        Server => "SERVER",
    }
}

kendra_enum! {
    ConfluenceAuthenticationType {
        HttpBasic => "HTTP_BASIC",
        Pat => "PAT",
    }
}

kendra_enum! {
    ConfluenceSpaceFieldName {
        DisplayUrl => "DISPLAY_URL",
        ItemType => "ITEM_TYPE",
        SpaceKey => "SPACE_KEY",
        Url => "URL",
    }
}

kendra_enum! {
    ConfluencePageFieldName {
        Author => "AUTHOR",
        ContentStatus => "CONTENT_STATUS",
        CreatedDate => "CREATED_DATE",
        DisplayUrl => "DISPLAY_URL",
        ItemType => "ITEM_TYPE",
        Labels => "LABELS",
        ModifiedDate => "MODIFIED_DATE",
        ParentId => "PARENT_ID",
        SpaceKey => "SPACE_KEY",
        SpaceName => "SPACE_NAME",
        Url => "URL",
        Version => "VERSION",
    }
}

kendra_enum! {
    ConfluenceBlogFieldName {
        Author => "AUTHOR",
        DisplayUrl => "DISPLAY_URL",
        ItemType => "ITEM_TYPE",
        Labels => "LABELS",
        PublishDate => "PUBLISH_DATE",
        SpaceKey => "SPACE_KEY",
        SpaceName => "SPACE_NAME",
        Url => "URL",
        Version => "VERSION",
    }
}

kendra_enum! {
    ConfluenceAttachmentFieldName {
        Author => "AUTHOR",
        ContentType => "CONTENT_TYPE",
        CreatedDate => "CREATED_DATE",
        DisplayUrl => "DISPLAY_URL",
        FileSize => "FILE_SIZE",
        ItemType => "ITEM_TYPE",
        ParentId => "PARENT_ID",
        SpaceKey => "SPACE_KEY",
        SpaceName => "SPACE_NAME",
        Url => "URL",
        Version => "VERSION",
    }
}

kendra_enum! {
    WebCrawlerMode {
        HostOnly => "HOST_ONLY",
        Subdomains => "SUBDOMAINS",
        Everything => "EVERYTHING",
    }
}

// S3

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

// SharePoint

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SharePointConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share_point_version: Option<SharePointVersion>,
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
    pub authentication_type: Option<SharePointOnlineAuthenticationType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_configuration: Option<ProxyConfiguration>,
}

// Salesforce

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
    pub name: Option<SalesforceStandardObjectName>,
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
    pub included_states: Option<Vec<SalesforceKnowledgeArticleState>>,
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
    pub include_filter_types: Option<Vec<SalesforceChatterFeedIncludeFilterType>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SalesforceStandardObjectAttachmentConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_title_field_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_mappings: Option<Vec<DataSourceToIndexFieldMapping>>,
}

// ServiceNow

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ServiceNowConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_now_build_version: Option<ServiceNowBuildVersionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub knowledge_article_configuration: Option<ServiceNowKnowledgeArticleConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_catalog_configuration: Option<ServiceNowServiceCatalogConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication_type: Option<ServiceNowAuthenticationType>,
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

// Database

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DatabaseConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_engine_type: Option<DatabaseEngineType>,
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
    pub query_identifiers_enclosing_option: Option<QueryIdentifiersEnclosingOption>,
}

// Confluence

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ConfluenceConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<ConfluenceVersion>,
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
    pub authentication_type: Option<ConfluenceAuthenticationType>,
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
    pub data_source_field_name: Option<ConfluenceSpaceFieldName>,
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
    pub data_source_field_name: Option<ConfluencePageFieldName>,
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
    pub data_source_field_name: Option<ConfluenceBlogFieldName>,
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
    pub data_source_field_name: Option<ConfluenceAttachmentFieldName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_field_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_field_name: Option<String>,
}

// Google Drive

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

// Web crawler

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct WebCrawlerConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urls: Option<Urls>,
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
    pub authentication_configuration: Option<AuthenticationConfiguration>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Urls {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed_url_configuration: Option<SeedUrlConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_maps_configuration: Option<SiteMapsConfiguration>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SeedUrlConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed_urls: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_crawler_mode: Option<WebCrawlerMode>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SiteMapsConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_maps: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AuthenticationConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub basic_authentication: Option<Vec<BasicAuthenticationConfiguration>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BasicAuthenticationConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials: Option<String>,
}

// OneDrive

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
