//! Featured results sets: documents pinned to the top of results for given queries.

use serde::{Deserialize, Serialize};

kendra_enum! {
    FeaturedResultsSetStatus {
        Active => "ACTIVE",
        Inactive => "INACTIVE",
    }
}

kendra_enum! {
    ErrorCode {
        InternalError => "InternalError",
        InvalidRequest => "InvalidRequest",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct FeaturedDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct FeaturedDocumentWithMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "URI", skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct FeaturedDocumentMissing {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Set as returned by create and update
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct FeaturedResultsSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_results_set_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_results_set_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<FeaturedResultsSetStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_texts: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_documents: Option<Vec<FeaturedDocument>>,
    /// Milliseconds since the epoch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated_timestamp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_timestamp: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct FeaturedResultsSetSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_results_set_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_results_set_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<FeaturedResultsSetStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated_timestamp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_timestamp: Option<i64>,
}

/// Per-id failure reported by a batch delete
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BatchDeleteFeaturedResultsSetError {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<ErrorCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}
