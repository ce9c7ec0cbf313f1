//! Request construction and model reconstruction for featured results sets.
//!
//! The service names the identity fields `FeaturedResultsSetId` and
//! `FeaturedResultsSetName`; the resource calls them `Id` and `Name`.

use kendra_cfn_api::protocol::{
    BatchDeleteFeaturedResultsSetRequest, BatchDeleteFeaturedResultsSetResponse,
    CreateFeaturedResultsSetRequest, DescribeFeaturedResultsSetRequest,
    DescribeFeaturedResultsSetResponse, ListFeaturedResultsSetsRequest,
    ListFeaturedResultsSetsResponse, UpdateFeaturedResultsSetRequest,
};
use kendra_cfn_api::types::{self as wire, ErrorCode, FeaturedResultsSetStatus};
use kendra_cfn_core::{HandlerError, Tag};

use super::model::{FeaturedDocument, ResourceModel};
use super::TYPE_NAME;
use crate::error::{required, TranslateError};
use crate::mapper::{list_to_model, list_to_remote, or_empty, strings_to_model};

pub fn create_request(
    model: &ResourceModel,
    tags: Option<Vec<Tag>>,
    client_token: Option<&str>,
) -> Result<CreateFeaturedResultsSetRequest, TranslateError> {
    Ok(CreateFeaturedResultsSetRequest {
        index_id: required(model.index_id.as_ref(), "IndexId")?.to_string(),
        featured_results_set_name: required(model.name.as_ref(), "Name")?.to_string(),
        description: model.description.clone(),
        client_token: client_token.map(str::to_string),
        status: status(model)?,
        query_texts: model.query_texts.clone(),
        featured_documents: documents_to_remote(model)?,
        tags,
    })
}

pub fn describe_request(
    model: &ResourceModel,
) -> Result<DescribeFeaturedResultsSetRequest, TranslateError> {
    Ok(DescribeFeaturedResultsSetRequest {
        index_id: required(model.index_id.as_ref(), "IndexId")?.to_string(),
        featured_results_set_id: required(model.id.as_ref(), "Id")?.to_string(),
    })
}

/// An unset description is sent as `""`, which the service reads as "clear"
pub fn update_request(
    model: &ResourceModel,
) -> Result<UpdateFeaturedResultsSetRequest, TranslateError> {
    Ok(UpdateFeaturedResultsSetRequest {
        index_id: required(model.index_id.as_ref(), "IndexId")?.to_string(),
        featured_results_set_id: required(model.id.as_ref(), "Id")?.to_string(),
        featured_results_set_name: model.name.clone(),
        description: or_empty(model.description.as_ref()),
        status: status(model)?,
        query_texts: model.query_texts.clone(),
        featured_documents: documents_to_remote(model)?,
    })
}

/// The batch API with a batch of one
pub fn delete_request(
    model: &ResourceModel,
) -> Result<BatchDeleteFeaturedResultsSetRequest, TranslateError> {
    Ok(BatchDeleteFeaturedResultsSetRequest {
        index_id: required(model.index_id.as_ref(), "IndexId")?.to_string(),
        featured_results_set_ids: vec![required(model.id.as_ref(), "Id")?.to_string()],
    })
}

/// Per-id failures of a batch delete. `InvalidRequest` means the id is unknown.
pub fn delete_outcome(
    response: &BatchDeleteFeaturedResultsSetResponse,
    id: &str,
) -> Result<(), HandlerError> {
    let failure = response
        .errors
        .iter()
        .flatten()
        .find(|err| err.id.is_none() || err.id.as_deref() == Some(id));
    match failure {
        None => Ok(()),
        Some(err) if err.error_code == Some(ErrorCode::InvalidRequest) => {
            Err(HandlerError::not_found(TYPE_NAME, id))
        }
        Some(err) => Err(HandlerError::GeneralService(format!(
            "failed to delete featured results set {}: {}",
            id,
            err.error_message.as_deref().unwrap_or("unknown error")
        ))),
    }
}

pub fn list_request(index_id: &str, next_token: Option<&str>) -> ListFeaturedResultsSetsRequest {
    ListFeaturedResultsSetsRequest {
        index_id: index_id.to_string(),
        next_token: next_token.map(str::to_string),
        max_results: None,
    }
}

pub fn from_describe(
    response: DescribeFeaturedResultsSetResponse,
    index_id: Option<String>,
    tags: Option<Vec<Tag>>,
    arn: String,
) -> ResourceModel {
    ResourceModel {
        id: response.featured_results_set_id,
        index_id,
        name: response.featured_results_set_name,
        description: response.description,
        status: response.status.map(|s| s.as_str().to_string()),
        query_texts: strings_to_model(response.query_texts.as_deref()),
        featured_documents: list_to_model(
            response.featured_documents_with_metadata.as_deref(),
            |doc| FeaturedDocument { id: doc.id.clone() },
        ),
        tags: tags.filter(|tags| !tags.is_empty()),
        arn: Some(arn),
        creation_timestamp: response.creation_timestamp,
        last_updated_timestamp: response.last_updated_timestamp,
    }
}

/// Identity-only models; callers read each one for detail
pub fn from_list(response: ListFeaturedResultsSetsResponse, index_id: &str) -> Vec<ResourceModel> {
    response
        .featured_results_set_summary_items
        .unwrap_or_default()
        .into_iter()
        .map(|summary| ResourceModel {
            id: summary.featured_results_set_id,
            index_id: Some(index_id.to_string()),
            ..Default::default()
        })
        .collect()
}

fn status(model: &ResourceModel) -> Result<Option<FeaturedResultsSetStatus>, TranslateError> {
    Ok(model
        .status
        .as_deref()
        .map(str::parse::<FeaturedResultsSetStatus>)
        .transpose()?)
}

fn documents_to_remote(
    model: &ResourceModel,
) -> Result<Option<Vec<wire::FeaturedDocument>>, TranslateError> {
    list_to_remote(model.featured_documents.as_deref(), |doc| {
        Ok::<_, TranslateError>(wire::FeaturedDocument { id: doc.id.clone() })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use kendra_cfn_api::types::{BatchDeleteFeaturedResultsSetError, FeaturedDocumentWithMetadata};
    use kendra_cfn_core::HandlerErrorCode;

    fn model() -> ResourceModel {
        ResourceModel {
            id: Some("frs-1".into()),
            index_id: Some("idx".into()),
            name: Some("pinned".into()),
            status: Some("ACTIVE".into()),
            query_texts: Some(vec!["pricing".into()]),
            featured_documents: Some(vec![FeaturedDocument {
                id: Some("doc-1".into()),
            }]),
            ..Default::default()
        }
    }

    #[test]
    fn test_identity_fields_are_renamed() {
        let request = create_request(&model(), None, None).unwrap();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["FeaturedResultsSetName"], "pinned");
        assert_eq!(json["Status"], "ACTIVE");
        assert_eq!(json["FeaturedDocuments"][0]["Id"], "doc-1");

        let describe = describe_request(&model()).unwrap();
        assert_eq!(describe.featured_results_set_id, "frs-1");
    }

    #[test]
    fn test_update_request_clears_description() {
        let request = update_request(&model()).unwrap();
        assert_eq!(request.description.as_deref(), Some(""));
        assert_eq!(request.featured_results_set_name.as_deref(), Some("pinned"));
    }

    #[test]
    fn test_delete_is_a_batch_of_one() {
        let request = delete_request(&model()).unwrap();
        assert_eq!(request.featured_results_set_ids, vec!["frs-1".to_string()]);
    }

    #[test]
    fn test_delete_outcome() {
        let ok = BatchDeleteFeaturedResultsSetResponse {
            errors: Some(Vec::new()),
        };
        assert!(delete_outcome(&ok, "frs-1").is_ok());

        let unknown = BatchDeleteFeaturedResultsSetResponse {
            errors: Some(vec![BatchDeleteFeaturedResultsSetError {
                id: Some("frs-1".into()),
                error_code: Some(ErrorCode::InvalidRequest),
                error_message: Some("no such set".into()),
            }]),
        };
        assert!(delete_outcome(&unknown, "frs-1").unwrap_err().is_not_found());

        let broken = BatchDeleteFeaturedResultsSetResponse {
            errors: Some(vec![BatchDeleteFeaturedResultsSetError {
                id: Some("frs-1".into()),
                error_code: Some(ErrorCode::InternalError),
                error_message: Some("try later".into()),
            }]),
        };
        let err = delete_outcome(&broken, "frs-1").unwrap_err();
        assert_eq!(err.code(), HandlerErrorCode::GeneralServiceException);
        assert!(err.to_string().contains("try later"));
    }

    #[test]
    fn test_from_describe() {
        let response = DescribeFeaturedResultsSetResponse {
            featured_results_set_id: Some("frs-1".into()),
            featured_results_set_name: Some("pinned".into()),
            status: Some(FeaturedResultsSetStatus::Inactive),
            query_texts: Some(Vec::new()),
            featured_documents_with_metadata: Some(vec![FeaturedDocumentWithMetadata {
                id: Some("doc-1".into()),
                title: Some("Pricing".into()),
                uri: None,
            }]),
            creation_timestamp: Some(1_700_000_000_000),
            ..Default::default()
        };
        let arn = "arn:aws:kendra:us-east-1:111122223333:index/idx/featured-results-set/frs-1";
        let model = from_describe(response, Some("idx".into()), None, arn.to_string());
        assert_eq!(model.name.as_deref(), Some("pinned"));
        assert_eq!(model.status.as_deref(), Some("INACTIVE"));
        assert_eq!(model.query_texts, None);
        assert_eq!(
            model.featured_documents,
            Some(vec![FeaturedDocument {
                id: Some("doc-1".into())
            }])
        );
        assert_eq!(model.creation_timestamp, Some(1_700_000_000_000));
    }
}
