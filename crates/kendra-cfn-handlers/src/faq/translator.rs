//! Request construction and model reconstruction for FAQs.

use kendra_cfn_api::protocol::{
    CreateFaqRequest, DeleteFaqRequest, DescribeFaqRequest, DescribeFaqResponse, ListFaqsRequest,
    ListFaqsResponse,
};
use kendra_cfn_api::types::FaqFileFormat;
use kendra_cfn_core::Tag;

use super::model::ResourceModel;
use crate::error::{required, TranslateError};
use crate::mapper::{s3_path_to_model, s3_path_to_remote};

pub fn create_request(
    model: &ResourceModel,
    tags: Option<Vec<Tag>>,
    client_token: Option<&str>,
) -> Result<CreateFaqRequest, TranslateError> {
    Ok(CreateFaqRequest {
        index_id: required(model.index_id.as_ref(), "IndexId")?.to_string(),
        name: required(model.name.as_ref(), "Name")?.to_string(),
        description: model.description.clone(),
        s3_path: model.s3_path.as_ref().map(s3_path_to_remote).transpose()?,
        role_arn: model.role_arn.clone(),
        tags,
        file_format: model
            .file_format
            .as_deref()
            .map(str::parse::<FaqFileFormat>)
            .transpose()?,
        client_token: client_token.map(str::to_string),
        language_code: model.language_code.clone(),
    })
}

pub fn describe_request(model: &ResourceModel) -> Result<DescribeFaqRequest, TranslateError> {
    Ok(DescribeFaqRequest {
        id: required(model.id.as_ref(), "Id")?.to_string(),
        index_id: required(model.index_id.as_ref(), "IndexId")?.to_string(),
    })
}

pub fn delete_request(model: &ResourceModel) -> Result<DeleteFaqRequest, TranslateError> {
    Ok(DeleteFaqRequest {
        id: required(model.id.as_ref(), "Id")?.to_string(),
        index_id: required(model.index_id.as_ref(), "IndexId")?.to_string(),
    })
}

pub fn list_request(index_id: &str, next_token: Option<&str>) -> ListFaqsRequest {
    ListFaqsRequest {
        index_id: index_id.to_string(),
        next_token: next_token.map(str::to_string),
        max_results: None,
    }
}

pub fn from_describe(
    response: DescribeFaqResponse,
    tags: Option<Vec<Tag>>,
    arn: String,
) -> ResourceModel {
    ResourceModel {
        id: response.id,
        index_id: response.index_id,
        name: response.name,
        description: response.description,
        file_format: response.file_format.map(|f| f.as_str().to_string()),
        s3_path: response.s3_path.as_ref().map(s3_path_to_model),
        role_arn: response.role_arn,
        tags: tags.filter(|tags| !tags.is_empty()),
        arn: Some(arn),
        language_code: response.language_code,
    }
}

/// Identity-only models; callers read each one for detail
pub fn from_list(response: ListFaqsResponse, index_id: &str) -> Vec<ResourceModel> {
    response
        .faq_summary_items
        .unwrap_or_default()
        .into_iter()
        .map(|summary| ResourceModel {
            id: summary.id,
            index_id: Some(index_id.to_string()),
            ..Default::default()
        })
        .collect()
}

/// First create-only property that differs between two models
pub fn changed_property(previous: &ResourceModel, desired: &ResourceModel) -> Option<&'static str> {
    fn differs<T: PartialEq>(previous: &Option<T>, desired: &Option<T>) -> bool {
        previous.is_some() && desired.is_some() && previous != desired
    }

    if differs(&previous.id, &desired.id) {
        Some("Id")
    } else if differs(&previous.index_id, &desired.index_id) {
        Some("IndexId")
    } else if previous.name != desired.name {
        Some("Name")
    } else if previous.description != desired.description {
        Some("Description")
    } else if previous.file_format != desired.file_format {
        Some("FileFormat")
    } else if previous.s3_path != desired.s3_path {
        Some("S3Path")
    } else if previous.role_arn != desired.role_arn {
        Some("RoleArn")
    } else if previous.language_code != desired.language_code {
        Some("LanguageCode")
    } else {
        None
    }
}
