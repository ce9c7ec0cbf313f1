//! Request construction and model reconstruction for indices.
//!
//! `CreateIndex` takes neither document metadata configurations nor capacity
//! units, so an index that sets either is created first and then updated.

use kendra_cfn_api::protocol::{
    CreateIndexRequest, DeleteIndexRequest, DescribeIndexRequest, DescribeIndexResponse,
    ListIndicesRequest, ListIndicesResponse, UpdateIndexRequest,
};
use kendra_cfn_api::types::{IndexEdition, UserContextPolicy};
use kendra_cfn_core::Tag;

use super::mapper;
use super::model::ResourceModel;
use crate::error::{required, TranslateError};
use crate::mapper::or_empty;

pub fn create_request(
    model: &ResourceModel,
    tags: Option<Vec<Tag>>,
    client_token: Option<&str>,
) -> Result<CreateIndexRequest, TranslateError> {
    Ok(CreateIndexRequest {
        name: required(model.name.as_ref(), "Name")?.to_string(),
        edition: model
            .edition
            .as_deref()
            .map(str::parse::<IndexEdition>)
            .transpose()?,
        role_arn: model.role_arn.clone(),
        server_side_encryption_configuration: mapper::encryption_to_remote(
            model.server_side_encryption_configuration.as_ref(),
        )?,
        description: model.description.clone(),
        client_token: client_token.map(str::to_string),
        tags,
        user_token_configurations: mapper::user_tokens_to_remote(
            model.user_token_configurations.as_deref(),
        )?,
        user_context_policy: user_context_policy(model)?,
    })
}

/// Whether create has to be followed by an update
pub fn needs_follow_up(model: &ResourceModel) -> bool {
    model.document_metadata_configurations.is_some() || model.capacity_units.is_some()
}

/// The properties `CreateIndex` could not take
pub fn follow_up_request(model: &ResourceModel) -> Result<UpdateIndexRequest, TranslateError> {
    Ok(UpdateIndexRequest {
        id: required(model.id.as_ref(), "Id")?.to_string(),
        document_metadata_configuration_updates: mapper::document_metadata_to_remote(
            model.document_metadata_configurations.as_deref(),
        )?,
        capacity_units: mapper::capacity_units_to_remote(model.capacity_units.as_ref())?,
        ..Default::default()
    })
}

pub fn describe_request(model: &ResourceModel) -> Result<DescribeIndexRequest, TranslateError> {
    Ok(DescribeIndexRequest {
        id: required(model.id.as_ref(), "Id")?.to_string(),
    })
}

/// An unset description is sent as `""`, which the service reads as "clear".
/// Only the description is cleared this way; other unset fields are omitted.
pub fn update_request(model: &ResourceModel) -> Result<UpdateIndexRequest, TranslateError> {
    Ok(UpdateIndexRequest {
        id: required(model.id.as_ref(), "Id")?.to_string(),
        name: model.name.clone(),
        role_arn: model.role_arn.clone(),
        description: or_empty(model.description.as_ref()),
        document_metadata_configuration_updates: mapper::document_metadata_to_remote(
            model.document_metadata_configurations.as_deref(),
        )?,
        capacity_units: mapper::capacity_units_to_remote(model.capacity_units.as_ref())?,
        user_token_configurations: mapper::user_tokens_to_remote(
            model.user_token_configurations.as_deref(),
        )?,
        user_context_policy: user_context_policy(model)?,
    })
}

pub fn delete_request(model: &ResourceModel) -> Result<DeleteIndexRequest, TranslateError> {
    Ok(DeleteIndexRequest {
        id: required(model.id.as_ref(), "Id")?.to_string(),
    })
}

pub fn list_request(next_token: Option<&str>) -> ListIndicesRequest {
    ListIndicesRequest {
        next_token: next_token.map(str::to_string),
        max_results: None,
    }
}

pub fn from_describe(
    response: DescribeIndexResponse,
    tags: Option<Vec<Tag>>,
    arn: String,
) -> ResourceModel {
    ResourceModel {
        id: response.id,
        arn: Some(arn),
        name: response.name,
        description: response.description,
        edition: response.edition.map(|e| e.as_str().to_string()),
        role_arn: response.role_arn,
        server_side_encryption_configuration: mapper::encryption_to_model(
            response.server_side_encryption_configuration.as_ref(),
        ),
        tags: tags.filter(|tags| !tags.is_empty()),
        document_metadata_configurations: mapper::document_metadata_to_model(
            response.document_metadata_configurations.as_deref(),
        ),
        capacity_units: mapper::capacity_units_to_model(response.capacity_units.as_ref()),
        user_context_policy: response.user_context_policy.map(|p| p.as_str().to_string()),
        user_token_configurations: mapper::user_tokens_to_model(
            response.user_token_configurations.as_deref(),
        ),
    }
}

/// Identity-only models; callers read each one for detail
pub fn from_list(response: ListIndicesResponse) -> Vec<ResourceModel> {
    response
        .index_configuration_summary_items
        .unwrap_or_default()
        .into_iter()
        .map(|summary| ResourceModel {
            id: summary.id,
            ..Default::default()
        })
        .collect()
}

fn user_context_policy(model: &ResourceModel) -> Result<Option<UserContextPolicy>, TranslateError> {
    Ok(model
        .user_context_policy
        .as_deref()
        .map(str::parse::<UserContextPolicy>)
        .transpose()?)
}
