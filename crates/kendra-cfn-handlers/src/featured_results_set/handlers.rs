use async_trait::async_trait;
use kendra_cfn_core::{
    CallbackContext, HandlerError, HandlerResult, ProgressEvent, ResourceHandlerRequest,
    ResourceKind,
};
use tracing::info;

use super::model::ResourceModel;
use super::{translator, TYPE_NAME};
use crate::handler::{
    arns, desired, ensure_absent, ensure_unchanged, primary_id, HandlerContext, RemoteResultExt,
    ResourceHandler,
};
use crate::tagging;

pub struct FeaturedResultsSetHandler;

impl FeaturedResultsSetHandler {
    async fn read_model(
        &self,
        ctx: &HandlerContext<'_>,
        request: &ResourceHandlerRequest<ResourceModel>,
        model: &ResourceModel,
    ) -> HandlerResult<ResourceModel> {
        let id = primary_id(model.id.as_ref(), TYPE_NAME)?;
        let response = ctx
            .client
            .describe_featured_results_set(translator::describe_request(model)?)
            .await
            .or_handler_error(TYPE_NAME, id)?;
        let arn = arns(request).child(
            ResourceKind::FeaturedResultsSet,
            model.index_id.as_deref(),
            Some(id),
        )?;
        let tags = tagging::read_tags(ctx.client, &arn, TYPE_NAME, id).await?;
        Ok(translator::from_describe(
            response,
            model.index_id.clone(),
            tags,
            arn,
        ))
    }
}

#[async_trait]
impl ResourceHandler for FeaturedResultsSetHandler {
    type Model = ResourceModel;

    const TYPE_NAME: &'static str = TYPE_NAME;

    async fn create(
        &self,
        ctx: &HandlerContext<'_>,
        request: &ResourceHandlerRequest<ResourceModel>,
        _callback: &CallbackContext,
    ) -> HandlerResult<ProgressEvent<ResourceModel>> {
        let mut model = desired(request)?;

        if let Some(id) = model.id.as_deref().filter(|id| !id.is_empty()) {
            let existing = ctx
                .client
                .describe_featured_results_set(translator::describe_request(&model)?)
                .await;
            ensure_absent(existing, TYPE_NAME, id)?;
        }

        let tags = tagging::desired_tags(model.tags.as_deref(), &request.desired_resource_tags);
        let create = translator::create_request(
            &model,
            tags.to_tags(),
            request.client_request_token.as_deref(),
        )?;
        let name = create.featured_results_set_name.clone();
        let response = ctx
            .client
            .create_featured_results_set(create)
            .await
            .or_handler_error(TYPE_NAME, &name)?;
        let id = response
            .featured_results_set
            .and_then(|set| set.featured_results_set_id)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| {
                HandlerError::GeneralService("CreateFeaturedResultsSet returned no id".into())
            })?;
        info!(resource_type = TYPE_NAME, id = %id, "featured results set created");
        model.id = Some(id);

        Ok(ProgressEvent::success(
            self.read_model(ctx, request, &model).await?,
        ))
    }

    async fn read(
        &self,
        ctx: &HandlerContext<'_>,
        request: &ResourceHandlerRequest<ResourceModel>,
    ) -> HandlerResult<ProgressEvent<ResourceModel>> {
        let model = desired(request)?;
        Ok(ProgressEvent::success(
            self.read_model(ctx, request, &model).await?,
        ))
    }

    async fn update(
        &self,
        ctx: &HandlerContext<'_>,
        request: &ResourceHandlerRequest<ResourceModel>,
        _callback: &CallbackContext,
    ) -> HandlerResult<ProgressEvent<ResourceModel>> {
        let mut model = desired(request)?;
        let previous = request.previous_resource_state.clone().unwrap_or_default();
        if model.id.is_none() {
            model.id = previous.id.clone();
        }
        let id = primary_id(model.id.as_ref(), TYPE_NAME)?;
        ensure_unchanged("Id", previous.id.as_ref(), model.id.as_ref(), TYPE_NAME, id)?;
        ensure_unchanged(
            "IndexId",
            previous.index_id.as_ref(),
            model.index_id.as_ref(),
            TYPE_NAME,
            id,
        )?;

        ctx.client
            .update_featured_results_set(translator::update_request(&model)?)
            .await
            .or_handler_error(TYPE_NAME, id)?;
        info!(resource_type = TYPE_NAME, id = %id, "featured results set updated");

        let arn = arns(request).child(
            ResourceKind::FeaturedResultsSet,
            model.index_id.as_deref(),
            Some(id),
        )?;
        let tags = tagging::desired_tags(model.tags.as_deref(), &request.desired_resource_tags);
        tagging::reconcile_tags(ctx.client, &arn, &tags, TYPE_NAME, id).await?;

        Ok(ProgressEvent::success(
            self.read_model(ctx, request, &model).await?,
        ))
    }

    async fn delete(
        &self,
        ctx: &HandlerContext<'_>,
        request: &ResourceHandlerRequest<ResourceModel>,
        _callback: &CallbackContext,
    ) -> HandlerResult<ProgressEvent<ResourceModel>> {
        let model = desired(request)?;
        let id = primary_id(model.id.as_ref(), TYPE_NAME)?;

        ctx.client
            .describe_featured_results_set(translator::describe_request(&model)?)
            .await
            .or_handler_error(TYPE_NAME, id)?;
        let response = ctx
            .client
            .batch_delete_featured_results_set(translator::delete_request(&model)?)
            .await
            .or_handler_error(TYPE_NAME, id)?;
        translator::delete_outcome(&response, id)?;
        info!(resource_type = TYPE_NAME, id = %id, "featured results set deleted");

        Ok(ProgressEvent::deleted())
    }

    async fn list(
        &self,
        ctx: &HandlerContext<'_>,
        request: &ResourceHandlerRequest<ResourceModel>,
    ) -> HandlerResult<ProgressEvent<ResourceModel>> {
        let model = request.desired_resource_state.clone().unwrap_or_default();
        let index_id = crate::error::required(model.index_id.as_ref(), "IndexId")?;
        let response = ctx
            .client
            .list_featured_results_sets(translator::list_request(
                index_id,
                request.next_token.as_deref(),
            ))
            .await
            .or_handler_error(TYPE_NAME, index_id)?;
        let next_token = response.next_token.clone();
        Ok(ProgressEvent::list(
            translator::from_list(response, index_id),
            next_token,
        ))
    }
}
