use async_trait::async_trait;
use kendra_cfn_core::{
    CallbackContext, HandlerError, HandlerResult, ProgressEvent, ResourceHandlerRequest,
    Stabilizer, Stage,
};
use tracing::info;

use super::model::ResourceModel;
use super::{translator, TYPE_NAME};
use crate::handler::{
    arns, desired, ensure_absent, ensure_unchanged, primary_id, HandlerContext, RemoteResultExt,
    ResourceHandler,
};
use crate::settle::{self, Settle};
use crate::tagging;

pub struct IndexHandler;

impl IndexHandler {
    async fn settle(
        &self,
        ctx: &HandlerContext<'_>,
        model: &ResourceModel,
        stage: Stage,
        callback: &CallbackContext,
    ) -> HandlerResult<Settle> {
        let describe = translator::describe_request(model)?;
        let id = describe.id.clone();
        let observed = ctx
            .client
            .describe_index(describe)
            .await
            .or_handler_error(TYPE_NAME, &id)?
            .stability();
        let stabilizer = Stabilizer::new(
            TYPE_NAME,
            &id,
            ctx.stabilization.index_delay(),
            ctx.stabilization.timeout(),
        );
        settle::poll(&stabilizer, stage, callback, observed, ctx.now)
    }

    async fn read_model(
        &self,
        ctx: &HandlerContext<'_>,
        request: &ResourceHandlerRequest<ResourceModel>,
        model: &ResourceModel,
    ) -> HandlerResult<ResourceModel> {
        let id = primary_id(model.id.as_ref(), TYPE_NAME)?;
        let response = ctx
            .client
            .describe_index(translator::describe_request(model)?)
            .await
            .or_handler_error(TYPE_NAME, id)?;
        let arn = arns(request).index(Some(id))?;
        let tags = tagging::read_tags(ctx.client, &arn, TYPE_NAME, id).await?;
        Ok(translator::from_describe(response, tags, arn))
    }

    async fn create_remote(
        &self,
        ctx: &HandlerContext<'_>,
        request: &ResourceHandlerRequest<ResourceModel>,
        model: &ResourceModel,
    ) -> HandlerResult<String> {
        if let Some(id) = model.id.as_deref().filter(|id| !id.is_empty()) {
            let existing = ctx
                .client
                .describe_index(translator::describe_request(model)?)
                .await;
            ensure_absent(existing, TYPE_NAME, id)?;
        }

        let tags = tagging::desired_tags(model.tags.as_deref(), &request.desired_resource_tags);
        let create = translator::create_request(
            model,
            tags.to_tags(),
            request.client_request_token.as_deref(),
        )?;
        let name = create.name.clone();
        let response = ctx
            .client
            .create_index(create)
            .await
            .or_handler_error(TYPE_NAME, &name)?;
        let id = response
            .id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| HandlerError::GeneralService("CreateIndex returned no id".into()))?;
        info!(resource_type = TYPE_NAME, id = %id, name = %name, "index created");
        Ok(id)
    }
}

#[async_trait]
impl ResourceHandler for IndexHandler {
    type Model = ResourceModel;

    const TYPE_NAME: &'static str = TYPE_NAME;

    async fn create(
        &self,
        ctx: &HandlerContext<'_>,
        request: &ResourceHandlerRequest<ResourceModel>,
        callback: &CallbackContext,
    ) -> HandlerResult<ProgressEvent<ResourceModel>> {
        let mut model = desired(request)?;

        if !callback.resuming(Stage::AwaitingFollowUpUpdate) {
            if !callback.resuming(Stage::AwaitingCreate) {
                model.id = Some(self.create_remote(ctx, request, &model).await?);
            }

            let settled = self
                .settle(ctx, &model, Stage::AwaitingCreate, callback)
                .await?;
            if let Some(event) = settled.in_progress(model.clone()) {
                return Ok(event);
            }

            if translator::needs_follow_up(&model) {
                let id = primary_id(model.id.as_ref(), TYPE_NAME)?;
                ctx.client
                    .update_index(translator::follow_up_request(&model)?)
                    .await
                    .or_handler_error(TYPE_NAME, id)?;
                info!(
                    resource_type = TYPE_NAME,
                    id = %id,
                    "applied properties create does not accept"
                );
            }
        }

        if translator::needs_follow_up(&model) {
            let settled = self
                .settle(ctx, &model, Stage::AwaitingFollowUpUpdate, callback)
                .await?;
            if let Some(event) = settled.in_progress(model.clone()) {
                return Ok(event);
            }
        }

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
        callback: &CallbackContext,
    ) -> HandlerResult<ProgressEvent<ResourceModel>> {
        let mut model = desired(request)?;
        let previous = request.previous_resource_state.clone().unwrap_or_default();
        if model.id.is_none() {
            model.id = previous.id.clone();
        }
        let id = primary_id(model.id.as_ref(), TYPE_NAME)?.to_string();

        if !callback.resuming(Stage::AwaitingUpdate) {
            ensure_unchanged("Id", previous.id.as_ref(), model.id.as_ref(), TYPE_NAME, &id)?;
            ctx.client
                .update_index(translator::update_request(&model)?)
                .await
                .or_handler_error(TYPE_NAME, &id)?;
            info!(resource_type = TYPE_NAME, id = %id, "index updated");
        }

        let settled = self
            .settle(ctx, &model, Stage::AwaitingUpdate, callback)
            .await?;
        if let Some(event) = settled.in_progress(model.clone()) {
            return Ok(event);
        }

        let arn = arns(request).index(Some(&id))?;
        let tags = tagging::desired_tags(model.tags.as_deref(), &request.desired_resource_tags);
        tagging::reconcile_tags(ctx.client, &arn, &tags, TYPE_NAME, &id).await?;

        Ok(ProgressEvent::success(
            self.read_model(ctx, request, &model).await?,
        ))
    }

    async fn delete(
        &self,
        ctx: &HandlerContext<'_>,
        request: &ResourceHandlerRequest<ResourceModel>,
        callback: &CallbackContext,
    ) -> HandlerResult<ProgressEvent<ResourceModel>> {
        let model = desired(request)?;
        let id = primary_id(model.id.as_ref(), TYPE_NAME)?;

        if !callback.resuming(Stage::AwaitingDelete) {
            ctx.client
                .describe_index(translator::describe_request(&model)?)
                .await
                .or_handler_error(TYPE_NAME, id)?;
            ctx.client
                .delete_index(translator::delete_request(&model)?)
                .await
                .or_handler_error(TYPE_NAME, id)?;
            info!(resource_type = TYPE_NAME, id = %id, "index delete requested");
        }

        let describe = ctx
            .client
            .describe_index(translator::describe_request(&model)?)
            .await;
        let observed = settle::gone_or_pending(
            describe,
            |response| response.status.map(|s| s.to_string()),
            TYPE_NAME,
            id,
        )?;
        let stabilizer = Stabilizer::new(
            TYPE_NAME,
            id,
            ctx.stabilization.index_delay(),
            ctx.stabilization.timeout(),
        );
        let settled = settle::poll(
            &stabilizer,
            Stage::AwaitingDelete,
            callback,
            observed,
            ctx.now,
        )?;
        Ok(settled
            .in_progress(model.clone())
            .unwrap_or_else(ProgressEvent::deleted))
    }

    async fn list(
        &self,
        ctx: &HandlerContext<'_>,
        request: &ResourceHandlerRequest<ResourceModel>,
    ) -> HandlerResult<ProgressEvent<ResourceModel>> {
        let response = ctx
            .client
            .list_indices(translator::list_request(request.next_token.as_deref()))
            .await
            .or_handler_error(TYPE_NAME, "")?;
        let next_token = response.next_token.clone();
        Ok(ProgressEvent::list(translator::from_list(response), next_token))
    }
}
