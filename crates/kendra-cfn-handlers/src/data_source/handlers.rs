use async_trait::async_trait;
use kendra_cfn_core::{
    CallbackContext, HandlerError, HandlerResult, ProgressEvent, ResourceHandlerRequest,
    ResourceKind, Stabilizer, Stage,
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

pub struct DataSourceHandler;

impl DataSourceHandler {
    /// Describe once and fold the status into the loop for `stage`
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
            .describe_data_source(describe)
            .await
            .or_handler_error(TYPE_NAME, &id)?
            .stability();
        let stabilizer = Stabilizer::new(
            TYPE_NAME,
            &id,
            ctx.stabilization.data_source_delay(),
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
            .describe_data_source(translator::describe_request(model)?)
            .await
            .or_handler_error(TYPE_NAME, id)?;
        let arn = arns(request).child(
            ResourceKind::DataSource,
            model.index_id.as_deref(),
            Some(id),
        )?;
        let tags = tagging::read_tags(ctx.client, &arn, TYPE_NAME, id).await?;
        Ok(translator::from_describe(response, tags, arn))
    }
}

#[async_trait]
impl ResourceHandler for DataSourceHandler {
    type Model = ResourceModel;

    const TYPE_NAME: &'static str = TYPE_NAME;

    async fn create(
        &self,
        ctx: &HandlerContext<'_>,
        request: &ResourceHandlerRequest<ResourceModel>,
        callback: &CallbackContext,
    ) -> HandlerResult<ProgressEvent<ResourceModel>> {
        let mut model = desired(request)?;

        if !callback.resuming(Stage::AwaitingCreate) {
            if let Some(id) = model.id.as_deref().filter(|id| !id.is_empty()) {
                let existing = ctx
                    .client
                    .describe_data_source(translator::describe_request(&model)?)
                    .await;
                ensure_absent(existing, TYPE_NAME, id)?;
            }

            let tags = tagging::desired_tags(model.tags.as_deref(), &request.desired_resource_tags);
            let create = translator::create_request(
                &model,
                tags.to_tags(),
                request.client_request_token.as_deref(),
            )?;
            let name = create.name.clone();
            let response = ctx
                .client
                .create_data_source(create)
                .await
                .or_handler_error(TYPE_NAME, &name)?;
            let id = response.id.filter(|id| !id.is_empty()).ok_or_else(|| {
                HandlerError::GeneralService("CreateDataSource returned no id".into())
            })?;
            info!(
                resource_type = TYPE_NAME,
                id = %id,
                index_id = model.index_id.as_deref().unwrap_or_default(),
                "data source created"
            );
            model.id = Some(id);
        }

        let settled = self
            .settle(ctx, &model, Stage::AwaitingCreate, callback)
            .await?;
        if let Some(event) = settled.in_progress(model.clone()) {
            return Ok(event);
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
            ensure_unchanged(
                "IndexId",
                previous.index_id.as_ref(),
                model.index_id.as_ref(),
                TYPE_NAME,
                &id,
            )?;
            ensure_unchanged(
                "Type",
                previous.r#type.as_ref(),
                model.r#type.as_ref(),
                TYPE_NAME,
                &id,
            )?;

            ctx.client
                .update_data_source(translator::update_request(&model)?)
                .await
                .or_handler_error(TYPE_NAME, &id)?;
            info!(resource_type = TYPE_NAME, id = %id, "data source updated");
        }

        let settled = self
            .settle(ctx, &model, Stage::AwaitingUpdate, callback)
            .await?;
        if let Some(event) = settled.in_progress(model.clone()) {
            return Ok(event);
        }

        let arn = arns(request).child(
            ResourceKind::DataSource,
            model.index_id.as_deref(),
            Some(&id),
        )?;
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
                .describe_data_source(translator::describe_request(&model)?)
                .await
                .or_handler_error(TYPE_NAME, id)?;
            ctx.client
                .delete_data_source(translator::delete_request(&model)?)
                .await
                .or_handler_error(TYPE_NAME, id)?;
            info!(resource_type = TYPE_NAME, id = %id, "data source delete requested");
        }

        let describe = ctx
            .client
            .describe_data_source(translator::describe_request(&model)?)
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
            ctx.stabilization.data_source_delete_delay(),
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
        let model = request.desired_resource_state.clone().unwrap_or_default();
        let index_id = crate::error::required(model.index_id.as_ref(), "IndexId")?;
        let response = ctx
            .client
            .list_data_sources(translator::list_request(
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
