// Routes one host request to the handler for its resource type

use kendra_cfn_api::KendraApi;
use kendra_cfn_config::StabilizationConfig;
use kendra_cfn_core::{HandlerError, ProgressEvent};
use kendra_cfn_handlers::{
    data_source, faq, featured_results_set, index, invoke, DataSourceHandler, FaqHandler,
    FeaturedResultsSetHandler, HandlerContext, IndexHandler, ResourceHandler,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::payload::HostRequest;

/// Progress event with the model already encoded for the host
pub type HostEvent = ProgressEvent<Value>;

pub async fn dispatch(
    request: &HostRequest,
    client: &dyn KendraApi,
    stabilization: &StabilizationConfig,
) -> HostEvent {
    let ctx = HandlerContext::new(client, stabilization);
    info!(
        resource_type = %request.resource_type,
        action = %request.action,
        resuming = request.callback_context.is_some(),
        "dispatching"
    );

    match request.resource_type.as_str() {
        index::TYPE_NAME => run(&IndexHandler, request, &ctx).await,
        data_source::TYPE_NAME => run(&DataSourceHandler, request, &ctx).await,
        faq::TYPE_NAME => run(&FaqHandler, request, &ctx).await,
        featured_results_set::TYPE_NAME => run(&FeaturedResultsSetHandler, request, &ctx).await,
        other => {
            warn!(resource_type = other, "no handler registered");
            ProgressEvent::failed(&HandlerError::InvalidRequest(format!(
                "unsupported resource type '{other}'"
            )))
        }
    }
}

async fn run<H>(handler: &H, request: &HostRequest, ctx: &HandlerContext<'_>) -> HostEvent
where
    H: ResourceHandler,
    H::Model: Serialize + DeserializeOwned,
{
    let event = match request.to_handler_request::<H::Model>() {
        Ok(handler_request) => {
            invoke(
                handler,
                request.action,
                ctx,
                &handler_request,
                &request.callback(),
            )
            .await
        }
        Err(err) => ProgressEvent::failed(&err),
    };
    encode(event)
}

fn encode<M: Serialize>(event: ProgressEvent<M>) -> HostEvent {
    event
        .try_map_model(serde_json::to_value)
        .unwrap_or_else(|err| {
            warn!(error = %err, "resource model could not be encoded");
            ProgressEvent::failed(&HandlerError::InternalFailure(format!(
                "failed to encode resource model: {err}"
            )))
        })
}
