// kendra-cfn - CloudFormation resource provider for Amazon Kendra
//
// AWS Lambda adapter: the host invokes the function once per action (and
// again after every IN_PROGRESS event); each invocation builds a signed
// Kendra client and hands the request to the resource type's handler.
//
// Philosophy: Use lambda_runtime's provided tokio

use anyhow::Context;
use kendra_cfn_api::{ClientOptions, KendraHttpClient};
use kendra_cfn_config::ProviderConfig;
use kendra_cfn_core::ProgressEvent;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use std::sync::Arc;
use tracing::{info, warn, Instrument};

mod dispatch;
mod init;
mod payload;

pub use dispatch::{dispatch, HostEvent};
pub use init::init_tracing;
pub use payload::{HostRequest, RequestData};

/// Lambda handler for one host request
async fn handle_request(
    event: LambdaEvent<HostRequest>,
    config: Arc<ProviderConfig>,
) -> Result<HostEvent, Error> {
    let (request, context) = event.into_parts();
    let span = tracing::info_span!("invocation", request_id = %context.request_id);
    Ok(respond(request, &config).instrument(span).await)
}

async fn respond(request: HostRequest, config: &ProviderConfig) -> HostEvent {
    let options = client_options(config, &request);
    let client = match request.credentials() {
        Some(credentials) => KendraHttpClient::with_credentials(options, credentials),
        None => KendraHttpClient::from_env(options).await,
    };
    let client = match client {
        Ok(client) => client,
        Err(err) => {
            warn!(error = %err, "unable to build Kendra client");
            let err = err.into_handler_error(&request.resource_type, "");
            return ProgressEvent::failed(&err);
        }
    };

    dispatch(&request, &client, &config.stabilization).await
}

/// Region and endpoint for the client; the request's region wins over config
fn client_options(config: &ProviderConfig, request: &HostRequest) -> ClientOptions {
    let region = Some(request.region.clone())
        .filter(|r| !r.is_empty())
        .or_else(|| config.client.region.clone());
    ClientOptions {
        region,
        endpoint_url: config.client.endpoint_url.clone(),
        request_timeout: config.client.request_timeout(),
    }
}

/// Lambda runtime entry point
pub async fn run() -> Result<(), Error> {
    let config = ProviderConfig::load().context("Failed to load provider configuration")?;
    init_tracing(&config.logging);
    info!(
        log_format = %config.logging.format,
        index_delay_secs = config.stabilization.index_delay_secs,
        data_source_delay_secs = config.stabilization.data_source_delay_secs,
        "Kendra resource provider starting"
    );

    let config = Arc::new(config);
    lambda_runtime::run(service_fn(move |event: LambdaEvent<HostRequest>| {
        let config = config.clone();
        async move { handle_request(event, config).await }
    }))
    .await
}
