// Host payloads routed through the dispatcher against the in-memory client

use kendra_cfn::{dispatch, HostRequest};
use kendra_cfn_api::types::DataSourceStatus;
use kendra_cfn_api::MockKendra;
use kendra_cfn_config::StabilizationConfig;
use kendra_cfn_core::{HandlerErrorCode, OperationStatus, Stage};
use serde_json::{json, Value};

fn host_request(value: Value) -> HostRequest {
    serde_json::from_value(value).expect("valid host payload")
}

fn data_source_create() -> Value {
    json!({
        "awsAccountId": "123456789012",
        "bearerToken": "0f0e5a3c",
        "region": "us-west-2",
        "action": "CREATE",
        "resourceType": "AWS::Kendra::DataSource",
        "requestData": {
            "logicalResourceId": "DocsSource",
            "resourceProperties": {
                "Name": "n",
                "IndexId": "idx",
                "Type": "S3",
                "DataSourceConfiguration": {
                    "S3Configuration": { "BucketName": "b" }
                }
            },
            "stackTags": { "stage": "prod" }
        }
    })
}

#[tokio::test]
async fn test_create_data_source_end_to_end() {
    let client = MockKendra::new();
    client.script_data_source_statuses([DataSourceStatus::Creating, DataSourceStatus::Active]);
    let config = StabilizationConfig::default();

    let first = dispatch(&host_request(data_source_create()), &client, &config).await;
    assert_eq!(first.status, OperationStatus::InProgress);
    assert_eq!(first.callback_delay_seconds, 60);
    let context = first.callback_context.clone().expect("context");
    assert!(context.resuming(Stage::AwaitingCreate));
    let in_flight = first.resource_model.clone().expect("model");
    assert_eq!(in_flight["Id"], "ds-1");

    // The host re-invokes with the returned model and context
    let mut resume = data_source_create();
    resume["requestData"]["resourceProperties"] = in_flight;
    resume["callbackContext"] = serde_json::to_value(&context).unwrap();
    let second = dispatch(&host_request(resume), &client, &config).await;

    assert_eq!(second.status, OperationStatus::Success);
    let model = second.resource_model.expect("model");
    assert_eq!(
        model["Arn"],
        "arn:aws:kendra:us-west-2:123456789012:index/idx/data-source/ds-1"
    );
    assert_eq!(model["DataSourceConfiguration"]["S3Configuration"]["BucketName"], "b");
    assert_eq!(model["Tags"], json!([{ "Key": "stage", "Value": "prod" }]));

    let create = &client.requests("CreateDataSource")[0];
    assert_eq!(create["ClientToken"], "0f0e5a3c");
    assert_eq!(client.call_count("CreateDataSource"), 1);
}

#[tokio::test]
async fn test_unknown_resource_type_fails() {
    let client = MockKendra::new();
    let config = StabilizationConfig::default();

    let mut payload = data_source_create();
    payload["resourceType"] = json!("AWS::Kendra::Experience");
    let event = dispatch(&host_request(payload), &client, &config).await;

    assert_eq!(event.status, OperationStatus::Failed);
    assert_eq!(event.error_code, Some(HandlerErrorCode::InvalidRequest));
    assert!(client.calls().is_empty());
}

#[tokio::test]
async fn test_read_of_missing_index_is_not_found() {
    let client = MockKendra::new();
    let config = StabilizationConfig::default();

    let payload = json!({
        "awsAccountId": "123456789012",
        "region": "us-east-1",
        "action": "READ",
        "resourceType": "AWS::Kendra::Index",
        "requestData": {
            "resourceProperties": { "Id": "missing" }
        }
    });
    let event = dispatch(&host_request(payload), &client, &config).await;

    assert_eq!(event.status, OperationStatus::Failed);
    assert_eq!(event.error_code, Some(HandlerErrorCode::NotFound));
    let wire = serde_json::to_value(&event).unwrap();
    assert_eq!(wire["errorCode"], "NotFound");
    assert!(wire.get("resourceModel").is_none());
}

#[tokio::test]
async fn test_list_featured_results_sets_passes_token() {
    let client = MockKendra::new();
    client.set_list_next_token(Some("next-page"));
    let config = StabilizationConfig::default();

    let payload = json!({
        "awsAccountId": "123456789012",
        "region": "us-east-1",
        "action": "LIST",
        "resourceType": "AWS::Kendra::FeaturedResultsSet",
        "nextToken": "this-page",
        "requestData": {
            "resourceProperties": { "IndexId": "idx" }
        }
    });
    let event = dispatch(&host_request(payload), &client, &config).await;

    assert_eq!(event.status, OperationStatus::Success);
    assert_eq!(event.next_token.as_deref(), Some("next-page"));
    assert_eq!(event.resource_models, Some(vec![]));
    assert_eq!(
        client.requests("ListFeaturedResultsSets")[0]["NextToken"],
        "this-page"
    );
}
