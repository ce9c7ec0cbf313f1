// Index handlers against the in-memory client, including the follow-up
// update for properties CreateIndex does not accept

use kendra_cfn_api::types::IndexStatus;
use kendra_cfn_api::MockKendra;
use kendra_cfn_config::StabilizationConfig;
use kendra_cfn_core::{
    Action, CallbackContext, HandlerErrorCode, ResourceHandlerRequest, Stage, Tag,
};
use kendra_cfn_handlers::index::model::CapacityUnitsConfiguration;
use kendra_cfn_handlers::index::ResourceModel;
use kendra_cfn_handlers::{invoke, HandlerContext, IndexHandler, ResourceHandler};

fn request(model: ResourceModel) -> ResourceHandlerRequest<ResourceModel> {
    ResourceHandlerRequest::new("123456789012", "us-east-1").with_desired(model)
}

fn index_model() -> ResourceModel {
    ResourceModel {
        name: Some("corp-search".to_string()),
        edition: Some("ENTERPRISE_EDITION".to_string()),
        role_arn: Some("arn:aws:iam::123456789012:role/kendra-index".to_string()),
        tags: Some(vec![Tag::new("team", "search")]),
        ..Default::default()
    }
}

fn with_capacity(model: ResourceModel) -> ResourceModel {
    ResourceModel {
        capacity_units: Some(CapacityUnitsConfiguration {
            storage_capacity_units: Some(2),
            query_capacity_units: Some(1),
        }),
        ..model
    }
}

#[tokio::test]
async fn test_create_without_follow_up() {
    let client = MockKendra::new();
    let config = StabilizationConfig::default();
    let ctx = HandlerContext::new(&client, &config);

    let event = IndexHandler
        .create(&ctx, &request(index_model()), &CallbackContext::default())
        .await
        .expect("create should succeed");

    assert!(event.is_success());
    let model = event.resource_model.expect("model");
    assert_eq!(model.id.as_deref(), Some("index-1"));
    assert_eq!(
        model.arn.as_deref(),
        Some("arn:aws:kendra:us-east-1:123456789012:index/index-1")
    );
    assert_eq!(model.tags, Some(vec![Tag::new("team", "search")]));
    assert_eq!(client.call_count("UpdateIndex"), 0);
}

#[tokio::test]
async fn test_create_applies_capacity_in_follow_up_update() {
    let client = MockKendra::new();
    let config = StabilizationConfig::default();
    let ctx = HandlerContext::new(&client, &config);

    let event = IndexHandler
        .create(
            &ctx,
            &request(with_capacity(index_model())),
            &CallbackContext::default(),
        )
        .await
        .expect("create should succeed");

    assert!(event.is_success());
    assert_eq!(client.call_count("CreateIndex"), 1);
    assert_eq!(client.call_count("UpdateIndex"), 1);

    let update = &client.requests("UpdateIndex")[0];
    assert_eq!(update["Id"], "index-1");
    assert_eq!(update["CapacityUnits"]["StorageCapacityUnits"], 2);
    assert!(update.get("Name").is_none());

    let model = event.resource_model.expect("model");
    assert_eq!(
        model.capacity_units.and_then(|c| c.query_capacity_units),
        Some(1)
    );
}

#[tokio::test]
async fn test_follow_up_update_resumes_without_reissuing_calls() {
    let client = MockKendra::new();
    client.script_index_statuses([
        IndexStatus::Active,
        IndexStatus::Updating,
        IndexStatus::Active,
    ]);
    let config = StabilizationConfig::default();
    let ctx = HandlerContext::new(&client, &config);

    let first = IndexHandler
        .create(
            &ctx,
            &request(with_capacity(index_model())),
            &CallbackContext::default(),
        )
        .await
        .expect("first invocation");
    assert!(first.is_in_progress());
    assert_eq!(first.callback_delay_seconds, 120);
    let context = first.callback_context.clone().expect("context");
    assert!(context.resuming(Stage::AwaitingFollowUpUpdate));

    let second = IndexHandler
        .create(&ctx, &request(first.resource_model.unwrap()), &context)
        .await
        .expect("second invocation");
    assert!(second.is_success());
    assert_eq!(client.call_count("CreateIndex"), 1);
    assert_eq!(client.call_count("UpdateIndex"), 1);
}

#[tokio::test]
async fn test_create_waits_for_creating_index() {
    let client = MockKendra::new();
    client.script_index_statuses([IndexStatus::Creating, IndexStatus::Active]);
    let config = StabilizationConfig::default();
    let ctx = HandlerContext::new(&client, &config);

    let first = IndexHandler
        .create(&ctx, &request(index_model()), &CallbackContext::default())
        .await
        .expect("first invocation");
    let context = first.callback_context.clone().expect("context");
    assert!(context.resuming(Stage::AwaitingCreate));

    let second = IndexHandler
        .create(&ctx, &request(first.resource_model.unwrap()), &context)
        .await
        .expect("second invocation");
    assert!(second.is_success());
    assert_eq!(client.call_count("CreateIndex"), 1);
}

#[tokio::test]
async fn test_update_rejects_id_change() {
    let client = MockKendra::new();
    let config = StabilizationConfig::default();
    let ctx = HandlerContext::new(&client, &config);

    let previous = ResourceModel {
        id: Some("index-1".to_string()),
        ..index_model()
    };
    let desired = ResourceModel {
        id: Some("index-2".to_string()),
        ..index_model()
    };
    let update = ResourceHandlerRequest::new("123456789012", "us-east-1")
        .with_desired(desired)
        .with_previous(previous);

    let event = invoke(
        &IndexHandler,
        Action::Update,
        &ctx,
        &update,
        &CallbackContext::default(),
    )
    .await;
    assert_eq!(event.error_code, Some(HandlerErrorCode::NotUpdatable));
    assert_eq!(client.call_count("UpdateIndex"), 0);
}

#[tokio::test]
async fn test_update_sends_cleared_description_as_empty() {
    let client = MockKendra::new();
    let config = StabilizationConfig::default();
    let ctx = HandlerContext::new(&client, &config);

    let created = IndexHandler
        .create(
            &ctx,
            &request(ResourceModel {
                description: Some("first cut".to_string()),
                ..index_model()
            }),
            &CallbackContext::default(),
        )
        .await
        .expect("create")
        .resource_model
        .unwrap();

    let desired = ResourceModel {
        description: None,
        ..created.clone()
    };
    let update = ResourceHandlerRequest::new("123456789012", "us-east-1")
        .with_desired(desired)
        .with_previous(created);
    let event = IndexHandler
        .update(&ctx, &update, &CallbackContext::default())
        .await
        .expect("update should succeed");
    assert!(event.is_success());

    let sent = &client.requests("UpdateIndex")[0];
    assert_eq!(sent["Description"], "");
}

#[tokio::test]
async fn test_delete_finishes_once_index_is_gone() {
    let client = MockKendra::new();
    let config = StabilizationConfig::default();
    let ctx = HandlerContext::new(&client, &config);

    let created = IndexHandler
        .create(&ctx, &request(index_model()), &CallbackContext::default())
        .await
        .expect("create")
        .resource_model
        .unwrap();

    let event = IndexHandler
        .delete(&ctx, &request(created), &CallbackContext::default())
        .await
        .expect("delete should succeed");
    assert!(event.is_success());
    assert!(client.index("index-1").is_none());
}

#[tokio::test]
async fn test_list_returns_every_index() {
    let client = MockKendra::new();
    let config = StabilizationConfig::default();
    let ctx = HandlerContext::new(&client, &config);

    for name in ["a", "b"] {
        IndexHandler
            .create(
                &ctx,
                &request(ResourceModel {
                    name: Some(name.to_string()),
                    ..index_model()
                }),
                &CallbackContext::default(),
            )
            .await
            .expect("create");
    }

    let event = IndexHandler
        .list(&ctx, &ResourceHandlerRequest::new("123456789012", "us-east-1"))
        .await
        .expect("list should succeed");
    let ids: Vec<String> = event
        .resource_models
        .unwrap_or_default()
        .into_iter()
        .filter_map(|m| m.id)
        .collect();
    assert_eq!(ids, vec!["index-1".to_string(), "index-2".to_string()]);
    assert!(event.next_token.is_none());
}
