// FAQ and featured results set handlers against the in-memory client

use kendra_cfn_api::types::FaqStatus;
use kendra_cfn_api::MockKendra;
use kendra_cfn_config::StabilizationConfig;
use kendra_cfn_core::{
    Action, CallbackContext, HandlerErrorCode, ResourceHandlerRequest, Stage, Tag,
};
use kendra_cfn_handlers::faq::model::S3Path;
use kendra_cfn_handlers::featured_results_set::model::FeaturedDocument;
use kendra_cfn_handlers::{
    faq, featured_results_set, invoke, FaqHandler, FeaturedResultsSetHandler, HandlerContext,
    ResourceHandler,
};

fn request<M>(model: M) -> ResourceHandlerRequest<M> {
    ResourceHandlerRequest::new("123456789012", "us-east-1").with_desired(model)
}

fn faq_model() -> faq::ResourceModel {
    faq::ResourceModel {
        index_id: Some("idx".to_string()),
        name: Some("hr-faq".to_string()),
        file_format: Some("CSV".to_string()),
        role_arn: Some("arn:aws:iam::123456789012:role/kendra-faq".to_string()),
        s3_path: Some(S3Path {
            bucket: Some("corp-faq".to_string()),
            key: Some("hr.csv".to_string()),
        }),
        ..Default::default()
    }
}

fn set_model() -> featured_results_set::ResourceModel {
    featured_results_set::ResourceModel {
        index_id: Some("idx".to_string()),
        name: Some("benefits".to_string()),
        query_texts: Some(vec!["benefits".to_string(), "401k".to_string()]),
        featured_documents: Some(vec![FeaturedDocument {
            id: Some("doc-1".to_string()),
        }]),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_faq_create_polls_until_active() {
    let client = MockKendra::new();
    client.script_faq_statuses([FaqStatus::Creating, FaqStatus::Active]);
    let config = StabilizationConfig::default();
    let ctx = HandlerContext::new(&client, &config);

    let first = FaqHandler
        .create(&ctx, &request(faq_model()), &CallbackContext::default())
        .await
        .expect("first invocation");
    assert!(first.is_in_progress());
    assert_eq!(first.callback_delay_seconds, 60);
    let context = first.callback_context.clone().expect("context");
    assert!(context.resuming(Stage::AwaitingCreate));

    let second = FaqHandler
        .create(&ctx, &request(first.resource_model.unwrap()), &context)
        .await
        .expect("second invocation");
    assert!(second.is_success());
    let model = second.resource_model.expect("model");
    assert_eq!(
        model.arn.as_deref(),
        Some("arn:aws:kendra:us-east-1:123456789012:index/idx/faq/faq-1")
    );
    assert_eq!(model.file_format.as_deref(), Some("CSV"));
    assert_eq!(client.call_count("CreateFaq"), 1);
}

#[tokio::test]
async fn test_faq_update_of_create_only_property_is_not_updatable() {
    let client = MockKendra::new();
    let config = StabilizationConfig::default();
    let ctx = HandlerContext::new(&client, &config);

    let created = FaqHandler
        .create(&ctx, &request(faq_model()), &CallbackContext::default())
        .await
        .expect("create")
        .resource_model
        .unwrap();

    let desired = faq::ResourceModel {
        name: Some("renamed".to_string()),
        ..created.clone()
    };
    let update = ResourceHandlerRequest::new("123456789012", "us-east-1")
        .with_desired(desired)
        .with_previous(created);
    let event = invoke(
        &FaqHandler,
        Action::Update,
        &ctx,
        &update,
        &CallbackContext::default(),
    )
    .await;

    assert!(event.is_failed());
    assert_eq!(event.error_code, Some(HandlerErrorCode::NotUpdatable));
    assert!(event.message.unwrap_or_default().contains("Name"));
}

#[tokio::test]
async fn test_faq_update_of_tags_only() {
    let client = MockKendra::new();
    let config = StabilizationConfig::default();
    let ctx = HandlerContext::new(&client, &config);

    let created = FaqHandler
        .create(&ctx, &request(faq_model()), &CallbackContext::default())
        .await
        .expect("create")
        .resource_model
        .unwrap();
    let arn = created.arn.clone().unwrap();

    let desired = faq::ResourceModel {
        tags: Some(vec![Tag::new("owner", "hr")]),
        ..created.clone()
    };
    let update = ResourceHandlerRequest::new("123456789012", "us-east-1")
        .with_desired(desired)
        .with_previous(created);
    let event = FaqHandler
        .update(&ctx, &update, &CallbackContext::default())
        .await
        .expect("tag update should succeed");

    assert!(event.is_success());
    assert_eq!(client.tags(&arn), vec![Tag::new("owner", "hr")]);
    assert_eq!(client.call_count("UntagResource"), 0);
}

#[tokio::test]
async fn test_faq_delete_and_list() {
    let client = MockKendra::new();
    let config = StabilizationConfig::default();
    let ctx = HandlerContext::new(&client, &config);

    let created = FaqHandler
        .create(&ctx, &request(faq_model()), &CallbackContext::default())
        .await
        .expect("create")
        .resource_model
        .unwrap();

    let listed = FaqHandler
        .list(
            &ctx,
            &request(faq::ResourceModel {
                index_id: Some("idx".to_string()),
                ..Default::default()
            }),
        )
        .await
        .expect("list");
    assert_eq!(listed.resource_models.map(|m| m.len()), Some(1));

    let deleted = FaqHandler
        .delete(&ctx, &request(created), &CallbackContext::default())
        .await
        .expect("delete");
    assert!(deleted.is_success());
    assert_eq!(client.call_count("DeleteFaq"), 1);
}

#[tokio::test]
async fn test_featured_results_set_create_read_delete() {
    let client = MockKendra::new();
    let config = StabilizationConfig::default();
    let ctx = HandlerContext::new(&client, &config);

    let created = FeaturedResultsSetHandler
        .create(
            &ctx,
            &request(featured_results_set::ResourceModel {
                tags: Some(vec![Tag::new("team", "hr")]),
                ..set_model()
            }),
            &CallbackContext::default(),
        )
        .await
        .expect("create should succeed");

    assert!(created.is_success());
    assert!(created.callback_context.is_none());
    let model = created.resource_model.expect("model");
    assert_eq!(model.id.as_deref(), Some("frs-1"));
    assert_eq!(model.index_id.as_deref(), Some("idx"));
    assert_eq!(model.status.as_deref(), Some("ACTIVE"));
    assert_eq!(
        model.arn.as_deref(),
        Some("arn:aws:kendra:us-east-1:123456789012:index/idx/featured-results-set/frs-1")
    );
    assert_eq!(
        model.featured_documents,
        Some(vec![FeaturedDocument {
            id: Some("doc-1".to_string()),
        }])
    );
    assert_eq!(model.tags, Some(vec![Tag::new("team", "hr")]));

    let deleted = FeaturedResultsSetHandler
        .delete(&ctx, &request(model), &CallbackContext::default())
        .await
        .expect("delete should succeed");
    assert!(deleted.is_success());
    assert_eq!(client.call_count("BatchDeleteFeaturedResultsSet"), 1);
}

#[tokio::test]
async fn test_featured_results_set_update_clears_description() {
    let client = MockKendra::new();
    let config = StabilizationConfig::default();
    let ctx = HandlerContext::new(&client, &config);

    let created = FeaturedResultsSetHandler
        .create(
            &ctx,
            &request(featured_results_set::ResourceModel {
                description: Some("open enrollment".to_string()),
                ..set_model()
            }),
            &CallbackContext::default(),
        )
        .await
        .expect("create")
        .resource_model
        .unwrap();

    let desired = featured_results_set::ResourceModel {
        description: None,
        query_texts: Some(vec!["benefits".to_string()]),
        ..created.clone()
    };
    let update = ResourceHandlerRequest::new("123456789012", "us-east-1")
        .with_desired(desired)
        .with_previous(created);
    let event = FeaturedResultsSetHandler
        .update(&ctx, &update, &CallbackContext::default())
        .await
        .expect("update should succeed");

    assert_eq!(client.requests("UpdateFeaturedResultsSet")[0]["Description"], "");
    let model = event.resource_model.expect("model");
    assert_eq!(model.query_texts, Some(vec!["benefits".to_string()]));
}

#[tokio::test]
async fn test_featured_results_set_index_change_is_not_updatable() {
    let client = MockKendra::new();
    let config = StabilizationConfig::default();
    let ctx = HandlerContext::new(&client, &config);

    let previous = featured_results_set::ResourceModel {
        id: Some("frs-7".to_string()),
        ..set_model()
    };
    let desired = featured_results_set::ResourceModel {
        index_id: Some("other".to_string()),
        ..previous.clone()
    };
    let update = ResourceHandlerRequest::new("123456789012", "us-east-1")
        .with_desired(desired)
        .with_previous(previous);
    let err = FeaturedResultsSetHandler
        .update(&ctx, &update, &CallbackContext::default())
        .await
        .expect_err("index id is create-only");
    assert_eq!(err.code(), HandlerErrorCode::NotUpdatable);
}

#[tokio::test]
async fn test_featured_results_set_missing_is_not_found() {
    let client = MockKendra::new();
    let config = StabilizationConfig::default();
    let ctx = HandlerContext::new(&client, &config);

    let model = featured_results_set::ResourceModel {
        id: Some("frs-404".to_string()),
        index_id: Some("idx".to_string()),
        ..Default::default()
    };
    let event = invoke(
        &FeaturedResultsSetHandler,
        Action::Delete,
        &ctx,
        &request(model),
        &CallbackContext::default(),
    )
    .await;
    assert_eq!(event.error_code, Some(HandlerErrorCode::NotFound));
    assert_eq!(client.call_count("BatchDeleteFeaturedResultsSet"), 0);
}
