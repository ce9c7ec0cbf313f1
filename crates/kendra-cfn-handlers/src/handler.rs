//! Handler trait and the plumbing every resource type shares.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use kendra_cfn_api::{ApiResult, KendraApi};
use kendra_cfn_config::StabilizationConfig;
use kendra_cfn_core::{
    Action, ArnBuilder, CallbackContext, HandlerError, HandlerResult, ProgressEvent,
    ResourceHandlerRequest,
};
use tracing::{debug, warn};

/// Collaborators of one handler invocation
#[derive(Clone, Copy)]
pub struct HandlerContext<'a> {
    pub client: &'a dyn KendraApi,
    pub stabilization: &'a StabilizationConfig,
    pub now: DateTime<Utc>,
}

impl<'a> HandlerContext<'a> {
    pub fn new(client: &'a dyn KendraApi, stabilization: &'a StabilizationConfig) -> Self {
        Self {
            client,
            stabilization,
            now: Utc::now(),
        }
    }

    /// Pin the clock used for stabilization deadlines
    pub fn at(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }
}

/// CRUDL handlers for one CloudFormation resource type.
///
/// Each method handles exactly one invocation. Long-running operations
/// return `IN_PROGRESS` with a [`CallbackContext`] and pick up where they
/// left off when the host hands that context back.
#[async_trait]
pub trait ResourceHandler: Send + Sync {
    type Model: Clone + Send + Sync;

    const TYPE_NAME: &'static str;

    async fn create(
        &self,
        ctx: &HandlerContext<'_>,
        request: &ResourceHandlerRequest<Self::Model>,
        callback: &CallbackContext,
    ) -> HandlerResult<ProgressEvent<Self::Model>>;

    async fn read(
        &self,
        ctx: &HandlerContext<'_>,
        request: &ResourceHandlerRequest<Self::Model>,
    ) -> HandlerResult<ProgressEvent<Self::Model>>;

    async fn update(
        &self,
        ctx: &HandlerContext<'_>,
        request: &ResourceHandlerRequest<Self::Model>,
        callback: &CallbackContext,
    ) -> HandlerResult<ProgressEvent<Self::Model>>;

    async fn delete(
        &self,
        ctx: &HandlerContext<'_>,
        request: &ResourceHandlerRequest<Self::Model>,
        callback: &CallbackContext,
    ) -> HandlerResult<ProgressEvent<Self::Model>>;

    async fn list(
        &self,
        ctx: &HandlerContext<'_>,
        request: &ResourceHandlerRequest<Self::Model>,
    ) -> HandlerResult<ProgressEvent<Self::Model>>;
}

/// Run one action and fold any error into a `FAILED` event
pub async fn invoke<H: ResourceHandler>(
    handler: &H,
    action: Action,
    ctx: &HandlerContext<'_>,
    request: &ResourceHandlerRequest<H::Model>,
    callback: &CallbackContext,
) -> ProgressEvent<H::Model> {
    let result = match action {
        Action::Create => handler.create(ctx, request, callback).await,
        Action::Read => handler.read(ctx, request).await,
        Action::Update => handler.update(ctx, request, callback).await,
        Action::Delete => handler.delete(ctx, request, callback).await,
        Action::List => handler.list(ctx, request).await,
    };

    match result {
        Ok(event) => {
            debug!(
                resource_type = H::TYPE_NAME,
                action = %action,
                status = ?event.status,
                "handler finished"
            );
            event
        }
        Err(err) => {
            warn!(
                resource_type = H::TYPE_NAME,
                action = %action,
                error_code = %err.code(),
                "handler failed: {}",
                err
            );
            ProgressEvent::failed(&err)
        }
    }
}

/// Map remote failures onto the handler taxonomy
pub(crate) trait RemoteResultExt<T> {
    fn or_handler_error(self, type_name: &str, identifier: &str) -> HandlerResult<T>;
}

impl<T> RemoteResultExt<T> for ApiResult<T> {
    fn or_handler_error(self, type_name: &str, identifier: &str) -> HandlerResult<T> {
        self.map_err(|err| {
            debug!(
                resource_type = type_name,
                id = identifier,
                remote_code = err.code().unwrap_or("-"),
                "remote call failed: {}",
                err
            );
            err.into_handler_error(type_name, identifier)
        })
    }
}

/// Desired model of a request, which every action except list requires
pub(crate) fn desired<M: Clone>(request: &ResourceHandlerRequest<M>) -> HandlerResult<M> {
    request
        .desired_resource_state
        .clone()
        .ok_or_else(|| HandlerError::InvalidRequest("desired resource state is missing".into()))
}

pub(crate) fn arns<M>(request: &ResourceHandlerRequest<M>) -> ArnBuilder<'_> {
    ArnBuilder::new(
        &request.aws_partition,
        &request.region,
        &request.aws_account_id,
    )
}

/// Identifier the host knows the resource by; absent means there is nothing to find
pub(crate) fn primary_id<'m>(id: Option<&'m String>, type_name: &str) -> HandlerResult<&'m str> {
    match id {
        Some(id) if !id.is_empty() => Ok(id.as_str()),
        _ => Err(HandlerError::not_found(type_name, "")),
    }
}

/// Treat a successful pre-create describe as a conflict, `NotFound` as clear to go
pub(crate) fn ensure_absent<T>(
    describe: ApiResult<T>,
    type_name: &str,
    identifier: &str,
) -> HandlerResult<()> {
    match describe {
        Ok(_) => Err(HandlerError::already_exists(type_name, identifier)),
        Err(err) if err.is_not_found() => Ok(()),
        Err(err) => Err(err.into_handler_error(type_name, identifier)),
    }
}

/// Property that may not change on update
pub(crate) fn ensure_unchanged(
    property: &'static str,
    previous: Option<&String>,
    desired: Option<&String>,
    type_name: &str,
    identifier: &str,
) -> HandlerResult<()> {
    match (previous, desired) {
        (Some(previous), Some(desired)) if previous != desired => {
            Err(HandlerError::not_updatable(type_name, identifier, property))
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kendra_cfn_api::ApiError;
    use kendra_cfn_core::HandlerErrorCode;

    const TYPE: &str = "AWS::Kendra::Faq";

    #[test]
    fn test_ensure_absent() {
        let err = ensure_absent(Ok(()), TYPE, "f").unwrap_err();
        assert_eq!(err.code(), HandlerErrorCode::AlreadyExists);
        assert!(ensure_absent::<()>(Err(ApiError::not_found("gone")), TYPE, "f").is_ok());

        let err = ensure_absent::<()>(Err(ApiError::Transport("reset".into())), TYPE, "f");
        assert_eq!(err.unwrap_err().code(), HandlerErrorCode::NetworkFailure);
    }

    #[test]
    fn test_ensure_unchanged() {
        let a = "a".to_string();
        let b = "b".to_string();
        assert!(ensure_unchanged("IndexId", Some(&a), Some(&a), TYPE, "f").is_ok());
        assert!(ensure_unchanged("IndexId", None, Some(&b), TYPE, "f").is_ok());
        assert!(ensure_unchanged("IndexId", Some(&a), None, TYPE, "f").is_ok());

        let err = ensure_unchanged("IndexId", Some(&a), Some(&b), TYPE, "f").unwrap_err();
        assert_eq!(err.code(), HandlerErrorCode::NotUpdatable);
        assert!(err.to_string().contains("IndexId"));
    }

    #[test]
    fn test_primary_id() {
        let id = "faq-1".to_string();
        assert_eq!(primary_id(Some(&id), TYPE).unwrap(), "faq-1");
        assert!(primary_id(None, TYPE).unwrap_err().is_not_found());
        assert!(primary_id(Some(&String::new()), TYPE).unwrap_err().is_not_found());
    }

    #[test]
    fn test_remote_errors_keep_their_identifier() {
        let result: ApiResult<()> = Err(ApiError::not_found("no such faq"));
        let err = result.or_handler_error(TYPE, "faq-9").unwrap_err();
        assert_eq!(err, HandlerError::not_found(TYPE, "faq-9"));
    }
}
