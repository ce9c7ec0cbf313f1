//! Resource tags: what to send on create, how to read them back, and how to
//! reconcile them on update.

use kendra_cfn_api::protocol::{
    ListTagsForResourceRequest, TagResourceRequest, UntagResourceRequest,
};
use kendra_cfn_api::KendraApi;
use kendra_cfn_core::{HandlerResult, Tag, TagDiff, TagSet};
use std::collections::BTreeMap;
use tracing::info;

use crate::handler::RemoteResultExt;

/// Model tags plus the stack-level tags the model does not override
pub(crate) fn desired_tags(
    model_tags: Option<&[Tag]>,
    stack_tags: &BTreeMap<String, String>,
) -> TagSet {
    TagSet::from_tags(model_tags).merge_missing(stack_tags)
}

/// Tags currently on `arn`, `None` when there are none
pub(crate) async fn read_tags(
    client: &dyn KendraApi,
    arn: &str,
    type_name: &str,
    identifier: &str,
) -> HandlerResult<Option<Vec<Tag>>> {
    let response = client
        .list_tags_for_resource(ListTagsForResourceRequest {
            resource_arn: arn.to_string(),
        })
        .await
        .or_handler_error(type_name, identifier)?;
    Ok(response.tags.filter(|tags| !tags.is_empty()))
}

/// Bring the tags on `arn` in line with `desired`.
///
/// Issues at most one untag and one tag call; none when nothing differs.
pub(crate) async fn reconcile_tags(
    client: &dyn KendraApi,
    arn: &str,
    desired: &TagSet,
    type_name: &str,
    identifier: &str,
) -> HandlerResult<TagDiff> {
    let existing = read_tags(client, arn, type_name, identifier).await?;
    let diff = desired.diff(&TagSet::from_tags(existing.as_deref()));

    if !diff.to_remove.is_empty() {
        info!(
            resource_type = type_name,
            id = identifier,
            count = diff.to_remove.len(),
            "removing tags"
        );
        client
            .untag_resource(UntagResourceRequest {
                resource_arn: arn.to_string(),
                tag_keys: diff.to_remove.clone(),
            })
            .await
            .or_handler_error(type_name, identifier)?;
    }

    if !diff.to_add.is_empty() {
        info!(
            resource_type = type_name,
            id = identifier,
            count = diff.to_add.len(),
            "adding tags"
        );
        client
            .tag_resource(TagResourceRequest {
                resource_arn: arn.to_string(),
                tags: diff.to_add.clone(),
            })
            .await
            .or_handler_error(type_name, identifier)?;
    }

    Ok(diff)
}
