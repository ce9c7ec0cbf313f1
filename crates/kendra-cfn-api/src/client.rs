//! The client surface the handlers are written against.

use crate::error::ApiError;
use crate::protocol::*;
use async_trait::async_trait;

pub type ApiResult<T> = Result<T, ApiError>;

/// Kendra control-plane operations used by the resource handlers.
///
/// Implementations own transport, signing and retries; handlers only build
/// requests and interpret responses.
#[async_trait]
pub trait KendraApi: Send + Sync {
    async fn create_index(&self, request: CreateIndexRequest) -> ApiResult<CreateIndexResponse>;
    async fn describe_index(&self, request: DescribeIndexRequest)
        -> ApiResult<DescribeIndexResponse>;
    async fn update_index(&self, request: UpdateIndexRequest) -> ApiResult<UpdateIndexResponse>;
    async fn delete_index(&self, request: DeleteIndexRequest) -> ApiResult<DeleteIndexResponse>;
    async fn list_indices(&self, request: ListIndicesRequest) -> ApiResult<ListIndicesResponse>;

    async fn create_data_source(
        &self,
        request: CreateDataSourceRequest,
    ) -> ApiResult<CreateDataSourceResponse>;
    async fn describe_data_source(
        &self,
        request: DescribeDataSourceRequest,
    ) -> ApiResult<DescribeDataSourceResponse>;
    async fn update_data_source(
        &self,
        request: UpdateDataSourceRequest,
    ) -> ApiResult<UpdateDataSourceResponse>;
    async fn delete_data_source(
        &self,
        request: DeleteDataSourceRequest,
    ) -> ApiResult<DeleteDataSourceResponse>;
    async fn list_data_sources(
        &self,
        request: ListDataSourcesRequest,
    ) -> ApiResult<ListDataSourcesResponse>;

    async fn create_faq(&self, request: CreateFaqRequest) -> ApiResult<CreateFaqResponse>;
    async fn describe_faq(&self, request: DescribeFaqRequest) -> ApiResult<DescribeFaqResponse>;
    async fn delete_faq(&self, request: DeleteFaqRequest) -> ApiResult<DeleteFaqResponse>;
    async fn list_faqs(&self, request: ListFaqsRequest) -> ApiResult<ListFaqsResponse>;

    async fn create_featured_results_set(
        &self,
        request: CreateFeaturedResultsSetRequest,
    ) -> ApiResult<CreateFeaturedResultsSetResponse>;
    async fn describe_featured_results_set(
        &self,
        request: DescribeFeaturedResultsSetRequest,
    ) -> ApiResult<DescribeFeaturedResultsSetResponse>;
    async fn update_featured_results_set(
        &self,
        request: UpdateFeaturedResultsSetRequest,
    ) -> ApiResult<UpdateFeaturedResultsSetResponse>;
    async fn batch_delete_featured_results_set(
        &self,
        request: BatchDeleteFeaturedResultsSetRequest,
    ) -> ApiResult<BatchDeleteFeaturedResultsSetResponse>;
    async fn list_featured_results_sets(
        &self,
        request: ListFeaturedResultsSetsRequest,
    ) -> ApiResult<ListFeaturedResultsSetsResponse>;

    async fn list_tags_for_resource(
        &self,
        request: ListTagsForResourceRequest,
    ) -> ApiResult<ListTagsForResourceResponse>;
    async fn tag_resource(&self, request: TagResourceRequest) -> ApiResult<TagResourceResponse>;
    async fn untag_resource(&self, request: UntagResourceRequest)
        -> ApiResult<UntagResourceResponse>;
}
