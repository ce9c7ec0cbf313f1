//! In-memory [`KendraApi`] for handler tests.
//!
//! Resources live in maps keyed by id. Describe calls can be scripted with
//! status sequences, any operation can be made to fail once, and every call
//! is recorded with its JSON request body.

use crate::client::{ApiResult, KendraApi};
use crate::error::ApiError;
use crate::protocol::*;
use crate::types::{
    BatchDeleteFeaturedResultsSetError, DataSourceStatus, ErrorCode, FaqStatus,
    FeaturedDocumentWithMetadata, FeaturedResultsSet, FeaturedResultsSetStatus,
    FeaturedResultsSetSummary, IndexStatus,
};
use async_trait::async_trait;
use kendra_cfn_core::Tag;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Default)]
struct State {
    calls: Vec<(&'static str, serde_json::Value)>,
    failures: HashMap<&'static str, VecDeque<ApiError>>,
    next_id: u32,

    indices: BTreeMap<String, DescribeIndexResponse>,
    data_sources: BTreeMap<(String, String), DescribeDataSourceResponse>,
    faqs: BTreeMap<(String, String), DescribeFaqResponse>,
    featured_results_sets: BTreeMap<(String, String), DescribeFeaturedResultsSetResponse>,
    tags: BTreeMap<String, Vec<Tag>>,
    /// Tags sent with a create, keyed by the new resource id until its ARN is first used
    created_tags: HashMap<String, Vec<Tag>>,

    index_statuses: VecDeque<IndexStatus>,
    data_source_statuses: VecDeque<DataSourceStatus>,
    faq_statuses: VecDeque<FaqStatus>,
    /// Describes that still see a deleted resource before it disappears
    delete_polls: u32,
    pending_deletes: HashMap<String, u32>,
    list_next_token: Option<String>,
}

impl State {
    fn allocate_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{prefix}-{}", self.next_id)
    }

    /// Countdown for a resource in its post-delete window; true once it is gone
    fn deleted(&mut self, key: &str) -> Option<bool> {
        let remaining = self.pending_deletes.get_mut(key)?;
        if *remaining == 0 {
            self.pending_deletes.remove(key);
            return Some(true);
        }
        *remaining -= 1;
        Some(false)
    }

    fn remember_tags(&mut self, id: &str, tags: Option<Vec<Tag>>) {
        if let Some(tags) = tags {
            self.created_tags.insert(id.to_string(), tags);
        }
    }

    /// Tags on `arn`; the last ARN segment is the id the create tags were kept under
    fn tags_mut(&mut self, arn: &str) -> &mut Vec<Tag> {
        if !self.tags.contains_key(arn) {
            let id = arn.rsplit('/').next().unwrap_or_default();
            let seeded = self.created_tags.remove(id).unwrap_or_default();
            self.tags.insert(arn.to_string(), seeded);
        }
        self.tags.entry(arn.to_string()).or_default()
    }
}

#[derive(Debug, Default)]
pub struct MockKendra {
    state: Mutex<State>,
}

impl MockKendra {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn record<R: Serialize>(&self, operation: &'static str, request: &R) -> ApiResult<()> {
        let mut state = self.state();
        let body = serde_json::to_value(request).unwrap_or(serde_json::Value::Null);
        state.calls.push((operation, body));
        match state.failures.get_mut(operation).and_then(VecDeque::pop_front) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Make the next call of `operation` fail with `err`
    pub fn fail_next(&self, operation: &'static str, err: ApiError) {
        self.state()
            .failures
            .entry(operation)
            .or_default()
            .push_back(err);
    }

    /// Statuses served, in order, by the next index describes
    pub fn script_index_statuses(&self, statuses: impl IntoIterator<Item = IndexStatus>) {
        self.state().index_statuses.extend(statuses);
    }

    pub fn script_data_source_statuses(
        &self,
        statuses: impl IntoIterator<Item = DataSourceStatus>,
    ) {
        self.state().data_source_statuses.extend(statuses);
    }

    pub fn script_faq_statuses(&self, statuses: impl IntoIterator<Item = FaqStatus>) {
        self.state().faq_statuses.extend(statuses);
    }

    /// Number of describes that still find a resource after its delete call
    pub fn set_delete_polls(&self, polls: u32) {
        self.state().delete_polls = polls;
    }

    /// Token returned by every list call
    pub fn set_list_next_token(&self, token: Option<&str>) {
        self.state().list_next_token = token.map(str::to_string);
    }

    pub fn set_tags(&self, arn: &str, tags: Vec<Tag>) {
        self.state().tags.insert(arn.to_string(), tags);
    }

    pub fn tags(&self, arn: &str) -> Vec<Tag> {
        self.state().tags_mut(arn).clone()
    }

    pub fn insert_index(&self, index: DescribeIndexResponse) {
        let id = index.id.clone().unwrap_or_default();
        self.state().indices.insert(id, index);
    }

    pub fn insert_data_source(&self, data_source: DescribeDataSourceResponse) {
        let key = (
            data_source.index_id.clone().unwrap_or_default(),
            data_source.id.clone().unwrap_or_default(),
        );
        self.state().data_sources.insert(key, data_source);
    }

    pub fn insert_faq(&self, faq: DescribeFaqResponse) {
        let key = (
            faq.index_id.clone().unwrap_or_default(),
            faq.id.clone().unwrap_or_default(),
        );
        self.state().faqs.insert(key, faq);
    }

    pub fn insert_featured_results_set(
        &self,
        index_id: &str,
        set: DescribeFeaturedResultsSetResponse,
    ) {
        let key = (
            index_id.to_string(),
            set.featured_results_set_id.clone().unwrap_or_default(),
        );
        self.state().featured_results_sets.insert(key, set);
    }

    pub fn index(&self, id: &str) -> Option<DescribeIndexResponse> {
        self.state().indices.get(id).cloned()
    }

    pub fn data_source(&self, index_id: &str, id: &str) -> Option<DescribeDataSourceResponse> {
        let key = (index_id.to_string(), id.to_string());
        self.state().data_sources.get(&key).cloned()
    }

    /// Operation names in call order
    pub fn calls(&self) -> Vec<&'static str> {
        self.state().calls.iter().map(|(op, _)| *op).collect()
    }

    pub fn call_count(&self, operation: &str) -> usize {
        self.state()
            .calls
            .iter()
            .filter(|(op, _)| *op == operation)
            .count()
    }

    /// JSON bodies sent to `operation`, in call order
    pub fn requests(&self, operation: &str) -> Vec<serde_json::Value> {
        self.state()
            .calls
            .iter()
            .filter(|(op, _)| *op == operation)
            .map(|(_, body)| body.clone())
            .collect()
    }

    pub fn clear_calls(&self) {
        self.state().calls.clear();
    }
}

fn not_found(kind: &str, id: &str) -> ApiError {
    ApiError::not_found(format!("{kind} {id} not found"))
}

fn index_scoped(index_id: &str, id: &str) -> (String, String) {
    (index_id.to_string(), id.to_string())
}

#[async_trait]
impl KendraApi for MockKendra {
    async fn create_index(&self, request: CreateIndexRequest) -> ApiResult<CreateIndexResponse> {
        self.record("CreateIndex", &request)?;
        let mut state = self.state();
        let id = state.allocate_id("index");
        state.remember_tags(&id, request.tags);
        let index = DescribeIndexResponse {
            id: Some(id.clone()),
            name: Some(request.name),
            edition: request.edition,
            role_arn: request.role_arn,
            server_side_encryption_configuration: request.server_side_encryption_configuration,
            description: request.description,
            status: Some(IndexStatus::Active),
            user_token_configurations: request.user_token_configurations,
            user_context_policy: request.user_context_policy,
            ..Default::default()
        };
        state.indices.insert(id.clone(), index);
        Ok(CreateIndexResponse { id: Some(id) })
    }

    async fn describe_index(
        &self,
        request: DescribeIndexRequest,
    ) -> ApiResult<DescribeIndexResponse> {
        self.record("DescribeIndex", &request)?;
        let mut state = self.state();
        if state.deleted(&request.id) == Some(true) {
            state.indices.remove(&request.id);
        }
        let scripted = state.index_statuses.pop_front();
        let index = state
            .indices
            .get_mut(&request.id)
            .ok_or_else(|| not_found("Index", &request.id))?;
        if scripted.is_some() {
            index.status = scripted;
        }
        Ok(index.clone())
    }

    async fn update_index(&self, request: UpdateIndexRequest) -> ApiResult<UpdateIndexResponse> {
        self.record("UpdateIndex", &request)?;
        let mut state = self.state();
        let index = state
            .indices
            .get_mut(&request.id)
            .ok_or_else(|| not_found("Index", &request.id))?;
        if let Some(name) = request.name {
            index.name = Some(name);
        }
        if let Some(role_arn) = request.role_arn {
            index.role_arn = Some(role_arn);
        }
        if let Some(description) = request.description {
            index.description = Some(description);
        }
        if let Some(updates) = request.document_metadata_configuration_updates {
            index.document_metadata_configurations = Some(updates);
        }
        if let Some(units) = request.capacity_units {
            index.capacity_units = Some(units);
        }
        if let Some(tokens) = request.user_token_configurations {
            index.user_token_configurations = Some(tokens);
        }
        if let Some(policy) = request.user_context_policy {
            index.user_context_policy = Some(policy);
        }
        index.status = Some(IndexStatus::Active);
        Ok(UpdateIndexResponse {})
    }

    async fn delete_index(&self, request: DeleteIndexRequest) -> ApiResult<DeleteIndexResponse> {
        self.record("DeleteIndex", &request)?;
        let mut state = self.state();
        let polls = state.delete_polls;
        let index = state
            .indices
            .get_mut(&request.id)
            .ok_or_else(|| not_found("Index", &request.id))?;
        index.status = Some(IndexStatus::Deleting);
        state.pending_deletes.insert(request.id, polls);
        Ok(DeleteIndexResponse {})
    }

    async fn list_indices(&self, request: ListIndicesRequest) -> ApiResult<ListIndicesResponse> {
        self.record("ListIndices", &request)?;
        let state = self.state();
        let items = state
            .indices
            .values()
            .map(|index| IndexConfigurationSummary {
                id: index.id.clone(),
                name: index.name.clone(),
                edition: index.edition,
                status: index.status,
                ..Default::default()
            })
            .collect();
        Ok(ListIndicesResponse {
            index_configuration_summary_items: Some(items),
            next_token: state.list_next_token.clone(),
        })
    }

    async fn create_data_source(
        &self,
        request: CreateDataSourceRequest,
    ) -> ApiResult<CreateDataSourceResponse> {
        self.record("CreateDataSource", &request)?;
        let mut state = self.state();
        if !state.indices.is_empty() && !state.indices.contains_key(&request.index_id) {
            return Err(not_found("Index", &request.index_id));
        }
        let id = state.allocate_id("ds");
        state.remember_tags(&id, request.tags);
        let data_source = DescribeDataSourceResponse {
            id: Some(id.clone()),
            index_id: Some(request.index_id.clone()),
            name: Some(request.name),
            r#type: Some(request.r#type),
            configuration: request.configuration,
            description: request.description,
            status: Some(DataSourceStatus::Active),
            schedule: request.schedule,
            role_arn: request.role_arn,
            language_code: request.language_code,
            custom_document_enrichment_configuration: request
                .custom_document_enrichment_configuration,
            ..Default::default()
        };
        state
            .data_sources
            .insert(index_scoped(&request.index_id, &id), data_source);
        Ok(CreateDataSourceResponse { id: Some(id) })
    }

    async fn describe_data_source(
        &self,
        request: DescribeDataSourceRequest,
    ) -> ApiResult<DescribeDataSourceResponse> {
        self.record("DescribeDataSource", &request)?;
        let mut state = self.state();
        let key = index_scoped(&request.index_id, &request.id);
        if state.deleted(&request.id) == Some(true) {
            state.data_sources.remove(&key);
        }
        let scripted = state.data_source_statuses.pop_front();
        let data_source = state
            .data_sources
            .get_mut(&key)
            .ok_or_else(|| not_found("DataSource", &request.id))?;
        if scripted.is_some() {
            data_source.status = scripted;
        }
        Ok(data_source.clone())
    }

    async fn update_data_source(
        &self,
        request: UpdateDataSourceRequest,
    ) -> ApiResult<UpdateDataSourceResponse> {
        self.record("UpdateDataSource", &request)?;
        let mut state = self.state();
        let key = index_scoped(&request.index_id, &request.id);
        let data_source = state
            .data_sources
            .get_mut(&key)
            .ok_or_else(|| not_found("DataSource", &request.id))?;
        // The service treats empty strings as "clear"
        let or_clear = |value: Option<String>| value.filter(|v| !v.is_empty());
        data_source.name = request.name.or(data_source.name.take());
        data_source.description = or_clear(request.description);
        data_source.schedule = or_clear(request.schedule);
        data_source.role_arn = or_clear(request.role_arn);
        data_source.language_code = or_clear(request.language_code);
        data_source.configuration = request.configuration;
        data_source.custom_document_enrichment_configuration =
            request.custom_document_enrichment_configuration;
        data_source.status = Some(DataSourceStatus::Active);
        Ok(UpdateDataSourceResponse {})
    }

    async fn delete_data_source(
        &self,
        request: DeleteDataSourceRequest,
    ) -> ApiResult<DeleteDataSourceResponse> {
        self.record("DeleteDataSource", &request)?;
        let mut state = self.state();
        let polls = state.delete_polls;
        let key = index_scoped(&request.index_id, &request.id);
        let data_source = state
            .data_sources
            .get_mut(&key)
            .ok_or_else(|| not_found("DataSource", &request.id))?;
        data_source.status = Some(DataSourceStatus::Deleting);
        state.pending_deletes.insert(request.id, polls);
        Ok(DeleteDataSourceResponse {})
    }

    async fn list_data_sources(
        &self,
        request: ListDataSourcesRequest,
    ) -> ApiResult<ListDataSourcesResponse> {
        self.record("ListDataSources", &request)?;
        let state = self.state();
        let items = state
            .data_sources
            .iter()
            .filter(|((index_id, _), _)| *index_id == request.index_id)
            .map(|(_, ds)| DataSourceSummary {
                id: ds.id.clone(),
                name: ds.name.clone(),
                r#type: ds.r#type,
                status: ds.status,
                language_code: ds.language_code.clone(),
                ..Default::default()
            })
            .collect();
        Ok(ListDataSourcesResponse {
            summary_items: Some(items),
            next_token: state.list_next_token.clone(),
        })
    }

    async fn create_faq(&self, request: CreateFaqRequest) -> ApiResult<CreateFaqResponse> {
        self.record("CreateFaq", &request)?;
        let mut state = self.state();
        let id = state.allocate_id("faq");
        state.remember_tags(&id, request.tags);
        let faq = DescribeFaqResponse {
            id: Some(id.clone()),
            index_id: Some(request.index_id.clone()),
            name: Some(request.name),
            description: request.description,
            s3_path: request.s3_path,
            status: Some(FaqStatus::Active),
            role_arn: request.role_arn,
            file_format: request.file_format,
            language_code: request.language_code,
            ..Default::default()
        };
        state.faqs.insert(index_scoped(&request.index_id, &id), faq);
        Ok(CreateFaqResponse { id: Some(id) })
    }

    async fn describe_faq(&self, request: DescribeFaqRequest) -> ApiResult<DescribeFaqResponse> {
        self.record("DescribeFaq", &request)?;
        let mut state = self.state();
        let key = index_scoped(&request.index_id, &request.id);
        if state.deleted(&request.id) == Some(true) {
            state.faqs.remove(&key);
        }
        let scripted = state.faq_statuses.pop_front();
        let faq = state
            .faqs
            .get_mut(&key)
            .ok_or_else(|| not_found("Faq", &request.id))?;
        if scripted.is_some() {
            faq.status = scripted;
        }
        Ok(faq.clone())
    }

    async fn delete_faq(&self, request: DeleteFaqRequest) -> ApiResult<DeleteFaqResponse> {
        self.record("DeleteFaq", &request)?;
        let mut state = self.state();
        let polls = state.delete_polls;
        let key = index_scoped(&request.index_id, &request.id);
        let faq = state
            .faqs
            .get_mut(&key)
            .ok_or_else(|| not_found("Faq", &request.id))?;
        faq.status = Some(FaqStatus::Deleting);
        state.pending_deletes.insert(request.id, polls);
        Ok(DeleteFaqResponse {})
    }

    async fn list_faqs(&self, request: ListFaqsRequest) -> ApiResult<ListFaqsResponse> {
        self.record("ListFaqs", &request)?;
        let state = self.state();
        let items = state
            .faqs
            .iter()
            .filter(|((index_id, _), _)| *index_id == request.index_id)
            .map(|(_, faq)| FaqSummary {
                id: faq.id.clone(),
                name: faq.name.clone(),
                status: faq.status,
                file_format: faq.file_format,
                language_code: faq.language_code.clone(),
                ..Default::default()
            })
            .collect();
        Ok(ListFaqsResponse {
            faq_summary_items: Some(items),
            next_token: state.list_next_token.clone(),
        })
    }

    async fn create_featured_results_set(
        &self,
        request: CreateFeaturedResultsSetRequest,
    ) -> ApiResult<CreateFeaturedResultsSetResponse> {
        self.record("CreateFeaturedResultsSet", &request)?;
        let mut state = self.state();
        let id = state.allocate_id("frs");
        state.remember_tags(&id, request.tags.clone());
        let status = request.status.unwrap_or(FeaturedResultsSetStatus::Active);
        let documents = request.featured_documents.clone().unwrap_or_default();
        let set = DescribeFeaturedResultsSetResponse {
            featured_results_set_id: Some(id.clone()),
            featured_results_set_name: Some(request.featured_results_set_name.clone()),
            description: request.description.clone(),
            status: Some(status),
            query_texts: request.query_texts.clone(),
            featured_documents_with_metadata: Some(
                documents
                    .iter()
                    .map(|doc| FeaturedDocumentWithMetadata {
                        id: doc.id.clone(),
                        ..Default::default()
                    })
                    .collect(),
            ),
            ..Default::default()
        };
        state
            .featured_results_sets
            .insert(index_scoped(&request.index_id, &id), set);
        Ok(CreateFeaturedResultsSetResponse {
            featured_results_set: Some(FeaturedResultsSet {
                featured_results_set_id: Some(id),
                featured_results_set_name: Some(request.featured_results_set_name),
                description: request.description,
                status: Some(status),
                query_texts: request.query_texts,
                featured_documents: request.featured_documents,
                ..Default::default()
            }),
        })
    }

    async fn describe_featured_results_set(
        &self,
        request: DescribeFeaturedResultsSetRequest,
    ) -> ApiResult<DescribeFeaturedResultsSetResponse> {
        self.record("DescribeFeaturedResultsSet", &request)?;
        let key = index_scoped(&request.index_id, &request.featured_results_set_id);
        self.state()
            .featured_results_sets
            .get(&key)
            .cloned()
            .ok_or_else(|| not_found("FeaturedResultsSet", &request.featured_results_set_id))
    }

    async fn update_featured_results_set(
        &self,
        request: UpdateFeaturedResultsSetRequest,
    ) -> ApiResult<UpdateFeaturedResultsSetResponse> {
        self.record("UpdateFeaturedResultsSet", &request)?;
        let mut state = self.state();
        let key = index_scoped(&request.index_id, &request.featured_results_set_id);
        let set = state
            .featured_results_sets
            .get_mut(&key)
            .ok_or_else(|| not_found("FeaturedResultsSet", &request.featured_results_set_id))?;
        if let Some(name) = request.featured_results_set_name {
            set.featured_results_set_name = Some(name);
        }
        set.description = request.description;
        if let Some(status) = request.status {
            set.status = Some(status);
        }
        set.query_texts = request.query_texts;
        set.featured_documents_with_metadata = request.featured_documents.as_ref().map(|docs| {
            docs.iter()
                .map(|doc| FeaturedDocumentWithMetadata {
                    id: doc.id.clone(),
                    ..Default::default()
                })
                .collect()
        });
        Ok(UpdateFeaturedResultsSetResponse {
            featured_results_set: Some(FeaturedResultsSet {
                featured_results_set_id: set.featured_results_set_id.clone(),
                featured_results_set_name: set.featured_results_set_name.clone(),
                description: set.description.clone(),
                status: set.status,
                query_texts: set.query_texts.clone(),
                featured_documents: request.featured_documents,
                ..Default::default()
            }),
        })
    }

    async fn batch_delete_featured_results_set(
        &self,
        request: BatchDeleteFeaturedResultsSetRequest,
    ) -> ApiResult<BatchDeleteFeaturedResultsSetResponse> {
        self.record("BatchDeleteFeaturedResultsSet", &request)?;
        let mut state = self.state();
        let mut errors = Vec::new();
        for id in &request.featured_results_set_ids {
            let key = index_scoped(&request.index_id, id);
            if state.featured_results_sets.remove(&key).is_none() {
                errors.push(BatchDeleteFeaturedResultsSetError {
                    id: Some(id.clone()),
                    error_code: Some(ErrorCode::InvalidRequest),
                    error_message: Some(format!("featured results set {id} does not exist")),
                });
            }
        }
        Ok(BatchDeleteFeaturedResultsSetResponse {
            errors: Some(errors),
        })
    }

    async fn list_featured_results_sets(
        &self,
        request: ListFeaturedResultsSetsRequest,
    ) -> ApiResult<ListFeaturedResultsSetsResponse> {
        self.record("ListFeaturedResultsSets", &request)?;
        let state = self.state();
        let items = state
            .featured_results_sets
            .iter()
            .filter(|((index_id, _), _)| *index_id == request.index_id)
            .map(|(_, set)| FeaturedResultsSetSummary {
                featured_results_set_id: set.featured_results_set_id.clone(),
                featured_results_set_name: set.featured_results_set_name.clone(),
                status: set.status,
                ..Default::default()
            })
            .collect();
        Ok(ListFeaturedResultsSetsResponse {
            featured_results_set_summary_items: Some(items),
            next_token: state.list_next_token.clone(),
        })
    }

    async fn list_tags_for_resource(
        &self,
        request: ListTagsForResourceRequest,
    ) -> ApiResult<ListTagsForResourceResponse> {
        self.record("ListTagsForResource", &request)?;
        let tags = self.state().tags_mut(&request.resource_arn).clone();
        Ok(ListTagsForResourceResponse { tags: Some(tags) })
    }

    async fn tag_resource(&self, request: TagResourceRequest) -> ApiResult<TagResourceResponse> {
        self.record("TagResource", &request)?;
        let mut state = self.state();
        let tags = state.tags_mut(&request.resource_arn);
        for tag in request.tags {
            tags.retain(|existing| existing.key != tag.key);
            tags.push(tag);
        }
        Ok(TagResourceResponse {})
    }

    async fn untag_resource(
        &self,
        request: UntagResourceRequest,
    ) -> ApiResult<UntagResourceResponse> {
        self.record("UntagResource", &request)?;
        let mut state = self.state();
        state
            .tags_mut(&request.resource_arn)
            .retain(|tag| !request.tag_keys.contains(&tag.key));
        Ok(UntagResourceResponse {})
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scripted_statuses_then_steady_state() {
        let mock = MockKendra::new();
        let id = mock
            .create_index(CreateIndexRequest {
                name: "idx".into(),
                ..Default::default()
            })
            .await
            .unwrap()
            .id
            .unwrap();
        mock.script_index_statuses([IndexStatus::Creating]);

        let describe = || DescribeIndexRequest { id: id.clone() };
        let first = mock.describe_index(describe()).await.unwrap();
        assert_eq!(first.status, Some(IndexStatus::Creating));
        let second = mock.describe_index(describe()).await.unwrap();
        assert_eq!(second.status, Some(IndexStatus::Creating));

        mock.script_index_statuses([IndexStatus::Active]);
        let third = mock.describe_index(describe()).await.unwrap();
        assert_eq!(third.status, Some(IndexStatus::Active));
        assert_eq!(mock.call_count("DescribeIndex"), 3);
    }

    #[tokio::test]
    async fn test_delete_disappears_after_polls() {
        let mock = MockKendra::new();
        mock.set_delete_polls(1);
        mock.insert_faq(DescribeFaqResponse {
            id: Some("faq1".into()),
            index_id: Some("idx".into()),
            status: Some(FaqStatus::Active),
            ..Default::default()
        });
        let key = || DescribeFaqRequest {
            id: "faq1".into(),
            index_id: "idx".into(),
        };
        mock.delete_faq(DeleteFaqRequest {
            id: "faq1".into(),
            index_id: "idx".into(),
        })
        .await
        .unwrap();

        let still_there = mock.describe_faq(key()).await.unwrap();
        assert_eq!(still_there.status, Some(FaqStatus::Deleting));
        let gone = mock.describe_faq(key()).await.unwrap_err();
        assert!(gone.is_not_found());
    }

    #[tokio::test]
    async fn test_fail_next_is_consumed_once() {
        let mock = MockKendra::new();
        mock.fail_next("ListIndices", ApiError::service("ThrottlingException", "slow"));
        assert!(mock.list_indices(ListIndicesRequest::default()).await.is_err());
        assert!(mock.list_indices(ListIndicesRequest::default()).await.is_ok());
        assert_eq!(mock.requests("ListIndices").len(), 2);
    }
}
