//! SigV4-signed JSON 1.1 client for the Kendra control plane

use crate::client::{ApiResult, KendraApi};
use crate::error::{codes, ApiError};
use crate::protocol::*;
use async_trait::async_trait;
use aws_credential_types::provider::{ProvideCredentials, SharedCredentialsProvider};
use aws_credential_types::Credentials;
use aws_sigv4::http_request::{sign, SignableBody, SignableRequest, SigningSettings};
use aws_sigv4::sign::v4;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant, SystemTime};
use tracing::{debug, warn};

const TARGET_PREFIX: &str = "AWSKendraFrontendService";
const CONTENT_TYPE: &str = "application/x-amz-json-1.1";
const SIGNING_NAME: &str = "kendra";

/// Where and how to reach the service
#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    /// Falls back to the region resolved by `aws-config`
    pub region: Option<String>,
    /// Overrides `https://kendra.<region>.amazonaws.com`
    pub endpoint_url: Option<String>,
    pub request_timeout: Duration,
}

/// Temporary credentials handed over by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerCredentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: Option<String>,
}

/// HTTP client that signs every call with AWS SigV4
pub struct KendraHttpClient {
    client: reqwest::Client,
    credentials_provider: SharedCredentialsProvider,
    region: String,
    endpoint: url::Url,
}

impl KendraHttpClient {
    /// Resolve credentials and region through the default `aws-config` chain
    /// (Lambda execution role, environment, profile, ...)
    pub async fn from_env(options: ClientOptions) -> ApiResult<Self> {
        let mut loader = aws_config::from_env();
        if let Some(region) = &options.region {
            loader = loader.region(aws_config::Region::new(region.clone()));
        }
        let config = loader.load().await;

        let credentials_provider = config
            .credentials_provider()
            .ok_or_else(|| ApiError::Credentials("no AWS credentials provider available".into()))?;
        let region = options
            .region
            .clone()
            .or_else(|| config.region().map(|r| r.to_string()))
            .ok_or_else(|| ApiError::Configuration("no AWS region configured".into()))?;

        Self::build(&options, credentials_provider, region)
    }

    /// Sign with fixed caller credentials instead of the default chain
    pub fn with_credentials(
        options: ClientOptions,
        credentials: CallerCredentials,
    ) -> ApiResult<Self> {
        let region = options
            .region
            .clone()
            .ok_or_else(|| ApiError::Configuration("no AWS region configured".into()))?;
        let credentials = Credentials::new(
            credentials.access_key_id,
            credentials.secret_access_key,
            credentials.session_token,
            None,
            "caller-credentials",
        );
        Self::build(&options, SharedCredentialsProvider::new(credentials), region)
    }

    fn build(
        options: &ClientOptions,
        credentials_provider: SharedCredentialsProvider,
        region: String,
    ) -> ApiResult<Self> {
        let endpoint = options
            .endpoint_url
            .clone()
            .unwrap_or_else(|| default_endpoint(&region));
        let endpoint = url::Url::parse(&endpoint)
            .map_err(|e| ApiError::Configuration(format!("invalid endpoint '{endpoint}': {e}")))?;

        let client = reqwest::Client::builder()
            .timeout(options.request_timeout)
            .build()
            .map_err(|e| ApiError::Configuration(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            credentials_provider,
            region,
            endpoint,
        })
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn endpoint(&self) -> &url::Url {
        &self.endpoint
    }

    async fn invoke<Req, Resp>(&self, operation: &str, request: &Req) -> ApiResult<Resp>
    where
        Req: Serialize + Sync,
        Resp: DeserializeOwned,
    {
        let started = Instant::now();
        let body = serde_json::to_vec(request)
            .map_err(|e| ApiError::Serialization(format!("{operation} request: {e}")))?;

        let credentials = self
            .credentials_provider
            .provide_credentials()
            .await
            .map_err(|e| ApiError::Credentials(e.to_string()))?;

        let mut headers = vec![
            ("content-type".to_string(), CONTENT_TYPE.to_string()),
            (
                "x-amz-target".to_string(),
                format!("{TARGET_PREFIX}.{operation}"),
            ),
        ];

        let signable_request = SignableRequest::new(
            "POST",
            self.endpoint.as_str(),
            headers.iter().map(|(name, value)| (name.as_str(), value.as_str())),
            SignableBody::Bytes(&body),
        )
        .map_err(|e| ApiError::Credentials(format!("failed to create signable request: {e}")))?;

        let identity = credentials.into();
        let signing_params = v4::SigningParams::builder()
            .identity(&identity)
            .region(&self.region)
            .name(SIGNING_NAME)
            .time(SystemTime::now())
            .settings(SigningSettings::default())
            .build()
            .map_err(|e| ApiError::Credentials(format!("failed to build signing params: {e}")))?
            .into();

        let (signing_instructions, _signature) = sign(signable_request, &signing_params)
            .map_err(|e| ApiError::Credentials(format!("failed to sign request: {e}")))?
            .into_parts();

        for (name, value) in signing_instructions.headers() {
            headers.push((name.to_string(), value.to_string()));
        }

        let mut request_builder = self.client.post(self.endpoint.clone());
        for (name, value) in &headers {
            request_builder = request_builder.header(name, value);
        }

        let response = request_builder
            .body(body)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        let error_type = response
            .headers()
            .get("x-amzn-errortype")
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let payload = response
            .bytes()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        debug!(
            operation,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "kendra call completed"
        );

        if !status.is_success() {
            let err = service_error(status.as_u16(), error_type.as_deref(), &payload);
            warn!(operation, error = %err, "kendra call failed");
            return Err(err);
        }

        let payload: &[u8] = if payload.is_empty() { b"{}" } else { &payload };
        serde_json::from_slice(payload)
            .map_err(|e| ApiError::Serialization(format!("{operation} response: {e}")))
    }
}

/// Regional endpoint, honouring the China partition's domain
pub fn default_endpoint(region: &str) -> String {
    let domain = match kendra_cfn_core::partition_for_region(region) {
        "aws-cn" => "amazonaws.com.cn",
        _ => "amazonaws.com",
    };
    format!("https://kendra.{region}.{domain}")
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(rename = "__type")]
    kind: Option<String>,
    #[serde(alias = "Message")]
    message: Option<String>,
}

fn service_error(status: u16, error_type: Option<&str>, payload: &[u8]) -> ApiError {
    let body: ErrorBody = serde_json::from_slice(payload).unwrap_or_default();
    let code = error_type
        .or(body.kind.as_deref())
        .map(error_code_name)
        .map(str::to_string)
        .unwrap_or_else(|| {
            if status >= 500 {
                codes::INTERNAL_SERVER.to_string()
            } else {
                format!("Http{status}")
            }
        });
    let message = body
        .message
        .unwrap_or_else(|| format!("HTTP status {status}"));
    ApiError::service(code, message)
}

/// Bare exception name from `x-amzn-ErrorType` or `__type`
/// (`com.amazonaws.kendra#ValidationException:http://...` -> `ValidationException`)
fn error_code_name(raw: &str) -> &str {
    let raw = raw.split(':').next().unwrap_or(raw);
    raw.rsplit('#').next().unwrap_or(raw)
}

#[async_trait]
impl KendraApi for KendraHttpClient {
    async fn create_index(&self, request: CreateIndexRequest) -> ApiResult<CreateIndexResponse> {
        self.invoke("CreateIndex", &request).await
    }

    async fn describe_index(
        &self,
        request: DescribeIndexRequest,
    ) -> ApiResult<DescribeIndexResponse> {
        self.invoke("DescribeIndex", &request).await
    }

    async fn update_index(&self, request: UpdateIndexRequest) -> ApiResult<UpdateIndexResponse> {
        self.invoke("UpdateIndex", &request).await
    }

    async fn delete_index(&self, request: DeleteIndexRequest) -> ApiResult<DeleteIndexResponse> {
        self.invoke("DeleteIndex", &request).await
    }

    async fn list_indices(&self, request: ListIndicesRequest) -> ApiResult<ListIndicesResponse> {
        self.invoke("ListIndices", &request).await
    }

    async fn create_data_source(
        &self,
        request: CreateDataSourceRequest,
    ) -> ApiResult<CreateDataSourceResponse> {
        self.invoke("CreateDataSource", &request).await
    }

    async fn describe_data_source(
        &self,
        request: DescribeDataSourceRequest,
    ) -> ApiResult<DescribeDataSourceResponse> {
        self.invoke("DescribeDataSource", &request).await
    }

    async fn update_data_source(
        &self,
        request: UpdateDataSourceRequest,
    ) -> ApiResult<UpdateDataSourceResponse> {
        self.invoke("UpdateDataSource", &request).await
    }

    async fn delete_data_source(
        &self,
        request: DeleteDataSourceRequest,
    ) -> ApiResult<DeleteDataSourceResponse> {
        self.invoke("DeleteDataSource", &request).await
    }

    async fn list_data_sources(
        &self,
        request: ListDataSourcesRequest,
    ) -> ApiResult<ListDataSourcesResponse> {
        self.invoke("ListDataSources", &request).await
    }

    async fn create_faq(&self, request: CreateFaqRequest) -> ApiResult<CreateFaqResponse> {
        self.invoke("CreateFaq", &request).await
    }

    async fn describe_faq(&self, request: DescribeFaqRequest) -> ApiResult<DescribeFaqResponse> {
        self.invoke("DescribeFaq", &request).await
    }

    async fn delete_faq(&self, request: DeleteFaqRequest) -> ApiResult<DeleteFaqResponse> {
        self.invoke("DeleteFaq", &request).await
    }

    async fn list_faqs(&self, request: ListFaqsRequest) -> ApiResult<ListFaqsResponse> {
        self.invoke("ListFaqs", &request).await
    }

    async fn create_featured_results_set(
        &self,
        request: CreateFeaturedResultsSetRequest,
    ) -> ApiResult<CreateFeaturedResultsSetResponse> {
        self.invoke("CreateFeaturedResultsSet", &request).await
    }

    async fn describe_featured_results_set(
        &self,
        request: DescribeFeaturedResultsSetRequest,
    ) -> ApiResult<DescribeFeaturedResultsSetResponse> {
        self.invoke("DescribeFeaturedResultsSet", &request).await
    }

    async fn update_featured_results_set(
        &self,
        request: UpdateFeaturedResultsSetRequest,
    ) -> ApiResult<UpdateFeaturedResultsSetResponse> {
        self.invoke("UpdateFeaturedResultsSet", &request).await
    }

    async fn batch_delete_featured_results_set(
        &self,
        request: BatchDeleteFeaturedResultsSetRequest,
    ) -> ApiResult<BatchDeleteFeaturedResultsSetResponse> {
        self.invoke("BatchDeleteFeaturedResultsSet", &request).await
    }

    async fn list_featured_results_sets(
        &self,
        request: ListFeaturedResultsSetsRequest,
    ) -> ApiResult<ListFeaturedResultsSetsResponse> {
        self.invoke("ListFeaturedResultsSets", &request).await
    }

    async fn list_tags_for_resource(
        &self,
        request: ListTagsForResourceRequest,
    ) -> ApiResult<ListTagsForResourceResponse> {
        self.invoke("ListTagsForResource", &request).await
    }

    async fn tag_resource(&self, request: TagResourceRequest) -> ApiResult<TagResourceResponse> {
        self.invoke("TagResource", &request).await
    }

    async fn untag_resource(
        &self,
        request: UntagResourceRequest,
    ) -> ApiResult<UntagResourceResponse> {
        self.invoke("UntagResource", &request).await
    }
}
