//! Request construction and model reconstruction for data sources.

use kendra_cfn_api::protocol::{
    CreateDataSourceRequest, DeleteDataSourceRequest, DescribeDataSourceRequest,
    DescribeDataSourceResponse, ListDataSourcesRequest, ListDataSourcesResponse,
    UpdateDataSourceRequest,
};
use kendra_cfn_api::types::DataSourceType;
use kendra_cfn_core::Tag;

use super::mapper::{self, enrichment};
use super::model::ResourceModel;
use crate::error::{required, TranslateError};
use crate::mapper::or_empty;

pub fn create_request(
    model: &ResourceModel,
    tags: Option<Vec<Tag>>,
    client_token: Option<&str>,
) -> Result<CreateDataSourceRequest, TranslateError> {
    let data_source_type = required(model.r#type.as_ref(), "Type")?;
    Ok(CreateDataSourceRequest {
        name: required(model.name.as_ref(), "Name")?.to_string(),
        index_id: required(model.index_id.as_ref(), "IndexId")?.to_string(),
        r#type: data_source_type.parse::<DataSourceType>()?,
        configuration: mapper::to_remote_configuration(
            model.data_source_configuration.as_ref(),
            data_source_type,
        )?,
        description: model.description.clone(),
        schedule: model.schedule.clone(),
        role_arn: model.role_arn.clone(),
        tags,
        client_token: client_token.map(str::to_string),
        language_code: model.language_code.clone(),
        custom_document_enrichment_configuration: enrichment::to_remote(
            model.custom_document_enrichment_configuration.as_ref(),
        )?,
    })
}

pub fn describe_request(
    model: &ResourceModel,
) -> Result<DescribeDataSourceRequest, TranslateError> {
    Ok(DescribeDataSourceRequest {
        id: required(model.id.as_ref(), "Id")?.to_string(),
        index_id: required(model.index_id.as_ref(), "IndexId")?.to_string(),
    })
}

/// Unset optional strings are sent as `""`, which the service reads as "clear"
pub fn update_request(model: &ResourceModel) -> Result<UpdateDataSourceRequest, TranslateError> {
    let data_source_type = model.r#type.as_deref().unwrap_or_default();
    Ok(UpdateDataSourceRequest {
        id: required(model.id.as_ref(), "Id")?.to_string(),
        index_id: required(model.index_id.as_ref(), "IndexId")?.to_string(),
        name: model.name.clone(),
        configuration: mapper::to_remote_configuration(
            model.data_source_configuration.as_ref(),
            data_source_type,
        )?,
        description: or_empty(model.description.as_ref()),
        schedule: or_empty(model.schedule.as_ref()),
        role_arn: or_empty(model.role_arn.as_ref()),
        language_code: or_empty(model.language_code.as_ref()),
        custom_document_enrichment_configuration: enrichment::to_remote(
            model.custom_document_enrichment_configuration.as_ref(),
        )?,
    })
}

pub fn delete_request(model: &ResourceModel) -> Result<DeleteDataSourceRequest, TranslateError> {
    Ok(DeleteDataSourceRequest {
        id: required(model.id.as_ref(), "Id")?.to_string(),
        index_id: required(model.index_id.as_ref(), "IndexId")?.to_string(),
    })
}

pub fn list_request(index_id: &str, next_token: Option<&str>) -> ListDataSourcesRequest {
    ListDataSourcesRequest {
        index_id: index_id.to_string(),
        next_token: next_token.map(str::to_string),
        max_results: None,
    }
}

/// Full model from a describe, the tags on the resource, and its ARN
pub fn from_describe(
    response: DescribeDataSourceResponse,
    tags: Option<Vec<Tag>>,
    arn: String,
) -> ResourceModel {
    ResourceModel {
        id: response.id,
        name: response.name,
        index_id: response.index_id,
        r#type: response.r#type.map(|t| t.as_str().to_string()),
        data_source_configuration: mapper::to_model_configuration(response.configuration.as_ref()),
        description: response.description,
        schedule: response.schedule,
        role_arn: response.role_arn,
        tags: tags.filter(|tags| !tags.is_empty()),
        arn: Some(arn),
        custom_document_enrichment_configuration: enrichment::to_model(
            response.custom_document_enrichment_configuration.as_ref(),
        ),
        language_code: response.language_code,
    }
}

/// Identity-only models; callers read each one for detail
pub fn from_list(response: ListDataSourcesResponse, index_id: &str) -> Vec<ResourceModel> {
    response
        .summary_items
        .unwrap_or_default()
        .into_iter()
        .map(|summary| ResourceModel {
            id: summary.id,
            index_id: Some(index_id.to_string()),
            ..Default::default()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_source::model::{DataSourceConfiguration, S3DataSourceConfiguration};
    use kendra_cfn_api::protocol::DataSourceSummary;
    use kendra_cfn_api::types::{self as wire, DataSourceStatus};

    fn s3_model() -> ResourceModel {
        ResourceModel {
            name: Some("n".into()),
            index_id: Some("idx".into()),
            r#type: Some("S3".into()),
            data_source_configuration: Some(DataSourceConfiguration {
                s3_configuration: Some(S3DataSourceConfiguration {
                    bucket_name: Some("b".into()),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_create_request() {
        let request = create_request(&s3_model(), None, Some("token-1")).unwrap();
        assert_eq!(request.name, "n");
        assert_eq!(request.index_id, "idx");
        assert_eq!(request.r#type, DataSourceType::S3);
        assert!(matches!(
            request.configuration,
            Some(wire::DataSourceConfiguration::S3(_))
        ));
        assert_eq!(request.client_token.as_deref(), Some("token-1"));

        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("Tags").is_none());
        assert!(json.get("Description").is_none());
        assert_eq!(json["Configuration"]["S3Configuration"]["BucketName"], "b");
    }

    #[test]
    fn test_create_request_tags_are_listed() {
        let tags = vec![Tag::new("a", "1"), Tag::new("b", "2")];
        let request = create_request(&s3_model(), Some(tags.clone()), None).unwrap();
        assert_eq!(request.tags, Some(tags));
    }

    #[test]
    fn test_create_request_rejects_unknown_type() {
        let model = ResourceModel {
            r#type: Some("FTP".into()),
            ..s3_model()
        };
        let err = create_request(&model, None, None).unwrap_err();
        assert!(matches!(err, TranslateError::UnknownVariant(_)));
    }

    #[test]
    fn test_create_request_requires_index() {
        let model = ResourceModel {
            index_id: None,
            ..s3_model()
        };
        assert_eq!(
            create_request(&model, None, None).unwrap_err(),
            TranslateError::MissingField("IndexId")
        );
    }

    #[test]
    fn test_update_request_clears_unset_strings() {
        let model = ResourceModel {
            id: Some("ds-1".into()),
            ..s3_model()
        };
        let request = update_request(&model).unwrap();
        assert_eq!(request.description.as_deref(), Some(""));
        assert_eq!(request.schedule.as_deref(), Some(""));
        assert_eq!(request.role_arn.as_deref(), Some(""));
        assert_eq!(request.name.as_deref(), Some("n"));
        assert_eq!(request.language_code.as_deref(), Some(""));

        let model = ResourceModel {
            description: Some("nightly crawl".into()),
            language_code: Some("de".into()),
            ..model
        };
        let request = update_request(&model).unwrap();
        assert_eq!(request.description.as_deref(), Some("nightly crawl"));
        assert_eq!(request.language_code.as_deref(), Some("de"));
    }

    #[test]
    fn test_from_describe() {
        let response = DescribeDataSourceResponse {
            id: Some("ds-1".into()),
            index_id: Some("idx".into()),
            name: Some("n".into()),
            r#type: Some(DataSourceType::S3),
            configuration: Some(wire::DataSourceConfiguration::S3(
                wire::S3DataSourceConfiguration {
                    bucket_name: Some("b".into()),
                    ..Default::default()
                },
            )),
            status: Some(DataSourceStatus::Active),
            ..Default::default()
        };
        let arn = "arn:aws:kendra:us-east-1:111122223333:index/idx/data-source/ds-1";
        let model = from_describe(response, Some(Vec::new()), arn.to_string());

        assert_eq!(model.id.as_deref(), Some("ds-1"));
        assert_eq!(model.r#type.as_deref(), Some("S3"));
        assert_eq!(model.arn.as_deref(), Some(arn));
        assert_eq!(model.tags, None);
        assert_eq!(
            model.data_source_configuration,
            s3_model().data_source_configuration
        );
    }

    #[test]
    fn test_from_list_is_identity_only() {
        let response = ListDataSourcesResponse {
            summary_items: Some(vec![DataSourceSummary {
                id: Some("ds-1".into()),
                name: Some("n".into()),
                r#type: Some(DataSourceType::S3),
                ..Default::default()
            }]),
            next_token: None,
        };
        let models = from_list(response, "idx");
        assert_eq!(
            models,
            vec![ResourceModel {
                id: Some("ds-1".into()),
                index_id: Some("idx".into()),
                ..Default::default()
            }]
        );
    }
}
