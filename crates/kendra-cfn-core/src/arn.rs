//! Kendra ARN composition.
//!
//! `arn:{partition}:kendra:{region}:{account}:index/{indexId}[/{kind}/{id}]`
//! The string must match what the service reports, or drift detection breaks.

use thiserror::Error;

use crate::error::HandlerError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArnError {
    #[error("cannot build ARN: {0} is missing")]
    MissingComponent(&'static str),
}

impl From<ArnError> for HandlerError {
    fn from(err: ArnError) -> Self {
        HandlerError::InternalFailure(err.to_string())
    }
}

/// Child resource kinds nested under an index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    DataSource,
    Faq,
    FeaturedResultsSet,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::DataSource => "data-source",
            ResourceKind::Faq => "faq",
            ResourceKind::FeaturedResultsSet => "featured-results-set",
        }
    }
}

/// Partition for a region name
pub fn partition_for_region(region: &str) -> &'static str {
    if region.starts_with("cn-") {
        "aws-cn"
    } else if region.starts_with("us-gov-") {
        "aws-us-gov"
    } else if region.starts_with("us-iso-") {
        "aws-iso"
    } else if region.starts_with("us-isob-") {
        "aws-iso-b"
    } else {
        "aws"
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ArnBuilder<'a> {
    partition: &'a str,
    region: &'a str,
    account_id: &'a str,
}

impl<'a> ArnBuilder<'a> {
    pub fn new(partition: &'a str, region: &'a str, account_id: &'a str) -> Self {
        Self {
            partition,
            region,
            account_id,
        }
    }

    /// ARN of an index
    pub fn index(&self, index_id: Option<&str>) -> Result<String, ArnError> {
        let index_id = required("index id", index_id)?;
        Ok(format!("{}index/{}", self.prefix()?, index_id))
    }

    /// ARN of a resource nested under an index
    pub fn child(
        &self,
        kind: ResourceKind,
        index_id: Option<&str>,
        id: Option<&str>,
    ) -> Result<String, ArnError> {
        let index_id = required("index id", index_id)?;
        let id = required("resource id", id)?;
        Ok(format!(
            "{}index/{}/{}/{}",
            self.prefix()?,
            index_id,
            kind.as_str(),
            id
        ))
    }

    fn prefix(&self) -> Result<String, ArnError> {
        let partition = required("partition", Some(self.partition))?;
        let region = required("region", Some(self.region))?;
        let account_id = required("account id", Some(self.account_id))?;
        Ok(format!("arn:{}:kendra:{}:{}:", partition, region, account_id))
    }
}

fn required<'v>(name: &'static str, value: Option<&'v str>) -> Result<&'v str, ArnError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ArnError::MissingComponent(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_source_arn() {
        let arn = ArnBuilder::new("aws", "us-west-2", "0123456789")
            .child(ResourceKind::DataSource, Some("idx1"), Some("ds1"))
            .unwrap();
        assert_eq!(
            arn,
            "arn:aws:kendra:us-west-2:0123456789:index/idx1/data-source/ds1"
        );
    }

    #[test]
    fn test_index_and_other_kinds() {
        let builder = ArnBuilder::new("aws-cn", "cn-north-1", "111");
        assert_eq!(
            builder.index(Some("idx")).unwrap(),
            "arn:aws-cn:kendra:cn-north-1:111:index/idx"
        );
        assert_eq!(
            builder
                .child(ResourceKind::Faq, Some("idx"), Some("f1"))
                .unwrap(),
            "arn:aws-cn:kendra:cn-north-1:111:index/idx/faq/f1"
        );
        assert_eq!(
            builder
                .child(ResourceKind::FeaturedResultsSet, Some("idx"), Some("frs"))
                .unwrap(),
            "arn:aws-cn:kendra:cn-north-1:111:index/idx/featured-results-set/frs"
        );
    }

    #[test]
    fn test_missing_components_fail() {
        let builder = ArnBuilder::new("aws", "us-east-1", "123");
        assert_eq!(
            builder.child(ResourceKind::DataSource, None, Some("ds")),
            Err(ArnError::MissingComponent("index id"))
        );
        assert_eq!(
            builder.child(ResourceKind::DataSource, Some("idx"), Some("")),
            Err(ArnError::MissingComponent("resource id"))
        );
        assert_eq!(
            ArnBuilder::new("", "us-east-1", "123").index(Some("idx")),
            Err(ArnError::MissingComponent("partition"))
        );
        assert_eq!(
            ArnBuilder::new("aws", "us-east-1", "").index(Some("idx")),
            Err(ArnError::MissingComponent("account id"))
        );
    }

    #[test]
    fn test_partition_for_region() {
        assert_eq!(partition_for_region("us-east-1"), "aws");
        assert_eq!(partition_for_region("cn-northwest-1"), "aws-cn");
        assert_eq!(partition_for_region("us-gov-west-1"), "aws-us-gov");
    }
}
