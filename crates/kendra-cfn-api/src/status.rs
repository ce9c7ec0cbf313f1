// Status classification for stabilization loops.
//
// ACTIVE is the only success; FAILED ends the loop with the service's
// error message; every other status keeps polling.

use crate::protocol::{DescribeDataSourceResponse, DescribeFaqResponse, DescribeIndexResponse};
use crate::types::{DataSourceStatus, FaqStatus, IndexStatus};
use kendra_cfn_core::Stability;

fn failure_reason(status: &str, error_message: Option<&str>) -> String {
    match error_message {
        Some(message) if !message.is_empty() => format!("status {status}: {message}"),
        _ => format!("status {status}"),
    }
}

impl DescribeIndexResponse {
    pub fn stability(&self) -> Stability {
        match self.status {
            Some(IndexStatus::Active) => Stability::Stable,
            Some(IndexStatus::Failed) => Stability::Failed(failure_reason(
                IndexStatus::Failed.as_str(),
                self.error_message.as_deref(),
            )),
            Some(other) => Stability::Pending(other.to_string()),
            None => Stability::Pending("UNKNOWN".to_string()),
        }
    }
}

impl DescribeDataSourceResponse {
    pub fn stability(&self) -> Stability {
        match self.status {
            Some(DataSourceStatus::Active) => Stability::Stable,
            Some(DataSourceStatus::Failed) => Stability::Failed(failure_reason(
                DataSourceStatus::Failed.as_str(),
                self.error_message.as_deref(),
            )),
            Some(other) => Stability::Pending(other.to_string()),
            None => Stability::Pending("UNKNOWN".to_string()),
        }
    }
}

impl DescribeFaqResponse {
    pub fn stability(&self) -> Stability {
        match self.status {
            Some(FaqStatus::Active) => Stability::Stable,
            Some(FaqStatus::Failed) => Stability::Failed(failure_reason(
                FaqStatus::Failed.as_str(),
                self.error_message.as_deref(),
            )),
            Some(other) => Stability::Pending(other.to_string()),
            None => Stability::Pending("UNKNOWN".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_statuses() {
        let mut resp = DescribeIndexResponse {
            status: Some(IndexStatus::Creating),
            ..Default::default()
        };
        assert_eq!(resp.stability(), Stability::Pending("CREATING".into()));

        resp.status = Some(IndexStatus::SystemUpdating);
        assert_eq!(resp.stability(), Stability::Pending("SYSTEM_UPDATING".into()));

        resp.status = Some(IndexStatus::Active);
        assert_eq!(resp.stability(), Stability::Stable);

        resp.status = Some(IndexStatus::Failed);
        resp.error_message = Some("role cannot be assumed".into());
        assert_eq!(
            resp.stability(),
            Stability::Failed("status FAILED: role cannot be assumed".into())
        );
    }

    #[test]
    fn test_data_source_failed_without_message() {
        let resp = DescribeDataSourceResponse {
            status: Some(DataSourceStatus::Failed),
            ..Default::default()
        };
        assert_eq!(resp.stability(), Stability::Failed("status FAILED".into()));
    }

    #[test]
    fn test_faq_deleting_keeps_polling() {
        let resp = DescribeFaqResponse {
            status: Some(FaqStatus::Deleting),
            ..Default::default()
        };
        assert_eq!(resp.stability(), Stability::Pending("DELETING".into()));
    }
}
