// Callback context threaded between handler invocations
//
// The host persists whatever the handler returns with an IN_PROGRESS event
// and hands it back on the next invocation. The handler never sleeps; the
// stage tells it where to resume.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Where a multi-invocation operation resumes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Stage {
    /// Remote create issued, waiting for an active status
    AwaitingCreate,
    /// Create settled, follow-up update issued, waiting for an active status
    AwaitingFollowUpUpdate,
    /// Remote update issued, waiting for an active status
    AwaitingUpdate,
    /// Remote delete issued, waiting for the resource to disappear
    AwaitingDelete,
}

/// Poll bookkeeping for one stabilization loop
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StabilizationState {
    pub attempt: u32,
    pub deadline: DateTime<Utc>,
}

impl StabilizationState {
    pub fn start(now: DateTime<Utc>, timeout: Duration) -> Self {
        let timeout = chrono::Duration::from_std(timeout).unwrap_or(chrono::Duration::MAX);
        let deadline = now.checked_add_signed(timeout).unwrap_or(DateTime::<Utc>::MAX_UTC);
        Self {
            attempt: 0,
            deadline,
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.deadline
    }

    pub fn next(&self) -> Self {
        Self {
            attempt: self.attempt.saturating_add(1),
            deadline: self.deadline,
        }
    }
}

/// Opaque (to the host) resumption state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallbackContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage: Option<Stage>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stabilization: Option<StabilizationState>,
}

impl CallbackContext {
    /// Context for a loop that has not polled yet
    pub fn begin(stage: Stage, now: DateTime<Utc>, timeout: Duration) -> Self {
        Self {
            stage: Some(stage),
            stabilization: Some(StabilizationState::start(now, timeout)),
        }
    }

    pub fn resuming(&self, stage: Stage) -> bool {
        self.stage == Some(stage)
    }

    pub fn is_empty(&self) -> bool {
        self.stage.is_none() && self.stabilization.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_default_context_is_empty() {
        let ctx = CallbackContext::default();
        assert!(ctx.is_empty());
        assert!(!ctx.resuming(Stage::AwaitingCreate));
        assert_eq!(serde_json::to_string(&ctx).unwrap(), "{}");
    }

    #[test]
    fn test_begin_sets_deadline() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let ctx = CallbackContext::begin(Stage::AwaitingDelete, now, Duration::from_secs(600));
        let state = ctx.stabilization.clone().unwrap();
        assert_eq!(state.attempt, 0);
        assert_eq!(state.deadline, now + chrono::Duration::seconds(600));
        assert!(ctx.resuming(Stage::AwaitingDelete));
        assert!(!state.is_expired(now));
        assert!(state.is_expired(now + chrono::Duration::seconds(600)));
    }

    #[test]
    fn test_huge_timeout_does_not_overflow() {
        let now = Utc::now();
        let state = StabilizationState::start(now, Duration::from_secs(u64::MAX));
        assert!(!state.is_expired(now));
    }

    #[test]
    fn test_context_round_trips_through_host_json() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let ctx = CallbackContext::begin(Stage::AwaitingFollowUpUpdate, now, Duration::from_secs(60));
        let json = serde_json::to_value(&ctx).unwrap();
        assert_eq!(json["stage"], "AWAITING_FOLLOW_UP_UPDATE");
        assert_eq!(json["stabilization"]["attempt"], 0);

        let back: CallbackContext = serde_json::from_value(json).unwrap();
        assert_eq!(back, ctx);
    }
}
