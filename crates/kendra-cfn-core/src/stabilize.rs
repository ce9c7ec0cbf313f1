//! One step of a stabilization loop.
//!
//! The handler describes the resource once per invocation, classifies the
//! answer as a [`Stability`], and asks the [`Stabilizer`] whether to finish,
//! fail, or hand control back to the host with a callback delay.

use crate::context::StabilizationState;
use crate::error::HandlerError;
use chrono::{DateTime, Utc};
use std::time::Duration;
use tracing::debug;

/// Classification of a single describe result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stability {
    /// Terminal success (active, or gone for deletes)
    Stable,
    /// Still transitioning; carries the observed status for logging
    Pending(String),
    /// Terminal failure; carries the reason reported by the service
    Failed(String),
}

/// Outcome of a step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Poll {
    Ready,
    Pending(StabilizationState),
}

/// Parameters of one stabilization loop
#[derive(Debug, Clone)]
pub struct Stabilizer<'a> {
    pub type_name: &'a str,
    pub identifier: &'a str,
    pub delay: Duration,
    pub timeout: Duration,
}

impl<'a> Stabilizer<'a> {
    pub fn new(
        type_name: &'a str,
        identifier: &'a str,
        delay: Duration,
        timeout: Duration,
    ) -> Self {
        Self {
            type_name,
            identifier,
            delay,
            timeout,
        }
    }

    /// Fold one observation into the loop state.
    ///
    /// `state` is `None` on the first observation of a loop.
    pub fn step(
        &self,
        state: Option<&StabilizationState>,
        observed: Stability,
        now: DateTime<Utc>,
    ) -> Result<Poll, HandlerError> {
        let state = state
            .cloned()
            .unwrap_or_else(|| StabilizationState::start(now, self.timeout));

        match observed {
            Stability::Stable => {
                debug!(
                    type_name = self.type_name,
                    id = self.identifier,
                    attempt = state.attempt,
                    "resource stabilized"
                );
                Ok(Poll::Ready)
            }
            Stability::Failed(reason) => Err(HandlerError::not_stabilized(
                self.type_name,
                self.identifier,
                reason,
            )),
            Stability::Pending(status) => {
                if state.is_expired(now) {
                    return Err(HandlerError::not_stabilized(
                        self.type_name,
                        self.identifier,
                        format!(
                            "timed out after {} attempts while in status {}",
                            state.attempt + 1,
                            status
                        ),
                    ));
                }
                debug!(
                    type_name = self.type_name,
                    id = self.identifier,
                    attempt = state.attempt,
                    status = %status,
                    "resource still stabilizing"
                );
                Ok(Poll::Pending(state.next()))
            }
        }
    }

    /// Callback delay in whole seconds, as the host expects it
    pub fn delay_seconds(&self) -> u32 {
        u32::try_from(self.delay.as_secs()).unwrap_or(u32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HandlerErrorCode;

    fn stabilizer() -> Stabilizer<'static> {
        Stabilizer::new(
            "AWS::Kendra::Index",
            "idx",
            Duration::from_secs(120),
            Duration::from_secs(3600),
        )
    }

    #[test]
    fn test_stable_is_ready() {
        let poll = stabilizer()
            .step(None, Stability::Stable, Utc::now())
            .unwrap();
        assert_eq!(poll, Poll::Ready);
    }

    #[test]
    fn test_failed_raises_not_stabilized() {
        let err = stabilizer()
            .step(None, Stability::Failed("bad role".into()), Utc::now())
            .unwrap_err();
        assert_eq!(err.code(), HandlerErrorCode::NotStabilized);
        assert!(err.to_string().contains("bad role"));
    }

    #[test]
    fn test_pending_advances_attempt() {
        let now = Utc::now();
        let first = stabilizer()
            .step(None, Stability::Pending("CREATING".into()), now)
            .unwrap();
        let Poll::Pending(state) = first else {
            panic!("expected pending");
        };
        assert_eq!(state.attempt, 1);

        let second = stabilizer()
            .step(Some(&state), Stability::Pending("CREATING".into()), now)
            .unwrap();
        assert_eq!(
            second,
            Poll::Pending(StabilizationState {
                attempt: 2,
                deadline: state.deadline,
            })
        );
    }

    #[test]
    fn test_pending_past_deadline_times_out() {
        let now = Utc::now();
        let state = StabilizationState {
            attempt: 7,
            deadline: now - chrono::Duration::seconds(1),
        };
        let err = stabilizer()
            .step(Some(&state), Stability::Pending("UPDATING".into()), now)
            .unwrap_err();
        assert_eq!(err.code(), HandlerErrorCode::NotStabilized);
        assert!(err.to_string().contains("timed out"));
    }

    #[test]
    fn test_delay_seconds() {
        assert_eq!(stabilizer().delay_seconds(), 120);
    }
}
