//! One stabilization poll per invocation.
//!
//! A handler that has to wait never sleeps: it observes the resource once,
//! and either carries on or returns `IN_PROGRESS` with a context that
//! resumes at the same stage.

use chrono::{DateTime, Utc};
use kendra_cfn_api::ApiResult;
use kendra_cfn_core::{
    CallbackContext, HandlerResult, Poll, ProgressEvent, Stability, Stabilizer, Stage,
};

use crate::handler::RemoteResultExt;

/// Outcome of a poll
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Settle {
    Ready,
    Wait {
        context: CallbackContext,
        delay_seconds: u32,
    },
}

impl Settle {
    /// `IN_PROGRESS` event for a `Wait`, `None` once settled
    pub(crate) fn in_progress<M>(self, model: M) -> Option<ProgressEvent<M>> {
        match self {
            Settle::Ready => None,
            Settle::Wait {
                context,
                delay_seconds,
            } => Some(ProgressEvent::in_progress(model, context, delay_seconds)),
        }
    }
}

/// Fold `observed` into the loop recorded for `stage`.
///
/// Loop state in `callback` is reused only when it belongs to `stage`;
/// otherwise this is the first poll of a fresh loop.
pub(crate) fn poll(
    stabilizer: &Stabilizer<'_>,
    stage: Stage,
    callback: &CallbackContext,
    observed: Stability,
    now: DateTime<Utc>,
) -> HandlerResult<Settle> {
    let previous = if callback.resuming(stage) {
        callback.stabilization.as_ref()
    } else {
        None
    };

    match stabilizer.step(previous, observed, now)? {
        Poll::Ready => Ok(Settle::Ready),
        Poll::Pending(state) => Ok(Settle::Wait {
            context: CallbackContext {
                stage: Some(stage),
                stabilization: Some(state),
            },
            delay_seconds: stabilizer.delay_seconds(),
        }),
    }
}

/// Classify a post-delete describe: `NotFound` means gone
pub(crate) fn gone_or_pending<T>(
    describe: ApiResult<T>,
    status: impl FnOnce(&T) -> Option<String>,
    type_name: &str,
    identifier: &str,
) -> HandlerResult<Stability> {
    match describe {
        Err(err) if err.is_not_found() => Ok(Stability::Stable),
        result => {
            let response = result.or_handler_error(type_name, identifier)?;
            let status = status(&response).unwrap_or_else(|| "DELETING".to_string());
            Ok(Stability::Pending(status))
        }
    }
}
