// kendra-cfn-core - Host-facing vocabulary for the Kendra resource handlers
//
// Everything here is pure: no I/O, no async, no remote client.
// - Progress events and error codes returned to CloudFormation
// - Callback context carrying resumable stabilization state
// - ARN composition and tag-set reconciliation

pub mod arn;
pub mod context;
pub mod error;
pub mod progress;
pub mod request;
pub mod stabilize;
pub mod tags;

pub use arn::{partition_for_region, ArnBuilder, ArnError, ResourceKind};
pub use context::{CallbackContext, StabilizationState, Stage};
pub use error::{HandlerError, HandlerErrorCode};
pub use progress::{OperationStatus, ProgressEvent};
pub use request::{Action, ResourceHandlerRequest};
pub use stabilize::{Poll, Stability, Stabilizer};
pub use tags::{Tag, TagDiff, TagSet};

/// Result alias used by every handler
pub type HandlerResult<T> = std::result::Result<T, HandlerError>;
