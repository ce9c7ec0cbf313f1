// kendra-cfn-api - Kendra control-plane client for the resource handlers
//
// - Wire model mirroring the service's JSON shapes
// - `KendraApi`, the async client trait injected into every handler
// - Remote error taxonomy and its mapping onto handler errors
// - SigV4-signed HTTP implementation, plus an in-memory mock for tests

#[macro_use]
mod enums;

pub mod client;
pub mod error;
pub mod http;
pub mod protocol;
mod status;
pub mod timestamp;
pub mod types;

#[cfg(feature = "mock")]
pub mod mock;

pub use client::{ApiResult, KendraApi};
pub use enums::UnknownVariant;
pub use error::{codes, ApiError};
pub use http::{CallerCredentials, ClientOptions, KendraHttpClient};

#[cfg(feature = "mock")]
pub use mock::MockKendra;
