// kendra-cfn-handlers - CRUDL handlers for the AWS::Kendra::* resource types
//
// - One module per resource type: model, translator and handlers
// - Resumable stabilization driven by the callback context
// - Tag reconciliation against the live tag set
// - Every remote call goes through the injected `KendraApi`

mod error;
pub mod handler;
mod mapper;
pub mod model;
mod settle;
mod tagging;

pub mod data_source;
pub mod faq;
pub mod featured_results_set;
pub mod index;

pub use data_source::DataSourceHandler;
pub use error::TranslateError;
pub use faq::FaqHandler;
pub use featured_results_set::FeaturedResultsSetHandler;
pub use handler::{invoke, HandlerContext, ResourceHandler};
pub use index::IndexHandler;
