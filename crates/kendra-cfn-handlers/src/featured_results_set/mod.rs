//! `AWS::Kendra::FeaturedResultsSet`
//!
//! Sets settle synchronously, so none of the handlers poll.

mod handlers;
pub mod model;
pub mod translator;

pub use handlers::FeaturedResultsSetHandler;
pub use model::ResourceModel;

pub const TYPE_NAME: &str = "AWS::Kendra::FeaturedResultsSet";
