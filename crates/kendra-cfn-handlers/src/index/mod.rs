//! `AWS::Kendra::Index`

mod handlers;
pub mod mapper;
pub mod model;
pub mod translator;

pub use handlers::IndexHandler;
pub use model::ResourceModel;

pub const TYPE_NAME: &str = "AWS::Kendra::Index";
