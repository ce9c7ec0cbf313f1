//! `AWS::Kendra::DataSource`

mod handlers;
pub mod mapper;
pub mod model;
pub mod translator;

pub use handlers::DataSourceHandler;
pub use model::ResourceModel;

pub const TYPE_NAME: &str = "AWS::Kendra::DataSource";
