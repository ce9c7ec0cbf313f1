//! `AWS::Kendra::Faq`

mod handlers;
pub mod model;
pub mod translator;

pub use handlers::FaqHandler;
pub use model::ResourceModel;

pub const TYPE_NAME: &str = "AWS::Kendra::Faq";
