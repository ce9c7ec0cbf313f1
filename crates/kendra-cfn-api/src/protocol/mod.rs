//! Request and response bodies of the operations the handlers call.

mod requests;
mod responses;

pub use requests::*;
pub use responses::*;
