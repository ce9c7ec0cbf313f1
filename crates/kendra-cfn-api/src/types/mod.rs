//! Wire model of the Kendra control plane.
//!
//! Member names follow the service (PascalCase JSON). Every member is
//! optional on the wire; the service enforces required members.

pub mod common;
pub mod data_source;
pub mod enrichment;
pub mod faq;
pub mod featured_results;
pub mod index;

pub use common::*;
pub use data_source::*;
pub use enrichment::*;
pub use faq::*;
pub use featured_results::*;
pub use index::*;
