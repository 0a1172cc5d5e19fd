//! Data types passed through the Freshdesk API.
//!
//! Records are opaque JSON objects; the only local shapes are the query
//! parameters, resource identifiers and the service's error payloads.

mod error_body;
mod id;
mod query;
mod record;

pub use error_body::*;
pub use id::*;
pub use query::*;
pub use record::*;
