//! # Freshdesk
//!
//! Async client library for the Freshdesk helpdesk REST API (v2).
//!
//! Each resource (groups, tickets, contacts, companies, agents) is exposed
//! through a facade whose methods map one-to-one onto HTTP calls against
//! fixed endpoints. Records are passed through as opaque JSON; failures
//! come back as a [`FreshdeskError`](error::FreshdeskError) whose
//! [`ErrorKind`](error::ErrorKind) tells validation, authentication,
//! not-found, rate limiting and the other API failures apart.
//!
//! ## Architecture
//!
//! - [`config`] - Configuration from code or environment variables
//! - [`error`] - Error types and the HTTP status to failure kind mapping
//! - [`dispatch`] - The [`Dispatch`](dispatch::Dispatch) trait facades call through
//! - [`client`] - [`FreshdeskClient`](client::FreshdeskClient), the reqwest-backed dispatcher
//! - [`resources`] - Resource facades
//! - [`models`] - Records, query parameters, identifiers and error payloads
//!
//! ## Configuration
//!
//! [`Config::from_env`](config::Config::from_env) reads:
//!
//! - `FRESHDESK_DOMAIN`: account name (`acme`), host or URL
//! - `FRESHDESK_API_KEY`: API key of the agent to act as
//! - `FRESHDESK_TIMEOUT_SECS` (optional): request timeout, default 30
//!
//! ## Example
//!
//! ```no_run
//! use freshdesk::prelude::*;
//! use serde_json::json;
//!
//! async fn example() -> Result<(), FreshdeskError> {
//!     let config = Config::from_env()?;
//!     let client = FreshdeskClient::new(&config)?;
//!
//!     let group = to_record(&json!({"name": "Billing"}))?;
//!     client.groups().create(&group).await?;
//!
//!     let open = client
//!         .tickets()
//!         .all(Some(&Query::new().with("filter", "new_and_my_open")))
//!         .await?;
//!     println!("{}", open);
//!
//!     match client.tickets().view(999, None).await {
//!         Err(e) if e.is_not_found() => println!("no such ticket"),
//!         other => println!("{:?}", other?),
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod client;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod models;
pub mod resources;

#[cfg(test)]
mod testing;

/// Commonly used types.
pub mod prelude {
    pub use crate::client::FreshdeskClient;
    pub use crate::config::Config;
    pub use crate::dispatch::{Dispatch, Method};
    pub use crate::error::{ApiError, ErrorKind, FreshdeskError};
    pub use crate::models::{to_record, Query, Record, ResourceId};
    pub use crate::resources::{Action, Resource, Resources};
}
