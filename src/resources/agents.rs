//! Agent facade.

use std::ops::Deref;

use serde_json::Value;

use super::{Resource, AGENTS};
use crate::dispatch::{Dispatch, Method};
use crate::error::FreshdeskError;

/// Path segment addressing the authenticated agent.
const CURRENT_AGENT: &str = "me";

/// Agents: CRUD plus the currently authenticated agent.
pub struct Agents<'a, D: ?Sized> {
    resource: Resource<'a, D>,
}

impl<'a, D: ?Sized> Deref for Agents<'a, D> {
    type Target = Resource<'a, D>;

    fn deref(&self) -> &Self::Target {
        &self.resource
    }
}

impl<'a, D: Dispatch + ?Sized> Agents<'a, D> {
    /// Creates the agent facade.
    pub fn new(dispatcher: &'a D) -> Self {
        Self {
            resource: Resource::new(dispatcher, &AGENTS),
        }
    }

    /// Fetches the agent the API key belongs to.
    pub async fn current(&self) -> Result<Value, FreshdeskError> {
        let endpoint = self.resource.endpoint(Some(CURRENT_AGENT));
        self.resource.send(Method::GET, &endpoint, None, None).await
    }
}
