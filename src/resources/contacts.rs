//! Contact facade.

use std::ops::Deref;

use serde_json::Value;

use super::{Action, Resource, CONTACTS};
use crate::dispatch::Dispatch;
use crate::error::FreshdeskError;
use crate::models::{Record, ResourceId};

/// Contacts: CRUD plus restore and conversion to an agent.
pub struct Contacts<'a, D: ?Sized> {
    resource: Resource<'a, D>,
}

impl<'a, D: ?Sized> Deref for Contacts<'a, D> {
    type Target = Resource<'a, D>;

    fn deref(&self) -> &Self::Target {
        &self.resource
    }
}

impl<'a, D: Dispatch + ?Sized> Contacts<'a, D> {
    /// Creates the contact facade.
    pub fn new(dispatcher: &'a D) -> Self {
        Self {
            resource: Resource::new(dispatcher, &CONTACTS),
        }
    }

    /// Restores a soft-deleted contact.
    pub async fn restore(&self, id: impl Into<ResourceId>) -> Result<Value, FreshdeskError> {
        self.resource.perform(id, Action::Restore, None, None).await
    }

    /// Converts a contact into an agent. `data` may carry agent attributes
    /// such as `occasional` or `ticket_scope`.
    pub async fn make_agent(
        &self,
        id: impl Into<ResourceId>,
        data: Option<&Record>,
    ) -> Result<Value, FreshdeskError> {
        self.resource
            .perform(id, Action::MakeAgent, data, None)
            .await
    }
}
