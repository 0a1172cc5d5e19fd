//! Ticket facade.

use std::ops::Deref;

use serde_json::Value;

use super::{Action, Resource, TICKETS, TICKET_FIELDS};
use crate::dispatch::Dispatch;
use crate::error::FreshdeskError;
use crate::models::{Query, Record, ResourceId};

/// Tickets: the five CRUD operations plus restore, fields, conversations,
/// time entries, replies and notes.
///
/// # Example
///
/// ```ignore
/// let open = client
///     .tickets()
///     .all(Some(&Query::new().with("filter", "new_and_my_open")))
///     .await?;
/// client.tickets().restore(7).await?;
/// ```
pub struct Tickets<'a, D: ?Sized> {
    resource: Resource<'a, D>,
}

impl<'a, D: ?Sized> Deref for Tickets<'a, D> {
    type Target = Resource<'a, D>;

    fn deref(&self) -> &Self::Target {
        &self.resource
    }
}

impl<'a, D: Dispatch + ?Sized> Tickets<'a, D> {
    /// Creates the ticket facade.
    pub fn new(dispatcher: &'a D) -> Self {
        Self {
            resource: Resource::new(dispatcher, &TICKETS),
        }
    }

    /// Restores a deleted ticket.
    pub async fn restore(&self, id: impl Into<ResourceId>) -> Result<Value, FreshdeskError> {
        self.resource.perform(id, Action::Restore, None, None).await
    }

    /// Lists the ticket field definitions of the account.
    pub async fn fields(&self, query: Option<&Query>) -> Result<Value, FreshdeskError> {
        let fields = Resource::new(self.resource.dispatcher, &TICKET_FIELDS);
        fields.all(query).await
    }

    /// Lists the conversations (replies and notes) of a ticket.
    pub async fn conversations(
        &self,
        id: impl Into<ResourceId>,
        query: Option<&Query>,
    ) -> Result<Value, FreshdeskError> {
        self.resource
            .perform(id, Action::Conversations, None, query)
            .await
    }

    /// Lists the time entries logged against a ticket.
    pub async fn time_entries(
        &self,
        id: impl Into<ResourceId>,
        query: Option<&Query>,
    ) -> Result<Value, FreshdeskError> {
        self.resource
            .perform(id, Action::TimeEntries, None, query)
            .await
    }

    /// Sends a reply to the requester of a ticket.
    pub async fn reply(
        &self,
        id: impl Into<ResourceId>,
        data: &Record,
    ) -> Result<Value, FreshdeskError> {
        self.resource
            .perform(id, Action::Reply, Some(data), None)
            .await
    }

    /// Adds a note to a ticket.
    pub async fn note(
        &self,
        id: impl Into<ResourceId>,
        data: &Record,
    ) -> Result<Value, FreshdeskError> {
        self.resource
            .perform(id, Action::Note, Some(data), None)
            .await
    }
}
