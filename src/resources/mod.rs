//! Resource facades.
//!
//! Every Freshdesk resource shares the same five operations, so they are
//! served by one generic [`Resource`] parameterized by a [`ResourceKind`]:
//! the base path plus the extra [`Action`]s the resource supports.
//! Resources with extra operations get a thin typed wrapper
//! ([`Tickets`], [`Contacts`], [`Agents`]) that dereferences to the
//! generic facade.
//!
//! | Operation | Method | Path                       |
//! |-----------|--------|----------------------------|
//! | create    | POST   | `/{resource}`              |
//! | all       | GET    | `/{resource}?{query}`      |
//! | view      | GET    | `/{resource}/{id}?{query}` |
//! | update    | PUT    | `/{resource}/{id}`         |
//! | delete    | DELETE | `/{resource}/{id}`         |
//!
//! Facades are transparent: they return the dispatcher's payload as-is and
//! never catch, wrap or retry its errors.

mod agents;
mod contacts;
mod tickets;

pub use agents::Agents;
pub use contacts::Contacts;
pub use tickets::Tickets;

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::dispatch::{Dispatch, Method};
use crate::error::FreshdeskError;
use crate::models::{to_record, Query, Record, ResourceId};

/// An operation that addresses a sub-path of a single resource,
/// e.g. `PUT /tickets/{id}/restore`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Restore a deleted resource.
    Restore,
    /// List the conversations of a ticket.
    Conversations,
    /// List the time entries of a ticket.
    TimeEntries,
    /// Reply to a ticket.
    Reply,
    /// Add a note to a ticket.
    Note,
    /// Convert a contact into an agent.
    MakeAgent,
}

impl Action {
    /// HTTP method used for the action.
    pub fn method(self) -> Method {
        match self {
            Action::Restore | Action::MakeAgent => Method::PUT,
            Action::Conversations | Action::TimeEntries => Method::GET,
            Action::Reply | Action::Note => Method::POST,
        }
    }

    /// Path segment appended after the identifier.
    pub fn suffix(self) -> &'static str {
        match self {
            Action::Restore => "restore",
            Action::Conversations => "conversations",
            Action::TimeEntries => "time_entries",
            Action::Reply => "reply",
            Action::Note => "notes",
            Action::MakeAgent => "make_agent",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Static description of a remote resource type.
#[derive(Debug, PartialEq, Eq)]
pub struct ResourceKind {
    /// Base path, e.g. `/tickets`.
    pub path: &'static str,
    /// Extra actions the resource supports.
    pub actions: &'static [Action],
}

impl ResourceKind {
    /// Returns true if `action` is available on this resource.
    pub fn supports(&self, action: Action) -> bool {
        self.actions.contains(&action)
    }
}

/// Support groups.
pub static GROUPS: ResourceKind = ResourceKind {
    path: "/groups",
    actions: &[],
};

/// Tickets.
pub static TICKETS: ResourceKind = ResourceKind {
    path: "/tickets",
    actions: &[
        Action::Restore,
        Action::Conversations,
        Action::TimeEntries,
        Action::Reply,
        Action::Note,
    ],
};

/// Ticket field definitions.
pub static TICKET_FIELDS: ResourceKind = ResourceKind {
    path: "/ticket_fields",
    actions: &[],
};

/// Contacts.
pub static CONTACTS: ResourceKind = ResourceKind {
    path: "/contacts",
    actions: &[Action::Restore, Action::MakeAgent],
};

/// Companies.
pub static COMPANIES: ResourceKind = ResourceKind {
    path: "/companies",
    actions: &[],
};

/// Agents.
pub static AGENTS: ResourceKind = ResourceKind {
    path: "/agents",
    actions: &[],
};

/// Facade for groups.
pub type Groups<'a, D> = Resource<'a, D>;

/// Facade for companies.
pub type Companies<'a, D> = Resource<'a, D>;

/// Generic facade over one resource type.
pub struct Resource<'a, D: ?Sized> {
    dispatcher: &'a D,
    kind: &'static ResourceKind,
}

impl<D: ?Sized> Clone for Resource<'_, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: ?Sized> Copy for Resource<'_, D> {}

impl<'a, D: Dispatch + ?Sized> Resource<'a, D> {
    /// Creates a facade for `kind` backed by `dispatcher`.
    pub fn new(dispatcher: &'a D, kind: &'static ResourceKind) -> Self {
        Self { dispatcher, kind }
    }

    /// The resource this facade addresses.
    pub fn kind(&self) -> &'static ResourceKind {
        self.kind
    }

    pub(crate) fn endpoint(&self, suffix: Option<&str>) -> String {
        self.dispatcher.create_endpoint(self.kind.path, suffix)
    }

    fn id_endpoint(
        &self,
        id: &ResourceId,
        sub_path: Option<&str>,
    ) -> Result<String, FreshdeskError> {
        let id = id.validate()?;
        let suffix = match sub_path {
            Some(sub) => format!("{}/{}", id, sub),
            None => id.to_string(),
        };
        Ok(self.endpoint(Some(&suffix)))
    }

    pub(crate) async fn send(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&Record>,
        query: Option<&Query>,
    ) -> Result<Value, FreshdeskError> {
        let query = query.filter(|q| !q.is_empty());
        self.dispatcher.request(method, endpoint, body, query).await
    }

    /// Creates a resource.
    pub async fn create(&self, data: &Record) -> Result<Value, FreshdeskError> {
        let endpoint = self.endpoint(None);
        self.send(Method::POST, &endpoint, Some(data), None).await
    }

    /// Creates a resource from any value that serializes to a JSON object.
    ///
    /// # Errors
    ///
    /// Returns `FreshdeskError::InvalidInput` without dispatching if `data`
    /// serializes to `null` or to anything other than an object.
    pub async fn create_from<T>(&self, data: &T) -> Result<Value, FreshdeskError>
    where
        T: Serialize + Sync + ?Sized,
    {
        let record = to_record(data)?;
        self.create(&record).await
    }

    /// Lists resources, optionally filtered by `query`.
    pub async fn all(&self, query: Option<&Query>) -> Result<Value, FreshdeskError> {
        let endpoint = self.endpoint(None);
        self.send(Method::GET, &endpoint, None, query).await
    }

    /// Fetches one resource by identifier.
    pub async fn view(
        &self,
        id: impl Into<ResourceId>,
        query: Option<&Query>,
    ) -> Result<Value, FreshdeskError> {
        let endpoint = self.id_endpoint(&id.into(), None)?;
        self.send(Method::GET, &endpoint, None, query).await
    }

    /// Updates a resource. Only the fields present in `data` change.
    pub async fn update(
        &self,
        id: impl Into<ResourceId>,
        data: Option<&Record>,
    ) -> Result<Value, FreshdeskError> {
        let endpoint = self.id_endpoint(&id.into(), None)?;
        self.send(Method::PUT, &endpoint, data, None).await
    }

    /// Deletes a resource.
    pub async fn delete(&self, id: impl Into<ResourceId>) -> Result<Value, FreshdeskError> {
        let endpoint = self.id_endpoint(&id.into(), None)?;
        self.send(Method::DELETE, &endpoint, None, None).await
    }

    /// Runs an extra action against one resource.
    ///
    /// # Errors
    ///
    /// Returns `FreshdeskError::InvalidInput` without dispatching if the
    /// resource does not support `action`.
    pub async fn perform(
        &self,
        id: impl Into<ResourceId>,
        action: Action,
        body: Option<&Record>,
        query: Option<&Query>,
    ) -> Result<Value, FreshdeskError> {
        if !self.kind.supports(action) {
            return Err(FreshdeskError::invalid_input(format!(
                "{} does not support {}",
                self.kind.path, action
            )));
        }
        let endpoint = self.id_endpoint(&id.into(), Some(action.suffix()))?;
        tracing::debug!(resource = self.kind.path, action = %action, "performing resource action");
        self.send(action.method(), &endpoint, body, query).await
    }
}

/// Resource facades for anything that can dispatch requests.
///
/// Implemented for every [`Dispatch`] type, so both
/// [`FreshdeskClient`](crate::client::FreshdeskClient) and custom
/// dispatchers expose the same API.
pub trait Resources: Dispatch {
    /// Support groups.
    fn groups(&self) -> Groups<'_, Self> {
        Resource::new(self, &GROUPS)
    }

    /// Tickets.
    fn tickets(&self) -> Tickets<'_, Self> {
        Tickets::new(self)
    }

    /// Contacts.
    fn contacts(&self) -> Contacts<'_, Self> {
        Contacts::new(self)
    }

    /// Companies.
    fn companies(&self) -> Companies<'_, Self> {
        Resource::new(self, &COMPANIES)
    }

    /// Agents.
    fn agents(&self) -> Agents<'_, Self> {
        Agents::new(self)
    }
}

impl<D: Dispatch + ?Sized> Resources for D {}
