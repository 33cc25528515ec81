//! Pending, fulfilled and rejected bookkeeping shared by every container.
//!
//! In-flight state is keyed by [`OperationKey`], the kind of the operation plus the id of the
//! record it targets. Starting an operation hands out a [`Ticket`]; settling it with a ticket
//! that a newer start of the same key has superseded changes nothing, so two racing operations
//! never leave stale loading or error state behind.

use crate::FALLBACK_MESSAGE;
use displaydoc::Display;
use std::{collections::HashMap, fmt};
use thiserror::Error;

/// The kind of an asynchronous operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Fetch,
    Create,
    Update,
    Delete,
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Fetch => "fetch",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        })
    }
}

/// Identifies an operation for in-flight tracking.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OperationKey {
    pub kind: OperationKind,
    /// Id of the targeted record. `None` for operations on the collection as a whole.
    pub target: Option<String>,
}

impl OperationKey {
    pub fn fetch() -> Self {
        Self {
            kind: OperationKind::Fetch,
            target: None,
        }
    }

    pub fn create() -> Self {
        Self {
            kind: OperationKind::Create,
            target: None,
        }
    }

    pub fn update<S: Into<String>>(id: S) -> Self {
        Self {
            kind: OperationKind::Update,
            target: Some(id.into()),
        }
    }

    pub fn delete<S: Into<String>>(id: S) -> Self {
        Self {
            kind: OperationKind::Delete,
            target: Some(id.into()),
        }
    }
}

impl fmt::Display for OperationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.target {
            Some(target) => write!(f, "{} {}", self.kind, target),
            None => write!(f, "{}", self.kind),
        }
    }
}

/// Proof of a started operation, used to settle it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[must_use = "an operation is only settled through its ticket"]
pub struct Ticket {
    key: OperationKey,
    serial: u64,
}

impl Ticket {
    pub fn key(&self) -> &OperationKey {
        &self.key
    }
}

/// Outcome of the most recent create operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddStatus {
    Idle,
    Pending,
    Succeeded,
    Failed,
}

impl Default for AddStatus {
    fn default() -> Self {
        Self::Idle
    }
}

// Error returned by a rejected container operation. Carries the message stored as the
// container's error.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Error)]
/// {0}
pub struct Rejected(pub String);

impl Rejected {
    pub fn message(&self) -> &str {
        &self.0
    }
}

/// State of one lifecycle container: what is in flight, the last error and the add status.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Lifecycle {
    serial: u64,
    in_flight: HashMap<OperationKey, u64>,
    error: Option<String>,
    add_status: AddStatus,
}

impl Lifecycle {
    /// Marks an operation pending and clears the previous error.
    pub fn begin(&mut self, key: OperationKey) -> Ticket {
        self.serial += 1;
        self.error = None;
        if key.kind == OperationKind::Create {
            self.add_status = AddStatus::Pending;
        }
        self.in_flight.insert(key.clone(), self.serial);
        Ticket {
            key,
            serial: self.serial,
        }
    }

    fn settle(&mut self, ticket: &Ticket) -> bool {
        match self.in_flight.get(&ticket.key) {
            Some(serial) if *serial == ticket.serial => {
                self.in_flight.remove(&ticket.key);
                true
            }
            _ => {
                tracing::debug!(operation = %ticket.key, "ignoring superseded settlement");
                false
            }
        }
    }

    /// Marks an operation fulfilled.
    ///
    /// Returns `false` without changing anything if the ticket has been superseded; the caller
    /// must then discard the payload.
    pub fn fulfill(&mut self, ticket: &Ticket) -> bool {
        if !self.settle(ticket) {
            return false;
        }
        self.error = None;
        if ticket.key.kind == OperationKind::Create {
            self.add_status = AddStatus::Succeeded;
        }
        true
    }

    /// Marks an operation rejected and stores its message.
    ///
    /// A blank message is replaced by [`FALLBACK_MESSAGE`]. Returns `false` without changing
    /// anything if the ticket has been superseded.
    pub fn reject<S: Into<String>>(&mut self, ticket: &Ticket, message: S) -> bool {
        if !self.settle(ticket) {
            return false;
        }
        let mut message = message.into();
        if message.trim().is_empty() {
            message = FALLBACK_MESSAGE.to_owned();
        }
        tracing::warn!(operation = %ticket.key, error = %message, "operation rejected");
        if ticket.key.kind == OperationKind::Create {
            self.add_status = AddStatus::Failed;
        }
        self.error = Some(message);
        true
    }

    /// Returns whether any operation is in flight.
    pub fn is_loading(&self) -> bool {
        !self.in_flight.is_empty()
    }

    /// Returns whether the given operation is in flight.
    pub fn is_pending(&self, key: &OperationKey) -> bool {
        self.in_flight.contains_key(key)
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn add_status(&self) -> AddStatus {
        self.add_status
    }

    /// Settles an operation from its result, returning the stored outcome.
    ///
    /// Superseded results are still handed back to the caller, but leave the state untouched.
    pub fn complete<T, E>(
        &mut self,
        ticket: &Ticket,
        result: crate::Result<T, E>,
    ) -> Result<T, Rejected>
    where
        E: fmt::Display,
    {
        match result {
            Ok(value) => {
                self.fulfill(ticket);
                Ok(value)
            }
            Err(e) => {
                let message = e.message();
                self.reject(ticket, message.clone());
                Err(Rejected(message))
            }
        }
    }
}
