//! Common state machine error types
//!
//! Shared across the domain crates that implement state machines.

use thiserror::Error;

use crate::error::Error as CommonError;

/// Errors that can occur during state transitions
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StateError {
    #[error("Invalid transition: cannot transition from {from} via {event}")]
    InvalidTransition { from: String, event: String },

    #[error("Guard condition failed: {0}")]
    GuardFailed(String),

    #[error("Terminal state: {0} is a terminal state and cannot transition")]
    TerminalState(String),
}

impl StateError {
    /// Map a rejected transition on `entity` into the shared error taxonomy.
    ///
    /// Guard failures mean a prior stage is missing, so they surface as
    /// preconditions; the rest are programming errors in the caller's sequence.
    pub fn into_error(self, entity: &str) -> CommonError {
        match self {
            StateError::InvalidTransition { from, event } => CommonError::Precondition(format!(
                "Invalid {} transition: cannot apply '{}' event from '{}' state",
                entity, event, from
            )),
            StateError::GuardFailed(msg) => CommonError::Precondition(msg),
            StateError::TerminalState(state) => CommonError::Precondition(format!(
                "{} is in terminal state '{}' and cannot transition",
                entity, state
            )),
        }
    }
}
