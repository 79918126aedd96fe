//! State machine for storyboard version locking
//!
//! A registered storyboard version starts as a draft. Locking is the only
//! mutation permitted to an existing version and it is irreversible:
//! - Draft → Locked on `Lock`
//! - Locked → Locked on `Lock` (re-lock, the label is bumped again)
//! - `Promote` (hi-fi render from this version) is guarded on Locked

pub use admock_common::StateError;

// ============================================================================
// Storyboard Version State Machine
// ============================================================================

/// Lock states of a storyboard version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VersionState {
    Draft,
    Locked,
}

impl VersionState {
    /// No transition leaves Locked
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Locked)
    }

    /// Get all valid next states from current state
    pub fn valid_transitions(&self) -> &'static [VersionState] {
        match self {
            Self::Draft => &[Self::Locked],
            Self::Locked => &[Self::Locked],
        }
    }
}

impl std::fmt::Display for VersionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Draft => write!(f, "draft"),
            Self::Locked => write!(f, "locked"),
        }
    }
}

/// Events that act on a storyboard version
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VersionEvent {
    /// Mark the version as ready for hi-fi rendering
    Lock,
    /// Derive a hi-fi storyboard from this version
    Promote,
}

impl std::fmt::Display for VersionEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lock => write!(f, "lock"),
            Self::Promote => write!(f, "promote"),
        }
    }
}

/// Storyboard version state machine
pub struct VersionStateMachine;

impl VersionStateMachine {
    /// Attempt a state transition
    pub fn transition(
        current: VersionState,
        event: VersionEvent,
    ) -> Result<VersionState, StateError> {
        let next = match (&current, &event) {
            (VersionState::Draft, VersionEvent::Lock) => VersionState::Locked,
            (VersionState::Locked, VersionEvent::Lock) => VersionState::Locked,

            (VersionState::Draft, VersionEvent::Promote) => {
                return Err(StateError::GuardFailed(
                    "Storyboard must be locked before hi-fi render".to_string(),
                ));
            }
            (VersionState::Locked, VersionEvent::Promote) => VersionState::Locked,
        };

        Ok(next)
    }

    /// Check if a transition is valid without performing it
    pub fn can_transition(current: VersionState, event: &VersionEvent) -> bool {
        Self::transition(current, *event).is_ok()
    }
}

// ============================================================================
// Tests
// ============================================================================
