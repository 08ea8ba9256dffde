//! Page phases and the legal moves between them

use serde::{Deserialize, Serialize};
use std::fmt;

/// Page-level phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Nothing submitted yet
    Idle,
    /// Request outstanding; inputs locked
    Pending,
    /// Latest response shown
    Ready,
    /// Latest request failed; resubmission allowed
    Failed,
}

impl Phase {
    /// Inputs and submit control disabled
    #[inline]
    #[must_use]
    pub fn is_locked(self) -> bool {
        matches!(self, Phase::Pending)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Idle => "idle",
            Phase::Pending => "pending",
            Phase::Ready => "ready",
            Phase::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Validates a phase transition.
///
/// An invalid submission is not a transition; the phase is left alone.
///
/// # Errors
/// `StateError::IllegalTransition` if `to` is not reachable from `from`.
pub fn validate_transition(from: Phase, to: Phase) -> Result<(), StateError> {
    if allowed_transitions(from).contains(&to) {
        Ok(())
    } else {
        Err(StateError::IllegalTransition { from, to })
    }
}

/// Phases reachable from `from` in one step
#[must_use]
pub fn allowed_transitions(from: Phase) -> Vec<Phase> {
    use Phase::*;
    match from {
        Idle => vec![Pending],
        Pending => vec![Ready, Failed],
        Ready => vec![Pending],
        Failed => vec![Pending],
    }
}

/// Phase machine errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    /// Transition not in the table
    #[error("illegal phase transition: {from} -> {to}")]
    IllegalTransition {
        /// Current phase
        from: Phase,
        /// Requested phase
        to: Phase,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_pending_is_locked() {
        assert!(Phase::Pending.is_locked());
        assert!(!Phase::Idle.is_locked());
        assert!(!Phase::Ready.is_locked());
        assert!(!Phase::Failed.is_locked());
    }

    #[test]
    fn pending_has_no_way_back_to_idle() {
        assert!(validate_transition(Phase::Pending, Phase::Idle).is_err());
        assert!(validate_transition(Phase::Pending, Phase::Pending).is_err());
    }

    #[test]
    fn error_names_both_phases() {
        let err = validate_transition(Phase::Idle, Phase::Ready).unwrap_err();
        assert_eq!(err.to_string(), "illegal phase transition: idle -> ready");
    }
}
