//! Discussion phase state machine

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Stage of the current discussion round
///
/// A single process-wide value with no history stack. `Completed` and
/// `Error` are terminal per round, not per session — submitting a new user
/// message restarts the machine at `Analyzing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscussionPhase {
    /// Initial state, before any round has started
    Waiting,
    /// The user's request is being analyzed
    Analyzing,
    /// Agents are discussing amongst themselves
    Discussing,
    /// Agents reached an agreement on how to proceed
    Consensus,
    /// The agreed plan is being executed
    Executing,
    /// Round finished successfully (terminal for the round)
    Completed,
    /// Round failed (terminal for the round, reachable from any state)
    Error,
}

impl DiscussionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiscussionPhase::Waiting => "waiting",
            DiscussionPhase::Analyzing => "analyzing",
            DiscussionPhase::Discussing => "discussing",
            DiscussionPhase::Consensus => "consensus",
            DiscussionPhase::Executing => "executing",
            DiscussionPhase::Completed => "completed",
            DiscussionPhase::Error => "error",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DiscussionPhase::Waiting => "Waiting for input",
            DiscussionPhase::Analyzing => "Analyzing request",
            DiscussionPhase::Discussing => "Agents discussing",
            DiscussionPhase::Consensus => "Consensus reached",
            DiscussionPhase::Executing => "Executing",
            DiscussionPhase::Completed => "Completed",
            DiscussionPhase::Error => "Error",
        }
    }

    /// Whether this phase ends the current round
    pub fn is_terminal(&self) -> bool {
        matches!(self, DiscussionPhase::Completed | DiscussionPhase::Error)
    }
}

impl std::fmt::Display for DiscussionPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for DiscussionPhase {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "waiting" => Ok(DiscussionPhase::Waiting),
            "analyzing" => Ok(DiscussionPhase::Analyzing),
            "discussing" => Ok(DiscussionPhase::Discussing),
            "consensus" => Ok(DiscussionPhase::Consensus),
            "executing" => Ok(DiscussionPhase::Executing),
            "completed" => Ok(DiscussionPhase::Completed),
            "error" => Ok(DiscussionPhase::Error),
            other => Err(DomainError::UnknownPhase(other.to_string())),
        }
    }
}

/// Holder of the single current phase (Entity)
///
/// The machine is permissive: any transition is accepted from any state.
/// The server is authoritative for phases it reports, and the UI favors
/// availability over strict protocol conformance, so an unexpected trigger
/// is applied rather than rejected.
#[derive(Debug, Clone)]
pub struct PhaseMachine {
    current: DiscussionPhase,
}

impl Default for PhaseMachine {
    fn default() -> Self {
        Self {
            current: DiscussionPhase::Waiting,
        }
    }
}

impl PhaseMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> DiscussionPhase {
        self.current
    }

    /// Apply a phase unconditionally
    pub fn force(&mut self, phase: DiscussionPhase) {
        self.current = phase;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_phase_is_waiting() {
        assert_eq!(PhaseMachine::new().current(), DiscussionPhase::Waiting);
    }

    #[test]
    fn test_any_transition_is_accepted() {
        let mut machine = PhaseMachine::new();
        // Out-of-order per the nominal lifecycle, still applied verbatim
        machine.force(DiscussionPhase::Executing);
        assert_eq!(machine.current(), DiscussionPhase::Executing);
        machine.force(DiscussionPhase::Analyzing);
        assert_eq!(machine.current(), DiscussionPhase::Analyzing);
    }

    #[test]
    fn test_round_restart_from_terminal_state() {
        let mut machine = PhaseMachine::new();
        machine.force(DiscussionPhase::Completed);
        assert!(machine.current().is_terminal());

        machine.force(DiscussionPhase::Analyzing);
        assert_eq!(machine.current(), DiscussionPhase::Analyzing);
        assert!(!machine.current().is_terminal());
    }

    #[test]
    fn test_parse_server_phase_strings() {
        for name in [
            "waiting",
            "analyzing",
            "discussing",
            "consensus",
            "executing",
            "completed",
            "error",
        ] {
            let phase: DiscussionPhase = name.parse().unwrap();
            assert_eq!(phase.as_str(), name);
        }
    }

    #[test]
    fn test_parse_unknown_phase_fails() {
        let err = "negotiating".parse::<DiscussionPhase>().unwrap_err();
        assert_eq!(err, DomainError::UnknownPhase("negotiating".to_string()));
    }

    #[test]
    fn test_terminal_states() {
        assert!(DiscussionPhase::Completed.is_terminal());
        assert!(DiscussionPhase::Error.is_terminal());
        assert!(!DiscussionPhase::Consensus.is_terminal());
        assert!(!DiscussionPhase::Waiting.is_terminal());
    }
}
