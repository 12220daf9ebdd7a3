//! Read-only projection of the discussion state
//!
//! `project` turns a [`DiscussionState`] snapshot into plain display data so
//! rendering code never touches the domain types directly.

use roundtable_application::DiscussionState;
use roundtable_domain::{AgentActivity, DiscussionPhase, MessageKind};

/// Everything a renderer needs to draw one frame of the discussion
#[derive(Debug, Clone)]
pub struct DiscussionView {
    /// Transcript lines in arrival order
    pub lines: Vec<TranscriptLine>,
    /// One badge per known agent, sorted by name
    pub agents: Vec<AgentBadge>,
    /// Current phase and the round step markers
    pub phase: PhaseIndicator,
    /// Whether the transport is currently connected
    pub connected: bool,
}

/// A single rendered transcript entry
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptLine {
    pub kind: MessageKind,
    /// Speaker label ("You", agent name, or the entry category)
    pub label: String,
    pub content: String,
    /// Wall-clock arrival time, `HH:MM:SS` UTC
    pub timestamp: String,
}

/// Per-agent status for the roster display
#[derive(Debug, Clone, PartialEq)]
pub struct AgentBadge {
    pub name: String,
    pub activity: AgentActivity,
    /// Last time this agent produced activity, `HH:MM:SS` UTC
    pub last_activity: Option<String>,
}

/// Current phase plus the four round steps for a progress strip
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseIndicator {
    pub current: DiscussionPhase,
    pub label: String,
    pub steps: Vec<PhaseStep>,
}

/// One step in the analyzing -> executing progress strip
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseStep {
    pub phase: DiscussionPhase,
    pub active: bool,
}

const ROUND_STEPS: [DiscussionPhase; 4] = [
    DiscussionPhase::Analyzing,
    DiscussionPhase::Discussing,
    DiscussionPhase::Consensus,
    DiscussionPhase::Executing,
];

/// Project a state snapshot into display data.
pub fn project(state: &DiscussionState) -> DiscussionView {
    let lines = state
        .transcript()
        .snapshot()
        .iter()
        .map(|message| TranscriptLine {
            kind: message.kind,
            label: line_label(message.kind, message.sender.as_ref().map(|a| a.as_str())),
            content: message.content.clone(),
            timestamp: message.created_at.format("%H:%M:%S").to_string(),
        })
        .collect();

    let agents = state
        .agents()
        .iter()
        .map(|(id, status)| AgentBadge {
            name: id.as_str().to_string(),
            activity: status.activity,
            last_activity: status
                .last_activity_at
                .map(|at| at.format("%H:%M:%S").to_string()),
        })
        .collect();

    let current = state.phase();
    let phase = PhaseIndicator {
        current,
        label: current.display_name().to_string(),
        steps: ROUND_STEPS
            .iter()
            .map(|&step| PhaseStep {
                phase: step,
                active: step == current,
            })
            .collect(),
    };

    DiscussionView {
        lines,
        agents,
        phase,
        connected: state.is_connected(),
    }
}

fn line_label(kind: MessageKind, sender: Option<&str>) -> String {
    match kind {
        MessageKind::User => "You".to_string(),
        MessageKind::Agent => sender.unwrap_or("agent").to_string(),
        MessageKind::Discussion => "Discussion".to_string(),
        MessageKind::Consensus => "Consensus".to_string(),
        MessageKind::Result => "Result".to_string(),
        MessageKind::Error => "Error".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roundtable_application::{DiscussionController, InboundEvent, NoOpSink};
    use roundtable_domain::AgentId;

    fn controller() -> DiscussionController {
        DiscussionController::new(
            std::sync::Arc::new(NoOpSink),
            vec![AgentId::new("manus").unwrap(), AgentId::new("aiin").unwrap()],
        )
    }

    #[test]
    fn test_empty_state_projects_roster_and_waiting_phase() {
        let controller = controller();
        let view = project(controller.state());

        assert!(view.lines.is_empty());
        assert_eq!(view.agents.len(), 2);
        assert_eq!(view.agents[0].name, "aiin");
        assert_eq!(view.agents[0].activity, AgentActivity::Idle);
        assert_eq!(view.phase.current, DiscussionPhase::Waiting);
        assert_eq!(view.phase.label, "Waiting for input");
        assert!(!view.connected);
        assert!(view.phase.steps.iter().all(|s| !s.active));
    }

    #[test]
    fn test_agent_response_projects_labeled_line() {
        let mut controller = controller();
        controller.apply(InboundEvent::Connected { message: None });
        controller.apply(InboundEvent::AgentResponse {
            agent: AgentId::new("manus").unwrap(),
            content: "I suggest option A".to_string(),
        });

        let view = project(controller.state());
        assert_eq!(view.lines.len(), 1);
        assert_eq!(view.lines[0].label, "manus");
        assert_eq!(view.lines[0].kind, MessageKind::Agent);
        assert_eq!(view.lines[0].content, "I suggest option A");
        assert!(view.connected);
    }

    #[test]
    fn test_active_step_follows_phase() {
        let mut controller = controller();
        controller.apply(InboundEvent::Connected { message: None });
        controller.apply(InboundEvent::DiscussionUpdate {
            phase: DiscussionPhase::Discussing,
            content: None,
        });

        let view = project(controller.state());
        let active: Vec<_> = view
            .phase
            .steps
            .iter()
            .filter(|s| s.active)
            .map(|s| s.phase)
            .collect();
        assert_eq!(active, vec![DiscussionPhase::Discussing]);
    }
}
