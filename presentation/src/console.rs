//! Console output formatter for the discussion view

use crate::view::{AgentBadge, DiscussionView, PhaseIndicator, TranscriptLine};
use colored::Colorize;
use roundtable_domain::{AgentActivity, MessageKind};

/// Formats discussion view data for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format one transcript line as `[HH:MM:SS] label: content`
    pub fn format_line(line: &TranscriptLine) -> String {
        let label = match line.kind {
            MessageKind::User => line.label.bold().to_string(),
            MessageKind::Agent => line.label.cyan().bold().to_string(),
            MessageKind::Discussion => line.label.yellow().to_string(),
            MessageKind::Consensus => line.label.green().bold().to_string(),
            MessageKind::Result => line.label.green().to_string(),
            MessageKind::Error => line.label.red().bold().to_string(),
        };

        let mut output = format!("[{}] {}: ", line.timestamp.dimmed(), label);
        if line.content.contains('\n') {
            output.push('\n');
            output.push_str(&Self::indent(&line.content, "  "));
        } else {
            output.push_str(&line.content);
        }
        output
    }

    /// Format the phase progress strip, e.g.
    /// `Analyzing > [Discussing] > Consensus > Executing`
    pub fn format_phase(phase: &PhaseIndicator) -> String {
        let strip = phase
            .steps
            .iter()
            .map(|step| {
                let name = step.phase.display_name();
                if step.active {
                    format!("[{}]", name).yellow().bold().to_string()
                } else {
                    name.dimmed().to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" > ");

        format!("{} {}", "Phase:".cyan().bold(), strip)
    }

    /// Format the agent roster, one agent per line
    pub fn format_agents(agents: &[AgentBadge]) -> String {
        let mut output = String::new();
        for badge in agents {
            let activity = match badge.activity {
                AgentActivity::Idle => badge.activity.as_str().dimmed().to_string(),
                AgentActivity::Thinking => badge.activity.as_str().yellow().to_string(),
                AgentActivity::Active => badge.activity.as_str().green().to_string(),
                AgentActivity::Error => badge.activity.as_str().red().to_string(),
            };
            output.push_str(&format!("  {} - {}", badge.name.bold(), activity));
            if let Some(ref at) = badge.last_activity {
                output.push_str(&format!(" (last seen {})", at).dimmed().to_string());
            }
            output.push('\n');
        }
        output
    }

    /// Format the connection indicator
    pub fn format_connection(connected: bool) -> String {
        if connected {
            "● connected".green().to_string()
        } else {
            "○ disconnected".red().to_string()
        }
    }

    /// Format a full status block (connection, phase, agents)
    pub fn format_status(view: &DiscussionView) -> String {
        format!(
            "{}\n{}\nAgents:\n{}",
            Self::format_connection(view.connected),
            Self::format_phase(&view.phase),
            Self::format_agents(&view.agents)
        )
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roundtable_domain::DiscussionPhase;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_format_line_single_line() {
        plain();
        let line = TranscriptLine {
            kind: MessageKind::Agent,
            label: "manus".to_string(),
            content: "option A looks best".to_string(),
            timestamp: "12:00:01".to_string(),
        };
        assert_eq!(
            ConsoleFormatter::format_line(&line),
            "[12:00:01] manus: option A looks best"
        );
    }

    #[test]
    fn test_format_line_multiline_indents() {
        plain();
        let line = TranscriptLine {
            kind: MessageKind::Result,
            label: "Result".to_string(),
            content: "step 1\nstep 2".to_string(),
            timestamp: "12:00:09".to_string(),
        };
        let output = ConsoleFormatter::format_line(&line);
        assert!(output.ends_with("  step 1\n  step 2"));
    }

    #[test]
    fn test_format_phase_marks_active_step() {
        plain();
        let phase = PhaseIndicator {
            current: DiscussionPhase::Consensus,
            label: "Consensus reached".to_string(),
            steps: vec![
                crate::view::PhaseStep {
                    phase: DiscussionPhase::Analyzing,
                    active: false,
                },
                crate::view::PhaseStep {
                    phase: DiscussionPhase::Consensus,
                    active: true,
                },
            ],
        };
        let output = ConsoleFormatter::format_phase(&phase);
        assert!(output.contains("[Consensus reached]"));
        assert!(output.contains("Analyzing request"));
    }

    #[test]
    fn test_format_agents_lists_activity() {
        plain();
        let agents = vec![AgentBadge {
            name: "aiin".to_string(),
            activity: AgentActivity::Thinking,
            last_activity: Some("12:00:02".to_string()),
        }];
        let output = ConsoleFormatter::format_agents(&agents);
        assert!(output.contains("aiin - thinking"));
        assert!(output.contains("last seen 12:00:02"));
    }
}
