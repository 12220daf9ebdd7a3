//! Presentation layer for roundtable
//!
//! Renders read-only snapshots of the discussion state: the pure view
//! projector, the colored console formatter, the interactive chat REPL, and
//! the clap CLI definition.

pub mod cli;
pub mod console;
pub mod repl;
pub mod view;

// Re-export commonly used types
pub use cli::{Cli, Commands};
pub use console::ConsoleFormatter;
pub use repl::ChatRepl;
pub use view::{AgentBadge, DiscussionView, PhaseIndicator, PhaseStep, TranscriptLine, project};
