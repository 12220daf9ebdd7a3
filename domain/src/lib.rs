//! Domain layer for roundtable
//!
//! This crate contains the core state of a human / multi-agent discussion.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Transcript
//!
//! The append-only ordered log of everything shown to the user. Sequence
//! order is arrival order — timestamps are display-only and never reorder
//! the log.
//!
//! ## Agent Status
//!
//! Each cooperating agent has an activity state (idle/thinking/active/error)
//! and a last-activity timestamp, created lazily on first reference and
//! never removed for the life of the session.
//!
//! ## Discussion Phase
//!
//! A single process-wide value tracking the stage of the current round:
//! waiting → analyzing → discussing → consensus → executing →
//! completed | error.

pub mod agent;
pub mod core;
pub mod phase;
pub mod transcript;

// Re-export commonly used types
pub use agent::{AgentActivity, AgentId, AgentRegistry, AgentStatus};
pub use core::error::DomainError;
pub use phase::{DiscussionPhase, PhaseMachine};
pub use transcript::{Message, MessageId, MessageKind, Transcript};
