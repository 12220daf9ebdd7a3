//! Transport boundary port
//!
//! The transport channel itself lives behind this port: it delivers named
//! events at-least-once with no ordering guarantee across event types, and
//! carries our outbound `user_message` frames. Adapters (the channel
//! transport and its wire codec) live in the infrastructure layer.

use roundtable_domain::{AgentId, DiscussionPhase};
use thiserror::Error;

/// Errors that can occur when handing an event to the transport
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Transport channel closed")]
    Closed,

    #[error("Send failed: {0}")]
    SendFailed(String),
}

/// One inbound named event from the transport boundary, fully validated.
///
/// One variant per named event so handling is exhaustively matched —
/// missing-field bugs surface at decode time as [`InboundEvent::Malformed`],
/// never as a silently dropped signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundEvent {
    /// Channel became usable (`connect` / `connected`)
    Connected { message: Option<String> },
    /// One agent's response (`ai_response`)
    AgentResponse { agent: AgentId, content: String },
    /// Server-driven phase change, optionally with discussion content
    /// (`discussion_update`)
    DiscussionUpdate {
        phase: DiscussionPhase,
        content: Option<String>,
    },
    /// Agents agreed on a plan (`consensus_reached`)
    ConsensusReached { content: String },
    /// Round finished (`execution_result`)
    ExecutionResult { content: String },
    /// Server-reported error (`error`)
    ServerError { message: String },
    /// Channel dropped (`disconnect`)
    Disconnected,
    /// Channel could not be (re-)established (`connect_error`)
    ConnectError { error: String },
    /// An event that arrived but could not be validated. Degrades to a
    /// synthesized transcript error entry instead of being dropped.
    Malformed { event: String, detail: String },
}

/// Outbound events emitted toward the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutboundEvent {
    /// The user's request, opening a new discussion round (`user_message`)
    UserMessage {
        content: String,
        /// Unix milliseconds at submit time
        timestamp: i64,
    },
}

/// Sink for outbound events
///
/// `send` enqueues and returns immediately; it never blocks and never awaits
/// a response. Retry/backoff, if any, is the transport's own concern — the
/// dispatcher only reflects connectivity into UI-observable state.
pub trait TransportSink: Send + Sync {
    fn send(&self, event: OutboundEvent) -> Result<(), TransportError>;
}

/// Sink that silently drops every outbound event (offline viewing, tests)
pub struct NoOpSink;

impl TransportSink for NoOpSink {
    fn send(&self, _event: OutboundEvent) -> Result<(), TransportError> {
        Ok(())
    }
}
