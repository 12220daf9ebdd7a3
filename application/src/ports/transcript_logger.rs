//! Port for structured transcript logging.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostics, while this port captures what the user saw —
//! appended messages and phase changes — in a machine-readable form (JSONL).

use roundtable_domain::{DiscussionPhase, Message};

/// One loggable transcript record
#[derive(Debug, Clone)]
pub enum TranscriptRecord {
    /// A message was appended to the transcript
    Message(Message),
    /// The discussion phase changed
    PhaseChange(DiscussionPhase),
}

/// Port for recording transcript records to a structured log.
///
/// Implementations write each record as a single entry (e.g. one JSONL
/// line). `log` is intentionally synchronous and infallible so logging never
/// disrupts event dispatch — write failures are swallowed by the adapter.
pub trait TranscriptLogger: Send + Sync {
    fn log(&self, record: TranscriptRecord);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoTranscriptLogger;

impl TranscriptLogger for NoTranscriptLogger {
    fn log(&self, _record: TranscriptRecord) {}
}
