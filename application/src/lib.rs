//! Application layer for roundtable
//!
//! This crate contains the event-dispatch use case and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::transcript_logger::{NoTranscriptLogger, TranscriptLogger, TranscriptRecord};
pub use ports::transport::{InboundEvent, NoOpSink, OutboundEvent, TransportError, TransportSink};
pub use use_cases::discussion::{DiscussionController, DiscussionState, SubmitError};
