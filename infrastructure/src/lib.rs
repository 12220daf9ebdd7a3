//! Infrastructure layer for roundtable
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: the wire codec and channel transport for the event
//! boundary, the scripted discussion simulator, the booking REST client,
//! JSONL transcript logging, and configuration file loading.

pub mod config;
pub mod logging;
pub mod rest;
pub mod transport;
pub mod wire;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig};
pub use logging::JsonlTranscriptLogger;
pub use rest::{ApiError, Booking, BookingApi, BookingDraft, Customer, DailyStats, Service, StaffMember};
pub use transport::{
    ChannelTransport, Delay, DiscussionSimulator, NoDelay, TokioDelay, transport_channel,
};
pub use wire::WireFrame;
