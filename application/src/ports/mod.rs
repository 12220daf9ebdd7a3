//! Port definitions (interfaces to infrastructure adapters)

pub mod transcript_logger;
pub mod transport;
