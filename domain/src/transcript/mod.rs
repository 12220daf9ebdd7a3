//! Transcript: the ordered, append-only log of the discussion

pub mod entities;
pub mod store;

pub use entities::{Message, MessageId, MessageKind};
pub use store::Transcript;
