//! Agent identity and activity tracking

pub mod status;

pub use status::{AgentActivity, AgentId, AgentRegistry, AgentStatus};
