//! Transcript domain entities

use crate::agent::AgentId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier for a transcript message, unique within a session.
///
/// Ids are allocated monotonically by the [`Transcript`](super::Transcript)
/// store — no two messages in a session ever compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MessageId(pub u64);

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Kind of a transcript message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    /// Text the human submitted
    User,
    /// A single agent's response (carries a sender)
    Agent,
    /// Inter-agent discussion content relayed by the server
    Discussion,
    /// The agreed consensus for the round
    Consensus,
    /// The execution result that closes the round
    Result,
    /// Error surfaced to the user (server-reported or synthesized locally)
    Error,
}

impl MessageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::User => "user",
            MessageKind::Agent => "agent",
            MessageKind::Discussion => "discussion",
            MessageKind::Consensus => "consensus",
            MessageKind::Result => "result",
            MessageKind::Error => "error",
        }
    }
}

/// A message in the transcript (Entity)
///
/// Immutable once created. `created_at` is display-only: the transcript's
/// sequence order is the causal order, and clock skew between producers must
/// never reorder the log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub kind: MessageKind,
    /// Present only when `kind` is [`MessageKind::Agent`]
    pub sender: Option<AgentId>,
    /// Verbatim text body; may contain embedded newlines
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub(crate) fn new(
        id: MessageId,
        kind: MessageKind,
        sender: Option<AgentId>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id,
            kind,
            sender,
            content: content.into(),
            created_at: Utc::now(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == MessageKind::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_as_str() {
        assert_eq!(MessageKind::User.as_str(), "user");
        assert_eq!(MessageKind::Consensus.as_str(), "consensus");
        assert_eq!(MessageKind::Result.as_str(), "result");
    }

    #[test]
    fn test_message_id_ordering() {
        assert!(MessageId(1) < MessageId(2));
        assert_ne!(MessageId(3), MessageId(4));
        assert_eq!(MessageId(7).to_string(), "#7");
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        let json = serde_json::to_string(&MessageKind::Discussion).unwrap();
        assert_eq!(json, "\"discussion\"");
    }
}
