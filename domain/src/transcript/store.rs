//! Append-only transcript store

use super::entities::{Message, MessageId, MessageKind};
use crate::agent::AgentId;

/// The ordered, append-only log of all messages shown to the user (Entity)
///
/// Sequence order IS the causal/display order: messages appear in arrival
/// order regardless of their `created_at` values. Appending never fails and
/// is O(1) amortized; there is no removal or in-place mutation.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    entries: Vec<Message>,
    next_id: u64,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Full ordered sequence. Callers must treat it as append-only and never
    /// mutate entries in place.
    pub fn snapshot(&self) -> &[Message] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.entries.last()
    }

    pub fn push_user(&mut self, content: impl Into<String>) -> &Message {
        self.append(MessageKind::User, None, content)
    }

    pub fn push_agent(&mut self, sender: AgentId, content: impl Into<String>) -> &Message {
        self.append(MessageKind::Agent, Some(sender), content)
    }

    pub fn push_discussion(&mut self, content: impl Into<String>) -> &Message {
        self.append(MessageKind::Discussion, None, content)
    }

    pub fn push_consensus(&mut self, content: impl Into<String>) -> &Message {
        self.append(MessageKind::Consensus, None, content)
    }

    pub fn push_result(&mut self, content: impl Into<String>) -> &Message {
        self.append(MessageKind::Result, None, content)
    }

    /// Error entries cover both server-reported errors and locally
    /// synthesized descriptions of malformed events — the user always sees
    /// something for every inbound signal.
    pub fn push_error(&mut self, content: impl Into<String>) -> &Message {
        self.append(MessageKind::Error, None, content)
    }

    fn append(
        &mut self,
        kind: MessageKind,
        sender: Option<AgentId>,
        content: impl Into<String>,
    ) -> &Message {
        let id = MessageId(self.next_id);
        self.next_id += 1;
        let index = self.entries.len();
        self.entries.push(Message::new(id, kind, sender, content));
        &self.entries[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_preserves_arrival_order() {
        let mut transcript = Transcript::new();
        transcript.push_user("first");
        transcript.push_agent(AgentId::new("manus").unwrap(), "second");
        transcript.push_error("third");

        let snapshot = transcript.snapshot();
        assert_eq!(snapshot.len(), 3);
        assert_eq!(snapshot[0].content, "first");
        assert_eq!(snapshot[1].content, "second");
        assert_eq!(snapshot[2].content, "third");
    }

    #[test]
    fn test_ids_are_unique_and_monotonic() {
        let mut transcript = Transcript::new();
        for i in 0..10 {
            transcript.push_user(format!("msg {i}"));
        }
        let ids: Vec<_> = transcript.snapshot().iter().map(|m| m.id).collect();
        for pair in ids.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_order_ignores_created_at() {
        // created_at comes from the wall clock at append time; even if two
        // producers raced, sequence order stays arrival order. Here we just
        // assert the invariant holds for same-instant appends.
        let mut transcript = Transcript::new();
        transcript.push_discussion("a");
        transcript.push_discussion("b");
        let snapshot = transcript.snapshot();
        assert!(snapshot[0].id < snapshot[1].id);
        assert!(snapshot[0].created_at <= snapshot[1].created_at);
    }

    #[test]
    fn test_agent_message_carries_sender() {
        let mut transcript = Transcript::new();
        let sender = AgentId::new("aiin").unwrap();
        transcript.push_agent(sender.clone(), "hello");
        assert_eq!(transcript.last().unwrap().sender.as_ref(), Some(&sender));

        transcript.push_user("hi");
        assert!(transcript.last().unwrap().sender.is_none());
    }

    #[test]
    fn test_multiline_content_verbatim() {
        let mut transcript = Transcript::new();
        transcript.push_result("line one\nline two\n");
        assert_eq!(transcript.last().unwrap().content, "line one\nline two\n");
    }
}
