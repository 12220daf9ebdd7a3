//! Wire codec for the named-event transport boundary.
//!
//! Each frame is an event name plus a JSON payload. [`decode`] is a pure
//! function that validates the payload and produces a fully-typed
//! [`InboundEvent`]; anything that cannot be validated — a missing required
//! field, an unparseable phase string, an unknown event name — degrades to
//! [`InboundEvent::Malformed`] so no observable server signal is ever lost.

use roundtable_application::{InboundEvent, OutboundEvent};
use roundtable_domain::{AgentId, DiscussionPhase};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One frame on the channel: a named event and its JSON payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireFrame {
    pub event: String,
    #[serde(default)]
    pub payload: Value,
}

impl WireFrame {
    pub fn new(event: impl Into<String>, payload: Value) -> Self {
        Self {
            event: event.into(),
            payload,
        }
    }
}

/// Decode an inbound frame into a typed event.
///
/// Pure function, called once per frame. Never fails: validation problems
/// come back as `Malformed` with a synthesized description.
pub fn decode(frame: &WireFrame) -> InboundEvent {
    let payload = &frame.payload;
    match frame.event.as_str() {
        "connect" => InboundEvent::Connected { message: None },
        "connected" => InboundEvent::Connected {
            message: opt_str(payload, "message"),
        },
        "ai_response" => decode_ai_response(payload),
        "discussion_update" => decode_discussion_update(payload),
        "consensus_reached" => match require_str(payload, "consensus") {
            Ok(content) => InboundEvent::ConsensusReached { content },
            Err(detail) => malformed("consensus_reached", detail),
        },
        "execution_result" => match require_str(payload, "result") {
            Ok(content) => InboundEvent::ExecutionResult { content },
            Err(detail) => malformed("execution_result", detail),
        },
        "error" => match require_str(payload, "message") {
            Ok(message) => InboundEvent::ServerError { message },
            Err(detail) => malformed("error", detail),
        },
        "disconnect" => InboundEvent::Disconnected,
        "connect_error" => InboundEvent::ConnectError {
            error: opt_str(payload, "error").unwrap_or_else(|| "unknown error".to_string()),
        },
        other => malformed(other, "unknown event".to_string()),
    }
}

/// Encode an outbound event into its wire frame.
pub fn encode(event: &OutboundEvent) -> WireFrame {
    match event {
        OutboundEvent::UserMessage { content, timestamp } => WireFrame::new(
            "user_message",
            serde_json::json!({
                "content": content,
                "timestamp": timestamp,
            }),
        ),
    }
}

fn decode_ai_response(payload: &Value) -> InboundEvent {
    let name = match require_str(payload, "ai_name") {
        Ok(n) => n,
        Err(detail) => return malformed("ai_response", detail),
    };
    let content = match require_str(payload, "content") {
        Ok(c) => c,
        Err(detail) => return malformed("ai_response", detail),
    };
    match AgentId::new(name) {
        Ok(agent) => InboundEvent::AgentResponse { agent, content },
        Err(e) => malformed("ai_response", e.to_string()),
    }
}

fn decode_discussion_update(payload: &Value) -> InboundEvent {
    let state = match require_str(payload, "discussion_state") {
        Ok(s) => s,
        Err(detail) => return malformed("discussion_update", detail),
    };
    match state.parse::<DiscussionPhase>() {
        Ok(phase) => InboundEvent::DiscussionUpdate {
            phase,
            content: opt_str(payload, "discussion_content"),
        },
        Err(e) => malformed("discussion_update", e.to_string()),
    }
}

fn malformed(event: &str, detail: String) -> InboundEvent {
    InboundEvent::Malformed {
        event: event.to_string(),
        detail,
    }
}

fn opt_str(payload: &Value, field: &str) -> Option<String> {
    payload.get(field).and_then(|v| v.as_str()).map(String::from)
}

fn require_str(payload: &Value, field: &str) -> Result<String, String> {
    opt_str(payload, field).ok_or_else(|| format!("missing field `{field}`"))
}
