//! Scripted discussion backend.
//!
//! Stands on the far side of the transport boundary and replays a full
//! discussion round for every `user_message` frame: analyzing, one response
//! per agent, discussing, consensus, executing, and the closing
//! `execution_result`. Pacing comes entirely from the injected [`Delay`].

use super::{Delay, WireFrame};
use roundtable_domain::AgentId;
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Scripted replacement for the real discussion server.
pub struct DiscussionSimulator {
    agents: Vec<AgentId>,
    delay: Arc<dyn Delay>,
    latency: Duration,
}

impl DiscussionSimulator {
    pub fn new(agents: Vec<AgentId>, delay: Arc<dyn Delay>, latency: Duration) -> Self {
        Self {
            agents,
            delay,
            latency,
        }
    }

    /// Consume outbound frames and emit the scripted round for each user
    /// message. Returns when either side of the channel closes.
    pub async fn run(
        self,
        mut outbound_rx: mpsc::UnboundedReceiver<WireFrame>,
        inbound_tx: mpsc::UnboundedSender<WireFrame>,
    ) {
        info!(agents = self.agents.len(), "simulator started");
        if inbound_tx
            .send(WireFrame::new(
                "connected",
                json!({"message": "simulated backend ready"}),
            ))
            .is_err()
        {
            return;
        }

        while let Some(frame) = outbound_rx.recv().await {
            if frame.event != "user_message" {
                debug!(event = %frame.event, "ignoring outbound frame");
                continue;
            }
            let request = frame
                .payload
                .get("content")
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string();
            if self.run_round(&request, &inbound_tx).await.is_err() {
                return;
            }
        }

        let _ = inbound_tx.send(WireFrame::new("disconnect", Value::Null));
    }

    async fn run_round(
        &self,
        request: &str,
        tx: &mpsc::UnboundedSender<WireFrame>,
    ) -> Result<(), ()> {
        let topic = summarize(request);

        self.emit(tx, phase_update("analyzing", None)).await?;

        for agent in &self.agents {
            self.emit(
                tx,
                WireFrame::new(
                    "ai_response",
                    json!({
                        "ai_name": agent.as_str(),
                        "content": format!("{} here: I've looked at \"{}\" and have a proposal.", agent, topic),
                    }),
                ),
            )
            .await?;
        }

        self.emit(
            tx,
            phase_update(
                "discussing",
                Some(format!("Agents are comparing approaches for \"{topic}\".")),
            ),
        )
        .await?;

        self.emit(
            tx,
            WireFrame::new(
                "consensus_reached",
                json!({"consensus": format!("Agreed plan for \"{}\": split the work and verify each other's output.", topic)}),
            ),
        )
        .await?;

        self.emit(tx, phase_update("executing", None)).await?;

        self.emit(
            tx,
            WireFrame::new(
                "execution_result",
                json!({"result": format!("Finished \"{}\".", topic)}),
            ),
        )
        .await?;

        Ok(())
    }

    async fn emit(&self, tx: &mpsc::UnboundedSender<WireFrame>, frame: WireFrame) -> Result<(), ()> {
        self.delay.pause(self.latency).await;
        tx.send(frame).map_err(|_| ())
    }
}

fn phase_update(state: &str, content: Option<String>) -> WireFrame {
    let mut payload = json!({"discussion_state": state});
    if let Some(content) = content {
        payload["discussion_content"] = Value::String(content);
    }
    WireFrame::new("discussion_update", payload)
}

/// First line of the request, clipped for use inside scripted replies.
fn summarize(request: &str) -> String {
    const MAX: usize = 60;
    let line = request.lines().next().unwrap_or_default().trim();
    if line.len() <= MAX {
        return line.to_string();
    }
    let mut end = MAX;
    while end > 0 && !line.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…", &line[..end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::NoDelay;

    fn agents() -> Vec<AgentId> {
        vec![
            AgentId::new("manus").unwrap(),
            AgentId::new("aiin").unwrap(),
        ]
    }

    #[tokio::test]
    async fn test_round_shape() {
        let (out_tx, out_rx) = mpsc::unbounded_channel();
        let (in_tx, mut in_rx) = mpsc::unbounded_channel();

        let simulator = DiscussionSimulator::new(agents(), Arc::new(NoDelay), Duration::ZERO);

        out_tx
            .send(WireFrame::new(
                "user_message",
                json!({"content": "crawl the site", "timestamp": 0}),
            ))
            .unwrap();
        drop(out_tx); // one round, then shut down

        simulator.run(out_rx, in_tx).await;

        let mut events = Vec::new();
        while let Some(frame) = in_rx.recv().await {
            events.push(frame.event);
        }
        assert_eq!(
            events,
            vec![
                "connected",
                "discussion_update", // analyzing
                "ai_response",
                "ai_response",
                "discussion_update", // discussing
                "consensus_reached",
                "discussion_update", // executing
                "execution_result",
                "disconnect",
            ]
        );
    }

    #[tokio::test]
    async fn test_non_user_frames_ignored() {
        let (out_tx, out_rx) = mpsc::unbounded_channel();
        let (in_tx, mut in_rx) = mpsc::unbounded_channel();

        let simulator = DiscussionSimulator::new(agents(), Arc::new(NoDelay), Duration::ZERO);

        out_tx
            .send(WireFrame::new("ping", Value::Null))
            .unwrap();
        drop(out_tx);

        simulator.run(out_rx, in_tx).await;

        let mut events = Vec::new();
        while let Some(frame) = in_rx.recv().await {
            events.push(frame.event);
        }
        assert_eq!(events, vec!["connected", "disconnect"]);
    }

    #[test]
    fn test_summarize_clips_to_first_line() {
        assert_eq!(summarize("short task"), "short task");
        assert_eq!(summarize("first\nsecond"), "first");
        let long = "x".repeat(200);
        assert!(summarize(&long).chars().count() <= 61);
    }
}
