//! Channel transport adapter.
//!
//! Implements the application's [`TransportSink`] port over an in-process
//! tokio mpsc channel carrying [`WireFrame`]s. Outbound sends enqueue and
//! return immediately; the receiving half is consumed by whatever stands on
//! the other side of the boundary (the scripted simulator here, a real
//! socket client in a deployed build).

pub mod simulator;

pub use simulator::DiscussionSimulator;

use crate::wire::{self, WireFrame};
use async_trait::async_trait;
use roundtable_application::{OutboundEvent, TransportError, TransportSink};
use std::time::Duration;
use tokio::sync::mpsc;

/// Delay abstraction injected at the transport boundary.
///
/// Latency never lives inside the orchestration core; the simulator takes a
/// `Delay` so tests can run synchronously with [`NoDelay`].
#[async_trait]
pub trait Delay: Send + Sync {
    async fn pause(&self, duration: Duration);
}

/// Production delay backed by the tokio timer.
pub struct TokioDelay;

#[async_trait]
impl Delay for TokioDelay {
    async fn pause(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// No-op delay for synchronous tests.
pub struct NoDelay;

#[async_trait]
impl Delay for NoDelay {
    async fn pause(&self, _duration: Duration) {}
}

/// Outbound half of the channel transport.
pub struct ChannelTransport {
    outbound_tx: mpsc::UnboundedSender<WireFrame>,
}

impl TransportSink for ChannelTransport {
    fn send(&self, event: OutboundEvent) -> Result<(), TransportError> {
        self.outbound_tx
            .send(wire::encode(&event))
            .map_err(|_| TransportError::Closed)
    }
}

/// Create the outbound side of the transport: a sink for the dispatcher and
/// the frame receiver for the boundary's far side.
pub fn transport_channel() -> (ChannelTransport, mpsc::UnboundedReceiver<WireFrame>) {
    let (outbound_tx, outbound_rx) = mpsc::unbounded_channel();
    (ChannelTransport { outbound_tx }, outbound_rx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_send_encodes_and_enqueues() {
        let (transport, mut rx) = transport_channel();
        transport
            .send(OutboundEvent::UserMessage {
                content: "hi".to_string(),
                timestamp: 42,
            })
            .unwrap();

        let frame = rx.recv().await.unwrap();
        assert_eq!(frame.event, "user_message");
        assert_eq!(frame.payload["content"], "hi");
    }

    #[tokio::test]
    async fn test_send_after_receiver_dropped_is_closed() {
        let (transport, rx) = transport_channel();
        drop(rx);
        let result = transport.send(OutboundEvent::UserMessage {
            content: "hi".to_string(),
            timestamp: 0,
        });
        assert!(matches!(result, Err(TransportError::Closed)));
    }
}
