//! Discussion orchestration: the single mutation path over the three stores.
//!
//! [`DiscussionController`] receives validated inbound events and user
//! actions, and applies the corresponding mutation to the transcript, the
//! agent registry, and the phase machine. Processing is single-threaded and
//! cooperative: one event is applied to completion before the next, which is
//! the load-bearing guarantee that readers never observe a torn update.
//!
//! Events are applied strictly in arrival order with no buffering or
//! reordering. A late event from a superseded round (no round identifier is
//! attached to events) still applies — an accepted race, not one we mask.

use crate::ports::transcript_logger::{NoTranscriptLogger, TranscriptLogger, TranscriptRecord};
use crate::ports::transport::{InboundEvent, OutboundEvent, TransportError, TransportSink};
use roundtable_domain::{
    AgentActivity, AgentId, AgentRegistry, DiscussionPhase, PhaseMachine, Transcript,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Reasons a user message was not submitted
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// The channel is currently unusable; input is blocked until reconnect
    #[error("Not connected to the discussion server")]
    NotConnected,

    /// Empty or whitespace-only input is never sent
    #[error("Message is empty")]
    EmptyMessage,

    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// The three stores plus the connectivity flag, owned exclusively by the
/// controller. The presentation layer receives `&DiscussionState` snapshots
/// and must not mutate them.
#[derive(Debug, Clone)]
pub struct DiscussionState {
    transcript: Transcript,
    agents: AgentRegistry,
    phase: PhaseMachine,
    connected: bool,
}

impl DiscussionState {
    fn new(roster: impl IntoIterator<Item = AgentId>) -> Self {
        Self {
            transcript: Transcript::new(),
            agents: AgentRegistry::with_roster(roster),
            phase: PhaseMachine::new(),
            connected: false,
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn agents(&self) -> &AgentRegistry {
        &self.agents
    }

    pub fn phase(&self) -> DiscussionPhase {
        self.phase.current()
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }
}

/// Event dispatcher for a live multi-agent discussion.
///
/// Owns the [`DiscussionState`] and is its only mutation path; everything
/// else renders from read-only snapshots. Inbound events arrive as the
/// [`InboundEvent`] tagged union and are matched exhaustively.
pub struct DiscussionController {
    transport: Arc<dyn TransportSink>,
    logger: Arc<dyn TranscriptLogger>,
    state: DiscussionState,
}

impl DiscussionController {
    pub fn new(transport: Arc<dyn TransportSink>, roster: impl IntoIterator<Item = AgentId>) -> Self {
        Self {
            transport,
            logger: Arc::new(NoTranscriptLogger),
            state: DiscussionState::new(roster),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn TranscriptLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Read-only snapshot of the current state
    pub fn state(&self) -> &DiscussionState {
        &self.state
    }

    /// Apply one inbound event to completion.
    pub fn apply(&mut self, event: InboundEvent) {
        match event {
            InboundEvent::Connected { message } => self.on_connect(message),
            InboundEvent::AgentResponse { agent, content } => {
                self.on_agent_response(agent, content)
            }
            InboundEvent::DiscussionUpdate { phase, content } => {
                self.on_discussion_update(phase, content)
            }
            InboundEvent::ConsensusReached { content } => self.on_consensus_reached(content),
            InboundEvent::ExecutionResult { content } => self.on_execution_result(content),
            InboundEvent::ServerError { message } => self.on_error(message),
            InboundEvent::Disconnected => self.on_disconnect(),
            InboundEvent::ConnectError { error } => self.on_connect_error(error),
            InboundEvent::Malformed { event, detail } => self.on_malformed(event, detail),
        }
    }

    /// Marks the channel usable. Nothing is replayed: no history is buffered
    /// while disconnected.
    fn on_connect(&mut self, message: Option<String>) {
        self.state.connected = true;
        info!(message = message.as_deref(), "channel connected");
    }

    fn on_agent_response(&mut self, agent: AgentId, content: String) {
        debug!(agent = %agent, "agent response");
        let message = self.state.transcript.push_agent(agent.clone(), content).clone();
        self.logger.log(TranscriptRecord::Message(message));
        self.state.agents.set_status(agent, AgentActivity::Active);
    }

    /// The server is authoritative for the phase it reports.
    fn on_discussion_update(&mut self, phase: DiscussionPhase, content: Option<String>) {
        self.force_phase(phase);
        if let Some(content) = content {
            let message = self.state.transcript.push_discussion(content).clone();
            self.logger.log(TranscriptRecord::Message(message));
        }
    }

    fn on_consensus_reached(&mut self, content: String) {
        self.force_phase(DiscussionPhase::Consensus);
        let message = self.state.transcript.push_consensus(content).clone();
        self.logger.log(TranscriptRecord::Message(message));
    }

    /// Closes the round: all agents return to rest.
    fn on_execution_result(&mut self, content: String) {
        self.force_phase(DiscussionPhase::Completed);
        let message = self.state.transcript.push_result(content).clone();
        self.logger.log(TranscriptRecord::Message(message));
        self.state.agents.set_all_status(AgentActivity::Idle);
    }

    /// Server-reported errors surface verbatim; no auto-retry.
    fn on_error(&mut self, message: String) {
        warn!(message = %message, "server error");
        let entry = self.state.transcript.push_error(message).clone();
        self.logger.log(TranscriptRecord::Message(entry));
        self.force_phase(DiscussionPhase::Error);
        self.state.agents.set_all_status(AgentActivity::Idle);
    }

    /// Marks the channel unusable. The three stores are left untouched so the
    /// last known state stays visible across the drop.
    fn on_disconnect(&mut self) {
        self.state.connected = false;
        info!("channel disconnected");
    }

    /// Connection failures are user-visible transcript entries, but they do
    /// not force the phase to `Error` — only the server's explicit error
    /// event does that.
    fn on_connect_error(&mut self, error: String) {
        self.state.connected = false;
        warn!(error = %error, "connect error");
        let entry = self
            .state
            .transcript
            .push_error(format!("Connection error: {error}"))
            .clone();
        self.logger.log(TranscriptRecord::Message(entry));
    }

    /// An incomplete or unrecognized event degrades to a synthesized error
    /// entry rather than being dropped — the user sees something for every
    /// inbound signal.
    fn on_malformed(&mut self, event: String, detail: String) {
        warn!(event = %event, detail = %detail, "malformed event");
        let entry = self
            .state
            .transcript
            .push_error(format!("Malformed '{event}' event: {detail}"))
            .clone();
        self.logger.log(TranscriptRecord::Message(entry));
    }

    /// Submit a user message, opening (or restarting) a round.
    ///
    /// Rejected with a not-ready signal when the channel is unusable or the
    /// text is empty/whitespace-only; otherwise appends the user entry, moves
    /// the phase to `Analyzing`, marks every known agent `Thinking`, and
    /// emits the outbound event exactly once. Returns immediately after the
    /// send is enqueued; it does not await a response.
    pub fn submit_user_message(&mut self, text: &str) -> Result<(), SubmitError> {
        if !self.state.connected {
            return Err(SubmitError::NotConnected);
        }
        if text.trim().is_empty() {
            return Err(SubmitError::EmptyMessage);
        }

        let message = self.state.transcript.push_user(text).clone();
        self.logger.log(TranscriptRecord::Message(message));
        self.force_phase(DiscussionPhase::Analyzing);
        self.state.agents.set_all_status(AgentActivity::Thinking);

        let outbound = OutboundEvent::UserMessage {
            content: text.to_string(),
            timestamp: chrono::Utc::now().timestamp_millis(),
        };
        if let Err(e) = self.transport.send(outbound) {
            let entry = self
                .state
                .transcript
                .push_error(format!("Failed to send message: {e}"))
                .clone();
            self.logger.log(TranscriptRecord::Message(entry));
            return Err(e.into());
        }
        Ok(())
    }

    fn force_phase(&mut self, phase: DiscussionPhase) {
        if self.state.phase.current() != phase {
            debug!(phase = phase.as_str(), "phase change");
        }
        self.state.phase.force(phase);
        self.logger.log(TranscriptRecord::PhaseChange(phase));
    }
}
