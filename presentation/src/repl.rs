//! REPL (Read-Eval-Print Loop) for interactive discussions

use crate::ConsoleFormatter;
use crate::view::project;
use roundtable_application::{DiscussionController, InboundEvent, SubmitError};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::time::Duration;
use tokio::sync::mpsc;

/// How long to wait for the next server event before giving the prompt back
const EVENT_TIMEOUT: Duration = Duration::from_secs(30);

/// Interactive discussion REPL
pub struct ChatRepl {
    controller: DiscussionController,
    events: mpsc::UnboundedReceiver<InboundEvent>,
    /// Number of transcript entries already printed
    rendered: usize,
    quiet: bool,
}

impl ChatRepl {
    /// Create a new ChatRepl
    pub fn new(
        controller: DiscussionController,
        events: mpsc::UnboundedReceiver<InboundEvent>,
    ) -> Self {
        Self {
            controller,
            events,
            rendered: 0,
            quiet: false,
        }
    }

    /// Suppress the welcome banner and per-round phase summaries
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        // Try to load history
        let history_path = dirs::data_dir().map(|p| p.join("roundtable").join("history.txt"));

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        if !self.quiet {
            self.print_welcome();
        }

        loop {
            self.drain_pending();

            let readline = rl.readline(">>> ");

            match readline {
                Ok(line) => {
                    let line = line.trim();

                    // Skip empty lines
                    if line.is_empty() {
                        continue;
                    }

                    // Handle commands
                    if line.starts_with('/') {
                        if self.handle_command(line) {
                            break;
                        }
                        continue;
                    }

                    // Add to history
                    let _ = rl.add_history_entry(line);

                    // Open a round and follow it to completion
                    self.process_message(line).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        // Save history
        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        let view = project(self.controller.state());
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│        Roundtable - Discussion Mode         │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!(
            "Agents: {}",
            view.agents
                .iter()
                .map(|a| a.name.clone())
                .collect::<Vec<_>>()
                .join(", ")
        );
        println!();
        println!("Commands:");
        println!("  /help     - Show this help");
        println!("  /status   - Show connection and phase");
        println!("  /agents   - Show agent roster");
        println!("  /quit     - Exit chat");
        println!();
    }

    /// Handle slash commands. Returns true if should exit.
    fn handle_command(&self, cmd: &str) -> bool {
        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                true
            }
            "/help" | "/h" | "/?" => {
                println!();
                println!("Commands:");
                println!("  /help, /h, /?    - Show this help");
                println!("  /status          - Show connection and phase");
                println!("  /agents          - Show agent roster");
                println!("  /quit, /exit, /q - Exit chat");
                println!();
                false
            }
            "/status" => {
                let view = project(self.controller.state());
                println!();
                println!("{}", ConsoleFormatter::format_status(&view));
                false
            }
            "/agents" => {
                let view = project(self.controller.state());
                println!();
                println!("{}", ConsoleFormatter::format_agents(&view.agents));
                false
            }
            _ => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                false
            }
        }
    }

    /// Submit the user's message and follow the round until it reaches a
    /// terminal phase, the channel closes, or the server goes quiet.
    async fn process_message(&mut self, text: &str) {
        println!();

        if let Err(e) = self.controller.submit_user_message(text) {
            match e {
                SubmitError::NotConnected => {
                    eprintln!("Not connected - message not sent");
                }
                SubmitError::EmptyMessage => {}
                SubmitError::Transport(e) => {
                    eprintln!("Send failed: {}", e);
                }
            }
            self.render_new();
            return;
        }

        self.render_new();

        loop {
            match tokio::time::timeout(EVENT_TIMEOUT, self.events.recv()).await {
                Ok(Some(event)) => {
                    let was_disconnect = matches!(event, InboundEvent::Disconnected);
                    self.controller.apply(event);
                    self.render_new();
                    if was_disconnect {
                        println!("{}", ConsoleFormatter::format_connection(false));
                        break;
                    }
                    if self.controller.state().phase().is_terminal() {
                        break;
                    }
                }
                Ok(None) => {
                    println!("{}", ConsoleFormatter::format_connection(false));
                    break;
                }
                Err(_) => {
                    eprintln!("No response from server - giving up on this round");
                    break;
                }
            }
        }

        if !self.quiet {
            let view = project(self.controller.state());
            println!();
            println!("{}", ConsoleFormatter::format_phase(&view.phase));
        }
        println!();
    }

    /// Apply any events that arrived while the prompt was idle.
    fn drain_pending(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            self.controller.apply(event);
        }
        self.render_new();
    }

    /// Print transcript entries added since the last render.
    fn render_new(&mut self) {
        let view = project(self.controller.state());
        for line in &view.lines[self.rendered..] {
            println!("{}", ConsoleFormatter::format_line(line));
        }
        self.rendered = view.lines.len();
    }
}
