//! CLI entrypoint for roundtable
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::Result;
use clap::Parser;
use roundtable_application::{DiscussionController, TranscriptLogger};
use roundtable_domain::AgentId;
use roundtable_infrastructure::{
    BookingApi, ConfigLoader, DiscussionSimulator, FileConfig, JsonlTranscriptLogger, TokioDelay,
    transport_channel, wire,
};
use roundtable_presentation::{ChatRepl, Cli, Commands};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        print_config_locations();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };

    for issue in config.validate() {
        warn!("config: {}", issue);
    }

    match cli.command {
        None | Some(Commands::Chat) => run_chat(config, cli.quiet).await,
        Some(Commands::Bookings { date }) => run_bookings(&config, date.as_deref()).await,
        Some(Commands::Stats { date }) => run_stats(&config, date.as_deref()).await,
    }
}

/// Wire up the discussion pipeline and hand control to the REPL.
///
/// Frames flow: REPL -> controller -> channel transport -> simulator ->
/// decode forwarder -> REPL event loop.
async fn run_chat(config: FileConfig, quiet: bool) -> Result<()> {
    info!("Starting roundtable chat");

    let roster = parse_roster(&config.agents.roster);

    let (transport, outbound_rx) = transport_channel();

    // Far side of the transport boundary: the scripted backend
    let (frame_tx, mut frame_rx) = mpsc::unbounded_channel();
    let simulator = DiscussionSimulator::new(
        roster.clone(),
        Arc::new(TokioDelay),
        Duration::from_millis(config.simulator.latency_ms),
    );
    tokio::spawn(simulator.run(outbound_rx, frame_tx));

    // Decode forwarder: wire frames in, typed events out
    let (event_tx, event_rx) = mpsc::unbounded_channel();
    tokio::spawn(async move {
        while let Some(frame) = frame_rx.recv().await {
            if event_tx.send(wire::decode(&frame)).is_err() {
                break;
            }
        }
    });

    let mut controller = DiscussionController::new(Arc::new(transport), roster);
    if let Some(ref path) = config.log.transcript
        && let Some(logger) = JsonlTranscriptLogger::new(path)
    {
        info!("Transcript log: {}", logger.path().display());
        controller = controller.with_logger(Arc::new(logger) as Arc<dyn TranscriptLogger>);
    }

    let mut repl = ChatRepl::new(controller, event_rx).with_quiet(quiet);
    repl.run().await?;
    Ok(())
}

async fn run_bookings(config: &FileConfig, date: Option<&str>) -> Result<()> {
    let api = BookingApi::new(&config.server.api_url);
    let bookings = api.bookings(date).await?;

    if bookings.is_empty() {
        println!("No bookings found");
        return Ok(());
    }

    for booking in &bookings {
        let pet = booking.pet_name.as_deref().unwrap_or("-");
        println!(
            "#{:<4} {} {}  {:<12} {:<20} pet: {:<10} staff: {:<10} [{}]",
            booking.id,
            booking.date,
            booking.time,
            booking.service_type,
            booking.customer_name,
            pet,
            booking.staff,
            booking.status,
        );
    }
    println!();
    println!("{} booking(s)", bookings.len());
    Ok(())
}

async fn run_stats(config: &FileConfig, date: Option<&str>) -> Result<()> {
    let api = BookingApi::new(&config.server.api_url);
    let stats = api.daily_stats(date).await?;

    println!("Stats for {}", stats.date);
    println!("  total:     {}", stats.total_bookings);
    println!("  confirmed: {}", stats.confirmed_bookings);
    println!("  pending:   {}", stats.pending_bookings);
    println!("  completed: {}", stats.completed_bookings);
    println!("  revenue:   {:.2}", stats.total_revenue);
    Ok(())
}

fn parse_roster(names: &[String]) -> Vec<AgentId> {
    let mut roster = Vec::with_capacity(names.len());
    for name in names {
        match AgentId::new(name.clone()) {
            Ok(id) => roster.push(id),
            Err(e) => warn!("Skipping agent {:?}: {}", name, e),
        }
    }
    roster
}

fn print_config_locations() {
    println!("Configuration file locations (in priority order):");
    println!("  1. --config <path>");
    println!("  2. ./roundtable.toml or ./.roundtable.toml");
    match ConfigLoader::global_config_path() {
        Some(path) => println!("  3. {}", path.display()),
        None => println!("  3. (no global config directory on this platform)"),
    }
}
