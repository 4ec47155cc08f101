//! # Wildgrove Headless Runner
//!
//! Generates a world, runs the simulation for a fixed number of ticks with an optional
//! key script, and prints what happened.

use clap::Parser;
use log::{debug, info};
use std::collections::BTreeMap;
use std::path::PathBuf;
use wildgrove::{
    command_for_key, config, GameEvent, GameState, GenerationConfig, TickInput, WildgroveResult,
};

/// Milliseconds per simulated frame.
const FRAME_MS: u64 = 1000 / config::TARGET_FPS;

/// Command line arguments for the Wildgrove runner.
#[derive(Parser, Debug)]
#[command(name = "wildgrove")]
#[command(about = "Headless simulation runner for the Wildgrove action RPG")]
#[command(version)]
struct Args {
    /// Random seed for world generation
    #[arg(short, long)]
    seed: Option<u64>,

    /// World width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// World height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Number of ticks to simulate
    #[arg(short, long, default_value_t = 600)]
    ticks: u64,

    /// Generate a cave instead of the overworld
    #[arg(long)]
    cave: bool,

    /// JSON generation config; command line values override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the generated map as text
    #[arg(long)]
    dump_map: bool,

    /// Keys pressed on successive ticks (wasd, space, e, i, p, 1-9; '.' waits)
    #[arg(long, default_value = "")]
    script: String,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> WildgroveResult<()> {
    let args = Args::parse();

    initialize_logging(&args.log_level);

    info!("Starting Wildgrove v{}", wildgrove::VERSION);

    let config = build_config(&args)?;
    let mut state = GameState::new(config)?;

    if args.dump_map {
        print!("{}", state.world.to_ascii());
    }

    run_simulation(&mut state, &args)
}

/// Initializes the logging system based on the specified log level.
fn initialize_logging(log_level: &str) {
    #[cfg(feature = "dev-tools")]
    {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new(log_level))
            .with_target(false)
            .init();
    }

    #[cfg(not(feature = "dev-tools"))]
    {
        env_logger::Builder::new()
            .parse_filters(log_level)
            .format_timestamp(None)
            .init();
    }
}

/// Resolves the generation config from a file or presets, then applies overrides.
fn build_config(args: &Args) -> WildgroveResult<GenerationConfig> {
    let seed = args.seed.unwrap_or(12345);

    let mut config = match &args.config {
        Some(path) => {
            info!("Loading generation config from {}", path.display());
            GenerationConfig::from_json_file(path)?
        }
        None if args.cave => GenerationConfig::for_cave(seed),
        None => GenerationConfig::new(seed),
    };

    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }

    config.validate()?;
    Ok(config)
}

/// Drives the state the way a host would: tick, apply motion, drain events.
fn run_simulation(state: &mut GameState, args: &Args) -> WildgroveResult<()> {
    let script: Vec<char> = args.script.chars().collect();
    let mut event_counts: BTreeMap<&'static str, usize> = BTreeMap::new();

    #[cfg(feature = "dev-tools")]
    let _span = tracing::info_span!("simulation", seed = state.config.seed, ticks = args.ticks)
        .entered();

    for tick in 0..args.ticks {
        let mut input = TickInput::idle(FRAME_MS, state.player.position);
        if let Some(command) = script.get(tick as usize).and_then(|&key| command_for_key(key)) {
            input.apply(command);
        }

        state.tick(&input)?;
        state.apply_motion(FRAME_MS);

        #[cfg(feature = "dev-tools")]
        tracing::trace!(
            tick,
            x = state.player.position.x,
            y = state.player.position.y,
            health = state.progression.health,
            enemies = state.enemies.len(),
            pending = state.pending_events(),
            "tick applied"
        );

        for event in state.drain_events() {
            *event_counts.entry(event.name()).or_default() += 1;
            report_event(&event);
        }
    }

    info!(
        "Simulated {} ticks ({} ms); {} enemies remain",
        state.tick_number,
        state.clock_ms,
        state.enemies.len()
    );

    println!("Events:");
    for (name, count) in &event_counts {
        println!("  {:<18} {}", name, count);
    }
    println!(
        "Player: level {}, {} gold, {}/{} health",
        state.progression.level,
        state.progression.gold,
        state.progression.health,
        state.progression.max_health
    );
    println!("Statistics: {}", serde_json::to_string_pretty(&state.statistics)?);

    Ok(())
}

fn report_event(event: &GameEvent) {
    match event {
        GameEvent::Message { text, .. } => info!("{}", text),
        GameEvent::DialogueOpened {
            speaker,
            text,
            choices,
            ..
        } => {
            info!("{}: {}", speaker, text);
            for (i, choice) in choices.iter().enumerate() {
                info!("  [{}] {}", i + 1, choice);
            }
        }
        other => debug!("{:?}", other),
    }
}
