//! Polymorphia command line runner
//!
//! Plays one game, or a batch of games, with a seeded RNG.

use clap::Parser;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

use polymorphia_core::config::DEFAULT_CONFIG_PATH;
use polymorphia_core::events::EventLogger;
use polymorphia_core::output::{self, SnapshotGenerator, StatsCollector};
use polymorphia_core::{build_from_config, Config, Game, MazeError, SimRng};

/// Command line arguments for the simulation
#[derive(Parser, Debug)]
#[command(name = "polymorphia")]
#[command(about = "Adventurers versus creatures in a maze of rooms")]
struct Args {
    /// Random seed for reproducibility
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Path to the TOML config file
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Number of games to play; each game uses seed + game index
    #[arg(long, default_value_t = 1)]
    games: u64,

    /// Write every event as JSON Lines to this file
    #[arg(long)]
    events: Option<PathBuf>,

    /// Write the final maze snapshot of the last game to this file
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Write batch statistics to this file
    #[arg(long)]
    stats: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("polymorphia_core=info")),
        )
        .init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), MazeError> {
    let config = Config::load_or_default(&args.config);

    let mut logger = match &args.events {
        Some(path) => EventLogger::new(path)?,
        None => EventLogger::null(),
    };
    let mut snapshots = SnapshotGenerator::new();
    let mut stats = StatsCollector::new();

    for game_index in 0..args.games {
        let seed = args.seed.wrapping_add(game_index);
        let mut rng = SimRng::seed_from_u64(seed);
        let maze = build_from_config(&config, &mut rng)?;
        tracing::info!(game = game_index + 1, seed, "Initial maze:\n{}", maze);

        let mut game = Game::from_config(maze, &config);
        if game.may_stall() {
            tracing::warn!(
                game = game_index + 1,
                "No room has an exit and no demon is alive; this game may never end"
            );
        }
        while !game.is_over() {
            game.play_turn(&mut rng);
            let events = game.drain_events();
            stats.record_events(&events);
            logger.log_batch(&events)?;
        }

        let Some(outcome) = game.outcome() else {
            continue;
        };
        stats.record_game(game.turn_count(), outcome, game.survivor_names());

        if game_index + 1 == args.games {
            if let Some(path) = &args.snapshot {
                let snapshot = snapshots.generate(game.maze(), game.turn_count(), "game_ended");
                output::write_snapshot(&snapshot, path)?;
                tracing::info!(path = %path.display(), "Wrote final snapshot");
            }
        }
    }
    logger.flush()?;

    let summary = stats.generate_stats();
    if args.games > 1 {
        println!("Played {} games.", summary.games);
        println!(
            "  adventurers won: {:.1}%",
            summary.ratios.adventurers * 100.0
        );
        println!("  creatures won:   {:.1}%", summary.ratios.creatures * 100.0);
        println!("  ties:            {:.1}%", summary.ratios.tie * 100.0);
        println!("  average turns:   {:.1}", summary.average_turns);
    }
    if let Some(path) = &args.stats {
        output::write_stats(&summary, path)?;
    }
    if logger.event_count() > 0 {
        tracing::info!(events = logger.event_count(), "Logged events");
    }

    Ok(())
}
