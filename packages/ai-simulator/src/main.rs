//! AI Simulator CLI - headless Durak games between two AIs.
//!
//! The computer seat runs the engine's own AI; the player seat is driven by a
//! second AI through the same selections a human would make.

mod metrics;
mod output;
mod simulator;
mod types;

use std::time::Instant;

use clap::Parser;
use durak_engine::domain::{derive_ai_seed, derive_game_seed};
use durak_engine::{create_ai, AiConfig, AiPlayer, GameConfig, Outcome, Side};
use metrics::{build_game_metrics, RunConfig};
use output::OutputWriter;
use simulator::{GameResult, Simulator};
use tracing::{info, warn};
use types::{AiType, OutputFormat};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    engine_test_support::logging::init();
}

#[derive(Parser)]
#[command(name = "ai-simulator")]
#[command(about = "Headless Durak simulator for comparing AIs")]
struct Args {
    /// Number of games to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// AI driving the player seat
    #[arg(long, default_value = "random")]
    player_ai: AiType,

    /// AI driving the computer seat
    #[arg(long, default_value = "heuristic")]
    computer_ai: AiType,

    /// Base seed; each game derives its own from it
    #[arg(long)]
    seed: Option<u64>,

    /// Worker count for the heuristic AI
    #[arg(long, default_value = "1")]
    concurrency: usize,

    /// Play with the 24-card deck only
    #[arg(long)]
    no_jokers: bool,

    /// Give up on a game after this many ticks
    #[arg(long, default_value = "5000")]
    max_ticks: u64,

    /// Check card conservation after every tick
    #[arg(long)]
    check_conservation: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Show output summary and file paths
    #[arg(long)]
    show_output: bool,

    /// Output directory for results
    #[arg(long, default_value = "./simulation-results")]
    output_dir: String,

    /// Output format
    #[arg(long, default_value = "jsonl")]
    output_format: OutputFormat,

    /// Compress output files
    #[arg(long)]
    compress: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if args.verbose {
        "debug"
    } else if args.show_output {
        "info"
    } else {
        "warn"
    };
    durak_engine::telemetry::init_tracing(filter, false);

    if args.show_output {
        info!(
            games = args.games,
            player = args.player_ai.name(),
            computer = args.computer_ai.name(),
            "starting AI simulator"
        );
    }

    let mut output_writer =
        OutputWriter::new(&args.output_dir, &args.output_format, args.compress)?;

    let base_seed = args.seed.unwrap_or_else(rand::random::<u64>);
    let start = Instant::now();
    let mut results = Vec::new();
    let mut errors = 0;

    for game_num in 1..=args.games {
        let game_start = Instant::now();
        let game_seed = derive_game_seed(base_seed, game_num);

        match run_game(&args, game_seed) {
            Ok(result) => {
                let duration_ms = game_start.elapsed().as_secs_f64() * 1000.0;
                let metrics = build_game_metrics(
                    game_num,
                    game_seed,
                    run_config(&args),
                    &result,
                    duration_ms,
                );
                if let Err(e) = output_writer.write_game(&metrics) {
                    warn!("Failed to write metrics for game {}: {}", game_num, e);
                }
                if args.verbose {
                    info!(game = game_num, outcome = ?result.outcome, "game completed");
                }
                results.push(result);
            }
            Err(e) => {
                errors += 1;
                warn!("Game {} failed: {}", game_num, e);
            }
        }
    }

    let elapsed = start.elapsed();
    let (data_path, csv_path) = output_writer.output_paths();
    let (data_path, csv_path) = (data_path.cloned(), csv_path.cloned());
    output_writer.finish()?;

    if args.show_output {
        if let Some(path) = data_path {
            info!("Detailed results written to: {}", path.display());
        }
        if let Some(path) = csv_path {
            info!("Summary CSV written to: {}", path.display());
        }
        print_summary(&results, errors, elapsed, args.games);
    }

    Ok(())
}

fn run_config(args: &Args) -> RunConfig {
    RunConfig {
        player_ai: args.player_ai.name().to_string(),
        computer_ai: args.computer_ai.name().to_string(),
        include_jokers: !args.no_jokers,
        ai_concurrency: args.concurrency,
        total_games: args.games,
    }
}

fn create_player_ai(
    ai_type: AiType,
    seed: u64,
    concurrency: usize,
) -> Result<Box<dyn AiPlayer>, Box<dyn std::error::Error>> {
    let config = AiConfig::with_seed(seed).with_concurrency(concurrency);
    create_ai(ai_type.name(), &config)
        .ok_or_else(|| format!("Unknown AI type: {}", ai_type.name()).into())
}

fn run_game(args: &Args, game_seed: u64) -> Result<GameResult, Box<dyn std::error::Error>> {
    let config = GameConfig {
        seed: Some(game_seed),
        include_jokers: !args.no_jokers,
        ai: args.computer_ai.name().to_string(),
        ai_concurrency: args.concurrency,
        ..GameConfig::default()
    };
    let player = create_player_ai(
        args.player_ai,
        derive_ai_seed(game_seed, Side::Player),
        args.concurrency,
    )?;

    let simulator = Simulator::new(config, args.max_ticks)
        .with_conservation_checks(args.check_conservation);
    simulator.simulate_game(player.as_ref()).map_err(|e| e.into())
}

fn print_summary(results: &[GameResult], errors: u32, elapsed: std::time::Duration, total: u32) {
    println!("\n=== Simulation Summary ===");
    println!("Games completed: {}/{}", results.len(), total);
    if errors > 0 {
        println!("Errors: {}", errors);
    }
    println!("Total time: {:?}", elapsed);
    if results.is_empty() {
        return;
    }
    println!("Average time per game: {:?}", elapsed / results.len() as u32);

    let count = |outcome: Outcome| results.iter().filter(|r| r.outcome == outcome).count();
    let pct = |n: usize| n as f64 / results.len() as f64 * 100.0;
    let player_wins = count(Outcome::PlayerWins);
    let computer_wins = count(Outcome::ComputerWins);
    let draws = count(Outcome::Draw);

    let ticks: u64 = results.iter().map(|r| r.stats.ticks).sum();
    let player_takes: u64 = results.iter().map(|r| u64::from(r.stats.player_takes)).sum();
    let computer_takes: u64 = results
        .iter()
        .map(|r| u64::from(r.stats.computer_takes))
        .sum();
    let games = results.len() as f64;

    println!("\n=== Results ===");
    println!("Player wins:   {} ({:.1}%)", player_wins, pct(player_wins));
    println!("Computer wins: {} ({:.1}%)", computer_wins, pct(computer_wins));
    println!("Draws:         {} ({:.1}%)", draws, pct(draws));
    println!("Average ticks per game: {:.1}", ticks as f64 / games);
    println!(
        "Average takes per game: player={:.2}, computer={:.2}",
        player_takes as f64 / games,
        computer_takes as f64 / games
    );
}
