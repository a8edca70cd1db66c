//! Terminal demo: seed a pattern and watch it evolve.
//!
//! Usage: `podlife [pattern] [cycles]`. Set `RUST_LOG` for cycle-level
//! logging.

use anyhow::{Context, Result};
use podlife_core::GameConfig;
use podlife_world::{patterns, Game};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let pattern = args.next().unwrap_or_else(|| "blinker".to_string());
    let cycles: u64 = match args.next() {
        Some(raw) => raw.parse().context("cycles must be a number")?,
        None => 10,
    };

    let mut game = Game::new(GameConfig::default());
    if let Err(err) = patterns::apply(game.world_mut(), &pattern) {
        eprintln!("{err}");
        eprintln!("available patterns:");
        for (name, description) in patterns::PATTERNS {
            eprintln!("  {name:10}  {description}");
        }
        anyhow::bail!("no such pattern");
    }

    info!(pattern = %pattern, cycles, "starting play session");

    game.play(Some(cycles), |game| match game.world().view_bounds_as_string() {
        Ok(view) => {
            let stats = game.world().statistics();
            println!("{view}");
            println!(
                "cycle {}  alive {}  born {}  died {}",
                stats.cycle_count, stats.pods_alive, stats.pods_born, stats.pods_died
            );
        }
        Err(err) => eprintln!("render failed: {err}"),
    });

    let stats = game.world().statistics();
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}
