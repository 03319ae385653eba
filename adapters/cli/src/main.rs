#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that runs a headless Lane Defence session.
//!
//! The runner builds a defence automatically, starts waves until the
//! requested count is exhausted, and reports the outcome on stdout. An
//! optional JSON report and a persistent high score slot round out the
//! surface.

mod high_score;
mod session;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use serde::Serialize;

use lane_defence_core::{
    CellCoord, Command, Event, HudSnapshot, PathLayout, TowerKind, WorldConfig,
};
use lane_defence_world::query;

use high_score::ScoreStore;
use session::Session;

/// Headless Lane Defence session runner.
#[derive(Debug, Parser)]
#[command(name = "lane-defence", version, about)]
struct Args {
    /// Path layout the session plays on.
    #[arg(long, value_enum, default_value = "classic")]
    layout: LayoutArg,
    /// Number of frames to simulate.
    #[arg(long, default_value_t = 20_000)]
    frames: u32,
    /// Simulated milliseconds per frame.
    #[arg(long, default_value_t = 100)]
    frame_millis: u64,
    /// Seed for the wave director; random when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Global speed multiplier applied to the simulation.
    #[arg(long, default_value_t = 1.0)]
    speed: f32,
    /// Number of waves to start before letting the session wind down.
    #[arg(long, default_value_t = 3)]
    waves: u32,
    /// Maximum number of towers the auto-builder places.
    #[arg(long, default_value_t = 4)]
    towers: u32,
    /// Writes a JSON run report to this path.
    #[arg(long)]
    report: Option<PathBuf>,
    /// Persists the best score across runs in this file.
    #[arg(long)]
    high_score_file: Option<PathBuf>,
}

/// Layout names accepted on the command line.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum LayoutArg {
    /// The original ten-waypoint route.
    Classic,
    /// Long horizontal sweeps with tight turnarounds.
    Switchback,
    /// Diagonal shoreline route.
    Coastal,
}

impl From<LayoutArg> for PathLayout {
    fn from(value: LayoutArg) -> Self {
        match value {
            LayoutArg::Classic => PathLayout::Classic,
            LayoutArg::Switchback => PathLayout::Switchback,
            LayoutArg::Coastal => PathLayout::Coastal,
        }
    }
}

/// Summary of a finished session, serialised with `--report`.
#[derive(Debug, Serialize)]
struct RunReport {
    /// Layout the session played on.
    layout: String,
    /// Seed that drove the wave director.
    seed: u64,
    /// Frames that were simulated.
    frames: u32,
    /// Towers the auto-builder placed.
    towers_placed: u32,
    /// Enemies defeated across the whole session.
    enemies_defeated: u32,
    /// Final wave and economy counters.
    hud: HudSnapshot,
}

/// Entry point for the Lane Defence command-line interface.
fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);
    let config = WorldConfig {
        layout: args.layout.into(),
        ..WorldConfig::default()
    };

    let mut session = Session::new(config, seed);
    println!("{}", query::welcome_banner(session.world()));
    println!("layout {:?}, seed {seed}", config.layout);
    for kind in TowerKind::ALL {
        let spec = kind.spec();
        println!(
            "  {kind:?}: {} gold, range {}, damage {}",
            spec.cost, spec.range, spec.damage
        );
    }

    if (args.speed - 1.0).abs() > f32::EPSILON {
        let _ = session.submit(Command::SetSpeedMultiplier {
            multiplier: args.speed,
        });
    }

    let towers_placed = build_defence(&mut session, args.towers);
    println!("auto-builder placed {towers_placed} towers");

    let frame = Duration::from_millis(args.frame_millis);
    let mut waves_started = 0;
    let mut enemies_defeated = 0;

    for _ in 0..args.frames {
        let hud = query::hud(session.world());
        if hud.game_over {
            break;
        }
        if !hud.wave_active && waves_started < args.waves {
            for event in session.submit(Command::StartWave) {
                if let Event::WaveStarted { wave, quota } = event {
                    waves_started += 1;
                    println!("wave {wave} started, {quota} enemies inbound");
                }
            }
        }

        for event in session.advance_frame(frame) {
            match event {
                Event::EnemyDefeated { .. } => enemies_defeated += 1,
                Event::WaveCompleted { wave, bonus } => {
                    println!("wave {wave} cleared, bonus {bonus} gold");
                }
                Event::GameOver { wave, score } => {
                    println!("game over on wave {wave} with score {score}");
                }
                _ => {}
            }
        }
    }

    let hud = query::hud(session.world());
    println!(
        "session finished: wave {}, score {}, gold {}, lives {}",
        hud.wave, hud.score, hud.gold, hud.lives
    );

    if let Some(path) = args.high_score_file {
        let store = ScoreStore::new(path);
        let record = store
            .record(hud.score)
            .context("failed to update the high score slot")?;
        let best = store
            .load()
            .context("failed to read back the high score slot")?;
        if record {
            println!("new high score: {best}");
        } else {
            println!("high score to beat: {best}");
        }
    }

    if let Some(path) = args.report {
        let report = RunReport {
            layout: format!("{:?}", config.layout),
            seed,
            frames: args.frames,
            towers_placed,
            enemies_defeated,
            hud,
        };
        let contents =
            serde_json::to_string_pretty(&report).context("failed to serialise the run report")?;
        std::fs::write(&path, contents)
            .with_context(|| format!("failed to write the run report to {}", path.display()))?;
        println!("report written to {}", path.display());
    }

    Ok(())
}

/// Places basic towers on free cells that overlook the route, stopping at
/// the requested count or the first rejection.
fn build_defence(session: &mut Session, limit: u32) -> u32 {
    let kind = TowerKind::Basic;
    let range = kind.spec().range;
    let config = *query::config(session.world());
    let waypoints = query::waypoints(session.world());

    let mut placed = 0;
    'cells: for row in 0..config.rows {
        for column in 0..config.columns {
            if placed >= limit {
                break 'cells;
            }

            let cell = CellCoord::new(column, row);
            if query::placement_obstruction(session.world(), cell).is_some() {
                continue;
            }

            let centre = cell.centre(config.cell_length);
            let overlooks_route = waypoints
                .iter()
                .any(|waypoint| centre.distance_to(*waypoint) <= range);
            if !overlooks_route {
                continue;
            }

            for event in session.submit(Command::PlaceTower { cell, kind }) {
                match event {
                    Event::TowerPlaced { .. } => placed += 1,
                    Event::TowerPlacementRejected { .. } => break 'cells,
                    _ => {}
                }
            }
        }
    }
    placed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_report_serialises_to_stable_json() {
        let report = RunReport {
            layout: "Classic".to_string(),
            seed: 7,
            frames: 100,
            towers_placed: 2,
            enemies_defeated: 5,
            hud: HudSnapshot {
                wave: 1,
                gold: 85,
                lives: 10,
                score: 25,
                quota: 5,
                spawned: 5,
                wave_active: false,
                speed_multiplier: 1.0,
                paused: false,
                game_over: false,
            },
        };

        let json = serde_json::to_string(&report).expect("serialise");
        assert!(json.contains("\"layout\":\"Classic\""));
        assert!(json.contains("\"enemies_defeated\":5"));
        assert!(json.contains("\"score\":25"));
    }

    #[test]
    fn auto_builder_respects_its_limit() {
        let mut session = Session::new(WorldConfig::default(), 1);
        let placed = build_defence(&mut session, 1);
        assert_eq!(placed, 1);
        assert_eq!(
            query::tower_view(session.world()).into_vec().len(),
            1
        );
    }
}
