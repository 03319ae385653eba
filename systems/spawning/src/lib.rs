#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic wave director driving enemy spawn cadence.
//!
//! The system watches the world's event stream for wave lifecycle changes,
//! accumulates simulated time, and emits one [`Command::SpawnEnemy`] per
//! elapsed spawn interval until the wave quota is requested. Enemy kinds are
//! drawn from a wave-seeded generator so identical seeds replay identical
//! waves.

use std::time::Duration;

use lane_defence_core::{Command, EnemyKind, Event};

/// Base interval between spawn requests at the 1.0 speed multiplier.
const BASE_SPAWN_INTERVAL: Duration = Duration::from_millis(1_000);

/// Wave number from which tanks join the draw table.
const TANK_WAVE_THRESHOLD: u32 = 5;

/// Wave number from which bosses join the draw table.
const BOSS_WAVE_THRESHOLD: u32 = 10;

/// Every multiple of this wave number opens with a guaranteed boss.
const BOSS_HEADLINER_PERIOD: u32 = 5;

/// Pure system that schedules enemy spawns for the active wave.
#[derive(Debug)]
pub struct Spawning {
    seed: u64,
    active: Option<ActiveWave>,
    speed_multiplier: f32,
}

#[derive(Debug)]
struct ActiveWave {
    number: u32,
    quota: u32,
    requested: u32,
    accumulator: Duration,
    rng: SplitMix64,
}

impl Spawning {
    /// Creates a wave director whose draws derive from the given session seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            active: None,
            speed_multiplier: 1.0,
        }
    }

    /// Consumes world events and emits spawn commands for elapsed intervals.
    pub fn handle(&mut self, events: &[Event], out_commands: &mut Vec<Command>) {
        for event in events {
            match event {
                Event::WaveStarted { wave, quota } => {
                    self.active = Some(ActiveWave {
                        number: *wave,
                        quota: *quota,
                        requested: 0,
                        accumulator: Duration::ZERO,
                        rng: SplitMix64::new(derive_wave_seed(self.seed, *wave)),
                    });
                }
                Event::WaveCompleted { .. }
                | Event::GameOver { .. }
                | Event::GameReset
                | Event::LayoutConfigured { .. } => {
                    self.active = None;
                }
                Event::SpeedChanged { multiplier } => {
                    self.speed_multiplier = *multiplier;
                }
                Event::TimeAdvanced { dt } => {
                    self.advance(*dt, out_commands);
                }
                _ => {}
            }
        }
    }

    fn advance(&mut self, dt: Duration, out_commands: &mut Vec<Command>) {
        let Some(wave) = self.active.as_mut() else {
            return;
        };
        if wave.requested >= wave.quota {
            return;
        }

        let interval = BASE_SPAWN_INTERVAL.div_f32(self.speed_multiplier);
        wave.accumulator = wave.accumulator.saturating_add(dt);

        while wave.accumulator >= interval && wave.requested < wave.quota {
            wave.accumulator -= interval;
            let kind = draw_enemy_kind(wave.number, wave.requested, &mut wave.rng);
            wave.requested += 1;
            out_commands.push(Command::SpawnEnemy { kind });
        }
    }
}

/// Selects the kind for the next spawn of the wave.
///
/// Waves divisible by five open with a guaranteed boss; every other draw
/// consults the weighted table, which only admits tanks and bosses once the
/// wave number clears their thresholds.
fn draw_enemy_kind(wave: u32, spawn_index: u32, rng: &mut SplitMix64) -> EnemyKind {
    if spawn_index == 0 && wave % BOSS_HEADLINER_PERIOD == 0 {
        return EnemyKind::Boss;
    }

    let roll = rng.next_unit();
    if wave >= BOSS_WAVE_THRESHOLD && roll < 0.1 {
        return EnemyKind::Boss;
    }
    if wave >= TANK_WAVE_THRESHOLD && roll < 0.3 {
        return EnemyKind::Tank;
    }
    if roll < 0.4 {
        return EnemyKind::Fast;
    }
    EnemyKind::Basic
}

fn derive_wave_seed(session_seed: u64, wave: u32) -> u64 {
    session_seed ^ u64::from(wave).wrapping_mul(0x9e3779b97f4a7c15)
}

#[derive(Debug)]
struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    fn new(seed: u64) -> Self {
        let seed = if seed == 0 { 0x9e3779b97f4a7c15 } else { seed };
        Self { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e3779b97f4a7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        z ^ (z >> 31)
    }

    fn next_unit(&mut self) -> f64 {
        const SCALE: f64 = 1.0 / ((1u64 << 53) as f64);
        let value = self.next_u64() >> 11;
        (value as f64) * SCALE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started(wave: u32, quota: u32) -> Event {
        Event::WaveStarted { wave, quota }
    }

    fn advanced(millis: u64) -> Event {
        Event::TimeAdvanced {
            dt: Duration::from_millis(millis),
        }
    }

    fn drain(system: &mut Spawning, events: &[Event]) -> Vec<Command> {
        let mut commands = Vec::new();
        system.handle(events, &mut commands);
        commands
    }

    #[test]
    fn spawns_once_per_elapsed_interval() {
        let mut system = Spawning::new(11);
        let _ = drain(&mut system, &[started(1, 5)]);

        assert!(drain(&mut system, &[advanced(999)]).is_empty());
        assert_eq!(drain(&mut system, &[advanced(1)]).len(), 1);
        assert_eq!(drain(&mut system, &[advanced(2_000)]).len(), 2);
    }

    #[test]
    fn quota_caps_the_number_of_requests() {
        let mut system = Spawning::new(11);
        let _ = drain(&mut system, &[started(1, 5)]);

        let commands = drain(&mut system, &[advanced(60_000)]);
        assert_eq!(commands.len(), 5);
        assert!(drain(&mut system, &[advanced(60_000)]).is_empty());
    }

    #[test]
    fn doubled_speed_halves_the_interval() {
        let mut system = Spawning::new(11);
        let _ = drain(
            &mut system,
            &[started(1, 10), Event::SpeedChanged { multiplier: 2.0 }],
        );

        assert_eq!(drain(&mut system, &[advanced(1_000)]).len(), 2);
    }

    #[test]
    fn differing_seeds_may_draw_differing_kinds() {
        let mut rng_a = SplitMix64::new(1);
        let mut rng_b = SplitMix64::new(2);
        let draws_a: Vec<_> = (1..40)
            .map(|index| draw_enemy_kind(12, index, &mut rng_a))
            .collect();
        let draws_b: Vec<_> = (1..40)
            .map(|index| draw_enemy_kind(12, index, &mut rng_b))
            .collect();
        assert_ne!(draws_a, draws_b);
    }

    #[test]
    fn fifth_waves_open_with_a_boss() {
        let mut rng = SplitMix64::new(7);
        assert_eq!(draw_enemy_kind(5, 0, &mut rng), EnemyKind::Boss);
        assert_eq!(draw_enemy_kind(10, 0, &mut rng), EnemyKind::Boss);
    }

    #[test]
    fn early_waves_never_draw_tanks_or_bosses() {
        let mut rng = SplitMix64::new(3);
        for spawn_index in 1..200 {
            let kind = draw_enemy_kind(2, spawn_index, &mut rng);
            assert!(matches!(kind, EnemyKind::Basic | EnemyKind::Fast));
        }
    }

    #[test]
    fn wave_lifecycle_events_stop_the_cadence() {
        let mut system = Spawning::new(11);
        let _ = drain(&mut system, &[started(1, 5)]);
        let _ = drain(
            &mut system,
            &[Event::GameOver { wave: 1, score: 0 }],
        );

        assert!(drain(&mut system, &[advanced(10_000)]).is_empty());
    }
}
