//! Session runner wiring the world and the pure systems together.

use std::time::Duration;

use lane_defence_core::{Command, Event, TowerTarget, WorldConfig};
use lane_defence_system_spawning::Spawning;
use lane_defence_system_tower_combat::TowerCombat;
use lane_defence_system_tower_targeting::TowerTargeting;
use lane_defence_world::{apply, query, World};

/// Owns the world plus the systems and drives them in a fixed frame order:
/// spawn requests from the previous frame's events, the tick, then targeting
/// and fire decisions against the post-tick snapshots.
#[derive(Debug)]
pub(crate) struct Session {
    world: World,
    spawning: Spawning,
    targeting: TowerTargeting,
    combat: TowerCombat,
    outbox: Vec<Event>,
    command_scratch: Vec<Command>,
    target_scratch: Vec<TowerTarget>,
}

impl Session {
    /// Creates a session for the given configuration and wave seed.
    pub(crate) fn new(config: WorldConfig, seed: u64) -> Self {
        Self {
            world: World::new(config),
            spawning: Spawning::new(seed),
            targeting: TowerTargeting::default(),
            combat: TowerCombat::default(),
            outbox: Vec::new(),
            command_scratch: Vec::new(),
            target_scratch: Vec::new(),
        }
    }

    /// Read-only access to the world for queries.
    pub(crate) fn world(&self) -> &World {
        &self.world
    }

    /// Applies a single out-of-band command, such as a wave start or tower
    /// placement, and returns the events it produced. The events also feed
    /// the wave director on the next frame.
    pub(crate) fn submit(&mut self, command: Command) -> Vec<Event> {
        let mut events = Vec::new();
        apply(&mut self.world, command, &mut events);
        self.outbox.extend(events.iter().copied());
        events
    }

    /// Advances the simulation by one frame and returns every event raised.
    pub(crate) fn advance_frame(&mut self, dt: Duration) -> Vec<Event> {
        let inbox = std::mem::take(&mut self.outbox);
        let mut events = Vec::new();

        self.command_scratch.clear();
        self.spawning.handle(&inbox, &mut self.command_scratch);
        for index in 0..self.command_scratch.len() {
            let command = self.command_scratch[index];
            apply(&mut self.world, command, &mut events);
        }

        apply(&mut self.world, Command::Tick { dt }, &mut events);

        let towers = query::tower_view(&self.world);
        let enemies = query::enemy_view(&self.world);
        self.target_scratch.clear();
        self.targeting
            .handle(&towers, &enemies, &mut self.target_scratch);

        let cooldowns = query::tower_cooldown_view(&self.world);
        self.command_scratch.clear();
        self.combat
            .handle(&cooldowns, &self.target_scratch, &mut self.command_scratch);
        for index in 0..self.command_scratch.len() {
            let command = self.command_scratch[index];
            apply(&mut self.world, command, &mut events);
        }

        self.outbox = events.clone();
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lane_defence_core::{CellCoord, TowerKind};

    const FRAME: Duration = Duration::from_millis(100);

    fn run_frames(session: &mut Session, frames: u32) -> Vec<Event> {
        let mut events = Vec::new();
        for _ in 0..frames {
            events.extend(session.advance_frame(FRAME));
        }
        events
    }

    #[test]
    fn towers_clear_the_opening_wave() {
        let mut session = Session::new(WorldConfig::default(), 7);
        // (1, 4) centres at (60, 180); the opening segment stays within a
        // basic tower's hundred-unit range.
        let placed = session.submit(Command::PlaceTower {
            cell: CellCoord::new(1, 4),
            kind: TowerKind::Basic,
        });
        assert!(matches!(placed.as_slice(), [Event::TowerPlaced { .. }]));

        let started = session.submit(Command::StartWave);
        assert!(matches!(started.as_slice(), [Event::WaveStarted { .. }]));

        let events = run_frames(&mut session, 600);

        let defeats = events
            .iter()
            .filter(|event| matches!(event, Event::EnemyDefeated { .. }))
            .count();
        assert_eq!(defeats, 5);
        assert!(events
            .iter()
            .any(|event| matches!(event, Event::WaveCompleted { wave: 1, .. })));

        let hud = query::hud(session.world());
        assert_eq!(hud.lives, 10);
        assert!(!hud.wave_active);
        assert!(hud.score >= 25);
    }

    #[test]
    fn undefended_enemies_cost_lives() {
        let mut session = Session::new(WorldConfig::default(), 7);
        let _ = session.submit(Command::StartWave);

        // The classic route is 1,500 units; the slowest wave-one enemy
        // arrives well within this window.
        let events = run_frames(&mut session, 20_000);

        let hud = query::hud(session.world());
        assert_eq!(hud.lives, 5);
        assert!(!hud.wave_active);
        let base_hits = events
            .iter()
            .filter(|event| matches!(event, Event::BaseHit { .. }))
            .count();
        assert_eq!(base_hits, 5);
    }

    #[test]
    fn identical_seeds_replay_identical_sessions() {
        let mut first = Session::new(WorldConfig::default(), 42);
        let mut second = Session::new(WorldConfig::default(), 42);

        for session in [&mut first, &mut second] {
            let _ = session.submit(Command::PlaceTower {
                cell: CellCoord::new(1, 4),
                kind: TowerKind::Basic,
            });
            let _ = session.submit(Command::StartWave);
        }

        let events_a = run_frames(&mut first, 1_000);
        let events_b = run_frames(&mut second, 1_000);
        assert_eq!(events_a, events_b);

        let hud_a = query::hud(first.world());
        let hud_b = query::hud(second.world());
        assert_eq!(hud_a.score, hud_b.score);
        assert_eq!(hud_a.gold, hud_b.gold);
    }

    #[test]
    fn reset_mid_wave_restores_the_opening_state() {
        let mut session = Session::new(WorldConfig::default(), 7);
        let _ = session.submit(Command::StartWave);
        let _ = run_frames(&mut session, 50);

        let events = session.submit(Command::ResetGame);
        assert_eq!(events, vec![Event::GameReset]);
        let _ = run_frames(&mut session, 50);

        let hud = query::hud(session.world());
        assert_eq!(hud.wave, 0);
        assert_eq!(hud.gold, 100);
        assert_eq!(hud.lives, 10);
        assert!(query::enemy_view(session.world()).into_vec().is_empty());
    }
}
