#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative world state management for Lane Defence.
//!
//! The world owns the path model, every entity collection, and the wave and
//! economy counters. Adapters and systems mutate it exclusively through
//! [`apply`], which executes a [`Command`] and appends the resulting
//! [`Event`] values for subscribers; read access goes through [`query`].

use std::time::Duration;

use lane_defence_core::{
    CellCoord, Command, EnemyId, EnemyKind, Event, PlacementError, Position, ProjectileId,
    RoutePosition, WaveError, WorldConfig, WELCOME_BANNER,
};

mod combat;
mod movement;
mod path;
mod towers;

use combat::{launch_heading, point_segment_distance, FlightStatus, Projectile};
use path::{Path, PATH_CLEARANCE};
use towers::TowerRegistry;

const INITIAL_GOLD: u32 = 100;
const INITIAL_LIVES: u32 = 10;
const ENEMIES_PER_WAVE: u32 = 5;
const WAVE_BONUS_PER_WAVE: u32 = 10;
const HEALTH_SCALING_PER_WAVE: f32 = 0.1;

/// Represents the authoritative Lane Defence world state.
#[derive(Debug)]
pub struct World {
    banner: &'static str,
    config: WorldConfig,
    path: Path,
    enemies: Vec<Enemy>,
    towers: TowerRegistry,
    projectiles: Vec<Projectile>,
    next_enemy_id: u32,
    next_projectile_id: u32,
    wave: WaveState,
    gold: u32,
    lives: u32,
    score: u32,
    selected: Option<lane_defence_core::TowerKind>,
    speed_multiplier: f32,
    paused: bool,
    game_over: bool,
    clock: Duration,
}

impl World {
    /// Creates a new world ready for simulation with the given configuration.
    #[must_use]
    pub fn new(config: WorldConfig) -> Self {
        Self {
            banner: WELCOME_BANNER,
            path: Path::from_layout(config.layout),
            config,
            enemies: Vec::new(),
            towers: TowerRegistry::new(),
            projectiles: Vec::new(),
            next_enemy_id: 0,
            next_projectile_id: 0,
            wave: WaveState::idle(),
            gold: INITIAL_GOLD,
            lives: INITIAL_LIVES,
            score: 0,
            selected: None,
            speed_multiplier: 1.0,
            paused: false,
            game_over: false,
            clock: Duration::ZERO,
        }
    }

    fn reset(&mut self) {
        self.enemies.clear();
        self.towers.clear();
        self.projectiles.clear();
        self.next_enemy_id = 0;
        self.next_projectile_id = 0;
        self.wave = WaveState::idle();
        self.gold = INITIAL_GOLD;
        self.lives = INITIAL_LIVES;
        self.score = 0;
        self.selected = None;
        self.paused = false;
        self.game_over = false;
        self.clock = Duration::ZERO;
    }

    fn tick(&mut self, dt: Duration, out_events: &mut Vec<Event>) {
        self.clock = self.clock.saturating_add(dt);
        out_events.push(Event::TimeAdvanced { dt });

        self.advance_enemies(dt, out_events);
        for tower in self.towers.iter_mut() {
            tower.cooldown = tower.cooldown.saturating_sub(dt);
        }
        self.advance_projectiles(dt, out_events);
        self.check_wave_completion(out_events);
    }

    fn advance_enemies(&mut self, dt: Duration, out_events: &mut Vec<Event>) {
        // Reverse index iteration keeps in-place removal from skipping
        // elements.
        for index in (0..self.enemies.len()).rev() {
            let arrived = movement::advance(
                &mut self.enemies[index],
                &self.path,
                dt,
                self.speed_multiplier,
                self.clock,
            );
            if !arrived {
                continue;
            }

            let enemy = self.enemies.remove(index);
            if self.game_over {
                continue;
            }

            self.lives = self.lives.saturating_sub(1);
            out_events.push(Event::BaseHit {
                enemy: enemy.id,
                lives_remaining: self.lives,
            });

            if self.lives == 0 {
                self.game_over = true;
                out_events.push(Event::GameOver {
                    wave: self.wave.number,
                    score: self.score,
                });
            }
        }
    }

    fn advance_projectiles(&mut self, dt: Duration, out_events: &mut Vec<Event>) {
        let bounds = (self.config.width(), self.config.height());
        let mut projectiles = std::mem::take(&mut self.projectiles);

        for index in (0..projectiles.len()).rev() {
            let swept_from = projectiles[index].position;
            let status =
                combat::advance_projectile(&mut projectiles[index], dt, self.speed_multiplier, bounds);
            let projectile = projectiles[index];

            if let Some(radius) = projectile.aoe_radius {
                if status == FlightStatus::AtAim {
                    self.detonate(projectile.aim, radius, projectile.damage, out_events);
                    let _ = projectiles.remove(index);
                } else if status == FlightStatus::OutOfBounds {
                    let _ = projectiles.remove(index);
                }
                continue;
            }

            if self.resolve_direct_hit(&projectile, swept_from, out_events)
                || status == FlightStatus::OutOfBounds
            {
                let _ = projectiles.remove(index);
            }
        }

        self.projectiles = projectiles;
    }

    fn detonate(&mut self, centre: Position, radius: f32, damage: f32, out_events: &mut Vec<Event>) {
        // Damage is uniform within the radius; no distance falloff.
        for index in (0..self.enemies.len()).rev() {
            if self.enemies[index].position.distance_to(centre) <= radius {
                let _ = self.damage_enemy(index, damage, out_events);
            }
        }
    }

    fn resolve_direct_hit(
        &mut self,
        projectile: &Projectile,
        swept_from: Position,
        out_events: &mut Vec<Event>,
    ) -> bool {
        for index in 0..self.enemies.len() {
            // Test against the whole segment swept this tick so a fast
            // projectile cannot step clean over a hitbox.
            let within = point_segment_distance(
                self.enemies[index].position,
                swept_from,
                projectile.position,
            ) < self.enemies[index].size;
            if !within {
                continue;
            }

            if let Some(effect) = projectile.slow {
                let expires_at = self.clock.saturating_add(effect.duration);
                let enemy = &mut self.enemies[index];
                enemy.slow = Some(ActiveSlow {
                    multiplier: effect.multiplier,
                    expires_at,
                });
                out_events.push(Event::EnemySlowed { enemy: enemy.id });
            }

            let _ = self.damage_enemy(index, projectile.damage, out_events);
            return true;
        }
        false
    }

    fn damage_enemy(&mut self, index: usize, damage: f32, out_events: &mut Vec<Event>) -> bool {
        let enemy = &mut self.enemies[index];
        enemy.health -= damage;
        if enemy.health > 0.0 {
            return false;
        }

        let defeated = self.enemies.remove(index);
        self.gold += defeated.reward;
        self.score += defeated.reward;
        out_events.push(Event::EnemyDefeated {
            enemy: defeated.id,
            kind: defeated.kind,
            reward: defeated.reward,
        });
        true
    }

    fn check_wave_completion(&mut self, out_events: &mut Vec<Event>) {
        if self.game_over || !self.wave.active {
            return;
        }
        if self.wave.spawned < self.wave.quota || !self.enemies.is_empty() {
            return;
        }

        self.wave.active = false;
        let bonus = self.wave.number * WAVE_BONUS_PER_WAVE;
        self.gold += bonus;
        out_events.push(Event::WaveCompleted {
            wave: self.wave.number,
            bonus,
        });
    }

    fn obstruction(&self, cell: CellCoord) -> Option<PlacementError> {
        if cell.column() >= self.config.columns || cell.row() >= self.config.rows {
            return Some(PlacementError::OutOfBounds);
        }

        let centre = cell.centre(self.config.cell_length);
        if self.path.distance_to_route(centre) <= PATH_CLEARANCE {
            return Some(PlacementError::OnPath);
        }

        if self.towers.occupies(cell) {
            return Some(PlacementError::Occupied);
        }

        None
    }

    fn validate_placement(
        &self,
        cell: CellCoord,
        kind: lane_defence_core::TowerKind,
    ) -> Option<PlacementError> {
        if let Some(reason) = self.obstruction(cell) {
            return Some(reason);
        }
        if self.gold < kind.spec().cost {
            return Some(PlacementError::InsufficientFunds);
        }
        None
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new(WorldConfig::default())
    }
}

/// Applies the provided command to the world, mutating state deterministically.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::ConfigureLayout { layout } => {
            world.config.layout = layout;
            world.path = Path::from_layout(layout);
            world.reset();
            out_events.push(Event::LayoutConfigured { layout });
        }
        Command::Tick { dt } => {
            if world.paused || world.game_over {
                return;
            }
            world.tick(dt, out_events);
        }
        Command::StartWave => {
            if world.game_over {
                out_events.push(Event::WaveStartRejected {
                    reason: WaveError::GameOver,
                });
                return;
            }
            if world.wave.active {
                out_events.push(Event::WaveStartRejected {
                    reason: WaveError::WaveInProgress,
                });
                return;
            }

            world.wave.number += 1;
            world.wave.quota = world.wave.number * ENEMIES_PER_WAVE;
            world.wave.spawned = 0;
            world.wave.active = true;
            out_events.push(Event::WaveStarted {
                wave: world.wave.number,
                quota: world.wave.quota,
            });
        }
        Command::SpawnEnemy { kind } => {
            if world.game_over || !world.wave.active || world.wave.spawned >= world.wave.quota {
                return;
            }

            let spec = kind.spec();
            let scale =
                1.0 + world.wave.number.saturating_sub(1) as f32 * HEALTH_SCALING_PER_WAVE;
            let health = spec.health * scale;
            let id = EnemyId::new(world.next_enemy_id);
            world.next_enemy_id += 1;
            let route = RoutePosition::start();
            let position = world.path.resolve(route);

            world.enemies.push(Enemy {
                id,
                kind,
                health,
                max_health: health,
                base_speed: spec.speed,
                size: spec.size,
                reward: spec.reward,
                route,
                position,
                slow: None,
            });
            world.wave.spawned += 1;
            out_events.push(Event::EnemySpawned { enemy: id, kind });
        }
        Command::PlaceTower { cell, kind } => {
            if world.game_over {
                return;
            }
            if let Some(reason) = world.validate_placement(cell, kind) {
                out_events.push(Event::TowerPlacementRejected { kind, cell, reason });
                return;
            }

            world.gold -= kind.spec().cost;
            let position = cell.centre(world.config.cell_length);
            let tower = world.towers.allocate(kind, cell, position);
            out_events.push(Event::TowerPlaced { tower, kind, cell });
        }
        Command::SelectTowerKind { kind } => {
            world.selected = Some(kind);
            out_events.push(Event::SelectionChanged { kind: Some(kind) });
        }
        Command::ClearSelection => {
            world.selected = None;
            out_events.push(Event::SelectionChanged { kind: None });
        }
        Command::FireProjectile { tower, aim } => {
            if world.game_over || world.paused {
                return;
            }

            let (kind, position) = match world.towers.get_mut(tower) {
                Some(state) if state.cooldown.is_zero() => {
                    let spec = state.kind.spec();
                    state.cooldown = spec.fire_interval();
                    (state.kind, state.position)
                }
                _ => return,
            };

            let spec = kind.spec();
            let id = ProjectileId::new(world.next_projectile_id);
            world.next_projectile_id += 1;
            world.projectiles.push(Projectile {
                id,
                position,
                aim,
                heading: launch_heading(position, aim),
                speed: spec.projectile_speed,
                damage: spec.damage,
                aoe_radius: spec.aoe_radius,
                slow: spec.slow,
            });
            out_events.push(Event::ProjectileFired {
                projectile: id,
                tower,
            });
        }
        Command::SetSpeedMultiplier { multiplier } => {
            if !multiplier.is_finite() || multiplier <= 0.0 {
                return;
            }
            world.speed_multiplier = multiplier;
            out_events.push(Event::SpeedChanged { multiplier });
        }
        Command::TogglePause => {
            world.paused = !world.paused;
            out_events.push(Event::PauseToggled {
                paused: world.paused,
            });
        }
        Command::ResetGame => {
            world.reset();
            out_events.push(Event::GameReset);
        }
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use lane_defence_core::{
        CellCoord, EnemySnapshot, EnemyView, HudSnapshot, PlacementError, Position,
        ProjectileSnapshot, ProjectileView, TowerCooldownSnapshot, TowerCooldownView, TowerKind,
        TowerSnapshot, TowerView, WorldConfig,
    };

    use super::World;

    /// Retrieves the welcome banner that adapters may display to players.
    #[must_use]
    pub fn welcome_banner(world: &World) -> &'static str {
        world.banner
    }

    /// Provides read-only access to the active configuration.
    #[must_use]
    pub fn config(world: &World) -> &WorldConfig {
        &world.config
    }

    /// Waypoint table of the active route, for rendering collaborators.
    #[must_use]
    pub fn waypoints(world: &World) -> &'static [Position] {
        world.config.layout.waypoints()
    }

    /// Captures a read-only view of the enemies on the route.
    #[must_use]
    pub fn enemy_view(world: &World) -> EnemyView {
        EnemyView::from_snapshots(
            world
                .enemies
                .iter()
                .map(|enemy| EnemySnapshot {
                    id: enemy.id,
                    kind: enemy.kind,
                    position: enemy.position,
                    route: enemy.route,
                    health: enemy.health,
                    max_health: enemy.max_health,
                    size: enemy.size,
                    slowed: enemy.slow.is_some(),
                })
                .collect(),
        )
    }

    /// Captures a read-only view of the towers on the playfield.
    #[must_use]
    pub fn tower_view(world: &World) -> TowerView {
        TowerView::from_snapshots(
            world
                .towers
                .iter()
                .map(|tower| TowerSnapshot {
                    id: tower.id,
                    kind: tower.kind,
                    cell: tower.cell,
                    position: tower.position,
                })
                .collect(),
        )
    }

    /// Captures every tower's cooldown readiness.
    #[must_use]
    pub fn tower_cooldown_view(world: &World) -> TowerCooldownView {
        TowerCooldownView::from_snapshots(
            world
                .towers
                .iter()
                .map(|tower| TowerCooldownSnapshot {
                    tower: tower.id,
                    kind: tower.kind,
                    ready_in: tower.cooldown,
                })
                .collect(),
        )
    }

    /// Captures a read-only view of the projectiles in flight.
    #[must_use]
    pub fn projectile_view(world: &World) -> ProjectileView {
        ProjectileView::from_snapshots(
            world
                .projectiles
                .iter()
                .map(|projectile| ProjectileSnapshot {
                    id: projectile.id,
                    position: projectile.position,
                    aim: projectile.aim,
                    area_effect: projectile.aoe_radius.is_some(),
                })
                .collect(),
        )
    }

    /// Wave and economy counters for presentation collaborators.
    #[must_use]
    pub fn hud(world: &World) -> HudSnapshot {
        HudSnapshot {
            wave: world.wave.number,
            gold: world.gold,
            lives: world.lives,
            score: world.score,
            quota: world.wave.quota,
            spawned: world.wave.spawned,
            wave_active: world.wave.active,
            speed_multiplier: world.speed_multiplier,
            paused: world.paused,
            game_over: world.game_over,
        }
    }

    /// Tower kind currently highlighted in the build panel, if any.
    #[must_use]
    pub fn selected_tower_kind(world: &World) -> Option<TowerKind> {
        world.selected
    }

    /// Reports why a cell cannot host a tower, ignoring affordability.
    /// Intended for placement previews.
    #[must_use]
    pub fn placement_obstruction(world: &World, cell: CellCoord) -> Option<PlacementError> {
        world.obstruction(cell)
    }
}

/// Enemy state owned by the world.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Enemy {
    pub(crate) id: EnemyId,
    pub(crate) kind: EnemyKind,
    pub(crate) health: f32,
    pub(crate) max_health: f32,
    pub(crate) base_speed: f32,
    pub(crate) size: f32,
    pub(crate) reward: u32,
    pub(crate) route: RoutePosition,
    pub(crate) position: Position,
    pub(crate) slow: Option<ActiveSlow>,
}

/// Slow effect applied to an enemy, expiring against the simulation clock.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ActiveSlow {
    pub(crate) multiplier: f32,
    pub(crate) expires_at: Duration,
}

#[derive(Clone, Copy, Debug)]
struct WaveState {
    number: u32,
    quota: u32,
    spawned: u32,
    active: bool,
}

impl WaveState {
    fn idle() -> Self {
        Self {
            number: 0,
            quota: 0,
            spawned: 0,
            active: false,
        }
    }
}
