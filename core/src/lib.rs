#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Lane Defence engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative world, and pure systems. Adapters submit [`Command`] values
//! describing desired mutations, the world executes those commands via its
//! `apply` entry point, and then broadcasts [`Event`] values for systems and
//! presentation collaborators to react to deterministically. Systems consume
//! event streams, query immutable snapshots, and respond exclusively with new
//! command batches.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Canonical banner emitted when the experience boots.
pub const WELCOME_BANNER: &str = "Welcome to Lane Defence.";

/// Commands that express all permissible world mutations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    /// Replaces the active path layout and resets every entity collection.
    ConfigureLayout {
        /// Layout whose waypoint table should become the active route.
        layout: PathLayout,
    },
    /// Advances the simulation clock by the provided delta time.
    Tick {
        /// Duration of simulated time that elapsed since the previous tick.
        dt: Duration,
    },
    /// Requests the start of the next wave.
    StartWave,
    /// Requests that one enemy of the given kind enter at the path start.
    SpawnEnemy {
        /// Kind of enemy the wave director selected.
        kind: EnemyKind,
    },
    /// Requests placement of a tower anchored at the provided grid cell.
    PlaceTower {
        /// Cell whose centre the tower should occupy.
        cell: CellCoord,
        /// Type of tower to construct.
        kind: TowerKind,
    },
    /// Records the tower kind a player intends to place next.
    SelectTowerKind {
        /// Kind the player highlighted in the build panel.
        kind: TowerKind,
    },
    /// Clears any previously selected tower kind.
    ClearSelection,
    /// Requests that a tower launch a projectile toward a captured aim point.
    FireProjectile {
        /// Identifier of the tower that should fire.
        tower: TowerId,
        /// Aim position captured when the fire decision was made.
        aim: Position,
    },
    /// Updates the global speed multiplier applied to the simulation.
    SetSpeedMultiplier {
        /// New time-scale factor; the reference experience toggles 1.0 and 2.0.
        multiplier: f32,
    },
    /// Toggles the pause flag that freezes the update pass.
    TogglePause,
    /// Restores the initial economy and clears every entity collection.
    ResetGame,
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Event {
    /// Indicates that the simulation clock advanced.
    TimeAdvanced {
        /// Duration of simulated time that elapsed in the tick.
        dt: Duration,
    },
    /// Confirms that a new layout became the active route.
    LayoutConfigured {
        /// Layout that is now active.
        layout: PathLayout,
    },
    /// Announces that a wave transitioned to its active state.
    WaveStarted {
        /// One-based number of the wave that started.
        wave: u32,
        /// Total enemies the wave will spawn.
        quota: u32,
    },
    /// Reports that a wave start request was rejected.
    WaveStartRejected {
        /// Specific reason the request failed.
        reason: WaveError,
    },
    /// Confirms that an enemy entered the route at the path start.
    EnemySpawned {
        /// Identifier assigned to the enemy by the world.
        enemy: EnemyId,
        /// Kind of enemy that spawned.
        kind: EnemyKind,
    },
    /// Reports that an enemy's health reached zero.
    EnemyDefeated {
        /// Identifier of the defeated enemy.
        enemy: EnemyId,
        /// Kind of the defeated enemy.
        kind: EnemyKind,
        /// Gold and score granted for the defeat.
        reward: u32,
    },
    /// Reports that a slow effect was applied to an enemy.
    EnemySlowed {
        /// Identifier of the slowed enemy.
        enemy: EnemyId,
    },
    /// Reports that an enemy reached the base and cost a life.
    BaseHit {
        /// Identifier of the enemy that arrived.
        enemy: EnemyId,
        /// Lives remaining after the hit.
        lives_remaining: u32,
    },
    /// Announces that the active wave finished and paid its bonus.
    WaveCompleted {
        /// Number of the completed wave.
        wave: u32,
        /// Bonus gold credited on completion.
        bonus: u32,
    },
    /// Announces the terminal defeat state. Emitted exactly once per game.
    GameOver {
        /// Wave the player was defeated on.
        wave: u32,
        /// Final score at the moment of defeat.
        score: u32,
    },
    /// Confirms that a tower was placed and paid for.
    TowerPlaced {
        /// Identifier assigned to the tower by the world.
        tower: TowerId,
        /// Type of tower that was placed.
        kind: TowerKind,
        /// Cell whose centre the tower occupies.
        cell: CellCoord,
    },
    /// Reports that a tower placement request was rejected.
    TowerPlacementRejected {
        /// Type of tower requested for placement.
        kind: TowerKind,
        /// Cell provided in the placement request.
        cell: CellCoord,
        /// Specific reason the placement failed.
        reason: PlacementError,
    },
    /// Confirms that a projectile was launched.
    ProjectileFired {
        /// Identifier assigned to the projectile.
        projectile: ProjectileId,
        /// Tower that launched the projectile.
        tower: TowerId,
    },
    /// Announces that the build-panel selection changed.
    SelectionChanged {
        /// Newly selected kind, or `None` after a clear.
        kind: Option<TowerKind>,
    },
    /// Announces a new global speed multiplier.
    SpeedChanged {
        /// Multiplier now in effect.
        multiplier: f32,
    },
    /// Announces that the pause flag flipped.
    PauseToggled {
        /// Whether the simulation is now paused.
        paused: bool,
    },
    /// Announces that the world returned to its initial state.
    GameReset,
}

/// Unique identifier assigned to an enemy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EnemyId(u32);

impl EnemyId {
    /// Creates a new enemy identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Unique identifier assigned to a tower.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TowerId(u32);

impl TowerId {
    /// Creates a new tower identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Unique identifier assigned to a projectile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProjectileId(u32);

impl ProjectileId {
    /// Creates a new projectile identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Point expressed in world units on the playfield.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Position {
    x: f32,
    y: f32,
}

impl Position {
    /// Creates a new position from world-unit components.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Horizontal component in world units.
    #[must_use]
    pub const fn x(&self) -> f32 {
        self.x
    }

    /// Vertical component in world units.
    #[must_use]
    pub const fn y(&self) -> f32 {
        self.y
    }

    /// Euclidean distance between two positions.
    #[must_use]
    pub fn distance_to(self, other: Position) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Location of a single grid cell expressed as column and row coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    column: u32,
    row: u32,
}

impl CellCoord {
    /// Creates a new grid cell coordinate.
    #[must_use]
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }

    /// Zero-based column index of the cell.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Zero-based row index of the cell.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }

    /// Resolves the world-unit centre of the cell for a given cell length.
    #[must_use]
    pub fn centre(&self, cell_length: f32) -> Position {
        Position::new(
            (self.column as f32 + 0.5) * cell_length,
            (self.row as f32 + 0.5) * cell_length,
        )
    }
}

/// Location along the route expressed independently of world coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoutePosition {
    segment: u32,
    travelled: f32,
}

impl RoutePosition {
    /// Creates a route position at the given segment and travelled distance.
    #[must_use]
    pub const fn new(segment: u32, travelled: f32) -> Self {
        Self { segment, travelled }
    }

    /// Route position at the very start of the path.
    #[must_use]
    pub const fn start() -> Self {
        Self::new(0, 0.0)
    }

    /// Index of the segment the position lies on.
    #[must_use]
    pub const fn segment(&self) -> u32 {
        self.segment
    }

    /// Distance travelled into the current segment, in world units.
    #[must_use]
    pub const fn travelled(&self) -> f32 {
        self.travelled
    }

    /// Total order implementing "closer to the base": greater segment index
    /// first, then greater distance into the segment.
    #[must_use]
    pub fn is_further_than(&self, other: &RoutePosition) -> bool {
        if self.segment != other.segment {
            return self.segment > other.segment;
        }
        self.travelled > other.travelled
    }
}

/// Named waypoint tables selectable through configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PathLayout {
    /// The original ten-waypoint route.
    Classic,
    /// Long horizontal sweeps with tight turnarounds.
    Switchback,
    /// Diagonal shoreline route exercising non-axis-aligned segments.
    Coastal,
}

impl PathLayout {
    /// Static waypoint table for the layout, in world units.
    #[must_use]
    pub const fn waypoints(self) -> &'static [Position] {
        match self {
            Self::Classic => &CLASSIC_WAYPOINTS,
            Self::Switchback => &SWITCHBACK_WAYPOINTS,
            Self::Coastal => &COASTAL_WAYPOINTS,
        }
    }
}

const CLASSIC_WAYPOINTS: [Position; 10] = [
    Position::new(0.0, 100.0),
    Position::new(150.0, 100.0),
    Position::new(150.0, 250.0),
    Position::new(300.0, 250.0),
    Position::new(300.0, 100.0),
    Position::new(450.0, 100.0),
    Position::new(450.0, 350.0),
    Position::new(600.0, 350.0),
    Position::new(600.0, 200.0),
    Position::new(800.0, 200.0),
];

const SWITCHBACK_WAYPOINTS: [Position; 8] = [
    Position::new(0.0, 60.0),
    Position::new(700.0, 60.0),
    Position::new(700.0, 180.0),
    Position::new(100.0, 180.0),
    Position::new(100.0, 300.0),
    Position::new(700.0, 300.0),
    Position::new(700.0, 420.0),
    Position::new(800.0, 420.0),
];

const COASTAL_WAYPOINTS: [Position; 7] = [
    Position::new(0.0, 440.0),
    Position::new(160.0, 360.0),
    Position::new(240.0, 440.0),
    Position::new(400.0, 320.0),
    Position::new(480.0, 400.0),
    Position::new(640.0, 240.0),
    Position::new(800.0, 280.0),
];

/// Static configuration applied when constructing a world.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Layout whose waypoint table defines the route.
    pub layout: PathLayout,
    /// Number of grid columns across the playfield.
    pub columns: u32,
    /// Number of grid rows down the playfield.
    pub rows: u32,
    /// Side length of a square grid cell in world units.
    pub cell_length: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            layout: PathLayout::Classic,
            columns: 20,
            rows: 12,
            cell_length: 40.0,
        }
    }
}

impl WorldConfig {
    /// Total playfield width in world units.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.columns as f32 * self.cell_length
    }

    /// Total playfield height in world units.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.rows as f32 * self.cell_length
    }
}

/// Types of enemies that traverse the route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Baseline enemy with average health and speed.
    Basic,
    /// Low-health enemy moving at double speed.
    Fast,
    /// Slow, high-health enemy.
    Tank,
    /// Rare high-value enemy headlining every fifth wave.
    Boss,
}

impl EnemyKind {
    /// Static parameter record for the kind.
    #[must_use]
    pub const fn spec(self) -> EnemySpec {
        match self {
            Self::Basic => EnemySpec {
                health: 30.0,
                speed: 1.0,
                size: 15.0,
                reward: 5,
            },
            Self::Fast => EnemySpec {
                health: 15.0,
                speed: 2.0,
                size: 10.0,
                reward: 8,
            },
            Self::Tank => EnemySpec {
                health: 80.0,
                speed: 0.5,
                size: 20.0,
                reward: 15,
            },
            Self::Boss => EnemySpec {
                health: 200.0,
                speed: 0.7,
                size: 25.0,
                reward: 50,
            },
        }
    }
}

/// Baseline combat parameters for an enemy kind before wave scaling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnemySpec {
    /// Health before the per-wave multiplier.
    pub health: f32,
    /// Movement speed in world units per second.
    pub speed: f32,
    /// Hitbox radius in world units.
    pub size: f32,
    /// Gold and score granted on defeat.
    pub reward: u32,
}

/// Types of towers the player can construct.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TowerKind {
    /// Cheap all-rounder.
    Basic,
    /// Long range, high damage, slow firing.
    Sniper,
    /// Short range with area-of-effect detonations.
    Aoe,
    /// Applies a temporary speed reduction on hit.
    Slow,
}

impl TowerKind {
    /// Static parameter record for the kind.
    #[must_use]
    pub const fn spec(self) -> TowerSpec {
        match self {
            Self::Basic => TowerSpec {
                cost: 50,
                range: 100.0,
                damage: 12.0,
                fire_rate: 1.0,
                projectile_speed: 5.0,
                aoe_radius: None,
                slow: None,
            },
            Self::Sniper => TowerSpec {
                cost: 100,
                range: 200.0,
                damage: 30.0,
                fire_rate: 0.5,
                projectile_speed: 10.0,
                aoe_radius: None,
                slow: None,
            },
            Self::Aoe => TowerSpec {
                cost: 150,
                range: 80.0,
                damage: 15.0,
                fire_rate: 0.8,
                projectile_speed: 3.0,
                aoe_radius: Some(30.0),
                slow: None,
            },
            Self::Slow => TowerSpec {
                cost: 75,
                range: 120.0,
                damage: 5.0,
                fire_rate: 0.8,
                projectile_speed: 6.0,
                aoe_radius: None,
                slow: Some(SlowEffect {
                    multiplier: 0.5,
                    duration: Duration::from_millis(2000),
                }),
            },
        }
    }

    /// Every constructible tower kind, in build-panel order.
    pub const ALL: [TowerKind; 4] = [Self::Basic, Self::Sniper, Self::Aoe, Self::Slow];
}

/// Static combat parameters for a tower kind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TowerSpec {
    /// Gold debited on placement.
    pub cost: u32,
    /// Targeting radius in world units.
    pub range: f32,
    /// Damage applied per projectile.
    pub damage: f32,
    /// Shots per second; the cooldown interval is `1000 / fire_rate` ms.
    pub fire_rate: f32,
    /// Projectile displacement per nominal frame, scaled by elapsed time.
    pub projectile_speed: f32,
    /// Detonation radius for area-of-effect projectiles.
    pub aoe_radius: Option<f32>,
    /// Slow payload applied on direct hits.
    pub slow: Option<SlowEffect>,
}

impl TowerSpec {
    /// Cooldown interval between shots.
    #[must_use]
    pub fn fire_interval(&self) -> Duration {
        Duration::from_secs_f32(1.0 / self.fire_rate)
    }
}

/// Temporary multiplicative speed reduction carried by slow projectiles.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SlowEffect {
    /// Factor applied to the victim's base speed while active.
    pub multiplier: f32,
    /// How long the reduction lasts after application.
    pub duration: Duration,
}

/// Reasons a tower placement request may be rejected by the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlacementError {
    /// The cell lies on or too close to the route.
    OnPath,
    /// The cell is already occupied by another tower.
    Occupied,
    /// The cell lies outside the configured grid.
    OutOfBounds,
    /// The player cannot afford the tower.
    InsufficientFunds,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OnPath => write!(f, "can't place a tower on the path"),
            Self::Occupied => write!(f, "can't place a tower on another tower"),
            Self::OutOfBounds => write!(f, "cell is outside the playfield"),
            Self::InsufficientFunds => write!(f, "not enough gold"),
        }
    }
}

/// Reasons a wave start request may be rejected by the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WaveError {
    /// A wave is already in progress.
    WaveInProgress,
    /// The game has ended; reset before starting another wave.
    GameOver,
}

impl fmt::Display for WaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WaveInProgress => write!(f, "wave already in progress"),
            Self::GameOver => write!(f, "game over; reset to play again"),
        }
    }
}

/// Immutable representation of a single enemy's state used for queries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnemySnapshot {
    /// Unique identifier assigned to the enemy.
    pub id: EnemyId,
    /// Kind of the enemy.
    pub kind: EnemyKind,
    /// Resolved world-unit position.
    pub position: Position,
    /// Location along the route.
    pub route: RoutePosition,
    /// Current health after wave scaling and damage.
    pub health: f32,
    /// Maximum health after wave scaling.
    pub max_health: f32,
    /// Hitbox radius in world units.
    pub size: f32,
    /// Whether a slow effect is currently active.
    pub slowed: bool,
}

/// Read-only snapshot describing all enemies on the route.
#[derive(Clone, Debug, Default)]
pub struct EnemyView {
    snapshots: Vec<EnemySnapshot>,
}

impl EnemyView {
    /// Creates a new enemy view from the provided snapshots.
    #[must_use]
    pub fn from_snapshots(mut snapshots: Vec<EnemySnapshot>) -> Self {
        snapshots.sort_by_key(|snapshot| snapshot.id);
        Self { snapshots }
    }

    /// Iterator over the captured enemy snapshots in deterministic order.
    pub fn iter(&self) -> impl Iterator<Item = &EnemySnapshot> {
        self.snapshots.iter()
    }

    /// Consumes the view, yielding the underlying snapshots.
    #[must_use]
    pub fn into_vec(self) -> Vec<EnemySnapshot> {
        self.snapshots
    }
}

/// Immutable representation of a single tower's state used for queries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TowerSnapshot {
    /// Identifier allocated to the tower by the world.
    pub id: TowerId,
    /// Kind of tower that was constructed.
    pub kind: TowerKind,
    /// Cell whose centre the tower occupies.
    pub cell: CellCoord,
    /// Resolved world-unit position of the tower centre.
    pub position: Position,
}

/// Read-only snapshot describing all towers on the playfield.
#[derive(Clone, Debug, Default)]
pub struct TowerView {
    snapshots: Vec<TowerSnapshot>,
}

impl TowerView {
    /// Creates a new tower view from the provided snapshots.
    #[must_use]
    pub fn from_snapshots(mut snapshots: Vec<TowerSnapshot>) -> Self {
        snapshots.sort_by_key(|snapshot| snapshot.id);
        Self { snapshots }
    }

    /// Iterator over the captured tower snapshots in deterministic order.
    pub fn iter(&self) -> impl Iterator<Item = &TowerSnapshot> {
        self.snapshots.iter()
    }

    /// Consumes the view, yielding the underlying snapshots.
    #[must_use]
    pub fn into_vec(self) -> Vec<TowerSnapshot> {
        self.snapshots
    }
}

/// Cooldown readiness captured for a single tower.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TowerCooldownSnapshot {
    /// Identifier of the tower.
    pub tower: TowerId,
    /// Kind of the tower.
    pub kind: TowerKind,
    /// Remaining time before the tower may fire again.
    pub ready_in: Duration,
}

/// Read-only snapshot describing every tower's cooldown state.
#[derive(Clone, Debug, Default)]
pub struct TowerCooldownView {
    snapshots: Vec<TowerCooldownSnapshot>,
}

impl TowerCooldownView {
    /// Creates a new cooldown view from the provided snapshots.
    #[must_use]
    pub fn from_snapshots(mut snapshots: Vec<TowerCooldownSnapshot>) -> Self {
        snapshots.sort_by_key(|snapshot| snapshot.tower);
        Self { snapshots }
    }

    /// Iterator over the captured cooldown snapshots in deterministic order.
    pub fn iter(&self) -> impl Iterator<Item = &TowerCooldownSnapshot> {
        self.snapshots.iter()
    }

    /// Consumes the view, yielding snapshots sorted by tower identifier.
    #[must_use]
    pub fn into_vec(self) -> Vec<TowerCooldownSnapshot> {
        self.snapshots
    }
}

/// Immutable representation of a projectile in flight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectileSnapshot {
    /// Identifier allocated to the projectile by the world.
    pub id: ProjectileId,
    /// Current world-unit position.
    pub position: Position,
    /// Aim position captured at launch.
    pub aim: Position,
    /// Whether the projectile detonates with area-of-effect damage.
    pub area_effect: bool,
}

/// Read-only snapshot describing all projectiles in flight.
#[derive(Clone, Debug, Default)]
pub struct ProjectileView {
    snapshots: Vec<ProjectileSnapshot>,
}

impl ProjectileView {
    /// Creates a new projectile view from the provided snapshots.
    #[must_use]
    pub fn from_snapshots(mut snapshots: Vec<ProjectileSnapshot>) -> Self {
        snapshots.sort_by_key(|snapshot| snapshot.id);
        Self { snapshots }
    }

    /// Iterator over the captured projectile snapshots in deterministic order.
    pub fn iter(&self) -> impl Iterator<Item = &ProjectileSnapshot> {
        self.snapshots.iter()
    }

    /// Consumes the view, yielding the underlying snapshots.
    #[must_use]
    pub fn into_vec(self) -> Vec<ProjectileSnapshot> {
        self.snapshots
    }
}

/// Target assignment produced by the targeting system for one tower.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TowerTarget {
    /// Tower the assignment belongs to.
    pub tower: TowerId,
    /// Enemy selected as the best in-range candidate.
    pub enemy: EnemyId,
    /// Enemy position captured when the assignment was computed.
    pub aim: Position,
}

/// Wave and economy counters surfaced to presentation collaborators.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HudSnapshot {
    /// One-based number of the current wave; zero before the first start.
    pub wave: u32,
    /// Gold available for tower purchases.
    pub gold: u32,
    /// Lives remaining before defeat.
    pub lives: u32,
    /// Accumulated score.
    pub score: u32,
    /// Total enemies the active wave will spawn.
    pub quota: u32,
    /// Enemies spawned so far in the active wave.
    pub spawned: u32,
    /// Whether a wave is currently active.
    pub wave_active: bool,
    /// Global speed multiplier currently in effect.
    pub speed_multiplier: f32,
    /// Whether the update pass is frozen.
    pub paused: bool,
    /// Whether the terminal defeat state was reached.
    pub game_over: bool,
}
