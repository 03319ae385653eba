//! Projectile flight primitives used by the combat resolver.

use std::time::Duration;

use lane_defence_core::{Position, ProjectileId, SlowEffect};

/// Distance from the captured aim at which an area-effect projectile
/// detonates.
pub(crate) const DETONATION_EPSILON: f32 = 5.0;

/// Projectile displacement values are calibrated against this update rate;
/// flight scales displacement by elapsed time to stay frame-rate
/// independent.
const NOMINAL_UPDATES_PER_SECOND: f32 = 60.0;

/// Projectile state owned by the world.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Projectile {
    pub(crate) id: ProjectileId,
    pub(crate) position: Position,
    pub(crate) aim: Position,
    pub(crate) heading: (f32, f32),
    pub(crate) speed: f32,
    pub(crate) damage: f32,
    pub(crate) aoe_radius: Option<f32>,
    pub(crate) slow: Option<SlowEffect>,
}

/// Unit vector from a launch position toward the captured aim. A degenerate
/// launch directly on top of the aim flies straight up so it still leaves
/// the playfield instead of stalling.
pub(crate) fn launch_heading(position: Position, aim: Position) -> (f32, f32) {
    let distance = position.distance_to(aim);
    if distance <= f32::EPSILON {
        return (0.0, -1.0);
    }
    (
        (aim.x() - position.x()) / distance,
        (aim.y() - position.y()) / distance,
    )
}

/// Outcome of advancing a projectile for one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum FlightStatus {
    /// Still travelling along the launch heading.
    InFlight,
    /// Within the detonation epsilon of the captured aim.
    AtAim,
    /// Left the playfield rectangle.
    OutOfBounds,
}

/// Moves a projectile in a straight line along its launch heading.
///
/// The heading never changes after launch. An area-effect projectile clamps
/// to the captured aim so the detonation point is exact; a direct projectile
/// that misses keeps flying past the aim until it leaves the playfield.
pub(crate) fn advance_projectile(
    projectile: &mut Projectile,
    dt: Duration,
    speed_multiplier: f32,
    bounds: (f32, f32),
) -> FlightStatus {
    let displacement =
        projectile.speed * speed_multiplier * dt.as_secs_f32() * NOMINAL_UPDATES_PER_SECOND;

    if displacement.is_finite() && displacement > 0.0 {
        let remaining = projectile.position.distance_to(projectile.aim);
        if projectile.aoe_radius.is_some() && displacement >= remaining {
            projectile.position = projectile.aim;
        } else {
            let (dx, dy) = projectile.heading;
            projectile.position = Position::new(
                projectile.position.x() + dx * displacement,
                projectile.position.y() + dy * displacement,
            );
        }
    }

    let (width, height) = bounds;
    let x = projectile.position.x();
    let y = projectile.position.y();
    if x < 0.0 || x > width || y < 0.0 || y > height {
        return FlightStatus::OutOfBounds;
    }

    if projectile.aoe_radius.is_some()
        && projectile.position.distance_to(projectile.aim) < DETONATION_EPSILON
    {
        return FlightStatus::AtAim;
    }

    FlightStatus::InFlight
}

/// Smallest distance from a point to the segment a projectile swept this
/// tick. Guards hit detection against a fast projectile stepping clean over
/// a hitbox in one update.
pub(crate) fn point_segment_distance(point: Position, start: Position, end: Position) -> f32 {
    let dx = end.x() - start.x();
    let dy = end.y() - start.y();
    let length_sq = dx * dx + dy * dy;
    if length_sq <= f32::EPSILON {
        return point.distance_to(start);
    }

    let t = ((point.x() - start.x()) * dx + (point.y() - start.y()) * dy) / length_sq;
    let t = t.clamp(0.0, 1.0);
    let nearest = Position::new(start.x() + dx * t, start.y() + dy * t);
    point.distance_to(nearest)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn projectile_toward(aim: Position, speed: f32, aoe_radius: Option<f32>) -> Projectile {
        let position = Position::new(0.0, 0.0);
        Projectile {
            id: ProjectileId::new(0),
            position,
            aim,
            heading: launch_heading(position, aim),
            speed,
            damage: 10.0,
            aoe_radius,
            slow: None,
        }
    }

    #[test]
    fn displacement_is_calibrated_to_sixty_updates_per_second() {
        let mut projectile = projectile_toward(Position::new(600.0, 0.0), 5.0, None);

        // One nominal frame at 60 ups covers exactly `speed` units.
        let status = advance_projectile(
            &mut projectile,
            Duration::from_secs_f32(1.0 / 60.0),
            1.0,
            (800.0, 480.0),
        );

        assert_eq!(status, FlightStatus::InFlight);
        assert!((projectile.position.x() - 5.0).abs() < 1e-3);
    }

    #[test]
    fn missed_direct_projectiles_fly_past_the_aim() {
        let mut projectile = projectile_toward(Position::new(30.0, 40.0), 2.0, None);

        // 120 units of travel against a 50-unit aim distance.
        let status =
            advance_projectile(&mut projectile, Duration::from_secs(1), 1.0, (800.0, 480.0));

        assert_eq!(status, FlightStatus::InFlight);
        assert!((projectile.position.x() - 72.0).abs() < 1e-3);
        assert!((projectile.position.y() - 96.0).abs() < 1e-3);
    }

    #[test]
    fn area_projectiles_clamp_to_the_detonation_point() {
        let mut projectile = projectile_toward(Position::new(30.0, 40.0), 100.0, Some(30.0));

        let status =
            advance_projectile(&mut projectile, Duration::from_secs(1), 1.0, (800.0, 480.0));

        assert_eq!(status, FlightStatus::AtAim);
        assert_eq!(projectile.position, projectile.aim);
    }

    #[test]
    fn leaving_the_playfield_is_reported() {
        let mut projectile = projectile_toward(Position::new(900.0, 0.0), 100.0, None);

        let status =
            advance_projectile(&mut projectile, Duration::from_secs(1), 1.0, (800.0, 480.0));

        assert_eq!(status, FlightStatus::OutOfBounds);
    }

    #[test]
    fn speed_multiplier_scales_displacement() {
        let mut single = projectile_toward(Position::new(600.0, 0.0), 5.0, None);
        let mut double = projectile_toward(Position::new(600.0, 0.0), 5.0, None);
        let dt = Duration::from_secs_f32(1.0 / 60.0);

        let _ = advance_projectile(&mut single, dt, 1.0, (800.0, 480.0));
        let _ = advance_projectile(&mut double, dt, 2.0, (800.0, 480.0));

        assert!((double.position.x() - 2.0 * single.position.x()).abs() < 1e-3);
    }

    #[test]
    fn degenerate_launches_head_off_the_playfield() {
        let aim = Position::new(100.0, 100.0);
        assert_eq!(launch_heading(aim, aim), (0.0, -1.0));
    }

    #[test]
    fn swept_segment_distance_catches_a_stepped_over_point() {
        let distance = point_segment_distance(
            Position::new(50.0, 4.0),
            Position::new(0.0, 0.0),
            Position::new(100.0, 0.0),
        );
        assert!((distance - 4.0).abs() < 1e-3);
    }
}
