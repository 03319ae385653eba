//! Movement resolver advancing enemies along the route.

use std::time::Duration;

use lane_defence_core::RoutePosition;

use crate::{path::Path, Enemy};

/// Advances an enemy along the path for one tick and reports whether it
/// arrived at the base.
///
/// Effective speed is the base speed scaled by any active slow effect and
/// the global speed multiplier. A fast enemy may cross several short
/// segments within a single tick; the carry-over loop is bounded by the
/// number of segments so it always terminates.
pub(crate) fn advance(
    enemy: &mut Enemy,
    path: &Path,
    dt: Duration,
    speed_multiplier: f32,
    clock: Duration,
) -> bool {
    if let Some(slow) = enemy.slow {
        if clock >= slow.expires_at {
            enemy.slow = None;
        }
    }

    let slow_factor = enemy.slow.map_or(1.0, |slow| slow.multiplier);
    let effective_speed = enemy.base_speed * slow_factor * speed_multiplier;
    let distance = effective_speed * dt.as_secs_f32();
    if !distance.is_finite() || distance <= 0.0 {
        enemy.position = path.resolve(enemy.route);
        return enemy.route.segment() >= path.arrival_segment();
    }

    let arrival_segment = path.arrival_segment();
    let mut segment = enemy.route.segment();
    let mut travelled = enemy.route.travelled() + distance;

    while segment < arrival_segment {
        let length = path.segment_length(segment);
        if travelled < length {
            break;
        }
        travelled -= length;
        segment += 1;
    }

    if segment >= arrival_segment {
        enemy.route = RoutePosition::new(arrival_segment, 0.0);
        enemy.position = path.final_waypoint();
        return true;
    }

    enemy.route = RoutePosition::new(segment, travelled);
    enemy.position = path.resolve(enemy.route);
    false
}
