//! Path model resolving route positions to world coordinates.

use lane_defence_core::{PathLayout, Position, RoutePosition};

/// Minimum clearance between a tower centre and the route centreline. The
/// route is drawn 30 units wide, and placement keeps a 20 unit buffer beyond
/// the half-width.
pub(crate) const PATH_CLEARANCE: f32 = 35.0;

/// Ordered waypoint sequence with cached segment lengths.
#[derive(Clone, Debug)]
pub(crate) struct Path {
    waypoints: &'static [Position],
    segment_lengths: Vec<f32>,
}

impl Path {
    /// Builds the path for a named layout.
    pub(crate) fn from_layout(layout: PathLayout) -> Self {
        let waypoints = layout.waypoints();
        debug_assert!(waypoints.len() >= 2, "a path requires at least two points");
        let segment_lengths = waypoints
            .windows(2)
            .map(|pair| pair[0].distance_to(pair[1]))
            .collect();
        Self {
            waypoints,
            segment_lengths,
        }
    }

    /// Number of waypoints composing the path.
    #[cfg_attr(not(test), allow(dead_code))]
    pub(crate) fn point_count(&self) -> usize {
        self.waypoints.len()
    }

    /// Index that marks arrival at the base.
    pub(crate) fn arrival_segment(&self) -> u32 {
        (self.waypoints.len() - 1) as u32
    }

    /// Length of the segment starting at the given waypoint index. An
    /// out-of-range index is a programmer error; release builds clamp to the
    /// final segment.
    pub(crate) fn segment_length(&self, index: u32) -> f32 {
        let index = index as usize;
        debug_assert!(index < self.segment_lengths.len(), "segment out of range");
        let clamped = index.min(self.segment_lengths.len() - 1);
        self.segment_lengths[clamped]
    }

    /// World coordinates of the final waypoint.
    pub(crate) fn final_waypoint(&self) -> Position {
        self.waypoints[self.waypoints.len() - 1]
    }

    /// Resolves a route position into world coordinates by interpolating
    /// along the segment it lies on. Segment indices past the end clamp to
    /// the final waypoint; zero-length segments resolve to their start.
    pub(crate) fn resolve(&self, route: RoutePosition) -> Position {
        let segment = route.segment() as usize;
        if segment >= self.segment_lengths.len() {
            return self.final_waypoint();
        }

        let start = self.waypoints[segment];
        let end = self.waypoints[segment + 1];
        let length = self.segment_lengths[segment];
        if length <= f32::EPSILON {
            return start;
        }

        let ratio = (route.travelled() / length).clamp(0.0, 1.0);
        Position::new(
            start.x() + (end.x() - start.x()) * ratio,
            start.y() + (end.y() - start.y()) * ratio,
        )
    }

    /// Smallest distance from a point to any segment of the route.
    pub(crate) fn distance_to_route(&self, point: Position) -> f32 {
        let mut best = f32::INFINITY;
        for pair in self.waypoints.windows(2) {
            let distance = point_segment_distance(point, pair[0], pair[1]);
            if distance < best {
                best = distance;
            }
        }
        best
    }
}

fn point_segment_distance(point: Position, start: Position, end: Position) -> f32 {
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
