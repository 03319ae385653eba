#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Targeting engine assigning each tower its best in-range enemy.
//!
//! Candidates are ranked by progress along the route so towers always engage
//! the enemy closest to the base, matching the pressure a player feels. The
//! captured aim is the enemy's position at assignment time; projectiles never
//! home after launch.

use lane_defence_core::{EnemySnapshot, EnemyView, TowerTarget, TowerView};

/// Pure system that computes target assignments from world snapshots.
#[derive(Debug, Default)]
pub struct TowerTargeting;

impl TowerTargeting {
    /// Appends one [`TowerTarget`] per tower that has an enemy in range.
    ///
    /// Towers are visited in identifier order, so the output is deterministic
    /// for identical snapshots.
    pub fn handle(
        &mut self,
        towers: &TowerView,
        enemies: &EnemyView,
        out_targets: &mut Vec<TowerTarget>,
    ) {
        for tower in towers.iter() {
            let range = tower.kind.spec().range;
            let mut best: Option<&EnemySnapshot> = None;

            for enemy in enemies.iter() {
                if tower.position.distance_to(enemy.position) > range {
                    continue;
                }
                let further = match best {
                    Some(current) => enemy.route.is_further_than(&current.route),
                    None => true,
                };
                if further {
                    best = Some(enemy);
                }
            }

            if let Some(enemy) = best {
                out_targets.push(TowerTarget {
                    tower: tower.id,
                    enemy: enemy.id,
                    aim: enemy.position,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lane_defence_core::{
        CellCoord, EnemyId, EnemyKind, Position, RoutePosition, TowerId, TowerKind, TowerSnapshot,
    };

    fn tower(id: u32, kind: TowerKind, position: Position) -> TowerSnapshot {
        TowerSnapshot {
            id: TowerId::new(id),
            kind,
            cell: CellCoord::new(0, 0),
            position,
        }
    }

    fn enemy(id: u32, position: Position, route: RoutePosition) -> EnemySnapshot {
        EnemySnapshot {
            id: EnemyId::new(id),
            kind: EnemyKind::Basic,
            position,
            route,
            health: 30.0,
            max_health: 30.0,
            size: 15.0,
            slowed: false,
        }
    }

    fn assign(towers: Vec<TowerSnapshot>, enemies: Vec<EnemySnapshot>) -> Vec<TowerTarget> {
        let mut system = TowerTargeting::default();
        let mut targets = Vec::new();
        system.handle(
            &TowerView::from_snapshots(towers),
            &EnemyView::from_snapshots(enemies),
            &mut targets,
        );
        targets
    }

    #[test]
    fn prefers_the_enemy_furthest_along_the_route() {
        let targets = assign(
            vec![tower(0, TowerKind::Basic, Position::new(100.0, 100.0))],
            vec![
                enemy(0, Position::new(60.0, 100.0), RoutePosition::new(0, 60.0)),
                enemy(1, Position::new(140.0, 100.0), RoutePosition::new(0, 140.0)),
                enemy(2, Position::new(150.0, 130.0), RoutePosition::new(1, 30.0)),
            ],
        );

        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0].enemy, EnemyId::new(2));
        assert_eq!(targets[0].aim, Position::new(150.0, 130.0));
    }

    #[test]
    fn route_progress_beats_euclidean_proximity() {
        // Enemy 0 is nearer to the tower but earlier on the route.
        let targets = assign(
            vec![tower(0, TowerKind::Basic, Position::new(100.0, 100.0))],
            vec![
                enemy(0, Position::new(100.0, 100.0), RoutePosition::new(0, 100.0)),
                enemy(1, Position::new(150.0, 160.0), RoutePosition::new(1, 60.0)),
            ],
        );

        assert_eq!(targets[0].enemy, EnemyId::new(1));
    }

    #[test]
    fn out_of_range_enemies_are_ignored() {
        let targets = assign(
            vec![tower(0, TowerKind::Basic, Position::new(100.0, 100.0))],
            vec![enemy(
                0,
                Position::new(400.0, 100.0),
                RoutePosition::new(2, 0.0),
            )],
        );

        assert!(targets.is_empty());
    }

    #[test]
    fn range_depends_on_the_tower_kind() {
        let distant = enemy(0, Position::new(280.0, 100.0), RoutePosition::new(1, 30.0));
        let towers = vec![
            tower(0, TowerKind::Basic, Position::new(100.0, 100.0)),
            tower(1, TowerKind::Sniper, Position::new(100.0, 100.0)),
        ];

        let targets = assign(towers, vec![distant]);

        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0].tower, TowerId::new(1));
    }

    #[test]
    fn assignments_follow_tower_identifier_order() {
        let shared = enemy(0, Position::new(100.0, 100.0), RoutePosition::new(0, 100.0));
        let towers = vec![
            tower(3, TowerKind::Basic, Position::new(120.0, 100.0)),
            tower(1, TowerKind::Basic, Position::new(80.0, 100.0)),
        ];

        let targets = assign(towers, vec![shared]);

        assert_eq!(targets.len(), 2);
        assert_eq!(targets[0].tower, TowerId::new(1));
        assert_eq!(targets[1].tower, TowerId::new(3));
    }
}
