#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Fire-decision system pairing ready towers with their assigned targets.
//!
//! Targeting produces at most one assignment per tower; this system checks
//! the cooldown snapshot and requests a launch for every assignment whose
//! tower is ready. The world remains the authority: it re-validates the
//! cooldown when executing the command.

use lane_defence_core::{Command, TowerCooldownView, TowerTarget};

/// Pure system that turns target assignments into fire commands.
#[derive(Debug, Default)]
pub struct TowerCombat;

impl TowerCombat {
    /// Appends a [`Command::FireProjectile`] for each ready, targeted tower.
    pub fn handle(
        &mut self,
        cooldowns: &TowerCooldownView,
        targets: &[TowerTarget],
        out_commands: &mut Vec<Command>,
    ) {
        for target in targets {
            let ready = cooldowns
                .iter()
                .any(|snapshot| snapshot.tower == target.tower && snapshot.ready_in.is_zero());
            if ready {
                out_commands.push(Command::FireProjectile {
                    tower: target.tower,
                    aim: target.aim,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lane_defence_core::{
        EnemyId, Position, TowerCooldownSnapshot, TowerId, TowerKind,
    };
    use std::time::Duration;

    fn cooldown(id: u32, ready_in: Duration) -> TowerCooldownSnapshot {
        TowerCooldownSnapshot {
            tower: TowerId::new(id),
            kind: TowerKind::Basic,
            ready_in,
        }
    }

    fn target(id: u32, aim: Position) -> TowerTarget {
        TowerTarget {
            tower: TowerId::new(id),
            enemy: EnemyId::new(0),
            aim,
        }
    }

    #[test]
    fn ready_towers_fire_at_their_captured_aim() {
        let cooldowns = TowerCooldownView::from_snapshots(vec![cooldown(0, Duration::ZERO)]);
        let aim = Position::new(120.0, 80.0);
        let mut commands = Vec::new();

        TowerCombat::default().handle(&cooldowns, &[target(0, aim)], &mut commands);

        assert_eq!(
            commands,
            vec![Command::FireProjectile {
                tower: TowerId::new(0),
                aim,
            }]
        );
    }

    #[test]
    fn cooling_towers_hold_fire() {
        let cooldowns =
            TowerCooldownView::from_snapshots(vec![cooldown(0, Duration::from_millis(250))]);
        let mut commands = Vec::new();

        TowerCombat::default().handle(
            &cooldowns,
            &[target(0, Position::new(50.0, 50.0))],
            &mut commands,
        );

        assert!(commands.is_empty());
    }

    #[test]
    fn untracked_towers_are_skipped() {
        let cooldowns = TowerCooldownView::from_snapshots(vec![cooldown(1, Duration::ZERO)]);
        let mut commands = Vec::new();

        TowerCombat::default().handle(
            &cooldowns,
            &[target(7, Position::new(50.0, 50.0))],
            &mut commands,
        );

        assert!(commands.is_empty());
    }
}
