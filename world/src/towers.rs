//! Authoritative tower state management utilities.

use std::time::Duration;

use lane_defence_core::{CellCoord, Position, TowerId, TowerKind};

/// Tower state stored inside the world.
#[derive(Clone, Copy, Debug)]
pub(crate) struct TowerState {
    /// Identifier allocated by the world for the tower.
    pub(crate) id: TowerId,
    /// Kind of tower that was constructed.
    pub(crate) kind: TowerKind,
    /// Cell whose centre the tower occupies.
    pub(crate) cell: CellCoord,
    /// Resolved world-unit position of the tower centre.
    pub(crate) position: Position,
    /// Remaining time before the tower may fire again.
    pub(crate) cooldown: Duration,
}

/// Registry that stores towers and manages identifier allocation.
#[derive(Debug)]
pub(crate) struct TowerRegistry {
    entries: Vec<TowerState>,
    next_tower_id: u32,
}

impl TowerRegistry {
    /// Creates an empty tower registry with a reset identifier counter.
    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_tower_id: 0,
        }
    }

    /// Registers a new tower and returns the identifier allocated for it.
    /// The cooldown starts at a full fire interval, so a fresh tower only
    /// fires once that interval has elapsed.
    pub(crate) fn allocate(
        &mut self,
        kind: TowerKind,
        cell: CellCoord,
        position: Position,
    ) -> TowerId {
        let id = TowerId::new(self.next_tower_id);
        self.next_tower_id += 1;
        self.entries.push(TowerState {
            id,
            kind,
            cell,
            position,
            cooldown: kind.spec().fire_interval(),
        });
        id
    }

    /// Reports whether any tower already occupies the given cell.
    pub(crate) fn occupies(&self, cell: CellCoord) -> bool {
        self.entries.iter().any(|tower| tower.cell == cell)
    }

    /// Looks up a tower by identifier.
    pub(crate) fn get_mut(&mut self, id: TowerId) -> Option<&mut TowerState> {
        self.entries.iter_mut().find(|tower| tower.id == id)
    }

    /// Iterator over all towers in allocation order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = &TowerState> {
        self.entries.iter()
    }

    /// Mutable iterator over all towers in allocation order.
    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut TowerState> {
        self.entries.iter_mut()
    }

    /// Removes every tower and resets identifier allocation.
    pub(crate) fn clear(&mut self) {
        self.entries.clear();
        self.next_tower_id = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocation_assigns_monotonic_identifiers() {
        let mut registry = TowerRegistry::new();
        let first = registry.allocate(
            TowerKind::Basic,
            CellCoord::new(1, 1),
            Position::new(60.0, 60.0),
        );
        let second = registry.allocate(
            TowerKind::Sniper,
            CellCoord::new(2, 1),
            Position::new(100.0, 60.0),
        );

        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 1);
        assert!(registry.occupies(CellCoord::new(1, 1)));
        assert!(!registry.occupies(CellCoord::new(3, 3)));
    }

    #[test]
    fn new_towers_wait_a_full_interval_before_firing() {
        let mut registry = TowerRegistry::new();
        let id = registry.allocate(
            TowerKind::Basic,
            CellCoord::new(0, 0),
            Position::new(20.0, 20.0),
        );
        let tower = registry.get_mut(id).expect("tower exists");
        assert_eq!(tower.cooldown, TowerKind::Basic.spec().fire_interval());
    }

    #[test]
    fn clear_resets_identifier_allocation() {
        let mut registry = TowerRegistry::new();
        let _ = registry.allocate(
            TowerKind::Aoe,
            CellCoord::new(4, 4),
            Position::new(180.0, 180.0),
        );
        registry.clear();
        let id = registry.allocate(
            TowerKind::Slow,
            CellCoord::new(5, 5),
            Position::new(220.0, 220.0),
        );
        assert_eq!(id.get(), 0);
    }
}
