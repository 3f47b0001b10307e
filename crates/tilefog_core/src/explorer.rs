//! A walker that uncovers the map as it moves

use crate::{Direction, MapError, Tile, TileContent, TilePos, WorldMap};
use rand::Rng;

/// Result of a single [`Explorer::walk`] attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkOutcome {
    /// The explorer moved and paid `cost` movement points
    Moved { to: TilePos, cost: u32 },
    /// The target is outside the map
    Blocked { target: TilePos },
    /// The step costs more points than are left
    Exhausted { cost: u32, available: u32 },
}

/// The player-controlled occupant that discovers tiles around itself
#[derive(Debug, Clone)]
pub struct Explorer {
    pub content: TileContent,
    pos: TilePos,
    pub movement_points: u32,
}

/// Movement cost used by the reference game: 1 or 5 points, at random
pub fn random_movement_cost(rng: &mut impl Rng) -> u32 {
    if rng.gen_bool(0.5) {
        1
    } else {
        5
    }
}

impl Explorer {
    /// Place an explorer on the map and uncover its start tile and surroundings
    pub fn spawn(
        map: &mut WorldMap,
        content: TileContent,
        pos: TilePos,
        movement_points: u32,
    ) -> Result<Self, MapError> {
        map.add_content(pos, content.clone())?;
        map.discover(pos)?;
        map.discover_surroundings(pos)?;
        Ok(Self {
            content,
            pos,
            movement_points,
        })
    }

    pub fn pos(&self) -> TilePos {
        self.pos
    }

    /// Try to step one tile in `direction`, paying `cost(target_tile)` points.
    ///
    /// On success the explorer's content moves to the new tile, which is
    /// discovered together with its orthogonal neighbors.
    pub fn walk<F>(
        &mut self,
        map: &mut WorldMap,
        direction: Direction,
        cost: F,
    ) -> Result<WalkOutcome, MapError>
    where
        F: FnOnce(&Tile) -> u32,
    {
        let target = self.pos.offset(direction);
        let Some(tile) = map.tile_at(target) else {
            return Ok(WalkOutcome::Blocked { target });
        };

        let cost = cost(tile);
        if cost > self.movement_points {
            return Ok(WalkOutcome::Exhausted {
                cost,
                available: self.movement_points,
            });
        }

        let content = map.remove_content(self.pos, self.content.id)?;
        map.add_content(target, content)?;
        self.pos = target;
        self.movement_points -= cost;
        map.discover(target)?;
        let uncovered = map.discover_surroundings(target)?;

        tracing::debug!(
            x = target.x,
            y = target.y,
            cost,
            remaining = self.movement_points,
            uncovered,
            "explorer walked {}",
            direction.name()
        );
        Ok(WalkOutcome::Moved { to: target, cost })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TileCategory;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn spawn_on(rows: &[&str], pos: TilePos, points: u32) -> (WorldMap, Explorer) {
        let mut map = WorldMap::from_rows(rows).unwrap();
        let explorer = Explorer::spawn(&mut map, TileContent::new("player"), pos, points).unwrap();
        (map, explorer)
    }

    #[test]
    fn spawn_discovers_start_and_surroundings() {
        let (map, explorer) = spawn_on(&["ggg", "ggg", "ggg"], TilePos::new(0, 0), 10);
        assert_eq!(map.discovered_count(), 3);
        assert_eq!(map.find_content(explorer.content.id), Some(TilePos::new(0, 0)));
    }

    #[test]
    fn walk_moves_content_and_discovers() {
        let (mut map, mut explorer) = spawn_on(&["ggg", "grg", "ggg"], TilePos::new(0, 0), 10);

        let outcome = explorer.walk(&mut map, Direction::East, |_| 3).unwrap();
        assert_eq!(
            outcome,
            WalkOutcome::Moved {
                to: TilePos::new(1, 0),
                cost: 3
            }
        );
        assert_eq!(explorer.pos(), TilePos::new(1, 0));
        assert_eq!(explorer.movement_points, 7);
        assert_eq!(map.find_content(explorer.content.id), Some(TilePos::new(1, 0)));
        assert!(map.tile_at(TilePos::new(0, 0)).unwrap().contents.is_empty());
        // (2,0) and (1,1) are newly visible
        assert_eq!(map.discovered_count(), 5);
    }

    #[test]
    fn walk_off_map_is_blocked() {
        let (mut map, mut explorer) = spawn_on(&["gg", "gg"], TilePos::new(0, 0), 10);
        let outcome = explorer.walk(&mut map, Direction::North, |_| 1).unwrap();
        assert_eq!(
            outcome,
            WalkOutcome::Blocked {
                target: TilePos::new(0, -1)
            }
        );
        assert_eq!(explorer.pos(), TilePos::new(0, 0));
        assert_eq!(explorer.movement_points, 10);
    }

    #[test]
    fn walk_without_points_is_exhausted() {
        let (mut map, mut explorer) = spawn_on(&["gg"], TilePos::new(0, 0), 4);
        let outcome = explorer.walk(&mut map, Direction::East, |_| 5).unwrap();
        assert_eq!(
            outcome,
            WalkOutcome::Exhausted {
                cost: 5,
                available: 4
            }
        );
        assert_eq!(explorer.pos(), TilePos::new(0, 0));
    }

    #[test]
    fn cost_sees_target_tile() {
        let (mut map, mut explorer) = spawn_on(&["gr"], TilePos::new(0, 0), 10);
        let outcome = explorer
            .walk(&mut map, Direction::East, |tile| match tile.category {
                TileCategory::River => 2,
                TileCategory::Grass => 1,
            })
            .unwrap();
        assert!(matches!(outcome, WalkOutcome::Moved { cost: 2, .. }));
    }

    #[test]
    fn random_cost_is_one_or_five() {
        let mut rng = SmallRng::seed_from_u64(0);
        for _ in 0..50 {
            let cost = random_movement_cost(&mut rng);
            assert!(cost == 1 || cost == 5);
        }
    }
}
