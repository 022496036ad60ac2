use glam::{IVec2, Vec2};

use super::TileGrid;

pub const LEVEL_SIZE_X: usize = 8;
pub const LEVEL_SIZE_Y: usize = 8;

/// The grid every level in this crate uses.
pub type Grid = TileGrid<LEVEL_SIZE_X, LEVEL_SIZE_Y>;

/// Demo map.  Row 3 is open from x = 1 to x = 6, so the player start
/// looks down a corridor ending at the east border wall.
pub const SAMPLE_GRID: Grid = TileGrid::new([
    [1, 1, 1, 1, 1, 1, 1, 1],
    [1, 0, 0, 0, 0, 0, 1, 1],
    [1, 1, 0, 0, 0, 0, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 0, 0, 0, 1, 0, 1],
    [1, 0, 1, 1, 0, 1, 0, 1],
    [1, 0, 0, 0, 0, 1, 0, 1],
    [1, 1, 1, 1, 1, 1, 1, 1],
]);

pub const PLAYER_START: IVec2 = IVec2::new(3, 3);

/// A map plus where the player spawns on it.
#[derive(Clone, Debug)]
pub struct Level {
    pub name: String,
    pub grid: Grid,
    pub start: IVec2,
    pub start_angle: f32,
}

impl Level {
    pub fn sample() -> Self {
        Self {
            name: "sample".into(),
            grid: SAMPLE_GRID,
            start: PLAYER_START,
            start_angle: 0.0,
        }
    }

    /// Spawn point: centre of the start tile.
    #[inline]
    pub fn spawn(&self) -> Vec2 {
        self.start.as_vec2() + Vec2::splat(0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_is_tile_centre_on_open_floor() {
        let lvl = Level::sample();
        assert_eq!(lvl.spawn(), Vec2::new(3.5, 3.5));
        assert!(!lvl.grid.is_solid_cell(lvl.start));
    }

    #[test]
    fn sample_is_walled_in() {
        let g = &SAMPLE_GRID;
        for i in 0..8 {
            assert!(g.is_solid(i, 0) && g.is_solid(i, 7));
            assert!(g.is_solid(0, i) && g.is_solid(7, i));
        }
        // east corridor from the start tile
        for x in 1..7 {
            assert!(!g.is_solid(x, 3));
        }
    }
}
