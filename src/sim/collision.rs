//! Push-out for a player that ended a move inside a solid tile.
//!
//! Movement never tests walls ahead of time; the player can only end up in a
//! solid cell by overshooting it in one tick.  The tile's quadrant holding
//! the player picks the two neighbours that could be "behind" it.  When both
//! are solid the player is in a concave corner and is pushed out on both
//! axes.  Otherwise each axis is pushed only when the player is clearly off
//! centre on it, or when it sits near the centre on both axes.

use glam::{IVec2, Vec2};

use super::PlayerState;
use crate::config::EngineConfig;
use crate::world::TileGrid;

/// Which quarter of its tile the player is in, by the sign of the offset
/// from the tile centre (zero counts as positive).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Quadrant {
    /// `dx ≥ 0, dy ≥ 0`
    DownRight,
    /// `dx < 0, dy ≥ 0`
    DownLeft,
    /// `dx < 0, dy < 0`
    UpLeft,
    /// `dx ≥ 0, dy < 0`
    UpRight,
}

impl Quadrant {
    pub fn of(offset: Vec2) -> Self {
        match (offset.x >= 0.0, offset.y >= 0.0) {
            (true, true) => Self::DownRight,
            (false, true) => Self::DownLeft,
            (false, false) => Self::UpLeft,
            (true, false) => Self::UpRight,
        }
    }

    /// Unit steps to the horizontal and vertical neighbour on this side.
    #[inline]
    pub fn neighbours(self) -> (IVec2, IVec2) {
        match self {
            Self::DownRight => (IVec2::X, IVec2::Y),
            Self::DownLeft => (IVec2::NEG_X, IVec2::Y),
            Self::UpLeft => (IVec2::NEG_X, IVec2::NEG_Y),
            Self::UpRight => (IVec2::X, IVec2::NEG_Y),
        }
    }

    /// True if both neighbours behind this quadrant are solid.
    pub fn is_corner<const W: usize, const H: usize>(
        self,
        grid: &TileGrid<W, H>,
        tile: IVec2,
    ) -> bool {
        let (h, v) = self.neighbours();
        grid.is_solid_cell(tile + h) && grid.is_solid_cell(tile + v)
    }
}

/// Axes the resolver moved the player along.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Push {
    pub x: bool,
    pub y: bool,
}

impl Push {
    #[inline]
    pub fn any(self) -> bool {
        self.x || self.y
    }
}

/// Eject `player` from the solid tile it occupies, if any, zeroing the
/// velocity on every axis it was pushed along.
pub fn resolve_collision<const W: usize, const H: usize>(
    player: &mut PlayerState,
    grid: &TileGrid<W, H>,
    cfg: &EngineConfig,
) -> Push {
    let tile = TileGrid::<W, H>::cell_of(player.pos);
    if !grid.is_solid_cell(tile) {
        return Push::default();
    }

    let reach = 0.5 + cfg.block_offset;
    let center = tile.as_vec2() + Vec2::splat(0.5);
    let d = player.pos - center;

    let horz_inside = d.x.abs() < cfg.inside_threshold;
    let vert_inside = d.y.abs() < cfg.inside_threshold;
    let corner = Quadrant::of(d).is_corner(grid, tile);
    let push_both = (horz_inside && vert_inside) || corner;

    let open = |step: IVec2| !grid.is_solid_cell(tile + step);

    let mut push = Push::default();

    if !horz_inside || push_both {
        let (sign, step) = if d.x >= 0.0 { (1.0, IVec2::X) } else { (-1.0, IVec2::NEG_X) };
        if open(step) || push_both {
            player.pos.x = center.x + sign * reach;
            player.vel.x = 0.0;
            push.x = true;
        }
    }

    if !vert_inside || push_both {
        let (sign, step) = if d.y >= 0.0 { (1.0, IVec2::Y) } else { (-1.0, IVec2::NEG_Y) };
        if open(step) || push_both {
            player.pos.y = center.y + sign * reach;
            player.vel.y = 0.0;
            push.y = true;
        }
    }

    push
}

/*────────────────────────────── Tests ──────────────────────────────*/
