//! Grid traversal for one view ray.
//!
//! The walk keeps an exact continuous position and its integer cell.  Each
//! step moves the position to the next grid line the ray crosses, so every
//! cell the ray passes through is visited once and in order.
//!
//! Y grows "down" the map, so a positive angle turns from +X towards +Y.

use std::f32::consts::FRAC_PI_4;

use glam::{IVec2, Vec2};

use crate::config::{EngineConfig, Projection};
use crate::world::{TileGrid, wrap_angle};

/// Direction of travel when the ray crossed a grid line.
///
/// `Up`/`Down` crossings land on a horizontal wall face, `Left`/`Right`
/// crossings on a vertical one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Up,
    Down,
    Left,
    Right,
}

impl Side {
    /// Unit cell offset for a crossing in this direction.
    #[inline]
    pub fn step(self) -> IVec2 {
        match self {
            Side::Up => IVec2::NEG_Y,
            Side::Down => IVec2::Y,
            Side::Left => IVec2::NEG_X,
            Side::Right => IVec2::X,
        }
    }

    /// Fractional coordinate along the wall face at `hit`.
    #[inline]
    pub fn face_coord(self, hit: Vec2) -> f32 {
        match self {
            Side::Up | Side::Down => hit.x.rem_euclid(1.0),
            Side::Left | Side::Right => hit.y.rem_euclid(1.0),
        }
    }
}

/// 90° sector of a ray direction, lower bound inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Heading {
    /// `[-3π/4, -π/4)`
    Up,
    /// `[-π/4, π/4)`
    Right,
    /// `[π/4, 3π/4)`
    Down,
    /// everything else
    Left,
}

impl Heading {
    /// Classify a wrapped angle.
    pub fn of(angle: f32) -> Self {
        if (-3.0 * FRAC_PI_4..-FRAC_PI_4).contains(&angle) {
            Heading::Up
        } else if (-FRAC_PI_4..FRAC_PI_4).contains(&angle) {
            Heading::Right
        } else if (FRAC_PI_4..3.0 * FRAC_PI_4).contains(&angle) {
            Heading::Down
        } else {
            Heading::Left
        }
    }
}

/// One grid-line crossing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayStep {
    pub pos: Vec2,
    pub cell: IVec2,
    pub side: Side,
}

/// Unbounded stream of grid-line crossings along one ray.
#[derive(Clone, Debug)]
pub struct RayWalk {
    pos: Vec2,
    cell: IVec2,
    dir: Vec2,
    heading: Heading,
    unstable: f32,
}

impl RayWalk {
    pub fn new(origin: Vec2, angle: f32, unstable: f32) -> Self {
        let angle = wrap_angle(angle);
        let (s, c) = angle.sin_cos();
        Self {
            pos: origin,
            cell: origin.floor().as_ivec2(),
            dir: Vec2::new(c, s),
            heading: Heading::of(angle),
            unstable,
        }
    }

    #[inline]
    pub fn dir(&self) -> Vec2 {
        self.dir
    }

    /*──────────── edge crossings ────────────*/

    fn cross_vertical(&mut self, right: bool) -> Side {
        let edge = (self.cell.x + right as i32) as f32;
        self.pos.y += self.dir.y / self.dir.x * (edge - self.pos.x);
        self.pos.x = edge;
        let side = if right { Side::Right } else { Side::Left };
        self.cell += side.step();
        side
    }

    fn cross_horizontal(&mut self, down: bool) -> Side {
        let edge = (self.cell.y + down as i32) as f32;
        self.pos.x += self.dir.x / self.dir.y * (edge - self.pos.y);
        self.pos.y = edge;
        let side = if down { Side::Down } else { Side::Up };
        self.cell += side.step();
        side
    }

    /// Slide along a grid line without touching the other coordinate.
    fn cross_axis_aligned(&mut self, side: Side) -> Side {
        match side {
            Side::Down => self.pos.y = (self.cell.y + 1) as f32,
            Side::Up => self.pos.y = self.cell.y as f32,
            Side::Right => self.pos.x = (self.cell.x + 1) as f32,
            Side::Left => self.pos.x = self.cell.x as f32,
        }
        self.cell += side.step();
        side
    }

    /*──────────── per-heading handlers ────────────*/

    /// Mostly-horizontal ray: aim for the near vertical edge, re-route to a
    /// horizontal edge when the hit would leave the cell's y range.  The
    /// sign guards keep a ray sitting exactly on a cell corner from stepping
    /// back into the cell it just left.
    fn step_horizontal(&mut self, right: bool) -> Side {
        let edge_x = (self.cell.x + right as i32) as f32;
        let new_y = self.pos.y + self.dir.y / self.dir.x * (edge_x - self.pos.x);
        if self.dir.y > 0.0 && new_y >= (self.cell.y + 1) as f32 {
            self.cross_horizontal(true)
        } else if self.dir.y < 0.0 && new_y < self.cell.y as f32 {
            self.cross_horizontal(false)
        } else {
            self.cross_vertical(right)
        }
    }

    /// Mostly-vertical ray, mirror of [`step_horizontal`](Self::step_horizontal).
    fn step_vertical(&mut self, down: bool) -> Side {
        let edge_y = (self.cell.y + down as i32) as f32;
        let new_x = self.pos.x + self.dir.x / self.dir.y * (edge_y - self.pos.y);
        if self.dir.x > 0.0 && new_x >= (self.cell.x + 1) as f32 {
            self.cross_vertical(true)
        } else if self.dir.x < 0.0 && new_x < self.cell.x as f32 {
            self.cross_vertical(false)
        } else {
            self.cross_horizontal(down)
        }
    }

    fn step_up(&mut self) -> Side {
        self.step_vertical(false)
    }

    fn step_down(&mut self) -> Side {
        self.step_vertical(true)
    }

    fn step_right(&mut self) -> Side {
        self.step_horizontal(true)
    }

    fn step_left(&mut self) -> Side {
        self.step_horizontal(false)
    }
}

impl Iterator for RayWalk {
    type Item = RayStep;

    fn next(&mut self) -> Option<RayStep> {
        let side = if self.dir.x.abs() < self.unstable {
            self.cross_axis_aligned(if self.dir.y > 0.0 { Side::Down } else { Side::Up })
        } else if self.dir.y.abs() < self.unstable {
            self.cross_axis_aligned(if self.dir.x > 0.0 { Side::Right } else { Side::Left })
        } else {
            match self.heading {
                Heading::Up => self.step_up(),
                Heading::Right => self.step_right(),
                Heading::Down => self.step_down(),
                Heading::Left => self.step_left(),
            }
        };
        Some(RayStep {
            pos: self.pos,
            cell: self.cell,
            side,
        })
    }
}

/// Result of casting one screen column.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    /// Distance from the player to the hit along the view direction.
    pub depth: f32,
    /// Position across the wall face, in `[0, 1)`.
    pub tex_u: f32,
    pub cell: IVec2,
    pub side: Side,
}

/// Walk from `origin` along `angle` until a solid cell is entered.
///
/// `forward` is the player's unit view vector; depth is measured along it
/// rather than along the ray, which keeps straight walls straight.
pub fn cast_ray<const W: usize, const H: usize>(
    grid: &TileGrid<W, H>,
    origin: Vec2,
    angle: f32,
    forward: Vec2,
    cfg: &EngineConfig,
) -> RayHit {
    // monotone in both axes, so the border is reached within this many steps
    let max_steps = W + H + 2;

    let mut last = None;
    for step in RayWalk::new(origin, angle, cfg.ray_unstable_threshold).take(max_steps) {
        last = Some(step);
        if grid.is_solid_cell(step.cell) {
            break;
        }
    }
    let hit = last.unwrap_or(RayStep {
        pos: origin,
        cell: origin.floor().as_ivec2(),
        side: Side::Right,
    });

    RayHit {
        depth: (hit.pos - origin).dot(forward),
        tex_u: hit.side.face_coord(hit.pos),
        cell: hit.cell,
        side: hit.side,
    }
}

/// View angle of screen column `x`, spread by `atan` so that equal screen
/// distances map to equal distances on the projection plane.
#[inline]
pub fn column_angle(x: usize, player_angle: f32, proj: &Projection) -> f32 {
    let norm_offset = (x as f32 - proj.half_w) / proj.half_w;
    wrap_angle(player_angle + (norm_offset * proj.max_norm_offset).atan())
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
