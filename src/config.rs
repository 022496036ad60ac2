//! Tunables shared by the simulation, the ray caster and the rasteriser.
//!
//! All speeds are *per tick*; the tick rate is fixed by [`TIC_RATE`].

use std::f32::consts::PI;

pub const SCREEN_WIDTH: usize = 512;
pub const SCREEN_HEIGHT: usize = 384;
pub const CHANNELS: usize = 3;
pub const SCALE_FACTOR: usize = 2;
pub const TIC_RATE: u32 = 60;

pub const WINDOW_TITLE: &str = "RayCast Demo";

/// Engine constants.  `Default` gives the stock demo values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EngineConfig {
    /* frame */
    pub screen_width: usize,
    pub screen_height: usize,
    /// Half the horizontal field of view (radians).
    pub half_fov: f32,
    /// Depth at which walls fade fully to black.
    pub fade_distance: f32,

    /* input */
    pub mouse_sensitivity: f32, // rad / mouse unit
    pub turn_speed: f32,        // rad / tick

    /* movement (grid units / tick) */
    pub walk_speed: f32,
    pub sprint_speed: f32,
    pub accel: f32,
    /// Velocity multiplier applied every tick no movement key is held.
    pub friction: f32,
    /// Speeds (and accelerations) below this are treated as zero.
    pub stop_threshold: f32,

    /* collision */
    pub inside_threshold: f32,
    pub block_offset: f32,

    /* ray casting */
    pub ray_unstable_threshold: f32,
    pub depth_cutoff: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            half_fov: 40.0 / 180.0 * PI,
            fade_distance: 8.0,

            mouse_sensitivity: 0.0025,
            turn_speed: 2.5 / 180.0 * PI,

            walk_speed: 0.025,
            sprint_speed: 0.05,
            accel: 0.0025,
            friction: 0.8,
            stop_threshold: 0.0001,

            inside_threshold: 0.4,
            block_offset: 0.0001,

            ray_unstable_threshold: 0.0001,
            depth_cutoff: 0.0001,
        }
    }
}

/// Screen-space constants derived once from the field of view.
#[derive(Clone, Copy, Debug)]
pub struct Projection {
    pub width: usize,
    pub height: usize,
    pub half_w: f32,
    pub mid_y: f32,
    /// `tan(half_fov)`: the normalised screen offset of the outermost column.
    pub max_norm_offset: f32,
    /// Height in pixels of a wall at depth 1.
    pub height_scale: f32,
}

impl Projection {
    pub fn from_config(cfg: &EngineConfig) -> Self {
        let max_norm_offset = cfg.half_fov.tan();
        Self {
            width: cfg.screen_width,
            height: cfg.screen_height,
            half_w: cfg.screen_width as f32 / 2.0,
            mid_y: cfg.screen_height as f32 / 2.0,
            max_norm_offset,
            height_scale: cfg.screen_width as f32 / (max_norm_offset * 2.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_one_wall_spans_the_focal_extent() {
        let cfg = EngineConfig::default();
        let proj = Projection::from_config(&cfg);
        let expected = 512.0 / (2.0 * (40.0_f32).to_radians().tan());
        assert!((proj.height_scale - expected).abs() < 1e-3);
    }

    #[test]
    fn sprint_is_faster_than_walk() {
        let cfg = EngineConfig::default();
        assert!(cfg.sprint_speed > cfg.walk_speed);
        assert!(cfg.accel < cfg.walk_speed);
    }
}
