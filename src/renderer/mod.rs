//! Rendering abstraction layer.
//!
//! The engine turns every [`RayHit`] into a [`WallColumn`] and hands it to a
//! type implementing [`Renderer`].  The display side only ever sees the
//! finished buffer, loaned out by [`Renderer::end_frame`].

use crate::config::{EngineConfig, Projection};
use crate::engine::RayHit;
use crate::world::WallTexture;

pub mod framebuffer;
pub mod software;

pub use framebuffer::{ColumnWriter, FrameBuffer, bgr_to_0rgb};
pub use software::Software;

/// Linear fade: 1 at the eye, 0 at `fade_distance` and beyond.
#[inline]
pub fn brightness(depth: f32, fade_distance: f32) -> f32 {
    ((fade_distance - depth) / fade_distance).clamp(0.0, 1.0)
}

/// Unclipped vertical extent of one wall slice plus its shading inputs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WallSpan {
    /// First row of the wall; may be negative when the wall is close.
    pub start_y: i32,
    /// One past the last row; may exceed the screen height.
    pub end_y: i32,
    pub brightness: f32,
    pub tex_u: f32,
}

impl WallSpan {
    /// Project a hit at `depth` into a vertically centred span.
    pub fn project(depth: f32, tex_u: f32, proj: &Projection, fade_distance: f32) -> Self {
        let half = proj.height_scale / depth / 2.0;
        Self {
            start_y: (proj.mid_y - half) as i32,
            end_y: (proj.mid_y + half) as i32,
            brightness: brightness(depth, fade_distance),
            tex_u,
        }
    }

    /// Rows the texture is stretched over (the unclipped span).
    #[inline]
    pub fn range(&self) -> i32 {
        self.end_y.saturating_sub(self.start_y)
    }

    /// On-screen rows `[first, last)` for a frame `height` rows tall.
    #[inline]
    pub fn visible(&self, height: usize) -> (usize, usize) {
        let h = height as i32;
        (
            self.start_y.clamp(0, h) as usize,
            self.end_y.clamp(0, h) as usize,
        )
    }
}

/// What to draw in one screen column.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WallColumn {
    /// Background only: no wall in view, or faded out completely.
    Empty,
    Wall(WallSpan),
}

impl WallColumn {
    pub fn from_hit(hit: &RayHit, proj: &Projection, cfg: &EngineConfig) -> Self {
        if hit.depth.is_nan() || hit.depth < cfg.depth_cutoff {
            return WallColumn::Empty;
        }
        let span = WallSpan::project(hit.depth, hit.tex_u, proj, cfg.fade_distance);
        if span.brightness <= 0.0 {
            return WallColumn::Empty;
        }
        WallColumn::Wall(span)
    }
}

/// A renderer that owns the frame for the duration of one tick.
pub trait Renderer {
    /// (Re)allocate for the requested resolution.  Previous contents are
    /// not preserved; every column is rewritten before `end_frame`.
    fn begin_frame(&mut self, width: usize, height: usize);

    /// Overwrite screen column `x` top to bottom.
    fn draw_column(&mut self, x: usize, column: &WallColumn, texture: Option<&WallTexture>);

    /// Finish the frame and **loan** the 3-channel BGR buffer to `submit`.
    fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[u8], usize, usize);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Side;
    use crate::world::{ChannelOrder, Rgb};
    use glam::IVec2;

    fn hit(depth: f32) -> RayHit {
        RayHit {
            depth,
            tex_u: 0.25,
            cell: IVec2::ZERO,
            side: Side::Right,
        }
    }

    #[test]
    fn brightness_is_linear_and_clamped() {
        assert_eq!(brightness(8.0, 8.0), 0.0);
        assert!((brightness(4.0, 8.0) - 0.5).abs() < 1e-6);
        assert_eq!(brightness(0.0, 8.0), 1.0);
        assert_eq!(brightness(20.0, 8.0), 0.0);
        assert_eq!(brightness(-1.0, 8.0), 1.0);
    }

    #[test]
    fn span_is_centred_and_scales_with_inverse_depth() {
        let cfg = EngineConfig::default();
        let proj = Projection::from_config(&cfg);
        let near = WallSpan::project(1.0, 0.0, &proj, cfg.fade_distance);
        let far = WallSpan::project(2.0, 0.0, &proj, cfg.fade_distance);
        assert!((near.range() as f32 - proj.height_scale).abs() <= 2.0);
        assert!((far.range() as f32 - proj.height_scale / 2.0).abs() <= 2.0);
        let mid = cfg.screen_height as i32 / 2;
        assert!((mid - near.start_y - (near.end_y - mid)).abs() <= 1);
    }

    #[test]
    fn close_span_is_clipped_to_screen() {
        let cfg = EngineConfig::default();
        let proj = Projection::from_config(&cfg);
        let span = WallSpan::project(0.2, 0.0, &proj, cfg.fade_distance);
        assert!(span.start_y < 0);
        assert!(span.end_y > cfg.screen_height as i32);
        assert_eq!(span.visible(cfg.screen_height), (0, cfg.screen_height));
    }

    #[test]
    fn zero_cutoff_zero_depth_fills_the_column() {
        let cfg = EngineConfig {
            depth_cutoff: 0.0,
            ..EngineConfig::default()
        };
        let proj = Projection::from_config(&cfg);
        let column = WallColumn::from_hit(&hit(0.0), &proj, &cfg);
        let WallColumn::Wall(span) = column else {
            panic!("expected a wall, got {column:?}");
        };
        assert_eq!((span.start_y, span.end_y), (i32::MIN, i32::MAX));
        assert_eq!(span.range(), i32::MAX);

        let (w, h) = (4, cfg.screen_height);
        let px = vec![100u8; 2 * 2 * 3];
        let tex = WallTexture::from_raw(2, 2, 6, 3, ChannelOrder::Rgb, px).unwrap();
        for texture in [None, Some(&tex)] {
            let mut sw = Software::new(w, h);
            sw.begin_frame(w, h);
            sw.draw_column(0, &column, texture);
            assert!((0..h).all(|y| sw.frame().pixel(0, y) != Rgb::BLACK));
        }
    }

    #[test]
    fn columns_without_visible_wall_are_empty() {
        let cfg = EngineConfig::default();
        let proj = Projection::from_config(&cfg);
        assert_eq!(WallColumn::from_hit(&hit(0.0), &proj, &cfg), WallColumn::Empty);
        assert_eq!(WallColumn::from_hit(&hit(-2.0), &proj, &cfg), WallColumn::Empty);
        assert_eq!(WallColumn::from_hit(&hit(f32::NAN), &proj, &cfg), WallColumn::Empty);
        assert_eq!(
            WallColumn::from_hit(&hit(cfg.fade_distance), &proj, &cfg),
            WallColumn::Empty
        );
        assert!(matches!(
            WallColumn::from_hit(&hit(3.0), &proj, &cfg),
            WallColumn::Wall(_)
        ));
    }
}
