//! ---------------------------------------------------------------------------
//! Classic software (CPU) column renderer
//!
//! * Fills a 3-channel **BGR** frame-buffer, one full-height column per call.
//! * No Z-buffer and no blending: each column is written exactly once per
//!   frame, top to bottom, and never read back.
//! ---------------------------------------------------------------------------

use crate::{
    renderer::{ColumnWriter, FrameBuffer, Renderer, WallColumn, WallSpan},
    world::{Rgb, WallTexture},
};

/// Colour of everything that is not wall.
pub const BACKGROUND: Rgb = Rgb::BLACK;

/*───────────────────────────────────────────────────────────────────────*/
/*                              Backend                                 */
/*───────────────────────────────────────────────────────────────────────*/

#[derive(Default)]
pub struct Software {
    frame: FrameBuffer,
}

impl Software {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            frame: FrameBuffer::new(width, height),
        }
    }

    #[inline]
    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }
}

/*──────────────────────── Renderer trait impl ────────────────────────*/
impl Renderer for Software {
    fn begin_frame(&mut self, width: usize, height: usize) {
        self.frame.resize(width, height);
    }

    fn draw_column(&mut self, x: usize, column: &WallColumn, texture: Option<&WallTexture>) {
        let mut col = self.frame.column(x);
        let h = col.height();
        match column {
            WallColumn::Empty => col.fill(0, h, BACKGROUND),
            WallColumn::Wall(span) => {
                let (y0, y1) = span.visible(h);
                col.fill(0, y0, BACKGROUND);
                match texture {
                    Some(tex) => draw_textured(&mut col, span, y0, y1, tex),
                    None => col.fill(y0, y1, Rgb::grey((span.brightness * 255.0) as u8)),
                }
                col.fill(y1, h, BACKGROUND);
            }
        }
    }

    fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[u8], usize, usize),
    {
        submit(self.frame.as_bytes(), self.frame.width(), self.frame.height());
    }
}

/*──────────────────────── column rendering ───────────────────────────*/

/// Texel column for a face coordinate in `[0, 1)`.
#[inline]
pub fn texel_column(tex_u: f32, tex_w: usize) -> usize {
    ((tex_u * tex_w as f32) as i32).clamp(0, tex_w as i32 - 1) as usize
}

/// Texel row for screen row `y`, nearest neighbour over the unclipped span.
#[inline]
pub fn texel_row(y: usize, span: &WallSpan, tex_h: usize) -> usize {
    let t = (y as i32).saturating_sub(span.start_y) as f32 / span.range() as f32;
    ((t * tex_h as f32) as i32).clamp(0, tex_h as i32 - 1) as usize
}

fn draw_textured(
    col: &mut ColumnWriter<'_>,
    span: &WallSpan,
    y0: usize,
    y1: usize,
    tex: &WallTexture,
) {
    let u = texel_column(span.tex_u, tex.width());
    for y in y0..y1 {
        let v = texel_row(y, span, tex.height());
        col.put(y, tex.sample(u, v).scaled(span.brightness));
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
