//! Row-major, 3-channel BGR pixel store.

use crate::config::CHANNELS;
use crate::world::Rgb;

pub struct FrameBuffer {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width * height * CHANNELS],
        }
    }

    /// Change resolution; contents become unspecified (zeroed on growth).
    pub fn resize(&mut self, width: usize, height: usize) {
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.pixels.resize(width * height * CHANNELS, 0);
        }
    }

    #[inline(always)]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline(always)]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixel(&self, x: usize, y: usize) -> Rgb {
        let i = (y * self.width + x) * CHANNELS;
        let px = &self.pixels[i..i + CHANNELS];
        Rgb::new(px[2], px[1], px[0])
    }

    /// Exclusive writer for screen column `x`.
    ///
    /// # Panics
    /// If `x` is outside the frame.
    pub fn column(&mut self, x: usize) -> ColumnWriter<'_> {
        assert!(x < self.width, "column {x} outside {}-wide frame", self.width);
        ColumnWriter {
            pixels: &mut self.pixels,
            x,
            width: self.width,
            height: self.height,
        }
    }

    /// Pack into `0x00RRGGBB` words for the window layer.
    pub fn to_0rgb(&self, out: &mut [u32]) {
        debug_assert_eq!(out.len(), self.width * self.height);
        bgr_to_0rgb(&self.pixels, out);
    }
}

/// Pack a loaned BGR frame into `0x00RRGGBB` words, pixel for pixel.
pub fn bgr_to_0rgb(bgr: &[u8], out: &mut [u32]) {
    for (dst, px) in out.iter_mut().zip(bgr.chunks_exact(CHANNELS)) {
        *dst = (px[2] as u32) << 16 | (px[1] as u32) << 8 | px[0] as u32;
    }
}

/// Borrowed view of one frame column; rows are written top to bottom.
pub struct ColumnWriter<'a> {
    pixels: &'a mut [u8],
    x: usize,
    width: usize,
    height: usize,
}

impl ColumnWriter<'_> {
    #[inline(always)]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline(always)]
    pub fn put(&mut self, y: usize, c: Rgb) {
        let i = (y * self.width + self.x) * CHANNELS;
        self.pixels[i] = c.b;
        self.pixels[i + 1] = c.g;
        self.pixels[i + 2] = c.r;
    }

    /// Paint rows `[from, to)` with a single colour.
    pub fn fill(&mut self, from: usize, to: usize, c: Rgb) {
        for y in from..to.min(self.height) {
            self.put(y, c);
        }
    }
}
