// Read-only wall image.  The renderer samples it through `sample` only and
// never sees the byte layout.

use std::path::Path;

/// One texel, channel order independent of the backing layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    #[inline(always)]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[inline(always)]
    pub const fn grey(v: u8) -> Self {
        Self { r: v, g: v, b: v }
    }

    /// Multiply every channel by `k` (expected in `[0, 1]`), truncating.
    #[inline]
    pub fn scaled(self, k: f32) -> Self {
        Self {
            r: (self.r as f32 * k) as u8,
            g: (self.g as f32 * k) as u8,
            b: (self.b as f32 * k) as u8,
        }
    }
}

/// Byte order of the first three channels of each texel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelOrder {
    Rgb,
    Bgr,
}

/// Things that can go wrong while building a texture.
#[derive(Debug, thiserror::Error)]
pub enum TextureError {
    #[error("failed to decode texture: {0}")]
    Decode(#[from] image::ImageError),

    #[error("texture has zero size ({width}x{height})")]
    Empty { width: usize, height: usize },

    #[error("texture needs at least 3 channels, got {0}")]
    Channels(usize),

    #[error("row stride {stride} too small for {width} texels of {channels} bytes")]
    Stride {
        stride: usize,
        width: usize,
        channels: usize,
    },

    #[error("pixel buffer holds {got} bytes, layout needs {need}")]
    ShortBuffer { got: usize, need: usize },
}

/// Immutable wall texture: `height` rows of `stride` bytes, each texel
/// `channels` bytes wide (extra channels such as alpha are ignored).
#[derive(Clone, Debug, PartialEq)]
pub struct WallTexture {
    width: usize,
    height: usize,
    stride: usize,
    channels: usize,
    order: ChannelOrder,
    pixels: Vec<u8>,
}

impl WallTexture {
    /// Wrap an existing pixel buffer after validating its layout.
    pub fn from_raw(
        width: usize,
        height: usize,
        stride: usize,
        channels: usize,
        order: ChannelOrder,
        pixels: Vec<u8>,
    ) -> Result<Self, TextureError> {
        if width == 0 || height == 0 {
            return Err(TextureError::Empty { width, height });
        }
        if channels < 3 {
            return Err(TextureError::Channels(channels));
        }
        if stride < width * channels {
            return Err(TextureError::Stride {
                stride,
                width,
                channels,
            });
        }
        let need = stride * (height - 1) + width * channels;
        if pixels.len() < need {
            return Err(TextureError::ShortBuffer {
                got: pixels.len(),
                need,
            });
        }
        Ok(Self {
            width,
            height,
            stride,
            channels,
            order,
            pixels,
        })
    }

    /// Decode any image the `image` crate understands into tightly packed RGB.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, TextureError> {
        let img = image::open(path)?.into_rgb8();
        let (w, h) = (img.width() as usize, img.height() as usize);
        Self::from_raw(w, h, w * 3, 3, ChannelOrder::Rgb, img.into_raw())
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
    pub fn stride(&self) -> usize {
        self.stride
    }

    #[inline(always)]
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Texel at column `x`, row `y`; coordinates are clamped to the image.
    #[inline]
    pub fn sample(&self, x: usize, y: usize) -> Rgb {
        let x = x.min(self.width - 1);
        let y = y.min(self.height - 1);
        let i = y * self.stride + x * self.channels;
        let px = &self.pixels[i..i + 3];
        match self.order {
            ChannelOrder::Rgb => Rgb::new(px[0], px[1], px[2]),
            ChannelOrder::Bgr => Rgb::new(px[2], px[1], px[0]),
        }
    }
}

/*======================================================================*/
/*                               Tests                                  */
/*======================================================================*/
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_respects_stride_and_channels() {
        // 2×2, 4 bytes per texel (BGRA) and 2 bytes of row padding
        let stride = 2 * 4 + 2;
        let mut px = vec![0u8; stride * 2];
        px[stride + 4..stride + 8].copy_from_slice(&[1, 2, 3, 255]);
        let tex = WallTexture::from_raw(2, 2, stride, 4, ChannelOrder::Bgr, px).unwrap();
        assert_eq!(tex.sample(1, 1), Rgb::new(3, 2, 1));
        assert_eq!(tex.sample(0, 0), Rgb::BLACK);
        // clamped
        assert_eq!(tex.sample(9, 9), Rgb::new(3, 2, 1));
    }

    #[test]
    fn bad_layouts_rejected() {
        assert!(matches!(
            WallTexture::from_raw(0, 4, 0, 3, ChannelOrder::Rgb, vec![]),
            Err(TextureError::Empty { .. })
        ));
        assert!(matches!(
            WallTexture::from_raw(2, 2, 4, 2, ChannelOrder::Rgb, vec![0; 8]),
            Err(TextureError::Channels(2))
        ));
        assert!(matches!(
            WallTexture::from_raw(2, 2, 5, 3, ChannelOrder::Rgb, vec![0; 12]),
            Err(TextureError::Stride { .. })
        ));
        assert!(matches!(
            WallTexture::from_raw(2, 2, 6, 3, ChannelOrder::Rgb, vec![0; 11]),
            Err(TextureError::ShortBuffer { got: 11, need: 12 })
        ));
    }

    #[test]
    fn open_decodes_png_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wall.png");
        let mut img = image::RgbImage::new(3, 2);
        img.put_pixel(2, 1, image::Rgb([10, 20, 30]));
        img.save(&path).unwrap();

        let tex = WallTexture::open(&path).unwrap();
        assert_eq!((tex.width(), tex.height(), tex.channels()), (3, 2, 3));
        assert_eq!(tex.sample(2, 1), Rgb::new(10, 20, 30));
    }

    #[test]
    fn open_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(WallTexture::open(dir.path().join("nope.png")).is_err());
    }

    #[test]
    fn scaled_truncates() {
        assert_eq!(Rgb::new(255, 100, 3).scaled(0.5), Rgb::new(127, 50, 1));
    }
}
