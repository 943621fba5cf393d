use crate::scene::source::PixelBuffer;
use rand::Rng;

/// Alpha threshold below which a sampled pixel is skipped.
pub const MIN_SAMPLE_ALPHA: u8 = 20;

/// One successfully sampled source pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SampledPixel {
    /// Sample x coordinate.
    pub x: u32,
    /// Sample y coordinate.
    pub y: u32,
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (always >= [`MIN_SAMPLE_ALPHA`]).
    pub alpha: u8,
}

impl SampledPixel {
    /// Perceived brightness in [0, 1]: `(r + g + b) / 765`.
    pub fn brightness(self) -> f64 {
        (f64::from(self.r) + f64::from(self.g) + f64::from(self.b)) / 765.0
    }
}

/// Sample one uniformly random pixel from the source buffer.
///
/// Returns `None` for near-transparent pixels (alpha below
/// [`MIN_SAMPLE_ALPHA`]). A skipped sample paints nothing but still consumes
/// one iteration of the frame's budget at the call site.
pub fn sample_pixel<R: Rng>(source: &PixelBuffer, rng: &mut R) -> Option<SampledPixel> {
    let canvas = source.canvas();
    let x = rng.random_range(0..canvas.width);
    let y = rng.random_range(0..canvas.height);
    let [r, g, b, alpha] = source.rgba_at(x, y);
    if alpha < MIN_SAMPLE_ALPHA {
        return None;
    }
    Some(SampledPixel {
        x,
        y,
        r,
        g,
        b,
        alpha,
    })
}
