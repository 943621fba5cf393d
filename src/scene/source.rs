use crate::foundation::core::Canvas;
use crate::foundation::error::{MosaikaError, MosaikaResult};

/// A decoded, size-normalized RGBA8 source image.
///
/// Flat byte sequence of length `width * height * 4`, row-major, origin
/// top-left, straight (non-premultiplied) alpha. Immutable for the lifetime
/// of a session.
#[derive(Clone, Debug)]
pub struct PixelBuffer {
    canvas: Canvas,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap raw RGBA8 bytes, validating `data.len() == width * height * 4`.
    pub fn new(canvas: Canvas, data: Vec<u8>) -> MosaikaResult<Self> {
        if data.len() != canvas.byte_len() {
            return Err(MosaikaError::validation(format!(
                "pixel buffer length {} does not match {}x{} rgba8 ({} bytes)",
                data.len(),
                canvas.width,
                canvas.height,
                canvas.byte_len()
            )));
        }
        Ok(Self { canvas, data })
    }

    /// Normalize a decoded image to `canvas` size using cover-fit.
    ///
    /// Scale by `max(width/imgW, height/imgH)` so the image fully covers the
    /// canvas, then center-crop the overflow. Aspect ratio is preserved.
    pub fn from_image(img: &image::DynamicImage, canvas: Canvas) -> MosaikaResult<Self> {
        let (iw, ih) = (img.width(), img.height());
        if iw == 0 || ih == 0 {
            return Err(MosaikaError::source_unavailable("source image is empty"));
        }

        let scale = f64::max(
            f64::from(canvas.width) / f64::from(iw),
            f64::from(canvas.height) / f64::from(ih),
        );
        let sw = ((f64::from(iw) * scale).ceil() as u32).max(canvas.width);
        let sh = ((f64::from(ih) * scale).ceil() as u32).max(canvas.height);

        let scaled = if (sw, sh) == (iw, ih) {
            img.clone()
        } else {
            img.resize_exact(sw, sh, image::imageops::FilterType::CatmullRom)
        };

        let x0 = (sw - canvas.width) / 2;
        let y0 = (sh - canvas.height) / 2;
        let cropped = scaled.crop_imm(x0, y0, canvas.width, canvas.height);

        Self::new(canvas, cropped.to_rgba8().into_raw())
    }

    /// Canvas dimensions this buffer was normalized to.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Raw RGBA8 bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// RGBA at (x, y). Coordinates must be in range; the sampler only
    /// produces in-range ones.
    pub(crate) fn rgba_at(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = ((y as usize) * (self.canvas.width as usize) + (x as usize)) * 4;
        [
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ]
    }
}
