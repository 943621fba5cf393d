use crate::foundation::error::{MosaikaError, MosaikaResult};

pub use kurbo::{Affine, BezPath, Point, Rect};

/// Canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Create a validated canvas.
    ///
    /// The CPU rasterizer addresses surfaces with `u16` coordinates, so both
    /// dimensions must be non-zero and fit in `u16`.
    pub fn new(width: u32, height: u32) -> MosaikaResult<Self> {
        if width == 0 || height == 0 {
            return Err(MosaikaError::validation("canvas dimensions must be > 0"));
        }
        if width > u32::from(u16::MAX) || height > u32::from(u16::MAX) {
            return Err(MosaikaError::validation("canvas dimensions exceed u16"));
        }
        Ok(Self { width, height })
    }

    /// Number of pixels covered by the canvas.
    pub fn pixel_count(self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Byte length of an RGBA8 buffer covering the canvas.
    pub fn byte_len(self) -> usize {
        self.pixel_count() * 4
    }
}

/// Lossless RGBA8 snapshot of a paint surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CanvasFrame {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// RGBA8 bytes, row-major, origin top-left.
    pub data: Vec<u8>,
}

/// Session progress: elapsed over duration, clamped to the unit interval.
pub fn session_progress(elapsed_ms: u64, duration_ms: u64) -> f64 {
    if duration_ms == 0 {
        return 1.0;
    }
    (elapsed_ms as f64 / duration_ms as f64).clamp(0.0, 1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
