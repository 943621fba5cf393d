use crate::foundation::core::Canvas;
use crate::foundation::error::{MosaikaError, MosaikaResult};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::str::FromStr;

/// One drawable primitive family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Filled disk.
    Circle,
    /// Filled square, randomly rotated.
    Square,
    /// Filled isosceles triangle, randomly rotated.
    Triangle,
    /// Oriented line segment.
    Line,
}

impl FromStr for ShapeKind {
    type Err = MosaikaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "circle" => Ok(Self::Circle),
            "square" => Ok(Self::Square),
            "triangle" => Ok(Self::Triangle),
            "line" => Ok(Self::Line),
            other => Err(MosaikaError::validation(format!("unknown shape '{other}'"))),
        }
    }
}

/// Session control parameters.
///
/// This is the JSON-facing, collaborator-edited boundary object. It may be
/// mutated live between ticks; a tick always reads one consistent view, so
/// changes apply on the next frame and never retroactively.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Primitive families to draw from. An empty list falls back to circles.
    pub shapes: Vec<ShapeKind>,
    /// Time-driven size/count curve when true; slider-driven when false.
    pub evolution_mode: bool,
    /// Manual-mode abstraction level in [1, 100]; small values mean fine detail.
    pub abstraction: u32,
    /// Manual-mode primitives per frame; evolution-mode density factor. Must be >= 1.
    pub paint_speed: u32,
    /// Session duration in milliseconds. Must be > 0.
    pub duration_ms: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            shapes: vec![ShapeKind::Circle, ShapeKind::Square],
            evolution_mode: true,
            abstraction: 50,
            paint_speed: 40,
            duration_ms: 30_000,
        }
    }
}

impl RenderConfig {
    /// Parse a config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> MosaikaResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| MosaikaError::validation(format!("parse render config JSON: {e}")))
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> MosaikaResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            MosaikaError::validation(format!("open render config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Validate boundary invariants.
    ///
    /// Within a frame the core relies only on the curve's size/count clamps;
    /// everything else is rejected here, at the boundary.
    pub fn validate(&self) -> MosaikaResult<()> {
        self.canvas()?;
        if !(1..=100).contains(&self.abstraction) {
            return Err(MosaikaError::validation("abstraction must be in [1, 100]"));
        }
        if self.paint_speed == 0 {
            return Err(MosaikaError::validation("paint_speed must be >= 1"));
        }
        if self.duration_ms == 0 {
            return Err(MosaikaError::validation("duration_ms must be > 0"));
        }
        Ok(())
    }

    /// Canvas dimensions as a validated [`Canvas`].
    pub fn canvas(&self) -> MosaikaResult<Canvas> {
        Canvas::new(self.width, self.height)
    }

    /// The shape set with the empty-set fallback applied.
    pub fn effective_shapes(&self) -> &[ShapeKind] {
        if self.shapes.is_empty() {
            &[ShapeKind::Circle]
        } else {
            &self.shapes
        }
    }
}
