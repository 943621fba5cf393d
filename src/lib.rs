//! Mosaika is a stochastic mosaic renderer.
//!
//! It repaints a source image as an evolving cloud of colored primitives
//! (circles, squares, triangles, lines) whose positions and colors are
//! sampled from the image's own pixels. Over a fixed time budget the
//! primitives shrink and multiply, so the canvas converges from a coarse
//! blur of color toward a fine-grained abstraction of the source.
//!
//! The public API is session-oriented:
//!
//! - Load and validate a [`RenderConfig`]
//! - Normalize a decoded image into a [`PixelBuffer`]
//! - Create an [`ArtSession`] and drive it with [`ArtSession::tick`]
//! - Export the canvas with [`ArtSession::snapshot`] or [`ArtSession::write_png`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Per-frame evolution math: the progress curve and pixel sampling.
pub mod evolve;
/// CPU rasterization: primitive drawing and the accumulating paint surface.
pub mod render;
/// Boundary objects: render configuration and source pixel buffers.
pub mod scene;
/// Session-oriented driving API.
pub mod session;

pub use crate::foundation::core::{Canvas, CanvasFrame};
pub use crate::foundation::error::{MosaikaError, MosaikaResult};

pub use crate::evolve::curve::{FrameBudget, frame_budget};
pub use crate::evolve::sampler::SampledPixel;
pub use crate::render::surface::PaintSurface;
pub use crate::scene::config::{RenderConfig, ShapeKind};
pub use crate::scene::source::PixelBuffer;
pub use crate::session::art_session::{ArtSession, FrameStats, TickOutcome};
