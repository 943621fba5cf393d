use crate::evolve::curve::{FrameBudget, frame_budget};
use crate::evolve::sampler::sample_pixel;
use crate::foundation::core::{CanvasFrame, session_progress};
use crate::foundation::error::{MosaikaError, MosaikaResult};
use crate::render::primitives::{draw_primitive, modulated_size};
use crate::render::surface::{PaintSurface, SESSION_BACKGROUND};
use crate::scene::config::RenderConfig;
use crate::scene::source::PixelBuffer;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use std::path::Path;

/// What one call to [`ArtSession::tick`] did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TickOutcome {
    /// No session is running. A stale or early callback lands here and
    /// paints nothing.
    Idle,
    /// One frame batch was painted onto the canvas.
    Painted(FrameStats),
    /// The session's time budget elapsed; the loop is Idle again. Reported
    /// exactly once per session.
    Completed,
}

/// Per-frame observability record.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameStats {
    /// Session progress in [0, 1] at this frame.
    pub progress: f64,
    /// Base primitive size chosen by the curve.
    pub base_size: f64,
    /// Sample+draw iterations budgeted (`painted + skipped`).
    pub budget: u32,
    /// Primitives actually painted.
    pub painted: u32,
    /// Samples skipped for near-transparency.
    pub skipped: u32,
}

#[derive(Clone, Copy)]
enum LoopState {
    Idle,
    Running { start_ms: u64 },
}

/// One drawing session: config, source buffer, paint surface, RNG, and the
/// frame loop's state machine.
///
/// Single-threaded and caller-driven. The display-aligned scheduler is the
/// collaborator, which calls [`ArtSession::tick`] once per frame with the
/// current clock in milliseconds. Exactly one loop can run at a time:
/// [`ArtSession::start`] cancels any prior loop synchronously before
/// touching shared state, and a tick arriving after [`ArtSession::cancel`]
/// observes Idle and paints nothing.
pub struct ArtSession {
    config: RenderConfig,
    source: Option<PixelBuffer>,
    surface: PaintSurface,
    rng: Pcg32,
    state: LoopState,
}

impl ArtSession {
    /// Create an idle session from a validated config and an RNG seed.
    ///
    /// The seed makes a whole session reproducible: identical config, source
    /// and tick times give an identical canvas.
    pub fn new(config: RenderConfig, seed: u64) -> MosaikaResult<Self> {
        config.validate()?;
        let surface = PaintSurface::new(config.canvas()?)?;
        Ok(Self {
            config,
            source: None,
            surface,
            rng: Pcg32::seed_from_u64(seed),
            state: LoopState::Idle,
        })
    }

    /// Current config.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Live config mutation channel.
    ///
    /// Changes apply on the next tick, never retroactively. Canvas
    /// dimensions are fixed by the surface for the session's lifetime.
    pub fn config_mut(&mut self) -> &mut RenderConfig {
        &mut self.config
    }

    /// True while the loop is Running.
    pub fn is_running(&self) -> bool {
        matches!(self.state, LoopState::Running { .. })
    }

    /// Start a session over `source` at clock time `now_ms`.
    ///
    /// Any running loop is cancelled first. The source must match the
    /// session canvas; on mismatch this reports
    /// [`MosaikaError::SourceUnavailable`] and the session stays Idle.
    /// On success the canvas is cleared to the dark session background and
    /// the loop enters Running.
    #[tracing::instrument(skip(self, source))]
    pub fn start(&mut self, source: PixelBuffer, now_ms: u64) -> MosaikaResult<()> {
        self.cancel();
        if source.canvas() != self.surface.canvas() {
            return Err(MosaikaError::source_unavailable(format!(
                "source is {}x{}, session canvas is {}x{}",
                source.canvas().width,
                source.canvas().height,
                self.surface.canvas().width,
                self.surface.canvas().height,
            )));
        }
        self.surface.clear(SESSION_BACKGROUND);
        self.source = Some(source);
        self.state = LoopState::Running { start_ms: now_ms };
        Ok(())
    }

    /// Force the loop to Idle. Idempotent; the canvas keeps its pixels.
    pub fn cancel(&mut self) {
        self.state = LoopState::Idle;
    }

    /// Run one frame of the loop at clock time `now_ms`.
    ///
    /// Computes elapsed time against the session start, asks the curve for
    /// the frame's size/count budget, then runs `count` sample+draw
    /// iterations. Near-transparent samples skip the draw but still spend
    /// budget. Past the duration the loop transitions to Idle and reports
    /// [`TickOutcome::Completed`]; what happens next is the caller's policy.
    #[tracing::instrument(skip(self), level = "trace")]
    pub fn tick(&mut self, now_ms: u64) -> MosaikaResult<TickOutcome> {
        let LoopState::Running { start_ms } = self.state else {
            return Ok(TickOutcome::Idle);
        };

        let elapsed = now_ms.saturating_sub(start_ms);
        if elapsed > self.config.duration_ms {
            self.state = LoopState::Idle;
            return Ok(TickOutcome::Completed);
        }

        let source = self
            .source
            .as_ref()
            .ok_or_else(|| MosaikaError::session("running loop has no source buffer"))?;

        let progress = session_progress(elapsed, self.config.duration_ms);
        let FrameBudget { base_size, count } = frame_budget(progress, &self.config);
        let shapes = self.config.effective_shapes();

        let mut painted = 0u32;
        let mut skipped = 0u32;
        let rng = &mut self.rng;
        self.surface.paint_frame(|ctx| {
            for _ in 0..count {
                // A skipped sample still spends one iteration of the budget.
                let Some(px) = sample_pixel(source, rng) else {
                    skipped += 1;
                    continue;
                };
                let shape = shapes[rng.random_range(0..shapes.len())];
                let size = modulated_size(base_size, px.brightness(), rng);
                draw_primitive(
                    ctx,
                    shape,
                    f64::from(px.x),
                    f64::from(px.y),
                    size,
                    [px.r, px.g, px.b],
                    rng,
                );
                painted += 1;
            }
        })?;

        Ok(TickOutcome::Painted(FrameStats {
            progress,
            base_size,
            budget: count,
            painted,
            skipped,
        }))
    }

    /// Lossless snapshot of the canvas, taken synchronously.
    pub fn snapshot(&self) -> CanvasFrame {
        self.surface.snapshot()
    }

    /// Write the canvas as a PNG.
    pub fn write_png(&self, path: impl AsRef<Path>) -> MosaikaResult<()> {
        self.surface.write_png(path)
    }
}
