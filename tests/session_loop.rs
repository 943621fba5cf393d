use mosaika::{
    ArtSession, Canvas, PixelBuffer, RenderConfig, ShapeKind, TickOutcome,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn tiny_config(shapes: Vec<ShapeKind>) -> RenderConfig {
    RenderConfig {
        width: 2,
        height: 2,
        shapes,
        evolution_mode: false,
        abstraction: 50,
        paint_speed: 10,
        duration_ms: 30_000,
    }
}

fn solid_buffer(canvas: Canvas, px: [u8; 4]) -> PixelBuffer {
    let mut data = vec![0u8; canvas.byte_len()];
    for chunk in data.chunks_exact_mut(4) {
        chunk.copy_from_slice(&px);
    }
    PixelBuffer::new(canvas, data).unwrap()
}

fn painted(outcome: TickOutcome) -> mosaika::FrameStats {
    match outcome {
        TickOutcome::Painted(stats) => stats,
        other => panic!("expected a painted frame, got {other:?}"),
    }
}

#[test]
fn manual_mode_frame_spends_exactly_the_budget() {
    init_tracing();
    let config = tiny_config(vec![ShapeKind::Circle]);
    let canvas = config.canvas().unwrap();
    let mut session = ArtSession::new(config, 1).unwrap();
    session.start(solid_buffer(canvas, [255, 255, 255, 255]), 0).unwrap();

    let stats = painted(session.tick(0).unwrap());
    assert_eq!(stats.budget, 10);
    assert_eq!(stats.painted, 10);
    assert_eq!(stats.skipped, 0);

    // map(50, 1, 100, 5, 80): the manual-mode base size.
    let expected = 5.0 + (49.0 / 99.0) * 75.0;
    assert!((stats.base_size - expected).abs() < 1e-9);

    // A circle at minimum jitter still has radius ~10 on a 2x2 canvas, so
    // every pixel ends up the sampled white.
    let frame = session.snapshot();
    for px in frame.data.chunks_exact(4) {
        assert_eq!(px, &[255, 255, 255, 255]);
    }
}

#[test]
fn near_transparent_sources_consume_budget_without_painting() {
    let config = tiny_config(vec![ShapeKind::Circle]);
    let canvas = config.canvas().unwrap();
    let mut session = ArtSession::new(config, 1).unwrap();
    session.start(solid_buffer(canvas, [200, 200, 200, 10]), 0).unwrap();

    let before = session.snapshot();
    let stats = painted(session.tick(0).unwrap());
    assert_eq!(stats.budget, 10);
    assert_eq!(stats.painted, 0);
    assert_eq!(stats.skipped, 10);
    assert_eq!(session.snapshot(), before, "skipped samples must not draw");
}

#[test]
fn opaque_sources_always_paint() {
    let config = tiny_config(vec![ShapeKind::Square, ShapeKind::Triangle, ShapeKind::Line]);
    let canvas = config.canvas().unwrap();
    let mut session = ArtSession::new(config, 9).unwrap();
    session.start(solid_buffer(canvas, [80, 120, 160, 255]), 0).unwrap();

    for tick in 1..=5u64 {
        let stats = painted(session.tick(tick * 16).unwrap());
        assert_eq!(stats.painted, stats.budget);
        assert_eq!(stats.skipped, 0);
    }
}

#[test]
fn session_completes_once_after_duration() {
    let mut config = tiny_config(vec![ShapeKind::Circle]);
    config.duration_ms = 1_000;
    let canvas = config.canvas().unwrap();
    let mut session = ArtSession::new(config, 1).unwrap();
    session.start(solid_buffer(canvas, [255, 255, 255, 255]), 0).unwrap();

    // elapsed == duration still paints; only elapsed > duration completes.
    painted(session.tick(1_000).unwrap());
    assert_eq!(session.tick(1_001).unwrap(), TickOutcome::Completed);
    assert!(!session.is_running());

    // The completion signal fires exactly once; later ticks are stale.
    assert_eq!(session.tick(1_002).unwrap(), TickOutcome::Idle);
}

#[test]
fn restart_cancels_the_prior_loop_and_clears_the_canvas() {
    let config = tiny_config(vec![ShapeKind::Circle]);
    let canvas = config.canvas().unwrap();
    let mut session = ArtSession::new(config, 1).unwrap();

    session.start(solid_buffer(canvas, [255, 255, 255, 255]), 0).unwrap();
    painted(session.tick(0).unwrap());

    // Start session B mid-flight over a red source.
    session.start(solid_buffer(canvas, [255, 0, 0, 255]), 5_000).unwrap();
    assert!(session.is_running());

    // B's clear wiped A's white pixels before any of B's draws.
    let cleared = session.snapshot();
    for px in cleared.data.chunks_exact(4) {
        assert_eq!(px, &[0x11, 0x11, 0x11, 0xff]);
    }

    // From here on only B's color can appear.
    painted(session.tick(5_000).unwrap());
    let frame = session.snapshot();
    for px in frame.data.chunks_exact(4) {
        assert_ne!(px, &[255, 255, 255, 255], "a draw from session A survived");
    }
}

#[test]
fn cancelled_sessions_ignore_stale_ticks() {
    let config = tiny_config(vec![ShapeKind::Circle]);
    let canvas = config.canvas().unwrap();
    let mut session = ArtSession::new(config, 1).unwrap();
    session.start(solid_buffer(canvas, [255, 255, 255, 255]), 0).unwrap();
    painted(session.tick(0).unwrap());

    session.cancel();
    let before = session.snapshot();
    assert_eq!(session.tick(16).unwrap(), TickOutcome::Idle);
    assert_eq!(session.snapshot(), before, "a stale tick painted");
}

#[test]
fn mismatched_source_reports_unavailable_and_stays_idle() {
    let config = tiny_config(vec![ShapeKind::Circle]);
    let mut session = ArtSession::new(config, 1).unwrap();

    let wrong = solid_buffer(Canvas::new(4, 4).unwrap(), [255, 255, 255, 255]);
    let err = session.start(wrong, 0).unwrap_err();
    assert!(err.to_string().contains("source unavailable"));
    assert!(!session.is_running());
    assert_eq!(session.tick(0).unwrap(), TickOutcome::Idle);
}

#[test]
fn identical_seeds_reproduce_identical_canvases() {
    let canvas = Canvas::new(2, 2).unwrap();
    let mut frames = Vec::new();
    for _ in 0..2 {
        let mut session = ArtSession::new(tiny_config(vec![ShapeKind::Circle]), 42).unwrap();
        session.start(solid_buffer(canvas, [90, 140, 200, 255]), 0).unwrap();
        for tick in 0..10u64 {
            painted(session.tick(tick * 16).unwrap());
        }
        frames.push(session.snapshot());
    }
    assert_eq!(frames[0], frames[1]);
}

#[test]
fn live_config_changes_apply_on_the_next_tick() {
    let mut config = tiny_config(vec![ShapeKind::Circle]);
    config.paint_speed = 3;
    let canvas = config.canvas().unwrap();
    let mut session = ArtSession::new(config, 1).unwrap();
    session.start(solid_buffer(canvas, [255, 255, 255, 255]), 0).unwrap();

    assert_eq!(painted(session.tick(0).unwrap()).budget, 3);

    session.config_mut().paint_speed = 7;
    assert_eq!(painted(session.tick(16).unwrap()).budget, 7);
}
