use super::*;

fn evolution_config(duration_ms: u64, paint_speed: u32) -> RenderConfig {
    RenderConfig {
        evolution_mode: true,
        duration_ms,
        paint_speed,
        ..RenderConfig::default()
    }
}

fn manual_config(abstraction: u32, paint_speed: u32) -> RenderConfig {
    RenderConfig {
        evolution_mode: false,
        abstraction,
        paint_speed,
        ..RenderConfig::default()
    }
}

#[test]
fn evolution_size_shrinks_then_plateaus() {
    let cfg = evolution_config(30_000, 40);
    let mut prev = f64::INFINITY;
    for step in 0..=100 {
        let p = f64::from(step) / 100.0;
        let b = frame_budget(p, &cfg);
        assert!(b.base_size <= prev + 1e-9, "size grew at progress {p}");
        prev = b.base_size;
    }

    // Past the shrink limit (0.6 for short sessions) the size is constant.
    let at_limit = frame_budget(0.6, &cfg).base_size;
    for step in 60..=100 {
        let p = f64::from(step) / 100.0;
        assert!((frame_budget(p, &cfg).base_size - at_limit).abs() < 1e-9);
    }
}

#[test]
fn evolution_size_endpoints_match_constants() {
    let cfg = evolution_config(30_000, 40);
    assert!((frame_budget(0.0, &cfg).base_size - 140.0).abs() < 1e-9);
    assert!((frame_budget(1.0, &cfg).base_size - 4.0).abs() < 1e-9);
}

#[test]
fn long_sessions_shrink_over_a_shorter_prefix() {
    let cfg = evolution_config(120_000, 40);
    let terminal = frame_budget(1.0, &cfg).base_size;
    assert!((frame_budget(0.4, &cfg).base_size - terminal).abs() < 1e-9);
    assert!(frame_budget(0.39, &cfg).base_size > terminal);
}

#[test]
fn size_never_drops_below_floor() {
    for cfg in [
        evolution_config(30_000, 1),
        evolution_config(600_000, 600),
        manual_config(1, 1),
        manual_config(100, 600),
    ] {
        for step in 0..=100 {
            let p = f64::from(step) / 100.0;
            assert!(frame_budget(p, &cfg).base_size >= MIN_PRIMITIVE_SIZE);
        }
    }
}

#[test]
fn count_stays_within_frame_bounds() {
    for speed in [1, 10, 40, 600, 10_000] {
        for cfg in [evolution_config(30_000, speed), manual_config(50, speed)] {
            for step in 0..=100 {
                let p = f64::from(step) / 100.0;
                let count = frame_budget(p, &cfg).count;
                assert!((MIN_PRIMITIVES_PER_FRAME..=MAX_PRIMITIVES_PER_FRAME).contains(&count));
            }
        }
    }
}

#[test]
fn evolution_count_follows_the_power_law() {
    // At progress 0 with speed 40: (40/10) * (150/140)^1.5 * 0.5, floored.
    let cfg = evolution_config(30_000, 40);
    let expected = (4.0f64 * (150.0f64 / 140.0).powf(1.5) * 0.5).floor() as u32;
    assert_eq!(frame_budget(0.0, &cfg).count, expected);

    // At the terminal size of 4 a high speed saturates the upper clamp.
    let cfg = evolution_config(30_000, 60);
    assert_eq!(frame_budget(1.0, &cfg).count, MAX_PRIMITIVES_PER_FRAME);
}

#[test]
fn manual_mode_maps_abstraction_linearly() {
    assert!((frame_budget(0.3, &manual_config(1, 10)).base_size - 5.0).abs() < 1e-9);
    assert!((frame_budget(0.3, &manual_config(100, 10)).base_size - 80.0).abs() < 1e-9);

    // Manual count is the paint speed, independent of progress.
    let cfg = manual_config(50, 37);
    assert_eq!(frame_budget(0.0, &cfg).count, 37);
    assert_eq!(frame_budget(1.0, &cfg).count, 37);
}

#[test]
fn budget_is_a_pure_function() {
    let cfg = evolution_config(30_000, 40);
    for step in 0..=20 {
        let p = f64::from(step) / 20.0;
        assert_eq!(frame_budget(p, &cfg), frame_budget(p, &cfg));
    }
}

#[test]
fn linear_map_hits_interval_endpoints() {
    assert!((linear_map(1.0, 1.0, 100.0, 5.0, 80.0) - 5.0).abs() < 1e-12);
    assert!((linear_map(100.0, 1.0, 100.0, 5.0, 80.0) - 80.0).abs() < 1e-12);
}
