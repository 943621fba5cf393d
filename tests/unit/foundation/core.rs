use super::*;

#[test]
fn canvas_rejects_degenerate_dimensions() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    assert!(Canvas::new(70_000, 10).is_err());
    Canvas::new(u32::from(u16::MAX), 1).unwrap();
}

#[test]
fn canvas_byte_len_covers_rgba8() {
    let c = Canvas::new(3, 5).unwrap();
    assert_eq!(c.pixel_count(), 15);
    assert_eq!(c.byte_len(), 60);
}

#[test]
fn progress_clamps_to_unit_interval() {
    assert_eq!(session_progress(0, 1000), 0.0);
    assert_eq!(session_progress(500, 1000), 0.5);
    assert_eq!(session_progress(2000, 1000), 1.0);

    // Degenerate duration saturates rather than dividing by zero.
    assert_eq!(session_progress(1, 0), 1.0);
}
