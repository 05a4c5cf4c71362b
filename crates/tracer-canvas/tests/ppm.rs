//! Canvas storage and PPM output, checked byte for byte.

use tracer_canvas::{Canvas, CanvasError, PPM_MAX_LINE_WIDTH};
use tracer_math::Color;

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn canvas(width: usize, height: usize) -> Canvas {
    Canvas::new(width, height).unwrap_or_else(|e| panic!("canvas: {e}"))
}

fn body(ppm: &str) -> Vec<&str> {
    ppm.split('\n').skip(3).collect()
}

// ─── Canvas ──────────────────────────────────────────────────────────────────

#[test]
fn new_canvas_is_black() {
    let c = canvas(10, 20);
    assert_eq!((c.width(), c.height()), (10, 20));
    for y in 0..20 {
        for x in 0..10 {
            assert_eq!(c.pixel_at(x, y), Some(Color::BLACK));
        }
    }
}

#[test]
fn write_then_read_pixel() {
    let mut c = canvas(10, 20);
    let red = Color::new(1.0, 0.0, 0.0);
    c.write_pixel(2, 3, red).unwrap();
    assert_eq!(c.pixel_at(2, 3), Some(red));
    assert_eq!(c.pixel_at(3, 2), Some(Color::BLACK));
}

#[test]
fn out_of_range_colors_are_stored_unclamped() {
    let mut c = canvas(1, 1);
    c.write_pixel(0, 0, Color::new(1.5, -0.5, 0.0)).unwrap();
    assert_eq!(c.pixel_at(0, 0), Some(Color::new(1.5, -0.5, 0.0)));
}

#[test]
fn out_of_bounds_write_is_reported() {
    let mut c = canvas(5, 3);
    assert_eq!(
        c.write_pixel(5, 0, Color::WHITE),
        Err(CanvasError::OutOfBounds { x: 5, y: 0, width: 5, height: 3 })
    );
    assert!(c.write_pixel(0, 3, Color::WHITE).is_err());
    assert_eq!(c.pixel_at(0, 3), None);
}

#[test]
fn zero_dimension_is_rejected() {
    assert_eq!(Canvas::new(0, 3), Err(CanvasError::ZeroDimension { width: 0, height: 3 }));
    assert!(Canvas::new(4, 0).is_err());
}

// ─── PPM ─────────────────────────────────────────────────────────────────────

#[test]
fn header() {
    let ppm = canvas(5, 3).to_ppm();
    assert!(ppm.starts_with("P3\n5 3\n255\n"));
}

#[test]
fn pixel_data_is_clamped_and_rounded() {
    let mut c = canvas(5, 3);
    c.write_pixel(0, 0, Color::new(1.5, 0.0, 0.0)).unwrap();
    c.write_pixel(2, 1, Color::new(0.0, 0.5, 0.0)).unwrap();
    c.write_pixel(4, 2, Color::new(-0.5, 0.0, 1.0)).unwrap();
    assert_eq!(
        c.to_ppm(),
        "P3\n5 3\n255\n\
         255 0 0 0 0 0 0 0 0 0 0 0 0 0 0\n\
         0 0 0 0 0 0 0 128 0 0 0 0 0 0 0\n\
         0 0 0 0 0 0 0 0 0 0 0 0 0 0 255"
    );
}

#[test]
fn long_rows_are_wrapped() {
    let mut c = canvas(10, 2);
    c.fill(Color::new(1.0, 0.8, 0.6));
    assert_eq!(
        body(&c.to_ppm()),
        vec![
            "255 204 153 255 204 153 255 204 153 255 204 153 255 204 153 255 204",
            "153 255 204 153 255 204 153 255 204 153 255 204 153",
            "255 204 153 255 204 153 255 204 153 255 204 153 255 204 153 255 204",
            "153 255 204 153 255 204 153 255 204 153 255 204 153",
        ]
    );
}

#[test]
fn wrapping_restarts_on_each_row() {
    let mut c = canvas(6, 2);
    c.fill(Color::WHITE);
    // 18 values per row: 17 fill the first line, one spills over.
    let ppm = c.to_ppm();
    let lines = body(&ppm);
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[1], "255");
    assert_eq!(lines[3], "255");
}

#[test]
fn break_on_row_end_leaves_an_empty_line() {
    // "0 0 255" then five white pixels: the row's last value brings the
    // line to exactly 67 characters, so the wrap break and the row break
    // both land there.
    let mut c = canvas(6, 2);
    c.fill(Color::WHITE);
    for y in 0..2 {
        c.write_pixel(0, y, Color::new(0.0, 0.0, 1.0)).unwrap();
    }
    let row = format!("0 0 255{}", " 255".repeat(15));
    assert_eq!(row.len(), 67);
    assert_eq!(c.to_ppm(), format!("P3\n6 2\n255\n{row}\n\n{row}"));
}

#[test]
fn break_on_last_row_end_is_not_kept() {
    let mut c = canvas(6, 1);
    c.fill(Color::WHITE);
    c.write_pixel(0, 0, Color::new(0.0, 0.0, 1.0)).unwrap();
    let ppm = c.to_ppm();
    assert_eq!(body(&ppm), vec![format!("0 0 255{}", " 255".repeat(15))]);
}

#[test]
fn ends_without_trailing_newline() {
    let ppm = canvas(3, 3).to_ppm();
    assert!(!ppm.ends_with('\n'));
    assert!(!ppm.ends_with(' '));
}

#[test]
fn no_line_exceeds_limit() {
    let mut c = canvas(40, 3);
    for x in 0..40 {
        c.write_pixel(x, 1, Color::new(0.01 * x as f64, 0.5, 1.0)).unwrap();
    }
    let ppm = c.to_ppm();
    assert!(ppm.lines().all(|l| l.len() <= PPM_MAX_LINE_WIDTH));
    assert!(ppm.lines().all(|l| !l.ends_with(' ')));
}
