use super::*;
use crate::foundation::core::{Canvas, Vec2};

fn small_opts() -> RenderOpts {
    RenderOpts {
        canvas: Canvas::square(200),
        ..RenderOpts::default()
    }
}

fn single_arrow(v: Vec2) -> VectorField {
    VectorField::new(vec![Point::new(3.0, 4.0)], vec![v]).unwrap()
}

fn is_dark(px: [u8; 4]) -> bool {
    px[0] < 128 && px[1] < 128 && px[2] < 128
}

#[test]
fn frame_matches_canvas_and_is_opaque() {
    let mut r = FieldRasterizer::new(&small_opts()).unwrap();
    let frame = r.draw(&single_arrow(Vec2::new(1.0, 0.0))).unwrap();
    assert_eq!((frame.width, frame.height), (200, 200));
    assert_eq!(frame.data.len(), 200 * 200 * 4);
    assert!(frame.data.chunks_exact(4).all(|px| px[3] == 255));
    assert_eq!(frame.pixel(0, 0), Some([255, 255, 255, 255]));
}

#[test]
fn arrow_points_along_velocity() {
    let mut r = FieldRasterizer::new(&small_opts()).unwrap();

    let right = r.draw(&single_arrow(Vec2::new(1.0, 0.0))).unwrap();
    assert!(is_dark(right.pixel(105, 100).unwrap()));
    assert!(!is_dark(right.pixel(94, 100).unwrap()));
    assert!(!is_dark(right.pixel(100, 103).unwrap()));

    let left = r.draw(&single_arrow(Vec2::new(-1.0, 0.0))).unwrap();
    assert!(is_dark(left.pixel(94, 99).unwrap()));
    assert!(!is_dark(left.pixel(105, 100).unwrap()));
}

#[test]
fn positive_vy_points_up_on_screen() {
    let mut r = FieldRasterizer::new(&small_opts()).unwrap();
    let up = r.draw(&single_arrow(Vec2::new(0.0, 1.0))).unwrap();
    assert!(is_dark(up.pixel(99, 94).unwrap()));
    assert!(!is_dark(up.pixel(99, 105).unwrap()));
}

#[test]
fn axes_frame_is_drawn() {
    let mut r = FieldRasterizer::new(&small_opts()).unwrap();
    let frame = r.draw(&single_arrow(Vec2::new(1.0, 0.0))).unwrap();
    assert!(is_dark(frame.pixel(19, 100).unwrap()));
    assert!(is_dark(frame.pixel(100, 180).unwrap()));
}

#[test]
fn rejects_invalid_canvas() {
    let opts = RenderOpts {
        canvas: Canvas::square(3),
        ..RenderOpts::default()
    };
    assert!(FieldRasterizer::new(&opts).is_err());
}

#[test]
fn arrow_path_skips_degenerate_lengths() {
    assert!(arrow_path(0.0, 1.0).is_none());
    assert!(arrow_path(f64::NAN, 1.0).is_none());
    assert!(arrow_path(10.0, 1.0).is_some());
}
