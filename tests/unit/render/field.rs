use super::*;

#[test]
fn viewport_pads_bounds_by_five_percent() {
    let vp = Viewport::fit(&[Point::new(0.0, 0.0), Point::new(10.0, 20.0)]);
    assert_eq!(vp.min, Point::new(-0.5, -1.0));
    assert_eq!(vp.max, Point::new(10.5, 21.0));
}

#[test]
fn viewport_widens_degenerate_axes() {
    let vp = Viewport::fit(&[Point::new(3.0, 4.0)]);
    assert_eq!(vp.span(), Vec2::new(1.0, 1.0));
    assert_eq!(Viewport::fit(&[]).span(), Vec2::new(1.0, 1.0));
}

#[test]
fn to_unit_flips_y() {
    let vp = Viewport {
        min: Point::new(0.0, 0.0),
        max: Point::new(10.0, 10.0),
    };
    assert_eq!(vp.to_unit(Point::new(0.0, 0.0)), Point::new(0.0, 1.0));
    assert_eq!(vp.to_unit(Point::new(10.0, 10.0)), Point::new(1.0, 0.0));
}

#[test]
fn new_rejects_mismatched_lengths() {
    assert!(VectorField::new(vec![Point::ORIGIN], vec![]).is_err());
}

#[test]
fn update_replaces_every_glyph() {
    let mut field = VectorField::new(
        vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)],
        vec![Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)],
    )
    .unwrap();
    let viewport = field.viewport();

    field
        .update(
            vec![Point::new(5.0, 5.0), Point::new(6.0, 6.0)],
            vec![Vec2::new(-1.0, 0.0), Vec2::new(0.0, -1.0)],
        )
        .unwrap();

    let glyphs: Vec<_> = field.glyphs().collect();
    assert_eq!(
        glyphs,
        vec![
            Glyph {
                tail: Point::new(5.0, 5.0),
                vector: Vec2::new(-1.0, 0.0)
            },
            Glyph {
                tail: Point::new(6.0, 6.0),
                vector: Vec2::new(0.0, -1.0)
            },
        ]
    );
    assert_eq!(field.viewport(), viewport);
}

#[test]
fn update_with_wrong_glyph_count_fails_and_keeps_state() {
    let mut field = VectorField::new(
        vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)],
        vec![Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)],
    )
    .unwrap();
    assert!(
        field
            .update(vec![Point::new(9.0, 9.0)], vec![Vec2::new(1.0, 1.0)])
            .is_err()
    );
    assert_eq!(field.len(), 2);
    assert_eq!(field.glyphs().next().unwrap().tail, Point::new(0.0, 0.0));
}

#[test]
fn arrow_scale_is_fixed_from_initial_mean_speed() {
    // Four glyphs with unit speed: sn = 10, mean = 1.
    let offsets = vec![Point::ORIGIN; 4];
    let uvc = vec![Vec2::new(1.0, 0.0); 4];
    let mut field = VectorField::new(offsets.clone(), uvc).unwrap();
    let expected = 1.0 / 18.0;
    assert!((field.arrow_length(Vec2::new(0.0, 1.0)) - expected).abs() < 1e-12);

    field.update(offsets, vec![Vec2::new(2.0, 0.0); 4]).unwrap();
    assert!((field.arrow_length(Vec2::new(0.0, 1.0)) - expected).abs() < 1e-12);
}

#[test]
fn zero_velocity_field_falls_back_to_unit_mean() {
    let field = VectorField::new(vec![Point::ORIGIN], vec![Vec2::ZERO]).unwrap();
    assert!(field.arrow_length(Vec2::new(1.0, 0.0)).is_finite());
    assert_eq!(field.arrow_length(Vec2::ZERO), 0.0);
}
