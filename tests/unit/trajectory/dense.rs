use super::*;
use crate::FlockError;

#[test]
fn densify_rectangular_input() {
    let t = Trajectory::parse_str("0 0 1 2 3 4\n0 1 5 6 7 8\n1 0 9 10 11 12\n1 1 13 14 15 16\n");
    let d = t.densify(t.steps()).unwrap();
    assert_eq!(d.steps(), 2);
    assert_eq!(d.agents(), 2);
    let (p, v) = d.frame(1).unwrap();
    assert_eq!(p, &[Point::new(9.0, 10.0), Point::new(13.0, 14.0)]);
    assert_eq!(v, &[Vec2::new(11.0, 12.0), Vec2::new(15.0, 16.0)]);
    assert_eq!(d.position(0, 1), Some(Point::new(5.0, 6.0)));
    assert_eq!(d.velocity(1, 0), Some(Vec2::new(11.0, 12.0)));
    assert!(d.frame(2).is_none());
}

#[test]
fn densify_rejects_ragged_step() {
    let t = Trajectory::parse_str("0 0 1 2 3 4\n0 1 5 6 7 8\n1 0 9 10 11 12\n");
    let err = t.densify(2).unwrap_err();
    assert!(matches!(
        err,
        FlockError::SparsePopulation { step: 1, agent: 1 }
    ));
}

#[test]
fn densify_rejects_hole_in_step_zero() {
    let t = Trajectory::parse_str("0 0 1 2 3 4\n0 2 5 6 7 8\n");
    let err = t.densify(1).unwrap_err();
    assert!(matches!(
        err,
        FlockError::SparsePopulation { step: 0, agent: 1 }
    ));
}

#[test]
fn densify_zero_steps_is_empty() {
    let t = Trajectory::parse_str("");
    let d = t.densify(0).unwrap();
    assert_eq!(d.steps(), 0);
    assert!(d.frame(0).is_none());
}
