use crate::foundation::core::{Point, Vec2};
use regex::Regex;
use std::sync::LazyLock;

// Anchored at the line head; anything after the sixth field is ignored.
static RECORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^([0-9]+)\s+([0-9]+)",
        r"\s+([-+]?[0-9]*\.?[0-9]+)\s+([-+]?[0-9]*\.?[0-9]+)",
        r"\s+([-+]?[0-9]*\.?[0-9]+)\s+([-+]?[0-9]*\.?[0-9]+)",
    ))
    .expect("record pattern is a valid regex")
});

/// One observation of one agent at one step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Record {
    /// Simulation step.
    pub step: u64,
    /// Agent id.
    pub agent: u64,
    /// Position `(x, y)`.
    pub position: Point,
    /// Velocity `(vx, vy)`.
    pub velocity: Vec2,
}

/// Match one log line against `step agent x y vx vy`.
///
/// Returns `None` for anything that does not match, including step/agent ids that overflow
/// `u64`.
pub fn parse_record(line: &str) -> Option<Record> {
    let caps = RECORD_PATTERN.captures(line)?;
    let float = |i: usize| -> Option<f64> { caps.get(i)?.as_str().parse().ok() };

    Some(Record {
        step: caps.get(1)?.as_str().parse().ok()?,
        agent: caps.get(2)?.as_str().parse().ok()?,
        position: Point::new(float(3)?, float(4)?),
        velocity: Vec2::new(float(5)?, float(6)?),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/trajectory/record.rs"]
mod tests;
