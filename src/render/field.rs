use crate::foundation::core::{Point, Vec2};
use crate::foundation::error::{FlockError, FlockResult};

const MARGIN_FRAC: f64 = 0.05;

/// Data-space window shown by the plot. Fixed at the initial draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Lower-left corner in data units.
    pub min: Point,
    /// Upper-right corner in data units.
    pub max: Point,
}

impl Viewport {
    /// Bounds of `points` padded by 5% per axis. Zero-width axes are widened to one unit.
    pub fn fit(points: &[Point]) -> Self {
        let mut min = Point::new(f64::INFINITY, f64::INFINITY);
        let mut max = Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
        for p in points.iter().filter(|p| p.x.is_finite() && p.y.is_finite()) {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        if min.x > max.x {
            return Self {
                min: Point::ORIGIN,
                max: Point::new(1.0, 1.0),
            };
        }

        let (x0, x1) = pad_axis(min.x, max.x);
        let (y0, y1) = pad_axis(min.y, max.y);
        Self {
            min: Point::new(x0, y0),
            max: Point::new(x1, y1),
        }
    }

    /// Width and height in data units.
    pub fn span(self) -> Vec2 {
        self.max - self.min
    }

    /// Map a data point to unit plot coordinates: `(0, 0)` top-left, `(1, 1)` bottom-right.
    pub fn to_unit(self, p: Point) -> Point {
        let span = self.span();
        Point::new(
            (p.x - self.min.x) / span.x,
            1.0 - (p.y - self.min.y) / span.y,
        )
    }
}

fn pad_axis(lo: f64, hi: f64) -> (f64, f64) {
    if hi - lo <= f64::EPSILON {
        return (lo - 0.5, hi + 0.5);
    }
    let pad = (hi - lo) * MARGIN_FRAC;
    (lo - pad, hi + pad)
}

/// One arrow: tail position and the vector it points along.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glyph {
    /// Arrow tail in data units.
    pub tail: Point,
    /// Direction and magnitude in data units per step.
    pub vector: Vec2,
}

/// A set of arrow glyphs, one per agent.
///
/// The glyph count, viewport and arrow scale are fixed when the field is created from step 0.
/// Each frame then replaces every glyph's offset and vector wholesale.
#[derive(Clone, Debug)]
pub struct VectorField {
    offsets: Vec<Point>,
    uvc: Vec<Vec2>,
    viewport: Viewport,
    length_scale: f64,
    shaft_width: f64,
}

impl VectorField {
    /// Initial draw from step-0 positions and velocities.
    pub fn new(offsets: Vec<Point>, uvc: Vec<Vec2>) -> FlockResult<Self> {
        if offsets.len() != uvc.len() {
            return Err(FlockError::validation(format!(
                "vector field needs one velocity per position, got {} and {}",
                offsets.len(),
                uvc.len()
            )));
        }

        let n = offsets.len();
        let sn = (n as f64).sqrt().max(10.0);
        let mean = if n == 0 {
            0.0
        } else {
            uvc.iter().map(|v| v.hypot()).sum::<f64>() / n as f64
        };
        let mean = if mean.is_finite() && mean > 0.0 {
            mean
        } else {
            1.0
        };

        Ok(Self {
            viewport: Viewport::fit(&offsets),
            length_scale: 1.0 / (1.8 * mean * sn),
            shaft_width: 0.06 / sn,
            offsets,
            uvc,
        })
    }

    /// Replace all glyph state for one frame.
    pub fn update(&mut self, offsets: Vec<Point>, uvc: Vec<Vec2>) -> FlockResult<()> {
        self.check_len(offsets.len())?;
        self.check_len(uvc.len())?;
        self.offsets = offsets;
        self.uvc = uvc;
        Ok(())
    }

    fn check_len(&self, got: usize) -> FlockResult<()> {
        if got != self.offsets.len() {
            return Err(FlockError::validation(format!(
                "vector field has {} glyphs, frame has {got}",
                self.offsets.len()
            )));
        }
        Ok(())
    }

    /// Number of glyphs.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Return `true` when the field holds no glyphs.
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Current glyphs in agent order.
    pub fn glyphs(&self) -> impl Iterator<Item = Glyph> + '_ {
        self.offsets
            .iter()
            .zip(&self.uvc)
            .map(|(&tail, &vector)| Glyph { tail, vector })
    }

    /// Window fixed at the initial draw.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Arrow length as a fraction of the plot width.
    pub fn arrow_length(&self, vector: Vec2) -> f64 {
        vector.hypot() * self.length_scale
    }

    /// Arrow shaft width as a fraction of the plot width.
    pub fn shaft_width(&self) -> f64 {
        self.shaft_width
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/field.rs"]
mod tests;
