/// Piecewise-linear mapping from an input (usually smoothed scroll progress)
/// to one animated property.
///
/// Breakpoints must be strictly increasing in their input. That is an
/// authoring precondition; it is not checked when evaluating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Curve {
    points: &'static [(f64, f64)],
}

impl Curve {
    pub const fn new(points: &'static [(f64, f64)]) -> Self {
        Self { points }
    }

    /// Two-point curve: a single linear ramp between its breakpoints.
    pub const fn linear(points: &'static [(f64, f64); 2]) -> Self {
        Self { points }
    }

    pub fn is_monotonic(&self) -> bool {
        !self.points.is_empty() && self.points.windows(2).all(|w| w[0].0 < w[1].0)
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        let (first, last) = match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return 0.0,
        };
        if x.is_nan() || x <= first.0 {
            return first.1;
        }
        if x >= last.0 {
            return last.1;
        }

        let upper = self
            .points
            .iter()
            .position(|(bx, _)| *bx >= x)
            .unwrap_or(self.points.len() - 1);
        let (x1, y1) = self.points[upper];
        if x1 == x {
            return y1;
        }
        let (x0, y0) = self.points[upper - 1];
        y0 + (y1 - y0) * (x - x0) / (x1 - x0)
    }
}
