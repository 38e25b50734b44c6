//! Breakpoint curves, scroll progress and easing helpers.
//!
//! Everything here is a pure function of its inputs so the web frontend can
//! recompute all channels from a single scroll sample per frame.

use smallvec::SmallVec;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CurveError {
    #[error("a curve needs at least one breakpoint")]
    Empty,
    #[error("breakpoint inputs must be finite and non-decreasing (index {0})")]
    Unordered(usize),
}

/// Piecewise-linear mapping defined by ordered `(input, output)` breakpoints.
///
/// Outside the breakpoint domain the boundary output holds; there is no
/// extrapolation.
#[derive(Clone, Debug, PartialEq)]
pub struct Curve {
    points: SmallVec<[(f32, f32); 4]>,
}

impl Curve {
    pub fn new(points: &[(f32, f32)]) -> Result<Self, CurveError> {
        if points.is_empty() {
            return Err(CurveError::Empty);
        }
        for (i, (x, y)) in points.iter().enumerate() {
            if !x.is_finite() || !y.is_finite() {
                return Err(CurveError::Unordered(i));
            }
            if i > 0 && *x < points[i - 1].0 {
                return Err(CurveError::Unordered(i));
            }
        }
        Ok(Self {
            points: SmallVec::from_slice(points),
        })
    }

    /// A flat curve that always yields `value`.
    pub fn constant(value: f32) -> Self {
        let mut points = SmallVec::new();
        points.push((0.0, value));
        Self { points }
    }

    pub fn points(&self) -> &[(f32, f32)] {
        &self.points
    }

    pub fn eval(&self, input: f32) -> f32 {
        let pts = &self.points;
        let (first_x, first_y) = pts[0];
        let (last_x, last_y) = pts[pts.len() - 1];
        if input.is_nan() || input < first_x {
            return first_y;
        }
        if input >= last_x {
            return last_y;
        }
        // first segment whose right end lies beyond the input
        let i = pts.partition_point(|(x, _)| *x <= input);
        let (x0, y0) = pts[i - 1];
        let (x1, y1) = pts[i];
        let span = x1 - x0;
        if span <= 0.0 {
            return y1;
        }
        lerp(y0, y1, (input - x0) / span)
    }
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Clamp raw progress into [0, 1]; overscroll and NaN are pinned.
#[inline]
pub fn clamp_progress(p: f32) -> f32 {
    if p.is_nan() {
        0.0
    } else {
        p.clamp(0.0, 1.0)
    }
}

/// Progress of an element through the "start start" to "end start" window:
/// 0 when its top meets the viewport top, 1 when its bottom does.
pub fn scroll_progress(scroll_y: f64, element_top: f64, element_height: f64) -> f32 {
    if element_height <= 0.0 || !element_height.is_finite() {
        return if scroll_y < element_top { 0.0 } else { 1.0 };
    }
    clamp_progress(((scroll_y - element_top) / element_height) as f32)
}

#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

#[inline]
pub fn ease_in_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}
