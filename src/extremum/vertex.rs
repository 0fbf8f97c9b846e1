//! Vertex of the parabola through three samples.
//!
//! The abscissa of the extremum is computed in closed form,
//!
//! ```text
//! z1 = x1 (y2 - y3)
//! z2 = x2 (y3 - y1)
//! z3 = x3 (y1 - y2)
//!
//! vertex = 0.5 (x1 z1 + x2 z2 + x3 z3) / (z1 + z2 + z3)
//! ```
//!
//! and is agnostic to whether the extremum is a minimum or a maximum.
//! Collinear samples make the denominator vanish, and extreme magnitudes
//! overflow; both surface as a non-finite result, reported as
//! [`Vertex::Degenerate`].


use super::errors::ExtremumError;
use super::triple::SampleTriple;


/// Outcome of one parabolic fit.
///
/// - [`Vertex::Finite`]     : usable candidate abscissa
/// - [`Vertex::Degenerate`] : no well-defined vertex; carries the raw
///                            non-finite value (`inf`, `-inf` or NaN)
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Vertex {
    Finite(f64),
    Degenerate(f64),
}
impl Vertex {
    #[inline]
    pub fn from_raw(v: f64) -> Self {
        if v.is_finite() { Vertex::Finite(v) } else { Vertex::Degenerate(v) }
    }

    #[inline]
    pub fn finite(self) -> Option<f64> {
        match self {
            Vertex::Finite(v)     => Some(v),
            Vertex::Degenerate(_) => None,
        }
    }

    #[inline]
    pub fn raw(self) -> f64 {
        match self {
            Vertex::Finite(v) | Vertex::Degenerate(v) => v,
        }
    }

    #[inline]
    pub fn is_degenerate(self) -> bool {
        matches!(self, Vertex::Degenerate(_))
    }
}


/// Raw vertex abscissa of the parabola through `(x[i], y[i])`.
///
/// No validation is done; a degenerate configuration yields a non-finite
/// value.
#[inline]
pub fn parabola_vertex(x: [f64; 3], y: [f64; 3]) -> f64 {
    let [x1, x2, x3] = x;
    let [y1, y2, y3] = y;
    let z1 = x1 * (y2 - y3);
    let z2 = x2 * (y3 - y1);
    let z3 = x3 * (y1 - y2);
    0.5 * (x1 * z1 + x2 * z2 + x3 * z3) / (z1 + z2 + z3)
}


/// Fits a parabola through `triple` and classifies its vertex.
///
/// # Errors
/// - [`ExtremumError::PendingSample`] : a slot has not been evaluated yet
pub fn interpolate(triple: &SampleTriple) -> Result<Vertex, ExtremumError> {
    let ys = triple.try_ys()?;
    Ok(Vertex::from_raw(parabola_vertex(triple.xs(), ys)))
}
