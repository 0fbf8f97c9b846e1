//! Folding a new candidate abscissa into a [`SampleTriple`].
//!
//! The candidate `x` lands in exactly one of four zones relative to the
//! current `x1 <= x2 <= x3`:
//!
//! ┌ [`Zone::AtOrBelowFirst`]  : `x <= x1`       -> `(x, x1, x2)`, drops `x3`
//! ├ [`Zone::UpToSecond`]      : `x1 < x <= x2`  -> `(x1, x, x2)`, drops `x3`
//! ├ [`Zone::UpToThird`]       : `x2 < x <= x3`  -> `(x2, x, x3)`, drops `x1`
//! └ [`Zone::AboveThird`]      : `x > x3`        -> `(x2, x3, x)`, drops `x1`
//!
//! Ties resolve to the lower zone. The inserted slot is left
//! [`Sample::Pending`](super::triple::Sample::Pending); the squeezer never
//! evaluates the function itself.


use super::errors::ExtremumError;
use super::triple::{Point, SampleTriple, Slot};


/// Position of a candidate relative to the current abscissas.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Zone {
    AtOrBelowFirst,
    UpToSecond,
    UpToThird,
    AboveThird,
}
impl Zone {
    /// Classifies `x` against sorted abscissas `xs`.
    #[inline]
    pub fn locate(xs: [f64; 3], x: f64) -> Self {
        let [x1, x2, x3] = xs;
        if x <= x1 {
            Zone::AtOrBelowFirst
        } else if x <= x2 {
            Zone::UpToSecond
        } else if x <= x3 {
            Zone::UpToThird
        } else {
            Zone::AboveThird
        }
    }

    /// Slot the candidate occupies after the squeeze.
    #[inline]
    pub const fn slot(self) -> Slot {
        match self {
            Zone::AtOrBelowFirst => Slot::First,
            Zone::UpToSecond     => Slot::Second,
            Zone::UpToThird      => Slot::Second,
            Zone::AboveThird     => Slot::Third,
        }
    }
}


/// Result of a squeeze: where the candidate went and which slot now
/// needs an evaluation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Squeeze {
    pub zone : Zone,
    pub slot : Slot,
    pub x    : f64,
}


/// Inserts `x` into `triple`, discarding one endpoint.
///
/// # Returns
/// [`Squeeze`] naming the slot holding `x`. That slot is pending until the
/// caller stores `f(x)` with [`SampleTriple::set_y`].
///
/// # Errors
/// - [`ExtremumError::NonFiniteCandidate`] : `x` is NaN or infinite
/// - [`ExtremumError::PendingSample`]      : `triple` already has a pending slot
///
/// On error the triple is left untouched.
pub fn squeeze(triple: &mut SampleTriple, x: f64) -> Result<Squeeze, ExtremumError> {
    if !x.is_finite() {
        return Err(ExtremumError::NonFiniteCandidate { x });
    }
    if let Some(slot) = triple.pending() {
        return Err(ExtremumError::PendingSample { slot });
    }

    let [p1, p2, p3] = triple.points();
    let zone = Zone::locate(triple.xs(), x);
    let points = match zone {
        Zone::AtOrBelowFirst => [Point::pending(x), p1, p2],
        Zone::UpToSecond     => [p1, Point::pending(x), p2],
        Zone::UpToThird      => [p2, Point::pending(x), p3],
        Zone::AboveThird     => [p2, p3, Point::pending(x)],
    };
    *triple = SampleTriple::from_points(points);

    Ok(Squeeze { zone, slot: zone.slot(), x })
}
