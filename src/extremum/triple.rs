//! The three tracked samples of a successive parabolic interpolation run.
//!
//! [`SampleTriple`] — three `(x, y)` points
//! ├ abscissas always satisfy `x1 <= x2 <= x3`
//! └ each ordinate is a [`Sample`]: either evaluated or pending
//!
//! Slots are addressed by [`Slot`] rather than by reference, so the
//! squeezer hands back *which* slot changed and the caller writes the fresh
//! ordinate through [`SampleTriple::set_y`].


use super::errors::ExtremumError;
use super::order::ord3;


/// Ordinate of a tracked point.
///
/// - [`Sample::Evaluated`] : a value returned by the function, which may
///   itself be non-finite (e.g. at a pole)
/// - [`Sample::Pending`]   : placeholder left by a squeeze, not a measurement
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Sample {
    Evaluated(f64),
    Pending,
}
impl Sample {
    #[inline]
    pub fn value(self) -> Option<f64> {
        match self {
            Sample::Evaluated(y) => Some(y),
            Sample::Pending      => None,
        }
    }

    #[inline]
    pub fn is_pending(self) -> bool {
        matches!(self, Sample::Pending)
    }
}


/// Logical position inside a [`SampleTriple`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Slot {
    First,
    Second,
    Third,
}
impl Slot {
    pub const ALL: [Slot; 3] = [Slot::First, Slot::Second, Slot::Third];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Slot::First  => 0,
            Slot::Second => 1,
            Slot::Third  => 2,
        }
    }
}
impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Slot::First  => "first",
            Slot::Second => "second",
            Slot::Third  => "third",
        };
        write!(f, "{name}")
    }
}


/// A single tracked point.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: Sample,
}
impl Point {
    #[inline]
    pub(crate) fn evaluated(x: f64, y: f64) -> Self {
        Self { x, y: Sample::Evaluated(y) }
    }

    #[inline]
    pub(crate) fn pending(x: f64) -> Self {
        Self { x, y: Sample::Pending }
    }
}


/// Three points kept in ascending abscissa order.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SampleTriple {
    points: [Point; 3],
}

impl SampleTriple {
    /// Builds a triple from already evaluated points.
    ///
    /// # Errors
    /// - [`ExtremumError::Unordered`] : abscissas not in `x1 <= x2 <= x3` order
    pub fn new(points: [(f64, f64); 3]) -> Result<Self, ExtremumError> {
        let [(x1, y1), (x2, y2), (x3, y3)] = points;
        if !(x1 <= x2 && x2 <= x3) {
            return Err(ExtremumError::Unordered { x1, x2, x3 });
        }
        Ok(Self {
            points: [
                Point::evaluated(x1, y1),
                Point::evaluated(x2, y2),
                Point::evaluated(x3, y3),
            ],
        })
    }

    /// Sorts `a`, `b`, `c` with [`ord3`] and evaluates `func` at each,
    /// first to last.
    pub fn evaluate<F>(func: &mut F, a: f64, b: f64, c: f64) -> Self
    where F: FnMut(f64) -> f64 {
        let (x1, x2, x3) = ord3(a, b, c);
        let y1 = func(x1);
        let y2 = func(x2);
        let y3 = func(x3);
        Self {
            points: [
                Point::evaluated(x1, y1),
                Point::evaluated(x2, y2),
                Point::evaluated(x3, y3),
            ],
        }
    }

    pub(crate) fn from_points(points: [Point; 3]) -> Self {
        Self { points }
    }

    #[inline] pub fn point(&self, slot: Slot) -> Point  { self.points[slot.index()] }
    #[inline] pub fn x(&self, slot: Slot)     -> f64    { self.points[slot.index()].x }
    #[inline] pub fn y(&self, slot: Slot)     -> Sample { self.points[slot.index()].y }
    #[inline] pub fn points(&self)            -> [Point; 3] { self.points }

    #[inline]
    pub fn xs(&self) -> [f64; 3] {
        [self.points[0].x, self.points[1].x, self.points[2].x]
    }

    /// All three ordinates, or `None` while any slot is pending.
    #[inline]
    pub fn ys(&self) -> Option<[f64; 3]> {
        self.try_ys().ok()
    }

    /// All three ordinates.
    ///
    /// # Errors
    /// - [`ExtremumError::PendingSample`] : names the first pending slot
    pub fn try_ys(&self) -> Result<[f64; 3], ExtremumError> {
        let mut ys = [0.0; 3];
        for slot in Slot::ALL {
            ys[slot.index()] = self.y(slot)
                .value()
                .ok_or(ExtremumError::PendingSample { slot })?;
        }
        Ok(ys)
    }

    /// First slot still waiting for an evaluation.
    pub fn pending(&self) -> Option<Slot> {
        Slot::ALL.into_iter().find(|&s| self.y(s).is_pending())
    }

    pub fn is_ordered(&self) -> bool {
        let [x1, x2, x3] = self.xs();
        x1 <= x2 && x2 <= x3
    }

    /// Stores a fresh evaluation in `slot`.
    #[inline]
    pub fn set_y(&mut self, slot: Slot, y: f64) {
        self.points[slot.index()].y = Sample::Evaluated(y);
    }
}
