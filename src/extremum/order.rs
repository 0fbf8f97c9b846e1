//! Ordering utilities for extremum-search algorithms.
//! - `ord3` : three scalars in ascending order

/// Sorts three values ascending with a fixed compare-and-swap network.
///
/// Already sorted input is returned untouched. A NaN never compares
/// greater, so it stays where it was.
#[inline]
pub fn ord3(mut a: f64, mut b: f64, mut c: f64) -> (f64, f64, f64) {
    if a > b { std::mem::swap(&mut a, &mut b); }
    if b > c { std::mem::swap(&mut b, &mut c); }
    if a > b { std::mem::swap(&mut a, &mut b); }
    (a, b, c)
}
