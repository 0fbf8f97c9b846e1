//! Extremum-search error types.
//!
//! [`ExtremumError`] : API misuse only
//! ├ invalid global parameters (e.g. max_iter)
//! ├ unordered triple construction
//! ├ reading a pending sample
//! ├ squeezing a non-finite candidate
//! └ unknown sample function name
//!
//! A degenerate parabolic fit is *not* an error. It ends a run normally
//! with [`super::report::TerminationReason::DegenerateVertex`].


use thiserror::Error;
use super::triple::Slot;


#[derive(Debug, Error, PartialEq)]
pub enum ExtremumError {
    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter { got: usize },

    #[error("abscissas must satisfy x1 <= x2 <= x3. got ({x1}, {x2}, {x3})")]
    Unordered { x1: f64, x2: f64, x3: f64 },

    #[error("sample in {slot} slot has not been evaluated")]
    PendingSample { slot: Slot },

    #[error("squeeze candidate must be finite. got x={x}")]
    NonFiniteCandidate { x: f64 },

    #[error("unknown sample function `{name}`")]
    UnknownFunction { name: String },
}
