//! Configuration for the successive parabolic interpolation driver.
//!
//! [`SpiCfg`] — universal fields
//! └ `max_iter` : iteration cap (optional)
//!
//! No tolerances are carried: a run stops only on a degenerate vertex or
//! on the iteration cap.


use super::algorithms::Algorithm;
use super::errors::ExtremumError;


/// Successive parabolic interpolation configuration
///
/// # Construction
/// - Use [`SpiCfg::new`] then optional setters.
///
/// # Defaults
/// - If `max_iter` is `None`, the driver resolves it with
///   [`Algorithm::default_max_iter`] (100).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct SpiCfg {
    max_iter: Option<usize>,
}

impl SpiCfg {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    pub fn set_max_iter(mut self, v: usize) -> Result<Self, ExtremumError> {
        if v == 0 {
            return Err(ExtremumError::InvalidMaxIter { got: v });
        }
        self.max_iter = Some(v);
        Ok(self)
    }

    /// Resolved iteration cap.
    #[inline] #[must_use]
    pub fn max_iter(&self) -> usize {
        self.max_iter
            .unwrap_or(Algorithm::SuccessiveParabolic.default_max_iter())
    }
}
