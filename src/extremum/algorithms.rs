//! Extremum-search algorithm definitions.
//!
//! Provides the [`Algorithm`] enum, which names the supported method,
//! along with the fixed [`DEFAULT_MAX_ITER`] cap.


/// Iteration cap used when `max_iter` is unset in config.
///
/// There is no tolerance-based early exit, so a run that never meets a
/// degenerate vertex performs exactly this many iterations.
pub const DEFAULT_MAX_ITER: usize = 100;


/// Extremum-search algorithm variants.
/// - [`Algorithm::SuccessiveParabolic`] repeated three-point parabolic fits
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    SuccessiveParabolic,
}

impl Algorithm {
    /// Default iteration count if `max_iter` is unset in config.
    pub const fn default_max_iter(self) -> usize {
        match self {
            Algorithm::SuccessiveParabolic => DEFAULT_MAX_ITER,
        }
    }

    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::SuccessiveParabolic => "successive_parabolic",
        }
    }
}
impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
