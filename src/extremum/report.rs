//! Defines the [`SpiReport`] struct returned by the iteration driver,
//! and the [`Table`] observer that renders iterates for the console.

use std::fmt::Write;

use super::traits::IterationObserver;
use super::triple::SampleTriple;
use super::vertex::Vertex;


/// Reasons a successive parabolic interpolation run may stop.
///
/// Both are normal terminations; neither is an error.
/// - [`TerminationReason::DegenerateVertex`] : the fit had no finite vertex
/// - [`TerminationReason::IterationLimit`]   : `max_iter` iterations completed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    DegenerateVertex,
    IterationLimit,
}
impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminationReason::DegenerateVertex => write!(f, "degenerate vertex"),
            TerminationReason::IterationLimit   => write!(f, "iteration limit"),
        }
    }
}


/// Final report returned by [`super::spi::successive_parabolic`].
///
/// [`SpiReport`]
/// - `estimate`           : abscissa of the most recently inserted sample,
///                          or the middle abscissa if no iteration completed
/// - `f_estimate`         : function value at `estimate`
/// - `iterations`         : completed iterations
/// - `evaluations`        : total function evaluations (3 + iterations)
/// - `termination_reason` : why the run stopped ([`TerminationReason`])
/// - `last_vertex`        : the degenerate fit that ended the run, if any
/// - `triple`             : final snapshot of the tracked samples
/// - `algorithm_name`     : `"successive_parabolic"`
#[derive(Debug, Copy, Clone)]
pub struct SpiReport {
    pub estimate           : f64,
    pub f_estimate         : f64,
    pub iterations         : usize,
    pub evaluations        : usize,
    pub termination_reason : TerminationReason,
    pub last_vertex        : Option<Vertex>,
    pub triple             : SampleTriple,
    pub algorithm_name     : &'static str,
}


/// Observer rendering one row per iterate: the iteration index, then
/// `x1`, `x2`, `x3` with nine decimals.
///
/// ```text
///   #              x1              x2              x3
///   0     0.000000000     1.000000000     4.000000000
/// ```
#[derive(Debug, Clone)]
pub struct Table {
    out: String,
}

impl Table {
    const INDEX_WIDTH: usize = 3;
    const VALUE_WIDTH: usize = 15;

    pub fn new() -> Self {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{:>iw$} {:>vw$} {:>vw$} {:>vw$}",
            "#", "x1", "x2", "x3",
            iw = Self::INDEX_WIDTH,
            vw = Self::VALUE_WIDTH,
        );
        Self { out }
    }

    /// Formats a single row without recording it.
    pub fn row(iteration: usize, triple: &SampleTriple) -> String {
        let [x1, x2, x3] = triple.xs();
        format!(
            "{:>iw$} {:>vw$.9} {:>vw$.9} {:>vw$.9}",
            iteration, x1, x2, x3,
            iw = Self::INDEX_WIDTH,
            vw = Self::VALUE_WIDTH,
        )
    }

    pub fn as_str(&self) -> &str { &self.out }

    pub fn finish(self) -> String { self.out }
}

impl Default for Table {
    fn default() -> Self { Self::new() }
}

impl IterationObserver for Table {
    fn observe(&mut self, iteration: usize, triple: &SampleTriple) {
        self.out.push_str(&Self::row(iteration, triple));
        self.out.push('\n');
    }
}
