use log::{debug, trace};

use super::algorithms::Algorithm;
use super::config::SpiCfg;
use super::errors::ExtremumError;
use super::report::{SpiReport, TerminationReason};
use super::squeeze::squeeze;
use super::traits::IterationObserver;
use super::triple::{SampleTriple, Slot};
use super::vertex::{interpolate, Vertex};


const ALGORITHM: Algorithm = Algorithm::SuccessiveParabolic;


/// Approximates an extremum of `func` with
/// [successive parabolic interpolation](https://en.wikipedia.org/wiki/Successive_parabolic_interpolation).
///
/// # Arguments
/// - `func`     : function to evaluate, called exactly once per iteration
///                after the three initial evaluations
/// - `a, b, c`  : initial abscissas, any order; sorted before use
/// - `cfg`      : [`SpiCfg`] (optional `max_iter`, 100 by default)
/// - `observer` : receives iteration 0 (initial triple) and then every
///                completed iteration, in order
///
/// # Behavior
/// Each iteration
/// 1. fits a parabola through the triple and takes its vertex,
/// 2. stops if the vertex is not finite, leaving the triple as is,
/// 3. squeezes the vertex into the triple,
/// 4. evaluates `func` at the inserted abscissa,
/// 5. hands the updated triple to `observer`.
///
/// There is no tolerance check. A run that never meets a degenerate vertex
/// performs exactly `max_iter` iterations.
///
/// # Returns
/// [`SpiReport`] with
/// - `termination_reason` : [`TerminationReason::DegenerateVertex`] or
///                          [`TerminationReason::IterationLimit`]
/// - `iterations`         : completed iterations
/// - `evaluations`        : `3 + iterations`
///
/// # Errors
/// - [`ExtremumError::InvalidMaxIter`] : resolved `max_iter` is 0
///
/// A degenerate fit or a non-finite `f(x)` is reported, never raised.
///
/// # Notes
/// - Domain errors in `func` are not guarded; a non-finite `f(x)` is stored
///   as a regular sample and surfaces as a degenerate vertex later on.
pub fn successive_parabolic<F, O>(
    mut func: F,
    a: f64,
    b: f64,
    c: f64,
    cfg: SpiCfg,
    observer: &mut O,
) -> Result<SpiReport, ExtremumError>
where
    F: FnMut(f64) -> f64,
    O: IterationObserver + ?Sized,
{
    // already validated via building config; redundant guard
    let max_iter = cfg.max_iter();
    if max_iter == 0 {
        return Err(ExtremumError::InvalidMaxIter { got: 0 });
    }

    let mut triple = SampleTriple::evaluate(&mut func, a, b, c);
    let mut evals  = 3;
    let mut latest = Slot::Second;

    debug!(
        "{}: start at {:?}, max_iter={}",
        ALGORITHM, triple.xs(), max_iter
    );
    observer.observe(0, &triple);

    let mut completed   = 0;
    let mut last_vertex = None;
    for iter in 1..=max_iter {
        let z = match interpolate(&triple)? {
            Vertex::Finite(z) => z,
            degenerate        => {
                trace!("{}: iteration {}: degenerate vertex {}", ALGORITHM, iter, degenerate.raw());
                last_vertex = Some(degenerate);
                break;
            }
        };

        let step = squeeze(&mut triple, z)?;
        let fz = { evals += 1; func(step.x) };
        triple.set_y(step.slot, fz);
        latest = step.slot;
        completed = iter;

        trace!(
            "{}: iteration {}: vertex {} in {:?}, triple {:?}",
            ALGORITHM, iter, z, step.zone, triple.xs()
        );
        observer.observe(iter, &triple);
    }

    let termination_reason = match last_vertex {
        Some(_) => TerminationReason::DegenerateVertex,
        None    => TerminationReason::IterationLimit,
    };
    let point = triple.point(latest);

    debug!(
        "{}: stopped on {} after {} iterations ({} evaluations)",
        ALGORITHM, termination_reason, completed, evals
    );

    Ok(SpiReport {
        estimate           : point.x,
        f_estimate         : point.y.value().unwrap_or(f64::NAN),
        iterations         : completed,
        evaluations        : evals,
        termination_reason,
        last_vertex,
        triple,
        algorithm_name     : ALGORITHM.algorithm_name(),
    })
}


/// Runs [`successive_parabolic`] with the fixed cap of
/// [`super::algorithms::DEFAULT_MAX_ITER`] iterations.
pub fn run_approximation<F, O>(
    func: F,
    a: f64,
    b: f64,
    c: f64,
    observer: &mut O,
) -> Result<SpiReport, ExtremumError>
where
    F: FnMut(f64) -> f64,
    O: IterationObserver + ?Sized,
{
    successive_parabolic(func, a, b, c, SpiCfg::new(), observer)
}
