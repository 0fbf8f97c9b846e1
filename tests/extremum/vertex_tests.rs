//! tests for the parabola vertex interpolator
use assert_approx_eq::assert_approx_eq;
use spi::extremum::errors::ExtremumError;
use spi::extremum::squeeze::squeeze;
use spi::extremum::triple::{SampleTriple, Slot};
use spi::extremum::vertex::{interpolate, parabola_vertex, Vertex};

type TestResult = Result<(), ExtremumError>;

const TOL: f64 = 1e-12;

fn triple_of<F>(mut f: F, a: f64, b: f64, c: f64) -> SampleTriple
where F: FnMut(f64) -> f64 {
    SampleTriple::evaluate(&mut f, a, b, c)
}

#[test]
fn raw_vertex_of_x_squared() {
    assert_eq!(parabola_vertex([0.0, 1.0, 4.0], [0.0, 1.0, 16.0]), 0.0);
}

#[test]
fn quadratic_minimum_is_exact() -> TestResult {
    let f = |x: f64| 3.0 * x * x - 12.0 * x + 5.0;
    let v = interpolate(&triple_of(f, -1.0, 0.5, 4.0))?;

    let z = v.finite().expect("finite vertex");
    assert_approx_eq!(z, 2.0, TOL);
    Ok(())
}

#[test]
fn quadratic_maximum_is_exact() -> TestResult {
    let f = |x: f64| -0.5 * x * x + 3.0 * x + 1.0;
    let v = interpolate(&triple_of(f, 0.0, 1.0, 2.5))?;

    assert!(!v.is_degenerate());
    assert_approx_eq!(v.raw(), 3.0, TOL);
    Ok(())
}

#[test]
fn vertex_is_a_fixed_point_for_quadratics() -> TestResult {
    let mut f = |x: f64| 2.0 * x * x + 7.0 * x - 1.0;
    let mut triple = triple_of(&mut f, -5.0, -3.0, 1.0);
    let expected = -7.0 / 4.0;

    let z = interpolate(&triple)?.finite().expect("finite vertex");
    assert_approx_eq!(z, expected, TOL);

    let step = squeeze(&mut triple, z)?;
    triple.set_y(step.slot, f(step.x));

    let again = interpolate(&triple)?.finite().expect("finite vertex");
    assert_approx_eq!(again, expected, TOL);
    Ok(())
}

#[test]
fn collinear_points_are_degenerate() -> TestResult {
    let v = interpolate(&triple_of(|x| x, 0.0, 1.0, 4.0))?;
    assert!(v.is_degenerate());
    assert!(!v.raw().is_finite());
    assert_eq!(v.finite(), None);

    let v = interpolate(&triple_of(|x| 2.0 * x + 1.0, 3.0, -2.0, 7.0))?;
    assert!(v.is_degenerate());
    Ok(())
}

#[test]
fn coincident_abscissas_are_degenerate() -> TestResult {
    let v = interpolate(&triple_of(|x| x * x, 1.0, 1.0, 1.0))?;
    assert!(matches!(v, Vertex::Degenerate(z) if z.is_nan()));
    Ok(())
}

#[test]
fn non_finite_sample_is_degenerate() -> TestResult {
    let triple = SampleTriple::new([(0.0, 1.0), (1.0, f64::INFINITY), (2.0, 4.0)])?;
    assert!(interpolate(&triple)?.is_degenerate());
    Ok(())
}

#[test]
fn pending_slot_is_rejected() -> TestResult {
    let mut triple = SampleTriple::new([(0.0, 0.0), (1.0, 1.0), (4.0, 16.0)])?;
    squeeze(&mut triple, 5.0)?;

    let err = interpolate(&triple).unwrap_err();
    assert_eq!(err, ExtremumError::PendingSample { slot: Slot::Third });
    Ok(())
}

#[test]
fn from_raw_classifies() {
    assert_eq!(Vertex::from_raw(1.5), Vertex::Finite(1.5));
    assert!(Vertex::from_raw(f64::NEG_INFINITY).is_degenerate());
    assert!(Vertex::from_raw(f64::NAN).is_degenerate());
}
