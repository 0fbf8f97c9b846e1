//! tests for folding a candidate into the triple
use spi::extremum::errors::ExtremumError;
use spi::extremum::squeeze::{squeeze, Zone};
use spi::extremum::triple::{Sample, SampleTriple, Slot};

type TestResult = Result<(), ExtremumError>;

/// (1, 10), (2, 20), (3, 30)
fn base() -> Result<SampleTriple, ExtremumError> {
    SampleTriple::new([(1.0, 10.0), (2.0, 20.0), (3.0, 30.0)])
}

fn ys_with_pending(triple: &SampleTriple) -> [Option<f64>; 3] {
    [
        triple.y(Slot::First).value(),
        triple.y(Slot::Second).value(),
        triple.y(Slot::Third).value(),
    ]
}

#[test]
fn below_first_shifts_right() -> TestResult {
    let mut t = base()?;
    let step = squeeze(&mut t, 0.5)?;

    assert_eq!(step.zone, Zone::AtOrBelowFirst);
    assert_eq!(step.slot, Slot::First);
    assert_eq!(t.xs(), [0.5, 1.0, 2.0]);
    assert_eq!(ys_with_pending(&t), [None, Some(10.0), Some(20.0)]);
    Ok(())
}

#[test]
fn between_first_and_second_drops_third() -> TestResult {
    let mut t = base()?;
    let step = squeeze(&mut t, 1.5)?;

    assert_eq!(step.zone, Zone::UpToSecond);
    assert_eq!(step.slot, Slot::Second);
    assert_eq!(t.xs(), [1.0, 1.5, 2.0]);
    assert_eq!(ys_with_pending(&t), [Some(10.0), None, Some(20.0)]);
    Ok(())
}

#[test]
fn between_second_and_third_drops_first() -> TestResult {
    let mut t = base()?;
    let step = squeeze(&mut t, 2.5)?;

    assert_eq!(step.zone, Zone::UpToThird);
    assert_eq!(step.slot, Slot::Second);
    assert_eq!(t.xs(), [2.0, 2.5, 3.0]);
    assert_eq!(ys_with_pending(&t), [Some(20.0), None, Some(30.0)]);
    Ok(())
}

#[test]
fn above_third_shifts_left() -> TestResult {
    let mut t = base()?;
    let step = squeeze(&mut t, 7.0)?;

    assert_eq!(step.zone, Zone::AboveThird);
    assert_eq!(step.slot, Slot::Third);
    assert_eq!(t.xs(), [2.0, 3.0, 7.0]);
    assert_eq!(ys_with_pending(&t), [Some(20.0), Some(30.0), None]);
    Ok(())
}

#[test]
fn tie_with_first_takes_shift_branch() -> TestResult {
    let mut t = base()?;
    let step = squeeze(&mut t, 1.0)?;

    assert_eq!(step.zone, Zone::AtOrBelowFirst);
    assert_eq!(t.xs(), [1.0, 1.0, 2.0]);
    assert_eq!(t.y(Slot::First), Sample::Pending);
    assert_eq!(t.y(Slot::Second), Sample::Evaluated(10.0));
    Ok(())
}

#[test]
fn tie_with_second_inserts_before_it() -> TestResult {
    let mut t = base()?;
    let step = squeeze(&mut t, 2.0)?;

    assert_eq!(step.zone, Zone::UpToSecond);
    assert_eq!(t.xs(), [1.0, 2.0, 2.0]);
    assert_eq!(ys_with_pending(&t), [Some(10.0), None, Some(20.0)]);
    Ok(())
}

#[test]
fn tie_with_third_inserts_before_it() -> TestResult {
    let mut t = base()?;
    let step = squeeze(&mut t, 3.0)?;

    assert_eq!(step.zone, Zone::UpToThird);
    assert_eq!(t.xs(), [2.0, 3.0, 3.0]);
    assert_eq!(ys_with_pending(&t), [Some(20.0), None, Some(30.0)]);
    Ok(())
}

#[test]
fn locate_matches_zone_table() {
    let xs = [-1.0, 0.0, 1.0];
    assert_eq!(Zone::locate(xs, -3.0), Zone::AtOrBelowFirst);
    assert_eq!(Zone::locate(xs, -1.0), Zone::AtOrBelowFirst);
    assert_eq!(Zone::locate(xs, -0.5), Zone::UpToSecond);
    assert_eq!(Zone::locate(xs,  0.0), Zone::UpToSecond);
    assert_eq!(Zone::locate(xs,  0.5), Zone::UpToThird);
    assert_eq!(Zone::locate(xs,  1.0), Zone::UpToThird);
    assert_eq!(Zone::locate(xs,  1.5), Zone::AboveThird);
}

#[test]
fn non_finite_candidate_is_rejected() -> TestResult {
    let mut t = base()?;
    let before = t;

    for x in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = squeeze(&mut t, x).unwrap_err();
        assert!(matches!(err, ExtremumError::NonFiniteCandidate { .. }));
    }
    assert_eq!(t, before);
    Ok(())
}

#[test]
fn squeezing_twice_without_evaluation_is_rejected() -> TestResult {
    let mut t = base()?;
    squeeze(&mut t, 1.5)?;
    let before = t;

    let err = squeeze(&mut t, 1.75).unwrap_err();
    assert_eq!(err, ExtremumError::PendingSample { slot: Slot::Second });
    assert_eq!(t, before);
    Ok(())
}
