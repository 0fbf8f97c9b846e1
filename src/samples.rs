//! Catalogue of demonstration functions.
//!
//! Each [`SampleFunction`] carries a label and the initial abscissa
//! triples it is usually run from. Some presets converge in a handful of
//! iterations, others wander off or run into the iteration cap.

use std::f64::consts::PI;
use std::str::FromStr;

use serde::Deserialize;

use crate::extremum::errors::ExtremumError;


#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleFunction {
    /// `x^2/10 - 2 sin(x)`
    ParabolaSine,
    /// `sinh(sin(x))`
    SinhSine,
    /// `exp(-sin(x))`
    ExpNegSine,
    /// `exp(-sin(x)) + exp(-x cos^2(x))`
    ExpSineCosine,
    /// `sin(1/x)`, oscillating ever faster towards 0
    SineReciprocal,
    /// Weierstrass function with `a = 0.3`, `b = 7`, truncated to 21 terms
    Weierstrass,
}

impl SampleFunction {
    pub const ALL: [SampleFunction; 6] = [
        SampleFunction::ParabolaSine,
        SampleFunction::SinhSine,
        SampleFunction::ExpNegSine,
        SampleFunction::ExpSineCosine,
        SampleFunction::SineReciprocal,
        SampleFunction::Weierstrass,
    ];

    pub fn eval(self, x: f64) -> f64 {
        match self {
            SampleFunction::ParabolaSine   => x * x / 10.0 - 2.0 * x.sin(),
            SampleFunction::SinhSine       => x.sin().sinh(),
            SampleFunction::ExpNegSine     => (-x.sin()).exp(),
            SampleFunction::ExpSineCosine  => {
                let cos = -x.cos();
                (-x.sin()).exp() + (-x * cos * cos).exp()
            }
            SampleFunction::SineReciprocal => (1.0 / x).sin(),
            SampleFunction::Weierstrass    => weierstrass(x),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            SampleFunction::ParabolaSine   => "parabola_sine",
            SampleFunction::SinhSine       => "sinh_sine",
            SampleFunction::ExpNegSine     => "exp_neg_sine",
            SampleFunction::ExpSineCosine  => "exp_sine_cosine",
            SampleFunction::SineReciprocal => "sine_reciprocal",
            SampleFunction::Weierstrass    => "weierstrass",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            SampleFunction::ParabolaSine   => "x^2/10 - 2sin(x)",
            SampleFunction::SinhSine       => "sinh(sin(x))",
            SampleFunction::ExpNegSine     => "exp(sin(-x))",
            SampleFunction::ExpSineCosine  => "exp(sin(-x)) + exp(-x * cos^2(x))",
            SampleFunction::SineReciprocal => "sin(1 / x)",
            SampleFunction::Weierstrass    => "Weierstrass function (a = 0.3, b = 7)",
        }
    }

    /// Initial abscissa triples used by the demos.
    pub fn presets(self) -> &'static [[f64; 3]] {
        match self {
            SampleFunction::ParabolaSine => &[
                [0.0, 1.0, 4.0],
                [4.0, 5.0, 6.0],
                [4.0, 6.0, 8.0],
                [16.0, 20.0, 22.0],
            ],
            SampleFunction::SinhSine => &[
                [0.0, 1.0, 2.0],
                [3.0, 4.0, 5.0],
                [2.0, 3.0, 4.0],
            ],
            SampleFunction::ExpNegSine => &[
                [1.0, 2.0, 3.0],
                [2.0, 3.0, 4.0],
                [4.0, 5.0, 6.0],
            ],
            SampleFunction::ExpSineCosine => &[
                [1.0, 2.0, 3.0],
                [2.0, 3.0, 4.0],
                [-2.0, -1.2, -0.8],
                [4.0, 5.0, 6.0],
            ],
            SampleFunction::SineReciprocal => &[
                [0.1, 0.2, 0.3],
                [0.1, 0.3, 0.5],
                [0.001, 0.002, 0.003],
                [0.00001, 0.00002, 0.00003],
                [1.0, 2.0, 3.0],
            ],
            SampleFunction::Weierstrass => &[
                [0.5, 1.0, 1.5],
                [0.5, 1.0, 1.6],
            ],
        }
    }
}

impl std::fmt::Display for SampleFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for SampleFunction {
    type Err = ExtremumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SampleFunction::ALL
            .into_iter()
            .find(|func| func.name() == s)
            .ok_or_else(|| ExtremumError::UnknownFunction { name: s.to_owned() })
    }
}


/// `sum_{i=0}^{20} a^i cos(b^i pi x)`, accumulated with fused multiply-add.
fn weierstrass(x: f64) -> f64 {
    const A: f64 = 0.3;
    const B: f64 = 7.0;
    const TERMS: i32 = 20;

    (0..=TERMS).fold(0.0, |z, i| {
        A.powi(i).mul_add((B.powi(i) * PI * x).cos(), z)
    })
}
