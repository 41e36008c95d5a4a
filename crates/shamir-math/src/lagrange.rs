//! Lagrange interpolation over the integers.
//!
//! Given `k` points with pairwise distinct abscissas, the unique polynomial
//! of degree at most `k - 1` through them is
//!
//! ```text
//! f(x) = Σ_j y_j · Π_{m≠j} (x - x_m) / (x_j - x_m)
//! ```
//!
//! Every quantity is an unbounded integer and every division is checked to be
//! exact: a remainder is reported as [`Error::PrecisionLoss`] instead of being
//! rounded away.

use crate::{Error, Result};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use std::collections::HashSet;

/// A point `(x, y)` of a polynomial with integer coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    x: BigInt,
    y: BigInt,
}

impl Point {
    /// Create a point from its coordinates.
    pub fn new<X: Into<BigInt>, Y: Into<BigInt>>(x: X, y: Y) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }

    /// The abscissa.
    pub fn x(&self) -> &BigInt {
        &self.x
    }

    /// The ordinate.
    pub fn y(&self) -> &BigInt {
        &self.y
    }
}

/// How divisions by the Lagrange denominators are checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Exactness {
    /// Sum the terms as exact fractions and divide once at the end. Only a
    /// non-integer interpolated value is rejected.
    #[default]
    Rational,
    /// Require every `y_j · numerator_j` to be divisible by its own
    /// `denominator_j`. This rejects some genuine share sets whose abscissas
    /// are not consecutive, because their Lagrange weights are fractional.
    PerTerm,
}

/// Unreduced Lagrange weight of `xs[j]` at `x`:
/// `(Π_{m≠j} (x - x_m), Π_{m≠j} (x_j - x_m))`. `j` must index `xs`.
fn lagrange_weight(j: usize, xs: &[BigInt], x: &BigInt) -> (BigInt, BigInt) {
    let x_j = &xs[j];
    let mut numerator = BigInt::one();
    let mut denominator = BigInt::one();
    for (m, x_m) in xs.iter().enumerate() {
        if m == j {
            continue;
        }
        numerator *= x - x_m;
        denominator *= x_j - x_m;
    }
    (numerator, denominator)
}

/// Interpolate `points` and return the constant term `f(0)`, using
/// [`Exactness::Rational`].
pub fn constant_term(points: &[Point]) -> Result<BigInt> {
    evaluate(points, &BigInt::zero(), Exactness::Rational)
}

/// Interpolate `points` and return the constant term `f(0)`.
pub fn constant_term_with(points: &[Point], exactness: Exactness) -> Result<BigInt> {
    evaluate(points, &BigInt::zero(), exactness)
}

/// Interpolate `points` and evaluate the polynomial at `x`.
pub fn evaluate(points: &[Point], x: &BigInt, exactness: Exactness) -> Result<BigInt> {
    if points.is_empty() {
        return Err(Error::NoPoints);
    }
    check_distinct(points)?;

    tracing::trace!(k = points.len(), ?exactness, "interpolating");

    let xs: Vec<BigInt> = points.iter().map(|p| p.x.clone()).collect();
    match exactness {
        Exactness::PerTerm => {
            let mut sum = BigInt::zero();
            for (j, point) in points.iter().enumerate() {
                let (numerator, denominator) = lagrange_weight(j, &xs, x);
                let term = &point.y * numerator;
                sum += exact_div(term, denominator, &point.x, &xs)?;
            }
            Ok(sum)
        }
        Exactness::Rational => {
            let mut acc_numerator = BigInt::zero();
            let mut acc_denominator = BigInt::one();
            for (j, point) in points.iter().enumerate() {
                let (numerator, denominator) = lagrange_weight(j, &xs, x);
                let term = &point.y * numerator;
                acc_numerator = acc_numerator * &denominator + term * &acc_denominator;
                acc_denominator *= denominator;
                reduce(&mut acc_numerator, &mut acc_denominator);
            }
            exact_div(acc_numerator, acc_denominator, x, &xs)
        }
    }
}

/// Reduce a fraction to lowest terms with a positive denominator.
fn reduce(numerator: &mut BigInt, denominator: &mut BigInt) {
    let gcd = numerator.gcd(denominator);
    if !gcd.is_zero() && !gcd.is_one() {
        *numerator /= &gcd;
        *denominator /= &gcd;
    }
    if denominator.is_negative() {
        *numerator = -&*numerator;
        *denominator = -&*denominator;
    }
}

/// Divide `numerator` by `denominator`, failing if the remainder is not zero.
/// `xs` are the abscissas of the interpolation, reported on failure.
fn exact_div(
    numerator: BigInt,
    denominator: BigInt,
    x: &BigInt,
    xs: &[BigInt],
) -> Result<BigInt> {
    let (quotient, remainder) = numerator.div_rem(&denominator);
    if !remainder.is_zero() {
        return Err(Error::PrecisionLoss {
            x: x.clone(),
            numerator,
            denominator,
            xs: xs.to_vec(),
        });
    }
    Ok(quotient)
}

fn check_distinct(points: &[Point]) -> Result<()> {
    let mut seen = HashSet::with_capacity(points.len());
    for point in points {
        if !seen.insert(&point.x) {
            return Err(Error::SingularSystem { x: point.x.clone() });
        }
    }
    Ok(())
}
