use num_bigint::BigInt;
use thiserror::Error;

/// The Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

/// Enum encapsulating all the possible errors from this library.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Indicates that a character is not a digit of the given base.
    #[error("Invalid digit '{character}' at position {position} for base {base}")]
    InvalidDigit {
        /// The offending character.
        character: char,
        /// Zero-based character position in the encoded value.
        position: usize,
        /// The radix the value was decoded in.
        base: u32,
    },

    /// Indicates that a radix is outside of the supported range.
    #[error("Invalid base {0}: must be between 2 and 36")]
    InvalidBase(u32),

    /// Indicates that an encoded value has no digits.
    #[error("Empty value: at least one digit is required")]
    EmptyValue,

    /// Indicates that interpolation was requested without any point.
    #[error("No points to interpolate")]
    NoPoints,

    /// Indicates that two points share the same abscissa.
    #[error("Singular system: x = {x} appears more than once")]
    SingularSystem {
        /// The repeated x-coordinate.
        x: BigInt,
    },

    /// Indicates that a division would have left a remainder.
    #[error(
        "Precision loss at x = {x} interpolating points at [{}]: {numerator} is not divisible by {denominator}",
        join(.xs)
    )]
    PrecisionLoss {
        /// The x-coordinate of the term that failed, or the evaluation
        /// abscissa when the failure happens on the final sum.
        x: BigInt,
        /// The dividend.
        numerator: BigInt,
        /// The divisor.
        denominator: BigInt,
        /// The abscissas of all the interpolated points.
        xs: Vec<BigInt>,
    },
}

/// Comma-separated list of abscissas.
fn join(xs: &[BigInt]) -> String {
    xs.iter()
        .map(|x| x.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
