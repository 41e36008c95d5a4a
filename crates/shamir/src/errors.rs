use num_bigint::BigInt;
use thiserror::Error;

/// The Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

/// Enum encapsulating all the possible errors from this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Indicates that a share value contains a character that is not a digit
    /// of the share's base.
    #[error("Invalid digit '{character}' in share {share} for base {base}")]
    InvalidDigit {
        /// Index of the offending share.
        share: u64,
        /// The offending character.
        character: char,
        /// Zero-based position of the character in the share value.
        position: usize,
        /// The base of the share.
        base: u32,
    },

    /// Indicates that a share declares a base outside of 2..=36.
    #[error("Invalid base {base} in share {share}: must be between 2 and 36")]
    InvalidBase {
        /// Index of the offending share.
        share: u64,
        /// The declared base.
        base: u32,
    },

    /// Indicates that a share value has no digits.
    #[error("Empty value in share {0}")]
    EmptyValue(u64),

    /// Indicates that fewer usable shares than the threshold are available.
    #[error("Threshold not met: {available} usable shares, {required} required")]
    ThresholdNotMet {
        /// Number of usable shares.
        available: usize,
        /// The threshold.
        required: usize,
    },

    /// Indicates that two selected shares have the same index.
    #[error("Singular system: share index {x} is selected more than once")]
    SingularSystem {
        /// The repeated index.
        x: BigInt,
    },

    /// Indicates that interpolation would have required rounding, which
    /// means the selected shares are not consistent with one another.
    #[error(
        "Precision loss at x = {x} interpolating shares [{}]: {numerator} is not divisible by {denominator}",
        join(.shares)
    )]
    PrecisionLoss {
        /// The share index whose term failed, or 0 for the final sum.
        x: BigInt,
        /// The dividend.
        numerator: BigInt,
        /// The divisor.
        denominator: BigInt,
        /// Indices of the shares that were interpolated, in selection order.
        shares: Vec<BigInt>,
    },

    /// Indicates an invalid threshold.
    #[error("Invalid threshold {0}: must be at least 1")]
    InvalidThreshold(usize),

    /// Indicates that a share selection cannot be honored.
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    /// Indicates that a share entry could not be read.
    #[error("Malformed share {key:?}: {reason}")]
    MalformedShare {
        /// The key of the entry in the input.
        key: String,
        /// Why the entry was rejected.
        reason: String,
    },

    /// Indicates that a share set could not be read.
    #[error("Malformed share set: {0}")]
    MalformedShareSet(String),

    /// Any other arithmetic error.
    #[error(transparent)]
    Math(shamir_math::Error),

    /// Serialization error.
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn join(shares: &[BigInt]) -> String {
    shares
        .iter()
        .map(|x| x.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl Error {
    /// Attach the index of the share being decoded to a decoding error.
    pub fn in_share(share: u64, error: shamir_math::Error) -> Self {
        match error {
            shamir_math::Error::InvalidDigit {
                character,
                position,
                base,
            } => Self::InvalidDigit {
                share,
                character,
                position,
                base,
            },
            shamir_math::Error::InvalidBase(base) => Self::InvalidBase { share, base },
            shamir_math::Error::EmptyValue => Self::EmptyValue(share),
            other => Self::from(other),
        }
    }
}

impl From<shamir_math::Error> for Error {
    fn from(error: shamir_math::Error) -> Self {
        match error {
            shamir_math::Error::SingularSystem { x } => Self::SingularSystem { x },
            shamir_math::Error::PrecisionLoss {
                x,
                numerator,
                denominator,
                xs,
            } => Self::PrecisionLoss {
                x,
                numerator,
                denominator,
                shares: xs,
            },
            other => Self::Math(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Error;
    use num_bigint::BigInt;

    #[test]
    fn decoding_errors_name_the_share() {
        let error = Error::in_share(
            3,
            shamir_math::Error::InvalidDigit {
                character: 'g',
                position: 2,
                base: 8,
            },
        );
        assert_eq!(error.to_string(), "Invalid digit 'g' in share 3 for base 8");

        let error = Error::in_share(5, shamir_math::Error::InvalidBase(40));
        assert_eq!(
            error.to_string(),
            "Invalid base 40 in share 5: must be between 2 and 36"
        );

        let error = Error::in_share(7, shamir_math::Error::EmptyValue);
        assert_eq!(error.to_string(), "Empty value in share 7");
    }

    #[test]
    fn interpolation_errors_keep_their_kind() {
        let error = Error::from(shamir_math::Error::SingularSystem {
            x: BigInt::from(2),
        });
        assert!(matches!(error, Error::SingularSystem { ref x } if *x == BigInt::from(2)));

        let error = Error::from(shamir_math::Error::PrecisionLoss {
            x: BigInt::from(0),
            numerator: BigInt::from(16),
            denominator: BigInt::from(3),
            xs: vec![BigInt::from(1), BigInt::from(2), BigInt::from(4)],
        });
        assert_eq!(
            error.to_string(),
            "Precision loss at x = 0 interpolating shares [1, 2, 4]: 16 is not divisible by 3"
        );

        let error = Error::from(shamir_math::Error::NoPoints);
        assert!(matches!(error, Error::Math(shamir_math::Error::NoPoints)));
    }

    #[test]
    fn threshold_messages() {
        let error = Error::ThresholdNotMet {
            available: 2,
            required: 3,
        };
        assert_eq!(
            error.to_string(),
            "Threshold not met: 2 usable shares, 3 required"
        );
        assert_eq!(
            Error::InvalidThreshold(0).to_string(),
            "Invalid threshold 0: must be at least 1"
        );
    }
}
