//! Share records and share sets.

use crate::{Error, Point, Result};
use shamir_math::radix;

/// One share: an index, which is the x-coordinate of the point, and a value
/// written in radix `base`, which decodes to the y-coordinate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRecord {
    /// The share index.
    pub index: u64,
    /// The radix of `value`, between 2 and 36.
    pub base: u32,
    /// The encoded value. Alphabetic digits are case-insensitive.
    pub value: String,
}

impl ShareRecord {
    /// Create a new share record.
    pub fn new<S: Into<String>>(index: u64, base: u32, value: S) -> Self {
        Self {
            index,
            base,
            value: value.into(),
        }
    }

    /// Decode the value and return the point `(index, value)`.
    pub fn to_point(&self) -> Result<Point> {
        let y = radix::decode(&self.value, self.base)
            .map_err(|e| Error::in_share(self.index, e))?;
        Ok(Point::new(self.index, y))
    }
}

/// A named, ordered collection of shares with its threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareSet {
    name: String,
    total_shares: usize,
    threshold: usize,
    shares: Vec<ShareRecord>,
}

impl ShareSet {
    /// Create an empty share set.
    ///
    /// `total_shares` is the number of shares that were issued and is only
    /// informational; `threshold` is the number of shares the reconstruction
    /// consumes.
    pub fn new<S: Into<String>>(name: S, total_shares: usize, threshold: usize) -> Self {
        Self {
            name: name.into(),
            total_shares,
            threshold,
            shares: Vec::new(),
        }
    }

    /// Create a share set from its records, kept in the given order.
    pub fn with_shares<S: Into<String>>(
        name: S,
        total_shares: usize,
        threshold: usize,
        shares: Vec<ShareRecord>,
    ) -> Self {
        Self {
            name: name.into(),
            total_shares,
            threshold,
            shares,
        }
    }

    /// Append a share record.
    pub fn push(&mut self, share: ShareRecord) -> &mut Self {
        self.shares.push(share);
        self
    }

    /// Returns the name of the share set.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declared number of issued shares (`n`).
    pub fn total_shares(&self) -> usize {
        self.total_shares
    }

    /// Returns the threshold (`k`).
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Returns the share records in their stored order.
    pub fn shares(&self) -> &[ShareRecord] {
        &self.shares
    }

    /// Returns the share record with the given index, if present.
    pub fn share(&self, index: u64) -> Option<&ShareRecord> {
        self.shares.iter().find(|s| s.index == index)
    }

    /// Checks the threshold. The number of records against the threshold is
    /// checked when reconstructing.
    pub fn validate(&self) -> Result<()> {
        if self.threshold == 0 {
            return Err(Error::InvalidThreshold(self.threshold));
        }
        Ok(())
    }

    /// Decode every share, in stored order.
    pub fn points(&self) -> Result<Vec<Point>> {
        self.shares.iter().map(ShareRecord::to_point).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{ShareRecord, ShareSet};
    use crate::{Error, Point};

    #[test]
    fn record_to_point() -> Result<(), Error> {
        assert_eq!(ShareRecord::new(2, 2, "111").to_point()?, Point::new(2, 7));
        assert_eq!(ShareRecord::new(6, 4, "213").to_point()?, Point::new(6, 39));
        assert_eq!(
            ShareRecord::new(9, 16, "AED7015").to_point()?,
            Point::new(9, 183_332_885u64)
        );
        Ok(())
    }

    #[test]
    fn record_errors_name_the_share() {
        let error = ShareRecord::new(3, 8, "17g").to_point().unwrap_err();
        assert!(matches!(
            error,
            Error::InvalidDigit {
                share: 3,
                character: 'g',
                position: 2,
                base: 8
            }
        ));
        assert_eq!(error.to_string(), "Invalid digit 'g' in share 3 for base 8");

        assert!(matches!(
            ShareRecord::new(4, 1, "0").to_point(),
            Err(Error::InvalidBase { share: 4, base: 1 })
        ));
        assert!(matches!(
            ShareRecord::new(5, 10, "").to_point(),
            Err(Error::EmptyValue(5))
        ));
    }

    #[test]
    fn set_keeps_order() -> Result<(), Error> {
        let mut set = ShareSet::new("ordered", 3, 2);
        set.push(ShareRecord::new(3, 10, "30"))
            .push(ShareRecord::new(1, 10, "10"))
            .push(ShareRecord::new(2, 10, "20"));

        assert_eq!(set.name(), "ordered");
        assert_eq!(set.total_shares(), 3);
        assert_eq!(set.threshold(), 2);
        let indices: Vec<u64> = set.shares().iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![3, 1, 2]);
        assert_eq!(
            set.points()?,
            vec![Point::new(3, 30), Point::new(1, 10), Point::new(2, 20)]
        );
        assert_eq!(set.share(1), Some(&ShareRecord::new(1, 10, "10")));
        assert_eq!(set.share(4), None);
        Ok(())
    }

    #[test]
    fn with_shares_keeps_the_given_name() {
        let records = vec![ShareRecord::new(2, 10, "20"), ShareRecord::new(1, 10, "10")];
        let set = ShareSet::with_shares("loaded", 2, 2, records.clone());
        assert_eq!(set.name(), "loaded");
        assert_eq!(set.shares(), records.as_slice());
    }

    #[test]
    fn validate_threshold() {
        assert!(ShareSet::new("a", 3, 2).validate().is_ok());
        assert!(ShareSet::new("b", 0, 1).validate().is_ok());
        assert!(matches!(
            ShareSet::new("c", 3, 0).validate(),
            Err(Error::InvalidThreshold(0))
        ));
    }
}
