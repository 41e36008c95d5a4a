//! Share sets in JSON.
//!
//! A share set is a single object. The `keys` entry holds the number of
//! issued shares `n` and the threshold `k`; every other entry is a share,
//! keyed by its decimal index:
//!
//! ```json
//! {
//!   "keys": { "n": 4, "k": 3 },
//!   "1": { "base": "10", "value": "4" },
//!   "2": { "base": "2", "value": "111" },
//!   "3": { "base": "10", "value": "12" },
//!   "6": { "base": "4", "value": "213" }
//! }
//! ```
//!
//! Numbers may be written as JSON integers or as decimal strings. Shares are
//! stored in ascending index order, whatever their order in the document.

use crate::{Error, Result, ShareRecord, ShareSet};
use serde::Deserialize;
use serde_json::{json, Map, Value};
use std::path::Path;

/// Name of the entry holding `n` and `k`.
pub const KEYS: &str = "keys";

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Number {
    Integer(u64),
    Text(String),
}

impl Number {
    fn to_u64(&self) -> std::result::Result<u64, String> {
        match self {
            Number::Integer(v) => Ok(*v),
            Number::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| format!("{:?} is not a non-negative integer", s)),
        }
    }
}

#[derive(Debug, Deserialize)]
struct Keys {
    n: Number,
    k: Number,
}

#[derive(Debug, Deserialize)]
struct Entry {
    base: Number,
    value: String,
}

fn to_usize(number: &Number, field: &str) -> Result<usize> {
    number
        .to_u64()
        .and_then(|v| usize::try_from(v).map_err(|e| e.to_string()))
        .map_err(|reason| Error::MalformedShareSet(format!("invalid `{}`: {}", field, reason)))
}

fn parse_share(key: String, value: Value) -> Result<ShareRecord> {
    let malformed = |key: &str, reason: String| Error::MalformedShare {
        key: key.to_string(),
        reason,
    };

    let index: u64 = key.trim().parse().map_err(|_| {
        malformed(
            &key,
            "share keys must be non-negative decimal integers".to_string(),
        )
    })?;
    let entry: Entry = serde_json::from_value(value).map_err(|e| malformed(&key, e.to_string()))?;
    let base = entry
        .base
        .to_u64()
        .and_then(|b| u32::try_from(b).map_err(|e| e.to_string()))
        .map_err(|reason| malformed(&key, format!("invalid base: {}", reason)))?;

    Ok(ShareRecord::new(index, base, entry.value))
}

impl ShareSet {
    /// Parse a share set from a JSON document.
    pub fn from_json_str<S: Into<String>>(name: S, json: &str) -> Result<Self> {
        let object: Map<String, Value> = serde_json::from_str(json)?;
        Self::from_json_object(name, object)
    }

    /// Parse a share set from JSON bytes.
    pub fn from_json_slice<S: Into<String>>(name: S, json: &[u8]) -> Result<Self> {
        let object: Map<String, Value> = serde_json::from_slice(json)?;
        Self::from_json_object(name, object)
    }

    /// Read a share set from a JSON file. The share set is named after the
    /// file stem.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let bytes = std::fs::read(path)?;
        Self::from_json_slice(name, &bytes)
    }

    fn from_json_object<S: Into<String>>(name: S, mut object: Map<String, Value>) -> Result<Self> {
        let keys = object
            .remove(KEYS)
            .ok_or_else(|| Error::MalformedShareSet(format!("missing `{}` entry", KEYS)))?;
        let keys: Keys = serde_json::from_value(keys)
            .map_err(|e| Error::MalformedShareSet(format!("invalid `{}` entry: {}", KEYS, e)))?;
        let total_shares = to_usize(&keys.n, "n")?;
        let threshold = to_usize(&keys.k, "k")?;

        let mut shares = object
            .into_iter()
            .map(|(key, value)| parse_share(key, value))
            .collect::<Result<Vec<_>>>()?;
        shares.sort_by_key(|share| share.index);

        Ok(Self::with_shares(name, total_shares, threshold, shares))
    }

    /// Serialize the share set in the layout [`ShareSet::from_json_str`]
    /// reads. Bases are written as strings. Shares with the same index
    /// collapse into one entry.
    pub fn to_json_string(&self) -> Result<String> {
        let mut object = Map::new();
        object.insert(
            KEYS.to_string(),
            json!({ "n": self.total_shares(), "k": self.threshold() }),
        );
        for share in self.shares() {
            object.insert(
                share.index.to_string(),
                json!({ "base": share.base.to_string(), "value": share.value }),
            );
        }
        Ok(serde_json::to_string_pretty(&Value::Object(object))?)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, ShareRecord, ShareSet};

    const SAMPLE: &str = r#"{
        "keys": { "n": 4, "k": 3 },
        "1": { "base": "10", "value": "4" },
        "2": { "base": "2", "value": "111" },
        "3": { "base": "10", "value": "12" },
        "6": { "base": "4", "value": "213" }
    }"#;

    #[test]
    fn parse_sample() -> Result<(), Error> {
        let set = ShareSet::from_json_str("sample", SAMPLE)?;
        assert_eq!(set.name(), "sample");
        assert_eq!(set.total_shares(), 4);
        assert_eq!(set.threshold(), 3);
        assert_eq!(
            set.shares(),
            &[
                ShareRecord::new(1, 10, "4"),
                ShareRecord::new(2, 2, "111"),
                ShareRecord::new(3, 10, "12"),
                ShareRecord::new(6, 4, "213"),
            ]
        );
        Ok(())
    }

    #[test]
    fn shares_are_ordered_by_index() -> Result<(), Error> {
        let json = r#"{
            "10": { "base": 16, "value": "ff" },
            "keys": { "n": "3", "k": "2" },
            "9": { "base": "8", "value": "17" },
            "2": { "base": 36, "value": "Zz" }
        }"#;
        let set = ShareSet::from_json_str("unordered", json)?;
        let indices: Vec<u64> = set.shares().iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![2, 9, 10]);
        assert_eq!(set.share(10), Some(&ShareRecord::new(10, 16, "ff")));
        assert_eq!(set.share(2), Some(&ShareRecord::new(2, 36, "Zz")));
        assert_eq!(set.total_shares(), 3);
        assert_eq!(set.threshold(), 2);
        Ok(())
    }

    #[test]
    fn missing_keys() {
        let json = r#"{ "1": { "base": "10", "value": "4" } }"#;
        let error = ShareSet::from_json_str("x", json).unwrap_err();
        assert_eq!(error.to_string(), "Malformed share set: missing `keys` entry");

        let json = r#"{ "keys": { "n": 3 } }"#;
        assert!(matches!(
            ShareSet::from_json_str("x", json),
            Err(Error::MalformedShareSet(_))
        ));

        let json = r#"{ "keys": { "n": 3, "k": "three" } }"#;
        let error = ShareSet::from_json_str("x", json).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Malformed share set: invalid `k`: \"three\" is not a non-negative integer"
        );
    }

    #[test]
    fn malformed_shares() {
        let json = r#"{ "keys": { "n": 1, "k": 1 }, "one": { "base": "10", "value": "4" } }"#;
        assert!(matches!(
            ShareSet::from_json_str("x", json),
            Err(Error::MalformedShare { key, .. }) if key == "one"
        ));

        let json = r#"{ "keys": { "n": 1, "k": 1 }, "1": { "base": "10" } }"#;
        assert!(matches!(
            ShareSet::from_json_str("x", json),
            Err(Error::MalformedShare { key, .. }) if key == "1"
        ));

        let json = r#"{ "keys": { "n": 1, "k": 1 }, "1": { "base": "ten", "value": "4" } }"#;
        let error = ShareSet::from_json_str("x", json).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Malformed share \"1\": invalid base: \"ten\" is not a non-negative integer"
        );
    }

    #[test]
    fn not_an_object() {
        assert!(matches!(
            ShareSet::from_json_str("x", "[1, 2, 3]"),
            Err(Error::Serialization(_))
        ));
        assert!(matches!(
            ShareSet::from_json_slice("x", b"{"),
            Err(Error::Serialization(_))
        ));
    }

    #[test]
    fn write_then_read() -> Result<(), Error> {
        let set = ShareSet::from_json_str("sample", SAMPLE)?;
        let json = set.to_json_string()?;
        assert_eq!(ShareSet::from_json_str("sample", &json)?, set);
        Ok(())
    }
}
