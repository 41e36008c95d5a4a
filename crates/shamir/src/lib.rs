#![crate_name = "shamir"]
#![crate_type = "lib"]
#![warn(missing_docs, unused_imports)]

//! Reconstruction of a Shamir secret from a threshold of shares whose values
//! are written in arbitrary radices.
//!
//! A [`ShareSet`] holds the threshold `k` and the share records. Each record's
//! value is decoded into an integer point `(index, value)`, `k` of the points
//! are selected, and the secret is the constant term of the polynomial through
//! them, computed exactly over the integers.
//!
//! ```
//! use num_bigint::BigInt;
//! use shamir::{reconstruct, ShareRecord, ShareSet};
//!
//! let mut set = ShareSet::new("example", 4, 3);
//! set.push(ShareRecord::new(1, 10, "4"))
//!     .push(ShareRecord::new(2, 2, "111"))
//!     .push(ShareRecord::new(3, 10, "12"))
//!     .push(ShareRecord::new(6, 4, "213"));
//!
//! assert_eq!(reconstruct(&set)?, BigInt::from(3));
//! # Ok::<(), shamir::Error>(())
//! ```

mod errors;
mod reconstruct;
mod share;

pub mod config;
pub mod json;

pub use config::{ReconstructionConfig, ReconstructionConfigBuilder, Selection};
pub use errors::{Error, Result};
pub use reconstruct::{reconstruct, Reconstructor};
pub use share::{ShareRecord, ShareSet};
pub use shamir_math::lagrange::{Exactness, Point};
pub use shamir_math::radix;
