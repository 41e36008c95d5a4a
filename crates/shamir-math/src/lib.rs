#![crate_name = "shamir_math"]
#![crate_type = "lib"]
#![warn(missing_docs, unused_imports)]

//! Exact integer arithmetic for threshold secret reconstruction: decoding of
//! share values written in an arbitrary radix, and Lagrange interpolation of
//! integer points evaluated without any loss of precision.

mod errors;

pub mod lagrange;
pub mod radix;

pub use errors::{Error, Result};
