#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
//! constant-time comparison of secret data
//!
//! Deadbolt internal library providing the equality check used to compare
//! secret material (keys, PINs) against attacker-supplied input without
//! leaking, through timing, where the first mismatching byte sits.
//!
//! ## TODO
//! Figure out methodology to ensure that code is actually constant time
//! beyond the statistical test behind the `constant_time_tests` feature.
//!
//! # Examples
//!
//! ```rust
//! use deadbolt_constant_time::eq;
//!
//! assert!(eq(b"s3cr3t", b"s3cr3t"));
//! assert!(!eq(b"s3cr3t", b"wrong!"));
//!
//! // Length is always taken from the second (public) operand; mismatched
//! // lengths compare unequal, but only after a full-length scan.
//! assert!(!eq(b"abcde", b"abc"));
//! ```
//!
//! # Security Notes
//!
//! While these functions aim to be constant-time, they may leak timing
//! information in some cases:
//!
//! - Buffer lengths are treated as public; a length mismatch is detectable
//! - Execution time scales linearly with the public operand's length

mod eq;

pub use eq::eq;
pub use eq::eq_with_backing;
