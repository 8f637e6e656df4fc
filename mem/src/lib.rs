#![warn(missing_docs)]
//! bounds-clamped memory copies
//!
//! Deadbolt internal library providing a copy primitive that can never read
//! or write outside the extents of the buffers handed to it. Requested
//! lengths are clamped to what both buffers can actually hold; the clamped
//! count is returned instead of an error so callers can detect truncation.
//!
//! # Examples
//!
//! ```rust
//! use deadbolt_mem::bounded_copy;
//!
//! let mut dst = [0u8; 4];
//! // asking for 10 bytes into a 4-byte buffer at offset 1 copies only 3
//! let copied = bounded_copy(&mut dst, 1, b"hello", 0, 10);
//! assert_eq!(copied, 3);
//! assert_eq!(&dst, &[0, b'h', b'e', b'l']);
//! ```

mod copy;

pub use copy::bounded_copy;
pub use copy::bounded_copy_within;
pub use copy::try_bounded_copy;
pub use copy::try_bounded_copy_within;
pub use copy::ArgError;
