#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

pub use deadbolt_constant_time::{eq, eq_with_backing};
pub use deadbolt_fatal::{halt, halt_with};
pub use deadbolt_mem::{
    bounded_copy, bounded_copy_within, try_bounded_copy, try_bounded_copy_within, ArgError,
};
