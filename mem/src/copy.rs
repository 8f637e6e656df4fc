//! clamped copies

use thiserror::Error;

/// Rejected argument at the host boundary.
///
/// Hosts whose integer type admits negative values marshal offsets and
/// counts through [try_bounded_copy]; a negative value is a programming
/// error in the caller and is rejected rather than silently clamped.
/// The messages match the diagnostics the hosting firmware expects.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum ArgError {
    /// Negative destination offset.
    #[error("invalid dst offset (has to be >= 0)")]
    NegativeDstOffset,
    /// Negative source offset.
    #[error("invalid src offset (has to be >= 0)")]
    NegativeSrcOffset,
    /// Negative byte count.
    #[error("invalid byte count (has to be >= 0)")]
    NegativeCount,
}

/// Computes how many bytes a copy may transfer given both buffers' extents.
///
/// An offset at or beyond a buffer's length yields zero remaining capacity,
/// not an error.
#[inline]
fn clamp(dst_len: usize, dst_offset: usize, src_len: usize, src_offset: usize, n: usize) -> usize {
    let dst_remaining = dst_len.saturating_sub(dst_offset);
    let src_remaining = src_len.saturating_sub(src_offset);
    n.min(dst_remaining).min(src_remaining)
}

/// Copies at most `n` bytes from `src` at offset `src_offset` to `dst` at
/// offset `dst_offset`. Returns the number of actually copied bytes.
///
/// The transferred length is clamped to the capacity remaining in both
/// buffers past their respective offsets; a result smaller than `n` is the
/// documented clamping contract, not an error. Bytes of `dst` outside
/// `[dst_offset, dst_offset + copied)` are left untouched. Out-of-range
/// offsets yield a copy of zero bytes.
///
/// Source and destination are necessarily disjoint here; for copies within
/// a single buffer whose regions may overlap, use [bounded_copy_within].
///
/// # Examples
///
/// ```rust
/// use deadbolt_mem::bounded_copy;
///
/// let mut dst = [0u8; 8];
/// assert_eq!(bounded_copy(&mut dst, 0, b"hello", 0, 5), 5);
/// assert_eq!(&dst[..5], b"hello");
/// assert_eq!(&dst[5..], &[0, 0, 0]);
///
/// // offset past the end: nothing copied, nothing touched
/// assert_eq!(bounded_copy(&mut dst, 100, b"hello", 0, 5), 0);
/// ```
pub fn bounded_copy(
    dst: &mut [u8],
    dst_offset: usize,
    src: &[u8],
    src_offset: usize,
    n: usize,
) -> usize {
    let copied = clamp(dst.len(), dst_offset, src.len(), src_offset, n);
    if copied == 0 {
        return 0;
    }
    dst[dst_offset..dst_offset + copied].copy_from_slice(&src[src_offset..src_offset + copied]);
    copied
}

/// Variant of [bounded_copy] for source and destination regions inside the
/// same buffer.
///
/// The regions may overlap; the copy behaves as if it went through a
/// temporary buffer (move semantics, via [slice::copy_within]). Clamping
/// and return value follow the same contract as [bounded_copy].
///
/// # Examples
///
/// ```rust
/// use deadbolt_mem::bounded_copy_within;
///
/// let mut buf = *b"abcdef";
/// assert_eq!(bounded_copy_within(&mut buf, 2, 0, 4), 4);
/// assert_eq!(&buf, b"ababcd");
/// ```
pub fn bounded_copy_within(
    buf: &mut [u8],
    dst_offset: usize,
    src_offset: usize,
    n: usize,
) -> usize {
    let copied = clamp(buf.len(), dst_offset, buf.len(), src_offset, n);
    if copied == 0 {
        return 0;
    }
    buf.copy_within(src_offset..src_offset + copied, dst_offset);
    copied
}

/// Host-boundary wrapper around [bounded_copy] for hosts that marshal
/// offsets and counts as signed integers.
///
/// Negative values are rejected with [ArgError]; non-negative values follow
/// the clamping contract of [bounded_copy].
///
/// # Examples
///
/// ```rust
/// use deadbolt_mem::{try_bounded_copy, ArgError};
///
/// let mut dst = [0u8; 4];
/// assert_eq!(try_bounded_copy(&mut dst, 1, b"hello", 0, 10), Ok(3));
/// assert_eq!(
///     try_bounded_copy(&mut dst, -1, b"hello", 0, 10),
///     Err(ArgError::NegativeDstOffset)
/// );
/// ```
pub fn try_bounded_copy(
    dst: &mut [u8],
    dst_offset: i64,
    src: &[u8],
    src_offset: i64,
    n: i64,
) -> Result<usize, ArgError> {
    let dst_offset = usize::try_from(dst_offset).map_err(|_| ArgError::NegativeDstOffset)?;
    let src_offset = usize::try_from(src_offset).map_err(|_| ArgError::NegativeSrcOffset)?;
    let n = usize::try_from(n).map_err(|_| ArgError::NegativeCount)?;
    Ok(bounded_copy(dst, dst_offset, src, src_offset, n))
}

/// Host-boundary wrapper around [bounded_copy_within]; see
/// [try_bounded_copy].
pub fn try_bounded_copy_within(
    buf: &mut [u8],
    dst_offset: i64,
    src_offset: i64,
    n: i64,
) -> Result<usize, ArgError> {
    let dst_offset = usize::try_from(dst_offset).map_err(|_| ArgError::NegativeDstOffset)?;
    let src_offset = usize::try_from(src_offset).map_err(|_| ArgError::NegativeSrcOffset)?;
    let n = usize::try_from(n).map_err(|_| ArgError::NegativeCount)?;
    Ok(bounded_copy_within(buf, dst_offset, src_offset, n))
}
