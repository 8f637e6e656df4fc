//! secret equality

use core::hint::black_box;

/// Accumulates byte differences between `secret` and `public` without an
/// early exit.
///
/// The scan length is `public.len()`; positions past the logical end of
/// `secret` contribute a zero byte. The length mismatch itself is folded
/// into the accumulator so that unequal lengths yield a non-zero result.
///
/// `probe` is invoked once per visited index. Production callers pass a
/// no-op closure which the compiler inlines away; tests use it to count
/// byte operations.
#[inline]
fn fold_diff(secret: &[u8], public: &[u8], mut probe: impl FnMut(usize)) -> u8 {
    let mut acc = black_box((secret.len() != public.len()) as u8);
    for (i, &p) in public.iter().enumerate() {
        probe(i);
        let s = black_box(secret.get(i).copied().unwrap_or(0));
        acc |= black_box(s ^ p);
    }
    acc
}

/// Compares the secret information in `secret` with public, user-provided
/// information in `public`, in constant time relative to the contents of
/// both operands.
///
/// The comparison is asymmetric: exactly `public.len()` byte positions are
/// scanned, regardless of `secret`'s length. Differences are accumulated
/// bitwise across the whole scan and the single data-dependent branch
/// happens at the very end, on the accumulated value. Mismatched lengths
/// are reported as unequal, but still after a full `public.len()` scan.
///
/// ## Leaks
/// The execution time of the function grows approx. linear with the length
/// of the public operand, and the lengths of both operands are treated as
/// public information. This is widely considered safe. The contents of the
/// operands, and in particular the position of the first mismatch, have no
/// effect on the work performed.
///
/// ## Examples
///
/// ```rust
/// use deadbolt_constant_time::eq;
/// let a = [0, 0, 0, 0];
/// let b = [0, 0, 0, 1];
/// let c = [0, 0, 0];
/// assert!(eq(&a, &a));
/// assert!(!eq(&a, &b));
/// assert!(!eq(&a, &c));
/// ```
#[inline]
pub fn eq(secret: &[u8], public: &[u8]) -> bool {
    fold_diff(secret, public, |_| {}) == 0
}

/// Variant of [eq] that preserves the relaxed bounds contract of the
/// original firmware primitive: `public.len()` bytes are read from
/// `secret`'s backing memory even when `secret`'s logical length is
/// shorter.
///
/// The length mismatch is still folded into the accumulator, so a shorter
/// `secret` always compares unequal; the out-of-bounds reads exist solely
/// to keep the memory access pattern a function of `public.len()` alone.
///
/// # Safety
///
/// The caller must guarantee that at least `public.len()` bytes are
/// readable starting at `secret.as_ptr()`. This is a caller obligation,
/// not something the function can check; prefer [eq] unless the backing
/// allocation is known to extend past the slice.
#[inline]
pub unsafe fn eq_with_backing(secret: &[u8], public: &[u8]) -> bool {
    let mut acc = black_box((secret.len() != public.len()) as u8);
    let base = secret.as_ptr();
    for (i, &p) in public.iter().enumerate() {
        // SAFETY: the caller promises `public.len()` readable bytes at `base`.
        let s = unsafe { base.add(i).read() };
        acc |= black_box(s ^ p);
    }
    acc == 0
}
