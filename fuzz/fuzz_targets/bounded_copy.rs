#![no_main]
extern crate arbitrary;

use libfuzzer_sys::fuzz_target;

use deadbolt_mem::bounded_copy;

#[derive(arbitrary::Arbitrary, Debug)]
pub struct Input {
    pub dst: Box<[u8]>,
    pub dst_offset: u16,
    pub src: Box<[u8]>,
    pub src_offset: u16,
    pub n: u16,
}

fuzz_target!(|input: Input| {
    let mut dst = input.dst.clone();
    let (dst_offset, src_offset, n) = (
        input.dst_offset as usize,
        input.src_offset as usize,
        input.n as usize,
    );

    let copied = bounded_copy(&mut dst, dst_offset, &input.src, src_offset, n);

    // clamping law
    let expected = n
        .min(dst.len().saturating_sub(dst_offset))
        .min(input.src.len().saturating_sub(src_offset));
    assert_eq!(copied, expected);

    // copied region matches the source, everything else is untouched
    if copied > 0 {
        assert_eq!(
            &dst[dst_offset..dst_offset + copied],
            &input.src[src_offset..src_offset + copied]
        );
        assert_eq!(&dst[..dst_offset], &input.dst[..dst_offset]);
        assert_eq!(&dst[dst_offset + copied..], &input.dst[dst_offset + copied..]);
    } else {
        assert_eq!(dst, input.dst);
    }
});
