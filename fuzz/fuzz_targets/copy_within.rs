#![no_main]
extern crate arbitrary;

use libfuzzer_sys::fuzz_target;

use deadbolt_mem::bounded_copy_within;

#[derive(arbitrary::Arbitrary, Debug)]
pub struct Input {
    pub buf: Box<[u8]>,
    pub dst_offset: u16,
    pub src_offset: u16,
    pub n: u16,
}

fuzz_target!(|input: Input| {
    let mut buf = input.buf.clone();
    let (dst_offset, src_offset, n) = (
        input.dst_offset as usize,
        input.src_offset as usize,
        input.n as usize,
    );

    let copied = bounded_copy_within(&mut buf, dst_offset, src_offset, n);

    // model: overlap-safe copy through a temporary buffer
    let mut model = input.buf.clone();
    let expected = n
        .min(model.len().saturating_sub(dst_offset))
        .min(model.len().saturating_sub(src_offset));
    if expected > 0 {
        let tmp = input.buf[src_offset..src_offset + expected].to_vec();
        model[dst_offset..dst_offset + expected].copy_from_slice(&tmp);
    }

    assert_eq!(copied, expected);
    assert_eq!(buf, model);
});
