#![no_main]
extern crate arbitrary;

use libfuzzer_sys::fuzz_target;

use deadbolt_constant_time::eq;

#[derive(arbitrary::Arbitrary, Debug)]
pub struct Input {
    pub secret: Box<[u8]>,
    pub public: Box<[u8]>,
}

fuzz_target!(|input: Input| {
    let got = eq(&input.secret, &input.public);

    // oracle: plain comparison; a length mismatch is always unequal
    let expected = input.secret.len() == input.public.len() && *input.secret == *input.public;
    assert_eq!(got, expected);
});
