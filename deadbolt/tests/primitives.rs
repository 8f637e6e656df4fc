use deadbolt::{bounded_copy, bounded_copy_within, eq, halt, try_bounded_copy, ArgError};

procspawn::enable_test_support!();

// the reference scenarios from the firmware's utility module, exercised
// through the facade

#[test]
fn consteq_scenarios() {
    assert!(eq(b"s3cr3t", b"s3cr3t"));
    assert!(!eq(b"s3cr3t", b"wrong!"));

    // asymmetric: the public operand determines the comparison length, and
    // a length mismatch means unequal
    assert!(!eq(b"abcde", b"abc"));
    assert!(eq(b"", b""));
}

#[test]
fn memcpy_scenario() {
    let mut dst = vec![0u8; 4];
    let copied = bounded_copy(&mut dst, 1, b"hello", 0, 10);
    assert_eq!(copied, 3);
    assert_eq!(dst, vec![0, b'h', b'e', b'l']);
}

#[test]
fn memcpy_rejects_negative_arguments() {
    let mut dst = vec![0u8; 4];
    assert_eq!(
        try_bounded_copy(&mut dst, 0, b"hello", 0, -7),
        Err(ArgError::NegativeCount)
    );
    assert_eq!(try_bounded_copy(&mut dst, 1, b"hello", 0, 10), Ok(3));
}

#[test]
fn memcpy_overlap_uses_move_semantics() {
    let mut buf = *b"abcdef";
    assert_eq!(bounded_copy_within(&mut buf, 1, 0, 5), 5);
    assert_eq!(&buf, b"aabcde");
}

#[test]
fn halt_ends_the_process_with_and_without_message() {
    let handle = procspawn::spawn::<_, ()>((), |_: ()| {
        halt(None);
    });
    assert!(handle.join().is_err());

    let handle = procspawn::spawn::<_, ()>((), |_: ()| {
        halt(Some(b"custom message"));
    });
    assert!(handle.join().is_err());
}
