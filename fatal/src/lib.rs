#![warn(missing_docs)]
//! fail-fast termination
//!
//! Deadbolt internal library providing the last-resort response to a
//! violated safety invariant: an unconditional, non-resumable halt of the
//! current process. There is deliberately no error value to return and no
//! exception to catch; code holding possibly-compromised state must not be
//! given a continuation path.

/// Diagnostic used when [halt] is called without a message.
const DEFAULT_DIAGNOSTIC: &str = "halt";

/// Halts execution.
///
/// The diagnostic message, or a fixed default if none is supplied, is
/// surfaced through the [log] facade at error level before the process is
/// torn down with [std::process::abort]. Non-UTF-8 message bytes are
/// rendered lossily rather than dropped.
///
/// This function never returns control to its caller. Abort does not
/// unwind, so there is no way to intercept the halt from Rust code; the
/// return type is the never type (`!`) so callers cannot be written to
/// expect a subsequent return.
pub fn halt(message: Option<&[u8]>) -> ! {
    match message {
        Some(msg) => log::error!("{}", String::from_utf8_lossy(msg)),
        None => log::error!("{}", DEFAULT_DIAGNOSTIC),
    }
    std::process::abort()
}

/// Convenience wrapper around [halt] for callers that already hold a
/// string diagnostic.
pub fn halt_with(message: &str) -> ! {
    halt(Some(message.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    procspawn::enable_test_support!();

    // the halting closures run in a child process; observing anything other
    // than a clean exit code from the child is the expected outcome
    #[test]
    fn halt_without_message_terminates_the_process() {
        let handle = procspawn::spawn::<_, ()>((), |_: ()| {
            env_logger::init();
            halt(None);
        });
        assert!(handle.join().is_err());
    }

    #[test]
    fn halt_with_message_terminates_the_process() {
        let handle = procspawn::spawn::<_, ()>((), |_: ()| {
            env_logger::init();
            halt(Some(b"invariant violated: fuse state"));
        });
        assert!(handle.join().is_err());
    }

    #[test]
    fn halt_with_non_utf8_message_terminates_the_process() {
        let handle = procspawn::spawn::<_, ()>((), |_: ()| {
            halt(Some(&[0xff, 0xfe, 0x00]));
        });
        assert!(handle.join().is_err());
    }

    #[test]
    fn halt_with_str_terminates_the_process() {
        let handle = procspawn::spawn::<_, ()>((), |_: ()| {
            halt_with("custom message");
        });
        assert!(handle.join().is_err());
    }

    #[test]
    fn halt_signature_diverges() {
        // type-level check that no return path exists
        let _: fn(Option<&[u8]>) -> ! = halt;
        let _: fn(&str) -> ! = halt_with;
    }
}
