// The termination hook is process-wide, so this runs in its own test binary
use hello_core::{HelloError, Shutdown};

#[test]
fn test_second_signal_handler_is_rejected() {
    let first = Shutdown::new();
    first.install_signal_handler().unwrap();

    let second = Shutdown::new();
    let err = second.install_signal_handler().unwrap_err();
    assert!(matches!(err, HelloError::Signal(_)), "{}", err);
    assert!(!second.is_requested());
}
