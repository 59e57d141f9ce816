//! # Console Tests

use crate::common::mocks::console::MockTerminal;
use ls8_core::soc::{BufferConsole, Console, StdoutConsole};

#[test]
fn test_buffer_records_in_order() {
    let mut console = BufferConsole::new();
    for v in [3, 0, 255] {
        console.emit(v);
    }
    assert_eq!(console.values(), &[3, 0, 255]);
    assert_eq!(console.to_text(), "3\n0\n255\n");
}

#[test]
fn test_buffer_take_empties() {
    let mut console = BufferConsole::new();
    console.emit(1);
    assert_eq!(console.take(), vec![1]);
    assert!(console.values().is_empty());
    assert_eq!(console.to_text(), "");
}

#[test]
fn test_stdout_console_accepts_values() {
    let mut console = StdoutConsole;
    console.emit(8);
}

#[test]
fn test_console_as_trait_object() {
    let mut mock = MockTerminal::new();
    mock.expect_emit().withf(|&v| v == 42).times(1).return_const(());

    let console: &mut dyn Console = &mut mock;
    console.emit(42);
}
