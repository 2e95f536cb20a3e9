//! Bridge lifecycle events emitted through `tracing`.

use fn_bridge::prelude::*;
use tracing_test::traced_test;

#[traced_test]
#[test]
fn test_lifecycle_events() {
    let value: CallableValue<fn(u8) -> u8> = callable!(|x: u8| x);
    assert!(logs_contain("bridge allocated"));

    let copy = value.clone();
    assert!(logs_contain("bridge cloned"));

    drop(copy);
    assert!(logs_contain("bridge released"));
}

#[traced_test]
#[test]
fn test_rejected_equality_is_logged() {
    let value: CallableValue<fn(u8) -> u8> = callable!(|x: u8| x);
    assert!(value.try_eq(&value).is_err());
    assert!(logs_contain("equality rejected"));
}

#[traced_test]
#[test]
fn test_moves_do_not_allocate() {
    let mut value = CallableValue::<fn(u8) -> u8>::from_fn(|x| x);
    let moved = value.take();
    assert!(value.is_empty());
    assert!(!moved.is_empty());

    logs_assert(|lines: &[&str]| {
        match lines.iter().filter(|line| line.contains("bridge allocated")).count() {
            1 => Ok(()),
            n => Err(format!("expected one allocation, saw {n}")),
        }
    });
}
