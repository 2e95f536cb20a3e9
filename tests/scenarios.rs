//! End-to-end scenarios: counters, function pointers, empty values.

use fn_bridge::prelude::*;

fn print_int(i: i32) {
    print!("{i} ");
}

fn for_up_to(n: i32, mut f: CallableValue<fn(i32)>) {
    for i in 0..n {
        f.call(i);
    }
}

// =============================================================================
// Counter closure
// =============================================================================

fn counter() -> CallableValue<fn(i32) -> i32> {
    let mut count = 0;
    callable!(move |_: i32| {
        count += 1;
        count
    })
}

#[test]
fn test_counter_runs_on_captured_state() {
    let mut v = counter();
    assert_eq!(v.call(0), 1);
    assert_eq!(v.call(0), 2);
    assert_eq!(v.call(0), 3);
}

#[test]
fn test_counter_clone_taken_fresh_starts_from_zero() {
    let mut v = counter();
    let mut fresh = v.clone();

    assert_eq!(v.call(0), 1);
    assert_eq!(v.call(0), 2);
    assert_eq!(v.call(0), 3);

    assert_eq!(fresh.call(0), 1);
}

#[test]
fn test_counter_clone_is_independent() {
    let mut v = counter();
    for expected in 1..=3 {
        assert_eq!(v.call(0), expected);
    }

    let mut copy = v.clone();
    for expected in 4..=6 {
        assert_eq!(v.call(0), expected);
    }

    // The clone continues from its own snapshot, untouched by the calls above.
    assert_eq!(copy.call(0), 4);
    assert_eq!(copy.call(0), 5);
}

// =============================================================================
// Function pointers
// =============================================================================

#[test]
fn test_same_function_pointer_is_equal() {
    let a: CallableValue<fn(i32)> = callable!(print_int as fn(i32));
    let b = CallableValue::<fn(i32)>::from_fn(print_int);
    assert!(a == b);
    assert_eq!(a.try_eq(&b), Ok(true));
}

#[test]
fn test_lambda_never_equals_function_pointer() {
    let a = CallableValue::<fn(i32)>::from_fn(print_int);
    let b: CallableValue<fn(i32)> = callable!(|i: i32| print_int(i));
    assert!(a != b);
    assert!(b != a);
}

#[test]
fn test_for_up_to_collects_values() {
    use std::cell::RefCell;
    use std::rc::Rc;

    let values = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&values);
    for_up_to(5, CallableValue::new(move |i: i32| sink.borrow_mut().push(i)));
    assert_eq!(*values.borrow(), vec![0, 1, 2, 3, 4]);

    for_up_to(5, CallableValue::from_fn(print_int));
}

// =============================================================================
// Empty values
// =============================================================================

#[test]
fn test_default_then_assign() {
    let mut v = CallableValue::<fn(i32) -> i32>::default();
    assert!(v.is_empty());

    v.set(|x: i32| x + 1);
    assert!(!v.is_empty());
    assert_eq!(v.call(1), 2);

    // Invocation never changes emptiness.
    assert!(!v.is_empty());
}

#[test]
fn test_move_assignment_from_value() {
    let mut source: CallableValue<fn(i32) -> i32> = callable!(|x: i32| x * 10);
    let mut dest = CallableValue::<fn(i32) -> i32>::from_fn(|x| x);
    assert_eq!(dest.call(4), 4);

    dest = source.take();
    assert!(source.is_empty());
    assert_eq!(dest.call(4), 40);

    // A moved-from value is reusable.
    source.set(|x: i32| x - 1);
    assert_eq!(source.call(4), 3);
}

#[test]
fn test_nullary_and_wide_signatures() {
    let mut hello: CallableValue<fn() -> &'static str> = callable!(|| "hello");
    assert_eq!(hello.call(), "hello");

    let mut sum: CallableValue<fn(u8, u16, u32, u64) -> u64> =
        callable!(|a: u8, b: u16, c: u32, d: u64| a as u64 + b as u64 + c as u64 + d);
    assert_eq!(sum.call(1, 2, 3, 4), 10);
    assert_eq!(sum.invoke((10, 20, 30, 40)), 100);
}

#[test]
#[should_panic(expected = "invoked an empty callable value")]
fn test_invoking_empty_is_fatal() {
    let mut v = CallableValue::<fn()>::empty();
    v.call();
}

#[test]
fn test_callable_panic_propagates() {
    let mut v: CallableValue<fn(i32) -> i32> = callable!(|x: i32| {
        assert!(x >= 0, "negative input");
        x
    });
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| v.call(-1)));
    assert!(result.is_err());
    assert_eq!(v.call(2), 2);
}
