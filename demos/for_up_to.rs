//! Call a type-erased callable for each index below a bound.
//!
//! Run with: cargo run --example for_up_to

use std::cell::RefCell;
use std::rc::Rc;

use fn_bridge::prelude::*;

fn for_up_to(n: i32, mut f: CallableValue<fn(i32)>) {
    for i in 0..n {
        f.call(i);
    }
}

fn print_int(i: i32) {
    print!("{i} ");
}

fn main() {
    let values = Rc::new(RefCell::new(Vec::new()));

    // Insert values from 0 to 4.
    let sink = Rc::clone(&values);
    for_up_to(5, callable!(move |i: i32| sink.borrow_mut().push(i)));

    // Print elements.
    for_up_to(5, CallableValue::from_fn(print_int));
    println!();

    println!("collected: {:?}", values.borrow());

    let a = CallableValue::<fn(i32)>::from_fn(print_int);
    let b: CallableValue<fn(i32)> = callable!(|i: i32| print_int(i));
    println!("same function pointer: {}", a == a.clone());
    println!("pointer vs closure:    {}", a == b);
    println!("closure vs itself:     {:?}", b.try_eq(&b));
}
