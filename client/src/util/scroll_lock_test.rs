#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn locked_hides_overflow() {
    assert_eq!(overflow_value(true), "hidden");
}

#[test]
fn unlocked_clears_inline_overflow() {
    assert_eq!(overflow_value(false), "");
}


#[test]
fn set_overflow_is_noop_but_callable() {
    set_overflow("hidden");
    set_overflow("");
}
