//! Tests for compile-time capability probes.

use std::cell::Cell;
use std::rc::Rc;

use polydraw::{can_wrap, is_drawable, Document, Drawable, History, Object};

#[derive(Drawable)]
struct Derived;

struct Opaque;

#[test]
fn test_is_drawable() {
    assert!(is_drawable!(i32));
    assert!(is_drawable!(String));
    assert!(is_drawable!(Box<str>));
    assert!(is_drawable!(Object));
    assert!(is_drawable!(Document));
    assert!(is_drawable!(Derived));

    assert!(!is_drawable!(Opaque));
    assert!(!is_drawable!(History));
    assert!(!is_drawable!(Vec<i32>));
}

#[test]
fn test_can_wrap() {
    assert!(can_wrap!(Derived));
    assert!(can_wrap!(std::net::Ipv4Addr));

    assert!(!can_wrap!(Opaque));
    // drawable, but not shareable across threads
    assert!(!can_wrap!(Rc<String>));
    assert!(!can_wrap!(Cell<i32>));
}
