//! Tests for type-erased objects and strategy selection.

use std::fmt;
use std::net::Ipv4Addr;
use std::sync::Arc;
use std::thread;

use polydraw::dispatch::{ViaDisplay, ViaDrawable};
use polydraw::prelude::*;

struct Both;

impl Drawable for Both {
    fn draw(&self, canvas: &mut Canvas<'_>, position: usize) -> Result<(), DrawError> {
        canvas.line(position, "drawn")
    }
}

impl fmt::Display for Both {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("displayed")
    }
}

/// Draws over two lines, to show that containers indent every line.
struct Pair(&'static str, &'static str);

impl Drawable for Pair {
    fn draw(&self, canvas: &mut Canvas<'_>, position: usize) -> Result<(), DrawError> {
        canvas.line(position, self.0)?;
        canvas.line(position, self.1)
    }
}

// =============================================================================
// object! selection
// =============================================================================

#[test]
fn test_object_prefers_drawable() {
    assert_eq!(render(&object!(Both)).unwrap(), "drawn\n");
}

#[test]
fn test_object_falls_back_to_display() {
    let addr = object!(Ipv4Addr::new(10, 0, 0, 1));
    assert_eq!(render(&addr).unwrap(), "10.0.0.1\n");
    assert!(addr.is::<Ipv4Addr>());
}

#[test]
fn test_object_on_object_shares() {
    let a = Object::new(1u32);
    let b = object!(a.clone());
    assert!(Object::ptr_eq(&a, &b));
}

#[test]
fn test_explicit_strategies() {
    assert_eq!(render(&Object::with_impl::<_, ViaDrawable>(Both)).unwrap(), "drawn\n");
    assert_eq!(render(&Object::with_impl::<_, ViaDisplay>(Both)).unwrap(), "displayed\n");
    assert_eq!(render(&Object::from_display(Both)).unwrap(), "displayed\n");
}

// =============================================================================
// Leaf rendering
// =============================================================================

#[test]
fn test_leaf_indentation_for_any_position() {
    let object = Object::new("leaf");
    for position in [0, 1, 2, 7, 40] {
        let mut out = String::new();
        object.draw(&mut Canvas::new(&mut out), position).unwrap();
        assert_eq!(out, format!("{}leaf\n", " ".repeat(position)));
    }
}

#[test]
fn test_multi_line_drawable_in_document() {
    let mut doc = Document::new();
    doc.push(Pair("left", "right"));
    assert_eq!(render(&doc).unwrap(), "<document>\n  left\n  right\n</document>\n");
}

// =============================================================================
// Sharing
// =============================================================================

#[test]
fn test_objects_cross_threads() {
    let mut doc = Document::new();
    doc.push(Arc::new(String::from("shared")));
    doc.push(7i64);

    let copy = doc.clone();
    let rendered = thread::spawn(move || render(&copy).unwrap()).join().unwrap();

    assert_eq!(rendered, render(&doc).unwrap());
}
