//! Tests for #[derive(Drawable)].

use std::fmt;

use polydraw::prelude::*;

#[derive(Drawable)]
struct Unit;

#[derive(Drawable)]
#[drawable(label = "my_class_t")]
struct Labeled;

#[derive(Drawable)]
#[drawable(display)]
struct Celsius(f32);

impl fmt::Display for Celsius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°C", self.0)
    }
}

#[derive(Debug, Drawable)]
#[drawable(debug)]
enum Shape {
    Circle { radius: u32 },
    Square(u32),
}

#[derive(Drawable)]
#[allow(dead_code)]
struct Tagged<T> {
    inner: T,
}

#[derive(Debug, Drawable)]
#[drawable(debug)]
struct Wrapped<T: fmt::Debug>(T);

#[test]
fn test_default_draws_type_name() {
    assert_eq!(render(&Unit).unwrap(), "Unit\n");
}

#[test]
fn test_label() {
    assert_eq!(render(&Labeled).unwrap(), "my_class_t\n");
}

#[test]
fn test_display() {
    assert_eq!(render(&Celsius(21.5)).unwrap(), "21.5°C\n");
}

#[test]
fn test_debug_enum() {
    assert_eq!(render(&Shape::Circle { radius: 2 }).unwrap(), "Circle { radius: 2 }\n");
    assert_eq!(render(&Shape::Square(3)).unwrap(), "Square(3)\n");
}

#[test]
fn test_generics() {
    assert_eq!(render(&Tagged { inner: 5u8 }).unwrap(), "Tagged\n");
    assert_eq!(render(&Wrapped(vec![1, 2])).unwrap(), "Wrapped([1, 2])\n");
}

#[test]
fn test_derived_in_document() {
    let mut doc = Document::new();
    doc.push(Labeled);
    doc.push(Celsius(-4.0));

    let mut outer = Document::new();
    outer.push(doc);
    outer.push(Unit);

    assert_eq!(
        render(&outer).unwrap(),
        "<document>\n  <document>\n    my_class_t\n    -4°C\n  </document>\n  Unit\n</document>\n"
    );
}
