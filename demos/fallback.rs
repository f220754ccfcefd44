//! How values without a `Drawable` impl still end up in a document, and how
//! the layout can be configured.

use std::net::Ipv4Addr;
use std::time::Duration;

use polydraw::prelude::*;
use polydraw::{can_wrap, is_drawable};

struct Opaque;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("i32:      drawable = {}, wrappable = {}", is_drawable!(i32), can_wrap!(i32));
    println!("Ipv4Addr: drawable = {}, wrappable = {}", is_drawable!(Ipv4Addr), can_wrap!(Ipv4Addr));
    println!("Opaque:   drawable = {}, wrappable = {}", is_drawable!(Opaque), can_wrap!(Opaque));
    println!();

    // Display-only values go through the fallback
    let mut inner: Document = [object!(Ipv4Addr::LOCALHOST), object!(42)].into_iter().collect();
    inner.extend([Object::from_display(format!("{:?}", Duration::from_millis(1500)))]);

    let mut outer = Document::new();
    outer.push(inner.clone());
    outer.push(inner);

    print!("{}", render_with(&outer, Style::new().with_indent(4))?);

    match render_with(&outer, Style::new().with_max_depth(1)) {
        Ok(_) => println!("rendered within the limit"),
        Err(err) => println!("refused: {err}"),
    }
    Ok(())
}
