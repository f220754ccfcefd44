//! Build a document, commit, edit it with nested content, then undo.
//!
//! Run with `RUST_LOG=trace` to watch objects being constructed and
//! snapshots being committed.

use polydraw::prelude::*;

#[derive(Drawable)]
#[drawable(label = "my_class_t")]
struct MyClass;

const RULE: &str = "------------------------------------";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut history = History::new();

    history.current().push(0);
    history.current().push(String::from("hello"));

    print(history.latest())?;
    println!("{RULE}");

    history.commit();

    let snapshot = history.latest().clone();
    history.current().push(snapshot);
    history.current().push(MyClass);
    history.current().replace(1, String::from("world"))?;

    print(history.latest())?;
    println!("{RULE}");

    history.undo();

    print(history.latest())?;
    Ok(())
}
