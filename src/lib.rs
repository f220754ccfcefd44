#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables stdout / io::Write rendering and std::error::Error

//! # polydraw
//!
//! Value-semantics polymorphism for drawable content.
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Capability                                              |
//! |  - Drawable, Canvas, Style                                        |
//! |  - Strategies (ViaDrawable, ViaDisplay), Detect probes            |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Object                                                  |
//! |  - Arc<dyn Concept> over Model<T, Strategy>                       |
//! |  - shared on clone, never mutated                                 |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Document / History                                      |
//! |  - Vec<Object>, nestable                                          |
//! |  - Vec<Document> snapshots with commit / undo                     |
//! +-------------------------------------------------------------------+
//! ```
//!
//! Any type can take part as long as it can be drawn. Whether it can is
//! decided where the value is wrapped into an [`Object`], at compile time.
//! Once wrapped, the concrete type is gone and only the ability to draw
//! remains.
//!
//! ## Quick Start
//!
//! ```
//! use polydraw::prelude::*;
//!
//! #[derive(Drawable)]
//! #[drawable(label = "my_class_t")]
//! struct MyClass;
//!
//! let mut history = History::new();
//! history.current().push(0);
//! history.current().push(String::from("hello"));
//!
//! history.commit();
//! let snapshot = history.latest().clone();
//! history.current().push(snapshot);
//! history.current().push(MyClass);
//! history.current().replace(1, String::from("world")).unwrap();
//!
//! assert_eq!(
//!     render(history.latest()).unwrap(),
//!     "<document>\n  0\n  world\n  <document>\n    0\n    hello\n  </document>\n  my_class_t\n</document>\n",
//! );
//!
//! history.undo();
//! assert_eq!(render(history.latest()).unwrap(), "<document>\n  0\n  hello\n</document>\n");
//! ```

// Allow `::polydraw` to work inside the crate itself
extern crate self as polydraw;

extern crate alloc;

// Re-export paste for generated detection probes
pub use paste;

pub mod error;

// =============================================================================
// Layer 0: Capability
// =============================================================================
pub mod draw;
pub mod dispatch;
pub mod detect;

// =============================================================================
// Layer 1 + 2: Values
// =============================================================================
pub mod object;
pub mod document;
pub mod history;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use document::Document;
pub use draw::{Canvas, Drawable, Style, render, render_with};
#[cfg(feature = "std")]
pub use draw::{print, write_io};
pub use error::{DocumentError, DrawError};
pub use history::History;
pub use object::Object;

// Derive macro shares the trait's name; they live in different namespaces.
pub use macros::Drawable;

/// Common items for building and drawing documents.
pub mod prelude {
    pub use crate::{Canvas, DocumentError, DrawError, Drawable, Style};
    pub use crate::{Document, History, Object};
    pub use crate::{render, render_with};
    #[cfg(feature = "std")]
    pub use crate::print;
    pub use crate::object;
}
