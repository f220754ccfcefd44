//! # The Drawable capability
//!
//! A type is drawable when it can write itself to a [`Canvas`] as indented
//! text. Everything stored in a [`Document`](crate::Document) must be
//! drawable, and the check happens when a value is wrapped into an
//! [`Object`](crate::Object), never when it is drawn.
//!
//! ```
//! use polydraw::{render, Canvas, DrawError, Drawable};
//!
//! struct Point(i32, i32);
//!
//! impl Drawable for Point {
//!     fn draw(&self, canvas: &mut Canvas<'_>, position: usize) -> Result<(), DrawError> {
//!         canvas.line(position, format_args!("({}, {})", self.0, self.1))
//!     }
//! }
//!
//! assert_eq!(render(&Point(1, 2)).unwrap(), "(1, 2)\n");
//! ```

mod canvas;
mod std_types;

pub use canvas::{Canvas, Style};

use alloc::string::String;

use crate::error::DrawError;

/// Render a value as indented lines of text.
pub trait Drawable {
    /// Write `self` to `canvas` at `position` spaces of indentation.
    ///
    /// Containers draw their children at `position + canvas.style().indent`.
    fn draw(&self, canvas: &mut Canvas<'_>, position: usize) -> Result<(), DrawError>;
}

/// Render `value` at position 0 with the default [`Style`].
pub fn render<D: Drawable + ?Sized>(value: &D) -> Result<String, DrawError> {
    render_with(value, Style::default())
}

/// Render `value` at position 0 with an explicit [`Style`].
pub fn render_with<D: Drawable + ?Sized>(value: &D, style: Style) -> Result<String, DrawError> {
    let mut out = String::new();
    value.draw(&mut Canvas::with_style(&mut out, style), 0)?;
    Ok(out)
}

#[cfg(feature = "std")]
pub use io::{print, write_io};

#[cfg(feature = "std")]
mod io {
    use core::fmt;
    use std::io;

    use super::{Canvas, Drawable};
    use crate::error::DrawError;

    /// Adapts a byte sink to `fmt::Write`, keeping the real I/O error.
    struct IoSink<W> {
        inner: W,
        error: Option<io::Error>,
    }

    impl<W: io::Write> fmt::Write for IoSink<W> {
        fn write_str(&mut self, s: &str) -> fmt::Result {
            self.inner.write_all(s.as_bytes()).map_err(|err| {
                self.error = Some(err);
                fmt::Error
            })
        }
    }

    /// Render `value` at position 0 into a byte sink.
    pub fn write_io<D, W>(value: &D, out: W) -> Result<(), DrawError>
    where
        D: Drawable + ?Sized,
        W: io::Write,
    {
        let mut sink = IoSink { inner: out, error: None };
        let result = value.draw(&mut Canvas::new(&mut sink), 0);
        match (result, sink.error.take()) {
            (Err(DrawError::Fmt(_)), Some(err)) => Err(DrawError::Io(err)),
            (result, _) => {
                result?;
                sink.inner.flush()?;
                Ok(())
            }
        }
    }

    /// Render `value` at position 0 to standard output.
    pub fn print<D: Drawable + ?Sized>(value: &D) -> Result<(), DrawError> {
        write_io(value, io::stdout().lock())
    }
}
