//! Text sink and layout configuration.

use core::fmt;

use crate::error::DrawError;

/// Layout configuration for a render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    /// Spaces added per nesting level inside a document.
    pub indent: usize,
    /// Maximum number of documents open at once. `None` is unbounded.
    pub max_depth: Option<usize>,
}

impl Style {
    pub const fn new() -> Self {
        Self { indent: 2, max_depth: None }
    }

    pub const fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Reject renders that open more than `limit` documents at once.
    ///
    /// Nesting is unbounded by default, in which case a pathologically deep
    /// document can exhaust the call stack while drawing.
    pub const fn with_max_depth(mut self, limit: usize) -> Self {
        self.max_depth = Some(limit);
        self
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::new()
    }
}

/// Where drawables write their lines.
///
/// Wraps any [`fmt::Write`] and tracks how many documents are currently open,
/// so that [`Style::max_depth`] can be enforced.
pub struct Canvas<'a> {
    out: &'a mut dyn fmt::Write,
    style: Style,
    depth: usize,
}

impl<'a> Canvas<'a> {
    pub fn new(out: &'a mut dyn fmt::Write) -> Self {
        Self::with_style(out, Style::default())
    }

    pub fn with_style(out: &'a mut dyn fmt::Write, style: Style) -> Self {
        Self { out, style, depth: 0 }
    }

    pub fn style(&self) -> Style {
        self.style
    }

    /// Number of documents currently being drawn.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Write `text` preceded by `position` spaces and followed by a line break.
    pub fn line(&mut self, position: usize, text: impl fmt::Display) -> Result<(), DrawError> {
        writeln!(self.out, "{:position$}{text}", "")?;
        Ok(())
    }

    /// Run `f` one document level deeper.
    ///
    /// Fails with [`DrawError::TooDeep`] before calling `f` when the configured
    /// limit is already reached.
    pub fn nested<F>(&mut self, f: F) -> Result<(), DrawError>
    where
        F: FnOnce(&mut Self) -> Result<(), DrawError>,
    {
        if let Some(limit) = self.style.max_depth {
            if self.depth >= limit {
                return Err(DrawError::TooDeep { limit });
            }
        }

        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }
}

impl fmt::Debug for Canvas<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Canvas")
            .field("style", &self.style)
            .field("depth", &self.depth)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;

    #[test]
    fn test_line_indents_by_position() {
        let mut out = String::new();
        let mut canvas = Canvas::new(&mut out);
        canvas.line(0, "a").unwrap();
        canvas.line(3, 42).unwrap();
        assert_eq!(out, "a\n   42\n");
    }

    #[test]
    fn test_nested_restores_depth() {
        let mut out = String::new();
        let mut canvas = Canvas::new(&mut out);
        canvas
            .nested(|canvas| {
                assert_eq!(canvas.depth(), 1);
                canvas.nested(|canvas| {
                    assert_eq!(canvas.depth(), 2);
                    Ok(())
                })
            })
            .unwrap();
        assert_eq!(canvas.depth(), 0);
    }

    #[test]
    fn test_nested_enforces_limit() {
        let mut out = String::new();
        let mut canvas = Canvas::with_style(&mut out, Style::new().with_max_depth(1));
        let result = canvas.nested(|canvas| canvas.nested(|_| Ok(())));
        assert!(matches!(result, Err(DrawError::TooDeep { limit: 1 })));
        assert_eq!(canvas.depth(), 0);
    }

    #[test]
    fn test_style_defaults() {
        let style = Style::default();
        assert_eq!(style.indent, 2);
        assert_eq!(style.max_depth, None);
        assert_eq!(Style::new().with_indent(4).indent, 4);
    }
}
