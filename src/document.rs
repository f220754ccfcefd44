//! Ordered, nestable sequences of objects.

use alloc::vec::Vec;
use core::slice;

use crate::draw::{Canvas, Drawable};
use crate::error::{DocumentError, DrawError};
use crate::object::Object;

const OPEN_TAG: &str = "<document>";
const CLOSE_TAG: &str = "</document>";

/// An ordered sequence of [`Object`]s.
///
/// Cloning a document clones the handles, not the values behind them. A
/// document is itself drawable, so it can be pushed into another document:
///
/// ```
/// use polydraw::{render, Document};
///
/// let mut inner = Document::new();
/// inner.push(1);
///
/// let mut outer = Document::new();
/// outer.push(inner);
/// outer.push("tail");
///
/// assert_eq!(
///     render(&outer).unwrap(),
///     "<document>\n  <document>\n    1\n  </document>\n  tail\n</document>\n",
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Document {
    objects: Vec<Object>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Object> {
        self.objects.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, Object> {
        self.objects.iter()
    }

    /// Append a value.
    pub fn push<T>(&mut self, value: T)
    where
        T: Drawable + Send + Sync + 'static,
    {
        self.objects.push(Object::new(value));
    }

    /// Overwrite the entry at `index`, returning the previous one.
    pub fn replace<T>(&mut self, index: usize, value: T) -> Result<Object, DocumentError>
    where
        T: Drawable + Send + Sync + 'static,
    {
        let len = self.len();
        let Some(slot) = self.objects.get_mut(index) else {
            log::trace!("rejected replace at {index} in a document of {len}");
            return Err(DocumentError::OutOfRange { index, len });
        };
        Ok(core::mem::replace(slot, Object::new(value)))
    }

    /// Insert a value before `index`. `index == len` appends.
    pub fn insert<T>(&mut self, index: usize, value: T) -> Result<(), DocumentError>
    where
        T: Drawable + Send + Sync + 'static,
    {
        let len = self.len();
        if index > len {
            log::trace!("rejected insert at {index} in a document of {len}");
            return Err(DocumentError::OutOfRange { index, len });
        }
        self.objects.insert(index, Object::new(value));
        Ok(())
    }

    /// Remove and return the entry at `index`.
    pub fn remove(&mut self, index: usize) -> Result<Object, DocumentError> {
        let len = self.len();
        if index >= len {
            log::trace!("rejected remove at {index} in a document of {len}");
            return Err(DocumentError::OutOfRange { index, len });
        }
        Ok(self.objects.remove(index))
    }

    /// Whether both documents hold the very same objects, in the same order.
    pub fn shares_entries_with(&self, other: &Document) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| Object::ptr_eq(a, b))
    }
}

impl Drawable for Document {
    fn draw(&self, canvas: &mut Canvas<'_>, position: usize) -> Result<(), DrawError> {
        canvas.nested(|canvas| {
            canvas.line(position, OPEN_TAG)?;
            let inner = position + canvas.style().indent;
            for object in &self.objects {
                object.draw(canvas, inner)?;
            }
            canvas.line(position, CLOSE_TAG)
        })
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Object;
    type IntoIter = slice::Iter<'a, Object>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Object> for Document {
    fn from_iter<I: IntoIterator<Item = Object>>(iter: I) -> Self {
        Document {
            objects: iter.into_iter().collect(),
        }
    }
}

impl Extend<Object> for Document {
    fn extend<I: IntoIterator<Item = Object>>(&mut self, iter: I) {
        self.objects.extend(iter);
    }
}
