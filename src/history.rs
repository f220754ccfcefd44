//! Linear commit/undo history of document snapshots.

use alloc::vec;
use alloc::vec::Vec;
use core::slice;

use crate::document::Document;

/// A non-empty stack of [`Document`] snapshots.
///
/// Edits go to [`current`](History::current). [`commit`](History::commit)
/// pushes a shallow copy of it; [`undo`](History::undo) pops it again. Since
/// objects are never mutated in place, the snapshot exposed by an undo is
/// exactly what it was before the commit.
///
/// The history is linear: there is no redo. A commit after an undo builds on
/// the restored snapshot and the discarded one is gone for good.
///
/// ```
/// use polydraw::{render, History};
///
/// let mut history = History::new();
/// history.current().push("draft");
/// history.commit();
/// history.current().push("more");
/// history.undo();
///
/// assert_eq!(render(history.latest()).unwrap(), "<document>\n  draft\n</document>\n");
/// ```
#[derive(Debug, Clone)]
pub struct History {
    snapshots: Vec<Document>,
}

#[allow(clippy::len_without_is_empty)]
impl History {
    /// A history holding a single empty document.
    pub fn new() -> Self {
        History {
            snapshots: vec![Document::new()],
        }
    }

    /// The latest snapshot, for editing.
    ///
    /// # Panics
    ///
    /// If the history holds no snapshot, which the public API never allows.
    pub fn current(&mut self) -> &mut Document {
        self.snapshots.last_mut().expect("history holds no snapshot")
    }

    /// The latest snapshot.
    ///
    /// # Panics
    ///
    /// If the history holds no snapshot, which the public API never allows.
    pub fn latest(&self) -> &Document {
        self.snapshots.last().expect("history holds no snapshot")
    }

    /// Push a shallow copy of the latest snapshot.
    ///
    /// # Panics
    ///
    /// If the history holds no snapshot.
    pub fn commit(&mut self) {
        let snapshot = self.latest().clone();
        self.snapshots.push(snapshot);
        log::debug!("commit: {} snapshots", self.snapshots.len());
    }

    /// Drop the latest snapshot.
    ///
    /// # Panics
    ///
    /// If only the initial snapshot is left. Nothing is modified in that case.
    pub fn undo(&mut self) {
        assert!(self.can_undo(), "cannot undo past the initial snapshot");
        self.snapshots.pop();
        log::debug!("undo: {} snapshots", self.snapshots.len());
    }

    /// Whether [`undo`](History::undo) would succeed.
    pub fn can_undo(&self) -> bool {
        self.snapshots.len() > 1
    }

    /// Number of snapshots, always at least one.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Snapshots, oldest first.
    pub fn snapshots(&self) -> slice::Iter<'_, Document> {
        self.snapshots.iter()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
