//! Proposed edits to a client-held ordered list.
//!
//! The service never owns the lists it refines. A `ListPatch` is advisory:
//! the client decides whether and how to apply it. [`ListPatch::apply`] is the
//! reference application order.

use super::Segment;
use thiserror::Error;

/// Key by which a patch names an item to remove.
pub trait PatchKey {
    fn patch_key(&self) -> &str;
}

impl PatchKey for String {
    fn patch_key(&self) -> &str {
        self
    }
}

impl PatchKey for Segment {
    fn patch_key(&self) -> &str {
        &self.title
    }
}

/// An item to insert at `idx`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insertion<T> {
    pub item: T,
    pub idx: usize,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatchError {
    #[error("insertion index {idx} is out of range for a list of length {len}")]
    IndexOutOfRange { idx: usize, len: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListPatch<T> {
    /// Keys of items to delete.
    pub remove: Vec<String>,
    /// Items to insert, in application order.
    pub insert: Vec<Insertion<T>>,
}

impl<T> Default for ListPatch<T> {
    fn default() -> Self {
        Self {
            remove: Vec::new(),
            insert: Vec::new(),
        }
    }
}

impl<T> ListPatch<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn remove(mut self, key: impl Into<String>) -> Self {
        self.remove.push(key.into());
        self
    }

    pub fn insert(mut self, item: T, idx: usize) -> Self {
        self.insert.push(Insertion { item, idx });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.remove.is_empty() && self.insert.is_empty()
    }
}

impl<T: PatchKey + Clone> ListPatch<T> {
    /// Apply to `items`, returning the patched list.
    ///
    /// Each removal key deletes the first item with that key; keys that match
    /// nothing are skipped. Insertions then run in order, each against the
    /// list as it stands after the previous one.
    pub fn apply(&self, items: &[T]) -> Result<Vec<T>, PatchError> {
        let mut patched = items.to_vec();

        for key in &self.remove {
            if let Some(pos) = patched.iter().position(|item| item.patch_key() == key) {
                patched.remove(pos);
            }
        }

        for Insertion { item, idx } in &self.insert {
            if *idx > patched.len() {
                return Err(PatchError::IndexOutOfRange {
                    idx: *idx,
                    len: patched.len(),
                });
            }
            patched.insert(*idx, item.clone());
        }

        Ok(patched)
    }
}
