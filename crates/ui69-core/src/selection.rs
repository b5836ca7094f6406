//! Selection model shared by the interactive selector and the dispatcher

use crate::error::Result;
use crate::registry::Registry;

/// Shown when the user confirms with nothing toggled
pub const EMPTY_SELECTION_MESSAGE: &str = "You must choose at least one component.";

/// Ordered set of distinct component keys, never empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    keys: Vec<String>,
}

impl Selection {
    /// Build a selection, dropping repeated keys. Returns `None` when empty.
    pub fn new(keys: Vec<String>) -> Option<Self> {
        let mut distinct: Vec<String> = Vec::with_capacity(keys.len());
        for key in keys {
            if !distinct.contains(&key) {
                distinct.push(key);
            }
        }

        if distinct.is_empty() {
            None
        } else {
            Some(Self { keys: distinct })
        }
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Source of a user's component choice
pub trait Selector {
    /// Block until the user confirms a non-empty selection or cancels
    fn select(&mut self, registry: &Registry) -> Result<Selection>;
}

/// Run `prompt` until it yields at least one key, calling `on_reject` after
/// every empty confirmation. Errors from either closure end the loop.
pub fn prompt_until_selected<P, R>(mut prompt: P, mut on_reject: R) -> Result<Selection>
where
    P: FnMut() -> Result<Vec<String>>,
    R: FnMut(&str) -> Result<()>,
{
    loop {
        if let Some(selection) = Selection::new(prompt()?) {
            return Ok(selection);
        }
        on_reject(EMPTY_SELECTION_MESSAGE)?;
    }
}
