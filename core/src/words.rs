use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Words entered by the player, in insertion order and without duplicates.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordList(Vec<String>);

impl WordList {
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.0.iter().any(|w| w == word)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Checks whether `word` would be accepted by [`Self::try_add`].
    pub fn check(&self, word: &str) -> Result<()> {
        if word.is_empty() {
            Err(BingoError::EmptyWord)
        } else if self.contains(word) {
            Err(BingoError::DuplicateWord)
        } else {
            Ok(())
        }
    }

    pub fn can_add(&self, word: &str) -> bool {
        self.check(word).is_ok()
    }

    pub fn try_add(&mut self, word: impl Into<String>) -> Result<()> {
        let word = word.into();
        self.check(&word)?;
        self.0.push(word);
        Ok(())
    }

    pub fn clear(&mut self) -> ResetOutcome {
        if self.0.is_empty() {
            ResetOutcome::NoChange
        } else {
            self.0.clear();
            ResetOutcome::Cleared
        }
    }
}

impl<S: Into<String>> FromIterator<S> for WordList {
    /// Collects words the same way repeated [`WordList::try_add`] calls would, silently skipping rejected ones.
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = Self::new();
        for word in iter {
            let _ = list.try_add(word);
        }
        list
    }
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a String;
    type IntoIter = core::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
