use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Dealt words in grid order, row by row.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordMatrix(Vec<String>);

impl WordMatrix {
    pub fn new(words: Vec<String>) -> Self {
        Self(words)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

/// Per-cell marked flags keyed by grid index. Missing entries read as unmarked.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarkedSet(BTreeMap<usize, bool>);

impl MarkedSet {
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn is_marked(&self, index: usize) -> bool {
        self.0.get(&index).copied().unwrap_or(false)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of cells currently marked.
    pub fn count(&self) -> usize {
        self.0.values().filter(|&&marked| marked).count()
    }

    pub fn toggle(&mut self, index: usize) -> bool {
        let flag = self.0.entry(index).or_insert(false);
        *flag = !*flag;
        *flag
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Drops entries that do not address a cell below `len`, returning how many were dropped.
    pub fn retain_below(&mut self, len: usize) -> usize {
        let before = self.0.len();
        self.0.retain(|&index, _| index < len);
        before - self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, bool)> + '_ {
        self.0.iter().map(|(&index, &marked)| (index, marked))
    }
}

impl FromIterator<(usize, bool)> for MarkedSet {
    fn from_iter<I: IntoIterator<Item = (usize, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A dealt game: the word grid and which of its cells the player has marked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    config: BoardConfig,
    matrix: WordMatrix,
    marks: MarkedSet,
}

impl Board {
    /// Builds a freshly dealt board with no marks.
    pub fn new(config: BoardConfig, matrix: WordMatrix) -> Option<Self> {
        Self::from_parts(config, matrix, MarkedSet::new())
    }

    /// Reassembles a board from persisted parts. Returns `None` when the matrix does not fill the grid; marks outside
    /// the grid are dropped.
    pub fn from_parts(config: BoardConfig, matrix: WordMatrix, mut marks: MarkedSet) -> Option<Self> {
        let len = config.required_words();
        if matrix.len() != len {
            return None;
        }
        let dropped = marks.retain_below(len);
        if dropped > 0 {
            log::warn!("Dropped {} marks outside of the {} cell board", dropped, len);
        }
        Some(Self {
            config,
            matrix,
            marks,
        })
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn matrix(&self) -> &WordMatrix {
        &self.matrix
    }

    pub fn marks(&self) -> &MarkedSet {
        &self.marks
    }

    pub fn len(&self) -> usize {
        self.matrix.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matrix.is_empty()
    }

    pub fn word_at(&self, index: usize) -> Option<&str> {
        self.matrix.get(index)
    }

    pub fn is_marked(&self, index: usize) -> bool {
        self.marks.is_marked(index)
    }

    pub fn marked_count(&self) -> usize {
        self.marks.count()
    }

    pub fn validate_index(&self, index: usize) -> Result<usize> {
        if index < self.len() {
            Ok(index)
        } else {
            Err(BingoError::InvalidIndex(index))
        }
    }

    pub fn toggle_mark(&mut self, index: usize) -> Result<MarkOutcome> {
        let index = self.validate_index(index)?;
        Ok(if self.marks.toggle(index) {
            MarkOutcome::Marked
        } else {
            MarkOutcome::Unmarked
        })
    }

    pub fn clear_marks(&mut self) {
        self.marks.clear();
    }

    /// Iterates `(index, word, marked)` in grid order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, &str, bool)> {
        self.matrix
            .as_slice()
            .iter()
            .enumerate()
            .map(|(i, word)| (i, word.as_str(), self.marks.is_marked(i)))
    }

    /// Cells grouped into rows of the board's width.
    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = (usize, &str, bool)>> {
        let width = usize::from(self.config.width).max(1);
        (0..self.len().div_ceil(width)).map(move |y| self.cells().skip(y * width).take(width))
    }

    /// Whether a full row, column or main diagonal is marked.
    pub fn has_bingo(&self) -> bool {
        if self.is_empty() {
            return false;
        }
        let width = usize::from(self.config.width);
        let height = usize::from(self.config.height);
        let marked = |x: usize, y: usize| self.marks.is_marked(y * width + x);

        let any_row = (0..height).any(|y| (0..width).all(|x| marked(x, y)));
        let any_col = (0..width).any(|x| (0..height).all(|y| marked(x, y)));
        let diagonals = width == height
            && ((0..width).all(|i| marked(i, i)) || (0..width).all(|i| marked(width - 1 - i, i)));

        any_row || any_col || diagonals
    }

    pub fn into_parts(self) -> (WordMatrix, MarkedSet) {
        (self.matrix, self.marks)
    }
}
