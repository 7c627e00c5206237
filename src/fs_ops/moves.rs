//! Planned renames.

use std::path::{Path, PathBuf};

/// One planned rename. Both paths are absolute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    pub src: PathBuf,
    pub dst: PathBuf,
}

impl Move {
    pub fn new(src: impl Into<PathBuf>, dst: impl Into<PathBuf>) -> Self {
        Self {
            src: src.into(),
            dst: dst.into(),
        }
    }

    pub fn src(&self) -> &Path {
        &self.src
    }

    pub fn dst(&self) -> &Path {
        &self.dst
    }
}

/// Moves in discovery order. Validation and execution both walk this order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveSet(Vec<Move>);

impl MoveSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, m: Move) {
        self.0.push(m);
    }

    pub fn extend(&mut self, other: MoveSet) {
        self.0.extend(other.0);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Move] {
        &self.0
    }
}

impl From<Vec<Move>> for MoveSet {
    fn from(moves: Vec<Move>) -> Self {
        Self(moves)
    }
}

impl FromIterator<Move> for MoveSet {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a MoveSet {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for MoveSet {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
