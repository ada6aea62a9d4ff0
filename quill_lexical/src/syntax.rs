//! Contains the syntax interface the scanner consults to recognize operators and blocks.

use std::collections::{HashMap, HashSet};

use quill_tree::text::Name;

/// Represents the capabilities the scanner needs from a syntax description.
///
/// Without a syntax the scanner runs in discovery mode: any punctuation run is one operator
/// and no block is recognized.
pub trait Syntax {
    /// Checks whether the given spelling can be extended into a longer operator.
    ///
    /// The scanner consults this with the operator spelling accumulated so far — including
    /// the empty spelling before the first character is committed — and keeps consuming
    /// punctuation while the answer is `true`.
    fn is_operator(&self, spelling: &[u8]) -> bool;

    /// Checks whether the given name opens a block.
    ///
    /// Returns the closing name the scanner should watch for, or [`None`] when the name does
    /// not open a block.
    fn block_closing(&self, opening: &Name) -> Option<Name>;
}

/// Is an in-memory syntax table implementing [`Syntax`].
///
/// This is enough to drive the scanner in tests and in the token dump; a full front-end
/// would populate an equivalent table from a syntax description file.
#[derive(Debug, Clone, Default)]
pub struct Table {
    operators: HashSet<Vec<u8>>,
    blocks: HashMap<Vec<u8>, Vec<u8>>,
}

impl Table {
    /// Creates a new empty [`Table`].
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Registers an operator spelling.
    pub fn add_operator(&mut self, spelling: impl AsRef<[u8]>) {
        self.operators.insert(spelling.as_ref().to_vec());
    }

    /// Registers a block, given its opening and closing spellings.
    pub fn add_block(&mut self, opening: impl AsRef<[u8]>, closing: impl AsRef<[u8]>) {
        self.blocks.insert(
            Name::normalize(opening.as_ref()),
            Name::normalize(closing.as_ref()),
        );
    }
}

impl Syntax for Table {
    fn is_operator(&self, spelling: &[u8]) -> bool {
        self.operators
            .iter()
            .chain(self.blocks.keys())
            .chain(self.blocks.values())
            .any(|known| known.len() > spelling.len() && known.starts_with(spelling))
    }

    fn block_closing(&self, opening: &Name) -> Option<Name> {
        self.blocks
            .get(opening.data())
            .map(|closing| Name::new(opening.position(), closing.clone()))
    }
}

#[cfg(test)]
mod tests;
