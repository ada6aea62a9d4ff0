//! Contains the [`Token`] kinds returned by the scanner and the [`Scanned`] value channel.

use derive_more::From;
use enum_as_inner::EnumAsInner;
use quill_tree::{
    blob::Blob,
    node::{Character, Natural, Real, Tree},
    text::{Name, Text},
};
use strum_macros::IntoStaticStr;

/// Is an enumeration of the token kinds returned by [`crate::scanner::Scanner::read`].
///
/// A token only identifies the kind of what was scanned; the scanned literal value travels on
/// the side through [`crate::scanner::Scanner::scanned`], and the exact spelling through
/// [`crate::scanner::Scanner::source`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, IntoStaticStr)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Token {
    /// The end of the input was reached.
    Eof,

    /// A line ended at the same indentation as the previous one.
    Newline,

    /// A line started deeper than the enclosing indentation.
    Indent,

    /// One enclosing indentation level ended.
    Unindent,

    /// A natural number literal.
    Integer,

    /// A real number literal.
    Real,

    /// A character literal.
    Character,

    /// A text literal.
    Text,

    /// A binary object literal.
    Blob,

    /// A name.
    Name,

    /// An operator spelling.
    Symbol,

    /// A name or operator opening a block.
    Open,

    /// The name or operator closing the current block.
    Close,

    /// The input was malformed beyond recovery of the current token.
    Error,
}

impl Token {
    /// Gets the upper-case display name of the token kind.
    #[must_use]
    pub fn as_str(self) -> &'static str { self.into() }
}

/// Is the union of the literal values a single [`Token`] can carry.
#[derive(Debug, Clone, PartialEq, EnumAsInner, From)]
#[allow(missing_docs)]
pub enum Scanned {
    Natural(Natural),
    Real(Real),
    Character(Character),
    Text(Text),
    Name(Name),
    Blob(Blob),
}

impl Scanned {
    /// Converts the scanned value into the equivalent tree node.
    #[must_use]
    pub fn into_tree(self) -> Tree {
        match self {
            Self::Natural(value) => Tree::Natural(value),
            Self::Real(value) => Tree::Real(value),
            Self::Character(value) => Tree::Character(value),
            Self::Text(value) => Tree::Text(value),
            Self::Name(value) => Tree::Name(value),
            Self::Blob(value) => Tree::Blob(value),
        }
    }
}
