//! Contains all kinds of lexical errors that can occur while scanning the source code.

use std::fmt::{self, Display};

use derive_more::From;
use enum_as_inner::EnumAsInner;
use quill_base::{
    log::Located,
    position::{PositionInfo, SrcPos},
};

fn display_located(
    f: &mut fmt::Formatter<'_>,
    location: Option<&PositionInfo>,
    message: impl Display,
) -> fmt::Result {
    match location {
        Some(location) => write!(f, "{}", Located::new(location, message)),
        None => write!(f, "{message}"),
    }
}

/// The leading indentation of a line mixes tabs and spaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MixedIndentation {
    /// The position the offending token started at.
    pub pos: SrcPos,

    /// The resolved position, when the input has one.
    pub location: Option<PositionInfo>,
}

impl Display for MixedIndentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_located(
            f,
            self.location.as_ref(),
            "Mixed tabs and spaces in indentation",
        )
    }
}

/// A line unindented to a column matching no enclosing indentation level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InconsistentUnindent {
    /// The position the offending token started at.
    pub pos: SrcPos,

    /// The resolved position, when the input has one.
    pub location: Option<PositionInfo>,
}

impl Display for InconsistentUnindent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_located(
            f,
            self.location.as_ref(),
            "Unindenting to the right of previous indentation",
        )
    }
}

/// A based number literal selected a base outside `2..36` and 64.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidBase {
    /// The base that was selected.
    pub base: u64,

    /// The position the literal started at.
    pub pos: SrcPos,

    /// The resolved position, when the input has one.
    pub location: Option<PositionInfo>,
}

impl Display for InvalidBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_located(
            f,
            self.location.as_ref(),
            format_args!("The base {} is not valid, not in 2..36", self.base),
        )
    }
}

/// A blob literal selected a base with no defined bit packing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidBlobBase {
    /// The base that was selected.
    pub base: u64,

    /// The position the literal started at.
    pub pos: SrcPos,

    /// The resolved position, when the input has one.
    pub location: Option<PositionInfo>,
}

impl Display for InvalidBlobBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_located(
            f,
            self.location.as_ref(),
            format_args!("Base {} is invalid for a blob", self.base),
        )
    }
}

/// Two `_` separators in a row inside a number or a name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UglyUnderscores {
    /// The position the offending token started at.
    pub pos: SrcPos,

    /// The resolved position, when the input has one.
    pub location: Option<PositionInfo>,
}

impl Display for UglyUnderscores {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_located(
            f,
            self.location.as_ref(),
            "Two '_' characters in a row look ugly",
        )
    }
}

/// The input ended inside a text or character literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnterminatedText {
    /// The position the literal started at.
    pub pos: SrcPos,

    /// The resolved position, when the input has one.
    pub location: Option<PositionInfo>,
}

impl Display for UnterminatedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_located(
            f,
            self.location.as_ref(),
            "End of input in the middle of a text",
        )
    }
}

/// A character literal contains a number of characters other than one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiCharacterConstant {
    /// The content of the literal.
    pub content: String,

    /// The position the literal started at.
    pub pos: SrcPos,

    /// The resolved position, when the input has one.
    pub location: Option<PositionInfo>,
}

impl Display for MultiCharacterConstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_located(
            f,
            self.location.as_ref(),
            format_args!(
                "Character constant '{}' should contain one character",
                self.content
            ),
        )
    }
}

/// Is an enumeration containing all kinds of lexical errors that can occur while scanning the
/// source code.
#[derive(Debug, Clone, PartialEq, EnumAsInner, From)]
#[allow(missing_docs)]
pub enum Error {
    MixedIndentation(MixedIndentation),
    InconsistentUnindent(InconsistentUnindent),
    InvalidBase(InvalidBase),
    InvalidBlobBase(InvalidBlobBase),
    UglyUnderscores(UglyUnderscores),
    UnterminatedText(UnterminatedText),
    MultiCharacterConstant(MultiCharacterConstant),
}

impl Error {
    /// Gets the position the error was reported at.
    #[must_use]
    pub fn pos(&self) -> SrcPos {
        match self {
            Self::MixedIndentation(error) => error.pos,
            Self::InconsistentUnindent(error) => error.pos,
            Self::InvalidBase(error) => error.pos,
            Self::InvalidBlobBase(error) => error.pos,
            Self::UglyUnderscores(error) => error.pos,
            Self::UnterminatedText(error) => error.pos,
            Self::MultiCharacterConstant(error) => error.pos,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MixedIndentation(error) => write!(f, "{error}"),
            Self::InconsistentUnindent(error) => write!(f, "{error}"),
            Self::InvalidBase(error) => write!(f, "{error}"),
            Self::InvalidBlobBase(error) => write!(f, "{error}"),
            Self::UglyUnderscores(error) => write!(f, "{error}"),
            Self::UnterminatedText(error) => write!(f, "{error}"),
            Self::MultiCharacterConstant(error) => write!(f, "{error}"),
        }
    }
}
