//! Contains the [`Text`] and [`Name`] leaves, both thin layers over [`Blob`].

use std::{borrow::Cow, cmp::Ordering, fmt::Display};

use derive_more::{Deref, DerefMut};
use quill_base::position::SrcPos;

use crate::blob::Blob;

/// Represents a piece of text from the source code.
///
/// A text is a blob whose bytes happen to be readable; nothing constrains them to be valid
/// UTF-8, so lossy conversion is used whenever the content is displayed.
#[derive(Debug, Clone, PartialEq, Eq, Deref, DerefMut)]
pub struct Text {
    #[deref]
    #[deref_mut]
    blob: Blob,
}

impl Text {
    /// Creates a new [`Text`] with the given bytes.
    #[must_use]
    pub fn new(position: SrcPos, data: impl Into<Vec<u8>>) -> Self {
        Self {
            blob: Blob::new(position, data),
        }
    }

    /// Gets the content of the text as a string, replacing invalid UTF-8 sequences.
    #[must_use]
    pub fn as_str(&self) -> Cow<'_, str> { String::from_utf8_lossy(self.data()) }
}

impl Display for Text {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.as_str())
    }
}

/// Represents a name from the source code, e.g. an identifier or an operator spelling.
///
/// Name bytes obey the naming rule checked by [`Name::is_valid`]. Two names are considered
/// equal whenever their normalized forms are, so `JoeDalton`, `joe_dalton` and `joedalton`
/// all denote the same name.
#[derive(Debug, Clone, Deref, DerefMut)]
pub struct Name {
    #[deref]
    #[deref_mut]
    text: Text,
}

impl Name {
    /// Creates a new [`Name`] with the given bytes, which must obey the naming rule.
    #[must_use]
    pub fn new(position: SrcPos, data: impl Into<Vec<u8>>) -> Self {
        let data = data.into();
        debug_assert!(
            Self::is_valid(&data),
            "name bytes must obey the naming rule"
        );

        Self {
            text: Text::new(position, data),
        }
    }

    /// Creates a new [`Name`] holding the normalized form of the given spelling.
    ///
    /// Spellings that do not obey the naming rule are kept as scanned, so that a malformed
    /// input byte still round-trips through the front-end instead of being lost.
    #[must_use]
    pub fn from_spelling(position: SrcPos, spelling: &[u8]) -> Self {
        Self {
            text: Text::new(position, Self::normalize(spelling)),
        }
    }

    /// The one-byte name marking the end of a line.
    #[must_use]
    pub fn newline(position: SrcPos) -> Self { Self::new(position, *b"\n") }

    /// The one-byte name marking an indented block.
    #[must_use]
    pub fn indent(position: SrcPos) -> Self { Self::new(position, *b"\t") }

    /// The one-byte name marking the end of an indented block.
    #[must_use]
    pub fn unindent(position: SrcPos) -> Self { Self::new(position, *b"\x08") }

    /// Checks whether the given bytes obey the naming rule.
    ///
    /// A valid name is a non-empty byte sequence that is either a run of ASCII punctuation
    /// (an operator name), an alphabetic or non-ASCII start followed by alphanumerics,
    /// non-ASCII bytes and single `_` separators that do not end the name, or one of the
    /// one-byte syntactic markers.
    #[must_use]
    pub fn is_valid(data: &[u8]) -> bool {
        let Some(&first) = data.first() else {
            return false;
        };

        if first.is_ascii_punctuation() {
            return data.iter().all(u8::is_ascii_punctuation);
        }

        if first.is_ascii_alphabetic() || first >= 0x80 {
            let mut had_underscore = false;
            for &byte in data {
                if byte == b'_' {
                    if had_underscore {
                        return false;
                    }
                    had_underscore = true;
                } else {
                    had_underscore = false;
                    if !byte.is_ascii_alphanumeric() && byte < 0x80 {
                        return false;
                    }
                }
            }
            return !had_underscore;
        }

        matches!(data, [b'\n' | b'\t' | b'\x08'])
    }

    /// Computes the normalized form of the given name bytes: ASCII letters are lowercased and
    /// `_` separators are stripped.
    ///
    /// Operator names are kept as-is, since `_` is itself a punctuation character there.
    #[must_use]
    pub fn normalize(data: &[u8]) -> Vec<u8> {
        if data.first().is_some_and(u8::is_ascii_punctuation) {
            return data.to_vec();
        }

        data.iter()
            .filter(|&&byte| byte != b'_')
            .map(u8::to_ascii_lowercase)
            .collect()
    }

    /// Returns `true` if the name is an operator name (e.g. `+` or `-=`).
    #[must_use]
    pub fn is_operator(&self) -> bool {
        self.data().first().is_some_and(u8::is_ascii_punctuation)
    }

    /// Compares the normalized forms of two names.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        Self::normalize(self.data()).cmp(&Self::normalize(other.data()))
    }
}

impl PartialEq for Name {
    fn eq(&self, other: &Self) -> bool { self.compare(other) == Ordering::Equal }
}

impl Eq for Name {}

impl Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.as_str())
    }
}

#[cfg(test)]
mod tests;
