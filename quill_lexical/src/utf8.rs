//! Pure helper functions over UTF-8 encoded byte sequences.
//!
//! The scanner consumes its input one byte at a time, so these helpers classify and decode
//! bytes without requiring the whole input to be valid UTF-8.

/// Returns `true` if the byte starts a multi-byte UTF-8 sequence.
#[must_use]
pub fn is_first(byte: u8) -> bool { byte >= 0xC0 }

/// Returns `true` if the byte is a continuation byte of a multi-byte UTF-8 sequence.
#[must_use]
pub fn is_next(byte: u8) -> bool { byte & 0xC0 == 0x80 }

/// Gets the expected length in bytes of the sequence started by the given byte.
#[must_use]
pub fn sequence_length(byte: u8) -> usize {
    if byte >= 0xF0 {
        4
    } else if byte >= 0xE0 {
        3
    } else if byte >= 0xC0 {
        2
    } else {
        1
    }
}

/// Gets the number of code points encoded by the given bytes.
///
/// Counts the bytes that are not continuation bytes, so malformed sequences count as one code
/// point per stray byte.
#[must_use]
pub fn count(data: &[u8]) -> usize { data.iter().filter(|&&byte| !is_next(byte)).count() }

/// Decodes the single code point encoded by the given bytes.
///
/// Returns [`None`] when the bytes are not exactly one well-formed sequence.
#[must_use]
pub fn decode(data: &[u8]) -> Option<char> {
    let decoded = std::str::from_utf8(data).ok()?;
    let mut chars = decoded.chars();
    let first = chars.next()?;
    chars.next().is_none().then_some(first)
}

/// Gets the first code point encoded by the given bytes.
///
/// An empty input yields `NUL`; a malformed leading sequence yields the replacement
/// character.
#[must_use]
pub fn code(data: &[u8]) -> char {
    let Some(&first) = data.first() else {
        return '\0';
    };

    let length = sequence_length(first).min(data.len());
    decode(&data[..length]).unwrap_or(char::REPLACEMENT_CHARACTER)
}

#[cfg(test)]
mod tests;
