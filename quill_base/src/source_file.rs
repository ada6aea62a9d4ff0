//! Contains the code related to the source code input.

use std::{
    cmp::Ordering,
    fmt::{Debug, Display},
    fs::File,
    io::Read,
    ops::Range,
    path::PathBuf,
    sync::Arc,
};

use getset::Getters;
use memmap::MmapOptions;
use ouroboros::self_referencing;
use thiserror::Error;

/// Represents an error that occurs when loading/creating a source file.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum Error {
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Represents a source code input for the front-end.
///
/// The content is kept as raw bytes: text and blob literals may legitimately hold arbitrary
/// bytes, so a source file never fails to load for encoding reasons. Line text is converted
/// lossily only when it is displayed.
#[derive(Getters)]
pub struct SourceFile {
    source: MappedSource,

    /// Gets the full path to the source file.
    #[get = "pub"]
    full_path: PathBuf,

    /// The byte ranges of each line in the source file content.
    lines: Vec<Range<usize>>,
}

impl Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("full_path", &self.full_path)
            .field("lines", &self.lines)
            .finish()
    }
}

#[self_referencing]
struct MappedSource {
    file: File,
    mapped: Option<memmap::Mmap>,

    #[borrows(mapped)]
    mapped_bytes: &'this [u8],
}

impl MappedSource {
    pub fn create(file: File) -> Result<Self, Error> {
        let mapped = if file.metadata()?.len() == 0 {
            None
        } else {
            Some(unsafe { MmapOptions::new().map(&file)? })
        };

        Ok(MappedSourceBuilder {
            file,
            mapped,
            mapped_bytes_builder: |mapped| mapped.as_deref().unwrap_or(&[]),
        }
        .build())
    }

    /// Gets the bytes that the source file contains.
    #[must_use]
    pub fn content(&self) -> &[u8] { self.borrow_mapped_bytes() }
}

/// Returns `true` for a UTF-8 continuation byte, which carries no column of its own.
fn is_continuation(byte: u8) -> bool { byte & 0xC0 == 0x80 }

impl SourceFile {
    fn new(full_path: PathBuf, source: MappedSource) -> Arc<Self> {
        let lines = get_line_byte_positions(source.content());
        Arc::new(Self {
            source,
            full_path,
            lines,
        })
    }

    /// Gets the content of the source file.
    #[must_use]
    pub fn content(&self) -> &[u8] { self.source.content() }

    /// Gets the bytes of the line of the source file at the given line number.
    ///
    /// The line number starts at 1.
    #[must_use]
    pub fn get_line(&self, line: usize) -> Option<&[u8]> {
        if line == 0 {
            return None;
        }

        let line = line - 1;
        self.lines
            .get(line)
            .map(|range| &self.source.content()[range.clone()])
    }

    /// Gets the byte range of the given line number within the content.
    ///
    /// The line number starts at 1.
    #[must_use]
    pub fn get_line_range(&self, line: usize) -> Option<Range<usize>> {
        if line == 0 {
            return None;
        }
        self.lines.get(line - 1).cloned()
    }

    /// Gets a [`ByteReader`] streaming the raw bytes of the source file.
    #[must_use]
    pub fn reader(self: &Arc<Self>) -> ByteReader {
        ByteReader {
            source: self.clone(),
            offset: 0,
        }
    }

    /// Gets the number of lines in the source file.
    #[must_use]
    pub fn line_number(&self) -> usize { self.lines.len() }

    /// Loads the source file from the given file path.
    ///
    /// # Errors
    /// - [`Error::IoError`]: Error occurred when mapping the file to memory.
    pub fn load(file: File, path: PathBuf) -> Result<Arc<Self>, Error> {
        let source = MappedSource::create(file)?;
        Ok(Self::new(path, source))
    }

    /// Creates a temporary source file and writes the given displayable object to it.
    ///
    /// # Errors
    /// - [`Error::IoError`]: Error occurred when creating the temporary file, writing to, and
    ///   mapping it to memory.
    pub fn temp(display: impl Display) -> Result<Arc<Self>, Error> {
        use std::io::Write;

        let mut tempfile = tempfile::Builder::new()
            .prefix("quill")
            .suffix(".quill")
            .tempfile()?;

        write!(tempfile.as_file_mut(), "{display}")?;
        let path = tempfile.path().to_owned();

        Self::load(tempfile.into_file(), path)
    }

    /// Gets the [`Location`] of the given byte index.
    ///
    /// Returns [`None`] when the index lies outside the content or inside a multi-byte UTF-8
    /// sequence.
    #[must_use]
    pub fn get_location(&self, byte_index: ByteIndex) -> Option<Location> {
        let content = self.source.content();
        if byte_index > content.len()
            || content.get(byte_index).copied().is_some_and(is_continuation)
        {
            return None;
        }

        // gets the line number by binary searching the line ranges
        let line = self
            .lines
            .binary_search_by(|range| {
                if range.contains(&byte_index) {
                    Ordering::Equal
                } else if byte_index < range.start {
                    Ordering::Greater
                } else {
                    Ordering::Less
                }
            })
            .ok()?;

        let line_starting_byte_index = self.lines[line].start;
        let line_bytes = self.get_line(line + 1).unwrap();

        // gets the column number by counting the characters before the position (starts at 1);
        // continuation bytes belong to the character started before them
        let column = line_bytes[..byte_index - line_starting_byte_index]
            .iter()
            .filter(|&&byte| !is_continuation(byte))
            .count()
            + 1;

        Some(Location {
            line: line + 1,
            column,
        })
    }
}

/// Is an unsigned integer that represents a byte index in the source code.
pub type ByteIndex = usize;

/// Is a struct pointing to a particular location in a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Location {
    /// The line number of the location (starts at 1).
    pub line: usize,

    /// The column number of the location (starts at 1).
    pub column: usize,
}

/// Is a [`Read`] implementation streaming the raw bytes of a [`SourceFile`].
///
/// This is the byte source handed to the scanner, so that the scanner only ever depends on
/// an abstract reader rather than on the mapped file itself.
#[derive(Debug, Clone)]
pub struct ByteReader {
    source: Arc<SourceFile>,
    offset: usize,
}

impl Read for ByteReader {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let bytes = self.source.content();
        let remaining = bytes.len().saturating_sub(self.offset);
        let amount = buf.len().min(remaining);

        buf[..amount].copy_from_slice(&bytes[self.offset..self.offset + amount]);
        self.offset += amount;

        Ok(amount)
    }
}

fn get_line_byte_positions(content: &[u8]) -> Vec<Range<usize>> {
    let mut current_position = 0;
    let mut results = Vec::new();

    let mut skip = false;

    for (byte, &value) in content.iter().enumerate() {
        if skip {
            skip = false;
            continue;
        }

        // ordinary lf
        if value == b'\n' {
            #[allow(clippy::range_plus_one)]
            results.push(current_position..byte + 1);

            current_position = byte + 1;
        }

        // crlf
        if value == b'\r' {
            if content.get(byte + 1) == Some(&b'\n') {
                #[allow(clippy::range_plus_one)]
                results.push(current_position..byte + 2);

                current_position = byte + 2;

                skip = true;
            } else {
                #[allow(clippy::range_plus_one)]
                results.push(current_position..byte + 1);

                current_position = byte + 1;
            }
        }
    }

    results.push(current_position..content.len());

    results
}

#[cfg(test)]
mod tests;
