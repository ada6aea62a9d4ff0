//! Contains the position registry, mapping scalar source positions back to files and lines.

use std::{borrow::Cow, path::PathBuf, sync::Arc};

use getset::CopyGetters;

use crate::source_file::SourceFile;

/// Gets the length of a line in bytes, without its terminator.
fn trimmed_length(line: &[u8]) -> usize {
    let mut length = line.len();
    while length > 0 && matches!(line[length - 1], b'\n' | b'\r') {
        length -= 1;
    }
    length
}

/// Is an unsigned scalar identifying one consumed byte of input.
///
/// Positions grow monotonically across every input opened in the same registry, so a single
/// scalar is enough to tag any token or error with its origin.
pub type SrcPos = usize;

/// Is the resolved information for a [`SrcPos`]: the file it belongs to and the line it is on.
#[derive(Debug, Clone)]
pub struct PositionInfo {
    /// The path of the file the position belongs to.
    pub file: PathBuf,

    /// The line number of the position (starts at 1).
    pub line: usize,

    /// The number of characters on the line before the position.
    pub column: usize,

    /// The [`SrcPos`] of the first byte of the line.
    pub line_start: SrcPos,

    /// The length of the line in bytes, without its terminator.
    pub line_length: usize,

    source: Option<Arc<SourceFile>>,
}

impl PositionInfo {
    /// Gets the text of the line the position is on, without its terminator.
    ///
    /// Bytes that are not valid UTF-8 are replaced for display.
    #[must_use]
    pub fn source_line(&self) -> Option<Cow<'_, str>> {
        let source = self.source.as_ref()?;
        let line = source.get_line(self.line)?;
        Some(String::from_utf8_lossy(&line[..trimmed_length(line)]))
    }
}

impl PartialEq for PositionInfo {
    fn eq(&self, other: &Self) -> bool {
        self.file == other.file
            && self.line == other.line
            && self.column == other.column
            && self.line_start == other.line_start
            && self.line_length == other.line_length
    }
}

impl Eq for PositionInfo {}

/// An input registered with the registry: its name, the position its first byte was given, and
/// the backing source when one exists.
#[derive(Debug, Clone)]
struct OpenedSource {
    file: PathBuf,
    start: SrcPos,
    source: Option<Arc<SourceFile>>,
}

/// Represents the registry recording every byte consumed from the opened inputs.
///
/// The scanner calls [`Positions::step`] once per consumed byte; any consumer holding a
/// [`SrcPos`] can later ask [`Positions::info`] which file and line that byte came from.
#[derive(Debug, Clone, Default, CopyGetters)]
pub struct Positions {
    opened: Vec<OpenedSource>,

    /// Gets the current position, one past the last consumed byte.
    #[get_copy = "pub"]
    position: SrcPos,
}

impl Positions {
    /// Creates a new empty registry.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Registers a named input with no backing content, e.g. an arbitrary byte stream.
    ///
    /// Positions inside such an input resolve to no [`PositionInfo`], since there is no line
    /// table to consult.
    pub fn open_source_file(&mut self, file: impl Into<PathBuf>) {
        self.opened.push(OpenedSource {
            file: file.into(),
            start: self.position,
            source: None,
        });
    }

    /// Registers a loaded [`SourceFile`] starting at the current position.
    pub fn open_source(&mut self, source: &Arc<SourceFile>) {
        self.opened.push(OpenedSource {
            file: source.full_path().clone(),
            start: self.position,
            source: Some(source.clone()),
        });
    }

    /// Advances the current position by one consumed byte.
    pub fn step(&mut self) { self.position += 1; }

    /// Resolves the given position to its file and line.
    ///
    /// Returns [`None`] when the position does not fall inside a registered input, when the
    /// input has no backing content, or when the position does not land on a character
    /// boundary of that content.
    #[must_use]
    pub fn info(&self, pos: SrcPos) -> Option<PositionInfo> {
        let opened = self
            .opened
            .iter()
            .rev()
            .find(|opened| opened.start <= pos)?;
        let source = opened.source.as_ref()?;

        let offset = pos - opened.start;
        let location = source.get_location(offset)?;
        let line_range = source.get_line_range(location.line)?;
        let line_length = source.get_line(location.line).map_or(0, trimmed_length);

        Some(PositionInfo {
            file: opened.file.clone(),
            line: location.line,
            column: location.column - 1,
            line_start: opened.start + line_range.start,
            line_length,
            source: Some(source.clone()),
        })
    }
}

#[cfg(test)]
mod tests;
