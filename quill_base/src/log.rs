//! Provides the functions related to logging/printing messages to the console.

use std::fmt::Display;

use derive_new::new;
use formatting::{Color, Style};

use crate::position::PositionInfo;

pub mod formatting;

/// Represents the severity of a log message to be printed to the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Severity {
    Error,
    Info,
    Warning,
}

/// Is a struct implementing [`Display`] that represents a log message to be displayed to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, new)]
pub struct Message<T> {
    /// The severity of the log message.
    pub severity: Severity,

    /// The message to be displayed.
    pub display: T,
}

impl<T: Display> Display for Message<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let log_header = Style::Bold.with(match self.severity {
            Severity::Error => Color::Red.with("[error]:"),
            Severity::Info => Color::Green.with("[info]:"),
            Severity::Warning => Color::Yellow.with("[warning]:"),
        });

        let message_part = Style::Bold.with(&self.display);

        write!(f, "{log_header} {message_part}")
    }
}

/// Structure implementing [`Display`] that prints a message together with the position it refers
/// to, the source line it occurred on, and a caret pointing at the offending column:
///
/// ```text
/// file:line: message
///   source line
///      ^
/// ```
///
/// The source line and the caret are omitted when the line text cannot be retrieved.
#[derive(Debug, Clone, Copy, new)]
pub struct Located<'a, T> {
    /// The resolved position the message refers to.
    pub location: &'a PositionInfo,

    /// The message to be displayed.
    pub display: T,
}

impl<T: Display> Display for Located<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: {}",
            self.location.file.display(),
            self.location.line,
            self.display
        )?;

        if let Some(line) = self.location.source_line() {
            write!(
                f,
                "\n  {line}\n  {:width$}^",
                "",
                width = self.location.column
            )?;
        }

        Ok(())
    }
}
