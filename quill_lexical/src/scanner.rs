//! Contains the [`Scanner`] state machine turning a byte stream into tokens.

use std::{fmt::Debug, io::Read, path::PathBuf, sync::Arc};

use getset::{CopyGetters, Getters};
use lazy_static::lazy_static;
use quill_base::{
    diagnostic::Handler,
    position::{PositionInfo, Positions, SrcPos},
    source_file::SourceFile,
};
use quill_tree::{
    blob::Blob,
    node::{Character, Natural, Real},
    text::{Name, Text},
};

use crate::{
    error::{
        Error, InconsistentUnindent, InvalidBase, InvalidBlobBase, MixedIndentation,
        MultiCharacterConstant, UglyUnderscores, UnterminatedText,
    },
    syntax::Syntax,
    token::{Scanned, Token},
    utf8,
};

lazy_static! {
    /// Digit values for bases 2 to 36: `0`-`9`, then `A`-`Z` and `a`-`z` as 10 to 35.
    static ref BASE_VALUE: [u8; 256] = {
        let mut table = [0xFF_u8; 256];
        for byte in b'0'..=b'9' {
            table[byte as usize] = byte - b'0';
        }
        for byte in b'A'..=b'Z' {
            table[byte as usize] = byte - b'A' + 10;
        }
        for byte in b'a'..=b'z' {
            table[byte as usize] = byte - b'a' + 10;
        }
        table
    };

    /// Digit values for the base-64 alphabet.
    static ref BASE64_VALUE: [u8; 256] = {
        let mut table = [0xFF_u8; 256];
        for byte in b'A'..=b'Z' {
            table[byte as usize] = byte - b'A';
        }
        for byte in b'a'..=b'z' {
            table[byte as usize] = byte - b'a' + 26;
        }
        for byte in b'0'..=b'9' {
            table[byte as usize] = byte - b'0' + 52;
        }
        table[b'+' as usize] = 62;
        table[b'/' as usize] = 63;
        table
    };
}

fn digit_value(table: &[u8; 256], byte: Option<u8>) -> u64 {
    byte.map_or(0xFF, |byte| u64::from(table[byte as usize]))
}

fn is_space(byte: Option<u8>) -> bool { byte.is_some_and(|byte| byte.is_ascii_whitespace()) }

fn is_operator_byte(byte: u8) -> bool {
    byte.is_ascii_punctuation() && byte != b'\'' && byte != b'"'
}

#[allow(clippy::cast_possible_truncation)]
fn append_chunk(blob: &mut Blob, chunk: u32, maxbits: u32) {
    if maxbits == 8 {
        blob.append_data(&[chunk as u8]);
    } else {
        blob.append_data(&[(chunk >> 16) as u8, (chunk >> 8) as u8, chunk as u8]);
    }
}

/// Is the buffer of pushed-back bytes, most recently pushed first.
///
/// Two slots cover the lookahead the number grammar needs (`1..3`); the extra slots let a
/// multi-byte UTF-8 sequence be classified and handed back.
#[derive(Debug, Clone, Copy, Default)]
struct Pending {
    bytes: [u8; 4],
    len: usize,
}

impl Pending {
    fn push(&mut self, byte: u8) {
        assert!(self.len < self.bytes.len(), "too many pending bytes");
        self.bytes.copy_within(0..self.len, 1);
        self.bytes[0] = byte;
        self.len += 1;
    }

    fn pop(&mut self) -> Option<u8> {
        if self.len == 0 {
            return None;
        }
        let byte = self.bytes[0];
        self.bytes.copy_within(1..self.len, 0);
        self.len -= 1;
        Some(byte)
    }

    fn len(&self) -> usize { self.len }
}

/// Is the saved indentation state returned by [`Scanner::open_paren`], to be handed back to
/// [`Scanner::close_paren`] when the matching closing delimiter has been scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "the saved indentation must be restored by close_paren"]
pub struct ParenIndent {
    indent: u32,
    was_setting: bool,
}

/// Represents the scanner state machine.
///
/// A scanner owns its input stream and a [`Positions`] registry, and borrows an optional
/// [`Syntax`] describing operators and blocks. Each call to [`Scanner::read`] consumes input
/// up to the next token boundary and returns exactly one token; the literal value and the
/// spelling of that token are available until the next call through [`Scanner::scanned`] and
/// [`Scanner::source`].
#[derive(Getters, CopyGetters)]
pub struct Scanner<'s> {
    reader: Option<Box<dyn Read>>,

    /// Gets the position registry recording the consumed input.
    #[get = "pub"]
    positions: Positions,

    syntax: Option<&'s dyn Syntax>,

    /// Gets the spelling of the last returned token.
    #[get = "pub"]
    source: Text,

    /// Gets the value scanned along with the last returned token, if it carried one.
    #[get = "pub"]
    scanned: Option<Scanned>,

    indents: Vec<u32>,
    indent: u32,
    column: u32,
    pending: Pending,
    indent_char: Option<u8>,
    checking_indent: bool,
    setting_indent: bool,

    /// Gets whether the last returned token was preceded by whitespace.
    #[get_copy = "pub"]
    had_space_before: bool,

    /// Gets whether the last returned token was followed by whitespace.
    #[get_copy = "pub"]
    had_space_after: bool,

    /// Gets the closing name expected for the innermost open block, if any.
    #[get = "pub"]
    block_close: Option<Name>,
}

impl Debug for Scanner<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scanner")
            .field("source", &self.source)
            .field("scanned", &self.scanned)
            .field("indents", &self.indents)
            .field("indent", &self.indent)
            .field("column", &self.column)
            .field("pending", &self.pending)
            .field("checking_indent", &self.checking_indent)
            .field("setting_indent", &self.setting_indent)
            .field("block_close", &self.block_close)
            .finish_non_exhaustive()
    }
}

impl<'s> Scanner<'s> {
    /// Creates a new [`Scanner`] over the given position registry.
    ///
    /// Passing no syntax selects discovery mode: any punctuation run is one operator and no
    /// block is recognized.
    #[must_use]
    pub fn new(positions: Positions, syntax: Option<&'s dyn Syntax>) -> Self {
        Self {
            reader: None,
            positions,
            syntax,
            source: Text::new(0, Vec::new()),
            scanned: None,
            indents: Vec::new(),
            indent: 0,
            column: 0,
            pending: Pending::default(),
            indent_char: None,
            checking_indent: false,
            setting_indent: false,
            had_space_before: false,
            had_space_after: false,
            block_close: None,
        }
    }

    /// Opens the given loaded source file in the scanner.
    pub fn open(&mut self, source: &Arc<SourceFile>) {
        assert!(
            self.reader.is_none(),
            "cannot open a scanner that is already open"
        );
        self.positions.open_source(source);
        self.reader = Some(Box::new(source.reader()));
    }

    /// Opens an arbitrary named byte stream in the scanner.
    ///
    /// Positions inside such a stream carry no line information, so errors reported against
    /// them display without a source excerpt.
    pub fn open_stream(&mut self, name: impl Into<PathBuf>, reader: impl Read + 'static) {
        assert!(
            self.reader.is_none(),
            "cannot open a scanner that is already open"
        );
        self.positions.open_source_file(name);
        self.reader = Some(Box::new(reader));
    }

    /// Closes the current input stream.
    pub fn close(&mut self) { self.reader = None; }

    /// Gets the current position, accounting for the bytes handed back to the input.
    #[must_use]
    pub fn position(&self) -> SrcPos {
        self.positions.position().saturating_sub(self.pending.len())
    }

    fn locate(&self, pos: SrcPos) -> Option<PositionInfo> { self.positions.info(pos) }

    fn getchar(&mut self) -> Option<u8> {
        if let Some(byte) = self.pending.pop() {
            return Some(byte);
        }

        let reader = self.reader.as_mut()?;
        let mut byte = [0_u8; 1];
        match reader.read(&mut byte) {
            Ok(1) => Some(byte[0]),
            _ => {
                self.reader = None;
                None
            }
        }
    }

    fn ungetchar(&mut self, byte: u8) { self.pending.push(byte); }

    fn unget(&mut self, byte: Option<u8>) {
        if let Some(byte) = byte {
            self.pending.push(byte);
        }
    }

    /// Updates the position and the token spelling after consuming one byte. Passing
    /// [`None`] consumes silently, without recording the byte in the spelling.
    fn consume(&mut self, recorded: Option<u8>) {
        if let Some(byte) = recorded {
            self.source.append_data(&[byte]);
        }
        self.positions.step();
    }

    /// Consumes the current byte and gets the next one.
    fn advance(&mut self, current: Option<u8>) -> Option<u8> {
        if let Some(byte) = current {
            self.consume(Some(byte));
        }
        self.getchar()
    }

    /// Consumes the current byte without recording it and gets the next one.
    fn advance_silent(&mut self) -> Option<u8> {
        self.consume(None);
        self.getchar()
    }

    /// Checks whether the byte in hand starts a Unicode letter, peeking at the continuation
    /// bytes of a multi-byte sequence and handing them back.
    fn leading_letter(&mut self, byte: u8) -> bool {
        if byte.is_ascii_alphabetic() {
            return true;
        }
        if !utf8::is_first(byte) {
            return false;
        }

        let needed = utf8::sequence_length(byte) - 1;
        let mut tail = [0_u8; 3];
        let mut collected = 0;
        while collected < needed {
            match self.getchar() {
                Some(next) if utf8::is_next(next) => {
                    tail[collected] = next;
                    collected += 1;
                }
                Some(next) => {
                    self.ungetchar(next);
                    break;
                }
                None => break,
            }
        }
        for index in (0..collected).rev() {
            self.ungetchar(tail[index]);
        }

        let mut sequence = [0_u8; 4];
        sequence[0] = byte;
        sequence[1..=collected].copy_from_slice(&tail[..collected]);
        utf8::decode(&sequence[..=collected]).is_some_and(char::is_alphabetic)
    }

    /// Scans the input and returns the next token.
    ///
    /// The scanned value channel and the spelling are updated along with the returned token.
    /// Lexical problems are reported to the given handler; the scanner never aborts, so a
    /// token is returned in every case.
    #[allow(clippy::too_many_lines, clippy::cognitive_complexity)]
    pub fn read(&mut self, handler: &dyn Handler<Error>) -> Token {
        let pos = self.position();

        // New spelling for the new token; drop the previously scanned value
        self.source = Text::new(pos, Vec::new());
        self.scanned = None;

        // Check if we unindented far enough for multiple unindents
        self.had_space_before = true;
        if self
            .indents
            .last()
            .is_some_and(|&top| top > self.indent)
        {
            self.indents.pop();
            return Token::Unindent;
        }

        // Check if we have something to read
        if self.reader.is_none() {
            return Token::Eof;
        }

        // Read the next byte
        let mut c = self.getchar();

        // Skip spaces and check indentation
        self.had_space_before = false;
        while let Some(byte) = c {
            if !byte.is_ascii_whitespace() {
                break;
            }
            self.had_space_before = true;

            if byte == b'\n' {
                // New line: start counting indentation
                self.checking_indent = true;
                self.column = 0;
            } else if self.checking_indent {
                // Can't mix tabs and spaces
                if byte == b' ' || byte == b'\t' {
                    match self.indent_char {
                        None => self.indent_char = Some(byte),
                        Some(first) if first != byte => handler.receive(
                            MixedIndentation {
                                pos,
                                location: self.locate(pos),
                            }
                            .into(),
                        ),
                        Some(_) => {}
                    }
                }
                self.column += 1;
            }

            // Only newlines are recorded in the spelling
            self.consume((byte == b'\n').then_some(byte));
            c = self.getchar();
        }

        // Stop counting indentation
        if self.checking_indent {
            self.unget(c);
            self.checking_indent = false;

            if self.setting_indent {
                // A parenthesis-like block was just opened: this line sets its indent
                self.indents.push(self.indent);
                self.indent = self.column;
                self.setting_indent = false;
                return Token::Newline;
            }
            if self.column > self.indent {
                // Strictly deeper indent
                self.indent = self.column;
                self.indents.push(self.indent);
                return Token::Indent;
            }
            if self
                .indents
                .last()
                .is_some_and(|&top| self.column < top)
            {
                // Unindenting: remove the rightmost indent level
                self.indents.pop();
                self.indent = self.column;

                // If we did not come back to a recorded level, report the inconsistency
                if self
                    .indents
                    .last()
                    .is_some_and(|&top| top < self.column)
                {
                    handler.receive(
                        InconsistentUnindent {
                            pos,
                            location: self.locate(pos),
                        }
                        .into(),
                    );
                    return Token::Error;
                }

                // Deeper unindents are reported by the next calls
                return Token::Unindent;
            }

            // Exactly the same indent level as before
            return Token::Newline;
        }

        // Report end of input if that's what we've got at that stage
        if self.reader.is_none() {
            return Token::Eof;
        }

        // Clear the whitespace from the spelling, update the position to the first non-space
        let pos = self.position();
        self.source = Text::new(pos, Vec::new());

        // Check if we have a blob
        let mut blob = None;
        if c == Some(b'$') {
            c = self.advance(c);
            blob = Some(Blob::new(pos, Vec::new()));
        }

        // Look for numbers
        if blob.is_some() || c.is_some_and(|byte| byte.is_ascii_digit()) {
            return self.read_number(pos, blob, c, handler);
        }

        // Look for names
        if c.is_some_and(|byte| byte.is_ascii_alphabetic() || utf8::is_first(byte)) {
            if self.leading_letter(c.unwrap()) {
                return self.read_name(pos, c, handler);
            }
            // A non-letter scalar is consumed whole as a symbol by the operator path
        }

        // Look for texts and characters
        if c == Some(b'"') || c == Some(b'\'') {
            return self.read_text(pos, c.unwrap(), handler);
        }

        // Look for other symbols
        self.read_operator(pos, c)
    }

    /// Scans a number literal or a blob, starting from the byte in hand.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::too_many_lines
    )]
    fn read_number(
        &mut self,
        pos: SrcPos,
        mut blob: Option<Blob>,
        mut c: Option<u8>,
        handler: &dyn Handler<Error>,
    ) -> Token {
        let mut base: u64 = 10;
        let mut blob_base: u64 = 16;
        let mut natural_value: u64 = 0;
        let mut floating_point = false;
        let mut based_number = false;
        let mut blob_chunk: u32 = 0;
        let mut blob_bits: u32 = 0;
        let mut blob_digbits: u32 = 4;
        let mut blob_maxbits: u32 = 8;
        let mut digits: &[u8; 256] = &BASE_VALUE;

        // Take the integral part (or the base)
        loop {
            loop {
                let digit = digit_value(digits, c);
                if digit >= base && !(blob.is_some() && digit < blob_base) {
                    break;
                }

                natural_value = natural_value.wrapping_mul(base).wrapping_add(digit);
                if let Some(blob) = &mut blob {
                    // Record blob digits as we go
                    blob_chunk = (blob_chunk << blob_digbits) | digit as u32;
                    blob_bits += blob_digbits;
                    if blob_bits >= blob_maxbits {
                        append_chunk(blob, blob_chunk, blob_maxbits);
                        blob_chunk = 0;
                        blob_bits = 0;
                    }
                }

                c = self.advance(c);
                if c == Some(b'_') {
                    // Skip a single underscore
                    c = self.advance(c);
                    if c == Some(b'_') {
                        handler.receive(
                            UglyUnderscores {
                                pos,
                                location: self.locate(pos),
                            }
                            .into(),
                        );
                    }
                }
                if blob.is_some() {
                    // Skip whitespace in blobs
                    while is_space(c) {
                        c = self.advance_silent();
                    }
                }
            }

            // Check if this is a based number or blob
            if c == Some(b'#') && !based_number {
                base = natural_value;
                blob_base = natural_value;

                if base == 64 {
                    // Special case for base-64: switch coding table
                    digits = &BASE64_VALUE;
                } else if !(2..=36).contains(&base) {
                    handler.receive(
                        InvalidBase {
                            base,
                            pos,
                            location: self.locate(pos),
                        }
                        .into(),
                    );
                    base = 36;
                }

                if let Some(blob) = &mut blob {
                    // Remove any byte recorded while reading the base
                    blob.range(0, 0);
                    blob_bits = 0;
                    blob_chunk = 0;

                    // Select bit sizes depending on the base
                    (blob_digbits, blob_maxbits) = match blob_base {
                        2 => (1, 8),
                        4 => (2, 8),
                        8 => (3, 24),
                        16 => (4, 8),
                        64 => (6, 24),
                        _ => {
                            handler.receive(
                                InvalidBlobBase {
                                    base: blob_base,
                                    pos,
                                    location: self.locate(pos),
                                }
                                .into(),
                            );
                            (8, 8)
                        }
                    };
                }

                c = self.advance(c);
                natural_value = 0;
                based_number = true;
            } else {
                break;
            }
        }
        let mut real_value = natural_value as f64;

        // Finish the blob if we were reading one
        if let Some(mut blob) = blob {
            // Check the = terminator in base-64
            if blob_base == 64 && c == Some(b'=') {
                c = self.advance(c);
            }

            // Check if there is a $ at the end of the blob
            if c == Some(b'$') {
                self.consume(c);
                self.had_space_after = false;
            } else {
                self.unget(c);
                self.had_space_after = is_space(c);
            }

            if blob_bits > 0 {
                // Pad with zero bits and record the last chunk
                while blob_bits < blob_maxbits {
                    blob_chunk <<= blob_digbits;
                    blob_bits += blob_digbits;
                }
                append_chunk(&mut blob, blob_chunk, blob_maxbits);
            }

            self.scanned = Some(Scanned::Blob(blob));
            return Token::Blob;
        }

        // Check the fractional part for real numbers
        if c == Some(b'.') {
            let mantissa = self.advance(c);
            if digit_value(digits, mantissa) >= base {
                // Something else follows the integer: 1..3, 1.(3)
                let natural = Natural::new(pos, natural_value);
                self.unget(mantissa);
                self.ungetchar(b'.');

                // The pushed-back dot is no longer part of the spelling
                let length = self.source.len() - 1;
                self.source.range(0, length);

                self.had_space_after = false;
                self.scanned = Some(Scanned::Natural(natural));
                return Token::Integer;
            }

            floating_point = true;
            c = mantissa;
            let mut comma_position: f64 = 1.0;
            while digit_value(digits, c) < base {
                comma_position /= base as f64;
                real_value += comma_position * digit_value(digits, c) as f64;
                c = self.advance(c);
                if c == Some(b'_') {
                    c = self.advance(c);
                    if c == Some(b'_') {
                        handler.receive(
                            UglyUnderscores {
                                pos,
                                location: self.locate(pos),
                            }
                            .into(),
                        );
                    }
                }
            }
        }

        // Check if we have a second '#' at the end of a based number (16#FF#e3)
        if c == Some(b'#') {
            c = self.advance(c);
        }

        // Check for the exponent
        if c == Some(b'e') || c == Some(b'E') {
            c = self.advance(c);

            let mut exponent: u64 = 0;
            let mut negative_exponent = false;

            // Exponent sign
            if c == Some(b'+') {
                c = self.advance(c);
            } else if c == Some(b'-') {
                c = self.advance(c);
                negative_exponent = true;
                floating_point = true;
            }

            // Exponent value (always in base 10)
            while digit_value(&BASE_VALUE, c) < 10 {
                exponent = 10 * exponent + digit_value(&BASE_VALUE, c);
                c = self.advance(c);
                if c == Some(b'_') {
                    c = self.advance(c);
                }
            }

            // Compute base^exponent by squaring
            if floating_point {
                let mut exponent_value: f64 = 1.0;
                let mut multiplier = base as f64;
                while exponent > 0 {
                    if exponent & 1 == 1 {
                        exponent_value *= multiplier;
                    }
                    exponent >>= 1;
                    multiplier *= multiplier;
                }

                if negative_exponent {
                    real_value /= exponent_value;
                } else {
                    real_value *= exponent_value;
                }
            } else {
                let mut exponent_value: u64 = 1;
                let mut multiplier = base;
                while exponent > 0 {
                    if exponent & 1 == 1 {
                        exponent_value = exponent_value.wrapping_mul(multiplier);
                    }
                    exponent >>= 1;
                    multiplier = multiplier.wrapping_mul(multiplier);
                }
                natural_value = natural_value.wrapping_mul(exponent_value);
            }
        }

        // Return the token
        self.unget(c);
        self.had_space_after = is_space(c);
        if floating_point {
            self.scanned = Some(Scanned::Real(Real::new(pos, real_value)));
            return Token::Real;
        }
        self.scanned = Some(Scanned::Natural(Natural::new(pos, natural_value)));
        Token::Integer
    }

    /// Scans a name, starting from the byte in hand.
    fn read_name(
        &mut self,
        pos: SrcPos,
        mut c: Option<u8>,
        handler: &dyn Handler<Error>,
    ) -> Token {
        let mut previous = 0_u8;
        while let Some(byte) = c {
            if !(byte.is_ascii_alphanumeric()
                || byte == b'_'
                || utf8::is_first(byte)
                || utf8::is_next(byte))
            {
                break;
            }
            if byte == b'_' && previous == b'_' {
                handler.receive(
                    UglyUnderscores {
                        pos,
                        location: self.locate(pos),
                    }
                    .into(),
                );
            }
            previous = byte;
            c = self.advance(c);
        }
        self.unget(c);
        self.had_space_after = is_space(c);

        // Check if this is a block marker
        let name = Name::from_spelling(pos, self.source.data());
        self.scanned = Some(Scanned::Name(name.clone()));

        if let Some(syntax) = self.syntax {
            if let Some(closing) = syntax.block_closing(&name) {
                self.block_close = Some(closing);
                return Token::Open;
            }
            if self.block_close.as_ref() == Some(&name) {
                self.block_close = None;
                return Token::Close;
            }
        }
        Token::Name
    }

    /// Scans a text or character literal delimited by the given quote.
    fn read_text(&mut self, pos: SrcPos, delimiter: u8, handler: &dyn Handler<Error>) -> Token {
        let mut text = Text::new(pos, Vec::new());
        let mut c = self.advance(Some(delimiter));

        loop {
            match c {
                None => {
                    // End of input in the middle of the literal terminates it
                    handler.receive(
                        UnterminatedText {
                            pos,
                            location: self.locate(pos),
                        }
                        .into(),
                    );
                    self.had_space_after = false;
                    break;
                }
                Some(byte) if byte == delimiter => {
                    c = self.advance(c);
                    if c != Some(delimiter) {
                        self.unget(c);
                        self.had_space_after = is_space(c);
                        break;
                    }

                    // A doubled delimiter encodes a literal delimiter
                    text.append_data(&[delimiter]);
                    c = self.advance(c);
                }
                Some(byte) => {
                    text.append_data(&[byte]);
                    c = self.advance(c);
                }
            }
        }

        if delimiter == b'"' {
            self.scanned = Some(Scanned::Text(text));
            return Token::Text;
        }

        // A character literal must contain exactly one code point
        if utf8::count(text.data()) != 1 {
            handler.receive(
                MultiCharacterConstant {
                    content: text.as_str().into_owned(),
                    pos,
                    location: self.locate(pos),
                }
                .into(),
            );
        }
        let value = utf8::code(text.data());
        self.scanned = Some(Scanned::Character(Character::new(pos, value)));
        Token::Character
    }

    /// Scans an operator spelling, starting from the byte in hand.
    fn read_operator(&mut self, pos: SrcPos, mut c: Option<u8>) -> Token {
        let mut token = Token::Symbol;

        if let Some(syntax) = self.syntax {
            // Normal scanning mode: extend while the syntax can extend the spelling
            while c.is_some_and(is_operator_byte) && syntax.is_operator(self.source.data()) {
                c = self.advance(c);

                let name = Name::from_spelling(pos, self.source.data());
                if let Some(closing) = syntax.block_closing(&name) {
                    self.block_close = Some(closing);
                    token = Token::Open;
                    break;
                }
                if self.block_close.as_ref() == Some(&name) {
                    self.block_close = None;
                    token = Token::Close;
                    break;
                }
            }
        } else {
            // Syntax discovery mode: accept any operator
            while c.is_some_and(is_operator_byte) {
                c = self.advance(c);
            }
        }

        // Always make progress, even when the syntax rejects the very first byte; a
        // multi-byte scalar is consumed whole
        if self.source.is_empty() {
            if let Some(byte) = c {
                let length = if utf8::is_first(byte) {
                    utf8::sequence_length(byte)
                } else {
                    1
                };
                c = self.advance(c);
                for _ in 1..length {
                    if !c.is_some_and(utf8::is_next) {
                        break;
                    }
                    c = self.advance(c);
                }
            }
        }

        self.unget(c);
        self.had_space_after = is_space(c);
        self.scanned = Some(Scanned::Name(Name::from_spelling(pos, self.source.data())));
        token
    }

    /// Reads ahead until the given closing marker is matched, returning the intervening
    /// bytes without the marker. Used for block comments and long text forms.
    ///
    /// Indentation bookkeeping continues during the skip: the leading bytes of a
    /// continuation line are dropped from the returned text while they lie below the current
    /// indentation.
    pub fn skip(&mut self, closing: &Name) -> Text {
        let pos = self.position();
        let mut comment = Text::new(pos, Vec::new());

        // Clear the spelling and the scanned value, the skipped bytes replace them
        self.source = Text::new(pos, Vec::new());
        self.scanned = None;

        let target = closing.data().to_vec();
        while let Some(byte) = self.getchar() {
            self.consume(Some(byte));

            let mut skip = false;
            if byte == b'\n' {
                // New line: start counting indentation
                self.checking_indent = true;
                self.column = 0;
            } else if self.checking_indent {
                if byte.is_ascii_whitespace() {
                    skip = self.column < self.indent;
                    self.column += 1;
                } else {
                    self.checking_indent = false;
                }
            }

            if !skip {
                comment.append_data(&[byte]);
            }

            if comment.data().ends_with(&target) {
                // Strip the termination from the returned text
                let length = comment.len() - target.len();
                comment.range(0, length);
                return comment;
            }
        }

        comment
    }

    /// Remembers the indentation state when a parenthesis-like block opens.
    ///
    /// The next line scanned inside the block establishes a fresh indentation level.
    pub fn open_paren(&mut self) -> ParenIndent {
        let saved = ParenIndent {
            indent: self.indent,
            was_setting: self.setting_indent,
        };
        self.setting_indent = true;
        saved
    }

    /// Restores the indentation state saved when the matching parenthesis-like block opened.
    pub fn close_paren(&mut self, saved: ParenIndent) {
        self.indent = saved.indent;
        if !self.setting_indent && self.indents.last() == Some(&self.indent) {
            self.indents.pop();
        }
        self.setting_indent = saved.was_setting;
    }
}
