//! This crate implements the lexical analysis phase of the front-end. This phase is responsible
//! for turning a stream of source bytes into tokens, together with the literal values the
//! tokens denote.
//!
//! The central type is [`scanner::Scanner`]: each call to [`scanner::Scanner::read`] returns
//! the next [`token::Token`] and updates the scanned-value channel the parser reads literals
//! from. Block structure is encoded purely through the `Newline`/`Indent`/`Unindent` tokens
//! derived from the off-side rule, unless an explicit parenthesis-like block overrides it.

#![deny(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    clippy::missing_errors_doc
)]
#![allow(clippy::missing_panics_doc, clippy::missing_const_for_fn)]

pub mod error;
pub mod scanner;
pub mod syntax;
pub mod token;
pub mod utf8;
