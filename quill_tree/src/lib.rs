//! This crate defines the node model shared between the scanner and the parser: literal leaves
//! (naturals, reals, characters, blobs, texts, names) and the structural nodes combining them
//! (prefix, postfix, infix, block, delimited text).
//!
//! Nodes are shared through [`node::Node`] reference counting; every kind answers the same
//! small surface of queries (type name, arity, children, rendering, deep cloning) so that
//! consumers can traverse any tree uniformly.

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

pub mod blob;
pub mod node;
pub mod text;
