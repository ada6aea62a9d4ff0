//! Contains the [`Tree`] node model: literal leaves and the structural nodes combining them.

use std::{fmt::Display, io, sync::Arc};

use derive_more::From;
use enum_as_inner::EnumAsInner;
use getset::{CopyGetters, Getters};
use quill_base::position::SrcPos;

use crate::{
    blob::Blob,
    text::{Name, Text},
};

/// Is a shared, reference-counted handle to a [`Tree`] node.
///
/// Interior nodes hold strong handles to their children; sharing a subtree between several
/// parents is simply cloning the handle. The scanner and the parser only ever build leaves
/// and freshly allocated interior nodes, so no cycle can form.
pub type Node = Arc<Tree>;

/// Represents a natural number literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, CopyGetters)]
#[get_copy = "pub"]
pub struct Natural {
    /// Gets the source position of the literal.
    position: SrcPos,

    /// Gets the value of the literal.
    value: u64,
}

impl Natural {
    /// Creates a new [`Natural`] with the given value.
    #[must_use]
    pub fn new(position: SrcPos, value: u64) -> Self { Self { position, value } }
}

/// Represents a real number literal.
#[derive(Debug, Clone, Copy, PartialEq, CopyGetters)]
#[get_copy = "pub"]
pub struct Real {
    /// Gets the source position of the literal.
    position: SrcPos,

    /// Gets the value of the literal.
    value: f64,
}

impl Real {
    /// Creates a new [`Real`] with the given value.
    #[must_use]
    pub fn new(position: SrcPos, value: f64) -> Self { Self { position, value } }
}

/// Represents a character literal, a single Unicode scalar value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, CopyGetters)]
#[get_copy = "pub"]
pub struct Character {
    /// Gets the source position of the literal.
    position: SrcPos,

    /// Gets the value of the literal.
    value: char,
}

impl Character {
    /// Creates a new [`Character`] with the given value.
    #[must_use]
    pub fn new(position: SrcPos, value: char) -> Self { Self { position, value } }
}

/// Represents a prefix combination, e.g. `-x` or `sin x`.
#[derive(Debug, Clone, PartialEq, Getters, CopyGetters)]
pub struct Prefix {
    /// Gets the source position of the node.
    #[get_copy = "pub"]
    position: SrcPos,

    /// Gets the operator part of the combination.
    #[get = "pub"]
    left: Node,

    /// Gets the operand part of the combination.
    #[get = "pub"]
    right: Node,
}

impl Prefix {
    /// Creates a new [`Prefix`] with the given operator and operand.
    #[must_use]
    pub fn new(position: SrcPos, left: Node, right: Node) -> Self {
        Self {
            position,
            left,
            right,
        }
    }
}

/// Represents a postfix combination, e.g. `3%` or `5 km`.
#[derive(Debug, Clone, PartialEq, Getters, CopyGetters)]
pub struct Postfix {
    /// Gets the source position of the node.
    #[get_copy = "pub"]
    position: SrcPos,

    /// Gets the operand part of the combination.
    #[get = "pub"]
    left: Node,

    /// Gets the operator part of the combination.
    #[get = "pub"]
    right: Node,
}

impl Postfix {
    /// Creates a new [`Postfix`] with the given operand and operator.
    #[must_use]
    pub fn new(position: SrcPos, left: Node, right: Node) -> Self {
        Self {
            position,
            left,
            right,
        }
    }
}

/// Represents an infix combination, e.g. `A+B` or `A and B`.
#[derive(Debug, Clone, PartialEq, Getters, CopyGetters)]
pub struct Infix {
    /// Gets the source position of the node.
    #[get_copy = "pub"]
    position: SrcPos,

    opcode: Node,

    /// Gets the left operand of the combination.
    #[get = "pub"]
    left: Node,

    /// Gets the right operand of the combination.
    #[get = "pub"]
    right: Node,
}

impl Infix {
    /// Creates a new [`Infix`] with the given opcode and operands.
    #[must_use]
    pub fn new(position: SrcPos, opcode: Text, left: Node, right: Node) -> Self {
        assert!(!opcode.is_empty(), "an infix opcode must not be empty");

        Self {
            position,
            opcode: Arc::new(Tree::Text(opcode)),
            left,
            right,
        }
    }

    /// Gets the opcode of the combination.
    #[must_use]
    pub fn opcode(&self) -> &Text { self.opcode.as_text().unwrap() }
}

/// Represents a block delimited by a pair of names, e.g. `(A)` or an indented body.
#[derive(Debug, Clone, PartialEq, Getters, CopyGetters)]
pub struct Block {
    /// Gets the source position of the node.
    #[get_copy = "pub"]
    position: SrcPos,

    /// Gets the child enclosed by the block.
    #[get = "pub"]
    child: Node,

    opening: Node,
    closing: Node,
}

impl Block {
    /// Creates a new [`Block`] with the given child and delimiters.
    #[must_use]
    pub fn new(position: SrcPos, child: Node, opening: Name, closing: Name) -> Self {
        Self {
            position,
            child,
            opening: Arc::new(Tree::Name(opening)),
            closing: Arc::new(Tree::Name(closing)),
        }
    }

    /// Gets the opening delimiter of the block.
    #[must_use]
    pub fn opening(&self) -> &Name { self.opening.as_name().unwrap() }

    /// Gets the closing delimiter of the block.
    #[must_use]
    pub fn closing(&self) -> &Name { self.closing.as_name().unwrap() }
}

/// Represents a text literal together with the delimiters it was written with, e.g. a long
/// text form.
#[derive(Debug, Clone, PartialEq, Getters, CopyGetters)]
pub struct DelimitedText {
    /// Gets the source position of the node.
    #[get_copy = "pub"]
    position: SrcPos,

    value: Node,
    opening: Node,
    closing: Node,
}

impl DelimitedText {
    /// Creates a new [`DelimitedText`] with the given content and delimiters.
    #[must_use]
    pub fn new(position: SrcPos, value: Text, opening: Name, closing: Name) -> Self {
        Self {
            position,
            value: Arc::new(Tree::Text(value)),
            opening: Arc::new(Tree::Name(opening)),
            closing: Arc::new(Tree::Name(closing)),
        }
    }

    /// Gets the text enclosed by the delimiters.
    #[must_use]
    pub fn value(&self) -> &Text { self.value.as_text().unwrap() }

    /// Gets the opening delimiter of the text.
    #[must_use]
    pub fn opening(&self) -> &Name { self.opening.as_name().unwrap() }

    /// Gets the closing delimiter of the text.
    #[must_use]
    pub fn closing(&self) -> &Name { self.closing.as_name().unwrap() }
}

/// Is an enumeration of every node kind of the model.
///
/// All kinds answer the same query surface — [`Tree::typename`], [`Tree::arity`],
/// [`Tree::children`], [`Tree::render`], [`Tree::deep_clone`] — and the `as_*`/`into_*`
/// accessors test the dynamic kind of a node. Sharing a node is cloning its [`Node`] handle;
/// a deep copy is only made by [`Tree::deep_clone`].
#[derive(Debug, Clone, PartialEq, EnumAsInner, From)]
#[allow(missing_docs)]
pub enum Tree {
    Natural(Natural),
    Real(Real),
    Character(Character),
    Blob(Blob),
    Text(Text),
    Name(Name),
    Prefix(Prefix),
    Postfix(Postfix),
    Infix(Infix),
    Block(Block),
    DelimitedText(DelimitedText),
}

impl Tree {
    /// Gets the source position of the node.
    #[must_use]
    pub fn position(&self) -> SrcPos {
        match self {
            Self::Natural(node) => node.position(),
            Self::Real(node) => node.position(),
            Self::Character(node) => node.position(),
            Self::Blob(node) => node.position(),
            Self::Text(node) => node.position(),
            Self::Name(node) => node.position(),
            Self::Prefix(node) => node.position(),
            Self::Postfix(node) => node.position(),
            Self::Infix(node) => node.position(),
            Self::Block(node) => node.position(),
            Self::DelimitedText(node) => node.position(),
        }
    }

    /// Gets the static name of the node kind.
    #[must_use]
    pub fn typename(&self) -> &'static str {
        match self {
            Self::Natural(..) => "natural",
            Self::Real(..) => "real",
            Self::Character(..) => "character",
            Self::Blob(..) => "blob",
            Self::Text(..) => "text",
            Self::Name(..) => "name",
            Self::Prefix(..) => "prefix",
            Self::Postfix(..) => "postfix",
            Self::Infix(..) => "infix",
            Self::Block(..) => "block",
            Self::DelimitedText(..) => "delimited_text",
        }
    }

    /// Gets the number of children of the node.
    #[must_use]
    pub fn arity(&self) -> usize {
        match self {
            Self::Natural(..)
            | Self::Real(..)
            | Self::Character(..)
            | Self::Blob(..)
            | Self::Text(..)
            | Self::Name(..) => 0,
            Self::Prefix(..) | Self::Postfix(..) => 2,
            Self::Infix(..) | Self::Block(..) | Self::DelimitedText(..) => 3,
        }
    }

    /// Gets an iterator over the children of the node, in rendering order.
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        let nodes: [Option<&Node>; 3] = match self {
            Self::Natural(..)
            | Self::Real(..)
            | Self::Character(..)
            | Self::Blob(..)
            | Self::Text(..)
            | Self::Name(..) => [None, None, None],
            Self::Prefix(Prefix { left, right, .. })
            | Self::Postfix(Postfix { left, right, .. }) => [Some(left), Some(right), None],
            Self::Infix(Infix {
                opcode,
                left,
                right,
                ..
            }) => [Some(left), Some(opcode), Some(right)],
            Self::Block(Block {
                child,
                opening,
                closing,
                ..
            }) => [Some(opening), Some(child), Some(closing)],
            Self::DelimitedText(DelimitedText {
                value,
                opening,
                closing,
                ..
            }) => [Some(opening), Some(value), Some(closing)],
        };

        nodes.into_iter().flatten()
    }

    /// Creates a deep copy of the node: every interior node is reallocated and every leaf is
    /// duplicated, so mutating the copy can never affect the original.
    #[must_use]
    pub fn deep_clone(&self) -> Self {
        let deep = |node: &Node| Arc::new(node.deep_clone());

        match self {
            Self::Natural(..)
            | Self::Real(..)
            | Self::Character(..)
            | Self::Blob(..)
            | Self::Text(..)
            | Self::Name(..) => self.clone(),
            Self::Prefix(node) => Self::Prefix(Prefix {
                position: node.position,
                left: deep(&node.left),
                right: deep(&node.right),
            }),
            Self::Postfix(node) => Self::Postfix(Postfix {
                position: node.position,
                left: deep(&node.left),
                right: deep(&node.right),
            }),
            Self::Infix(node) => Self::Infix(Infix {
                position: node.position,
                opcode: deep(&node.opcode),
                left: deep(&node.left),
                right: deep(&node.right),
            }),
            Self::Block(node) => Self::Block(Block {
                position: node.position,
                child: deep(&node.child),
                opening: deep(&node.opening),
                closing: deep(&node.closing),
            }),
            Self::DelimitedText(node) => Self::DelimitedText(DelimitedText {
                position: node.position,
                value: deep(&node.value),
                opening: deep(&node.opening),
                closing: deep(&node.closing),
            }),
        }
    }

    /// Renders the node to the given stream.
    ///
    /// The default rendering is the bare concatenation of the node's parts: literals render
    /// their source form (texts and characters double their delimiter, blobs render as `$`
    /// followed by hexadecimal digits, the newline name renders as `\n`), interior nodes
    /// render their children in order. Pretty, syntax-aware rendering belongs to an outer
    /// renderer.
    ///
    /// # Errors
    /// Returns whatever error the stream reports.
    pub fn render(&self, stream: &mut dyn io::Write) -> io::Result<()> {
        match self {
            Self::Natural(node) => write!(stream, "{}", node.value()),
            Self::Real(node) => write!(stream, "{}", node.value()),
            Self::Character(node) => {
                stream.write_all(b"'")?;
                if node.value() == '\'' {
                    stream.write_all(b"''")?;
                } else {
                    write!(stream, "{}", node.value())?;
                }
                stream.write_all(b"'")
            }
            Self::Blob(node) => {
                stream.write_all(b"$")?;
                for byte in node.data() {
                    write!(stream, "{byte:02X}")?;
                }
                stream.write_all(b"$")
            }
            Self::Text(node) => {
                stream.write_all(b"\"")?;
                for &byte in node.data() {
                    if byte == b'"' {
                        stream.write_all(b"\"\"")?;
                    } else {
                        stream.write_all(&[byte])?;
                    }
                }
                stream.write_all(b"\"")
            }
            Self::Name(node) => {
                if node.data() == b"\n" {
                    stream.write_all(b"\\n")
                } else {
                    stream.write_all(node.data())
                }
            }
            Self::Prefix(..)
            | Self::Postfix(..)
            | Self::Infix(..)
            | Self::Block(..)
            | Self::DelimitedText(..) => {
                for child in self.children() {
                    child.render(stream)?;
                }
                Ok(())
            }
        }
    }
}

impl Display for Tree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut rendered = Vec::new();
        self.render(&mut rendered).map_err(|_| std::fmt::Error)?;
        f.write_str(&String::from_utf8_lossy(&rendered))
    }
}

#[cfg(test)]
mod tests;
