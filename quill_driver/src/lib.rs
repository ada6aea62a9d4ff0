use std::{cell::Cell, fmt::Display, fs::File, path::PathBuf, process::ExitCode};

pub use clap::Parser;
use quill_base::{
    diagnostic::Handler,
    log::{Message, Severity},
    position::Positions,
    source_file::SourceFile,
};
use quill_lexical::{
    scanner::Scanner,
    syntax::{Syntax, Table},
    token::Token,
};

/// The arguments to the program.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, clap::Parser)]
#[clap(name = "quill", about = "Quill language front-end.")]
pub struct Argument {
    /// The input file to tokenize.
    pub file: PathBuf,

    /// Scans without a syntax table, treating any punctuation run as a single operator.
    #[clap(long = "discover")]
    pub discover: bool,
}

/// A struct that implements [`Handler`] but prints all the messages to the standard error
/// stream.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct Printer {
    printed: Cell<bool>,
}

impl Printer {
    /// Creates a new [`Printer`].
    fn new() -> Self {
        Self {
            printed: Cell::new(false),
        }
    }

    fn has_printed(&self) -> bool { self.printed.get() }
}

impl<E: Display> Handler<E> for Printer {
    fn receive(&self, error: E) {
        eprintln!("{error}");
        self.printed.set(true);
    }
}

/// Builds the syntax table used when no external description is loaded.
fn default_table() -> Table {
    let mut table = Table::new();
    for operator in [
        "+", "-", "*", "/", "<", ">", "<=", ">=", "=", "<>", ":=", "->", ".", "..", ";", ",",
        "&", "|",
    ] {
        table.add_operator(operator);
    }
    table.add_block("(", ")");
    table.add_block("[", "]");
    table.add_block("{", "}");
    table
}

/// Runs the program with the given arguments.
pub fn run(argument: Argument) -> ExitCode {
    let file = match File::open(&argument.file) {
        Ok(file) => file,
        Err(error) => {
            let msg = Message::new(
                Severity::Error,
                format!("{}: {error}", argument.file.display()),
            );

            eprintln!("{msg}");
            return ExitCode::FAILURE;
        }
    };

    let source_file = match SourceFile::load(file, argument.file.clone()) {
        Ok(file) => file,
        Err(error) => {
            let msg = Message::new(
                Severity::Error,
                format!("{}: {error}", argument.file.display()),
            );

            eprintln!("{msg}");
            return ExitCode::FAILURE;
        }
    };

    let printer = Printer::new();
    let table = default_table();
    let syntax = if argument.discover {
        None
    } else {
        Some(&table as &dyn Syntax)
    };

    let mut scanner = Scanner::new(Positions::new(), syntax);
    scanner.open(&source_file);

    // token dump
    loop {
        let token = scanner.read(&printer);
        if token == Token::Eof {
            break;
        }

        let spelling = scanner.source().as_str();
        match scanner.scanned() {
            Some(scanned) => println!(
                "{:<9} {:<16} {}",
                token.as_str(),
                spelling.escape_default(),
                scanned.clone().into_tree()
            ),
            None => println!("{:<9} {}", token.as_str(), spelling.escape_default()),
        }
    }

    if printer.has_printed() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
