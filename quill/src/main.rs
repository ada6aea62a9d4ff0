use std::process::ExitCode;

use quill_driver::{Argument, Parser};

fn main() -> ExitCode {
    let argument = Argument::parse();
    quill_driver::run(argument)
}
