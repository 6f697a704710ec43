pub mod check;
pub mod input;
pub mod narrow;
pub mod parse;


use std::fmt::Display;

use qfilter_lib::Error;

use input::FilterSource;

/// Prints `error: ...` and exits with status 1.
pub fn fail(message: impl Display) -> ! {
    eprintln!("error: {}", message);
    std::process::exit(1);
}

/// Parse errors are shown as an annotated snippet of the filter.
pub fn fail_with(error: &Error, source: &FilterSource, color: bool) -> ! {
    let Error::Parse(parse_error) = error else {
        fail(error);
    };

    let mut printer = parse_error.printer(&source.text).colored(color);
    if let Some(name) = &source.name {
        printer = printer.path(name);
    }
    eprint!("{}", printer.render());
    eprintln!();
    std::process::exit(1);
}
