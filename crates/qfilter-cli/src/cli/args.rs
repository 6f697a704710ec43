//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Filter file (positional). `-` reads stdin.
pub fn filter_path_arg() -> Arg {
    Arg::new("filter_path")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Filter file, or - for stdin")
}

/// Inline filter text (-q/--query).
pub fn filter_text_arg() -> Arg {
    Arg::new("filter_text")
        .short('q')
        .long("query")
        .value_name("TEXT")
        .conflicts_with("filter_path")
        .help("Inline filter text")
}

/// Schema file (--schema).
pub fn schema_arg() -> Arg {
    Arg::new("schema")
        .long("schema")
        .value_name("FILE")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("JSON schema declaring types, references and operators")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Output compact JSON (--compact).
pub fn compact_arg() -> Arg {
    Arg::new("compact")
        .long("compact")
        .action(ArgAction::SetTrue)
        .help("Output compact JSON")
}

/// Print the indented tree instead of JSON (--dump).
pub fn dump_arg() -> Arg {
    Arg::new("dump")
        .long("dump")
        .action(ArgAction::SetTrue)
        .conflicts_with("compact")
        .help("Print the parse tree instead of JSON")
}

/// Left type pattern (--left).
pub fn left_arg() -> Arg {
    Arg::new("left")
        .long("left")
        .value_name("TYPE")
        .help("Left operand type, e.g. $keyword or $any")
}

/// Operator name (--operator).
pub fn operator_arg() -> Arg {
    Arg::new("operator")
        .long("operator")
        .value_name("OP")
        .help("Operator name")
}

/// Right type pattern (--right).
pub fn right_arg() -> Arg {
    Arg::new("right")
        .long("right")
        .value_name("TYPE")
        .help("Right operand type")
}

/// Only unary overloads (--unary).
pub fn unary_arg() -> Arg {
    Arg::new("unary")
        .long("unary")
        .action(ArgAction::SetTrue)
        .conflicts_with("right")
        .help("Only select unary overloads")
}

/// Fail when nothing matches (--strict).
pub fn strict_arg() -> Arg {
    Arg::new("strict")
        .long("strict")
        .action(ArgAction::SetTrue)
        .help("Fail when no overload matches")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Verbosity level (-v for debug, -vv for trace)")
}
