//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("qfilter")
        .about("Typed filter-expression language")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(parse_command())
        .subcommand(check_command())
        .subcommand(narrow_command())
}

/// Parse a filter and print its tree.
pub fn parse_command() -> Command {
    Command::new("parse")
        .about("Parse a filter and print its tree")
        .override_usage(
            "\
  qfilter parse <FILE>
  qfilter parse -q <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  qfilter parse filter.txt                  # JSON tree
  qfilter parse -q 'a EQ 1 AND b EXISTS'    # inline filter
  qfilter parse -q 'a EQ 1' --dump          # indented tree
  echo 'a EQ 1' | qfilter parse -           # stdin"#,
        )
        .arg(filter_path_arg())
        .arg(filter_text_arg())
        .arg(dump_arg())
        .arg(compact_arg())
        .arg(color_arg())
        .arg(verbose_arg())
}

/// Parse and resolve a filter against a schema.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Resolve every statement of a filter against a schema")
        .override_usage(
            "\
  qfilter check --schema <FILE> <FILE>
  qfilter check --schema <FILE> -q <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  qfilter check --schema schema.json filter.txt
  qfilter check --schema schema.json -q 'type EQ "doc"'"#,
        )
        .arg(schema_arg())
        .arg(filter_path_arg())
        .arg(filter_text_arg())
        .arg(color_arg())
        .arg(verbose_arg())
}

/// List overloads matching a signature filter.
pub fn narrow_command() -> Command {
    Command::new("narrow")
        .about("List operator overloads matching a signature filter")
        .after_help(
            r#"EXAMPLES:
  qfilter narrow --schema schema.json --left '$keyword'
  qfilter narrow --schema schema.json --operator EXISTS --unary
  qfilter narrow --schema schema.json --right number --strict"#,
        )
        .arg(schema_arg())
        .arg(left_arg())
        .arg(operator_arg())
        .arg(right_arg())
        .arg(unary_arg())
        .arg(strict_arg())
        .arg(verbose_arg())
}
