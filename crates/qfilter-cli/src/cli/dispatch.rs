//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::narrow::NarrowArgs;
use crate::commands::parse::ParseArgs;

pub struct ParseParams {
    pub filter_path: Option<PathBuf>,
    pub filter_text: Option<String>,
    pub dump: bool,
    pub compact: bool,
    pub color: ColorChoice,
}

impl ParseParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            filter_path: m.get_one::<PathBuf>("filter_path").cloned(),
            filter_text: m.get_one::<String>("filter_text").cloned(),
            dump: m.get_flag("dump"),
            compact: m.get_flag("compact"),
            color: parse_color(m),
        }
    }
}

impl From<ParseParams> for ParseArgs {
    fn from(p: ParseParams) -> Self {
        Self {
            filter_path: p.filter_path,
            filter_text: p.filter_text,
            dump: p.dump,
            compact: p.compact,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub schema: PathBuf,
    pub filter_path: Option<PathBuf>,
    pub filter_text: Option<String>,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            schema: schema_path(m),
            filter_path: m.get_one::<PathBuf>("filter_path").cloned(),
            filter_text: m.get_one::<String>("filter_text").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            schema: p.schema,
            filter_path: p.filter_path,
            filter_text: p.filter_text,
            color: p.color.should_colorize(),
        }
    }
}

pub struct NarrowParams {
    pub schema: PathBuf,
    pub left: Option<String>,
    pub operator: Option<String>,
    pub right: Option<String>,
    pub unary: bool,
    pub strict: bool,
}

impl NarrowParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            schema: schema_path(m),
            left: m.get_one::<String>("left").cloned(),
            operator: m.get_one::<String>("operator").cloned(),
            right: m.get_one::<String>("right").cloned(),
            unary: m.get_flag("unary"),
            strict: m.get_flag("strict"),
        }
    }
}

impl From<NarrowParams> for NarrowArgs {
    fn from(p: NarrowParams) -> Self {
        Self {
            schema: p.schema,
            left: p.left,
            operator: p.operator,
            right: p.right,
            unary: p.unary,
            strict: p.strict,
        }
    }
}

/// Count of `-v` flags on a subcommand.
pub fn verbosity(m: &ArgMatches) -> u8 {
    m.get_count("verbose")
}

// `--schema` is required, so clap has rejected the command before we get here
// if it is missing.
fn schema_path(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("schema").cloned().unwrap_or_default()
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
