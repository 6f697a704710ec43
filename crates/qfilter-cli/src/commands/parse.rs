use std::path::PathBuf;

use super::input::load_filter;
use super::{fail, fail_with};

pub struct ParseArgs {
    pub filter_path: Option<PathBuf>,
    pub filter_text: Option<String>,
    pub dump: bool,
    pub compact: bool,
    pub color: bool,
}

pub fn run(args: ParseArgs) {
    let source = load_filter(args.filter_path.as_deref(), args.filter_text.as_deref())
        .unwrap_or_else(|e| fail(e));

    let group = match qfilter_lib::parse(&source.text) {
        Ok(group) => group,
        Err(e) => fail_with(&e, &source, args.color),
    };

    if args.dump {
        println!("{}", group.dump());
        return;
    }

    let json = if args.compact {
        serde_json::to_string(&group)
    } else {
        serde_json::to_string_pretty(&group)
    };
    match json {
        Ok(json) => println!("{}", json),
        Err(e) => fail(e),
    }
}
