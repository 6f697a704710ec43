use std::path::PathBuf;

use super::input::{load_filter, load_schema};
use super::{fail, fail_with};

pub struct CheckArgs {
    pub schema: PathBuf,
    pub filter_path: Option<PathBuf>,
    pub filter_text: Option<String>,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let registry = load_schema(&args.schema).unwrap_or_else(|e| fail(e));
    let source = load_filter(args.filter_path.as_deref(), args.filter_text.as_deref())
        .unwrap_or_else(|e| fail(e));

    let resolved = registry
        .parse(&source.text)
        .and_then(|group| registry.resolve(&group));
    let resolved = match resolved {
        Ok(resolved) => resolved,
        Err(e) => fail_with(&e, &source, args.color),
    };

    for statement in resolved.statements() {
        println!("{}  =>  {}", statement, statement.signature);
    }
}
