use std::path::PathBuf;

use qfilter_lib::{Filter, TypeToken};

use super::fail;
use super::input::load_schema;

pub struct NarrowArgs {
    pub schema: PathBuf,
    pub left: Option<String>,
    pub operator: Option<String>,
    pub right: Option<String>,
    pub unary: bool,
    pub strict: bool,
}

pub fn run(args: NarrowArgs) {
    let registry = load_schema(&args.schema).unwrap_or_else(|e| fail(e));
    let filter = build_filter(&args).unwrap_or_else(|e| fail(e));

    let overloads = if args.strict {
        registry.narrow_strict(&filter).unwrap_or_else(|e| fail(e))
    } else {
        registry.narrow(&filter)
    };

    for operator in overloads.iter() {
        println!("{}", operator.signature());
    }
}

pub(crate) fn build_filter(args: &NarrowArgs) -> Result<Filter, qfilter_lib::Error> {
    let mut filter = Filter::new();
    if let Some(left) = &args.left {
        filter = filter.left(left.parse::<TypeToken>()?);
    }
    if let Some(operator) = &args.operator {
        filter = filter.operator(operator.clone());
    }
    if let Some(right) = &args.right {
        filter = filter.right(right.parse::<TypeToken>()?);
    } else if args.unary {
        filter = filter.unary();
    }
    Ok(filter)
}
