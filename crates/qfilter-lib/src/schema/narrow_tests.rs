use super::narrow::{Filter, RightFilter, describe_candidates};
use super::registry::Registry;
use super::types::TypeToken;
use crate::test_utils::{sample_registry, signatures};
use crate::{Error, Signature};

fn token(text: &str) -> TypeToken {
    text.parse().unwrap()
}

fn registry_of(signatures: &[&str]) -> Registry {
    let mut registry = Registry::new(["string", "number", "keyword", "text"]);
    for signature in signatures {
        registry.register(signature.parse::<Signature>().unwrap().into());
    }
    registry
}

#[test]
fn narrow_by_left_and_operator() {
    let registry = registry_of(&["$keyword EQ string"]);
    let res = registry.narrow(&Filter::new().left(token("$keyword")).operator("EQ"));
    assert_eq!(signatures(res.iter()), vec!["$keyword EQ string"]);
}

#[test]
fn narrow_unary_only() {
    let registry = registry_of(&["$any EXISTS", "$keyword EQ string"]);
    let res = registry.narrow(&Filter::new().operator("EXISTS").unary());
    assert_eq!(signatures(res.iter()), vec!["$any EXISTS"]);

    let res = registry.narrow(&Filter::new().unary());
    assert_eq!(signatures(res.iter()), vec!["$any EXISTS"]);
}

#[test]
fn empty_filter_keeps_everything() {
    let registry = sample_registry();
    let res = registry.narrow(&Filter::new());
    assert_eq!(res.len(), registry.overloads().len());
    assert_eq!(res.indices(), &[0, 1, 2, 3]);
}

#[test]
fn universal_left_equals_no_filter() {
    let registry = sample_registry();
    let all = registry.narrow(&Filter::new());
    let universal = registry.narrow(&Filter::new().left(TypeToken::universal()));
    assert_eq!(universal.indices(), all.indices());
}

#[test]
fn universal_overload_matches_any_left() {
    let registry = sample_registry();
    let res = registry.narrow(&Filter::new().left(token("$text")));
    assert_eq!(
        signatures(res.iter()),
        vec!["$text SEARCH string", "$any EXISTS"]
    );
}

#[test]
fn right_side_matching() {
    let registry = registry_of(&["$number GT number", "$keyword EQ string", "$any EQ any"]);

    let res = registry.narrow(&Filter::new().right(token("number")));
    assert_eq!(signatures(res.iter()), vec!["$number GT number", "$any EQ any"]);

    let res = registry.narrow(&Filter::new().right(token("$keyword")));
    assert!(res.is_empty());
}

#[test]
fn universal_right_includes_unary() {
    let registry = registry_of(&["$any EXISTS", "$keyword EQ string"]);
    let res = registry.narrow(&Filter::new().right(TypeToken::universal()));
    assert_eq!(res.len(), 2);

    let res = registry.narrow(&Filter::new().right(token("string")));
    assert_eq!(signatures(res.iter()), vec!["$keyword EQ string"]);
}

#[test]
fn array_references() {
    let registry = sample_registry();
    let res = registry.narrow(&Filter::new().left(token("$any[]")));
    assert_eq!(
        signatures(res.iter()),
        vec!["$any EXISTS", "$keyword[] CONTAINS string"]
    );
}

#[test]
fn narrowing_is_a_subset() {
    let registry = sample_registry();
    let all = registry.narrow(&Filter::new());
    let filters = [
        Filter::new().operator("EQ"),
        Filter::new().left(token("$keyword")),
        Filter::new().right(token("string")),
        Filter::new().unary(),
        Filter::new().left(token("$text")).operator("SEARCH"),
    ];
    for filter in &filters {
        let res = registry.narrow(filter);
        assert!(
            res.indices().iter().all(|i| all.indices().contains(i)),
            "{filter}"
        );
    }
}

#[test]
fn tighter_filter_is_monotonic() {
    let registry = sample_registry();
    let loose = registry.narrow(&Filter::new().left(token("$keyword")));
    let tight = registry.narrow(&Filter::new().left(token("$keyword")).operator("EQ"));
    assert!(tight.len() <= loose.len());
    assert!(tight.indices().iter().all(|i| loose.indices().contains(i)));
}

#[test]
fn renarrowing_is_idempotent() {
    let registry = sample_registry();
    let filter = Filter::new().left(token("$keyword"));
    let once = registry.narrow(&filter);
    let twice = once.narrow(&filter);
    assert_eq!(once.len(), twice.len());
    assert_eq!(once.indices(), twice.indices());
}

#[test]
fn views_share_the_registry() {
    let registry = sample_registry();
    let view = registry.narrow(&Filter::new().operator("SEARCH"));
    assert!(std::ptr::eq(view.registry(), &registry));
    assert_eq!(view.registry().reference("content").unwrap().ty, "text");

    let (index, operator) = view.first().unwrap();
    assert_eq!(index, 1);
    assert_eq!(operator.name(), "SEARCH");
}

#[test]
fn strict_failure_lists_candidates() {
    let registry = registry_of(&["$keyword EQ string", "$any EXISTS"]);
    let filter = Filter::new().operator("LIKE");
    let err = registry.narrow_strict(&filter).unwrap_err();

    let Error::NoMatchingOverload {
        filter: attempted,
        candidates,
    } = &err
    else {
        panic!("unexpected error: {err}");
    };
    assert_eq!(*attempted, filter);
    assert_eq!(candidates.len(), 2);
    assert_eq!(
        err.to_string(),
        "no overload matches {operator: LIKE}: expected one of: $keyword EQ string, $any EXISTS"
    );
}

#[test]
fn strict_failure_without_overloads() {
    let registry = registry_of(&[]);
    let err = registry.narrow_strict(&Filter::new()).unwrap_err();
    assert_eq!(err.to_string(), "no overload matches {}: no overloads registered");
}

#[test]
fn strict_on_a_view_reports_view_candidates() {
    let registry = sample_registry();
    let view = registry.narrow(&Filter::new().operator("EQ"));
    let err = view.narrow_strict(&Filter::new().unary()).unwrap_err();
    let Error::NoMatchingOverload { candidates, .. } = &err else {
        panic!("unexpected error: {err}");
    };
    assert_eq!(*candidates, vec!["$keyword EQ string".parse::<Signature>().unwrap()]);
}

#[test]
fn strict_success() {
    let registry = sample_registry();
    let res = registry
        .narrow_strict(&Filter::new().operator("EXISTS"))
        .unwrap();
    assert_eq!(res.len(), 1);
}

#[test]
fn filter_display() {
    let filter = Filter::new()
        .left(token("$keyword"))
        .operator("EQ")
        .right(token("string"));
    assert_eq!(filter.to_string(), "{left: $keyword, operator: EQ, right: string}");
    assert_eq!(Filter::new().unary().to_string(), "{right: null}");
    assert_eq!(Filter::new().right, RightFilter::Unconstrained);
}

#[test]
fn candidate_descriptions() {
    assert_eq!(describe_candidates(&[]), "no overloads registered");
    let one: Signature = "$any EXISTS".parse().unwrap();
    assert_eq!(describe_candidates(&[one]), "expected one of: $any EXISTS");
}
