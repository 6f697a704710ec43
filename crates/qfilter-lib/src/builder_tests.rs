use std::collections::BTreeMap;

use crate::parser::{Connective, Element, Operand};
use crate::schema::{EntityKind, Operator, Reference, Registry, Signature};
use crate::test_utils::sample_registry;
use crate::Error;

type Terms = BTreeMap<String, Vec<String>>;

fn terms_registry() -> Registry<Terms> {
    let mut seed = Terms::new();
    seed.insert("seed".into(), vec!["x".into()]);

    let mut registry = Registry::with_accumulator(["string", "keyword"], seed);
    registry.add(Reference::new("type", "keyword")).unwrap();
    registry.register(
        Operator::new("$keyword EQ string".parse().unwrap()).with_transform(
            |s, terms: &mut Terms| {
                let field = s.left.operand.to_string();
                let value = s.right.as_ref().map(|r| r.operand.to_string());
                terms.entry(field).or_default().extend(value);
                true
            },
        ),
    );
    registry.register(
        Operator::new("$any EXISTS".parse().unwrap()).with_transform(|s, terms: &mut Terms| {
            terms.entry(s.left.operand.to_string()).or_default();
            true
        }),
    );
    registry.register(
        Operator::new("$keyword NEVER string".parse().unwrap())
            .with_transform(|_, _: &mut Terms| false),
    );
    registry
}

#[test]
fn chained_statements() {
    let registry = sample_registry();
    let built = registry
        .create()
        .and(Operand::reference("type"), "EQ", "doc")
        .or(Operand::reference("content"), "SEARCH", "rust")
        .and_unary(Operand::reference("tags"), "EXISTS")
        .build()
        .unwrap();

    assert_eq!(
        built.group.to_string(),
        r#"type EQ "doc" OR content SEARCH "rust" AND tags EXISTS"#
    );
    assert!(matches!(built.group.elements()[0], Element::Statement(_)));
    assert_eq!(
        built.group.elements()[1],
        Element::Connective(Connective::Or)
    );
    assert_eq!(built.group.statements().count(), 3);
}

#[test]
fn first_connective_is_dropped() {
    let registry = sample_registry();
    let built = registry
        .create()
        .or_unary(Operand::reference("type"), "EXISTS")
        .build()
        .unwrap();
    assert_eq!(built.group.len(), 1);
}

#[test]
fn empty_builder() {
    let registry = sample_registry();
    let built = registry.create().build().unwrap();
    assert!(built.group.is_empty());
}

#[test]
fn built_group_reparses() {
    let registry = sample_registry();
    let built = registry
        .create()
        .and(Operand::reference("type"), "EQ", r#"quote " and \ slash"#)
        .build()
        .unwrap();

    let text = built.group.to_string();
    let reparsed = registry.resolve(&registry.parse(&text).unwrap()).unwrap();
    assert_eq!(reparsed, built.group);
}

#[test]
fn numbers_without_a_text_form_are_rejected() {
    let registry = sample_registry();
    for value in [-1.0, -0.5, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let res = registry
            .create()
            .and(Operand::reference("type"), "EQ", value)
            .build();
        assert!(
            matches!(res, Err(Error::InvalidOperand(_))),
            "{value} should be rejected"
        );
    }

    let err = registry
        .create()
        .and(Operand::reference("type"), "EQ", -1)
        .build()
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "operand `-1` cannot be written as a filter word or literal"
    );
}

#[test]
fn reference_names_must_be_single_words() {
    let registry = sample_registry();
    for name in ["AND", "true", "two words", "a(b", "1st", ".x", ""] {
        let res = registry
            .create()
            .and_unary(Operand::reference(name), "EXISTS")
            .build();
        assert!(
            matches!(res, Err(Error::InvalidOperand(_))),
            "`{name}` should be rejected"
        );
    }
}

#[test]
fn operators_must_be_bare_words() {
    let registry = sample_registry();
    for operator in ["OR", "IS NOT", "1", "(EQ)", ""] {
        let res = registry
            .create()
            .and_unary(Operand::reference("type"), operator)
            .build();
        assert!(
            matches!(res, Err(Error::InvalidOperator(ref op)) if op == operator),
            "`{operator}` should be rejected"
        );
    }
}

#[test]
fn invalid_operand_stops_the_builder() {
    let registry = sample_registry();
    let res = registry
        .create()
        .and(Operand::reference("type"), "EQ", f64::NAN)
        .and(Operand::reference("missing"), "EQ", "x")
        .build();
    assert!(matches!(res, Err(Error::InvalidOperand(ref text)) if text == "NaN"));
}

#[test]
fn accepted_numbers_reparse() {
    let mut registry = Registry::new(["number"]);
    registry.add(Reference::new("n", "number")).unwrap();
    registry.register("$number EQ number".parse::<Signature>().unwrap().into());

    let built = registry
        .create()
        .and(Operand::reference("n"), "EQ", 0.1 + 0.2)
        .or(Operand::reference("n"), "EQ", 1e21)
        .or(Operand::reference("n"), "EQ", 0)
        .build()
        .unwrap();

    let text = built.group.to_string();
    let reparsed = registry.resolve(&registry.parse(&text).unwrap()).unwrap();
    assert_eq!(reparsed, built.group);
}

#[test]
fn transforms_fill_a_copy_of_the_accumulator() {
    let registry = terms_registry();
    let built = registry
        .create()
        .and(Operand::reference("type"), "EQ", "a")
        .or(Operand::reference("type"), "EQ", "b")
        .and_unary(Operand::reference("type"), "EXISTS")
        .build()
        .unwrap();

    assert_eq!(built.accumulator["type"], vec![r#""a""#, r#""b""#]);
    assert_eq!(built.accumulator["seed"], vec!["x"]);

    // The registry's own value is untouched.
    assert_eq!(registry.accumulator().len(), 1);
}

#[test]
fn builders_are_independent() {
    let registry = terms_registry();
    let first = registry.create().and(Operand::reference("type"), "EQ", "a");
    let second = registry.create();
    assert!(first.accumulator().contains_key("type"));
    assert!(!second.accumulator().contains_key("type"));
}

#[test]
fn first_error_is_kept() {
    let registry = sample_registry();
    let res = registry
        .create()
        .and(Operand::reference("type"), "EQ", "doc")
        .and(Operand::reference("missing"), "EQ", "x")
        .and(Operand::reference("content"), "SEARCH", 1)
        .build();

    assert!(matches!(
        res,
        Err(Error::NotFound {
            kind: EntityKind::Reference,
            ..
        })
    ));
}

#[test]
fn no_matching_overload() {
    let registry = sample_registry();
    let res = registry
        .create()
        .and(Operand::reference("content"), "SEARCH", true)
        .build();
    assert!(matches!(res, Err(Error::NoMatchingOverload { .. })));
}

#[test]
fn rejected_statement_stops_the_builder() {
    let registry = terms_registry();
    let res = registry
        .create()
        .and(Operand::reference("type"), "NEVER", "x")
        .and(Operand::reference("type"), "EQ", "y")
        .build();

    let err = res.unwrap_err();
    assert!(matches!(err, Error::TransformRejected(ref s) if s.operator == "NEVER"));
}

#[test]
fn explicit_accumulator() {
    let mut registry: Registry<Vec<Signature>> = Registry::with_accumulator(["keyword"], vec![]);
    registry.add(Reference::new("type", "keyword")).unwrap();
    registry.register(
        Operator::new("$keyword EQ any".parse().unwrap()).with_transform(
            |s, seen: &mut Vec<Signature>| {
                seen.push(s.signature.clone());
                true
            },
        ),
    );

    let built = crate::Builder::new(&registry, Vec::new())
        .and(Operand::reference("type"), "EQ", 3)
        .and(Operand::reference("type"), "EQ", false)
        .build()
        .unwrap();
    assert_eq!(built.accumulator.len(), 2);
}
