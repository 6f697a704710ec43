use indoc::indoc;

use super::config::SchemaConfig;
use super::registry::EntityKind;
use crate::Error;

fn load(json: &str) -> SchemaConfig {
    serde_json::from_str(json).unwrap()
}

#[test]
fn full_config() {
    let config = load(indoc! {r#"
        {
          "types": ["string", "number", "keyword", "text"],
          "references": [
            { "name": "type", "type": "keyword" },
            { "name": "content", "type": "text" },
            { "name": "tags", "type": "keyword", "array": true }
          ],
          "operators": ["$keyword EQ string", "$text SEARCH string", "$any EXISTS"]
        }
    "#});
    let registry = config.into_registry().unwrap();

    assert_eq!(registry.types().collect::<Vec<_>>(), vec!["string", "number", "keyword", "text"]);
    assert_eq!(registry.references().count(), 3);
    assert_eq!(registry.reference("tags").unwrap().token().to_string(), "$keyword[]");
    assert_eq!(registry.overloads().len(), 3);
    assert!(registry.overloads()[2].signature().is_unary());
}

#[test]
fn sections_are_optional() {
    let registry = load("{}").into_registry().unwrap();
    assert_eq!(registry.types().count(), 0);
    assert_eq!(registry.overloads().len(), 0);
}

#[test]
fn bad_signature_fails_deserialization() {
    let err = serde_json::from_str::<SchemaConfig>(r#"{ "operators": ["EQ"] }"#).unwrap_err();
    assert!(err.to_string().contains(r#"invalid operator signature "EQ""#), "{err}");
}

#[test]
fn unknown_fields_are_rejected() {
    assert!(serde_json::from_str::<SchemaConfig>(r#"{ "typez": [] }"#).is_err());
}

#[test]
fn duplicate_reference() {
    let config = load(indoc! {r#"
        {
          "types": ["keyword"],
          "references": [
            { "name": "type", "type": "keyword" },
            { "name": "type", "type": "keyword" }
          ]
        }
    "#});
    assert!(matches!(config.into_registry(), Err(Error::AlreadyExists(_))));
}

#[test]
fn undeclared_reference_type() {
    let config = load(r#"{ "types": [], "references": [{ "name": "a", "type": "text" }] }"#);
    assert!(matches!(
        config.into_registry(),
        Err(Error::NotFound {
            kind: EntityKind::Type,
            ..
        })
    ));
}
