use crate::path::{self, get, get_mut, get_or, get_or_else, has, has_path, set, set_in};
use crate::SjrError;
use serde_json::{json, Value};

fn foo() -> Value {
    json!({"foo": {"bar": "foobar"}})
}

// ========== get ==========

#[test]
fn test_get() {
    assert_eq!(get(&foo(), "foo.bar"), Some(&json!("foobar")));
}

#[test]
fn test_get_missing() {
    assert_eq!(get(&foo(), "foo.baz"), None);
    assert_eq!(get(&foo(), "nope"), None);
    assert_eq!(get(&foo(), "foo.bar.deeper"), None);
}

#[test]
fn test_get_null_path_returns_root() {
    let tree = foo();
    assert_eq!(get(&tree, None), Some(&tree));
}

#[test]
fn test_get_not_accessible_root() {
    assert_eq!(get(&json!("scalar"), "foo"), None);
    assert_eq!(get(&Value::Null, None), None);
    assert_eq!(get_or(&json!(42), "foo", &json!("dflt")), &json!("dflt"));
}

#[test]
fn test_get_falsy_values_exist() {
    let tree = json!({"empty": "", "zero": 0, "no": false, "nil": null, "a": {"z": 0}});
    assert_eq!(get(&tree, "empty"), Some(&json!("")));
    assert_eq!(get(&tree, "zero"), Some(&json!(0)));
    assert_eq!(get(&tree, "no"), Some(&json!(false)));
    assert_eq!(get(&tree, "nil"), Some(&Value::Null));
    assert_eq!(get(&tree, "a.z"), Some(&json!(0)));
}

#[test]
fn test_get_literal_dotted_key_first() {
    let tree = json!({"a.b": "literal", "a": {"b": "nested"}});
    assert_eq!(get(&tree, "a.b"), Some(&json!("literal")));
}

#[test]
fn test_get_array_index() {
    let tree = json!({"items": [{"name": "x"}, {"name": "y"}]});
    assert_eq!(get(&tree, "items.1.name"), Some(&json!("y")));
    assert_eq!(get(&tree, "items.2.name"), None);
    assert_eq!(get(&tree, "items.01.name"), None);
    assert_eq!(get(&tree, "items.+1.name"), None);
}

#[test]
fn test_get_or_else_is_lazy() {
    let tree = foo();
    let mut called = false;
    let found = get_or_else(&tree, "foo.bar", || {
        called = true;
        Value::Null
    });
    assert_eq!(found.as_ref(), &json!("foobar"));
    assert!(!called);
    let missing = get_or_else(&tree, "foo.zzz", || json!("computed"));
    assert_eq!(missing.into_owned(), json!("computed"));
}

#[test]
fn test_get_mut() {
    let mut tree = json!({"a.b": "literal", "a": {"b": "nested"}, "xs": [1, 2]});
    *get_mut(&mut tree, "a.b").unwrap() = json!("L");
    *get_mut(&mut tree, "xs.1").unwrap() = json!(20);
    assert_eq!(tree, json!({"a.b": "L", "a": {"b": "nested"}, "xs": [1, 20]}));
    assert!(get_mut(&mut tree, "a.c").is_none());
    assert!(get_mut(&mut tree, "missing").is_none());
}

// ========== has ==========

#[test]
fn test_has() {
    assert!(has_path(&foo(), "foo.bar"));
    assert!(has(&foo(), ["foo", "foo.bar"]));
}

#[test]
fn test_has_any_missing_is_false() {
    assert!(!has(&foo(), ["foo.bar", "foo.baz"]));
    assert!(!has_path(&foo(), "foo.bar.x"));
}

#[test]
fn test_has_empty_inputs() {
    assert!(!has(&foo(), Vec::<&str>::new()));
    assert!(!has(&foo(), None::<&str>));
    assert!(!has_path(&json!({}), "foo"));
    assert!(!has_path(&json!([]), "0"));
    assert!(!has_path(&Value::Null, "foo"));
    assert!(!has_path(&json!("str"), "foo"));
}

#[test]
fn test_has_falsy_value_exists() {
    let tree = json!({"empty": "", "n": null});
    assert!(has_path(&tree, "empty"));
    assert!(has_path(&tree, "n"));
}

#[test]
fn test_has_literal_dotted_key() {
    let tree = json!({"a.b": 1});
    assert!(has_path(&tree, "a.b"));
}

// ========== set ==========

#[test]
fn test_set() {
    let tree = set(json!({}), "foo.bar", json!("foobar")).unwrap();
    assert_eq!(tree, json!({"foo": {"bar": "foobar"}}));
}

#[test]
fn test_set_returns_whole_tree() {
    let tree = json!({"foo1": "bar1", "foo2": {"foo22": "bar22"}});
    let result = set(tree, "foo.bar", json!("foobar")).unwrap();
    assert_eq!(
        result,
        json!({"foo1": "bar1", "foo2": {"foo22": "bar22"}, "foo": {"bar": "foobar"}})
    );
}

#[test]
fn test_set_null_path() {
    let err = set(json!({}), None, json!(1)).unwrap_err();
    assert!(matches!(err, SjrError::InvalidArgument(_)));
}

#[test]
fn test_set_overwrites_scalar_intermediate() {
    let tree = set(json!({"foo": "text"}), "foo.bar", json!(1)).unwrap();
    assert_eq!(tree, json!({"foo": {"bar": 1}}));
}

#[test]
fn test_set_keeps_existing_siblings() {
    let tree = set(json!({"foo": {"a": 1}}), "foo.b", json!(2)).unwrap();
    assert_eq!(tree, json!({"foo": {"a": 1, "b": 2}}));
}

#[test]
fn test_set_on_null_root() {
    let tree = set(Value::Null, "a", json!(true)).unwrap();
    assert_eq!(tree, json!({"a": true}));
}

#[test]
fn test_set_array_index() {
    let tree = set(json!({"xs": ["a", "b"]}), "xs.1", json!("B")).unwrap();
    assert_eq!(tree, json!({"xs": ["a", "B"]}));
    let tree = set(tree, "xs.2", json!("c")).unwrap();
    assert_eq!(tree, json!({"xs": ["a", "B", "c"]}));
    let tree = set(tree, "xs.3.k", json!("v")).unwrap();
    assert_eq!(tree, json!({"xs": ["a", "B", "c", {"k": "v"}]}));
}

#[test]
fn test_set_key_on_array_becomes_object() {
    let tree = set(json!({"xs": []}), "xs.name", json!(1)).unwrap();
    assert_eq!(tree, json!({"xs": {"name": 1}}));

    let tree = set(json!({"xs": ["a"]}), "xs.name.deep", json!(1)).unwrap();
    assert_eq!(tree, json!({"xs": {"0": "a", "name": {"deep": 1}}}));
}

#[test]
fn test_set_index_past_end_becomes_object() {
    let tree = set(json!({"xs": ["a"]}), "xs.5", json!("f")).unwrap();
    assert_eq!(tree, json!({"xs": {"0": "a", "5": "f"}}));
}

#[test]
fn test_set_key_on_array_root() {
    let tree = set(json!([1, 2]), "k", json!("v")).unwrap();
    assert_eq!(tree, json!({"0": 1, "1": 2, "k": "v"}));
}

#[test]
fn test_set_in_place() {
    let mut tree = foo();
    set_in(&mut tree, "foo.bar", json!("short")).unwrap();
    assert_eq!(get(&tree, "foo.bar"), Some(&json!("short")));
}

// ========== Segments ==========

#[test]
fn test_parse_index() {
    assert_eq!(path::parse_index("0"), Some(0));
    assert_eq!(path::parse_index("42"), Some(42));
    assert_eq!(path::parse_index("007"), None);
    assert_eq!(path::parse_index(""), None);
    assert_eq!(path::parse_index("-1"), None);
}
