//! Dot-notation access into a JSON tree.
//!
//! A path such as `"foo.bar.0"` is split on `.` and each segment is looked up
//! as an object key, or as a decimal index when the node is an array. Keys
//! that themselves contain dots are found by checking the whole path as a
//! literal key of the root before splitting it.

use crate::error::{Result, SjrError};
use serde_json::{Map, Value};
use std::borrow::Cow;

/// Look up `path` in `tree`. A `None` path returns the root itself.
///
/// Existence decides the result: present values are returned even when they
/// are `""`, `0`, `false` or `null`.
pub fn get<'a, 'p>(tree: &'a Value, path: impl Into<Option<&'p str>>) -> Option<&'a Value> {
    if !is_accessible(tree) {
        return None;
    }
    let Some(path) = path.into() else {
        return Some(tree);
    };
    if let Some(found) = child(tree, path) {
        return Some(found);
    }
    if !path.contains('.') {
        return None;
    }
    walk(tree, path)
}

/// Mutable counterpart of [`get`]: same literal-key-first resolution, never
/// creates anything.
pub fn get_mut<'a>(tree: &'a mut Value, path: &str) -> Option<&'a mut Value> {
    if child(tree, path).is_some() {
        return child_mut(tree, path);
    }
    path.split('.').try_fold(tree, child_mut)
}

/// Like [`get`], falling back to `default` when nothing is found.
pub fn get_or<'a, 'p>(
    tree: &'a Value,
    path: impl Into<Option<&'p str>>,
    default: &'a Value,
) -> &'a Value {
    get(tree, path).unwrap_or(default)
}

/// Like [`get`], computing the fallback only when nothing is found.
pub fn get_or_else<'a, 'p>(
    tree: &'a Value,
    path: impl Into<Option<&'p str>>,
    default: impl FnOnce() -> Value,
) -> Cow<'a, Value> {
    match get(tree, path) {
        Some(found) => Cow::Borrowed(found),
        None => Cow::Owned(default()),
    }
}

/// True when every path in `paths` exists in `tree`.
///
/// An empty list of paths, or a root that is null, a scalar, or an empty
/// container, never matches.
pub fn has<I, P>(tree: &Value, paths: I) -> bool
where
    I: IntoIterator<Item = P>,
    P: AsRef<str>,
{
    let populated = match tree {
        Value::Object(map) => !map.is_empty(),
        Value::Array(items) => !items.is_empty(),
        _ => false,
    };
    if !populated {
        return false;
    }

    let mut checked = false;
    for path in paths {
        checked = true;
        let path = path.as_ref();
        if child(tree, path).is_some() {
            continue;
        }
        if walk(tree, path).is_none() {
            return false;
        }
    }
    checked
}

/// Single-path form of [`has`].
pub fn has_path(tree: &Value, path: &str) -> bool {
    has(tree, [path])
}

/// Assign `value` at `path` and return the tree.
///
/// Missing intermediate keys, and intermediate values that are not
/// containers, are replaced by empty objects. Only a `None` path fails.
pub fn set<'p>(mut tree: Value, path: impl Into<Option<&'p str>>, value: Value) -> Result<Value> {
    set_in(&mut tree, path, value)?;
    Ok(tree)
}

/// In-place form of [`set`].
pub fn set_in<'p>(tree: &mut Value, path: impl Into<Option<&'p str>>, value: Value) -> Result<()> {
    let path = path
        .into()
        .ok_or_else(|| SjrError::invalid("Invalid null key provided"))?;

    let (parents, last) = match path.rsplit_once('.') {
        Some((parents, last)) => (Some(parents), last),
        None => (None, path),
    };

    let mut node = tree;
    for segment in parents.into_iter().flat_map(|p| p.split('.')) {
        node = slot(node, segment);
    }
    *slot(node, last) = value;
    Ok(())
}

fn is_accessible(node: &Value) -> bool {
    matches!(node, Value::Object(_) | Value::Array(_))
}

fn walk<'a>(tree: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(tree, child)
}

fn child<'a>(node: &'a Value, segment: &str) -> Option<&'a Value> {
    match node {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => parse_index(segment).and_then(|i| items.get(i)),
        _ => None,
    }
}

fn child_mut<'a>(node: &'a mut Value, segment: &str) -> Option<&'a mut Value> {
    match node {
        Value::Object(map) => map.get_mut(segment),
        Value::Array(items) => match parse_index(segment) {
            Some(i) => items.get_mut(i),
            None => None,
        },
        _ => None,
    }
}

/// Mutable slot for `segment` under `node`, creating it when absent.
///
/// An array keeps its shape while `segment` is an index `<= len` (`== len`
/// appends). Any other segment turns it into an object keyed by the old
/// indices, and scalars and null become empty objects.
fn slot<'a>(node: &'a mut Value, segment: &str) -> &'a mut Value {
    let index = match &*node {
        Value::Array(items) => parse_index(segment).filter(|&i| i <= items.len()),
        _ => None,
    };
    match (node, index) {
        (Value::Array(items), Some(index)) => {
            if index == items.len() {
                items.push(Value::Null);
            }
            &mut items[index]
        }
        (Value::Object(map), _) => map.entry(segment).or_insert(Value::Null),
        (other, _) => {
            *other = Value::Object(into_map(other.take()));
            slot(other, segment)
        }
    }
}

fn into_map(node: Value) -> Map<String, Value> {
    match node {
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(i, v)| (i.to_string(), v))
            .collect(),
        _ => Map::new(),
    }
}

/// Canonical decimal index: digits only, no leading zeros.
pub(crate) fn parse_index(segment: &str) -> Option<usize> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if segment.len() > 1 && segment.starts_with('0') {
        return None;
    }
    segment.parse().ok()
}
