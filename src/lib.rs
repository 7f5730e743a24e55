#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;

#[cfg(feature = "assign")]
pub mod assign;
#[cfg(feature = "assign")]
pub use assign::{Assign, AssignError, Assignment};

#[cfg(feature = "delete")]
pub mod delete;
#[cfg(feature = "delete")]
pub use delete::{Delete, DeleteError};

#[cfg(feature = "resolve")]
pub mod resolve;
#[cfg(feature = "resolve")]
pub use resolve::{Resolve, ResolveError, ResolveMut};

pub mod diagnostic;
pub mod index;
pub use index::Index;
pub mod prelude;

mod error;
pub use error::{Error, InvalidPointer};

mod pointer;
pub use pointer::{ParseError, Pointer, PointerBuf};

mod token;
pub use token::{EncodingError, Token, Tokens};

#[cfg(test)]
mod arbitrary;

/*
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
╔══════════════════════════════════════════════════════════════════════════════╗
║                                                                              ║
║                                  Shorthand                                   ║
║                                 ¯¯¯¯¯¯¯¯¯¯¯                                  ║
╚══════════════════════════════════════════════════════════════════════════════╝
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
*/

#[cfg(feature = "json")]
fn parse(pointer: &str) -> Result<&Pointer, InvalidPointer> {
    use diagnostic::Diagnose;
    Pointer::parse(pointer).map_err(Error::from).diagnose(pointer)
}

/// Returns `true` if `pointer` is a valid JSON Pointer that resolves within
/// `value`.
///
/// ```
/// # use serde_json::json;
/// let data = json!({ "foo": [] });
/// assert!(jsonpointer::has(&data, "/foo"));
/// assert!(jsonpointer::has(&data, ""));
/// assert!(!jsonpointer::has(&data, "/fooo"));
/// assert!(!jsonpointer::has(&data, "/foo/0"));
/// assert!(!jsonpointer::has(&data, "foo"));
/// ```
#[cfg(all(feature = "json", feature = "resolve"))]
pub fn has(value: &serde_json::Value, pointer: &str) -> bool {
    Pointer::parse(pointer).is_ok_and(|ptr| value.resolve(ptr).is_ok())
}

/// Returns a reference to the value `pointer` addresses within `value`.
///
/// The empty pointer (`""`) addresses `value` itself.
///
/// ## Errors
/// Returns [`InvalidPointer`] if `pointer` is malformed or does not resolve.
///
/// ```
/// # use serde_json::json;
/// let data = json!({ "foo": [1, 3, true] });
/// assert_eq!(jsonpointer::get(&data, "/foo/2").unwrap(), &json!(true));
/// assert_eq!(jsonpointer::get(&data, "").unwrap(), &data);
/// ```
#[cfg(all(feature = "json", feature = "resolve"))]
pub fn get<'v>(
    value: &'v serde_json::Value,
    pointer: &str,
) -> Result<&'v serde_json::Value, InvalidPointer> {
    use diagnostic::Diagnose;
    let ptr = parse(pointer)?;
    value.resolve(ptr).map_err(Error::from).diagnose(pointer)
}

/// Assigns `new_value` at the location `pointer` addresses within `value`,
/// returning the value it replaced, if any.
///
/// A missing object key is inserted; an array element must already exist.
///
/// ## Errors
/// Returns [`InvalidPointer`] if `pointer` is malformed, empty, or its parent
/// does not resolve to a container that can hold the value. `value` is left
/// untouched on error.
///
/// ```
/// # use serde_json::json;
/// let mut data = json!({ "foo": 2 });
/// assert_eq!(jsonpointer::set(&mut data, "/foo", true).unwrap(), Some(json!(2)));
/// assert_eq!(data, json!({ "foo": true }));
/// ```
#[cfg(all(feature = "json", feature = "assign"))]
pub fn set(
    value: &mut serde_json::Value,
    pointer: &str,
    new_value: impl Into<serde_json::Value>,
) -> Result<Option<serde_json::Value>, InvalidPointer> {
    use diagnostic::Diagnose;
    let ptr = parse(pointer)?;
    value
        .assign(ptr, new_value)
        .map(|assignment| assignment.replaced)
        .map_err(Error::from)
        .diagnose(pointer)
}

/// Removes the value `pointer` addresses from `value`, returning the
/// resulting document.
///
/// Use [`Delete::delete`] to get hold of the removed value instead.
///
/// ## Errors
/// Returns [`InvalidPointer`] if `pointer` is malformed, empty, or does not
/// address an existing value.
///
/// ```
/// # use serde_json::json;
/// let data = json!({ "foo": [1, 3, true] });
/// let data = jsonpointer::remove(data, "/foo/1").unwrap();
/// assert_eq!(data, json!({ "foo": [1, true] }));
/// ```
#[cfg(all(feature = "json", feature = "delete"))]
pub fn remove(
    mut value: serde_json::Value,
    pointer: &str,
) -> Result<serde_json::Value, InvalidPointer> {
    use diagnostic::Diagnose;
    let ptr = parse(pointer)?;
    value.delete(ptr).map_err(Error::from).diagnose(pointer)?;
    Ok(value)
}

/*
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
╔══════════════════════════════════════════════════════════════════════════════╗
║                                                                              ║
║                                    Tests                                     ║
║                                   ¯¯¯¯¯¯¯                                    ║
╚══════════════════════════════════════════════════════════════════════════════╝
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
*/

#[cfg(all(test, feature = "json", feature = "assign", feature = "delete"))]
mod tests {
    use super::*;
    use alloc::{string::ToString, vec::Vec};
    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;
    use serde_json::{json, Value};

    #[test]
    fn get_array_element() {
        let data = json!({"foo": [1, 3, true]});
        assert_eq!(get(&data, "/foo/2").unwrap(), &json!(true));
    }

    #[test]
    fn set_replaces_existing_key() {
        let mut data = json!({"foo": 2});
        set(&mut data, "/foo", true).unwrap();
        assert_eq!(data, json!({"foo": true}));
    }

    #[test]
    fn remove_object_key() {
        let data = json!({"foo": 2, "bar": 3});
        assert_eq!(remove(data, "/bar").unwrap(), json!({"foo": 2}));
    }

    #[test]
    fn remove_array_element() {
        let data = json!({"foo": [1, 3, true]});
        assert_eq!(remove(data, "/foo/1").unwrap(), json!({"foo": [1, true]}));
    }

    #[test]
    fn has_rejects_prefix_of_key() {
        assert!(!has(&json!({"foo": []}), "/fooo"));
    }

    #[test]
    fn numeric_key_is_an_object_key() {
        let data = json!({"0": [9, 8, 7]});
        assert_eq!(get(&data, "/0/1").unwrap(), &json!(8));
    }

    #[test]
    fn escaped_tokens() {
        let data = json!({"foo~bar/baz": ["a", "b"]});
        assert_eq!(get(&data, "/foo~0bar~1baz/1").unwrap(), &json!("b"));
        assert!(!has(&data, "/foo~bar~1baz/1"));
    }

    #[test]
    fn empty_pointer() {
        let data = json!({"foo": 3.14});
        assert!(has(&data, ""));
        assert_eq!(get(&data, "").unwrap(), &data);

        let err = set(&mut data.clone(), "", 1).unwrap_err();
        assert!(err.is_root());
        assert_eq!(
            err.to_string(),
            r#"Invalid JSON pointer: "": assignment to the document root is not supported"#
        );

        let err = remove(data, "").unwrap_err();
        assert!(err.is_root());
    }

    #[test]
    fn slash_is_the_empty_key() {
        let data = json!({"foo": 3.14});
        assert!(!has(&data, "/"));
        assert!(get(&data, "/").unwrap_err().is_not_found());
        assert!(remove(data.clone(), "/").unwrap_err().is_not_found());

        let mut data = data;
        assert_eq!(set(&mut data, "/", "empty").unwrap(), None);
        assert_eq!(get(&data, "/").unwrap(), "empty");
    }

    #[test]
    fn malformed_pointers() {
        let data = json!({"foo": 3.14});
        for ptr in ["foo", "/foo~", "/foo~2"] {
            assert!(!has(&data, ptr), "{ptr}");
            let err = get(&data, ptr).unwrap_err();
            assert!(err.is_parse(), "{ptr}");
            assert_eq!(err.subject(), ptr);
        }
        let err = get(&data, "foo").unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"Invalid JSON pointer: "foo": json pointer is malformed as it does not start with a slash ('/')"#
        );
    }

    #[test]
    fn lookup_failures() {
        let data = json!({"foo": [1, {"bar": null}], "num": 3.14});

        let err = get(&data, "/foo/2").unwrap_err();
        assert!(err.is_out_of_bounds());
        assert_eq!(err.offset(), 4);

        let err = get(&data, "/foo/-").unwrap_err();
        assert!(err.is_out_of_bounds());

        let err = get(&data, "/foo/01").unwrap_err();
        assert!(err.is_failed_to_parse_index());

        let err = get(&data, "/foo/x").unwrap_err();
        assert!(err.is_failed_to_parse_index());

        let err = get(&data, "/num/0").unwrap_err();
        assert!(err.is_unreachable());
        assert_eq!(err.offset(), 4);

        // null is a scalar too
        let err = get(&data, "/foo/1/bar/baz").unwrap_err();
        assert!(err.is_unreachable());
        assert_eq!(err.offset(), 10);

        let err = get(&data, "/foo/1/baz").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.offset(), 6);
    }

    #[test]
    fn set_does_not_append_or_create_paths() {
        let original = json!({"list": [1], "obj": {}});
        let mut data = original.clone();
        assert!(set(&mut data, "/list/1", 2).unwrap_err().is_out_of_bounds());
        assert!(set(&mut data, "/list/-", 2).unwrap_err().is_out_of_bounds());
        assert!(set(&mut data, "/obj/a/b", 2).unwrap_err().is_not_found());
        assert!(set(&mut data, "/list/0/x", 2).unwrap_err().is_unreachable());
        assert_eq!(data, original);
    }

    #[test]
    fn remove_picks_the_right_element() {
        let data = json!({"list": ["first", "second", "third"]});
        let data = remove(data, "/list/1").unwrap();
        assert_eq!(data, json!({"list": ["first", "third"]}));
        assert_eq!(get(&data, "/list/1").unwrap(), "third");
        assert!(!has(&data, "/list/2"));
    }

    #[test]
    fn remove_from_top_level_array() {
        let data = remove(json!([1, 2, 3]), "/2").unwrap();
        assert_eq!(data, json!([1, 2]));
    }

    #[test]
    #[cfg(feature = "std")]
    fn invalid_pointer_is_an_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        let err = get(&json!({}), "/a").unwrap_err();
        assert_error(&err);
    }

    /// Every value in `doc` paired with the pointer that addresses it.
    fn walk(doc: &Value) -> Vec<(PointerBuf, Value)> {
        let mut found = Vec::new();
        let mut stack = alloc::vec![(PointerBuf::new(), doc)];
        while let Some((ptr, value)) = stack.pop() {
            match value {
                Value::Object(obj) => {
                    for (key, child) in obj {
                        let mut child_ptr = ptr.clone();
                        child_ptr.push_back(key);
                        stack.push((child_ptr, child));
                    }
                }
                Value::Array(array) => {
                    for (i, child) in array.iter().enumerate() {
                        let mut child_ptr = ptr.clone();
                        child_ptr.push_back(i);
                        stack.push((child_ptr, child));
                    }
                }
                _ => {}
            }
            found.push((ptr, value.clone()));
        }
        found
    }

    fn sample() -> Value {
        json!({
            "foo": ["bar", "baz"],
            "": 0,
            "a/b": 1,
            "m~n": {"deep": [null, {"x": false}]},
            "0": [9, 8, 7]
        })
    }

    #[test]
    fn every_node_is_reachable() {
        let doc = sample();
        for (ptr, node) in walk(&doc) {
            assert!(has(&doc, ptr.as_str()), "{ptr}");
            assert_eq!(get(&doc, ptr.as_str()).unwrap(), &node, "{ptr}");
            // repeated lookups agree
            assert_eq!(get(&doc, ptr.as_str()).unwrap(), get(&doc, ptr.as_str()).unwrap());
        }
    }

    #[test]
    fn set_then_get() {
        let mut doc = sample();
        for (ptr, _) in walk(&sample()).into_iter().filter(|(p, _)| !p.is_root()) {
            set(&mut doc, ptr.as_str(), "marker").unwrap();
            assert_eq!(get(&doc, ptr.as_str()).unwrap(), "marker", "{ptr}");
            doc = sample();
        }
        set(&mut doc, "/m~0n/new", 1).unwrap();
        assert_eq!(get(&doc, "/m~0n/new").unwrap(), 1);
    }

    #[test]
    fn remove_then_absent() {
        let doc = sample();
        for (ptr, _) in walk(&doc).into_iter().filter(|(p, _)| !p.is_root()) {
            let is_index = ptr
                .last()
                .is_some_and(|t| t.to_index().is_ok())
                && ptr
                    .parent()
                    .and_then(|p| get(&doc, p.as_str()).ok())
                    .is_some_and(Value::is_array);
            let removed = remove(doc.clone(), ptr.as_str()).unwrap();
            if !is_index {
                assert!(!has(&removed, ptr.as_str()), "{ptr}");
            }
        }
    }

    #[quickcheck]
    fn qc_unknown_keys_are_absent(key: alloc::string::String) -> TestResult {
        let doc = sample();
        let Value::Object(obj) = &doc else {
            return TestResult::error("sample is an object");
        };
        if obj.contains_key(&key) {
            return TestResult::discard();
        }
        let ptr = PointerBuf::from_tokens([&key]);
        TestResult::from_bool(
            !has(&doc, ptr.as_str()) && get(&doc, ptr.as_str()).is_err(),
        )
    }

    #[quickcheck]
    fn qc_set_inserts_any_key(key: alloc::string::String, n: i64) -> bool {
        let mut doc = json!({});
        let ptr = PointerBuf::from_tokens([&key]);
        set(&mut doc, ptr.as_str(), n).is_ok_and(|replaced| replaced.is_none())
            && doc.get(&key) == Some(&json!(n))
            && get(&doc, ptr.as_str()).is_ok_and(|v| v == &json!(n))
    }

    #[test]
    fn error_subject_is_the_input() {
        let err = remove(json!({"a": 1}), "/b").unwrap_err();
        assert_eq!(err.subject(), "/b");
        assert_eq!(err.original().to_string(), "pointer starting at offset 0 not found");
    }
}
