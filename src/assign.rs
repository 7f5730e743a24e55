//! # Assign values based on JSON [`Pointer`]s
//!
//! This module provides the [`Assign`] trait which allows for the assignment of
//! values based on a JSON Pointer.
//!
//! Assignment never creates intermediate structure: every token but the last
//! must already resolve to a container. The last token is then handled by the
//! kind of that container:
//!
//! - An object is upserted, so a missing key is created.
//! - An array must already hold an element at that index, which is replaced;
//!   assignment does not append.
//! - The root pointer cannot be assigned to; whoever owns the document
//!   replaces it directly.
//!
//! Nothing is written unless the whole path resolves.
//!
//! ```rust
//! # use jsonpointer::{Assign, Pointer};
//! # use serde_json::json;
//! let mut data = json!({ "foo": [1, 3, true] });
//! let replaced = data.assign(Pointer::from_static("/foo/2"), false).unwrap().replaced;
//! assert_eq!(replaced, Some(json!(true)));
//!
//! data.assign(Pointer::from_static("/bar"), "new").unwrap();
//! assert_eq!(data, json!({ "foo": [1, 3, false], "bar": "new" }));
//! ```
//!
//! ## Feature Flag
//! This module is enabled by default with the `"assign"` feature flag.
//!
//! ## Provided implementations
//!
//! | Lang  |     value type      | feature flag | Default |
//! | ----- |: ----------------- :|: ---------- :| ------- |
//! | JSON  | `serde_json::Value` |   `"json"`   |   ✓     |
//! | TOML  |    `toml::Value`    |   `"toml"`   |         |

use crate::{
    index::{OutOfBoundsError, ParseIndexError},
    resolve::ResolveError,
    Pointer,
};
use core::fmt;

/*
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
╔══════════════════════════════════════════════════════════════════════════════╗
║                                                                              ║
║                                    Assign                                    ║
║                                   ¯¯¯¯¯¯¯¯                                   ║
╚══════════════════════════════════════════════════════════════════════════════╝
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
*/

/// Implemented by types which can internally assign a
/// ([`Value`](`Assign::Value`)) at a path represented by a JSON [`Pointer`].
pub trait Assign {
    /// The type of value that this implementation can operate on.
    type Value;

    /// Error associated with `Assign`
    type Error;

    /// Assigns a value based on the path provided by a JSON Pointer, returning
    /// the replaced value, if any.
    ///
    /// ## Errors
    /// Returns [`Self::Error`] if the assignment fails.
    fn assign<V>(
        &mut self,
        ptr: &Pointer,
        value: V,
    ) -> Result<Assignment<'_, Self::Value>, Self::Error>
    where
        V: Into<Self::Value>;
}

/// The data structure returned from a successful call to `assign`.
#[derive(Debug)]
pub struct Assignment<'v, V> {
    /// A mutable reference to the value that was assigned.
    pub assigned: &'v mut V,

    /// The value that was replaced, if any.
    ///
    /// This is `None` when a new key was inserted into an object.
    pub replaced: Option<V>,
}

/*
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
╔══════════════════════════════════════════════════════════════════════════════╗
║                                                                              ║
║                                 AssignError                                  ║
║                                ¯¯¯¯¯¯¯¯¯¯¯¯¯                                 ║
╚══════════════════════════════════════════════════════════════════════════════╝
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
*/

/// Indicates that an assignment failed. The document is left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignError {
    /// The pointer addresses the whole document, which cannot be assigned in
    /// place.
    Root,

    /// A `Token` within the `Pointer` failed to be parsed as an array index.
    FailedToParseIndex {
        /// Offset of the partial pointer starting with the invalid index.
        offset: usize,
        /// The source [`ParseIndexError`]
        source: ParseIndexError,
    },

    /// An index `Token` within the `Pointer` was out of bounds of the target
    /// array.
    OutOfBounds {
        /// Offset of the partial pointer starting with the invalid index.
        offset: usize,
        /// The source [`OutOfBoundsError`]
        source: OutOfBoundsError,
    },

    /// A key leading up to the assigned location does not exist.
    NotFound {
        /// Offset of the partial pointer starting with the missing key.
        offset: usize,
    },

    /// A scalar value was encountered before the last `Token`.
    Unreachable {
        /// Offset of the partial pointer which was unreachable.
        offset: usize,
    },
}

impl AssignError {
    /// Offset of the partial pointer starting with the token which caused the
    /// error. The root pointer has no tokens and reports `0`.
    pub fn offset(&self) -> usize {
        match self {
            Self::Root => 0,
            Self::FailedToParseIndex { offset, .. }
            | Self::OutOfBounds { offset, .. }
            | Self::NotFound { offset }
            | Self::Unreachable { offset } => *offset,
        }
    }

    /// Returns `true` if this error is `Root`.
    pub fn is_root(&self) -> bool {
        matches!(self, Self::Root)
    }

    /// Returns `true` if this error is `OutOfBounds`.
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }

    /// Returns `true` if this error is `FailedToParseIndex`.
    pub fn is_failed_to_parse_index(&self) -> bool {
        matches!(self, Self::FailedToParseIndex { .. })
    }

    /// Returns `true` if this error is `NotFound`.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns `true` if this error is `Unreachable`.
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::Unreachable { .. })
    }
}

impl From<ResolveError> for AssignError {
    fn from(err: ResolveError) -> Self {
        match err {
            ResolveError::FailedToParseIndex { offset, source } => {
                Self::FailedToParseIndex { offset, source }
            }
            ResolveError::OutOfBounds { offset, source } => Self::OutOfBounds { offset, source },
            ResolveError::NotFound { offset } => Self::NotFound { offset },
            ResolveError::Unreachable { offset } => Self::Unreachable { offset },
        }
    }
}

impl fmt::Display for AssignError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root => {
                write!(f, "assignment to the document root is not supported")
            }
            Self::FailedToParseIndex { offset, .. } => {
                write!(
                    f,
                    "assignment failed due to an invalid index at offset {offset}"
                )
            }
            Self::OutOfBounds { offset, .. } => {
                write!(
                    f,
                    "assignment failed due to index at offset {offset} being out of bounds"
                )
            }
            Self::NotFound { offset } => {
                write!(
                    f,
                    "assignment failed as the pointer starting at offset {offset} was not found"
                )
            }
            Self::Unreachable { offset } => {
                write!(
                    f,
                    "assignment failed as the pointer starting at offset {offset} is unreachable"
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AssignError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FailedToParseIndex { source, .. } => Some(source),
            Self::OutOfBounds { source, .. } => Some(source),
            _ => None,
        }
    }
}

/*
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
╔══════════════════════════════════════════════════════════════════════════════╗
║                                                                              ║
║                                  json impl                                   ║
║                                 ¯¯¯¯¯¯¯¯¯¯¯                                  ║
╚══════════════════════════════════════════════════════════════════════════════╝
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
*/

#[cfg(feature = "json")]
mod json {
    use super::{Assign, AssignError, Assignment};
    use crate::{resolve::array_index, Pointer, ResolveMut};
    use core::mem;
    use serde_json::{map::Entry, Value};

    impl Assign for Value {
        type Value = Value;
        type Error = AssignError;

        fn assign<V>(&mut self, ptr: &Pointer, value: V) -> Result<Assignment<'_, Value>, Self::Error>
        where
            V: Into<Value>,
        {
            let (parent, last) = ptr.split_back().ok_or(AssignError::Root)?;
            // the last token starts where its parent pointer ends
            let offset = parent.as_str().len();
            match self.resolve_mut(parent)? {
                Value::Object(obj) => match obj.entry(last.decoded().into_owned()) {
                    Entry::Occupied(entry) => {
                        let assigned = entry.into_mut();
                        let replaced = Some(mem::replace(assigned, value.into()));
                        Ok(Assignment { assigned, replaced })
                    }
                    Entry::Vacant(entry) => Ok(Assignment {
                        assigned: entry.insert(value.into()),
                        replaced: None,
                    }),
                },
                Value::Array(array) => {
                    let idx = array_index(&last, array.len(), offset)?;
                    let assigned = &mut array[idx];
                    let replaced = Some(mem::replace(assigned, value.into()));
                    Ok(Assignment { assigned, replaced })
                }
                _ => Err(AssignError::Unreachable { offset }),
            }
        }
    }
}

/*
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
╔══════════════════════════════════════════════════════════════════════════════╗
║                                                                              ║
║                                  toml impl                                   ║
║                                 ¯¯¯¯¯¯¯¯¯¯¯                                  ║
╚══════════════════════════════════════════════════════════════════════════════╝
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
*/

#[cfg(feature = "toml")]
mod toml {
    use super::{Assign, AssignError, Assignment};
    use crate::{resolve::array_index, Pointer, ResolveMut};
    use core::mem;
    use toml::{map::Entry, Value};

    impl Assign for Value {
        type Value = Value;
        type Error = AssignError;

        fn assign<V>(&mut self, ptr: &Pointer, value: V) -> Result<Assignment<'_, Value>, Self::Error>
        where
            V: Into<Value>,
        {
            let (parent, last) = ptr.split_back().ok_or(AssignError::Root)?;
            let offset = parent.as_str().len();
            match self.resolve_mut(parent)? {
                Value::Table(tbl) => match tbl.entry(last.decoded().into_owned()) {
                    Entry::Occupied(entry) => {
                        let assigned = entry.into_mut();
                        let replaced = Some(mem::replace(assigned, value.into()));
                        Ok(Assignment { assigned, replaced })
                    }
                    Entry::Vacant(entry) => Ok(Assignment {
                        assigned: entry.insert(value.into()),
                        replaced: None,
                    }),
                },
                Value::Array(array) => {
                    let idx = array_index(&last, array.len(), offset)?;
                    let assigned = &mut array[idx];
                    let replaced = Some(mem::replace(assigned, value.into()));
                    Ok(Assignment { assigned, replaced })
                }
                _ => Err(AssignError::Unreachable { offset }),
            }
        }
    }
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
