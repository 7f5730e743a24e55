//! # Delete values based on JSON Pointers
//!
//! This module provides the [`Delete`] trait which is implemented by types that
//! can internally remove a value based on a JSON Pointer.
//!
//! Unlike resolution, deletion requires the addressed value to exist: a missing
//! key or an index past the end of an array is an error, and the document is
//! left untouched. Removing an array element shifts the following elements
//! down, so their relative order is kept.
//!
//! ## Example
//! ```rust
//! # use jsonpointer::{Pointer, Delete};
//! # use serde_json::json;
//! let mut data = json!({ "foo": { "bar": { "baz": "qux" } } });
//! let ptr = Pointer::from_static("/foo/bar/baz");
//! assert_eq!(data.delete(&ptr), Ok(json!("qux")));
//! assert_eq!(data, json!({ "foo": { "bar": {} } }));
//!
//! // the removed key is gone, so deleting it again fails
//! assert!(data.delete(&ptr).unwrap_err().is_not_found());
//! ```
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
║                                    Delete                                    ║
║                                   ¯¯¯¯¯¯¯¯                                   ║
╚══════════════════════════════════════════════════════════════════════════════╝
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
*/

/// Delete is implemented by types which can internally remove a value based on
/// a JSON Pointer
pub trait Delete {
    /// The type of value that this implementation can operate on.
    type Value;

    /// Error associated with `Delete`
    type Error;

    /// Attempts to internally delete a value based upon a [`Pointer`],
    /// returning the removed value.
    ///
    /// ## Errors
    /// Returns [`Self::Error`] if the value cannot be removed, in which case
    /// `self` is unchanged.
    fn delete(&mut self, ptr: &Pointer) -> Result<Self::Value, Self::Error>;
}

/*
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
╔══════════════════════════════════════════════════════════════════════════════╗
║                                                                              ║
║                                 DeleteError                                  ║
║                                ¯¯¯¯¯¯¯¯¯¯¯¯¯                                 ║
╚══════════════════════════════════════════════════════════════════════════════╝
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
*/

/// Indicates that a value could not be removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteError {
    /// The pointer addresses the whole document, which has no parent to be
    /// removed from.
    Root,

    /// A `Token` within the `Pointer` failed to be parsed as an array index.
    FailedToParseIndex {
        /// Offset of the partial pointer starting with the invalid index.
        offset: usize,
        /// The source [`ParseIndexError`]
        source: ParseIndexError,
    },

    /// An index `Token` was out of bounds of the target array.
    OutOfBounds {
        /// Offset of the partial pointer starting with the invalid index.
        offset: usize,
        /// The source [`OutOfBoundsError`]
        source: OutOfBoundsError,
    },

    /// A key along the path, or the key to remove, does not exist.
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

impl DeleteError {
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

impl From<ResolveError> for DeleteError {
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

impl fmt::Display for DeleteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root => write!(f, "the document root cannot be removed"),
            Self::FailedToParseIndex { offset, .. } => {
                write!(f, "failed to parse index at offset {offset}")
            }
            Self::OutOfBounds { offset, .. } => {
                write!(f, "index at offset {offset} out of bounds")
            }
            Self::NotFound { offset } => {
                write!(f, "pointer starting at offset {offset} not found")
            }
            Self::Unreachable { offset } => {
                write!(f, "pointer starting at offset {offset} is unreachable")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DeleteError {
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
    use super::{Delete, DeleteError};
    use crate::{resolve::array_index, Pointer, ResolveMut};
    use serde_json::Value;

    impl Delete for Value {
        type Value = Value;
        type Error = DeleteError;

        fn delete(&mut self, ptr: &Pointer) -> Result<Value, Self::Error> {
            let (parent, last) = ptr.split_back().ok_or(DeleteError::Root)?;
            let offset = parent.as_str().len();
            match self.resolve_mut(parent)? {
                Value::Object(obj) => obj
                    .remove(&*last.decoded())
                    .ok_or(DeleteError::NotFound { offset }),
                Value::Array(array) => {
                    let idx = array_index(&last, array.len(), offset)?;
                    Ok(array.remove(idx))
                }
                _ => Err(DeleteError::Unreachable { offset }),
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
    use super::{Delete, DeleteError};
    use crate::{resolve::array_index, Pointer, ResolveMut};
    use toml::Value;

    impl Delete for Value {
        type Value = Value;
        type Error = DeleteError;

        fn delete(&mut self, ptr: &Pointer) -> Result<Value, Self::Error> {
            let (parent, last) = ptr.split_back().ok_or(DeleteError::Root)?;
            let offset = parent.as_str().len();
            match self.resolve_mut(parent)? {
                Value::Table(tbl) => tbl
                    .remove(&*last.decoded())
                    .ok_or(DeleteError::NotFound { offset }),
                Value::Array(array) => {
                    let idx = array_index(&last, array.len(), offset)?;
                    Ok(array.remove(idx))
                }
                _ => Err(DeleteError::Unreachable { offset }),
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
