//! Brings the pointer types and the `Resolve`, `ResolveMut`, `Assign` and
//! `Delete` traits (as enabled) into scope.
//!
//! ```
//! use jsonpointer::prelude::*;
//! # use serde_json::json;
//! let mut data = json!({ "a": [1] });
//! let ptr = PointerBuf::parse("/a/0").unwrap();
//! data.assign(&ptr, 2).unwrap();
//! assert_eq!(data.resolve(&ptr).unwrap(), 2);
//! ```
#[cfg(feature = "assign")]
pub use crate::assign::Assign;
#[cfg(feature = "delete")]
pub use crate::delete::Delete;
#[cfg(feature = "resolve")]
pub use crate::resolve::{Resolve, ResolveMut};
pub use crate::{Pointer, PointerBuf, Token};
