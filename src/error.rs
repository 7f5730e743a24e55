use crate::{
    diagnostic::{impl_diagnostic_url, Diagnostic, Label, Report},
    ParseError,
};
use alloc::{boxed::Box, string::String};
use core::fmt;

#[cfg(feature = "assign")]
use crate::AssignError;
#[cfg(feature = "delete")]
use crate::DeleteError;
#[cfg(feature = "resolve")]
use crate::ResolveError;

/// The error reported by the [`has`](crate::has), [`get`](crate::get),
/// [`set`](crate::set) and [`remove`](crate::remove) shorthands, paired with
/// the pointer text it refers to.
///
/// ```
/// # use jsonpointer::get;
/// # use serde_json::json;
/// let err = get(&json!({ "foo": [1] }), "/foo/1").unwrap_err();
/// assert!(err.is_out_of_bounds());
/// assert_eq!(
///     err.to_string(),
///     r#"Invalid JSON pointer: "/foo/1": index at offset 4 out of bounds"#
/// );
/// ```
pub type InvalidPointer = Report<Error>;

/// Every way a JSON Pointer operation can fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The pointer text is not a valid JSON Pointer.
    Parse(ParseError),

    /// The pointer does not resolve within the document.
    #[cfg(feature = "resolve")]
    Resolve(ResolveError),

    /// A value could not be assigned.
    #[cfg(feature = "assign")]
    Assign(AssignError),

    /// A value could not be removed.
    #[cfg(feature = "delete")]
    Delete(DeleteError),
}

impl Error {
    /// Byte offset within the pointer of the token which caused the error.
    ///
    /// For syntax errors this is the offset of the offending character.
    pub fn offset(&self) -> usize {
        match self {
            Self::Parse(err) => err.complete_offset(),
            #[cfg(feature = "resolve")]
            Self::Resolve(err) => err.offset(),
            #[cfg(feature = "assign")]
            Self::Assign(err) => err.offset(),
            #[cfg(feature = "delete")]
            Self::Delete(err) => err.offset(),
        }
    }

    /// Returns `true` if the pointer text could not be parsed.
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }

    /// Returns `true` if the operation targeted the document root, which
    /// cannot be assigned or removed in place.
    pub fn is_root(&self) -> bool {
        match self {
            #[cfg(feature = "assign")]
            Self::Assign(err) => err.is_root(),
            #[cfg(feature = "delete")]
            Self::Delete(err) => err.is_root(),
            _ => false,
        }
    }

    /// Returns `true` if an object key along the pointer was missing.
    pub fn is_not_found(&self) -> bool {
        match self {
            #[cfg(feature = "resolve")]
            Self::Resolve(err) => err.is_not_found(),
            #[cfg(feature = "assign")]
            Self::Assign(err) => err.is_not_found(),
            #[cfg(feature = "delete")]
            Self::Delete(err) => err.is_not_found(),
            _ => false,
        }
    }

    /// Returns `true` if a token used against an array was not an index.
    pub fn is_failed_to_parse_index(&self) -> bool {
        match self {
            #[cfg(feature = "resolve")]
            Self::Resolve(err) => err.is_failed_to_parse_index(),
            #[cfg(feature = "assign")]
            Self::Assign(err) => err.is_failed_to_parse_index(),
            #[cfg(feature = "delete")]
            Self::Delete(err) => err.is_failed_to_parse_index(),
            _ => false,
        }
    }

    /// Returns `true` if an array index was past the end of its array.
    pub fn is_out_of_bounds(&self) -> bool {
        match self {
            #[cfg(feature = "resolve")]
            Self::Resolve(err) => err.is_out_of_bounds(),
            #[cfg(feature = "assign")]
            Self::Assign(err) => err.is_out_of_bounds(),
            #[cfg(feature = "delete")]
            Self::Delete(err) => err.is_out_of_bounds(),
            _ => false,
        }
    }

    /// Returns `true` if a token was applied to a scalar value.
    pub fn is_unreachable(&self) -> bool {
        match self {
            #[cfg(feature = "resolve")]
            Self::Resolve(err) => err.is_unreachable(),
            #[cfg(feature = "assign")]
            Self::Assign(err) => err.is_unreachable(),
            #[cfg(feature = "delete")]
            Self::Delete(err) => err.is_unreachable(),
            _ => false,
        }
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Self::Parse(err)
    }
}

#[cfg(feature = "resolve")]
impl From<ResolveError> for Error {
    fn from(err: ResolveError) -> Self {
        Self::Resolve(err)
    }
}

#[cfg(feature = "assign")]
impl From<AssignError> for Error {
    fn from(err: AssignError) -> Self {
        Self::Assign(err)
    }
}

#[cfg(feature = "delete")]
impl From<DeleteError> for Error {
    fn from(err: DeleteError) -> Self {
        Self::Delete(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(err) => fmt::Display::fmt(err, f),
            #[cfg(feature = "resolve")]
            Self::Resolve(err) => fmt::Display::fmt(err, f),
            #[cfg(feature = "assign")]
            Self::Assign(err) => fmt::Display::fmt(err, f),
            #[cfg(feature = "delete")]
            Self::Delete(err) => fmt::Display::fmt(err, f),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(err) => std::error::Error::source(err),
            #[cfg(feature = "resolve")]
            Self::Resolve(err) => std::error::Error::source(err),
            #[cfg(feature = "assign")]
            Self::Assign(err) => std::error::Error::source(err),
            #[cfg(feature = "delete")]
            Self::Delete(err) => std::error::Error::source(err),
        }
    }
}

impl Diagnostic for Error {
    type Subject = String;

    fn url() -> &'static str {
        impl_diagnostic_url!(enum Error)
    }

    fn labels(&self, subject: &String) -> Option<Box<dyn Iterator<Item = Label>>> {
        match self {
            Self::Parse(err) => err.labels(subject),
            #[cfg(feature = "resolve")]
            Self::Resolve(err) => err.labels(subject),
            #[cfg(feature = "assign")]
            Self::Assign(err) => err.labels(subject),
            #[cfg(feature = "delete")]
            Self::Delete(err) => err.labels(subject),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn parse_offset_is_the_bad_character() {
        let err = Error::from(crate::Pointer::parse("/ab/c~d").unwrap_err());
        assert!(err.is_parse());
        assert_eq!(err.offset(), 5);
        assert!(!err.is_not_found());
    }

    #[test]
    #[cfg(feature = "resolve")]
    fn resolve_predicates() {
        let err = Error::from(ResolveError::NotFound { offset: 3 });
        assert!(err.is_not_found());
        assert!(!err.is_root());
        assert_eq!(err.offset(), 3);
        assert_eq!(err.to_string(), "pointer starting at offset 3 not found");
    }

    #[test]
    #[cfg(all(feature = "assign", feature = "delete"))]
    fn root_predicates() {
        assert!(Error::from(AssignError::Root).is_root());
        assert!(Error::from(DeleteError::Root).is_root());
        assert_eq!(Error::from(DeleteError::Root).offset(), 0);
    }

    #[test]
    #[cfg(feature = "std")]
    fn source_is_transparent() {
        use std::error::Error as _;
        assert!(Error::from(ParseError::NoLeadingSlash).source().is_none());
    }

    #[test]
    #[cfg(all(feature = "std", feature = "json"))]
    fn cause_is_reported_once() {
        use std::error::Error as _;
        let err = crate::get(&serde_json::json!({ "foo": 1 }), "/bar").unwrap_err();

        let mut chain = vec![err.to_string()];
        let mut source = err.source();
        while let Some(cause) = source {
            chain.push(cause.to_string());
            source = cause.source();
        }
        assert_eq!(
            chain,
            [r#"Invalid JSON pointer: "/bar": pointer starting at offset 0 not found"#]
        );

        let err = crate::get(&serde_json::json!([1]), "/3").unwrap_err();
        let cause = err.source().unwrap();
        assert!(cause.is::<crate::index::OutOfBoundsError>());
        assert_eq!(cause.to_string(), "index 3 out of bounds (limit: 1)");
        assert!(cause.source().is_none());
    }

    #[test]
    fn url() {
        assert!(Error::url().ends_with("/jsonpointer/enum.Error.html"));
    }
}
