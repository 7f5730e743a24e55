//! Error reporting data structures and miette integration.
//!
//! The error types of this crate only know *where* a pointer failed, as byte
//! offsets. A [`Report`] pairs such an error with the pointer text it refers
//! to, so that it can be rendered on its own:
//!
//! ```
//! # use jsonpointer::{diagnostic::Diagnose, Pointer};
//! let err = Pointer::parse("/foo/b~2ar").diagnose("/foo/b~2ar").unwrap_err();
//! assert_eq!(err.subject(), "/foo/b~2ar");
//! assert_eq!(err.original().complete_offset(), 6);
//! ```

#[cfg(feature = "assign")]
use crate::assign::AssignError;
#[cfg(feature = "delete")]
use crate::delete::DeleteError;
use crate::pointer::ParseError;
#[cfg(feature = "resolve")]
use crate::resolve::ResolveError;
use alloc::{boxed::Box, string::String};
use core::{fmt, ops::Deref};

/// Implemented by errors which can be converted into a [`Report`].
pub trait Diagnostic: Sized {
    /// The value which caused the error.
    type Subject: Deref;

    /// Combine the error with its subject to generate a [`Report`].
    fn into_report(self, subject: impl Into<Self::Subject>) -> Report<Self> {
        Report {
            source: self,
            subject: subject.into(),
        }
    }

    /// The docs.rs URL for this error
    fn url() -> &'static str;

    /// Returns the labels for the given [`Subject`](Diagnostic::Subject) if
    /// applicable.
    fn labels(&self, subject: &Self::Subject) -> Option<Box<dyn Iterator<Item = Label>>>;
}

/// A label for a span within a json pointer or malformed string.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Label {
    text: String,
    offset: usize,
    len: usize,
}

impl Label {
    /// Creates a new instance of a [`Label`] from its parts
    pub fn new(text: impl Into<String>, offset: usize, len: usize) -> Self {
        Self {
            text: text.into(),
            offset,
            len,
        }
    }

    /// The message attached to the span.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Byte offset of the span.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Byte length of the span.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the span is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(feature = "miette")]
impl From<Label> for miette::LabeledSpan {
    fn from(value: Label) -> Self {
        miette::LabeledSpan::new(Some(value.text), value.offset, value.len)
    }
}

/// An error wrapper which includes the subject of the failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report<D: Diagnostic> {
    source: D,
    subject: D::Subject,
}

impl<D: Diagnostic> Report<D> {
    /// The value which caused the error.
    pub fn subject(&self) -> &<D::Subject as Deref>::Target {
        &self.subject
    }

    /// The error which occurred.
    pub fn original(&self) -> &D {
        &self.source
    }

    /// The original parts of the [`Report`].
    pub fn decompose(self) -> (D, D::Subject) {
        (self.source, self.subject)
    }
}

impl<D: Diagnostic> Deref for Report<D> {
    type Target = D;

    fn deref(&self) -> &Self::Target {
        &self.source
    }
}

impl<D> fmt::Display for Report<D>
where
    D: Diagnostic + fmt::Display,
    D::Subject: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid JSON pointer: \"{}\": {}",
            self.subject, self.source
        )
    }
}

#[cfg(feature = "std")]
impl<D> std::error::Error for Report<D>
where
    D: Diagnostic + fmt::Debug + std::error::Error + 'static,
    D::Subject: fmt::Debug + fmt::Display,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        // `Display` already includes the cause
        self.source.source()
    }
}

#[cfg(feature = "miette")]
impl<D> miette::Diagnostic for Report<D>
where
    D: Diagnostic + fmt::Debug + std::error::Error + 'static,
    D::Subject: fmt::Debug + fmt::Display + miette::SourceCode,
{
    fn url<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(D::url()))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.subject)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = miette::LabeledSpan> + '_>> {
        Some(Box::new(D::labels(self, &self.subject)?.map(Into::into)))
    }
}

macro_rules! impl_diagnostic_url {
    (enum $type:ident) => {
        $crate::diagnostic::impl_diagnostic_url!("enum", "", $type)
    };
    (enum $mod:ident::$type:ident) => {
        $crate::diagnostic::impl_diagnostic_url!("enum", concat!("/", stringify!($mod)), $type)
    };
    ($kind:literal, $mod:expr, $type:ident) => {
        concat!(
            "https://docs.rs/jsonpointer/",
            env!("CARGO_PKG_VERSION"),
            "/jsonpointer",
            $mod,
            "/",
            $kind,
            ".",
            stringify!($type),
            ".html",
        )
    };
}
pub(crate) use impl_diagnostic_url;

/// Extension methods which attach the subject to the error of a `Result`.
pub trait Diagnose<T> {
    /// The error type of the `Result`.
    type Error: Diagnostic;

    /// Converts the error, if any, into a [`Report`] about `subject`.
    #[allow(clippy::missing_errors_doc)]
    fn diagnose(
        self,
        subject: impl Into<<Self::Error as Diagnostic>::Subject>,
    ) -> Result<T, Report<Self::Error>>;

    /// Like [`Diagnose::diagnose`], but only computes the subject on failure.
    #[allow(clippy::missing_errors_doc)]
    fn diagnose_with<F, S>(self, f: F) -> Result<T, Report<Self::Error>>
    where
        F: FnOnce() -> S,
        S: Into<<Self::Error as Diagnostic>::Subject>;
}

impl<T, E> Diagnose<T> for Result<T, E>
where
    E: Diagnostic,
{
    type Error = E;

    fn diagnose(
        self,
        subject: impl Into<<Self::Error as Diagnostic>::Subject>,
    ) -> Result<T, Report<Self::Error>> {
        self.map_err(|error| error.into_report(subject))
    }

    fn diagnose_with<F, S>(self, f: F) -> Result<T, Report<Self::Error>>
    where
        F: FnOnce() -> S,
        S: Into<<Self::Error as Diagnostic>::Subject>,
    {
        self.map_err(|error| error.into_report(f()))
    }
}

/*
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
╔══════════════════════════════════════════════════════════════════════════════╗
║                                                                              ║
║                                    Labels                                    ║
║                                   ¯¯¯¯¯¯¯¯¯                                  ║
╚══════════════════════════════════════════════════════════════════════════════╝
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
*/

#[cfg(feature = "resolve")]
/// Span of the token starting at `offset` (its leading `'/'` included).
fn token_span(subject: &str, offset: usize) -> (usize, usize) {
    let rest = subject.get(offset..).unwrap_or_default();
    let len = rest
        .get(1..)
        .and_then(|tail| tail.find('/'))
        .map_or(rest.len(), |i| i + 1);
    (offset, len)
}

#[cfg(feature = "resolve")]
fn token_label(text: &str, subject: &str, offset: usize) -> Option<Box<dyn Iterator<Item = Label>>> {
    let (offset, len) = token_span(subject, offset);
    Some(Box::new(core::iter::once(Label::new(text, offset, len))))
}

impl Diagnostic for ParseError {
    type Subject = String;

    fn url() -> &'static str {
        impl_diagnostic_url!(enum ParseError)
    }

    fn labels(&self, subject: &String) -> Option<Box<dyn Iterator<Item = Label>>> {
        let (text, offset, len) = match self {
            Self::NoLeadingSlash => (
                "must start with a slash ('/')",
                0,
                subject.chars().next().map_or(0, char::len_utf8),
            ),
            Self::InvalidEncoding { .. } => {
                let offset = self.complete_offset();
                // the tilde plus whatever follows it, if anything
                let len = subject
                    .get(offset..)
                    .unwrap_or_default()
                    .chars()
                    .take(2)
                    .map(char::len_utf8)
                    .sum();
                ("'~' must be followed by '0' or '1'", offset, len)
            }
        };
        Some(Box::new(core::iter::once(Label::new(text, offset, len))))
    }
}

#[cfg(feature = "resolve")]
impl Diagnostic for ResolveError {
    type Subject = String;

    fn url() -> &'static str {
        impl_diagnostic_url!(enum resolve::ResolveError)
    }

    fn labels(&self, subject: &String) -> Option<Box<dyn Iterator<Item = Label>>> {
        let text = match self {
            Self::FailedToParseIndex { .. } => "not an array index",
            Self::OutOfBounds { .. } => "out of bounds",
            Self::NotFound { .. } => "not found",
            Self::Unreachable { .. } => "unreachable",
        };
        token_label(text, subject, self.offset())
    }
}

#[cfg(feature = "assign")]
impl Diagnostic for AssignError {
    type Subject = String;

    fn url() -> &'static str {
        impl_diagnostic_url!(enum assign::AssignError)
    }

    fn labels(&self, subject: &String) -> Option<Box<dyn Iterator<Item = Label>>> {
        let text = match self {
            Self::Root => return None,
            Self::FailedToParseIndex { .. } => "not an array index",
            Self::OutOfBounds { .. } => "out of bounds",
            Self::NotFound { .. } => "not found",
            Self::Unreachable { .. } => "unreachable",
        };
        token_label(text, subject, self.offset())
    }
}

#[cfg(feature = "delete")]
impl Diagnostic for DeleteError {
    type Subject = String;

    fn url() -> &'static str {
        impl_diagnostic_url!(enum delete::DeleteError)
    }

    fn labels(&self, subject: &String) -> Option<Box<dyn Iterator<Item = Label>>> {
        let text = match self {
            Self::Root => return None,
            Self::FailedToParseIndex { .. } => "not an array index",
            Self::OutOfBounds { .. } => "out of bounds",
            Self::NotFound { .. } => "not found",
            Self::Unreachable { .. } => "unreachable",
        };
        token_label(text, subject, self.offset())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Pointer, PointerBuf};
    use alloc::{string::ToString, vec::Vec};

    fn labels<D: Diagnostic<Subject = String>>(err: &D, subject: &str) -> Vec<Label> {
        err.labels(&subject.to_string())
            .map(Iterator::collect)
            .unwrap_or_default()
    }

    #[test]
    fn parse_error_labels() {
        let invalid = "/foo/bar/invalid~3~encoding/cannot/reach";
        let err = Pointer::parse(invalid).unwrap_err();
        assert_eq!(
            labels(&err, invalid),
            [Label::new("'~' must be followed by '0' or '1'", 16, 2)]
        );

        let err = Pointer::parse("/trailing~").unwrap_err();
        assert_eq!(labels(&err, "/trailing~")[0].len(), 1);

        let err = Pointer::parse("nope").unwrap_err();
        assert_eq!(
            labels(&err, "nope"),
            [Label::new("must start with a slash ('/')", 0, 1)]
        );
    }

    #[test]
    #[cfg(feature = "resolve")]
    fn resolve_error_labels() {
        let err = ResolveError::NotFound { offset: 4 };
        let found = labels(&err, "/foo/bar/baz");
        assert_eq!(found, [Label::new("not found", 4, 4)]);

        // last token runs to the end of the pointer
        let err = ResolveError::Unreachable { offset: 8 };
        assert_eq!(labels(&err, "/foo/bar/baz")[0].len(), 4);

        let err = ResolveError::NotFound { offset: 0 };
        assert_eq!(labels(&err, "/")[0].len(), 1);
    }

    #[test]
    #[cfg(all(feature = "assign", feature = "delete"))]
    fn root_errors_have_no_labels() {
        assert!(AssignError::Root.labels(&String::new()).is_none());
        assert!(DeleteError::Root.labels(&String::new()).is_none());
    }

    #[test]
    fn report_parts() {
        let report = PointerBuf::parse("foo")
            .diagnose("foo")
            .unwrap_err();
        assert_eq!(report.subject(), "foo");
        assert!(report.is_no_leading_slash());
        assert_eq!(
            report.to_string(),
            "Invalid JSON pointer: \"foo\": json pointer is malformed as it does not start with a slash ('/')"
        );
        let (err, subject) = report.decompose();
        assert_eq!(err, ParseError::NoLeadingSlash);
        assert_eq!(subject, "foo");
    }

    #[test]
    fn diagnose_with_is_lazy() {
        let ok: Result<(), ParseError> = Ok(());
        let report = ok.diagnose_with(|| -> String { panic!("subject computed") });
        assert!(report.is_ok());
    }

    #[test]
    fn urls() {
        assert!(ParseError::url().ends_with("/jsonpointer/enum.ParseError.html"));
        #[cfg(feature = "resolve")]
        assert!(ResolveError::url().ends_with("/jsonpointer/resolve/enum.ResolveError.html"));
    }

    #[test]
    #[cfg(all(feature = "miette", feature = "json", feature = "assign"))]
    fn miette_render() {
        use crate::diagnostic::Diagnose;
        let mut v = serde_json::json!({"foo": {"bar": ["0"]}});

        let ptr = PointerBuf::parse("/foo/bar/invalid/cannot/reach").unwrap();
        let report = ptr
            .assign(&mut v, "qux")
            .map(|_| ())
            .diagnose(ptr.as_str())
            .unwrap_err();
        let rendered = format!("{:?}", miette::Report::from(report));
        assert!(rendered.contains("not an array index"));
    }
}
