use crate::{token::EncodingError, Token, Tokens};
use alloc::{
    borrow::ToOwned,
    string::{String, ToString},
};
use core::{borrow::Borrow, fmt, ops::Deref, str::FromStr};


/*
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
╔══════════════════════════════════════════════════════════════════════════════╗
║                                                                              ║
║                                   Pointer                                    ║
║                                  ¯¯¯¯¯¯¯¯¯                                   ║
╚══════════════════════════════════════════════════════════════════════════════╝
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
*/

/// A JSON Pointer is a string containing a sequence of zero or more reference
/// [`Token`]s, each prefixed by a `'/'` character.
///
/// `Pointer` is unsized and always borrowed; its owned counterpart is
/// [`PointerBuf`]. The string it wraps has been validated and is kept in its
/// encoded form.
///
/// See [RFC 6901 for more
/// information](https://datatracker.ietf.org/doc/html/rfc6901).
///
/// ## Example
/// ```rust
/// use jsonpointer::{Pointer, Resolve};
/// use serde_json::json;
///
/// let data = json!({ "foo": { "bar": "baz" } });
/// let ptr = Pointer::from_static("/foo/bar");
/// let bar = data.resolve(ptr).unwrap();
/// assert_eq!(bar, "baz");
/// ```
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Pointer(str);

impl Pointer {
    /// Private constructor for strings that are known to be correctly encoded.
    ///
    /// # Safety
    /// `s` must be a valid, encoded JSON Pointer.
    unsafe fn new_unchecked<S: AsRef<str> + ?Sized>(s: &S) -> &Self {
        // SAFETY: `Pointer` is `repr(transparent)` over `str`
        unsafe { &*(core::ptr::from_ref::<str>(s.as_ref()) as *const Self) }
    }

    /// Constant reference to a root pointer (`""`), addressing the whole
    /// document.
    pub const fn root() -> &'static Self {
        // SAFETY: an empty string is the valid root pointer
        unsafe { &*(core::ptr::from_ref::<str>("") as *const Self) }
    }

    /// Attempts to parse a string into a `Pointer`.
    ///
    /// The empty string is the root pointer. Any other input must start with
    /// `'/'` and every `~` must be followed by `0` or `1`.
    ///
    /// ## Errors
    /// Returns a [`ParseError`] if the string is not a valid JSON Pointer.
    ///
    /// ## Example
    /// ```
    /// # use jsonpointer::Pointer;
    /// assert!(Pointer::parse("/foo~1bar").is_ok());
    /// assert!(Pointer::parse("foo").unwrap_err().is_no_leading_slash());
    /// assert!(Pointer::parse("/foo~2").unwrap_err().is_invalid_encoding());
    /// ```
    pub fn parse<S: AsRef<str> + ?Sized>(s: &S) -> Result<&Self, ParseError> {
        // SAFETY: validated above
        validate(s.as_ref()).map(|s| unsafe { Self::new_unchecked(s) })
    }

    /// Creates a static `Pointer` from a string, validating it at compile time
    /// when used in a const context.
    ///
    /// # Panics
    ///
    /// Panics if the string is not a valid JSON Pointer.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonpointer::Pointer;
    /// const POINTER: &Pointer = Pointer::from_static("/path/to/value");
    /// assert_eq!(POINTER.count(), 3);
    /// ```
    pub const fn from_static(s: &'static str) -> &'static Self {
        assert!(validate(s).is_ok(), "invalid json pointer");
        // SAFETY: validated above
        unsafe { &*(core::ptr::from_ref::<str>(s) as *const Self) }
    }

    /// The encoded string representation of this `Pointer`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts into an owned [`PointerBuf`].
    pub fn to_buf(&self) -> PointerBuf {
        PointerBuf(self.0.to_string())
    }

    /// Returns an iterator of the [`Token`]s in the `Pointer`.
    pub fn tokens(&self) -> Tokens<'_> {
        Tokens::new(&self.0)
    }

    /// Returns the number of tokens in the `Pointer`.
    pub fn count(&self) -> usize {
        self.tokens().count()
    }

    /// Returns `true` if the JSON Pointer equals `""`.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the last `Token` in the `Pointer`.
    pub fn last(&self) -> Option<Token<'_>> {
        self.tokens().next_back()
    }

    /// Returns the first `Token` in the `Pointer`.
    pub fn first(&self) -> Option<Token<'_>> {
        self.tokens().next()
    }

    /// Attempts to get a `Token` by its position. Returns `None` if out of
    /// bounds.
    ///
    /// ## Example
    /// ```rust
    /// use jsonpointer::{Pointer, Token};
    ///
    /// let ptr = Pointer::from_static("/foo/bar");
    /// assert_eq!(ptr.get(0), Some("foo".into()));
    /// assert_eq!(ptr.get(1), Some("bar".into()));
    /// assert_eq!(ptr.get(2), None);
    /// assert_eq!(Pointer::root().get(0), None);
    /// ```
    pub fn get(&self, index: usize) -> Option<Token<'_>> {
        self.tokens().nth(index)
    }

    /// Splits the `Pointer` into the first `Token` and a remainder `Pointer`.
    ///
    /// ## Example
    /// ```
    /// # use jsonpointer::{Token, Pointer};
    /// let ptr = Pointer::from_static("/foo/bar/baz");
    /// let (head, tail) = ptr.split_front().unwrap();
    /// assert_eq!(head, Token::new("foo"));
    /// assert_eq!(tail, Pointer::from_static("/bar/baz"));
    /// assert_eq!(Pointer::root().split_front(), None);
    /// ```
    pub fn split_front(&self) -> Option<(Token<'_>, &Self)> {
        if self.is_root() {
            return None;
        }
        let rest = &self.0[1..];
        match rest.find('/') {
            Some(idx) => {
                let (front, back) = rest.split_at(idx);
                Some((
                    Token::from_encoded_unchecked(front),
                    // SAFETY: `back` starts at a token boundary
                    unsafe { Self::new_unchecked(back) },
                ))
            }
            None => Some((Token::from_encoded_unchecked(rest), Self::root())),
        }
    }

    /// Splits the `Pointer` into a parent `Pointer` and the last `Token`.
    ///
    /// ## Example
    /// ```
    /// # use jsonpointer::{Token, Pointer};
    /// let ptr = Pointer::from_static("/foo/bar/baz");
    /// let (head, tail) = ptr.split_back().unwrap();
    /// assert_eq!(head, Pointer::from_static("/foo/bar"));
    /// assert_eq!(tail, Token::new("baz"));
    /// assert_eq!(Pointer::root().split_back(), None);
    /// ```
    pub fn split_back(&self) -> Option<(&Self, Token<'_>)> {
        let idx = self.0.rfind('/')?;
        let (front, back) = self.0.split_at(idx);
        Some((
            // SAFETY: `front` ends at a token boundary
            unsafe { Self::new_unchecked(front) },
            Token::from_encoded_unchecked(&back[1..]),
        ))
    }

    /// The parent pointer, or `None` for the root pointer.
    pub fn parent(&self) -> Option<&Self> {
        self.split_back().map(|(parent, _)| parent)
    }

    /// Creates an owned [`PointerBuf`] like `self` but with `other` appended.
    ///
    /// ## Example
    /// ```
    /// # use jsonpointer::Pointer;
    /// let a = Pointer::from_static("/foo");
    /// let b = Pointer::from_static("/bar/baz");
    /// assert_eq!(a.concat(b), "/foo/bar/baz");
    /// ```
    pub fn concat(&self, other: &Pointer) -> PointerBuf {
        let mut buf = self.to_buf();
        buf.append(other);
        buf
    }

    /// Attempts to resolve a [`R::Value`] based on the path in this
    /// [`Pointer`].
    ///
    /// ## Errors
    /// Returns [`R::Error`] if the pointer cannot be resolved.
    ///
    /// [`R::Value`]: `crate::resolve::Resolve::Value`
    /// [`R::Error`]: `crate::resolve::Resolve::Error`
    #[cfg(feature = "resolve")]
    pub fn resolve<'v, R: crate::Resolve>(&self, value: &'v R) -> Result<&'v R::Value, R::Error> {
        value.resolve(self)
    }

    /// Attempts to resolve a mutable [`R::Value`] based on the path in this
    /// [`Pointer`].
    ///
    /// ## Errors
    /// Returns [`R::Error`] if the pointer cannot be resolved.
    ///
    /// [`R::Value`]: `crate::resolve::ResolveMut::Value`
    /// [`R::Error`]: `crate::resolve::ResolveMut::Error`
    #[cfg(feature = "resolve")]
    pub fn resolve_mut<'v, R: crate::ResolveMut>(
        &self,
        value: &'v mut R,
    ) -> Result<&'v mut R::Value, R::Error> {
        value.resolve_mut(self)
    }

    /// Assigns `src` to the location in `dest` this pointer addresses.
    ///
    /// See [`Assign`](crate::Assign) for the rules.
    ///
    /// ## Errors
    /// Returns [`D::Error`](crate::Assign::Error) if the assignment fails.
    #[cfg(feature = "assign")]
    pub fn assign<'d, D, V>(
        &self,
        dest: &'d mut D,
        src: V,
    ) -> Result<crate::Assignment<'d, D::Value>, D::Error>
    where
        D: crate::Assign,
        V: Into<D::Value>,
    {
        dest.assign(self, src)
    }

    /// Removes the value this pointer addresses from `value`, returning it.
    ///
    /// See [`Delete`](crate::Delete) for the rules.
    ///
    /// ## Errors
    /// Returns [`D::Error`](crate::Delete::Error) if nothing can be removed.
    #[cfg(feature = "delete")]
    pub fn delete<D: crate::Delete>(&self, value: &mut D) -> Result<D::Value, D::Error> {
        value.delete(self)
    }
}

impl fmt::Debug for Pointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pointer").field(&&self.0).finish()
    }
}

impl fmt::Display for Pointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Pointer {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl ToOwned for Pointer {
    type Owned = PointerBuf;

    fn to_owned(&self) -> Self::Owned {
        self.to_buf()
    }
}

impl<'p> TryFrom<&'p str> for &'p Pointer {
    type Error = ParseError;
    fn try_from(s: &'p str) -> Result<Self, Self::Error> {
        Pointer::parse(s)
    }
}

impl PartialEq<str> for Pointer {
    fn eq(&self, other: &str) -> bool {
        &self.0 == other
    }
}

impl PartialEq<&str> for Pointer {
    fn eq(&self, other: &&str) -> bool {
        &self.0 == *other
    }
}

impl PartialEq<String> for Pointer {
    fn eq(&self, other: &String) -> bool {
        self.0 == *other
    }
}

impl PartialEq<PointerBuf> for Pointer {
    fn eq(&self, other: &PointerBuf) -> bool {
        self.0 == other.0
    }
}

impl PartialEq<Pointer> for str {
    fn eq(&self, other: &Pointer) -> bool {
        self == &other.0
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Pointer {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.0, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de: 'p, 'p> serde::Deserialize<'de> for &'p Pointer {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{Error, Visitor};

        struct PointerVisitor;

        impl<'a> Visitor<'a> for PointerVisitor {
            type Value = &'a Pointer;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a borrowed JSON Pointer")
            }

            fn visit_borrowed_str<E>(self, v: &'a str) -> Result<Self::Value, E>
            where
                E: Error,
            {
                Pointer::parse(v).map_err(|err| {
                    Error::invalid_value(serde::de::Unexpected::Str(v), &err.to_string().as_str())
                })
            }
        }

        deserializer.deserialize_str(PointerVisitor)
    }
}

/*
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
╔══════════════════════════════════════════════════════════════════════════════╗
║                                                                              ║
║                                  PointerBuf                                  ║
║                                 ¯¯¯¯¯¯¯¯¯¯¯¯                                 ║
╚══════════════════════════════════════════════════════════════════════════════╝
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
*/

/// An owned, mutable [`Pointer`] (akin to `String`).
///
/// This type provides methods like [`PointerBuf::push_back`] and
/// [`PointerBuf::pop_front`] that mutate the pointer in place. It also
/// implements [`Deref`] to [`Pointer`], meaning that all methods on
/// [`Pointer`] slices are available on `PointerBuf` values as well.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PointerBuf(String);

impl PointerBuf {
    /// Creates a new `PointerBuf` pointing to a document root.
    pub fn new() -> Self {
        Self(String::new())
    }

    /// Creates a new `PointerBuf` with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self(String::with_capacity(capacity))
    }

    /// Attempts to parse a string into a `PointerBuf`.
    ///
    /// ## Errors
    /// Returns a [`ParseError`] if the string is not a valid JSON Pointer.
    pub fn parse(s: impl Into<String>) -> Result<Self, ParseError> {
        let s = s.into();
        validate(&s)?;
        Ok(Self(s))
    }

    /// Creates a new `PointerBuf` from a sequence of unencoded tokens.
    ///
    /// ## Example
    /// ```
    /// # use jsonpointer::PointerBuf;
    /// let ptr = PointerBuf::from_tokens(["foo", "a/b"]);
    /// assert_eq!(ptr, "/foo/a~1b");
    /// ```
    pub fn from_tokens<'t>(tokens: impl IntoIterator<Item: Into<Token<'t>>>) -> Self {
        let mut inner = String::new();
        for t in tokens.into_iter().map(Into::into) {
            inner.push('/');
            inner.push_str(t.encoded());
        }
        PointerBuf(inner)
    }

    /// Coerces to a Pointer slice.
    pub fn as_ptr(&self) -> &Pointer {
        self
    }

    /// Pushes a `Token` onto the front of this `Pointer`.
    pub fn push_front<'t>(&mut self, token: impl Into<Token<'t>>) {
        let token = token.into();
        self.0.insert(0, '/');
        self.0.insert_str(1, token.encoded());
    }

    /// Pushes a `Token` onto the back of this `Pointer`.
    pub fn push_back<'t>(&mut self, token: impl Into<Token<'t>>) {
        let token = token.into();
        self.0.push('/');
        self.0.push_str(token.encoded());
    }

    /// Removes and returns the last `Token` in the `Pointer` if it exists.
    pub fn pop_back(&mut self) -> Option<Token<'static>> {
        let idx = self.0.rfind('/')?;
        let back = self.0.split_off(idx + 1);
        // drop the separator that preceded the popped token
        self.0.truncate(idx);
        Some(Token::from_encoded_unchecked(back))
    }

    /// Removes and returns the first `Token` in the `Pointer` if it exists.
    pub fn pop_front(&mut self) -> Option<Token<'static>> {
        if self.is_root() {
            return None;
        }
        let tail = match self.0[1..].find('/') {
            Some(idx) => self.0.split_off(idx + 1),
            None => String::new(),
        };
        let mut front = core::mem::replace(&mut self.0, tail);
        front.remove(0);
        Some(Token::from_encoded_unchecked(front))
    }

    /// Appends `other` onto `self`.
    pub fn append(&mut self, other: &Pointer) -> &PointerBuf {
        self.0.push_str(other.as_str());
        self
    }

    /// Clears the `Pointer`, setting it to root (`""`).
    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl Deref for PointerBuf {
    type Target = Pointer;
    fn deref(&self) -> &Self::Target {
        // SAFETY: `PointerBuf` only ever holds valid pointers
        unsafe { Pointer::new_unchecked(self.0.as_str()) }
    }
}

impl Borrow<Pointer> for PointerBuf {
    fn borrow(&self) -> &Pointer {
        self
    }
}

impl AsRef<Pointer> for PointerBuf {
    fn as_ref(&self) -> &Pointer {
        self
    }
}

impl AsRef<str> for PointerBuf {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&Pointer> for PointerBuf {
    fn from(value: &Pointer) -> Self {
        value.to_buf()
    }
}

impl<'t> From<Token<'t>> for PointerBuf {
    fn from(t: Token<'t>) -> Self {
        PointerBuf::from_tokens([t])
    }
}

impl From<usize> for PointerBuf {
    fn from(value: usize) -> Self {
        PointerBuf::from_tokens([value])
    }
}

impl TryFrom<String> for PointerBuf {
    type Error = ParseError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<&str> for PointerBuf {
    type Error = ParseError;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl FromStr for PointerBuf {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl PartialEq<&str> for PointerBuf {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl PartialEq<str> for PointerBuf {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<Pointer> for PointerBuf {
    fn eq(&self, other: &Pointer) -> bool {
        self.0 == other.0
    }
}

impl PartialEq<&Pointer> for PointerBuf {
    fn eq(&self, other: &&Pointer) -> bool {
        self.0 == other.0
    }
}

impl fmt::Debug for PointerBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PointerBuf").field(&self.0).finish()
    }
}

impl fmt::Display for PointerBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PointerBuf {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.0, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PointerBuf {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        PointerBuf::parse(s).map_err(D::Error::custom)
    }
}

#[cfg(feature = "miette")]
impl miette::SourceCode for PointerBuf {
    fn read_span<'a>(
        &'a self,
        span: &miette::SourceSpan,
        context_lines_before: usize,
        context_lines_after: usize,
    ) -> Result<alloc::boxed::Box<dyn miette::SpanContents<'a> + 'a>, miette::MietteError> {
        miette::SourceCode::read_span(&self.0, span, context_lines_before, context_lines_after)
    }
}

/*
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
╔══════════════════════════════════════════════════════════════════════════════╗
║                                                                              ║
║                                  ParseError                                  ║
║                                 ¯¯¯¯¯¯¯¯¯¯¯¯                                 ║
╚══════════════════════════════════════════════════════════════════════════════╝
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
*/

/// Indicates that a `Pointer` was malformed and unable to be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// `Pointer` is neither empty nor starts with a slash (`'/'`).
    NoLeadingSlash,

    /// `Pointer` contained invalid encoding (`~` not followed by `0` or `1`).
    InvalidEncoding {
        /// Offset of the partial pointer starting with the token that contained
        /// the invalid encoding
        offset: usize,
        /// The source `EncodingError`, whose offset is relative to the token
        source: EncodingError,
    },
}

impl ParseError {
    /// Returns `true` if this error is `NoLeadingSlash`.
    pub fn is_no_leading_slash(&self) -> bool {
        matches!(self, Self::NoLeadingSlash)
    }

    /// Returns `true` if this error is `InvalidEncoding`.
    pub fn is_invalid_encoding(&self) -> bool {
        matches!(self, Self::InvalidEncoding { .. })
    }

    /// Offset of the partial pointer starting with the token which caused the
    /// error.
    /// ```text
    /// "/foo/invalid~tilde/invalid"
    ///      ↑
    ///      4
    /// ```
    /// ```
    /// # use jsonpointer::PointerBuf;
    /// let err = PointerBuf::parse("/foo/invalid~tilde/invalid").unwrap_err();
    /// assert_eq!(err.pointer_offset(), 4)
    /// ```
    pub fn pointer_offset(&self) -> usize {
        match *self {
            Self::NoLeadingSlash => 0,
            Self::InvalidEncoding { offset, .. } => offset,
        }
    }

    /// Offset of the invalid `~` from within the offending token.
    /// ```text
    /// "/foo/invalid~tilde/invalid"
    ///              ↑
    ///              7
    /// ```
    /// ```
    /// # use jsonpointer::PointerBuf;
    /// let err = PointerBuf::parse("/foo/invalid~tilde/invalid").unwrap_err();
    /// assert_eq!(err.source_offset(), 7)
    /// ```
    pub fn source_offset(&self) -> usize {
        match self {
            Self::NoLeadingSlash => 0,
            Self::InvalidEncoding { source, .. } => source.offset,
        }
    }

    /// Offset of the first invalid encoding from within the pointer.
    /// ```text
    /// "/foo/invalid~tilde/invalid"
    ///              ↑
    ///             12
    /// ```
    /// ```
    /// # use jsonpointer::PointerBuf;
    /// let err = PointerBuf::parse("/foo/invalid~tilde/invalid").unwrap_err();
    /// assert_eq!(err.complete_offset(), 12)
    /// ```
    pub fn complete_offset(&self) -> usize {
        match self {
            Self::NoLeadingSlash => 0,
            // skip the token's leading slash
            Self::InvalidEncoding { offset, source } => offset + 1 + source.offset,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoLeadingSlash => {
                write!(
                    f,
                    "json pointer is malformed as it does not start with a slash ('/')"
                )
            }
            Self::InvalidEncoding { source, .. } => write!(f, "{source}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidEncoding { source, .. } => std::error::Error::source(source),
            Self::NoLeadingSlash => None,
        }
    }
}

/*
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
╔══════════════════════════════════════════════════════════════════════════════╗
║                                                                              ║
║                                   validate                                   ║
║                                  ¯¯¯¯¯¯¯¯¯¯                                  ║
╚══════════════════════════════════════════════════════════════════════════════╝
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
*/

const fn validate(value: &str) -> Result<&str, ParseError> {
    if value.is_empty() {
        return Ok(value);
    }
    let bytes = value.as_bytes();
    if bytes[0] != b'/' {
        return Err(ParseError::NoLeadingSlash);
    }
    // offset of the current token's leading slash
    let mut ptr_offset = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'/' => {
                ptr_offset = i;
            }
            b'~' => {
                if i + 1 >= bytes.len() || (bytes[i + 1] != b'0' && bytes[i + 1] != b'1') {
                    return Err(ParseError::InvalidEncoding {
                        offset: ptr_offset,
                        source: EncodingError {
                            offset: i - ptr_offset - 1,
                        },
                    });
                }
                // skip the escaped character
                i += 1;
            }
            _ => {}
        }
        i += 1;
    }
    Ok(value)
}
