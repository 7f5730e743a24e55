//! Abstract index representation for RFC 6901.
//!
//! [RFC 6901](https://datatracker.ietf.org/doc/html/rfc6901) defines two valid
//! ways to represent array indices as Pointer tokens: non-negative integers
//! without leading zeros, and the character `-`, which stands for the index
//! after the last existing array member.
//!
//! Reading, assigning and removing all require an existing element, so `-`
//! never resolves; it is still a syntactically valid index and is reported as
//! out of bounds rather than as a parse failure.
//!
//! ```
//! # use jsonpointer::{Index, Token};
//! assert_eq!(Token::new("1").to_index(), Ok(Index::Num(1)));
//! assert_eq!(Token::new("-").to_index(), Ok(Index::Next));
//! assert!(Token::new("a").to_index().is_err());
//!
//! assert_eq!(Index::Num(0).for_len(1), Ok(0));
//! assert!(Index::Num(1).for_len(1).is_err());
//! assert!(Index::Next.for_len(1).is_err());
//! ```

use crate::Token;
use alloc::string::String;
use core::{fmt, num::ParseIntError};

/// Represents an abstract index into an array.
///
/// If provided an upper bound with [`Self::for_len`], will produce a concrete
/// numerical index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Index {
    /// A non-negative integer value
    Num(usize),
    /// The `-` token, the position of the next would-be item in the array
    Next,
}

impl Index {
    /// Bounds the index for a given array length (exclusive).
    ///
    /// Only indices that are less than the given length are accepted, so the
    /// resolved numerical index can be used to access an existing element.
    /// [`Self::Next`] is therefore always out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use jsonpointer::Index;
    /// assert_eq!(Index::Num(0).for_len(1), Ok(0));
    /// assert!(Index::Num(1).for_len(1).is_err());
    /// assert!(Index::Next.for_len(1).is_err());
    /// ```
    /// # Errors
    /// Returns [`OutOfBoundsError`] if the index is out of bounds.
    pub fn for_len(&self, length: usize) -> Result<usize, OutOfBoundsError> {
        match *self {
            Self::Num(index) if index < length => Ok(index),
            Self::Num(index) => Err(OutOfBoundsError { length, index }),
            Self::Next => Err(OutOfBoundsError {
                length,
                index: length,
            }),
        }
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Num(index) => write!(f, "{index}"),
            Self::Next => f.write_str("-"),
        }
    }
}

impl From<usize> for Index {
    fn from(value: usize) -> Self {
        Self::Num(value)
    }
}

impl TryFrom<&Token<'_>> for Index {
    type Error = ParseIndexError;

    fn try_from(value: &Token) -> Result<Self, Self::Error> {
        // indices never contain encoded characters
        Index::try_from(value.encoded())
    }
}

impl TryFrom<&str> for Index {
    type Error = ParseIndexError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        if s == "-" {
            return Ok(Index::Next);
        }
        if let Some(offset) = s.bytes().position(|b| !b.is_ascii_digit()) {
            return Err(ParseIndexError::InvalidCharacter(InvalidCharacterError {
                source: String::from(s),
                offset,
            }));
        }
        if s.len() > 1 && s.starts_with('0') {
            return Err(ParseIndexError::LeadingZeros);
        }
        // only digits remain: this fails on empty input or overflow
        Ok(s.parse::<usize>().map(Index::Num)?)
    }
}

macro_rules! derive_try_from {
    ($($t:ty),+ $(,)?) => {
        $(
            impl TryFrom<$t> for Index {
                type Error = ParseIndexError;

                fn try_from(value: $t) -> Result<Self, Self::Error> {
                    Index::try_from(value.as_str())
                }
            }
        )*
    }
}

derive_try_from!(String, &String);

impl TryFrom<Token<'_>> for Index {
    type Error = ParseIndexError;

    fn try_from(value: Token<'_>) -> Result<Self, Self::Error> {
        Index::try_from(&value)
    }
}

/*
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
╔══════════════════════════════════════════════════════════════════════════════╗
║                                                                              ║
║                               OutOfBoundsError                               ║
║                              ¯¯¯¯¯¯¯¯¯¯¯¯¯¯¯¯¯¯                              ║
╚══════════════════════════════════════════════════════════════════════════════╝
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
*/

/// Indicates that an `Index` is not within the given bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutOfBoundsError {
    /// The provided array length.
    pub length: usize,

    /// The resolved numerical index.
    ///
    /// [`Index::Next`] resolves to the array length.
    pub index: usize,
}

impl fmt::Display for OutOfBoundsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "index {} out of bounds (limit: {})", self.index, self.length)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for OutOfBoundsError {}

/*
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
╔══════════════════════════════════════════════════════════════════════════════╗
║                                                                              ║
║                               ParseIndexError                                ║
║                              ¯¯¯¯¯¯¯¯¯¯¯¯¯¯¯¯¯                               ║
╚══════════════════════════════════════════════════════════════════════════════╝
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
*/

/// Indicates that the `Token` could not be parsed as valid RFC 6901 array
/// index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseIndexError {
    /// The Token does not represent a valid integer (empty, or too large).
    InvalidInteger(ParseIntError),
    /// The Token contains leading zeros.
    LeadingZeros,
    /// The Token contains a character that is not a decimal digit.
    InvalidCharacter(InvalidCharacterError),
}

impl From<ParseIntError> for ParseIndexError {
    fn from(source: ParseIntError) -> Self {
        Self::InvalidInteger(source)
    }
}

impl fmt::Display for ParseIndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseIndexError::InvalidInteger(_) => {
                write!(f, "failed to parse token as an integer")
            }
            ParseIndexError::LeadingZeros => write!(
                f,
                "token contained leading zeros, which are disallowed by RFC 6901"
            ),
            ParseIndexError::InvalidCharacter(_) => {
                write!(f, "failed to parse token as an index")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseIndexError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseIndexError::InvalidInteger(source) => Some(source),
            ParseIndexError::InvalidCharacter(source) => Some(source),
            ParseIndexError::LeadingZeros => None,
        }
    }
}

/// Indicates that a non-digit character was found when parsing the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidCharacterError {
    pub(crate) source: String,
    pub(crate) offset: usize,
}

impl InvalidCharacterError {
    /// Byte offset of the offending character within the token.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The offending character.
    pub fn char(&self) -> char {
        // offset always points at a char boundary: non-digits were located
        // byte-wise, and ascii digits are single bytes
        self.source[self.offset..].chars().next().unwrap_or('\u{fffd}')
    }
}

impl fmt::Display for InvalidCharacterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "token contains the non-digit character '{}', which is disallowed by RFC 6901",
            self.char()
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidCharacterError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_from_usize() {
        assert_eq!(Index::from(5usize), Index::Num(5));
    }

    #[test]
    fn index_try_from_str() {
        assert_eq!(Index::try_from("0"), Ok(Index::Num(0)));
        assert_eq!(Index::try_from("42"), Ok(Index::Num(42)));
        assert_eq!(Index::try_from("-"), Ok(Index::Next));
        assert_eq!(Index::try_from("01"), Err(ParseIndexError::LeadingZeros));
        assert!(matches!(
            Index::try_from(""),
            Err(ParseIndexError::InvalidInteger(_))
        ));
        assert!(matches!(
            Index::try_from("99999999999999999999999999"),
            Err(ParseIndexError::InvalidInteger(_))
        ));
        let Err(ParseIndexError::InvalidCharacter(err)) = Index::try_from("12a") else {
            panic!("expected invalid character");
        };
        assert_eq!(err.offset(), 2);
        assert_eq!(err.char(), 'a');
    }

    #[test]
    fn for_len() {
        assert_eq!(Index::Num(0).for_len(1), Ok(0));
        assert_eq!(
            Index::Num(1).for_len(1),
            Err(OutOfBoundsError {
                length: 1,
                index: 1
            })
        );
        assert_eq!(
            Index::Next.for_len(3),
            Err(OutOfBoundsError {
                length: 3,
                index: 3
            })
        );
    }

    #[test]
    fn display() {
        assert_eq!(Index::Num(5).to_string(), "5");
        assert_eq!(Index::Next.to_string(), "-");
        assert_eq!(
            OutOfBoundsError {
                length: 2,
                index: 4
            }
            .to_string(),
            "index 4 out of bounds (limit: 2)"
        );
        assert_eq!(
            ParseIndexError::LeadingZeros.to_string(),
            "token contained leading zeros, which are disallowed by RFC 6901"
        );
        assert_eq!(
            Index::try_from("a").unwrap_err().to_string(),
            "failed to parse token as an index"
        );
    }
}
