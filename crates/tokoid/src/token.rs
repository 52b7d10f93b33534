use crate::base62::{Result, decode_base62, encode_base62};
use core::fmt;
use core::str::FromStr;

/// A `u64` that is addressed by the outside world as a base62 encoded
/// string.
///
/// The text form is produced by [`Token::encode`] and parsed by
/// [`Token::decode`]; [`fmt::Display`] and [`FromStr`] delegate to them, so
/// a token can be used transparently wherever a string representation is
/// expected while the in-memory value stays a `u64` for fast, indexed,
/// unique lookups.
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Token(u64);

impl Token {
    /// Converts a raw `u64` into a token.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw `u64` behind the token.
    #[must_use]
    pub const fn to_raw(&self) -> u64 {
        self.0
    }

    /// Encodes the token into its shortest base62 form, most-significant
    /// digit first, with no leading zero characters.
    ///
    /// The zero token encodes to the empty string, which [`Token::decode`]
    /// rejects. The asymmetry is intentional: zero is reserved as an
    /// "absent" sentinel and is never produced by a
    /// [`TokenGenerator`](crate::TokenGenerator).
    ///
    /// # Example
    /// ```
    /// use tokoid::Token;
    ///
    /// assert_eq!(Token::from_raw(3781).encode(), "yz");
    /// assert_eq!(Token::from_raw(0).encode(), "");
    /// ```
    #[must_use]
    pub fn encode(&self) -> String {
        encode_base62(self.0)
    }

    /// Decodes a 1-10 character base62 string into a token.
    ///
    /// # Errors
    ///
    /// Returns an error if the input:
    /// - is shorter than [`MIN_TOKEN_LENGTH`](crate::MIN_TOKEN_LENGTH)
    /// - is longer than [`MAX_TOKEN_LENGTH`](crate::MAX_TOKEN_LENGTH)
    /// - contains a character outside [`ALPHABET`](crate::ALPHABET)
    ///
    /// # Example
    /// ```
    /// use tokoid::Token;
    ///
    /// let token = Token::decode("yz").unwrap();
    /// assert_eq!(token.to_raw(), 3781);
    /// ```
    pub fn decode(encoded: &str) -> Result<Self> {
        decode_base62(encoded).map(Self)
    }
}

impl From<u64> for Token {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl From<Token> for u64 {
    fn from(token: Token) -> Self {
        token.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl FromStr for Token {
    type Err = crate::Base62Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::decode(s)
    }
}
