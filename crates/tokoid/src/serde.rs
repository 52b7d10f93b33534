use crate::Token;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl Serialize for Token {
    /// Serializes the token as its base62 encoded string, so it can be used
    /// transparently as a structured-data field (e.g. in JSON).
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_str(self.encode().as_str())
    }
}

impl<'de> Deserialize<'de> for Token {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TokenVisitor;

        impl serde::de::Visitor<'_> for TokenVisitor {
            type Value = Token;

            fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                formatter.write_str("a base62 encoded token string")
            }

            #[inline]
            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Token::decode(v).map_err(serde::de::Error::custom)
            }
        }

        d.deserialize_str(TokenVisitor)
    }
}

/// Serializes a [`Token`] as its raw `u64` instead of its encoded string.
///
/// Useful for storage layers that keep the integer form for indexed
/// lookups:
///
/// ```
/// use serde::{Deserialize, Serialize};
/// use tokoid::Token;
///
/// #[derive(Serialize, Deserialize)]
/// struct Row {
///     #[serde(with = "tokoid::as_raw")]
///     id: Token,
/// }
/// ```
pub mod as_raw {
    use super::*;

    pub fn serialize<S>(token: &Token, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        token.to_raw().serialize(s)
    }

    pub fn deserialize<'de, D>(d: D) -> Result<Token, D::Error>
    where
        D: Deserializer<'de>,
    {
        u64::deserialize(d).map(Token::from_raw)
    }
}
