use crate::base62::{MAX_TOKEN_LENGTH, MIN_TOKEN_LENGTH};

pub type Result<T> = core::result::Result<T, Base62Error>;

/// All possible base62 decode failures.
///
/// Errors only ever surface while decoding: encoding and generation are
/// infallible.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Base62Error {
    /// The input is shorter than [`MIN_TOKEN_LENGTH`].
    #[error("base62 token of length {len} is smaller than the minimum of {}", MIN_TOKEN_LENGTH)]
    TokenTooSmall { len: usize },

    /// The input is longer than [`MAX_TOKEN_LENGTH`].
    #[error("base62 token of length {len} is larger than the maximum of {}", MAX_TOKEN_LENGTH)]
    TokenTooBig { len: usize },

    /// The input contains a byte outside the base62 alphabet.
    #[error("non base62 byte {byte:#04x} at index {index}")]
    InvalidCharacter { byte: u8, index: usize },
}
