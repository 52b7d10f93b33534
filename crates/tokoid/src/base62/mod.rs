mod codec;
mod error;

pub use codec::{ALPHABET, DEFAULT_TOKEN_LENGTH, MAX_TOKEN_LENGTH, MIN_TOKEN_LENGTH};
pub use error::*;

pub(crate) use codec::{decode_base62, encode_base62, upper_bound};
