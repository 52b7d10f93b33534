//! Randomized base62 encoded tokens backed by a single `u64`.
//!
//! A [`Token`] renders as a short, reversible base62 string: the outside
//! world always addresses it by its text form, while the in-memory value
//! stays a `u64` for fast, indexed, unique lookups in databases. This makes
//! it a good fit for shorturl slugs or semi-random API primary keys.
//!
//! [`TokenGenerator`] draws tokens whose encoded form is bounded in length,
//! and never emits the zero token: zero is reserved as an "absent" sentinel
//! for consuming systems.
//!
//! NOTE: Generated tokens are random, not unique. Remember to always check
//! for collisions when adding randomized tokens to a database.
//!
//! ```
//! use tokoid::{Token, TokenGenerator};
//!
//! let token = TokenGenerator::new().generate();
//! let encoded = token.encode();
//! assert!(!encoded.is_empty());
//!
//! let decoded = Token::decode(&encoded).expect("generated tokens round-trip");
//! assert_eq!(decoded, token);
//! ```

mod base62;
mod generator;
mod rand;
#[cfg(feature = "serde")]
mod serde;
mod thread_random;
mod token;

pub use crate::base62::*;
pub use crate::generator::*;
pub use crate::rand::*;
#[cfg(feature = "serde")]
pub use crate::serde::*;
pub use crate::thread_random::*;
pub use crate::token::*;
