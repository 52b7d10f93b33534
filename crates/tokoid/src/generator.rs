use crate::base62::{DEFAULT_TOKEN_LENGTH, MAX_TOKEN_LENGTH, MIN_TOKEN_LENGTH, upper_bound};
use crate::{RandSource, ThreadRandom, Token};

/// Generates randomized [`Token`]s whose encoded form is bounded in length.
///
/// A token drawn for length `n` encodes to *up to* `n` characters: values
/// are uniform in `[0, 62^n)`, so shorter encodings are possible and
/// expected, matching [`Token::encode`]'s no-leading-zero behavior. The
/// generator never returns the zero token; zero is reserved as an "absent"
/// sentinel for consuming systems.
///
/// Generated tokens are random, not unique. Remember to always check for
/// collisions when adding randomized tokens to a database.
///
/// # Example
/// ```
/// use tokoid::{DEFAULT_TOKEN_LENGTH, TokenGenerator};
///
/// let generator = TokenGenerator::new();
/// let token = generator.generate();
///
/// assert!(token.encode().len() <= DEFAULT_TOKEN_LENGTH);
/// assert_ne!(token.to_raw(), 0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct TokenGenerator<R = ThreadRandom> {
    rng: R,
}

impl TokenGenerator<ThreadRandom> {
    /// Creates a generator backed by the thread-local RNG.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rand(ThreadRandom)
    }
}

impl<R> TokenGenerator<R>
where
    R: RandSource<u64>,
{
    /// Creates a generator with the provided random source.
    ///
    /// Tests can inject a deterministic [`RandSource`]; production code can
    /// swap in a higher-quality source without changing the public
    /// contract.
    pub const fn with_rand(rng: R) -> Self {
        Self { rng }
    }

    /// Returns a token that encodes to up to [`DEFAULT_TOKEN_LENGTH`]
    /// characters.
    pub fn generate(&self) -> Token {
        self.generate_with_length(DEFAULT_TOKEN_LENGTH)
    }

    /// Returns a token that encodes to up to `length` characters.
    ///
    /// `length` is clamped into `[MIN_TOKEN_LENGTH, MAX_TOKEN_LENGTH]`
    /// before use, so any requested length yields a valid token.
    pub fn generate_with_length(&self, length: usize) -> Token {
        let length = length.clamp(MIN_TOKEN_LENGTH, MAX_TOKEN_LENGTH);
        let draw = self.rng.rand(upper_bound(length));
        Token::from_raw(if draw == 0 { 1 } else { draw })
    }
}
