/// A trait for random sources that return bounded random integers.
///
/// This abstraction allows you to plug in a real random source or a mocked
/// random source in tests.
///
/// The random type `T` is generic (typically `u64`).
///
/// # Example
/// ```
/// use tokoid::RandSource;
///
/// struct FixedRand;
/// impl RandSource<u64> for FixedRand {
///     fn rand(&self, bound: u64) -> u64 {
///         1234 % bound
///     }
/// }
///
/// let rng = FixedRand;
/// assert_eq!(rng.rand(10_000), 1234);
/// ```
pub trait RandSource<T> {
    /// Returns a uniformly distributed integer in `[0, bound)`.
    ///
    /// `bound` is always non-zero.
    fn rand(&self, bound: T) -> T;
}
