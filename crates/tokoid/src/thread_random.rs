use crate::RandSource;
use rand::{Rng, rng};

/// A `RandSource` that uses the thread-local RNG (`rand::rng()`).
///
/// Each OS thread has its own RNG instance, so calls from multiple threads
/// are contention-free and safe. This type does **not** store the RNG
/// itself; it is a zero-sized wrapper that accesses the thread-local
/// generator on each call and may be freely shared across threads.
///
/// The underlying generator is fast and automatically reseeded
/// periodically. It is **not** a substitute for a vetted cryptographic
/// source when tokens must be unguessable.
#[derive(Default, Clone, Debug)]
pub struct ThreadRandom;

impl RandSource<u64> for ThreadRandom {
    fn rand(&self, bound: u64) -> u64 {
        rng().random_range(0..bound)
    }
}
