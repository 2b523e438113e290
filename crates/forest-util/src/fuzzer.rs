use rand::seq::SliceRandom;
use rand::{rngs::OsRng, Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use std::cell::RefCell;

/// One step of a randomized tree workload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Insert(i64, i64),
    Remove(i64),
}

/// A fuzzer for generating random tree workloads.
///
/// Uses the xoshiro256** PRNG for reproducible random sequences when seeded.
///
/// # Examples
///
/// ```
/// use forest_util::fuzzer::{Fuzzer, Op};
///
/// let fuzzer = Fuzzer::new(Some([7u8; 32]));
///
/// let n = fuzzer.random_int(1, 10);
/// assert!(n >= 1 && n <= 10);
///
/// let ops = fuzzer.ops(50, 0..20, 0.3);
/// assert_eq!(ops.len(), 50);
/// assert!(ops.iter().all(|op| match op {
///     Op::Insert(k, _) | Op::Remove(k) => (0..20).contains(k),
/// }));
/// ```
pub struct Fuzzer {
    /// The seed used to initialize the PRNG.
    pub seed: [u8; 32],
    rng: RefCell<Xoshiro256StarStar>,
}

impl Fuzzer {
    /// Create a new fuzzer with an optional seed.
    ///
    /// If no seed is provided, a random seed will be generated using `OsRng`.
    pub fn new(seed: Option<[u8; 32]>) -> Self {
        let seed = seed.unwrap_or_else(|| {
            let mut bytes = [0u8; 32];
            OsRng.fill_bytes(&mut bytes);
            bytes
        });

        Self {
            seed,
            rng: RefCell::new(Xoshiro256StarStar::from_seed(seed)),
        }
    }

    /// Generate a random integer in the range [min, max] (inclusive).
    pub fn random_int(&self, min: i64, max: i64) -> i64 {
        self.rng.borrow_mut().gen_range(min..=max)
    }

    /// Generate a random boolean with the given probability of being true.
    pub fn random_bool(&self, probability: f64) -> bool {
        self.rng.borrow_mut().gen_bool(probability)
    }

    /// Pick a random element from a slice.
    pub fn pick<'a, T>(&self, elements: &'a [T]) -> &'a T {
        let idx = self.rng.borrow_mut().gen_range(0..elements.len());
        &elements[idx]
    }

    /// Repeat a callback `times` times and collect results.
    pub fn repeat<T, F>(&self, times: usize, mut callback: F) -> Vec<T>
    where
        F: FnMut() -> T,
    {
        (0..times).map(|_| callback()).collect()
    }

    /// Every key of `keys` exactly once, in random order.
    pub fn shuffled(&self, keys: std::ops::Range<i64>) -> Vec<i64> {
        let mut out: Vec<i64> = keys.collect();
        out.shuffle(&mut *self.rng.borrow_mut());
        out
    }

    /// `len` random operations on keys drawn from `keys`.
    ///
    /// Each step is a removal with probability `remove_ratio`, otherwise an
    /// insert with a random info value.
    pub fn ops(&self, len: usize, keys: std::ops::Range<i64>, remove_ratio: f64) -> Vec<Op> {
        self.repeat(len, || {
            let key = self.random_int(keys.start, keys.end - 1);
            if self.random_bool(remove_ratio) {
                Op::Remove(key)
            } else {
                Op::Insert(key, self.random_int(-1000, 1000))
            }
        })
    }
}
