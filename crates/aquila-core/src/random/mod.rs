//! Pseudo-random number generation for the convenience constructors.
//!
//! Provides a fast, high-quality PRNG ([`Rng`]) based on the xoshiro256\*\*
//! algorithm and a [`Random`] capability trait implemented for every
//! primitive scalar type.
//!
//! # Design
//!
//! - **Zero external dependencies** — the PRNG is implemented from scratch.
//! - **Explicit state** — all functions take `&mut Rng`; there is no hidden
//!   global or thread-local state.
//! - Seeding uses `SplitMix64` to expand a single `u64` into the 4-word
//!   xoshiro256\*\* state (avoids the zero-state trap).

// ---------------------------------------------------------------------------
// SplitMix64 — used only for seeding
// ---------------------------------------------------------------------------

/// Advance a `SplitMix64` state by one step and return the mixed output.
#[inline]
fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

// ---------------------------------------------------------------------------
// Rng — xoshiro256**
// ---------------------------------------------------------------------------

/// A fast, high-quality pseudo-random number generator.
///
/// Uses the xoshiro256\*\* algorithm (Blackman & Vigna), which has a period of
/// 2^256 − 1 and passes all `BigCrush` tests.
///
/// # Examples
///
/// ```
/// use aquila_core::random::Rng;
///
/// let mut rng = Rng::new(42);
/// let value = rng.next_f64(); // uniform in [0, 1)
/// assert!((0.0..1.0).contains(&value));
/// ```
pub struct Rng {
    s: [u64; 4],
}

impl Rng {
    /// Create a new PRNG seeded from a single `u64`.
    ///
    /// The seed is expanded into the 4-word internal state via `SplitMix64`.
    pub fn new(seed: u64) -> Self {
        let mut sm = seed;
        let s = [
            splitmix64(&mut sm),
            splitmix64(&mut sm),
            splitmix64(&mut sm),
            splitmix64(&mut sm),
        ];
        Self { s }
    }

    /// Re-seed the generator, discarding all previous state.
    pub fn seed(&mut self, seed: u64) {
        *self = Self::new(seed);
    }

    /// Generate the next random `u64`.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let result = (self.s[1].wrapping_mul(5)).rotate_left(7).wrapping_mul(9);

        let t = self.s[1] << 17;

        self.s[2] ^= self.s[0];
        self.s[3] ^= self.s[1];
        self.s[1] ^= self.s[2];
        self.s[0] ^= self.s[3];

        self.s[2] ^= t;
        self.s[3] = self.s[3].rotate_left(45);

        result
    }

    /// Generate a random `f64` uniformly distributed in [0, 1).
    ///
    /// Uses the upper 53 bits of `next_u64` divided by 2^53.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Generate a random index in `[0, bound)`. Returns 0 when `bound` is 0.
    #[inline]
    pub fn next_below(&mut self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }
        let idx = (self.next_f64() * bound as f64) as usize;
        // Clamp the floating-point edge case where next_f64 rounds up.
        idx.min(bound - 1)
    }
}

// ---------------------------------------------------------------------------
// Random — the capability consumed by random constructors
// ---------------------------------------------------------------------------

/// Types that can produce a pseudo-random instance from an [`Rng`].
///
/// Floats draw uniformly from [0, 1); integers draw from the full raw
/// stream. Only the convenience constructors consume this capability, never
/// the core algorithms.
pub trait Random: Sized {
    fn random(rng: &mut Rng) -> Self;
}

macro_rules! impl_random_float {
    ($ty:ty) => {
        impl Random for $ty {
            #[inline]
            fn random(rng: &mut Rng) -> Self {
                rng.next_f64() as $ty
            }
        }
    };
}

impl_random_float!(f32);
impl_random_float!(f64);

macro_rules! impl_random_int {
    ($ty:ty) => {
        impl Random for $ty {
            #[inline]
            #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
            fn random(rng: &mut Rng) -> Self {
                rng.next_u64() as $ty
            }
        }
    };
}

impl_random_int!(i8);
impl_random_int!(i16);
impl_random_int!(i32);
impl_random_int!(i64);
impl_random_int!(isize);

impl Random for i128 {
    #[inline]
    fn random(rng: &mut Rng) -> Self {
        let high = i128::from(rng.next_u64());
        let low = i128::from(rng.next_u64());
        (high << 64) | low
    }
}

// ===========================================================================
// Tests
// ===========================================================================
