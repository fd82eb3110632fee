use std::ops::{Add, Div, Mul, Sub};

use num_traits::NumCast;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Linearly maps `value` from `[from_lo, from_hi]` onto `[to_lo, to_hi]`.
pub fn map<T>(value: T, from_lo: T, from_hi: T, to_lo: T, to_hi: T) -> T
where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<Output = T> + Div<Output = T>,
{
    to_lo + ((to_hi - to_lo) * (value - from_lo)) / (from_hi - from_lo)
}

/// Draws one raw `u32` from `rng` and maps the generator's full output range
/// onto `[from, to]`.
///
/// Both endpoints are reachable, `to` only when the generator yields
/// `u32::MAX`. Integer types truncate toward `from`.
pub fn random_range<T, R>(rng: &mut R, from: T, to: T) -> T
where
    T: Copy + NumCast + Add<Output = T> + Sub<Output = T> + Mul<Output = T> + Div<Output = T>,
    R: RngCore + ?Sized,
{
    let raw = rng.next_u32();

    // u32 always fits in the f32/f64/u64/usize targets this is used with.
    match (T::from(raw), T::from(u32::MIN), T::from(u32::MAX)) {
        (Some(value), Some(lo), Some(hi)) => map(value, lo, hi, from, to),
        _ => from,
    }
}

/// In-place Fisher–Yates shuffle.
pub fn shuffle<T, R: Rng + ?Sized>(rng: &mut R, items: &mut [T]) {
    if items.len() < 2 {
        return;
    }

    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// A deterministic generator for reproducible runs.
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// A generator seeded from the operating system.
pub fn entropy() -> StdRng {
    StdRng::from_entropy()
}
