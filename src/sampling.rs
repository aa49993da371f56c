//! Seeded sampling primitives shared by every pipeline stage.
//!
//! All randomness in the crate flows through one `StdRng` passed into these
//! helpers; nothing here (or anywhere outside tests) touches the OS RNG, which
//! is what makes the end-to-end determinism contract hold.

use chrono::{DateTime, Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use uuid::Uuid;

pub const SECONDS_PER_DAY: u32 = 86_400;

/// Weighted categorical choice over `items`.
///
/// `weights` are raw (not necessarily normalized) non-negative weights, one
/// per item, with a positive sum. Used for gender, cart size, quantity, and
/// device-type distributions so the distribution logic lives in exactly one
/// place.
pub fn weighted_choice<'a, T, R: Rng + ?Sized>(
    rng: &mut R,
    items: &'a [T],
    weights: &[f64],
) -> &'a T {
    assert_eq!(items.len(), weights.len(), "one weight per candidate");
    assert!(!items.is_empty(), "weighted choice over empty candidates");

    let total: f64 = weights.iter().sum();
    assert!(total > 0.0, "weights must sum to a positive value");

    let mut roll = rng.gen_range(0.0..total);
    for (item, &weight) in items.iter().zip(weights) {
        if roll < weight {
            return item;
        }
        roll -= weight;
    }
    // Float round-off can leave roll a hair past the last bucket.
    &items[items.len() - 1]
}

/// Uniform choice over a non-empty slice.
pub fn uniform_choice<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> &'a T {
    assert!(!items.is_empty(), "uniform choice over empty candidates");
    &items[rng.gen_range(0..items.len())]
}

/// `k` distinct elements of `items`, sampled without replacement.
pub fn choose_distinct<T: Clone, R: Rng + ?Sized>(rng: &mut R, items: &[T], k: usize) -> Vec<T> {
    items.choose_multiple(rng, k).cloned().collect()
}

/// Uniform instant inside a window of `window_days` days starting at
/// `window_start`: a uniform day offset combined with a uniform second of day.
pub fn datetime_in_window<R: Rng + ?Sized>(
    rng: &mut R,
    window_start: DateTime<Utc>,
    window_days: u32,
) -> DateTime<Utc> {
    let day = rng.gen_range(0..window_days) as i64;
    let second = rng.gen_range(0..SECONDS_PER_DAY) as i64;
    window_start + Duration::days(day) + Duration::seconds(second)
}

/// A v4 UUID whose random bytes come from the seeded RNG instead of the OS.
pub fn seeded_uuid<R: Rng + ?Sized>(rng: &mut R) -> Uuid {
    uuid::Builder::from_random_bytes(rng.gen()).into_uuid()
}

/// Monotonic identifier sequence, shared across all orders so line-item ids
/// are globally unique and gapless.
#[derive(Debug)]
pub struct IdSequence {
    next: u64,
}

impl IdSequence {
    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }

    pub fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn weighted_choice_respects_degenerate_weights() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let picked = weighted_choice(&mut rng, &["a", "b", "c"], &[0.0, 1.0, 0.0]);
            assert_eq!(*picked, "b");
        }
    }

    #[test]
    fn choose_distinct_has_no_duplicates() {
        let mut rng = StdRng::seed_from_u64(7);
        let items = [1, 2, 3, 4, 5];
        for _ in 0..100 {
            let mut picked = choose_distinct(&mut rng, &items, 3);
            picked.sort_unstable();
            picked.dedup();
            assert_eq!(picked.len(), 3);
        }
    }

    #[test]
    fn datetime_stays_inside_window() {
        let mut rng = StdRng::seed_from_u64(7);
        let start = Utc::now() - Duration::days(365);
        for _ in 0..1000 {
            let ts = datetime_in_window(&mut rng, start, 365);
            assert!(ts >= start);
            assert!(ts < start + Duration::days(365));
        }
    }

    #[test]
    fn id_sequence_is_gapless() {
        let mut seq = IdSequence::default();
        assert_eq!(seq.next_id(), 1);
        assert_eq!(seq.next_id(), 2);
        assert_eq!(seq.next_id(), 3);
    }

    #[test]
    fn seeded_uuid_is_reproducible() {
        let a = seeded_uuid(&mut StdRng::seed_from_u64(99));
        let b = seeded_uuid(&mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
        assert_eq!(a.get_version_num(), 4);
    }
}
