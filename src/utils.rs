//! Utilities

use std::cmp::Ordering;

use rand::{Rng, RngExt as _};

/// Element of `items` with the largest `key`, ties broken uniformly at random.
///
/// Returns `None` when `items` is empty. Every maximal element has the same chance of being
/// picked, using reservoir sampling over the running set of ties.
pub fn argmax_random_tie<'a, T, K, F, R>(items: &'a [T], mut key: F, rng: &mut R) -> Option<&'a T>
where
    K: Ord,
    F: FnMut(&T) -> K,
    R: Rng + ?Sized,
{
    let mut best: Option<(&T, K)> = None;
    let mut n_ties = 0usize;
    for item in items {
        let k = key(item);
        match best.as_ref().map(|(_, best_key)| k.cmp(best_key)) {
            Some(Ordering::Less) => {}
            Some(Ordering::Equal) => {
                n_ties += 1;
                if rng.random_range(0..n_ties) == 0 {
                    best = Some((item, k));
                }
            }
            _ => {
                best = Some((item, k));
                n_ties = 1;
            }
        }
    }
    best.map(|(item, _)| item)
}
