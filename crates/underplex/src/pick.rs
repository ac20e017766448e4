//! Random and single-element selection from collections.

use rand::seq::IteratorRandom;
use rand::Rng;

/// Uniformly random element of `items`, or `None` if empty.
pub fn select_random<I: IntoIterator>(items: I) -> Option<I::Item> {
    select_random_with(items, &mut rand::thread_rng())
}

/// Same as [`select_random`] with a caller-supplied generator, for replayable draws.
pub fn select_random_with<I, R>(items: I, rng: &mut R) -> Option<I::Item>
where
    I: IntoIterator,
    R: Rng + ?Sized,
{
    items.into_iter().choose(rng)
}

/// First element of `items`; meant for collections known to hold exactly one.
pub fn select_only<I: IntoIterator>(items: I) -> Option<I::Item> {
    items.into_iter().next()
}
