//! Ring: a cyclic, duplicate-free ordering with a movable origin.
//!
//! Purpose
//! - Model a circle of players around a table. Turns start at the first
//!   element, walk forward, and wrap back to the first; the first player may
//!   change mid-game without anyone changing seats.
//!
//! Model
//! - Backed by a plain `Vec<E>`; "cyclic" is semantic only. Neighbors are
//!   modular index arithmetic after an O(n) `index_of`, which is fine for the
//!   expected sizes (tens of elements).
//! - Uniqueness uses `E: PartialEq`. A broken `PartialEq` silently breaks the
//!   no-duplicates invariant; there is no separate identity check.
//!
//! Null handling
//! - There is no null `E` in Rust, so the null-argument failures of the
//!   collection contract cannot occur. Only index and membership violations
//!   surface as `RingError`.

use std::fmt;

/// Contract violations surfaced by `Ring`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RingError {
    /// Index outside the permitted range for the operation.
    IndexOutOfRange { index: usize, len: usize },
    /// The element must already be in the ring (e.g. `make_first`).
    NotPresent,
}

impl fmt::Display for RingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RingError::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for ring of size {len}")
            }
            RingError::NotPresent => write!(f, "element is not in the ring"),
        }
    }
}

impl std::error::Error for RingError {}

/// Ordered, duplicate-free collection whose last element is followed by its first.
///
/// Invariants:
/// - No two elements compare equal.
/// - Index 0 is "first"; the successor of index `len - 1` is index 0.
/// - With one element, that element is its own successor and predecessor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ring<E> {
    roster: Vec<E>,
}

impl<E> Default for Ring<E> {
    fn default() -> Self {
        Self { roster: Vec::new() }
    }
}

impl<E> Ring<E> {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.roster.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }

    /// Remove every element.
    #[inline]
    pub fn clear(&mut self) {
        self.roster.clear();
    }

    /// Element at `index`; fails when `index >= len`.
    pub fn get(&self, index: usize) -> Result<&E, RingError> {
        self.roster.get(index).ok_or(RingError::IndexOutOfRange {
            index,
            len: self.roster.len(),
        })
    }

    /// First element, or `None` when empty.
    #[inline]
    pub fn first(&self) -> Option<&E> {
        self.roster.first()
    }

    /// Last element (the one before first), or `None` when empty.
    #[inline]
    pub fn last(&self) -> Option<&E> {
        self.roster.last()
    }

    /// Elements in order starting at first.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.roster.iter()
    }
}

impl<E: PartialEq> Ring<E> {
    /// Insert `element` at `index`, shifting later elements by one.
    ///
    /// Returns `Ok(false)` without touching the ring if `element` is already
    /// present. Fails when `index > len`.
    pub fn add(&mut self, index: usize, element: E) -> Result<bool, RingError> {
        if index > self.roster.len() {
            return Err(RingError::IndexOutOfRange {
                index,
                len: self.roster.len(),
            });
        }
        if self.contains(&element) {
            return Ok(false);
        }
        self.roster.insert(index, element);
        Ok(true)
    }

    /// Insert at the first position; `false` if already present.
    pub fn add_first(&mut self, element: E) -> bool {
        if self.contains(&element) {
            return false;
        }
        self.roster.insert(0, element);
        true
    }

    /// Insert at the last position; `false` if already present.
    pub fn add_last(&mut self, element: E) -> bool {
        if self.contains(&element) {
            return false;
        }
        self.roster.push(element);
        true
    }

    /// Rotate so `element` becomes first without changing any neighbor relation.
    ///
    /// Returns `Ok(false)` if it already was first. Fails with
    /// `RingError::NotPresent` when the element is not in the ring.
    pub fn make_first(&mut self, element: &E) -> Result<bool, RingError> {
        let p = self.index_of(element).ok_or(RingError::NotPresent)?;
        if p == 0 {
            return Ok(false);
        }
        // old[p..] ++ old[..p]
        self.roster.rotate_left(p);
        tracing::trace!(offset = p, len = self.roster.len(), "ring rotated");
        Ok(true)
    }

    /// Remove `element` if present; `true` iff the ring changed.
    pub fn remove(&mut self, element: &E) -> bool {
        match self.index_of(element) {
            Some(i) => {
                self.roster.remove(i);
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn index_of(&self, element: &E) -> Option<usize> {
        self.roster.iter().position(|e| e == element)
    }

    #[inline]
    pub fn contains(&self, element: &E) -> bool {
        self.roster.contains(element)
    }

    /// Element after `element`, wrapping from last to first.
    ///
    /// `None` if `element` is not in the ring.
    pub fn next(&self, element: &E) -> Option<&E> {
        let i = self.index_of(element)?;
        let n = self.roster.len();
        Some(&self.roster[(i + 1) % n])
    }

    /// Element before `element`, wrapping from first to last.
    ///
    /// `None` if `element` is not in the ring.
    pub fn previous(&self, element: &E) -> Option<&E> {
        let i = self.index_of(element)?;
        let n = self.roster.len();
        Some(&self.roster[(i + n - 1) % n])
    }

    /// One full lap starting at `element` (turn order from that seat).
    pub fn cycle_from(&self, element: &E) -> Option<impl Iterator<Item = &E> + '_> {
        let start = self.index_of(element)?;
        let (head, tail) = self.roster.split_at(start);
        Some(tail.iter().chain(head.iter()))
    }
}

impl<E: Clone> Ring<E> {
    /// Detached snapshot in order; changing it does not affect the ring.
    #[inline]
    pub fn to_vec(&self) -> Vec<E> {
        self.roster.clone()
    }
}

/// Collects in order, skipping duplicates the same way `add_last` does.
impl<E: PartialEq> FromIterator<E> for Ring<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut ring = Ring::new();
        for e in iter {
            ring.add_last(e);
        }
        ring
    }
}

impl<E: PartialEq> Extend<E> for Ring<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for e in iter {
            self.add_last(e);
        }
    }
}

impl<'a, E> IntoIterator for &'a Ring<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.roster.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn abcd() -> Ring<&'static str> {
        ["a", "b", "c", "d"].into_iter().collect()
    }

    #[test]
    fn add_rejects_duplicates_and_bad_index() {
        let mut r = Ring::new();
        assert_eq!(r.add(0, "a"), Ok(true));
        assert_eq!(r.add(1, "b"), Ok(true));
        assert_eq!(r.add(1, "c"), Ok(true));
        assert_eq!(r.to_vec(), vec!["a", "c", "b"]);
        assert_eq!(r.add(0, "b"), Ok(false));
        assert_eq!(r.len(), 3);
        assert_eq!(
            r.add(5, "z"),
            Err(RingError::IndexOutOfRange { index: 5, len: 3 })
        );
        // index == len appends
        assert_eq!(r.add(3, "z"), Ok(true));
        assert_eq!(r.last(), Some(&"z"));
    }

    #[test]
    fn add_first_and_last() {
        let mut r = Ring::new();
        assert!(r.add_last(2));
        assert!(r.add_first(1));
        assert!(r.add_last(3));
        assert!(!r.add_first(3));
        assert!(!r.add_last(1));
        assert_eq!(r.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn make_first_rotates() {
        let mut r = abcd();
        assert_eq!(r.make_first(&"c"), Ok(true));
        assert_eq!(r.to_vec(), vec!["c", "d", "a", "b"]);
        assert_eq!(r.make_first(&"c"), Ok(false));
        assert_eq!(r.make_first(&"x"), Err(RingError::NotPresent));
        assert_eq!(r.to_vec(), vec!["c", "d", "a", "b"]);
    }

    #[test]
    fn make_first_on_empty_is_not_present() {
        let mut r: Ring<u8> = Ring::new();
        assert_eq!(r.make_first(&1), Err(RingError::NotPresent));
    }

    #[test]
    fn neighbors_wrap() {
        let r = abcd();
        assert_eq!(r.next(&"d"), Some(&"a"));
        assert_eq!(r.previous(&"a"), Some(&"d"));
        assert_eq!(r.next(&"b"), Some(&"c"));
        assert_eq!(r.previous(&"c"), Some(&"b"));
        assert_eq!(r.next(&"x"), None);
        assert_eq!(r.previous(&"x"), None);
    }

    #[test]
    fn single_element_is_its_own_neighbor() {
        let mut r = Ring::new();
        r.add_last('x');
        assert_eq!(r.next(&'x'), Some(&'x'));
        assert_eq!(r.previous(&'x'), Some(&'x'));
        assert_eq!(r.first(), r.last());
    }

    #[test]
    fn get_first_last_on_empty() {
        let r: Ring<i32> = Ring::new();
        assert!(r.first().is_none());
        assert!(r.last().is_none());
        assert_eq!(r.get(0), Err(RingError::IndexOutOfRange { index: 0, len: 0 }));
        assert!(r.is_empty());
    }

    #[test]
    fn remove_and_clear() {
        let mut r = abcd();
        assert!(r.remove(&"b"));
        assert!(!r.remove(&"b"));
        assert_eq!(r.next(&"a"), Some(&"c"));
        assert_eq!(r.get(1), Ok(&"c"));
        r.clear();
        assert!(r.is_empty());
    }

    #[test]
    fn to_vec_is_detached() {
        let r = abcd();
        let mut v = r.to_vec();
        v.clear();
        assert_eq!(r.len(), 4);
    }

    #[test]
    fn cycle_from_walks_one_lap() {
        let r = abcd();
        let lap: Vec<_> = r.cycle_from(&"c").unwrap().copied().collect();
        assert_eq!(lap, vec!["c", "d", "a", "b"]);
        assert!(r.cycle_from(&"q").is_none());
    }

    #[test]
    fn from_iter_skips_duplicates() {
        let r: Ring<i32> = vec![3, 1, 3, 2, 1].into_iter().collect();
        assert_eq!(r.to_vec(), vec![3, 1, 2]);
    }

    fn ring_strategy() -> impl Strategy<Value = Ring<u16>> {
        prop::collection::vec(any::<u16>(), 1..40).prop_map(|v| v.into_iter().collect())
    }

    proptest! {
        #[test]
        fn next_previous_inverse(r in ring_strategy()) {
            for e in r.iter() {
                let n = *r.next(e).unwrap();
                let p = *r.previous(e).unwrap();
                prop_assert_eq!(r.previous(&n), Some(e));
                prop_assert_eq!(r.next(&p), Some(e));
            }
        }

        #[test]
        fn make_first_preserves_neighbors(r in ring_strategy(), pick in any::<prop::sample::Index>()) {
            let target = *r.get(pick.index(r.len())).unwrap();
            let mut rotated = r.clone();
            rotated.make_first(&target).unwrap();
            prop_assert_eq!(rotated.first(), Some(&target));
            prop_assert_eq!(rotated.len(), r.len());
            for e in r.iter() {
                prop_assert_eq!(rotated.next(e), r.next(e));
                prop_assert_eq!(rotated.previous(e), r.previous(e));
            }
        }

        #[test]
        fn duplicate_adds_are_noops(r in ring_strategy(), pick in any::<prop::sample::Index>()) {
            let e = *r.get(pick.index(r.len())).unwrap();
            let mut m = r.clone();
            prop_assert!(!m.add_first(e));
            prop_assert!(!m.add_last(e));
            prop_assert_eq!(m.add(0, e), Ok(false));
            prop_assert_eq!(m, r);
        }

        #[test]
        fn index_of_matches_contains(r in ring_strategy(), probe in any::<u16>()) {
            prop_assert_eq!(r.index_of(&probe).is_none(), !r.contains(&probe));
        }
    }
}
