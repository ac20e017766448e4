//! Set enumeration: k-subsets and one-from-each products.
//!
//! Both enumerators return `{∅}` (a set holding one empty set, i.e. "no
//! choice made") for degenerate input rather than an empty result.

use std::collections::BTreeSet;
use std::fmt::{Display, Write};

/// Every `k`-element subset of `among`.
///
/// Returns `{∅}` when `among` is empty, `k == 0`, or `k > among.len()`.
pub fn choose_k<T: Ord + Clone>(among: &BTreeSet<T>, k: usize) -> BTreeSet<BTreeSet<T>> {
    let mut master = BTreeSet::new();
    if among.is_empty() || k == 0 || k > among.len() {
        master.insert(BTreeSet::new());
        return master;
    }
    let pool: Vec<&T> = among.iter().collect();
    let mut working = Vec::with_capacity(k);
    extend_k(&mut master, k, &mut working, 0, &pool);
    master
}

fn extend_k<'a, T: Ord + Clone>(
    master: &mut BTreeSet<BTreeSet<T>>,
    k: usize,
    working: &mut Vec<&'a T>,
    start: usize,
    pool: &[&'a T],
) {
    if working.len() == k {
        master.insert(working.iter().map(|t| (*t).clone()).collect());
        return;
    }
    // not enough elements left to fill the subset
    let need = k - working.len();
    for i in start..=pool.len().saturating_sub(need) {
        working.push(pool[i]);
        extend_k(master, k, working, i + 1, pool);
        working.pop();
    }
}

/// Every set formed by picking exactly one element from each non-empty set in `among`.
///
/// Empty inner sets are ignored. Returns `{∅}` when no inner set is non-empty.
/// Picks that collide (the same element chosen from two overlapping inner
/// sets) would produce a smaller set and are dropped.
pub fn choose_one_from_each<T: Ord + Clone>(among: &[BTreeSet<T>]) -> BTreeSet<BTreeSet<T>> {
    let groups: Vec<&BTreeSet<T>> = among.iter().filter(|s| !s.is_empty()).collect();
    let mut acc: Vec<Vec<&T>> = vec![Vec::with_capacity(groups.len())];
    for &group in &groups {
        acc = acc
            .into_iter()
            .flat_map(|partial| {
                group.iter().map(move |t| {
                    let mut next = partial.clone();
                    next.push(t);
                    next
                })
            })
            .collect();
    }
    acc.into_iter()
        .map(|picks| picks.into_iter().cloned().collect::<BTreeSet<T>>())
        .filter(|set| set.len() == groups.len())
        .collect()
}

/// Human-readable listing of a set of sets (count header, one line per set).
pub fn format_sets<T: Display>(sets: &BTreeSet<BTreeSet<T>>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Total Sets: {}", sets.len());
    for (i, set) in sets.iter().enumerate() {
        let items: Vec<String> = set.iter().map(|t| t.to_string()).collect();
        let _ = writeln!(out, "Set #{}: {}", i + 1, items.join(" "));
    }
    out
}
