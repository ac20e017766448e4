//! Multi-key sorting with an explicit priority list of comparators.

use std::cmp::Ordering;

/// Borrowed comparator, so differently-typed closures can share one slice.
pub type Comparator<'a, T> = &'a dyn Fn(&T, &T) -> Ordering;

/// Sort `list` by several comparators at once.
///
/// `comparators` is in ascending priority: the **last** one decides the
/// primary order, ties fall through to the one before it, and so on.
/// Elements tied under every comparator keep their input order.
/// With no comparators the list is returned as given.
pub fn sort_by_order<T: Clone>(list: &[T], comparators: &[Comparator<'_, T>]) -> Vec<T> {
    let mut out = list.to_vec();
    out.sort_by(|a, b| {
        comparators
            .iter()
            .rev()
            .map(|cmp| cmp(a, b))
            .find(|o| *o != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    });
    out
}

/// Sort by `cmp` and group runs of mutually-equal elements, lowest tier first.
pub fn tiers<T: Clone, F>(list: &[T], cmp: F) -> Vec<Vec<T>>
where
    F: Fn(&T, &T) -> Ordering,
{
    let mut sorted = list.to_vec();
    sorted.sort_by(&cmp);
    let mut out: Vec<Vec<T>> = Vec::new();
    for item in sorted {
        match out.last_mut() {
            Some(tier) if cmp(&tier[0], &item) == Ordering::Equal => tier.push(item),
            _ => out.push(vec![item]),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Seat {
        name: &'static str,
        score: u32,
        age: u32,
    }

    fn seats() -> Vec<Seat> {
        vec![
            Seat { name: "dee", score: 3, age: 40 },
            Seat { name: "al", score: 5, age: 30 },
            Seat { name: "cy", score: 3, age: 20 },
            Seat { name: "bo", score: 5, age: 30 },
        ]
    }

    #[test]
    fn last_comparator_has_highest_priority() {
        let by_name = |a: &Seat, b: &Seat| a.name.cmp(b.name);
        let by_age = |a: &Seat, b: &Seat| a.age.cmp(&b.age);
        let by_score = |a: &Seat, b: &Seat| a.score.cmp(&b.score);
        let out = sort_by_order(&seats(), &[&by_name, &by_age, &by_score]);
        let names: Vec<_> = out.iter().map(|s| s.name).collect();
        // score first, then age, then name
        assert_eq!(names, vec!["cy", "dee", "al", "bo"]);
    }

    #[test]
    fn no_comparators_keeps_order() {
        let out = sort_by_order::<Seat>(&seats(), &[]);
        assert_eq!(out, seats());
    }

    #[test]
    fn full_ties_are_stable() {
        let by_score = |a: &Seat, b: &Seat| a.score.cmp(&b.score);
        let out = sort_by_order(&seats(), &[&by_score]);
        let names: Vec<_> = out.iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["dee", "cy", "al", "bo"]);
    }

    #[test]
    fn tiers_group_equal_runs() {
        let t = tiers(&[4, 1, 3, 1, 4, 4], |a, b| a.cmp(b));
        assert_eq!(t, vec![vec![1, 1], vec![3], vec![4, 4, 4]]);
        assert!(tiers::<i32, _>(&[], |a, b| a.cmp(b)).is_empty());
    }
}
