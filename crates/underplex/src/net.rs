//! Network and simulation-setup abstractions.
//!
//! `Net` is a plain node/edge view; `Ring` implements it as a directed cycle.
//! `Specification` describes a batch of game simulations: how many to run,
//! which game variant, and which strategies sit at the table each time.

use std::collections::HashSet;
use std::hash::Hash;

use crate::ring::Ring;

/// A network with nodes of type `T` and edges of type `U`.
pub trait Net<T, U> {
    fn nodes(&self) -> HashSet<T>;
    fn edges(&self) -> HashSet<U>;
}

/// Each element links to its successor; a single element links to itself.
impl<E: Eq + Hash + Clone> Net<E, (E, E)> for Ring<E> {
    fn nodes(&self) -> HashSet<E> {
        self.iter().cloned().collect()
    }

    fn edges(&self) -> HashSet<(E, E)> {
        self.iter()
            .zip(self.iter().cycle().skip(1))
            .map(|(a, b)| (a.clone(), b.clone()))
            .collect()
    }
}

/// How a simulation run should be set up. `E` is the player strategy type.
pub trait Specification<E> {
    /// Number of games to play; read once before the run starts.
    fn iterations(&self) -> usize;

    /// Game type and expansions, free-form and of unspecified case.
    fn expansions(&self) -> String;

    /// One strategy per player for game `iteration`, in seating order.
    fn assign_strategies(&mut self, iteration: usize) -> Vec<E>;

    /// Seat the strategies for `iteration` around a table.
    ///
    /// The first strategy becomes the ring's first element and each next one
    /// sits to its left. Repeated strategies are seated once.
    fn seating(&mut self, iteration: usize) -> Ring<E>
    where
        E: PartialEq,
    {
        let strategies = self.assign_strategies(iteration);
        let requested = strategies.len();
        let ring: Ring<E> = strategies.into_iter().collect();
        if ring.len() != requested {
            tracing::debug!(iteration, requested, seated = ring.len(), "duplicate strategies dropped");
        }
        ring
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_edges_close_the_cycle() {
        let r: Ring<char> = "ABC".chars().collect();
        assert_eq!(r.nodes(), HashSet::from(['A', 'B', 'C']));
        assert_eq!(r.edges(), HashSet::from([('A', 'B'), ('B', 'C'), ('C', 'A')]));
    }

    #[test]
    fn degenerate_rings() {
        let empty: Ring<u8> = Ring::new();
        assert!(empty.nodes().is_empty());
        assert!(empty.edges().is_empty());
        let one: Ring<u8> = [4].into_iter().collect();
        assert_eq!(one.edges(), HashSet::from([(4, 4)]));
    }

    struct RoundRobin {
        players: Vec<&'static str>,
    }

    impl Specification<&'static str> for RoundRobin {
        fn iterations(&self) -> usize {
            self.players.len()
        }

        fn expansions(&self) -> String {
            "base".to_string()
        }

        fn assign_strategies(&mut self, iteration: usize) -> Vec<&'static str> {
            let mut out = self.players.clone();
            out.rotate_left(iteration % self.players.len());
            out
        }
    }

    #[test]
    fn seating_follows_assigned_order() {
        let mut spec = RoundRobin { players: vec!["ann", "bob", "cat"] };
        assert_eq!(spec.iterations(), 3);
        assert_eq!(spec.expansions(), "base");
        let table = spec.seating(1);
        assert_eq!(table.first(), Some(&"bob"));
        assert_eq!(table.next(&"cat"), Some(&"ann"));
        assert_eq!(table.previous(&"bob"), Some(&"ann"));
    }

    #[test]
    fn seating_drops_repeats() {
        struct Twice;
        impl Specification<u8> for Twice {
            fn iterations(&self) -> usize {
                1
            }
            fn expansions(&self) -> String {
                String::new()
            }
            fn assign_strategies(&mut self, _iteration: usize) -> Vec<u8> {
                vec![1, 2, 1]
            }
        }
        assert_eq!(Twice.seating(0).to_vec(), vec![1, 2]);
    }
}
