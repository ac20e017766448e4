//! Seat a rotating table of strategies for a few games and print who sits
//! where, with the next/previous neighbors of each seat.
//!
//! Run with `cargo run -p underplex --example seating`.

use underplex::api::{Net, Ring, Specification};

struct Rotating {
    strategies: Vec<&'static str>,
}

impl Specification<&'static str> for Rotating {
    fn iterations(&self) -> usize {
        3
    }

    fn expansions(&self) -> String {
        "base+harbor".to_string()
    }

    fn assign_strategies(&mut self, iteration: usize) -> Vec<&'static str> {
        let mut order = self.strategies.clone();
        let len = order.len();
        order.rotate_left(iteration % len);
        order
    }
}

fn print_table(table: &Ring<&str>) {
    for seat in table {
        let next = table.next(seat).copied().unwrap_or("-");
        let previous = table.previous(seat).copied().unwrap_or("-");
        println!("  {seat:>8}  next={next:<8} previous={previous}");
    }
}

fn main() {
    let mut spec = Rotating {
        strategies: vec!["greedy", "cautious", "random", "mimic"],
    };
    println!("expansions: {}", spec.expansions());
    for i in 0..spec.iterations() {
        let table = spec.seating(i);
        println!("game {i}: {} seats, {} links", table.len(), table.edges().len());
        print_table(&table);
    }
}
