//! Node exchange between two routes.

use super::plan::Move;
use super::Operator;

/// Swaps one node of a route with one node of another route.
#[derive(Debug, Clone, Copy, Default)]
pub struct Exchange;

impl Operator for Exchange {
    fn name(&self) -> &'static str {
        "exchange"
    }

    fn moves(&self, routes: &[Vec<usize>]) -> Vec<Move> {
        let mut moves = Vec::new();
        for r1 in 0..routes.len() {
            for r2 in r1 + 1..routes.len() {
                for p1 in 0..routes[r1].len() {
                    for p2 in 0..routes[r2].len() {
                        let mut a = routes[r1].clone();
                        let mut b = routes[r2].clone();
                        std::mem::swap(&mut a[p1], &mut b[p2]);
                        moves.push(Move {
                            operator: self.name(),
                            changes: vec![(r1, a), (r2, b)],
                        });
                    }
                }
            }
        }
        moves
    }
}
