//! Node relocation.
//!
//! # Algorithm
//!
//! Removes a node from its route and inserts it at any other position,
//! in the same route or in another vehicle's route (empty routes included).
//!
//! # Complexity
//!
//! O(n²) candidate moves, n = number of visited nodes.

use super::plan::Move;
use super::Operator;

/// Single-node relocation within and across routes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Relocate;

impl Operator for Relocate {
    fn name(&self) -> &'static str {
        "relocate"
    }

    fn moves(&self, routes: &[Vec<usize>]) -> Vec<Move> {
        let mut moves = Vec::new();
        for (from, route) in routes.iter().enumerate() {
            for (pos, &node) in route.iter().enumerate() {
                let mut reduced = route.clone();
                reduced.remove(pos);

                for (to, target) in routes.iter().enumerate() {
                    if to == from {
                        for insert in 0..=reduced.len() {
                            if insert == pos {
                                continue;
                            }
                            let mut candidate = reduced.clone();
                            candidate.insert(insert, node);
                            moves.push(Move {
                                operator: self.name(),
                                changes: vec![(from, candidate)],
                            });
                        }
                    } else {
                        for insert in 0..=target.len() {
                            let mut candidate = target.clone();
                            candidate.insert(insert, node);
                            moves.push(Move {
                                operator: self.name(),
                                changes: vec![(from, reduced.clone()), (to, candidate)],
                            });
                        }
                    }
                }
            }
        }
        moves
    }
}
