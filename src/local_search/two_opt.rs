//! Intra-route 2-opt.
//!
//! # Algorithm
//!
//! For each pair of positions i < j in a route, reverse the segment
//! `[i..=j]`. With the depot at both ends this replaces the arcs
//! `(r[i-1], r[i])` and `(r[j], r[j+1])` by `(r[i-1], r[j])` and
//! `(r[i], r[j+1])`.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use super::plan::Move;
use super::Operator;

/// Segment reversal inside one route.
#[derive(Debug, Clone, Copy, Default)]
pub struct TwoOpt;

impl Operator for TwoOpt {
    fn name(&self) -> &'static str {
        "two-opt"
    }

    fn moves(&self, routes: &[Vec<usize>]) -> Vec<Move> {
        let mut moves = Vec::new();
        for (v, route) in routes.iter().enumerate() {
            let n = route.len();
            for i in 0..n.saturating_sub(1) {
                for j in i + 1..n {
                    let mut candidate = route.clone();
                    candidate[i..=j].reverse();
                    moves.push(Move {
                        operator: self.name(),
                        changes: vec![(v, candidate)],
                    });
                }
            }
        }
        moves
    }
}
