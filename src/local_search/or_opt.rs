//! Intra-route Or-opt.
//!
//! # Algorithm
//!
//! Moves a segment of 1 to 3 consecutive nodes to another position in the
//! same route, keeping its orientation.
//!
//! # Reference
//!
//! Or, I. (1976). "Traveling Salesman-Type Combinatorial Problems and Their
//! Relation to the Logistics of Blood Banking". PhD thesis.

use super::plan::Move;
use super::Operator;

/// Longest segment moved.
pub const MAX_SEGMENT_LEN: usize = 3;

/// Segment relocation inside one route.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrOpt;

impl Operator for OrOpt {
    fn name(&self) -> &'static str {
        "or-opt"
    }

    fn moves(&self, routes: &[Vec<usize>]) -> Vec<Move> {
        let mut moves = Vec::new();
        for (v, route) in routes.iter().enumerate() {
            let n = route.len();
            for seg_len in 1..=MAX_SEGMENT_LEN.min(n.saturating_sub(1)) {
                for start in 0..=n - seg_len {
                    let segment = &route[start..start + seg_len];
                    let mut rest = route[..start].to_vec();
                    rest.extend_from_slice(&route[start + seg_len..]);

                    for pos in 0..=rest.len() {
                        if pos == start {
                            continue;
                        }
                        let mut candidate = rest.clone();
                        candidate.splice(pos..pos, segment.iter().copied());
                        moves.push(Move {
                            operator: self.name(),
                            changes: vec![(v, candidate)],
                        });
                    }
                }
            }
        }
        moves
    }
}
