//! Inter-route head/tail exchange with reversal.
//!
//! # Algorithm
//!
//! Cuts R1 after position i and R2 after position j, then joins the head
//! of R1 to the reversed head of R2, and the reversed tail of R1 to the
//! tail of R2:
//!
//! R1' = [a₁, ..., aᵢ, bⱼ, ..., b₁]
//! R2' = [aₙ, ..., aᵢ₊₁, bⱼ₊₁, ..., bₘ]
//!
//! With a symmetric cost only the two cut arcs change.

use super::plan::Move;
use super::Operator;

#[derive(Debug, Clone, Copy, Default)]
pub struct ReverseCrossExchange;

impl Operator for ReverseCrossExchange {
    fn name(&self) -> &'static str {
        "reverse-cross-exchange"
    }

    fn moves(&self, routes: &[Vec<usize>]) -> Vec<Move> {
        let mut moves = Vec::new();
        for r1 in 0..routes.len() {
            for r2 in r1 + 1..routes.len() {
                let (a, b) = (&routes[r1], &routes[r2]);
                if a.is_empty() && b.is_empty() {
                    continue;
                }
                for i in 0..=a.len() {
                    for j in 0..=b.len() {
                        // keeps both routes as they are
                        if i == a.len() && j == 0 {
                            continue;
                        }
                        let mut new_a = a[..i].to_vec();
                        new_a.extend(b[..j].iter().rev());
                        let mut new_b: Vec<usize> = a[i..].iter().rev().copied().collect();
                        new_b.extend_from_slice(&b[j..]);
                        moves.push(Move {
                            operator: self.name(),
                            changes: vec![(r1, new_a), (r2, new_b)],
                        });
                    }
                }
            }
        }
        moves
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_cross_exchange_moves() {
        let routes = vec![vec![1, 2, 3], vec![4, 5]];
        let moves = ReverseCrossExchange.moves(&routes);
        // i=1, j=2: [1, 5, 4] and [3, 2]
        assert!(moves
            .iter()
            .any(|m| m.changes == vec![(0, vec![1, 5, 4]), (1, vec![3, 2])]));
        // i=0, j=0: first route reversed in front of the second
        assert!(moves
            .iter()
            .any(|m| m.changes == vec![(0, vec![]), (1, vec![3, 2, 1, 4, 5])]));
        // 4 × 3 cut pairs minus the no-op
        assert_eq!(moves.len(), 11);
        assert!(moves
            .iter()
            .all(|m| m.changes != vec![(0, vec![1, 2, 3]), (1, vec![4, 5])]));
    }

    #[test]
    fn test_reverse_cross_exchange_empty_routes() {
        assert!(ReverseCrossExchange.moves(&[vec![], vec![]]).is_empty());
        let moves = ReverseCrossExchange.moves(&[vec![], vec![7]]);
        // j=0 is the no-op; j=1 moves 7 to the first route
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].changes, vec![(0, vec![7]), (1, vec![])]);
    }
}
