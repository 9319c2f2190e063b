//! Inter-route tail exchange (2-opt*).
//!
//! # Algorithm
//!
//! Swaps tail segments between two routes.
//! Given routes R1 = [a₁, ..., aᵢ, aᵢ₊₁, ..., aₙ] and
//! R2 = [b₁, ..., bⱼ, bⱼ₊₁, ..., bₘ], produce:
//!
//! R1' = [a₁, ..., aᵢ, bⱼ₊₁, ..., bₘ]
//! R2' = [b₁, ..., bⱼ, aᵢ₊₁, ..., aₙ]
//!
//! # Complexity
//!
//! O(n² × R²) candidate moves, n = nodes per route, R = number of routes.
//!
//! # Reference
//!
//! Potvin, J.-Y. & Rousseau, J.-M. (1995). "An Exchange Heuristic for
//! Routeing Problems with Time Windows", *Journal of the Operational Research
//! Society* 46(12), 1433-1446.

use super::plan::Move;
use super::Operator;

/// Tail swap between two routes.
#[derive(Debug, Clone, Copy, Default)]
pub struct CrossExchange;

impl Operator for CrossExchange {
    fn name(&self) -> &'static str {
        "cross-exchange"
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
                        // Both tails empty, or both routes swapped whole
                        if (i == a.len() && j == b.len()) || (i == 0 && j == 0) {
                            continue;
                        }
                        let mut new_a = a[..i].to_vec();
                        new_a.extend_from_slice(&b[j..]);
                        let mut new_b = b[..j].to_vec();
                        new_b.extend_from_slice(&a[i..]);
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
    fn test_cross_exchange_tails() {
        let routes = vec![vec![1, 2], vec![3, 4]];
        let moves = CrossExchange.moves(&routes);
        // i=1, j=1: [1, 4] and [3, 2]
        assert!(moves
            .iter()
            .any(|m| m.changes == vec![(0, vec![1, 4]), (1, vec![3, 2])]));
        // i=2, j=0: [1, 2, 3, 4] and []
        assert!(moves
            .iter()
            .any(|m| m.changes == vec![(0, vec![1, 2, 3, 4]), (1, vec![])]));
        // 3 × 3 cut pairs minus the two no-ops
        assert_eq!(moves.len(), 7);
    }

    #[test]
    fn test_cross_exchange_preserves_nodes() {
        let routes = vec![vec![1, 2, 3], vec![], vec![4, 5]];
        for m in CrossExchange.moves(&routes) {
            let mut nodes: Vec<usize> = m.changes.iter().flat_map(|(_, r)| r.clone()).collect();
            let mut expected: Vec<usize> = m
                .changes
                .iter()
                .flat_map(|(v, _)| routes[*v].clone())
                .collect();
            nodes.sort_unstable();
            expected.sort_unstable();
            assert_eq!(nodes, expected);
        }
    }
}
