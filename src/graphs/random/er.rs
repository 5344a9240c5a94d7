/*
 * SPDX-FileCopyrightText: 2025 The partbfs contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::errors::ConfigError;
use crate::graphs::vec_graph::VecGraph;
use crate::traits::GraphSource;

/// Provides an implementation of undirected Erdös-Rényi random graphs.
///
/// The Erdös-Rényi random graph model is a simple model for generating random
/// graphs. It is parameterized by the number of nodes `n` and the probability
/// `p` of an edge between any two nodes. Each unordered pair of distinct nodes
/// is considered once, and when an edge is drawn both arcs are stored, so the
/// resulting graph is symmetric. Loops are never included.
///
/// The time required to generate the graph is quadratic in `n`.
#[derive(Debug, Clone)]
pub struct ErdosRenyi {
    n: usize,
    p: f64,
    seed: u64,
}

impl ErdosRenyi {
    /// Create a new Erdös-Rényi random graph, given the number of
    /// nodes, the probability of an edge between any two nodes, and a
    /// seed for the [pseudorandom number generator](SmallRng).
    pub fn new(n: usize, p: f64, seed: u64) -> Self {
        assert!((0.0..=1.0).contains(&p), "p must be in [0..1]");
        Self { n, p, seed }
    }

    /// Create a new Erdös-Rényi random graph with given expected degree.
    ///
    /// The edge probability is `avg_degree / (n - 1)`; graphs with less than
    /// two nodes have no edges.
    pub fn with_avg_degree(n: usize, avg_degree: f64, seed: u64) -> Result<Self, ConfigError> {
        let invalid = ConfigError::InvalidAvgDegree {
            avg_degree,
            num_nodes: n,
        };
        if !avg_degree.is_finite() || avg_degree < 0.0 {
            return Err(invalid);
        }
        let p = if n <= 1 {
            0.0
        } else {
            avg_degree / (n - 1) as f64
        };
        if p > 1.0 {
            return Err(invalid);
        }
        Ok(Self::new(n, p, seed))
    }

    /// Returns the number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.n
    }

    /// Returns the edge probability.
    pub fn p(&self) -> f64 {
        self.p
    }
}

impl GraphSource for ErdosRenyi {
    fn generate(&self) -> VecGraph {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut lists = vec![Vec::new(); self.n];
        for x in 0..self.n {
            for y in x + 1..self.n {
                if rng.random_bool(self.p) {
                    lists[x].push(y);
                    lists[y].push(x);
                }
            }
        }
        // Successors of x smaller than x were pushed while scanning smaller
        // sources, so each list is already sorted.
        VecGraph::from_adjacency_lists(lists)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::RandomAccessGraph;

    #[test]
    fn test_er_symmetric() {
        let g = ErdosRenyi::new(50, 0.2, 0).generate();
        assert_eq!(g.num_nodes(), 50);
        assert_eq!(g.num_arcs() % 2, 0);
        for x in 0..g.num_nodes() {
            let succ = g.successors(x).collect::<Vec<_>>();
            assert!(succ.windows(2).all(|w| w[0] < w[1]));
            for y in succ {
                assert_ne!(x, y);
                assert!(g.has_arc(y, x));
            }
        }
    }

    #[test]
    fn test_er_deterministic() {
        let a = ErdosRenyi::new(30, 0.3, 42).generate();
        let b = ErdosRenyi::new(30, 0.3, 42).generate();
        assert_eq!(a, b);
    }

    #[test]
    fn test_er_extremes() {
        assert_eq!(ErdosRenyi::new(20, 0.0, 1).generate().num_arcs(), 0);
        assert_eq!(ErdosRenyi::new(20, 1.0, 1).generate().num_arcs(), 20 * 19);
    }

    #[test]
    fn test_avg_degree() {
        let er = ErdosRenyi::with_avg_degree(101, 10.0, 0).unwrap();
        assert!((er.p() - 0.1).abs() < 1E-12);
        assert_eq!(ErdosRenyi::with_avg_degree(1, 5.0, 0).unwrap().p(), 0.0);
        assert!(ErdosRenyi::with_avg_degree(10, 10.0, 0).is_err());
        assert!(ErdosRenyi::with_avg_degree(10, -1.0, 0).is_err());
        assert!(ErdosRenyi::with_avg_degree(10, f64::NAN, 0).is_err());
    }

    #[test]
    #[should_panic]
    fn test_bad_p() {
        ErdosRenyi::new(10, 1.5, 0);
    }
}
