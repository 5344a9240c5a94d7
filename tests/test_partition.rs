/*
 * SPDX-FileCopyrightText: 2025 The partbfs contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use partbfs::prelude::*;

#[test]
fn test_ranges_cover_prefix() -> Result<()> {
    for num_nodes in 0..40 {
        for num_workers in 1..12 {
            let p = Partitioner::new(num_nodes, num_workers)?;
            let ranges = p.ranges().collect::<Vec<_>>();
            assert_eq!(ranges.len(), num_workers);

            // Contiguous, hence pairwise disjoint
            let mut next = 0;
            for range in &ranges {
                assert_eq!(range.start, next);
                assert!(range.start <= range.end);
                next = range.end;
            }

            let covered: usize = ranges.iter().map(|r| r.len()).sum();
            assert_eq!(covered, (num_nodes / num_workers) * num_workers);
            assert_eq!(p.unassigned().len(), num_nodes % num_workers);
            assert_eq!(p.unassigned().end, num_nodes);

            for node in 0..num_nodes {
                match p.owner(node) {
                    Some(rank) => assert!(ranges[rank].contains(&node)),
                    None => assert!(p.unassigned().contains(&node)),
                }
            }
        }
    }
    Ok(())
}

#[test]
fn test_matches_free_function() -> Result<()> {
    let p = Partitioner::new(1000, 7)?;
    for rank in 0..7 {
        assert_eq!(p.range(rank), subgraph_range(1000, rank, 7));
    }
    Ok(())
}

#[test]
fn test_zero_workers() {
    assert!(matches!(Partitioner::new(5, 0), Err(ConfigError::NoWorkers)));
}
