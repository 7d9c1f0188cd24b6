//! Cluster partitioning and first-fit column assignment.

use std::ops::Range;

use super::{overlaps, LayoutStrategy, TimedItem};

/// Splits start-sorted events into contiguous cluster ranges.
pub(crate) fn partition<T: TimedItem>(sorted: &[T], strategy: LayoutStrategy) -> Vec<Range<usize>> {
    let mut clusters = Vec::new();
    let Some(first) = sorted.first() else {
        return clusters;
    };

    let mut begin = 0;
    let mut horizon = first.end_minute();
    for (i, event) in sorted.iter().enumerate().skip(1) {
        if event.start_minute() >= horizon {
            clusters.push(begin..i);
            begin = i;
            horizon = event.end_minute();
            continue;
        }
        horizon = match strategy {
            LayoutStrategy::ChainedGreedy => event.end_minute(),
            LayoutStrategy::ConnectedComponents => horizon.max(event.end_minute()),
        };
    }
    clusters.push(begin..sorted.len());
    clusters
}

/// First-fit column assignment inside one cluster.
///
/// Returns each event's column and the number of columns opened.
pub(crate) fn assign_columns<T: TimedItem>(cluster: &[T]) -> (Vec<usize>, usize) {
    let mut columns: Vec<Vec<&T>> = Vec::new();
    let mut assigned = Vec::with_capacity(cluster.len());

    for event in cluster {
        let fit = columns
            .iter()
            .position(|members| members.iter().all(|m| !overlaps(*m, event)));
        let column = match fit {
            Some(c) => c,
            None => {
                columns.push(Vec::new());
                columns.len() - 1
            }
        };
        columns[column].push(event);
        assigned.push(column);
    }

    let count = columns.len().max(1);
    (assigned, count)
}
