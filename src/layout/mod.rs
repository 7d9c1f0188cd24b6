//! Overlap layout for one day's events.
//!
//! Assigns each event a column index and the column count of its overlap
//! cluster so that a renderer can draw overlapping events side by side
//! (`left = column / column_count`, `width = 1 / column_count`).
//!
//! # Algorithm
//!
//! 1. Stable-sort events by start minute.
//! 2. Partition the sorted run into clusters (see [`LayoutStrategy`]).
//! 3. Inside a cluster, place each event in the first column none of whose
//!    members overlap it, opening a new column when none fits.
//! 4. Every event of a cluster gets that cluster's column count.
//!
//! # Guarantees
//! Events sharing a column within a cluster never overlap. The column count
//! is what greedy first-fit needs, not necessarily the chromatic minimum.
//!
//! # Complexity
//! O(n log n + n·k) for n events and at most k events per cluster.
//!
//! # Reference
//! Kleinberg & Tardos (2005), "Algorithm Design", Ch. 4.1 (Interval Partitioning)

mod cluster;
mod geometry;

pub use geometry::{event_box, EventBox};

use serde::{Deserialize, Serialize};

use crate::models::RecurringEvent;

/// Anything with a start and end time of day.
pub trait TimedItem {
    /// Start as minutes since midnight (inclusive).
    fn start_minute(&self) -> u32;
    /// End as minutes since midnight (exclusive).
    fn end_minute(&self) -> u32;
}

impl TimedItem for RecurringEvent {
    fn start_minute(&self) -> u32 {
        RecurringEvent::start_minute(self)
    }

    fn end_minute(&self) -> u32 {
        RecurringEvent::end_minute(self)
    }
}

impl<T: TimedItem + ?Sized> TimedItem for &T {
    fn start_minute(&self) -> u32 {
        (**self).start_minute()
    }

    fn end_minute(&self) -> u32 {
        (**self).end_minute()
    }
}

/// Whether two half-open time ranges `[start, end)` overlap.
#[inline]
pub fn overlaps<A: TimedItem + ?Sized, B: TimedItem + ?Sized>(a: &A, b: &B) -> bool {
    a.start_minute() < b.end_minute() && a.end_minute() > b.start_minute()
}

/// How sorted events are split into overlap clusters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutStrategy {
    /// A new cluster starts when an event starts at or after the end of the
    /// event added just before it.
    ///
    /// Cheap and matches what existing timetables render, but an event that
    /// only overlaps a long event further back lands in a fresh cluster and
    /// may be drawn on top of it.
    #[default]
    ChainedGreedy,
    /// A new cluster starts when an event starts at or after the latest end
    /// seen so far in the cluster: the connected components of the
    /// interval-overlap graph.
    ConnectedComponents,
}

/// An event placed in a column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaidOutEvent<T> {
    /// The placed event.
    pub event: T,
    /// 0-based column index within its cluster.
    pub column: usize,
    /// Number of columns in its cluster (at least 1).
    pub column_count: usize,
}

/// Lays out events with [`LayoutStrategy::ChainedGreedy`].
///
/// Output is sorted by start time.
///
/// # Example
/// ```
/// use chrono::NaiveTime;
/// use u_timetable::layout::arrange_overlapping_events;
/// use u_timetable::models::{DayOfWeek, RecurringEvent};
///
/// let t = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
/// let events = vec![
///     RecurringEvent::new("A", DayOfWeek::Monday, t(9, 0), t(10, 0)),
///     RecurringEvent::new("B", DayOfWeek::Monday, t(9, 30), t(10, 30)),
///     RecurringEvent::new("C", DayOfWeek::Monday, t(10, 15), t(11, 0)),
/// ];
///
/// let laid = arrange_overlapping_events(&events);
/// let columns: Vec<_> = laid.iter().map(|l| (l.event.id.as_str(), l.column)).collect();
/// assert_eq!(columns, vec![("A", 0), ("B", 1), ("C", 0)]);
/// assert!(laid.iter().all(|l| l.column_count == 2));
/// ```
pub fn arrange_overlapping_events<I>(events: I) -> Vec<LaidOutEvent<I::Item>>
where
    I: IntoIterator,
    I::Item: TimedItem,
{
    arrange_with(events, LayoutStrategy::ChainedGreedy)
}

/// Lays out events with the given clustering strategy.
pub fn arrange_with<I>(events: I, strategy: LayoutStrategy) -> Vec<LaidOutEvent<I::Item>>
where
    I: IntoIterator,
    I::Item: TimedItem,
{
    let mut events: Vec<I::Item> = events.into_iter().collect();
    if events.is_empty() {
        return Vec::new();
    }
    events.sort_by_key(|e| e.start_minute());

    let mut placement = vec![(0usize, 1usize); events.len()];
    for range in cluster::partition(&events, strategy) {
        let (columns, count) = cluster::assign_columns(&events[range.clone()]);
        for (slot, column) in placement[range].iter_mut().zip(columns) {
            *slot = (column, count);
        }
    }

    events
        .into_iter()
        .zip(placement)
        .map(|(event, (column, column_count))| LaidOutEvent {
            event,
            column,
            column_count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Minimal timed item for layout tests.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Span(&'static str, u32, u32);

    impl TimedItem for Span {
        fn start_minute(&self) -> u32 {
            self.1
        }
        fn end_minute(&self) -> u32 {
            self.2
        }
    }

    fn hm(h: u32, m: u32) -> u32 {
        h * 60 + m
    }

    fn layout_of(laid: &[LaidOutEvent<Span>]) -> Vec<(&'static str, usize, usize)> {
        laid.iter()
            .map(|l| (l.event.0, l.column, l.column_count))
            .collect()
    }

    #[test]
    fn test_empty() {
        let laid = arrange_overlapping_events(Vec::<Span>::new());
        assert!(laid.is_empty());
    }

    #[test]
    fn test_single_event() {
        let laid = arrange_overlapping_events(vec![Span("A", hm(9, 0), hm(10, 0))]);
        assert_eq!(layout_of(&laid), vec![("A", 0, 1)]);
    }

    #[test]
    fn test_chain_shares_column() {
        // A overlaps B, B overlaps C, A and C are disjoint
        let laid = arrange_overlapping_events(vec![
            Span("C", hm(10, 15), hm(11, 0)),
            Span("A", hm(9, 0), hm(10, 0)),
            Span("B", hm(9, 30), hm(10, 30)),
        ]);
        assert_eq!(
            layout_of(&laid),
            vec![("A", 0, 2), ("B", 1, 2), ("C", 0, 2)]
        );
    }

    #[test]
    fn test_back_to_back_events_are_separate_clusters() {
        let laid = arrange_overlapping_events(vec![
            Span("A", hm(8, 0), hm(10, 0)),
            Span("B", hm(10, 0), hm(12, 0)),
        ]);
        assert_eq!(layout_of(&laid), vec![("A", 0, 1), ("B", 0, 1)]);
    }

    #[test]
    fn test_three_way_overlap() {
        let laid = arrange_overlapping_events(vec![
            Span("A", hm(8, 0), hm(10, 0)),
            Span("B", hm(8, 0), hm(10, 0)),
            Span("C", hm(9, 0), hm(11, 0)),
        ]);
        assert_eq!(
            layout_of(&laid),
            vec![("A", 0, 3), ("B", 1, 3), ("C", 2, 3)]
        );
    }

    #[test]
    fn test_equal_starts_keep_input_order() {
        let laid = arrange_overlapping_events(vec![
            Span("second", hm(8, 0), hm(9, 0)),
            Span("first", hm(8, 0), hm(9, 0)),
        ]);
        assert_eq!(laid[0].event.0, "second");
        assert_eq!(laid[1].event.0, "first");
    }

    #[test]
    fn test_chained_strategy_misses_long_overlap() {
        // B ends before C starts, but A is still running when C starts.
        let events = vec![
            Span("A", hm(9, 0), hm(12, 0)),
            Span("B", hm(9, 30), hm(10, 0)),
            Span("C", hm(10, 30), hm(11, 0)),
        ];

        let chained = arrange_with(events.clone(), LayoutStrategy::ChainedGreedy);
        assert_eq!(
            layout_of(&chained),
            vec![("A", 0, 2), ("B", 1, 2), ("C", 0, 1)]
        );

        let exact = arrange_with(events, LayoutStrategy::ConnectedComponents);
        assert_eq!(
            layout_of(&exact),
            vec![("A", 0, 2), ("B", 1, 2), ("C", 1, 2)]
        );
    }

    #[test]
    fn test_works_on_references() {
        let spans = [Span("A", 0, 10), Span("B", 5, 15)];
        let laid = arrange_overlapping_events(spans.iter());
        assert_eq!(laid[1].column, 1);
        assert_eq!(laid[1].event.0, "B");
    }

    #[test]
    fn test_strategy_serde_names() {
        let json = serde_json::to_string(&LayoutStrategy::ConnectedComponents).unwrap();
        assert_eq!(json, "\"connected_components\"");
    }

    fn arb_spans() -> impl Strategy<Value = Vec<Span>> {
        prop::collection::vec((0u32..1380, 1u32..180), 0..25).prop_map(|v| {
            v.into_iter()
                .map(|(start, len)| Span("x", start, (start + len).min(1440)))
                .collect()
        })
    }

    /// Cluster ranges of the layout, recomputed on the sorted input.
    fn clusters_of(spans: &[Span], strategy: LayoutStrategy) -> Vec<std::ops::Range<usize>> {
        let mut sorted = spans.to_vec();
        sorted.sort_by_key(|s| s.1);
        cluster::partition(&sorted, strategy)
    }

    fn assert_columns_disjoint(laid: &[LaidOutEvent<Span>]) {
        for (i, a) in laid.iter().enumerate() {
            assert!(a.column < a.column_count);
            for b in &laid[i + 1..] {
                if overlaps(&a.event, &b.event) {
                    assert_ne!(a.column, b.column, "{a:?} and {b:?} share a column");
                }
            }
        }
    }

    proptest! {
        #[test]
        fn prop_columns_never_overlap_within_cluster(spans in arb_spans()) {
            for strategy in [LayoutStrategy::ChainedGreedy, LayoutStrategy::ConnectedComponents] {
                let laid = arrange_with(spans.clone(), strategy);
                prop_assert_eq!(laid.len(), spans.len());
                for range in clusters_of(&spans, strategy) {
                    let count = laid[range.start].column_count;
                    prop_assert!(laid[range.clone()].iter().all(|l| l.column_count == count));
                    assert_columns_disjoint(&laid[range]);
                }
            }
        }

        #[test]
        fn prop_components_never_overlap_anywhere(spans in arb_spans()) {
            let laid = arrange_with(spans, LayoutStrategy::ConnectedComponents);
            assert_columns_disjoint(&laid);
        }

        #[test]
        fn prop_output_sorted_by_start(spans in arb_spans()) {
            let laid = arrange_overlapping_events(spans);
            prop_assert!(laid.windows(2).all(|w| w[0].event.1 <= w[1].event.1));
        }
    }
}
