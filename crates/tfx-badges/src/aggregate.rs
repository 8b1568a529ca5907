#![forbid(unsafe_code)]

//! Fleet-wide feature bar.
//!
//! Counts each feature across a collection of events, sizes segments by their
//! share of the total, and arranges them so the largest sits in the middle
//! with smaller ones fanning out alternately to either side:
//!
//! ```text
//! sorted:   A(5) B(3) C(3) D(1)
//! placed:   A            -> [A]
//!           B to the left -> [B, A]
//!           C to the right -> [B, A, C]
//!           D to the left -> [D, B, A, C]
//! ```

use std::cmp::Reverse;
use std::collections::VecDeque;

use tfx_core::EventSource;

use crate::flags::FeatureKey;
use crate::segment::{Segment, SegmentWidth, SliceSource, round_outer_corners};

/// Per-feature counts over a collection, every key in fixed order.
///
/// `EndDate` counts any set end date; multi-day distinctness is not checked
/// at this granularity.
#[must_use]
pub fn aggregate_counts<S: EventSource>(entries: &[S]) -> Vec<(FeatureKey, u32)> {
    FeatureKey::ALL
        .into_iter()
        .map(|key| {
            let count = entries
                .iter()
                .filter(|entry| key.is_present_in_aggregate(entry.event()))
                .count() as u32;
            (key, count)
        })
        .collect()
}

/// Arrange a descending list so index 0 lands in the centre: even indices go
/// to the right end, odd indices to the left end.
#[must_use]
pub fn center_weighted<T>(sorted: Vec<T>) -> Vec<T> {
    let mut placed = VecDeque::with_capacity(sorted.len());
    for (i, item) in sorted.into_iter().enumerate() {
        if i % 2 == 0 {
            placed.push_back(item);
        } else {
            placed.push_front(item);
        }
    }
    placed.into()
}

/// Proportional, centre-weighted bar for a collection of events.
///
/// Empty when no event carries any feature.
#[must_use]
pub fn compose_aggregate_bar<S: EventSource>(entries: &[S]) -> Vec<Segment> {
    let mut counted: Vec<(FeatureKey, u32)> = aggregate_counts(entries)
        .into_iter()
        .filter(|&(_, count)| count > 0)
        .collect();
    let total: u32 = counted.iter().map(|&(_, count)| count).sum();
    if total == 0 {
        return Vec::new();
    }

    // Stable: equal counts keep fixed key order.
    counted.sort_by_key(|&(_, count)| Reverse(count));

    let mut segments: Vec<Segment> = center_weighted(counted)
        .into_iter()
        .map(|(key, count)| {
            let value = f64::from(count) / f64::from(total) * 100.0;
            let mut segment = Segment::slice(
                SliceSource::Feature(key),
                key.color(),
                SegmentWidth::Percentage { value },
            );
            segment.label = Some(key.label().to_string());
            segment.count = count;
            segment
        })
        .collect();

    round_outer_corners(&mut segments);
    tfx_core::trace!(
        events = entries.len(),
        segments = segments.len(),
        "composed aggregate bar"
    );
    segments
}
