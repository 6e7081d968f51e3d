//! Deterministic display ordering for the pending queue.

use std::cmp::Ordering;

use crate::area::{category_index, MapView, DEFAULT_ORDER_LEN};
use crate::state::PendingRecord;

/// Weight of an area string under the currently selected map. Lower sorts
/// first. On the overview every record falls into its default-order
/// category; on a sub-area map the viewed area jumps to the front and
/// everything else keeps the default order shifted by one.
pub fn area_weight(area: &str, map: MapView) -> usize {
    match map.sub_area() {
        None => category_index(area).unwrap_or(DEFAULT_ORDER_LEN),
        Some(label) => {
            if area.contains(label) {
                0
            } else {
                1 + category_index(area).unwrap_or(DEFAULT_ORDER_LEN)
            }
        }
    }
}

/// Numeric segment-by-segment comparison of two codes: `"9-1-0001"` sorts
/// before `"10-1-0001"`. An all-equal prefix puts the shorter code first.
pub fn compare_codes(a: &str, b: &str) -> Ordering {
    for (left, right) in a.split('-').zip(b.split('-')) {
        match segment_value(left).cmp(&segment_value(right)) {
            Ordering::Equal => {}
            other => return other,
        }
    }
    a.split('-').count().cmp(&b.split('-').count())
}

// Non-numeric segments compare as zero; canonical codes never hit this.
fn segment_value(segment: &str) -> u64 {
    segment.trim().parse().unwrap_or(0)
}

/// Stable two-key sort of the pending queue for display. Pure; callers
/// recompute on every view projection and never persist the order.
pub fn sort_for_view(records: &mut [PendingRecord], map: MapView) {
    records.sort_by(|a, b| {
        area_weight(&a.location, map)
            .cmp(&area_weight(&b.location, map))
            .then_with(|| compare_codes(&a.id, &b.id))
    });
}
