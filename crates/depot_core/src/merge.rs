//! Identity-based merge of staged cards into the pending queue.

use std::collections::HashSet;

use crate::state::{PendingRecord, RecognizeCard};

/// Outcome counts of one merge pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MergeStats {
    /// Cards appended as new pending records.
    pub added: usize,
    /// Cards dropped because their id already existed.
    pub skipped: usize,
}

/// Appends each card as a new record iff no record with the same id exists
/// in the queue or earlier in the same batch. Duplicates are dropped
/// silently; the existing record's area always wins. Re-submitting the same
/// batch is a no-op, which makes the merge idempotent.
pub fn merge_pending(queue: &mut Vec<PendingRecord>, cards: Vec<RecognizeCard>) -> MergeStats {
    let mut seen: HashSet<String> = queue.iter().map(|record| record.id.clone()).collect();
    let mut stats = MergeStats::default();
    for card in cards {
        if seen.contains(&card.code) {
            stats.skipped += 1;
            continue;
        }
        seen.insert(card.code.clone());
        queue.push(PendingRecord {
            id: card.code,
            location: card.area,
        });
        stats.added += 1;
    }
    stats
}
