//! Sorter: stable merge sort of records by position tuple.
//!
//! Recursive two-way merge: split at `n / 2`, sort both halves, merge by
//! taking the smaller front record and preferring the left half on ties.
//! Records with equal positions therefore keep their input order.
//! `O(n log n)` comparisons, `O(n)` scratch per merge level.

use crate::model::PositionRecord;

/// Sort records by ascending position. See [`Position`](crate::Position)'s
/// `Ord` impl for how tuples of different arity compare.
pub fn merge_sort(records: Vec<PositionRecord>) -> Vec<PositionRecord> {
    let n = records.len();
    let sorted = sort_halves(records);
    tracing::debug!(records = n, "sorted records by position");
    sorted
}

/// Sort a borrowed snapshot, leaving the caller's records untouched.
pub fn sort_records(records: &[PositionRecord]) -> Vec<PositionRecord> {
    merge_sort(records.to_vec())
}

/// True if no record's position is greater than its successor's.
pub fn is_sorted_by_position(records: &[PositionRecord]) -> bool {
    records.windows(2).all(|w| w[0].position <= w[1].position)
}

fn sort_halves(mut records: Vec<PositionRecord>) -> Vec<PositionRecord> {
    let n = records.len();
    if n <= 1 {
        return records;
    }
    let right = records.split_off(n / 2);
    merge(sort_halves(records), sort_halves(right))
}

fn merge(left: Vec<PositionRecord>, right: Vec<PositionRecord>) -> Vec<PositionRecord> {
    let mut out = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    loop {
        let take_left = match (left.peek(), right.peek()) {
            // `<=` keeps the left record first on ties (stability).
            (Some(l), Some(r)) => l.position <= r.position,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        out.extend(if take_left { left.next() } else { right.next() });
    }
    out
}
