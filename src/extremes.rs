//! Extremes Calculator: per-depth minimum and maximum over a dataset.
//!
//! Depth 0 is never measured: the encoder uses it as-is for the integer
//! part. Unmeasured depths keep the sentinels `min = u32::MAX`, `max = 0`,
//! which [`ExtremesTable::range`] reports as `None` instead of handing
//! them out as data.

use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

use crate::model::{Component, INLINE_DEPTH, PositionRecord};

/// Sentinel minimum for a depth nothing has reached.
pub const NO_MINIMUM: Component = Component::MAX;
/// Sentinel maximum for a depth nothing has reached.
pub const NO_MAXIMUM: Component = 0;

type Column = SmallVec<[Component; INLINE_DEPTH]>;

/// Observed bounds at one depth. Always `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepthRange {
    pub min: Component,
    pub max: Component,
}

/// `min[d]` / `max[d]` for every depth up to the widest tuple in the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExtremesTable {
    min: Column,
    max: Column,
}

impl ExtremesTable {
    /// A table of `arity` depths with nothing observed yet.
    pub fn empty(arity: usize) -> Self {
        Self {
            min: smallvec![NO_MINIMUM; arity],
            max: smallvec![NO_MAXIMUM; arity],
        }
    }

    /// Widest tuple seen; the table has this many depths.
    pub fn max_arity(&self) -> usize {
        self.min.len()
    }

    /// Raw minimum column, sentinels included.
    pub fn min(&self) -> &[Component] {
        &self.min
    }

    /// Raw maximum column, sentinels included.
    pub fn max(&self) -> &[Component] {
        &self.max
    }

    /// Observed bounds at `depth`; `None` for depth 0 and for depths no
    /// record reached.
    pub fn range(&self, depth: usize) -> Option<DepthRange> {
        if depth == 0 {
            return None;
        }
        let min = *self.min.get(depth)?;
        let max = *self.max.get(depth)?;
        (min <= max).then_some(DepthRange { min, max })
    }

    /// True when no record reaches depth 1, i.e. the encoder has nothing
    /// to normalize.
    pub fn is_unused(&self) -> bool {
        (1..self.max_arity()).all(|d| self.range(d).is_none())
    }

    fn observe(&mut self, depth: usize, value: Component) {
        if value < self.min[depth] {
            self.min[depth] = value;
        }
        if value > self.max[depth] {
            self.max[depth] = value;
        }
    }
}

/// Single pass over `records` in any order.
pub fn find_extremes(records: &[PositionRecord]) -> ExtremesTable {
    let arity = records.iter().map(PositionRecord::arity).max().unwrap_or(0);
    let mut table = ExtremesTable::empty(arity);
    for record in records {
        // Depth 0 deliberately skipped; shorter tuples just stop early.
        for (depth, &value) in record.position.components().iter().enumerate().skip(1) {
            table.observe(depth, value);
        }
    }
    tracing::debug!(records = records.len(), max_arity = arity, "computed extremes");
    table
}
