//! Plot payload: what a visualization front end needs to draw one
//! wortverbund along a single axis.
//!
//! ```text
//! records → merge_sort → find_extremes → encode_dataset → PlotSeries
//!                                                          ├─ points (label, coordinate, ordinal)
//!                                                          └─ min / max coordinate, range selection
//! ```
//!
//! A series is rebuilt on every request; records may have changed since
//! the last one.

use serde::{Deserialize, Serialize};

use crate::config::Chronology;
use crate::encode::{self, RANGE_END_LABEL, RANGE_START_LABEL};
use crate::extremes::{self, ExtremesTable};
use crate::model::{Coordinate, Position, PositionRecord};
use crate::sort;
use crate::{Error, Result};

// ============================================================================
// CoordinateRange
// ============================================================================

/// Inclusive coordinate interval, `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoordinateRange {
    pub start: Coordinate,
    pub end: Coordinate,
}

impl CoordinateRange {
    /// Range between two slider values. Reversed bounds are swapped;
    /// equal bounds select nothing and are rejected.
    pub fn new(a: impl Into<Coordinate>, b: impl Into<Coordinate>) -> Result<Self> {
        let (a, b) = (a.into(), b.into());
        if a == b {
            return Err(Error::EmptyRange { start: a.to_string(), end: b.to_string() });
        }
        Ok(Self::inclusive(a, b))
    }

    /// Range between two bounds in either order, equal bounds allowed.
    pub fn inclusive(a: Coordinate, b: Coordinate) -> Self {
        if a <= b { Self { start: a, end: b } } else { Self { start: b, end: a } }
    }

    pub fn contains(&self, c: Coordinate) -> bool {
        self.start <= c && c <= self.end
    }
}

// ============================================================================
// PlotPoint / PlotSeries
// ============================================================================

/// One record placed on the axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotPoint {
    pub label: String,
    pub position: Position,
    pub coordinate: Coordinate,
    /// 1-based rank in sorted order (the "number of features" so far).
    pub ordinal: usize,
}

/// A sorted, encoded wortverbund ready to plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotSeries {
    pub name: String,
    pub axis_label: String,
    pub points: Vec<PlotPoint>,
    /// Table the coordinates were normalized against; range bounds are
    /// encoded against the same table.
    pub extremes: ExtremesTable,
}

impl PlotSeries {
    /// Sort, measure and encode `records`. The caller's slice is not
    /// reordered.
    pub fn build(name: impl Into<String>, chronology: Chronology, records: &[PositionRecord]) -> Result<Self> {
        let name = name.into();
        if let Some(empty) = records.iter().find(|r| r.position.is_empty()) {
            return Err(Error::MalformedPosition {
                input: String::new(),
                depth: 0,
                reason: format!("empty position for {:?}", empty.label),
            });
        }
        let sorted = sort::sort_records(records);
        let extremes = extremes::find_extremes(&sorted);
        let coordinates = encode::encode_dataset(&sorted, &extremes)?;

        let points: Vec<PlotPoint> = sorted
            .into_iter()
            .zip(coordinates)
            .enumerate()
            .map(|(i, (record, coordinate))| PlotPoint {
                label: record.label,
                position: record.position,
                coordinate,
                ordinal: i + 1,
            })
            .collect();

        tracing::debug!(series = %name, points = points.len(), "built plot series");
        Ok(Self { name, axis_label: chronology.axis_label(), points, extremes })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn min_coordinate(&self) -> Option<Coordinate> {
        self.points.iter().map(|p| p.coordinate).min()
    }

    pub fn max_coordinate(&self) -> Option<Coordinate> {
        self.points.iter().map(|p| p.coordinate).max()
    }

    /// Slider limits: 0 up to one past the last coordinate.
    pub fn slider_bounds(&self) -> (Coordinate, Coordinate) {
        let last = self.max_coordinate().map_or(0.0, Coordinate::value);
        (Coordinate(0.0), Coordinate(last + 1.0))
    }

    /// The whole series as a range.
    pub fn full_range(&self) -> CoordinateRange {
        let (start, end) = self.slider_bounds();
        CoordinateRange::inclusive(start, end)
    }

    /// Points inside `range`, in sorted order.
    pub fn select(&self, range: CoordinateRange) -> impl Iterator<Item = &PlotPoint> {
        self.points.iter().filter(move |p| range.contains(p.coordinate))
    }

    /// Turn two typed positions into a range over this series. A missing
    /// start means 0, a missing end means one past the last coordinate.
    /// Identical positions select nothing and are rejected.
    pub fn range_from_positions(
        &self,
        start: Option<&Position>,
        end: Option<&Position>,
    ) -> Result<CoordinateRange> {
        if let (Some(s), Some(e)) = (start, end) {
            if s == e {
                return Err(Error::EmptyRange { start: s.to_string(), end: e.to_string() });
            }
        }
        let (lowest, highest) = self.slider_bounds();
        let start = match start {
            Some(p) => encode::encode_position(RANGE_START_LABEL, p, &self.extremes)?,
            None => lowest,
        };
        let end = match end {
            Some(p) => encode::encode_position(RANGE_END_LABEL, p, &self.extremes)?,
            None => highest,
        };
        Ok(CoordinateRange::inclusive(start, end))
    }
}
