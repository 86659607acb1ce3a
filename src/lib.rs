//! # wortverbund: ordering and single-axis encoding of feature occurrences
//!
//! A *wortverbund* is a named set of features, each recorded at a
//! variable-depth position: `page/line`, `year/month/day/hour/minute/second`
//! or `hour/minute/second`. This crate puts those occurrences in order and
//! flattens each position onto one numeric axis so they can be plotted.
//!
//! ## Pipeline
//!
//! 1. **Sorter** ([`sort`]): stable merge sort by position tuple
//! 2. **Extremes** ([`extremes`]): per-depth min/max over the dataset
//! 3. **Encoder** ([`encode`]): one [`Coordinate`] per record
//!
//! Everything is a pure function over a snapshot the caller passes in.
//! Nothing is cached; every plot request recomputes all three stages.
//!
//! ## Quick Start
//!
//! ```rust
//! use wortverbund::{Chronology, Wortverbund};
//!
//! # fn main() -> wortverbund::Result<()> {
//! let mut wb = Wortverbund::new("Zeichen", Chronology::Page);
//! wb.add("A", [3, 1])?;
//! wb.add("B", [1, 2])?;
//! wb.add_text("C", "1/1")?;
//!
//! let series = wb.plot()?;
//! let placed: Vec<_> = series.points.iter().map(|p| (p.label.as_str(), p.coordinate.value())).collect();
//! assert_eq!(placed, vec![("C", 1.0), ("B", 1.5), ("A", 3.0)]);
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod config;
pub mod parse;
pub mod sort;
pub mod extremes;
pub mod encode;
pub mod plot;
pub mod listing;

// ============================================================================
// Re-exports
// ============================================================================

pub use model::{Component, Coordinate, Position, PositionRecord};
pub use config::{Chronology, Delimiters, ProjectConfig};
pub use sort::merge_sort;
pub use extremes::{DepthRange, ExtremesTable, find_extremes};
pub use encode::{encode_bounds, encode_dataset, encode_record};
pub use plot::{CoordinateRange, PlotPoint, PlotSeries};

// ============================================================================
// Top-level Wortverbund handle
// ============================================================================

/// A named collection of feature occurrences in one chronology.
///
/// The handle owns its records in insertion order. Ordering and encoding
/// happen fresh on each [`plot`](Self::plot) call.
#[derive(Debug, Clone, PartialEq)]
pub struct Wortverbund {
    name: String,
    chronology: Chronology,
    records: Vec<PositionRecord>,
}

impl Wortverbund {
    pub fn new(name: impl Into<String>, chronology: Chronology) -> Self {
        Self { name: name.into(), chronology, records: Vec::new() }
    }

    /// Load records from their text form (`label;134/12` per line).
    pub fn from_text(
        name: impl Into<String>,
        chronology: Chronology,
        text: &str,
        delimiters: &Delimiters,
    ) -> Result<Self> {
        delimiters.validate()?;
        let records = parse::parse_dataset(text, delimiters)?;
        Ok(Self { name: name.into(), chronology, records })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn chronology(&self) -> Chronology {
        self.chronology
    }

    /// Records in insertion order.
    pub fn records(&self) -> &[PositionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record a feature at `position`.
    pub fn add(&mut self, label: impl Into<String>, position: impl Into<Position>) -> Result<()> {
        let record = PositionRecord::new(label, position);
        let line = self.records.len() + 1;
        if record.label.is_empty() {
            return Err(Error::MalformedRecord { line, reason: "empty label".into() });
        }
        if record.label.contains(['\n', '\r']) {
            return Err(Error::MalformedRecord {
                line,
                reason: format!("label {:?} spans more than one line", record.label),
            });
        }
        if record.position.is_empty() {
            return Err(Error::MalformedPosition {
                input: String::new(),
                depth: 0,
                reason: "empty position".into(),
            });
        }
        tracing::trace!(wortverbund = %self.name, label = %record.label, position = %record.position, "added feature");
        self.records.push(record);
        Ok(())
    }

    /// Record a feature at a typed position such as `"134/12"`.
    pub fn add_text(&mut self, label: impl Into<String>, position: &str) -> Result<()> {
        let position: Position = position.parse()?;
        self.add(label, position)
    }

    /// Remove the first record carrying `label`.
    pub fn remove(&mut self, label: &str) -> Option<PositionRecord> {
        let index = self.records.iter().position(|r| r.label == label)?;
        Some(self.records.remove(index))
    }

    /// Records in their text form, insertion order, one per line. Fails
    /// if a label contains the field delimiter.
    pub fn to_text(&self, delimiters: &Delimiters) -> Result<String> {
        delimiters.validate()?;
        let mut text = String::new();
        for (i, record) in self.records.iter().enumerate() {
            text.push_str(&parse::format_record(record, i + 1, delimiters)?);
            text.push('\n');
        }
        Ok(text)
    }

    /// Sort, measure and encode the current records.
    pub fn plot(&self) -> Result<PlotSeries> {
        PlotSeries::build(&self.name, self.chronology, &self.records)
    }

    /// Write the features inside `range` as a text listing.
    pub fn list_range(&self, range: CoordinateRange, writer: &mut dyn std::io::Write) -> Result<usize> {
        listing::write_listing(&self.plot()?, range, writer)
    }
}

/// Plot several wortverbunds together. Each one is normalized against its
/// own extremes, so coordinates of different series share only depth 0.
pub fn plot_all(wortverbunds: &[Wortverbund]) -> Result<Vec<PlotSeries>> {
    let series = wortverbunds
        .iter()
        .map(Wortverbund::plot)
        .collect::<Result<Vec<_>>>()?;
    tracing::debug!(series = series.len(), "built combined plot");
    Ok(series)
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Malformed position {input:?} at depth {depth}: {reason}")]
    MalformedPosition { input: String, depth: usize, reason: String },

    #[error("Malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("Arithmetic fault encoding {label:?} at depth {depth}: {reason}")]
    ArithmeticFault { label: String, depth: usize, reason: String },

    #[error("No range selected: start {start} equals end {end}")]
    EmptyRange { start: String, end: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
