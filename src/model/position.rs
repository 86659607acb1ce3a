//! Position tuple: where a feature was recorded (page/line, date, time).

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::{Error, Result};

/// One component of a position tuple.
pub type Component = u32;

/// Components kept inline before spilling to the heap
/// (year/month/day/hour/minute/second).
pub const INLINE_DEPTH: usize = 6;

/// Default delimiter between position components (`134/12`).
pub const COMPONENT_DELIMITER: char = '/';

/// Variable-depth position tuple.
///
/// Depth 0 is the coarsest unit (page, year, hour). The arity is the
/// tuple's own length; every depth access is checked against it, never
/// against the widest tuple in the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Position(SmallVec<[Component; INLINE_DEPTH]>);

impl Position {
    pub fn new(components: impl IntoIterator<Item = Component>) -> Self {
        Self(components.into_iter().collect())
    }

    /// Parse `text` using a custom component delimiter.
    pub fn parse_with(text: &str, delimiter: char) -> Result<Self> {
        crate::parse::parse_position(text, delimiter)
    }

    /// Number of components present.
    pub fn arity(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Component at `depth`, or `None` if this tuple doesn't reach it.
    pub fn get(&self, depth: usize) -> Option<Component> {
        self.0.get(depth).copied()
    }

    /// The depth-0 component. Empty tuples read as 0; the encoder and
    /// [`Wortverbund::add`](crate::Wortverbund::add) reject them before
    /// this is reached.
    pub fn primary(&self) -> Component {
        self.get(0).unwrap_or(0)
    }

    pub fn components(&self) -> &[Component] {
        &self.0
    }

    /// True if `self` is a strict prefix of `other` (`3` vs `3/1`).
    pub fn is_prefix_of(&self, other: &Position) -> bool {
        self.arity() < other.arity() && other.0.starts_with(&self.0)
    }

    /// Render with a custom component delimiter.
    pub fn to_string_with(&self, delimiter: char) -> String {
        let mut out = String::new();
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                out.push(delimiter);
            }
            out.push_str(&c.to_string());
        }
        out
    }
}

// ============================================================================
// Ordering
// ============================================================================

/// Lexicographic, component by component. When one tuple runs out first
/// and all shared components are equal, the shorter tuple sorts first:
/// `3 < 3/1 < 3/1/0 < 3/2`.
impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        for (a, b) in self.0.iter().zip(other.0.iter()) {
            match a.cmp(b) {
                Ordering::Equal => continue,
                unequal => return unequal,
            }
        }
        self.arity().cmp(&other.arity())
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================================
// Text form
// ============================================================================

impl FromStr for Position {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_with(s, COMPONENT_DELIMITER)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with(COMPONENT_DELIMITER))
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<Vec<Component>> for Position {
    fn from(v: Vec<Component>) -> Self {
        Self(SmallVec::from_vec(v))
    }
}

impl From<&[Component]> for Position {
    fn from(v: &[Component]) -> Self {
        Self(SmallVec::from_slice(v))
    }
}

impl<const N: usize> From<[Component; N]> for Position {
    fn from(v: [Component; N]) -> Self {
        Self::new(v)
    }
}

/// Time chronology: hour/minute/second.
impl From<NaiveTime> for Position {
    fn from(t: NaiveTime) -> Self {
        Self::new([t.hour(), t.minute(), t.second()])
    }
}

fn year_component(year: i32, source: String) -> Result<Component> {
    Component::try_from(year).map_err(|_| Error::MalformedPosition {
        input: source,
        depth: 0,
        reason: "year before 0 cannot be a position".into(),
    })
}

/// Date chronology: year/month/day.
impl TryFrom<NaiveDate> for Position {
    type Error = Error;

    fn try_from(d: NaiveDate) -> Result<Self> {
        let year = year_component(d.year(), d.to_string())?;
        Ok(Self::new([year, d.month(), d.day()]))
    }
}

/// Date chronology at full depth: year/month/day/hour/minute/second.
impl TryFrom<NaiveDateTime> for Position {
    type Error = Error;

    fn try_from(dt: NaiveDateTime) -> Result<Self> {
        let year = year_component(dt.year(), dt.to_string())?;
        Ok(Self::new([
            year,
            dt.month(),
            dt.day(),
            dt.hour(),
            dt.minute(),
            dt.second(),
        ]))
    }
}
