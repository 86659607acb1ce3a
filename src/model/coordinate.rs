//! Coordinate: a position tuple flattened onto one plot axis.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Single-axis coordinate produced by the scalar encoder.
///
/// The integer part is the depth-0 component; the fraction carries the
/// deeper components three digits per level.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Coordinate(pub f64);

impl Coordinate {
    pub fn value(self) -> f64 {
        self.0
    }

    pub fn integer_part(self) -> f64 {
        self.0.floor()
    }
}

impl From<f64> for Coordinate {
    fn from(v: f64) -> Self {
        Self(v)
    }
}

impl PartialEq for Coordinate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Coordinate {}

/// Total order via `f64::total_cmp`, so coordinates can key sorts and ranges.
impl Ord for Coordinate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl PartialOrd for Coordinate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
