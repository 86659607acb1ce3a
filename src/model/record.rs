//! A feature and the position it was recorded at.

use serde::{Deserialize, Serialize};
use super::Position;

/// One occurrence of a feature in a wortverbund.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PositionRecord {
    pub label: String,
    pub position: Position,
}

impl PositionRecord {
    pub fn new(label: impl Into<String>, position: impl Into<Position>) -> Self {
        Self { label: label.into(), position: position.into() }
    }

    pub fn arity(&self) -> usize {
        self.position.arity()
    }
}
