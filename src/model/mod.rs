//! # Wortverbund Data Model
//!
//! Plain data shared by every stage: parse → sort → extremes → encode → plot.
//!
//! Design rule: no I/O, no state, no caching here. Callers own their
//! records and hand the core a snapshot per call.

pub mod position;
pub mod record;
pub mod coordinate;

pub use position::{Position, Component, COMPONENT_DELIMITER, INLINE_DEPTH};
pub use record::PositionRecord;
pub use coordinate::Coordinate;
