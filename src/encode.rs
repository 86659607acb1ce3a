//! Scalar Encoder: flattens a position tuple onto one plot axis.
//!
//! ## Layout of a coordinate
//!
//! ```text
//!   134 . 500 250 000 ...
//!   ───   ─── ─── ───
//!   d0    d1  d2  d3      each deeper level: 3 truncated digits
//! ```
//!
//! - Depth 0 is the integer part, unnormalized.
//! - Depth `d >= 1` is normalized against the dataset's observed range at
//!   that depth: `v / max` when the observed minimum is 0, otherwise
//!   `(v - 1) / max` (a non-zero floor is read as 1-based).
//! - Depth 1 is clamped to `.999`, so a record at the observed maximum
//!   stays inside its integer unit.
//! - A deeper level whose fraction reaches 1 carries one unit into the
//!   last digit already placed and contributes `000` itself. The carry
//!   saturates at all-nines so it never reaches the integer part.
//!
//! All of this is integer fixed-point; the only float operation is the
//! final division. Records that differ only at depth >= 2 can collide on
//! the same coordinate. When exact order matters, use the Sorter's order,
//! not the coordinate.

use crate::extremes::ExtremesTable;
use crate::model::{Component, Coordinate, Position, PositionRecord};
use crate::{Error, Result};

/// Fraction digits contributed by each depth below 0.
pub const DIGITS_PER_LEVEL: u32 = 3;

/// Levels past this many fraction digits are still checked but place no
/// digits; `f64` can't hold them anyway.
pub const MAX_FRACTION_DIGITS: u32 = 18;

/// Label reported in errors for a synthetic range start.
pub const RANGE_START_LABEL: &str = "<range start>";
/// Label reported in errors for a synthetic range end.
pub const RANGE_END_LABEL: &str = "<range end>";

const LEVEL_SCALE: u128 = 1_000;
const LEVEL_MAX_UNITS: u128 = LEVEL_SCALE - 1;

/// Encode one record against `extremes`.
pub fn encode_record(record: &PositionRecord, extremes: &ExtremesTable) -> Result<Coordinate> {
    encode_position(&record.label, &record.position, extremes)
}

/// Encode every record, in order. Fails on the first record that can't
/// be normalized; no record is skipped.
pub fn encode_dataset(records: &[PositionRecord], extremes: &ExtremesTable) -> Result<Vec<Coordinate>> {
    let coordinates = records
        .iter()
        .map(|r| encode_record(r, extremes))
        .collect::<Result<Vec<_>>>()?;
    tracing::debug!(
        records = records.len(),
        max_arity = extremes.max_arity(),
        "encoded coordinates"
    );
    Ok(coordinates)
}

/// Encode two synthetic boundary positions (for range selection) against
/// an already-computed table. Trailing components may be omitted.
pub fn encode_bounds(
    start: &Position,
    end: &Position,
    extremes: &ExtremesTable,
) -> Result<(Coordinate, Coordinate)> {
    Ok((
        encode_position(RANGE_START_LABEL, start, extremes)?,
        encode_position(RANGE_END_LABEL, end, extremes)?,
    ))
}

/// Encode `position`; `label` only names the record in errors.
pub fn encode_position(label: &str, position: &Position, extremes: &ExtremesTable) -> Result<Coordinate> {
    let Some(primary) = position.get(0) else {
        return Err(Error::MalformedPosition {
            input: String::new(),
            depth: 0,
            reason: format!("empty position for {label:?}"),
        });
    };
    // integer part followed by `digits` fraction digits
    let mut mantissa = u128::from(primary);
    let mut digits = 0u32;

    for depth in 1..position.arity() {
        let Some(value) = position.get(depth) else { break };
        let (numerator, max) = normalize_operands(label, depth, value, extremes)?;
        if digits + DIGITS_PER_LEVEL > MAX_FRACTION_DIGITS {
            continue;
        }

        let units = u128::from(numerator) * LEVEL_SCALE / u128::from(max);
        if depth == 1 {
            mantissa = mantissa * LEVEL_SCALE + units.min(LEVEL_MAX_UNITS);
        } else if numerator >= max {
            let scale = 10u128.pow(digits);
            if mantissa % scale != scale - 1 {
                mantissa += 1;
            }
            mantissa *= LEVEL_SCALE;
        } else {
            mantissa = mantissa * LEVEL_SCALE + units;
        }
        digits += DIGITS_PER_LEVEL;
    }

    Ok(Coordinate(to_float(mantissa, digits, primary)))
}

/// Numerator and divisor for normalizing `value` at `depth`.
fn normalize_operands(
    label: &str,
    depth: usize,
    value: Component,
    extremes: &ExtremesTable,
) -> Result<(Component, Component)> {
    let fault = |reason: &str| Error::ArithmeticFault {
        label: label.to_owned(),
        depth,
        reason: reason.to_owned(),
    };
    let range = extremes
        .range(depth)
        .ok_or_else(|| fault("no value observed at this depth"))?;
    if range.max == 0 {
        return Err(fault("every observed value is 0, range divides by zero"));
    }
    let numerator = if range.min == 0 {
        value
    } else {
        // Only boundary records can sit below a 1-based floor.
        value.saturating_sub(1)
    };
    Ok((numerator, range.max))
}

fn to_float(mantissa: u128, digits: u32, primary: Component) -> f64 {
    let value = mantissa as f64 / 10f64.powi(digits as i32);
    // Rounding of long mantissas must stay inside [primary, primary + 1).
    let floor = f64::from(primary);
    let ceiling = floor + 1.0;
    if value < floor {
        floor
    } else if value >= ceiling {
        ceiling.next_down()
    } else {
        value
    }
}
