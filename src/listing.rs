//! Range listing: the features of a series inside a range, as text.
//!
//! ```text
//! "Zeichen" in range from 1.5 to 3.0
//!  - "B" at 1/2
//!  - "A" at 3/1
//! ```

use std::io::Write;

use crate::plot::{CoordinateRange, PlotPoint, PlotSeries};
use crate::Result;

/// Line written when a range contains no records.
pub const NO_FEATURES: &str = "No features in the range you have selected...";

/// Write the records of `series` inside `range`, in sorted order.
/// Returns how many records were listed.
pub fn write_listing(
    series: &PlotSeries,
    range: CoordinateRange,
    writer: &mut dyn Write,
) -> Result<usize> {
    // `{:?}` keeps the `.0` of whole coordinates.
    writeln!(
        writer,
        "\"{}\" in range from {:?} to {:?}",
        series.name,
        range.start.value(),
        range.end.value()
    )?;

    let mut listed = 0;
    for point in series.select(range) {
        writeln!(writer, "{}", format_point(point))?;
        listed += 1;
    }
    if listed == 0 {
        writeln!(writer, "{NO_FEATURES}")?;
    }

    tracing::debug!(series = %series.name, listed, "wrote range listing");
    Ok(listed)
}

/// ` - "label" at 1/2/3`
fn format_point(point: &PlotPoint) -> String {
    format!(" - \"{}\" at {}", point.label, point.position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Chronology;
    use crate::model::PositionRecord;
    use pretty_assertions::assert_eq;

    fn series() -> PlotSeries {
        PlotSeries::build(
            "Zeichen",
            Chronology::Page,
            &[
                PositionRecord::new("A", [3, 1]),
                PositionRecord::new("B", [1, 2]),
                PositionRecord::new("C", [1, 1]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_listing_in_sorted_order() {
        let mut buf = Vec::new();
        let range = CoordinateRange::new(1.5, 3.0).unwrap();
        let listed = write_listing(&series(), range, &mut buf).unwrap();
        assert_eq!(listed, 2);
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "\"Zeichen\" in range from 1.5 to 3.0\n - \"B\" at 1/2\n - \"A\" at 3/1\n"
        );
    }

    #[test]
    fn test_listing_empty_range() {
        let mut buf = Vec::new();
        let range = CoordinateRange::new(5.0, 9.0).unwrap();
        let listed = write_listing(&series(), range, &mut buf).unwrap();
        assert_eq!(listed, 0);
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("\"Zeichen\" in range from 5.0 to 9.0\n"), "{text}");
        assert!(text.ends_with(&format!("{NO_FEATURES}\n")));
    }
}
