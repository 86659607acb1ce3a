//! Record text form: `label;134/12`, one record per line.
//!
//! This is the boundary to whatever stores the records. Nothing is
//! coerced: a component that isn't a plain base-10 non-negative integer
//! is rejected with its depth, before any sorting or encoding happens.

use crate::config::Delimiters;
use crate::model::{Component, Position, PositionRecord};
use crate::{Error, Result};

/// Parse a position tuple such as `2018/11/27`.
pub fn parse_position(text: &str, delimiter: char) -> Result<Position> {
    if text.is_empty() {
        return Err(Error::MalformedPosition {
            input: text.into(),
            depth: 0,
            reason: "empty position".into(),
        });
    }
    let mut components = Vec::new();
    for (depth, raw) in text.split(delimiter).enumerate() {
        components.push(parse_component(text, raw, depth)?);
    }
    Ok(Position::from(components))
}

fn parse_component(input: &str, raw: &str, depth: usize) -> Result<Component> {
    let malformed = |reason: String| Error::MalformedPosition {
        input: input.into(),
        depth,
        reason,
    };
    if raw.is_empty() {
        return Err(malformed("empty component".into()));
    }
    // `str::parse::<u32>` would accept a leading '+'.
    if let Some(bad) = raw.chars().find(|c| !c.is_ascii_digit()) {
        return Err(malformed(format!("unexpected character {bad:?} in {raw:?}")));
    }
    raw.parse::<Component>()
        .map_err(|e| malformed(format!("{raw:?}: {e}")))
}

/// Parse one `label<field>position` line. `line_no` is 1-based and only
/// used in errors.
pub fn parse_record(line: &str, line_no: usize, delimiters: &Delimiters) -> Result<PositionRecord> {
    let (label, position) = line.split_once(delimiters.field).ok_or_else(|| {
        Error::MalformedRecord {
            line: line_no,
            reason: format!("missing '{}' between label and position", delimiters.field),
        }
    })?;
    check_label(label, line_no, delimiters)?;
    let position = parse_position(position, delimiters.component)?;
    Ok(PositionRecord { label: label.to_owned(), position })
}

/// Parse a whole dataset. Blank lines are skipped; the first bad line
/// fails the whole parse.
pub fn parse_dataset(text: &str, delimiters: &Delimiters) -> Result<Vec<PositionRecord>> {
    let mut records = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }
        records.push(parse_record(line, i + 1, delimiters)?);
    }
    tracing::debug!(records = records.len(), "parsed dataset");
    Ok(records)
}

/// Inverse of [`parse_record`]. Fails on a label that couldn't be read
/// back from the line it produces.
pub fn format_record(record: &PositionRecord, line_no: usize, delimiters: &Delimiters) -> Result<String> {
    check_label(&record.label, line_no, delimiters)?;
    Ok(format!(
        "{}{}{}",
        record.label,
        delimiters.field,
        record.position.to_string_with(delimiters.component)
    ))
}

/// A label must be non-empty and sit on one line before the first field
/// delimiter.
pub fn check_label(label: &str, line_no: usize, delimiters: &Delimiters) -> Result<()> {
    let malformed = |reason: String| Error::MalformedRecord { line: line_no, reason };
    if label.is_empty() {
        return Err(malformed("empty label".into()));
    }
    if let Some(bad) = label
        .chars()
        .find(|&c| c == delimiters.field || c == '\n' || c == '\r')
    {
        return Err(malformed(format!("label {label:?} contains {bad:?}")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_record() {
        let rec = parse_record("Zeichen;134/12", 1, &Delimiters::default()).unwrap();
        assert_eq!(rec.label, "Zeichen");
        assert_eq!(rec.position, Position::from([134, 12]));
        assert_eq!(format_record(&rec, 1, &Delimiters::default()).unwrap(), "Zeichen;134/12");
    }

    #[test]
    fn test_single_component_position() {
        let rec = parse_record("Sinn;7", 1, &Delimiters::default()).unwrap();
        assert_eq!(rec.position.arity(), 1);
    }

    #[test]
    fn test_malformed_component_reports_depth() {
        let err = parse_position("2018/1a/27", '/').unwrap_err();
        match err {
            Error::MalformedPosition { input, depth, .. } => {
                assert_eq!(input, "2018/1a/27");
                assert_eq!(depth, 1);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_rejects_whitespace_sign_and_empty_components() {
        for bad in ["", " 3", "3 ", "+3", "-3", "3//4", "3/", "/3", "99999999999"] {
            assert!(
                matches!(parse_position(bad, '/'), Err(Error::MalformedPosition { .. })),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_malformed_record() {
        let d = Delimiters::default();
        assert!(matches!(
            parse_record("no delimiter", 4, &d),
            Err(Error::MalformedRecord { line: 4, .. })
        ));
        assert!(matches!(
            parse_record(";3/4", 2, &d),
            Err(Error::MalformedRecord { line: 2, .. })
        ));
    }

    #[test]
    fn test_format_rejects_unreadable_labels() {
        let d = Delimiters::default();
        for label in ["Sinn;Zweck", "zwei\nZeilen", "cr\r"] {
            let rec = PositionRecord::new(label, [3, 1]);
            assert!(
                matches!(format_record(&rec, 7, &d), Err(Error::MalformedRecord { line: 7, .. })),
                "{label:?} should be rejected"
            );
        }
        // Only the configured field delimiter is reserved.
        let bar = Delimiters { field: '|', component: '/' };
        let rec = PositionRecord::new("Sinn;Zweck", [3, 1]);
        let line = format_record(&rec, 1, &bar).unwrap();
        assert_eq!(parse_record(&line, 1, &bar).unwrap(), rec);
    }

    #[test]
    fn test_parse_dataset_skips_blank_lines() {
        let text = "A;3/1\r\n\nB;1/2\nC;1/1\n";
        let records = parse_dataset(text, &Delimiters::default()).unwrap();
        let labels: Vec<_> = records.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_parse_dataset_fails_fast() {
        let text = "A;3/1\nB;x\nC;1/1\n";
        assert!(matches!(
            parse_dataset(text, &Delimiters::default()),
            Err(Error::MalformedPosition { depth: 0, .. })
        ));
    }

    #[test]
    fn test_custom_delimiters() {
        let d = Delimiters { field: '\t', component: '.' };
        let rec = parse_record("Zeit\t13.47.5", 1, &d).unwrap();
        assert_eq!(rec.position, Position::from([13, 47, 5]));
        assert_eq!(format_record(&rec, 1, &d).unwrap(), "Zeit\t13.47.5");
    }
}
