//! Property tests for the ordering/encoding invariants.
//!
//! Datasets are random mixes of arities with small component values, so
//! equal positions and prefix pairs come up often. One strategy pins the
//! primary component near `u32::MAX`, where the encoder's clamp matters.

use proptest::prelude::*;
use wortverbund::{
    Error, Position, PositionRecord, encode_dataset, find_extremes, merge_sort,
};

fn position(max_arity: usize) -> impl Strategy<Value = Position> {
    prop::collection::vec(0u32..12, 1..=max_arity).prop_map(Position::from)
}

/// Primary components at the top of the `u32` range, deeper ones small.
fn large_primary_position(max_arity: usize) -> impl Strategy<Value = Position> {
    (
        (u32::MAX - 16)..=u32::MAX,
        prop::collection::vec(0u32..12, 0..max_arity),
    )
        .prop_map(|(primary, rest)| Position::new(std::iter::once(primary).chain(rest)))
}

/// Records labelled with their input index, for stability checks.
fn dataset(max_arity: usize) -> impl Strategy<Value = Vec<PositionRecord>> {
    prop::collection::vec(position(max_arity), 0..40).prop_map(|positions| {
        positions
            .into_iter()
            .enumerate()
            .map(|(i, p)| PositionRecord::new(i.to_string(), p))
            .collect()
    })
}

fn index(record: &PositionRecord) -> usize {
    record.label.parse().unwrap()
}

/// True if some measured depth only ever saw zeros.
fn has_all_zero_depth(records: &[PositionRecord]) -> bool {
    let table = find_extremes(records);
    (1..table.max_arity()).any(|d| table.range(d).is_some_and(|r| r.max == 0))
}

proptest! {
    #[test]
    fn proptest_sort_is_ordered_permutation(records in dataset(4)) {
        let sorted = merge_sort(records.clone());
        prop_assert_eq!(sorted.len(), records.len());
        for w in sorted.windows(2) {
            prop_assert!(w[0].position <= w[1].position);
        }

        let mut expected = records.clone();
        expected.sort_by(|a, b| a.position.cmp(&b.position).then(index(a).cmp(&index(b))));
        prop_assert_eq!(sorted, expected);
    }

    #[test]
    fn proptest_sort_is_stable(records in dataset(2)) {
        let sorted = merge_sort(records);
        for w in sorted.windows(2) {
            if w[0].position == w[1].position {
                prop_assert!(index(&w[0]) < index(&w[1]));
            }
        }
    }

    #[test]
    fn proptest_extremes_match_brute_force(records in dataset(5)) {
        let table = find_extremes(&records);
        let arity = records.iter().map(|r| r.arity()).max().unwrap_or(0);
        prop_assert_eq!(table.max_arity(), arity);
        prop_assert_eq!(table.range(0), None);

        for depth in 1..arity {
            let seen: Vec<u32> = records.iter().filter_map(|r| r.position.get(depth)).collect();
            match (seen.iter().min(), seen.iter().max(), table.range(depth)) {
                (Some(&lo), Some(&hi), Some(range)) => {
                    prop_assert_eq!(range.min, lo);
                    prop_assert_eq!(range.max, hi);
                }
                (None, None, None) => {}
                (lo, hi, got) => prop_assert!(false, "depth {}: {:?}..{:?} vs {:?}", depth, lo, hi, got),
            }
        }
    }

    #[test]
    fn proptest_encoding_fails_only_on_all_zero_depth(records in dataset(4)) {
        let sorted = merge_sort(records);
        let table = find_extremes(&sorted);
        match encode_dataset(&sorted, &table) {
            Ok(_) => prop_assert!(!has_all_zero_depth(&sorted)),
            Err(Error::ArithmeticFault { .. }) => prop_assert!(has_all_zero_depth(&sorted)),
            Err(other) => prop_assert!(false, "unexpected error {}", other),
        }
    }

    #[test]
    fn proptest_depth0_fidelity_and_primary_order(records in dataset(6)) {
        prop_assume!(!has_all_zero_depth(&records));
        let sorted = merge_sort(records);
        let table = find_extremes(&sorted);
        let coords = encode_dataset(&sorted, &table).unwrap();

        for (record, c) in sorted.iter().zip(&coords) {
            prop_assert_eq!(c.value().floor(), f64::from(record.position.primary()));
        }
        for (i, a) in sorted.iter().enumerate() {
            for (j, b) in sorted.iter().enumerate() {
                if a.position.primary() < b.position.primary() {
                    prop_assert!(coords[i] < coords[j]);
                }
            }
        }
    }

    #[test]
    fn proptest_depth0_fidelity_near_component_limit(
        positions in prop::collection::vec(large_primary_position(8), 1..20)
    ) {
        let records: Vec<PositionRecord> = positions
            .into_iter()
            .enumerate()
            .map(|(i, p)| PositionRecord::new(i.to_string(), p))
            .collect();
        prop_assume!(!has_all_zero_depth(&records));
        let sorted = merge_sort(records);
        let table = find_extremes(&sorted);
        let coords = encode_dataset(&sorted, &table).unwrap();

        for (record, c) in sorted.iter().zip(&coords) {
            prop_assert_eq!(c.value().floor(), f64::from(record.position.primary()));
        }
        for (r, c) in sorted.windows(2).zip(coords.windows(2)) {
            if r[0].position.primary() < r[1].position.primary() {
                prop_assert!(c[0] < c[1]);
            }
        }
    }

    #[test]
    fn proptest_two_level_coordinates_follow_sort(records in dataset(2)) {
        prop_assume!(!has_all_zero_depth(&records));
        let sorted = merge_sort(records);
        let table = find_extremes(&sorted);
        let coords = encode_dataset(&sorted, &table).unwrap();
        for w in coords.windows(2) {
            prop_assert!(w[0] <= w[1]);
        }
    }

    #[test]
    fn proptest_single_level_is_identity(pages in prop::collection::vec(0u32..10_000, 0..30)) {
        let records: Vec<PositionRecord> =
            pages.iter().map(|&p| PositionRecord::new("p", [p])).collect();
        let table = find_extremes(&records);
        prop_assert!(table.is_unused());
        let coords = encode_dataset(&records, &table).unwrap();
        for (page, c) in pages.iter().zip(coords) {
            prop_assert_eq!(c.value(), f64::from(*page));
        }
    }

    #[test]
    fn proptest_position_text_roundtrip(p in position(6)) {
        let parsed: Position = p.to_string().parse().unwrap();
        prop_assert_eq!(parsed, p);
    }
}
