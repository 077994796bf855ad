//! Property tests for raster size lists.

use std::collections::BTreeSet;

use proptest::prelude::*;

use icopack::RasterSizes;

fn expected_sizes(values: &[u64]) -> Vec<u32> {
    values
        .iter()
        .filter(|v| (1..=256).contains(*v))
        .map(|v| *v as u32)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a parsed list keeps exactly the in-range values, ascending and unique.
    #[test]
    fn property_parse_keeps_valid_sizes_sorted(
        values in proptest::collection::vec(0u64..600, 1..12),
        spaced in any::<bool>(),
    ) {
        let separator = if spaced { ", " } else { "," };
        let input = values
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(separator);
        let expected = expected_sizes(&values);

        match RasterSizes::parse(&input) {
            Some(sizes) => prop_assert_eq!(sizes.as_slice(), expected.as_slice()),
            None => prop_assert!(expected.is_empty()),
        }
    }

    /// PROPERTY: input order never matters.
    #[test]
    fn property_parse_ignores_order(
        values in proptest::collection::vec(1u64..=256, 1..10).prop_shuffle(),
    ) {
        let mut sorted = values.clone();
        sorted.sort_unstable();
        let join = |v: &[u64]| v.iter().map(u64::to_string).collect::<Vec<_>>().join(",");

        prop_assert_eq!(RasterSizes::parse(&join(&values)), RasterSizes::parse(&join(&sorted)));
    }

    /// PROPERTY: parsing never panics on arbitrary input.
    #[test]
    fn property_parse_never_panics(input in "(?s).{0,32}") {
        if let Some(sizes) = RasterSizes::parse(&input) {
            prop_assert!(!sizes.is_empty());
            prop_assert!(sizes.as_slice().windows(2).all(|w| w[0] < w[1]));
        }
    }
}
