//! Property tests for manifest aggregation.

use std::collections::{BTreeMap, BTreeSet};

use proptest::prelude::*;

use icopack::domain::entities::{to_manifest_json, Artifact, AssetFailure, RunReport};
use icopack::domain::ports::ConversionConfig;
use icopack::domain::services::{build_ico_manifest, PackageInfo};

fn icon_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9-]{0,12}").unwrap()
}

/// One result per distinct name; `failed` decides which ones fail
fn report(names: &BTreeSet<String>, failed: &[bool], order: &[usize]) -> RunReport {
    let names: Vec<&String> = names.iter().collect();
    RunReport::from_results(order.iter().map(|&i| {
        let name = names[i].clone();
        if failed[i] {
            Err(AssetFailure {
                name,
                reason: "render failed".to_string(),
            })
        } else {
            Ok(Artifact::new(name, vec![0, 0, 1, 0]))
        }
    }))
}

fn names_and_flags() -> impl Strategy<Value = (BTreeSet<String>, Vec<bool>, Vec<usize>)> {
    proptest::collection::btree_set(icon_name(), 0..16).prop_flat_map(|names| {
        let len = names.len();
        (
            Just(names),
            proptest::collection::vec(any::<bool>(), len),
            Just((0..len).collect::<Vec<_>>()).prop_shuffle(),
        )
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: icons are exactly the converted names, sorted, and counted.
    #[test]
    fn property_manifest_lists_converted_icons((names, failed, order) in names_and_flags()) {
        let report = report(&names, &failed, &order);
        let manifest = build_ico_manifest(
            &PackageInfo::new("lucide-ico", "0.0.1"),
            &ConversionConfig::default(),
            &report,
            BTreeMap::new(),
        );

        let expected: Vec<String> = names
            .iter()
            .zip(&failed)
            .filter(|(_, failed)| !**failed)
            .map(|(name, _)| name.clone())
            .collect();

        prop_assert_eq!(&manifest.icons, &expected);
        prop_assert_eq!(manifest.icon_count, expected.len());
        prop_assert_eq!(report.failed() + report.succeeded(), names.len());
    }

    /// PROPERTY: the serialized manifest does not depend on completion order.
    #[test]
    fn property_manifest_is_order_independent((names, failed, order) in names_and_flags()) {
        let package = PackageInfo::new("lucide-ico", "0.0.1");
        let config = ConversionConfig::default();
        let in_order: Vec<usize> = (0..names.len()).collect();

        let shuffled = build_ico_manifest(&package, &config, &report(&names, &failed, &order), BTreeMap::new());
        let sorted = build_ico_manifest(&package, &config, &report(&names, &failed, &in_order), BTreeMap::new());

        prop_assert_eq!(to_manifest_json(&shuffled).unwrap(), to_manifest_json(&sorted).unwrap());
    }
}
