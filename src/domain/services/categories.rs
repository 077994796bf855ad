//! Category Index Domain Service
//!
//! Maps each defined category to the icons whose metadata lists it.
//! Category lookups ignore ASCII case; categories an icon lists that are not
//! defined are dropped.

use std::collections::{BTreeMap, HashMap};

use crate::domain::entities::IconMetadata;
use crate::domain::value_objects::to_pascal_case;

/// Category → sorted, de-duplicated icon names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryIndex {
    members: BTreeMap<String, Vec<String>>,
}

impl CategoryIndex {
    /// Build the index from defined category names and per-icon metadata.
    pub fn build<'a>(
        category_names: impl IntoIterator<Item = String>,
        icons: impl IntoIterator<Item = (&'a str, &'a IconMetadata)>,
    ) -> Self {
        let mut members: BTreeMap<String, Vec<String>> = BTreeMap::new();
        let mut lookup: HashMap<String, String> = HashMap::new();

        for name in category_names {
            lookup
                .entry(name.to_ascii_lowercase())
                .or_insert_with(|| name.clone());
            members.entry(name).or_default();
        }

        for (icon, meta) in icons {
            for category in meta.category_names() {
                if let Some(canonical) = lookup.get(&category.to_ascii_lowercase()) {
                    if let Some(list) = members.get_mut(canonical) {
                        list.push(icon.to_string());
                    }
                }
            }
        }

        for list in members.values_mut() {
            list.sort_by(|a, b| {
                a.to_ascii_lowercase()
                    .cmp(&b.to_ascii_lowercase())
                    .then_with(|| a.cmp(b))
            });
            list.dedup();
        }

        Self { members }
    }

    /// Categories in name order with their members
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.members
            .iter()
            .map(|(name, icons)| (name.as_str(), icons.as_slice()))
    }

    pub fn members(&self, category: &str) -> Option<&[String]> {
        self.members.get(category).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// File name of a resx bundle: `<prefix>.resx` or `<prefix>.<PascalCategory>.resx`
pub fn bundle_file_name(prefix: &str, category: Option<&str>) -> String {
    match category {
        Some(category) => format!("{}.{}.resx", prefix, to_pascal_case(category)),
        None => format!("{}.resx", prefix),
    }
}
