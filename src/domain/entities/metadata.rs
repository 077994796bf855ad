//! IconMetadata entity - the JSON side-file of an icon
//!
//! ```json
//! {
//!   "tags": ["arrow", "down"],
//!   "categories": ["arrows", "navigation"],
//!   "aliases": ["arrow-down-01", { "name": "move-down", "deprecated": true }]
//! }
//! ```
//!
//! Only the fields used by the conversion runs are modelled; other keys are ignored.

use serde::{Deserialize, Serialize};

/// Alias entry; either a bare name or a detailed object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IconAlias {
    Name(String),
    Detailed {
        name: String,
        #[serde(default)]
        deprecated: bool,
        #[serde(default, rename = "deprecationReason")]
        deprecation_reason: Option<String>,
        #[serde(default, rename = "toBeRemovedInVersion")]
        to_be_removed_in_version: Option<String>,
    },
}

impl IconAlias {
    pub fn name(&self) -> &str {
        match self {
            IconAlias::Name(name) => name,
            IconAlias::Detailed { name, .. } => name,
        }
    }

    pub fn is_deprecated(&self) -> bool {
        matches!(self, IconAlias::Detailed { deprecated: true, .. })
    }
}

/// Metadata for one icon
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<IconAlias>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl IconMetadata {
    /// Parse a metadata document
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Non-empty category names, in file order
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories
            .iter()
            .map(String::as_str)
            .filter(|c| !c.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_metadata() {
        let json = r#"{
            "$schema": "../icon.schema.json",
            "contributors": ["someone"],
            "tags": ["arrow"],
            "categories": ["arrows", "navigation"],
            "aliases": [
                "arrow-down-01",
                { "name": "move-down", "deprecated": true, "deprecationReason": "alias-naming", "toBeRemovedInVersion": "v1.0" }
            ]
        }"#;

        let meta = IconMetadata::from_json(json).unwrap();

        assert_eq!(meta.categories, vec!["arrows", "navigation"]);
        assert_eq!(meta.aliases.len(), 2);
        assert_eq!(meta.aliases[0].name(), "arrow-down-01");
        assert!(!meta.aliases[0].is_deprecated());
        assert_eq!(meta.aliases[1].name(), "move-down");
        assert!(meta.aliases[1].is_deprecated());
    }

    #[test]
    fn parse_empty_object() {
        let meta = IconMetadata::from_json("{}").unwrap();
        assert_eq!(meta, IconMetadata::default());
    }

    #[test]
    fn parse_rejects_malformed_json() {
        assert!(IconMetadata::from_json("{ \"categories\": [").is_err());
        assert!(IconMetadata::from_json("{ \"categories\": \"arrows\" }").is_err());
    }

    #[test]
    fn category_names_skips_empty_strings() {
        let meta = IconMetadata {
            categories: vec!["".to_string(), "shapes".to_string()],
            ..Default::default()
        };
        assert_eq!(meta.category_names().collect::<Vec<_>>(), vec!["shapes"]);
    }
}
