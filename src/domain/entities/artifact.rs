//! Conversion outcomes
//!
//! Each asset of a run ends as either an `Artifact` or an `AssetFailure`.
//! `RunReport` collects them, one slot per asset.

use std::collections::BTreeSet;

/// Bytes produced for one asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    name: String,
    bytes: Vec<u8>,
}

impl Artifact {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    /// Name of the asset this artifact was produced from
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Output file name (`<name>.<extension>`)
    pub fn file_name(&self, extension: &str) -> String {
        format!("{}.{}", self.name, extension)
    }
}

/// A conversion that did not produce an artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetFailure {
    pub name: String,
    pub reason: String,
}

/// Outcome of one asset
pub type ConversionResult = Result<Artifact, AssetFailure>;

/// Aggregated outcome of a batch run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Artifacts that were produced (and written, when the run writes them)
    pub converted: Vec<Artifact>,
    /// Assets that failed at any stage
    pub failures: Vec<AssetFailure>,
}

impl RunReport {
    /// Fold per-asset results into a report
    pub fn from_results(results: impl IntoIterator<Item = ConversionResult>) -> Self {
        let mut report = Self::default();
        for result in results {
            match result {
                Ok(artifact) => report.converted.push(artifact),
                Err(failure) => report.failures.push(failure),
            }
        }
        report
    }

    pub fn attempted(&self) -> usize {
        self.converted.len() + self.failures.len()
    }

    pub fn succeeded(&self) -> usize {
        self.converted.len()
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Sorted, de-duplicated names of converted assets
    pub fn converted_names(&self) -> Vec<String> {
        self.converted
            .iter()
            .map(|a| a.name().to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Look up a converted artifact by name
    pub fn artifact(&self, name: &str) -> Option<&Artifact> {
        self.converted.iter().find(|a| a.name() == name)
    }
}
