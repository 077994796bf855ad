//! Resx Use Case
//!
//! Orchestrates the bundle run:
//! 1. Validate every `.ico` of the source directory (nothing is rewritten)
//! 2. Load metadata and category definitions, build the category index
//! 3. Write one bundle per category, then the bundle with every icon
//! 4. Write `index.json`

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::application::pipeline::{BatchOptions, BatchPipeline};
use crate::domain::entities::{to_manifest_json, Artifact, MANIFEST_FILE_NAME};
use crate::domain::ports::{
    BuildEvent, BuildEventSink, ConversionConfig, FileSystem, NoopEventSink,
};
use crate::domain::services::{build_bundle_manifest, bundle_file_name, CategoryIndex};
use crate::error::{IcopackError, IcopackResult};
use crate::infrastructure::converters::IcoCheckConverter;
use crate::infrastructure::repositories::{FsCategoryRepository, FsMetadataRepository};
use crate::infrastructure::resx::ResxBundle;

use super::options::ResxBuildOptions;
use super::result::ResxBuildResult;

/// Resx use case - parameterized by its file system
pub struct ResxBuildUseCase<'a> {
    fs: &'a dyn FileSystem,
    events: Arc<dyn BuildEventSink>,
}

impl<'a> ResxBuildUseCase<'a> {
    pub fn new(fs: &'a dyn FileSystem) -> Self {
        Self {
            fs,
            events: Arc::new(NoopEventSink),
        }
    }

    pub fn with_events(mut self, events: Arc<dyn BuildEventSink>) -> Self {
        self.events = events;
        self
    }

    /// Execute the run.
    ///
    /// Missing ICO or metadata directories are fatal; a missing categories
    /// directory only means no category bundles.
    pub fn execute(&self, options: &ResxBuildOptions) -> IcopackResult<ResxBuildResult> {
        if !self.fs.is_dir(&options.source) {
            return Err(IcopackError::MissingIcoSource {
                path: options.source.clone(),
            });
        }

        let checker = IcoCheckConverter::new();
        let batch = BatchOptions::new("resx", &options.source, &options.output)
            .without_writes()
            .with_jobs(options.jobs);
        let report = BatchPipeline::new(&checker, self.fs)
            .with_events(self.events.clone())
            .run(&batch, &ConversionConfig::default())?;

        let mut warnings = Vec::new();
        let metadata = FsMetadataRepository::new(self.fs).load_all(&options.metadata)?;
        for warning in &metadata.warnings {
            self.warn(&mut warnings, warning.file.clone(), warning.message.clone());
        }

        let category_names = match FsCategoryRepository::new(self.fs).load_names(&options.categories)? {
            Some(names) => names,
            None => {
                self.warn(
                    &mut warnings,
                    options.categories.clone(),
                    "categories directory not found; writing no category bundles".to_string(),
                );
                Vec::new()
            }
        };
        let index = CategoryIndex::build(category_names, metadata.iter());

        self.fs.create_dir_all(&options.output)?;

        let icons: BTreeMap<&str, &Artifact> =
            report.converted.iter().map(|a| (a.name(), a)).collect();
        // Metadata names match ICO file names regardless of ASCII case
        let mut by_key: BTreeMap<String, &Artifact> = BTreeMap::new();
        for (name, artifact) in &icons {
            by_key.entry(name.to_ascii_lowercase()).or_insert(*artifact);
        }
        let mut bundles = Vec::new();
        let mut category_counts = BTreeMap::new();

        for (category, members) in index.iter() {
            let path = options
                .output
                .join(bundle_file_name(&options.prefix, Some(category)));
            // Members without a valid ICO are skipped
            let selected = members
                .iter()
                .filter_map(|name| by_key.get(&name.to_ascii_lowercase()).copied());
            let count = self.write_bundle(&path, selected, &mut warnings)?;
            category_counts.insert(category.to_string(), count);
            bundles.push(path);
        }

        let all_path = options.output.join(bundle_file_name(&options.prefix, None));
        let icon_count = self.write_bundle(&all_path, icons.values().copied(), &mut warnings)?;
        bundles.push(all_path);

        let manifest = build_bundle_manifest(
            &options.package,
            &options.prefix,
            &report,
            icon_count,
            category_counts,
        );
        let manifest_path = options.output.join(MANIFEST_FILE_NAME);
        self.fs
            .write(&manifest_path, to_manifest_json(&manifest)?.as_bytes())?;

        self.events.on_event(BuildEvent::ManifestWritten {
            path: manifest_path.clone(),
            icon_count,
        });
        self.events.on_event(BuildEvent::Completed {
            attempted: report.attempted(),
            converted: report.succeeded(),
            failed: report.failed(),
        });

        Ok(ResxBuildResult {
            report,
            manifest,
            bundles,
            manifest_path,
            warnings,
        })
    }

    /// Write one bundle; returns the number of icons it holds.
    fn write_bundle<'i>(
        &self,
        path: &Path,
        icons: impl Iterator<Item = &'i Artifact>,
        warnings: &mut Vec<String>,
    ) -> IcopackResult<usize> {
        let mut bundle = ResxBundle::new();
        for icon in icons {
            if let Err(duplicate) = bundle.add_icon(icon.name(), icon.bytes()) {
                self.warn(warnings, path.to_path_buf(), format!("{}; skipped", duplicate));
            }
        }

        let xml = bundle.to_xml().map_err(|e| IcopackError::Bundle {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;
        self.fs.write(path, &xml)?;

        self.events.on_event(BuildEvent::BundleWritten {
            path: path.to_path_buf(),
            icon_count: bundle.len(),
        });
        Ok(bundle.len())
    }

    fn warn(&self, warnings: &mut Vec<String>, file: PathBuf, message: String) {
        warnings.push(format!("{}: {}", file.display(), message));
        self.events.on_event(BuildEvent::Warning { file, message });
    }
}
