//! ICO Use Case
//!
//! Orchestrates the ICO run:
//! 1. Convert every SVG through the batch pipeline (writes `<name>.ico`)
//! 2. Optionally copy icons under their alias names
//! 3. Write `index.json` listing the converted icons

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::application::pipeline::{BatchOptions, BatchPipeline};
use crate::domain::entities::{to_manifest_json, Artifact, RunReport, MANIFEST_FILE_NAME};
use crate::domain::ports::{AssetConverter, BuildEvent, BuildEventSink, FileSystem, NoopEventSink};
use crate::domain::services::build_ico_manifest;
use crate::error::IcopackResult;
use crate::infrastructure::repositories::FsMetadataRepository;

use super::options::IcoBuildOptions;
use super::result::IcoBuildResult;

/// ICO use case - parameterized by its converter and file system
pub struct IcoBuildUseCase<'a> {
    converter: &'a dyn AssetConverter,
    fs: &'a dyn FileSystem,
    events: Arc<dyn BuildEventSink>,
}

impl<'a> IcoBuildUseCase<'a> {
    pub fn new(converter: &'a dyn AssetConverter, fs: &'a dyn FileSystem) -> Self {
        Self {
            converter,
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
    /// Fails only when the sources cannot be listed, the output or the
    /// manifest cannot be written, or aliases are requested without metadata.
    /// An alias copy that cannot be written is a warning.
    pub fn execute(&self, options: &IcoBuildOptions) -> IcopackResult<IcoBuildResult> {
        let batch = BatchOptions::new("ico", &options.source, &options.output)
            .with_jobs(options.jobs);
        let report = BatchPipeline::new(self.converter, self.fs)
            .with_events(self.events.clone())
            .run(&batch, &options.config)?;

        let mut warnings = Vec::new();
        let aliases = if options.aliases {
            self.write_aliases(options, &report, &mut warnings)?
        } else {
            BTreeMap::new()
        };

        let manifest = build_ico_manifest(&options.package, &options.config, &report, aliases);
        let manifest_path = options.output.join(MANIFEST_FILE_NAME);
        self.fs
            .write(&manifest_path, to_manifest_json(&manifest)?.as_bytes())?;

        self.events.on_event(BuildEvent::ManifestWritten {
            path: manifest_path.clone(),
            icon_count: manifest.icon_count,
        });
        self.events.on_event(BuildEvent::Completed {
            attempted: report.attempted(),
            converted: report.succeeded(),
            failed: report.failed(),
        });

        Ok(IcoBuildResult {
            report,
            manifest,
            manifest_path,
            warnings,
        })
    }

    /// Copy each converted icon to `<alias>.ico`; returns alias → icon.
    ///
    /// Icons are visited in name order, so the first icon claiming an alias keeps it.
    fn write_aliases(
        &self,
        options: &IcoBuildOptions,
        report: &RunReport,
        warnings: &mut Vec<String>,
    ) -> IcopackResult<BTreeMap<String, String>> {
        let metadata = FsMetadataRepository::new(self.fs).load_all(&options.metadata)?;
        for warning in &metadata.warnings {
            self.warn(warnings, warning.file.clone(), warning.message.clone());
        }

        let converted: BTreeMap<&str, &Artifact> =
            report.converted.iter().map(|a| (a.name(), a)).collect();
        let taken: BTreeSet<&str> = converted
            .keys()
            .copied()
            .chain(report.failures.iter().map(|f| f.name.as_str()))
            .collect();

        let mut aliases: BTreeMap<String, String> = BTreeMap::new();
        for (icon, meta) in metadata.iter() {
            let Some(artifact) = converted.get(icon) else {
                continue;
            };
            let meta_file = options.metadata.join(format!("{}.json", icon));

            for alias in &meta.aliases {
                let alias_name = alias.name();
                if alias_name == icon {
                    continue;
                }
                if !is_plain_file_stem(alias_name) {
                    self.warn(
                        warnings,
                        meta_file.clone(),
                        format!("alias '{}' is not a valid file name; skipped", alias_name),
                    );
                    continue;
                }
                if taken.contains(alias_name) {
                    self.warn(
                        warnings,
                        meta_file.clone(),
                        format!("alias '{}' collides with an icon; skipped", alias_name),
                    );
                    continue;
                }
                if let Some(owner) = aliases.get(alias_name) {
                    self.warn(
                        warnings,
                        meta_file.clone(),
                        format!("alias '{}' already belongs to {}; skipped", alias_name, owner),
                    );
                    continue;
                }

                let target = options.output.join(format!(
                    "{}.{}",
                    alias_name,
                    self.converter.artifact_extension()
                ));
                if let Err(e) = self.fs.write(&target, artifact.bytes()) {
                    self.warn(
                        warnings,
                        meta_file.clone(),
                        format!("alias '{}' could not be written: {}; skipped", alias_name, e),
                    );
                    continue;
                }
                aliases.insert(alias_name.to_string(), icon.to_string());
            }
        }
        Ok(aliases)
    }

    fn warn(&self, warnings: &mut Vec<String>, file: PathBuf, message: String) {
        warnings.push(format!("{}: {}", file.display(), message));
        self.events.on_event(BuildEvent::Warning { file, message });
    }
}

/// Non-empty, no separators, not a relative path component
fn is_plain_file_stem(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\'])
        && Path::new(name).file_name().is_some()
}
