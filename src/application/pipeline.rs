//! Batch conversion pipeline
//!
//! Shared by the `ico` and `resx` runs.
//!
//! ## Flow
//!
//! 1. List source files of the converter's extension, sorted by file name
//! 2. Load + convert (+ write) every asset on the rayon pool
//! 3. Fold the per-asset results into a `RunReport`
//!
//! Only step 1 can fail the run; per-asset failures are collected.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use rayon::prelude::*;

use crate::domain::entities::{Artifact, AssetFailure, ConversionResult, RunReport, SourceAsset};
use crate::domain::ports::{
    AssetConverter, BuildEvent, BuildEventSink, ConversionConfig, FileSystem, NoopEventSink,
};
use crate::error::IcopackResult;
use crate::infrastructure::repositories::FsAssetRepository;

/// Where a batch reads from and writes to
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Command name reported in the start event
    pub command: &'static str,
    pub source: PathBuf,
    pub output: PathBuf,
    /// Write each artifact as `<output>/<name>.<ext>`
    pub write_artifacts: bool,
    /// Worker threads; `None` uses rayon's default
    pub jobs: Option<usize>,
}

impl BatchOptions {
    pub fn new(command: &'static str, source: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            command,
            source: source.into(),
            output: output.into(),
            write_artifacts: true,
            jobs: None,
        }
    }

    pub fn without_writes(mut self) -> Self {
        self.write_artifacts = false;
        self
    }

    pub fn with_jobs(mut self, jobs: Option<usize>) -> Self {
        self.jobs = jobs;
        self
    }
}

/// Directory-wide fan-out of an `AssetConverter`
pub struct BatchPipeline<'a> {
    converter: &'a dyn AssetConverter,
    fs: &'a dyn FileSystem,
    events: Arc<dyn BuildEventSink>,
}

impl<'a> BatchPipeline<'a> {
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

    /// Run the batch.
    ///
    /// Results are gathered one slot per asset, so the report order follows
    /// the sorted listing regardless of scheduling.
    pub fn run(&self, options: &BatchOptions, config: &ConversionConfig) -> IcopackResult<RunReport> {
        let repo = FsAssetRepository::new(self.fs);
        let paths = repo.list(&options.source, self.converter.source_extension())?;
        let total = paths.len();

        self.events.on_event(BuildEvent::Started {
            command: options.command,
            source: options.source.clone(),
            output: options.output.clone(),
            asset_count: total,
        });

        if options.write_artifacts {
            self.fs.create_dir_all(&options.output)?;
        }

        let convert_all = || -> Vec<ConversionResult> {
            paths
                .par_iter()
                .enumerate()
                .map(|(index, path)| self.process(index, total, path, options, config))
                .collect()
        };

        let results = match options.jobs {
            Some(jobs) => rayon::ThreadPoolBuilder::new()
                .num_threads(jobs)
                .build()?
                .install(convert_all),
            None => convert_all(),
        };

        Ok(RunReport::from_results(results))
    }

    fn process(
        &self,
        index: usize,
        total: usize,
        path: &Path,
        options: &BatchOptions,
        config: &ConversionConfig,
    ) -> ConversionResult {
        match self.convert_one(path, options, config) {
            Ok(artifact) => {
                if self.events.wants_detailed_events() {
                    self.events.on_event(BuildEvent::ItemConverted {
                        index,
                        name: artifact.name().to_string(),
                        total,
                    });
                }
                Ok(artifact)
            }
            Err(err) => {
                let name = SourceAsset::name_from_path(path)
                    .unwrap_or_else(|| path.display().to_string());
                let reason = err.to_string();
                self.events.on_event(BuildEvent::ItemFailed {
                    index,
                    name: name.clone(),
                    error: reason.clone(),
                });
                Err(AssetFailure { name, reason })
            }
        }
    }

    fn convert_one(
        &self,
        path: &Path,
        options: &BatchOptions,
        config: &ConversionConfig,
    ) -> IcopackResult<Artifact> {
        let asset = FsAssetRepository::new(self.fs).load(path)?;
        let bytes = self.converter.convert(&asset, config)?;
        let artifact = Artifact::new(asset.name(), bytes);

        if options.write_artifacts {
            let target = options
                .output
                .join(artifact.file_name(self.converter.artifact_extension()));
            self.fs.write(&target, artifact.bytes())?;
        }
        Ok(artifact)
    }
}
