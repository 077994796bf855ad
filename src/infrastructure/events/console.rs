//! Console Event Sink
//!
//! Human-readable progress. Failures and warnings go to stderr, everything
//! else to stdout.

use std::io::{self, Write};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::config::Verbosity;
use crate::domain::ports::{BuildEvent, BuildEventSink};
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::terminal::detect_capabilities;

/// A progress line is printed every this many converted assets
pub const PROGRESS_INTERVAL: usize = 100;

pub struct ConsoleEventSink {
    verbosity: Verbosity,
    supports_color: bool,
    supports_unicode: bool,
    out: Mutex<Box<dyn Write + Send>>,
    err: Mutex<Box<dyn Write + Send>>,
    converted: AtomicUsize,
}

impl ConsoleEventSink {
    /// Sink for the real terminal
    pub fn new(verbosity: Verbosity) -> Self {
        let caps = detect_capabilities();
        let mut sink = Self::with_writers(verbosity, io::stdout(), io::stderr());
        sink.supports_color = caps.supports_color;
        sink.supports_unicode = caps.supports_unicode;
        sink
    }

    /// Plain ASCII sink writing to custom writers
    pub fn with_writers<O, E>(verbosity: Verbosity, out: O, err: E) -> Self
    where
        O: Write + Send + 'static,
        E: Write + Send + 'static,
    {
        Self {
            verbosity,
            supports_color: false,
            supports_unicode: false,
            out: Mutex::new(Box::new(out)),
            err: Mutex::new(Box::new(err)),
            converted: AtomicUsize::new(0),
        }
    }

    fn icon(&self, icon: Icon) -> String {
        icon.colored(self.supports_color, self.supports_unicode)
    }

    fn paint(&self, text: ColoredText) -> String {
        text.render(self.supports_color)
    }

    fn print(&self, line: String) {
        if let Ok(mut out) = self.out.lock() {
            let _ = writeln!(out, "{}", line);
            let _ = out.flush();
        }
    }

    fn eprint(&self, line: String) {
        if let Ok(mut err) = self.err.lock() {
            let _ = writeln!(err, "{}", line);
            let _ = err.flush();
        }
    }

    fn normal(&self) -> bool {
        self.verbosity >= Verbosity::Normal
    }

    fn verbose(&self) -> bool {
        self.verbosity >= Verbosity::Verbose
    }

    fn started(&self, command: &str, source: &Path, output: &Path, asset_count: usize) {
        let (icon, verb) = match command {
            "resx" => (Icon::Bundle, "Bundling"),
            _ => (Icon::Ico, "Converting"),
        };
        self.print(format!(
            "{} {} {} {} from {} to {}",
            self.icon(icon),
            verb,
            asset_count,
            if asset_count == 1 { "icon" } else { "icons" },
            source.display(),
            output.display(),
        ));
    }

    fn converted(&self, name: &str, total: usize) {
        let count = self.converted.fetch_add(1, Ordering::Relaxed) + 1;
        if self.verbose() {
            self.print(format!(
                "  {} {}",
                self.icon(Icon::Success),
                self.paint(ColoredText::dim(name))
            ));
        } else if self.normal() && count % PROGRESS_INTERVAL == 0 {
            self.print(format!(
                "  {} Converted {}/{} icons...",
                self.icon(Icon::Progress),
                count,
                total
            ));
        }
    }

    fn completed(&self, attempted: usize, converted: usize, failed: usize) {
        let summary = format!("Done: {}/{} converted", converted, attempted);
        if failed == 0 {
            self.print(format!(
                "{} {}",
                self.icon(Icon::Success),
                self.paint(ColoredText::success(summary).bold())
            ));
        } else {
            self.print(format!(
                "{} {}, {} failed",
                self.icon(Icon::Warning),
                self.paint(ColoredText::warning(summary).bold()),
                failed
            ));
        }
    }
}

impl BuildEventSink for ConsoleEventSink {
    fn on_event(&self, event: BuildEvent) {
        match event {
            BuildEvent::Started {
                command,
                source,
                output,
                asset_count,
            } => {
                if self.normal() {
                    self.started(command, &source, &output, asset_count);
                }
            }
            BuildEvent::ItemConverted { name, total, .. } => self.converted(&name, total),
            BuildEvent::ItemFailed { name, error, .. } => {
                self.eprint(format!(
                    "{} {}: {}",
                    self.icon(Icon::Error),
                    self.paint(ColoredText::error(name)),
                    error
                ));
            }
            BuildEvent::Warning { file, message } => {
                if self.normal() {
                    self.eprint(format!(
                        "{} {}: {}",
                        self.icon(Icon::Warning),
                        self.paint(ColoredText::warning(file.display().to_string())),
                        message
                    ));
                }
            }
            BuildEvent::BundleWritten { path, icon_count } => {
                if self.verbose() {
                    self.print(format!(
                        "  {} {} ({} icons)",
                        self.icon(Icon::Arrow),
                        path.display(),
                        icon_count
                    ));
                }
            }
            BuildEvent::ManifestWritten { path, icon_count } => {
                if self.normal() {
                    self.print(format!(
                        "  {} Manifest {} ({} icons)",
                        self.icon(Icon::Arrow),
                        self.paint(ColoredText::info(path.display().to_string())),
                        icon_count
                    ));
                }
            }
            BuildEvent::Completed {
                attempted,
                converted,
                failed,
            } => {
                if self.normal() {
                    self.completed(attempted, converted, failed);
                }
            }
        }
    }
}
