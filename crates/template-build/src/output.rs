//! Output formatting.

use crate::cli::OutputFormat;
use crate::config::Mode;
use crate::walk::{FileFailure, StageReport};
use camino::Utf8PathBuf;
use serde::Serialize;

/// Summary of a build run.
#[derive(Debug, Serialize)]
pub struct BuildSummary {
    /// The build mode.
    pub mode: Mode,
    /// The build tree that was produced.
    pub build_dir: Utf8PathBuf,
    /// Number of files copied from the source tree.
    pub copied: usize,
    /// Per-stage results, in execution order.
    pub stages: Vec<StageReport>,
}

impl BuildSummary {
    /// Creates an empty summary.
    pub fn new(mode: Mode, build_dir: Utf8PathBuf, copied: usize) -> Self {
        Self {
            mode,
            build_dir,
            copied,
            stages: Vec::new(),
        }
    }

    /// Returns the report for a stage, if it ran.
    pub fn stage(&self, name: &str) -> Option<&StageReport> {
        self.stages.iter().find(|report| report.stage == name)
    }

    /// Returns every per-file failure across all stages.
    pub fn failures(&self) -> impl Iterator<Item = &FileFailure> {
        self.stages.iter().flat_map(|report| report.failures.iter())
    }

    /// Returns the number of per-file failures.
    pub fn failure_count(&self) -> usize {
        self.stages.iter().map(|report| report.failures.len()).sum()
    }

    /// Formats the summary.
    pub fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Human => self.format_human(),
            OutputFormat::Json => serde_json::to_string_pretty(self).unwrap_or_default(),
        }
    }

    /// Formats as human-readable output.
    fn format_human(&self) -> String {
        let mut output = String::new();

        for failure in self.failures() {
            output.push_str(&format!(
                "{}\nError ({}): {}\n\n",
                failure.path, failure.stage, failure.message
            ));
        }

        let changed = |name: &str| self.stage(name).map_or(0, |report| report.changed);
        let normalized = match self.stage("normalize") {
            Some(report) => format!(
                ", {} normalized",
                plural(report.changed, "file", "files")
            ),
            None => String::new(),
        };
        let failure_count = self.failure_count();
        let failed = if failure_count > 0 {
            format!(", {} failed", failure_count)
        } else {
            String::new()
        };

        output.push_str(&format!(
            "====================================\nBuild complete ({} mode): {} copied, {} generated{}, {} rewritten{}\nFiles are in {}/",
            self.mode,
            plural(self.copied, "file", "files"),
            plural(changed("convert"), "module", "modules"),
            normalized,
            plural(changed("references"), "file", "files"),
            failed,
            self.build_dir
        ));

        output
    }
}

fn plural(count: usize, one: &str, many: &str) -> String {
    format!("{} {}", count, if count == 1 { one } else { many })
}
