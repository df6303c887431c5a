//! Outcome accounting for file-mode runs.

use std::path::{Path, PathBuf};

/// What happened to one formatted file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Already formatted; nothing written.
    Unchanged,
    /// Rewritten in place (or would be, under `--check` / `--diff`).
    Reformatted,
    /// Could not be read, formatted, or written back.
    Failed(String),
}

/// One file paired with its outcome.
#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    pub outcome: FileOutcome,
}

impl FileReport {
    pub fn unchanged(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            outcome: FileOutcome::Unchanged,
        }
    }

    pub fn reformatted(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            outcome: FileOutcome::Reformatted,
        }
    }

    pub fn failed(path: &Path, reason: String) -> Self {
        Self {
            path: path.to_path_buf(),
            outcome: FileOutcome::Failed(reason),
        }
    }
}

/// Tally of a whole run, accumulated as file reports arrive. Reformatted
/// paths and failures are kept for the CLI's verbose and error output; clean
/// files only bump a counter.
#[derive(Debug, Default)]
pub struct RunSummary {
    unchanged: usize,
    reformatted: Vec<PathBuf>,
    failures: Vec<(PathBuf, String)>,
}

impl RunSummary {
    pub fn record(&mut self, report: FileReport) {
        match report.outcome {
            FileOutcome::Unchanged => self.unchanged += 1,
            FileOutcome::Reformatted => self.reformatted.push(report.path),
            FileOutcome::Failed(reason) => self.failures.push((report.path, reason)),
        }
    }

    pub fn total(&self) -> usize {
        self.unchanged + self.reformatted.len() + self.failures.len()
    }

    pub fn reformatted_paths(&self) -> &[PathBuf] {
        &self.reformatted
    }

    pub fn any_failed(&self) -> bool {
        !self.failures.is_empty()
    }

    pub fn any_reformatted(&self) -> bool {
        !self.reformatted.is_empty()
    }

    /// One-line run summary for stderr.
    pub fn one_line(&self) -> String {
        let mut line = format!("{} file(s) processed", self.total());
        for (count, label) in [
            (self.reformatted.len(), "reformatted"),
            (self.unchanged, "unchanged"),
            (self.failures.len(), "failed"),
        ] {
            if count > 0 {
                line.push_str(&format!(", {} {}", count, label));
            }
        }
        line
    }

    pub fn print_failures(&self) {
        for (path, reason) in &self.failures {
            eprintln!("error: {}: {}", path.display(), reason);
        }
    }
}
