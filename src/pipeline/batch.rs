use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::{
    foundation::{
        error::{DowngradeError, DowngradeResult},
        tier::RequestedTier,
    },
    pipeline::downgrade::{DowngradeOutcome, downgrade_file},
};

/// Default container file extension matched in directory mode.
pub const DEFAULT_EXTENSION: &str = "sc";

/// Runner configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchOpts {
    /// Requested target tier, applied to every file.
    pub target: RequestedTier,
    /// Extension (without the dot) selecting files in directory mode.
    /// Compared case-insensitively.
    pub extension: String,
}

impl Default for BatchOpts {
    fn default() -> Self {
        Self {
            target: RequestedTier::Auto,
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

/// A file that was downgraded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchItem {
    /// Source file.
    pub input: PathBuf,
    /// Written file.
    pub output: PathBuf,
    /// What the pipeline did.
    pub outcome: DowngradeOutcome,
}

/// A file that failed; the batch carried on past it.
#[derive(Debug)]
pub struct BatchFailure {
    /// Offending source file.
    pub path: PathBuf,
    /// Why it failed.
    pub error: DowngradeError,
}

/// Per-file results of one run, in processing order.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Files written successfully.
    pub succeeded: Vec<BatchItem>,
    /// Files that failed.
    pub failed: Vec<BatchFailure>,
}

impl BatchReport {
    /// Number of files attempted.
    pub fn total(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }

    /// True when no file failed.
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Downgrade a single file or every matching file in a directory.
///
/// Single-file mode writes to `output` and returns the pipeline error
/// unchanged. Directory mode writes `output/<file name>` for each direct
/// child with the configured extension, creating `output` if needed, and
/// records per-file failures in the report instead of stopping.
pub fn run(input: &Path, output: &Path, opts: &BatchOpts) -> DowngradeResult<BatchReport> {
    if !input.exists() {
        return Err(DowngradeError::InputNotFound(input.to_path_buf()));
    }

    let mut report = BatchReport::default();

    if !input.is_dir() {
        let outcome = downgrade_file(input, output, opts.target)?;
        report.succeeded.push(BatchItem {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            outcome,
        });
        return Ok(report);
    }

    std::fs::create_dir_all(output)
        .with_context(|| format!("create output dir '{}'", output.display()))?;

    for path in list_inputs(input, &opts.extension)? {
        let Some(name) = path.file_name() else {
            continue;
        };
        let dest = output.join(name);
        match downgrade_file(&path, &dest, opts.target) {
            Ok(outcome) => report.succeeded.push(BatchItem {
                input: path,
                output: dest,
                outcome,
            }),
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "failed to downgrade");
                report.failed.push(BatchFailure { path, error });
            }
        }
    }

    tracing::info!(
        succeeded = report.succeeded.len(),
        failed = report.failed.len(),
        "batch finished"
    );
    Ok(report)
}

/// Direct children of `dir` that are files with extension `ext`, sorted by name.
pub fn list_inputs(dir: &Path, ext: &str) -> DowngradeResult<Vec<PathBuf>> {
    let ext = ext.trim_start_matches('.');
    let entries =
        std::fs::read_dir(dir).with_context(|| format!("read input dir '{}'", dir.display()))?;

    let mut out = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("read entry in '{}'", dir.display()))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let matches = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(ext));
        if matches {
            out.push(path);
        }
    }
    out.sort();
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/batch.rs"]
mod tests;
