//! Directory batch command.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use rayon::prelude::*;
use walkdir::WalkDir;

use crate::commands::render::translate_source;
use crate::config::{ConfigFile, HostKind};

/// Result of a batch run.
#[derive(Debug)]
pub struct BatchResult {
    /// Number of trees translated
    pub translated: usize,

    /// Files that failed, with their error
    pub failed: Vec<(PathBuf, String)>,

    /// Total time in milliseconds
    pub duration_ms: u64,
}

/// Collect tree files under `dir` with the given extension, sorted.
///
/// Anything under `exclude` is skipped, so output written inside the input
/// directory is never read back as a tree.
fn collect_trees(dir: &Path, extension: &str, exclude: Option<&Path>) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| !exclude.is_some_and(|out| e.path().starts_with(out)))
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|path| path.extension().and_then(|e| e.to_str()) == Some(extension))
        .collect();

    files.sort();
    files
}

/// Translate every tree under `dir` into `output_dir`, mirroring the
/// directory layout.
///
/// Trees are independent, so they are translated in parallel. A failing
/// tree is reported and does not stop the others.
pub fn translate_dir(
    dir: &Path,
    output_dir: &Path,
    extension: &str,
    host: HostKind,
    pretty: bool,
) -> Result<BatchResult> {
    if !dir.is_dir() {
        anyhow::bail!("Directory not found: {}", dir.display());
    }

    // Compare canonical paths so `out` and `./trees/../trees/out` match.
    let root = dir
        .canonicalize()
        .with_context(|| format!("Failed to resolve {}", dir.display()))?;
    let exclude = output_dir
        .canonicalize()
        .ok()
        .filter(|out| *out != root);

    let start = Instant::now();
    let files = collect_trees(&root, extension, exclude.as_deref());
    tracing::debug!("Found {} tree files in {}", files.len(), dir.display());

    let outcomes: Vec<(PathBuf, Result<()>)> = files
        .par_iter()
        .map(|path| {
            let outcome = translate_file(&root, path, output_dir, host, pretty);
            (path.clone(), outcome)
        })
        .collect();

    let mut translated = 0;
    let mut failed = Vec::new();
    for (path, outcome) in outcomes {
        match outcome {
            Ok(()) => translated += 1,
            Err(e) => {
                tracing::warn!("Failed to translate {}: {:#}", path.display(), e);
                failed.push((path, format!("{e:#}")));
            }
        }
    }

    Ok(BatchResult {
        translated,
        failed,
        duration_ms: start.elapsed().as_millis() as u64,
    })
}

fn translate_file(
    root: &Path,
    path: &Path,
    output_dir: &Path,
    host: HostKind,
    pretty: bool,
) -> Result<()> {
    let source =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let rendered = translate_source(&source, host, pretty)?;

    let relative = path.strip_prefix(root).unwrap_or(path);
    let target = output_dir
        .join(relative)
        .with_extension(host.output_extension());

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(&target, rendered).with_context(|| format!("Failed to write {}", target.display()))?;

    Ok(())
}

/// Run the batch command.
pub fn run(
    config: &ConfigFile,
    dir: &Path,
    host: Option<HostKind>,
    output: Option<PathBuf>,
) -> Result<()> {
    let host = host.unwrap_or(config.render.host);
    let output_dir = output.unwrap_or_else(|| PathBuf::from(&config.batch.output));

    tracing::info!("Translating trees in {}...", dir.display());

    let result = translate_dir(
        dir,
        &output_dir,
        &config.batch.extension,
        host,
        config.render.pretty,
    )?;

    tracing::info!(
        "Translated {} trees in {}ms",
        result.translated,
        result.duration_ms
    );
    tracing::info!("Output: {}", output_dir.display());

    if !result.failed.is_empty() {
        anyhow::bail!("{} trees failed to translate", result.failed.len());
    }

    Ok(())
}
