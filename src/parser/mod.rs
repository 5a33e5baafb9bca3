//! Parser module — doc-comments and the source files that carry them.

pub mod comment;
pub mod php;

use crate::model::{TraitDoc, TraitInfo};
use crate::render::markdown::SOURCE_DIR;
use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Parse a source file into its TraitDocs based on its extension.
pub fn parse_file(path: &Path, content: &str) -> Result<Vec<TraitDoc>> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("php") => php::scan(content, path),
        _ => Err(anyhow!("unsupported file type: {}", path.display())),
    }
}

/// Scan `<base_path>/src/*.php` into a TraitInfo, in file name order.
pub fn scan_dir(base_path: &Path) -> Result<TraitInfo> {
    let pattern = base_path.join(SOURCE_DIR).join("*.php");
    let pattern = pattern.to_string_lossy();

    let mut files: Vec<PathBuf> = glob::glob(&pattern)
        .with_context(|| format!("invalid glob pattern: {}", pattern))?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file())
        .collect();
    // Sort for deterministic output
    files.sort();

    let mut info = TraitInfo::new();
    for path in &files {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let traits = parse_file(path, &content)?;
        if traits.is_empty() {
            tracing::warn!(file = %path.display(), "no trait declared, skipping");
        }
        for doc in traits {
            if doc.methods.is_empty() {
                tracing::debug!(trait_name = %doc.name, "no step methods, skipping");
                continue;
            }
            info.insert(doc);
        }
    }

    tracing::info!(
        files = files.len(),
        traits = info.len(),
        methods = info.method_count(),
        "scanned sources"
    );
    Ok(info)
}
