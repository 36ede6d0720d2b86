use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::SheetError;

// ── SourceFile ────────────────────────────────────────────────────────────────

/// One discovered source image: its stem-derived identifier and its path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceFile {
    pub id: String,
    pub path: PathBuf,
}

// ── SourceSet ─────────────────────────────────────────────────────────────────

/// The working set for one run: the default image plus every other source,
/// sorted lexicographically by identifier.
#[derive(Clone, Debug)]
pub struct SourceSet {
    pub default: SourceFile,
    pub others: Vec<SourceFile>,
}

impl SourceSet {
    /// Scan `dir` (non-recursively) for `.png` files and split out the
    /// default image.
    ///
    /// Identifiers are file stems, so the default matches regardless of how
    /// the platform spells its path. Duplicate stems keep the first
    /// occurrence and warn. `others` is sorted by identifier, independent of
    /// filesystem enumeration order, so repeated runs over the same inputs
    /// produce the same sheet on every platform.
    pub fn load_dir(dir: &Path, default_id: &str) -> Result<Self, SheetError> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut files: Vec<SourceFile> = Vec::new();

        for entry in walkdir::WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
        {
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) != Some("png") {
                continue;
            }
            let id = match path.file_stem().and_then(|s| s.to_str()) {
                Some(s) if !s.is_empty() => s.to_string(),
                _ => continue,
            };

            // Keys in the position map are unique; only the first file with a
            // given stem is used.
            if !seen.insert(id.clone()) {
                eprintln!("flagsheet: duplicate identifier '{id}' from {path:?}; skipping");
                continue;
            }
            files.push(SourceFile { id, path: path.to_path_buf() });
        }

        if files.is_empty() {
            return Err(SheetError::EmptySet { dir: dir.display().to_string() });
        }

        let default_index = files
            .iter()
            .position(|f| f.id == default_id)
            .ok_or_else(|| SheetError::MissingDefault {
                name: default_id.to_string(),
                dir: dir.display().to_string(),
            })?;
        let default = files.swap_remove(default_index);

        files.sort_by(|a, b| a.id.cmp(&b.id));

        Ok(Self { default, others: files })
    }

    /// Number of grid cells needed: the default plus every other image.
    pub fn total(&self) -> u32 {
        self.others.len() as u32 + 1
    }
}
