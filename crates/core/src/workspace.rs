use std::path::{Path, PathBuf};

use async_trait::async_trait;
use ignore::WalkBuilder;

use crate::config::ResolverConfig;
use crate::document::SourceDocument;
use crate::error::{PhpscopeError, Result};

/// Project-wide filename search. The engine only ever asks for files
/// whose base name equals the selected token, with the configured
/// source extension, capped at `config.max_file_results`.
#[async_trait]
pub trait FileSearch: Send + Sync {
    async fn find_files(&self, basename: &str, config: &ResolverConfig) -> Result<Vec<PathBuf>>;
}

/// Read-only access to candidate file content.
#[async_trait]
pub trait FileStore: Send + Sync {
    async fn open(&self, path: &Path) -> Result<SourceDocument>;
}

/// Filesystem-backed implementation of both collaborators, rooted at a
/// project directory. The walk respects `.gitignore` and friends, which
/// keeps vendor trees out of candidate sets.
pub struct ProjectWorkspace {
    root: PathBuf,
}

impl ProjectWorkspace {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

fn collect_matches(root: &Path, basename: &str, extension: &str, cap: usize) -> Vec<PathBuf> {
    WalkBuilder::new(root)
        .build()
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();
            if !path.is_file() {
                return None;
            }
            let stem_matches = path.file_stem().and_then(|s| s.to_str()) == Some(basename);
            let ext_matches = path.extension().and_then(|e| e.to_str()) == Some(extension);
            (stem_matches && ext_matches).then(|| path.to_path_buf())
        })
        .take(cap)
        .collect()
}

#[async_trait]
impl FileSearch for ProjectWorkspace {
    async fn find_files(&self, basename: &str, config: &ResolverConfig) -> Result<Vec<PathBuf>> {
        let root = self.root.clone();
        let basename = basename.to_string();
        let extension = config.source_extension.clone();
        let cap = config.max_file_results;

        // The walker is synchronous; keep it off the async runtime.
        tokio::task::spawn_blocking(move || collect_matches(&root, &basename, &extension, cap))
            .await
            .map_err(|e| PhpscopeError::Search(format!("file walk aborted: {}", e)))
    }
}

#[async_trait]
impl FileStore for ProjectWorkspace {
    async fn open(&self, path: &Path) -> Result<SourceDocument> {
        let text = tokio::fs::read_to_string(path).await?;
        Ok(SourceDocument::new(&text))
    }
}
