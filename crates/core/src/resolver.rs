use tracing::debug;

use crate::builtins::is_builtin;
use crate::config::ResolverConfig;
use crate::error::Result;
use crate::scan::first_namespace;
use crate::workspace::{FileSearch, FileStore};

/// Turns a bare token into an ordered set of fully-qualified candidate
/// names by searching the project for same-named files and reading the
/// namespace each one declares.
pub struct CandidateResolver<'a> {
    search: &'a dyn FileSearch,
    store: &'a dyn FileStore,
    config: &'a ResolverConfig,
}

impl<'a> CandidateResolver<'a> {
    pub fn new(
        search: &'a dyn FileSearch,
        store: &'a dyn FileStore,
        config: &'a ResolverConfig,
    ) -> Self {
        Self {
            search,
            store,
            config,
        }
    }

    /// Resulting order is deterministic given deterministic file
    /// enumeration: built-ins first, then namespaces in enumeration
    /// order, deduplicated by exact equality. Callers must not re-sort.
    pub async fn resolve(&self, token: &str) -> Result<Vec<String>> {
        let files = self.search.find_files(token, self.config).await?;
        debug!(token, files = files.len(), "candidate file search");

        // Reads are independent and read-only; issue them as one batch.
        // Candidate order still follows `files`, not completion order.
        let documents =
            futures::future::try_join_all(files.iter().map(|path| self.store.open(path))).await?;

        let mut candidates: Vec<String> = Vec::new();
        for doc in &documents {
            if let Some(namespace) = first_namespace(doc) {
                let fqn = format!("{}\\{}", namespace, token);
                if !candidates.contains(&fqn) {
                    candidates.push(fqn);
                }
            }
        }

        // Built-in classes outrank anything discovered in the project.
        if is_builtin(token) {
            candidates.insert(0, token.to_string());
        }

        // A matching file with no namespace declaration is a global
        // class; offer the bare name itself.
        if candidates.is_empty() && !files.is_empty() {
            candidates.push(token.to_string());
        }

        debug!(token, count = candidates.len(), "candidates resolved");
        Ok(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::SourceDocument;
    use crate::error::PhpscopeError;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::path::{Path, PathBuf};

    /// In-memory project: a fixed file list plus per-path content.
    struct FakeProject {
        files: Vec<PathBuf>,
        contents: HashMap<PathBuf, String>,
    }

    impl FakeProject {
        fn new(entries: &[(&str, &str)]) -> Self {
            Self {
                files: entries.iter().map(|(p, _)| PathBuf::from(p)).collect(),
                contents: entries
                    .iter()
                    .map(|(p, c)| (PathBuf::from(p), c.to_string()))
                    .collect(),
            }
        }
    }

    #[async_trait]
    impl FileSearch for FakeProject {
        async fn find_files(
            &self,
            _basename: &str,
            config: &ResolverConfig,
        ) -> Result<Vec<PathBuf>> {
            Ok(self
                .files
                .iter()
                .take(config.max_file_results)
                .cloned()
                .collect())
        }
    }

    #[async_trait]
    impl FileStore for FakeProject {
        async fn open(&self, path: &Path) -> Result<SourceDocument> {
            self.contents
                .get(path)
                .map(|text| SourceDocument::new(text))
                .ok_or_else(|| PhpscopeError::Internal(format!("no such file: {:?}", path)))
        }
    }

    async fn resolve_with(project: &FakeProject, token: &str) -> Vec<String> {
        let config = ResolverConfig::default();
        CandidateResolver::new(project, project, &config)
            .resolve(token)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn discovers_namespaces_in_enumeration_order() {
        let project = FakeProject::new(&[
            ("src/Models/Foo.php", "<?php\nnamespace App\\Models;\nclass Foo {}"),
            ("src/Jobs/Foo.php", "<?php\nnamespace App\\Jobs;\nclass Foo {}"),
        ]);
        assert_eq!(
            resolve_with(&project, "Foo").await,
            vec!["App\\Models\\Foo", "App\\Jobs\\Foo"]
        );
    }

    #[tokio::test]
    async fn duplicate_namespaces_collapse() {
        let project = FakeProject::new(&[
            ("a/Foo.php", "<?php\nnamespace App;\nclass Foo {}"),
            ("b/Foo.php", "<?php\nnamespace App;\nclass Foo {}"),
        ]);
        assert_eq!(resolve_with(&project, "Foo").await, vec!["App\\Foo"]);
    }

    #[tokio::test]
    async fn builtin_is_always_first() {
        let project = FakeProject::new(&[(
            "src/DateTime.php",
            "<?php\nnamespace App\\Support;\nclass DateTime {}",
        )]);
        assert_eq!(
            resolve_with(&project, "DateTime").await,
            vec!["DateTime", "App\\Support\\DateTime"]
        );
    }

    #[tokio::test]
    async fn namespaceless_file_falls_back_to_global_name() {
        let project = FakeProject::new(&[("lib/Foo.php", "<?php\nclass Foo {}")]);
        assert_eq!(resolve_with(&project, "Foo").await, vec!["Foo"]);
    }

    #[tokio::test]
    async fn no_matching_files_is_empty_not_an_error() {
        let project = FakeProject::new(&[]);
        assert!(resolve_with(&project, "Baz").await.is_empty());
    }

    #[tokio::test]
    async fn open_failures_propagate() {
        let project = FakeProject {
            files: vec![PathBuf::from("gone/Foo.php")],
            contents: HashMap::new(),
        };
        let config = ResolverConfig::default();
        let result = CandidateResolver::new(&project, &project, &config)
            .resolve("Foo")
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn search_honors_configured_cap() {
        let entries: Vec<(String, String)> = (0..15)
            .map(|i| {
                (
                    format!("src/mod{}/Foo.php", i),
                    format!("<?php\nnamespace App\\Mod{};\nclass Foo {{}}", i),
                )
            })
            .collect();
        let borrowed: Vec<(&str, &str)> = entries
            .iter()
            .map(|(p, c)| (p.as_str(), c.as_str()))
            .collect();
        let project = FakeProject::new(&borrowed);
        assert_eq!(resolve_with(&project, "Foo").await.len(), 10);
    }
}
