use std::sync::Arc;

use lsp_types::Position;
use tracing::debug;

use crate::config::ResolverConfig;
use crate::document::Document;
use crate::error::Result;
use crate::planner::{self, EditPlan};
use crate::resolver::CandidateResolver;
use crate::scan;
use crate::token::{self, TokenKind};
use crate::workspace::{FileSearch, FileStore, ProjectWorkspace};

/// One cursor query: the open document and where the cursor sits.
/// Immutable; the engine holds nothing between queries.
pub struct ResolveQuery<'a> {
    pub document: &'a dyn Document,
    pub cursor: Position,
}

/// The front door. Classifies the token under the cursor and produces
/// the matching edit plans: "Expand" actions for a bare name, a single
/// "Import" action for a qualified one.
pub struct ResolverEngine {
    config: ResolverConfig,
    search: Arc<dyn FileSearch>,
    store: Arc<dyn FileStore>,
}

impl ResolverEngine {
    pub fn new(
        config: ResolverConfig,
        search: Arc<dyn FileSearch>,
        store: Arc<dyn FileStore>,
    ) -> Self {
        Self {
            config,
            search,
            store,
        }
    }

    /// Engine over a project directory on disk, with both collaborators
    /// served by one [`ProjectWorkspace`].
    pub fn for_project(root: impl Into<std::path::PathBuf>, config: ResolverConfig) -> Self {
        let workspace = Arc::new(ProjectWorkspace::new(root));
        Self::new(config, workspace.clone(), workspace)
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Computes the selectable actions for a query. An empty vec means
    /// "nothing to offer here" and is the answer for every malformed or
    /// unresolvable input; only collaborator I/O failures are errors.
    pub async fn provide_actions(&self, query: ResolveQuery<'_>) -> Result<Vec<EditPlan>> {
        let line = query.cursor.line as usize;
        let Some(line_text) = query.document.line_text(line) else {
            return Ok(Vec::new());
        };
        let Some(reference) = token::classify(line_text, query.cursor.character as usize) else {
            return Ok(Vec::new());
        };
        debug!(token = %reference.text, kind = ?reference.kind(), "token under cursor");

        match reference.kind() {
            TokenKind::Qualified => {
                let full_name = token::normalize(&reference.text).to_string();
                let decls = scan::scan(query.document, Some(&full_name));
                Ok(planner::plan_import(query.cursor.line, &reference, &decls)
                    .into_iter()
                    .collect())
            }
            TokenKind::Bare => {
                let resolver =
                    CandidateResolver::new(self.search.as_ref(), self.store.as_ref(), &self.config);
                let candidates = resolver.resolve(&reference.text).await?;
                Ok(candidates
                    .iter()
                    .map(|candidate| planner::plan_expand(query.cursor.line, &reference, candidate))
                    .collect())
            }
        }
    }
}
