use once_cell::sync::Lazy;
use regex::Regex;

use crate::document::Document;

static NAMESPACE_EXP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:<\?php\s+)?namespace\s+([A-Za-z0-9_\\]+)").unwrap());

static TYPE_DECL_EXP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:class|trait|interface|enum)\s+\w+").unwrap());

/// What a single line contributes to the file's structural skeleton.
/// One mark per line, decided by an ordered set of pattern tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineMark {
    OpeningTag,
    Namespace,
    Import,
    TypeDecl,
    Other,
}

pub fn mark_line(text: &str) -> LineMark {
    let trimmed = text.trim_start();
    // The inline `<?php namespace X;` form counts as a namespace line;
    // the accumulator credits it as the opening tag as well.
    if NAMESPACE_EXP.is_match(trimmed) {
        LineMark::Namespace
    } else if trimmed.starts_with("<?php") {
        LineMark::OpeningTag
    } else if trimmed.starts_with("use ") {
        LineMark::Import
    } else if TYPE_DECL_EXP.is_match(trimmed) {
        LineMark::TypeDecl
    } else {
        LineMark::Other
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportStatement {
    pub text: String,
    pub line: usize,
}

/// Structural skeleton of a source file: where the opening tag, the
/// namespace statement, the import block, and the first type declaration
/// sit. All line numbers are 0-indexed. A file missing any of these
/// simply leaves the field unset; that is not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Declarations {
    pub opening_tag_line: Option<usize>,
    pub namespace_line: Option<usize>,
    pub namespace_name: Option<String>,
    pub imports: Vec<ImportStatement>,
    pub type_decl_line: Option<usize>,
}

impl Declarations {
    pub fn last_import_line(&self) -> Option<usize> {
        self.imports.last().map(|import| import.line)
    }

    pub fn has_import_on_line(&self, line: usize) -> bool {
        self.imports.iter().any(|import| import.line == line)
    }

    /// An import is considered present when any existing statement binds
    /// the same short name. Two different namespaces sharing a trailing
    /// segment therefore collide; callers log that case rather than
    /// inserting a duplicate binding.
    pub fn binds_short_name(&self, short: &str) -> Option<&ImportStatement> {
        self.imports
            .iter()
            .find(|import| crate::token::short_name(&import.text) == Some(short))
    }
}

/// Single forward pass over the document. Stops once all four skeleton
/// fields are known, or as soon as a line spells exactly
/// `use <stop_at_import>;` (the sought import already exists; nothing
/// past it can change the answer). The boundary line itself is recorded
/// so the already-imported check sees it.
pub fn scan(doc: &dyn Document, stop_at_import: Option<&str>) -> Declarations {
    let boundary = stop_at_import.map(|name| format!("use {};", name));
    let mut decls = Declarations::default();

    for line in 0..doc.line_count() {
        let Some(text) = doc.line_text(line) else { break };
        let trimmed = text.trim();

        match mark_line(trimmed) {
            LineMark::OpeningTag => {
                decls.opening_tag_line.get_or_insert(line);
            }
            LineMark::Namespace => {
                if decls.namespace_line.is_none() {
                    decls.namespace_line = Some(line);
                    decls.namespace_name = NAMESPACE_EXP
                        .captures(trimmed)
                        .and_then(|c| c.get(1))
                        .map(|m| m.as_str().to_string());
                }
                if trimmed.starts_with("<?php") {
                    decls.opening_tag_line.get_or_insert(line);
                }
            }
            LineMark::Import => {
                // A `use` after the type declaration lives inside a body
                // (trait usage, closures); it is not part of the block.
                if decls.type_decl_line.is_none() {
                    decls.imports.push(ImportStatement {
                        text: trimmed.to_string(),
                        line,
                    });
                    if boundary.as_deref() == Some(trimmed) {
                        break;
                    }
                }
            }
            LineMark::TypeDecl => {
                decls.type_decl_line.get_or_insert(line);
            }
            LineMark::Other => {}
        }

        if decls.opening_tag_line.is_some()
            && decls.namespace_line.is_some()
            && !decls.imports.is_empty()
            && decls.type_decl_line.is_some()
        {
            break;
        }
    }

    decls
}

/// Candidate-gathering variant: only the first namespace name matters,
/// so the walk ends the moment one is found.
pub fn first_namespace(doc: &dyn Document) -> Option<String> {
    for line in 0..doc.line_count() {
        let trimmed = doc.line_text(line)?.trim();
        if mark_line(trimmed) == LineMark::Namespace {
            return NAMESPACE_EXP
                .captures(trimmed)
                .and_then(|c| c.get(1))
                .map(|m| m.as_str().to_string());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::SourceDocument;

    fn scan_text(text: &str) -> Declarations {
        scan(&SourceDocument::new(text), None)
    }

    #[test]
    fn marks_follow_priority_order() {
        assert_eq!(mark_line("<?php"), LineMark::OpeningTag);
        assert_eq!(mark_line("namespace App\\Models;"), LineMark::Namespace);
        assert_eq!(mark_line("<?php namespace App;"), LineMark::Namespace);
        assert_eq!(mark_line("use App\\Models\\User;"), LineMark::Import);
        assert_eq!(mark_line("class Foo extends Bar"), LineMark::TypeDecl);
        assert_eq!(mark_line("final class Foo"), LineMark::TypeDecl);
        assert_eq!(mark_line("enum Suit: string"), LineMark::TypeDecl);
        assert_eq!(mark_line("$user = new User();"), LineMark::Other);
        assert_eq!(mark_line("* use App\\Foo; (docblock)"), LineMark::Other);
    }

    #[test]
    fn full_skeleton_is_recovered() {
        let decls = scan_text(
            "<?php\n\nnamespace App;\n\nuse App\\Models\\User;\nuse App\\Support\\Arr;\n\nclass UserController\n{\n}",
        );
        assert_eq!(decls.opening_tag_line, Some(0));
        assert_eq!(decls.namespace_line, Some(2));
        assert_eq!(decls.namespace_name.as_deref(), Some("App"));
        assert_eq!(decls.imports.len(), 2);
        assert_eq!(decls.imports[0].line, 4);
        assert_eq!(decls.last_import_line(), Some(5));
        assert_eq!(decls.type_decl_line, Some(7));
    }

    #[test]
    fn inline_opening_namespace_counts_as_both() {
        let decls = scan_text("<?php namespace App;\nclass Foo {}");
        assert_eq!(decls.opening_tag_line, Some(0));
        assert_eq!(decls.namespace_line, Some(0));
        assert_eq!(decls.namespace_name.as_deref(), Some("App"));
    }

    #[test]
    fn no_imports_is_an_empty_list_not_an_error() {
        let decls = scan_text("<?php\nnamespace App;\nclass Foo {}");
        assert!(decls.imports.is_empty());
        assert_eq!(decls.type_decl_line, Some(2));
    }

    #[test]
    fn use_after_type_declaration_is_not_an_import() {
        let decls = scan_text(
            "<?php\nnamespace App;\nuse App\\Concerns\\Loggable;\nclass Foo {\n    use Loggable;\n}",
        );
        assert_eq!(decls.imports.len(), 1);
        assert_eq!(decls.imports[0].text, "use App\\Concerns\\Loggable;");
    }

    #[test]
    fn headerless_file_leaves_fields_unset() {
        let decls = scan_text("just some text\nnothing structural");
        assert_eq!(decls, Declarations::default());
    }

    #[test]
    fn scan_stops_at_matching_import_boundary() {
        let doc = SourceDocument::new(
            "<?php\nnamespace App;\nuse App\\Services\\Mailer;\nuse App\\Models\\User;\nclass Foo {}",
        );
        let decls = scan(&doc, Some("App\\Services\\Mailer"));
        // The boundary import is recorded, the one after it is not.
        assert_eq!(decls.imports.len(), 1);
        assert!(decls.binds_short_name("Mailer").is_some());
        assert_eq!(decls.type_decl_line, None);
    }

    #[test]
    fn short_name_binding_collides_across_namespaces() {
        let decls = scan_text("<?php\nuse Vendor\\Queue\\Mailer;\nclass Foo {}");
        let bound = decls.binds_short_name("Mailer").unwrap();
        assert_eq!(bound.text, "use Vendor\\Queue\\Mailer;");
        assert!(decls.binds_short_name("Queue").is_none());
    }

    #[test]
    fn first_namespace_reads_target_files() {
        let doc = SourceDocument::new("<?php\n\nnamespace App\\Models;\n\nclass User {}");
        assert_eq!(first_namespace(&doc).as_deref(), Some("App\\Models"));
        assert_eq!(first_namespace(&SourceDocument::new("<?php\n")), None);
    }
}
