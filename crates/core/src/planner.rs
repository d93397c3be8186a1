use lsp_types::{Position, Range, TextEdit};
use tracing::warn;

use crate::scan::Declarations;
use crate::token::{self, TokenReference};

/// The two things the engine knows how to do with a token. Closed set;
/// every consumer matches exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// Rewrite a bare name as a fully-qualified reference.
    Expand,
    /// Replace a qualified name with its short name and add an import.
    Import,
}

/// One selectable action: a labeled replacement at the token's range
/// plus, for imports, a positioned insertion. Built fresh per query and
/// handed to the host; the engine never applies edits itself.
#[derive(Debug, Clone, PartialEq)]
pub struct EditPlan {
    pub label: String,
    pub kind: ActionKind,
    pub replacement: TextEdit,
    pub insertion: Option<TextEdit>,
}

fn token_range(line: u32, token: &TokenReference) -> Range {
    Range::new(
        Position::new(line, token.start_col as u32),
        Position::new(line, token.end_col as u32),
    )
}

/// Expand a bare token to an absolute reference. The leading separator
/// anchors the name at the global namespace, so no import is needed.
pub fn plan_expand(line: u32, token: &TokenReference, candidate: &str) -> EditPlan {
    EditPlan {
        label: format!("Expand \"{}\"", candidate),
        kind: ActionKind::Expand,
        replacement: TextEdit {
            range: token_range(line, token),
            new_text: format!("\\{}", candidate),
        },
        insertion: None,
    }
}

/// Shorten a qualified token and import its full name. Returns `None`
/// when the cursor sits on an existing import line; shortening the
/// statement that performs the import is meaningless.
pub fn plan_import(line: u32, token: &TokenReference, decls: &Declarations) -> Option<EditPlan> {
    let full_name = token::normalize(&token.text);
    let short = token::short_name(full_name)?;

    if decls.has_import_on_line(line as usize) {
        return None;
    }

    let insertion = match decls.binds_short_name(short) {
        Some(existing) => {
            if existing.text != format!("use {};", full_name) {
                // Same short name, different namespace. Treated as
                // already imported; the real conflict is the user's to
                // untangle.
                warn!(
                    token = full_name,
                    existing = %existing.text,
                    "short-name collision, skipping import insertion"
                );
            }
            None
        }
        None => Some(import_edit(full_name, decls)),
    };

    Some(EditPlan {
        label: format!("Import \"{}\"", full_name),
        kind: ActionKind::Import,
        replacement: TextEdit {
            range: token_range(line, token),
            new_text: short.to_string(),
        },
        insertion,
    })
}

/// Position a new `use` statement: after the last import, else after
/// the namespace, else after the opening tag, else at the very top.
fn import_edit(full_name: &str, decls: &Declarations) -> TextEdit {
    let insert_line = decls
        .last_import_line()
        .or(decls.namespace_line)
        .or(decls.opening_tag_line)
        .map(|line| line + 1)
        .unwrap_or(0);

    // Starting a new import block right under the namespace statement
    // needs a separating blank line.
    let leading = if decls.imports.is_empty() && decls.namespace_line.is_some() {
        "\n"
    } else {
        ""
    };
    // And the type declaration must not end up touching the import.
    let trailing = if decls.type_decl_line == Some(insert_line) {
        "\n"
    } else {
        ""
    };

    let at = Position::new(insert_line as u32, 0);
    TextEdit {
        range: Range::new(at, at),
        new_text: format!("{}use {};\n{}", leading, full_name, trailing),
    }
}
