use once_cell::sync::Lazy;
use regex::Regex;

/// Pattern a selectable token is made of: identifier characters plus the
/// namespace separator. Mirrors what the editor considers a "word" when
/// the user places the cursor on a class reference.
static TOKEN_EXP: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z0-9_\\]+").unwrap());

static WORD_EXP: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").unwrap());

/// How a token drives the engine: a bare name is searched for in the
/// project ("expand"), a qualified one already carries its namespace and
/// gets turned into an import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Bare,
    Qualified,
}

/// The identifier under the cursor, with its column span on that line.
/// Recomputed on every query; classification is a pure function of the
/// line text and cursor column so the same token is derived when the
/// chosen edit is later materialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenReference {
    pub text: String,
    pub start_col: usize,
    pub end_col: usize,
}

impl TokenReference {
    pub fn kind(&self) -> TokenKind {
        if self.text.contains('\\') {
            TokenKind::Qualified
        } else {
            TokenKind::Bare
        }
    }
}

/// Extracts the maximal identifier run touching `cursor_col` (byte
/// column). A cursor sitting at either edge of the run still selects it.
/// Returns `None` when the cursor touches no token at all.
pub fn classify(line_text: &str, cursor_col: usize) -> Option<TokenReference> {
    TOKEN_EXP
        .find_iter(line_text)
        .find(|m| m.start() <= cursor_col && cursor_col <= m.end())
        .map(|m| TokenReference {
            text: m.as_str().to_string(),
            start_col: m.start(),
            end_col: m.end(),
        })
}

/// Strips at most one leading separator: `\App\Foo` and `App\Foo` name
/// the same import target.
pub fn normalize(token: &str) -> &str {
    token.strip_prefix('\\').unwrap_or(token)
}

/// Final path segment of a (possibly qualified) name. For an import
/// statement's text this lands on the alias when one is present, which
/// is exactly the name the statement binds.
pub fn short_name(name: &str) -> Option<&str> {
    WORD_EXP.find_iter(name).last().map(|m| m.as_str())
}
