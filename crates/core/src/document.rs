/// Read-only line view of an open file. The engine never holds a
/// document across queries; the host hands one in per call and applies
/// the resulting edits itself.
pub trait Document {
    fn line_count(&self) -> usize;
    fn line_text(&self, line: usize) -> Option<&str>;
}

/// In-memory document snapshot. `FileStore::open` returns these for
/// candidate files; hosts wrap their own buffers the same way.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    lines: Vec<String>,
}

impl SourceDocument {
    pub fn new(text: &str) -> Self {
        Self {
            lines: text.lines().map(str::to_string).collect(),
        }
    }
}

impl Document for SourceDocument {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line_text(&self, line: usize) -> Option<&str> {
        self.lines.get(line).map(String::as_str)
    }
}
