/// Fenced code block delimiters.
///
/// A fence opens on any line starting with three backticks; the rest of that
/// line, trimmed, is the language tag. The next line starting with three
/// backticks closes it, whatever follows the ticks.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// If `line` is a fence line, returns its language tag (`None` when the
    /// info text is empty).
    pub fn sig(line: &str) -> Option<Option<String>> {
        let info = line.strip_prefix(Self::BACKTICKS)?.trim();
        Some((!info.is_empty()).then(|| info.to_string()))
    }

    pub fn closes(line: &str) -> bool {
        line.starts_with(Self::BACKTICKS)
    }
}
