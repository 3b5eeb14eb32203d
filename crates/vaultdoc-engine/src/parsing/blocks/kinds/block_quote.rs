/// Blockquote block type with owned delimiter constant.
///
/// Only single-level quotes are modelled: each quoted line starts with `> `
/// and the stripped lines are joined into one inline run.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote line prefix, including its mandatory space.
    pub const PREFIX: &'static str = "> ";
    /// Separator used when joining quoted lines.
    pub const JOIN: &'static str = " ";

    /// Returns the line content after the prefix, if the line is quoted.
    pub fn strip_prefix(line: &str) -> Option<&str> {
        line.strip_prefix(Self::PREFIX)
    }
}
