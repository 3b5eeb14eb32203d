/// Standard Markdown link: `[text](url)`.
pub struct MarkdownLink;

impl MarkdownLink {
    pub const OPEN: &'static [u8; 1] = b"[";
    /// Ends the text and opens the destination.
    pub const TEXT_CLOSE: &'static [u8; 2] = b"](";
    pub const URL_CLOSE: &'static [u8; 1] = b")";
    pub const TEXT_FORBIDDEN: &'static [u8; 1] = b"]";
    pub const URL_FORBIDDEN: &'static [u8; 1] = b")";
}
