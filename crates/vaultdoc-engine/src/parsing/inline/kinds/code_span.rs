/// Code span inline type with owned delimiter constant.
///
/// Code content is taken verbatim; a tick inside the span ends it.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick that opens and closes a code span.
    pub const TICK: &'static [u8; 1] = b"`";
}
