/// Wiki-style page reference: `[[Page]]` or `[[Page|Display]]`.
pub struct WikiLink;

impl WikiLink {
    pub const OPEN: &'static [u8; 2] = b"[[";
    pub const CLOSE: &'static [u8; 2] = b"]]";
    pub const ALIAS: u8 = b'|';
    /// Bytes that may not appear between the brackets.
    pub const FORBIDDEN: &'static [u8; 1] = b"]";

    /// Splits bracket content into target and optional display text at the
    /// first `|`.
    pub fn split_alias(inner: &str) -> (&str, Option<&str>) {
        match inner.split_once(Self::ALIAS as char) {
            Some((target, alias)) => (target, Some(alias)),
            None => (inner, None),
        }
    }
}
