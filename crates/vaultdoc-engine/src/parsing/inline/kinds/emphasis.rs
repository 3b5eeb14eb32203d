/// Bold delimiters.
pub struct Strong;

impl Strong {
    pub const STARS: &'static [u8; 2] = b"**";
    pub const UNDERSCORES: &'static [u8; 2] = b"__";
}

/// Italic delimiters.
pub struct Emphasis;

impl Emphasis {
    pub const STAR: &'static [u8; 1] = b"*";
    pub const UNDERSCORE: &'static [u8; 1] = b"_";
}

/// Strikethrough delimiter.
pub struct Strikethrough;

impl Strikethrough {
    pub const TILDES: &'static [u8; 2] = b"~~";
}
