/// A byte cursor for inline scanning.
///
/// Every delimiter the scanners look for is ASCII, so stepping one byte at a
/// time never produces a match in the middle of a multi-byte character.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s`.
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns the current byte position.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s
            .as_bytes()
            .get(self.i..)
            .is_some_and(|rest| rest.starts_with(pat))
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Advances by `n` bytes.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Consumes bytes up to (not including) the first occurrence of `close`.
    ///
    /// At least one byte must be consumed, and none of the consumed bytes
    /// may be a newline or one of `forbidden`. On failure the cursor is left
    /// where it was and `None` is returned; on success the cursor sits on
    /// `close` and the consumed range is returned.
    pub fn eat_until(&mut self, close: &[u8], forbidden: &[u8]) -> Option<(usize, usize)> {
        let saved = self.i;
        let start = self.i;

        loop {
            if self.eof() {
                self.i = saved;
                return None;
            }
            if self.i > start && self.starts_with(close) {
                return Some((start, self.i));
            }
            match self.peek() {
                Some(b) if b == b'\n' || forbidden.contains(&b) => {
                    self.i = saved;
                    return None;
                }
                _ => {
                    self.bump();
                }
            }
        }
    }
}
