/// A byte cursor for scanning markup with position tracking.
///
/// Clone the cursor before attempting a construct and assign the clone back
/// to abandon a failed parse.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The text being scanned.
    s: &'a str,
    /// Current byte index into `s`.
    i: usize,
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

    /// Returns true if at end of input.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Checks if the remaining input starts with the given pattern.
    pub fn starts_with(&self, pat: &str) -> bool {
        self.s.as_bytes()[self.i..].starts_with(pat.as_bytes())
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.s.as_bytes().get(self.i).copied()?;
        self.i += 1;
        Some(b)
    }

    /// Advances by `n` bytes.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Advances to the next occurrence of `byte`, leaving the cursor on it.
    ///
    /// Returns false (cursor at EOF) when `byte` does not occur.
    pub fn seek_byte(&mut self, byte: u8) -> bool {
        match self.s.as_bytes()[self.i..].iter().position(|&b| b == byte) {
            Some(off) => {
                self.i += off;
                true
            }
            None => {
                self.i = self.s.len();
                false
            }
        }
    }

    /// Advances to the next occurrence of `pat`, leaving the cursor at its
    /// first byte.
    ///
    /// Returns false (cursor at EOF) when `pat` does not occur.
    pub fn seek(&mut self, pat: &str) -> bool {
        let hay = &self.s.as_bytes()[self.i..];
        let needle = pat.as_bytes();
        if needle.is_empty() {
            return true;
        }
        let mut j = 0;
        while j + needle.len() <= hay.len() {
            if &hay[j..j + needle.len()] == needle {
                self.i += j;
                return true;
            }
            j += 1;
        }
        self.i = self.s.len();
        false
    }
}
