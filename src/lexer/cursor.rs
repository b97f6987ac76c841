/// Character cursor with a single slot of pushback.
///
/// The scanner needs exactly one character of lookahead: the character that
/// breaks a run must stay available for the next scan step. `push_back`
/// stores it; the following `next` yields it before touching the underlying
/// stream again.
pub struct Cursor<I: Iterator<Item = char>> {
    chars: I,
    pushback: Option<char>,
}

impl<I: Iterator<Item = char>> Cursor<I> {
    pub fn new(chars: I) -> Cursor<I> {
        Cursor {
            chars,
            pushback: None,
        }
    }

    pub fn next(&mut self) -> Option<char> {
        match self.pushback.take() {
            Some(c) => Some(c),
            None => self.chars.next(),
        }
    }

    /// Makes `c` the next character the cursor yields. The slot must be
    /// empty: the scanner never pushes back more than one character.
    pub fn push_back(&mut self, c: char) {
        debug_assert!(self.pushback.is_none(), "pushback slot already occupied");
        self.pushback = Some(c);
    }
}
