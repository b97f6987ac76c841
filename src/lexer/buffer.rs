use super::tokens::{Token, TokenKind};

/// Starting capacity used by the scanner when it creates a buffer.
pub const DEFAULT_CAPACITY: usize = 10;

/// An append-only, growable sequence of tokens in source order.
///
/// The buffer owns every token's text. Capacity doubles whenever an insert
/// would exceed it, so growth stays geometric and `push` is amortized O(1).
/// Allocation failure aborts the process; there is no recovery path for a
/// partially grown token stream.
#[derive(Debug, Clone)]
pub struct TokenBuffer {
    tokens: Vec<Token>,
    capacity: usize,
}

impl TokenBuffer {
    /// Creates an empty buffer. `initial_capacity` must be at least 1.
    pub fn new(initial_capacity: usize) -> TokenBuffer {
        assert!(initial_capacity >= 1, "initial capacity must be at least 1");

        TokenBuffer {
            tokens: Vec::with_capacity(initial_capacity),
            capacity: initial_capacity,
        }
    }

    /// Copies `value` into owned storage and appends a token for it,
    /// doubling the capacity first if the buffer is full. Returns a
    /// reference to the stored token.
    pub fn push(&mut self, kind: TokenKind, value: &str) -> &Token {
        if self.tokens.len() == self.capacity {
            self.capacity *= 2;
            self.tokens.reserve_exact(self.capacity - self.tokens.len());
        }

        let index = self.tokens.len();
        self.tokens.push(Token {
            kind,
            value: String::from(value),
        });

        &self.tokens[index]
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Number of tokens storable before the next reallocation.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }
}

impl<'a> IntoIterator for &'a TokenBuffer {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
