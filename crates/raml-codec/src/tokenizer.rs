//! Delimiter-based tokenizer. Each token keeps the delimiter that ended it.

/// Lazy token iterator over a borrowed buffer. Cloning restarts from the
/// clone point, so a fresh `tokenize` call or a saved clone can rescan.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    rest: &'a [u8],
    delimiter: u8,
}

/// Split `input` into tokens ending at (and including) `delimiter`.
pub fn tokenize(input: &[u8], delimiter: u8) -> Tokens<'_> {
    Tokens { rest: input, delimiter }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<&'a [u8]> {
        if self.rest.is_empty() {
            return None;
        }
        let end = match self.rest.iter().position(|&b| b == self.delimiter) {
            Some(pos) => pos + 1,
            None => self.rest.len(),
        };
        let (token, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(token)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.rest.is_empty() {
            (0, Some(0))
        } else {
            (1, Some(self.rest.len()))
        }
    }
}

impl std::iter::FusedIterator for Tokens<'_> {}
