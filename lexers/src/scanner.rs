#![deny(warnings)]

/// Buffered character scanner with arbitrary backtracking.
///
/// Characters pulled from `src` are kept in `buf` until they are extracted
/// or ignored. `pos` points at the last consumed character, `-1` meaning
/// nothing consumed since the last extraction.
pub struct Scanner<I: Iterator<Item = char>> {
    src: I,
    buf: Vec<char>,
    pos: isize,
    consumed: usize,
}

impl<I: Iterator<Item = char>> Iterator for Scanner<I> {
    type Item = char;
    fn next(&mut self) -> Option<char> {
        self.pos += 1;
        self.fill();
        let blen = self.buf.len() as isize;
        if self.pos >= blen {
            self.pos = blen;
        }
        self.curr()
    }
}

impl<I: Iterator<Item = char>> Scanner<I> {
    pub fn new(source: I) -> Self {
        Scanner {
            src: source,
            buf: Vec::new(),
            pos: -1,
            consumed: 0,
        }
    }

    pub fn buffer_pos(&self) -> isize {
        self.pos
    }

    pub fn set_buffer_pos(&mut self, pos: isize) -> bool {
        if pos < -1 || pos > self.buf.len() as isize {
            return false;
        }
        self.pos = pos;
        true
    }

    /// Absolute offset (in chars) of the next character to be consumed.
    pub fn offset(&self) -> usize {
        self.consumed + self.consumed_len()
    }

    // next() may leave pos one past the buffer at end of input
    fn consumed_len(&self) -> usize {
        ((self.pos + 1) as usize).min(self.buf.len())
    }

    pub fn curr(&self) -> Option<char> {
        if self.pos < 0 {
            return None;
        }
        self.buf.get(self.pos as usize).copied()
    }

    // pull from the source until pos is backed by the buffer
    fn fill(&mut self) {
        while self.pos >= self.buf.len() as isize {
            match self.src.next() {
                Some(c) => self.buf.push(c),
                None => break,
            }
        }
    }

    pub fn peek(&mut self) -> Option<char> {
        let backtrack = self.pos;
        let peeked = self.next();
        self.pos = backtrack;
        peeked
    }

    pub fn accept(&mut self, what: char) -> Option<char> {
        self.accept_if(|c| c == what)
    }

    pub fn accept_any(&mut self, any: &[char]) -> Option<char> {
        self.accept_if(|c| any.contains(&c))
    }

    /// Advance only if the next char satisfies `pred`.
    pub fn accept_if(&mut self, pred: impl Fn(char) -> bool) -> Option<char> {
        let backtrack = self.pos;
        match self.next() {
            Some(next) if pred(next) => Some(next),
            _ => {
                self.pos = backtrack;
                None
            }
        }
    }

    /// Consume the longest run of chars satisfying `pred`, returns if the
    /// scanner advanced. After the call `curr()` is the last matching char.
    pub fn skip_while(&mut self, pred: impl Fn(char) -> bool) -> bool {
        let mut advanced = false;
        while self.accept_if(&pred).is_some() {
            advanced = true;
        }
        advanced
    }

    pub fn skip_whitespace(&mut self) -> bool {
        let skipped = self.skip_while(char::is_whitespace);
        self.ignore();
        skipped
    }

    pub fn view(&self) -> &[char] {
        &self.buf[..self.consumed_len()]
    }

    /// Drop everything consumed so far.
    pub fn ignore(&mut self) {
        let n = self.consumed_len();
        self.buf.drain(..n);
        self.consumed += n;
        self.pos = -1;
    }

    pub fn extract_string(&mut self) -> String {
        let lexeme = self.view().iter().collect();
        self.ignore();
        lexeme
    }
}

impl<'a> Scanner<std::str::Chars<'a>> {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(source: &'a str) -> Self {
        Scanner::new(source.chars())
    }
}
