use super::{Instruction, LexerTokenKind, Position};

#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    /** Human Readable positions in file */
    pub cur_line: usize,
    pub cur_col: usize,

    /** 'raw' format / offset within the file (in terms of 'codepoints') */
    pub codepoint_offset: usize,

    chars: std::iter::Peekable<std::str::Chars<'a>>,
}

impl<'a> Lexer<'a> {
    pub fn new(chars: &'a str) -> Lexer<'a> {
        Lexer {
            cur_col: 1,
            cur_line: 1,

            codepoint_offset: 0,

            chars: chars.chars().peekable(),
        }
    }

    fn transform_to_type(&mut self, c: char) -> LexerTokenKind {
        if let Some(instruction) = Instruction::from_char(c) {
            return LexerTokenKind::Instruction(instruction);
        }

        // Simplify the comment stream down to strings
        let mut comment = String::from(c);
        while let Some(&next) = self.chars.peek() {
            if Instruction::from_char(next).is_some() {
                break;
            }
            self.consume_char();
            comment.push(next);
        }

        LexerTokenKind::Comment(comment.trim_end().to_string())
    }

    fn consume_char(&mut self) -> Option<char> {
        match self.chars.next() {
            Some(c) => {
                self.cur_col += 1;
                if c == '\n' {
                    self.cur_line += 1;
                    self.cur_col = 1;
                }
                self.codepoint_offset += 1;
                Some(c)
            }
            None => None,
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.chars.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.consume_char();
        }
    }

    pub fn position(&self) -> Position {
        Position {
            line: self.cur_line,
            col: self.cur_col,
            offset: self.codepoint_offset,
        }
    }

    /// Like `next_token`, but also reports where the token starts
    pub fn next_located(&mut self) -> Option<(Position, LexerTokenKind)> {
        self.skip_whitespace();

        let start = Lexer::position(self);
        let c = self.consume_char()?;
        Some((start, self.transform_to_type(c)))
    }

    pub fn next_token(&mut self) -> Option<LexerTokenKind> {
        self.next_located().map(|(_, token)| token)
    }

    /// Every token along with its starting position, comments included
    pub fn located_tokens(mut self) -> Vec<(Position, LexerTokenKind)> {
        std::iter::from_fn(|| self.next_located()).collect()
    }

    /// Drops the comments, leaving only the program itself
    pub fn instructions(self) -> Vec<Instruction> {
        self.filter_map(|token| match token {
            LexerTokenKind::Instruction(instruction) => Some(instruction),
            LexerTokenKind::Comment(_) => None,
        })
        .collect()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = LexerTokenKind;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

/// Strips everything that isn't one of the eight instructions, keeping the
/// remaining characters in their original order.
pub fn sanitize(text: &str) -> String {
    Lexer::new(text)
        .instructions()
        .into_iter()
        .map(Instruction::as_char)
        .collect()
}
