pub mod lexer;

use std::fmt;

pub use self::lexer::{sanitize, Lexer};

/// Every character that carries meaning in a brainf**k program, in the
/// order `>`, `<`, `+`, `-`, `.`, `,`, `[`, `]`.
pub const ALPHABET: &str = "><+-.,[]";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    // `>`: Increment the `data pointer` by one
    Increment,
    // `<`: Decrement the `data pointer` by one
    Decrement,

    // `+`: Increment the byte at the `data pointer` by one
    DerefIncrement,
    // `-`: Decrement the byte at the `data pointer` by one
    DerefDecrement,

    // `.`: Write the byte at the `data pointer` to the `output device`
    Write,
    // `,`: Read the next byte from the `input device` and write it to the `data pointer`
    Read,

    // `[`: If the byte at the `data pointer` is zero, then jump the `instruction pointer` forward to the instruction after the matching `]`
    JumpStart,
    // `]`: If the byte at the `data pointer` is non-zero then jump the `instruction pointer` back to the instruction after the matching `[`
    JumpEnd,
}

impl Instruction {
    pub fn from_char(c: char) -> Option<Instruction> {
        match c {
            '>' => Some(Instruction::Increment),
            '<' => Some(Instruction::Decrement),
            '+' => Some(Instruction::DerefIncrement),
            '-' => Some(Instruction::DerefDecrement),
            '.' => Some(Instruction::Write),
            ',' => Some(Instruction::Read),
            '[' => Some(Instruction::JumpStart),
            ']' => Some(Instruction::JumpEnd),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Instruction::Increment => '>',
            Instruction::Decrement => '<',
            Instruction::DerefIncrement => '+',
            Instruction::DerefDecrement => '-',
            Instruction::Write => '.',
            Instruction::Read => ',',
            Instruction::JumpStart => '[',
            Instruction::JumpEnd => ']',
        }
    }

    /// Pointer moves and cell arithmetic, i.e. the instructions whose
    /// repetitions can be summed into a single step.
    pub fn is_arithmetic(self) -> bool {
        matches!(
            self,
            Instruction::Increment
                | Instruction::Decrement
                | Instruction::DerefIncrement
                | Instruction::DerefDecrement
        )
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Where a token starts: 1-based line and column, 0-based codepoint offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub col: usize,
    pub offset: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LexerTokenKind {
    Instruction(Instruction),

    // Comment every other character
    Comment(String),
}
