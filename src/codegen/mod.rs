pub mod c;

use std::collections::HashSet;

use crate::{
    lexer::Lexer,
    optimizer::{optimize, Optimizations},
};

pub use self::c::{assemble, emit};

/// Number of cells on the generated program's tape
pub const TAPE_SIZE: usize = 30_000;

/// Text in, unformatted C out.
pub fn translate(text: &str, options: &HashSet<Optimizations>) -> String {
    let instructions = Lexer::new(text).instructions();
    assemble(&optimize(&instructions, options))
}
