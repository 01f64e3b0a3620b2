//! Translates brainf**k programs into standalone C.
//!
//! The pipeline is `lexer` (drop everything that isn't an instruction),
//! `optimizer` (group runs and fold the arithmetic ones), `codegen` (emit and
//! assemble the C program) and finally a `formatter`.

pub mod codegen;
pub mod formatter;
pub mod lexer;
pub mod optimizer;
pub mod output;

pub use codegen::translate;
