use std::collections::HashSet;

use crate::lexer::Instruction;

use self::{constant_folding::constant_folding, run_length::group_runs};

pub mod constant_folding;
pub mod run_length;

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Optimizations {
    /// Fold runs of pointer moves and cell arithmetic into one step
    ConstantFolding,
}

impl Optimizations {
    pub fn all() -> HashSet<Optimizations> {
        HashSet::from([Optimizations::ConstantFolding])
    }
}

/// A maximal stretch of one repeated instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub instruction: Instruction,
    pub count: usize,
}

impl Run {
    pub fn new(instruction: Instruction, count: usize) -> Self {
        Self { instruction, count }
    }

    /// The source text this run was grouped from
    pub fn expand(&self) -> String {
        self.instruction.as_char().to_string().repeat(self.count)
    }
}

/// The operations handed to the code generator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// Move the data pointer right
    ShiftRight(usize),
    /// Move the data pointer left
    ShiftLeft(usize),

    /// Add to the byte at the data pointer (wrapping)
    Add(usize),
    /// Subtract from the byte at the data pointer (wrapping)
    Sub(usize),

    Write,
    Read,

    LoopStart,
    LoopEnd,
}

impl Op {
    /// A single, unfolded occurrence of `instruction`
    pub fn unit(instruction: Instruction) -> Self {
        Op::with_amount(instruction, 1)
    }

    /// `amount` is ignored for instructions that can't carry one.
    pub fn with_amount(instruction: Instruction, amount: usize) -> Self {
        match instruction {
            Instruction::Increment => Op::ShiftRight(amount),
            Instruction::Decrement => Op::ShiftLeft(amount),
            Instruction::DerefIncrement => Op::Add(amount),
            Instruction::DerefDecrement => Op::Sub(amount),
            Instruction::Write => Op::Write,
            Instruction::Read => Op::Read,
            Instruction::JumpStart => Op::LoopStart,
            Instruction::JumpEnd => Op::LoopEnd,
        }
    }
}

pub fn optimize(instructions: &[Instruction], options: &HashSet<Optimizations>) -> Vec<Op> {
    if options.contains(&Optimizations::ConstantFolding) {
        constant_folding(&group_runs(instructions))
    } else {
        instructions.iter().map(|&i| Op::unit(i)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;
    use pretty_assertions::assert_eq;

    fn ops(text: &str, options: &HashSet<Optimizations>) -> Vec<Op> {
        optimize(&Lexer::new(text).instructions(), options)
    }

    #[test]
    fn folding_enabled() {
        assert_eq!(
            ops("+++>++<-", &Optimizations::all()),
            vec![
                Op::Add(3),
                Op::ShiftRight(1),
                Op::Add(2),
                Op::ShiftLeft(1),
                Op::Sub(1)
            ]
        );
    }

    #[test]
    fn folding_disabled_keeps_every_instruction() {
        assert_eq!(
            ops("++>", &HashSet::new()),
            vec![Op::Add(1), Op::Add(1), Op::ShiftRight(1)]
        );
    }

    #[test]
    fn empty_program_has_no_ops() {
        assert_eq!(ops("no code here", &Optimizations::all()), vec![]);
    }

    #[test]
    fn run_expands_to_its_source() {
        assert_eq!(Run::new(Instruction::JumpStart, 3).expand(), "[[[");
        assert_eq!(Run::new(Instruction::Write, 1).expand(), ".");
    }
}
