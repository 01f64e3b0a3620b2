use crate::lexer::Instruction;

use super::Run;

/// Splits the program into maximal runs of the same instruction.
///
/// Runs come out in program order and no two neighbouring runs share an
/// instruction, so expanding each run and concatenating the results gives
/// back the input.
pub fn group_runs(instructions: &[Instruction]) -> Vec<Run> {
    let mut runs = vec![];
    let mut pc = 0;

    while pc < instructions.len() {
        let start = pc;
        let instruction = instructions[start];

        while pc < instructions.len() && instructions[pc] == instruction {
            pc += 1;
        }

        runs.push(Run::new(instruction, pc - start));
    }

    runs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::{Lexer, ALPHABET};
    use pretty_assertions::assert_eq;
    use quickcheck::quickcheck;

    fn instructions(text: &str) -> Vec<Instruction> {
        Lexer::new(text).instructions()
    }

    /// Maps arbitrary bytes onto the instruction alphabet so generated
    /// programs are dense with runs.
    fn program_from_bytes(bytes: &[u8]) -> Vec<Instruction> {
        let alphabet: Vec<char> = ALPHABET.chars().collect();
        bytes
            .iter()
            .filter_map(|b| Instruction::from_char(alphabet[(*b % 8) as usize]))
            .collect()
    }

    fn expand(runs: &[Run]) -> String {
        runs.iter().map(Run::expand).collect()
    }

    #[test]
    fn groups_mixed_program() {
        assert_eq!(
            group_runs(&instructions("+++>++<-")),
            vec![
                Run::new(Instruction::DerefIncrement, 3),
                Run::new(Instruction::Increment, 1),
                Run::new(Instruction::DerefIncrement, 2),
                Run::new(Instruction::Decrement, 1),
                Run::new(Instruction::DerefDecrement, 1),
            ]
        );
    }

    #[test]
    fn groups_across_comments() {
        assert_eq!(
            group_runs(&instructions("hello+++world")),
            vec![Run::new(Instruction::DerefIncrement, 3)]
        );
    }

    #[test]
    fn groups_loops_and_output() {
        assert_eq!(
            group_runs(&instructions("[[..]]")),
            vec![
                Run::new(Instruction::JumpStart, 2),
                Run::new(Instruction::Write, 2),
                Run::new(Instruction::JumpEnd, 2),
            ]
        );
    }

    #[test]
    fn empty_program_has_no_runs() {
        assert_eq!(group_runs(&[]), vec![]);
    }

    quickcheck! {
        fn runs_expand_back_to_program(bytes: Vec<u8>) -> bool {
            let program = program_from_bytes(&bytes);
            let text: String = program.iter().map(|i| i.as_char()).collect();
            expand(&group_runs(&program)) == text
        }

        fn runs_are_maximal(bytes: Vec<u8>) -> bool {
            let runs = group_runs(&program_from_bytes(&bytes));
            runs.iter().all(|run| run.count > 0)
                && runs.windows(2).all(|pair| pair[0].instruction != pair[1].instruction)
        }

        fn regrouping_is_idempotent(bytes: Vec<u8>) -> bool {
            let runs = group_runs(&program_from_bytes(&bytes));
            group_runs(&instructions(&expand(&runs))) == runs
        }
    }
}
