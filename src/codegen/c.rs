use crate::optimizer::Op;

use super::TAPE_SIZE;

const INDENT: &str = "    ";

/// The C statement for a single op
pub fn emit(op: &Op) -> String {
    match op {
        Op::ShiftRight(n) => format!("ptr += {};", n),
        Op::ShiftLeft(n) => format!("ptr -= {};", n),
        Op::Add(n) => format!("*ptr += {};", n),
        Op::Sub(n) => format!("*ptr -= {};", n),
        Op::Write => "putchar(*ptr);".to_string(),
        Op::Read => "*ptr = getchar();".to_string(),
        Op::LoopStart => "while (*ptr) {".to_string(),
        Op::LoopEnd => "}".to_string(),
    }
}

/// Wraps the emitted statements in a complete C program.
///
/// Statements are indented by loop depth. A stray `]` closes a brace that was
/// never opened, which the C compiler will reject, but it never pulls the
/// indentation out of `main`.
pub fn assemble(ops: &[Op]) -> String {
    let mut lines = vec![
        "#include <stdio.h>".to_string(),
        "int main() {".to_string(),
        format!("{}unsigned char memory[{}] = {{0}};", INDENT, TAPE_SIZE),
        format!("{}unsigned char *ptr = memory;", INDENT),
    ];

    let mut depth = 1;
    for op in ops {
        if let Op::LoopEnd = op {
            depth = usize::max(depth - 1, 1);
        }
        lines.push(format!("{}{}", INDENT.repeat(depth), emit(op)));
        if let Op::LoopStart = op {
            depth += 1;
        }
    }

    lines.push(format!("{}return 0;", INDENT));
    lines.push("}".to_string());

    let mut program = lines.join("\n");
    program.push('\n');
    program
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;
    use crate::optimizer::{optimize, Optimizations};
    use pretty_assertions::assert_eq;

    fn statements(text: &str) -> Vec<String> {
        optimize(&Lexer::new(text).instructions(), &Optimizations::all())
            .iter()
            .map(emit)
            .collect()
    }

    #[test]
    fn emits_folded_arithmetic() {
        assert_eq!(
            statements("+++>++<-"),
            vec!["*ptr += 3;", "ptr += 1;", "*ptr += 2;", "ptr -= 1;", "*ptr -= 1;"]
        );
    }

    #[test]
    fn emits_every_loop_and_output_token() {
        assert_eq!(
            statements("[[..]]"),
            vec![
                "while (*ptr) {",
                "while (*ptr) {",
                "putchar(*ptr);",
                "putchar(*ptr);",
                "}",
                "}"
            ]
        );
    }

    #[test]
    fn emits_long_runs_without_wrapping() {
        // unsigned char arithmetic in C does the wrapping
        assert_eq!(emit(&Op::Add(300)), "*ptr += 300;");
        assert_eq!(emit(&Op::Sub(256)), "*ptr -= 256;");
        assert_eq!(statements(&"+".repeat(300)), vec!["*ptr += 300;"]);
    }

    #[test]
    fn emits_reads() {
        assert_eq!(statements(",,"), vec!["*ptr = getchar();", "*ptr = getchar();"]);
    }

    #[test]
    fn assembles_nested_loops() {
        let ops = [Op::LoopStart, Op::Sub(1), Op::LoopStart, Op::Write, Op::LoopEnd, Op::LoopEnd];
        assert_eq!(
            assemble(&ops),
            "#include <stdio.h>\n\
             int main() {\n    \
             unsigned char memory[30000] = {0};\n    \
             unsigned char *ptr = memory;\n    \
             while (*ptr) {\n        \
             *ptr -= 1;\n        \
             while (*ptr) {\n            \
             putchar(*ptr);\n        \
             }\n    \
             }\n    \
             return 0;\n\
             }\n"
        );
    }

    #[test]
    fn stray_loop_end_stays_inside_main() {
        let program = assemble(&[Op::LoopEnd, Op::LoopEnd]);
        assert_eq!(program.lines().filter(|line| *line == "    }").count(), 2);
        assert!(program.ends_with("    return 0;\n}\n"));
    }
}
