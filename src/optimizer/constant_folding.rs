use super::{Op, Run};

/// Folds each run of pointer moves or cell arithmetic into a single op.
///
/// Reads, writes and loop brackets can't be summed, so their runs are
/// unrolled back into one op per occurrence.
pub fn constant_folding(runs: &[Run]) -> Vec<Op> {
    let mut ops = Vec::with_capacity(runs.len());

    for run in runs {
        if run.instruction.is_arithmetic() {
            ops.push(Op::with_amount(run.instruction, run.count));
        } else {
            ops.extend(std::iter::repeat(Op::unit(run.instruction)).take(run.count));
        }
    }

    ops
}
