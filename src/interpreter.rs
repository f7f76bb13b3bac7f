use std::io::Read;
use std::io::Write;

use thiserror::Error;

use crate::ast::*;
use crate::tape::Tape;
use crate::types::Cursor;

/// Error type for execution
#[derive(Debug, Error)]
pub enum ExecutionError {
    /// Io error during program execution.
    #[error("Unexpected IO Error: {0}")]
    IoError(#[from] std::io::Error),
    /// Aborted by callback
    #[error("Callback aborted execution")]
    Aborted,
}

impl PartialEq for ExecutionError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::IoError(l0), Self::IoError(r0)) => l0.kind() == r0.kind(),
            _ => core::mem::discriminant(self) == core::mem::discriminant(other),
        }
    }
}

/// Data sent to execution callback
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExecuteCallbackData<'program> {
    /// We are about to execute a node
    Node(&'program Node),
    /// We are about to perform one iteration of a loop body
    LoopIter,
}

/// Reply type for callback
pub enum ExecuteCallbackResult {
    /// Continue execution
    Continue,
    /// Abort execution
    Abort,
}

/// Simple recursive interpreter implementation.
///
/// Walks the whole program in tree order. The callback runs before every
/// node and on every loop iteration; it is the only way to stop a program
/// that loops forever (which is legal BF).
pub fn execute<'program, F>(
    program: &'program Program,
    tape: &mut Tape,
    cursor: &mut Cursor,
    input: &mut impl Read,
    output: &mut impl Write,
    callback: &mut F,
) -> Result<(), ExecutionError>
where
    F: FnMut(ExecuteCallbackData<'program>, &Tape, &Cursor) -> ExecuteCallbackResult,
{
    execute_sequence(program, program.head(), tape, cursor, input, output, callback)
}

/// Execute one sibling sequence, recursing into loop bodies.
fn execute_sequence<'program, F>(
    program: &'program Program,
    head: Option<NodeId>,
    tape: &mut Tape,
    cursor: &mut Cursor,
    input: &mut impl Read,
    output: &mut impl Write,
    callback: &mut F,
) -> Result<(), ExecutionError>
where
    F: FnMut(ExecuteCallbackData<'program>, &Tape, &Cursor) -> ExecuteCallbackResult,
{
    let mut cur = head;
    while let Some(id) = cur {
        let node = program.node(id);
        match callback(ExecuteCallbackData::Node(node), tape, cursor) {
            ExecuteCallbackResult::Continue => (),
            ExecuteCallbackResult::Abort => return Err(ExecutionError::Aborted),
        }
        match node.kind {
            Inst::Right => cursor.advance(),
            Inst::Left => cursor.retreat(),
            Inst::Inc => tape.modify(*cursor, 1.into()),
            Inst::Dec => tape.modify(*cursor, (-1).into()),
            Inst::Output => {
                let tmp: [u8; 1] = [tape.get(*cursor).into()];
                output.write_all(&tmp)?;
            }
            Inst::Input => {
                let mut tmp: [u8; 1] = [0; 1];
                // We may need to flush output here if there wasn't a newline.
                output.flush()?;
                match input.read(&mut tmp) {
                    Ok(n_bytes) => {
                        if n_bytes == 0 {
                            // End of input stores zero.
                            tape.set(*cursor, 0.into());
                        } else {
                            tape.set(*cursor, tmp[0].into());
                        }
                    }
                    Err(err) => {
                        return Err(ExecutionError::IoError(err));
                    }
                }
            }
            Inst::Loop => {
                while tape.get(*cursor) != 0.into() {
                    match callback(ExecuteCallbackData::LoopIter, tape, cursor) {
                        ExecuteCallbackResult::Continue => (),
                        ExecuteCallbackResult::Abort => return Err(ExecutionError::Aborted),
                    }
                    execute_sequence(program, node.child, tape, cursor, input, output, callback)?;
                }
            }
        }
        cur = node.next;
    }
    Ok(())
}
