use crate::{
    ast::Program, tape::Tape, types::Cursor, ExecuteCallbackResult, ExecutionError,
};

#[derive(Debug, PartialEq)]
pub struct ExecutionState {
    pub result: Option<Result<(), ExecutionError>>,
    pub tape: Tape,
    pub cursor: Cursor,
    pub output: Vec<u8>,
}

impl Default for ExecutionState {
    fn default() -> Self {
        Self {
            result: None,
            tape: Tape::new().unwrap(),
            cursor: Cursor::new(),
            output: Default::default(),
        }
    }
}

/// Run a program with a step bound, so tests cannot hang on programs that
/// legitimately loop forever.
pub fn test_execute(program: &Program, input: &mut impl std::io::Read) -> ExecutionState {
    let mut instr_count = 0;
    let mut exec = ExecutionState::default();
    exec.result = Some(crate::execute(
        program,
        &mut exec.tape,
        &mut exec.cursor,
        input,
        &mut exec.output,
        &mut |_, _, _| {
            instr_count += 1;
            if instr_count > 500000 {
                ExecuteCallbackResult::Abort
            } else {
                ExecuteCallbackResult::Continue
            }
        },
    ));

    exec
}
