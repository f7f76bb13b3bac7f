#![no_main]

use brainarbor::execute;
use brainarbor::Cursor;
use brainarbor::ExecuteCallbackResult;
use brainarbor::ExecutionError;
use brainarbor::Tape;
use brainarbor_fuzz::FuzzInputSrc;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: FuzzInputSrc| {
    let Ok(program) = brainarbor::parse_source(&data.code) else {
        return;
    };
    let mut input = data.input;

    let mut instr_count = 0;
    let mut tape = Tape::new().unwrap();
    let mut cursor = Cursor::new();
    let mut output: Vec<u8> = Vec::new();
    let exec_result = execute(
        &program,
        &mut tape,
        &mut cursor,
        &mut input,
        &mut output,
        &mut |_, _, _| {
            instr_count += 1;
            if instr_count > 100000 {
                ExecuteCallbackResult::Abort
            } else {
                ExecuteCallbackResult::Continue
            }
        },
    );
    match exec_result {
        Ok(()) | Err(ExecutionError::Aborted) => (),
        Err(err) => panic!("unexpected execution error: {err}"),
    }
});
