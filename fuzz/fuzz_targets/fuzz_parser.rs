#![no_main]

use libfuzzer_sys::fuzz_target;

use brainarbor::{parse_source, ParseError, MAX_LOOP_DEPTH};

/// Independent single-pass oracle for the expected parse outcome.
fn check_loop_balance(data: &[u8]) -> Option<ParseError> {
    let mut depth: usize = 0;
    for (pos, c) in data.iter().enumerate() {
        match c {
            b'[' => {
                if depth >= MAX_LOOP_DEPTH {
                    return Some(ParseError::LoopNestingTooDeep(pos));
                }
                depth += 1;
            }
            b']' => {
                if depth == 0 {
                    return Some(ParseError::UnmatchedClose(pos));
                }
                depth -= 1;
            }
            _ => (),
        }
    }
    if depth != 0 {
        return Some(ParseError::UnmatchedOpen(depth));
    }
    None
}

fn count_leaves(data: &[u8]) -> usize {
    data.iter()
        .filter(|c| matches!(c, b'<' | b'>' | b'+' | b'-' | b'.' | b','))
        .count()
}

fuzz_target!(|data: &[u8]| {
    match parse_source(data) {
        Ok(program) => {
            assert_eq!(check_loop_balance(data), None);
            assert_eq!(program.leaf_count(), count_leaves(data));
        }
        Err(e) => {
            assert_eq!(check_loop_balance(data), Some(e));
        }
    }
});
