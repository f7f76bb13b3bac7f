//! # brainarbor - A tree-walking Brainfuck interpreter
//!
//! **NOTE! This is a command line program. This library does NOT provide a
//! stable API, or even an API meant to be consumed by external code at all.**
//!
//! You have been warned.

// Re-export some symbols.
pub use interpreter::execute;
pub use interpreter::ExecuteCallbackData;
pub use interpreter::ExecuteCallbackResult;
pub use interpreter::ExecutionError;
pub use parser::parse_source;
pub use parser::ParseError;
pub use tape::Tape;
pub use types::Cell;
pub use types::Cursor;
pub use types::MAX_LOOP_DEPTH;
pub use types::TAPE_SIZE;

pub mod ast;
mod interpreter;
mod parser;
pub mod tape;
#[doc(hidden)]
pub mod test_utils;
pub mod types;
