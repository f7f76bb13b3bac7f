#[cfg(target_os = "linux")]
use std::os::linux::fs::MetadataExt;

use std::{
    collections::TryReserveError,
    io::{self, Read},
    path::PathBuf,
};

use thiserror::Error;

use brainarbor::{
    execute, parse_source, Cursor, ExecuteCallbackData, ExecuteCallbackResult, ExecutionError,
    ParseError, Tape,
};
use clap::Parser;

#[derive(Debug, Error)]
pub enum ProgramError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
    #[error("Parsing error: {0}")]
    ParserError(#[from] ParseError),
    #[error("Tape allocation failed: {0}")]
    TapeAllocError(#[from] TryReserveError),
    #[error("Execution error: {0}")]
    ExecutionError(#[from] ExecutionError),
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input Brainfuck source file
    input_file: PathBuf,

    /// Enable debug output for the parsed tree
    #[arg(long, default_value_t = false)]
    debug_ast: bool,

    /// Trace every executed instruction
    #[arg(long, default_value_t = false)]
    trace: bool,
}

fn main() -> Result<(), ProgramError> {
    let args = Args::parse();

    let mut file = std::fs::File::open(args.input_file)?;

    #[cfg(target_os = "linux")]
    let mut buf = Vec::with_capacity(file.metadata()?.st_size() as usize);
    #[cfg(not(target_os = "linux"))]
    let mut buf = Vec::new();

    file.read_to_end(&mut buf)?;

    let program = parse_source(buf.as_slice())?;

    if args.debug_ast {
        dbg!(&program);
    }

    let trace = args.trace;

    let mut tape = Tape::new()?;
    let mut cursor = Cursor::new();
    execute(
        &program,
        &mut tape,
        &mut cursor,
        &mut std::io::stdin().lock(),
        &mut std::io::stdout().lock(),
        &mut |data, _, at| {
            if trace {
                match data {
                    ExecuteCallbackData::Node(node) => {
                        eprintln!("[{at}] {:?} (src byte {})", node.kind, node.source_loc);
                    }
                    ExecuteCallbackData::LoopIter => (),
                };
            }
            ExecuteCallbackResult::Continue
        },
    )?;

    Ok(())
}
