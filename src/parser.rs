use thiserror::Error;

use crate::ast::*;
use crate::types::MAX_LOOP_DEPTH;

/// Tokens in source file
#[derive(Debug, PartialEq, Clone, Copy)]
enum Token {
    Left,
    Right,
    Add,
    Subtract,
    Input,
    Output,
    BeginLoop,
    EndLoop,
}

/// Parses source code, producing a stream of tokens.
fn lexer(source_code: &'_ [u8]) -> impl Iterator<Item = (usize, Token)> + '_ {
    // Tokenise and discard unknown bytes (they act as comments)
    source_code
        .iter()
        .enumerate() // For keeping track of source location
        .filter_map(|(pos, c)| match c {
            b'<' => Some((pos, Token::Left)),
            b'>' => Some((pos, Token::Right)),
            b'+' => Some((pos, Token::Add)),
            b'-' => Some((pos, Token::Subtract)),
            b'.' => Some((pos, Token::Output)),
            b',' => Some((pos, Token::Input)),
            b'[' => Some((pos, Token::BeginLoop)),
            b']' => Some((pos, Token::EndLoop)),
            _ => None,
        })
}

/// Errors during parsing
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ParseError {
    /// `]` with no loop open.
    #[error("Unmatched ] at byte {0} of source")]
    UnmatchedClose(usize),
    /// End of input with loops still open.
    #[error("Unmatched [: {0} loop(s) still open at end of input")]
    UnmatchedOpen(usize),
    /// Nesting deeper than [`MAX_LOOP_DEPTH`].
    #[error("Loop at byte {0} of source exceeds the nesting limit of {MAX_LOOP_DEPTH}")]
    LoopNestingTooDeep(usize),
}

/// Incremental tree builder.
///
/// `open_loops` holds the loop node at each open nesting level.
/// `last_at_depth` holds, one entry per level (including the top level),
/// the most recently appended node at that level, so appending a sibling
/// is O(1) instead of re-walking the sibling chain.
#[derive(Debug)]
struct TreeBuilder {
    nodes: Vec<Node>,
    head: Option<NodeId>,
    open_loops: Vec<NodeId>,
    last_at_depth: Vec<Option<NodeId>>,
}

impl TreeBuilder {
    fn new() -> Self {
        Self {
            nodes: vec![],
            head: None,
            open_loops: vec![],
            last_at_depth: vec![None],
        }
    }

    /// Append a node at the current nesting level and return its id.
    fn append(&mut self, kind: Inst, source_loc: usize) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind,
            child: None,
            next: None,
            source_loc,
        });

        let depth = self.open_loops.len();
        match self.last_at_depth[depth] {
            Some(prev) => self.nodes[prev.0].next = Some(id),
            None => match self.open_loops.last() {
                Some(parent) => self.nodes[parent.0].child = Some(id),
                None => self.head = Some(id),
            },
        }
        self.last_at_depth[depth] = Some(id);
        id
    }

    fn open_loop(&mut self, source_loc: usize) -> Result<(), ParseError> {
        if self.open_loops.len() >= MAX_LOOP_DEPTH {
            return Err(ParseError::LoopNestingTooDeep(source_loc));
        }
        let id = self.append(Inst::Loop, source_loc);
        self.open_loops.push(id);
        self.last_at_depth.push(None);
        Ok(())
    }

    fn close_loop(&mut self, source_loc: usize) -> Result<(), ParseError> {
        if self.open_loops.pop().is_none() {
            return Err(ParseError::UnmatchedClose(source_loc));
        }
        self.last_at_depth.pop();
        Ok(())
    }

    fn finish(self) -> Result<Program, ParseError> {
        if !self.open_loops.is_empty() {
            return Err(ParseError::UnmatchedOpen(self.open_loops.len()));
        }
        Ok(Program {
            nodes: self.nodes,
            head: self.head,
        })
    }
}

/// Build the program tree from a token stream.
///
/// On any error the partially built arena is dropped with the builder.
fn build_tree(tokens: impl Iterator<Item = (usize, Token)>) -> Result<Program, ParseError> {
    let mut builder = TreeBuilder::new();

    for (src_offset, token) in tokens {
        match token {
            Token::Right => {
                builder.append(Inst::Right, src_offset);
            }
            Token::Left => {
                builder.append(Inst::Left, src_offset);
            }
            Token::Add => {
                builder.append(Inst::Inc, src_offset);
            }
            Token::Subtract => {
                builder.append(Inst::Dec, src_offset);
            }
            Token::Output => {
                builder.append(Inst::Output, src_offset);
            }
            Token::Input => {
                builder.append(Inst::Input, src_offset);
            }
            Token::BeginLoop => builder.open_loop(src_offset)?,
            Token::EndLoop => builder.close_loop(src_offset)?,
        }
    }

    builder.finish()
}

/// Parse source code into a program tree.
pub fn parse_source(source_code: &[u8]) -> Result<Program, ParseError> {
    build_tree(lexer(source_code))
}

#[cfg(test)]
mod tests {
    use super::{parse_source, ParseError};
    use crate::ast::Inst;
    use crate::types::MAX_LOOP_DEPTH;

    #[test]
    fn simple_parse() {
        parse_source(b"++>->,>.").unwrap();
        parse_source(b"++>->,>.>[-]").unwrap();
        parse_source(b"++>->,>.>[-[+>]]").unwrap();

        assert_eq!(
            parse_source(b"++>->,>.>[-]]"),
            Err(ParseError::UnmatchedClose(12))
        );
        assert_eq!(
            parse_source(b"++>->,>.>[-]["),
            Err(ParseError::UnmatchedOpen(1))
        );
    }

    #[test]
    fn empty_program() {
        let program = parse_source(b"").unwrap();
        assert!(program.is_empty());
        assert_eq!(program.node_count(), 0);

        // Comment-only input is an empty program too.
        let program = parse_source(b"hello world!\n").unwrap();
        assert!(program.is_empty());
    }

    #[test]
    fn leaf_count_matches_instruction_count() {
        // Non-instruction bytes contribute no nodes.
        let program = parse_source(b"comment +- [>.<,] more comments").unwrap();
        assert_eq!(program.leaf_count(), 6);
        assert_eq!(program.node_count(), 7);
    }

    #[test]
    fn tree_shape() {
        let program = parse_source(b"+[>-]<").unwrap();

        let top: Vec<_> = program.sequence(program.head()).collect();
        assert_eq!(top.len(), 3);
        assert_eq!(top[0].kind, Inst::Inc);
        assert_eq!(top[1].kind, Inst::Loop);
        assert_eq!(top[2].kind, Inst::Left);

        let body: Vec<_> = program.sequence(top[1].child).collect();
        assert_eq!(body.len(), 2);
        assert_eq!(body[0].kind, Inst::Right);
        assert_eq!(body[1].kind, Inst::Dec);
        assert!(body[0].child.is_none());
    }

    #[test]
    fn empty_loop_body() {
        let program = parse_source(b"[]").unwrap();
        let top: Vec<_> = program.sequence(program.head()).collect();
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].kind, Inst::Loop);
        assert!(top[0].child.is_none());
    }

    #[test]
    fn unmatched_close_at_start() {
        assert_eq!(parse_source(b"]"), Err(ParseError::UnmatchedClose(0)));
    }

    #[test]
    fn unmatched_open() {
        assert_eq!(parse_source(b"[+"), Err(ParseError::UnmatchedOpen(1)));
        assert_eq!(parse_source(b"[[+"), Err(ParseError::UnmatchedOpen(2)));
    }

    #[test]
    fn nesting_limit() {
        let at_limit = [b'['; MAX_LOOP_DEPTH]
            .iter()
            .chain([b']'; MAX_LOOP_DEPTH].iter())
            .copied()
            .collect::<Vec<u8>>();
        parse_source(&at_limit).unwrap();

        let too_deep = vec![b'['; MAX_LOOP_DEPTH + 1];
        assert_eq!(
            parse_source(&too_deep),
            Err(ParseError::LoopNestingTooDeep(MAX_LOOP_DEPTH))
        );
    }

    #[test]
    fn source_locations() {
        let program = parse_source(b"a+b.").unwrap();
        let top: Vec<_> = program.sequence(program.head()).collect();
        assert_eq!(top[0].source_loc, 1);
        assert_eq!(top[1].source_loc, 3);
    }
}
