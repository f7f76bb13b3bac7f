//! Types and functions for the program tree.
//!
//! The tree is stored in an arena: nodes live in a `Vec` and refer to each
//! other by index. Siblings form a singly linked list through `next`; a
//! loop node points at the head of its body through `child`. The structure
//! is acyclic by construction (the parser only ever links to nodes created
//! earlier), so dropping the arena releases every node exactly once.

/// Index of a node in a [`Program`] arena.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[repr(transparent)]
pub struct NodeId(pub(crate) usize);

/// The instruction kinds.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Inst {
    /// `>`: move the cursor one cell right (wrapping)
    Right,
    /// `<`: move the cursor one cell left (wrapping)
    Left,
    /// `+`: increment the current cell (wrapping)
    Inc,
    /// `-`: decrement the current cell (wrapping)
    Dec,
    /// `.`: write the current cell as one byte
    Output,
    /// `,`: read one byte into the current cell, 0 on end of input
    Input,
    /// `[` ... `]`: run the child sequence while the current cell is nonzero
    Loop,
}

impl Inst {
    /// True for every kind except [`Inst::Loop`].
    pub fn is_leaf(&self) -> bool {
        !matches!(self, Inst::Loop)
    }
}

/// A single instruction node.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Node {
    pub kind: Inst,
    /// First instruction of a loop body. Always `None` for leaf kinds;
    /// `None` on a loop means an empty body.
    pub child: Option<NodeId>,
    /// Next sibling in the sequence.
    pub next: Option<NodeId>,
    /// Byte offset in the source this node came from.
    pub source_loc: usize,
}

/// A parsed program: an arena of nodes plus the head of the top-level
/// sequence. An empty program has no head and is legal.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct Program {
    pub(crate) nodes: Vec<Node>,
    pub(crate) head: Option<NodeId>,
}

impl Program {
    /// First instruction of the top-level sequence, if any.
    pub fn head(&self) -> Option<NodeId> {
        self.head
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Total number of nodes, loops included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of leaf nodes (every kind except loops).
    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.kind.is_leaf()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Release every node and leave the program empty. Clearing an already
    /// empty program is a no-op.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
    }

    /// Iterate over a sibling sequence starting at `head`.
    pub fn sequence(&self, head: Option<NodeId>) -> Sequence<'_> {
        Sequence {
            program: self,
            cur: head,
        }
    }
}

/// Iterator over one sibling sequence of a [`Program`].
#[derive(Debug, Clone)]
pub struct Sequence<'program> {
    program: &'program Program,
    cur: Option<NodeId>,
}

impl<'program> Iterator for Sequence<'program> {
    type Item = &'program Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.program.node(self.cur?);
        self.cur = node.next;
        Some(node)
    }
}
