//! Radix tree over the hex digits of object ids.
//!
//! Nodes live in a single arena owned by the trie and refer to their children
//! by index. The root is slot 0 and is never anyone's child, so a child slot
//! can use a non-zero index and stay four bytes wide.
//!
//! An id that is already distinguished from every other id is not spelled
//! out digit by digit: it sits in a leaf as a compacted tail. When a later id
//! walks into that leaf, the resident id is pushed one level down, repeatedly,
//! until the two paths split.

use std::num::NonZeroU32;

use git_oid::{ObjectId, OID_HEX_LEN};

use crate::{Result, ShortenError};

/// Largest arena size addressable by a [`NodeIndex`].
const MAX_NODES: usize = u32::MAX as usize;

type NodeIndex = NonZeroU32;

#[derive(Debug, Default)]
struct Node {
    children: [Option<NodeIndex>; 16],
    /// The single id whose remaining digits are compacted below this node.
    tail: Option<ObjectId>,
}

impl Node {
    fn leaf(oid: ObjectId) -> Self {
        Self {
            children: [None; 16],
            tail: Some(oid),
        }
    }

    fn has_children(&self) -> bool {
        self.children.iter().any(Option::is_some)
    }
}

/// Outcome of [`NibbleTrie::insert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// The id was added.
    ///
    /// `branch_depth` is the number of digits at which its path split from
    /// an existing one, or 0 if it was the first id in the trie. Any id that
    /// shared that path now needs at least this many digits too.
    Inserted { branch_depth: usize },
    /// The id was already present; nothing changed.
    Duplicate,
}

/// Index of object ids keyed on their 4-bit digits.
#[derive(Debug)]
pub struct NibbleTrie {
    nodes: Vec<Node>,
    len: usize,
    max_nodes: usize,
}

impl NibbleTrie {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
            len: 0,
            max_nodes: MAX_NODES,
        }
    }

    /// Number of distinct ids indexed.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of arena nodes in use, the root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Index `oid`, reporting the depth of the branch point it created.
    ///
    /// Fails without touching the trie if the arena cannot hold another full
    /// path.
    pub fn insert(&mut self, oid: &ObjectId) -> Result<Insertion> {
        if self.nodes.len() + OID_HEX_LEN > self.max_nodes {
            return Err(self.arena_full());
        }

        let mut idx = 0usize;
        for depth in 0..OID_HEX_LEN {
            if let Some(resident) = self.nodes[idx].tail {
                if resident == *oid {
                    return Ok(Insertion::Duplicate);
                }
                // Make room: the resident moves one digit further down.
                self.nodes[idx].tail = None;
                let child = self.push(Node::leaf(resident))?;
                self.nodes[idx].children[resident.nibble(depth) as usize] = Some(child);
            }

            let digit = oid.nibble(depth) as usize;
            match self.nodes[idx].children[digit] {
                Some(child) => idx = child.get() as usize,
                None => {
                    let branched = self.nodes[idx].has_children();
                    let child = self.push(Node::leaf(*oid))?;
                    self.nodes[idx].children[digit] = Some(child);
                    self.len += 1;
                    let branch_depth = if branched { depth + 1 } else { 0 };
                    return Ok(Insertion::Inserted { branch_depth });
                }
            }
        }

        // Every digit matched an existing node without meeting a tail.
        Ok(Insertion::Duplicate)
    }

    /// Whether `oid` has been inserted.
    pub fn contains(&self, oid: &ObjectId) -> bool {
        self.unique_prefix_len(oid).is_some()
    }

    /// How many leading digits tell `oid` apart from every other indexed id,
    /// or `None` if it is not indexed.
    ///
    /// This is the depth of the leaf holding `oid`, which is one more than
    /// the deepest branch point on its path.
    pub fn unique_prefix_len(&self, oid: &ObjectId) -> Option<usize> {
        let mut node = &self.nodes[0];
        for depth in 0..=OID_HEX_LEN {
            if let Some(resident) = &node.tail {
                return (resident == oid).then_some(depth);
            }
            if depth == OID_HEX_LEN {
                break;
            }
            let child = node.children[oid.nibble(depth) as usize]?;
            node = &self.nodes[child.get() as usize];
        }
        None
    }

    fn push(&mut self, node: Node) -> Result<NodeIndex> {
        let index = u32::try_from(self.nodes.len())
            .ok()
            .and_then(NodeIndex::new)
            .ok_or_else(|| self.arena_full())?;
        self.nodes.push(node);
        Ok(index)
    }

    /// Error for an arena that cannot take another worst-case path. The
    /// ceiling is the id count that is always guaranteed to fit.
    fn arena_full(&self) -> ShortenError {
        ShortenError::OutOfCapacity {
            capacity: self.max_nodes / OID_HEX_LEN,
        }
    }
}

impl Default for NibbleTrie {
    fn default() -> Self {
        Self::new()
    }
}
