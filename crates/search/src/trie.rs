//! Prefix trie over case-folded names
//!
//! # Invariants
//!
//! - Every indexed name has exactly one terminal node
//! - Children are kept in a `BTreeMap`, so a depth-first walk visits them in
//!   ascending character order and prefix results come out lexicographically
//! - No node is left without a terminal descendant after `remove`

use std::collections::BTreeMap;

use medistock_core::fold_name;

/// Result of [`NameIndex::insert`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The name was not indexed before
    Inserted,
    /// The name was already indexed; nothing changed
    AlreadyPresent,
}

#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: BTreeMap<char, TrieNode>,
    terminal: bool,
}

impl TrieNode {
    fn collect(&self, buf: &mut String, out: &mut Vec<String>) {
        if self.terminal {
            out.push(buf.clone());
        }
        for (ch, child) in &self.children {
            buf.push(*ch);
            child.collect(buf, out);
            buf.pop();
        }
    }

    fn remove(&mut self, mut chars: std::str::Chars<'_>) -> bool {
        let Some(ch) = chars.next() else {
            let was_terminal = self.terminal;
            self.terminal = false;
            return was_terminal;
        };
        let Some(child) = self.children.get_mut(&ch) else {
            return false;
        };
        let removed = child.remove(chars);
        if removed && !child.terminal && child.children.is_empty() {
            self.children.remove(&ch);
        }
        removed
    }

    fn count_nodes(&self) -> usize {
        1 + self.children.values().map(TrieNode::count_nodes).sum::<usize>()
    }
}

/// Trie of indexed names
///
/// All operations case-fold their argument first. Nothing here fails:
/// absence is an empty result or [`InsertOutcome::AlreadyPresent`].
#[derive(Debug, Clone, Default)]
pub struct NameIndex {
    root: TrieNode,
    len: usize,
}

impl NameIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Index a name
    pub fn insert(&mut self, name: &str) -> InsertOutcome {
        let folded = fold_name(name);
        let mut node = &mut self.root;
        for ch in folded.chars() {
            node = node.children.entry(ch).or_default();
        }
        if node.terminal {
            return InsertOutcome::AlreadyPresent;
        }
        node.terminal = true;
        self.len += 1;
        InsertOutcome::Inserted
    }

    /// Whether exactly this name is indexed
    pub fn contains_exact(&self, name: &str) -> bool {
        self.find(&fold_name(name))
            .map(|node| node.terminal)
            .unwrap_or(false)
    }

    /// Every indexed name starting with `prefix`, in lexicographic order
    ///
    /// The empty prefix returns every indexed name.
    pub fn prefix_search(&self, prefix: &str) -> Vec<String> {
        let folded = fold_name(prefix);
        let mut out = Vec::new();
        if let Some(node) = self.find(&folded) {
            let mut buf = folded;
            node.collect(&mut buf, &mut out);
        }
        out
    }

    /// Un-index a name, pruning branches that no longer lead anywhere.
    ///
    /// Returns `false` if the name was not indexed. Only the coordinator's
    /// rollback path uses this; records themselves are append-only.
    pub fn remove(&mut self, name: &str) -> bool {
        let folded = fold_name(name);
        let removed = self.root.remove(folded.chars());
        if removed {
            self.len -= 1;
        }
        removed
    }

    /// Number of indexed names (terminal nodes)
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no name is indexed
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of trie nodes, root included
    pub fn node_count(&self) -> usize {
        self.root.count_nodes()
    }

    fn find(&self, folded: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for ch in folded.chars() {
            node = node.children.get(&ch)?;
        }
        Some(node)
    }
}
