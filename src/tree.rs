use crate::alphabet::Symbol;
use log::{debug, trace};
use std::collections::HashMap;

/// A prefix tree whose edges are labelled by code symbols and whose leaves
/// are bound to plaintext characters. The path from the root to a leaf is
/// the code for that leaf's character.
#[derive(Debug, Clone, PartialEq)]
pub enum EncodingTree<S: Symbol> {
    Leaf(char),
    Internal(Node<S>),
}

/// The non-terminal part of an encoding tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Node<S: Symbol> {
    children: HashMap<S, EncodingTree<S>>,
    /// For every character below this node, the symbol of the child it
    /// lives under. Empty until `build_encoding_table` runs.
    encoding_table: HashMap<char, S>,
}

/// Errors that can occur while assembling an encoding tree
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum TreeError<S: Symbol> {
    #[error("Cannot insert at an empty path")]
    EmptyPath,
    #[error("Invalid insertion at {path:?}: cannot extend a leaf")]
    ExtendLeaf { path: Vec<S> },
    #[error("Invalid insertion at {path:?}: missing intermediate node")]
    MissingNode { path: Vec<S> },
    #[error("Internal node at {path:?} has no children")]
    EmptyNode { path: Vec<S> },
    #[error("Character {character:?} is bound to more than one leaf (again at {path:?})")]
    DuplicateLeaf { character: char, path: Vec<S> },
    #[error("A lone leaf has no encoding table")]
    LeafRoot,
}

impl<S: Symbol> Default for Node<S> {
    fn default() -> Self {
        Self {
            children: HashMap::new(),
            encoding_table: HashMap::new(),
        }
    }
}

impl<S: Symbol> Node<S> {
    pub fn children(&self) -> &HashMap<S, EncodingTree<S>> {
        &self.children
    }

    pub fn encoding_table(&self) -> &HashMap<char, S> {
        &self.encoding_table
    }

    fn set(
        &mut self,
        path: &[S],
        depth: usize,
        subtree: EncodingTree<S>,
    ) -> Result<(), TreeError<S>> {
        let (&symbol, rest) = path[depth..]
            .split_first()
            .ok_or(TreeError::EmptyPath)?;
        if rest.is_empty() {
            self.children.insert(symbol, subtree);
        } else {
            match self.children.get_mut(&symbol) {
                Some(EncodingTree::Internal(child)) => child.set(path, depth + 1, subtree)?,
                Some(EncodingTree::Leaf(_)) => {
                    return Err(TreeError::ExtendLeaf {
                        path: path[..=depth].to_vec(),
                    });
                }
                None => {
                    return Err(TreeError::MissingNode {
                        path: path[..=depth].to_vec(),
                    });
                }
            }
        }

        // Something below changed, so the cached table is no longer valid.
        self.encoding_table.clear();
        Ok(())
    }

    fn build_encoding_table(&mut self, path: &mut Vec<S>) -> Result<(), TreeError<S>> {
        if self.children.is_empty() {
            return Err(TreeError::EmptyNode { path: path.clone() });
        }

        let mut table = HashMap::new();
        for (&symbol, child) in self.children.iter_mut() {
            path.push(symbol);
            match child {
                EncodingTree::Leaf(c) => register(&mut table, *c, symbol, path)?,
                EncodingTree::Internal(node) => {
                    node.build_encoding_table(path)?;
                    for &c in node.encoding_table.keys() {
                        register(&mut table, c, symbol, path)?;
                    }
                }
            }
            path.pop();
        }

        self.encoding_table = table;
        Ok(())
    }
}

fn register<S: Symbol>(
    table: &mut HashMap<char, S>,
    character: char,
    symbol: S,
    path: &[S],
) -> Result<(), TreeError<S>> {
    match table.insert(character, symbol) {
        None => Ok(()),
        Some(_) => Err(TreeError::DuplicateLeaf {
            character,
            path: path.to_vec(),
        }),
    }
}

impl<S: Symbol> EncodingTree<S> {
    /// An internal node with no children yet.
    pub fn internal() -> Self {
        EncodingTree::Internal(Node::default())
    }

    /// A leaf bound to the given plaintext character.
    pub fn leaf(c: char) -> Self {
        EncodingTree::Leaf(c)
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, EncodingTree::Leaf(_))
    }

    /// The character bound to this node, if it is a leaf.
    pub fn leaf_value(&self) -> Option<char> {
        match self {
            EncodingTree::Leaf(c) => Some(*c),
            EncodingTree::Internal(_) => None,
        }
    }

    /// The child reached from this node by `symbol`, if any.
    pub fn child(&self, symbol: S) -> Option<&EncodingTree<S>> {
        match self {
            EncodingTree::Leaf(_) => None,
            EncodingTree::Internal(node) => node.children.get(&symbol),
        }
    }

    /// Attach `subtree` at the end of `path`, overwriting whatever was bound
    /// to the final symbol. Every node along the path other than the last
    /// must already exist and be internal.
    ///
    /// Inserting invalidates the encoding tables on the path, so
    /// `build_encoding_table` has to be called again afterwards.
    pub fn set(&mut self, path: &[S], subtree: EncodingTree<S>) -> Result<(), TreeError<S>> {
        trace!("Setting {path:?}");
        match self {
            EncodingTree::Internal(node) => node.set(path, 0, subtree),
            EncodingTree::Leaf(_) if path.is_empty() => Err(TreeError::EmptyPath),
            EncodingTree::Leaf(_) => Err(TreeError::ExtendLeaf { path: Vec::new() }),
        }
    }

    /// Descend `path` one symbol at a time. An empty path yields the tree
    /// itself; `None` means there is no such path.
    pub fn get(&self, path: &[S]) -> Option<&EncodingTree<S>> {
        path.iter()
            .try_fold(self, |node, &symbol| node.child(symbol))
    }

    /// Populate the encoding table of every internal node with a single
    /// traversal, and return the table of this (root) node.
    ///
    /// Must be called once the topology is complete.
    pub fn build_encoding_table(&mut self) -> Result<&HashMap<char, S>, TreeError<S>> {
        match self {
            EncodingTree::Leaf(_) => Err(TreeError::LeafRoot),
            EncodingTree::Internal(node) => {
                node.build_encoding_table(&mut Vec::new())?;
                debug!(
                    "Built encoding table covering {} characters",
                    node.encoding_table.len()
                );
                Ok(&node.encoding_table)
            }
        }
    }

    /// The root's encoding table, if this is an internal node.
    pub fn encoding_table(&self) -> Option<&HashMap<char, S>> {
        match self {
            EncodingTree::Leaf(_) => None,
            EncodingTree::Internal(node) => Some(&node.encoding_table),
        }
    }

    /// The complete code of every character in the tree, found by walking
    /// it rather than through the encoding tables.
    pub fn codes(&self) -> HashMap<char, Vec<S>> {
        fn walk<S: Symbol>(
            tree: &EncodingTree<S>,
            path: &mut Vec<S>,
            codes: &mut HashMap<char, Vec<S>>,
        ) {
            match tree {
                EncodingTree::Leaf(c) => {
                    codes.insert(*c, path.clone());
                }
                EncodingTree::Internal(node) => {
                    for (&symbol, child) in &node.children {
                        path.push(symbol);
                        walk(child, path, codes);
                        path.pop();
                    }
                }
            }
        }

        let mut codes = HashMap::new();
        walk(self, &mut Vec::new(), &mut codes);
        codes
    }

    /// The number of leaves in the tree.
    pub fn leaf_count(&self) -> usize {
        match self {
            EncodingTree::Leaf(_) => 1,
            EncodingTree::Internal(node) => node.children.values().map(Self::leaf_count).sum(),
        }
    }
}
