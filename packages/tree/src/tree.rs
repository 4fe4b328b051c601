//! The nested tree type and its path accessors.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use std::hash::Hash;

use crate::error::TreeError;
use crate::hash::StructuralHash;
use crate::subtrees::Subtrees;

/// A child of a [`StructuralTree`]: either a terminal value or a nested tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<V> {
    /// A terminal value.
    Leaf(V),
    /// A nested tree of further keyed children.
    Subtree(StructuralTree<V>),
}

impl<V> Node<V> {
    /// Returns the leaf value, if this node is a leaf.
    #[must_use]
    pub const fn as_leaf(&self) -> Option<&V> {
        match self {
            Self::Leaf(value) => Some(value),
            Self::Subtree(_) => None,
        }
    }

    /// Returns the nested tree, if this node is a subtree.
    #[must_use]
    pub const fn as_subtree(&self) -> Option<&StructuralTree<V>> {
        match self {
            Self::Leaf(_) => None,
            Self::Subtree(tree) => Some(tree),
        }
    }

    /// Whether this node is a leaf.
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// Digest of this node: the leaf value's digest, or the subtree's
    /// structural hash.
    #[must_use]
    pub fn structural_hash(&self) -> StructuralHash
    where
        V: Hash,
    {
        match self {
            Self::Leaf(value) => StructuralHash::of_leaf(value),
            Self::Subtree(tree) => tree.structural_hash(),
        }
    }
}

/// A nested, order-independent, hashable associative structure.
///
/// Every key holds exactly one [`Node`]. Keys are kept sorted, so hashing
/// and traversal never depend on insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuralTree<V> {
    children: BTreeMap<String, Node<V>>,
}

impl<V> Default for StructuralTree<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> StructuralTree<V> {
    /// Create an empty tree.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            children: BTreeMap::new(),
        }
    }

    /// Number of direct children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether the tree has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Direct child stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Node<V>> {
        self.children.get(key)
    }

    /// Direct children in key order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&str, &Node<V>)> {
        self.children.iter().map(|(key, node)| (key.as_str(), node))
    }

    /// Set `value` at the nested location named by `segments`.
    ///
    /// Missing intermediate subtrees are created. An intermediate segment
    /// that currently holds a leaf is replaced by an empty subtree, and the
    /// leaf value is lost.
    ///
    /// # Errors
    ///
    /// * [`TreeError::InvalidPath`] if `segments` is empty
    pub fn set_path<S: AsRef<str>>(&mut self, segments: &[S], value: V) -> Result<(), TreeError> {
        let Some((last, parents)) = segments.split_last() else {
            return Err(TreeError::InvalidPath);
        };

        let mut current = self;
        for segment in parents {
            current = current.child_subtree_mut(segment.as_ref());
        }
        current
            .children
            .insert(last.as_ref().to_string(), Node::Leaf(value));

        Ok(())
    }

    /// Get the node at the nested location named by `segments`.
    ///
    /// # Errors
    ///
    /// * [`TreeError::InvalidPath`] if `segments` is empty
    /// * [`TreeError::PathNotFound`] if a segment is missing or an
    ///   intermediate segment is a leaf
    pub fn get_path<S: AsRef<str>>(&self, segments: &[S]) -> Result<&Node<V>, TreeError> {
        let Some((last, parents)) = segments.split_last() else {
            return Err(TreeError::InvalidPath);
        };

        let mut current = self;
        for segment in parents {
            current = match current.children.get(segment.as_ref()) {
                Some(Node::Subtree(tree)) => tree,
                Some(Node::Leaf(_)) | None => return Err(TreeError::not_found(segments)),
            };
        }

        current
            .children
            .get(last.as_ref())
            .ok_or_else(|| TreeError::not_found(segments))
    }

    /// Get the leaf value at `segments`.
    ///
    /// # Errors
    ///
    /// * [`TreeError::InvalidPath`] if `segments` is empty
    /// * [`TreeError::PathNotFound`] if nothing is stored there, or the
    ///   location holds a subtree
    pub fn get_value<S: AsRef<str>>(&self, segments: &[S]) -> Result<&V, TreeError> {
        self.get_path(segments)?
            .as_leaf()
            .ok_or_else(|| TreeError::not_found(segments))
    }

    /// Number of subtrees reachable below this tree (the tree itself is
    /// not counted).
    #[must_use]
    pub fn subtree_count(&self) -> usize {
        self.children
            .values()
            .filter_map(Node::as_subtree)
            .map(|tree| 1 + tree.subtree_count())
            .sum()
    }

    /// Order-independent digest of the tree's keys and values.
    #[must_use]
    pub fn structural_hash(&self) -> StructuralHash
    where
        V: Hash,
    {
        StructuralHash::of_entries(
            self.children
                .iter()
                .map(|(key, node)| (key.as_str(), node.structural_hash())),
        )
    }

    /// Every nested subtree with its joined path and structural hash.
    ///
    /// Subtrees are produced in pre-order with siblings in key order, so
    /// the sequence is fully deterministic. Leaves are not produced.
    #[must_use]
    pub fn subtrees<'a>(&'a self, separator: &'a str) -> Subtrees<'a, V> {
        Subtrees::new(self, separator)
    }

    fn child_subtree_mut(&mut self, key: &str) -> &mut Self {
        let node = self
            .children
            .entry(key.to_string())
            .or_insert_with(|| Node::Subtree(Self::new()));

        if node.is_leaf() {
            *node = Node::Subtree(Self::new());
        }

        match node {
            Node::Subtree(tree) => tree,
            Node::Leaf(_) => unreachable!("leaf was replaced by a subtree"),
        }
    }
}
