//! Lazy pre-order enumeration of nested subtrees.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::hash::Hash;
use std::iter::FusedIterator;

use crate::hash::StructuralHash;
use crate::tree::StructuralTree;

/// Iterator over `(joined path, structural hash)` for every subtree
/// reachable from a [`StructuralTree`].
///
/// Created by [`StructuralTree::subtrees`]. Parents are produced before
/// their children and siblings follow key order.
pub struct Subtrees<'a, V> {
    separator: &'a str,
    pending: Vec<(String, &'a StructuralTree<V>)>,
}

impl<'a, V> Subtrees<'a, V> {
    pub(crate) fn new(root: &'a StructuralTree<V>, separator: &'a str) -> Self {
        let mut subtrees = Self {
            separator,
            pending: Vec::new(),
        };
        subtrees.push_children(None, root);
        subtrees
    }

    /// Queue the subtree children of `tree`, last key first so the first
    /// key is popped next.
    fn push_children(&mut self, parent: Option<&str>, tree: &'a StructuralTree<V>) {
        for (key, node) in tree.iter().rev() {
            if let Some(child) = node.as_subtree() {
                let path = match parent {
                    Some(parent) => format!("{parent}{}{key}", self.separator),
                    None => key.to_string(),
                };
                self.pending.push((path, child));
            }
        }
    }
}

impl<V> Clone for Subtrees<'_, V> {
    fn clone(&self) -> Self {
        Self {
            separator: self.separator,
            pending: self.pending.clone(),
        }
    }
}

impl<V: Hash> Iterator for Subtrees<'_, V> {
    type Item = (String, StructuralHash);

    fn next(&mut self) -> Option<Self::Item> {
        let (path, tree) = self.pending.pop()?;
        self.push_children(Some(&path), tree);
        let hash = tree.structural_hash();
        Some((path, hash))
    }
}

impl<V: Hash> FusedIterator for Subtrees<'_, V> {}
