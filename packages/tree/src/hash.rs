//! BLAKE3-backed structural hashing.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fmt;
use std::hash::{Hash, Hasher};

/// Domain tag mixed into every leaf digest.
const LEAF_TAG: &[u8] = b"leaf";

/// Domain tag mixed into every subtree digest.
const SUBTREE_TAG: &[u8] = b"subtree";

/// A 256-bit order-independent digest of a tree or leaf.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StructuralHash([u8; 32]);

impl StructuralHash {
    /// Raw digest bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Digest of a single leaf value.
    ///
    /// The value is fed through its [`Hash`] implementation, so `String`
    /// and `&str` leaves holding the same text produce the same digest.
    pub(crate) fn of_leaf<V: Hash + ?Sized>(value: &V) -> Self {
        let mut writer = DigestWriter(blake3::Hasher::new());
        writer.0.update(LEAF_TAG);
        value.hash(&mut writer);
        Self(*writer.0.finalize().as_bytes())
    }

    /// Digest of a subtree from its `(key, child digest)` entries.
    ///
    /// Entries must already be sorted by key.
    pub(crate) fn of_entries<'a, I>(entries: I) -> Self
    where
        I: ExactSizeIterator<Item = (&'a str, Self)>,
    {
        let mut hasher = blake3::Hasher::new();
        hasher.update(SUBTREE_TAG);
        hasher.update(&(entries.len() as u64).to_be_bytes());
        for (key, child) in entries {
            hasher.update(&(key.len() as u64).to_be_bytes());
            hasher.update(key.as_bytes());
            hasher.update(child.as_bytes());
        }
        Self(*hasher.finalize().as_bytes())
    }
}

impl fmt::Display for StructuralHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for StructuralHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StructuralHash({self})")
    }
}

/// Adapts a BLAKE3 hasher to [`std::hash::Hasher`] so any `Hash` leaf can
/// be digested.
struct DigestWriter(blake3::Hasher);

impl Hasher for DigestWriter {
    fn write(&mut self, bytes: &[u8]) {
        self.0.update(bytes);
    }

    fn finish(&self) -> u64 {
        let digest = self.0.finalize();
        let mut head = [0u8; 8];
        head.copy_from_slice(&digest.as_bytes()[..8]);
        u64::from_le_bytes(head)
    }
}
