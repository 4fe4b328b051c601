//! Planned filesystem operations.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::{Path, PathBuf};

use serde::Serialize;

/// What an operation covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    /// Exactly one file.
    Single,
    /// A whole directory subtree in one shot.
    Tree,
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Single => write!(f, "single"),
            Self::Tree => write!(f, "tree"),
        }
    }
}

/// An immutable `(kind, source, target)` triple.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Operation {
    kind: OperationKind,
    source: PathBuf,
    target: PathBuf,
}

impl Operation {
    /// A single-file operation.
    #[must_use]
    pub const fn single(source: PathBuf, target: PathBuf) -> Self {
        Self {
            kind: OperationKind::Single,
            source,
            target,
        }
    }

    /// A whole-subtree operation.
    #[must_use]
    pub const fn tree(source: PathBuf, target: PathBuf) -> Self {
        Self {
            kind: OperationKind::Tree,
            source,
            target,
        }
    }

    /// The operation kind.
    #[must_use]
    pub const fn kind(&self) -> OperationKind {
        self.kind
    }

    /// Where data is read from.
    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Where data is written to.
    #[must_use]
    pub fn target(&self) -> &Path {
        &self.target
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} -> {}",
            self.kind,
            self.source.display(),
            self.target.display()
        )
    }
}
