//! Structural paths into a source document.
//!
//! Every non-scalar node of a loaded source document carries the sequence of
//! keys and indices that lead to it from the document root. Paths are used to
//! tag diagnostics and never influence translation decisions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One step of a [`Path`]: an object key or an array index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

/// An ordered sequence of keys and indices from a document root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path(Vec<PathSegment>);

impl Path {
    /// The empty path.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Builds a path from a list of keys.
    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(keys.into_iter().map(|k| PathSegment::Key(k.into())).collect())
    }

    /// Returns a new path extended by an object key.
    pub fn key(&self, key: impl Into<String>) -> Self {
        let mut segments = self.0.clone();
        segments.push(PathSegment::Key(key.into()));
        Self(segments)
    }

    /// Returns a new path extended by an array index.
    pub fn index(&self, index: usize) -> Self {
        let mut segments = self.0.clone();
        segments.push(PathSegment::Index(index));
        Self(segments)
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Path {
    /// Renders the path as `job.outputs[2].presetId`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            match segment {
                PathSegment::Key(key) if i == 0 => write!(f, "{}", key)?,
                PathSegment::Key(key) => write!(f, ".{}", key)?,
                PathSegment::Index(index) => write!(f, "[{}]", index)?,
            }
        }
        Ok(())
    }
}

/// Decorates a freshly parsed source node, and all of its object-valued
/// descendants, with their structural paths.
///
/// Implementations consume the undecorated value and return the decorated
/// one, so a document is never observed half-decorated.
pub trait AttachPaths: Sized {
    fn attach_paths(self, path: &Path) -> Self;
}

impl<T: AttachPaths> AttachPaths for Option<T> {
    fn attach_paths(self, path: &Path) -> Self {
        self.map(|value| value.attach_paths(path))
    }
}

impl<T: AttachPaths> AttachPaths for Vec<T> {
    fn attach_paths(self, path: &Path) -> Self {
        self.into_iter()
            .enumerate()
            .map(|(i, value)| value.attach_paths(&path.index(i)))
            .collect()
    }
}
