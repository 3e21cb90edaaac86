//! Coding paths: where in the document a value was decoded from.

use std::fmt;

/// One step from a JSON container into a child value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// An object key (after key normalization).
    Key(String),
    /// An array index.
    Index(usize),
}

/// The sequence of keys and indices from the document root to a value.
///
/// Displayed as `targets[1].sources[0]`; the empty path displays as `<root>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CodingPath {
    segments: Vec<PathSegment>,
}

impl CodingPath {
    /// The path of the document root.
    pub fn root() -> Self {
        CodingPath::default()
    }

    /// Path of the value stored under `key` in the object at this path.
    pub fn key(&self, key: impl Into<String>) -> Self {
        self.child(PathSegment::Key(key.into()))
    }

    /// Path of the element at `index` in the array at this path.
    pub fn index(&self, index: usize) -> Self {
        self.child(PathSegment::Index(index))
    }

    fn child(&self, segment: PathSegment) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend(self.segments.iter().cloned());
        segments.push(segment);
        CodingPath { segments }
    }

    /// The individual segments, root first.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// The last key on this path, if any.
    pub fn last_key(&self) -> Option<&str> {
        self.segments.iter().rev().find_map(|segment| match segment {
            PathSegment::Key(key) => Some(key.as_str()),
            PathSegment::Index(_) => None,
        })
    }
}

impl fmt::Display for CodingPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return write!(f, "<root>");
        }

        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Key(key) if i == 0 => write!(f, "{}", key)?,
                PathSegment::Key(key) => write!(f, ".{}", key)?,
                PathSegment::Index(index) => write!(f, "[{}]", index)?,
            }
        }

        Ok(())
    }
}
