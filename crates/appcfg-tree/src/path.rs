//! Dot-paths into the configuration tree
//!
//! Provides [`ConfigPath`] for addressing nested values.
//!
//! Grammar: `path := segment ("." segment)*` where a segment is one or more
//! non-dot characters. There is no index syntax and no way to escape a dot,
//! so a key that itself contains a dot cannot be addressed.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Address of a value in the configuration tree
///
/// # Examples
/// - `ai.defaultModel` → `["ai", "defaultModel"]`
/// - `ai.modelApiConfig.zai/glm-4.7.provider`
///   → `["ai", "modelApiConfig", "zai/glm-4", "7", "provider"]` (the dot splits)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ConfigPath(Vec<String>);

impl ConfigPath {
    /// Parse a dot-separated path
    ///
    /// # Errors
    /// Returns error if the path is empty or contains an empty segment
    pub fn parse(s: &str) -> Result<Self, PathError> {
        if s.is_empty() {
            return Err(PathError::Empty);
        }

        let segments: Vec<String> = s
            .split('.')
            .map(|seg| {
                if seg.is_empty() {
                    Err(PathError::EmptySegment(s.to_string()))
                } else {
                    Ok(seg.to_string())
                }
            })
            .collect::<Result<_, _>>()?;

        Ok(Self(segments))
    }

    /// Create path from a single segment
    ///
    /// # Errors
    /// Returns error if the segment is empty or contains a dot
    pub fn single(segment: impl Into<String>) -> Result<Self, PathError> {
        let segment = segment.into();
        Self::check_segment(&segment)?;
        Ok(Self(vec![segment]))
    }

    /// Get path segments
    #[inline]
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Get number of segments (never zero)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for clippy's `len_without_is_empty`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Section name the path starts in
    #[inline]
    #[must_use]
    pub fn first(&self) -> &str {
        self.0.first().map_or("", String::as_str)
    }

    /// Final key
    #[inline]
    #[must_use]
    pub fn last(&self) -> &str {
        self.0.last().map_or("", String::as_str)
    }

    /// Get parent path (`None` for a single-segment path)
    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        if self.0.len() <= 1 {
            None
        } else {
            Some(Self(self.0[..self.0.len() - 1].to_vec()))
        }
    }

    /// Append a segment, returning new path
    ///
    /// # Errors
    /// Returns error if the segment is empty or contains a dot
    pub fn child(&self, segment: impl Into<String>) -> Result<Self, PathError> {
        let segment = segment.into();
        Self::check_segment(&segment)?;
        let mut new = self.clone();
        new.0.push(segment);
        Ok(new)
    }

    /// Iterator over segments from section to leaf
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    fn check_segment(segment: &str) -> Result<(), PathError> {
        if segment.is_empty() {
            Err(PathError::EmptySegment(segment.to_string()))
        } else if segment.contains('.') {
            Err(PathError::DottedSegment(segment.to_string()))
        } else {
            Ok(())
        }
    }
}

impl Display for ConfigPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}

impl FromStr for ConfigPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for ConfigPath {
    type Error = PathError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

/// Errors related to config paths
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// Path has no segments
    #[error("path is empty")]
    Empty,

    /// Empty segment in path
    #[error("path '{0}' contains an empty segment")]
    EmptySegment(String),

    /// Single segment contains the separator
    #[error("segment '{0}' contains '.'")]
    DottedSegment(String),
}
