//! Dot-path lookup
//!
//! Walks a [`ConfigTree`] one segment at a time. Missing keys, empty paths
//! and paths that try to index into a scalar all resolve to `None`; lookups
//! never fail loudly.

use tracing::trace;

use crate::path::ConfigPath;
use crate::tree::ConfigTree;
use crate::value::ConfigValue;

/// Resolves dot-separated paths against a tree
#[derive(Debug, Clone, Copy)]
pub struct PathResolver<'a> {
    tree: &'a ConfigTree,
}

impl<'a> PathResolver<'a> {
    /// Resolver over `tree`
    #[inline]
    #[must_use]
    pub fn new(tree: &'a ConfigTree) -> Self {
        Self { tree }
    }

    /// Value at `path`, or `None` if any segment is missing
    ///
    /// ```
    /// # use appcfg_tree::{ConfigTree, PathResolver};
    /// let tree = ConfigTree::builtin().unwrap();
    /// let resolver = PathResolver::new(&tree);
    /// let ms = resolver.resolve("vercelSandbox.timeoutMs").and_then(|v| v.as_u64());
    /// assert_eq!(ms, Some(900_000));
    /// assert!(resolver.resolve("does.not.exist").is_none());
    /// ```
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<ConfigValue<'a>> {
        match ConfigPath::parse(path) {
            Ok(parsed) => self.resolve_path(&parsed),
            Err(err) => {
                trace!(path, %err, "unparseable config path");
                None
            }
        }
    }

    /// Value at an already parsed path
    #[must_use]
    pub fn resolve_path(&self, path: &ConfigPath) -> Option<ConfigValue<'a>> {
        let mut segments = path.iter();
        let first = segments.next()?;
        let mut current = ConfigValue::Section(self.tree.get(first)?);

        for segment in segments {
            let Some(section) = current.as_section() else {
                trace!(%path, segment = segment, "path descends into a scalar");
                return None;
            };
            match section.child(segment) {
                Some(next) => current = next,
                None => {
                    trace!(%path, segment = segment, "config key not found");
                    return None;
                }
            }
        }
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tree() -> ConfigTree {
        ConfigTree::builtin().unwrap()
    }

    #[test]
    fn resolves_scalars() {
        let tree = tree();
        let resolver = PathResolver::new(&tree);
        assert_eq!(resolver.resolve("e2b.timeoutMs"), Some(ConfigValue::Integer(1_800_000)));
        assert_eq!(resolver.resolve("api.maxRetries"), Some(ConfigValue::Integer(3)));
        assert_eq!(resolver.resolve("dev.enablePerformanceMonitoring"), Some(ConfigValue::Bool(false)));
    }

    #[test]
    fn resolves_through_model_tables() {
        let tree = tree();
        let resolver = PathResolver::new(&tree);
        assert_eq!(
            resolver.resolve("ai.modelApiConfig.zai/glm-4.7"),
            None,
            "model ids containing dots are not addressable by dot-path"
        );
        assert_eq!(
            resolver.resolve("ai.modelDisplayNames.openai/gpt-4o"),
            Some(ConfigValue::Text("GPT-4o"))
        );
    }

    #[test]
    fn missing_or_malformed_paths_are_none() {
        let tree = tree();
        let resolver = PathResolver::new(&tree);
        for path in ["", ".", "ai.", ".ai", "ai..maxTokens", "nope", "ai.nope", "does.not.exist"] {
            assert_eq!(resolver.resolve(path), None, "{path:?}");
        }
    }

    #[test]
    fn scalar_has_no_children() {
        let tree = tree();
        let resolver = PathResolver::new(&tree);
        assert_eq!(resolver.resolve("ai.maxTokens.value"), None);
        assert_eq!(resolver.resolve("files.excludePatterns.0"), None);
    }

    #[test]
    fn single_segment_is_the_section() {
        let tree = tree();
        let resolver = PathResolver::new(&tree);
        let section = resolver.resolve("ui").and_then(|v| v.as_section());
        assert_eq!(section, tree.get("ui"));
    }
}
