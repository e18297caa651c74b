//! Construction-time configuration.

use crate::error::ConfigError;

/// Default depth of the queue each `buffer` instantiates.
pub const DEFAULT_FIFO_DEPTH: usize = 2;

/// Default name of the root of the instance hierarchy.
pub const DEFAULT_ROOT: &str = "top";

/// Settings read by the [`Elaborator`](crate::build::Elaborator) while it
/// instantiates components.
///
/// # Examples
///
/// ```rust
/// use rpush::config::BuildConfig;
///
/// let config = BuildConfig::new()
///     .with_fifo_depth(4)
///     .with_root("core");
///
/// assert_eq!(config.fifo_depth(), 4);
/// assert_eq!(config.root(), "core");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BuildConfig {
    fifo_depth: usize,
    root: String,
}

impl BuildConfig {
    /// Configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the depth of every buffer queue.
    pub fn with_fifo_depth(mut self, depth: usize) -> Self {
        self.fifo_depth = depth;
        self
    }

    /// Set the name of the hierarchy root.
    pub fn with_root(mut self, root: impl Into<String>) -> Self {
        self.root = root.into();
        self
    }

    /// Depth of every buffer queue.
    pub fn fifo_depth(&self) -> usize {
        self.fifo_depth
    }

    /// Name of the hierarchy root.
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Check that the settings describe a buildable design.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fifo_depth == 0 {
            return Err(ConfigError::ZeroFifoDepth);
        }
        if self.root.is_empty() {
            return Err(ConfigError::EmptyRootName);
        }
        Ok(())
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            fifo_depth: DEFAULT_FIFO_DEPTH,
            root: DEFAULT_ROOT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BuildConfig::default();
        assert_eq!(config.fifo_depth(), DEFAULT_FIFO_DEPTH);
        assert_eq!(config.root(), "top");
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_rejects_empty_root() {
        let config = BuildConfig::new().with_root("");
        assert_eq!(config.validate(), Err(ConfigError::EmptyRootName));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_loads_partial_json() {
        let config: BuildConfig = serde_json::from_str(r#"{"fifo_depth": 8}"#).unwrap();
        assert_eq!(config.fifo_depth(), 8);
        assert_eq!(config.root(), "top");
    }
}
