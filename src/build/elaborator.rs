//! The construction context that instantiates addressable units.

use std::collections::{HashMap, HashSet};

use crate::build::{Build, BuildContext};
use crate::config::BuildConfig;
use crate::error::ConfigError;

/// Runs build steps and keeps track of what they instantiate.
///
/// Each unit gets a path `root.scope….kindN`. `N` counts instances of the
/// same kind within the same scope, skipping any index whose path is
/// already taken. Paths never repeat, even when a kind name ends in a
/// digit.
///
/// # Example
///
/// ```rust
/// use rpush::config::BuildConfig;
/// use rpush::prelude::*;
///
/// let config = BuildConfig::new().with_root("core").with_fifo_depth(4);
/// let mut cx = Elaborator::with_config(config)?;
///
/// let stage = cx.scope("decode", buffer::<u32, _>(Probe::new(&Clock::new())));
///
/// assert_eq!(stage.name(), "core.decode.buffer0");
/// assert_eq!(stage.capacity(), 4);
/// # Ok::<(), rpush::ConfigError>(())
/// ```
#[derive(Debug)]
pub struct Elaborator {
    config: BuildConfig,
    scopes: Vec<String>,
    counters: HashMap<String, usize>,
    taken: HashSet<String>,
    instances: Vec<String>,
}

impl Elaborator {
    /// Create a context with the default configuration.
    pub fn new() -> Self {
        Self::from_valid(BuildConfig::default())
    }

    /// Create a context with a custom configuration.
    ///
    /// Fails if the configuration does not pass [`BuildConfig::validate`].
    pub fn with_config(config: BuildConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    fn from_valid(config: BuildConfig) -> Self {
        Self {
            config,
            scopes: Vec::new(),
            counters: HashMap::new(),
            taken: HashSet::new(),
            instances: Vec::new(),
        }
    }

    /// The configuration in effect.
    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Run a build step in this context.
    pub fn build<B: Build>(&mut self, builder: B) -> B::Output {
        builder.build(self)
    }

    /// Run a build step inside the named sub-hierarchy.
    pub fn scope<B: Build>(&mut self, name: impl Into<String>, builder: B) -> B::Output {
        self.scopes.push(name.into());
        let output = builder.build(self);
        self.scopes.pop();
        output
    }

    /// Register a new unit of the given kind and return its unique path.
    pub fn instantiate(&mut self, kind: &str) -> String {
        let key = format!("{}.{}", self.prefix(), kind);
        let index = self.counters.entry(key.clone()).or_insert(0);
        // "unit1" + 0 and "unit" + 10 spell the same path
        let path = loop {
            let candidate = format!("{}{}", key, index);
            *index += 1;
            if self.taken.insert(candidate.clone()) {
                break candidate;
            }
        };

        tracing::debug!(instance = %path, "instantiated");
        self.instances.push(path.clone());
        path
    }

    /// Paths of every unit instantiated so far, in construction order.
    pub fn instances(&self) -> &[String] {
        &self.instances
    }

    fn prefix(&self) -> String {
        std::iter::once(self.config.root())
            .chain(self.scopes.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(".")
    }
}

impl BuildContext for Elaborator {
    fn instantiate(&mut self, kind: &str) -> String {
        Elaborator::instantiate(self, kind)
    }

    fn fifo_depth(&self) -> usize {
        self.config.fifo_depth()
    }
}

impl Default for Elaborator {
    fn default() -> Self {
        Self::new()
    }
}

/// Run a build step in a fresh context with the default configuration.
///
/// # Example
///
/// ```rust
/// use rpush::prelude::*;
///
/// let sink = elaborate(sink());
/// assert_eq!(sink.name(), "top.sink0");
/// ```
pub fn elaborate<B: Build>(builder: B) -> B::Output {
    Elaborator::new().build(builder)
}
