//! Error types for the queue and construction collaborators.
//!
//! The combinators themselves have no error channel: pushing into a full
//! buffer or pushing twice in one cycle are preconditions the scheduler is
//! expected to uphold. These errors surface only where a caller asks for a
//! checked operation.

/// Error returned by the checked queue operations.
///
/// # Examples
///
/// ```rust
/// use rpush::fifo::{Fifo, Queue};
/// use rpush::FifoError;
///
/// let mut fifo = Fifo::new(1);
/// fifo.try_enq(1).unwrap();
/// assert_eq!(fifo.try_enq(2), Err(FifoError::Full { capacity: 1 }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FifoError {
    /// The queue already holds `capacity` elements this cycle.
    Full {
        /// Maximum number of elements the queue can hold.
        capacity: usize,
    },
    /// No element is visible this cycle.
    Empty,
}

impl std::fmt::Display for FifoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FifoError::Full { capacity } => {
                write!(f, "enq on full fifo (capacity {})", capacity)
            }
            FifoError::Empty => write!(f, "deq on empty fifo"),
        }
    }
}

impl std::error::Error for FifoError {}

/// Error returned when a [`BuildConfig`](crate::config::BuildConfig) is rejected.
///
/// # Examples
///
/// ```rust
/// use rpush::config::BuildConfig;
/// use rpush::ConfigError;
///
/// let config = BuildConfig::new().with_fifo_depth(0);
/// assert_eq!(config.validate(), Err(ConfigError::ZeroFifoDepth));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Buffers need room for at least one element.
    ZeroFifoDepth,
    /// The root of the instance hierarchy must have a name.
    EmptyRootName,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ZeroFifoDepth => write!(f, "fifo depth must be at least 1"),
            ConfigError::EmptyRootName => write!(f, "root instance name must not be empty"),
        }
    }
}

impl std::error::Error for ConfigError {}
