//! Error handling for the sortbench library
//!
//! Container operations fail fast: a rejected insertion or removal leaves the
//! container exactly as it was before the call.

use thiserror::Error;

/// Main error type for the sortbench library
#[derive(Error, Debug)]
pub enum SortBenchError {
    /// A fixed-capacity container was asked to hold more than its capacity
    #[error("Capacity exceeded: capacity {capacity}, requested {requested}")]
    CapacityExceeded {
        /// Fixed capacity of the container
        capacity: usize,
        /// Number of elements the operation would have required
        requested: usize,
    },

    /// Removal attempted on an empty container
    #[error("Underflow: {container} is empty")]
    Underflow {
        /// Name of the container kind
        container: &'static str,
    },

    /// Value outside the non-negative integer domain
    #[error("Unsupported domain: value {value} is not a non-negative 32-bit integer")]
    UnsupportedDomain {
        /// The offending value
        value: i64,
    },

    /// Maximum value too large for a frequency table
    #[error("Domain too large: max value {max} exceeds limit {limit}")]
    DomainTooLarge {
        /// Largest value observed in the input
        max: u64,
        /// Configured upper bound on the value range
        limit: u64,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid data format
    #[error("Invalid data: {message}")]
    InvalidData {
        /// Error message describing the issue
        message: String,
    },

    /// Configuration or parameter errors
    #[error("Invalid configuration: {message}")]
    Configuration {
        /// Configuration error message
        message: String,
    },

    /// A sequence expected to be sorted is not
    #[error("Verification failed: {message}")]
    Verification {
        /// Description of the first violation
        message: String,
    },
}

impl SortBenchError {
    /// Create a capacity exceeded error
    pub fn capacity_exceeded(capacity: usize, requested: usize) -> Self {
        Self::CapacityExceeded { capacity, requested }
    }

    /// Create an underflow error
    pub fn underflow(container: &'static str) -> Self {
        Self::Underflow { container }
    }

    /// Create an unsupported domain error
    pub fn unsupported_domain(value: i64) -> Self {
        Self::UnsupportedDomain { value }
    }

    /// Create a domain too large error
    pub fn domain_too_large(max: u64, limit: u64) -> Self {
        Self::DomainTooLarge { max, limit }
    }

    /// Create an invalid data error
    pub fn invalid_data<S: Into<String>>(message: S) -> Self {
        Self::InvalidData {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a verification error
    pub fn verification<S: Into<String>>(message: S) -> Self {
        Self::Verification {
            message: message.into(),
        }
    }

    /// Get the error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            Self::CapacityExceeded { .. } => "capacity",
            Self::Underflow { .. } => "underflow",
            Self::UnsupportedDomain { .. } => "domain",
            Self::DomainTooLarge { .. } => "domain",
            Self::Io(_) => "io",
            Self::InvalidData { .. } => "data",
            Self::Configuration { .. } => "config",
            Self::Verification { .. } => "verification",
        }
    }

    /// Whether the error was raised by a container operation
    pub fn is_container_error(&self) -> bool {
        matches!(self, Self::CapacityExceeded { .. } | Self::Underflow { .. })
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SortBenchError>;

/// Check that `requested` elements fit in `capacity`
#[inline]
pub fn check_capacity(requested: usize, capacity: usize) -> Result<()> {
    if requested > capacity {
        Err(SortBenchError::capacity_exceeded(capacity, requested))
    } else {
        Ok(())
    }
}
