//! Error types for container operations.
//!
//! Resolution failures carry the offending key and, for unknown keys,
//! "did you mean" suggestions drawn from the bound providers.

use std::fmt;

use chassis_support::rendering::render_list;

use crate::key::ServiceKey;
use crate::provider::BoxError;

/// Main error type for all container operations.
#[derive(Debug, thiserror::Error)]
pub enum ChassisError {
    /// Resolution was requested for a key with no bound provider.
    #[error("{}", .0)]
    NotRegistered(NotRegisteredError),

    /// A provider's boot hook failed before its factory ran.
    #[error("Boot failed for service {key}: {source}")]
    BootFailed {
        key: ServiceKey,
        #[source]
        source: BoxError,
    },

    /// The factory returned an error, or a typed resolution hit an
    /// instance of a different type.
    #[error("Failed to construct service {key}: {source}")]
    ConstructionFailed {
        key: ServiceKey,
        #[source]
        source: BoxError,
    },
}

/// Error when a service key has no bound provider.
#[derive(Debug)]
pub struct NotRegisteredError {
    /// The key that was requested.
    pub requested: ServiceKey,
    /// Keys that ARE bound and look similar (for "did you mean?" hints).
    pub suggestions: Vec<ServiceKey>,
}

impl fmt::Display for NotRegisteredError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Service not registered: {}", self.requested)?;

        if !self.suggestions.is_empty() {
            let names: Vec<&str> = self.suggestions.iter().map(|k| k.as_str()).collect();
            write!(f, "\n  Did you mean one of: {}", render_list(&names))?;
        }

        write!(
            f,
            "\n  Hint: bind a provider named {:?} before resolving it",
            self.requested.as_str()
        )
    }
}

/// Convenient Result type for container operations.
pub type Result<T> = std::result::Result<T, ChassisError>;
