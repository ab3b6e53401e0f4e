//! # The service container — heart of Chassis
//!
//! A concurrent registry mapping string keys to providers, resolving them
//! to lazily built, optionally cached instances.
//!
//! # Architecture
//! ```text
//! Container::bind(provider)          eager (deferred() == false):
//!        │                           boot → params → factory → cache
//!        ▼
//! Container::make(key)               cached instance, or the same
//!        │                           pipeline with default params
//!        ▼
//! Container::make_new(key, params)   always a fresh pipeline with the
//!                                    caller's params; cache untouched
//! ```
//!
//! # Examples
//! ```rust
//! use std::sync::Arc;
//! use chassis_container::container::Container;
//! use chassis_container::key::ServiceKey;
//! use chassis_container::provider::{ServiceFactory, ServiceInstance, ServiceProvider};
//!
//! struct LoggerProvider;
//!
//! impl ServiceProvider for LoggerProvider {
//!     fn name(&self) -> ServiceKey {
//!         ServiceKey::new("logger")
//!     }
//!
//!     fn deferred(&self) -> bool {
//!         false
//!     }
//!
//!     fn register(&self, _container: &Container) -> ServiceFactory {
//!         Box::new(|_params| Ok(Arc::new(String::from("console")) as ServiceInstance))
//!     }
//! }
//!
//! let container = Container::new();
//! container.bind(LoggerProvider).expect("bind failed");
//!
//! let logger: Arc<String> = container.resolve("logger").expect("resolve failed");
//! assert_eq!(*logger, "console");
//! ```

use std::fmt;
use std::sync::Arc;

use chassis_support::rendering::suggest_similar;
use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::error::{ChassisError, NotRegisteredError, Result};
use crate::key::ServiceKey;
use crate::provider::{ServiceInstance, ServiceParams, ServiceProvider};
use crate::registry::Registry;

const MAX_SUGGESTIONS: usize = 3;

// ═══════════════════════════════════════════
// Container
// ═══════════════════════════════════════════

/// Thread-safe service container.
///
/// Construct one at process start and thread the reference (usually an
/// `Arc<Container>`) through the application explicitly; there is no
/// process-wide singleton.
///
/// The lock is never held while provider hooks or factories run, so a
/// provider may resolve other services through the container from inside
/// `boot`, `params` or its factory.
pub struct Container {
    registry: RwLock<Registry>,
}

impl Container {
    /// Creates an empty container.
    pub fn new() -> Self {
        Self {
            registry: RwLock::new(Registry::new()),
        }
    }

    /// Binds a provider under its own key, replacing any previous
    /// provider for that key (the last bind wins).
    ///
    /// A non-deferred provider is instantiated immediately: the full
    /// boot → params → factory pipeline runs and the result is cached as
    /// the singleton, overwriting any instance cached under the key. The
    /// pipeline runs outside the write lock. On pipeline failure the
    /// error is returned, but the provider mapping stays installed and a
    /// later `make` retries from scratch.
    ///
    /// Replacing a provider does NOT clear an instance cached under the
    /// previous one; `make` keeps returning the stale singleton until an
    /// eager rebind overwrites it.
    pub fn bind<P>(&self, provider: P) -> Result<()>
    where
        P: ServiceProvider + 'static,
    {
        let provider: Arc<dyn ServiceProvider> = Arc::new(provider);
        let deferred = provider.deferred();
        let key = self.registry.write().install(provider.clone());
        if deferred {
            return Ok(());
        }

        let instance = self.instantiate(&key, provider.as_ref(), None)?;
        debug!(key = %key, "Eagerly instantiated");
        self.registry.write().store(key, instance);
        Ok(())
    }

    /// Returns `true` iff a provider is currently bound under `key`.
    pub fn is_bound(&self, key: &str) -> bool {
        self.registry.read().contains(key)
    }

    /// Resolves the singleton instance for `key`.
    ///
    /// Returns the cached instance if present; otherwise runs the
    /// provider's pipeline with its default parameters, caches the result
    /// and returns it. Under concurrent first resolution the first
    /// successful instantiation wins and every caller observes the same
    /// instance.
    pub fn make(&self, key: &str) -> Result<ServiceInstance> {
        let provider = {
            let registry = self.registry.read();
            if let Some(instance) = registry.instance(key) {
                trace!(key, "Resolved from cache");
                return Ok(instance.clone());
            }
            registry.provider(key).cloned()
        };
        let provider = provider.ok_or_else(|| self.not_registered(key))?;

        let key = provider.name();
        let instance = self.instantiate(&key, provider.as_ref(), None)?;
        debug!(key = %key, "Cached singleton");
        Ok(self.registry.write().publish(key, instance))
    }

    /// Like [`make`](Container::make), but panics on error.
    ///
    /// # Panics
    /// Panics if `key` is not bound or its pipeline fails. Callers using
    /// this entry point assert the key is always registered.
    pub fn must_make(&self, key: &str) -> ServiceInstance {
        match self.make(key) {
            Ok(instance) => instance,
            Err(err) => panic!("must_make({key:?}): {err}"),
        }
    }

    /// Builds a fresh, uncached instance for `key` from the supplied
    /// parameters.
    ///
    /// Always runs the full pipeline, regardless of any cached singleton,
    /// and never writes to the cache. The caller's parameter list is used
    /// as-is; the provider's own `params()` is not consulted, even when
    /// the list is empty.
    pub fn make_new(&self, key: &str, params: ServiceParams) -> Result<ServiceInstance> {
        let provider = self.registry.read().provider(key).cloned();
        let provider = provider.ok_or_else(|| self.not_registered(key))?;
        self.instantiate(&provider.name(), provider.as_ref(), Some(params))
    }

    /// Typed resolution: [`make`](Container::make) plus a downcast.
    ///
    /// ```rust,ignore
    /// let logger: Arc<ConsoleLogger> = container.resolve("logger")?;
    /// ```
    pub fn resolve<T>(&self, key: &str) -> Result<Arc<T>>
    where
        T: Send + Sync + 'static,
    {
        let instance = self.make(key)?;
        instance
            .downcast::<T>()
            .map_err(|_| ChassisError::ConstructionFailed {
                key: ServiceKey::new(key),
                source: format!("type mismatch: expected {}", std::any::type_name::<T>())
                    .into(),
            })
    }

    /// Returns the keys of all bound providers, in no guaranteed order.
    pub fn provider_names(&self) -> Vec<ServiceKey> {
        self.registry.read().keys()
    }

    // ── Internal ──

    /// Runs boot → params → factory for a single attempt. Holds no lock,
    /// so provider hooks may re-enter the container.
    fn instantiate(
        &self,
        key: &ServiceKey,
        provider: &dyn ServiceProvider,
        params: Option<ServiceParams>,
    ) -> Result<ServiceInstance> {
        trace!(key = %key, forced = params.is_some(), "Instantiating");

        provider.boot(self).map_err(|source| ChassisError::BootFailed {
            key: key.clone(),
            source,
        })?;

        let params = match params {
            Some(params) => params,
            None => provider.params(self),
        };

        let factory = provider.register(self);
        factory(params).map_err(|source| ChassisError::ConstructionFailed {
            key: key.clone(),
            source,
        })
    }

    fn not_registered(&self, key: &str) -> ChassisError {
        let bound = self.provider_names();
        let names: Vec<&str> = bound.iter().map(|k| k.as_str()).collect();
        let suggestions = suggest_similar(key, &names, MAX_SUGGESTIONS)
            .into_iter()
            .map(ServiceKey::from)
            .collect();
        ChassisError::NotRegistered(NotRegisteredError {
            requested: ServiceKey::new(key),
            suggestions,
        })
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
            .field("bound", &self.registry.read().len())
            .finish()
    }
}

// ═══════════════════════════════════════════
// Prelude
// ═══════════════════════════════════════════

pub mod prelude {
    pub use super::Container;
    pub use crate::error::{ChassisError, Result};
    pub use crate::key::ServiceKey;
    pub use crate::provider::{
        BoxError, ServiceFactory, ServiceInstance, ServiceParams, ServiceProvider,
    };
}

// ═══════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════
