//! Provider trait — describes how to build one named service.
//!
//! A provider bundles a service's key, its deferral policy, a setup hook,
//! the default factory arguments and the factory itself. The container
//! drives the boot → params → factory pipeline on every instantiation
//! attempt.
//!
//! # Examples
//! ```rust,ignore
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
//!         Box::new(|_params| Ok(Arc::new(ConsoleLogger) as ServiceInstance))
//!     }
//! }
//! ```

use std::any::Any;
use std::sync::Arc;

use crate::container::Container;
use crate::key::ServiceKey;

/// Boxed error returned by provider hooks and factories.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A resolved service instance: shared and type-erased.
///
/// Consumers either keep the erased handle or downcast through
/// `Container::resolve`.
pub type ServiceInstance = Arc<dyn Any + Send + Sync>;

/// Argument list consumed by a [`ServiceFactory`].
pub type ServiceParams = Vec<Box<dyn Any + Send>>;

/// Factory for one instantiation attempt, as returned by
/// [`ServiceProvider::register`]. Invoked once with the chosen parameters.
pub type ServiceFactory =
    Box<dyn FnOnce(ServiceParams) -> Result<ServiceInstance, BoxError> + Send>;

/// A registrable service: how to build one named instance.
///
/// This is the contract the container binds and resolves. Implementations
/// are handed to `Container::bind` during application setup and live for
/// the container's lifetime unless replaced by a later bind under the
/// same key.
pub trait ServiceProvider: Send + Sync {
    /// Stable unique key; used for all lookups.
    fn name(&self) -> ServiceKey;

    /// When `false`, the container instantiates the service immediately
    /// at bind time; when `true`, instantiation waits for the first
    /// resolution.
    fn deferred(&self) -> bool;

    /// Setup hook, run before parameters and factory on every
    /// instantiation attempt. A failure aborts the attempt and leaves
    /// nothing cached.
    fn boot(&self, _container: &Container) -> Result<(), BoxError> {
        Ok(())
    }

    /// Default factory arguments, consulted only when the caller did not
    /// supply an explicit list.
    fn params(&self, _container: &Container) -> ServiceParams {
        ServiceParams::new()
    }

    /// Returns the factory for one instantiation attempt.
    ///
    /// The provider may capture container-resolved dependencies in the
    /// returned closure; the container holds no lock while it runs.
    fn register(&self, container: &Container) -> ServiceFactory;
}
