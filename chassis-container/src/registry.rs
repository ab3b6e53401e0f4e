//! Service registry — backing storage for the container.
//!
//! Two maps keyed by [`ServiceKey`]: the bound providers and the cached
//! singleton instances. The registry does no locking of its own; the
//! container wraps it in a reader/writer lock.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::key::ServiceKey;
use crate::provider::{ServiceInstance, ServiceProvider};

/// Stores bound providers and cached singleton instances.
///
/// Invariant: a key appears in `instances` only after the same key was
/// present in `providers` at the time the instance was created. Cached
/// instances are never evicted; a later eager bind may overwrite one.
#[derive(Default)]
pub(crate) struct Registry {
    providers: HashMap<ServiceKey, Arc<dyn ServiceProvider>>,
    instances: HashMap<ServiceKey, ServiceInstance>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a provider under its own key; the last bind wins.
    ///
    /// Replacing a provider leaves any previously cached instance in
    /// place; it stays visible to `make` until an eager bind for the
    /// same key overwrites it.
    pub fn install(&mut self, provider: Arc<dyn ServiceProvider>) -> ServiceKey {
        let key = provider.name();
        if self.providers.insert(key.clone(), provider).is_some() {
            debug!(key = %key, "Replaced provider");
        } else {
            debug!(key = %key, "Installed provider");
        }
        key
    }

    /// Looks up the bound provider for a key.
    pub fn provider(&self, key: &str) -> Option<&Arc<dyn ServiceProvider>> {
        self.providers.get(key)
    }

    /// Looks up the cached singleton instance for a key.
    pub fn instance(&self, key: &str) -> Option<&ServiceInstance> {
        self.instances.get(key)
    }

    /// Returns `true` if a provider is bound under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.providers.contains_key(key)
    }

    /// Caches an instance, overwriting any previous one.
    ///
    /// Used by the eager bind path, where the fresh instance must win.
    pub fn store(&mut self, key: ServiceKey, instance: ServiceInstance) {
        self.instances.insert(key, instance);
    }

    /// Publishes a lazily built instance.
    ///
    /// The first successful instantiation wins: if another caller raced
    /// ahead and already cached an instance, that one is returned and the
    /// argument is dropped.
    pub fn publish(&mut self, key: ServiceKey, instance: ServiceInstance) -> ServiceInstance {
        self.instances.entry(key).or_insert(instance).clone()
    }

    /// Returns all bound provider keys, in no guaranteed order.
    pub fn keys(&self) -> Vec<ServiceKey> {
        self.providers.keys().cloned().collect()
    }

    /// Returns the number of bound providers.
    pub fn len(&self) -> usize {
        self.providers.len()
    }
}
