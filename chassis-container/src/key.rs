//! Service identification keys.
//!
//! [`ServiceKey`] uniquely identifies a bound service within the container.
//! A key is a plain string under the hood, cheap to clone and hash.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// Uniquely identifies a service in the container.
///
/// Every provider supplies its key via `ServiceProvider::name`, and all
/// lookups (`make`, `is_bound`, ...) address services through the same key.
///
/// # Examples
/// ```
/// use chassis_container::key::ServiceKey;
///
/// let key = ServiceKey::new("logger");
/// assert_eq!(key.as_str(), "logger");
/// assert_eq!(key, "logger");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ServiceKey(Arc<str>);

impl ServiceKey {
    /// Creates a key from any string-like value.
    #[inline]
    pub fn new(key: impl AsRef<str>) -> Self {
        Self(Arc::from(key.as_ref()))
    }

    /// Returns the key as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ServiceKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for ServiceKey {
    fn from(key: String) -> Self {
        Self(Arc::from(key))
    }
}

// Borrow lets `HashMap<ServiceKey, _>` be queried with a plain `&str`.
// Sound because the derived Hash/Eq of `Arc<str>` delegate to the `str`.
impl Borrow<str> for ServiceKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ServiceKey {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for ServiceKey {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Debug for ServiceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ServiceKey({:?})", &*self.0)
    }
}

impl fmt::Display for ServiceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_roundtrip() {
        let key = ServiceKey::new("database");
        assert_eq!(key.as_str(), "database");
        assert_eq!(key.to_string(), "database");
    }

    #[test]
    fn key_equality() {
        assert_eq!(ServiceKey::new("logger"), ServiceKey::new("logger"));
        assert_ne!(ServiceKey::new("logger"), ServiceKey::new("cache"));
        assert_eq!(ServiceKey::new("logger"), "logger");
    }

    #[test]
    fn key_from_owned_and_borrowed() {
        assert_eq!(
            ServiceKey::from("conn"),
            ServiceKey::from(String::from("conn"))
        );
    }

    #[test]
    fn key_in_hashmap_by_str() {
        use std::collections::HashMap;
        let mut map = HashMap::new();
        map.insert(ServiceKey::new("logger"), 1);
        map.insert(ServiceKey::new("cache"), 2);
        assert_eq!(map.get("logger"), Some(&1));
        assert_eq!(map.get("missing"), None);
    }

    #[test]
    fn key_debug_quotes_name() {
        let key = ServiceKey::new("conn");
        assert_eq!(format!("{key:?}"), "ServiceKey(\"conn\")");
    }
}
