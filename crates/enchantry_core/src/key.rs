//! # Namespaced Keys
//!
//! Identifiers for item types, tags and enchantments, written
//! `namespace:path`. Keys without a namespace belong to `minecraft`.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// The namespace used when none is given.
pub const DEFAULT_NAMESPACE: &str = "minecraft";

/// A namespaced identifier.
///
/// Ordering is lexicographic by namespace, then path. All iteration over
/// enchantment maps follows this order, which keeps rule evaluation
/// deterministic.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Key {
    namespace: Cow<'static, str>,
    path: Cow<'static, str>,
}

impl Key {
    /// Creates a key in the default namespace. Usable in `const` items.
    #[inline]
    #[must_use]
    pub const fn minecraft(path: &'static str) -> Self {
        Self {
            namespace: Cow::Borrowed(DEFAULT_NAMESPACE),
            path: Cow::Borrowed(path),
        }
    }

    /// Creates a key from a namespace and path, validating both.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidKey`] if either part is empty or contains
    /// characters outside `[a-z0-9_.-]` (`/` is also allowed in paths).
    pub fn new(namespace: impl Into<String>, path: impl Into<String>) -> CoreResult<Self> {
        let namespace = namespace.into();
        let path = path.into();
        let display = format!("{namespace}:{path}");

        if namespace.is_empty() || path.is_empty() {
            return Err(CoreError::InvalidKey {
                key: display,
                reason: "namespace and path must be non-empty",
            });
        }
        if !namespace.chars().all(is_namespace_char) {
            return Err(CoreError::InvalidKey {
                key: display,
                reason: "namespace contains illegal characters",
            });
        }
        if !path.chars().all(|c| is_namespace_char(c) || c == '/') {
            return Err(CoreError::InvalidKey {
                key: display,
                reason: "path contains illegal characters",
            });
        }

        Ok(Self {
            namespace: Cow::Owned(namespace),
            path: Cow::Owned(path),
        })
    }

    /// The namespace part.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The path part.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }
}

fn is_namespace_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '_' | '-' | '.')
}

impl FromStr for Key {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        match s.split_once(':') {
            Some((namespace, path)) => Self::new(namespace, path),
            None => Self::new(DEFAULT_NAMESPACE, s),
        }
    }
}

impl TryFrom<String> for Key {
    type Error = CoreError;

    fn try_from(value: String) -> CoreResult<Self> {
        value.parse()
    }
}

impl From<Key> for String {
    fn from(key: Key) -> Self {
        key.to_string()
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Key({self})")
    }
}
