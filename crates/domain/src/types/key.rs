//! Cache key

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::constants::KEY_VERSION_SEPARATOR;
use crate::utils::eq_ignore_case;
use crate::utils::ident::hash_ignore_case;

/// Key identifying a (possibly versioned) entity inside a cache region.
///
/// The key is the entity id, followed by `-{version}` when a version is
/// known. Equality and hashing ignore case, matching entity id identity.
#[derive(Debug, Clone, Eq)]
pub struct CacheKey(String);

impl CacheKey {
    pub fn new(entity_id: &str, version: Option<i32>) -> Self {
        match version {
            Some(version) => Self(format!("{entity_id}{KEY_VERSION_SEPARATOR}{version}")),
            None => Self(entity_id.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lower-cased form, for backends whose own keys are case-sensitive.
    pub fn normalized(&self) -> String {
        self.0.to_lowercase()
    }
}

impl PartialEq for CacheKey {
    fn eq(&self, other: &Self) -> bool {
        eq_ignore_case(&self.0, &other.0)
    }
}

impl Hash for CacheKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_ignore_case(&self.0, state);
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CacheKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
