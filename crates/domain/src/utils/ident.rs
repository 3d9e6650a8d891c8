//! Identifier comparison helpers
//!
//! Entity ids, entity type names and cache keys are compared without regard
//! to case everywhere in the cache layer.

use std::hash::{Hash, Hasher};

/// Compare two identifiers ignoring case.
///
/// ```
/// use entcache_domain::utils::eq_ignore_case;
///
/// assert!(eq_ignore_case("SKU-100", "sku-100"));
/// assert!(!eq_ignore_case("SKU-100", "SKU-1000"));
/// ```
#[must_use]
pub fn eq_ignore_case(left: &str, right: &str) -> bool {
    if left.is_ascii() && right.is_ascii() {
        return left.eq_ignore_ascii_case(right);
    }

    left.chars().flat_map(char::to_lowercase).eq(right.chars().flat_map(char::to_lowercase))
}

/// Feed the case-folded form of `value` into `state`.
///
/// Consistent with [`eq_ignore_case`]: identifiers that compare equal hash
/// equal.
pub fn hash_ignore_case<H: Hasher>(value: &str, state: &mut H) {
    for ch in value.chars().flat_map(char::to_lowercase) {
        ch.hash(state);
    }
}
