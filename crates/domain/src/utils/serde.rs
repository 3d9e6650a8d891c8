//! Serialization utilities for configuration types

/// Serialize an optional `Duration` as whole seconds.
///
/// Configuration files express expirations in seconds; `None` is written as
/// `null` and a missing field deserializes to `None` when combined with
/// `#[serde(default)]`.
///
/// # Usage
/// ```rust
/// use std::time::Duration;
///
/// use entcache_domain::utils::serde::option_duration_secs;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Example {
///     #[serde(default, with = "option_duration_secs")]
///     ttl: Option<Duration>,
/// }
/// ```
pub mod option_duration_secs {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    /// Serde serialization result type
    type SerializeResult<S> = Result<<S as Serializer>::Ok, <S as Serializer>::Error>;

    /// Serialize an optional Duration as seconds (u64)
    pub fn serialize<S>(duration: &Option<Duration>, serializer: S) -> SerializeResult<S>
    where
        S: Serializer,
    {
        match duration {
            Some(duration) => serializer.serialize_some(&duration.as_secs()),
            None => serializer.serialize_none(),
        }
    }

    /// Deserialize optional seconds (u64) into a Duration
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<u64>::deserialize(deserializer)?.map(Duration::from_secs))
    }
}
