//! Macro for implementing Display and FromStr for configuration enums
//!
//! Cache modes and priorities appear in configuration files and environment
//! variables as lowercase strings. This macro provides both conversions from
//! one mapping table.
//!
//! # Example
//!
//! ```rust
//! use entcache_domain::impl_domain_enum_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Tier {
//!     Hot,
//!     Cold,
//! }
//!
//! impl_domain_enum_conversions!(Tier {
//!     Hot => "hot",
//!     Cold => "cold",
//! });
//!
//! assert_eq!(Tier::Hot.to_string(), "hot");
//! assert_eq!("COLD".parse::<Tier>(), Ok(Tier::Cold));
//! ```

/// Implements Display and FromStr traits for configuration enums
///
/// This macro generates:
/// - Display trait: converts enum variants to their configured strings
/// - FromStr trait: parses case-insensitive strings to enum variants
///
/// Parsing trims surrounding whitespace so values read from environment
/// variables do not need to be cleaned up by the caller.
#[macro_export]
macro_rules! impl_domain_enum_conversions {
    ($enum_name:ident { $($variant:ident => $str:literal),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TestMode {
        Entity,
        SerializedString,
    }

    impl_domain_enum_conversions!(TestMode {
        Entity => "entity",
        SerializedString => "serialized_string",
    });

    #[test]
    fn test_display_conversion() {
        assert_eq!(TestMode::Entity.to_string(), "entity");
        assert_eq!(TestMode::SerializedString.to_string(), "serialized_string");
    }

    #[test]
    fn test_fromstr_is_case_insensitive() {
        assert_eq!(TestMode::from_str("ENTITY").unwrap(), TestMode::Entity);
        assert_eq!(TestMode::from_str("Serialized_String").unwrap(), TestMode::SerializedString);
    }

    #[test]
    fn test_fromstr_trims_whitespace() {
        assert_eq!(TestMode::from_str("  entity\n").unwrap(), TestMode::Entity);
    }

    #[test]
    fn test_fromstr_invalid() {
        let result = TestMode::from_str("blob");
        assert!(result.unwrap_err().contains("Invalid TestMode: blob"));
        assert!(TestMode::from_str("").is_err());
    }
}
