//! Macro for implementing Display and FromStr for status enums
//!
//! This macro eliminates boilerplate for status enum conversions by providing
//! a single implementation for both Display and FromStr traits. It handles
//! case-insensitive parsing and consistent string representation.
//!
//! # Example
//!
//! ```rust
//! use slotwise_domain::impl_domain_status_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum ReminderState {
//!     Scheduled,
//!     Sent,
//!     Skipped,
//! }
//!
//! impl_domain_status_conversions!(ReminderState {
//!     Scheduled => "scheduled",
//!     Sent => "sent",
//!     Skipped => "skipped",
//! });
//! ```

/// Implements Display and FromStr traits for status enums
///
/// This macro generates:
/// - Display trait: converts enum variants to lowercase strings
/// - FromStr trait: parses case-insensitive strings to enum variants
///
/// # Arguments
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str` - Mapping of enum variants to their string
///   representations
///
/// # Features
///
/// - Case-insensitive parsing (e.g., "PENDING", "pending", "Pending" all work)
/// - Consistent lowercase string output
/// - Descriptive error messages with enum name
#[macro_export]
macro_rules! impl_domain_status_conversions {
    ($enum_name:ident { $($variant:ident => $str:literal),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => write!(f, $str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                match s.to_lowercase().as_str() {
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
    enum ReminderState {
        Scheduled,
        Sent,
        Skipped,
    }

    impl_domain_status_conversions!(ReminderState {
        Scheduled => "scheduled",
        Sent => "sent",
        Skipped => "skipped",
    });

    #[test]
    fn display_is_lowercase() {
        assert_eq!(ReminderState::Scheduled.to_string(), "scheduled");
        assert_eq!(ReminderState::Skipped.to_string(), "skipped");
    }

    #[test]
    fn parsing_ignores_case() {
        assert_eq!(ReminderState::from_str("SENT").unwrap(), ReminderState::Sent);
        assert_eq!(ReminderState::from_str("Scheduled").unwrap(), ReminderState::Scheduled);
    }

    #[test]
    fn unknown_values_name_the_enum() {
        let err = ReminderState::from_str("bounced").unwrap_err();
        assert!(err.contains("Invalid ReminderState: bounced"));
        assert!(ReminderState::from_str("").is_err());
    }
}
