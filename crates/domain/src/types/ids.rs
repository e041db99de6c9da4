//! Identifier newtypes
//!
//! Collaborators own identity; the engine treats ids as opaque strings and
//! only compares them. Fresh ids (tests, in-memory stores) are UUIDv7.

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[cfg_attr(feature = "ts-gen", derive(TS))]
        #[cfg_attr(feature = "ts-gen", ts(export))]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap an existing identifier.
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Generate a fresh, time-ordered identifier.
            pub fn generate() -> Self {
                Self(uuid::Uuid::now_v7().to_string())
            }

            /// Borrow the raw identifier.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

define_id!(
    /// Identifier of a booking
    BookingId
);
define_id!(
    /// Identifier of a staff member
    StaffId
);
define_id!(
    /// Identifier of a business location
    LocationId
);
define_id!(
    /// Identifier of a customer
    CustomerId
);
define_id!(
    /// Identifier of a bookable service
    ServiceId
);
define_id!(
    /// Identifier of a time-off record
    TimeOffId
);
