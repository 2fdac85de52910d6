//! Strongly-typed ID wrappers for all entity types
//!
//! Ids are plain integers (millisecond timestamps at creation time), matching
//! the persisted record layout. Newtype wrappers prevent accidentally mixing
//! up IDs from different entity types at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Create an ID from a raw integer value
            pub fn from_raw(value: i64) -> Self {
                Self(value)
            }

            /// Candidate ID from the current Unix-millisecond timestamp
            pub fn now() -> Self {
                Self(chrono::Utc::now().timestamp_millis())
            }

            /// The ID directly after this one
            pub fn next(&self) -> Self {
                Self(self.0 + 1)
            }

            /// Get the underlying integer value
            pub fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, self.0)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                // Accept both the bare integer and the prefixed display form
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(s.parse::<i64>()?))
            }
        }
    };
}

define_id!(TransactionId, "txn-");
define_id!(GoalId, "goal-");
