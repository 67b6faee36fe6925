//! Type-safe identifier wrappers around [`Uuid`].
//!
//! Every entity in the recognition pipeline has a strongly-typed ID to
//! prevent accidental mixing of identifiers at compile time. All IDs use
//! UUID v7 (time-ordered); ids are caller-generated at entity creation
//! and must be unique.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Generates a newtype wrapper around [`Uuid`] with standard derives.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Create a new identifier using UUID v7 (time-ordered).
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Return the inner [`Uuid`] value.
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                Self(id)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl core::str::FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.parse::<Uuid>()?))
            }
        }
    };
}

define_id! {
    /// Unique identifier for a single recognition attempt.
    RecognitionId
}

define_id! {
    /// Identifier of the owner partitioning events and day aggregates.
    ///
    /// All store indexes and aggregates are scoped to exactly one owner;
    /// there is no cross-owner sharing.
    OwnerId
}

define_id! {
    /// Unique identifier for the subject user of a recognition.
    UserId
}

define_id! {
    /// Unique identifier for the application that submitted a recognition.
    AppId
}

define_id! {
    /// Unique identifier for a submitted document.
    DocumentId
}
