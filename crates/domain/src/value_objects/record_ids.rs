//! Numeric identifiers of the fetched records
//!
//! Producers accept these ids without checking that they refer to anything;
//! the simulated source has no backing store.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Wrap a raw numeric id
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            /// Get the raw numeric id
            pub const fn value(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }
    };
}

record_id!(
    /// Identifier of a user profile
    ProfileId
);

record_id!(
    /// Identifier of a post
    PostId
);

record_id!(
    /// Identifier of a comment
    CommentId
);
