//! `Id`: the opaque identifier used for nodes and edges
//!
//! Node ids and edge ids live in independent namespaces; the same literal may
//! be a node id in one place and an edge id in another. An `Id` is either an
//! integer or a string. Integers are what the edge counter hands out; strings
//! are there for callers that carry their own labels.
//!
//! This module provides:
//! - The `Id` enum with total ordering and hashing, so it works as a map key.
//! - `From` conversions from the primitive integer types and strings.
//! - `Display`/`Debug` that print the raw value (strings quoted in `Debug`).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a node or an edge.
///
/// Integers order before strings; within a variant the natural order applies.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    Int(i64),
    Str(String),
}

impl Id {
    /// Returns the integer value, if this is an integer id.
    #[inline]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Id::Int(v) => Some(*v),
            Id::Str(_) => None,
        }
    }

    /// Returns the string value, if this is a string id.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Id::Int(_) => None,
            Id::Str(s) => Some(s.as_str()),
        }
    }
}

// -----------------------------------------------------------------------------
// Formatting traits
// -----------------------------------------------------------------------------

/// Prints integers bare and strings quoted, so mixed id sets stay readable.
impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::Int(v) => write!(f, "{v}"),
            Id::Str(s) => write!(f, "{s:?}"),
        }
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::Int(v) => write!(f, "{v}"),
            Id::Str(s) => f.write_str(s),
        }
    }
}

// -----------------------------------------------------------------------------
// Conversions
// -----------------------------------------------------------------------------

macro_rules! id_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Id {
                #[inline]
                fn from(v: $t) -> Self {
                    Id::Int(i64::from(v))
                }
            }
        )*
    };
}

id_from_int!(i8, i16, i32, i64, u8, u16, u32);

/// Unsigned values beyond `i64::MAX` keep their digits as a string id
/// rather than wrapping to a negative integer.
macro_rules! id_from_wide_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Id {
                #[inline]
                fn from(v: $t) -> Self {
                    i64::try_from(v).map_or_else(|_| Id::Str(v.to_string()), Id::Int)
                }
            }
        )*
    };
}

id_from_wide_unsigned!(u64, usize);

impl From<&str> for Id {
    fn from(s: &str) -> Self {
        Id::Str(s.to_owned())
    }
}

impl From<String> for Id {
    fn from(s: String) -> Self {
        Id::Str(s)
    }
}

impl From<&String> for Id {
    fn from(s: &String) -> Self {
        Id::Str(s.clone())
    }
}

impl From<&Id> for Id {
    fn from(id: &Id) -> Self {
        id.clone()
    }
}

impl From<&Id> for serde_json::Value {
    fn from(id: &Id) -> Self {
        match id {
            Id::Int(v) => serde_json::Value::from(*v),
            Id::Str(s) => serde_json::Value::from(s.as_str()),
        }
    }
}
