#![deny(unsafe_code)]

use std::fmt;

/// Identifier of a node, used as parent reference and edge endpoint.
///
/// Source records carry identifiers as either text or integers; both forms
/// stay distinct (`Text("1")` and `Int(1)` are different keys) and serialize
/// as the bare scalar they came from.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Ident {
    Text(String),
    Int(i64),
}

impl Ident {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn int(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for Ident {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Ident {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for Ident {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(value) => f.write_str(value),
            Self::Int(value) => write!(f, "{value}"),
        }
    }
}

impl serde::Serialize for Ident {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Text(value) => serializer.serialize_str(value),
            Self::Int(value) => serializer.serialize_i64(*value),
        }
    }
}

impl<'de> serde::Deserialize<'de> for Ident {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct IdentVisitor;

        impl serde::de::Visitor<'_> for IdentVisitor {
            type Value = Ident;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string or integer identifier")
            }

            fn visit_str<E: serde::de::Error>(self, value: &str) -> Result<Ident, E> {
                Ok(Ident::Text(value.to_string()))
            }

            fn visit_string<E: serde::de::Error>(self, value: String) -> Result<Ident, E> {
                Ok(Ident::Text(value))
            }

            fn visit_i64<E: serde::de::Error>(self, value: i64) -> Result<Ident, E> {
                Ok(Ident::Int(value))
            }

            fn visit_u64<E: serde::de::Error>(self, value: u64) -> Result<Ident, E> {
                i64::try_from(value)
                    .map(Ident::Int)
                    .map_err(|_| E::custom("integer identifier out of range"))
            }
        }

        deserializer.deserialize_any(IdentVisitor)
    }
}
