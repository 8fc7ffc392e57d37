//! Domain identifier types with proper encapsulation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Store identifier (`sid` in the relational store).
///
/// The inner String is private to ensure all construction goes through
/// the defined constructors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StoreId(String);

impl StoreId {
    /// Create a new `StoreId` from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the store ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for StoreId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for StoreId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Product identifier (`pid` in the relational store).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(String);

impl ProductId {
    /// Create a new `ProductId` from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the product ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Manager identifier (`_id` in the document store, `mgrid` on a store row).
///
/// Construction does not enforce the four-character rule; that is a
/// validation concern reported back to the user, not a parse failure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ManagerId(String);

impl ManagerId {
    /// Create a new `ManagerId` from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the manager ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    /// True when the identifier is the empty string.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ManagerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ManagerId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for ManagerId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_id_new_and_as_str() {
        let id = StoreId::new("PP-7");
        assert_eq!(id.as_str(), "PP-7");
    }

    #[test]
    fn product_id_from_string() {
        let id = ProductId::from("AA-9".to_string());
        assert_eq!(id.as_str(), "AA-9");
        assert_eq!(id.to_string(), "AA-9");
    }

    #[test]
    fn manager_id_len_counts_characters() {
        assert_eq!(ManagerId::new("M001").len(), 4);
        assert_eq!(ManagerId::new("Mé01").len(), 4);
        assert!(ManagerId::new("").is_empty());
    }

    #[test]
    fn manager_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&ManagerId::new("M002")).unwrap();
        assert_eq!(json, "\"M002\"");
    }
}
