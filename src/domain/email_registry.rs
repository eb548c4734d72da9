use serde::{Deserialize, Serialize};

/// Ordered, duplicate-free list of addresses that asked to be notified.
///
/// Serialized as a plain JSON array of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailRegistry(Vec<String>);

impl EmailRegistry {
    /// Appends `email` unless an identical (case-sensitive) entry exists.
    /// Returns whether the registry changed.
    pub fn insert(&mut self, email: &str) -> bool {
        if self.contains(email) {
            return false;
        }
        self.0.push(email.to_owned());
        true
    }

    pub fn contains(&self, email: &str) -> bool {
        self.0.iter().any(|e| e == email)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl AsRef<[String]> for EmailRegistry {
    fn as_ref(&self) -> &[String] {
        &self.0
    }
}
