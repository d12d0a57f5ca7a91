//! Group Catalog - The closed, ordered set of recognized group names.

use crate::domain::foundation::{GroupName, ValidationError};

/// Groups recognized when no configuration overrides them.
pub const DEFAULT_GROUPS: &[&str] = &[
    "dimensions",
    "technical",
    "economic",
    "social",
    "environmental",
];

/// Ordered list of recognized groups; evaluation visits them in this order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupCatalog {
    groups: Vec<GroupName>,
}

impl GroupCatalog {
    /// Creates a catalog from names, dropping repeats but keeping first-seen order.
    ///
    /// # Errors
    /// - Any blank name
    /// - No names at all
    pub fn new<I, S>(names: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut groups: Vec<GroupName> = Vec::new();
        for name in names {
            let name = GroupName::new(name)?;
            if !groups.contains(&name) {
                groups.push(name);
            }
        }

        if groups.is_empty() {
            return Err(ValidationError::empty_field("groups"));
        }

        Ok(Self { groups })
    }

    /// Iterates recognized groups in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = &GroupName> {
        self.groups.iter()
    }

    /// Returns true if `name` is a recognized group.
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Position of a group in evaluation order.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.groups.iter().position(|g| g.as_str() == name)
    }

    /// Number of recognized groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Always false; a catalog holds at least one group.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl Default for GroupCatalog {
    fn default() -> Self {
        Self {
            groups: DEFAULT_GROUPS
                .iter()
                .map(|name| GroupName::new(*name).expect("default group names are non-empty"))
                .collect(),
        }
    }
}
