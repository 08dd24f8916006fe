use serde::{Deserialize, Serialize};
use std::fmt;

use super::Category;

/// A single entry on the grocery list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroceryItem {
    /// Opaque id derived from the creation time in milliseconds
    pub id: String,
    /// Trimmed, non-empty item name
    pub name: String,
    pub category: Category,
    /// Whether the item has been picked up
    pub completed: bool,
}

impl GroceryItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: Category) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            completed: false,
        }
    }
}

impl fmt::Display for GroceryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let check = if self.completed { "[x]" } else { "[ ]" };
        write!(f, "{} {}", check, self.name)
    }
}
