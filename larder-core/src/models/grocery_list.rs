//! The grocery list as an ordered, in-memory collection.
//!
//! Items keep insertion order. Deleting an item never reorders the rest.
//! Ids stay unique within the list and are never handed out twice: each new
//! id is above every numeric id the list has issued or loaded.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::{Category, GroceryItem};

/// Ordered collection of grocery items.
///
/// Serializes as a plain JSON array of items.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroceryList {
    items: Vec<GroceryItem>,
    /// Highest id issued by this list, kept across deletes and clears.
    #[serde(skip)]
    last_issued: Option<i64>,
}

impl PartialEq for GroceryList {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl Eq for GroceryList {}

/// Items of one category, in list order.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryGroup<'a> {
    pub category: Category,
    pub items: Vec<&'a GroceryItem>,
}

impl GroceryList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[GroceryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Find an item by id.
    pub fn get(&self, id: &str) -> Option<&GroceryItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Append an item stamped with the current time.
    ///
    /// Returns `None` without touching the list when the trimmed name is empty.
    pub fn add(&mut self, name: &str, category: Category) -> Option<&GroceryItem> {
        self.add_at(name, category, Utc::now().timestamp_millis())
    }

    /// Append an item whose id is derived from `now_millis`.
    ///
    /// If `now_millis` is not above every id issued so far (or held by the
    /// list), the id is one past the highest of those instead.
    pub fn add_at(
        &mut self,
        name: &str,
        category: Category,
        now_millis: i64,
    ) -> Option<&GroceryItem> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        let id = self.next_id(now_millis);
        self.items.push(GroceryItem::new(id, name, category));
        self.items.last()
    }

    /// Flip `completed` on the matching item.
    /// Returns true if an item was found.
    pub fn toggle(&mut self, id: &str) -> bool {
        match self.items.iter_mut().find(|i| i.id == id) {
            Some(item) => {
                item.completed = !item.completed;
                true
            }
            None => false,
        }
    }

    /// Remove the matching item.
    /// Returns true if an item was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| i.id != id);
        self.items.len() != len_before
    }

    /// Remove all items.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// One group per category in display order, empty groups included.
    pub fn group_by_category(&self) -> Vec<CategoryGroup<'_>> {
        Category::ALL
            .iter()
            .map(|&category| CategoryGroup {
                category,
                items: self
                    .items
                    .iter()
                    .filter(|i| i.category == category)
                    .collect(),
            })
            .collect()
    }

    fn next_id(&mut self, now_millis: i64) -> String {
        let highest = self
            .items
            .iter()
            .filter_map(|i| i.id.parse::<i64>().ok())
            .chain(self.last_issued)
            .max();
        let id = match highest {
            Some(h) => now_millis.max(h.saturating_add(1)),
            None => now_millis,
        };
        self.last_issued = Some(id);
        id.to_string()
    }
}
