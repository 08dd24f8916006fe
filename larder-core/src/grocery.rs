//! Grocery list state backed by a key-value store.
//!
//! Every mutation updates the in-memory list first and then rewrites the
//! whole `groceryItems` document. A failed write is returned to the caller
//! and the in-memory list keeps the change, so the two can diverge until
//! the next successful write.

use crate::document::{load_json, save_json};
use crate::error::PersistError;
use crate::models::{Category, CategoryGroup, GroceryItem, GroceryList};
use crate::store::{KeyValueStore, GROCERY_ITEMS_KEY};

/// Owns the grocery list and keeps the store in step with it.
pub struct GroceryListManager<S> {
    store: S,
    list: GroceryList,
}

impl<S: KeyValueStore> GroceryListManager<S> {
    /// Creates a manager with an empty list. Call [`load`](Self::load) to read stored items.
    pub fn new(store: S) -> Self {
        Self {
            store,
            list: GroceryList::new(),
        }
    }

    /// Returns the backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Replace the in-memory list with the stored one.
    ///
    /// A missing document loads as an empty list. On error the current
    /// list is left untouched.
    pub async fn load(&mut self) -> Result<(), PersistError> {
        self.list = load_json(&self.store, GROCERY_ITEMS_KEY)
            .await?
            .unwrap_or_default();
        tracing::debug!(items = self.list.len(), "loaded grocery list");
        Ok(())
    }

    pub fn list(&self) -> &GroceryList {
        &self.list
    }

    pub fn items(&self) -> &[GroceryItem] {
        self.list.items()
    }

    pub fn group_by_category(&self) -> Vec<CategoryGroup<'_>> {
        self.list.group_by_category()
    }

    /// Add an item and persist.
    ///
    /// A blank name changes nothing and writes nothing; `Ok(None)` is returned.
    pub async fn add(
        &mut self,
        name: &str,
        category: Category,
    ) -> Result<Option<GroceryItem>, PersistError> {
        let item = match self.list.add(name, category) {
            Some(item) => item.clone(),
            None => return Ok(None),
        };
        self.persist().await?;
        Ok(Some(item))
    }

    /// Flip an item's completed flag and persist.
    ///
    /// An unknown id is not an error. Returns whether an item matched.
    pub async fn toggle(&mut self, id: &str) -> Result<bool, PersistError> {
        let found = self.list.toggle(id);
        self.persist().await?;
        Ok(found)
    }

    /// Remove an item and persist.
    ///
    /// An unknown id is not an error. Returns whether an item was removed.
    pub async fn delete(&mut self, id: &str) -> Result<bool, PersistError> {
        let removed = self.list.remove(id);
        self.persist().await?;
        Ok(removed)
    }

    /// Empty the list and persist, overwriting whatever is stored.
    pub async fn reset(&mut self) -> Result<(), PersistError> {
        self.list.clear();
        self.persist().await
    }

    async fn persist(&self) -> Result<(), PersistError> {
        save_json(&self.store, GROCERY_ITEMS_KEY, &self.list).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::failing::FailingStore;
    use crate::store::{FileStore, MemoryStore};
    use tempfile::TempDir;

    async fn stored_list<S: KeyValueStore>(store: &S) -> GroceryList {
        let json = store.get_item(GROCERY_ITEMS_KEY).await.unwrap().unwrap();
        serde_json::from_str(&json).unwrap()
    }

    #[tokio::test]
    async fn test_load_missing_document_is_empty() {
        let mut manager = GroceryListManager::new(MemoryStore::new());
        manager.load().await.unwrap();
        assert!(manager.items().is_empty());
    }

    #[tokio::test]
    async fn test_load_existing_document() {
        let store = MemoryStore::with_item(
            GROCERY_ITEMS_KEY,
            r#"[{"id":"1","name":"Kale","category":"produce","completed":true}]"#,
        );
        let mut manager = GroceryListManager::new(store);
        manager.load().await.unwrap();

        assert_eq!(manager.items().len(), 1);
        assert_eq!(manager.items()[0].name, "Kale");
        assert!(manager.items()[0].completed);
    }

    #[tokio::test]
    async fn test_load_malformed_leaves_state() {
        let store = FailingStore::new();
        let mut manager = GroceryListManager::new(store);
        manager.add("Milk", Category::Dairy).await.unwrap();

        manager
            .store()
            .set_item(GROCERY_ITEMS_KEY, r#"[{"id":"1","name":"x","category":"bakery"}]"#)
            .await
            .unwrap();

        let err = manager.load().await.unwrap_err();
        assert!(err.is_corrupt_document());
        assert_eq!(manager.items().len(), 1);
        assert_eq!(manager.items()[0].name, "Milk");
    }

    #[tokio::test]
    async fn test_load_read_failure() {
        let store = FailingStore::new();
        store.fail_reads(true);
        let mut manager = GroceryListManager::new(store);

        let err = manager.load().await.unwrap_err();
        assert!(matches!(err, PersistError::StorageRead(_)));
        assert!(manager.items().is_empty());
    }

    #[tokio::test]
    async fn test_add_persists_whole_list() {
        let mut manager = GroceryListManager::new(MemoryStore::new());
        manager.add("Apples", Category::Produce).await.unwrap();
        manager.add("Peas", Category::Frozen).await.unwrap();

        let stored = stored_list(manager.store()).await;
        assert_eq!(&stored, manager.list());
        assert_eq!(stored.len(), 2);
    }

    #[tokio::test]
    async fn test_add_blank_writes_nothing() {
        let mut manager = GroceryListManager::new(MemoryStore::new());
        assert!(manager.add("", Category::Produce).await.unwrap().is_none());
        assert!(manager.add("   ", Category::Meat).await.unwrap().is_none());

        assert!(manager.items().is_empty());
        assert_eq!(manager.store().get_item(GROCERY_ITEMS_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_toggle_twice_restores_completed() {
        let mut manager = GroceryListManager::new(MemoryStore::new());
        let item = manager.add("Rice", Category::Pantry).await.unwrap().unwrap();

        assert!(manager.toggle(&item.id).await.unwrap());
        assert!(stored_list(manager.store()).await.items()[0].completed);

        assert!(manager.toggle(&item.id).await.unwrap());
        assert!(!manager.items()[0].completed);
        assert!(!stored_list(manager.store()).await.items()[0].completed);
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_noop() {
        let mut manager = GroceryListManager::new(MemoryStore::new());
        manager.add("Rice", Category::Pantry).await.unwrap();
        let before = manager.list().clone();

        assert!(!manager.delete("does-not-exist").await.unwrap());
        assert_eq!(manager.list(), &before);
    }

    #[tokio::test]
    async fn test_delete_removes_item() {
        let mut manager = GroceryListManager::new(MemoryStore::new());
        let item = manager.add("Beef", Category::Meat).await.unwrap().unwrap();

        assert!(manager.delete(&item.id).await.unwrap());
        assert!(manager.items().is_empty());
        assert!(stored_list(manager.store()).await.is_empty());
    }

    #[tokio::test]
    async fn test_write_failure_keeps_optimistic_update() {
        let mut manager = GroceryListManager::new(FailingStore::new());
        manager.store().fail_writes(true);

        let err = manager.add("Cheese", Category::Dairy).await.unwrap_err();
        assert!(matches!(err, PersistError::StorageWrite(_)));
        assert_eq!(manager.items().len(), 1);

        manager.store().fail_writes(false);
        assert_eq!(manager.store().get_item(GROCERY_ITEMS_KEY).await.unwrap(), None);

        // the next successful write catches the store up
        let id = manager.items()[0].id.clone();
        manager.toggle(&id).await.unwrap();
        assert_eq!(stored_list(manager.store()).await.len(), 1);
    }

    #[tokio::test]
    async fn test_reset_overwrites_corrupt_document() {
        let store = MemoryStore::with_item(GROCERY_ITEMS_KEY, "not json");
        let mut manager = GroceryListManager::new(store);
        assert!(manager.load().await.is_err());

        manager.reset().await.unwrap();
        assert!(stored_list(manager.store()).await.is_empty());
        manager.load().await.unwrap();
    }

    #[tokio::test]
    async fn test_empty_file_loads_as_empty_list() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path());
        std::fs::write(store.path(GROCERY_ITEMS_KEY), "").unwrap();

        let mut manager = GroceryListManager::new(store);
        manager.load().await.unwrap();
        assert!(manager.items().is_empty());

        manager.add("Apples", Category::Produce).await.unwrap();
        let mut reloaded = GroceryListManager::new(FileStore::new(temp_dir.path()));
        reloaded.load().await.unwrap();
        assert_eq!(reloaded.items().len(), 1);
    }

    #[tokio::test]
    async fn test_survives_reload_from_disk() {
        let temp_dir = TempDir::new().unwrap();

        let mut manager = GroceryListManager::new(FileStore::new(temp_dir.path()));
        manager.add("Apples", Category::Produce).await.unwrap();
        let milk = manager.add("Milk", Category::Dairy).await.unwrap().unwrap();
        manager.add("Peas", Category::Frozen).await.unwrap();
        manager.toggle(&milk.id).await.unwrap();
        let expected = manager.list().clone();

        let mut reloaded = GroceryListManager::new(FileStore::new(temp_dir.path()));
        reloaded.load().await.unwrap();
        assert_eq!(reloaded.list(), &expected);

        let groups = reloaded.group_by_category();
        assert_eq!(groups[1].category, Category::Dairy);
        assert!(groups[1].items[0].completed);
    }
}
