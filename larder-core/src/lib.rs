//! Larder Core Library
//!
//! Grocery list and meal plan state, persisted as whole JSON documents in a
//! string-keyed store.

mod document;
pub mod date_key;
pub mod error;
pub mod grocery;
pub mod models;
pub mod planner;
pub mod store;
pub mod view;

pub use date_key::DateKey;
pub use error::PersistError;
pub use grocery::GroceryListManager;
pub use models::{Category, CategoryGroup, DayMeals, GroceryItem, GroceryList, MealPlan, MealType};
pub use planner::MealPlanManager;
pub use store::{
    FileStore, KeyValueStore, MemoryStore, StoreError, GROCERY_ITEMS_KEY, MEAL_PLAN_KEY,
};
pub use view::{day_plans, expand_range, week_start, DayPlan, MealSlot, ViewMode};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
