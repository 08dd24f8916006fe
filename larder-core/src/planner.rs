//! Meal plan state backed by a key-value store.
//!
//! Unlike the grocery list, an edit is written to the store before it is
//! applied in memory: if the write fails the plan is left as it was.

use chrono::NaiveDate;

use crate::date_key::DateKey;
use crate::document::{load_json, save_json};
use crate::error::PersistError;
use crate::models::{MealPlan, MealType};
use crate::store::{KeyValueStore, MEAL_PLAN_KEY};
use crate::view::{self, DayPlan, ViewMode};

/// Owns the meal plan and keeps the store in step with it.
pub struct MealPlanManager<S> {
    store: S,
    plan: MealPlan,
}

impl<S: KeyValueStore> MealPlanManager<S> {
    /// Creates a manager with an empty plan. Call [`load`](Self::load) to read the stored plan.
    pub fn new(store: S) -> Self {
        Self {
            store,
            plan: MealPlan::new(),
        }
    }

    /// Returns the backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Replace the in-memory plan with the stored one.
    ///
    /// A missing document loads as an empty plan. On error the current
    /// plan is left untouched.
    pub async fn load(&mut self) -> Result<(), PersistError> {
        self.plan = load_json(&self.store, MEAL_PLAN_KEY)
            .await?
            .unwrap_or_default();
        tracing::debug!(days = self.plan.len(), "loaded meal plan");
        Ok(())
    }

    pub fn plan(&self) -> &MealPlan {
        &self.plan
    }

    /// Key under which a date's meals are stored.
    pub fn date_key(date: NaiveDate) -> DateKey {
        DateKey::from_date(date)
    }

    /// Stored description for a slot, or `None` if it was never set.
    pub fn get_meal(&self, date: NaiveDate, meal_type: MealType) -> Option<&str> {
        self.plan.get(date, meal_type)
    }

    /// Set a slot's description.
    ///
    /// The updated plan is persisted first and only kept in memory once the
    /// write succeeds. Dates outside years 0000..=9999 are refused before
    /// anything is written.
    pub async fn set_meal(
        &mut self,
        date: NaiveDate,
        meal_type: MealType,
        description: &str,
    ) -> Result<(), PersistError> {
        if !DateKey::is_storable(date) {
            return Err(PersistError::DateOutOfRange(date));
        }

        let mut updated = self.plan.clone();
        updated.set(date, meal_type, description);

        save_json(&self.store, MEAL_PLAN_KEY, &updated).await?;
        self.plan = updated;

        tracing::debug!(key = %DateKey::from_date(date), %meal_type, "saved meal");
        Ok(())
    }

    /// Clear a slot by storing an empty description.
    pub async fn clear_meal(
        &mut self,
        date: NaiveDate,
        meal_type: MealType,
    ) -> Result<(), PersistError> {
        self.set_meal(date, meal_type, "").await
    }

    /// Dates shown by a view anchored at `anchor`.
    pub fn expand_range(mode: ViewMode, anchor: NaiveDate) -> Vec<NaiveDate> {
        view::expand_range(mode, anchor)
    }

    /// Every day of a view with its meal slots filled from the plan.
    pub fn day_plans(&self, mode: ViewMode, anchor: NaiveDate) -> Vec<DayPlan> {
        view::day_plans(&self.plan, mode, anchor)
    }
}
