//! The meal plan as a mapping from day to planned meals.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::MealType;
use crate::date_key::DateKey;

/// Meals planned for one day, keyed by meal type.
pub type DayMeals = BTreeMap<MealType, String>;

/// Date-keyed meal plan.
///
/// Serializes as `{ "YYYY-MM-DD": { "Breakfast": "...", ... } }`.
/// A missing entry means the slot was never planned; an empty string is a
/// stored value meaning the slot was cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MealPlan {
    days: BTreeMap<DateKey, DayMeals>,
}

impl MealPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of days that have at least one stored slot.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// All stored days in date order.
    pub fn days(&self) -> impl Iterator<Item = (&DateKey, &DayMeals)> {
        self.days.iter()
    }

    /// Stored meals for a day, if the day has any entry.
    pub fn day(&self, date: NaiveDate) -> Option<&DayMeals> {
        self.days.get(&DateKey::from_date(date))
    }

    /// Stored description for a slot, or `None` if it was never set.
    pub fn get(&self, date: NaiveDate, meal_type: MealType) -> Option<&str> {
        self.day(date)
            .and_then(|meals| meals.get(&meal_type))
            .map(String::as_str)
    }

    /// Write a slot, creating the day's entry on first use.
    pub fn set(&mut self, date: NaiveDate, meal_type: MealType, description: impl Into<String>) {
        self.days
            .entry(DateKey::from_date(date))
            .or_default()
            .insert(meal_type, description.into());
    }
}
