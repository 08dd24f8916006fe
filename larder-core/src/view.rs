//! Day, week and month projections of the meal plan.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::date_key::DateKey;
use crate::models::{MealPlan, MealType};

/// Which span of days the planner shows around its anchor date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Day,
    Week,
    Month,
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::Day => write!(f, "day"),
            ViewMode::Week => write!(f, "week"),
            ViewMode::Month => write!(f, "month"),
        }
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "day" => Ok(ViewMode::Day),
            "week" => Ok(ViewMode::Week),
            "month" => Ok(ViewMode::Month),
            _ => Err(format!(
                "Invalid view '{}'. Valid options: day, week, month",
                s
            )),
        }
    }
}

/// Get the Sunday that starts the week containing the given date.
///
/// `None` if that Sunday falls before the earliest representable date.
pub fn week_start(date: NaiveDate) -> Option<NaiveDate> {
    let days_since_sunday = date.weekday().num_days_from_sunday();
    date.checked_sub_signed(Duration::days(days_since_sunday as i64))
}

/// Dates to render for a view, ascending.
///
/// - `Day`: just the anchor.
/// - `Week`: Sunday on or before the anchor through the following Saturday.
/// - `Month`: the 1st of the anchor's month up to its last day.
///
/// At either end of the calendar, days that cannot be represented are left out.
pub fn expand_range(mode: ViewMode, anchor: NaiveDate) -> Vec<NaiveDate> {
    match mode {
        ViewMode::Day => vec![anchor],
        ViewMode::Week => {
            let back = anchor.weekday().num_days_from_sunday() as i64;
            (-back..7 - back)
                .filter_map(|i| anchor.checked_add_signed(Duration::days(i)))
                .collect()
        }
        ViewMode::Month => {
            let month = anchor.month();
            let mut dates = Vec::with_capacity(31);
            let mut current = anchor.with_day(1);
            // stop on the first date whose month differs
            while let Some(date) = current.filter(|d| d.month() == month) {
                dates.push(date);
                current = date.succ_opt();
            }
            dates
        }
    }
}

/// One rendered day: its date, key, and every meal slot in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayPlan {
    pub date: NaiveDate,
    pub key: DateKey,
    pub meals: Vec<MealSlot>,
}

/// A meal slot as the renderer sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MealSlot {
    pub meal_type: MealType,
    pub description: Option<String>,
}

impl MealSlot {
    /// The description, or `None` if unset or cleared.
    pub fn planned(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }
}

impl DayPlan {
    /// Header like "Sunday, March 10".
    pub fn heading(&self) -> String {
        self.date.format("%A, %B %-d").to_string()
    }
}

/// Project the plan onto the days of a view.
pub fn day_plans(plan: &MealPlan, mode: ViewMode, anchor: NaiveDate) -> Vec<DayPlan> {
    expand_range(mode, anchor)
        .into_iter()
        .map(|date| DayPlan {
            date,
            key: DateKey::from_date(date),
            meals: MealType::ALL
                .iter()
                .map(|&meal_type| MealSlot {
                    meal_type,
                    description: plan.get(date, meal_type).map(str::to_string),
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn days_in_month(y: i32, m: u32) -> usize {
        let next = if m == 12 {
            date(y + 1, 1, 1)
        } else {
            date(y, m + 1, 1)
        };
        (next - date(y, m, 1)).num_days() as usize
    }

    #[test]
    fn test_view_mode_from_str() {
        assert_eq!(ViewMode::from_str("Week").unwrap(), ViewMode::Week);
        assert!(ViewMode::from_str("year").is_err());
        assert_eq!(ViewMode::default(), ViewMode::Day);
    }

    #[test]
    fn test_day_range() {
        assert_eq!(expand_range(ViewMode::Day, date(2024, 3, 13)), vec![date(2024, 3, 13)]);
    }

    #[test]
    fn test_week_range_midweek() {
        // 2024-03-13 is a Wednesday
        let dates = expand_range(ViewMode::Week, date(2024, 3, 13));
        assert_eq!(dates.first(), Some(&date(2024, 3, 10)));
        assert_eq!(dates.last(), Some(&date(2024, 3, 16)));
        assert_eq!(dates.len(), 7);
    }

    #[test]
    fn test_week_range_anchor_on_sunday() {
        let dates = expand_range(ViewMode::Week, date(2024, 3, 10));
        assert_eq!(dates[0], date(2024, 3, 10));
    }

    #[test]
    fn test_week_range_crosses_year() {
        // 2025-01-01 is a Wednesday
        let dates = expand_range(ViewMode::Week, date(2025, 1, 1));
        assert_eq!(dates[0], date(2024, 12, 29));
        assert_eq!(dates[6], date(2025, 1, 4));
    }

    #[test]
    fn test_week_start() {
        assert_eq!(week_start(date(2024, 3, 13)), Some(date(2024, 3, 10)));
        assert_eq!(week_start(date(2024, 3, 10)), Some(date(2024, 3, 10)));
    }

    #[test]
    fn test_week_range_at_calendar_ends() {
        let low = expand_range(ViewMode::Week, NaiveDate::MIN);
        assert_eq!(low.first(), Some(&NaiveDate::MIN));
        assert!(!low.is_empty() && low.len() <= 7);

        let high = expand_range(ViewMode::Week, NaiveDate::MAX);
        assert_eq!(high.last(), Some(&NaiveDate::MAX));
        assert!(!high.is_empty() && high.len() <= 7);

        let plans = day_plans(&MealPlan::new(), ViewMode::Week, NaiveDate::MAX);
        assert_eq!(plans.len(), high.len());
    }

    #[test]
    fn test_month_range_leap_february() {
        let dates = expand_range(ViewMode::Month, date(2024, 2, 17));
        assert_eq!(dates.len(), 29);
        assert_eq!(dates[0], date(2024, 2, 1));
        assert_eq!(dates[28], date(2024, 2, 29));
    }

    #[test]
    fn test_month_range_common_february() {
        assert_eq!(expand_range(ViewMode::Month, date(2023, 2, 28)).len(), 28);
        assert_eq!(expand_range(ViewMode::Month, date(2100, 2, 1)).len(), 28);
    }

    #[test]
    fn test_month_range_december() {
        let dates = expand_range(ViewMode::Month, date(2024, 12, 31));
        assert_eq!(dates.len(), 31);
        assert_eq!(dates.last(), Some(&date(2024, 12, 31)));
    }

    #[test]
    fn test_month_range_at_calendar_end() {
        let dates = expand_range(ViewMode::Month, NaiveDate::MAX);
        assert_eq!(dates.last(), Some(&NaiveDate::MAX));
    }

    #[test]
    fn test_day_plans_fill_every_slot() {
        let mut plan = MealPlan::new();
        plan.set(date(2024, 3, 10), MealType::Dinner, "Pasta");
        plan.set(date(2024, 3, 10), MealType::Lunch, "");

        let days = day_plans(&plan, ViewMode::Day, date(2024, 3, 10));
        assert_eq!(days.len(), 1);

        let day = &days[0];
        assert_eq!(day.key.to_string(), "2024-03-10");
        assert_eq!(day.heading(), "Sunday, March 10");

        let types: Vec<MealType> = day.meals.iter().map(|m| m.meal_type).collect();
        assert_eq!(types, MealType::ALL.to_vec());
        assert_eq!(day.meals[0].description, None);
        assert_eq!(day.meals[1].description.as_deref(), Some(""));
        assert_eq!(day.meals[1].planned(), None);
        assert_eq!(day.meals[2].planned(), Some("Pasta"));
    }

    #[test]
    fn test_day_plans_week_covers_range() {
        let plan = MealPlan::new();
        let days = day_plans(&plan, ViewMode::Week, date(2024, 3, 13));
        assert_eq!(days.len(), 7);
        assert!(days.iter().all(|d| d.meals.iter().all(|m| m.description.is_none())));
    }

    fn arb_date() -> impl Strategy<Value = NaiveDate> {
        (1900i32..2200, 1u32..=12, 1u32..=31).prop_filter_map("valid date", |(y, m, d)| {
            NaiveDate::from_ymd_opt(y, m, d)
        })
    }

    proptest! {
        #[test]
        fn week_is_seven_consecutive_days_from_sunday(anchor in arb_date()) {
            let dates = expand_range(ViewMode::Week, anchor);
            prop_assert_eq!(dates.len(), 7);
            prop_assert_eq!(dates[0].weekday(), Weekday::Sun);
            prop_assert!(dates.contains(&anchor));
            for pair in dates.windows(2) {
                prop_assert_eq!(pair[1] - pair[0], Duration::days(1));
            }
        }

        #[test]
        fn month_covers_every_day_of_the_month(anchor in arb_date()) {
            let dates = expand_range(ViewMode::Month, anchor);
            prop_assert_eq!(dates.len(), days_in_month(anchor.year(), anchor.month()));
            prop_assert_eq!(dates[0].day(), 1);
            prop_assert!(dates.iter().all(|d| d.month() == anchor.month() && d.year() == anchor.year()));
            for pair in dates.windows(2) {
                prop_assert_eq!(pair[1] - pair[0], Duration::days(1));
            }
        }
    }
}
