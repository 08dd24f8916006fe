use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A meal slot within a planned day.
///
/// Serialized with its capitalized name, which is also the key used inside
/// a day's record in the stored meal plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealType {
    /// All meal types in the order a day is rendered.
    pub const ALL: [MealType; 3] = [MealType::Breakfast, MealType::Lunch, MealType::Dinner];
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MealType::Breakfast => write!(f, "Breakfast"),
            MealType::Lunch => write!(f, "Lunch"),
            MealType::Dinner => write!(f, "Dinner"),
        }
    }
}

impl FromStr for MealType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Ok(MealType::Breakfast),
            "lunch" => Ok(MealType::Lunch),
            "dinner" => Ok(MealType::Dinner),
            _ => Err(format!(
                "Invalid meal type '{}'. Valid options: breakfast, lunch, dinner",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meal_type_display() {
        assert_eq!(format!("{}", MealType::Breakfast), "Breakfast");
        assert_eq!(format!("{}", MealType::Lunch), "Lunch");
        assert_eq!(format!("{}", MealType::Dinner), "Dinner");
    }

    #[test]
    fn test_meal_type_from_str() {
        assert_eq!(
            MealType::from_str("breakfast").unwrap(),
            MealType::Breakfast
        );
        assert_eq!(MealType::from_str("LUNCH").unwrap(), MealType::Lunch);
        assert_eq!(MealType::from_str("Dinner").unwrap(), MealType::Dinner);
    }

    #[test]
    fn test_meal_type_from_str_invalid() {
        assert!(MealType::from_str("snack").is_err());
        assert!(MealType::from_str("").is_err());
    }

    #[test]
    fn test_meal_type_json_uses_capitalized_name() {
        let json = serde_json::to_string(&MealType::Breakfast).unwrap();
        assert_eq!(json, "\"Breakfast\"");

        let parsed: MealType = serde_json::from_str("\"Dinner\"").unwrap();
        assert_eq!(parsed, MealType::Dinner);
        assert!(serde_json::from_str::<MealType>("\"dinner\"").is_err());
    }
}
