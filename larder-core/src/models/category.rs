use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Aisle grouping for a grocery item.
///
/// Declaration order is the display order of the grocery list.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Produce,
    Dairy,
    Meat,
    Pantry,
    Frozen,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 5] = [
        Category::Produce,
        Category::Dairy,
        Category::Meat,
        Category::Pantry,
        Category::Frozen,
    ];

    /// Stable lowercase identifier, as stored.
    pub fn id(&self) -> &'static str {
        match self {
            Category::Produce => "produce",
            Category::Dairy => "dairy",
            Category::Meat => "meat",
            Category::Pantry => "pantry",
            Category::Frozen => "frozen",
        }
    }

    /// Heading shown above the category's items.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Produce => "Produce",
            Category::Dairy => "Dairy",
            Category::Meat => "Meat",
            Category::Pantry => "Pantry",
            Category::Frozen => "Frozen",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "produce" => Ok(Category::Produce),
            "dairy" => Ok(Category::Dairy),
            "meat" => Ok(Category::Meat),
            "pantry" => Ok(Category::Pantry),
            "frozen" => Ok(Category::Frozen),
            _ => Err(format!(
                "Invalid category '{}'. Valid options: produce, dairy, meat, pantry, frozen",
                s
            )),
        }
    }
}
