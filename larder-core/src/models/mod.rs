mod category;
mod grocery_item;
mod grocery_list;
mod meal_plan;
mod meal_type;

pub use category::Category;
pub use grocery_item::GroceryItem;
pub use grocery_list::{CategoryGroup, GroceryList};
pub use meal_plan::{DayMeals, MealPlan};
pub use meal_type::MealType;
