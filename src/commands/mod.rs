mod config_cmd;
mod grocery;
mod mealplan;

pub use config_cmd::ConfigCommand;
pub use grocery::GroceryCommand;
pub use mealplan::MealPlanCommand;
