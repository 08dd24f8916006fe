use chrono::NaiveDate;
use clap::{Args, Subcommand, ValueEnum};

use larder_core::{DateKey, DayPlan, KeyValueStore, MealPlanManager, MealType, ViewMode};

use crate::config::Config;

#[derive(Clone, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Placeholder shown for a slot with nothing planned.
const EMPTY_SLOT: &str = "Add meal...";

#[derive(Args)]
pub struct MealPlanCommand {
    #[command(subcommand)]
    pub command: MealPlanSubcommand,
}

#[derive(Subcommand)]
pub enum MealPlanSubcommand {
    /// Show planned meals for a day, week or month
    Show {
        /// View (day, week, month)
        #[arg(long, short, default_value = "day")]
        view: String,

        /// Anchor date (YYYY-MM-DD), defaults to today
        #[arg(long, short)]
        date: Option<String>,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Plan a meal
    Set {
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long, short)]
        date: Option<String>,

        /// Meal type (breakfast, lunch, dinner)
        #[arg(long, short, value_name = "TYPE")]
        meal: String,

        /// What to eat
        #[arg(required = true, num_args = 1..)]
        description: Vec<String>,
    },

    /// Clear a planned meal
    Clear {
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long, short)]
        date: Option<String>,

        /// Meal type (breakfast, lunch, dinner)
        #[arg(long, short, value_name = "TYPE")]
        meal: String,
    },
}

impl MealPlanCommand {
    /// Whether the command writes the plan back to the store.
    pub fn is_write(&self) -> bool {
        matches!(
            self.command,
            MealPlanSubcommand::Set { .. } | MealPlanSubcommand::Clear { .. }
        )
    }

    pub async fn run<S: KeyValueStore>(
        &self,
        manager: &mut MealPlanManager<S>,
        config: &Config,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            MealPlanSubcommand::Show { view, date, format } => {
                let mode: ViewMode = view.parse()?;
                let anchor = parse_date_or_today(date.as_deref(), config)?;
                let days = manager.day_plans(mode, anchor);

                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&days)?);
                    }
                    OutputFormat::Text => print!("{}", render_days(&days)),
                }
                Ok(())
            }

            MealPlanSubcommand::Set {
                date,
                meal,
                description,
            } => {
                let date = parse_date_or_today(date.as_deref(), config)?;
                let meal_type: MealType = meal.parse()?;
                let description = description.join(" ");

                manager.set_meal(date, meal_type, &description).await?;
                println!(
                    "{} on {}: {}",
                    meal_type,
                    MealPlanManager::<S>::date_key(date),
                    description
                );
                Ok(())
            }

            MealPlanSubcommand::Clear { date, meal } => {
                let date = parse_date_or_today(date.as_deref(), config)?;
                let meal_type: MealType = meal.parse()?;

                manager.clear_meal(date, meal_type).await?;
                println!(
                    "Cleared {} on {}",
                    meal_type,
                    MealPlanManager::<S>::date_key(date)
                );
                Ok(())
            }
        }
    }
}

/// Parse an explicit calendar date, or resolve today per the configured basis.
fn parse_date_or_today(
    date: Option<&str>,
    config: &Config,
) -> Result<NaiveDate, Box<dyn std::error::Error>> {
    match date {
        Some(d) => Ok(d.trim().parse::<DateKey>()?.date()),
        None => Ok(config.date_basis.value.today()),
    }
}

/// Text view: a heading per day and one line per meal slot.
pub fn render_days(days: &[DayPlan]) -> String {
    let mut out = String::new();
    for (i, day) in days.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let heading = day.heading();
        out.push_str(&heading);
        out.push('\n');
        out.push_str(&"-".repeat(heading.len()));
        out.push('\n');
        for slot in &day.meals {
            out.push_str(&format!(
                "  {:<10} {}\n",
                slot.meal_type.to_string(),
                slot.planned().unwrap_or(EMPTY_SLOT)
            ));
        }
    }
    out
}
