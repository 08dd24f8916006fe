//! Grocery list CLI commands.
//!
//! Items are grouped by aisle category. Toggle and delete take the item id
//! shown by `list`.

use clap::{Args, Subcommand, ValueEnum};

use larder_core::{Category, CategoryGroup, GroceryListManager, KeyValueStore};

use crate::config::Config;

#[derive(Clone, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args)]
pub struct GroceryCommand {
    #[command(subcommand)]
    pub command: GrocerySubcommand,
}

#[derive(Subcommand)]
pub enum GrocerySubcommand {
    /// List items grouped by category
    List {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Add an item
    Add {
        /// Item name
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,

        /// Category (produce, dairy, meat, pantry, frozen)
        #[arg(long)]
        category: Option<String>,
    },

    /// Mark an item done, or not done again
    Toggle {
        /// Item ID
        id: String,
    },

    /// Delete an item
    Delete {
        /// Item ID
        id: String,
    },

    /// Remove every item, replacing the stored list
    Reset,
}

impl GroceryCommand {
    /// Whether the command needs the stored list intact before it runs.
    ///
    /// `reset` overwrites the list wholesale, so it never does.
    pub fn needs_intact_store(&self) -> bool {
        matches!(
            self.command,
            GrocerySubcommand::Add { .. }
                | GrocerySubcommand::Toggle { .. }
                | GrocerySubcommand::Delete { .. }
        )
    }

    pub async fn run<S: KeyValueStore>(
        &self,
        manager: &mut GroceryListManager<S>,
        config: &Config,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            GrocerySubcommand::List { format } => {
                let groups = manager.group_by_category();
                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&groups)?);
                    }
                    OutputFormat::Text => print!("{}", render_groups(&groups)),
                }
                Ok(())
            }

            GrocerySubcommand::Add { name, category } => {
                let category: Category = match category {
                    Some(c) => c.parse()?,
                    None => config.default_category.value,
                };

                match manager.add(&name.join(" "), category).await? {
                    Some(item) => println!(
                        "Added {} to {} ({})",
                        item.name,
                        category.display_name(),
                        item.id
                    ),
                    None => println!("Nothing to add: item name is empty"),
                }
                Ok(())
            }

            GrocerySubcommand::Toggle { id } => {
                if manager.toggle(id).await? {
                    if let Some(item) = manager.list().get(id) {
                        println!("{}", item);
                    }
                } else {
                    println!("No item with id {}", id);
                }
                Ok(())
            }

            GrocerySubcommand::Delete { id } => {
                if manager.delete(id).await? {
                    println!("Deleted {}", id);
                } else {
                    println!("No item with id {}", id);
                }
                Ok(())
            }

            GrocerySubcommand::Reset => {
                manager.reset().await?;
                println!("Grocery list cleared");
                Ok(())
            }
        }
    }
}

/// Text view of the list: one section per non-empty category.
pub fn render_groups(groups: &[CategoryGroup<'_>]) -> String {
    let mut out = String::new();
    for group in groups.iter().filter(|g| !g.items.is_empty()) {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(group.category.display_name());
        out.push('\n');
        out.push_str(&"-".repeat(group.category.display_name().len()));
        out.push('\n');
        for item in &group.items {
            out.push_str(&format!("  {:<30} {}\n", item.to_string(), item.id));
        }
    }

    if out.is_empty() {
        out.push_str("Grocery list is empty.\n");
    }
    out
}
