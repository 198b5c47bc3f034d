// ABOUTME: Ymeal CLI - command-line front end for the fridge, recipes and profile
// ABOUTME: Loads configuration from the environment and dispatches subcommands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ymeal
//!
//! Usage:
//! ```bash
//! # Show the fridge grouped by category
//! ymeal-cli fridge list
//!
//! # Add 1.5 kg of rice
//! ymeal-cli fridge add Riz --quantity 1.5 --unit kg --category "Céréales & Féculents"
//!
//! # Add a suggested ingredient with its default amount
//! ymeal-cli fridge add Lait
//!
//! # Rank recipes by what is in the fridge
//! ymeal-cli recipes match
//!
//! # Check that the profile is complete
//! ymeal-cli profile validate
//! ```

mod commands;
mod helpers;

use std::env;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use ymeal::config::{AppConfig, LogLevel};
use ymeal::logging::LoggingConfig;
use ymeal::storage::create_store;

#[derive(Parser)]
#[command(
    name = "ymeal-cli",
    about = "Ymeal fridge and recipe assistant",
    long_about = "Track fridge ingredients, find recipes that use them, and manage the cooking profile."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Data directory override
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Fridge inventory commands
    Fridge {
        #[command(subcommand)]
        action: FridgeCommand,
    },

    /// Recipe commands
    Recipes {
        #[command(subcommand)]
        action: RecipeCommand,
    },

    /// Profile configuration commands
    Profile {
        #[command(subcommand)]
        action: ProfileCommand,
    },

    /// Account commands
    Account {
        #[command(subcommand)]
        action: AccountCommand,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum FridgeCommand {
    /// List ingredients grouped by category
    List,

    /// Add an ingredient, merging with an existing one of the same name
    Add {
        /// Ingredient name
        name: String,

        /// Amount in the chosen unit (defaults to 1 item or 200 g/ml)
        #[arg(long, short = 'q')]
        quantity: Option<f64>,

        /// Unit: x, g, kg, ml or cl (defaults to the category's unit)
        #[arg(long, short = 'u')]
        unit: Option<String>,

        /// Category label (defaults to the suggestion's, else "Autre")
        #[arg(long, short = 'c')]
        category: Option<String>,
    },

    /// Search the suggestion templates
    Suggest {
        /// Name fragment
        query: String,
    },

    /// Increase an ingredient by one step
    Inc {
        /// Ingredient id or name
        target: String,
    },

    /// Decrease an ingredient by one step
    Dec {
        /// Ingredient id or name
        target: String,
    },

    /// Adjust an ingredient by an amount in base units (items, g or ml)
    Adjust {
        /// Ingredient id or name
        target: String,

        /// Signed change
        #[arg(allow_hyphen_values = true)]
        delta: f64,
    },

    /// Remove an ingredient
    Remove {
        /// Ingredient id or name
        target: String,
    },

    /// Remove every ingredient
    Clear,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum RecipeCommand {
    /// Search recipes by title or ingredient
    Search {
        /// Text to look for (lists everything when omitted)
        query: Option<String>,
    },

    /// Show one recipe with a cooking tip
    Show {
        /// Recipe id
        id: String,
    },

    /// Rank recipes by how much of them the fridge covers
    Match {
        /// Number of recipes to show
        #[arg(long, default_value = "3")]
        limit: usize,
    },

    /// Pick a random recipe
    Random,

    /// Star or unstar a recipe
    Favorite {
        /// Recipe id
        id: String,
    },

    /// List starred recipes
    Favorites,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ProfileCommand {
    /// Print the stored profile
    Show,

    /// Check that every required field is filled
    Validate,

    /// Set single-value fields
    Set {
        /// City or postal code
        #[arg(long)]
        location: Option<String>,

        /// PETIT, MOYEN or LARGE
        #[arg(long)]
        budget: Option<String>,

        /// Preferred cuisine
        #[arg(long)]
        cuisine: Option<String>,

        /// 1, 2, 3-4 or 5+
        #[arg(long)]
        people: Option<String>,
    },

    /// Select or deselect a diet
    Diet {
        /// Diet key, such as vegetarien
        key: String,
    },

    /// Add a vegetable to avoid
    Avoid {
        /// Vegetable name
        vegetable: String,
    },

    /// Add an allergy
    Allergy {
        /// Allergen name
        allergen: String,
    },

    /// Suggest vegetables and allergens matching a query
    Suggest {
        /// Name fragment
        query: String,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum AccountCommand {
    /// Validate a registration form
    Register {
        /// Email address
        #[arg(long)]
        email: String,

        /// Password
        #[arg(long)]
        password: String,

        /// Password confirmation
        #[arg(long)]
        confirm: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.with_level(LogLevel::Debug)
    } else if env::var("RUST_LOG").is_err() {
        logging.with_level(LogLevel::Warn)
    } else {
        logging
    };
    logging.init()?;

    let mut config = AppConfig::from_env()?;
    if let Some(dir) = cli.data_dir {
        config = config.with_data_dir(dir);
    }
    debug!(data_dir = %config.data_dir.display(), "Ymeal CLI starting");

    let store = create_store(&config.storage_backend())?;

    match cli.command {
        Command::Fridge { action } => {
            let mut service = commands::fridge::open(&store, &config);
            match action {
                FridgeCommand::List => commands::fridge::list(&service),
                FridgeCommand::Add {
                    name,
                    quantity,
                    unit,
                    category,
                } => commands::fridge::add(&mut service, &name, quantity, unit, category)?,
                FridgeCommand::Suggest { query } => commands::fridge::suggest(&service, &query),
                FridgeCommand::Inc { target } => {
                    commands::fridge::step(&mut service, &target, true)?;
                }
                FridgeCommand::Dec { target } => {
                    commands::fridge::step(&mut service, &target, false)?;
                }
                FridgeCommand::Adjust { target, delta } => {
                    commands::fridge::adjust(&mut service, &target, delta)?;
                }
                FridgeCommand::Remove { target } => {
                    commands::fridge::remove(&mut service, &target)?;
                }
                FridgeCommand::Clear => commands::fridge::clear(&mut service),
            }
            commands::fridge::report_persist_failures(&service);
        }
        Command::Recipes { action } => match action {
            RecipeCommand::Search { query } => {
                commands::recipes::search(query.as_deref().unwrap_or_default());
            }
            RecipeCommand::Show { id } => commands::recipes::show(store.as_ref(), &id)?,
            RecipeCommand::Match { limit } => {
                let service = commands::fridge::open(&store, &config);
                commands::recipes::rank(&service, limit);
            }
            RecipeCommand::Random => commands::recipes::random(),
            RecipeCommand::Favorite { id } => commands::recipes::favorite(store.as_ref(), &id)?,
            RecipeCommand::Favorites => commands::recipes::favorites(store.as_ref()),
        },
        Command::Profile { action } => match action {
            ProfileCommand::Show => commands::profile::show(store.as_ref()),
            ProfileCommand::Validate => commands::profile::validate(store.as_ref())?,
            ProfileCommand::Set {
                location,
                budget,
                cuisine,
                people,
            } => commands::profile::set(
                store.as_ref(),
                commands::profile::FieldUpdates {
                    location,
                    budget,
                    cuisine,
                    people,
                },
            )?,
            ProfileCommand::Diet { key } => commands::profile::toggle_diet(store.as_ref(), &key)?,
            ProfileCommand::Avoid { vegetable } => {
                commands::profile::avoid(store.as_ref(), &vegetable)?;
            }
            ProfileCommand::Allergy { allergen } => {
                commands::profile::allergy(store.as_ref(), &allergen)?;
            }
            ProfileCommand::Suggest { query } => commands::profile::suggest(store.as_ref(), &query),
        },
        Command::Account { action } => match action {
            AccountCommand::Register {
                email,
                password,
                confirm,
            } => commands::account::register(email, password, confirm)?,
        },
    }

    Ok(())
}
