// ABOUTME: LockIn CLI - command-line front end for plans, workouts, nutrition and activity
// ABOUTME: Parses arguments, opens storage from the environment and dispatches commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Show splits available for four training days
//! lockin-cli plan splits --days 4
//!
//! # Generate and save a Push/Pull/Legs plan
//! lockin-cli plan generate --days 3 --split ppl --save
//!
//! # Start today's workout and log a set
//! lockin-cli workout start
//! lockin-cli workout log --session session-... --exercise chest_4 --set 1 --reps 8 --weight 80
//!
//! # Log food and steps
//! lockin-cli nutrition add --meal breakfast --food food_7 --servings 1.5
//! lockin-cli nutrition steps 8500
//!
//! # Weekly goal ring and monthly calorie chart
//! lockin-cli activity goals
//! lockin-cli activity view --metric calories --period month
//!
//! # Export completed workouts as CSV
//! lockin-cli history export --output history.csv
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use lockin::config::{AppConfig, StorageUrl};
use lockin::logging::LoggingConfig;
use lockin::storage::{Storage, UserRepository};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "lockin-cli",
    about = "LockIn workout and nutrition tracker",
    long_about = "Plan training weeks, log workouts and meals, and review activity from the command line."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Storage URL override (`sqlite:<path>`, `sqlite::memory:`, `memory`)
    #[arg(long, global = true)]
    storage_url: Option<String>,

    /// User whose records are read and written
    #[arg(long, global = true)]
    user: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Weekly plan commands
    Plan {
        #[command(subcommand)]
        action: PlanCommand,
    },

    /// Workout session commands
    Workout {
        #[command(subcommand)]
        action: WorkoutCommand,
    },

    /// Food, step and water logging
    Nutrition {
        #[command(subcommand)]
        action: NutritionCommand,
    },

    /// Activity charts and goal tracking
    Activity {
        #[command(subcommand)]
        action: ActivityCommand,
    },

    /// Workout history
    History {
        #[command(subcommand)]
        action: HistoryCommand,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum PlanCommand {
    /// List splits that support a number of training days
    Splits {
        /// Training days per week
        #[arg(long)]
        days: u8,
    },

    /// Generate a plan from a split
    Generate {
        /// Training days per week
        #[arg(long)]
        days: u8,

        /// Split key or display name (e.g. "ppl", "Upper/Lower")
        #[arg(long)]
        split: String,

        /// Replace the saved plan with the generated one
        #[arg(long)]
        save: bool,
    },

    /// Show the saved plan and this week's schedule
    Show,

    /// Delete the saved plan
    Reset,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum WorkoutCommand {
    /// Start a session from the saved plan
    Start {
        /// Template weekday (defaults to the next template in rotation)
        #[arg(long)]
        day: Option<String>,

        /// Session date (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Record reps and weight for a set
    Log {
        /// Session id
        #[arg(long)]
        session: String,

        /// Catalog exercise id
        #[arg(long)]
        exercise: String,

        /// Set number, starting at 1
        #[arg(long)]
        set: usize,

        /// Reps performed
        #[arg(long)]
        reps: Option<u32>,

        /// Weight lifted in the session unit
        #[arg(long)]
        weight: Option<f64>,
    },

    /// Add catalog exercises to a session
    AddExercise {
        /// Session id
        #[arg(long)]
        session: String,

        /// Catalog exercise ids
        #[arg(required = true)]
        exercises: Vec<String>,
    },

    /// Search the exercise catalog
    Exercises {
        /// Name filter
        search: Option<String>,
    },

    /// Save progress and leave the session open
    Save {
        /// Session id
        #[arg(long)]
        session: String,
    },

    /// Complete a session
    Finish {
        /// Session id
        #[arg(long)]
        session: String,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum NutritionCommand {
    /// Log servings of a food into a meal
    Add {
        /// Meal slot (breakfast, lunch, dinner, snacks)
        #[arg(long)]
        meal: String,

        /// Food id
        #[arg(long)]
        food: String,

        /// Servings eaten
        #[arg(long, default_value = "1")]
        servings: f64,

        /// Log date (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Set the step count for a day
    Steps {
        /// Steps walked
        steps: u32,

        /// Log date (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Set water intake for a day
    Water {
        /// Millilitres drunk
        millilitres: f64,

        /// Log date (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// List built-in and custom foods
    Foods {
        /// Name filter
        search: Option<String>,
    },

    /// Show a day's meals and totals
    Show {
        /// Log date (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ActivityCommand {
    /// Goal status for the last seven days
    Goals,

    /// Calories or steps over a day, week or month
    View {
        /// Metric to chart (calories, steps)
        #[arg(long, default_value = "calories")]
        metric: String,

        /// Period (day, week, month)
        #[arg(long, default_value = "week")]
        period: String,

        /// Any date inside the period (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Move this many periods forward (negative for back)
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        offset: i32,

        /// Print the view as JSON
        #[arg(long)]
        json: bool,
    },

    /// Completed sets and logged foods per hour of day
    Hourly,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum HistoryCommand {
    /// Export completed workouts as CSV
    Export {
        /// Output file (defaults to stdout)
        #[arg(long, short = 'o')]
        output: Option<std::path::PathBuf>,
    },

    /// Streak, volume and energy summary
    Stats,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::from_env()?;
    LoggingConfig::for_cli(cli.verbose, config.log_level).init()?;

    if let Some(url) = cli.storage_url.as_deref() {
        config.storage = StorageUrl::parse_url(url)?;
    }
    if let Some(user) = cli.user {
        config.user = user;
    }
    debug!(config = %config.summary(), "Configuration loaded");

    let repo = UserRepository::new(Storage::new(&config.storage).await?);
    let user = config.user.as_str();

    match cli.command {
        Command::Plan { action } => match action {
            PlanCommand::Splits { days } => commands::plan::splits(days),
            PlanCommand::Generate { days, split, save } => {
                commands::plan::generate(&repo, user, days, &split, save).await?;
            }
            PlanCommand::Show => commands::plan::show(&repo, user).await?,
            PlanCommand::Reset => commands::plan::reset(&repo, user).await?,
        },
        Command::Workout { action } => match action {
            WorkoutCommand::Start { day, date } => {
                commands::workout::start(&repo, user, day.as_deref(), date).await?;
            }
            WorkoutCommand::Log {
                session,
                exercise,
                set,
                reps,
                weight,
            } => {
                commands::workout::log_set(&repo, user, &session, &exercise, set, reps, weight)
                    .await?;
            }
            WorkoutCommand::AddExercise {
                session,
                exercises,
            } => commands::workout::add_exercises(&repo, user, &session, &exercises).await?,
            WorkoutCommand::Exercises { search } => {
                commands::workout::exercises(search.as_deref().unwrap_or_default());
            }
            WorkoutCommand::Save { session } => {
                commands::workout::save(&repo, user, &session).await?;
            }
            WorkoutCommand::Finish { session } => {
                commands::workout::finish(&repo, user, &session).await?;
            }
        },
        Command::Nutrition { action } => match action {
            NutritionCommand::Add {
                meal,
                food,
                servings,
                date,
            } => commands::nutrition::add(&repo, user, &meal, &food, servings, date).await?,
            NutritionCommand::Steps { steps, date } => {
                commands::nutrition::steps(&repo, user, steps, date).await?;
            }
            NutritionCommand::Water { millilitres, date } => {
                commands::nutrition::water(&repo, user, millilitres, date).await?;
            }
            NutritionCommand::Foods { search } => {
                commands::nutrition::foods(&repo, user, search.as_deref().unwrap_or_default())
                    .await?;
            }
            NutritionCommand::Show { date } => {
                commands::nutrition::show(&repo, user, date).await?;
            }
        },
        Command::Activity { action } => match action {
            ActivityCommand::Goals => commands::activity::goals(&repo, user).await?,
            ActivityCommand::View {
                metric,
                period,
                date,
                offset,
                json,
            } => {
                commands::activity::view(&repo, user, &metric, &period, date, offset, json)
                    .await?;
            }
            ActivityCommand::Hourly => commands::activity::hourly(&repo, user).await?,
        },
        Command::History { action } => match action {
            HistoryCommand::Export { output } => {
                commands::history::export(&repo, user, output.as_deref()).await?;
            }
            HistoryCommand::Stats => commands::history::stats(&repo, user).await?,
        },
    }

    Ok(())
}
