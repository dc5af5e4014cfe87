//! Habit tracker commands for CLI.

use chrono::NaiveDate;
use clap::Subcommand;
use dailydeck_core::{Config, HabitEdit, StreakOutcome};
use serde::Serialize;

use super::{open_dashboard, parse_date, today_or, CmdResult};

#[derive(Subcommand)]
pub enum HabitAction {
    /// Add a new habit
    Add {
        /// Habit name
        name: String,
        /// Short description
        #[arg(long)]
        description: Option<String>,
        /// Emoji shown next to the habit (at most 2 characters)
        #[arg(long)]
        emoji: Option<String>,
    },
    /// List habits with their current streaks
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
        /// Day used to judge whether streaks are still alive (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        today: Option<NaiveDate>,
    },
    /// Edit a habit; omitted fields keep their current value
    Edit {
        /// Habit index (from `habit list`)
        index: usize,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        emoji: Option<String>,
    },
    /// Delete a habit
    Delete {
        /// Habit index (from `habit list`)
        index: usize,
    },
    /// Mark a habit complete for today
    Done {
        /// Habit index (from `habit list`)
        index: usize,
        /// Override today's date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        today: Option<NaiveDate>,
    },
}

#[derive(Serialize)]
struct HabitRow<'a> {
    index: usize,
    #[serde(flatten)]
    habit: &'a dailydeck_core::Habit,
    current_streak: u32,
    done_today: bool,
}

pub fn run(action: HabitAction, config: &Config) -> CmdResult {
    let mut dash = open_dashboard(config)?;

    match action {
        HabitAction::Add {
            name,
            description,
            emoji,
        } => {
            let index = dash.add_habit(&name, description.as_deref(), emoji.as_deref())?;
            println!("Habit added: {index}");
            println!("{}", serde_json::to_string_pretty(&dash.habits().get(index))?);
        }
        HabitAction::List { json, today } => {
            let today = today_or(today);
            let rows: Vec<_> = dash
                .habits()
                .iter()
                .enumerate()
                .map(|(index, habit)| HabitRow {
                    index,
                    habit,
                    current_streak: habit.current_streak(today),
                    done_today: habit.completed_on(today),
                })
                .collect();

            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else if rows.is_empty() {
                println!("No habits yet. Add one to get started!");
            } else {
                for row in rows {
                    let mark = if row.done_today { "x" } else { " " };
                    let desc = if row.habit.description.is_empty() {
                        "No description"
                    } else {
                        row.habit.description.as_str()
                    };
                    println!(
                        "{:>3} [{mark}] {} {} - {} (streak: {})",
                        row.index, row.habit.emoji, row.habit.name, desc, row.current_streak
                    );
                }
            }
        }
        HabitAction::Edit {
            index,
            name,
            description,
            emoji,
        } => {
            let current = dash
                .habits()
                .get(index)
                .map(HabitEdit::from_habit)
                .unwrap_or_default();
            let edit = HabitEdit {
                name: name.unwrap_or(current.name),
                description: description.unwrap_or(current.description),
                emoji: emoji.unwrap_or(current.emoji),
            };
            let habit = dash.edit_habit(index, edit)?;
            println!("Habit updated: {index}");
            println!("{}", serde_json::to_string_pretty(&habit)?);
        }
        HabitAction::Delete { index } => {
            let habit = dash.delete_habit(index)?;
            println!("Habit deleted: {}", habit.name);
        }
        HabitAction::Done { index, today } => {
            let update = dash.complete_habit(index, today_or(today))?;
            match update.outcome {
                StreakOutcome::AlreadyCompleted => {
                    println!("Already completed today (streak: {})", update.streak)
                }
                StreakOutcome::Extended => println!("Streak extended: {}", update.streak),
                StreakOutcome::Restarted => println!("Streak started: {}", update.streak),
            }
        }
    }
    Ok(())
}
