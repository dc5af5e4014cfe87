//! To-do list commands for CLI.

use clap::Subcommand;
use dailydeck_core::{Config, Todo, TodoFilter};
use serde::Serialize;

use super::{open_dashboard, CmdResult};

#[derive(Subcommand)]
pub enum TodoAction {
    /// Add a todo
    Add {
        /// Todo text
        text: String,
        /// Category (default from `todo.default_category`)
        #[arg(long)]
        category: Option<String>,
    },
    /// List todos
    List {
        /// Only show this category ("all" shows everything)
        #[arg(long, default_value = "all")]
        category: String,
        /// Print JSON instead of a list
        #[arg(long)]
        json: bool,
    },
    /// Mark a todo done
    Done {
        /// Todo index (from `todo list`)
        index: usize,
    },
    /// Mark a todo not done
    Undo {
        /// Todo index (from `todo list`)
        index: usize,
    },
    /// Delete a todo
    Delete {
        /// Todo index (from `todo list`)
        index: usize,
    },
    /// Remove all completed todos
    Clear,
    /// List categories in use
    Categories,
}

#[derive(Serialize)]
struct TodoRow<'a> {
    index: usize,
    #[serde(flatten)]
    todo: &'a Todo,
}

pub fn run(action: TodoAction, config: &Config) -> CmdResult {
    let mut dash = open_dashboard(config)?;

    match action {
        TodoAction::Add { text, category } => {
            let category = category.unwrap_or_else(|| config.todo.default_category.clone());
            let index = dash.add_todo(&text, &category)?;
            println!("Todo added: {index}");
        }
        TodoAction::List { category, json } => {
            let filter = TodoFilter::parse(&category);
            let rows: Vec<_> = dash
                .todos()
                .filter(&filter)
                .map(|(index, todo)| TodoRow { index, todo })
                .collect();

            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                for row in rows {
                    let mark = if row.todo.done { "x" } else { " " };
                    println!(
                        "{:>3} [{mark}] {} ({})",
                        row.index, row.todo.text, row.todo.category
                    );
                }
            }
        }
        TodoAction::Done { index } => {
            let todo = dash.set_todo_done(index, true)?;
            println!("Done: {}", todo.text);
        }
        TodoAction::Undo { index } => {
            let todo = dash.set_todo_done(index, false)?;
            println!("Reopened: {}", todo.text);
        }
        TodoAction::Delete { index } => {
            let todo = dash.delete_todo(index)?;
            println!("Todo deleted: {}", todo.text);
        }
        TodoAction::Clear => {
            let removed = dash.clear_completed_todos()?;
            println!("Cleared {removed} completed todo(s)");
        }
        TodoAction::Categories => {
            for category in dash.todos().categories() {
                println!("{category}");
            }
        }
    }
    Ok(())
}
