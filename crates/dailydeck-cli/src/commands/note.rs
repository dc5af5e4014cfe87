//! Notes board commands for CLI.

use clap::Subcommand;
use dailydeck_core::{Config, Note};
use serde::Serialize;

use super::{open_dashboard, CmdResult};

#[derive(Subcommand)]
pub enum NoteAction {
    /// Create a note
    Add {
        /// Title (blank becomes "Untitled")
        #[arg(long, default_value = "")]
        title: String,
        /// Body text
        #[arg(long, default_value = "")]
        content: String,
    },
    /// List notes, optionally filtered by a search term
    List {
        /// Case-insensitive search over title and content
        #[arg(long, default_value = "")]
        search: String,
        /// Print JSON instead of cards
        #[arg(long)]
        json: bool,
    },
    /// Edit a note; omitted fields keep their current value
    Edit {
        /// Note index (from `note list`)
        index: usize,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: Option<String>,
    },
    /// Delete a note
    Delete {
        /// Note index (from `note list`)
        index: usize,
    },
}

#[derive(Serialize)]
struct NoteRow<'a> {
    index: usize,
    #[serde(flatten)]
    note: &'a Note,
}

pub fn run(action: NoteAction, config: &Config) -> CmdResult {
    let mut dash = open_dashboard(config)?;

    match action {
        NoteAction::Add { title, content } => {
            let index = dash.add_note(&title, &content, chrono::Utc::now())?;
            println!("Note created: {index}");
        }
        NoteAction::List { search, json } => {
            let rows: Vec<_> = dash
                .notes()
                .search(&search)
                .into_iter()
                .map(|(index, note)| NoteRow { index, note })
                .collect();

            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else if rows.is_empty() {
                if search.is_empty() {
                    println!("No notes yet. Use `note add` to create one!");
                } else {
                    println!("Not found");
                }
            } else {
                for row in rows {
                    let content = if row.note.content.is_empty() {
                        "No content"
                    } else {
                        row.note.content.as_str()
                    };
                    println!(
                        "{:>3} {} [{}]\n    {}",
                        row.index,
                        row.note.title,
                        row.note.date.format("%b %-d"),
                        content
                    );
                }
            }
        }
        NoteAction::Edit {
            index,
            title,
            content,
        } => {
            let (cur_title, cur_content) = dash
                .notes()
                .get(index)
                .map(|n| (n.title.clone(), n.content.clone()))
                .unwrap_or_default();
            let note = dash.edit_note(
                index,
                &title.unwrap_or(cur_title),
                &content.unwrap_or(cur_content),
            )?;
            println!("Note updated: {}", note.title);
        }
        NoteAction::Delete { index } => {
            let note = dash.delete_note(index)?;
            println!("Note deleted: {}", note.title);
        }
    }
    Ok(())
}
