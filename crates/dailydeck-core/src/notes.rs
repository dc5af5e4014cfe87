//! Notes board.
//!
//! Notes are structured `{title, content, date}` records. Boards saved as a
//! single HTML string by older builds do not deserialize into this shape and
//! load as an empty board.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::habit::UNTITLED;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub title: String,
    #[serde(default)]
    pub content: String,
    /// Creation time.
    pub date: DateTime<Utc>,
}

impl Note {
    fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.content.to_lowercase().contains(needle)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteBoard {
    notes: Vec<Note>,
}

impl NoteBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Note> {
        self.notes.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Note> {
        self.notes.iter()
    }

    fn check_index(&self, index: usize) -> Result<(), ValidationError> {
        if index < self.notes.len() {
            Ok(())
        } else {
            Err(ValidationError::OutOfBounds {
                collection: "notes",
                index,
                len: self.notes.len(),
            })
        }
    }

    /// Append a note stamped with `now`. Blank titles become [`UNTITLED`].
    pub fn add(&mut self, title: &str, content: &str, now: DateTime<Utc>) -> usize {
        let title = title.trim();
        self.notes.push(Note {
            title: if title.is_empty() { UNTITLED.to_string() } else { title.to_string() },
            content: content.trim().to_string(),
            date: now,
        });
        self.notes.len() - 1
    }

    /// Replace title and content. The creation date is kept.
    ///
    /// # Errors
    /// Returns [`ValidationError::OutOfBounds`] for a bad index.
    pub fn edit(&mut self, index: usize, title: &str, content: &str) -> Result<&Note, ValidationError> {
        self.check_index(index)?;
        let note = &mut self.notes[index];
        note.title = if title.is_empty() { UNTITLED.to_string() } else { title.to_string() };
        note.content = content.to_string();
        Ok(note)
    }

    /// # Errors
    /// Returns [`ValidationError::OutOfBounds`] for a bad index.
    pub fn delete(&mut self, index: usize) -> Result<Note, ValidationError> {
        self.check_index(index)?;
        Ok(self.notes.remove(index))
    }

    /// Case-insensitive search over title and content.
    ///
    /// Yields matches with their index on the board. An empty term
    /// matches every note.
    pub fn search(&self, term: &str) -> Vec<(usize, &Note)> {
        let needle = term.to_lowercase();
        self.notes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.matches(&needle))
            .collect()
    }
}
