//! Habit tracker.
//!
//! Habits are kept in insertion order and addressed by position. Positions
//! shift on delete, so callers must re-read indices after removing a habit.

mod streak;

pub use streak::{advance, current_streak, StreakOutcome, StreakUpdate};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Emoji used when a habit is added without one.
pub const DEFAULT_EMOJI: &str = "😊";
/// Name used when an edit leaves the name blank.
pub const UNTITLED: &str = "Untitled";
/// Maximum emoji length, in UTF-16 code units.
///
/// Two units hold one astral-plane emoji or two BMP symbols.
pub const EMOJI_MAX_UTF16_UNITS: usize = 2;

fn default_emoji() -> String {
    DEFAULT_EMOJI.to_string()
}

/// One tracked habit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_emoji")]
    pub emoji: String,
    #[serde(default)]
    pub streak: u32,
    /// Day of the last completion.
    #[serde(default)]
    pub last: Option<NaiveDate>,
}

impl Habit {
    /// Streak as of `today`; 0 if it has already been broken.
    pub fn current_streak(&self, today: NaiveDate) -> u32 {
        current_streak(today, self.last, self.streak)
    }

    pub fn completed_on(&self, day: NaiveDate) -> bool {
        self.last == Some(day)
    }
}

/// A full replacement of a habit's editable fields.
///
/// Applied all at once; there is no partial edit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HabitEdit {
    pub name: String,
    pub description: String,
    pub emoji: String,
}

impl HabitEdit {
    /// Seed an edit with the habit's current values.
    pub fn from_habit(habit: &Habit) -> Self {
        Self {
            name: habit.name.clone(),
            description: habit.description.clone(),
            emoji: habit.emoji.clone(),
        }
    }
}

/// Longest prefix of `s` that fits in `max_units` UTF-16 code units.
///
/// Cuts only at character boundaries, so a surrogate pair is never split.
fn truncate_utf16(s: &str, max_units: usize) -> String {
    let mut used = 0;
    s.chars()
        .take_while(|c| {
            used += c.len_utf16();
            used <= max_units
        })
        .collect()
}

/// Ordered collection of habits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HabitStore {
    habits: Vec<Habit>,
}

impl HabitStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.habits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.habits.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Habit> {
        self.habits.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Habit> {
        self.habits.iter()
    }

    fn check_index(&self, index: usize) -> Result<(), ValidationError> {
        if index < self.habits.len() {
            Ok(())
        } else {
            Err(ValidationError::OutOfBounds {
                collection: "habits",
                index,
                len: self.habits.len(),
            })
        }
    }

    /// Append a new habit with no completions. Returns its index.
    ///
    /// # Errors
    /// Returns [`ValidationError::EmptyField`] if `name` is blank.
    pub fn add(
        &mut self,
        name: &str,
        description: Option<&str>,
        emoji: Option<&str>,
    ) -> Result<usize, ValidationError> {
        self.add_with_default_emoji(name, description, emoji, DEFAULT_EMOJI)
    }

    /// Like [`HabitStore::add`], with a caller-chosen fallback emoji.
    ///
    /// # Errors
    /// Returns [`ValidationError::EmptyField`] if `name` is blank.
    pub fn add_with_default_emoji(
        &mut self,
        name: &str,
        description: Option<&str>,
        emoji: Option<&str>,
        default_emoji: &str,
    ) -> Result<usize, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyField { field: "habit name" });
        }

        let emoji = emoji.map(str::trim).filter(|e| !e.is_empty()).unwrap_or(default_emoji);

        self.habits.push(Habit {
            name: name.to_string(),
            description: description.unwrap_or_default().trim().to_string(),
            emoji: truncate_utf16(emoji, EMOJI_MAX_UTF16_UNITS),
            streak: 0,
            last: None,
        });
        Ok(self.habits.len() - 1)
    }

    /// Overwrite the editable fields of the habit at `index`.
    ///
    /// A blank name becomes [`UNTITLED`]. Streak data is left untouched.
    ///
    /// # Errors
    /// Returns [`ValidationError::OutOfBounds`] for a bad index.
    pub fn edit(&mut self, index: usize, edit: HabitEdit) -> Result<&Habit, ValidationError> {
        self.check_index(index)?;
        let habit = &mut self.habits[index];

        let name = edit.name.trim();
        habit.name = if name.is_empty() { UNTITLED.to_string() } else { name.to_string() };
        habit.description = edit.description.trim().to_string();
        habit.emoji = truncate_utf16(edit.emoji.trim(), EMOJI_MAX_UTF16_UNITS);
        Ok(habit)
    }

    /// Remove and return the habit at `index`.
    ///
    /// # Errors
    /// Returns [`ValidationError::OutOfBounds`] for a bad index.
    pub fn delete(&mut self, index: usize) -> Result<Habit, ValidationError> {
        self.check_index(index)?;
        Ok(self.habits.remove(index))
    }

    /// Mark the habit at `index` complete on `today`.
    ///
    /// # Errors
    /// Returns [`ValidationError::OutOfBounds`] for a bad index.
    pub fn mark_complete(
        &mut self,
        index: usize,
        today: NaiveDate,
    ) -> Result<StreakUpdate, ValidationError> {
        self.check_index(index)?;
        let habit = &mut self.habits[index];
        let update = advance(today, habit.last, habit.streak);
        if update.changed() {
            habit.streak = update.streak;
            habit.last = Some(update.last);
        }
        Ok(update)
    }
}
