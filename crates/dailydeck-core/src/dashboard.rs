//! The dashboard state object.
//!
//! [`Dashboard`] owns the key-value store and every container loaded from
//! it. All mutations go through its methods, and each one writes the
//! container it touched back to the store before returning. When a write
//! fails the in-memory change is kept and the error is returned.

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::Result;
use crate::habit::{Habit, HabitEdit, HabitStore, StreakUpdate, DEFAULT_EMOJI};
use crate::notes::{Note, NoteBoard};
use crate::prefs::{sidebar_collapsed_for_width, Theme, MOBILE_BREAKPOINT_PX};
use crate::storage::{load, save, KvStore};
use crate::todo::{Todo, TodoList};

/// Storage keys for each persisted container.
pub mod keys {
    pub const THEME: &str = "theme";
    pub const SIDEBAR_COLLAPSED: &str = "sidebarCollapsed";
    pub const TODOS: &str = "todos";
    pub const NOTES: &str = "notes";
    pub const HABITS: &str = "habits";
}

/// Defaults applied to new records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSettings {
    pub default_emoji: String,
    pub mobile_breakpoint: u32,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            default_emoji: DEFAULT_EMOJI.to_string(),
            mobile_breakpoint: MOBILE_BREAKPOINT_PX,
        }
    }
}

impl From<&crate::storage::Config> for DashboardSettings {
    /// A blank configured emoji falls back to [`DEFAULT_EMOJI`].
    fn from(cfg: &crate::storage::Config) -> Self {
        let emoji = cfg.ui.default_emoji.trim();
        Self {
            default_emoji: if emoji.is_empty() { DEFAULT_EMOJI } else { emoji }.to_string(),
            mobile_breakpoint: cfg.ui.mobile_breakpoint,
        }
    }
}

/// Theme, sidebar state, todos, notes and habits loaded from one store.
///
/// Mutators write the container they changed back to the store.
pub struct Dashboard<S: KvStore> {
    store: S,
    settings: DashboardSettings,
    theme: Theme,
    sidebar_collapsed: bool,
    todos: TodoList,
    notes: NoteBoard,
    habits: HabitStore,
}

impl<S: KvStore> Dashboard<S> {
    /// Load every container from `store`, using defaults for missing keys.
    ///
    /// # Errors
    /// Returns an error if the store cannot be read.
    pub fn load(store: S) -> Result<Self> {
        Self::load_with(store, DashboardSettings::default())
    }

    /// # Errors
    /// Returns an error if the store cannot be read.
    pub fn load_with(mut store: S, settings: DashboardSettings) -> Result<Self> {
        let theme = load(&mut store, keys::THEME, Theme::default())?;
        let sidebar_collapsed = load(&mut store, keys::SIDEBAR_COLLAPSED, false)?;
        let todos = load(&mut store, keys::TODOS, TodoList::new())?;
        let notes = load(&mut store, keys::NOTES, NoteBoard::new())?;
        let habits = load(&mut store, keys::HABITS, HabitStore::new())?;

        tracing::debug!(
            todos = todos.len(),
            notes = notes.len(),
            habits = habits.len(),
            "dashboard loaded"
        );

        Ok(Self {
            store,
            settings,
            theme,
            sidebar_collapsed,
            todos,
            notes,
            habits,
        })
    }

    /// Give back the underlying store.
    pub fn into_store(self) -> S {
        self.store
    }

    // --- preferences ---

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// # Errors
    /// Returns an error if the theme cannot be persisted.
    pub fn set_theme(&mut self, theme: Theme) -> Result<Theme> {
        self.theme = theme;
        save(&mut self.store, keys::THEME, &self.theme)?;
        Ok(self.theme)
    }

    /// Switch between dark and light. Returns the new theme.
    ///
    /// # Errors
    /// Returns an error if the theme cannot be persisted.
    pub fn toggle_theme(&mut self) -> Result<Theme> {
        self.set_theme(self.theme.toggled())
    }

    pub fn sidebar_collapsed(&self) -> bool {
        self.sidebar_collapsed
    }

    /// # Errors
    /// Returns an error if the state cannot be persisted.
    pub fn set_sidebar_collapsed(&mut self, collapsed: bool) -> Result<bool> {
        self.sidebar_collapsed = collapsed;
        save(&mut self.store, keys::SIDEBAR_COLLAPSED, &self.sidebar_collapsed)?;
        Ok(self.sidebar_collapsed)
    }

    /// Apply the sidebar rule for a viewport `width_px` wide.
    ///
    /// Narrow viewports collapse the sidebar and store that choice; wider
    /// ones re-apply the stored choice.
    ///
    /// # Errors
    /// Returns an error if the state cannot be persisted.
    pub fn fit_sidebar(&mut self, width_px: u32) -> Result<bool> {
        let collapsed = sidebar_collapsed_for_width(
            width_px,
            self.settings.mobile_breakpoint,
            self.sidebar_collapsed,
        );
        self.set_sidebar_collapsed(collapsed)
    }

    // --- todos ---

    pub fn todos(&self) -> &TodoList {
        &self.todos
    }

    /// # Errors
    /// Returns a validation error for blank text, or a storage error.
    pub fn add_todo(&mut self, text: &str, category: &str) -> Result<usize> {
        let index = self.todos.add(text, category)?;
        self.persist_todos()?;
        Ok(index)
    }

    /// # Errors
    /// Returns a validation error for a bad index, or a storage error.
    pub fn set_todo_done(&mut self, index: usize, done: bool) -> Result<Todo> {
        let todo = self.todos.set_done(index, done)?.clone();
        self.persist_todos()?;
        Ok(todo)
    }

    /// # Errors
    /// Returns a validation error for a bad index, or a storage error.
    pub fn delete_todo(&mut self, index: usize) -> Result<Todo> {
        let todo = self.todos.delete(index)?;
        self.persist_todos()?;
        Ok(todo)
    }

    /// # Errors
    /// Returns an error if the list cannot be persisted.
    pub fn clear_completed_todos(&mut self) -> Result<usize> {
        let removed = self.todos.clear_completed();
        self.persist_todos()?;
        Ok(removed)
    }

    fn persist_todos(&mut self) -> Result<()> {
        save(&mut self.store, keys::TODOS, &self.todos)?;
        Ok(())
    }

    // --- notes ---

    pub fn notes(&self) -> &NoteBoard {
        &self.notes
    }

    /// # Errors
    /// Returns an error if the board cannot be persisted.
    pub fn add_note(&mut self, title: &str, content: &str, now: DateTime<Utc>) -> Result<usize> {
        let index = self.notes.add(title, content, now);
        self.persist_notes()?;
        Ok(index)
    }

    /// # Errors
    /// Returns a validation error for a bad index, or a storage error.
    pub fn edit_note(&mut self, index: usize, title: &str, content: &str) -> Result<Note> {
        let note = self.notes.edit(index, title, content)?.clone();
        self.persist_notes()?;
        Ok(note)
    }

    /// # Errors
    /// Returns a validation error for a bad index, or a storage error.
    pub fn delete_note(&mut self, index: usize) -> Result<Note> {
        let note = self.notes.delete(index)?;
        self.persist_notes()?;
        Ok(note)
    }

    fn persist_notes(&mut self) -> Result<()> {
        save(&mut self.store, keys::NOTES, &self.notes)?;
        Ok(())
    }

    // --- habits ---

    pub fn habits(&self) -> &HabitStore {
        &self.habits
    }

    /// # Errors
    /// Returns a validation error for a blank name, or a storage error.
    pub fn add_habit(
        &mut self,
        name: &str,
        description: Option<&str>,
        emoji: Option<&str>,
    ) -> Result<usize> {
        let index = self.habits.add_with_default_emoji(
            name,
            description,
            emoji,
            &self.settings.default_emoji,
        )?;
        self.persist_habits()?;
        Ok(index)
    }

    /// # Errors
    /// Returns a validation error for a bad index, or a storage error.
    pub fn edit_habit(&mut self, index: usize, edit: HabitEdit) -> Result<Habit> {
        let habit = self.habits.edit(index, edit)?.clone();
        self.persist_habits()?;
        Ok(habit)
    }

    /// # Errors
    /// Returns a validation error for a bad index, or a storage error.
    pub fn delete_habit(&mut self, index: usize) -> Result<Habit> {
        let habit = self.habits.delete(index)?;
        self.persist_habits()?;
        Ok(habit)
    }

    /// Mark the habit at `index` complete on `today`.
    ///
    /// # Errors
    /// Returns a validation error for a bad index, or a storage error.
    pub fn complete_habit(&mut self, index: usize, today: NaiveDate) -> Result<StreakUpdate> {
        let update = self.habits.mark_complete(index, today)?;
        if update.changed() {
            self.persist_habits()?;
            tracing::info!(
                index,
                streak = update.streak,
                outcome = ?update.outcome,
                "habit completed"
            );
        }
        Ok(update)
    }

    fn persist_habits(&mut self) -> Result<()> {
        save(&mut self.store, keys::HABITS, &self.habits)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CoreError, StorageError, ValidationError};
    use crate::storage::MemoryKv;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    /// Store whose writes always fail.
    #[derive(Default)]
    struct ReadOnlyKv(MemoryKv);

    impl KvStore for ReadOnlyKv {
        fn get(&self, key: &str) -> std::result::Result<Option<String>, StorageError> {
            self.0.get(key)
        }
        fn set(&mut self, _key: &str, _value: &str) -> std::result::Result<(), StorageError> {
            Err(StorageError::QueryFailed("disk full".into()))
        }
    }

    #[test]
    fn empty_store_loads_defaults() {
        let dash = Dashboard::load(MemoryKv::new()).unwrap();
        assert_eq!(dash.theme(), Theme::Light);
        assert!(!dash.sidebar_collapsed());
        assert!(dash.todos().is_empty());
        assert!(dash.notes().is_empty());
        assert!(dash.habits().is_empty());
    }

    #[test]
    fn every_mutation_writes_through() {
        let mut dash = Dashboard::load(MemoryKv::new()).unwrap();
        dash.toggle_theme().unwrap();
        dash.add_todo("Ship it", "work").unwrap();
        dash.add_note("Title", "Body", Utc::now()).unwrap();
        dash.add_habit("Run", None, None).unwrap();
        dash.complete_habit(0, date("2024-01-10")).unwrap();

        let store = dash.into_store();
        assert_eq!(store.get(keys::THEME).unwrap().as_deref(), Some("\"dark\""));
        assert!(store.get(keys::TODOS).unwrap().unwrap().contains("Ship it"));
        assert!(store.get(keys::NOTES).unwrap().unwrap().contains("Body"));
        assert!(store
            .get(keys::HABITS)
            .unwrap()
            .unwrap()
            .contains("\"last\":\"2024-01-10\""));
    }

    #[test]
    fn rejected_add_does_not_write() {
        let mut dash = Dashboard::load(MemoryKv::new()).unwrap();
        let err = dash.add_habit("  ", None, None).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::EmptyField { .. })
        ));
        assert!(dash.into_store().get(keys::HABITS).unwrap().is_none());
    }

    #[test]
    fn failed_write_keeps_memory_state() {
        let mut dash = Dashboard::load(ReadOnlyKv::default()).unwrap();
        let err = dash.add_habit("Run", None, None).unwrap_err();
        assert!(matches!(err, CoreError::Storage(_)));
        assert_eq!(dash.habits().len(), 1);
    }

    #[test]
    fn same_day_completion_skips_the_write() {
        let mut dash = Dashboard::load(MemoryKv::new()).unwrap();
        dash.add_habit("Run", None, None).unwrap();
        dash.complete_habit(0, date("2024-01-10")).unwrap();

        // Any write would fail on this store.
        let mut dash = Dashboard::load(ReadOnlyKv(dash.into_store())).unwrap();
        let update = dash.complete_habit(0, date("2024-01-10")).unwrap();
        assert!(!update.changed());
        assert!(dash.complete_habit(0, date("2024-01-11")).is_err());
    }

    #[test]
    fn reload_reproduces_state() {
        let mut dash = Dashboard::load(MemoryKv::new()).unwrap();
        dash.set_theme(Theme::Dark).unwrap();
        dash.set_sidebar_collapsed(true).unwrap();
        dash.add_todo("a", "work").unwrap();
        dash.add_note("n", "c", Utc::now()).unwrap();
        dash.add_habit("h", Some("d"), Some("🔥")).unwrap();

        let (theme, todos, notes, habits) = (
            dash.theme(),
            dash.todos().clone(),
            dash.notes().clone(),
            dash.habits().clone(),
        );
        let again = Dashboard::load(dash.into_store()).unwrap();
        assert_eq!(again.theme(), theme);
        assert!(again.sidebar_collapsed());
        assert_eq!(again.todos(), &todos);
        assert_eq!(again.notes(), &notes);
        assert_eq!(again.habits(), &habits);
    }

    #[test]
    fn fit_sidebar_collapses_on_narrow_and_restores_on_wide() {
        let mut dash = Dashboard::load(MemoryKv::new()).unwrap();
        assert!(!dash.fit_sidebar(1200).unwrap());
        assert!(dash.fit_sidebar(500).unwrap());
        // The narrow viewport stored its collapse, so it sticks.
        assert!(dash.fit_sidebar(1200).unwrap());

        dash.set_sidebar_collapsed(false).unwrap();
        assert!(!dash.fit_sidebar(1200).unwrap());
    }

    #[test]
    fn settings_supply_default_emoji_and_breakpoint() {
        let settings = DashboardSettings {
            default_emoji: "⭐".into(),
            mobile_breakpoint: 400,
        };
        let mut dash = Dashboard::load_with(MemoryKv::new(), settings).unwrap();
        dash.add_habit("Journal", None, None).unwrap();
        assert_eq!(dash.habits().get(0).unwrap().emoji, "⭐");
        assert!(!dash.fit_sidebar(500).unwrap());
    }

    #[test]
    fn blank_configured_emoji_falls_back_to_default() {
        let mut cfg = crate::storage::Config::default();
        cfg.set("ui.default_emoji", "  ").unwrap();
        let settings = DashboardSettings::from(&cfg);
        assert_eq!(settings.default_emoji, DEFAULT_EMOJI);

        let mut dash = Dashboard::load_with(MemoryKv::new(), settings).unwrap();
        dash.add_habit("Journal", None, None).unwrap();
        assert_eq!(dash.habits().get(0).unwrap().emoji, "😊");
    }

    #[test]
    fn configured_emoji_is_trimmed() {
        let mut cfg = crate::storage::Config::default();
        cfg.ui.default_emoji = " ⭐ ".into();
        assert_eq!(DashboardSettings::from(&cfg).default_emoji, "⭐");
    }

    #[test]
    fn corrupt_container_is_backed_up_on_load() {
        let mut store = MemoryKv::new();
        store.set(keys::TODOS, "not json").unwrap();
        let mut dash = Dashboard::load(store).unwrap();
        assert!(dash.todos().is_empty());

        dash.add_todo("fresh", "work").unwrap();
        let store = dash.into_store();
        assert_eq!(
            store.get(&crate::storage::corrupt_key(keys::TODOS)).unwrap().as_deref(),
            Some("not json")
        );
    }
}
