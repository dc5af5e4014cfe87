//! # Dailydeck Core Library
//!
//! This library provides the state and logic behind the Dailydeck personal
//! dashboard: a habit tracker with daily streaks, a categorized to-do list,
//! a notes board, and theme/sidebar preferences. The CLI binary is a thin
//! view layer over the same core library.
//!
//! ## Architecture
//!
//! - **Streak Engine**: a pure function classifying a completion as same-day,
//!   next-day or broken, on calendar day numbers
//! - **Containers**: [`HabitStore`], [`TodoList`] and [`NoteBoard`], ordered
//!   and addressed by position
//! - **Storage**: a [`KvStore`] trait with SQLite and in-memory backends,
//!   JSON values, and TOML-based configuration
//! - **Dashboard**: the owned state object; every mutation writes through
//!
//! ## Key Components
//!
//! - [`Dashboard`]: load, mutate and persist all dashboard state
//! - [`advance`]: the streak transition
//! - [`Config`]: application configuration management

pub mod dashboard;
pub mod error;
pub mod habit;
pub mod notes;
pub mod prefs;
pub mod storage;
pub mod todo;

pub use dashboard::{Dashboard, DashboardSettings};
pub use error::{ConfigError, CoreError, StorageError, ValidationError};
pub use habit::{advance, Habit, HabitEdit, HabitStore, StreakOutcome, StreakUpdate};
pub use notes::{Note, NoteBoard};
pub use prefs::Theme;
pub use storage::{Config, KvStore, MemoryKv, SqliteKv};
pub use todo::{Todo, TodoFilter, TodoList};
