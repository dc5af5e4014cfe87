//! Daily completion streaks.
//!
//! A streak counts consecutive calendar days on which a habit was marked
//! complete. Marking complete classifies today against the last completion
//! day: same day, next day, or a gap. Dates are compared as day numbers so
//! the result does not depend on how the caller formats them.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// How a completion affected the streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreakOutcome {
    /// Already completed today; nothing changed.
    AlreadyCompleted,
    /// Completed yesterday; streak grew by one.
    Extended,
    /// Never completed, or at least one day was missed; streak is now 1.
    Restarted,
}

/// Result of [`advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakUpdate {
    pub outcome: StreakOutcome,
    pub streak: u32,
    pub last: NaiveDate,
}

impl StreakUpdate {
    /// Whether the habit record needs to be rewritten.
    pub fn changed(&self) -> bool {
        self.outcome != StreakOutcome::AlreadyCompleted
    }
}

/// Days since the common era. Only differences are meaningful.
fn day_number(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce())
}

/// Compute the streak after marking a habit complete on `today`.
///
/// `last` in the future is treated like a gap: the habit restarts at 1.
pub fn advance(today: NaiveDate, last: Option<NaiveDate>, streak: u32) -> StreakUpdate {
    let gap = last.map(|last| day_number(today) - day_number(last));

    match gap {
        Some(0) => StreakUpdate {
            outcome: StreakOutcome::AlreadyCompleted,
            streak,
            last: today,
        },
        Some(1) => StreakUpdate {
            outcome: StreakOutcome::Extended,
            streak: streak.saturating_add(1),
            last: today,
        },
        _ => StreakUpdate {
            outcome: StreakOutcome::Restarted,
            streak: 1,
            last: today,
        },
    }
}

/// The streak to display on `today` without mutating anything.
///
/// A streak whose last completion is older than yesterday is already
/// broken and shows as 0; it will restart at 1 on the next completion.
pub fn current_streak(today: NaiveDate, last: Option<NaiveDate>, streak: u32) -> u32 {
    match last.map(|last| day_number(today) - day_number(last)) {
        Some(0 | 1) => streak,
        _ => 0,
    }
}
