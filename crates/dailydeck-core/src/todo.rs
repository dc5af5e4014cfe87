//! Categorized to-do list.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// One to-do item. `category` is free text used for filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub text: String,
    pub category: String,
    #[serde(default)]
    pub done: bool,
}

/// Which todos a listing shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TodoFilter {
    #[default]
    All,
    Category(String),
}

impl TodoFilter {
    /// `"all"` selects everything; anything else is a category name.
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "" | "all" => TodoFilter::All,
            other => TodoFilter::Category(other.to_string()),
        }
    }

    pub fn matches(&self, todo: &Todo) -> bool {
        match self {
            TodoFilter::All => true,
            TodoFilter::Category(c) => todo.category == *c,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoList {
    items: Vec<Todo>,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Todo> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Todo> {
        self.items.iter()
    }

    fn item_mut(&mut self, index: usize) -> Result<&mut Todo, ValidationError> {
        let len = self.items.len();
        self.items.get_mut(index).ok_or(ValidationError::OutOfBounds {
            collection: "todos",
            index,
            len,
        })
    }

    /// Append an open todo. Returns its index.
    ///
    /// # Errors
    /// Returns [`ValidationError::EmptyField`] if `text` is blank.
    pub fn add(&mut self, text: &str, category: &str) -> Result<usize, ValidationError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyField { field: "todo text" });
        }
        self.items.push(Todo {
            text: text.to_string(),
            category: category.trim().to_string(),
            done: false,
        });
        Ok(self.items.len() - 1)
    }

    /// # Errors
    /// Returns [`ValidationError::OutOfBounds`] for a bad index.
    pub fn set_done(&mut self, index: usize, done: bool) -> Result<&Todo, ValidationError> {
        let item = self.item_mut(index)?;
        item.done = done;
        Ok(item)
    }

    /// # Errors
    /// Returns [`ValidationError::OutOfBounds`] for a bad index.
    pub fn delete(&mut self, index: usize) -> Result<Todo, ValidationError> {
        self.item_mut(index)?;
        Ok(self.items.remove(index))
    }

    /// Drop every completed todo. Returns how many were removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(|t| !t.done);
        before - self.items.len()
    }

    /// Todos matching `filter`, paired with their index in the full list.
    pub fn filter<'a>(
        &'a self,
        filter: &'a TodoFilter,
    ) -> impl Iterator<Item = (usize, &'a Todo)> + 'a {
        self.items
            .iter()
            .enumerate()
            .filter(move |(_, t)| filter.matches(t))
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for item in &self.items {
            if !seen.contains(&item.category.as_str()) {
                seen.push(&item.category);
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TodoList {
        let mut list = TodoList::new();
        list.add("Write report", "work").unwrap();
        list.add("Buy milk", "personal").unwrap();
        list.add("Review PR", "work").unwrap();
        list
    }

    #[test]
    fn add_rejects_blank_text() {
        let mut list = sample();
        assert_eq!(
            list.add("  ", "work").unwrap_err(),
            ValidationError::EmptyField { field: "todo text" }
        );
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn filter_by_category_keeps_list_indices() {
        let list = sample();
        let filter = TodoFilter::parse("work");
        let hits: Vec<_> = list.filter(&filter).map(|(i, t)| (i, t.text.as_str())).collect();
        assert_eq!(hits, [(0, "Write report"), (2, "Review PR")]);

        assert_eq!(list.filter(&TodoFilter::parse("all")).count(), 3);
        assert_eq!(list.filter(&TodoFilter::parse("errands")).count(), 0);
    }

    #[test]
    fn clear_completed_preserves_order() {
        let mut list = sample();
        list.add("Call mom", "personal").unwrap();
        list.set_done(0, true).unwrap();
        list.set_done(2, true).unwrap();

        assert_eq!(list.clear_completed(), 2);
        let texts: Vec<_> = list.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["Buy milk", "Call mom"]);
        assert_eq!(list.clear_completed(), 0);
    }

    #[test]
    fn set_done_and_undo() {
        let mut list = sample();
        assert!(list.set_done(1, true).unwrap().done);
        assert!(!list.set_done(1, false).unwrap().done);
        assert!(matches!(
            list.set_done(9, true),
            Err(ValidationError::OutOfBounds { index: 9, len: 3, .. })
        ));
    }

    #[test]
    fn delete_shifts_later_items() {
        let mut list = sample();
        assert_eq!(list.delete(0).unwrap().text, "Write report");
        assert_eq!(list.get(0).unwrap().text, "Buy milk");
        assert!(list.delete(5).is_err());
    }

    #[test]
    fn categories_are_distinct_in_first_seen_order() {
        assert_eq!(sample().categories(), ["work", "personal"]);
    }

    #[test]
    fn wire_format_matches_stored_layout() {
        let list: TodoList =
            serde_json::from_str(r#"[{"text":"a","category":"work","done":true}]"#).unwrap();
        assert!(list.get(0).unwrap().done);
        assert_eq!(
            serde_json::to_string(&list).unwrap(),
            r#"[{"text":"a","category":"work","done":true}]"#
        );
    }
}
