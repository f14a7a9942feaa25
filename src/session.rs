//! Scratch state the user builds up while composing an entry. It lives for the
//! whole run of the app and is merged into an entry only when the entry is
//! saved, after which the caller clears it.

use chrono::NaiveDate;
use serde_json::Map;

use crate::diary_entry::{
    format_entry_date, parse_tags, DiaryEntry, Mood, TodoItem, DEFAULT_TITLE, DEFAULT_USERNAME,
};

pub const QUOTES: [&str; 5] = [
    "The only limit to our realization of tomorrow is our doubts of today. – Franklin D. Roosevelt",
    "Do what you can, with what you have, where you are. – Theodore Roosevelt",
    "It always seems impossible until it’s done. – Nelson Mandela",
    "Success is not final, failure is not fatal: It is the courage to continue that counts. – Winston Churchill",
    "Believe you can and you're halfway there. – Theodore Roosevelt",
];

/// The fields typed straight into the write screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryForm {
    pub date: NaiveDate,
    pub mood: Mood,
    pub title: String,
    pub username: String,
    pub text: String,
    pub tags_input: String,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionContext {
    todo_list: Vec<TodoItem>,
    goal: Option<String>,
    selected_quote: Option<String>,
}

impl SessionContext {
    pub fn new() -> Self {
        SessionContext::default()
    }

    pub fn todo_list(&self) -> &[TodoItem] {
        &self.todo_list
    }

    pub fn goal(&self) -> Option<&str> {
        self.goal.as_deref()
    }

    pub fn selected_quote(&self) -> Option<&str> {
        self.selected_quote.as_deref()
    }

    /// Returns false when `task` is blank and nothing was added.
    pub fn add_task(&mut self, task: &str) -> bool {
        if task.is_empty() {
            return false;
        }
        self.todo_list.push(TodoItem::new(task));
        true
    }

    pub fn toggle_task(&mut self, index: usize) {
        if let Some(item) = self.todo_list.get_mut(index) {
            item.completed = !item.completed;
        }
    }

    pub fn clear_tasks(&mut self) {
        self.todo_list.clear();
    }

    pub fn save_goal(&mut self, goal: impl Into<String>) {
        self.goal = Some(goal.into());
    }

    pub fn select_quote(&mut self, index: usize) {
        if let Some(quote) = QUOTES.get(index) {
            self.selected_quote = Some(quote.to_string());
        }
    }

    pub fn clear(&mut self) {
        *self = SessionContext::default();
    }

    /// Builds the entry to store from `form` plus the scratch state. The
    /// session is left as it is; clear it once the entry is on disk.
    pub fn build_entry(&self, form: EntryForm) -> DiaryEntry {
        DiaryEntry {
            title: non_empty_or(form.title, DEFAULT_TITLE),
            date: format_entry_date(form.date),
            mood: form.mood,
            text: form.text,
            tags: parse_tags(&form.tags_input),
            username: non_empty_or(form.username, DEFAULT_USERNAME),
            image: form.image,
            todo_list: self.todo_list.clone(),
            goal: self.goal.clone().unwrap_or_default(),
            quote: self.selected_quote.clone().unwrap_or_default(),
            extra: Map::new(),
        }
    }
}

fn non_empty_or(value: String, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> EntryForm {
        EntryForm {
            date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            mood: Mood::Excited,
            title: "Beach Day".to_string(),
            username: "Sam".to_string(),
            text: "Sunny and warm.".to_string(),
            tags_input: "Travel, , Summer ".to_string(),
            image: None,
        }
    }

    #[test]
    fn build_entry_merges_scratch_state() {
        let mut session = SessionContext::new();
        assert!(session.add_task("Pack towel"));
        assert!(session.add_task("Buy sunscreen"));
        session.toggle_task(1);
        session.save_goal("Swim every day");
        session.select_quote(4);

        let entry = session.build_entry(form());
        assert_eq!(entry.title, "Beach Day");
        assert_eq!(entry.date, "2024-01-05 (Friday)");
        assert_eq!(entry.mood, Mood::Excited);
        assert_eq!(entry.tags, vec!["Travel", "Summer"]);
        assert_eq!(entry.todo_list.len(), 2);
        assert!(!entry.todo_list[0].completed);
        assert!(entry.todo_list[1].completed);
        assert_eq!(entry.goal, "Swim every day");
        assert_eq!(entry.quote, QUOTES[4]);
    }

    #[test]
    fn building_an_entry_keeps_the_drafts() {
        let mut session = SessionContext::new();
        session.add_task("Call mom");
        session.save_goal("Rest");
        session.select_quote(0);
        let before = session.clone();

        session.build_entry(form());
        assert_eq!(session, before);
    }

    #[test]
    fn blank_title_and_name_take_defaults() {
        let mut form = form();
        form.title.clear();
        form.username.clear();

        let entry = SessionContext::new().build_entry(form);
        assert_eq!(entry.title, "Untitled");
        assert_eq!(entry.username, "Unknown User");
        assert_eq!(entry.goal, "");
        assert_eq!(entry.quote, "");
    }

    #[test]
    fn blank_tasks_and_unknown_quotes_are_ignored() {
        let mut session = SessionContext::new();
        assert!(!session.add_task(""));
        session.select_quote(QUOTES.len());
        session.toggle_task(3);
        assert!(session.todo_list().is_empty());
        assert_eq!(session.selected_quote(), None);
    }

    #[test]
    fn clear_tasks_keeps_goal_and_quote() {
        let mut session = SessionContext::new();
        session.add_task("Stretch");
        session.save_goal("Run 5k");
        session.clear_tasks();
        assert!(session.todo_list().is_empty());
        assert_eq!(session.goal(), Some("Run 5k"));

        session.clear();
        assert_eq!(session.goal(), None);
    }
}
