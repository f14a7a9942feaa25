use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use crate::error::{DiaryError, DiaryResult};

/// Storage format of `Entry::date`, e.g. `2024-01-05 (Friday)`.
pub const ENTRY_DATE_FORMAT: &str = "%Y-%m-%d (%A)";

pub const DEFAULT_TITLE: &str = "Untitled";
pub const DEFAULT_USERNAME: &str = "Unknown User";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Mood {
    #[default]
    Happy,
    Sad,
    Angry,
    Tired,
    Excited,
    /// A stored mood outside the picker's choices, kept verbatim.
    Other(String),
}

impl Mood {
    pub const ALL: [Mood; 5] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Angry,
        Mood::Tired,
        Mood::Excited,
    ];

    pub fn name(&self) -> &str {
        match self {
            Mood::Happy => "Happy",
            Mood::Sad => "Sad",
            Mood::Angry => "Angry",
            Mood::Tired => "Tired",
            Mood::Excited => "Excited",
            Mood::Other(name) => name,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Mood::Happy => "😀",
            Mood::Sad => "😢",
            Mood::Angry => "😠",
            Mood::Tired => "😴",
            Mood::Excited => "😎",
            Mood::Other(_) => "😊",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<String> for Mood {
    fn from(name: String) -> Self {
        Mood::ALL
            .iter()
            .find(|mood| mood.name() == name)
            .cloned()
            .unwrap_or(Mood::Other(name))
    }
}

impl From<Mood> for String {
    fn from(mood: Mood) -> Self {
        match mood {
            Mood::Other(name) => name,
            known => known.name().to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TodoItem {
    pub task: String,
    pub completed: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TodoItem {
    pub fn new(task: impl Into<String>) -> Self {
        TodoItem {
            task: task.into(),
            ..TodoItem::default()
        }
    }
}

/// One diary record, serialized with the same field names the storage
/// document has always used. Keys this version does not know about ride
/// along in `extra` so rewriting the file keeps them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiaryEntry {
    pub title: String,
    pub date: String,
    pub mood: Mood,
    pub text: String,
    pub tags: Vec<String>,
    pub username: String,
    pub image: Option<String>,
    pub todo_list: Vec<TodoItem>,
    pub goal: String,
    pub quote: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DiaryEntry {
    pub fn parsed_date(&self) -> DiaryResult<NaiveDate> {
        parse_entry_date(&self.date)
    }
}

pub fn format_entry_date(date: NaiveDate) -> String {
    date.format(ENTRY_DATE_FORMAT).to_string()
}

pub fn parse_entry_date(date: &str) -> DiaryResult<NaiveDate> {
    NaiveDate::parse_from_str(date, ENTRY_DATE_FORMAT).map_err(|source| DiaryError::DateParse {
        date: date.to_string(),
        source,
    })
}

/// Splits comma-separated tag input, trimming each token and dropping empty ones.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_dates_carry_the_weekday() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(format_entry_date(date), "2024-01-05 (Friday)");
        assert_eq!(parse_entry_date("2024-01-05 (Friday)").unwrap(), date);
    }

    #[test]
    fn malformed_dates_are_parse_errors() {
        for bad in ["", "2024-01-05", "yesterday", "2024-13-01 (Monday)"] {
            let err = parse_entry_date(bad).unwrap_err();
            assert!(matches!(err, DiaryError::DateParse { .. }), "{bad}");
        }
    }

    #[test]
    fn tags_are_trimmed_and_empty_tokens_dropped() {
        assert_eq!(
            parse_tags(" Travel, Work,, ,Health "),
            vec!["Travel", "Work", "Health"]
        );
        assert!(parse_tags("").is_empty());
        assert!(parse_tags(" , ,").is_empty());
    }

    #[test]
    fn moods_round_trip_through_their_names() {
        for mood in Mood::ALL {
            assert_eq!(Mood::from(mood.name().to_string()), mood);
            assert_eq!(
                serde_json::to_string(&mood).unwrap(),
                format!("\"{}\"", mood.name())
            );
        }
    }

    #[test]
    fn unknown_moods_are_kept_verbatim() {
        let mood: Mood = serde_json::from_str("\"Bored\"").unwrap();
        assert_eq!(mood, Mood::Other("Bored".to_string()));
        assert_eq!(mood.icon(), "😊");
        assert_eq!(serde_json::to_string(&mood).unwrap(), "\"Bored\"");
    }

    #[test]
    fn todo_items_tolerate_missing_and_extra_keys() {
        let item: TodoItem = serde_json::from_str(r#"{"task": "x", "due": "Friday"}"#).unwrap();
        assert_eq!(item.task, "x");
        assert!(!item.completed);

        let written = serde_json::to_string(&item).unwrap();
        assert!(written.contains(r#""due":"Friday""#));
    }
}
