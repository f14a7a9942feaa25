//! Back-fills records written by older versions of the diary, which may lack
//! any of the fields added over time.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::diary_entry::{DiaryEntry, Mood, TodoItem, DEFAULT_TITLE, DEFAULT_USERNAME};

/// A stored record as it appears on disk, every field optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawEntry {
    pub title: Option<String>,
    pub date: Option<String>,
    pub mood: Option<String>,
    pub text: Option<String>,
    pub tags: Option<Vec<String>>,
    pub username: Option<String>,
    pub image: Option<String>,
    pub todo_list: Option<Vec<TodoItem>>,
    pub goal: Option<String>,
    pub quote: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<DiaryEntry> for RawEntry {
    fn from(entry: DiaryEntry) -> Self {
        RawEntry {
            title: Some(entry.title),
            date: Some(entry.date),
            mood: Some(entry.mood.into()),
            text: Some(entry.text),
            tags: Some(entry.tags),
            username: Some(entry.username),
            image: entry.image,
            todo_list: Some(entry.todo_list),
            goal: Some(entry.goal),
            quote: Some(entry.quote),
            extra: entry.extra,
        }
    }
}

/// Fills every missing field with its default. Values that are present,
/// unknown moods and unknown keys included, are kept. A missing date is left
/// empty so that filtering reports it like any other malformed date.
pub fn normalize(raw: RawEntry) -> DiaryEntry {
    let mood = raw.mood.map(Mood::from).unwrap_or_default();

    let tags = raw
        .tags
        .unwrap_or_default()
        .into_iter()
        .map(|tag| tag.trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect();

    DiaryEntry {
        title: raw.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        date: raw.date.unwrap_or_default(),
        mood,
        text: raw.text.unwrap_or_default(),
        tags,
        username: raw.username.unwrap_or_else(|| DEFAULT_USERNAME.to_string()),
        image: raw.image,
        todo_list: raw.todo_list.unwrap_or_default(),
        goal: raw.goal.unwrap_or_default(),
        quote: raw.quote.unwrap_or_default(),
        extra: raw.extra,
    }
}
