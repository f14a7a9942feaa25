use crate::diary_entry::DiaryEntry;
use crate::error::DiaryResult;
use crate::normalizer::{normalize, RawEntry};
use serde::{ser::SerializeSeq, Deserialize, Serialize};
use serde_json::{ser::PrettyFormatter, Serializer, Value};
use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

/// The whole diary lives in one JSON array, read and rewritten in full.
pub struct EntryStore {
    path: PathBuf,
    /// Records from the last load that could not be read as entries. They
    /// are written back untouched after the entries on every save.
    unreadable: Vec<Value>,
}

impl EntryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        EntryStore {
            path: path.into(),
            unreadable: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Never fails: a missing, unreadable or malformed document yields an
    /// empty diary.
    pub fn load(&mut self) -> Vec<DiaryEntry> {
        self.unreadable.clear();

        let serialized = match fs::read_to_string(&self.path) {
            Ok(serialized) => serialized,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "no diary file yet, starting empty");
                return Vec::new();
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "diary file unreadable");
                return Vec::new();
            }
        };

        let records = match serde_json::from_str::<Value>(&serialized) {
            Ok(Value::Array(records)) => records,
            Ok(_) => {
                tracing::warn!(path = %self.path.display(), "diary file is not a list, ignoring it");
                return Vec::new();
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "diary file is corrupt, ignoring it");
                return Vec::new();
            }
        };

        let mut entries = Vec::with_capacity(records.len());
        for (index, record) in records.into_iter().enumerate() {
            match RawEntry::deserialize(&record) {
                Ok(raw) => entries.push(normalize(raw)),
                Err(e) => {
                    tracing::warn!(index, error = %e, "keeping unreadable diary record as-is");
                    self.unreadable.push(record);
                }
            }
        }

        tracing::debug!(
            count = entries.len(),
            unreadable = self.unreadable.len(),
            "loaded diary entries"
        );
        entries
    }

    pub fn save(&self, entries: &[DiaryEntry]) -> DiaryResult<()> {
        let document = Document {
            entries,
            unreadable: &self.unreadable,
        };

        let mut serialized = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = Serializer::with_formatter(&mut serialized, formatter);
        document.serialize(&mut serializer)?;
        fs::write(&self.path, serialized)?;
        tracing::debug!(path = %self.path.display(), count = entries.len(), "saved diary entries");
        Ok(())
    }
}

/// The on-disk array: entries first, then any records kept from the load.
struct Document<'a> {
    entries: &'a [DiaryEntry],
    unreadable: &'a [Value],
}

impl Serialize for Document<'_> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.entries.len() + self.unreadable.len()))?;
        for entry in self.entries {
            seq.serialize_element(entry)?;
        }
        for record in self.unreadable {
            seq.serialize_element(record)?;
        }
        seq.end()
    }
}

pub fn append(entries: &[DiaryEntry], new_entry: DiaryEntry) -> Vec<DiaryEntry> {
    let mut appended = Vec::with_capacity(entries.len() + 1);
    appended.extend_from_slice(entries);
    appended.push(new_entry);
    appended
}

/// Drops the first entry equal to `target`; later duplicates stay.
pub fn remove(entries: &[DiaryEntry], target: &DiaryEntry) -> Vec<DiaryEntry> {
    let mut remaining = entries.to_vec();
    if let Some(position) = remaining.iter().position(|e| e == target) {
        remaining.remove(position);
    }
    remaining
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diary_entry::{Mood, TodoItem};
    use serde_json::{json, Map};

    fn entry(title: &str, date: &str) -> DiaryEntry {
        DiaryEntry {
            title: title.to_string(),
            date: date.to_string(),
            mood: Mood::Tired,
            text: format!("{title} body"),
            tags: vec!["Work".to_string()],
            username: "Sam".to_string(),
            image: None,
            todo_list: vec![TodoItem::new("write tests")],
            goal: String::new(),
            quote: String::new(),
            extra: Map::new(),
        }
    }

    fn store_in(dir: &tempfile::TempDir) -> EntryStore {
        EntryStore::new(dir.path().join("diary_entries.json"))
    }

    #[test]
    fn save_then_load_preserves_entries_and_order() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut store = store_in(&dir);
        let entries = vec![
            entry("Beach Day", "2024-01-05 (Friday)"),
            entry("Work", "2024-02-01 (Thursday)"),
            entry("Beach Day", "2024-01-05 (Friday)"),
        ];

        store.save(&entries).expect("save");
        assert_eq!(store.load(), entries);
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().expect("temp dir");
        assert!(store_in(&dir).load().is_empty());
    }

    #[test]
    fn corrupt_or_wrong_shape_loads_empty() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut store = store_in(&dir);
        for document in ["{not json", "", "{\"title\": \"x\"}", "42", "null"] {
            fs::write(store.path(), document).expect("write");
            assert!(store.load().is_empty(), "{document:?}");
        }
    }

    #[test]
    fn legacy_records_are_normalized_on_load() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut store = store_in(&dir);
        fs::write(
            store.path(),
            r#"[{"date": "2024-01-05 (Friday)", "mood": "Sad", "text": "old"}]"#,
        )
        .expect("write");

        let loaded = store.load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].title, "Untitled");
        assert_eq!(loaded[0].username, "Unknown User");
        assert_eq!(loaded[0].mood, Mood::Sad);
    }

    #[test]
    fn unreadable_records_are_written_back_on_save() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut store = store_in(&dir);
        fs::write(
            store.path(),
            r#"[7, {"title": "kept", "date": "2024-01-05 (Friday)"}, {"tags": "oops"}]"#,
        )
        .expect("write");

        let loaded = store.load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].title, "kept");

        let entries = append(&loaded, entry("Work", "2024-02-01 (Thursday)"));
        store.save(&entries).expect("save");

        let written: Value =
            serde_json::from_str(&fs::read_to_string(store.path()).expect("read")).expect("json");
        let records = written.as_array().expect("array");
        assert_eq!(records.len(), 4);
        assert_eq!(records[2], json!(7));
        assert_eq!(records[3], json!({ "tags": "oops" }));
        assert_eq!(store.load(), entries);
    }

    #[test]
    fn legacy_values_survive_a_rewrite() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut store = store_in(&dir);
        fs::write(
            store.path(),
            r#"[
                {"date": "2024-01-05 (Friday)", "mood": "Bored"},
                {"date": "2024-01-06 (Saturday)", "todo_list": [{"task": "x"}]},
                {"date": "2024-01-07 (Sunday)", "location": "Paris"}
            ]"#,
        )
        .expect("write");

        let loaded = store.load();
        assert_eq!(loaded.len(), 3);
        store.save(&loaded).expect("save");

        let written: Value =
            serde_json::from_str(&fs::read_to_string(store.path()).expect("read")).expect("json");
        assert_eq!(written[0]["mood"], json!("Bored"));
        assert_eq!(written[1]["todo_list"][0]["task"], json!("x"));
        assert_eq!(written[2]["location"], json!("Paris"));
    }

    #[test]
    fn saved_document_is_an_indented_array() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = store_in(&dir);
        store
            .save(&[entry("Work", "2024-02-01 (Thursday)")])
            .expect("save");

        let written = fs::read_to_string(store.path()).expect("read");
        assert!(written.starts_with("[\n    {"));
        assert!(written.contains("\"todo_list\""));
        assert!(written.contains("\"image\": null"));
    }

    #[test]
    fn append_adds_to_the_end() {
        let first = entry("One", "2024-01-01 (Monday)");
        let second = entry("Two", "2024-01-02 (Tuesday)");
        let entries = append(&[first.clone()], second.clone());
        assert_eq!(entries, vec![first, second]);
    }

    #[test]
    fn remove_takes_only_the_first_equal_entry() {
        let a = entry("Same", "2024-01-01 (Monday)");
        let b = entry("Other", "2024-01-02 (Tuesday)");
        let entries = vec![a.clone(), b.clone(), a.clone()];

        assert_eq!(remove(&entries, &a), vec![b.clone(), a.clone()]);

        let absent = entry("Absent", "2024-01-03 (Wednesday)");
        assert_eq!(remove(&entries, &absent), entries);
    }
}
