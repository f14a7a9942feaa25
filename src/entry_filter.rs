use chrono::{Local, NaiveDate};

use crate::diary_entry::DiaryEntry;
use crate::error::DiaryResult;

/// Entries whose title or any tag contains `query` (ignoring case) and whose
/// date lies in `[start, end]`. Dates are only parsed for entries that match
/// the query, so a malformed date fails the call only when it is reached.
pub fn filter_entries(
    entries: &[DiaryEntry],
    query: &str,
    start: NaiveDate,
    end: NaiveDate,
) -> DiaryResult<Vec<DiaryEntry>> {
    let query = query.to_lowercase();
    let mut matched = Vec::new();

    for entry in entries {
        let text_match = entry.title.to_lowercase().contains(&query)
            || entry
                .tags
                .iter()
                .any(|t| t.to_lowercase().contains(&query));
        if !text_match {
            continue;
        }

        let date = entry.parsed_date()?;
        if start <= date && date <= end {
            matched.push(entry.clone());
        }
    }

    Ok(matched)
}

/// Reverses storage order. Storage is append order, so this is newest-first
/// only as long as entries were written chronologically.
pub fn newest_first(mut entries: Vec<DiaryEntry>) -> Vec<DiaryEntry> {
    entries.reverse();
    entries
}

/// The search box and date range the entry list is currently showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFilter {
    pub query: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl SearchFilter {
    pub fn today() -> Self {
        let today = Local::now().date_naive();
        SearchFilter {
            query: String::new(),
            start: today,
            end: today,
        }
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    pub fn apply(&self, entries: &[DiaryEntry]) -> DiaryResult<Vec<DiaryEntry>> {
        filter_entries(entries, &self.query, self.start, self.end).map(newest_first)
    }
}

impl Default for SearchFilter {
    fn default() -> Self {
        SearchFilter::today()
    }
}
