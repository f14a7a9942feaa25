use crate::diary_entry::{DiaryEntry, Mood};
use crate::entry_filter::SearchFilter;
use crate::error::DiaryResult;
use crate::image_attachment::{is_supported_image, ImageUpload, IMAGE_EXTENSIONS};
use crate::session::{EntryForm, SessionContext, QUOTES};
use chrono::{Local, NaiveDate};
use color_eyre::Result;
use crossterm::{
    event::{self, Event, KeyCode},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Terminal,
};
use std::{
    fs,
    io::{stdout, Stdout},
    path::Path,
    rc::Rc,
    time::{Duration, Instant},
};
use unicode_width::UnicodeWidthChar;

const PREVIEW_WIDTH: usize = 30;
const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

pub enum Action {
    Write,
    View,
    Delete,
    Search,
    DateRange,
    ClearSearch,
    ClearDraft,
    Quit,
}

pub struct UI {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    cursor_position: usize,
    cursor_visible: bool,
    last_cursor_update: Instant,
    status: Option<String>,
}

impl UI {
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend)?;

        Ok(UI {
            terminal,
            cursor_position: 0,
            cursor_visible: true,
            last_cursor_update: Instant::now(),
            status: None,
        })
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    pub fn display(
        &mut self,
        listing: &DiaryResult<Vec<DiaryEntry>>,
        filter: &SearchFilter,
        total: usize,
    ) -> Result<()> {
        let status = self.status.clone();
        let has_entries = matches!(listing, Ok(entries) if !entries.is_empty());

        self.terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .margin(1)
                .constraints([
                    Constraint::Length(3),
                    Constraint::Length(3),
                    Constraint::Min(0),
                    Constraint::Length(2),
                ])
                .split(f.area());

            f.render_widget(header("My Daily Diary (Todo App, Goal Reminder)"), chunks[0]);

            let query = if filter.query.is_empty() {
                "(none)".to_string()
            } else {
                filter.query.clone()
            };
            let filter_line = Paragraph::new(Line::from(vec![
                Span::styled("Search: ", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(query),
                Span::styled("   Dates: ", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(format!(
                    "{} to {}",
                    filter.start.format(INPUT_DATE_FORMAT),
                    filter.end.format(INPUT_DATE_FORMAT)
                )),
            ]))
            .block(Block::default().borders(Borders::ALL).title("Filter"));
            f.render_widget(filter_line, chunks[1]);

            match listing {
                Ok(entries) => {
                    let entries_list = List::new(entry_items(entries)).block(
                        Block::default()
                            .borders(Borders::ALL)
                            .title(format!("Previous Entries ({} of {total})", entries.len())),
                    );
                    f.render_widget(entries_list, chunks[2]);
                }
                Err(e) => {
                    let error = Paragraph::new(format!("Could not filter entries: {e}"))
                        .style(Style::default().fg(Color::Red))
                        .wrap(Wrap { trim: false })
                        .block(
                            Block::default()
                                .borders(Borders::ALL)
                                .title("Previous Entries"),
                        );
                    f.render_widget(error, chunks[2]);
                }
            }

            let mut keys = vec![Span::raw("Press ")];
            keys.extend(key_hint("w", " to write, "));
            if has_entries {
                keys.extend(key_hint("v", " to view, "));
                keys.extend(key_hint("d", " to delete, "));
            }
            keys.extend(key_hint("s", " to search, "));
            keys.extend(key_hint("r", " for dates, "));
            if !filter.query.is_empty() {
                keys.extend(key_hint("c", " to clear search, "));
            }
            keys.extend(key_hint("x", " to clear draft, "));
            keys.extend(key_hint("q", " to quit"));
            f.render_widget(hint_paragraph(Line::from(keys), status.as_deref()), chunks[3]);
        })?;

        Ok(())
    }

    pub fn handle_input(
        &mut self,
        listing: &DiaryResult<Vec<DiaryEntry>>,
        filter: &SearchFilter,
    ) -> Result<Option<Action>> {
        let has_entries = matches!(listing, Ok(entries) if !entries.is_empty());

        if let Event::Key(key) = event::read()? {
            let action = match key.code {
                KeyCode::Char('w') => Some(Action::Write),
                KeyCode::Char('q') => Some(Action::Quit),
                KeyCode::Char('v') if has_entries => Some(Action::View),
                KeyCode::Char('d') if has_entries => Some(Action::Delete),
                KeyCode::Char('s') => Some(Action::Search),
                KeyCode::Char('r') => Some(Action::DateRange),
                KeyCode::Char('c') if !filter.query.is_empty() => Some(Action::ClearSearch),
                KeyCode::Char('x') => Some(Action::ClearDraft),
                _ => None,
            };
            if action.is_some() {
                self.status = None;
            }
            Ok(action)
        } else {
            Ok(None)
        }
    }

    /// Walks through the write screens. Returns `None` when the user backs
    /// out; the session keeps whatever drafts were made either way.
    pub fn compose_entry(
        &mut self,
        session: &mut SessionContext,
    ) -> Result<Option<(EntryForm, Option<ImageUpload>)>> {
        const HEADING: &str = "New Diary Entry";

        let today = Local::now().date_naive();
        let date = loop {
            let Some(input) = self.prompt_line(
                HEADING,
                "Date (YYYY-MM-DD)",
                &today.format(INPUT_DATE_FORMAT).to_string(),
            )?
            else {
                return Ok(None);
            };
            match parse_input_date(&input, today) {
                Ok(date) => break date,
                Err(message) => self.set_status(message),
            }
        };

        let moods: Vec<ListItem> = Mood::ALL
            .iter()
            .map(|mood| {
                ListItem::new(Span::styled(
                    format!("{} {}", mood.icon(), mood.name()),
                    Style::default().fg(mood_color(mood)),
                ))
            })
            .collect();
        let Some(mood_index) = self.select_index(
            "How are you feeling today?",
            &moods,
            "Up/Down: Navigate, Enter: Select, Esc: Cancel",
            0,
        )?
        else {
            return Ok(None);
        };
        let mood = Mood::ALL[mood_index].clone();

        let Some(title) = self.prompt_line(HEADING, "Title of your entry", "")? else {
            return Ok(None);
        };
        let Some(username) = self.prompt_line(HEADING, "Your name (optional)", "")? else {
            return Ok(None);
        };

        let image_label = format!("Image path (optional, {})", IMAGE_EXTENSIONS.join("/"));
        let upload = loop {
            let Some(input) = self.prompt_line(HEADING, &image_label, "")? else {
                return Ok(None);
            };
            match read_upload(input.trim()) {
                Ok(upload) => break upload,
                Err(message) => self.set_status(message),
            }
        };

        let text = self.edit_text(HEADING, "Write your daily thoughts", "")?;

        let Some(tags_input) = self.prompt_line(
            HEADING,
            "Tags, comma-separated (e.g. Travel, Work, Health)",
            "",
        )?
        else {
            return Ok(None);
        };

        if !self.manage_todo_list(session)? {
            return Ok(None);
        }

        if let Some(goal) = self.prompt_line(
            "Goal Reminder",
            "Your goal (Enter saves, Esc skips)",
            session.goal().unwrap_or(""),
        )? {
            session.save_goal(goal);
        }

        let quotes: Vec<ListItem> = QUOTES.iter().map(|q| ListItem::new(*q)).collect();
        let current = session
            .selected_quote()
            .and_then(|selected| QUOTES.iter().position(|q| *q == selected))
            .unwrap_or(0);
        if let Some(index) = self.select_index(
            "Quote of the Day",
            &quotes,
            "Up/Down: Navigate, Enter: Choose, Esc: Skip",
            current,
        )? {
            session.select_quote(index);
        }

        let form = EntryForm {
            date,
            mood,
            title,
            username,
            text,
            tags_input,
            image: None,
        };
        Ok(Some((form, upload)))
    }

    pub fn view_entries(&mut self, entries: &[DiaryEntry]) -> Result<()> {
        let items = entry_items(entries);
        let mut selected_index = 0;

        while let Some(index) = self.select_index(
            "View Entries",
            &items,
            "Up/Down: Navigate, Enter: View full entry, Esc: Back",
            selected_index,
        )? {
            selected_index = index;
            self.view_full_entry(&entries[index])?;
        }

        Ok(())
    }

    fn view_full_entry(&mut self, entry: &DiaryEntry) -> Result<()> {
        let accent = mood_color(&entry.mood);
        let mut lines = vec![
            Line::from(vec![
                Span::styled("Mood: ", Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(
                    format!("{} {}", entry.mood.icon(), entry.mood),
                    Style::default().fg(accent),
                ),
            ]),
            Line::from(format!("By: {}", entry.username)),
            Line::from(""),
        ];
        lines.extend(entry.text.lines().map(|l| Line::from(l.to_string())));
        lines.push(Line::from(""));
        if !entry.tags.is_empty() {
            lines.push(Line::from(format!("Tags: {}", entry.tags.join(", "))));
        }
        if let Some(image) = &entry.image {
            lines.push(Line::from(format!("Image: {image}")));
        }
        lines.push(Line::from(Span::styled(
            "Todo List",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for item in &entry.todo_list {
            let status = if item.completed { "✅" } else { "❌" };
            lines.push(Line::from(format!("{status} {}", item.task)));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Goal Reminder: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(entry.goal.clone(), Style::default().fg(accent)),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Quote of the Day: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(entry.quote.clone(), Style::default().fg(accent)),
        ]));

        self.terminal.draw(|f| {
            let chunks = three_rows(f.area());

            f.render_widget(
                header(&format!("{} ({})", entry.title, entry.date)),
                chunks[0],
            );

            let content = Paragraph::new(lines.clone())
                .wrap(Wrap { trim: false })
                .block(Block::default().borders(Borders::ALL).title("Entry"));
            f.render_widget(content, chunks[1]);

            f.render_widget(hint_paragraph(Line::from("Any key: Back"), None), chunks[2]);
        })?;

        loop {
            if let Event::Key(_) = event::read()? {
                break;
            }
        }

        Ok(())
    }

    pub fn select_entry_to_delete(&mut self, entries: &[DiaryEntry]) -> Result<Option<DiaryEntry>> {
        let items = entry_items(entries);
        let selected = self.select_index(
            "Select Entry to Delete",
            &items,
            "Up/Down: Navigate, Enter: Delete, Esc: Cancel",
            0,
        )?;
        Ok(selected.map(|index| entries[index].clone()))
    }

    pub fn get_search_query(&mut self, current: &str) -> Result<Option<String>> {
        self.prompt_line("Search Entries", "Search by title or tags", current)
    }

    pub fn get_date_range(&mut self, filter: &SearchFilter) -> Result<Option<(NaiveDate, NaiveDate)>> {
        const HEADING: &str = "Select Date Range";
        let today = Local::now().date_naive();

        loop {
            let Some(start) = self.prompt_line(
                HEADING,
                "From (YYYY-MM-DD)",
                &filter.start.format(INPUT_DATE_FORMAT).to_string(),
            )?
            else {
                return Ok(None);
            };
            let Some(end) = self.prompt_line(
                HEADING,
                "To (YYYY-MM-DD)",
                &filter.end.format(INPUT_DATE_FORMAT).to_string(),
            )?
            else {
                return Ok(None);
            };

            match (parse_input_date(&start, today), parse_input_date(&end, today)) {
                (Ok(start), Ok(end)) if start <= end => return Ok(Some((start, end))),
                (Ok(_), Ok(_)) => self.set_status("The start date is after the end date"),
                (Err(message), _) | (_, Err(message)) => self.set_status(message),
            }
        }
    }

    /// Todo list draft screen. Returns false if the user cancelled the entry.
    fn manage_todo_list(&mut self, session: &mut SessionContext) -> Result<bool> {
        let mut selected_index = 0;

        loop {
            let items: Vec<ListItem> = session
                .todo_list()
                .iter()
                .map(|item| {
                    let mark = if item.completed { "[x]" } else { "[ ]" };
                    ListItem::new(format!("{mark} {}", item.task))
                })
                .collect();
            let status = self.status.clone();

            self.terminal.draw(|f| {
                let chunks = three_rows(f.area());
                f.render_widget(header("Todo List"), chunks[0]);

                let list = List::new(items.clone())
                    .block(Block::default().borders(Borders::ALL).title("Tasks"))
                    .highlight_style(Style::default().add_modifier(Modifier::BOLD))
                    .highlight_symbol("> ");
                f.render_stateful_widget(
                    list,
                    chunks[1],
                    &mut ListState::default().with_selected(Some(selected_index)),
                );

                let hint = Line::from(
                    "a: Add task, Space: Toggle, c: Clear all, Enter: Continue, Esc: Cancel",
                );
                f.render_widget(hint_paragraph(hint, status.as_deref()), chunks[2]);
            })?;

            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Up => selected_index = selected_index.saturating_sub(1),
                    KeyCode::Down => {
                        if selected_index + 1 < items.len() {
                            selected_index += 1;
                        }
                    }
                    KeyCode::Char(' ') => session.toggle_task(selected_index),
                    KeyCode::Char('a') => {
                        if let Some(task) = self.prompt_line("Todo List", "Add a new task", "")? {
                            if session.add_task(&task) {
                                self.set_status("Task added!");
                            }
                        }
                    }
                    KeyCode::Char('c') => {
                        session.clear_tasks();
                        selected_index = 0;
                        self.set_status("All tasks cleared!");
                    }
                    KeyCode::Enter => {
                        self.status = None;
                        return Ok(true);
                    }
                    KeyCode::Esc => {
                        self.status = None;
                        return Ok(false);
                    }
                    _ => {}
                }
            }
        }
    }

    fn select_index(
        &mut self,
        heading: &str,
        items: &[ListItem],
        instructions: &str,
        initial: usize,
    ) -> Result<Option<usize>> {
        let mut selected_index = initial.min(items.len().saturating_sub(1));

        loop {
            self.terminal.draw(|f| {
                let chunks = three_rows(f.area());
                f.render_widget(header(heading), chunks[0]);

                let list = List::new(items.to_vec())
                    .block(Block::default().borders(Borders::ALL))
                    .highlight_style(Style::default().add_modifier(Modifier::BOLD))
                    .highlight_symbol("> ");
                f.render_stateful_widget(
                    list,
                    chunks[1],
                    &mut ListState::default().with_selected(Some(selected_index)),
                );

                f.render_widget(hint_paragraph(Line::from(instructions), None), chunks[2]);
            })?;

            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Up => selected_index = selected_index.saturating_sub(1),
                    KeyCode::Down => {
                        if selected_index + 1 < items.len() {
                            selected_index += 1;
                        }
                    }
                    KeyCode::Enter if !items.is_empty() => return Ok(Some(selected_index)),
                    KeyCode::Esc => return Ok(None),
                    _ => {}
                }
            }
        }
    }

    /// Single-line input. `None` when the user pressed Esc.
    fn prompt_line(&mut self, heading: &str, label: &str, initial: &str) -> Result<Option<String>> {
        let mut value = initial.to_string();

        let result = loop {
            let status = self.status.clone();
            self.terminal.draw(|f| {
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .margin(1)
                    .constraints([
                        Constraint::Length(3),
                        Constraint::Length(3),
                        Constraint::Min(2),
                    ])
                    .split(f.area());

                f.render_widget(header(heading), chunks[0]);

                let input = Paragraph::new(format!("{value}|"))
                    .block(Block::default().borders(Borders::ALL).title(label));
                f.render_widget(input, chunks[1]);

                f.render_widget(
                    hint_paragraph(Line::from("Enter: Confirm, Esc: Cancel"), status.as_deref()),
                    chunks[2],
                );
            })?;

            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Enter => break Some(value),
                    KeyCode::Esc => break None,
                    KeyCode::Char(c) => value.push(c),
                    KeyCode::Backspace => {
                        value.pop();
                    }
                    _ => {}
                }
            }
        };

        self.status = None;
        Ok(result)
    }

    /// Multi-line editor with a blinking cursor; Esc finishes.
    fn edit_text(&mut self, heading: &str, label: &str, initial: &str) -> Result<String> {
        let mut content = initial.to_string();
        self.cursor_position = content.len();
        let mut last_content_update = Instant::now();

        loop {
            let now = Instant::now();
            let should_update_cursor =
                now.duration_since(self.last_cursor_update) >= Duration::from_millis(500);
            let should_redraw = should_update_cursor
                || now.duration_since(last_content_update) < Duration::from_millis(50);

            if should_redraw {
                let content_with_cursor = if self.cursor_visible {
                    let mut content_clone = content.clone();
                    content_clone.insert(self.cursor_position, '|');
                    content_clone
                } else {
                    content.clone()
                };

                self.terminal.draw(|f| {
                    let chunks = three_rows(f.area());
                    f.render_widget(header(heading), chunks[0]);

                    let content_input = Paragraph::new(content_with_cursor)
                        .wrap(Wrap { trim: false })
                        .block(Block::default().borders(Borders::ALL).title(label));
                    f.render_widget(content_input, chunks[1]);

                    f.render_widget(
                        hint_paragraph(Line::from("Press Esc to finish"), None),
                        chunks[2],
                    );
                })?;

                if should_update_cursor {
                    self.cursor_visible = !self.cursor_visible;
                    self.last_cursor_update = now;
                }
            }

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    last_content_update = Instant::now();
                    match key.code {
                        KeyCode::Esc => break,
                        KeyCode::Char(c) => {
                            content.insert(self.cursor_position, c);
                            self.cursor_position += c.len_utf8();
                        }
                        KeyCode::Enter => {
                            content.insert(self.cursor_position, '\n');
                            self.cursor_position += 1;
                        }
                        KeyCode::Backspace => {
                            if let Some(c) = content[..self.cursor_position].chars().next_back() {
                                self.cursor_position -= c.len_utf8();
                                content.remove(self.cursor_position);
                            }
                        }
                        KeyCode::Delete => {
                            if self.cursor_position < content.len() {
                                content.remove(self.cursor_position);
                            }
                        }
                        KeyCode::Left => {
                            if let Some(c) = content[..self.cursor_position].chars().next_back() {
                                self.cursor_position -= c.len_utf8();
                            }
                        }
                        KeyCode::Right => {
                            if let Some(c) = content[self.cursor_position..].chars().next() {
                                self.cursor_position += c.len_utf8();
                            }
                        }
                        _ => {}
                    }
                }
            }
        }

        Ok(content)
    }
}

impl Drop for UI {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = stdout().execute(LeaveAlternateScreen);
    }
}

fn three_rows(area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(2),
        ])
        .split(area)
}

fn header(title: &str) -> Paragraph<'_> {
    Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
}

fn key_hint(key: &'static str, text: &'static str) -> [Span<'static>; 2] {
    [
        Span::styled(key, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(text),
    ]
}

fn hint_paragraph<'a>(hint: Line<'a>, status: Option<&'a str>) -> Paragraph<'a> {
    let mut lines = vec![hint.style(Style::default().fg(Color::Yellow))];
    if let Some(status) = status {
        lines.push(Line::from(Span::styled(status, Style::default().fg(Color::Green))));
    }
    Paragraph::new(lines).alignment(Alignment::Center)
}

fn entry_items(entries: &[DiaryEntry]) -> Vec<ListItem<'static>> {
    entries
        .iter()
        .map(|e| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    entry_preview(e),
                    Style::default().fg(mood_color(&e.mood)),
                )),
                Line::from(Span::raw(format!("   {}", e.date))),
            ])
        })
        .collect()
}

/// Sidebar-style label: mood icon, then the title cut to a fixed width.
fn entry_preview(entry: &DiaryEntry) -> String {
    format!(
        "{} {}...",
        entry.mood.icon(),
        truncate_to_width(&entry.title, PREVIEW_WIDTH)
    )
}

fn truncate_to_width(text: &str, max_width: usize) -> &str {
    let mut width = 0;
    for (index, c) in text.char_indices() {
        width += c.width().unwrap_or(0);
        if width > max_width {
            return &text[..index];
        }
    }
    text
}

fn mood_color(mood: &Mood) -> Color {
    match mood {
        Mood::Happy => Color::Rgb(0x34, 0x98, 0xdb),
        Mood::Sad => Color::Rgb(0x11, 0xcf, 0x37),
        Mood::Angry => Color::Rgb(0xb3, 0x0b, 0x13),
        Mood::Tired => Color::Rgb(0xf4, 0xb4, 0x00),
        Mood::Excited => Color::Rgb(0xf5, 0x42, 0xcb),
        Mood::Other(_) => Color::Gray,
    }
}

/// Empty input means `default`.
fn parse_input_date(input: &str, default: NaiveDate) -> std::result::Result<NaiveDate, String> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(default);
    }
    NaiveDate::parse_from_str(input, INPUT_DATE_FORMAT)
        .map_err(|e| format!("{input:?} is not a YYYY-MM-DD date: {e}"))
}

fn read_upload(input: &str) -> std::result::Result<Option<ImageUpload>, String> {
    if input.is_empty() {
        return Ok(None);
    }
    let path = Path::new(input);
    if !is_supported_image(path) {
        return Err(format!("Only {} images can be attached", IMAGE_EXTENSIONS.join(", ")));
    }
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| format!("{input:?} has no file name"))?;
    let bytes = fs::read(path).map_err(|e| format!("Could not read {input}: {e}"))?;
    Ok(Some(ImageUpload { filename, bytes }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_counts_display_columns() {
        assert_eq!(truncate_to_width("short", 30), "short");
        assert_eq!(truncate_to_width("abcdef", 3), "abc");
        assert_eq!(truncate_to_width("日本語の日記", 5), "日本");
    }

    #[test]
    fn preview_has_icon_and_ellipsis() {
        let entry = DiaryEntry {
            title: "A very long title that keeps going and going".to_string(),
            date: "2024-01-05 (Friday)".to_string(),
            mood: Mood::Tired,
            text: String::new(),
            tags: Vec::new(),
            username: "Unknown User".to_string(),
            image: None,
            todo_list: Vec::new(),
            goal: String::new(),
            quote: String::new(),
            extra: Default::default(),
        };
        assert_eq!(
            entry_preview(&entry),
            "😴 A very long title that keeps g..."
        );
    }

    #[test]
    fn input_dates_default_when_blank() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(parse_input_date("  ", today), Ok(today));
        assert_eq!(
            parse_input_date("2024-02-01", today),
            Ok(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap())
        );
        assert!(parse_input_date("02/01/2024", today).is_err());
    }

    #[test]
    fn uploads_are_read_from_disk() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("sunset.png");
        fs::write(&path, b"png").expect("write");

        let upload = read_upload(path.to_str().unwrap())
            .expect("read")
            .expect("upload");
        assert_eq!(upload.filename, "sunset.png");
        assert_eq!(upload.bytes, b"png");

        assert_eq!(read_upload(""), Ok(None));
        assert!(read_upload("notes.txt").is_err());
    }
}
