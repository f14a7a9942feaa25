mod config;
mod diary_entry;
mod diary_state;
mod entry_filter;
mod entry_store;
mod error;
mod image_attachment;
mod normalizer;
mod session;
mod ui;

use color_eyre::eyre::{eyre, Result};
use config::{DiaryConfig, CONFIG_FILE};
use diary_state::DiaryState;
use entry_filter::SearchFilter;
use entry_store::EntryStore;
use image_attachment::ImageAttachment;
use session::SessionContext;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use ui::{Action, UI};

fn main() -> Result<()> {
    color_eyre::install()?;

    let (config, config_warning) = DiaryConfig::load(Path::new(CONFIG_FILE));
    let _log_guard = init_tracing(&config.log_dir)?;
    if let Some(warning) = config_warning {
        tracing::warn!("{warning}");
    }

    let mut diary_state = DiaryState::load(
        EntryStore::new(config.storage_file.clone()),
        ImageAttachment::new(config.image_dir.clone()),
    );
    let mut session = SessionContext::new();
    let mut filter = SearchFilter::today();
    let mut ui = UI::new()?;

    loop {
        let listing = diary_state.search_entries(&filter);
        if let Err(e) = &listing {
            tracing::error!(error = %e, "filtering entries failed");
        }
        ui.display(&listing, &filter, diary_state.get_entries().len())?;

        if let Some(action) = ui.handle_input(&listing, &filter)? {
            match action {
                Action::Write => {
                    if let Some((form, upload)) = ui.compose_entry(&mut session)? {
                        match diary_state.save_entry(form, upload, &mut session) {
                            Ok(_) => ui.set_status("Diary entry saved successfully!"),
                            Err(e) => {
                                tracing::error!(error = %e, "saving entry failed");
                                ui.set_status(format!("Could not save entry: {e}"));
                            }
                        }
                    }
                }
                Action::View => {
                    if let Ok(entries) = &listing {
                        ui.view_entries(entries)?;
                    }
                }
                Action::Delete => {
                    if let Ok(entries) = &listing {
                        if let Some(entry) = ui.select_entry_to_delete(entries)? {
                            match diary_state.delete_entry(&entry) {
                                Ok(()) => ui.set_status("Entry deleted successfully!"),
                                Err(e) => {
                                    tracing::error!(error = %e, "deleting entry failed");
                                    ui.set_status(format!("Could not delete entry: {e}"));
                                }
                            }
                        }
                    }
                }
                Action::Search => {
                    if let Some(query) = ui.get_search_query(&filter.query)? {
                        filter.query = query;
                    }
                }
                Action::DateRange => {
                    if let Some((start, end)) = ui.get_date_range(&filter)? {
                        filter.start = start;
                        filter.end = end;
                    }
                }
                Action::ClearSearch => filter.clear_query(),
                Action::ClearDraft => {
                    session.clear();
                    ui.set_status("Draft todo list, goal and quote cleared");
                }
                Action::Quit => break,
            }
        }
    }

    Ok(())
}

/// Logs go to a daily file since the terminal belongs to the UI.
fn init_tracing(log_dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)?;
    let file_appender = tracing_appender::rolling::daily(log_dir, "diary.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_writer(non_blocking)
        .try_init()
        .map_err(|e| eyre!("failed to initialise logging: {e}"))?;

    Ok(guard)
}
