use crate::diary_entry::DiaryEntry;
use crate::entry_filter::SearchFilter;
use crate::entry_store::{self, EntryStore};
use crate::error::DiaryResult;
use crate::image_attachment::{ImageAttachment, ImageUpload};
use crate::session::{EntryForm, SessionContext};

pub struct DiaryState {
    entries: Vec<DiaryEntry>,
    store: EntryStore,
    attachment: ImageAttachment,
}

impl DiaryState {
    pub fn load(mut store: EntryStore, attachment: ImageAttachment) -> Self {
        let entries = store.load();
        tracing::info!(
            path = %store.path().display(),
            count = entries.len(),
            "opened diary"
        );
        DiaryState {
            entries,
            store,
            attachment,
        }
    }

    /// Stores the image (if any), merges the session scratch state into a
    /// new entry and rewrites the diary file. The session is cleared only
    /// once the file is written.
    pub fn save_entry(
        &mut self,
        mut form: EntryForm,
        upload: Option<ImageUpload>,
        session: &mut SessionContext,
    ) -> DiaryResult<DiaryEntry> {
        if let Some(upload) = upload {
            let path = self.attachment.attach(&upload.bytes, &upload.filename)?;
            form.image = Some(path.to_string_lossy().into_owned());
        }

        let entry = session.build_entry(form);
        let entries = entry_store::append(&self.entries, entry.clone());
        self.store.save(&entries)?;
        self.entries = entries;
        session.clear();
        tracing::info!(title = %entry.title, date = %entry.date, "saved diary entry");
        Ok(entry)
    }

    pub fn delete_entry(&mut self, target: &DiaryEntry) -> DiaryResult<()> {
        let entries = entry_store::remove(&self.entries, target);
        self.store.save(&entries)?;
        self.entries = entries;
        tracing::info!(title = %target.title, date = %target.date, "deleted diary entry");
        Ok(())
    }

    pub fn get_entries(&self) -> &[DiaryEntry] {
        &self.entries
    }

    pub fn search_entries(&self, filter: &SearchFilter) -> DiaryResult<Vec<DiaryEntry>> {
        filter.apply(&self.entries)
    }
}
