use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::error::{DiaryError, DiaryResult};

/// Extensions the image picker offers.
pub const IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "png", "jpeg"];

/// An image picked in the write screen, not yet copied into the diary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Copies uploaded images into one directory, keyed by their original
/// filename. A second upload with the same name replaces the first.
pub struct ImageAttachment {
    dir: PathBuf,
}

impl ImageAttachment {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        ImageAttachment { dir: dir.into() }
    }

    pub fn attach(&self, blob: &[u8], original_filename: &str) -> DiaryResult<PathBuf> {
        let name = Path::new(original_filename)
            .file_name()
            .ok_or_else(|| DiaryError::InvalidFilename(original_filename.to_string()))?;
        let path = self.dir.join(name);

        fs::create_dir_all(&self.dir)?;
        fs::write(&path, blob)?;
        tracing::info!(path = %path.display(), bytes = blob.len(), "stored image attachment");
        Ok(path)
    }
}

pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false)
}
