use serde::Deserialize;
use std::{fs, io::ErrorKind, path::Path, path::PathBuf};

pub const CONFIG_FILE: &str = "diary_config.json";

/// Where the diary keeps its files. Every field is optional in the config
/// file; anything left out keeps its default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DiaryConfig {
    pub storage_file: PathBuf,
    pub image_dir: PathBuf,
    pub log_dir: PathBuf,
}

impl Default for DiaryConfig {
    fn default() -> Self {
        DiaryConfig {
            storage_file: PathBuf::from("diary_entries.json"),
            image_dir: PathBuf::from("uploaded_images"),
            log_dir: PathBuf::from("logs"),
        }
    }
}

impl DiaryConfig {
    /// Falls back to the defaults when the file is missing or unusable. The
    /// returned warning, if any, should be logged once logging is up.
    pub fn load(path: &Path) -> (Self, Option<String>) {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return (DiaryConfig::default(), None),
            Err(e) => {
                return (
                    DiaryConfig::default(),
                    Some(format!("could not read {}: {e}", path.display())),
                )
            }
        };

        match serde_json::from_str(&contents) {
            Ok(config) => (config, None),
            Err(e) => (
                DiaryConfig::default(),
                Some(format!("ignoring invalid {}: {e}", path.display())),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults_silently() {
        let dir = tempfile::tempdir().expect("temp dir");
        let (config, warning) = DiaryConfig::load(&dir.path().join(CONFIG_FILE));
        assert_eq!(config, DiaryConfig::default());
        assert!(warning.is_none());
    }

    #[test]
    fn partial_file_overrides_only_named_fields() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, r#"{ "storage_file": "/tmp/my_diary.json" }"#).expect("write");

        let (config, warning) = DiaryConfig::load(&path);
        assert!(warning.is_none());
        assert_eq!(config.storage_file, PathBuf::from("/tmp/my_diary.json"));
        assert_eq!(config.image_dir, PathBuf::from("uploaded_images"));
    }

    #[test]
    fn invalid_file_falls_back_with_a_warning() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "storage_file = 3").expect("write");

        let (config, warning) = DiaryConfig::load(&path);
        assert_eq!(config, DiaryConfig::default());
        assert!(warning.is_some());
    }
}
