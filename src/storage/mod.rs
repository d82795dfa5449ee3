// src/storage/mod.rs
use std::fs;
use std::path::{Path, PathBuf};
use crate::extractors::{ExtractionStats, SectionResult};
use crate::utils::error::StorageError;
use std::io::Write;

pub struct StorageManager {
    base_dir: PathBuf,
}

impl StorageManager {
    /// Creates a new StorageManager with the specified base directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, StorageError> {
        let base_path = base_dir.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path)
                .map_err(StorageError::IoError)?;
        }

        Ok(Self { base_dir: base_path })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Saves the section answers as JSON: `<name>_sections.json`
    pub fn save_result(&self, name: &str, result: &SectionResult) -> Result<PathBuf, StorageError> {
        let file_path = self.base_dir.join(format!("{}_sections.json", name));

        let json = serde_json::to_string_pretty(result)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;

        let mut file = fs::File::create(&file_path)
            .map_err(StorageError::IoError)?;
        file.write_all(json.as_bytes())
            .map_err(StorageError::IoError)?;

        tracing::info!("Saved section answers to {}", file_path.display());

        Ok(file_path)
    }

    /// Saves metadata about the extraction in JSON format: `<name>_meta.json`
    pub fn save_metadata(
        &self,
        name: &str,
        result: &SectionResult,
        stats: &ExtractionStats,
    ) -> Result<PathBuf, StorageError> {
        let file_path = self.base_dir.join(format!("{}_meta.json", name));

        let answered: Vec<&str> = result
            .iter()
            .filter(|answer| !answer.answer.is_empty())
            .map(|answer| answer.id)
            .collect();

        let metadata = serde_json::json!({
            "source": name,
            "sections": result.len(),
            "answered_sections": answered,
            "stats": stats,
            "extraction_timestamp": chrono::Utc::now().to_rfc3339(),
        });

        let metadata_str = serde_json::to_string_pretty(&metadata)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;

        fs::write(&file_path, metadata_str)
            .map_err(StorageError::IoError)?;

        tracing::info!("Saved metadata to {}", file_path.display());

        Ok(file_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::SECTIONS;

    fn scratch_dir(label: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "tnufa_storage_{}_{}",
            label,
            std::process::id()
        ))
    }

    #[test]
    fn test_creates_directory_and_writes_files() {
        let dir = scratch_dir("write").join("nested");
        let storage = StorageManager::new(&dir).unwrap();
        assert!(dir.is_dir());

        let result = crate::extractors::SectionClassifier::default()
            .aggregate(["תמלוגים: ללא"]);
        let stats = ExtractionStats {
            elements: 2,
            fragments: 1,
            classified: 1,
            dropped: 0,
        };

        let sections_path = storage.save_result("application", &result).unwrap();
        assert!(sections_path.ends_with("application_sections.json"));
        let saved: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&sections_path).unwrap()).unwrap();
        assert_eq!(saved.as_object().unwrap().len(), SECTIONS.len());
        assert_eq!(saved["royalties"]["answer"], "תמלוגים: ללא");
        assert_eq!(saved["royalties"]["question"], "תמלוגים");

        let meta_path = storage.save_metadata("application", &result, &stats).unwrap();
        let meta: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&meta_path).unwrap()).unwrap();
        assert_eq!(meta["source"], "application");
        assert_eq!(meta["answered_sections"], serde_json::json!(["royalties"]));
        assert_eq!(meta["stats"]["fragments"], 1);
        assert!(meta["extraction_timestamp"].is_string());

        fs::remove_dir_all(scratch_dir("write")).unwrap();
    }
}
