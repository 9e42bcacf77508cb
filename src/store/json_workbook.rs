use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::error::{HuntError, Result};

use super::Workbook;

/// Directory-backed workbook: one JSON file per table, each holding the
/// table's rows as a string grid.
#[derive(Debug)]
pub struct JsonWorkbook {
    dir: PathBuf,
}

impl JsonWorkbook {
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
            info!(target: "workbook", "Created new workbook at {}", dir.display());
        }

        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn table_path(&self, name: &str) -> PathBuf {
        self.dir
            .join(format!("{}.json", name.to_lowercase().replace(' ', "_")))
    }
}

impl Workbook for JsonWorkbook {
    fn table_exists(&self, name: &str) -> bool {
        self.table_path(name).exists()
    }

    fn read_table(&self, name: &str) -> Result<Vec<Vec<String>>> {
        let path = self.table_path(name);
        if !path.exists() {
            return Err(HuntError::MissingTable(name.to_string()));
        }

        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    fn write_table(&mut self, name: &str, rows: &[Vec<String>]) -> Result<()> {
        let contents = serde_json::to_string_pretty(rows)?;
        fs::write(self.table_path(name), contents)?;
        info!(target: "workbook", "Updated table: {}", name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(data: &[&[&str]]) -> Vec<Vec<String>> {
        data.iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_write_then_read_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let mut workbook = JsonWorkbook::open(dir.path()).unwrap();

        let table = rows(&[&["Location", "Clue"], &["Kitchen", "2. Question"]]);
        workbook.write_table("Group 1", &table).unwrap();

        assert!(workbook.table_exists("Group 1"));
        assert_eq!(workbook.read_table("Group 1").unwrap(), table);
    }

    #[test]
    fn test_write_replaces_existing_rows() {
        let dir = tempfile::tempdir().unwrap();
        let mut workbook = JsonWorkbook::open(dir.path()).unwrap();

        workbook
            .write_table("Master", &rows(&[&["a"], &["b"], &["c"]]))
            .unwrap();
        workbook.write_table("Master", &rows(&[&["d"]])).unwrap();

        assert_eq!(workbook.read_table("Master").unwrap(), rows(&[&["d"]]));
    }

    #[test]
    fn test_missing_table_errors() {
        let dir = tempfile::tempdir().unwrap();
        let workbook = JsonWorkbook::open(dir.path()).unwrap();

        assert!(!workbook.table_exists("Clues"));
        let err = workbook.read_table("Clues").unwrap_err();
        assert!(matches!(err, HuntError::MissingTable(name) if name == "Clues"));
    }

    #[test]
    fn test_open_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("hunts").join("spring");

        let workbook = JsonWorkbook::open(&nested).unwrap();
        assert!(nested.is_dir());
        assert_eq!(workbook.dir(), nested.as_path());
    }
}
