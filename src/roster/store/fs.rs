use super::RecordStore;
use crate::error::{Result, RosterError};
use crate::model::Employee;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::path::{Path, PathBuf};

/// JSON-file backed store.
///
/// The backing path is injected at construction so callers (and tests)
/// decide where records live.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(RosterError::Io)?;
            }
        }
        Ok(())
    }
}

impl RecordStore for FileStore {
    fn load(&self) -> Result<Vec<Employee>> {
        let content = fs::read_to_string(&self.path).map_err(RosterError::Io)?;
        let employees = serde_json::from_str(&content).map_err(RosterError::Serialization)?;
        Ok(employees)
    }

    fn save(&mut self, employees: &[Employee]) -> Result<()> {
        self.ensure_parent_dir()?;

        // The file format is a pretty array with four-space indentation.
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        employees
            .serialize(&mut serializer)
            .map_err(RosterError::Serialization)?;

        fs::write(&self.path, buf).map_err(RosterError::Io)?;
        Ok(())
    }
}
