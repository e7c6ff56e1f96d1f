//! File handles accepted by the intake widget.

use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

/// Where a file's bytes can be found. Never read by the form itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    /// File on disk (native picker, desktop drops)
    Path(PathBuf),
    /// Bytes handed over directly by the platform
    Bytes(Arc<[u8]>),
}

/// A user-supplied file. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    name: String,
    #[serde(skip)]
    content: FileContent,
}

impl FileRecord {
    pub fn new(name: impl Into<String>, content: FileContent) -> Self {
        Self {
            name: name.into(),
            content,
        }
    }

    /// Build a record from a path, using its final component as the name.
    pub fn from_path(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        Self::new(name, FileContent::Path(path))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &FileContent {
        &self.content
    }
}

/// Ordered list of accepted files.
///
/// Identity is positional: two records with the same name may coexist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FileCollection {
    files: Vec<FileRecord>,
}

impl FileCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a batch after the existing entries, keeping arrival order.
    pub fn extend(&mut self, batch: impl IntoIterator<Item = FileRecord>) {
        self.files.extend(batch);
    }

    /// Remove the entry at `index`, shifting later entries left.
    pub fn remove(&mut self, index: usize) -> Option<FileRecord> {
        (index < self.files.len()).then(|| self.files.remove(index))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FileRecord> {
        self.files.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.files.iter().map(FileRecord::name).collect()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl FromIterator<FileRecord> for FileCollection {
    fn from_iter<I: IntoIterator<Item = FileRecord>>(iter: I) -> Self {
        Self {
            files: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a FileCollection {
    type Item = &'a FileRecord;
    type IntoIter = std::slice::Iter<'a, FileRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}
