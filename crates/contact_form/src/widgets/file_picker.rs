//! Native file dialog for the drop zone, using rfd (rust file dialog).

use form_model::{FileRecord, FormConfig};

/// Filter for file types shown in the dialog.
#[derive(Debug, Clone)]
pub struct FileFilter {
    pub name: String,
    pub extensions: Vec<String>,
}

impl FileFilter {
    pub fn new(name: impl Into<String>, extensions: &[&str]) -> Self {
        Self {
            name: name.into(),
            extensions: extensions.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Filter matching the form's allow-list.
    pub fn documents(config: &FormConfig) -> Self {
        Self::new("Documents", &config.dialog_extensions())
    }
}

/// Multi-file picker feeding the drop zone.
pub struct FilePickerWidget {
    title: String,
    filters: Vec<FileFilter>,
}

impl FilePickerWidget {
    pub fn new(config: &FormConfig) -> Self {
        Self {
            title: "Dokument hochladen".to_string(),
            filters: vec![FileFilter::documents(config)],
        }
    }

    /// Open the native dialog and wait for the user.
    ///
    /// Cancelling yields an empty batch.
    pub fn pick_files(&self) -> Vec<FileRecord> {
        let mut dialog = rfd::FileDialog::new().set_title(&self.title);

        for filter in &self.filters {
            let ext_refs: Vec<&str> = filter.extensions.iter().map(|s| s.as_str()).collect();
            dialog = dialog.add_filter(&filter.name, &ext_refs);
        }

        let picked = dialog.pick_files().unwrap_or_default();
        tracing::debug!(count = picked.len(), "file dialog closed");
        picked.into_iter().map(FileRecord::from_path).collect()
    }
}
