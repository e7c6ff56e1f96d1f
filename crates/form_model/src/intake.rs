//! File intake: the state behind the drop zone.
//!
//! Owns the accepted files, the extension error and the drag tracker. Every
//! change to the file list is pushed to the host form's `files` slot with
//! validation requested, so the form always sees the state after the change.

use crate::drag::DragTracker;
use crate::extension::is_extension_valid;
use crate::file_record::{FileCollection, FileRecord};
use crate::form::{FieldHandle, FieldSink, FieldValue, SetValueOptions};

/// Message shown when a whole batch was rejected by the allow-list.
pub const UNSUPPORTED_FORMAT: &str = "Unsupported file format";

/// Result of one intake batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntakeOutcome {
    /// Files from the batch that passed the allow-list, in arrival order
    pub accepted: Vec<FileRecord>,
    /// The batch was non-empty and nothing in it was accepted
    pub rejected_all: bool,
}

/// State of the file intake widget.
#[derive(Debug, Clone)]
pub struct FileIntake {
    handle: FieldHandle,
    files: FileCollection,
    extension_error: Option<&'static str>,
    drag: DragTracker,
}

impl FileIntake {
    pub fn new(handle: FieldHandle) -> Self {
        Self {
            handle,
            files: FileCollection::new(),
            extension_error: None,
            drag: DragTracker::new(),
        }
    }

    pub fn files(&self) -> &FileCollection {
        &self.files
    }

    pub fn extension_error(&self) -> Option<&'static str> {
        self.extension_error
    }

    pub fn drag(&self) -> &DragTracker {
        &self.drag
    }

    pub fn drag_mut(&mut self) -> &mut DragTracker {
        &mut self.drag
    }

    /// Message to show under the drop zone. The local extension error wins
    /// over the host form's own message.
    pub fn error_message<'a>(&self, form_error: Option<&'a str>) -> Option<&'a str> {
        self.extension_error.or(form_error)
    }

    /// Add a batch of picked or dropped files.
    pub fn intake<S: AsRef<str>>(
        &mut self,
        candidates: Vec<FileRecord>,
        allowed: &[S],
        host: &mut impl FieldSink,
    ) -> IntakeOutcome {
        let batch_len = candidates.len();
        let accepted: Vec<FileRecord> = candidates
            .into_iter()
            .filter(|f| is_extension_valid(f.name(), allowed))
            .collect();
        let rejected_all = batch_len > 0 && accepted.is_empty();

        self.extension_error = rejected_all.then_some(UNSUPPORTED_FORMAT);
        self.files.extend(accepted.iter().cloned());

        tracing::info!(
            offered = batch_len,
            accepted = accepted.len(),
            total = self.files.len(),
            "file batch received"
        );

        self.publish(host);
        IntakeOutcome {
            accepted,
            rejected_all,
        }
    }

    /// Remove the file at `index`.
    ///
    /// Indices come from the rendered list, so an out-of-range index is a
    /// caller bug; it is logged and ignored.
    pub fn remove(&mut self, index: usize, host: &mut impl FieldSink) -> Option<FileRecord> {
        let Some(removed) = self.files.remove(index) else {
            tracing::warn!(index, len = self.files.len(), "remove index out of range");
            return None;
        };
        tracing::debug!(index, name = removed.name(), "file removed");
        self.publish(host);
        Some(removed)
    }

    /// Widget is going away. Drag events are no longer processed.
    pub fn unmount(&mut self) {
        self.drag.detach();
    }

    fn publish(&self, host: &mut impl FieldSink) {
        let field = self.handle.field();
        if let Err(e) = host.set_value(
            field,
            FieldValue::Files(self.files.clone()),
            SetValueOptions::validated(),
        ) {
            tracing::warn!(field = field.key(), "failed to publish files: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file_record::FileContent;
    use crate::form::{Field, FormState};
    use std::path::PathBuf;

    const ALLOWED: [&str; 3] = [".png", ".pdf", ".docx"];

    fn batch(names: &[&str]) -> Vec<FileRecord> {
        names
            .iter()
            .map(|n| FileRecord::new(*n, FileContent::Path(PathBuf::from(*n))))
            .collect()
    }

    fn setup() -> (FormState, FileIntake) {
        let mut form = FormState::new();
        let intake = FileIntake::new(form.register(Field::Files));
        (form, intake)
    }

    #[test]
    fn test_mixed_then_rejected_batch() {
        let (mut form, mut intake) = setup();

        let outcome = intake.intake(batch(&["a.txt", "b.pdf"]), &ALLOWED, &mut form);
        assert_eq!(outcome.accepted, batch(&["b.pdf"]));
        assert!(!outcome.rejected_all);
        assert_eq!(intake.files().names(), vec!["b.pdf"]);
        assert_eq!(intake.extension_error(), None);

        let outcome = intake.intake(batch(&["c.txt"]), &ALLOWED, &mut form);
        assert!(outcome.accepted.is_empty());
        assert!(outcome.rejected_all);
        assert_eq!(intake.files().names(), vec!["b.pdf"]);
        assert_eq!(intake.extension_error(), Some(UNSUPPORTED_FORMAT));
    }

    #[test]
    fn test_error_cleared_by_accepted_batch() {
        let (mut form, mut intake) = setup();
        intake.intake(batch(&["x.exe"]), &ALLOWED, &mut form);
        assert!(intake.extension_error().is_some());

        intake.intake(batch(&["y.png", "z.exe"]), &ALLOWED, &mut form);
        assert_eq!(intake.extension_error(), None);
    }

    #[test]
    fn test_empty_batch_is_not_an_error() {
        let (mut form, mut intake) = setup();
        intake.intake(batch(&["x.exe"]), &ALLOWED, &mut form);

        let outcome = intake.intake(Vec::new(), &ALLOWED, &mut form);
        assert!(!outcome.rejected_all);
        assert_eq!(intake.extension_error(), None);
        assert!(intake.files().is_empty());
    }

    #[test]
    fn test_successive_batches_match_concatenation() {
        let (mut form_a, mut split) = setup();
        split.intake(batch(&["1.pdf", "2.txt"]), &ALLOWED, &mut form_a);
        split.intake(batch(&["3.docx", "4.png"]), &ALLOWED, &mut form_a);

        let (mut form_b, mut joined) = setup();
        joined.intake(
            batch(&["1.pdf", "2.txt", "3.docx", "4.png"]),
            &ALLOWED,
            &mut form_b,
        );

        assert_eq!(split.files(), joined.files());
        assert_eq!(split.files().names(), vec!["1.pdf", "3.docx", "4.png"]);
    }

    #[test]
    fn test_intake_publishes_to_form() {
        let (mut form, mut intake) = setup();
        intake.intake(batch(&["a.pdf", "a.pdf"]), &ALLOWED, &mut form);
        assert_eq!(form.values().files.names(), vec!["a.pdf", "a.pdf"]);
        assert!(form.error(Field::Files).is_none());
    }

    #[test]
    fn test_remove_middle() {
        let (mut form, mut intake) = setup();
        intake.intake(batch(&["a.pdf", "b.pdf", "c.pdf"]), &ALLOWED, &mut form);

        let removed = intake.remove(1, &mut form).unwrap();
        assert_eq!(removed.name(), "b.pdf");
        assert_eq!(intake.files().names(), vec!["a.pdf", "c.pdf"]);
        assert_eq!(form.values().files.names(), vec!["a.pdf", "c.pdf"]);
    }

    #[test]
    fn test_remove_last_revalidates() {
        let (mut form, mut intake) = setup();
        intake.intake(batch(&["b.pdf"]), &ALLOWED, &mut form);
        intake.remove(0, &mut form);

        assert!(intake.files().is_empty());
        assert_eq!(form.error(Field::Files), Some("You haven't added documents"));
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let (mut form, mut intake) = setup();
        intake.intake(batch(&["b.pdf"]), &ALLOWED, &mut form);
        assert!(intake.remove(5, &mut form).is_none());
        assert_eq!(intake.files().len(), 1);
    }

    #[test]
    fn test_extension_error_takes_precedence() {
        let (mut form, mut intake) = setup();
        assert_eq!(intake.error_message(Some("form says no")), Some("form says no"));

        intake.intake(batch(&["c.txt"]), &ALLOWED, &mut form);
        assert_eq!(
            intake.error_message(form.error(Field::Files)),
            Some(UNSUPPORTED_FORMAT)
        );
    }

    #[test]
    fn test_unmount_detaches_drag() {
        let (_form, mut intake) = setup();
        intake.unmount();
        assert!(!intake.drag().is_attached());
    }
}
