//! Allow-list check on file extensions.

/// Extension of a file name: everything from the last `.` to the end.
///
/// A name without any `.` is returned whole, so extensionless files fail
/// every realistic allow-list.
pub fn file_extension(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(idx) => &file_name[idx..],
        None => file_name,
    }
}

/// Check whether `file_name` passes the allow-list.
///
/// True when some allow-list entry is a substring of the file's extension.
/// The comparison is case-sensitive and multi-dot names are not special-cased.
pub fn is_extension_valid<S: AsRef<str>>(file_name: &str, allowed: &[S]) -> bool {
    let extension = file_extension(file_name);
    allowed.iter().any(|e| extension.contains(e.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALLOWED: [&str; 3] = [".png", ".pdf", ".docx"];

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension("report.pdf"), ".pdf");
        assert_eq!(file_extension("archive.tar.gz"), ".gz");
        assert_eq!(file_extension("README"), "README");
        assert_eq!(file_extension("trailing."), ".");
    }

    #[test]
    fn test_allowed_extensions() {
        assert!(is_extension_valid("b.pdf", &ALLOWED));
        assert!(is_extension_valid("scan.png", &ALLOWED));
        assert!(is_extension_valid("cv.docx", &ALLOWED));
        assert!(!is_extension_valid("a.txt", &ALLOWED));
    }

    #[test]
    fn test_containment_not_equality() {
        // ".pdfx" contains ".pdf"
        assert!(is_extension_valid("odd.pdfx", &ALLOWED));
        // ".doc" does not contain ".docx"
        assert!(!is_extension_valid("old.doc", &ALLOWED));
    }

    #[test]
    fn test_case_sensitive() {
        assert!(!is_extension_valid("SCAN.PNG", &ALLOWED));
    }

    #[test]
    fn test_only_last_segment_counts() {
        assert!(!is_extension_valid("notes.pdf.txt", &ALLOWED));
        assert!(is_extension_valid("notes.txt.pdf", &ALLOWED));
    }

    #[test]
    fn test_extensionless_rejected() {
        assert!(!is_extension_valid("Makefile", &ALLOWED));
        let empty: [&str; 0] = [];
        assert!(!is_extension_valid("b.pdf", &empty));
    }
}
