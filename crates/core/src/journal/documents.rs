//! Supporting documents attached to a journal entry.

use thiserror::Error;

/// Upload rejected before reaching the backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    /// The file has no usable name.
    #[error("file name is empty")]
    EmptyName,

    /// The file extension is not accepted.
    #[error("file type not allowed: {0}")]
    ExtensionNotAllowed(String),

    /// The file is larger than the configured limit.
    #[error("file too large: {size} bytes exceeds maximum {max} bytes")]
    FileTooLarge {
        /// Actual file size.
        size: u64,
        /// Maximum allowed size.
        max: u64,
    },
}

/// Local limits checked before an upload is sent.
#[derive(Debug, Clone)]
pub struct UploadPolicy {
    /// Maximum file size in bytes.
    pub max_file_size: u64,
    /// Lowercase extensions accepted; empty accepts everything.
    pub allowed_extensions: Vec<String>,
}

impl UploadPolicy {
    /// Default max file size: 10 MiB.
    pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

    /// Checks a candidate upload.
    pub fn check(&self, filename: &str, size: u64) -> Result<(), DocumentError> {
        let name = filename.trim();
        if name.is_empty() {
            return Err(DocumentError::EmptyName);
        }

        if !self.allowed_extensions.is_empty() {
            let extension = name
                .rsplit_once('.')
                .map(|(_, ext)| ext.to_ascii_lowercase())
                .unwrap_or_default();
            if !self.allowed_extensions.iter().any(|e| *e == extension) {
                return Err(DocumentError::ExtensionNotAllowed(name.to_string()));
            }
        }

        if size > self.max_file_size {
            return Err(DocumentError::FileTooLarge {
                size,
                max: self.max_file_size,
            });
        }

        Ok(())
    }
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            max_file_size: Self::DEFAULT_MAX_FILE_SIZE,
            allowed_extensions: Vec::new(),
        }
    }
}

/// Names of uploaded files, in upload order, without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupportingDocuments {
    names: Vec<String>,
}

impl SupportingDocuments {
    /// Records an uploaded file. Returns false if it was already recorded.
    pub fn add(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.names.contains(&name) {
            return false;
        }
        self.names.push(name);
        true
    }

    /// Forgets a file. Returns false if it was not recorded.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.names.len();
        self.names.retain(|n| n != name);
        self.names.len() != before
    }

    /// Forgets every file.
    pub fn clear(&mut self) {
        self.names.clear();
    }

    /// Recorded names.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of recorded files.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if nothing has been uploaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> UploadPolicy {
        UploadPolicy {
            max_file_size: 1024,
            allowed_extensions: vec!["pdf".to_string(), "png".to_string()],
        }
    }

    #[test]
    fn test_policy_accepts_allowed_file() {
        assert_eq!(policy().check("Receipt.PDF", 512), Ok(()));
    }

    #[test]
    fn test_policy_rejects_extension() {
        assert_eq!(
            policy().check("payroll.exe", 10),
            Err(DocumentError::ExtensionNotAllowed("payroll.exe".to_string()))
        );
        assert!(matches!(
            policy().check("noextension", 10),
            Err(DocumentError::ExtensionNotAllowed(_))
        ));
    }

    #[test]
    fn test_policy_rejects_size() {
        assert_eq!(
            policy().check("scan.png", 2048),
            Err(DocumentError::FileTooLarge {
                size: 2048,
                max: 1024
            })
        );
    }

    #[test]
    fn test_policy_rejects_blank_name() {
        assert_eq!(policy().check("  ", 1), Err(DocumentError::EmptyName));
    }

    #[test]
    fn test_documents_dedupe() {
        let mut docs = SupportingDocuments::default();
        assert!(docs.add("a.pdf"));
        assert!(docs.add("b.pdf"));
        assert!(!docs.add("a.pdf"));
        assert_eq!(docs.names(), ["a.pdf", "b.pdf"]);
        assert!(docs.remove("a.pdf"));
        assert!(!docs.remove("a.pdf"));
        docs.clear();
        assert!(docs.is_empty());
    }
}
