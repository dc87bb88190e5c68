//! Document stores the loader reads quiz documents from.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::StoreError;

/// Source of raw quiz documents, addressed by file name.
pub trait DocumentStore: Send + Sync {
    /// Names of every document in the store.
    fn list_documents(&self) -> Result<Vec<String>, StoreError>;

    /// Full text of one document.
    fn read_document(&self, name: &str) -> Result<String, StoreError>;
}

/// Documents stored as files in a single directory.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn unavailable(&self, source: io::Error) -> StoreError {
        StoreError::StoreUnavailable {
            location: self.root.to_string_lossy().to_string(),
            source,
        }
    }
}

impl DocumentStore for DirectoryStore {
    fn list_documents(&self) -> Result<Vec<String>, StoreError> {
        let mut names = Vec::new();

        for entry in fs::read_dir(&self.root).map_err(|e| self.unavailable(e))? {
            let entry = entry.map_err(|e| self.unavailable(e))?;
            let is_file = entry
                .file_type()
                .map(|kind| kind.is_file())
                .unwrap_or(false);
            if !is_file {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(name) => tracing::warn!(?name, "skipping document with non UTF-8 name"),
            }
        }

        names.sort();
        Ok(names)
    }

    fn read_document(&self, name: &str) -> Result<String, StoreError> {
        // Names are plain file names; anything that could leave the root is unknown.
        if name.is_empty() || name.contains(['/', '\\']) || name.contains("..") {
            return Err(StoreError::DocumentNotFound(name.to_string()));
        }

        let bytes = fs::read(self.root.join(name)).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => StoreError::DocumentNotFound(name.to_string()),
            _ => self.unavailable(e),
        })?;

        match String::from_utf8(bytes) {
            Ok(content) => Ok(content),
            Err(e) => {
                tracing::warn!(name, "document is not valid UTF-8, decoding lossily");
                Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
            }
        }
    }
}

/// In-memory store, mostly useful for tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    documents: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a document.
    pub fn insert(&mut self, name: impl Into<String>, content: impl Into<String>) {
        self.documents.insert(name.into(), content.into());
    }

    pub fn with_document(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
        self.insert(name, content);
        self
    }
}

impl DocumentStore for MemoryStore {
    fn list_documents(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.documents.keys().cloned().collect())
    }

    fn read_document(&self, name: &str) -> Result<String, StoreError> {
        self.documents
            .get(name)
            .cloned()
            .ok_or_else(|| StoreError::DocumentNotFound(name.to_string()))
    }
}
