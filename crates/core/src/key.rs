use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{Result, StoreError};

/// An (owner, filename) pair, each validated as a single path segment so that
/// distinct pairs always compose to distinct paths and keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentKey {
    owner: String,
    filename: String,
}

impl DocumentKey {
    pub fn new(owner: &str, filename: &str) -> Result<Self> {
        validate_segment("owner", owner)?;
        validate_segment("filename", filename)?;
        Ok(Self {
            owner: owner.to_string(),
            filename: filename.to_string(),
        })
    }

    /// `root/owner`
    pub fn owner_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.owner)
    }

    /// `root/owner/filename`
    pub fn file_path(&self, root: &Path) -> PathBuf {
        self.owner_dir(root).join(&self.filename)
    }

    /// `owner/filename`, under `prefix/` when a prefix is set.
    pub fn object_key(&self, prefix: &str) -> String {
        let prefix = prefix.trim_end_matches('/');
        if prefix.is_empty() {
            format!("{}/{}", self.owner, self.filename)
        } else {
            format!("{prefix}/{}/{}", self.owner, self.filename)
        }
    }
}

impl fmt::Display for DocumentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.filename)
    }
}

fn validate_segment(what: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(StoreError::InvalidKey(format!("{what} is empty")));
    }
    if value == "." || value == ".." {
        return Err(StoreError::InvalidKey(format!("{what} '{value}' is reserved")));
    }
    if value.contains(['/', '\\', '\0']) {
        return Err(StoreError::InvalidKey(format!(
            "{what} '{}' contains a path separator",
            value.escape_default()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composes_paths_and_keys() {
        let key = DocumentKey::new("42", "a.txt").unwrap();
        assert_eq!(key.file_path(Path::new("/data")), PathBuf::from("/data/42/a.txt"));
        assert_eq!(key.owner_dir(Path::new("/data")), PathBuf::from("/data/42"));
        assert_eq!(key.object_key(""), "42/a.txt");
        assert_eq!(key.object_key("tenant-a"), "tenant-a/42/a.txt");
        assert_eq!(key.object_key("tenant-a/"), "tenant-a/42/a.txt");
        assert_eq!(key.to_string(), "42/a.txt");
    }

    #[test]
    fn rejects_segments_that_would_collide_or_escape() {
        for (owner, filename) in [
            ("", "a.txt"),
            ("42", ""),
            ("..", "a.txt"),
            ("42", "."),
            ("4/2", "a.txt"),
            ("42", "sub/a.txt"),
            ("42", "..\\a.txt"),
            ("42", "a\0b"),
        ] {
            let err = DocumentKey::new(owner, filename).unwrap_err();
            assert!(
                matches!(err, StoreError::InvalidKey(_)),
                "accepted {owner:?}/{filename:?}"
            );
        }
    }

    #[test]
    fn allows_dotted_filenames() {
        let key = DocumentKey::new("7", ".profile").unwrap();
        assert_eq!(key.object_key(""), "7/.profile");
    }
}
