//! Common password list
//!
//! Holds the substrings that mark a password as common, and loads extra
//! entries from a local text file.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming an extra common-password file.
pub const COMMON_LIST_ENV: &str = "PWD_COMMON_LIST_PATH";

const BUILTIN: [&str; 5] = ["123456", "password", "qwerty", "admin", "letmein"];

#[derive(Error, Debug)]
pub enum CommonListError {
    #[error("Common password file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read common password file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Common password file is empty")]
    EmptyFile,
}

/// Lowercased substrings checked against every analyzed password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonPasswords {
    entries: Vec<String>,
}

impl Default for CommonPasswords {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CommonPasswords {
    /// The built-in list only.
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Returns the extra list path from `PWD_COMMON_LIST_PATH`, if set.
    pub fn path_from_env() -> Option<PathBuf> {
        std::env::var(COMMON_LIST_ENV).ok().map(PathBuf::from)
    }

    /// Built-in list, extended from `PWD_COMMON_LIST_PATH` when that variable is set.
    ///
    /// # Errors
    ///
    /// Same as [`CommonPasswords::from_path`] when the variable is set.
    pub fn from_env() -> Result<Self, CommonListError> {
        match Self::path_from_env() {
            Some(path) => Self::from_path(path),
            None => Ok(Self::builtin()),
        }
    }

    /// Built-in list extended with one entry per non-blank line of `path`.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File has no non-blank line
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CommonListError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Common password list FAILED: FileNotFound {:?}", path);
            return Err(CommonListError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;

        if content.trim().is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Common password list FAILED: Empty file {:?}", path);
            return Err(CommonListError::EmptyFile);
        }

        let mut list = Self::builtin();
        list.extend(content.lines());

        #[cfg(feature = "tracing")]
        tracing::info!("Common password list loaded: {} entries from {:?}", list.len(), path);

        Ok(list)
    }

    /// Adds entries, lowercased and trimmed. Blank and duplicate entries are skipped.
    pub fn extend<I, S>(&mut self, entries: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for entry in entries {
            let entry = entry.as_ref().trim().to_lowercase();
            if !entry.is_empty() && !self.entries.contains(&entry) {
                self.entries.push(entry);
            }
        }
    }

    /// True if any entry occurs anywhere in `password`, ignoring case.
    pub fn matches(&self, password: &str) -> bool {
        let lowered = password.to_lowercase();
        self.entries.iter().any(|e| lowered.contains(e.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        unsafe { std::env::set_var(key, value); }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        unsafe { std::env::remove_var(key); }
    }

    fn setup_with_tempfile(lines: &[&str]) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        for line in lines {
            writeln!(temp_file, "{}", line).expect("Failed to write");
        }
        temp_file
    }

    #[test]
    fn test_builtin_matches_substrings_case_insensitive() {
        let list = CommonPasswords::builtin();
        assert!(list.matches("MyPassword1"));
        assert!(list.matches("xxQWERTYxx"));
        assert!(list.matches("0123456789"));
        assert!(list.matches("LetMeIn!"));
        assert!(!list.matches("Tr0ub4dor&3"));
    }

    #[test]
    #[serial]
    fn test_from_env_unset_is_builtin() {
        remove_env(COMMON_LIST_ENV);
        let list = CommonPasswords::from_env().expect("builtin list");
        assert_eq!(list, CommonPasswords::builtin());
    }

    #[test]
    #[serial]
    fn test_from_env_file_not_found() {
        set_env(COMMON_LIST_ENV, "/nonexistent/path/common.txt");

        let result = CommonPasswords::from_env();
        match result {
            Err(CommonListError::FileNotFound(_)) => {}
            _ => panic!("Expected FileNotFound error"),
        }

        remove_env(COMMON_LIST_ENV);
    }

    #[test]
    #[serial]
    fn test_from_env_extends_builtin() {
        let temp_file = setup_with_tempfile(&["Dragon", "  monkey  ", "", "password"]);
        let path = temp_file.path().to_str().unwrap();
        set_env(COMMON_LIST_ENV, path);

        let list = CommonPasswords::from_env().expect("list loads");
        assert_eq!(list.len(), BUILTIN.len() + 2);
        assert!(list.matches("xDRAGONx"));
        assert!(list.matches("monkey99"));

        remove_env(COMMON_LIST_ENV);
    }

    #[test]
    fn test_from_path_empty_file() {
        let temp_file = setup_with_tempfile(&["", "   "]);
        let result = CommonPasswords::from_path(temp_file.path());
        assert!(matches!(result, Err(CommonListError::EmptyFile)));
    }
}
