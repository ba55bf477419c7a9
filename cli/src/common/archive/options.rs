//! Per-call options for the archive writer operations.

/// Options for file entries (`write_file_from_disk`, `write_file_from_bytes`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddFileOptions {
    /// Prefix under which the file name is nested. Empty means the archive root.
    pub internal_path: String,
    /// Set the executable bit for owner, group and other.
    pub force_executable_flags: bool,
}

/// Options for folder entries (`write_directory_tree`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddFolderOptions {
    /// Prefix under which the folder contents are nested.
    pub internal_path: String,
    /// Applied to every file found below the folder.
    pub force_executable_flags: bool,
    /// Add only the direct file children; subdirectories are skipped entirely.
    pub non_recursive: bool,
    /// Nest the contents under the folder's own base name.
    pub include_root_folder: bool,
}

impl AddFolderOptions {
    /// File options for the files placed directly under `internal_path`.
    pub(crate) fn file_options(&self, internal_path: &str) -> AddFileOptions {
        AddFileOptions {
            internal_path: internal_path.to_string(),
            force_executable_flags: self.force_executable_flags,
        }
    }
}
