use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{DISCOVERY_SKIP_DIRS, SUPPORTED_EXTENSIONS};

/// Recursively lists candidate source files below a directory.
pub struct FileDiscovery {
    root: PathBuf,
    extensions: Vec<String>,
}

impl FileDiscovery {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extensions: SUPPORTED_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
        }
    }

    pub fn with_extensions(mut self, extensions: &[&str]) -> Self {
        self.extensions = extensions.iter().map(|ext| ext.trim_start_matches('.').to_string()).collect();
        self
    }

    /// Sorted file paths. A missing or unreadable root yields an empty list.
    pub fn discover(&self) -> Vec<PathBuf> {
        let mut files = Vec::new();
        if self.root.is_dir() {
            self.collect_files(&self.root, &mut files);
        }
        files.sort();
        files
    }

    fn collect_files(&self, dir: &Path, files: &mut Vec<PathBuf>) {
        match fs::read_dir(dir) {
            Ok(entries) => {
                for entry in entries.flatten() {
                    let path = entry.path();

                    if path.is_dir() {
                        if !Self::should_skip_dir(&path) {
                            self.collect_files(&path, files);
                        }
                    } else if self.matches_extension(&path) {
                        files.push(path);
                    }
                }
            }
            Err(e) => {
                log::warn!("Error reading directory {:?}: {}", dir, e);
            }
        }
    }

    fn should_skip_dir(path: &Path) -> bool {
        path.file_name()
            .map(|name| DISCOVERY_SKIP_DIRS.iter().any(|skip| name == *skip))
            .unwrap_or(false)
    }

    fn matches_extension(&self, path: &Path) -> bool {
        let file_name = match path.file_name() {
            Some(name) => name.to_string_lossy(),
            None => return false,
        };

        self.extensions
            .iter()
            .any(|ext| file_name.ends_with(&format!(".{}", ext)))
    }
}
