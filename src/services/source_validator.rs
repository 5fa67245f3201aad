use std::path::Path;
use crate::config::constants::{EXPO_MARKERS, SUPPORTED_EXTENSIONS, UI_FRAMEWORK_MARKERS};
use crate::errors::{OptimizeError, OptimizeResult};

/// Checks a path before any model call: it must be an existing file with a
/// supported extension.
pub fn validate_source_path(path: &Path) -> OptimizeResult<()> {
    let display = path.display().to_string();

    if !path.is_file() {
        return Err(OptimizeError::not_found(&display));
    }

    if !has_supported_extension(path) {
        return Err(OptimizeError::unsupported_extension(&display, SUPPORTED_EXTENSIONS));
    }

    Ok(())
}

pub fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext))
        .unwrap_or(false)
}

pub fn references_ui_framework(code: &str) -> bool {
    UI_FRAMEWORK_MARKERS.iter().any(|marker| code.contains(marker))
}

pub fn is_expo_project(dir: &Path) -> bool {
    EXPO_MARKERS.iter().any(|marker| dir.join(marker).exists())
}
