//! Validation helpers for user-provided names that end up in file paths
//! and command lines.

/// Validates a workflow identifier.
///
/// Checks:
/// - Non-empty
/// - No path separators (/, \)
/// - Not "." or ".."
/// - Characters are alphanumeric, '-', or '_'
pub(crate) fn is_valid_identifier(id: &str) -> bool {
    if id.is_empty() {
        return false;
    }
    if id.contains('/') || id.contains('\\') {
        return false;
    }
    if id == "." || id == ".." {
        return false;
    }
    id.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_')
}

/// Validates a usecase settings-file name.
///
/// The name is resolved against the workflow's config directory by the
/// external tool, so it must be a bare file name: no separators, no null
/// bytes, no leading dot, and an `.xml` suffix with a non-empty stem.
pub(crate) fn is_valid_settings_file_name(name: &str) -> bool {
    if name.is_empty() || name.starts_with('.') {
        return false;
    }
    if name.contains('/') || name.contains('\\') || name.contains('\0') {
        return false;
    }
    let Some(stem) = name.strip_suffix(".xml") else {
        return false;
    };
    !stem.is_empty() && stem.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_' || c == '.')
}
