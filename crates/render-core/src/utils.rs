use std::path::PathBuf;

/// Resolves the path an export is written to.
///
/// An explicit `filename` wins; otherwise the report `name` is used, or
/// `fallback` when the name is empty. `extension` is appended unless the
/// chosen name already ends with it.
pub fn output_filename(filename: Option<&str>, name: &str, fallback: &str, extension: &str) -> PathBuf {
    let stem = match filename {
        Some(filename) => filename,
        None if name.is_empty() => fallback,
        None => name,
    };
    let suffix = format!(".{extension}");
    if stem.to_ascii_lowercase().ends_with(&suffix) {
        PathBuf::from(stem)
    } else {
        PathBuf::from(format!("{stem}{suffix}"))
    }
}
