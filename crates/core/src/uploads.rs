//! Upload filename policy for news images.
//!
//! Only a fixed set of image extensions is accepted. Accepted filenames are
//! reduced to a safe ASCII form before they touch the filesystem.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Extensions accepted for news images (compared case-insensitively).
pub const ALLOWED_IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif"];

/// Names reserved by Windows that must not be used as a bare file stem.
const WINDOWS_DEVICE_NAMES: &[&str] = &[
    "CON", "AUX", "COM1", "COM2", "COM3", "COM4", "LPT1", "LPT2", "LPT3", "PRN", "NUL",
];

static UNSAFE_CHARS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_.-]").expect("valid regex"));

/// Whether `filename` carries one of the allowed image extensions.
pub fn is_allowed_image(filename: &str) -> bool {
    match filename.rsplit_once('.') {
        Some((_, ext)) => {
            let ext = ext.to_lowercase();
            ALLOWED_IMAGE_EXTENSIONS.contains(&ext.as_str())
        }
        None => false,
    }
}

/// Reduce a client-supplied filename to a safe, flat ASCII name.
///
/// The name is NFKD-decomposed first so accented letters keep their base
/// letter. Path separators become word breaks, runs of whitespace become `_`,
/// anything outside `[A-Za-z0-9_.-]` is dropped and leading/trailing `.`
/// and `_` are stripped. May return an empty string.
pub fn secure_filename(filename: &str) -> String {
    let ascii: String = filename
        .nfkd()
        .filter(char::is_ascii)
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .collect();

    let joined = ascii.split_whitespace().collect::<Vec<_>>().join("_");
    let stripped = UNSAFE_CHARS_RE.replace_all(&joined, "");
    let name = stripped.trim_matches(|c| c == '.' || c == '_').to_string();

    let stem = name.split('.').next().unwrap_or("").to_uppercase();
    if !name.is_empty() && WINDOWS_DEVICE_NAMES.contains(&stem.as_str()) {
        return format!("_{name}");
    }
    name
}

/// Sanitized filename for an upload, or `None` when it must be dropped.
pub fn accepted_image_name(filename: &str) -> Option<String> {
    if !is_allowed_image(filename) {
        return None;
    }
    let safe = secure_filename(filename);
    if safe.is_empty() || !is_allowed_image(&safe) {
        return None;
    }
    Some(safe)
}
