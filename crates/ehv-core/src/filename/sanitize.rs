//! Filesystem-safe names for gallery directories.

/// Linux NAME_MAX.
const NAME_MAX: usize = 255;

/// Characters rejected by at least one common target filesystem.
fn is_forbidden(c: char) -> bool {
    matches!(c, '\0' | '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|') || c.is_control()
}

/// Makes a gallery title usable as a single path component.
///
/// - Replaces path separators, reserved punctuation and control chars with `_`
/// - Collapses runs of `_`
/// - Trims leading/trailing spaces and dots
/// - Truncates to 255 bytes on a char boundary
///
/// Spaces inside the name are kept; titles stay readable in a file manager.
pub fn standardize_filename(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut prev_underscore = false;

    for c in name.chars() {
        let c = if is_forbidden(c) { '_' } else { c };
        if c == '_' {
            if !prev_underscore {
                out.push('_');
            }
            prev_underscore = true;
        } else {
            out.push(c);
            prev_underscore = false;
        }
    }

    let trimmed = out.trim_matches(|c| c == ' ' || c == '.');
    if trimmed.len() <= NAME_MAX {
        return trimmed.to_string();
    }
    let mut take = NAME_MAX;
    while take > 0 && !trimmed.is_char_boundary(take) {
        take -= 1;
    }
    trimmed[..take].trim_end_matches(|c| c == ' ' || c == '.').to_string()
}
