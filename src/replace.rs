//! Splice generated content between two literal marker lines.

use crate::error::ReplaceError;

/// Replace everything between the first `start` and the first `end` after
/// it with `replacement`.
///
/// Markers are matched as plain substrings. The result keeps both markers,
/// each separated from the replacement by a newline.
pub fn replace(
    haystack: &str,
    start: &str,
    end: &str,
    replacement: &str,
) -> Result<String, ReplaceError> {
    let start_pos = haystack.find(start).ok_or(ReplaceError::StartNotFound)?;
    let after_start = start_pos + start.len();

    let end_pos = match haystack[after_start..].find(end) {
        Some(offset) => after_start + offset,
        None if haystack[..start_pos].contains(end) => {
            return Err(ReplaceError::StartAfterEnd)
        }
        None => return Err(ReplaceError::EndNotFound),
    };

    let mut out = String::with_capacity(haystack.len() + replacement.len() + 2);
    out.push_str(&haystack[..after_start]);
    out.push('\n');
    out.push_str(replacement);
    out.push('\n');
    out.push_str(&haystack[end_pos..]);
    Ok(out)
}
