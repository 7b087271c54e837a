//! Word-list helper.

use crate::PatternError;

/// Build `prefix(?:w1|w2|...)suffix` matching any of `list` literally.
///
/// Words are regex-escaped, deduplicated, and ordered longest first (ties
/// broken lexicographically). The engine picks the first alternative that
/// matches, so `["Int", "Int?"]` prefers `Int?` when both apply and the
/// output is independent of the input order.
///
/// The group is non-capturing, so a word list never shifts the group
/// numbering of a bygroups rule.
pub fn words<S: AsRef<str>>(list: &[S], prefix: &str, suffix: &str) -> Result<String, PatternError> {
    let mut sorted: Vec<&str> = list.iter().map(AsRef::as_ref).collect();
    sorted.sort_unstable_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    sorted.dedup();
    if sorted.is_empty() {
        return Err(PatternError::EmptyWordList);
    }

    let mut out = String::with_capacity(prefix.len() + suffix.len() + 8 * sorted.len());
    out.push_str(prefix);
    out.push_str("(?:");
    for (i, word) in sorted.iter().enumerate() {
        if i > 0 {
            out.push('|');
        }
        out.push_str(&regex_syntax::escape(word));
    }
    out.push(')');
    out.push_str(suffix);
    Ok(out)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "tests use unwrap for brevity")]
mod tests;
