//! Named sub-patterns interpolated into rule patterns.
//!
//! A reference is written `{:name}`. `{:` is never valid regex syntax, so a
//! reference can't be confused with a counted repetition (`{2,3}`) or an
//! escaped brace (`\{`). Each reference expands to `(?:<fragment>)` so an
//! alternation inside the fragment stays grouped; capture groups inside the
//! fragment are preserved and count towards the enclosing pattern.

use rustc_hash::FxHashMap;

use crate::PatternError;

/// Fragment definitions for one table.
#[derive(Clone, Debug, Default)]
pub struct Fragments {
    defs: FxHashMap<String, String>,
}

impl Fragments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Define (or redefine) a fragment.
    pub fn insert(&mut self, name: impl Into<String>, pattern: impl Into<String>) {
        self.defs.insert(name.into(), pattern.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.defs.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Replace every `{:name}` reference in `pattern`, recursively.
    pub fn expand(&self, pattern: &str) -> Result<String, PatternError> {
        let mut active = Vec::new();
        self.expand_into(pattern, &mut active)
    }

    fn expand_into(&self, pattern: &str, active: &mut Vec<String>) -> Result<String, PatternError> {
        let bytes = pattern.as_bytes();
        let mut out = String::with_capacity(pattern.len());
        let mut copied = 0;
        let mut i = 0;

        // Only ASCII bytes are compared, so `i` landing inside a multi-byte
        // sequence after an escape is harmless: slicing happens at `{` only.
        while i < bytes.len() {
            match bytes[i] {
                b'\\' => i += 2,
                b'{' if bytes.get(i + 1) == Some(&b':') => {
                    let name_start = i + 2;
                    let Some(len) = pattern[name_start..].find('}') else {
                        return Err(PatternError::UnterminatedFragment(pattern.to_owned()));
                    };
                    let name_end = name_start + len;
                    let name = &pattern[name_start..name_end];
                    if !is_valid_name(name) {
                        return Err(PatternError::InvalidFragmentName(name.to_owned()));
                    }

                    out.push_str(&pattern[copied..i]);
                    out.push_str("(?:");
                    out.push_str(&self.resolve(name, active)?);
                    out.push(')');

                    i = name_end + 1;
                    copied = i;
                }
                _ => i += 1,
            }
        }

        out.push_str(&pattern[copied..]);
        Ok(out)
    }

    fn resolve(&self, name: &str, active: &mut Vec<String>) -> Result<String, PatternError> {
        if active.iter().any(|n| n == name) {
            let mut chain = active.clone();
            chain.push(name.to_owned());
            return Err(PatternError::FragmentCycle(chain));
        }
        let def = self
            .get(name)
            .ok_or_else(|| PatternError::UndefinedFragment(name.to_owned()))?;

        active.push(name.to_owned());
        let expanded = self.expand_into(def, active);
        active.pop();
        expanded
    }
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
}

#[cfg(test)]
mod tests;
