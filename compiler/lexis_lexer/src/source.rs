//! Text preparation before lexing.

use std::borrow::Cow;

/// How input text is normalized before a run.
///
/// Line endings are always normalized to `\n`. Token offsets refer to the
/// prepared text, which is what the tokens reconstruct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceOptions {
    /// Trim all leading and trailing whitespace. Takes precedence over
    /// `strip_newlines`.
    pub strip_all: bool,

    /// Trim leading and trailing newlines.
    pub strip_newlines: bool,

    /// Expand tabs to this many columns; 0 keeps tabs.
    pub tab_size: usize,

    /// Make the text end with a newline.
    pub ensure_newline: bool,
}

impl Default for SourceOptions {
    fn default() -> Self {
        SourceOptions {
            strip_all: false,
            strip_newlines: true,
            tab_size: 0,
            ensure_newline: true,
        }
    }
}

impl SourceOptions {
    /// Only newline normalization.
    pub const fn verbatim() -> Self {
        SourceOptions {
            strip_all: false,
            strip_newlines: false,
            tab_size: 0,
            ensure_newline: false,
        }
    }

    #[must_use]
    pub const fn with_strip_all(mut self, on: bool) -> Self {
        self.strip_all = on;
        self
    }

    #[must_use]
    pub const fn with_strip_newlines(mut self, on: bool) -> Self {
        self.strip_newlines = on;
        self
    }

    #[must_use]
    pub const fn with_tab_size(mut self, size: usize) -> Self {
        self.tab_size = size;
        self
    }

    #[must_use]
    pub const fn with_ensure_newline(mut self, on: bool) -> Self {
        self.ensure_newline = on;
        self
    }

    /// Apply the options to `source`, borrowing when nothing changes.
    pub fn prepare<'a>(&self, source: &'a str) -> Cow<'a, str> {
        let mut text = if source.contains('\r') {
            Cow::Owned(source.replace("\r\n", "\n").replace('\r', "\n"))
        } else {
            Cow::Borrowed(source)
        };

        if self.strip_all {
            text = trim(text, str::trim);
        } else if self.strip_newlines {
            text = trim(text, |s| s.trim_matches('\n'));
        }

        if self.tab_size > 0 && text.contains('\t') {
            text = Cow::Owned(expand_tabs(&text, self.tab_size));
        }

        if self.ensure_newline && !text.ends_with('\n') {
            text.to_mut().push('\n');
        }

        // Trimming a final newline and appending it again restores the input.
        match text {
            Cow::Owned(prepared) if prepared == source => Cow::Borrowed(source),
            prepared => prepared,
        }
    }
}

fn trim<'a>(text: Cow<'a, str>, f: impl Fn(&str) -> &str) -> Cow<'a, str> {
    match text {
        Cow::Borrowed(s) => Cow::Borrowed(f(s)),
        Cow::Owned(s) => {
            let trimmed = f(&s);
            if trimmed.len() == s.len() {
                Cow::Owned(s)
            } else {
                Cow::Owned(trimmed.to_owned())
            }
        }
    }
}

/// Replace each tab with spaces up to the next multiple of `size` columns.
/// Columns count characters and restart after every newline.
fn expand_tabs(text: &str, size: usize) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 4);
    let mut column = 0;
    for ch in text.chars() {
        match ch {
            '\t' => {
                let pad = size - column % size;
                out.extend(std::iter::repeat(' ').take(pad));
                column += pad;
            }
            '\n' => {
                out.push(ch);
                column = 0;
            }
            _ => {
                out.push(ch);
                column += 1;
            }
        }
    }
    out
}
