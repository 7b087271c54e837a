//! Per-table regex flags.

use bitflags::bitflags;
use regex_automata::util::syntax;

bitflags! {
    /// Syntax flags applied to every pattern of one table.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct RegexFlags: u8 {
        /// `^` and `$` match at line boundaries.
        const MULTI_LINE = 1 << 0;
        /// `.` also matches `\n`.
        const DOT_ALL = 1 << 1;
        const CASE_INSENSITIVE = 1 << 2;
        /// Whitespace and `#` comments in patterns are ignored.
        const IGNORE_WHITESPACE = 1 << 3;
    }
}

impl Default for RegexFlags {
    fn default() -> Self {
        RegexFlags::MULTI_LINE
    }
}

impl RegexFlags {
    /// Engine syntax configuration for these flags.
    ///
    /// Classes are always Unicode-aware and matches never split a UTF-8
    /// sequence, so every match boundary is a valid `str` index.
    pub(crate) fn syntax_config(self) -> syntax::Config {
        syntax::Config::new()
            .multi_line(self.contains(RegexFlags::MULTI_LINE))
            .dot_matches_new_line(self.contains(RegexFlags::DOT_ALL))
            .case_insensitive(self.contains(RegexFlags::CASE_INSENSITIVE))
            .ignore_whitespace(self.contains(RegexFlags::IGNORE_WHITESPACE))
            .unicode(true)
            .utf8(true)
    }
}
