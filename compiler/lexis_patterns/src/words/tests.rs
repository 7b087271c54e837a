use super::*;
use pretty_assertions::assert_eq;

#[test]
fn longest_first_then_lexicographic() {
    let pattern = words(&["as", "break", "do", "as?"], "", "");
    assert_eq!(pattern.as_deref(), Ok(r"(?:break|as\?|as|do)"));
}

#[test]
fn prefix_and_suffix_surround_group() {
    let pattern = words(&["val", "var"], r"\b", r"\b");
    assert_eq!(pattern.as_deref(), Ok(r"\b(?:val|var)\b"));
}

#[test]
fn metacharacters_are_escaped() {
    let pattern = words(&["a.b", "(x)"], "", "");
    assert_eq!(pattern.as_deref(), Ok(r"(?:\(x\)|a\.b)"));
}

#[test]
fn duplicates_are_removed() {
    let pattern = words(&["if", "if", "in"], "", "");
    assert_eq!(pattern.as_deref(), Ok("(?:if|in)"));
}

#[test]
fn order_of_input_does_not_matter() {
    let a = words(&["when", "while", "where"], "", "");
    let b = words(&["where", "when", "while"], "", "");
    assert_eq!(a, b);
}

#[test]
fn empty_list_is_an_error() {
    let empty: [&str; 0] = [];
    assert_eq!(words(&empty, "", ""), Err(PatternError::EmptyWordList));
}

mod proptest_words {
    use super::super::words;
    use crate::{Matcher, RegexFlags};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn every_word_matches_in_full(list in proptest::collection::vec("[a-z?.+]{1,6}", 1..12)) {
            let pattern = words(&list, "", "").unwrap();
            let matcher = Matcher::compile(&pattern, RegexFlags::default()).unwrap();
            for word in &list {
                prop_assert_eq!(matcher.match_at(word, 0), Some(0..word.len()));
            }
        }
    }
}
