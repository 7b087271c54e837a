//! Stream invariants over random input.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::sync::Arc;

use lexis_ir::TokenKind;
use lexis_lexer::{run, LexConfig};
use lexis_table::{default_rule, groups, token, using, DelegateDef, GroupDef, RuleTable, TableDef};
use proptest::prelude::*;

/// A table exercising every action and transition kind, with gaps in
/// coverage so the fallback path is hit too.
fn busy_table() -> RuleTable {
    TableDef::new("busy")
        .fragment("ident", r"[A-Za-z_]\w*")
        .state(
            "root",
            [
                token(r"/\*", TokenKind::CommentMultiline).push("comment"),
                token(r"//[^\n]*", TokenKind::CommentSingle),
                token("\"", TokenKind::StringDouble).push_combined(&["escape", "string"]),
                groups(
                    r"(fn)(\s+)({:ident})",
                    [
                        TokenKind::Keyword.into(),
                        GroupDef::Skip,
                        TokenKind::NameFunction.into(),
                    ],
                ),
                using(r"\[[^\]\n]*\]", DelegateDef::this().state("list")),
                token("{:ident}", TokenKind::Name),
                token(r"[0-9]+", TokenKind::NumberInteger),
                token(r"\s+", TokenKind::Whitespace),
                token(r"\(", TokenKind::Punctuation).push("paren"),
            ],
        )
        .state(
            "comment",
            [
                token(r"/\*", TokenKind::CommentMultiline).push_current(),
                token(r"\*/", TokenKind::CommentMultiline).pop(),
                token(r"[^*/]+|[*/]", TokenKind::CommentMultiline),
            ],
        )
        .state("escape", [token(r"\\.", TokenKind::StringEscape)])
        .state(
            "string",
            [
                token("\"", TokenKind::StringDouble).pop(),
                token(r#"[^"\\]+"#, TokenKind::StringDouble),
            ],
        )
        .state(
            "list",
            [
                token(r"[\[\]]", TokenKind::Punctuation),
                token("[0-9]+", TokenKind::NumberInteger),
                token(r"x*", TokenKind::Name),
            ],
        )
        .state(
            "paren",
            [
                token(r"\)", TokenKind::Punctuation).pop_n(3),
                token(r"\(", TokenKind::Punctuation).push_current(),
                token(r"\s", TokenKind::Whitespace).goto("paren"),
                default_rule().push("root"),
            ],
        )
        .build()
        .unwrap()
}

fn input() -> impl Strategy<Value = String> {
    prop::string::string_regex(r#"([a-z_ 0-9()\[\]/*"\\\n#é]|fn |/\*|\*/){0,40}"#)
        .expect("valid regex")
}

proptest! {
    #[test]
    fn tokens_reconstruct_the_input(text in input()) {
        let table = busy_table();
        let joined: String = run(&table, "root", &text).unwrap().map(|t| t.text).collect();
        prop_assert_eq!(joined, text);
    }

    #[test]
    fn offsets_are_contiguous(text in input()) {
        let table = busy_table();
        let mut expected = 0;
        for token in run(&table, "root", &text).unwrap() {
            prop_assert_eq!(token.start, expected);
            prop_assert!(!token.text.is_empty());
            prop_assert_eq!(&text[token.range()], token.text);
            expected = token.end();
        }
        prop_assert_eq!(expected, text.len());
    }

    #[test]
    fn runs_are_deterministic(text in input()) {
        let table = busy_table();
        let first: Vec<_> = run(&table, "root", &text).unwrap().collect();
        let second: Vec<_> = run(&table, "root", &text).unwrap().collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn any_text_is_covered_even_with_an_empty_table(text in any::<String>()) {
        let table = TableDef::new("empty").state("root", []).build().unwrap();
        let tokens: Vec<_> = run(&table, "root", &text).unwrap().collect();
        prop_assert_eq!(tokens.len(), text.chars().count());
        prop_assert!(tokens.iter().all(|t| t.kind == TokenKind::Error));
    }

    #[test]
    fn tight_limits_still_cover_the_input(text in input()) {
        let table = busy_table();
        let config = LexConfig::default()
            .with_max_delegate_depth(0)
            .with_max_zero_width_steps(1);
        let joined: String = run(&table, "root", &text)
            .unwrap()
            .with_config(config)
            .map(|t| t.text)
            .collect();
        prop_assert_eq!(joined, text);
    }
}

#[test]
fn shared_table_across_threads() {
    let table = Arc::new(busy_table());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let table = Arc::clone(&table);
            std::thread::spawn(move || {
                let text = format!("fn f{i}(x) /* {i} */ \"a\\n\"");
                run(&table, "root", &text)
                    .unwrap()
                    .map(|t| t.text.to_owned())
                    .collect::<String>()
                    == text
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
