//! End-to-end behavior through the public API.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use lexis_ir::TokenKind;
use lexis_lexer::{init_tracing, run, tokenize_all, Coalesce};
use lexis_table::{include, token, RuleTable, TableDef};
use pretty_assertions::assert_eq;

fn comment_table() -> RuleTable {
    TableDef::new("c-like")
        .state(
            "root",
            [
                token(r"/\*", TokenKind::CommentMultiline).push("comment"),
                include("whitespace"),
                token(r"\w+", TokenKind::Name),
            ],
        )
        .state("whitespace", [token(r"\s+", TokenKind::Whitespace)])
        .state(
            "comment",
            [
                token(r"\*/", TokenKind::CommentMultiline).pop(),
                token(r"[^*]+|\*", TokenKind::CommentMultiline),
            ],
        )
        .build()
        .unwrap()
}

fn kinds_and_texts<'s>(table: &RuleTable, text: &'s str) -> Vec<(TokenKind, &'s str)> {
    run(table, "root", text)
        .unwrap()
        .map(|t| (t.kind, t.text))
        .collect()
}

#[test]
fn comment_is_entered_and_left() {
    init_tracing();
    assert_eq!(
        kinds_and_texts(&comment_table(), "x/*y*/z"),
        vec![
            (TokenKind::Name, "x"),
            (TokenKind::CommentMultiline, "/*"),
            (TokenKind::CommentMultiline, "y"),
            (TokenKind::CommentMultiline, "*/"),
            (TokenKind::Name, "z"),
        ]
    );
}

#[test]
fn unterminated_comment_runs_to_the_end() {
    assert_eq!(
        kinds_and_texts(&comment_table(), "a /* b"),
        vec![
            (TokenKind::Name, "a"),
            (TokenKind::Whitespace, " "),
            (TokenKind::CommentMultiline, "/*"),
            (TokenKind::CommentMultiline, " b"),
        ]
    );
}

#[test]
fn binary_garbage_is_covered() {
    let text = "\u{0}\u{1}\u{7f}\u{fffd}";
    let tokens = kinds_and_texts(&comment_table(), text);
    assert_eq!(tokens.iter().map(|(_, t)| *t).collect::<String>(), text);
    assert!(tokens.iter().all(|(k, _)| *k == TokenKind::Error));
}

#[test]
fn coalesce_joins_comment_pieces() {
    let table = comment_table();
    let text = "x /* a * b */ y";
    let merged: Vec<_> = Coalesce::new(text, run(&table, "root", text).unwrap())
        .map(|t| (t.kind, t.text))
        .collect();
    assert_eq!(
        merged,
        vec![
            (TokenKind::Name, "x"),
            (TokenKind::Whitespace, " "),
            (TokenKind::CommentMultiline, "/* a * b */"),
            (TokenKind::Whitespace, " "),
            (TokenKind::Name, "y"),
        ]
    );
}

#[test]
fn parallel_batch_matches_sequential_runs() {
    let table = comment_table();
    let inputs = ["a b", "/* c */", "", "d/*", "e\u{e9}f"];
    let batch = tokenize_all(&table, "root", &inputs).unwrap();
    assert_eq!(batch.len(), inputs.len());
    for (text, tokens) in inputs.iter().zip(&batch) {
        let sequential: Vec<_> = run(&table, "root", text).unwrap().collect();
        assert_eq!(tokens, &sequential);
    }
}

#[test]
fn parallel_batch_rejects_unknown_state() {
    let table = comment_table();
    assert!(tokenize_all(&table, "string", &["x"]).is_err());
}
