use super::*;
use lexis_ir::TokenKind;
use pretty_assertions::assert_eq;

#[test]
fn adjacent_equal_kinds_merge() {
    let text = "/* a */x";
    let tokens = vec![
        Token::new(0, TokenKind::CommentMultiline, "/*"),
        Token::new(2, TokenKind::CommentMultiline, " a "),
        Token::new(5, TokenKind::CommentMultiline, "*/"),
        Token::new(7, TokenKind::Name, "x"),
    ];
    let merged: Vec<_> = Coalesce::new(text, tokens.into_iter())
        .map(|t| (t.start, t.kind, t.text))
        .collect();
    assert_eq!(
        merged,
        vec![
            (0, TokenKind::CommentMultiline, "/* a */"),
            (7, TokenKind::Name, "x"),
        ]
    );
}

#[test]
fn different_kinds_stay_apart() {
    let text = "ab";
    let tokens = vec![
        Token::new(0, TokenKind::Name, "a"),
        Token::new(1, TokenKind::Keyword, "b"),
    ];
    assert_eq!(Coalesce::new(text, tokens.into_iter()).count(), 2);
}

#[test]
fn non_adjacent_tokens_stay_apart() {
    let text = "a b";
    let tokens = vec![
        Token::new(0, TokenKind::Name, "a"),
        Token::new(2, TokenKind::Name, "b"),
    ];
    assert_eq!(Coalesce::new(text, tokens.into_iter()).count(), 2);
}
