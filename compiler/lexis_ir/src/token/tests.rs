use super::*;

#[test]
fn end_and_range() {
    let token = Token::new(4, TokenKind::Name, "value");
    assert_eq!(token.end(), 9);
    assert_eq!(token.range(), 4..9);
    assert_eq!(token.span(), Ok(Span::new(4, 9)));
}

#[test]
fn with_kind_keeps_position() {
    let token = Token::new(1, TokenKind::Name, "aspect").with_kind(TokenKind::Keyword);
    assert_eq!(token, Token::new(1, TokenKind::Keyword, "aspect"));
}

#[test]
fn span_of_huge_offset_fails() {
    let token = Token::new(u32::MAX as usize, TokenKind::Text, "x");
    assert!(token.span().is_err());
}
