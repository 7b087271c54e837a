use super::*;
use pretty_assertions::assert_eq;

#[test]
fn root_has_no_parent() {
    assert_eq!(TokenKind::Token.parent(), None);
    assert_eq!(TokenKind::Token.depth(), 0);
}

#[test]
fn every_non_root_kind_reaches_the_root() {
    for &kind in TokenKind::ALL {
        assert_eq!(kind.ancestors().last(), Some(TokenKind::Token), "{kind}");
    }
}

#[test]
fn parents_are_declared_before_children() {
    for (index, &kind) in TokenKind::ALL.iter().enumerate() {
        if let Some(parent) = kind.parent() {
            let parent_index = TokenKind::ALL.iter().position(|&k| k == parent);
            assert!(parent_index.is_some_and(|p| p < index), "{kind}");
        }
    }
}

#[test]
fn paths_are_unique() {
    let mut paths: Vec<&str> = TokenKind::ALL.iter().map(|k| k.path()).collect();
    paths.sort_unstable();
    let before = paths.len();
    paths.dedup();
    assert_eq!(paths.len(), before);
}

#[test]
fn child_path_extends_parent_path() {
    for &kind in TokenKind::ALL {
        let Some(parent) = kind.parent() else { continue };
        if parent == TokenKind::Token || parent == TokenKind::Literal {
            continue;
        }
        assert!(
            kind.path().starts_with(&format!("{}.", parent.path())),
            "{kind} under {parent}"
        );
    }
}

#[test]
fn is_a_walks_the_hierarchy() {
    assert!(TokenKind::CommentSingle.is_a(TokenKind::Comment));
    assert!(TokenKind::CommentSingle.is_a(TokenKind::CommentSingle));
    assert!(TokenKind::CommentSingle.is_a(TokenKind::Token));
    assert!(!TokenKind::CommentSingle.is_a(TokenKind::CommentMultiline));
    assert!(TokenKind::StringEscape.is_a(TokenKind::Literal));
    assert!(TokenKind::NumberIntegerLong.is_a(TokenKind::Number));
    assert!(!TokenKind::Keyword.is_a(TokenKind::KeywordType));
}

#[test]
fn ancestors_order() {
    let chain: Vec<_> = TokenKind::NameVariableClass.ancestors().collect();
    assert_eq!(
        chain,
        vec![
            TokenKind::NameVariableClass,
            TokenKind::NameVariable,
            TokenKind::Name,
            TokenKind::Token,
        ]
    );
}

#[test]
fn parse_short_and_qualified_paths() {
    assert_eq!("Comment.Single".parse(), Ok(TokenKind::CommentSingle));
    assert_eq!("Token.Comment.Single".parse(), Ok(TokenKind::CommentSingle));
    assert_eq!("Token.Literal.String.Escape".parse(), Ok(TokenKind::StringEscape));
    assert_eq!("Literal.Number.Hex".parse(), Ok(TokenKind::NumberHex));
    assert_eq!("Literal.Date".parse(), Ok(TokenKind::LiteralDate));
    assert_eq!("Token".parse(), Ok(TokenKind::Token));
}

#[test]
fn parse_round_trips_every_path() {
    for &kind in TokenKind::ALL {
        assert_eq!(kind.path().parse::<TokenKind>(), Ok(kind));
    }
}

#[test]
fn parse_unknown_path_fails() {
    assert_eq!(
        "Comment.Loud".parse::<TokenKind>(),
        Err(UnknownTokenKind("Comment.Loud".to_owned()))
    );
}

#[test]
fn display_is_path() {
    assert_eq!(TokenKind::NameBuiltinPseudo.to_string(), "Name.Builtin.Pseudo");
}
