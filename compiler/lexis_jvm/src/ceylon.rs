//! Ceylon. Block comments nest.

use std::sync::{Arc, OnceLock};

use lexis_ir::TokenKind;
use lexis_lexer::Lexer;
use lexis_table::{groups, token, BuildError, DelegateDef, RegexFlags, RuleTable, TableDef};

pub const NAME: &str = "Ceylon";
pub const ALIASES: &[&str] = &["ceylon"];

pub fn definition() -> TableDef {
    TableDef::new("ceylon")
        .flags(RegexFlags::MULTI_LINE | RegexFlags::DOT_ALL)
        .reset_on_newline(true)
        .state(
            "root",
            [
                groups(
                    r"^(\s*(?:[a-zA-Z_][\w.\[\]]*\s+)+?)([a-zA-Z_]\w*)(\s*)(\()",
                    [
                        DelegateDef::this().into(),
                        TokenKind::NameFunction.into(),
                        TokenKind::Text.into(),
                        TokenKind::Operator.into(),
                    ],
                ),
                token(r"[^\S\n]+", TokenKind::Text),
                token(r"//.*?\n", TokenKind::CommentSingle),
                token(r"/\*", TokenKind::CommentMultiline).push("comment"),
                token(
                    concat!(
                        r"(shared|abstract|formal|default|actual|variable|deprecated|small|",
                        r"late|literal|doc|by|see|throws|optional|license|tagged|final|native|",
                        r"annotation|sealed)\b",
                    ),
                    TokenKind::NameDecorator,
                ),
                token(
                    concat!(
                        r"(break|case|catch|continue|else|finally|for|in|",
                        r"if|return|switch|this|throw|try|while|is|exists|dynamic|",
                        r"nonempty|then|outer|assert|let)\b",
                    ),
                    TokenKind::Keyword,
                ),
                token(
                    r"(abstracts|extends|satisfies|super|given|of|out|assign)\b",
                    TokenKind::KeywordDeclaration,
                ),
                token(r"(function|value|void|new)\b", TokenKind::KeywordType),
                groups(
                    r"(assembly|module|package)(\s+)",
                    [TokenKind::KeywordNamespace.into(), TokenKind::Text.into()],
                ),
                token(r"(true|false|null)\b", TokenKind::KeywordConstant),
                groups(
                    r"(class|interface|object|alias)(\s+)",
                    [TokenKind::KeywordDeclaration.into(), TokenKind::Text.into()],
                )
                .push("class"),
                groups(
                    r"(import)(\s+)",
                    [TokenKind::KeywordNamespace.into(), TokenKind::Text.into()],
                )
                .push("import"),
                token(r#""(\\\\|\\[^\\]|[^"\\])*""#, TokenKind::String),
                token(r"'\\.'|'[^\\]'|'\\\{#[0-9a-fA-F]{4}\}'", TokenKind::StringChar),
                groups(
                    r"(\.)([a-z_]\w*)",
                    [TokenKind::Operator.into(), TokenKind::NameAttribute.into()],
                ),
                token(r"[a-zA-Z_]\w*:", TokenKind::NameLabel),
                token(r"[a-zA-Z_]\w*", TokenKind::Name),
                token(r"[~^*!%&\[\](){}<>|+=:;,./?-]", TokenKind::Operator),
                token(r"\d{1,3}(_\d{3})+\.\d{1,3}(_\d{3})+[kMGTPmunpf]?", TokenKind::NumberFloat),
                token(
                    r"\d{1,3}(_\d{3})+\.[0-9]+([eE][+-]?[0-9]+)?[kMGTPmunpf]?",
                    TokenKind::NumberFloat,
                ),
                token(r"[0-9][0-9]*\.\d{1,3}(_\d{3})+[kMGTPmunpf]?", TokenKind::NumberFloat),
                token(
                    r"[0-9][0-9]*\.[0-9]+([eE][+-]?[0-9]+)?[kMGTPmunpf]?",
                    TokenKind::NumberFloat,
                ),
                token(r"#([0-9a-fA-F]{4})(_[0-9a-fA-F]{4})+", TokenKind::NumberHex),
                token(r"#[0-9a-fA-F]+", TokenKind::NumberHex),
                token(r"\$([01]{4})(_[01]{4})+", TokenKind::NumberBin),
                token(r"\$[01]+", TokenKind::NumberBin),
                token(r"\d{1,3}(_\d{3})+[kMGTP]?", TokenKind::NumberInteger),
                token(r"[0-9]+[kMGTP]?", TokenKind::NumberInteger),
                token(r"\n", TokenKind::Text),
            ],
        )
        .state("class", [token(r"[A-Za-z_]\w*", TokenKind::NameClass).pop()])
        .state("import", [token(r"[a-z][\w.]*", TokenKind::NameNamespace).pop()])
        .state(
            "comment",
            [
                token(r"[^*/]", TokenKind::CommentMultiline),
                token(r"/\*", TokenKind::CommentMultiline).push_current(),
                token(r"\*/", TokenKind::CommentMultiline).pop(),
                token(r"[*/]", TokenKind::CommentMultiline),
            ],
        )
}

pub fn table() -> Result<Arc<RuleTable>, BuildError> {
    static TABLE: OnceLock<Result<Arc<RuleTable>, BuildError>> = OnceLock::new();
    TABLE
        .get_or_init(|| definition().build().map(Arc::new))
        .clone()
}

pub fn lexer() -> Result<Lexer, BuildError> {
    Ok(Lexer::new(NAME, table()?).with_aliases(ALIASES))
}
