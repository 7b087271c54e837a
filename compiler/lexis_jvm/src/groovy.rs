//! Groovy.

use std::sync::{Arc, OnceLock};

use lexis_ir::TokenKind;
use lexis_lexer::Lexer;
use lexis_table::{
    default_rule, groups, token, BuildError, DelegateDef, RegexFlags, RuleTable, TableDef,
};

pub const NAME: &str = "Groovy";
pub const ALIASES: &[&str] = &["groovy"];

const METHOD_NAME: &str = concat!(
    r"^(\s*(?:[a-zA-Z_][\w.\[\]]*\s+)+?)",
    r#"([a-zA-Z_]\w*|"(?:\\\\|\\[^\\]|[^"\\])*"|'(?:\\\\|\\[^\\]|[^'\\])*')"#,
    r"(\s*)(\()",
);

pub fn definition() -> TableDef {
    TableDef::new("groovy")
        .flags(RegexFlags::MULTI_LINE | RegexFlags::DOT_ALL)
        .reset_on_newline(true)
        .state(
            "root",
            [
                // A script may start with a shebang line.
                token(r"#!(.*?)$", TokenKind::CommentPreproc).push("base"),
                default_rule().push("base"),
            ],
        )
        .state(
            "base",
            [
                token(r"[^\S\n]+", TokenKind::Text),
                token(r"//.*?\n", TokenKind::CommentSingle),
                token(r"/\*.*?\*/", TokenKind::CommentMultiline),
                token(
                    concat!(
                        r"(assert|break|case|catch|continue|default|do|else|finally|for|",
                        r"if|goto|instanceof|new|return|switch|this|throw|try|while|in|as)\b",
                    ),
                    TokenKind::Keyword,
                ),
                groups(
                    METHOD_NAME,
                    [
                        DelegateDef::this().into(),
                        TokenKind::NameFunction.into(),
                        TokenKind::Text.into(),
                        TokenKind::Operator.into(),
                    ],
                ),
                token(r"@[a-zA-Z_][\w.]*", TokenKind::NameDecorator),
                token(
                    concat!(
                        r"(abstract|const|enum|extends|final|implements|native|private|",
                        r"protected|public|static|strictfp|super|synchronized|throws|",
                        r"transient|volatile)\b",
                    ),
                    TokenKind::KeywordDeclaration,
                ),
                token(
                    r"(def|boolean|byte|char|double|float|int|long|short|void)\b",
                    TokenKind::KeywordType,
                ),
                groups(
                    r"(package)(\s+)",
                    [TokenKind::KeywordNamespace.into(), TokenKind::Text.into()],
                ),
                token(r"(true|false|null)\b", TokenKind::KeywordConstant),
                groups(
                    r"(class|interface)(\s+)",
                    [TokenKind::KeywordDeclaration.into(), TokenKind::Text.into()],
                )
                .push("class"),
                groups(
                    r"(import)(\s+)",
                    [TokenKind::KeywordNamespace.into(), TokenKind::Text.into()],
                )
                .push("import"),
                token("\"\"\".*?\"\"\"", TokenKind::StringDouble),
                token(r"'''.*?'''", TokenKind::StringSingle),
                token(r#""(\\\\|\\[^\\]|[^"\\])*""#, TokenKind::StringDouble),
                token(r"'(\\\\|\\[^\\]|[^'\\])*'", TokenKind::StringSingle),
                // Dollar-slashy string; ends at the first `/$`.
                token(r"\$/.*?/\$", TokenKind::String),
                token(r"/(\\\\|\\[^\\]|[^/\\])*/", TokenKind::String),
                token(r"'\\.'|'[^\\]'|'\\u[0-9a-fA-F]{4}'", TokenKind::StringChar),
                groups(
                    r"(\.)([a-zA-Z_]\w*)",
                    [TokenKind::Operator.into(), TokenKind::NameAttribute.into()],
                ),
                token(r"[a-zA-Z_]\w*:", TokenKind::NameLabel),
                token(r"[a-zA-Z_$]\w*", TokenKind::Name),
                token(r"[~^*!%&\[\](){}<>|+=:;,./?-]", TokenKind::Operator),
                token(r"[0-9][0-9]*\.[0-9]+([eE][0-9]+)?[fd]?", TokenKind::NumberFloat),
                token(r"0x[0-9a-fA-F]+", TokenKind::NumberHex),
                token(r"[0-9]+L?", TokenKind::NumberInteger),
                token(r"\n", TokenKind::Text),
            ],
        )
        .state("class", [token(r"[a-zA-Z_]\w*", TokenKind::NameClass).pop()])
        .state("import", [token(r"[\w.]+\*?", TokenKind::NameNamespace).pop()])
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

