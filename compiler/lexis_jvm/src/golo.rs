//! Golo. Each string kind is lexed in a combined state that tries escapes
//! first.

use std::sync::{Arc, OnceLock};

use lexis_ir::TokenKind;
use lexis_lexer::Lexer;
use lexis_table::{groups, include, token, BuildError, RegexFlags, RuleTable, TableDef};

pub const NAME: &str = "Golo";
pub const ALIASES: &[&str] = &["golo"];

pub fn definition() -> TableDef {
    TableDef::new("golo")
        .flags(RegexFlags::MULTI_LINE)
        .reset_on_newline(true)
        .state(
            "root",
            [
                token(r"[^\S\n]+", TokenKind::Text),
                token(r"#.*$", TokenKind::Comment),
                token(
                    r"(\^|\.\.\.|:|\?:|->|==|!=|=|\+|\*|%|/|<=|<|>=|>|=|\.)",
                    TokenKind::Operator,
                ),
                // Ahead of the lone minus so `----` opens a doc block.
                token(r"----((.|\n)*?)----", TokenKind::StringDoc),
                token("-", TokenKind::Operator),
                token(
                    r"(is|isnt|and|or|not|oftype|in|orIfNull)\b",
                    TokenKind::OperatorWord,
                ),
                token(r"[\]{}|(),\[]", TokenKind::Punctuation),
                groups(
                    r"(module|import)(\s+)",
                    [TokenKind::KeywordNamespace.into(), TokenKind::Text.into()],
                )
                .push("modname"),
                groups(
                    r"\b([a-zA-Z_][\w$.]*)(::)",
                    [TokenKind::NameNamespace.into(), TokenKind::Punctuation.into()],
                ),
                token(
                    r"\b([a-zA-Z_][\w$]*(?:\.[a-zA-Z_][\w$]*)+)\b",
                    TokenKind::NameNamespace,
                ),
                groups(
                    r"(let|var)(\s+)",
                    [TokenKind::KeywordDeclaration.into(), TokenKind::Text.into()],
                )
                .push("varname"),
                groups(
                    r"(struct)(\s+)",
                    [TokenKind::KeywordDeclaration.into(), TokenKind::Text.into()],
                )
                .push("structname"),
                groups(
                    r"(function)(\s+)",
                    [TokenKind::KeywordDeclaration.into(), TokenKind::Text.into()],
                )
                .push("funcname"),
                token(r"(null|true|false)\b", TokenKind::KeywordConstant),
                token(
                    concat!(
                        r"(augment|pimp|if|else|case|match|return|when|then|otherwise",
                        r"|while|for|foreach|try|catch|finally|throw|local|continue|break)\b",
                    ),
                    TokenKind::Keyword,
                ),
                groups(
                    r"(map|array|list|set|vector|tuple)(\[)",
                    [TokenKind::NameBuiltin.into(), TokenKind::Punctuation.into()],
                ),
                token(
                    r"(print|println|readln|raise|fun|asInterfaceInstance)\b",
                    TokenKind::NameBuiltin,
                ),
                groups(
                    r"(`?[a-zA-Z_][\w$]*)(\()",
                    [TokenKind::NameFunction.into(), TokenKind::Punctuation.into()],
                ),
                token(r"-?[\d_]*\.[\d_]*([eE][+-]?\d[\d_]*)?F?", TokenKind::NumberFloat),
                token(r"0[0-7]+j?", TokenKind::NumberOct),
                token(r"0[xX][a-fA-F0-9]+", TokenKind::NumberHex),
                token(r"-?\d[\d_]*L", TokenKind::NumberIntegerLong),
                token(r"-?\d[\d_]*", TokenKind::NumberInteger),
                token(r"`?[a-zA-Z_][\w$]*", TokenKind::Name),
                token(r"@[a-zA-Z_][\w$.]*", TokenKind::NameDecorator),
                token("\"\"\"", TokenKind::String)
                    .push_combined(&["stringescape", "triplestring"]),
                token("\"", TokenKind::String).push_combined(&["stringescape", "doublestring"]),
                token("'", TokenKind::String).push_combined(&["stringescape", "singlestring"]),
            ],
        )
        .state(
            "funcname",
            [token(r"`?[a-zA-Z_][\w$]*", TokenKind::NameFunction).pop()],
        )
        .state(
            "modname",
            [token(r"[a-zA-Z_][\w$.]*\*?", TokenKind::NameNamespace).pop()],
        )
        .state("structname", [token(r"`?[\w.]+\*?", TokenKind::NameClass).pop()])
        .state(
            "varname",
            [token(r"`?[a-zA-Z_][\w$]*", TokenKind::NameVariable).pop()],
        )
        .state(
            "string",
            [
                token(r#"[^\\'"\n]+"#, TokenKind::String),
                token(r#"['"\\]"#, TokenKind::String),
            ],
        )
        .state(
            "stringescape",
            [token(
                concat!(
                    r#"\\([\\abfnrtv"']|\n|N\{.*?\}|u[a-fA-F0-9]{4}|"#,
                    r"U[a-fA-F0-9]{8}|x[a-fA-F0-9]{2}|[0-7]{1,3})",
                ),
                TokenKind::StringEscape,
            )],
        )
        .state(
            "triplestring",
            [
                token("\"\"\"", TokenKind::String).pop(),
                include("string"),
                token(r"\n", TokenKind::String),
            ],
        )
        .state(
            "doublestring",
            [token("\"", TokenKind::StringDouble).pop(), include("string")],
        )
        .state(
            "singlestring",
            [token("'", TokenKind::String).pop(), include("string")],
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
