//! Gosu, and Gosu templates: the same table started in template text.

use std::sync::{Arc, OnceLock};

use lexis_ir::TokenKind;
use lexis_lexer::Lexer;
use lexis_table::{
    groups, include, token, BuildError, DelegateDef, RegexFlags, RuleTable, TableDef,
};

pub const NAME: &str = "Gosu";
pub const ALIASES: &[&str] = &["gosu"];

pub const TEMPLATE_NAME: &str = "Gosu Template";
pub const TEMPLATE_ALIASES: &[&str] = &["gst"];

/// Initial state of template lexing.
pub const TEMPLATE_STATE: &str = "templateText";

pub fn definition() -> TableDef {
    TableDef::new("gosu")
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
                token(r"/\*.*?\*/", TokenKind::CommentMultiline),
                token(r"@[a-zA-Z_][\w.]*", TokenKind::NameDecorator),
                token(
                    concat!(
                        r"(in|as|typeof|statictypeof|typeis|typeas|if|else|foreach|for|",
                        r"index|while|do|continue|break|return|try|catch|finally|this|",
                        r"throw|new|switch|case|default|eval|super|outer|classpath|",
                        r"using)\b",
                    ),
                    TokenKind::Keyword,
                ),
                token(
                    concat!(
                        r"(var|delegate|construct|function|private|internal|protected|",
                        r"public|abstract|override|final|static|extends|transient|",
                        r"implements|represents|readonly)\b",
                    ),
                    TokenKind::KeywordDeclaration,
                ),
                token(r"(property\s+)(get|set)?", TokenKind::KeywordDeclaration),
                token(
                    r"(boolean|byte|char|double|float|int|long|short|void|block)\b",
                    TokenKind::KeywordType,
                ),
                groups(
                    r"(package)(\s+)",
                    [TokenKind::KeywordNamespace.into(), TokenKind::Text.into()],
                ),
                token(r"(true|false|null|NaN|Infinity)\b", TokenKind::KeywordConstant),
                groups(
                    r"(class|interface|enhancement|enum)(\s+)([a-zA-Z_]\w*)",
                    [
                        TokenKind::KeywordDeclaration.into(),
                        TokenKind::Text.into(),
                        TokenKind::NameClass.into(),
                    ],
                ),
                groups(
                    r"(uses)(\s+)([\w.]+\*?)",
                    [
                        TokenKind::KeywordNamespace.into(),
                        TokenKind::Text.into(),
                        TokenKind::NameNamespace.into(),
                    ],
                ),
                token("\"", TokenKind::String).push("string"),
                groups(
                    r"(\??[.#])([a-zA-Z_]\w*)",
                    [TokenKind::Operator.into(), TokenKind::NameAttribute.into()],
                ),
                groups(
                    r"(:)([a-zA-Z_]\w*)",
                    [TokenKind::Operator.into(), TokenKind::NameAttribute.into()],
                ),
                token(r"[a-zA-Z_$]\w*", TokenKind::Name),
                token(r"and|or|not|[\\~^*!%&\[\](){}<>|+=:;,./?-]", TokenKind::Operator),
                token(r"[0-9][0-9]*\.[0-9]+([eE][0-9]+)?[fd]?", TokenKind::NumberFloat),
                token(r"[0-9]+", TokenKind::NumberInteger),
                token(r"\n", TokenKind::Text),
            ],
        )
        .state(
            TEMPLATE_STATE,
            [
                token(r"(\\<)|(\\\$)", TokenKind::String),
                groups(
                    r"(<%@\s+)(extends|params)",
                    [TokenKind::Operator.into(), TokenKind::NameDecorator.into()],
                )
                .push("stringTemplate"),
                token(r"<%!--.*?--%>", TokenKind::CommentMultiline),
                // `<%` always wins, so `=` of `<%=` lexes as an operator.
                token(r"(<%)|(<%=)", TokenKind::Operator).push("stringTemplate"),
                token(r"\$\{", TokenKind::Operator).push("stringTemplateShorthand"),
                token(r".", TokenKind::String),
            ],
        )
        .state(
            "string",
            [token("\"", TokenKind::String).pop(), include(TEMPLATE_STATE)],
        )
        .state(
            "stringTemplate",
            [
                token("\"", TokenKind::String).push("string"),
                token("%>", TokenKind::Operator).pop(),
                include("root"),
            ],
        )
        .state(
            "stringTemplateShorthand",
            [
                token("\"", TokenKind::String).push("string"),
                token(r"\{", TokenKind::Operator).push("stringTemplateShorthand"),
                token(r"\}", TokenKind::Operator).pop(),
                include("root"),
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

/// Gosu table, started in template text.
pub fn template_lexer() -> Result<Lexer, BuildError> {
    Ok(Lexer::new(TEMPLATE_NAME, table()?)
        .with_aliases(TEMPLATE_ALIASES)
        .with_initial_stack(&[TEMPLATE_STATE]))
}
