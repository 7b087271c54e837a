//! Java, and AspectJ on top of it.

use std::sync::{Arc, OnceLock};

use lexis_ir::TokenKind;
use lexis_lexer::{Lexer, RewriteRule, TokenRewrite};
use lexis_table::{
    groups, token, words_token, BuildError, DelegateDef, RegexFlags, RuleTable, TableDef,
};

pub const NAME: &str = "Java";
pub const ALIASES: &[&str] = &["java"];

pub const ASPECTJ_NAME: &str = "AspectJ";
pub const ASPECTJ_ALIASES: &[&str] = &["aspectj"];

const KEYWORDS: &[&str] = &[
    "assert", "break", "case", "catch", "continue", "default", "do", "else", "finally", "for",
    "if", "goto", "instanceof", "new", "return", "switch", "this", "throw", "try", "while",
];

const DECLARATIONS: &[&str] = &[
    "abstract", "const", "enum", "extends", "final", "implements", "native", "private",
    "protected", "public", "static", "strictfp", "super", "synchronized", "throws", "transient",
    "volatile",
];

const TYPES: &[&str] = &[
    "boolean", "byte", "char", "double", "float", "int", "long", "short", "void",
];

const FLOAT: &str = concat!(
    r"([0-9][0-9_]*\.([0-9][0-9_]*)?|\.[0-9][0-9_]*)([eE][+\-]?[0-9][0-9_]*)?[fFdD]?",
    r"|[0-9][eE][+\-]?[0-9][0-9_]*[fFdD]?",
    r"|[0-9]([eE][+\-]?[0-9][0-9_]*)?[fFdD]",
    r"|0[xX]([0-9a-fA-F][0-9a-fA-F_]*\.?|([0-9a-fA-F][0-9a-fA-F_]*)?\.[0-9a-fA-F][0-9a-fA-F_]*)",
    r"[pP][+\-]?[0-9][0-9_]*[fFdD]?",
);

pub fn definition() -> TableDef {
    TableDef::new("java")
        .flags(RegexFlags::MULTI_LINE | RegexFlags::DOT_ALL)
        .reset_on_newline(true)
        .fragment("ident", r"(?:[^\W\d]|\$)[\w$]*")
        .state(
            "root",
            [
                token(r"[^\S\n]+", TokenKind::Text),
                token(r"//.*?\n", TokenKind::CommentSingle),
                token(r"/\*.*?\*/", TokenKind::CommentMultiline),
                // Ahead of method names so `throw new Xyz(` is not a signature.
                words_token(KEYWORDS, "", r"\b", TokenKind::Keyword),
                groups(
                    r"((?:(?:[^\W\d]|\$)[\w.\[\]$<>]*\s+)+?)({:ident})(\s*)(\()",
                    [
                        DelegateDef::this().into(),
                        TokenKind::NameFunction.into(),
                        TokenKind::Text.into(),
                        TokenKind::Punctuation.into(),
                    ],
                ),
                token(r"@[^\W\d][\w.]*", TokenKind::NameDecorator),
                words_token(DECLARATIONS, "", r"\b", TokenKind::KeywordDeclaration),
                words_token(TYPES, "", r"\b", TokenKind::KeywordType),
                groups(
                    r"(package)(\s+)",
                    [TokenKind::KeywordNamespace.into(), TokenKind::Text.into()],
                )
                .push("import"),
                token(r"(true|false|null)\b", TokenKind::KeywordConstant),
                groups(
                    r"(class|interface)(\s+)",
                    [TokenKind::KeywordDeclaration.into(), TokenKind::Text.into()],
                )
                .push("class"),
                groups(
                    r"(var)(\s+)",
                    [TokenKind::KeywordDeclaration.into(), TokenKind::Text.into()],
                )
                .push("var"),
                groups(
                    r"(import(?:\s+static)?)(\s+)",
                    [TokenKind::KeywordNamespace.into(), TokenKind::Text.into()],
                )
                .push("import"),
                token("\"", TokenKind::String).push("string"),
                token(r"'\\.'|'[^\\]'|'\\u[0-9a-fA-F]{4}'", TokenKind::StringChar),
                groups(
                    r"(\.)({:ident})",
                    [TokenKind::Punctuation.into(), TokenKind::NameAttribute.into()],
                ),
                token(r"^\s*{:ident}:", TokenKind::NameLabel),
                token("{:ident}", TokenKind::Name),
                token(FLOAT, TokenKind::NumberFloat),
                token(r"0[xX][0-9a-fA-F][0-9a-fA-F_]*[lL]?", TokenKind::NumberHex),
                token(r"0[bB][01][01_]*[lL]?", TokenKind::NumberBin),
                token(r"0[0-7_]+[lL]?", TokenKind::NumberOct),
                token(r"0|[1-9][0-9_]*[lL]?", TokenKind::NumberInteger),
                token(r"[~^*!%&\[\]<>|+=/?-]", TokenKind::Operator),
                token(r"[{}();:.,]", TokenKind::Punctuation),
                token(r"\n", TokenKind::Text),
            ],
        )
        .state("class", [token("{:ident}", TokenKind::NameClass).pop()])
        .state("var", [token("{:ident}", TokenKind::Name).pop()])
        .state("import", [token(r"[\w.]+\*?", TokenKind::NameNamespace).pop()])
        .state(
            "string",
            [
                token(r#"[^\\"]+"#, TokenKind::String),
                token(r"\\\\", TokenKind::String),
                token(r#"\\""#, TokenKind::String),
                token(r"\\", TokenKind::String),
                token("\"", TokenKind::String).pop(),
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

const ASPECTJ_KEYWORDS: &[&str] = &[
    "aspect", "pointcut", "privileged", "call", "execution", "initialization",
    "preinitialization", "handler", "get", "set", "staticinitialization", "target", "args",
    "within", "withincode", "cflow", "cflowbelow", "annotation", "before", "after", "around",
    "proceed", "throwing", "returning", "adviceexecution", "declare", "parents", "warning",
    "error", "soft", "precedence", "thisJoinPoint", "thisJoinPointStaticPart",
    "thisEnclosingJoinPointStaticPart", "issingleton", "perthis", "pertarget", "percflow",
    "percflowbelow", "pertypewithin", "lock", "unlock", "thisAspectInstance",
];

/// Inter-type declaration labels; lexed by Java as `Name.Label`.
const ASPECTJ_INTER_TYPE: &[&str] = &["parents:", "warning:", "error:", "soft:", "precedence:"];

const ASPECTJ_INTER_TYPE_ANNOTATIONS: &[&str] = &["@type", "@method", "@constructor", "@field"];

/// AspectJ shares Java's rules and reclassifies its own words afterwards.
pub fn aspectj_table() -> Result<Arc<RuleTable>, BuildError> {
    static TABLE: OnceLock<Result<Arc<RuleTable>, BuildError>> = OnceLock::new();
    TABLE
        .get_or_init(|| definition().derive("aspectj").build().map(Arc::new))
        .clone()
}

pub fn aspectj_rewrite() -> TokenRewrite {
    TokenRewrite::new()
        .with(RewriteRule::retag(
            TokenKind::Name,
            ASPECTJ_KEYWORDS,
            TokenKind::Keyword,
        ))
        .with(RewriteRule::split_last(
            TokenKind::NameLabel,
            ASPECTJ_INTER_TYPE,
            TokenKind::Keyword,
            TokenKind::Operator,
        ))
        .with(RewriteRule::retag(
            TokenKind::NameDecorator,
            ASPECTJ_INTER_TYPE_ANNOTATIONS,
            TokenKind::Keyword,
        ))
}

pub fn aspectj_lexer() -> Result<Lexer, BuildError> {
    Ok(Lexer::new(ASPECTJ_NAME, aspectj_table()?)
        .with_aliases(ASPECTJ_ALIASES)
        .with_rewrite(aspectj_rewrite()))
}
