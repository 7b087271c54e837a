//! Kotlin.

use std::sync::{Arc, OnceLock};

use lexis_ir::TokenKind;
use lexis_lexer::Lexer;
use lexis_table::{
    default_rule, groups, include, token, words_token, BuildError, DelegateDef, GroupDef,
    RegexFlags, RuleTable, TableDef,
};

pub const NAME: &str = "Kotlin";
pub const ALIASES: &[&str] = &["kotlin"];

const NAME_START: &str = r"_\p{Lu}\p{Ll}\p{Lt}\p{Lm}\p{Nl}";
const NAME_PART: &str = r"\p{Lu}\p{Ll}\p{Lt}\p{Lm}\p{Nl}\p{Nd}\p{Pc}\p{Cf}\p{Mn}\p{Mc}";

const MODIFIERS: &str = concat!(
    "actual|abstract|annotation|companion|const|crossinline|data|enum|expect|external|",
    "final|infix|inline|inner|internal|lateinit|noinline|open|operator|override|private|",
    "protected|public|sealed|suspend|tailrec",
);

const NULLABLE_TYPES: &[&str] = &[
    "Boolean?", "Byte?", "Char?", "Double?", "Float?", "Int?", "Long?", "Short?", "String?",
    "Any?", "Unit?",
];

const TYPES: &[&str] = &[
    "Boolean", "Byte", "Char", "Double", "Float", "Int", "Long", "Short", "String", "Any",
    "Unit",
];

fn modifiers_delegate() -> GroupDef {
    DelegateDef::this().state("modifiers").into()
}

pub fn definition() -> TableDef {
    let name = format!("@?[{NAME_START}][{NAME_PART}]*");
    // Backquoted names may contain spaces and most punctuation.
    let space_name = format!(r"@?[{NAME_START}][{NAME_PART}\p{{Zs}}'~!%^&*()+=|\[\]:;,.<>/?-]*");

    TableDef::new("kotlin")
        .flags(RegexFlags::MULTI_LINE | RegexFlags::DOT_ALL)
        .reset_on_newline(true)
        .fragment("kt_id", &format!("{name}|`{space_name}`"))
        .fragment("modifiers", MODIFIERS)
        .state(
            "root",
            [
                token(r"[^\S\n]+", TokenKind::Text),
                token(r"\s+", TokenKind::Text),
                token(r"\\\n", TokenKind::Text),
                token(r"\n", TokenKind::Text),
                token(r"//.*?\n", TokenKind::CommentSingle),
                token(r"^#!/.+?\n", TokenKind::CommentSingle),
                token(r"/[*].*?[*]/", TokenKind::CommentMultiline),
                token(r"as\?", TokenKind::Keyword),
                token(
                    concat!(
                        r"(as|break|by|catch|constructor|continue|do|dynamic|else|finally|",
                        r"get|for|if|init|[!]*in|[!]*is|out|reified|return|set|super|this|",
                        r"throw|try|typealias|typeof|vararg|when|where|while)\b",
                    ),
                    TokenKind::Keyword,
                ),
                token(r"it\b", TokenKind::NameBuiltin),
                words_token(NULLABLE_TYPES, "", "", TokenKind::KeywordType),
                words_token(TYPES, "", r"\b", TokenKind::KeywordType),
                token(r"(true|false|null)\b", TokenKind::KeywordConstant),
                groups(
                    r"(package|import)(\s+)(\S+)",
                    [
                        TokenKind::Keyword.into(),
                        TokenKind::Text.into(),
                        TokenKind::NameNamespace.into(),
                    ],
                ),
                groups(
                    r"(\?\.)((?:[^\W\d]|\$)[\w$]*)",
                    [TokenKind::Operator.into(), TokenKind::NameAttribute.into()],
                ),
                groups(
                    r"(\.)((?:[^\W\d]|\$)[\w$]*)",
                    [TokenKind::Punctuation.into(), TokenKind::NameAttribute.into()],
                ),
                token(r"@[^\W\d][\w.]*", TokenKind::NameDecorator),
                // Labels: `loop@`.
                token(r"[^\W\d][\w.]+@", TokenKind::NameDecorator),
                groups(
                    r"(object)(\s+)(:)(\s+)",
                    [
                        TokenKind::Keyword.into(),
                        TokenKind::Text.into(),
                        TokenKind::Punctuation.into(),
                        TokenKind::Text.into(),
                    ],
                )
                .push("class"),
                groups(
                    r"((?:(?:{:modifiers}|fun)\s+)*)(class|interface|object)(\s+)",
                    [
                        modifiers_delegate(),
                        TokenKind::KeywordDeclaration.into(),
                        TokenKind::Text.into(),
                    ],
                )
                .push("class"),
                groups(
                    r"(var|val)(\s+)(\()",
                    [
                        TokenKind::KeywordDeclaration.into(),
                        TokenKind::Text.into(),
                        TokenKind::Punctuation.into(),
                    ],
                )
                .push("destructuring_assignment"),
                groups(
                    r"((?:(?:{:modifiers})\s+)*)(var|val)(\s+)",
                    [
                        modifiers_delegate(),
                        TokenKind::KeywordDeclaration.into(),
                        TokenKind::Text.into(),
                    ],
                )
                .push("variable"),
                groups(
                    r"((?:(?:{:modifiers})\s+)*)(fun)(\s+)",
                    [
                        modifiers_delegate(),
                        TokenKind::KeywordDeclaration.into(),
                        TokenKind::Text.into(),
                    ],
                )
                .push("function"),
                token(r"::|!!|\?[:.]", TokenKind::Operator),
                token(r"[~^*!%&\[\]<>|+=/?-]", TokenKind::Operator),
                token(r"[{}();:.,]", TokenKind::Punctuation),
                token("\"\"\"", TokenKind::String).push("multiline_string"),
                token("\"", TokenKind::String).push("string"),
                token(r"'\\.'|'[^\\]'", TokenKind::StringChar),
                token(
                    r"[0-9](\.[0-9]*)?([eE][+-][0-9]+)?[flFL]?|0[xX][0-9a-fA-F]+[Ll]?",
                    TokenKind::Number,
                ),
                // Also takes a nullable marker: `Foo?`.
                token(r"{:kt_id}(?:\?[^.])?", TokenKind::Name),
            ],
        )
        .state("class", [token("{:kt_id}", TokenKind::NameClass).pop()])
        .state("variable", [token("{:kt_id}", TokenKind::NameVariable).pop()])
        .state(
            "destructuring_assignment",
            [
                token(",", TokenKind::Punctuation),
                token(r"\s+", TokenKind::Text),
                token("{:kt_id}", TokenKind::NameVariable),
                groups(
                    r"(:)(\s+)({:kt_id})",
                    [
                        TokenKind::Punctuation.into(),
                        TokenKind::Text.into(),
                        TokenKind::Name.into(),
                    ],
                ),
                token("<", TokenKind::Operator).push("generic"),
                token(r"\)", TokenKind::Punctuation).pop(),
            ],
        )
        .state(
            "function",
            [
                token("<", TokenKind::Operator).push("generic"),
                groups(
                    r"({:kt_id})(\.)({:kt_id})",
                    [
                        TokenKind::Name.into(),
                        TokenKind::Punctuation.into(),
                        TokenKind::NameFunction.into(),
                    ],
                )
                .pop(),
                token("{:kt_id}", TokenKind::NameFunction).pop(),
            ],
        )
        .state(
            "generic",
            [
                groups(r"(>)(\s*)", [TokenKind::Operator.into(), TokenKind::Text.into()]).pop(),
                token(":", TokenKind::Punctuation),
                token(r"(reified|out|in)\b", TokenKind::Keyword),
                token(",", TokenKind::Punctuation),
                token(r"\s+", TokenKind::Text),
                token("{:kt_id}", TokenKind::Name),
            ],
        )
        .state(
            "modifiers",
            [
                token(r"\w+", TokenKind::KeywordDeclaration),
                token(r"\s+", TokenKind::Text),
                default_rule().pop(),
            ],
        )
        .state(
            "string",
            [token("\"", TokenKind::String).pop(), include("string_common")],
        )
        .state(
            "multiline_string",
            [
                token("\"\"\"", TokenKind::String).pop(),
                token("\"", TokenKind::String),
                include("string_common"),
            ],
        )
        .state(
            "string_common",
            [
                token(r"\\\\", TokenKind::String),
                token(r#"\\""#, TokenKind::String),
                token(r"\\", TokenKind::String),
                token(r"\$\{", TokenKind::StringInterpol).push("interpolation"),
                groups(r"(\$)(\w+)", [TokenKind::StringInterpol.into(), TokenKind::Name.into()]),
                token(r#"[^\\"$]+"#, TokenKind::String),
            ],
        )
        .state(
            "interpolation",
            [
                token("\"", TokenKind::String),
                token(r"\$\{", TokenKind::StringInterpol).push("interpolation"),
                token(r"\{", TokenKind::Punctuation).push("scope"),
                token(r"\}", TokenKind::StringInterpol).pop(),
                include("root"),
            ],
        )
        .state(
            "scope",
            [
                token(r"\{", TokenKind::Punctuation).push("scope"),
                token(r"\}", TokenKind::Punctuation).pop(),
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
