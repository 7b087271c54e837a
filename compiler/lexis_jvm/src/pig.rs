//! Pig Latin. Keywords match in any case.

use std::sync::{Arc, OnceLock};

use lexis_ir::TokenKind;
use lexis_lexer::Lexer;
use lexis_table::{groups, include, token, BuildError, RegexFlags, RuleTable, TableDef};

pub const NAME: &str = "Pig";
pub const ALIASES: &[&str] = &["pig"];

pub fn definition() -> TableDef {
    TableDef::new("pig")
        .flags(RegexFlags::MULTI_LINE | RegexFlags::CASE_INSENSITIVE)
        .reset_on_newline(true)
        .state(
            "root",
            [
                token(r"\s+", TokenKind::Text),
                token(r"--.*", TokenKind::Comment),
                token(r"/\*[\w\W]*?\*/", TokenKind::CommentMultiline),
                token(r"\\\n", TokenKind::Text),
                token(r"\\", TokenKind::Text),
                token(
                    r"'(?:\\[ntbrf\\']|\\u[0-9a-f]{4}|[^'\\\n\r])*'",
                    TokenKind::String,
                ),
                include("keywords"),
                include("types"),
                include("builtins"),
                include("punct"),
                include("operators"),
                token(r"[0-9]*\.[0-9]+(e[0-9]+)?[fd]?", TokenKind::NumberFloat),
                token(r"0x[0-9a-f]+", TokenKind::NumberHex),
                token(r"[0-9]+L?", TokenKind::NumberInteger),
                token(r"\n", TokenKind::Text),
                groups(
                    r"([a-z_]\w*)(\s*)(\()",
                    [
                        TokenKind::NameFunction.into(),
                        TokenKind::Text.into(),
                        TokenKind::Punctuation.into(),
                    ],
                ),
                token(r"[()#:]", TokenKind::Text),
                token(r#"[^(:#'")\s]+"#, TokenKind::Text),
                token(r"\S+\s+", TokenKind::Text),
            ],
        )
        .state(
            "keywords",
            [token(
                concat!(
                    r"(assert|and|any|all|arrange|as|asc|bag|by|cache|CASE|cat|cd|cp|",
                    r"%declare|%default|define|dense|desc|describe|distinct|du|dump|",
                    r"eval|exex|explain|filter|flatten|foreach|full|generate|group|",
                    r"help|if|illustrate|import|inner|input|into|is|join|kill|left|",
                    r"limit|load|ls|map|matches|mkdir|mv|not|null|onschema|or|order|",
                    r"outer|output|parallel|pig|pwd|quit|register|returns|right|rm|",
                    r"rmf|rollup|run|sample|set|ship|split|stderr|stdin|stdout|store|",
                    r"stream|through|union|using|void)\b",
                ),
                TokenKind::Keyword,
            )],
        )
        .state(
            "builtins",
            [token(
                concat!(
                    r"(AVG|BinStorage|cogroup|CONCAT|copyFromLocal|copyToLocal|COUNT|",
                    r"cross|DIFF|MAX|MIN|PigDump|PigStorage|SIZE|SUM|TextLoader|",
                    r"TOKENIZE)\b",
                ),
                TokenKind::NameBuiltin,
            )],
        )
        .state(
            "types",
            [token(
                concat!(
                    r"(bytearray|BIGINTEGER|BIGDECIMAL|chararray|datetime|double|float|",
                    r"int|long|tuple)\b",
                ),
                TokenKind::KeywordType,
            )],
        )
        .state("punct", [token(r"[;(){}\[\]]", TokenKind::Punctuation)])
        .state(
            "operators",
            [
                token(r"[#=,./%+\-?]", TokenKind::Operator),
                token(r"(eq|gt|lt|gte|lte|neq|matches)\b", TokenKind::Operator),
                token(r"(==|<=|<|>=|>|!=)", TokenKind::Operator),
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
