//! Hierarchical token classification.
//!
//! Every `TokenKind` has exactly one parent, up to the root [`TokenKind::Token`].
//! Renderers match coarsely (`kind.is_a(TokenKind::Comment)`) or finely
//! (`kind == TokenKind::CommentSingle`). The dotted [`path`](TokenKind::path)
//! is the stable external name (`"Comment.Single"`).
//!
//! `String` and `Number` sit under `Literal` in the hierarchy but their paths
//! omit the `Literal.` segment, which is how tables and themes spell them.

use std::fmt;
use std::str::FromStr;

/// Error returned when parsing a dotted path that names no kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown token kind `{0}`")]
pub struct UnknownTokenKind(pub String);

/// Declares the taxonomy in one place: variant, dotted path, parent.
///
/// Generates the enum, [`TokenKind::ALL`], [`TokenKind::path`] and the raw
/// parent table so the three can never drift apart.
macro_rules! define_token_kinds {
    ($( $(#[$doc:meta])* $variant:ident => $path:literal, $parent:ident; )*) => {
        /// Classification tag attached to every emitted token.
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum TokenKind {
            $( $(#[$doc])* $variant, )*
        }

        impl TokenKind {
            /// Every kind, in declaration order (parents before children).
            pub const ALL: &'static [TokenKind] = &[ $( TokenKind::$variant, )* ];

            /// Dotted external name, e.g. `"Name.Function.Magic"`.
            pub const fn path(self) -> &'static str {
                match self {
                    $( TokenKind::$variant => $path, )*
                }
            }

            /// Parent table entry; the root maps to itself.
            const fn raw_parent(self) -> TokenKind {
                match self {
                    $( TokenKind::$variant => TokenKind::$parent, )*
                }
            }
        }
    };
}

define_token_kinds! {
    /// Root of the taxonomy.
    Token => "Token", Token;
    /// Plain text with no further classification.
    Text => "Text", Token;
    Whitespace => "Text.Whitespace", Text;
    Escape => "Escape", Token;
    /// Input no rule recognized; the default fallback kind.
    Error => "Error", Token;
    Other => "Other", Token;

    Keyword => "Keyword", Token;
    KeywordConstant => "Keyword.Constant", Keyword;
    KeywordDeclaration => "Keyword.Declaration", Keyword;
    KeywordNamespace => "Keyword.Namespace", Keyword;
    KeywordPseudo => "Keyword.Pseudo", Keyword;
    KeywordReserved => "Keyword.Reserved", Keyword;
    KeywordType => "Keyword.Type", Keyword;

    Name => "Name", Token;
    NameAttribute => "Name.Attribute", Name;
    NameBuiltin => "Name.Builtin", Name;
    NameBuiltinPseudo => "Name.Builtin.Pseudo", NameBuiltin;
    NameClass => "Name.Class", Name;
    NameConstant => "Name.Constant", Name;
    NameDecorator => "Name.Decorator", Name;
    NameEntity => "Name.Entity", Name;
    NameException => "Name.Exception", Name;
    NameFunction => "Name.Function", Name;
    NameFunctionMagic => "Name.Function.Magic", NameFunction;
    NameProperty => "Name.Property", Name;
    NameLabel => "Name.Label", Name;
    NameNamespace => "Name.Namespace", Name;
    NameOther => "Name.Other", Name;
    NameTag => "Name.Tag", Name;
    NameVariable => "Name.Variable", Name;
    NameVariableClass => "Name.Variable.Class", NameVariable;
    NameVariableGlobal => "Name.Variable.Global", NameVariable;
    NameVariableInstance => "Name.Variable.Instance", NameVariable;
    NameVariableMagic => "Name.Variable.Magic", NameVariable;

    Literal => "Literal", Token;
    LiteralDate => "Literal.Date", Literal;

    String => "String", Literal;
    StringAffix => "String.Affix", String;
    StringBacktick => "String.Backtick", String;
    StringChar => "String.Char", String;
    StringDelimiter => "String.Delimiter", String;
    StringDoc => "String.Doc", String;
    StringDouble => "String.Double", String;
    StringEscape => "String.Escape", String;
    StringHeredoc => "String.Heredoc", String;
    StringInterpol => "String.Interpol", String;
    StringOther => "String.Other", String;
    StringRegex => "String.Regex", String;
    StringSingle => "String.Single", String;
    StringSymbol => "String.Symbol", String;

    Number => "Number", Literal;
    NumberBin => "Number.Bin", Number;
    NumberFloat => "Number.Float", Number;
    NumberHex => "Number.Hex", Number;
    NumberInteger => "Number.Integer", Number;
    NumberIntegerLong => "Number.Integer.Long", NumberInteger;
    NumberOct => "Number.Oct", Number;

    Operator => "Operator", Token;
    OperatorWord => "Operator.Word", Operator;

    Punctuation => "Punctuation", Token;
    PunctuationMarker => "Punctuation.Marker", Punctuation;

    Comment => "Comment", Token;
    CommentHashbang => "Comment.Hashbang", Comment;
    CommentMultiline => "Comment.Multiline", Comment;
    CommentPreproc => "Comment.Preproc", Comment;
    CommentPreprocFile => "Comment.PreprocFile", Comment;
    CommentSingle => "Comment.Single", Comment;
    CommentSpecial => "Comment.Special", Comment;

    Generic => "Generic", Token;
    GenericDeleted => "Generic.Deleted", Generic;
    GenericEmph => "Generic.Emph", Generic;
    GenericError => "Generic.Error", Generic;
    GenericHeading => "Generic.Heading", Generic;
    GenericInserted => "Generic.Inserted", Generic;
    GenericOutput => "Generic.Output", Generic;
    GenericPrompt => "Generic.Prompt", Generic;
    GenericStrong => "Generic.Strong", Generic;
    GenericSubheading => "Generic.Subheading", Generic;
    GenericTraceback => "Generic.Traceback", Generic;
}

impl TokenKind {
    /// Direct parent, or `None` for the root.
    #[inline]
    pub const fn parent(self) -> Option<TokenKind> {
        match self {
            TokenKind::Token => None,
            other => Some(other.raw_parent()),
        }
    }

    /// This kind followed by each ancestor up to the root.
    pub fn ancestors(self) -> impl Iterator<Item = TokenKind> {
        std::iter::successors(Some(self), |kind| kind.parent())
    }

    /// Whether `self` equals `ancestor` or descends from it.
    pub fn is_a(self, ancestor: TokenKind) -> bool {
        self.ancestors().any(|kind| kind == ancestor)
    }

    /// Number of edges between this kind and the root.
    pub fn depth(self) -> usize {
        self.ancestors().count() - 1
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for TokenKind {
    type Err = UnknownTokenKind;

    /// Parse a dotted path.
    ///
    /// Accepts the short form (`"String.Escape"`) as well as fully qualified
    /// spellings (`"Token.Literal.String.Escape"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed == "Token" {
            return Ok(TokenKind::Token);
        }
        let mut path = trimmed.strip_prefix("Token.").unwrap_or(trimmed);
        if let Some(rest) = path.strip_prefix("Literal.") {
            if rest.starts_with("String") || rest.starts_with("Number") {
                path = rest;
            }
        }
        TokenKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.path() == path)
            .ok_or_else(|| UnknownTokenKind(s.to_owned()))
    }
}

#[cfg(test)]
mod tests;
