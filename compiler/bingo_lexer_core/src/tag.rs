//! Raw token tags.

/// Discriminant for a raw token.
///
/// Tags are lexical only. Whether an identifier is a binder or a type name
/// is decided by the parser.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RawTag {
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `:` (cons separator)
    Colon,
    /// `::` or `\` (type path separator)
    PathSep,
    /// `,`
    Comma,
    /// A lone `_`.
    Underscore,
    /// Identifier: `[A-Za-z_][A-Za-z0-9_]*`, excluding a lone `_`.
    Ident,
    /// Integer numeral, optionally negative: `-?[0-9]+`.
    Int,
    /// Decimal numeral, optionally negative: `-?[0-9]+\.[0-9]+`.
    Float,
    /// Quoted string (`"..."` or `'...'`), including both quotes.
    Str,
    /// Quoted string missing its closing quote; runs to end of input.
    UnterminatedStr,
    /// Run of ASCII whitespace.
    Whitespace,
    /// A single unrecognized character.
    Unknown,
    /// End of input.
    Eof,
}

impl RawTag {
    /// Human-readable name, used in parser diagnostics.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::LParen => "`(`",
            Self::RParen => "`)`",
            Self::LBracket => "`[`",
            Self::RBracket => "`]`",
            Self::Colon => "`:`",
            Self::PathSep => "path separator",
            Self::Comma => "`,`",
            Self::Underscore => "`_`",
            Self::Ident => "identifier",
            Self::Int => "integer",
            Self::Float => "float",
            Self::Str => "string",
            Self::UnterminatedStr => "unterminated string",
            Self::Whitespace => "whitespace",
            Self::Unknown => "unknown character",
            Self::Eof => "end of pattern",
        }
    }

    /// Whether this tag starts a literal (`Str`, `Int` or `Float`).
    #[inline]
    pub fn is_literal(self) -> bool {
        matches!(self, Self::Str | Self::Int | Self::Float)
    }
}

/// A raw token: tag plus byte length.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RawToken {
    pub tag: RawTag,
    pub len: u32,
}
