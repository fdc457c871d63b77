//! Raw scanner producing `(tag, len)` tokens.

use crate::{Cursor, RawTag, RawToken};

/// Scanner over pattern text.
///
/// Call [`next_token`](Self::next_token) until it returns [`RawTag::Eof`];
/// further calls keep returning `Eof`.
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> RawScanner<'a> {
    pub fn new(source: &'a str) -> Self {
        RawScanner {
            cursor: Cursor::new(source),
        }
    }

    /// Scan the next token.
    pub fn next_token(&mut self) -> RawToken {
        let start = self.cursor.pos();
        let tag = self.scan();
        let len = self.cursor.pos() - start;
        RawToken {
            tag,
            len: u32::try_from(len).unwrap_or(u32::MAX),
        }
    }

    fn scan(&mut self) -> RawTag {
        let c = &mut self.cursor;
        if c.is_eof() {
            return RawTag::Eof;
        }
        match c.current() {
            b'(' => single(c, RawTag::LParen),
            b')' => single(c, RawTag::RParen),
            b'[' => single(c, RawTag::LBracket),
            b']' => single(c, RawTag::RBracket),
            b',' => single(c, RawTag::Comma),
            b'\\' => single(c, RawTag::PathSep),
            b':' => {
                if c.peek() == b':' {
                    c.advance_n(2);
                    RawTag::PathSep
                } else {
                    single(c, RawTag::Colon)
                }
            }
            b'"' | b'\'' => {
                let quote = c.current();
                c.advance();
                if c.skip_string_body(quote) {
                    RawTag::Str
                } else {
                    RawTag::UnterminatedStr
                }
            }
            b'-' if c.peek().is_ascii_digit() => {
                c.advance();
                scan_number(c)
            }
            b'0'..=b'9' => scan_number(c),
            b'_' if !is_ident_continue(c.peek()) => single(c, RawTag::Underscore),
            b if is_ident_start(b) => {
                c.eat_while(is_ident_continue);
                RawTag::Ident
            }
            b if b.is_ascii_whitespace() => {
                c.eat_while(|b| b.is_ascii_whitespace());
                RawTag::Whitespace
            }
            _ => {
                c.advance_char();
                RawTag::Unknown
            }
        }
    }
}

#[inline]
fn single(c: &mut Cursor<'_>, tag: RawTag) -> RawTag {
    c.advance();
    tag
}

/// Digits, then an optional `.digits` fraction. A `.` not followed by a
/// digit is left for the next token.
fn scan_number(c: &mut Cursor<'_>) -> RawTag {
    c.eat_while(|b| b.is_ascii_digit());
    if c.current() == b'.' && c.peek().is_ascii_digit() {
        c.advance();
        c.eat_while(|b| b.is_ascii_digit());
        RawTag::Float
    } else {
        RawTag::Int
    }
}

#[inline]
fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

#[inline]
fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Tokenize a whole pattern string, including the trailing `Eof`.
pub fn tokenize(source: &str) -> Vec<RawToken> {
    let mut scanner = RawScanner::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = scanner.next_token();
        tokens.push(token);
        if token.tag == RawTag::Eof {
            return tokens;
        }
    }
}
