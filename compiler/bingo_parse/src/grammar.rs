//! Pattern grammar.
//!
//! ```text
//! pattern  := "_" | cons | list | literal | type_tag
//! cons     := "(" binder (":" binder)* ":" (binder | "_") ")"
//! list     := "[" (slot ("," slot)*)? "]"
//! slot     := literal | "_" | binder | cons
//! literal  := STRING | INT | FLOAT
//! type_tag := IDENT (PATHSEP IDENT)*
//! ```
//!
//! The leading token selects the form; the forms never overlap.

use bingo_ir::{Binder, ConsPattern, ListSlot, Literal, MatchPattern, Span, Tail};
use bingo_lexer_core::RawTag;
use rustc_hash::FxHashSet;
use tracing::debug;

use crate::cursor::{Cursor, Token};
use crate::{ParseError, ParseErrorKind, ParseOptions};

pub(crate) struct Parser<'a> {
    cursor: Cursor<'a>,
    options: &'a ParseOptions,
    /// Binder names already introduced, for duplicate detection.
    seen: FxHashSet<&'a str>,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(source: &'a str, options: &'a ParseOptions) -> Self {
        Parser {
            cursor: Cursor::new(source),
            options,
            seen: FxHashSet::default(),
        }
    }

    pub(crate) fn parse(mut self) -> Result<MatchPattern, ParseError> {
        let first = self.cursor.current();
        let pattern = match first.tag {
            RawTag::Eof => return Err(self.error(ParseErrorKind::Empty, first.span)),
            RawTag::Underscore => {
                self.cursor.advance();
                MatchPattern::Wildcard
            }
            RawTag::LParen => MatchPattern::Cons(self.cons()?),
            RawTag::LBracket => MatchPattern::List(self.list()?),
            RawTag::Str | RawTag::Int | RawTag::Float | RawTag::UnterminatedStr => {
                MatchPattern::Literal(self.literal()?)
            }
            RawTag::Ident => self.type_tag()?,
            _ => return Err(self.unexpected("a pattern")),
        };

        let rest = self.cursor.current();
        if rest.tag != RawTag::Eof {
            return Err(self.error(ParseErrorKind::TrailingInput, rest.span));
        }
        debug!(pattern = %pattern, kind = %pattern.kind(), "parsed pattern");
        Ok(pattern)
    }

    /// `(a:b:_)`, `(x:xs)`
    fn cons(&mut self) -> Result<ConsPattern, ParseError> {
        self.expect(RawTag::LParen, "`(`")?;
        let mut heads = Vec::new();
        loop {
            let segment = self.cursor.current();
            match segment.tag {
                RawTag::Ident | RawTag::Underscore => {
                    self.cursor.advance();
                }
                _ => return Err(self.unexpected("a binder or `_`")),
            }

            if self.cursor.eat(RawTag::Colon).is_some() {
                // Not the last segment: must be a head binder.
                if segment.tag == RawTag::Underscore {
                    return Err(self.error(
                        ParseErrorKind::UnexpectedToken {
                            expected: "a binder",
                            found: "`_`".to_string(),
                        },
                        segment.span,
                    ));
                }
                heads.push(self.binder(segment)?);
                continue;
            }

            let close = self.cursor.current();
            self.expect(RawTag::RParen, "`:` or `)`")?;
            if heads.is_empty() {
                return Err(self.error(
                    ParseErrorKind::MissingTail,
                    Span::new(segment.span.start, close.span.end),
                ));
            }
            let tail = if segment.tag == RawTag::Underscore {
                Tail::Wildcard
            } else {
                Tail::Binder(self.binder(segment)?)
            };
            return Ok(ConsPattern { heads, tail });
        }
    }

    /// `["foo", bar, _, (x:xs)]`
    fn list(&mut self) -> Result<Vec<ListSlot>, ParseError> {
        self.expect(RawTag::LBracket, "`[`")?;
        let mut slots = Vec::new();
        if self.cursor.eat(RawTag::RBracket).is_some() {
            return Ok(slots);
        }
        loop {
            slots.push(self.slot()?);
            if self.cursor.eat(RawTag::Comma).is_some() {
                continue;
            }
            self.expect(RawTag::RBracket, "`,` or `]`")?;
            return Ok(slots);
        }
    }

    fn slot(&mut self) -> Result<ListSlot, ParseError> {
        let token = self.cursor.current();
        match token.tag {
            RawTag::Str | RawTag::Int | RawTag::Float | RawTag::UnterminatedStr => {
                Ok(ListSlot::Literal(self.literal()?))
            }
            RawTag::Underscore => {
                self.cursor.advance();
                Ok(ListSlot::Wildcard)
            }
            RawTag::Ident => {
                self.cursor.advance();
                Ok(ListSlot::Binder(self.binder(token)?))
            }
            RawTag::LParen => Ok(ListSlot::Cons(self.cons()?)),
            RawTag::LBracket => Err(self.error(ParseErrorKind::NestedList, token.span)),
            _ => Err(self.unexpected("a literal, binder, `_` or cons pattern")),
        }
    }

    fn literal(&mut self) -> Result<Literal, ParseError> {
        let token = self.cursor.advance();
        let text = self.cursor.text(token);
        match token.tag {
            RawTag::Str => Ok(Literal::quoted(unescape(text))),
            RawTag::Int | RawTag::Float => Literal::numeral(text).ok_or_else(|| {
                self.error(
                    ParseErrorKind::InvalidNumber {
                        text: text.to_string(),
                    },
                    token.span,
                )
            }),
            RawTag::UnterminatedStr => {
                Err(self.error(ParseErrorKind::UnterminatedString, token.span))
            }
            _ => Err(self.error(
                ParseErrorKind::UnexpectedToken {
                    expected: "a literal",
                    found: format!("`{text}`"),
                },
                token.span,
            )),
        }
    }

    /// `IO`, `Monads::State`, `Monads\ListMonad`
    fn type_tag(&mut self) -> Result<MatchPattern, ParseError> {
        let first = self.expect(RawTag::Ident, "a type name")?;
        let mut last = first;
        while self.cursor.eat(RawTag::PathSep).is_some() {
            last = self.expect(RawTag::Ident, "a type name segment")?;
        }
        let span = Span::new(first.span.start, last.span.end);
        let name = span.slice(self.cursor.source());
        if self.options.is_type_name(name) {
            Ok(MatchPattern::TypeTag(name.into()))
        } else {
            Err(self.error(
                ParseErrorKind::UnknownType {
                    name: name.to_string(),
                },
                span,
            ))
        }
    }

    /// Validate an identifier token as a fresh binder.
    fn binder(&mut self, token: Token) -> Result<Binder, ParseError> {
        let name = self.cursor.text(token);
        if !name.starts_with(|c: char| c.is_ascii_lowercase()) {
            return Err(self.error(
                ParseErrorKind::InvalidBinder {
                    name: name.to_string(),
                },
                token.span,
            ));
        }
        if !self.seen.insert(name) {
            return Err(self.error(
                ParseErrorKind::DuplicateBinder {
                    name: name.to_string(),
                },
                token.span,
            ));
        }
        Ok(Binder::new(name))
    }

    fn expect(&mut self, tag: RawTag, expected: &'static str) -> Result<Token, ParseError> {
        self.cursor
            .eat(tag)
            .ok_or_else(|| self.unexpected(expected))
    }

    fn unexpected(&self, expected: &'static str) -> ParseError {
        let token = self.cursor.current();
        let kind = if token.tag == RawTag::UnterminatedStr {
            ParseErrorKind::UnterminatedString
        } else {
            ParseErrorKind::UnexpectedToken {
                expected,
                found: self.cursor.found(),
            }
        };
        self.error(kind, token.span)
    }

    fn error(&self, kind: ParseErrorKind, span: Span) -> ParseError {
        ParseError::new(kind, span, self.cursor.source())
    }
}

/// Strip the surrounding quotes and resolve backslash escapes.
///
/// Escapes are literal: `\x` is `x`. A trailing lone backslash is kept.
fn unescape(quoted: &str) -> String {
    let inner = quoted
        .get(1..quoted.len().saturating_sub(1))
        .unwrap_or_default();
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            out.push(chars.next().unwrap_or('\\'));
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests;
