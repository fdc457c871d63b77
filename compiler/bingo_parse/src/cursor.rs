//! Token cursor for navigating a pattern's token stream.
//!
//! Whitespace tokens are dropped when the cursor is built, so the grammar
//! never sees them. The last token is always `Eof`.

use bingo_ir::Span;
use bingo_lexer_core::{tokenize, RawTag};
use tracing::trace;

/// A token with its absolute span in the pattern text.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub tag: RawTag,
    pub span: Span,
}

pub struct Cursor<'a> {
    source: &'a str,
    tokens: Vec<Token>,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        let mut offset = 0u32;
        let mut tokens = Vec::new();
        for raw in tokenize(source) {
            let span = Span::with_len(offset, raw.len);
            offset = span.end;
            if raw.tag != RawTag::Whitespace {
                tokens.push(Token { tag: raw.tag, span });
            }
        }
        Cursor {
            source,
            tokens,
            pos: 0,
        }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    /// The current token.
    ///
    /// Invariant: `pos` never moves past the trailing `Eof`, so this is
    /// always in bounds; the fallback only guards an empty token list.
    #[inline]
    pub fn current(&self) -> Token {
        self.tokens.get(self.pos).copied().unwrap_or(Token {
            tag: RawTag::Eof,
            span: Span::with_len(u32::try_from(self.source.len()).unwrap_or(u32::MAX), 0),
        })
    }

    #[inline]
    pub fn current_tag(&self) -> RawTag {
        self.current().tag
    }

    #[inline]
    pub fn check(&self, tag: RawTag) -> bool {
        self.current_tag() == tag
    }

    /// Source text of a token.
    pub fn text(&self, token: Token) -> &'a str {
        token.span.slice(self.source)
    }

    /// Consume and return the current token. Stays put on `Eof`.
    pub fn advance(&mut self) -> Token {
        let token = self.current();
        trace!(
            pos = self.pos,
            kind = token.tag.display_name(),
            span_start = token.span.start,
            span_end = token.span.end,
            "advance"
        );
        if token.tag != RawTag::Eof {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it has the given tag.
    pub fn eat(&mut self, tag: RawTag) -> Option<Token> {
        if self.check(tag) {
            Some(self.advance())
        } else {
            None
        }
    }

    /// Description of the current token for "expected X, found Y" errors.
    pub fn found(&self) -> String {
        let token = self.current();
        match token.tag {
            RawTag::Eof | RawTag::UnterminatedStr => token.tag.display_name().to_string(),
            _ => format!("`{}`", self.text(token)),
        }
    }
}
