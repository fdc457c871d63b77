//! Bingo Parse - turns pattern strings into [`MatchPattern`]s.
//!
//! This is the only place pattern text is interpreted. Everything
//! downstream (arity analysis, matching, clause selection) works on the
//! immutable AST from `bingo_ir`.
//!
//! ```text
//! parse("(x:xs)")          -> Cons { heads: [x], tail: xs }
//! parse(r#"["foo", bar]"#) -> List [Literal "foo", Binder bar]
//! parse("IO")              -> TypeTag "IO"
//! ```

mod cursor;
mod error;
mod grammar;
mod options;

pub use bingo_ir::MatchPattern;
pub use error::{ParseError, ParseErrorKind};
pub use options::ParseOptions;

/// Pattern parser with configured type-name recognition.
#[derive(Clone, Debug, Default)]
pub struct PatternParser {
    options: ParseOptions,
}

impl PatternParser {
    pub fn new(options: ParseOptions) -> Self {
        PatternParser { options }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse one pattern string.
    pub fn parse(&self, text: &str) -> Result<MatchPattern, ParseError> {
        grammar::Parser::new(text, &self.options).parse()
    }
}

/// Parse a pattern with default options.
pub fn parse(text: &str) -> Result<MatchPattern, ParseError> {
    PatternParser::default().parse(text)
}

#[cfg(test)]
mod tests;
