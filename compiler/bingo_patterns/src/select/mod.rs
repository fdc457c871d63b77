//! Clause selection: first matching clause wins.
//!
//! A [`RuleTable`] is an ordered list of `(pattern text, handler)` pairs.
//! [`build_matcher`] parses it once into a reusable [`Matcher`];
//! [`match_once`] and the `eval_*_pattern` entry points parse, select and
//! invoke in a single call.
//!
//! Order is the only tie-break. A `_` clause placed early shadows every
//! clause after it.

use bingo_ir::{MatchPattern, PatternKind};
use bingo_parse::{ParseOptions, PatternParser};
use smallvec::{smallvec, SmallVec};
use tracing::{debug, trace};

use crate::errors::{handler_arity, no_matching_clause, EvalError, EvalResult};
use crate::matcher::{accepts_shape, try_match};
use crate::{Handler, Value, ValueShape};

/// Ordered `(pattern, handler)` pairs.
#[derive(Clone, Debug, Default)]
pub struct RuleTable {
    rules: Vec<(String, Handler)>,
}

impl RuleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule, builder style.
    #[must_use]
    pub fn with(mut self, pattern: impl Into<String>, handler: Handler) -> Self {
        self.push(pattern, handler);
        self
    }

    pub fn push(&mut self, pattern: impl Into<String>, handler: Handler) {
        self.rules.push((pattern.into(), handler));
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Handler)> {
        self.rules.iter().map(|(p, h)| (p.as_str(), h))
    }
}

impl<S: Into<String>> FromIterator<(S, Handler)> for RuleTable {
    fn from_iter<I: IntoIterator<Item = (S, Handler)>>(iter: I) -> Self {
        RuleTable {
            rules: iter.into_iter().map(|(p, h)| (p.into(), h)).collect(),
        }
    }
}

/// A parsed rule.
#[derive(Clone, Debug)]
pub struct Clause {
    text: String,
    pattern: MatchPattern,
    arity: usize,
    handler: Handler,
}

impl Clause {
    /// Parse `text` and check the handler against the pattern's arity.
    pub fn new(parser: &PatternParser, text: &str, handler: Handler) -> Result<Self, EvalError> {
        let pattern = parser.parse(text)?;
        let arity = pattern.arity_with_subject(handler.arity() > 0);
        if handler.arity() > arity {
            return Err(handler_arity(text, arity, handler.arity()));
        }
        Ok(Clause {
            text: text.to_string(),
            pattern,
            arity,
            handler,
        })
    }

    /// Pattern text as written in the rule table.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn pattern(&self) -> &MatchPattern {
        &self.pattern
    }

    /// Values the pattern makes available to the handler.
    pub fn arity(&self) -> usize {
        self.arity
    }

    pub fn handler(&self) -> &Handler {
        &self.handler
    }

    /// Match and, on success, run the handler.
    fn try_invoke(&self, value: &Value) -> Option<EvalResult> {
        trace!(pattern = %self.text, "trying clause");
        let bindings = try_match(&self.pattern, value)?;
        debug!(pattern = %self.text, bound = bindings.len(), "clause matched");
        let args: SmallVec<[Value; 4]> = match self.pattern {
            MatchPattern::TypeTag(_) if self.handler.arity() > 0 => smallvec![value.clone()],
            _ => bindings.into_values(),
        };
        Some(self.handler.invoke(&args))
    }
}

/// Run the first clause in `clauses` that accepts `value`.
fn select<'a>(clauses: impl IntoIterator<Item = &'a Clause>, value: &Value) -> EvalResult {
    for clause in clauses {
        if let Some(result) = clause.try_invoke(value) {
            return result;
        }
    }
    debug!(%value, "no clause matched");
    Err(no_matching_clause(value))
}

/// A reusable clause selector.
///
/// Every pattern is parsed and every arity computed when the matcher is
/// built. The matcher is immutable afterwards and can be shared across
/// threads by reference.
#[derive(Clone, Debug)]
pub struct Matcher {
    clauses: Vec<Clause>,
}

impl Matcher {
    pub fn builder() -> MatcherBuilder {
        MatcherBuilder::default()
    }

    fn from_table(parser: &PatternParser, table: &RuleTable) -> Result<Self, EvalError> {
        let clauses = table
            .iter()
            .map(|(text, handler)| Clause::new(parser, text, handler.clone()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Matcher { clauses })
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Select a clause for `value` and invoke its handler.
    pub fn call(&self, value: &Value) -> EvalResult {
        select(&self.clauses, value)
    }

    /// Treat positional arguments as one list value.
    pub fn call_args(&self, args: Vec<Value>) -> EvalResult {
        self.call(&Value::list(args))
    }

    /// `(pattern text, arity)` for every clause, in table order.
    pub fn arities(&self) -> Vec<(&str, usize)> {
        self.clauses.iter().map(|c| (c.text(), c.arity())).collect()
    }
}

/// Configures parsing and collects rules for a [`Matcher`].
#[derive(Debug, Default)]
pub struct MatcherBuilder {
    options: ParseOptions,
    rules: RuleTable,
}

impl MatcherBuilder {
    #[must_use]
    pub fn options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    /// Restrict type tags to `names`.
    #[must_use]
    pub fn known_types<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = self.options.with_known_types(names);
        self
    }

    #[must_use]
    pub fn clause(mut self, pattern: impl Into<String>, handler: Handler) -> Self {
        self.rules.push(pattern, handler);
        self
    }

    /// Append every rule in `table`.
    #[must_use]
    pub fn rules(mut self, table: &RuleTable) -> Self {
        for (pattern, handler) in table.iter() {
            self.rules.push(pattern, handler.clone());
        }
        self
    }

    pub fn build(self) -> Result<Matcher, EvalError> {
        let parser = PatternParser::new(self.options);
        Matcher::from_table(&parser, &self.rules)
    }
}

/// Build a [`Matcher`] with default parse options.
#[tracing::instrument(level = "debug", skip_all, fields(rules = table.len()))]
pub fn build_matcher(table: &RuleTable) -> Result<Matcher, EvalError> {
    Matcher::from_table(&PatternParser::default(), table)
}

/// Which family of clauses a one-shot evaluation considers.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MatcherKind {
    /// Scalars: literal clauses.
    Literal,
    /// Sequences: cons and list clauses.
    Array,
    /// Nominal objects: type-tag clauses.
    Object,
}

impl MatcherKind {
    pub fn for_shape(shape: ValueShape) -> Self {
        match shape {
            ValueShape::Scalar => MatcherKind::Literal,
            ValueShape::Sequence => MatcherKind::Array,
            ValueShape::Nominal => MatcherKind::Object,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MatcherKind::Literal => "literal",
            MatcherKind::Array => "array",
            MatcherKind::Object => "object",
        }
    }

    fn shape(self) -> ValueShape {
        match self {
            MatcherKind::Literal => ValueShape::Scalar,
            MatcherKind::Array => ValueShape::Sequence,
            MatcherKind::Object => ValueShape::Nominal,
        }
    }

    /// Whether clauses of `kind` take part. Wildcards always do.
    pub fn admits(self, kind: PatternKind) -> bool {
        accepts_shape(kind, self.shape())
    }
}

fn eval_with(kind: MatcherKind, table: &RuleTable, value: &Value) -> EvalResult {
    let parser = PatternParser::default();
    let clauses = table
        .iter()
        .map(|(text, handler)| Clause::new(&parser, text, handler.clone()))
        .collect::<Result<Vec<_>, _>>()?;
    select(
        clauses.iter().filter(|c| kind.admits(c.pattern.kind())),
        value,
    )
}

/// Parse, select and invoke in one step.
///
/// The value's shape picks the matcher kind; only clauses of that kind
/// (and wildcards) are considered.
#[tracing::instrument(level = "debug", skip_all, fields(rules = table.len()))]
pub fn match_once(table: &RuleTable, value: &Value) -> EvalResult {
    let kind = MatcherKind::for_shape(value.shape());
    debug!(matcher = kind.as_str(), shape = %value.shape(), "selected matcher");
    eval_with(kind, table, value)
}

/// Evaluate only the literal clauses of `table` against `value`.
pub fn eval_string_pattern(table: &RuleTable, value: &Value) -> EvalResult {
    eval_with(MatcherKind::Literal, table, value)
}

/// Evaluate only the cons and list clauses of `table` against `value`.
pub fn eval_array_pattern(table: &RuleTable, value: &Value) -> EvalResult {
    eval_with(MatcherKind::Array, table, value)
}

/// Evaluate only the type-tag clauses of `table` against `value`.
pub fn eval_object_pattern(table: &RuleTable, value: &Value) -> EvalResult {
    eval_with(MatcherKind::Object, table, value)
}

/// `(pattern, arity)` for every pattern, in order.
pub fn get_num_conditions(patterns: &[&str]) -> Result<Vec<(String, usize)>, EvalError> {
    let parser = PatternParser::default();
    patterns
        .iter()
        .map(|text| -> Result<_, EvalError> {
            let pattern = parser.parse(text)?;
            Ok(((*text).to_string(), pattern.arity()))
        })
        .collect()
}
