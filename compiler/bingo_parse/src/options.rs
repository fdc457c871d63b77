//! Parser configuration.

use bingo_ir::last_path_segment;
use rustc_hash::FxHashSet;

/// Which bare identifiers are recognized as type tags.
///
/// By default any identifier or path whose last segment starts with an
/// uppercase letter (`IO`, `Monads::State`, `Monads\ListMonad`) is a type
/// name. With [`with_known_types`](Self::with_known_types), only the listed
/// names are, matched on their full text.
#[derive(Clone, Debug, Default)]
pub struct ParseOptions {
    known_types: Option<FxHashSet<String>>,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict type tags to `names`.
    #[must_use]
    pub fn with_known_types<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.known_types
            .get_or_insert_with(FxHashSet::default)
            .extend(names.into_iter().map(Into::into));
        self
    }

    /// Whether `name` is a recognized type name under these options.
    pub fn is_type_name(&self, name: &str) -> bool {
        match &self.known_types {
            Some(known) => known.contains(name),
            None => last_path_segment(name)
                .chars()
                .next()
                .is_some_and(|c| c.is_ascii_uppercase()),
        }
    }
}
