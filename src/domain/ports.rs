use crate::domain::model::{LexReport, Strategy};

/// A tokeniser for JavaScript-like source text.
///
/// Implementations never fail on bad input; unrecognised fragments end up
/// in [`LexReport::diagnostics`].
pub trait Lexer {
    fn strategy(&self) -> Strategy;
    fn analyze(&self, source: &str) -> LexReport;
}
