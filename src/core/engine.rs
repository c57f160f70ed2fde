use crate::core::automaton::AutomatonLexer;
use crate::core::regex_lexer::RegexLexer;
use crate::domain::model::{LexReport, Strategy};
use crate::domain::ports::Lexer;
use crate::utils::error::Result;
use std::path::Path;

/// The demo script, used when no input file is given.
pub const BUNDLED_SOURCE: &str = include_str!("../../samples/input.js");

pub fn lexer_for(strategy: Strategy) -> Result<Box<dyn Lexer>> {
    Ok(match strategy {
        Strategy::Regex => Box::new(RegexLexer::new()?),
        Strategy::Automaton => Box::new(AutomatonLexer::new()),
    })
}

pub fn load_source(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => {
            tracing::debug!("Reading source from {}", path.display());
            Ok(std::fs::read_to_string(path)?)
        }
        None => {
            tracing::debug!("No input given, using bundled demo script");
            Ok(BUNDLED_SOURCE.to_string())
        }
    }
}

pub struct LexEngine {
    lexer: Box<dyn Lexer>,
}

impl LexEngine {
    pub fn new(strategy: Strategy) -> Result<Self> {
        Ok(Self {
            lexer: lexer_for(strategy)?,
        })
    }

    pub fn run(&self, source: &str) -> LexReport {
        let strategy = self.lexer.strategy();
        tracing::info!("🔍 Lexing {} bytes with {} strategy", source.len(), strategy.as_str());

        let report = self.lexer.analyze(source);

        tracing::info!(
            "✅ {} tokens, {} diagnostics",
            report.tokens.len(),
            report.diagnostics.len()
        );
        report
    }

    pub fn run_file(&self, input: Option<&Path>) -> Result<LexReport> {
        let source = load_source(input)?;
        Ok(self.run(&source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::TokenKind;

    #[test]
    fn test_both_strategies_lex_bundled_script_cleanly() {
        for strategy in [Strategy::Regex, Strategy::Automaton] {
            let report = LexEngine::new(strategy).unwrap().run(BUNDLED_SOURCE);
            assert_eq!(report.strategy, strategy);
            assert!(report.is_clean(), "{:?}: {:?}", strategy, report.diagnostics);
            assert_eq!(report.count_of(TokenKind::StringLiteral), 2);
            // `// 2`, `// 1` 與結尾兩行註解
            assert_eq!(report.count_of(TokenKind::Comment), 4);
        }
    }

    #[test]
    fn test_strategies_agree_on_keywords() {
        let regex = LexEngine::new(Strategy::Regex).unwrap().run(BUNDLED_SOURCE);
        let automaton = LexEngine::new(Strategy::Automaton).unwrap().run(BUNDLED_SOURCE);

        // function ×2, const ×1
        assert_eq!(regex.count_of(TokenKind::Keyword), 3);
        assert_eq!(automaton.count_of(TokenKind::Keyword), 3);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let engine = LexEngine::new(Strategy::Regex).unwrap();
        let err = engine
            .run_file(Some(Path::new("definitely/not/here.js")))
            .unwrap_err();
        assert!(matches!(err, crate::utils::error::QuoteLexError::IoError(_)));
    }
}
