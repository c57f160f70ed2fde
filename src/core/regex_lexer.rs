use crate::domain::model::{is_keyword, Diagnostic, LexReport, Strategy, Token, TokenKind};
use crate::domain::ports::Lexer;
use crate::utils::error::Result;
use regex::Regex;

struct Rule {
    regex: Regex,
    // None = 空白，吃掉但不輸出
    kind: Option<TokenKind>,
}

/// Ordered-rule lexer: the first rule matching at the cursor wins.
pub struct RegexLexer {
    rules: Vec<Rule>,
}

impl RegexLexer {
    pub fn new() -> Result<Self> {
        let specs: Vec<(String, Option<TokenKind>)> = vec![
            (r"^\s+".to_string(), None),
            (
                r"^[A-Za-z_$][A-Za-z0-9_$]*".to_string(),
                Some(TokenKind::Identifier),
            ),
            (
                r"^(?:0[xX][0-9a-fA-F]+|[0-9]+(?:\.[0-9]+)?)".to_string(),
                Some(TokenKind::NumericLiteral),
            ),
            (r#"^"[^"\n]*""#.to_string(), Some(TokenKind::StringLiteral)),
            (r"^'.'".to_string(), Some(TokenKind::CharLiteral)),
            (
                r"^#\w+".to_string(),
                Some(TokenKind::PreprocessorDirective),
            ),
            (
                r"^(?://[^\n]*|/\*(?s:.*?)\*/)".to_string(),
                Some(TokenKind::Comment),
            ),
            (
                r"^(?:===|!==|==|!=|<=|>=|&&|\|\||\+\+|--|<<|>>|=>|[-+*/%&|^~!<>=])".to_string(),
                Some(TokenKind::Operator),
            ),
            (r"^[{}()\[\];,]".to_string(), Some(TokenKind::Punctuation)),
            (r"^\.".to_string(), Some(TokenKind::DotOperator)),
        ];

        let rules = specs
            .into_iter()
            .map(|(pattern, kind)| -> Result<Rule> {
                Ok(Rule {
                    regex: Regex::new(&pattern)?,
                    kind,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { rules })
    }
}

impl Lexer for RegexLexer {
    fn strategy(&self) -> Strategy {
        Strategy::Regex
    }

    fn analyze(&self, source: &str) -> LexReport {
        let mut report = LexReport::new(Strategy::Regex);
        let mut cursor = 0;

        'scan: while cursor < source.len() {
            let remaining = &source[cursor..];

            for rule in &self.rules {
                if let Some(m) = rule.regex.find(remaining) {
                    // 空字串匹配會卡住游標
                    if m.end() == 0 {
                        continue;
                    }
                    if let Some(kind) = rule.kind {
                        // 關鍵字與識別字共用同一條規則，再依字面分類
                        let kind = match kind {
                            TokenKind::Identifier if is_keyword(m.as_str()) => TokenKind::Keyword,
                            other => other,
                        };
                        report.tokens.push(Token::new(kind, m.as_str(), cursor));
                    }
                    cursor += m.end();
                    continue 'scan;
                }
            }

            tracing::warn!("Unrecognized sequence at byte {}", cursor);
            report.diagnostics.push(Diagnostic {
                offset: cursor,
                fragment: remaining.to_string(),
            });
            break;
        }

        report
    }
}
