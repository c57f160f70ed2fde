use serde::{Deserialize, Serialize};
use std::fmt;

pub const KEYWORDS: &[&str] = &[
    "function", "var", "return", "if", "else", "while", "for", "const", "let",
];

pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(&word)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Keyword,
    Identifier,
    NumericLiteral,
    StringLiteral,
    CharLiteral,
    PreprocessorDirective,
    Comment,
    Operator,
    Punctuation,
    DotOperator,
}

impl TokenKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Keyword => "Keyword",
            Self::Identifier => "Identifier",
            Self::NumericLiteral => "Numeric Literal",
            Self::StringLiteral => "String Literal",
            Self::CharLiteral => "Char Literal",
            Self::PreprocessorDirective => "Preprocessor directive",
            Self::Comment => "Comment",
            Self::Operator => "Operator",
            Self::Punctuation => "Punctuation",
            Self::DotOperator => "Dot Operator",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    /// Byte offset of the lexeme in the input.
    pub offset: usize,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, offset: usize) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            offset,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub offset: usize,
    pub fragment: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Regex,
    Automaton,
}

impl Strategy {
    pub const NAMES: &'static [&'static str] = &["regex", "automaton"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Regex => "regex",
            Self::Automaton => "automaton",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "regex" => Some(Self::Regex),
            "automaton" => Some(Self::Automaton),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexReport {
    pub strategy: Strategy,
    pub tokens: Vec<Token>,
    pub diagnostics: Vec<Diagnostic>,
}

impl LexReport {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            tokens: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn count_of(&self, kind: TokenKind) -> usize {
        self.tokens.iter().filter(|t| t.kind == kind).count()
    }
}
