pub mod automaton;
pub mod demo;
pub mod engine;
pub mod literals;
pub mod printer;
pub mod quote;
pub mod regex_lexer;
pub mod report;

pub use crate::domain::model::{LexReport, Strategy, Token, TokenKind};
pub use crate::domain::ports::Lexer;
pub use crate::utils::error::Result;
