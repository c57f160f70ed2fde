pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::AppConfig;
pub use self::core::{
    automaton::AutomatonLexer,
    demo::run_demo,
    engine::LexEngine,
    quote::{create_quote, format_quote},
    regex_lexer::RegexLexer,
};
pub use utils::error::{QuoteLexError, Result};
