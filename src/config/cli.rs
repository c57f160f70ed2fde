use crate::config::toml_config::AppConfig;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "quote-lexer")]
#[command(about = "Callback quote demo and a small JavaScript lexer")]
pub struct CliConfig {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Path to TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the formatted quote and the demo literals
    Demo {
        /// Text appended to the quote prefix
        #[arg(long)]
        quote: Option<String>,
    },
    /// Tokenise a JavaScript file
    Lex(LexArgs),
}

#[derive(Debug, Clone, Args)]
pub struct LexArgs {
    /// Source file; the bundled demo script when omitted
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// regex | automaton
    #[arg(short, long)]
    pub strategy: Option<String>,

    /// text | json
    #[arg(short, long)]
    pub format: Option<String>,

    /// Exit with status 2 when the lexer reports unrecognized input
    #[arg(long)]
    pub strict: bool,
}

impl CliConfig {
    /// Loads the config file (if any), applies command-line overrides and validates.
    pub fn resolve(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path.display());
                AppConfig::from_file(path)?
            }
            None => AppConfig::default(),
        };

        match &self.command {
            Command::Demo { quote } => {
                if let Some(quote) = quote {
                    config.demo.quote = quote.clone();
                }
            }
            Command::Lex(args) => apply_lex_overrides(&mut config, args),
        }

        config.validate()?;
        Ok(config)
    }
}

fn apply_lex_overrides(config: &mut AppConfig, args: &LexArgs) {
    if let Some(input) = &args.input {
        config.lexer.input = Some(input.to_string_lossy().into_owned());
    }
    if let Some(strategy) = &args.strategy {
        tracing::debug!("🔧 Strategy overridden to: {}", strategy);
        config.lexer.strategy = strategy.clone();
    }
    if let Some(format) = &args.format {
        config.output.format = format.clone();
    }
    if args.strict {
        config.lexer.strict = true;
    }
}
