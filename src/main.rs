use clap::Parser;
use quote_lexer::config::Command;
use quote_lexer::core::report::{diagnostic_lines, write_report};
use quote_lexer::utils::logger;
use quote_lexer::{run_demo, AppConfig, CliConfig, LexEngine, QuoteLexError};

fn run_lex(config: &AppConfig) -> Result<i32, QuoteLexError> {
    let strategy = config.strategy()?;
    let format = config.output_format()?;
    let input = config.input_path();

    let engine = LexEngine::new(strategy)?;
    let report = engine.run_file(input.as_deref())?;

    write_report(std::io::stdout().lock(), &report, format)?;

    for line in diagnostic_lines(&report) {
        eprintln!("{}", line);
    }

    if config.lexer.strict && !report.is_clean() {
        tracing::warn!(
            "⚠️ Strict mode: {} unrecognized sequence(s)",
            report.diagnostics.len()
        );
        return Ok(2);
    }
    Ok(0)
}

fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    // 驗證配置
    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let outcome = match &cli.command {
        Command::Demo { .. } => run_demo(std::io::stdout().lock(), &config.demo.quote).map(|_| 0),
        Command::Lex(_) => run_lex(&config),
    };

    match outcome {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(e) => {
            tracing::error!("❌ Run failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }
}
