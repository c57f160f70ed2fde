use anyhow::Result;
use quote_lexer::core::quote::QUOTE_PREFIX;
use quote_lexer::{create_quote, format_quote, run_demo};
use std::process::Command;

const EXPECTED_DEMO: &str = "Like I always say, eat your vegetables!\n177\n123\n123.123\n";

#[test]
fn test_handler_receives_formatted_quote_once() {
    let mut calls = Vec::new();
    create_quote("eat your vegetables!", |q| calls.push(q.to_owned()));

    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0], "Like I always say, eat your vegetables!");
}

#[test]
fn test_format_is_prefix_plus_input() {
    for input in ["", "x", "eat your vegetables!", "  spaced  ", "🥦"] {
        assert_eq!(format_quote(input), format!("{}{}", QUOTE_PREFIX, input));
    }
}

#[test]
fn test_demo_writes_expected_lines() -> Result<()> {
    let out = run_demo(Vec::new(), "eat your vegetables!")?;
    assert_eq!(String::from_utf8(out)?, EXPECTED_DEMO);
    Ok(())
}

#[test]
fn test_demo_binary_stdout() -> Result<()> {
    let output = Command::new(env!("CARGO_BIN_EXE_quote-lexer"))
        .arg("demo")
        .env_remove("RUST_LOG")
        .output()?;

    assert!(output.status.success());
    // 日誌在 stderr，stdout 只有示範輸出
    assert_eq!(String::from_utf8(output.stdout)?, EXPECTED_DEMO);
    Ok(())
}

#[test]
fn test_demo_binary_empty_quote() -> Result<()> {
    let output = Command::new(env!("CARGO_BIN_EXE_quote-lexer"))
        .args(["demo", "--quote", ""])
        .env_remove("RUST_LOG")
        .output()?;

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout)?,
        "Like I always say, \n177\n123\n123.123\n"
    );
    Ok(())
}

#[test]
fn test_demo_binary_json_logs() -> Result<()> {
    let output = Command::new(env!("CARGO_BIN_EXE_quote-lexer"))
        .args(["--log-json", "--verbose", "demo"])
        .env_remove("RUST_LOG")
        .output()?;

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout)?, EXPECTED_DEMO);

    let stderr = String::from_utf8(output.stderr)?;
    let lines: Vec<&str> = stderr.lines().filter(|l| !l.trim().is_empty()).collect();
    assert!(!lines.is_empty(), "verbose run should log something");
    for line in lines {
        let value: serde_json::Value = serde_json::from_str(line)?;
        assert!(value.get("level").is_some(), "missing level in {}", line);
    }
    Ok(())
}
