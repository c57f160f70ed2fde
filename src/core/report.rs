use crate::domain::model::LexReport;
use crate::utils::error::Result;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub const NAMES: &'static [&'static str] = &["text", "json"];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// `<lexeme> - <label>`, one line per token.
pub fn render_text(report: &LexReport) -> String {
    report
        .tokens
        .iter()
        .map(|t| format!("{} - {}\n", t.lexeme, t.kind))
        .collect()
}

pub fn render_json(report: &LexReport) -> Result<String> {
    let mut json = serde_json::to_string_pretty(report)?;
    json.push('\n');
    Ok(json)
}

pub fn write_report<W: Write>(mut writer: W, report: &LexReport, format: OutputFormat) -> Result<()> {
    let rendered = match format {
        OutputFormat::Text => render_text(report),
        OutputFormat::Json => render_json(report)?,
    };
    writer.write_all(rendered.as_bytes())?;
    writer.flush()?;
    Ok(())
}

pub fn diagnostic_lines(report: &LexReport) -> Vec<String> {
    report
        .diagnostics
        .iter()
        .map(|d| format!("Unrecognized sequence: {}", d.fragment))
        .collect()
}
