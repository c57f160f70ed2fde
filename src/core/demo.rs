use crate::core::literals::demo_literals;
use crate::core::printer::LinePrinter;
use crate::core::quote::create_quote;
use crate::utils::error::Result;
use std::io::Write;

pub const DEMO_QUOTE: &str = "eat your vegetables!";

/// Prints the formatted quote followed by the demo literals, one per line.
pub fn run_demo<W: Write>(writer: W, quote: &str) -> Result<W> {
    let mut printer = LinePrinter::new(writer);

    // handler 本身不回傳值，I/O 結果透過閉包帶出
    let mut outcome = Ok(());
    create_quote(quote, |q| outcome = printer.print_line(q));
    outcome?;

    for literal in demo_literals() {
        tracing::debug!("Printing literal {:?}", literal);
        printer.print_line(&literal)?;
    }

    printer.flush()?;
    Ok(printer.into_inner())
}
