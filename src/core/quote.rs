pub const QUOTE_PREFIX: &str = "Like I always say, ";

pub fn format_quote(quote: &str) -> String {
    format!("{}{}", QUOTE_PREFIX, quote)
}

/// Builds the quote and hands it to `callback`, exactly once.
pub fn create_quote<F>(quote: &str, callback: F)
where
    F: FnOnce(&str),
{
    let my_quote = format_quote(quote);
    tracing::debug!("Formatted quote ({} bytes)", my_quote.len());
    callback(&my_quote);
}
