mod core;
mod html_formatter;
mod text_formatter;

pub use self::core::LogFormatter;
pub use html_formatter::{html_escape, HtmlFormatter};
pub use text_formatter::{ansi_wrap, TextFormatter, TextFormatterConfig};
