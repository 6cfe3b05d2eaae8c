use crate::log::formatter::LogFormatter;
use crate::log::record::{Message, Token};
use crate::log::style::{StyleName, PREFIX_STYLES};
use crate::log::value::{format_object, LogValue};
use anyhow::Result;
use serde::Deserialize;
use smart_default::SmartDefault;

/// TextFormatter 配置
#[derive(Debug, Clone, Deserialize, SmartDefault)]
#[serde(default)]
pub struct TextFormatterConfig {
    /// 是否输出 ANSI 样式（交互式终端）
    #[default = false]
    pub colored: bool,
}

/// 文本格式化器
///
/// `colored` 为 true 时生成终端使用的 ANSI 样式文本，否则生成不含转义序列的纯文本，
/// 文件输出始终使用纯文本形式
pub struct TextFormatter {
    config: TextFormatterConfig,
}

impl TextFormatter {
    pub fn new(config: TextFormatterConfig) -> Self {
        Self { config }
    }

    /// 纯文本格式化器
    pub fn plain() -> Self {
        Self::new(TextFormatterConfig { colored: false })
    }

    /// ANSI 样式格式化器
    pub fn colored() -> Self {
        Self::new(TextFormatterConfig { colored: true })
    }

    fn format_token(&self, token: &Token) -> String {
        match (&token.value, self.config.colored) {
            // 对象保持多行结构，不加转义序列
            (LogValue::Object(value), _) => format_object(value),
            (value, true) => ansi_wrap(&token.effective_styles(), &value.to_string()),
            (value, false) => value.to_string(),
        }
    }
}

impl LogFormatter for TextFormatter {
    fn format(&self, message: &Message) -> Result<String> {
        let mut parts = Vec::with_capacity(message.tokens.len() + 1);

        if let Some(prefix) = &message.prefix {
            if self.config.colored {
                parts.push(ansi_wrap(PREFIX_STYLES, prefix));
            } else {
                parts.push(prefix.clone());
            }
        }

        parts.extend(message.tokens.iter().map(|token| self.format_token(token)));

        Ok(parts.join(" "))
    }
}

/// 用一组样式包裹文本，结尾重置样式
///
/// 同一通道上后出现的代码生效
pub fn ansi_wrap(styles: &[StyleName], text: &str) -> String {
    if styles.is_empty() {
        return text.to_string();
    }

    let codes: Vec<String> = styles.iter().map(|s| s.ansi_code().to_string()).collect();
    format!("\x1b[{}m{}\x1b[0m", codes.join(";"), text)
}

crate::impl_from!(TextFormatterConfig => TextFormatter);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::tokenizer::LogArg;
    use serde_json::json;

    fn message(args: Vec<LogArg>) -> Message {
        Message::new(args)
    }

    #[test]
    fn test_ansi_wrap() {
        assert_eq!(
            ansi_wrap(&[StyleName::Magenta, StyleName::Underline], "x"),
            "\x1b[35;4mx\x1b[0m"
        );
        assert_eq!(ansi_wrap(&[], "x"), "x");
    }

    #[test]
    fn test_colored_defaults_per_type() {
        let formatter = TextFormatter::colored();
        let cases: Vec<(LogArg, &str)> = vec![
            (LogArg::from("s"), "\x1b[35ms\x1b[0m"),
            (LogArg::from(42), "\x1b[33m42\x1b[0m"),
            (LogArg::from(true), "\x1b[33mtrue\x1b[0m"),
            (LogArg::from(LogValue::Null), "\x1b[1mnull\x1b[0m"),
            (
                LogArg::from(LogValue::Undefined),
                "\x1b[90mundefined\x1b[0m",
            ),
            (
                LogArg::from(LogValue::function("f")),
                "\x1b[36m[Function: f]\x1b[0m",
            ),
        ];

        for (arg, expected) in cases {
            let formatted = formatter.format(&message(vec![arg])).unwrap();
            assert_eq!(formatted, expected);
        }
    }

    #[test]
    fn test_colored_hello_42() {
        let formatter = TextFormatter::colored();
        let formatted = formatter
            .format(&message(vec![LogArg::from("Hello"), LogArg::from(42)]))
            .unwrap();
        assert_eq!(formatted, "\x1b[35mHello\x1b[0m \x1b[33m42\x1b[0m");
    }

    #[test]
    fn test_colored_directive_appends_to_defaults() {
        let formatter = TextFormatter::colored();
        let formatted = formatter
            .format(&message(vec![LogArg::style("@path"), LogArg::from("/tmp/x.json")]))
            .unwrap();
        assert_eq!(formatted, "\x1b[35;4;36m/tmp/x.json\x1b[0m");
    }

    #[test]
    fn test_object_never_styled() {
        let formatter = TextFormatter::colored();
        let formatted = formatter
            .format(&message(vec![LogArg::style("red b"), LogArg::from(json!({"a": 1}))]))
            .unwrap();
        assert!(!formatted.contains('\x1b'));
        assert_eq!(formatted, "{\n  \"a\": 1\n}");
    }

    #[test]
    fn test_plain_has_no_escapes() {
        let formatter = TextFormatter::plain();
        let formatted = formatter
            .format(
                &message(vec![
                    LogArg::from("Watching config file:"),
                    LogArg::style("@path"),
                    LogArg::from("/etc/app.json"),
                ])
                .with_prefix(Some("cfg")),
            )
            .unwrap();
        assert_eq!(formatted, "cfg Watching config file: /etc/app.json");
    }

    #[test]
    fn test_colored_prefix() {
        let formatter = TextFormatter::colored();
        let formatted = formatter
            .format(&message(vec![LogArg::from("x")]).with_prefix(Some("server")))
            .unwrap();
        assert_eq!(formatted, "\x1b[32;1;4mserver\x1b[0m \x1b[35mx\x1b[0m");
    }

    #[test]
    fn test_empty_message() {
        let formatter = TextFormatter::plain();
        assert_eq!(formatter.format(&Message::default()).unwrap(), "");
    }

    #[test]
    fn test_text_formatter_config_default() {
        let config = TextFormatterConfig::default();
        assert!(!config.colored);
        let formatter = TextFormatter::from(TextFormatterConfig { colored: true });
        assert!(formatter.config.colored);
    }
}
