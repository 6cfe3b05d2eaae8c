use crate::log::formatter::LogFormatter;
use crate::log::record::{Message, Token};
use crate::log::value::{format_object, LogValue};
use anyhow::Result;

/// HTML 格式化器
///
/// 每条消息渲染为一个 `<div>`，每个值渲染为一个带 `class` 的 `<span>`。
/// 只有显式指令会产生内联样式，类型默认样式不参与 HTML 渲染。
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlFormatter;

impl HtmlFormatter {
    pub fn new() -> Self {
        Self
    }

    fn format_token(&self, token: &Token) -> String {
        let class = token.type_tag.as_str();

        match &token.value {
            LogValue::Object(value) => format!(
                "<span class=\"{}\">{}</span>",
                class,
                html_escape(&format_object(value))
            ),
            value if token.styles.is_empty() => {
                format!("<span class=\"{}\">{}</span>", class, html_escape(&value.to_string()))
            }
            value => {
                let style: Vec<&str> = token.styles.iter().map(|s| s.css_fragment()).collect();
                format!(
                    "<span class=\"{}\" style=\"{}\">{}</span>",
                    class,
                    style.join(";"),
                    html_escape(&value.to_string())
                )
            }
        }
    }
}

impl LogFormatter for HtmlFormatter {
    fn format(&self, message: &Message) -> Result<String> {
        let mut result = String::from("<div");
        if let Some(prefix) = &message.prefix {
            let prefix = html_escape(prefix);
            result.push_str(&format!(" data-name=\"{}\" class=\"{}\"", prefix, prefix));
        }
        result.push('>');

        let children: Vec<String> = message.tokens.iter().map(|t| self.format_token(t)).collect();
        result.push_str(&children.join(" "));

        result.push_str("</div>");
        Ok(result)
    }
}

/// 转义 HTML 特殊字符
pub fn html_escape(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '&' => result.push_str("&amp;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}
