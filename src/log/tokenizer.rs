//! 指令解析
//!
//! 日志参数是数据值与样式指令交错组成的序列。指令只作用于紧随其后的一个数据值，
//! 指令本身不产生输出。

use crate::log::record::Token;
use crate::log::style::{self, StyleName};
use crate::log::value::LogValue;

/// 样式指令
///
/// 以空白分隔的样式名称与预设引用（`@` 开头），例如 `"u cyan"`、`"@path"`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleDirective {
    elements: Vec<String>,
}

impl StyleDirective {
    /// 解析指令文本
    pub fn parse(text: &str) -> Self {
        Self {
            elements: text.split_whitespace().map(str::to_string).collect(),
        }
    }

    /// 直接由样式列表构造
    pub fn from_styles(styles: &[StyleName]) -> Self {
        Self {
            elements: styles.iter().map(|s| s.as_str().to_string()).collect(),
        }
    }

    /// 指令中的原始元素
    pub fn elements(&self) -> &[String] {
        &self.elements
    }

    /// 展开为样式列表
    ///
    /// 预设按表展开，未知预设与未知样式名称被忽略；同样的文本总是得到同样的结果
    pub fn expand(&self) -> Vec<StyleName> {
        self.elements
            .iter()
            .flat_map(|element| style::expand_element(element))
            .collect()
    }
}

/// 日志调用的单个参数：数据值或样式指令
#[derive(Debug, Clone, PartialEq)]
pub enum LogArg {
    Value(LogValue),
    Directive(StyleDirective),
}

impl LogArg {
    /// 构造指令参数
    pub fn style(text: &str) -> Self {
        LogArg::Directive(StyleDirective::parse(text))
    }
}

impl From<StyleDirective> for LogArg {
    fn from(directive: StyleDirective) -> Self {
        LogArg::Directive(directive)
    }
}

// 缺失的指令等同于没有样式
impl From<Option<StyleDirective>> for LogArg {
    fn from(directive: Option<StyleDirective>) -> Self {
        LogArg::Directive(directive.unwrap_or_default())
    }
}

impl From<LogValue> for LogArg {
    fn from(value: LogValue) -> Self {
        LogArg::Value(value)
    }
}

macro_rules! impl_arg_from_value {
    ($($t:ty),*) => {
        $(impl From<$t> for LogArg {
            fn from(value: $t) -> Self {
                LogArg::Value(value.into())
            }
        })*
    };
}

impl_arg_from_value!(
    String, &str, &String, &std::path::Path, serde_json::Value,
    i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, bool,
    Option<&str>, Option<String>, Option<LogValue>
);

/// 将参数序列解析为 Token 序列
///
/// 指令记录为下一个输出位置的待定样式；连续的多个指令以最后一个为准，
/// 末尾没有后续数据值的指令被丢弃。
pub fn tokenize<I>(args: I) -> Vec<Token>
where
    I: IntoIterator<Item = LogArg>,
{
    let mut tokens = Vec::new();
    let mut pending: Option<Vec<StyleName>> = None;

    for arg in args {
        match arg {
            LogArg::Directive(directive) => {
                pending = Some(directive.expand());
            }
            LogArg::Value(value) => {
                let styles = pending.take().unwrap_or_default();
                tokens.push(Token::new(value, styles));
            }
        }
    }

    tokens
}
