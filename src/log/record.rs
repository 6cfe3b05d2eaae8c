use crate::log::style::{self, StyleName};
use crate::log::tokenizer::{tokenize, LogArg};
use crate::log::value::{LogValue, TypeTag};

/// 解析后的最小渲染单元
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub value: LogValue,
    pub type_tag: TypeTag,
    /// 指令展开后的自定义样式，不含类型默认样式
    pub styles: Vec<StyleName>,
}

impl Token {
    pub fn new(value: LogValue, styles: Vec<StyleName>) -> Self {
        let type_tag = value.type_tag();
        Self {
            value,
            type_tag,
            styles,
        }
    }

    /// 终端渲染使用的有效样式：类型默认样式在前，自定义样式在后
    ///
    /// 同一通道上后出现的样式覆盖先出现的
    pub fn effective_styles(&self) -> Vec<StyleName> {
        let defaults = style::default_styles(self.type_tag);
        let mut styles = Vec::with_capacity(defaults.len() + self.styles.len());
        styles.extend_from_slice(defaults);
        styles.extend_from_slice(&self.styles);
        styles
    }
}

/// 一次日志调用产生的消息
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Message {
    pub tokens: Vec<Token>,
    /// 发出消息的子系统名称
    pub prefix: Option<String>,
}

impl Message {
    /// 从参数序列创建消息
    pub fn new<I>(args: I) -> Self
    where
        I: IntoIterator<Item = LogArg>,
    {
        Self {
            tokens: tokenize(args),
            prefix: None,
        }
    }

    /// 设置前缀
    pub fn with_prefix(mut self, prefix: Option<&str>) -> Self {
        self.prefix = prefix.map(str::to_string);
        self
    }

    /// 在最前面插入一个 Token
    pub fn prepend(&mut self, token: Token) {
        self.tokens.insert(0, token);
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
