//! 日志模块
//!
//! 将混合类型的日志参数（可夹带内联样式指令）渲染为三种形式：
//! 终端 ANSI 文本、写入文件的纯文本、推送给订阅者的 HTML 片段，
//! 并为错误日志提供独立的错误文件与原始错误转发。
//!
//! # 特性
//!
//! - 内联样式指令：`"u cyan"`、`"@path"` 等，只作用于紧随其后的一个值
//! - 按值类型的默认终端样式，指令样式叠加在默认样式之后
//! - 多个输出目标相互隔离：单个目标失败不影响其它目标
//! - 只追加的 HTML 消息存储与同步订阅通知
//!
//! # 快速开始
//!
//! ```rust,no_run
//! use stylelog::log::*;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = LoggingConfig::from_json(r#"
//!         {
//!             log_file: "log.txt",
//!             error_file: "err.txt",
//!         }
//!     "#)?;
//!
//!     let context = LoggingContext::new(config)?;
//!
//!     context.log(None, vec![
//!         LogArg::from("Watching config file:"),
//!         LogArg::style("@path"),
//!         LogArg::from("./config.json"),
//!     ]);
//!
//!     let relay = context.error(Some("cfg"), vec![LogArg::from("Error parsing config file")])?;
//!     relay.relay(&[&"unexpected token at line 3"])?;
//!
//!     Ok(())
//! }
//! ```

pub mod appender;
pub mod config;
pub mod context;
pub mod error;
pub mod formatter;
pub mod global;
pub mod macros;
pub mod record;
pub mod style;
pub mod tokenizer;
pub mod value;

// 重新导出核心类型
pub use appender::{
    ConsoleAppender, ConsoleAppenderConfig, FileAppender, FileAppenderConfig, LogAppender,
    MessageStore, Subscriber, SubscriptionId, Target,
};
pub use config::LoggingConfig;
pub use context::{error_label, Appenders, ErrorRelay, LoggingContext, ERROR_LABEL};
pub use error::{LogError, SinkFailure, SinkKind};
pub use formatter::{
    ansi_wrap, html_escape, HtmlFormatter, LogFormatter, TextFormatter,
    TextFormatterConfig,
};
pub use global::{error, global, init, log};
pub use record::{Message, Token};
pub use style::{
    default_styles, expand_preset, preset_names, StyleName, PREFIX_STYLES, PRESET_MARKER,
};
pub use tokenizer::{tokenize, LogArg, StyleDirective};
pub use value::{format_object, LogValue, TypeTag};
