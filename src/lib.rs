//! stylelog - 带内联样式指令的进程内日志引擎
//!
//! 一次日志调用同时产生三种渲染：终端 ANSI 文本、写入文件的纯文本、推送给订阅者的 HTML 片段。
//!
//! ## 模块
//!
//! - **log**: 指令解析、样式注册表、终端与 HTML 渲染、多目标输出
//!
//! ## 设计理念
//!
//! - 🎨 **指令即参数**: 样式指令与数据值交错传入，只作用于下一个值
//! - 🧱 **目标隔离**: 任一输出目标失败都不阻止其它目标写入
//! - 🔒 **类型安全**: 参数是值与指令的显式枚举，而非运行时类型探测

mod macros;
pub mod log;

// 重新导出主要的公共 API
pub use crate::log::{
    ErrorRelay, LogArg, LogError, LogValue, LoggingConfig, LoggingContext, Message, StyleDirective,
    StyleName, Token, TypeTag,
};
