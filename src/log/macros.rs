//! 日志宏模块
//!
//! 提供构造参数序列与调用 LoggingContext 的便捷宏
//!
//! # 示例
//!
//! ```ignore
//! use stylelog::{log, log_err, style};
//!
//! fn main() -> anyhow::Result<()> {
//!     let context = LoggingContext::new(LoggingConfig::default())?;
//!
//!     // 普通日志
//!     log!(context, "Successfully read config file:", style!("@path"), path);
//!
//!     // 带前缀的日志
//!     log!(context, prefix = "server"; "listening on", style!("@ip"), addr);
//!
//!     // 错误日志，返回原始错误转发器
//!     log_err!(context, "Error parsing config file:", path)?.relay_error(&err)?;
//!
//!     Ok(())
//! }
//! ```

/// 构造参数序列
///
/// # 示例
///
/// ```ignore
/// let args = log_args!["Hello", style!("u cyan"), "/tmp/x.json", 42];
/// ```
#[macro_export]
macro_rules! log_args {
    ($($arg:expr),* $(,)?) => {
        vec![$($crate::log::LogArg::from($arg)),*]
    };
}

/// 构造样式指令参数
///
/// ```ignore
/// style!("@path");
/// style!("_red white b");
/// ```
#[macro_export]
macro_rules! style {
    ($directive:expr) => {
        $crate::log::LogArg::style($directive)
    };
}

/// 记录普通日志，返回解析后的消息
///
/// ```ignore
/// log!(context, "user logged in:", style!("b"), "alice");
/// log!(context, prefix = "auth"; "user logged in:", "alice");
/// ```
#[macro_export]
macro_rules! log {
    ($context:expr, prefix = $prefix:expr; $($arg:expr),* $(,)?) => {
        $context.log(Some($prefix), $crate::log_args![$($arg),*])
    };
    ($context:expr $(, $arg:expr)* $(,)?) => {
        $context.log(None, $crate::log_args![$($arg),*])
    };
}

/// 记录错误日志，返回 `Result<ErrorRelay, LogError>`
///
/// 输出目标失败时转发器仍可从错误中取出：
///
/// ```ignore
/// let relay = match log_err!(context, "Error parsing config file:", path) {
///     Ok(relay) => relay,
///     Err(err) => {
///         ::log::warn!("{}", err);
///         err.into_relay().ok_or_else(|| anyhow!("error relay unavailable"))?
///     }
/// };
/// relay.relay_error(&cause)?;
/// ```
///
/// ```ignore
/// log_err!(context, "Unable to locate config file:", style!("@path"), path)?;
/// log_err!(context, prefix = "cfg"; "Error parsing config file:", path)?;
/// ```
#[macro_export]
macro_rules! log_err {
    ($context:expr, prefix = $prefix:expr; $($arg:expr),* $(,)?) => {
        $context.error(Some($prefix), $crate::log_args![$($arg),*])
    };
    ($context:expr $(, $arg:expr)* $(,)?) => {
        $context.error(None, $crate::log_args![$($arg),*])
    };
}
