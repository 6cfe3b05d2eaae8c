use crate::log::config::LoggingConfig;
use crate::log::context::{ErrorRelay, LoggingContext};
use crate::log::error::LogError;
use crate::log::record::Message;
use crate::log::tokenizer::LogArg;
use anyhow::{anyhow, Result};
use std::sync::{Arc, RwLock};

/// 全局默认 LoggingContext
///
/// 首次使用时按默认配置创建（在当前目录下打开 log.txt 与 err.txt）
static GLOBAL_CONTEXT: once_cell::sync::Lazy<RwLock<Option<Arc<LoggingContext>>>> =
    once_cell::sync::Lazy::new(|| RwLock::new(None));

/// 初始化全局 LoggingContext，替换已有的实例
///
/// # 示例
///
/// ```ignore
/// fn example() -> anyhow::Result<()> {
///     let config = LoggingConfig::from_json(r#"{ log_file: "logs/app.txt" }"#)?;
///     stylelog::log::init(config)?;
///     Ok(())
/// }
/// ```
pub fn init(config: LoggingConfig) -> Result<()> {
    let context = Arc::new(LoggingContext::new(config)?);
    let mut global = GLOBAL_CONTEXT
        .write()
        .map_err(|_| anyhow!("global logging context lock poisoned"))?;
    *global = Some(context);
    Ok(())
}

/// 获取全局 LoggingContext
pub fn global() -> Result<Arc<LoggingContext>> {
    {
        let global = GLOBAL_CONTEXT
            .read()
            .map_err(|_| anyhow!("global logging context lock poisoned"))?;
        if let Some(context) = global.as_ref() {
            return Ok(Arc::clone(context));
        }
    }

    let mut global = GLOBAL_CONTEXT
        .write()
        .map_err(|_| anyhow!("global logging context lock poisoned"))?;
    if let Some(context) = global.as_ref() {
        return Ok(Arc::clone(context));
    }

    let context = Arc::new(LoggingContext::new(LoggingConfig::default())?);
    *global = Some(Arc::clone(&context));
    Ok(context)
}

/// 使用全局 LoggingContext 记录普通日志
///
/// 全局实例不可用时只通过 `log` 门面报告，仍然返回解析后的消息
pub fn log<I>(prefix: Option<&str>, args: I) -> Message
where
    I: IntoIterator<Item = LogArg>,
{
    match global() {
        Ok(context) => context.log(prefix, args),
        Err(e) => {
            ::log::warn!("logging context unavailable: {:#}", e);
            Message::new(args).with_prefix(prefix)
        }
    }
}

/// 使用全局 LoggingContext 记录错误日志
pub fn error<I>(prefix: Option<&str>, args: I) -> Result<ErrorRelay, LogError>
where
    I: IntoIterator<Item = LogArg>,
{
    global()?.error(prefix, args)
}
