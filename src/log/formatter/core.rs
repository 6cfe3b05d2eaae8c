use crate::log::record::Message;
use anyhow::Result;

/// 日志格式化器 trait
///
/// 负责将 Message 渲染为字符串
pub trait LogFormatter: Send + Sync {
    /// 渲染消息
    fn format(&self, message: &Message) -> Result<String>;
}
