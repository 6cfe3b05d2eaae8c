use anyhow::Result;

/// 日志输出器 trait
///
/// 负责将渲染后的消息写入目标介质，每次调用写入一条
pub trait LogAppender: Send + Sync {
    /// 输出消息
    fn append(&self, formatted_message: &str) -> Result<()>;

    /// 刷新缓冲区（默认实现为空操作）
    fn flush(&self) -> Result<()> {
        Ok(())
    }
}
