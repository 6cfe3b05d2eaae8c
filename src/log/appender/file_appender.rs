use crate::log::appender::LogAppender;
use anyhow::{anyhow, Result};
use serde::Deserialize;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

/// FileAppender 配置
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FileAppenderConfig {
    /// 日志文件路径
    pub file_path: String,
}

/// 文件输出器
///
/// 以追加模式打开文件并在整个生命周期内持有，每次调用追加一行
pub struct FileAppender {
    file: Mutex<File>,
    config: FileAppenderConfig,
}

impl FileAppender {
    /// 从配置创建 FileAppender
    pub fn new(config: FileAppenderConfig) -> Result<Self> {
        let path = PathBuf::from(&config.file_path);

        // 确保父目录存在
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| anyhow!("failed to open log file '{}': {}", config.file_path, e))?;

        Ok(Self {
            file: Mutex::new(file),
            config,
        })
    }

    /// 获取日志文件路径
    pub fn path(&self) -> &str {
        &self.config.file_path
    }
}

impl LogAppender for FileAppender {
    fn append(&self, formatted_message: &str) -> Result<()> {
        let mut line = String::with_capacity(formatted_message.len() + 1);
        line.push_str(formatted_message);
        line.push('\n');

        let mut file = self
            .file
            .lock()
            .map_err(|_| anyhow!("log file '{}' lock poisoned", self.config.file_path))?;
        file.write_all(line.as_bytes())?;
        file.flush()?;
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        let mut file = self
            .file
            .lock()
            .map_err(|_| anyhow!("log file '{}' lock poisoned", self.config.file_path))?;
        file.flush()?;
        file.sync_data()?;
        Ok(())
    }
}
