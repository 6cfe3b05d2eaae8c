use crate::log::appender::LogAppender;
use anyhow::Result;
use serde::Deserialize;
use smart_default::SmartDefault;
use std::io::{self, Write};

/// 输出目标
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, SmartDefault)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    #[default]
    Stdout,
    Stderr,
}

/// ConsoleAppender 配置
#[derive(Debug, Clone, Deserialize, SmartDefault, PartialEq)]
#[serde(default)]
pub struct ConsoleAppenderConfig {
    /// 输出到 stdout 还是 stderr
    pub target: Target,
}

impl ConsoleAppenderConfig {
    pub fn stdout() -> Self {
        Self {
            target: Target::Stdout,
        }
    }

    pub fn stderr() -> Self {
        Self {
            target: Target::Stderr,
        }
    }
}

/// 终端输出器
///
/// 将消息输出到标准输出或标准错误
pub struct ConsoleAppender {
    config: ConsoleAppenderConfig,
}

impl ConsoleAppender {
    pub fn new(config: ConsoleAppenderConfig) -> Self {
        Self { config }
    }

    pub fn target(&self) -> Target {
        self.config.target
    }
}

impl LogAppender for ConsoleAppender {
    fn append(&self, formatted_message: &str) -> Result<()> {
        match self.config.target {
            Target::Stdout => {
                let mut stdout = io::stdout().lock();
                writeln!(stdout, "{}", formatted_message)?;
                stdout.flush()?;
            }
            Target::Stderr => {
                let mut stderr = io::stderr().lock();
                writeln!(stderr, "{}", formatted_message)?;
                stderr.flush()?;
            }
        }
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        match self.config.target {
            Target::Stdout => io::stdout().flush()?,
            Target::Stderr => io::stderr().flush()?,
        }
        Ok(())
    }
}

crate::impl_from!(ConsoleAppenderConfig => ConsoleAppender);
