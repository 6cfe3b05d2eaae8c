use crate::log::context::ErrorRelay;
use std::fmt;
use thiserror::Error;

/// 输出目标的种类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkKind {
    Console,
    LogFile,
    MessageStore,
    ErrorFile,
    ErrorConsole,
}

impl fmt::Display for SinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SinkKind::Console => write!(f, "console"),
            SinkKind::LogFile => write!(f, "log file"),
            SinkKind::MessageStore => write!(f, "message store"),
            SinkKind::ErrorFile => write!(f, "error file"),
            SinkKind::ErrorConsole => write!(f, "error console"),
        }
    }
}

/// 单个输出目标的写入失败
#[derive(Debug)]
pub struct SinkFailure {
    pub sink: SinkKind,
    pub error: anyhow::Error,
}

impl fmt::Display for SinkFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:#}", self.sink, self.error)
    }
}

/// 日志相关错误
#[derive(Error, Debug)]
pub enum LogError {
    /// 一个或多个输出目标写入失败，其余目标已正常写入
    ///
    /// 错误日志调用失败时仍携带原始错误转发器，调用方可以继续输出异常详情
    #[error("log sinks failed: {}", describe(.failures))]
    Sinks {
        failures: Vec<SinkFailure>,
        relay: Option<ErrorRelay>,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LogError {
    /// 不携带转发器的输出目标失败
    pub fn sinks(failures: Vec<SinkFailure>) -> Self {
        LogError::Sinks {
            failures,
            relay: None,
        }
    }

    /// 失败的输出目标
    pub fn failed_sinks(&self) -> Vec<SinkKind> {
        match self {
            LogError::Sinks { failures, .. } => failures.iter().map(|f| f.sink).collect(),
            LogError::Other(_) => Vec::new(),
        }
    }

    /// 错误日志调用附带的原始错误转发器
    pub fn relay(&self) -> Option<&ErrorRelay> {
        match self {
            LogError::Sinks { relay, .. } => relay.as_ref(),
            LogError::Other(_) => None,
        }
    }

    /// 取出原始错误转发器
    pub fn into_relay(self) -> Option<ErrorRelay> {
        match self {
            LogError::Sinks { relay, .. } => relay,
            LogError::Other(_) => None,
        }
    }
}

fn describe(failures: &[SinkFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
