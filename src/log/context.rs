use crate::log::appender::{
    ConsoleAppender, FileAppender, FileAppenderConfig, LogAppender, MessageStore, SubscriptionId,
};
use crate::log::config::LoggingConfig;
use crate::log::error::{LogError, SinkFailure, SinkKind};
use crate::log::formatter::{
    HtmlFormatter, LogFormatter, TextFormatter, TextFormatterConfig,
};
use crate::log::record::{Message, Token};
use crate::log::style::{self, ERROR_PRESET};
use crate::log::tokenizer::LogArg;
use crate::log::value::LogValue;
use anyhow::{anyhow, Result};
use std::fmt;
use std::io::IsTerminal;
use std::sync::Arc;

/// 错误标签文本
pub const ERROR_LABEL: &str = "ERROR:";

/// LoggingContext 使用的输出器
pub struct Appenders {
    pub console: Arc<dyn LogAppender>,
    pub error_console: Arc<dyn LogAppender>,
    pub log_file: Arc<dyn LogAppender>,
    pub error_file: Arc<dyn LogAppender>,
}

impl Appenders {
    /// 按配置创建输出器，日志文件在此时打开并在整个生命周期内持有
    pub fn from_config(config: &LoggingConfig) -> Result<Self> {
        Ok(Self {
            console: Arc::new(ConsoleAppender::from(config.console.clone())),
            error_console: Arc::new(ConsoleAppender::from(config.error_console.clone())),
            log_file: Arc::new(FileAppender::new(FileAppenderConfig {
                file_path: config.log_file.clone(),
            })?),
            error_file: Arc::new(FileAppender::new(FileAppenderConfig {
                file_path: config.error_file.clone(),
            })?),
        })
    }
}

/// 日志上下文
///
/// 持有所有输出目标、消息存储与订阅者。每次日志调用同步完成：
/// 解析参数，分别渲染终端文本、纯文本与 HTML，再依次写入每个输出目标。
/// 单个目标写入失败不会阻止其它目标的写入。
pub struct LoggingContext {
    appenders: Appenders,
    store: MessageStore,
    console_formatter: Box<dyn LogFormatter>,
    plain_formatter: Box<dyn LogFormatter>,
    html_formatter: Box<dyn LogFormatter>,
    interactive: bool,
}

impl LoggingContext {
    /// 从配置创建 LoggingContext
    pub fn new(config: LoggingConfig) -> Result<Self> {
        let interactive = config
            .interactive
            .unwrap_or_else(|| std::io::stdout().is_terminal());
        let appenders = Appenders::from_config(&config)?;
        Ok(Self::with_appenders(appenders, interactive))
    }

    /// 使用指定的输出器创建 LoggingContext
    pub fn with_appenders(appenders: Appenders, interactive: bool) -> Self {
        Self {
            appenders,
            store: MessageStore::new(),
            console_formatter: Box::new(TextFormatter::from(TextFormatterConfig {
                colored: interactive,
            })),
            plain_formatter: Box::new(TextFormatter::plain()),
            html_formatter: Box::new(HtmlFormatter::new()),
            interactive,
        }
    }

    /// 终端是否为交互式
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// HTML 消息存储
    pub fn store(&self) -> &MessageStore {
        &self.store
    }

    /// 订阅新的 HTML 消息
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&str) -> Result<()> + Send + Sync + 'static,
    {
        self.store.subscribe(callback)
    }

    /// 取消订阅
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }

    /// 记录普通日志
    ///
    /// 普通日志不会失败：输出目标的写入错误只通过 `log` 门面报告，返回解析后的消息
    pub fn log<I>(&self, prefix: Option<&str>, args: I) -> Message
    where
        I: IntoIterator<Item = LogArg>,
    {
        let message = Message::new(args).with_prefix(prefix);

        for failure in self.dispatch(&message, false) {
            ::log::warn!("failed to write log message to {}", failure);
        }

        message
    }

    /// 记录错误日志
    ///
    /// 消息前插入带样式的错误标签，除普通输出目标外还会追加到错误文件。
    /// 所有目标都会尝试写入，任一失败时返回 [`LogError::Sinks`]，其中仍附带转发器，
    /// 可通过 [`LogError::into_relay`] 取出并继续输出原始错误。
    pub fn error<I>(&self, prefix: Option<&str>, args: I) -> Result<ErrorRelay, LogError>
    where
        I: IntoIterator<Item = LogArg>,
    {
        let mut message = Message::new(args).with_prefix(prefix);
        message.prepend(error_label());

        let failures = self.dispatch(&message, true);
        if !failures.is_empty() {
            return Err(LogError::Sinks {
                failures,
                relay: Some(self.relay()),
            });
        }

        Ok(self.relay())
    }

    /// 原始错误信息转发器
    pub fn relay(&self) -> ErrorRelay {
        ErrorRelay {
            error_file: Arc::clone(&self.appenders.error_file),
            error_console: Arc::clone(&self.appenders.error_console),
        }
    }

    /// 刷新所有输出目标
    pub fn flush(&self) -> Result<(), LogError> {
        let sinks: [(SinkKind, &dyn LogAppender); 4] = [
            (SinkKind::Console, self.appenders.console.as_ref()),
            (SinkKind::LogFile, self.appenders.log_file.as_ref()),
            (SinkKind::ErrorFile, self.appenders.error_file.as_ref()),
            (SinkKind::ErrorConsole, self.appenders.error_console.as_ref()),
        ];

        let failures: Vec<SinkFailure> = sinks
            .into_iter()
            .filter_map(|(sink, appender)| {
                appender
                    .flush()
                    .err()
                    .map(|error| SinkFailure { sink, error })
            })
            .collect();

        if failures.is_empty() {
            Ok(())
        } else {
            Err(LogError::sinks(failures))
        }
    }

    /// 渲染消息并依次写入每个输出目标，返回所有失败
    fn dispatch(&self, message: &Message, is_error: bool) -> Vec<SinkFailure> {
        let mut failures = Vec::new();
        let plain = self.plain_formatter.format(message);

        deliver(
            SinkKind::Console,
            &self.console_formatter.format(message),
            self.appenders.console.as_ref(),
            &mut failures,
        );
        deliver(
            SinkKind::LogFile,
            &plain,
            self.appenders.log_file.as_ref(),
            &mut failures,
        );
        deliver(
            SinkKind::MessageStore,
            &self.html_formatter.format(message),
            &self.store,
            &mut failures,
        );

        if is_error {
            deliver(
                SinkKind::ErrorFile,
                &plain,
                self.appenders.error_file.as_ref(),
                &mut failures,
            );
        }

        failures
    }
}

impl Drop for LoggingContext {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            ::log::warn!("failed to flush log sinks: {}", e);
        }
    }
}

fn deliver(
    sink: SinkKind,
    rendered: &Result<String>,
    appender: &dyn LogAppender,
    failures: &mut Vec<SinkFailure>,
) {
    let result = match rendered {
        Ok(text) => appender.append(text),
        Err(e) => Err(anyhow!("failed to render message: {:#}", e)),
    };

    if let Err(error) = result {
        failures.push(SinkFailure { sink, error });
    }
}

/// 错误标签 Token
pub fn error_label() -> Token {
    Token::new(LogValue::from(ERROR_LABEL), style::expand_preset(ERROR_PRESET))
}

/// 原始错误信息转发器
///
/// 不经过解析与样式处理，直接写入错误文件和错误终端，用于输出异常详情
#[derive(Clone)]
pub struct ErrorRelay {
    error_file: Arc<dyn LogAppender>,
    error_console: Arc<dyn LogAppender>,
}

impl fmt::Debug for ErrorRelay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorRelay").finish_non_exhaustive()
    }
}

impl ErrorRelay {
    /// 以空格连接参数后原样写出
    pub fn relay(&self, args: &[&dyn fmt::Display]) -> Result<(), LogError> {
        let text = args
            .iter()
            .map(|arg| arg.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        self.write(&text)
    }

    /// 写出错误及其完整的原因链
    pub fn relay_error(&self, error: &anyhow::Error) -> Result<(), LogError> {
        self.write(&format!("{:?}", error))
    }

    fn write(&self, text: &str) -> Result<(), LogError> {
        let failures: Vec<SinkFailure> = [
            (SinkKind::ErrorFile, &self.error_file),
            (SinkKind::ErrorConsole, &self.error_console),
        ]
        .into_iter()
        .filter_map(|(sink, appender)| {
            appender
                .append(text)
                .err()
                .map(|error| SinkFailure { sink, error })
        })
        .collect();

        if failures.is_empty() {
            Ok(())
        } else {
            Err(LogError::sinks(failures))
        }
    }
}
