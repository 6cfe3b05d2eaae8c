use crate::log::appender::ConsoleAppenderConfig;
use anyhow::Result;
use serde::Deserialize;
use smart_default::SmartDefault;

/// LoggingContext 配置
///
/// # 示例
///
/// ```ignore
/// let config = LoggingConfig::from_json(r#"
///     {
///         log_file: "logs/log.txt",
///         error_file: "logs/err.txt",
///         interactive: false,
///     }
/// "#)?;
/// let context = LoggingContext::new(config)?;
/// ```
#[derive(Debug, Clone, Deserialize, SmartDefault, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// 全部消息的纯文本日志文件
    #[default = "log.txt"]
    pub log_file: String,

    /// 错误消息的纯文本日志文件
    #[default = "err.txt"]
    pub error_file: String,

    /// 终端是否为交互式，未配置时根据 stdout 是否为终端自动判断
    pub interactive: Option<bool>,

    /// 普通消息的终端输出
    #[default(ConsoleAppenderConfig::stdout())]
    pub console: ConsoleAppenderConfig,

    /// 原始错误信息的终端输出
    #[default(ConsoleAppenderConfig::stderr())]
    pub error_console: ConsoleAppenderConfig,
}

impl LoggingConfig {
    /// 从 JSON 字符串创建配置（支持 JSON5 格式）
    pub fn from_json(json_str: &str) -> Result<Self> {
        Ok(json5::from_str(json_str)?)
    }

    /// 从 YAML 字符串创建配置
    pub fn from_yaml(yaml_str: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml_str)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::appender::Target;

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.log_file, "log.txt");
        assert_eq!(config.error_file, "err.txt");
        assert_eq!(config.interactive, None);
        assert_eq!(config.console.target, Target::Stdout);
        assert_eq!(config.error_console.target, Target::Stderr);
    }

    #[test]
    fn test_from_json5() -> Result<()> {
        let config = LoggingConfig::from_json(
            r#"
            {
                // 注释
                log_file: "/var/log/app/log.txt",
                interactive: false,
                console: { target: "stderr" },
            }
            "#,
        )?;
        assert_eq!(config.log_file, "/var/log/app/log.txt");
        assert_eq!(config.error_file, "err.txt");
        assert_eq!(config.interactive, Some(false));
        assert_eq!(config.console.target, Target::Stderr);
        Ok(())
    }

    #[test]
    fn test_from_yaml() -> Result<()> {
        let config = LoggingConfig::from_yaml(
            r#"
log_file: a.txt
error_file: b.txt
interactive: true
"#,
        )?;
        assert_eq!(config.log_file, "a.txt");
        assert_eq!(config.error_file, "b.txt");
        assert_eq!(config.interactive, Some(true));
        assert_eq!(config.error_console.target, Target::Stderr);
        Ok(())
    }

    #[test]
    fn test_invalid_config() {
        assert!(LoggingConfig::from_json("{ log_file: 42 }").is_err());
        assert!(LoggingConfig::from_yaml("interactive: [").is_err());
    }
}
