mod console_appender;
mod file_appender;
mod message_store;
mod trait_;

pub use console_appender::{ConsoleAppender, ConsoleAppenderConfig, Target};
pub use file_appender::{FileAppender, FileAppenderConfig};
pub use message_store::{MessageStore, Subscriber, SubscriptionId};
pub use trait_::LogAppender;
