use crate::log::appender::LogAppender;
use anyhow::Result;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// 订阅者：每追加一条 HTML 消息调用一次
pub type Subscriber = Arc<dyn Fn(&str) -> Result<()> + Send + Sync>;

/// 订阅标识，用于取消订阅
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Default)]
struct StoreInner {
    entries: Vec<Arc<str>>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_id: u64,
}

/// 消息存储
///
/// 只追加的 HTML 消息序列，追加后按注册顺序同步通知所有订阅者。
/// 单个订阅者返回错误或 panic 不影响存储内容，也不影响后续订阅者。
#[derive(Default)]
pub struct MessageStore {
    inner: Mutex<StoreInner>,
}

impl MessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, StoreInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// 注册订阅者，只会收到注册之后追加的消息
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&str) -> Result<()> + Send + Sync + 'static,
    {
        let mut inner = self.lock();
        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;
        inner.subscribers.push((id, Arc::new(callback)));
        id
    }

    /// 取消订阅，返回订阅者是否存在
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.lock();
        let before = inner.subscribers.len();
        inner.subscribers.retain(|(sid, _)| *sid != id);
        inner.subscribers.len() != before
    }

    /// 追加一条消息并通知订阅者
    ///
    /// 订阅者在释放锁之后调用，回调中可以再次记录日志或读取存储。
    /// 只有单线程调用时通知顺序与存储顺序一致；多个线程同时追加时，
    /// 每条消息仍恰好通知每个订阅者一次，但不同消息之间的通知顺序可能与存储顺序不同
    pub fn push(&self, fragment: &str) {
        let entry: Arc<str> = Arc::from(fragment);
        let subscribers: Vec<Subscriber> = {
            let mut inner = self.lock();
            inner.entries.push(Arc::clone(&entry));
            inner.subscribers.iter().map(|(_, s)| Arc::clone(s)).collect()
        };

        for subscriber in subscribers {
            match catch_unwind(AssertUnwindSafe(|| subscriber(&entry))) {
                Ok(Ok(())) => {}
                Ok(Err(e)) => ::log::error!("message subscriber failed: {}", e),
                Err(_) => ::log::error!("message subscriber panicked"),
            }
        }
    }

    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }

    /// 获取第 index 条消息
    pub fn get(&self, index: usize) -> Option<Arc<str>> {
        self.lock().entries.get(index).cloned()
    }

    /// 当前所有消息的快照
    pub fn entries(&self) -> Vec<Arc<str>> {
        self.lock().entries.clone()
    }

    pub fn subscriber_count(&self) -> usize {
        self.lock().subscribers.len()
    }
}

impl LogAppender for MessageStore {
    fn append(&self, formatted_message: &str) -> Result<()> {
        self.push(formatted_message);
        Ok(())
    }
}
