//src/bag/src/notify.rs
//! 变更通知：登记顺序的同步多播。

use std::fmt;

/// 订阅凭据（退订时使用）
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// 同步多播通知器
///
/// 派发在触发变更的调用内进行：按登记顺序逐个执行监听器，全部
/// 执行完毕后触发方才返回。派发期间持有监听列表的独占借用，
/// 监听器无法在回调里订阅或退订同一个通知器，通知期间改表的
/// 重入危害因此在编译期就被挡住。
pub struct ChangeNotifier<E> {
    listeners: Vec<(ListenerId, Box<dyn FnMut(&E)>)>,
    next_id: u64,
}

impl<E> ChangeNotifier<E> {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
            next_id: 1,
        }
    }

    /// 登记监听器，返回退订凭据；登记顺序即派发顺序
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&E) + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// 退订；凭据不存在时返回 false
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// 按登记顺序同步派发事件
    pub fn notify(&mut self, event: &E) {
        for (_, listener) in &mut self.listeners {
            listener(event);
        }
    }

    /// 当前监听器数量
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl<E> Default for ChangeNotifier<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for ChangeNotifier<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
