use std::num::NonZeroUsize;

/// Capacity of the notification queue when nothing else is configured.
pub const DEFAULT_QUEUE_CAPACITY: NonZeroUsize = NonZeroUsize::new(100).unwrap();

/// Настройки обработчика серверных уведомлений.
#[derive(Debug, Clone)]
pub struct HandlerConfig {
    /// How many classified events may wait for the consumer before
    /// `on_notification` starts blocking the transport.
    pub queue_capacity: NonZeroUsize,
    /// Report rejected notifications back through the transport's error reply.
    pub reply_on_error: bool,
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self {
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            reply_on_error: true,
        }
    }
}
