use crate::handler::{DispatchError, ErrorReply, HandlerConfig};
use crate::queue::DeliveryQueue;
use roomcast_core::{ClassificationError, RoomEvent, classify};
use serde_json::Value;
use std::future::Future;
use tracing::{error, warn};

/// Receives server notifications from the transport and queues them, typed,
/// for a single consumer.
///
/// The transport calls [`on_notification`](Self::on_notification) once per
/// inbound message; the consumer loops on [`next_event`](Self::next_event).
pub struct NotificationHandler {
    queue: DeliveryQueue,
    config: HandlerConfig,
}

impl NotificationHandler {
    pub fn new() -> Self {
        Self::with_config(HandlerConfig::default())
    }

    pub fn with_config(config: HandlerConfig) -> Self {
        Self {
            queue: DeliveryQueue::new(config.queue_capacity),
            config,
        }
    }

    /// Classifies and enqueues one notification, surfacing every failure.
    ///
    /// Nothing is enqueued when classification fails. Waits while the queue
    /// is full.
    pub async fn dispatch(&self, method: &str, params: &Value) -> Result<(), DispatchError> {
        let event = classify(method, params)?;
        self.queue.put(event).await?;
        Ok(())
    }

    /// [`dispatch`](Self::dispatch) for a transport running on its own thread.
    pub fn dispatch_blocking(&self, method: &str, params: &Value) -> Result<(), DispatchError> {
        let event = classify(method, params)?;
        self.queue.put_blocking(event)?;
        Ok(())
    }

    /// Transport entry point. Never fails: rejected notifications are logged
    /// and, if configured, reported through `reply`.
    pub async fn on_notification(&self, method: &str, params: &Value, reply: &dyn ErrorReply) {
        match self.dispatch(method, params).await {
            Ok(()) => {}
            Err(DispatchError::Classification(e)) => self.reject(e, params, reply).await,
            Err(DispatchError::QueueUnavailable(e)) => {
                error!("Dropped '{}' notification: {}", method, e);
            }
        }
    }

    /// [`on_notification`](Self::on_notification) for a transport running on
    /// its own thread. Must not be called from inside an async task.
    pub fn on_notification_blocking(&self, method: &str, params: &Value, reply: &dyn ErrorReply) {
        futures::executor::block_on(self.on_notification(method, params, reply));
    }

    /// Waits for the next event. `None` means the handler was shut down.
    pub async fn next_event(&self) -> Option<RoomEvent> {
        self.queue.take().await
    }

    /// Waits for the next event until `cancel` completes.
    pub async fn next_event_until<F>(&self, cancel: F) -> Option<RoomEvent>
    where
        F: Future,
    {
        self.queue.take_until(cancel).await
    }

    pub fn shutdown(&self) {
        self.queue.shutdown();
    }

    pub fn queue(&self) -> &DeliveryQueue {
        &self.queue
    }

    pub fn config(&self) -> &HandlerConfig {
        &self.config
    }

    async fn reject(&self, e: ClassificationError, params: &Value, reply: &dyn ErrorReply) {
        match &e {
            ClassificationError::UnknownMethod { method } => {
                error!("Unrecognized notification '{}' {}", method, params);
            }
            ClassificationError::MissingOrMistypedField { .. } => {
                error!("Exception processing notification {}: {}", params, e);
            }
        }

        if !self.config.reply_on_error {
            return;
        }
        if let Err(reply_err) = reply.send_error(e.code(), e.reason()).await {
            warn!("Failed to report rejected '{}': {}", e.method(), reply_err);
        }
    }
}

impl Default for NotificationHandler {
    fn default() -> Self {
        Self::new()
    }
}
