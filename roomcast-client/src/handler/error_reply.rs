use async_trait::async_trait;
use thiserror::Error;

/// The transport refused or failed to deliver an error reply.
#[derive(Debug, Error)]
#[error("transport rejected error reply: {0}")]
pub struct TransportRejected(pub String);

/// Трейт, который реализует транспорт (JSON-RPC сессия), чтобы обработчик
/// мог сообщить серверу об отклоненном уведомлении.
#[async_trait]
pub trait ErrorReply: Send + Sync {
    /// Отправить ошибку в ответ на текущее сообщение.
    async fn send_error(&self, code: i64, reason: String) -> Result<(), TransportRejected>;
}

/// For transports where inbound notifications cannot be answered.
pub struct NoReply;

#[async_trait]
impl ErrorReply for NoReply {
    async fn send_error(&self, _code: i64, _reason: String) -> Result<(), TransportRejected> {
        Ok(())
    }
}
