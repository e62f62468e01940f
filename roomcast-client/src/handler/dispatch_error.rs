use crate::queue::QueueClosed;
use roomcast_core::ClassificationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error(transparent)]
    Classification(#[from] ClassificationError),

    /// The queue was shut down before the event could be delivered.
    #[error("notification dropped: {0}")]
    QueueUnavailable(#[from] QueueClosed),
}
