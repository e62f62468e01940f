use roomcast_core::RoomEvent;
use std::future::Future;
use std::num::NonZeroUsize;
use thiserror::Error;
use tokio::sync::{Mutex, mpsc, watch};
use tracing::{debug, info};

/// Returned by [`DeliveryQueue::put`] once the queue is shut down.
/// Carries back the event that could not be delivered.
#[derive(Debug, Error)]
#[error("delivery queue is shut down")]
pub struct QueueClosed(pub RoomEvent);

/// Bounded FIFO between the transport (producers) and a single consumer.
///
/// `put` waits while the queue is full, which pushes back on whoever delivers
/// notifications. `take` waits while it is empty. After [`shutdown`] every
/// put fails with [`QueueClosed`], and `take` hands out what is still buffered
/// before returning `None`.
///
/// [`shutdown`]: DeliveryQueue::shutdown
pub struct DeliveryQueue {
    tx: mpsc::Sender<RoomEvent>,
    /// Единственный потребитель; мьютекс только сериализует вызовы `take`.
    rx: Mutex<mpsc::Receiver<RoomEvent>>,
    shutdown_tx: watch::Sender<bool>,
}

impl DeliveryQueue {
    pub fn new(capacity: NonZeroUsize) -> Self {
        let (tx, rx) = mpsc::channel(capacity.get());
        let (shutdown_tx, _) = watch::channel(false);

        Self {
            tx,
            rx: Mutex::new(rx),
            shutdown_tx,
        }
    }

    /// Appends `event`, waiting for a free slot if the queue is full.
    pub async fn put(&self, event: RoomEvent) -> Result<(), QueueClosed> {
        let mut shutdown = self.shutdown_tx.subscribe();
        if *shutdown.borrow() {
            return Err(QueueClosed(event));
        }

        let permit = tokio::select! {
            permit = self.tx.reserve() => permit,
            _ = closed(&mut shutdown) => return Err(QueueClosed(event)),
        };
        let Ok(permit) = permit else {
            return Err(QueueClosed(event));
        };

        debug!("Enqueued notification {}", event);
        permit.send(event);
        Ok(())
    }

    /// [`put`](Self::put) for callers running on a plain thread.
    ///
    /// Must not be called from inside an async task: it parks the calling
    /// thread until the event is queued.
    pub fn put_blocking(&self, event: RoomEvent) -> Result<(), QueueClosed> {
        futures::executor::block_on(self.put(event))
    }

    /// Removes and returns the oldest event, waiting while the queue is empty.
    ///
    /// Returns `None` once the queue is shut down and drained.
    pub async fn take(&self) -> Option<RoomEvent> {
        let mut shutdown = self.shutdown_tx.subscribe();
        let mut rx = self.rx.lock().await;

        let event = tokio::select! {
            biased;
            event = rx.recv() => event,
            _ = closed(&mut shutdown) => {
                // Puts already holding a permit still land; `recv` waits for
                // them before reporting the end of the stream.
                rx.close();
                rx.recv().await
            }
        };

        match &event {
            Some(event) => debug!("Dequeued notification {}", event),
            None => info!("Delivery queue closed, no more notifications"),
        }
        event
    }

    /// Like [`take`](Self::take), but gives up with `None` as soon as
    /// `cancel` completes. Buffered events are left for the next call.
    pub async fn take_until<F>(&self, cancel: F) -> Option<RoomEvent>
    where
        F: Future,
    {
        tokio::select! {
            event = self.take() => event,
            _ = cancel => {
                info!("Interrupted while polling notifications' queue");
                None
            }
        }
    }

    /// Stops accepting events and wakes every waiter. Idempotent.
    pub fn shutdown(&self) {
        if self.shutdown_tx.send_replace(true) {
            return;
        }

        // A consumer blocked in `take` holds the lock and closes the
        // receiver itself once it sees the flag.
        if let Ok(mut rx) = self.rx.try_lock() {
            rx.close();
        }
        info!("Delivery queue shut down");
    }

    pub fn is_shut_down(&self) -> bool {
        *self.shutdown_tx.borrow()
    }

    pub fn capacity(&self) -> usize {
        self.tx.max_capacity()
    }

    /// Number of occupied slots: buffered events plus slots reserved by puts
    /// that have not handed their event over yet. It can briefly exceed what
    /// `take` would return right now.
    pub fn len(&self) -> usize {
        self.tx.max_capacity() - self.tx.capacity()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Resolves once the shutdown flag is raised.
async fn closed(shutdown: &mut watch::Receiver<bool>) {
    while !*shutdown.borrow_and_update() {
        // The sender lives as long as the queue, so this never errors in practice.
        if shutdown.changed().await.is_err() {
            return;
        }
    }
}
