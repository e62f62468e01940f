use std::time::Duration;

use roomcast_client::DispatchError;
use tokio::sync::oneshot;

use crate::integration::{PROMPT, create_test_handler, init_tracing};
use crate::utils::{MockErrorReply, joined, joined_params};

#[tokio::test]
async fn test_cancel_signal_interrupts_take() {
    init_tracing();

    let handler = create_test_handler(4);
    let (cancel_tx, cancel_rx) = oneshot::channel::<()>();

    let consumer = tokio::spawn({
        let handler = handler.clone();
        async move { handler.next_event_until(cancel_rx).await }
    });

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(!consumer.is_finished(), "Consumer should be waiting");
    cancel_tx.send(()).unwrap();

    let event = tokio::time::timeout(PROMPT, consumer)
        .await
        .expect("Cancelled take should return promptly")
        .expect("Consumer task panicked");
    assert_eq!(event, None);

    // Cancelling a take does not close the handler.
    handler
        .dispatch("participantJoined", &joined_params("ana"))
        .await
        .unwrap();
    assert_eq!(handler.next_event().await, Some(joined("ana")));
}

#[tokio::test]
async fn test_shutdown_wakes_blocked_consumer() {
    init_tracing();

    let handler = create_test_handler(4);

    let consumer = tokio::spawn({
        let handler = handler.clone();
        async move { handler.next_event().await }
    });

    tokio::time::sleep(Duration::from_millis(50)).await;
    handler.shutdown();

    let event = tokio::time::timeout(PROMPT, consumer)
        .await
        .expect("Shutdown should wake the consumer")
        .expect("Consumer task panicked");
    assert_eq!(event, None);

    let reply = MockErrorReply::new();
    handler
        .on_notification("participantJoined", &joined_params("ana"), &reply)
        .await;
    assert!(handler.queue().is_empty());
    assert!(matches!(
        handler.dispatch("participantJoined", &joined_params("ana")).await,
        Err(DispatchError::QueueUnavailable(_))
    ));
    assert_eq!(handler.next_event().await, None);
}

#[tokio::test]
async fn test_cancel_fired_between_takes_is_not_lost() {
    init_tracing();

    let handler = create_test_handler(4);
    let (cancel_tx, mut cancel_rx) = oneshot::channel::<()>();

    handler
        .dispatch("participantJoined", &joined_params("ana"))
        .await
        .unwrap();
    assert_eq!(
        handler.next_event_until(&mut cancel_rx).await,
        Some(joined("ana"))
    );

    // Nobody is waiting on the signal while the consumer handles the event.
    cancel_tx.send(()).unwrap();

    let event = tokio::time::timeout(PROMPT, handler.next_event_until(&mut cancel_rx))
        .await
        .expect("Earlier cancel should end the next take");
    assert_eq!(event, None);
}
