use std::time::Duration;

use roomcast_client::DispatchError;

use crate::integration::{PROMPT, create_test_handler, init_tracing};
use crate::utils::{joined, joined_params};

#[tokio::test]
async fn test_full_queue_blocks_until_take() {
    init_tracing();

    let handler = create_test_handler(2);
    assert_eq!(handler.config().queue_capacity.get(), handler.queue().capacity());
    handler.dispatch("participantJoined", &joined_params("ana")).await.unwrap();
    handler.dispatch("participantJoined", &joined_params("bob")).await.unwrap();
    assert_eq!(handler.queue().len(), handler.queue().capacity());

    let mut pending = tokio::spawn({
        let handler = handler.clone();
        async move {
            handler
                .dispatch("participantJoined", &joined_params("carol"))
                .await
        }
    });

    let blocked = tokio::time::timeout(Duration::from_millis(100), &mut pending).await;
    assert!(blocked.is_err(), "Put on a full queue must wait");

    // Exactly one take frees the slot the pending put is waiting for.
    assert_eq!(handler.next_event().await, Some(joined("ana")));

    tokio::time::timeout(PROMPT, &mut pending)
        .await
        .expect("Pending put should complete after a take")
        .expect("Producer task panicked")
        .expect("Put should succeed");

    assert_eq!(handler.next_event().await, Some(joined("bob")));
    assert_eq!(handler.next_event().await, Some(joined("carol")));
}

#[tokio::test]
async fn test_shutdown_releases_blocked_put() {
    init_tracing();

    let handler = create_test_handler(1);
    handler.dispatch("participantJoined", &joined_params("ana")).await.unwrap();

    let pending = tokio::spawn({
        let handler = handler.clone();
        async move {
            handler
                .dispatch("participantJoined", &joined_params("bob"))
                .await
        }
    });

    tokio::time::sleep(Duration::from_millis(50)).await;
    handler.shutdown();

    let result = tokio::time::timeout(PROMPT, pending)
        .await
        .expect("Blocked put should be released by shutdown")
        .expect("Producer task panicked");

    match result {
        Err(DispatchError::QueueUnavailable(closed)) => assert_eq!(closed.0, joined("bob")),
        other => panic!("Expected QueueUnavailable, got {:?}", other),
    }
}
