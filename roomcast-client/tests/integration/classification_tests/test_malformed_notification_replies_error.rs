use std::num::NonZeroUsize;

use roomcast_client::{HandlerConfig, NotificationHandler};
use roomcast_core::classifier::INVALID_PARAMS;
use serde_json::json;

use crate::integration::{PROMPT, create_test_handler, init_tracing};
use crate::utils::{MockErrorReply, joined, joined_params};

#[tokio::test]
async fn test_malformed_notification_replies_error() {
    init_tracing();

    let handler = create_test_handler(4);
    let reply = MockErrorReply::new();

    handler
        .on_notification("mediaError", &json!({ "description": "lost" }), &reply)
        .await;
    assert!(handler.queue().is_empty());

    let sent = reply.sent().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].code, INVALID_PARAMS);
    assert!(
        sent[0].reason.contains("'error'"),
        "Reason should name the field: {}",
        sent[0].reason
    );
}

#[tokio::test]
async fn test_reply_can_be_disabled() {
    init_tracing();

    let handler = NotificationHandler::with_config(HandlerConfig {
        queue_capacity: NonZeroUsize::new(4).unwrap(),
        reply_on_error: false,
    });
    let reply = MockErrorReply::new();

    handler
        .on_notification("roomClosed", &json!({ "room": 42 }), &reply)
        .await;

    assert!(handler.queue().is_empty());
    assert!(reply.sent().await.is_empty());
}

#[tokio::test]
async fn test_rejected_reply_does_not_stop_delivery() {
    init_tracing();

    let handler = create_test_handler(4);
    let reply = MockErrorReply::failing();

    handler
        .on_notification("participantPublished", &json!({ "user": "ana" }), &reply)
        .await;
    handler
        .on_notification("participantJoined", &joined_params("ana"), &reply)
        .await;

    let event = tokio::time::timeout(PROMPT, handler.next_event())
        .await
        .expect("Timed out waiting for event");
    assert_eq!(event, Some(joined("ana")));
    assert_eq!(reply.sent().await.len(), 1);
}
