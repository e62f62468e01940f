use std::time::Duration;

use crate::integration::{PROMPT, create_test_handler, init_tracing};
use crate::utils::joined;

/// Every put that reports success must reach the consumer, even when the
/// queue shuts down while producers are mid-put.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_accepted_events_survive_shutdown() {
    init_tracing();

    const RUNS: u64 = 200;
    const PRODUCERS: usize = 3;

    for run in 0..RUNS {
        let handler = create_test_handler(4);

        let producers: Vec<_> = (0..PRODUCERS)
            .map(|p| {
                let handler = handler.clone();
                tokio::task::spawn_blocking(move || {
                    let mut accepted = 0usize;
                    let user = format!("producer-{}", p);
                    while handler.queue().put_blocking(joined(&user)).is_ok() {
                        accepted += 1;
                    }
                    accepted
                })
            })
            .collect();

        let consumer = tokio::spawn({
            let handler = handler.clone();
            async move {
                let mut taken = 0usize;
                while handler.next_event().await.is_some() {
                    taken += 1;
                }
                taken
            }
        });

        tokio::time::sleep(Duration::from_micros(50 + run % 200)).await;
        handler.shutdown();

        let mut accepted = 0;
        for producer in futures::future::join_all(producers).await {
            accepted += producer.expect("Producer panicked");
        }
        let taken = tokio::time::timeout(PROMPT, consumer)
            .await
            .expect("Consumer should finish after shutdown")
            .expect("Consumer panicked");

        assert_eq!(accepted, taken, "run {}: accepted events went missing", run);
    }
}
