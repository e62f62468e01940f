mod test_backpressure;
mod test_shutdown_during_puts;
mod test_take_cancellation;
