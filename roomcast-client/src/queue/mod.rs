mod delivery_queue;

pub use delivery_queue::*;
