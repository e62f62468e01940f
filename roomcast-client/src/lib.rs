mod handler;
mod queue;

pub use handler::*;
pub use queue::*;
