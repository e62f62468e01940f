mod dispatch_error;
mod error_reply;
mod handler_config;
mod notification_handler;

pub use dispatch_error::*;
pub use error_reply::*;
pub use handler_config::*;
pub use notification_handler::*;
