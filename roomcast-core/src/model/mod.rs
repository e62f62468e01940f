mod event;
mod method;
mod notification;

pub use event::RoomEvent;
pub use method::{Method, ParamKind, ParamSpec, UnknownMethodName};
pub use notification::Notification;
