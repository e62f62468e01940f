pub mod classifier;
pub mod model;

pub use classifier::{ClassificationError, classify};
pub use model::{Method, Notification, ParamKind, ParamSpec, RoomEvent};
