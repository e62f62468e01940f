pub use roomcast_core::{ClassificationError, RoomEvent, classify};

pub mod model {
    pub use roomcast_core::model::*;
}

pub mod classifier {
    pub use roomcast_core::classifier::*;
}

#[cfg(feature = "client")]
pub mod client {
    pub use roomcast_client::*;
}
