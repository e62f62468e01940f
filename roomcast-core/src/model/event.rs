use crate::model::method::Method;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Typed server notification, one variant per [`Method`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data")]
pub enum RoomEvent {
    IceCandidate {
        candidate: String,
        sdp_mid: String,
        sdp_m_line_index: i32,
        endpoint_name: String,
    },
    MediaError {
        description: String,
    },
    ParticipantJoined {
        user_id: String,
    },
    ParticipantLeft {
        user_name: String,
    },
    /// The local participant was removed from the room by the server.
    ParticipantEvicted,
    ParticipantPublished {
        user_id: String,
        /// Stream ids in the order the server listed them.
        stream_ids: Vec<String>,
    },
    ParticipantUnpublished {
        user_name: String,
    },
    RoomClosed {
        room_name: String,
    },
    ParticipantSentMessage {
        room_name: String,
        user_name: String,
        message: String,
    },
}

impl RoomEvent {
    /// Method that produces this kind of event.
    pub fn method(&self) -> Method {
        match self {
            Self::IceCandidate { .. } => Method::IceCandidate,
            Self::MediaError { .. } => Method::MediaError,
            Self::ParticipantJoined { .. } => Method::ParticipantJoined,
            Self::ParticipantLeft { .. } => Method::ParticipantLeft,
            Self::ParticipantEvicted => Method::ParticipantEvicted,
            Self::ParticipantPublished { .. } => Method::ParticipantPublished,
            Self::ParticipantUnpublished { .. } => Method::ParticipantUnpublished,
            Self::RoomClosed { .. } => Method::RoomClosed,
            Self::ParticipantSentMessage { .. } => Method::SendMessage,
        }
    }
}

impl fmt::Display for RoomEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IceCandidate {
                candidate,
                sdp_mid,
                sdp_m_line_index,
                endpoint_name,
            } => write!(
                f,
                "ice candidate for '{}' [{}:{}] {}",
                endpoint_name, sdp_mid, sdp_m_line_index, candidate
            ),
            Self::MediaError { description } => write!(f, "media error: {}", description),
            Self::ParticipantJoined { user_id } => write!(f, "'{}' joined", user_id),
            Self::ParticipantLeft { user_name } => write!(f, "'{}' left", user_name),
            Self::ParticipantEvicted => write!(f, "evicted from room"),
            Self::ParticipantPublished {
                user_id,
                stream_ids,
            } => write!(f, "'{}' published [{}]", user_id, stream_ids.join(", ")),
            Self::ParticipantUnpublished { user_name } => {
                write!(f, "'{}' unpublished", user_name)
            }
            Self::RoomClosed { room_name } => write!(f, "room '{}' closed", room_name),
            Self::ParticipantSentMessage {
                room_name,
                user_name,
                message,
            } => write!(f, "'{}' in '{}': {}", user_name, room_name, message),
        }
    }
}
