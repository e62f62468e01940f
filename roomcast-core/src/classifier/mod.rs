//! Turns raw server notifications into [`RoomEvent`]s.
//!
//! Each [`Method`] owns one extraction function. The function reads the
//! method's params by name through a [`ParamReader`] and either builds the
//! complete event or fails on the first missing or mistyped param; a partially
//! read notification never becomes an event.

mod error;
mod params;

pub use error::{ClassificationError, INVALID_PARAMS, METHOD_NOT_FOUND};
pub use params::ParamReader;

use crate::model::{Method, RoomEvent};
use serde_json::Value;
use tracing::debug;

type Extractor = fn(&ParamReader<'_>) -> Result<RoomEvent, ClassificationError>;

/// Classifies a notification by method name and extracts its typed payload.
///
/// Unknown (or empty) method names are reported as
/// [`ClassificationError::UnknownMethod`] rather than treated as fatal, so
/// newer servers can add notifications without breaking older clients.
pub fn classify(method: &str, params: &Value) -> Result<RoomEvent, ClassificationError> {
    let Some(known) = Method::from_name(method) else {
        return Err(ClassificationError::UnknownMethod {
            method: method.to_owned(),
        });
    };

    let event = extractor(known)(&ParamReader::new(known, params))?;
    debug!("Recvd {} event: {}", known, event);

    Ok(event)
}

fn extractor(method: Method) -> Extractor {
    match method {
        Method::IceCandidate => ice_candidate,
        Method::MediaError => media_error,
        Method::ParticipantJoined => participant_joined,
        Method::ParticipantLeft => participant_left,
        Method::ParticipantEvicted => participant_evicted,
        Method::ParticipantPublished => participant_published,
        Method::ParticipantUnpublished => participant_unpublished,
        Method::RoomClosed => room_closed,
        Method::SendMessage => participant_sent_message,
    }
}

fn ice_candidate(params: &ParamReader<'_>) -> Result<RoomEvent, ClassificationError> {
    Ok(RoomEvent::IceCandidate {
        candidate: params.string("candidate")?,
        sdp_mid: params.string("sdpMid")?,
        sdp_m_line_index: params.integer("sdpMLineIndex")?,
        endpoint_name: params.string("endpointName")?,
    })
}

fn media_error(params: &ParamReader<'_>) -> Result<RoomEvent, ClassificationError> {
    Ok(RoomEvent::MediaError {
        description: params.string("error")?,
    })
}

fn participant_joined(params: &ParamReader<'_>) -> Result<RoomEvent, ClassificationError> {
    Ok(RoomEvent::ParticipantJoined {
        user_id: params.string("user")?,
    })
}

fn participant_left(params: &ParamReader<'_>) -> Result<RoomEvent, ClassificationError> {
    Ok(RoomEvent::ParticipantLeft {
        user_name: params.string("name")?,
    })
}

fn participant_evicted(_: &ParamReader<'_>) -> Result<RoomEvent, ClassificationError> {
    Ok(RoomEvent::ParticipantEvicted)
}

fn participant_published(params: &ParamReader<'_>) -> Result<RoomEvent, ClassificationError> {
    Ok(RoomEvent::ParticipantPublished {
        user_id: params.string("user")?,
        stream_ids: params.object_strings("streams", "streamId")?,
    })
}

fn participant_unpublished(params: &ParamReader<'_>) -> Result<RoomEvent, ClassificationError> {
    Ok(RoomEvent::ParticipantUnpublished {
        user_name: params.string("name")?,
    })
}

fn room_closed(params: &ParamReader<'_>) -> Result<RoomEvent, ClassificationError> {
    Ok(RoomEvent::RoomClosed {
        room_name: params.string("room")?,
    })
}

fn participant_sent_message(params: &ParamReader<'_>) -> Result<RoomEvent, ClassificationError> {
    Ok(RoomEvent::ParticipantSentMessage {
        room_name: params.string("room")?,
        user_name: params.string("user")?,
        message: params.string("message")?,
    })
}
