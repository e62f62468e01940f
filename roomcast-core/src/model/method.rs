use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Shape of a single notification param as it appears on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ParamKind {
    String,
    Integer,
    /// Array of objects, each carrying the named string field.
    ObjectArray { item_field: &'static str },
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => write!(f, "string"),
            Self::Integer => write!(f, "int"),
            Self::ObjectArray { item_field } => write!(f, "array<{{{}:string}}>", item_field),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamKind,
}

impl ParamSpec {
    const fn string(name: &'static str) -> Self {
        Self {
            name,
            kind: ParamKind::String,
        }
    }

    const fn integer(name: &'static str) -> Self {
        Self {
            name,
            kind: ParamKind::Integer,
        }
    }

    const fn objects(name: &'static str, item_field: &'static str) -> Self {
        Self {
            name,
            kind: ParamKind::ObjectArray { item_field },
        }
    }
}

/// Server notification methods understood by the client.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Method {
    IceCandidate,
    MediaError,
    ParticipantJoined,
    ParticipantLeft,
    ParticipantEvicted,
    ParticipantPublished,
    ParticipantUnpublished,
    RoomClosed,
    SendMessage,
}

impl Method {
    pub const ALL: [Method; 9] = [
        Method::IceCandidate,
        Method::MediaError,
        Method::ParticipantJoined,
        Method::ParticipantLeft,
        Method::ParticipantEvicted,
        Method::ParticipantPublished,
        Method::ParticipantUnpublished,
        Method::RoomClosed,
        Method::SendMessage,
    ];

    /// Wire name of the method.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IceCandidate => "iceCandidate",
            Self::MediaError => "mediaError",
            Self::ParticipantJoined => "participantJoined",
            Self::ParticipantLeft => "participantLeft",
            Self::ParticipantEvicted => "participantEvicted",
            Self::ParticipantPublished => "participantPublished",
            Self::ParticipantUnpublished => "participantUnpublished",
            Self::RoomClosed => "roomClosed",
            Self::SendMessage => "sendMessage",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == name)
    }

    /// Required params, in the order they are read.
    pub fn params(&self) -> &'static [ParamSpec] {
        match self {
            Self::IceCandidate => ICE_CANDIDATE_PARAMS,
            Self::MediaError => MEDIA_ERROR_PARAMS,
            Self::ParticipantJoined => PARTICIPANT_JOINED_PARAMS,
            Self::ParticipantLeft => PARTICIPANT_LEFT_PARAMS,
            Self::ParticipantEvicted => &[],
            Self::ParticipantPublished => PARTICIPANT_PUBLISHED_PARAMS,
            Self::ParticipantUnpublished => PARTICIPANT_UNPUBLISHED_PARAMS,
            Self::RoomClosed => ROOM_CLOSED_PARAMS,
            Self::SendMessage => SEND_MESSAGE_PARAMS,
        }
    }
}

const ICE_CANDIDATE_PARAMS: &[ParamSpec] = &[
    ParamSpec::string("candidate"),
    ParamSpec::string("sdpMid"),
    ParamSpec::integer("sdpMLineIndex"),
    ParamSpec::string("endpointName"),
];
const MEDIA_ERROR_PARAMS: &[ParamSpec] = &[ParamSpec::string("error")];
const PARTICIPANT_JOINED_PARAMS: &[ParamSpec] = &[ParamSpec::string("user")];
const PARTICIPANT_LEFT_PARAMS: &[ParamSpec] = &[ParamSpec::string("name")];
const PARTICIPANT_PUBLISHED_PARAMS: &[ParamSpec] = &[
    ParamSpec::string("user"),
    ParamSpec::objects("streams", "streamId"),
];
const PARTICIPANT_UNPUBLISHED_PARAMS: &[ParamSpec] = &[ParamSpec::string("name")];
const ROOM_CLOSED_PARAMS: &[ParamSpec] = &[ParamSpec::string("room")];
const SEND_MESSAGE_PARAMS: &[ParamSpec] = &[
    ParamSpec::string("room"),
    ParamSpec::string("user"),
    ParamSpec::string("message"),
];

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown method '{0}'")]
pub struct UnknownMethodName(pub String);

impl FromStr for Method {
    type Err = UnknownMethodName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownMethodName(s.to_owned()))
    }
}
