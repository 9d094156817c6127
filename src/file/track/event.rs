use crate::{
    file::MetaEvent,
    message::{channel::ChannelVoiceMessage, system_exclusive::SysexEvent},
};

#[doc = r#"
An event in a track, along with its timing

`delta_time` is read from the file; `absolute_time` is the sum of every
delta time in the track up to and including this event.
"#]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackEvent {
    delta_time: u32,
    absolute_time: u32,
    message: TrackMessage,
}

impl TrackEvent {
    /// Create a new track event
    pub const fn new(delta_time: u32, absolute_time: u32, message: TrackMessage) -> Self {
        Self {
            delta_time,
            absolute_time,
            message,
        }
    }
    /// Ticks since the previous event in the track
    pub const fn delta_time(&self) -> u32 {
        self.delta_time
    }
    /// Ticks since the start of the track
    pub const fn absolute_time(&self) -> u32 {
        self.absolute_time
    }
    /// The event's message
    pub const fn message(&self) -> &TrackMessage {
        &self.message
    }
    /// Take the message, dropping the timing
    pub fn into_message(self) -> TrackMessage {
        self.message
    }
}

/// The three families of events a track can hold
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrackMessage {
    /// A channel voice message, `0x80..=0xEF`
    ChannelVoice(ChannelVoiceMessage),
    /// A meta event, `0xFF`
    Meta(MetaEvent),
    /// A system exclusive event, `0xF0` or `0xF7`
    SystemExclusive(SysexEvent),
}

impl TrackMessage {
    /// Some if this is a channel voice message
    pub const fn channel_voice(&self) -> Option<&ChannelVoiceMessage> {
        match self {
            Self::ChannelVoice(msg) => Some(msg),
            _ => None,
        }
    }
    /// Some if this is a meta event
    pub const fn meta(&self) -> Option<&MetaEvent> {
        match self {
            Self::Meta(meta) => Some(meta),
            _ => None,
        }
    }
    /// Some if this is a system exclusive event
    pub const fn system_exclusive(&self) -> Option<&SysexEvent> {
        match self {
            Self::SystemExclusive(sysex) => Some(sysex),
            _ => None,
        }
    }
}

impl From<ChannelVoiceMessage> for TrackMessage {
    fn from(value: ChannelVoiceMessage) -> Self {
        Self::ChannelVoice(value)
    }
}

impl From<MetaEvent> for TrackMessage {
    fn from(value: MetaEvent) -> Self {
        Self::Meta(value)
    }
}

impl From<SysexEvent> for TrackMessage {
    fn from(value: SysexEvent) -> Self {
        Self::SystemExclusive(value)
    }
}
