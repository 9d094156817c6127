mod event;
pub use event::*;

mod decoder;
pub(crate) use decoder::*;

use crate::file::MetaEvent;
use alloc::{string::String, vec::Vec};

#[doc = r#"
A decoded `MTrk` chunk

Besides its events, a track records the total of its delta times and the
tempo of its last set tempo event.
"#]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Track {
    tag: String,
    size: u32,
    ticks_duration: u32,
    tempo: u32,
    events: Vec<TrackEvent>,
}

impl Track {
    pub(crate) fn new(
        tag: String,
        size: u32,
        ticks_duration: u32,
        tempo: u32,
        events: Vec<TrackEvent>,
    ) -> Self {
        Self {
            tag,
            size,
            ticks_duration,
            tempo,
            events,
        }
    }

    /// The chunk tag, always `MTrk`
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The chunk length declared in the file
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// The sum of all delta times in the track
    pub const fn ticks_duration(&self) -> u32 {
        self.ticks_duration
    }

    /// Microseconds per quarter note of the last set tempo event, or `0`
    /// if the track has none.
    pub const fn tempo(&self) -> u32 {
        self.tempo
    }

    /// The events, in file order
    pub fn events(&self) -> &[TrackEvent] {
        &self.events
    }

    /// Take the events
    pub fn into_events(self) -> Vec<TrackEvent> {
        self.events
    }

    /// True if the last event is an end of track meta event
    pub fn end_of_track_present(&self) -> bool {
        matches!(
            self.events.last().map(TrackEvent::message),
            Some(TrackMessage::Meta(MetaEvent::EndOfTrack))
        )
    }

    /// The text of the first sequence/track name event
    pub fn name(&self) -> Option<&str> {
        self.events.iter().find_map(|event| match event.message() {
            TrackMessage::Meta(MetaEvent::Sequence(name)) => Some(name.as_str()),
            _ => None,
        })
    }
}
