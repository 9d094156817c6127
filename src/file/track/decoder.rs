use super::{Track, TrackEvent, TrackMessage};
use crate::{
    ChunkError, TrackError,
    file::MetaEvent,
    message::{channel::ChannelVoiceMessage, system_exclusive::SysexEvent},
    reader::{Chunk, ReadResult, Reader, ReaderError, ReaderErrorKind, inv_data},
};
use alloc::vec::Vec;

/// Decodes the events of one track chunk.
///
/// Running status, absolute time and tempo all start over for every track.
pub(crate) struct TrackDecoder<'a> {
    reader: Reader<'a>,
    running_status: Option<u8>,
    absolute_time: u32,
    tempo: u32,
}

impl<'a> TrackDecoder<'a> {
    fn new(chunk: &Chunk<'a>) -> Self {
        Self {
            reader: chunk.reader(),
            running_status: None,
            absolute_time: 0,
            tempo: 0,
        }
    }

    /// Decode every event in `chunk`, which must already be known to be a track chunk.
    pub(crate) fn decode(chunk: Chunk<'a>) -> ReadResult<Track> {
        let mut decoder = Self::new(&chunk);
        let mut events = Vec::new();
        while !decoder.reader.is_at_end() {
            events.push(decoder.read_event()?);
        }

        let expected = chunk.declared_length();
        let consumed = decoder.reader.bytes_consumed();
        if consumed != expected as usize {
            return Err(ReaderError::new(
                decoder.reader.buffer_position(),
                ReaderErrorKind::chunk(ChunkError::TrackSizeMismatch {
                    expected,
                    actual: u32::try_from(consumed).unwrap_or(u32::MAX),
                }),
            ));
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(
            events = events.len(),
            ticks = decoder.absolute_time,
            tempo = decoder.tempo,
            "decoded track"
        );

        Ok(Track::new(
            chunk.into_tag(),
            expected,
            decoder.absolute_time,
            decoder.tempo,
            events,
        ))
    }

    fn read_event(&mut self) -> ReadResult<TrackEvent> {
        let delta_time = self.reader.read_vlq()?;
        // wraps rather than fails for tracks longer than u32::MAX ticks
        self.absolute_time = self.absolute_time.wrapping_add(delta_time);

        let status = self.reader.read_u8()?;
        let message = match status {
            0xF0 | 0xF7 => {
                TrackMessage::SystemExclusive(SysexEvent::read(status, &mut self.reader)?)
            }
            0xFF => {
                let meta = MetaEvent::read(&mut self.reader)?;
                if let MetaEvent::SetTempo(tempo) = &meta {
                    self.tempo = tempo.micros_per_quarter_note();
                }
                TrackMessage::Meta(meta)
            }
            _ => TrackMessage::ChannelVoice(self.read_channel_voice(status)?),
        };

        Ok(TrackEvent::new(delta_time, self.absolute_time, message))
    }

    fn read_channel_voice(&mut self, byte: u8) -> ReadResult<ChannelVoiceMessage> {
        let status = if byte & 0x80 == 0 {
            // running status: the byte is the first data byte of the message
            let Some(status) = self.running_status else {
                return Err(inv_data(
                    &self.reader,
                    TrackError::RunningStatusUninitialized,
                ));
            };
            self.reader.rewind(1)?;
            status
        } else {
            self.running_status = Some(byte);
            byte
        };
        ChannelVoiceMessage::read(status, &mut self.reader)
    }
}

#[cfg(test)]
fn decode_track(payload: &[u8]) -> ReadResult<Track> {
    use alloc::string::String;
    let chunk = Chunk::new(String::from("MTrk"), payload.len() as u32, payload, 0);
    TrackDecoder::decode(chunk)
}

#[cfg(test)]
fn voice(event: &TrackEvent) -> &crate::message::channel::VoiceEvent {
    event
        .message()
        .channel_voice()
        .expect("expected a channel voice message")
        .event()
}

#[test]
fn running_status_reuses_previous_status() {
    use crate::message::channel::VoiceEvent;
    use pretty_assertions::assert_eq;

    let track = decode_track(&[0x00, 0x90, 60, 64, 0x00, 64, 0]).unwrap();
    assert_eq!(track.events().len(), 2);
    assert_eq!(
        voice(&track.events()[0]),
        &VoiceEvent::NoteOn {
            note: 60,
            velocity: 64
        }
    );
    assert_eq!(
        voice(&track.events()[1]),
        &VoiceEvent::NoteOff {
            note: 64,
            velocity: 0
        }
    );
}

#[test]
fn running_status_survives_meta_events() {
    use crate::message::channel::VoiceEvent;
    use pretty_assertions::assert_eq;

    let track = decode_track(&[
        0x00, 0xC3, 5, // program change, channel 3
        0x00, 0xFF, 0x01, 0x01, b'a', // text
        0x00, 7, // program change via running status
    ])
    .unwrap();
    let last = track.events()[2].message().channel_voice().unwrap();
    assert_eq!(last.channel(), 3);
    assert_eq!(last.event(), &VoiceEvent::ProgramChange { program: 7 });
}

#[test]
fn running_status_needs_a_status_byte() {
    use crate::ParseError;
    use pretty_assertions::assert_eq;

    let err = decode_track(&[0x00, 0x3C, 0x40]).unwrap_err();
    assert_eq!(
        err.parse_error(),
        Some(&ParseError::Track(TrackError::RunningStatusUninitialized))
    );
}

#[test]
fn absolute_time_is_prefix_sum() {
    use pretty_assertions::assert_eq;

    let track = decode_track(&[
        0x00, 0x90, 60, 100, // on
        0x60, 0x80, 60, 0, // off after 96
        0x81, 0x00, 0x90, 62, 100, // on after 128
        0x10, 62, 0, // off after 16, running status
        0x00, 0xFF, 0x2F, 0x00,
    ])
    .unwrap();

    let deltas: Vec<u32> = track.events().iter().map(TrackEvent::delta_time).collect();
    let absolute: Vec<u32> = track
        .events()
        .iter()
        .map(TrackEvent::absolute_time)
        .collect();
    assert_eq!(deltas, [0, 96, 128, 16, 0]);
    assert_eq!(absolute, [0, 96, 224, 240, 240]);
    assert_eq!(track.ticks_duration(), 240);
    assert!(track.end_of_track_present());
}

#[test]
fn last_tempo_wins() {
    use pretty_assertions::assert_eq;

    let track = decode_track(&[
        0x00, 0xFF, 0x51, 0x03, 0x07, 0xA1, 0x20, // 500_000
        0x00, 0xFF, 0x51, 0x03, 0x0F, 0x42, 0x40, // 1_000_000
    ])
    .unwrap();
    assert_eq!(track.tempo(), 1_000_000);

    let track = decode_track(&[0x00, 0xFF, 0x2F, 0x00]).unwrap();
    assert_eq!(track.tempo(), 0);
}

#[test]
fn sysex_events_are_classified() {
    use crate::message::system_exclusive::SysexKind;
    use pretty_assertions::assert_eq;

    let track = decode_track(&[
        0x00, 0xF0, 0x03, 0x43, 0x12, 0xF7, // complete message
        0x00, 0xF7, 0x02, 0x01, 0x02, // escape
    ])
    .unwrap();
    let kinds: Vec<SysexKind> = track
        .events()
        .iter()
        .filter_map(|e| e.message().system_exclusive())
        .map(SysexEvent::kind)
        .collect();
    assert_eq!(kinds, [SysexKind::Message, SysexKind::Escape]);
}

#[test]
fn undefined_status_is_rejected() {
    use crate::ParseError;
    use pretty_assertions::assert_eq;

    let err = decode_track(&[0x00, 0xF4, 0x00]).unwrap_err();
    assert_eq!(
        err.parse_error(),
        Some(&ParseError::Track(TrackError::InvalidMidiEventType(0xF4)))
    );
}

#[test]
fn truncated_event_is_out_of_bounds() {
    assert!(decode_track(&[0x00, 0x90, 60]).unwrap_err().is_out_of_bounds());
    assert!(decode_track(&[0x81]).unwrap_err().is_out_of_bounds());
    assert!(
        decode_track(&[0x00, 0xFF, 0x01, 0x05, b'a'])
            .unwrap_err()
            .is_out_of_bounds()
    );
}

#[test]
fn declared_size_must_match_consumed() {
    use crate::ParseError;
    use alloc::string::String;
    use pretty_assertions::assert_eq;

    let payload = [0x00, 0xFF, 0x2F, 0x00];
    let chunk = Chunk::new(String::from("MTrk"), 5, &payload, 0);
    let err = TrackDecoder::decode(chunk).unwrap_err();
    assert_eq!(
        err.parse_error(),
        Some(&ParseError::Chunk(ChunkError::TrackSizeMismatch {
            expected: 5,
            actual: 4
        }))
    );
}

#[test]
fn empty_track() {
    use pretty_assertions::assert_eq;
    let track = decode_track(&[]).unwrap();
    assert!(track.events().is_empty());
    assert_eq!(track.ticks_duration(), 0);
    assert!(!track.end_of_track_present());
}
