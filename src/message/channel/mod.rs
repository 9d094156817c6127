#![doc = r#"
Contains all Channel Voice message types

# Hierarchy
```text
                |-----------------------|
                | Channel Voice Message |
                |-----------------------|
                 /                      \
      |--------------|              |------------|
      |   Channel    |              | VoiceEvent |
      | (low nibble) |              |            |
      |--------------|              |------------|
```

A status byte `0x80..=0xEF` carries the kind of the message in its high
nibble ([`VoiceKind`]) and the channel in its low nibble. One or two data
bytes follow, depending on the kind.
"#]

mod pitch_bend;
pub use pitch_bend::*;

use crate::{
    TrackError,
    reader::{ReadResult, Reader, inv_data},
};
use num_enum::TryFromPrimitive;

/// The high nibble of a channel voice status byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive)]
#[repr(u8)]
pub enum VoiceKind {
    /// `0x8n`
    NoteOff = 0x8,
    /// `0x9n`
    NoteOn = 0x9,
    /// `0xAn`, polyphonic key pressure
    NoteAftertouch = 0xA,
    /// `0xBn`
    Controller = 0xB,
    /// `0xCn`
    ProgramChange = 0xC,
    /// `0xDn`, channel pressure
    ChannelAftertouch = 0xD,
    /// `0xEn`
    PitchBend = 0xE,
}

#[doc = r#"
A channel voice message: a [`VoiceEvent`] addressed to one of sixteen channels
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelVoiceMessage {
    channel: u8,
    event: VoiceEvent,
}

impl ChannelVoiceMessage {
    /// Create a new message. Only the low nibble of `channel` is kept.
    pub const fn new(channel: u8, event: VoiceEvent) -> Self {
        Self {
            channel: channel & 0x0F,
            event,
        }
    }

    /// Decode the data bytes following `status`.
    ///
    /// The first data byte is read before the kind is checked, so a
    /// truncated track reports [`ReaderErrorKind::OutOfBounds`](crate::reader::ReaderErrorKind::OutOfBounds)
    /// ahead of [`TrackError::InvalidMidiEventType`].
    pub(crate) fn read(status: u8, reader: &mut Reader<'_>) -> ReadResult<Self> {
        let p1 = reader.read_u8()?;
        let kind = VoiceKind::try_from(status >> 4)
            .map_err(|_| inv_data(reader, TrackError::InvalidMidiEventType(status)))?;

        let event = match kind {
            VoiceKind::NoteOff => VoiceEvent::NoteOff {
                note: p1,
                velocity: reader.read_u8()?,
            },
            VoiceKind::NoteOn => {
                let velocity = reader.read_u8()?;
                // velocity 0 is a note off in disguise, commonly used with running status
                if velocity == 0 {
                    VoiceEvent::NoteOff { note: p1, velocity }
                } else {
                    VoiceEvent::NoteOn { note: p1, velocity }
                }
            }
            VoiceKind::NoteAftertouch => VoiceEvent::NoteAftertouch {
                note: p1,
                amount: reader.read_u8()?,
            },
            VoiceKind::Controller => VoiceEvent::Controller {
                controller: p1,
                value: reader.read_u8()?,
            },
            VoiceKind::ProgramChange => VoiceEvent::ProgramChange { program: p1 },
            VoiceKind::ChannelAftertouch => VoiceEvent::ChannelAftertouch { amount: p1 },
            VoiceKind::PitchBend => {
                VoiceEvent::PitchBend(PitchBend::from_data_bytes(p1, reader.read_u8()?))
            }
        };

        Ok(Self::new(status, event))
    }

    /// The channel (`0..=15`)
    pub const fn channel(&self) -> u8 {
        self.channel
    }

    /// The event
    pub const fn event(&self) -> &VoiceEvent {
        &self.event
    }

    /// The kind of status byte this message was decoded from.
    ///
    /// Note that a note on with a velocity of zero reports [`VoiceKind::NoteOff`].
    pub const fn kind(&self) -> VoiceKind {
        self.event.kind()
    }
}

/// The payload of a [`ChannelVoiceMessage`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VoiceEvent {
    /// Release a note
    NoteOff {
        /// Note number
        note: u8,
        /// Release velocity
        velocity: u8,
    },
    /// Press a note
    NoteOn {
        /// Note number
        note: u8,
        /// Velocity, never zero
        velocity: u8,
    },
    /// Change the pressure on a held note
    NoteAftertouch {
        /// Note number
        note: u8,
        /// Pressure
        amount: u8,
    },
    /// Controller change
    Controller {
        /// Controller number
        controller: u8,
        /// New value
        value: u8,
    },
    /// Select a program (patch)
    ProgramChange {
        /// Program number
        program: u8,
    },
    /// Change the pressure for the whole channel
    ChannelAftertouch {
        /// Pressure
        amount: u8,
    },
    /// Bend the pitch of the whole channel
    PitchBend(PitchBend),
}

impl VoiceEvent {
    /// The kind of the event
    pub const fn kind(&self) -> VoiceKind {
        match self {
            Self::NoteOff { .. } => VoiceKind::NoteOff,
            Self::NoteOn { .. } => VoiceKind::NoteOn,
            Self::NoteAftertouch { .. } => VoiceKind::NoteAftertouch,
            Self::Controller { .. } => VoiceKind::Controller,
            Self::ProgramChange { .. } => VoiceKind::ProgramChange,
            Self::ChannelAftertouch { .. } => VoiceKind::ChannelAftertouch,
            Self::PitchBend(_) => VoiceKind::PitchBend,
        }
    }
}

#[cfg(test)]
fn decode(bytes: &[u8]) -> ReadResult<ChannelVoiceMessage> {
    let mut reader = Reader::from_byte_slice(&bytes[1..]);
    let msg = ChannelVoiceMessage::read(bytes[0], &mut reader)?;
    assert!(reader.is_at_end());
    Ok(msg)
}

#[test]
fn decode_each_kind() {
    use pretty_assertions::assert_eq;

    let msg = decode(&[0x83, 60, 12]).unwrap();
    assert_eq!(msg.channel(), 3);
    assert_eq!(
        msg.event(),
        &VoiceEvent::NoteOff {
            note: 60,
            velocity: 12
        }
    );

    let msg = decode(&[0x9F, 61, 100]).unwrap();
    assert_eq!(msg.channel(), 15);
    assert_eq!(
        msg.event(),
        &VoiceEvent::NoteOn {
            note: 61,
            velocity: 100
        }
    );

    let msg = decode(&[0xA0, 62, 5]).unwrap();
    assert_eq!(msg.event(), &VoiceEvent::NoteAftertouch { note: 62, amount: 5 });

    let msg = decode(&[0xB1, 7, 127]).unwrap();
    assert_eq!(
        msg.event(),
        &VoiceEvent::Controller {
            controller: 7,
            value: 127
        }
    );

    let msg = decode(&[0xC2, 41]).unwrap();
    assert_eq!(msg.event(), &VoiceEvent::ProgramChange { program: 41 });

    let msg = decode(&[0xD4, 90]).unwrap();
    assert_eq!(msg.event(), &VoiceEvent::ChannelAftertouch { amount: 90 });

    let msg = decode(&[0xE5, 0, 64]).unwrap();
    assert_eq!(msg.channel(), 5);
    assert_eq!(msg.event(), &VoiceEvent::PitchBend(PitchBend::from_data_bytes(0, 64)));
}

#[test]
fn note_on_without_velocity_is_note_off() {
    use pretty_assertions::assert_eq;
    let msg = decode(&[0x90, 64, 0]).unwrap();
    assert_eq!(msg.kind(), VoiceKind::NoteOff);
    assert_eq!(
        msg.event(),
        &VoiceEvent::NoteOff {
            note: 64,
            velocity: 0
        }
    );
}

#[test]
fn system_status_is_not_a_voice_message() {
    use crate::{ParseError, reader::ReaderErrorKind};
    use pretty_assertions::assert_eq;

    let err = decode(&[0xF2, 0x10]).unwrap_err();
    assert_eq!(
        err.error_kind(),
        &ReaderErrorKind::ParseError(ParseError::Track(TrackError::InvalidMidiEventType(0xF2)))
    );
}

#[test]
fn missing_second_data_byte_is_out_of_bounds() {
    let mut reader = Reader::from_byte_slice(&[60]);
    let err = ChannelVoiceMessage::read(0x90, &mut reader).unwrap_err();
    assert!(err.is_out_of_bounds());

    // a single data byte is all a program change needs
    let mut reader = Reader::from_byte_slice(&[60]);
    assert!(ChannelVoiceMessage::read(0xC0, &mut reader).is_ok());
}
