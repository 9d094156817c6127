#![doc = r#"
Meta events: `FF <type> <len> <bytes>`

Meta events never reach a MIDI wire; they describe the file itself
(names, lyrics, tempo, time and key signatures). Types with a fixed
payload size are rejected with [`MetaError::LengthMismatch`] when the
declared length disagrees. Types this crate does not know are kept as
[`MetaEvent::Unknown`] with their payload dropped.
"#]

mod smpte_offset;
pub use smpte_offset::*;

mod tempo;
pub use tempo::*;

mod time_signature;
pub use time_signature::*;

mod key_signature;
pub use key_signature::*;

use crate::{
    MetaError,
    reader::{ReadResult, Reader, inv_data, latin1_to_string},
};
use alloc::{string::String, vec::Vec};
use num_enum::TryFromPrimitive;

/// The type byte of the meta events this crate understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive)]
#[repr(u8)]
pub enum MetaType {
    /// `FF 01`
    Text = 0x01,
    /// `FF 02`
    Copyright = 0x02,
    /// `FF 03`, sequence or track name
    Sequence = 0x03,
    /// `FF 04`
    InstrumentName = 0x04,
    /// `FF 05`
    Lyric = 0x05,
    /// `FF 06`
    Marker = 0x06,
    /// `FF 07`
    CuePoint = 0x07,
    /// `FF 20 01`
    ChannelPrefix = 0x20,
    /// `FF 2F 00`
    EndOfTrack = 0x2F,
    /// `FF 51 03`
    SetTempo = 0x51,
    /// `FF 54 05`
    SmpteOffset = 0x54,
    /// `FF 58 04`
    TimeSignature = 0x58,
    /// `FF 59 02`
    KeySignature = 0x59,
    /// `FF 7F`
    SequencerSpecific = 0x7F,
}

impl MetaType {
    /// The payload length a meta event of this type must declare, if fixed
    pub const fn required_len(&self) -> Option<u32> {
        match self {
            Self::ChannelPrefix => Some(1),
            Self::EndOfTrack => Some(0),
            Self::SetTempo => Some(3),
            Self::SmpteOffset => Some(5),
            Self::TimeSignature => Some(4),
            Self::KeySignature => Some(2),
            _ => None,
        }
    }
}

/// A decoded meta event
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MetaEvent {
    /// Any amount of text
    Text(String),
    /// A copyright notice
    Copyright(String),
    /// The name of the sequence or track
    Sequence(String),
    /// The instrument used by the track
    InstrumentName(String),
    /// A lyric, usually one syllable
    Lyric(String),
    /// A rehearsal letter or section name
    Marker(String),
    /// A description of something happening at this point, on film or stage
    CuePoint(String),
    /// Associates following meta and sysex events with a channel
    ChannelPrefix(u8),
    /// The required last event of a track
    EndOfTrack,
    /// Microseconds per quarter note
    SetTempo(Tempo),
    /// The time at which the track is to start
    SmpteOffset(SmpteOffset),
    /// The time signature
    TimeSignature(TimeSignature),
    /// The key signature
    KeySignature(KeySignature),
    /// Data for a particular sequencer
    SequencerSpecific(Vec<u8>),
    /// A meta event of a type not listed in [`MetaType`]
    Unknown {
        /// The type byte
        meta_type: u8,
    },
}

impl MetaEvent {
    /// Read the type, length and payload following an `0xFF` status byte
    pub(crate) fn read(reader: &mut Reader<'_>) -> ReadResult<Self> {
        let meta_type = reader.read_u8()?;
        let len = reader.read_vlq()?;
        let data = reader.read_bytes(len as usize)?;
        Self::from_payload(meta_type, data).map_err(|e| inv_data(reader, e))
    }

    /// Classify a meta event payload by its type byte
    pub fn from_payload(meta_type: u8, data: &[u8]) -> Result<Self, MetaError> {
        let Ok(kind) = MetaType::try_from(meta_type) else {
            #[cfg(feature = "tracing")]
            tracing::debug!(meta_type, len = data.len(), "skipping unknown meta event");
            return Ok(Self::Unknown { meta_type });
        };

        let event = match kind {
            MetaType::Text => Self::Text(latin1_to_string(data)),
            MetaType::Copyright => Self::Copyright(latin1_to_string(data)),
            MetaType::Sequence => Self::Sequence(latin1_to_string(data)),
            MetaType::InstrumentName => Self::InstrumentName(latin1_to_string(data)),
            MetaType::Lyric => Self::Lyric(latin1_to_string(data)),
            MetaType::Marker => Self::Marker(latin1_to_string(data)),
            MetaType::CuePoint => Self::CuePoint(latin1_to_string(data)),
            MetaType::ChannelPrefix => {
                let [channel] = fixed::<1>(kind, data)?;
                Self::ChannelPrefix(channel)
            }
            MetaType::EndOfTrack => {
                fixed::<0>(kind, data)?;
                Self::EndOfTrack
            }
            MetaType::SetTempo => Self::SetTempo(Tempo::from_be_bytes(fixed::<3>(kind, data)?)),
            MetaType::SmpteOffset => {
                Self::SmpteOffset(SmpteOffset::from(fixed::<5>(kind, data)?))
            }
            MetaType::TimeSignature => {
                Self::TimeSignature(TimeSignature::from(fixed::<4>(kind, data)?))
            }
            MetaType::KeySignature => {
                Self::KeySignature(KeySignature::from(fixed::<2>(kind, data)?))
            }
            MetaType::SequencerSpecific => Self::SequencerSpecific(data.to_vec()),
        };
        Ok(event)
    }

    /// The type byte the event was decoded from
    pub const fn meta_type(&self) -> u8 {
        match self {
            Self::Text(_) => MetaType::Text as u8,
            Self::Copyright(_) => MetaType::Copyright as u8,
            Self::Sequence(_) => MetaType::Sequence as u8,
            Self::InstrumentName(_) => MetaType::InstrumentName as u8,
            Self::Lyric(_) => MetaType::Lyric as u8,
            Self::Marker(_) => MetaType::Marker as u8,
            Self::CuePoint(_) => MetaType::CuePoint as u8,
            Self::ChannelPrefix(_) => MetaType::ChannelPrefix as u8,
            Self::EndOfTrack => MetaType::EndOfTrack as u8,
            Self::SetTempo(_) => MetaType::SetTempo as u8,
            Self::SmpteOffset(_) => MetaType::SmpteOffset as u8,
            Self::TimeSignature(_) => MetaType::TimeSignature as u8,
            Self::KeySignature(_) => MetaType::KeySignature as u8,
            Self::SequencerSpecific(_) => MetaType::SequencerSpecific as u8,
            Self::Unknown { meta_type } => *meta_type,
        }
    }

    /// The text of a text-bearing event
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(t)
            | Self::Copyright(t)
            | Self::Sequence(t)
            | Self::InstrumentName(t)
            | Self::Lyric(t)
            | Self::Marker(t)
            | Self::CuePoint(t) => Some(t),
            _ => None,
        }
    }
}

/// The payload of a fixed length meta event, sized by [`MetaType::required_len`]
fn fixed<const N: usize>(kind: MetaType, data: &[u8]) -> Result<[u8; N], MetaError> {
    let expected = kind.required_len().unwrap_or(N as u32);
    debug_assert_eq!(expected as usize, N, "{kind:?} decoded with the wrong payload size");
    let mismatch = MetaError::LengthMismatch {
        meta_type: kind as u8,
        expected,
        actual: data.len() as u32,
    };
    if data.len() as u32 != expected {
        return Err(mismatch);
    }
    data.try_into().map_err(|_| mismatch)
}

#[test]
fn text_events_map_bytes_to_chars() {
    use pretty_assertions::assert_eq;
    let event = MetaEvent::from_payload(0x03, b"Piano \xB5").unwrap();
    assert_eq!(event, MetaEvent::Sequence(String::from("Piano µ")));
    assert_eq!(event.text(), Some("Piano µ"));

    for meta_type in 0x01..=0x07 {
        let event = MetaEvent::from_payload(meta_type, b"x").unwrap();
        assert_eq!(event.meta_type(), meta_type);
        assert_eq!(event.text(), Some("x"));
    }
}

#[test]
fn fixed_length_events() {
    use pretty_assertions::assert_eq;

    assert_eq!(
        MetaEvent::from_payload(0x20, &[0x09]).unwrap(),
        MetaEvent::ChannelPrefix(9)
    );
    assert_eq!(MetaEvent::from_payload(0x2F, &[]).unwrap(), MetaEvent::EndOfTrack);

    let MetaEvent::SetTempo(tempo) = MetaEvent::from_payload(0x51, &[0x07, 0xA1, 0x20]).unwrap()
    else {
        panic!("expected a tempo");
    };
    assert_eq!(tempo.micros_per_quarter_note(), 500_000);

    let MetaEvent::SmpteOffset(offset) =
        MetaEvent::from_payload(0x54, &[0x41, 0x17, 0x2D, 0x0C, 0x22]).unwrap()
    else {
        panic!("expected a smpte offset");
    };
    assert_eq!(offset.hr, 0x41);
    assert_eq!(offset.ff, 0x22);

    let MetaEvent::TimeSignature(sig) = MetaEvent::from_payload(0x58, &[6, 3, 24, 8]).unwrap()
    else {
        panic!("expected a time signature");
    };
    assert_eq!(sig.numerator(), 6);
    assert_eq!(sig.denominator(), Some(8));

    let MetaEvent::KeySignature(key) = MetaEvent::from_payload(0x59, &[0xFD, 1]).unwrap() else {
        panic!("expected a key signature");
    };
    assert_eq!(key.sharps_flats(), -3);
    assert!(key.is_minor());
}

#[test]
fn fixed_length_mismatch() {
    use pretty_assertions::assert_eq;
    let cases: [(u8, &[u8], u32); 6] = [
        (0x20, &[], 1),
        (0x2F, &[0x00], 0),
        (0x51, &[0x07, 0xA1], 3),
        (0x54, &[0, 0, 0, 0], 5),
        (0x58, &[4, 2, 24, 8, 0], 4),
        (0x59, &[0], 2),
    ];
    for (meta_type, data, expected) in cases {
        assert_eq!(
            MetaEvent::from_payload(meta_type, data),
            Err(MetaError::LengthMismatch {
                meta_type,
                expected,
                actual: data.len() as u32,
            })
        );
    }
}

#[test]
fn unknown_and_sequencer_specific() {
    use pretty_assertions::assert_eq;
    assert_eq!(
        MetaEvent::from_payload(0x21, &[0x00]).unwrap(),
        MetaEvent::Unknown { meta_type: 0x21 }
    );
    assert_eq!(
        MetaEvent::from_payload(0x7F, &[0x00, 0x00, 0x41, 0x01]).unwrap(),
        MetaEvent::SequencerSpecific(alloc::vec![0x00, 0x00, 0x41, 0x01])
    );
    // sequence number is not decoded
    assert_eq!(
        MetaEvent::from_payload(0x00, &[0x00, 0x01]).unwrap().meta_type(),
        0x00
    );
}

#[test]
fn read_consumes_payload() {
    use pretty_assertions::assert_eq;
    let bytes = [0x51, 0x03, 0x0F, 0x42, 0x40, 0x99];
    let mut reader = Reader::from_byte_slice(&bytes);
    let event = MetaEvent::read(&mut reader).unwrap();
    assert_eq!(event, MetaEvent::SetTempo(Tempo::new(1_000_000)));
    assert_eq!(reader.remaining(), 1);
}

#[test]
fn required_len_drives_decoding() {
    use pretty_assertions::assert_eq;
    for byte in 0..=0x7F_u8 {
        let Ok(kind) = MetaType::try_from(byte) else {
            continue;
        };
        let Some(len) = kind.required_len() else {
            continue;
        };
        let exact = alloc::vec![0x01; len as usize];
        let event = MetaEvent::from_payload(byte, &exact).unwrap();
        assert_eq!(event.meta_type(), byte);

        let long = alloc::vec![0x01; len as usize + 1];
        assert_eq!(
            MetaEvent::from_payload(byte, &long),
            Err(MetaError::LengthMismatch {
                meta_type: byte,
                expected: len,
                actual: len + 1,
            })
        );
    }
    assert_eq!(MetaType::Lyric.required_len(), None);
}
