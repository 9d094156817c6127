#![doc = r#"
System exclusive events

In a file, `F0 <len> <bytes>` carries a system exclusive message and
`F7 <len> <bytes>` carries an escape: either the continuation of a
message split into packets, or arbitrary bytes to transmit as-is.
"#]

use crate::{
    TrackError,
    reader::{ReadResult, Reader, inv_data},
};
use alloc::vec::Vec;
use num_enum::TryFromPrimitive;

/// The status byte introducing a system exclusive event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive)]
#[repr(u8)]
pub enum SysexKind {
    /// `0xF0`
    Message = 0xF0,
    /// `0xF7`
    Escape = 0xF7,
}

/// A system exclusive event and its data, without the length prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SysexEvent {
    /// A system exclusive message (`0xF0`)
    Message(Vec<u8>),
    /// An escape sequence (`0xF7`)
    Escape(Vec<u8>),
}

impl SysexEvent {
    /// Read a length-prefixed system exclusive event for `status`.
    ///
    /// The length is read before `status` is checked.
    pub(crate) fn read(status: u8, reader: &mut Reader<'_>) -> ReadResult<Self> {
        let len = reader.read_vlq()?;
        let data = reader.read_bytes(len as usize)?;
        Self::from_status(status, data.to_vec()).map_err(|e| inv_data(reader, e))
    }

    /// Classify `data` by the byte that introduced it.
    pub fn from_status(status: u8, data: Vec<u8>) -> Result<Self, TrackError> {
        match SysexKind::try_from(status) {
            Ok(SysexKind::Message) => Ok(Self::Message(data)),
            Ok(SysexKind::Escape) => Ok(Self::Escape(data)),
            Err(_) => Err(TrackError::UnsupportedSysexType(status)),
        }
    }

    /// Which status byte the event was introduced by
    pub const fn kind(&self) -> SysexKind {
        match self {
            Self::Message(_) => SysexKind::Message,
            Self::Escape(_) => SysexKind::Escape,
        }
    }

    /// The event's bytes
    pub fn data(&self) -> &[u8] {
        match self {
            Self::Message(data) | Self::Escape(data) => data,
        }
    }
}

#[test]
fn read_message_and_escape() {
    use pretty_assertions::assert_eq;

    let bytes = [0x04, 0x43, 0x12, 0x00, 0xF7, 0x01, 0xF8];
    let mut reader = Reader::from_byte_slice(&bytes);

    let message = SysexEvent::read(0xF0, &mut reader).unwrap();
    assert_eq!(message, SysexEvent::Message(alloc::vec![0x43, 0x12, 0x00, 0xF7]));
    assert_eq!(message.kind(), SysexKind::Message);

    let escape = SysexEvent::read(0xF7, &mut reader).unwrap();
    assert_eq!(escape.data(), &[0xF8]);
    assert_eq!(escape.kind(), SysexKind::Escape);
    assert!(reader.is_at_end());
}

#[test]
fn other_status_is_unsupported() {
    use pretty_assertions::assert_eq;
    assert_eq!(
        SysexEvent::from_status(0xF1, Vec::new()),
        Err(TrackError::UnsupportedSysexType(0xF1))
    );
}

#[test]
fn sysex_longer_than_track_is_out_of_bounds() {
    let mut reader = Reader::from_byte_slice(&[0x05, 0x01, 0x02]);
    assert!(SysexEvent::read(0xF0, &mut reader).unwrap_err().is_out_of_bounds());
}
