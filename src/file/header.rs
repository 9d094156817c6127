use super::{FormatType, Timing};
use crate::{
    SmpteError,
    reader::{ReadResult, Reader},
};
use alloc::string::String;

#[doc = r#"
The contents of the `MThd` chunk

The three fields are kept as found. [`MidiHeader::format`] and
[`MidiHeader::timing`] interpret them on request; a file with an unusual
format or division still parses.
"#]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MidiHeader {
    tag: String,
    size: u32,
    format_type: u16,
    track_count: u16,
    time_division: u16,
}

impl MidiHeader {
    /// Read the three header words from the chunk payload.
    ///
    /// A payload longer than six bytes is accepted and the rest ignored.
    pub(crate) fn read(tag: String, size: u32, reader: &mut Reader<'_>) -> ReadResult<Self> {
        let format_type = reader.read_u16()?;
        let track_count = reader.read_u16()?;
        let time_division = reader.read_u16()?;
        Ok(Self {
            tag,
            size,
            format_type,
            track_count,
            time_division,
        })
    }

    /// The chunk tag, always `MThd`
    pub fn tag(&self) -> &str {
        &self.tag
    }
    /// The chunk length declared in the file, usually 6
    pub const fn size(&self) -> u32 {
        self.size
    }
    /// The raw format word
    pub const fn format_type(&self) -> u16 {
        self.format_type
    }
    /// The number of tracks the header claims.
    ///
    /// This is not checked against the number of track chunks present.
    pub const fn track_count(&self) -> u16 {
        self.track_count
    }
    /// The raw time division word
    pub const fn time_division(&self) -> u16 {
        self.time_division
    }
    /// The format, if it is one of the three defined formats
    pub fn format(&self) -> Option<FormatType> {
        FormatType::try_from(self.format_type).ok()
    }
    /// Decode the time division
    pub const fn timing(&self) -> Result<Timing, SmpteError> {
        Timing::from_division(self.time_division)
    }
}

#[test]
fn read_header_words() {
    use pretty_assertions::assert_eq;
    let payload = [0x00, 0x01, 0x00, 0x03, 0x01, 0xE0];
    let mut reader = Reader::from_byte_slice(&payload);
    let header = MidiHeader::read(String::from("MThd"), 6, &mut reader).unwrap();
    assert_eq!(header.format_type(), 1);
    assert_eq!(header.format(), Some(FormatType::Simultaneous));
    assert_eq!(header.track_count(), 3);
    assert_eq!(header.time_division(), 480);
    assert_eq!(header.timing(), Ok(Timing::TicksPerQuarterNote(480)));
}

#[test]
fn short_header_is_out_of_bounds() {
    let payload = [0x00, 0x00, 0x00, 0x01];
    let mut reader = Reader::from_byte_slice(&payload);
    let err = MidiHeader::read(String::from("MThd"), 4, &mut reader).unwrap_err();
    assert!(err.is_out_of_bounds());
}
