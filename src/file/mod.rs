#![doc = r#"
Rusty representation of a Standard MIDI File, see [`MidiFileData`]
"#]

mod format;
pub use format::*;

mod header;
pub use header::*;

mod track;
pub use track::*;
use track::TrackDecoder;

mod timing;
pub use timing::*;

pub mod meta;
pub use meta::*;

use crate::{
    ChunkError,
    reader::{Chunk, ReadResult, Reader, ReaderError, ReaderErrorKind, latin1_to_string},
};
use alloc::{string::String, vec::Vec};

#[doc = r#"
A decoded MIDI file: the header and every track, in file order.

Tracks are read until the buffer runs out, whatever
[`MidiHeader::track_count`] says.
"#]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MidiFileData {
    header: MidiHeader,
    tracks: Vec<Track>,
}

impl MidiFileData {
    /// Parse a complete MIDI file.
    ///
    /// The first chunk must be tagged `MThd` and every following chunk
    /// `MTrk`. Any error aborts the parse.
    pub fn parse(bytes: &[u8]) -> ReadResult<Self> {
        let mut reader = Reader::from_byte_slice(bytes);

        let header = read_header(&mut reader)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(
            format = header.format_type(),
            tracks = header.track_count(),
            division = header.time_division(),
            "read midi header"
        );

        let mut tracks = Vec::new();
        while !reader.is_at_end() {
            let chunk = read_tagged_chunk(&mut reader, "MTrk", ChunkError::InvalidTrackHeader)?;
            tracks.push(TrackDecoder::decode(chunk)?);
        }

        #[cfg(feature = "tracing")]
        if tracks.len() != header.track_count() as usize {
            tracing::warn!(
                "Header declares {} tracks but the file holds {}",
                header.track_count(),
                tracks.len()
            );
        }

        Ok(Self { header, tracks })
    }

    /// Returns header info
    pub fn header(&self) -> &MidiHeader {
        &self.header
    }

    /// Returns the tracks
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Returns the track at `index`
    pub fn track(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    /// Split into the header and tracks
    pub fn into_parts(self) -> (MidiHeader, Vec<Track>) {
        (self.header, self.tracks)
    }
}

fn read_header(reader: &mut Reader<'_>) -> ReadResult<MidiHeader> {
    let chunk = read_tagged_chunk(reader, "MThd", ChunkError::InvalidFileHeader)?;
    let size = chunk.declared_length();
    let mut payload = chunk.reader();
    MidiHeader::read(chunk.into_tag(), size, &mut payload)
}

/// Read a chunk, failing with `wrong_tag` before its length is read if it is not tagged `tag`.
fn read_tagged_chunk<'a>(
    reader: &mut Reader<'a>,
    tag: &str,
    wrong_tag: fn(String) -> ChunkError,
) -> ReadResult<Chunk<'a>> {
    let found = reader.peek_bytes(4)?;
    if found != tag.as_bytes() {
        return Err(ReaderError::new(
            reader.buffer_position(),
            ReaderErrorKind::chunk(wrong_tag(latin1_to_string(found))),
        ));
    }
    reader.read_chunk()
}
