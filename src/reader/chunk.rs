#![doc = r#"
Contains the [`Chunk`] framing type

# Overview

MIDI files are organized into chunks, each identified by a 4-character ASCII type identifier
followed by a 32-bit length field and then the chunk data.

```text
[Header Chunk: "MThd"]
[Track Chunk 1: "MTrk"]
[Track Chunk 2: "MTrk"]
...
[Track Chunk N: "MTrk"]
```

The reader only frames chunks. Whether a tag is acceptable in a position
is decided by [`MidiFileData::parse`](crate::file::MidiFileData::parse).
"#]

use super::Reader;
use alloc::string::String;

/// A tagged, length-prefixed block of bytes borrowed from the file.
///
/// The payload is always exactly [`Chunk::declared_length`] bytes long.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk<'a> {
    tag: String,
    declared_length: u32,
    payload: &'a [u8],
    offset: usize,
}

impl<'a> Chunk<'a> {
    pub(crate) fn new(tag: String, declared_length: u32, payload: &'a [u8], offset: usize) -> Self {
        Self {
            tag,
            declared_length,
            payload,
            offset,
        }
    }
    /// The four character type identifier, such as `MThd` or `MTrk`
    pub fn tag(&self) -> &str {
        &self.tag
    }
    /// The length written in the chunk's header
    pub const fn declared_length(&self) -> u32 {
        self.declared_length
    }
    /// The chunk's data
    pub const fn payload(&self) -> &'a [u8] {
        self.payload
    }
    /// A new reader over the payload. Positions it reports are file positions.
    pub const fn reader(&self) -> Reader<'a> {
        Reader::with_offset(self.payload, self.offset)
    }
    pub(crate) fn into_tag(self) -> String {
        self.tag
    }
}
