#![doc = r#"
Decoding of Standard MIDI Files (SMF) into strongly typed tracks and events.

A MIDI file is a sequence of chunks. The first chunk (`MThd`) holds the
[`MidiHeader`](crate::file::MidiHeader); every chunk after it (`MTrk`) holds a
[`Track`](crate::file::Track) of delta-timed events. This crate reads the whole
buffer in one pass and hands back an owned [`MidiFileData`].

# Example
```rust
# use smf_reader::prelude::*;
let bytes = [
    // header
    b'M', b'T', b'h', b'd', 0, 0, 0, 6, 0, 0, 0, 1, 0, 96,
    // one track: set tempo 500_000, end of track
    b'M', b'T', b'r', b'k', 0, 0, 0, 11,
    0x00, 0xFF, 0x51, 0x03, 0x07, 0xA1, 0x20,
    0x00, 0xFF, 0x2F, 0x00,
];

let file = MidiFileData::parse(&bytes).unwrap();
assert_eq!(file.tracks().len(), 1);
assert_eq!(file.tracks()[0].tempo(), 500_000);
```
"#]
#![warn(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod error;
pub use error::*;

pub mod file;

pub mod message;

pub mod reader;

mod micros;
pub use micros::*;

#[doc = r#"
Common re-exports when working with decoded MIDI files
"#]
pub mod prelude {
    pub use crate::{
        error::*,
        file::*,
        message::{channel::*, system_exclusive::*},
        micros::*,
        reader::{Chunk, ReadResult, Reader, ReaderError, ReaderErrorKind},
    };
}

use file::MidiFileData;
use reader::ReadResult;

/// Parse a complete Standard MIDI File.
///
/// Shorthand for [`MidiFileData::parse`].
pub fn parse(bytes: &[u8]) -> ReadResult<MidiFileData> {
    MidiFileData::parse(bytes)
}
