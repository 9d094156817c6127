use alloc::string::String;
use thiserror::Error;

#[doc = r#"
An error describing why some bytes could not be interpreted as MIDI file data
"#]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Chunk framing errors
    #[error("Chunk: {0}")]
    Chunk(#[from] ChunkError),
    /// Errors while decoding the events of a track
    #[error("Track: {0}")]
    Track(#[from] TrackError),
    /// Meta event payload errors
    #[error("Meta: {0}")]
    Meta(#[from] MetaError),
    /// SMPTE errors
    #[error("Smpte: {0}")]
    Smpte(#[from] SmpteError),
}

/// Errors related to the chunks of a MIDI file
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChunkError {
    /// The first chunk of the file is not tagged `MThd`
    #[error("Not a valid MIDI file, expected a `MThd` header but found `{0}`")]
    InvalidFileHeader(String),
    /// A chunk after the header is not tagged `MTrk`
    #[error("Expected a `MTrk` track chunk but found `{0}`")]
    InvalidTrackHeader(String),
    /// The events of a track did not add up to the length declared by its chunk
    #[error("Expected track size is {expected} but {actual} bytes were decoded")]
    TrackSizeMismatch {
        /// Length declared by the chunk
        expected: u32,
        /// Bytes consumed while decoding events
        actual: u32,
    },
}

/// Errors produced while classifying the events of a track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TrackError {
    /// A data byte appeared where a status byte was expected, and no
    /// status byte has been seen in this track yet
    #[error("Running status used before any status byte was set")]
    RunningStatusUninitialized,
    /// The high nibble of a channel status byte does not name a voice message
    #[error("Invalid MIDI event type for status byte {0:#04X}")]
    InvalidMidiEventType(u8),
    /// A system exclusive event was introduced by something other than `0xF0` or `0xF7`
    #[error("Unsupported system exclusive type {0:#04X}")]
    UnsupportedSysexType(u8),
}

/// Errors for meta events with a fixed payload length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MetaError {
    /// The declared length disagrees with the length required by the meta type
    #[error("Meta event {meta_type:#04X} must have length {expected}, found {actual}")]
    LengthMismatch {
        /// The meta type byte
        meta_type: u8,
        /// The only length allowed for the type
        expected: u32,
        /// The length declared in the file
        actual: u32,
    },
}

/// Errors interpreting SMPTE values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SmpteError {
    /// The header's division byte is not one of -24, -25, -29 or -30
    #[error("Invalid frame time in header: {0}")]
    HeaderFrameTime(i8),
    /// The rate bits of an offset are out of range
    #[error("Invalid frame type in track: {0}")]
    TrackFrame(u8),
}
