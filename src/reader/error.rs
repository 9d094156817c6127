use super::Reader;
use crate::{ChunkError, ParseError};
use thiserror::Error;

/// A failed read, tagged with the file offset it happened at
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Reading at Position {position}, {kind}")]
pub struct ReaderError {
    position: usize,
    pub(crate) kind: ReaderErrorKind,
}

/// Why a read failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReaderErrorKind {
    /// The bytes were read but do not form a valid chunk or event
    #[error("Parsing {0}")]
    ParseError(#[from] ParseError),
    /// Fewer bytes remained than the read needed
    #[error("Read out of bounds!")]
    OutOfBounds,
}

impl ReaderErrorKind {
    pub(crate) const fn chunk(chunk_err: ChunkError) -> Self {
        Self::ParseError(ParseError::Chunk(chunk_err))
    }
}

impl ReaderError {
    /// An error of `kind` at `position`, a byte offset from the start of the file.
    ///
    /// Readers over a chunk payload pass their [`Reader::buffer_position`],
    /// which already includes the chunk's offset.
    pub const fn new(position: usize, kind: ReaderErrorKind) -> Self {
        Self { position, kind }
    }

    /// An [`ReaderErrorKind::OutOfBounds`] error for a read starting at `position`
    pub const fn oob(position: usize) -> Self {
        Self::new(position, ReaderErrorKind::OutOfBounds)
    }

    /// True if a read ran past the end of the file or chunk
    pub const fn is_out_of_bounds(&self) -> bool {
        matches!(self.kind, ReaderErrorKind::OutOfBounds)
    }

    /// What went wrong
    pub fn error_kind(&self) -> &ReaderErrorKind {
        &self.kind
    }

    /// The chunk, track, meta or SMPTE error, unless the read ran out of bytes
    pub fn parse_error(&self) -> Option<&ParseError> {
        match &self.kind {
            ReaderErrorKind::ParseError(e) => Some(e),
            ReaderErrorKind::OutOfBounds => None,
        }
    }

    /// Byte offset from the start of the file at which decoding failed
    pub fn position(&self) -> usize {
        self.position
    }
}

/// Result of a [`Reader`] operation
pub type ReadResult<T> = Result<T, ReaderError>;

pub(crate) fn inv_data(reader: &Reader<'_>, v: impl Into<ParseError>) -> ReaderError {
    ReaderError::new(
        reader.buffer_position(),
        ReaderErrorKind::ParseError(v.into()),
    )
}

#[test]
fn positions_are_file_offsets() {
    use crate::TrackError;
    use alloc::string::ToString;
    use pretty_assertions::assert_eq;

    let mut reader = Reader::with_offset(&[0x00], 22);
    reader.read_u8().unwrap();
    let err = inv_data(&reader, TrackError::RunningStatusUninitialized);
    assert_eq!(err.position(), 23);
    assert_eq!(
        err.parse_error(),
        Some(&ParseError::Track(TrackError::RunningStatusUninitialized))
    );
    assert_eq!(
        ReaderError::oob(7).to_string(),
        "Reading at Position 7, Read out of bounds!"
    );
}
