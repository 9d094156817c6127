mod common;

use common::{END_OF_TRACK, chunk, header, smf};
use pretty_assertions::assert_eq;
use smf_reader::prelude::*;

fn parse_error(bytes: &[u8]) -> ParseError {
    let err = MidiFileData::parse(bytes).unwrap_err();
    match err.error_kind() {
        ReaderErrorKind::ParseError(e) => e.clone(),
        ReaderErrorKind::OutOfBounds => panic!("unexpected out of bounds at {}", err.position()),
    }
}

#[test]
fn invalid_file_header() {
    let mut bytes = chunk(b"XYZZ", &[0, 0, 0, 1, 0, 96]);
    bytes.extend(chunk(b"MTrk", &END_OF_TRACK));
    assert_eq!(
        parse_error(&bytes),
        ParseError::Chunk(ChunkError::InvalidFileHeader("XYZZ".into()))
    );

    // the tag is checked before the length
    let bytes = [b'X', b'Y', b'Z', b'Z', 0xFF, 0xFF, 0xFF, 0xFF];
    assert_eq!(
        parse_error(&bytes),
        ParseError::Chunk(ChunkError::InvalidFileHeader("XYZZ".into()))
    );
}

#[test]
fn invalid_track_header() {
    let mut bytes = header(1, 2, 96);
    bytes.extend(chunk(b"MTrk", &END_OF_TRACK));
    bytes.extend(chunk(b"XFIH", &[1, 2, 3]));

    let err = MidiFileData::parse(&bytes).unwrap_err();
    assert_eq!(err.position(), 14 + 12);
    assert_eq!(
        err.parse_error(),
        Some(&ParseError::Chunk(ChunkError::InvalidTrackHeader(
            "XFIH".into()
        )))
    );
}

#[test]
fn truncated_files_are_out_of_bounds() {
    assert!(MidiFileData::parse(&[]).unwrap_err().is_out_of_bounds());
    assert!(MidiFileData::parse(b"MTh").unwrap_err().is_out_of_bounds());

    // header chunk shorter than three words
    let bytes = chunk(b"MThd", &[0, 0, 0, 1]);
    assert!(MidiFileData::parse(&bytes).unwrap_err().is_out_of_bounds());

    // track chunk claiming more bytes than the file holds
    let mut bytes = header(0, 1, 96);
    bytes.extend(b"MTrk");
    bytes.extend(100u32.to_be_bytes());
    bytes.extend(END_OF_TRACK);
    assert!(MidiFileData::parse(&bytes).unwrap_err().is_out_of_bounds());

    // an event cut off by the end of its chunk
    let bytes = smf(0, 96, &[&[0x00, 0x90, 0x3C]]);
    assert!(MidiFileData::parse(&bytes).unwrap_err().is_out_of_bounds());

    // trailing bytes too short to be a chunk
    let mut bytes = smf(0, 96, &[&END_OF_TRACK]);
    bytes.extend([b'M', b'T']);
    assert!(MidiFileData::parse(&bytes).unwrap_err().is_out_of_bounds());
}

#[test]
fn set_tempo_must_have_three_bytes() {
    let track = [0x00, 0xFF, 0x51, 0x02, 0x07, 0xA1, 0x00, 0xFF, 0x2F, 0x00];
    let bytes = smf(0, 96, &[&track]);
    assert_eq!(
        parse_error(&bytes),
        ParseError::Meta(MetaError::LengthMismatch {
            meta_type: 0x51,
            expected: 3,
            actual: 2
        })
    );
}

#[test]
fn end_of_track_must_be_empty() {
    let track = [0x00, 0xFF, 0x2F, 0x01, 0x00];
    let bytes = smf(0, 96, &[&track]);
    assert_eq!(
        parse_error(&bytes),
        ParseError::Meta(MetaError::LengthMismatch {
            meta_type: 0x2F,
            expected: 0,
            actual: 1
        })
    );
}

#[test]
fn running_status_without_status() {
    let bytes = smf(0, 96, &[&[0x00, 0x3C, 0x40]]);
    assert_eq!(
        parse_error(&bytes),
        ParseError::Track(TrackError::RunningStatusUninitialized)
    );
}

#[test]
fn system_common_status_in_track() {
    // song select is not allowed in a file
    let bytes = smf(0, 96, &[&[0x00, 0xF3, 0x01]]);
    assert_eq!(
        parse_error(&bytes),
        ParseError::Track(TrackError::InvalidMidiEventType(0xF3))
    );
}

#[test]
fn errors_describe_themselves() {
    let bytes = smf(0, 96, &[&[0x00, 0xFF, 0x51, 0x02, 0x07, 0xA1]]);
    let err = MidiFileData::parse(&bytes).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Reading at Position 28, Parsing Meta: Meta event 0x51 must have length 3, found 2"
    );
}
