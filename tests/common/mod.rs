#![allow(dead_code)]

/// Frame `payload` as a chunk tagged `tag`
pub fn chunk(tag: &[u8; 4], payload: &[u8]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(payload.len() + 8);
    bytes.extend_from_slice(tag);
    bytes.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    bytes.extend_from_slice(payload);
    bytes
}

/// The `MThd` chunk
pub fn header(format: u16, track_count: u16, division: u16) -> Vec<u8> {
    let mut payload = Vec::with_capacity(6);
    payload.extend_from_slice(&format.to_be_bytes());
    payload.extend_from_slice(&track_count.to_be_bytes());
    payload.extend_from_slice(&division.to_be_bytes());
    chunk(b"MThd", &payload)
}

/// A complete file with one `MTrk` chunk per entry of `tracks`
pub fn smf(format: u16, division: u16, tracks: &[&[u8]]) -> Vec<u8> {
    let mut bytes = header(format, tracks.len() as u16, division);
    for track in tracks {
        bytes.extend(chunk(b"MTrk", track));
    }
    bytes
}

/// Encode a variable length quantity
pub fn vlq(mut value: u32) -> Vec<u8> {
    let mut out = vec![(value & 0x7F) as u8];
    value >>= 7;
    while value > 0 {
        out.push((value & 0x7F) as u8 | 0x80);
        value >>= 7;
    }
    out.reverse();
    out
}

/// `FF 2F 00` at a delta time of zero
pub const END_OF_TRACK: [u8; 4] = [0x00, 0xFF, 0x2F, 0x00];
