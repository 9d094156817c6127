#![doc = r#"
SMPTE Offset - the time at which a track is to start

# Format

The SMPTE Offset meta event (`FF 54 05 hr mn se fr ff`) holds:
- Byte 0: `0rrhhhhh`, `rr` is the frame rate, `hhhhh` the hours
- Byte 1: Minutes
- Byte 2: Seconds
- Byte 3: Frames
- Byte 4: Fractional frames in 100ths

# Frame Rate Encoding
- `00`: 24 fps
- `01`: 25 fps
- `10`: 29.97 fps (drop frame)
- `11`: 30 fps

The bytes are kept exactly as found. Decoding the rate only happens on
request, so an offset with out of range fields never fails a parse.
"#]

use crate::{SmpteError, file::SmpteFps};

/// A track's starting position in SMPTE time code, as stored in the file.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SmpteOffset {
    /// Frame rate bits and hours
    pub hr: u8,
    /// Minutes
    pub mn: u8,
    /// Seconds
    pub se: u8,
    /// Frames
    pub fr: u8,
    /// Fractional frames, in 100ths of a frame
    pub ff: u8,
}

impl SmpteOffset {
    /// The frame rate encoded in bits 5 and 6 of the hour byte
    pub const fn fps(&self) -> Result<SmpteFps, SmpteError> {
        match self.hr >> 5 {
            0 => Ok(SmpteFps::TwentyFour),
            1 => Ok(SmpteFps::TwentyFive),
            2 => Ok(SmpteFps::TwentyNine),
            3 => Ok(SmpteFps::Thirty),
            v => Err(SmpteError::TrackFrame(v)),
        }
    }

    /// The hour, without the frame rate bits
    pub const fn hour(&self) -> u8 {
        self.hr & 0b0001_1111
    }

    /// Calculate the offset in microseconds using a different frame rate.
    ///
    /// When a file uses SMPTE timing, the header's frame rate takes
    /// precedence over the one stored with the offset.
    pub const fn as_micros_with_override(&self, fps: SmpteFps) -> f64 {
        ((((self.hour() as u64 * 3600) + (self.mn as u64) * 60 + self.se as u64) * 1_000_000)
            as f64)
            + ((self.fr as u64) * 1_000_000) as f64 / fps.as_f64()
            + ((self.ff as u32) * 10_000) as f64 / fps.as_f64()
    }

    /// Convert this offset to microseconds using its own frame rate.
    pub const fn as_micros(&self) -> Result<f64, SmpteError> {
        match self.fps() {
            Ok(fps) => Ok(self.as_micros_with_override(fps)),
            Err(e) => Err(e),
        }
    }
}

impl From<[u8; 5]> for SmpteOffset {
    fn from([hr, mn, se, fr, ff]: [u8; 5]) -> Self {
        Self { hr, mn, se, fr, ff }
    }
}

#[test]
fn decode_smpte_offset() {
    use pretty_assertions::assert_eq;
    // this are the bytes after 00 FF 54 05
    let offset = SmpteOffset::from([0x41, 0x17, 0x2D, 0x0C, 0x22]);

    assert_eq!(offset.fps(), Ok(SmpteFps::TwentyNine));
    assert_eq!(offset.hour(), 1);
    assert_eq!(offset.mn, 23);
    assert_eq!(offset.se, 45);
    assert_eq!(offset.fr, 12);
    assert_eq!(offset.ff, 34);
}

#[test]
fn offset_in_micros() {
    use pretty_assertions::assert_eq;
    // 25 fps, 00:00:01 + 5 frames + 50 subframes
    let offset = SmpteOffset::from([0x20, 0, 1, 5, 50]);
    assert_eq!(offset.as_micros(), Ok(1_220_000.));
    assert_eq!(
        offset.as_micros_with_override(SmpteFps::TwentyFour),
        1_000_000. + 1_000_000. * 5. / 24. + 500_000. / 24.
    );
}

#[test]
fn invalid_rate_bits() {
    use pretty_assertions::assert_eq;
    let offset = SmpteOffset::from([0xE1, 0, 0, 0, 0]);
    assert_eq!(offset.fps(), Err(SmpteError::TrackFrame(7)));
    assert_eq!(offset.hour(), 1);
    assert!(offset.as_micros().is_err());
}
