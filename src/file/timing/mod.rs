mod smpte;
pub use smpte::*;

use crate::SmpteError;

/// How delta times are to be interpreted, decoded from the header's time division.
///
/// This is either the number of ticks per quarter note or
/// a SMPTE frame rate with a number of ticks per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Timing {
    /// Delta times are counted in fractions of a quarter note
    TicksPerQuarterNote(u16),

    /// Delta times are counted in fractions of a SMPTE frame
    Smpte(SmpteHeader),
}

impl Timing {
    /// Decode a time division word.
    ///
    /// When bit 15 is clear, bits 14 thru 0 are the ticks per quarter note.
    /// When set, bits 14 thru 8 hold one of -24, -25, -29 or -30 as a two's
    /// complement byte, and bits 7 thru 0 the ticks per frame.
    pub const fn from_division(division: u16) -> Result<Self, SmpteError> {
        let [hi, lo] = division.to_be_bytes();
        if hi >> 7 == 0 {
            return Ok(Self::TicksPerQuarterNote(division));
        }
        let fps = match hi as i8 {
            -24 => SmpteFps::TwentyFour,
            -25 => SmpteFps::TwentyFive,
            -29 => SmpteFps::TwentyNine,
            -30 => SmpteFps::Thirty,
            other => return Err(SmpteError::HeaderFrameTime(other)),
        };
        Ok(Self::Smpte(SmpteHeader {
            fps,
            ticks_per_frame: lo,
        }))
    }

    /// Returns Some if the midi timing is defined
    /// as ticks per quarter note
    pub const fn ticks_per_quarter_note(&self) -> Option<u16> {
        match self {
            Self::TicksPerQuarterNote(t) => Some(*t),
            _ => None,
        }
    }
}

/// A representation of the `smpte` timing for a MIDI file
#[derive(Debug, Clone, PartialEq, Eq, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SmpteHeader {
    pub(crate) fps: SmpteFps,
    pub(crate) ticks_per_frame: u8,
}

impl SmpteHeader {
    /// Returns the frames per second
    pub const fn fps(&self) -> SmpteFps {
        self.fps
    }

    /// Returns the ticks per frame
    pub const fn ticks_per_frame(&self) -> u8 {
        self.ticks_per_frame
    }
}

#[test]
fn ticks_per_quarter_note_division() {
    use pretty_assertions::assert_eq;
    assert_eq!(
        Timing::from_division(96),
        Ok(Timing::TicksPerQuarterNote(96))
    );
    assert_eq!(
        Timing::from_division(0x01E0).unwrap().ticks_per_quarter_note(),
        Some(480)
    );
}

#[test]
fn smpte_division() {
    use pretty_assertions::assert_eq;
    // -25 fps, 40 ticks per frame
    let Timing::Smpte(smpte) = Timing::from_division(0xE728).unwrap() else {
        panic!("expected smpte timing");
    };
    assert_eq!(smpte.fps(), SmpteFps::TwentyFive);
    assert_eq!(smpte.ticks_per_frame(), 40);
    assert_eq!(smpte.fps().as_division(), 25);

    assert_eq!(
        Timing::from_division(0xE350).unwrap(),
        Timing::Smpte(SmpteHeader {
            fps: SmpteFps::TwentyNine,
            ticks_per_frame: 80
        })
    );
    assert_eq!(
        Timing::from_division(0xE028),
        Err(SmpteError::HeaderFrameTime(-32))
    );
}
