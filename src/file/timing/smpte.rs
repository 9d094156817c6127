#![doc = r#"
SMPTE frame rates

A MIDI file can measure time in two ways:

1. **Musical Time**: ticks per quarter note, scaled by the current tempo
2. **Absolute Time**: ticks per SMPTE frame, independent of tempo

The second is used when a file must line up with video or film. Both the
header division and the SMPTE offset meta event name one of four frame
rates.
"#]

/// The possible FPS (Frames Per Second) for MIDI tracks and files
///
/// - 24 fps: film
/// - 25 fps: PAL/SECAM television
/// - 29.97 fps: NTSC color television (drop-frame timecode)
/// - 30 fps: NTSC black & white, some digital video formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SmpteFps {
    /// 24 frames per second
    TwentyFour,
    /// 25 frames per second
    TwentyFive,
    /// 29.97 frames per second (30000/1001), drop frame
    TwentyNine,
    /// 30 frames per second
    Thirty,
}

impl SmpteFps {
    /// The nominal frame rate used in division arithmetic.
    ///
    /// Drop-frame 29.97 fps returns 30 here.
    pub const fn as_division(&self) -> u8 {
        match self {
            Self::TwentyFour => 24,
            Self::TwentyFive => 25,
            Self::TwentyNine => 30,
            Self::Thirty => 30,
        }
    }
    /// The precise frame rate, including the fractional drop-frame rate.
    pub const fn as_f64(&self) -> f64 {
        match self {
            Self::TwentyFour => 24.,
            Self::TwentyFive => 25.,
            Self::TwentyNine => DROP_FRAME,
            Self::Thirty => 30.,
        }
    }
}

/// 29.97002997... fps
const DROP_FRAME: f64 = 30_000. / 1001.;
