use crate::UMicros;

#[doc = r#"
The payload of a set tempo meta event (`FF 51 03 tt tt tt`).

The three bytes are a big-endian count of microseconds per quarter note.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tempo(u32);

impl Tempo {
    /// Create a tempo from microseconds per quarter note
    pub const fn new(micros_per_quarter_note: u32) -> Self {
        Self(micros_per_quarter_note)
    }

    /// Read the 24-bit big-endian payload
    pub const fn from_be_bytes(bytes: [u8; 3]) -> Self {
        Self(((bytes[0] as u32) << 16) | ((bytes[1] as u32) << 8) | bytes[2] as u32)
    }

    /// Microseconds per quarter note
    pub const fn micros_per_quarter_note(&self) -> u32 {
        self.0
    }

    /// The length of a quarter note
    pub const fn quarter_note(&self) -> UMicros {
        UMicros::new(self.0 as u64)
    }

    /// Quarter notes per minute. Infinite for a tempo of zero.
    pub fn beats_per_minute(&self) -> f64 {
        60_000_000. / self.0 as f64
    }
}

#[test]
fn tempo_from_bytes() {
    use pretty_assertions::assert_eq;
    let tempo = Tempo::from_be_bytes([0x07, 0xA1, 0x20]);
    assert_eq!(tempo.micros_per_quarter_note(), 500_000);
    assert_eq!(tempo.beats_per_minute(), 120.);
    assert_eq!(tempo.quarter_note().as_secs_f64(), 0.5);

    assert_eq!(Tempo::from_be_bytes([0xFF, 0xFF, 0xFF]), Tempo::new(0x00FF_FFFF));
}
