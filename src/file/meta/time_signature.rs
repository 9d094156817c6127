/// The payload of a time signature meta event (`FF 58 04 nn dd cc bb`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeSignature {
    /// `nn`: the numerator
    pub nn: u8,
    /// `dd`: the denominator as a negative power of two, `3` means eighth notes
    pub dd: u8,
    /// `cc`: MIDI clocks per metronome click
    pub cc: u8,
    /// `bb`: notated 32nd notes per MIDI quarter note (24 MIDI clocks)
    pub bb: u8,
}

impl TimeSignature {
    /// The numerator
    pub const fn numerator(&self) -> u8 {
        self.nn
    }

    /// The denominator, `2^dd`. `None` if it does not fit a `u32`.
    pub const fn denominator(&self) -> Option<u32> {
        1u32.checked_shl(self.dd as u32)
    }
}

impl From<[u8; 4]> for TimeSignature {
    fn from([nn, dd, cc, bb]: [u8; 4]) -> Self {
        Self { nn, dd, cc, bb }
    }
}

#[test]
fn common_time() {
    use pretty_assertions::assert_eq;
    let sig = TimeSignature::from([4, 2, 24, 8]);
    assert_eq!(sig.numerator(), 4);
    assert_eq!(sig.denominator(), Some(4));
    assert_eq!(sig.cc, 24);
    assert_eq!(sig.bb, 8);

    assert_eq!(TimeSignature::from([4, 40, 24, 8]).denominator(), None);
}
