/// A pitch bend amount, stored as the 14-bit value found in the file.
///
/// `0x2000` (8192) is the center, meaning no bend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PitchBend(u16);

impl PitchBend {
    /// Full bend downwards
    pub const MIN: Self = Self(0);
    /// No bend
    pub const CENTER: Self = Self(0x2000);
    /// Full bend upwards
    pub const MAX: Self = Self(0x3FFF);

    /// Combine the least and most significant data bytes, in wire order.
    ///
    /// Both bytes are expected to be seven bit data bytes. They are combined
    /// as found, so a malformed byte shows up as a value above [`PitchBend::MAX`].
    pub const fn from_data_bytes(lsb: u8, msb: u8) -> Self {
        Self(((msb as u16) << 7) | lsb as u16)
    }

    /// The raw value, `0..=16383` for well formed data
    pub const fn raw(&self) -> u16 {
        self.0
    }

    /// The bend normalized around the center, in `-1.0..=0.99988`
    pub fn value(&self) -> f64 {
        let center = Self::CENTER.0 as f64;
        (self.0 as f64 - center) / center
    }
}

impl Default for PitchBend {
    fn default() -> Self {
        Self::CENTER
    }
}

#[test]
fn pitch_bend_normalization() {
    use pretty_assertions::assert_eq;

    let center = PitchBend::from_data_bytes(0, 64);
    assert_eq!(center.raw(), 8192);
    assert_eq!(center.value(), 0.0);

    let down = PitchBend::from_data_bytes(0, 0);
    assert_eq!(down, PitchBend::MIN);
    assert_eq!(down.value(), -1.0);

    let up = PitchBend::from_data_bytes(127, 127);
    assert_eq!(up, PitchBend::MAX);
    assert!((up.value() - 0.99988).abs() < 1e-5);
}

#[test]
fn lsb_comes_first() {
    use pretty_assertions::assert_eq;
    assert_eq!(PitchBend::from_data_bytes(1, 0).raw(), 1);
    assert_eq!(PitchBend::from_data_bytes(0, 1).raw(), 128);
}
