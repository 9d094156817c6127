/// The payload of a key signature meta event (`FF 59 02 sf mi`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeySignature {
    /// `sf`: sharps (positive) or flats (negative), as a two's complement byte
    pub sf: u8,
    /// `mi`: `0` for a major key, `1` for a minor key
    pub mi: u8,
}

impl KeySignature {
    /// Number of sharps if positive, flats if negative. `0` is the key of C.
    pub const fn sharps_flats(&self) -> i8 {
        self.sf as i8
    }

    /// True for a minor key
    pub const fn is_minor(&self) -> bool {
        self.mi == 1
    }
}

impl From<[u8; 2]> for KeySignature {
    fn from([sf, mi]: [u8; 2]) -> Self {
        Self { sf, mi }
    }
}

#[test]
fn sharps_and_flats() {
    use pretty_assertions::assert_eq;
    let d_major = KeySignature::from([0x02, 0x00]);
    assert_eq!(d_major.sharps_flats(), 2);
    assert!(!d_major.is_minor());

    let f_minor = KeySignature::from([0xFC, 0x01]);
    assert_eq!(f_minor.sharps_flats(), -4);
    assert!(f_minor.is_minor());
}
