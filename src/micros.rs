/// Unsigned Microseconds
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UMicros(u64);

impl UMicros {
    /// Creates a new instance of microseconds
    #[inline]
    pub const fn new(microseconds: u64) -> Self {
        Self(microseconds)
    }

    /// Returns the microseconds as a u64
    #[inline]
    pub const fn us(&self) -> u64 {
        self.0
    }

    /// Returns seconds
    #[inline]
    pub const fn as_secs_f64(&self) -> f64 {
        self.0 as f64 / 1_000_000.
    }
}

#[test]
fn micros_conversions() {
    use pretty_assertions::assert_eq;
    assert_eq!(UMicros::default(), UMicros::new(0));
    assert_eq!(UMicros::new(1_500_000).us(), 1_500_000);
    assert_eq!(UMicros::new(1_500_000).as_secs_f64(), 1.5);
}
