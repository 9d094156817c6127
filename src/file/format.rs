use num_enum::TryFromPrimitive;

#[doc = r#"
The format word of the header chunk, describing how the tracks relate

- Format 0: one track holding every channel
- Format 1: tracks played at the same time, sharing the first track's tempo map
- Format 2: independent single-track patterns
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u16)]
pub enum FormatType {
    /// Format 0
    SingleMultiChannel = 0,
    /// Format 1
    Simultaneous = 1,
    /// Format 2
    SequentiallyIndependent = 2,
}

#[test]
fn format_from_word() {
    use pretty_assertions::assert_eq;
    assert_eq!(FormatType::try_from(0).ok(), Some(FormatType::SingleMultiChannel));
    assert_eq!(FormatType::try_from(1).ok(), Some(FormatType::Simultaneous));
    assert_eq!(
        FormatType::try_from(2).ok(),
        Some(FormatType::SequentiallyIndependent)
    );
    assert!(FormatType::try_from(3).is_err());
}
