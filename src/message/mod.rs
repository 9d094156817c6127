#![doc = r#"
The three families of events found in a track

- [`channel`]: channel voice messages (`0x80..=0xEF`), subject to running status
- [`system_exclusive`]: system exclusive messages and escape sequences (`0xF0`, `0xF7`)
- meta events (`0xFF`) live in [`file::meta`](crate::file::meta), since they only exist in files
"#]

pub mod channel;

pub mod system_exclusive;
