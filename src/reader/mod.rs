#![doc = r#"
Contains the [`Reader`], a cursor over the raw bytes of a MIDI file.

Every read is bounds checked: a read that would run past the end of the
buffer fails with [`ReaderErrorKind::OutOfBounds`] and leaves the cursor
where it was. All multi-byte integers are big-endian.

Besides the cursor itself, the reader keeps a count of the bytes consumed
so far. [`Reader::rewind`] moves both back, so after decoding a track the
count can be compared against the length declared by its chunk.
"#]

mod error;
pub use error::*;

mod chunk;
pub use chunk::*;

use alloc::string::String;

#[cfg(test)]
use alloc::vec::Vec;

/// A cursor over an immutable byte slice.
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    data: &'a [u8],
    position: usize,
    base: usize,
    consumed: usize,
}

impl<'a> Reader<'a> {
    /// Create a reader positioned at the start of `data`
    pub const fn from_byte_slice(data: &'a [u8]) -> Self {
        Self::with_offset(data, 0)
    }

    /// Create a reader over `data`, which begins `base` bytes into some larger buffer.
    ///
    /// Only affects [`Reader::buffer_position`], and thereby the positions
    /// reported by errors.
    pub const fn with_offset(data: &'a [u8], base: usize) -> Self {
        Self {
            data,
            position: 0,
            base,
            consumed: 0,
        }
    }

    /// True once every byte has been read
    #[inline]
    pub const fn is_at_end(&self) -> bool {
        self.position >= self.data.len()
    }

    /// The absolute position of the cursor
    #[inline]
    pub const fn buffer_position(&self) -> usize {
        self.base + self.position
    }

    /// Bytes left to read
    #[inline]
    pub const fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.position)
    }

    /// The number of bytes consumed so far, less any rewound bytes
    #[inline]
    pub const fn bytes_consumed(&self) -> usize {
        self.consumed
    }

    fn advance(&mut self, amount: usize) {
        self.position += amount;
        self.consumed += amount;
    }

    /// Move the cursor back by `amount` bytes.
    ///
    /// The consumed byte count is decremented by the same amount.
    pub fn rewind(&mut self, amount: usize) -> ReadResult<()> {
        if amount > self.position {
            return Err(ReaderError::oob(self.buffer_position()));
        }
        self.position -= amount;
        self.consumed = self.consumed.saturating_sub(amount);
        Ok(())
    }

    /// Read the next `len` bytes
    pub fn read_bytes(&mut self, len: usize) -> ReadResult<&'a [u8]> {
        let slice = self.peek_bytes(len)?;
        self.advance(len);
        Ok(slice)
    }

    /// The next `len` bytes, without moving the cursor
    pub fn peek_bytes(&self, len: usize) -> ReadResult<&'a [u8]> {
        self.position
            .checked_add(len)
            .and_then(|end| self.data.get(self.position..end))
            .ok_or_else(|| ReaderError::oob(self.buffer_position()))
    }

    /// Read the next `N` bytes into an array
    pub fn read_exact_size<const N: usize>(&mut self) -> ReadResult<[u8; N]> {
        let bytes = self.read_bytes(N)?;
        let mut out = [0; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    /// Read one unsigned byte
    pub fn read_u8(&mut self) -> ReadResult<u8> {
        let [byte] = self.read_exact_size::<1>()?;
        Ok(byte)
    }

    /// Read one signed byte
    pub fn read_i8(&mut self) -> ReadResult<i8> {
        self.read_exact_size().map(i8::from_be_bytes)
    }

    /// Read a big-endian `u16`
    pub fn read_u16(&mut self) -> ReadResult<u16> {
        self.read_exact_size().map(u16::from_be_bytes)
    }

    /// Read a big-endian `i16`
    pub fn read_i16(&mut self) -> ReadResult<i16> {
        self.read_exact_size().map(i16::from_be_bytes)
    }

    /// Read a big-endian `u32`
    pub fn read_u32(&mut self) -> ReadResult<u32> {
        self.read_exact_size().map(u32::from_be_bytes)
    }

    /// Read a big-endian `i32`
    pub fn read_i32(&mut self) -> ReadResult<i32> {
        self.read_exact_size().map(i32::from_be_bytes)
    }

    /// Read `len` bytes as a string, mapping each byte to the `char` with the same code.
    ///
    /// MIDI text is not UTF-8: the byte `0xE9` becomes `'é'`, never a decoding error.
    pub fn read_ascii_string(&mut self, len: usize) -> ReadResult<String> {
        self.read_bytes(len).map(latin1_to_string)
    }

    /// Read a variable length quantity.
    ///
    /// Each byte contributes its low seven bits, most significant group first.
    /// The first byte with a clear high bit ends the quantity. There is no
    /// limit on the number of bytes; bits shifted past the 32nd are dropped.
    pub fn read_vlq(&mut self) -> ReadResult<u32> {
        let mut value: u32 = 0;
        loop {
            let byte = self.read_u8()?;
            value = (value << 7) | (byte & 0x7F) as u32;
            if byte & 0x80 == 0 {
                return Ok(value);
            }
        }
    }

    /// Read a chunk: a four character tag, a `u32` length, then that many bytes.
    pub fn read_chunk(&mut self) -> ReadResult<Chunk<'a>> {
        let tag = self.read_ascii_string(4)?;
        let declared_length = self.read_u32()?;
        let offset = self.buffer_position();
        let payload = self.read_bytes(declared_length as usize)?;
        Ok(Chunk::new(tag, declared_length, payload, offset))
    }
}

pub(crate) fn latin1_to_string(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}

#[cfg(test)]
fn encode_vlq(mut value: u32) -> Vec<u8> {
    let mut out = alloc::vec![(value & 0x7F) as u8];
    value >>= 7;
    while value > 0 {
        out.push((value & 0x7F) as u8 | 0x80);
        value >>= 7;
    }
    out.reverse();
    out
}

#[test]
fn read_vlq_known_values() {
    use pretty_assertions::assert_eq;
    let cases: [(&[u8], u32); 6] = [
        (&[0x00], 0),
        (&[0x40], 0x40),
        (&[0x7F], 0x7F),
        (&[0x81, 0x00], 128),
        (&[0xC0, 0x00], 0x2000),
        (&[0xFF, 0xFF, 0xFF, 0x7F], 0x0FFF_FFFF),
    ];
    for (bytes, expected) in cases {
        let mut reader = Reader::from_byte_slice(bytes);
        assert_eq!(reader.read_vlq().unwrap(), expected);
        assert!(reader.is_at_end());
    }
}

#[test]
fn read_vlq_agrees_with_encoding() {
    use pretty_assertions::assert_eq;
    let values = [
        0,
        1,
        127,
        128,
        8_191,
        16_383,
        16_384,
        500_000,
        2_097_151,
        2_097_152,
        0x0FFF_FFFE,
        0x0FFF_FFFF,
    ];
    for value in values {
        let bytes = encode_vlq(value);
        let mut reader = Reader::from_byte_slice(&bytes);
        assert_eq!(reader.read_vlq().unwrap(), value);
        assert_eq!(reader.bytes_consumed(), bytes.len());
    }
}

#[test]
fn read_vlq_stops_at_last_byte() {
    use pretty_assertions::assert_eq;
    let mut reader = Reader::from_byte_slice(&[0x81, 0x00, 0x05]);
    assert_eq!(reader.read_vlq().unwrap(), 128);
    assert_eq!(reader.read_u8().unwrap(), 5);
}

#[test]
fn read_vlq_without_terminator_is_out_of_bounds() {
    let mut reader = Reader::from_byte_slice(&[0x81, 0x80]);
    assert!(reader.read_vlq().unwrap_err().is_out_of_bounds());
}

#[test]
fn read_vlq_keeps_low_bits_when_too_long() {
    use pretty_assertions::assert_eq;
    // 35 significant bits, the top three are shifted out
    let mut reader = Reader::from_byte_slice(&[0xFF, 0xFF, 0xFF, 0xFF, 0x7F]);
    assert_eq!(reader.read_vlq().unwrap(), u32::MAX);
}

#[test]
fn read_fixed_width_big_endian() {
    use pretty_assertions::assert_eq;
    let bytes = [
        0xFF, 0x80, 0x12, 0x34, 0xFF, 0xFE, 0x00, 0x07, 0xA1, 0x20, 0xFF, 0xFF, 0xFF, 0xFF,
    ];
    let mut reader = Reader::from_byte_slice(&bytes);
    assert_eq!(reader.read_u8().unwrap(), 0xFF);
    assert_eq!(reader.read_i8().unwrap(), -128);
    assert_eq!(reader.read_u16().unwrap(), 0x1234);
    assert_eq!(reader.read_i16().unwrap(), -2);
    assert_eq!(reader.read_u32().unwrap(), 500_000);
    assert_eq!(reader.read_i32().unwrap(), -1);
    assert!(reader.is_at_end());
    assert_eq!(reader.bytes_consumed(), bytes.len());
}

#[test]
fn failed_read_does_not_move_cursor() {
    use pretty_assertions::assert_eq;
    let mut reader = Reader::with_offset(&[0x00, 0x01, 0x02], 10);
    reader.read_u8().unwrap();
    let err = reader.read_u32().unwrap_err();
    assert!(err.is_out_of_bounds());
    assert_eq!(err.position(), 11);
    assert_eq!(reader.read_u16().unwrap(), 0x0102);
    assert!(reader.read_bytes(1).unwrap_err().is_out_of_bounds());
}

#[test]
fn peek_does_not_consume() {
    use pretty_assertions::assert_eq;
    let reader = Reader::from_byte_slice(b"MThd");
    assert_eq!(reader.peek_bytes(4).unwrap(), b"MThd");
    assert_eq!(reader.bytes_consumed(), 0);
    assert!(reader.peek_bytes(5).unwrap_err().is_out_of_bounds());
}

#[test]
fn rewind_moves_counter_with_cursor() {
    use pretty_assertions::assert_eq;
    let mut reader = Reader::from_byte_slice(&[0x3C, 0x40]);
    assert_eq!(reader.read_u8().unwrap(), 0x3C);
    reader.rewind(1).unwrap();
    assert_eq!(reader.bytes_consumed(), 0);
    assert_eq!(reader.read_bytes(2).unwrap(), &[0x3C, 0x40]);
    assert_eq!(reader.bytes_consumed(), 2);
    assert!(reader.rewind(3).unwrap_err().is_out_of_bounds());
}

#[test]
fn read_ascii_string_maps_bytes_to_chars() {
    use pretty_assertions::assert_eq;
    let mut reader = Reader::from_byte_slice(&[b'C', b'a', b'f', 0xE9]);
    assert_eq!(reader.read_ascii_string(4).unwrap(), "Café");
}

#[test]
fn read_chunk_frames_payload() {
    use pretty_assertions::assert_eq;
    let bytes = [b'M', b'T', b'r', b'k', 0, 0, 0, 2, 0xAB, 0xCD, 0xEF];
    let mut reader = Reader::from_byte_slice(&bytes);
    let chunk = reader.read_chunk().unwrap();
    assert_eq!(chunk.tag(), "MTrk");
    assert_eq!(chunk.declared_length(), 2);
    assert_eq!(chunk.payload(), &[0xAB, 0xCD]);
    assert_eq!(chunk.reader().buffer_position(), 8);
    assert_eq!(reader.remaining(), 1);
}

#[test]
fn read_chunk_longer_than_buffer_is_out_of_bounds() {
    let bytes = [b'M', b'T', b'r', b'k', 0, 0, 0, 9, 0x00];
    let mut reader = Reader::from_byte_slice(&bytes);
    assert!(reader.read_chunk().unwrap_err().is_out_of_bounds());
}
