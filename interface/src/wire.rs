//! Little-endian wire primitives for SMDAO instruction payloads.
//!
//! Layout conventions, binding with the deployed program:
//!
//!   text      length-prefixed: u32 LE byte length, then raw UTF-8 bytes
//!             (no terminator, no padding; empty text is a zero prefix)
//!   [text]    count-prefixed: u32 LE element count, then each element in
//!             order with the text encoding
//!   u32/u64   little-endian at natural width
//!   selector  single unsigned byte

use crate::error::EncodingError;

// ---------------------------------------------------------------------------
// Writers
// ---------------------------------------------------------------------------

/// Append a `u32` in little-endian byte order.
pub fn append_u32(buf: &mut Vec<u8>, value: u32) {
    buf.extend_from_slice(&value.to_le_bytes());
}

/// Append a `u64` in little-endian byte order.
pub fn append_u64(buf: &mut Vec<u8>, value: u64) {
    buf.extend_from_slice(&value.to_le_bytes());
}

/// Append a length-prefixed text field.
pub fn append_str(buf: &mut Vec<u8>, value: &str) -> Result<(), EncodingError> {
    let len = u32::try_from(value.len())
        .map_err(|_| EncodingError::TextTooLong { len: value.len() })?;
    append_u32(buf, len);
    buf.extend_from_slice(value.as_bytes());
    Ok(())
}

/// Append a count-prefixed list of text fields, in order.
pub fn append_str_list(buf: &mut Vec<u8>, values: &[String]) -> Result<(), EncodingError> {
    let count = u32::try_from(values.len())
        .map_err(|_| EncodingError::ListTooLong { len: values.len() })?;
    append_u32(buf, count);
    for value in values {
        append_str(buf, value)?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Reader
// ---------------------------------------------------------------------------

/// Bounds-checked reader over a payload byte slice.
///
/// Every read advances the cursor; [`Reader::finish`] rejects payloads with
/// bytes left over, so a decode consumes exactly the encoded fields.
#[derive(Debug)]
pub struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8], EncodingError> {
        let end = self
            .pos
            .checked_add(len)
            .filter(|end| *end <= self.data.len())
            .ok_or(EncodingError::UnexpectedEndOfData { offset: self.pos })?;
        let bytes = &self.data[self.pos..end];
        self.pos = end;
        Ok(bytes)
    }

    fn take_array<const N: usize>(&mut self) -> Result<[u8; N], EncodingError> {
        let offset = self.pos;
        self.take(N)?
            .try_into()
            .map_err(|_| EncodingError::UnexpectedEndOfData { offset })
    }

    pub fn read_u8(&mut self) -> Result<u8, EncodingError> {
        Ok(self.take(1)?[0])
    }

    pub fn read_u32(&mut self) -> Result<u32, EncodingError> {
        Ok(u32::from_le_bytes(self.take_array()?))
    }

    pub fn read_u64(&mut self) -> Result<u64, EncodingError> {
        Ok(u64::from_le_bytes(self.take_array()?))
    }

    /// Read a length-prefixed text field.
    pub fn read_str(&mut self) -> Result<String, EncodingError> {
        let len = self.read_u32()? as usize;
        let bytes = self.take(len)?;
        String::from_utf8(bytes.to_vec()).map_err(|_| EncodingError::InvalidUtf8)
    }

    /// Read a count-prefixed list of text fields.
    pub fn read_str_list(&mut self) -> Result<Vec<String>, EncodingError> {
        let count = self.read_u32()? as usize;
        // Each element costs at least its 4-byte length prefix, so a count
        // larger than the remaining bytes can never decode.
        if count > self.data.len().saturating_sub(self.pos) {
            return Err(EncodingError::UnexpectedEndOfData { offset: self.pos });
        }
        let mut values = Vec::with_capacity(count);
        for _ in 0..count {
            values.push(self.read_str()?);
        }
        Ok(values)
    }

    /// Assert the payload has been fully consumed.
    pub fn finish(self) -> Result<(), EncodingError> {
        let remaining = self.data.len().saturating_sub(self.pos);
        if remaining != 0 {
            return Err(EncodingError::TrailingData { remaining });
        }
        Ok(())
    }
}
