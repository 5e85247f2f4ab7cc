//! Fixed-size record encoding.
//!
//! Every record has a constant encoded size and a single field order. The
//! length check happens once in [`WireRecord::decode_buf`], so field decoders
//! never see a short buffer and a failed decode never yields a partial record.

use std::io::{Read, Write};

use bytes::{Buf, BufMut};

use crate::error::ProtocolError;

/// A record with a fixed-size binary layout.
pub trait WireRecord: Sized {
    /// Encoded size in bytes.
    const SIZE: usize;

    /// Human-readable record name used in errors and logs.
    const NAME: &'static str;

    /// Append the record's fields to `buf` in wire order.
    fn encode_fields<B: BufMut>(&self, buf: &mut B);

    /// Read the record's fields from `buf` in wire order.
    ///
    /// Only called when at least [`Self::SIZE`] bytes remain.
    fn decode_fields<B: Buf>(buf: &mut B) -> Self;

    /// Encode the record to a new byte vector.
    fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(Self::SIZE);
        self.encode_fields(&mut buf);
        buf
    }

    /// Decode a record from the start of `data`.
    ///
    /// Bytes past [`Self::SIZE`] are left untouched.
    fn decode(data: &[u8]) -> Result<Self, ProtocolError> {
        let mut buf = data;
        Self::decode_buf(&mut buf)
    }

    /// Decode a record from a buffer, advancing it past the record.
    fn decode_buf<B: Buf>(buf: &mut B) -> Result<Self, ProtocolError> {
        let actual = buf.remaining();
        if actual < Self::SIZE {
            log::debug!(
                "cannot decode {}: {} of {} bytes available",
                Self::NAME,
                actual,
                Self::SIZE
            );
            return Err(ProtocolError::Truncated {
                record: Self::NAME,
                expected: Self::SIZE,
                actual,
            });
        }
        Ok(Self::decode_fields(buf))
    }

    /// Write the encoded record to `writer`.
    fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), ProtocolError> {
        writer.write_all(&self.encode())?;
        Ok(())
    }

    /// Read exactly one record from `reader`.
    ///
    /// A reader that ends early yields [`ProtocolError::Truncated`] with the
    /// number of bytes it did produce.
    fn read_from<R: Read>(reader: &mut R) -> Result<Self, ProtocolError> {
        let mut data = Vec::with_capacity(Self::SIZE);
        reader.take(Self::SIZE as u64).read_to_end(&mut data)?;
        Self::decode(&data)
    }
}
